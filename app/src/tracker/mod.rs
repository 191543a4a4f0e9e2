//! Scroll-spy for tables of contents.
//!
//! The [`Tracker`] knows nothing about the DOM: elements are reached through
//! the [`Document`] and [`VisibilitySource`] traits so the same state machine
//! runs against the browser (see `browser`) and against fakes in tests.

#[cfg(feature = "hydrate")]
pub mod browser;

/// `rootMargin` of the observation band: sections count as entered 100px
/// before the top of the viewport, and only the top 70% of the viewport
/// counts.
pub const ROOT_MARGIN: &str = "-100px 0px -30% 0px";

/// Visible-area ratios at which visibility changes are reported.
pub const THRESHOLDS: [f64; 2] = [0.0, 0.25];

/// Offset used when jumping from a table of contents entry, in pixels.
pub const JUMP_OFFSET: f64 = 80.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub display: bool,
    pub items: Vec<String>,
}

impl Section {
    pub fn new(id: impl Into<String>, display: bool, items: Vec<String>) -> Self {
        Self {
            id: id.into(),
            display,
            items,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackerOptions {
    /// When false the tracker observes nothing and the table of contents is
    /// not rendered at all.
    pub display: bool,
    /// Also track the sub-identifiers of each section.
    pub sub_items: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityEntry {
    pub id: String,
    pub is_intersecting: bool,
}

impl VisibilityEntry {
    pub fn entered(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_intersecting: true,
        }
    }

    pub fn left(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_intersecting: false,
        }
    }
}

/// Geometry and scrolling of the page the sections live in.
pub trait Document {
    /// Top of the element bearing `id`, relative to the viewport.
    fn element_top(&self, id: &str) -> Option<f64>;

    fn scroll_y(&self) -> f64;

    fn smooth_scroll_to(&self, top: f64);
}

/// Something that reports when elements enter or leave the observation band.
pub trait VisibilitySource {
    /// Start observing the element bearing `id`, returns false if there is no
    /// such element.
    fn observe(&mut self, id: &str) -> bool;

    /// Stop observing every element.
    fn disconnect(&mut self);
}

#[derive(Clone, Debug, Default)]
pub struct Tracker {
    options: TrackerOptions,
    targets: Vec<String>,
    active: String,
}

impl Tracker {
    pub fn new(options: TrackerOptions) -> Self {
        Self {
            options,
            targets: Vec::new(),
            active: String::new(),
        }
    }

    pub fn options(&self) -> TrackerOptions {
        self.options
    }

    /// The highlighted identifier, empty until something got observed or
    /// jumped to.
    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        !self.active.is_empty() && self.active == id
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Registers every displayed section (and its sub-identifiers when
    /// enabled) with `source`. Identifiers without a matching element are
    /// skipped. The active identifier survives only if it is registered
    /// again.
    pub fn mount<S: VisibilitySource + ?Sized>(&mut self, sections: &[Section], source: &mut S) -> &[String] {
        self.targets.clear();
        if !self.options.display {
            self.active.clear();
            return &self.targets;
        }

        for section in sections.iter().filter(|section| section.display) {
            self.register(&section.id, source);
            if self.options.sub_items {
                for item in section.items.iter() {
                    self.register(item, source);
                }
            }
        }
        log::debug!("observing {} section(s): {:?}", self.targets.len(), self.targets);
        if !self.targets.contains(&self.active) {
            self.active.clear();
        }

        &self.targets
    }

    fn register<S: VisibilitySource + ?Sized>(&mut self, id: &str, source: &mut S) {
        if self.targets.iter().any(|target| target == id) {
            return;
        }
        if source.observe(id) {
            self.targets.push(String::from(id));
        } else {
            log::debug!("no element with id `{}', not observing it", id);
        }
    }

    /// Applies a batch of visibility changes in delivery order: the last
    /// intersecting entry wins.
    pub fn on_entries<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = &'a VisibilityEntry>,
    {
        for entry in entries {
            if entry.is_intersecting && self.targets.contains(&entry.id) {
                self.active.clone_from(&entry.id);
            }
        }
    }

    /// Smoothly scrolls to the element bearing `id` so that it sits `offset`
    /// pixels below the top of the viewport, and highlights it right away.
    ///
    /// Returns false and does nothing when the tracker is inert or there is
    /// no such element.
    pub fn jump_to<D: Document + ?Sized>(&mut self, id: &str, offset: f64, document: &D) -> bool {
        if !self.options.display {
            return false;
        }
        let Some(top) = document.element_top(id) else {
            return false;
        };

        document.smooth_scroll_to(top + document.scroll_y() - offset);
        self.active = String::from(id);
        true
    }

    pub fn unmount<S: VisibilitySource + ?Sized>(&mut self, source: &mut S) {
        source.disconnect();
        self.targets.clear();
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct FakeSource {
        pub present: Vec<String>,
        pub observed: Vec<String>,
        pub disconnected: bool,
    }

    impl FakeSource {
        pub fn with(ids: &[&str]) -> Self {
            Self {
                present: ids.iter().map(|id| id.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    impl VisibilitySource for FakeSource {
        fn observe(&mut self, id: &str) -> bool {
            if self.present.iter().any(|present| present == id) {
                self.observed.push(id.to_string());
                true
            } else {
                false
            }
        }

        fn disconnect(&mut self) {
            self.observed.clear();
            self.disconnected = true;
        }
    }

    pub struct FakeDocument {
        pub tops: HashMap<String, f64>,
        pub scroll_y: f64,
        pub scrolls: RefCell<Vec<f64>>,
    }

    impl FakeDocument {
        pub fn new(tops: &[(&str, f64)], scroll_y: f64) -> Self {
            Self {
                tops: tops.iter().map(|(id, top)| (id.to_string(), *top)).collect(),
                scroll_y,
                scrolls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Document for FakeDocument {
        fn element_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    fn sections(ids: &[&str]) -> Vec<Section> {
        ids.iter().map(|id| Section::new(*id, true, Vec::new())).collect()
    }

    const SHOWN: TrackerOptions = TrackerOptions {
        display: true,
        sub_items: false,
    };

    #[test]
    fn hidden_tracker_observes_nothing() {
        let mut source = FakeSource::with(&["intro", "work"]);
        let mut tracker = Tracker::new(TrackerOptions {
            display: false,
            sub_items: true,
        });

        assert!(tracker.mount(&sections(&["intro", "work"]), &mut source).is_empty());
        assert!(source.observed.is_empty());

        tracker.on_entries(&[VisibilityEntry::entered("work")]);
        assert_eq!("", tracker.active());

        let document = FakeDocument::new(&[("intro", 10.0)], 0.0);
        assert!(!tracker.jump_to("intro", JUMP_OFFSET, &document));
        assert!(document.scrolls.borrow().is_empty());
        assert_eq!("", tracker.active());
    }

    #[test]
    fn only_displayed_sections_are_observed() {
        let mut source = FakeSource::with(&["intro", "work", "studies"]);
        let mut tracker = Tracker::new(SHOWN);
        let structure = vec![
            Section::new("intro", true, Vec::new()),
            Section::new("work", false, Vec::new()),
            Section::new("studies", true, Vec::new()),
        ];

        assert_eq!(["intro", "studies"], tracker.mount(&structure, &mut source));
        assert_eq!(vec!["intro", "studies"], source.observed);
    }

    #[test]
    fn sub_items_follow_the_option() {
        let structure = vec![Section::new(
            "work",
            true,
            vec![String::from("2018"), String::from("2020")],
        )];

        let mut source = FakeSource::with(&["work", "2018", "2020"]);
        let mut tracker = Tracker::new(SHOWN);
        assert_eq!(["work"], tracker.mount(&structure, &mut source));

        let mut source = FakeSource::with(&["work", "2018", "2020"]);
        let mut tracker = Tracker::new(TrackerOptions {
            display: true,
            sub_items: true,
        });
        assert_eq!(["work", "2018", "2020"], tracker.mount(&structure, &mut source));

        tracker.on_entries(&[VisibilityEntry::entered("2020")]);
        assert_eq!("2020", tracker.active());
    }

    #[test]
    fn missing_elements_never_become_active() {
        let mut source = FakeSource::with(&["intro"]);
        let mut tracker = Tracker::new(SHOWN);

        assert_eq!(["intro"], tracker.mount(&sections(&["intro", "ghost"]), &mut source));

        tracker.on_entries(&[VisibilityEntry::entered("ghost")]);
        assert_eq!("", tracker.active());
    }

    #[test]
    fn last_intersecting_entry_of_a_batch_wins() {
        let mut source = FakeSource::with(&["a", "b", "c"]);
        let mut tracker = Tracker::new(SHOWN);
        tracker.mount(&sections(&["a", "b", "c"]), &mut source);

        tracker.on_entries(&[
            VisibilityEntry::entered("a"),
            VisibilityEntry::entered("c"),
            VisibilityEntry::left("b"),
        ]);
        assert_eq!("c", tracker.active());

        // leaving the band does not clear the highlight
        tracker.on_entries(&[VisibilityEntry::left("c")]);
        assert_eq!("c", tracker.active());

        tracker.on_entries(&[VisibilityEntry::entered("b"), VisibilityEntry::entered("a")]);
        assert_eq!("a", tracker.active());
        assert!(tracker.is_active("a"));
        assert!(!tracker.is_active("b"));
    }

    #[test]
    fn jump_to_unknown_element_is_a_no_op() {
        let mut source = FakeSource::with(&["intro"]);
        let mut tracker = Tracker::new(SHOWN);
        tracker.mount(&sections(&["intro"]), &mut source);
        tracker.on_entries(&[VisibilityEntry::entered("intro")]);

        let document = FakeDocument::new(&[("intro", 0.0)], 300.0);
        assert!(!tracker.jump_to("nowhere", JUMP_OFFSET, &document));
        assert_eq!("intro", tracker.active());
        assert!(document.scrolls.borrow().is_empty());
    }

    #[test]
    fn jump_to_scrolls_relative_to_the_current_position() {
        let mut source = FakeSource::with(&["intro", "work"]);
        let mut tracker = Tracker::new(SHOWN);
        tracker.mount(&sections(&["intro", "work"]), &mut source);

        let document = FakeDocument::new(&[("work", 420.0)], 1000.0);
        assert!(tracker.jump_to("work", JUMP_OFFSET, &document));
        assert_eq!(vec![1340.0], *document.scrolls.borrow());
        assert_eq!("work", tracker.active());
    }

    #[test]
    fn scroll_then_jump_scenario() {
        let mut source = FakeSource::with(&["intro", "work", "studies"]);
        let mut tracker = Tracker::new(SHOWN);
        tracker.mount(&sections(&["intro", "work", "studies"]), &mut source);
        assert_eq!("", tracker.active());

        tracker.on_entries(&[VisibilityEntry::entered("work")]);
        assert_eq!("work", tracker.active());

        tracker.on_entries(&[VisibilityEntry::entered("studies")]);
        assert_eq!("studies", tracker.active());

        let document = FakeDocument::new(&[("intro", -900.0), ("work", 0.0), ("studies", 500.0)], 1200.0);
        assert!(tracker.jump_to("intro", 80.0, &document));
        assert_eq!("intro", tracker.active());
        assert_eq!(vec![220.0], *document.scrolls.borrow());

        tracker.on_entries(&[VisibilityEntry::entered("work")]);
        assert_eq!("work", tracker.active());
    }

    #[test]
    fn remounting_drops_an_active_id_that_is_no_longer_registered() {
        let mut source = FakeSource::with(&["intro", "work"]);
        let mut tracker = Tracker::new(SHOWN);
        tracker.mount(&sections(&["intro", "work"]), &mut source);
        tracker.on_entries(&[VisibilityEntry::entered("work")]);
        assert_eq!("work", tracker.active());

        tracker.mount(&sections(&["intro"]), &mut source);
        assert_eq!(vec![String::from("intro")], tracker.targets());
        assert_eq!("", tracker.active());
    }

    #[test]
    fn remounting_keeps_an_active_id_that_is_still_registered() {
        let mut source = FakeSource::with(&["intro", "work"]);
        let mut tracker = Tracker::new(SHOWN);
        tracker.mount(&sections(&["intro", "work"]), &mut source);
        tracker.on_entries(&[VisibilityEntry::entered("intro")]);

        tracker.mount(&sections(&["intro"]), &mut source);
        assert_eq!("intro", tracker.active());
    }

    #[test]
    fn unmount_disconnects_and_forgets_everything() {
        let mut source = FakeSource::with(&["intro", "work"]);
        let mut tracker = Tracker::new(SHOWN);
        tracker.mount(&sections(&["intro", "work"]), &mut source);
        tracker.on_entries(&[VisibilityEntry::entered("work")]);

        tracker.unmount(&mut source);
        assert!(source.disconnected);
        assert!(source.observed.is_empty());
        assert!(tracker.targets().is_empty());
        assert_eq!("", tracker.active());

        // late callbacks from a torn down observer are ignored
        tracker.on_entries(&[VisibilityEntry::entered("work")]);
        assert_eq!("", tracker.active());
    }

    #[test]
    fn remount_replaces_the_registered_sections() {
        let mut source = FakeSource::with(&["intro", "work"]);
        let mut tracker = Tracker::new(SHOWN);
        tracker.mount(&sections(&["intro", "work"]), &mut source);
        tracker.unmount(&mut source);

        assert_eq!(["work"], tracker.mount(&sections(&["work"]), &mut source));
        tracker.on_entries(&[VisibilityEntry::entered("intro")]);
        assert_eq!("", tracker.active());
    }
}
