//! DOM bindings for the tracker: an `IntersectionObserver` as the visibility
//! source and `window.scrollTo` for jumps.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollToOptions,
};

use super::{Document, Section, Tracker, VisibilityEntry, VisibilitySource, ROOT_MARGIN, THRESHOLDS};

pub struct DomDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl DomDocument {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl Document for DomDocument {
    fn element_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .map(|element| element.get_bounding_client_rect().top())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct IntersectionSource {
    document: web_sys::Document,
    observer: IntersectionObserver,
    // Dropping the closure would invalidate the observer's callback.
    _callback: EntriesCallback,
}

impl IntersectionSource {
    pub fn new<F>(mut on_entries: F) -> Result<Self, JsValue>
    where
        F: FnMut(Vec<VisibilityEntry>) + 'static,
    {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let callback = EntriesCallback::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| VisibilityEntry {
                    id: entry.target().id(),
                    is_intersecting: entry.is_intersecting(),
                })
                .collect();
            on_entries(entries);
        });

        let init = IntersectionObserverInit::new();
        init.set_root_margin(ROOT_MARGIN);
        let thresholds = THRESHOLDS
            .iter()
            .map(|threshold| JsValue::from_f64(*threshold))
            .collect::<js_sys::Array>();
        init.set_threshold(&thresholds);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            document,
            observer,
            _callback: callback,
        })
    }
}

impl VisibilitySource for IntersectionSource {
    fn observe(&mut self, id: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(element) => {
                self.observer.observe(&element);
                true
            }
            None => false,
        }
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

/// Starts observing `sections` on behalf of `tracker`; the observer is
/// disconnected when the current reactive owner is cleaned up.
///
/// Meant to run from an effect, once the sections are in the DOM.
pub fn observe_sections(tracker: RwSignal<Tracker>, sections: Vec<Section>) {
    let source = IntersectionSource::new(move |entries| {
        tracker.try_update(|tracker| tracker.on_entries(&entries));
    });
    let mut source = match source {
        Ok(source) => source,
        Err(error) => {
            log::warn!("could not create an IntersectionObserver: {:?}", error);
            return;
        }
    };

    tracker.update(|tracker| {
        tracker.mount(&sections, &mut source);
    });

    let source = StoredValue::new_local(source);
    on_cleanup(move || {
        source.try_update_value(|source| {
            if tracker.try_update(|tracker| tracker.unmount(source)).is_none() {
                source.disconnect();
            }
        });
    });
}

/// Scrolls to `id` and highlights it, see [`Tracker::jump_to`].
pub fn jump_to(tracker: RwSignal<Tracker>, id: &str, offset: f64) {
    let Some(document) = DomDocument::new() else {
        return;
    };
    tracker.update(|tracker| {
        tracker.jump_to(id, offset, &document);
    });
}
