use std::collections::HashMap;

use leptos::prelude::*;

use crate::tracker::{Section, Tracker, TrackerOptions};

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use crate::tracker::{browser, JUMP_OFFSET};

        fn jump(tracker: RwSignal<Tracker>, id: &str) {
            browser::jump_to(tracker, id, JUMP_OFFSET);
        }

        fn toggle_mobile_contents() {
            let body = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body());
            if let Some(body) = body {
                if body.class_list().toggle("toc-mobile-expanded").is_err() {
                    log::warn!("could not toggle the table of contents");
                }
            }
        }
    } else {
        fn jump(_: RwSignal<Tracker>, _: &str) {}

        fn toggle_mobile_contents() {}
    }
}

/// Side navigation over the sections of a page, highlighting the one being
/// read.
///
/// Entries are labelled with their id unless `labels` names them.
#[component]
pub fn TableOfContents(
    structure: Vec<Section>,
    options: TrackerOptions,
    #[prop(optional)] labels: HashMap<String, String>,
) -> impl IntoView {
    if !options.display {
        return ().into_any();
    }

    let tracker = RwSignal::new(Tracker::new(options));

    #[cfg(feature = "hydrate")]
    {
        let sections = structure.clone();
        Effect::new(move |_| browser::observe_sections(tracker, sections.clone()));
    }

    let label = move |id: &str| labels.get(id).cloned().unwrap_or_else(|| String::from(id));
    let entry = move |id: String, class: &'static str, text: String| {
        let is_active = {
            let id = id.clone();
            move || tracker.with(|tracker| tracker.is_active(&id))
        };
        let href = format!("#{}", id);
        view! {
            <a
                href=href
                class=class
                class:active=is_active.clone()
                class:bold=is_active
                on:click=move |event| {
                    event.prevent_default();
                    jump(tracker, &id);
                }
            >
                {text}
            </a>
        }
    };

    let sections = structure
        .into_iter()
        .filter(|section| section.display)
        .map(|section| {
            let items = options.sub_items.then(|| {
                section
                    .items
                    .iter()
                    .map(|item| view! { <li>{entry(item.clone(), "toc-item", label(item))}</li> })
                    .collect_view()
            });
            let title = label(&section.id);
            view! {
                <li>
                    {entry(section.id, "toc-section", title)}
                    {items.map(|items| view! { <ul class="toc-items">{items}</ul> })}
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="toc" aria-label="Table of contents">
            <button type="button" class="toc-mobile-toggle" on:click=move |_| toggle_mobile_contents()>
                "Contents"
            </button>
            <ul class="toc-sections">{sections}</ul>
        </nav>
    }
    .into_any()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(structure: Vec<Section>, options: TrackerOptions) -> String {
        Owner::new().with(|| view! { <TableOfContents structure=structure options=options/> }.to_html())
    }

    fn structure() -> Vec<Section> {
        vec![
            Section::new("Introduction", true, Vec::new()),
            Section::new("Our Journey", true, vec![String::from("Company Founded")]),
            Section::new("Our Partners", false, vec![String::from("Tech Alliance")]),
        ]
    }

    #[test]
    fn hidden_table_of_contents_renders_nothing() {
        let html = render(
            structure(),
            TrackerOptions {
                display: false,
                sub_items: true,
            },
        );
        assert!(!html.contains("<nav"), "{}", html);
        assert!(!html.contains("toc"), "{}", html);
        assert!(!html.contains("Introduction"), "{}", html);
    }

    #[test]
    fn sections_only_without_sub_items() {
        let html = render(
            structure(),
            TrackerOptions {
                display: true,
                sub_items: false,
            },
        );
        assert!(html.contains("href=\"#Introduction\""), "{}", html);
        assert!(html.contains("href=\"#Our Journey\""), "{}", html);
        assert!(!html.contains("Our Partners"), "{}", html);
        assert!(!html.contains("toc-item"), "{}", html);
        assert!(!html.contains("Company Founded"), "{}", html);
    }

    #[test]
    fn sub_items_of_displayed_sections() {
        let html = render(
            structure(),
            TrackerOptions {
                display: true,
                sub_items: true,
            },
        );
        assert!(html.contains("href=\"#Company Founded\""), "{}", html);
        assert!(!html.contains("Tech Alliance"), "{}", html);
    }
}
