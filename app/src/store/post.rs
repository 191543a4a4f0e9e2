use serde::{Deserialize, Serialize};

use crate::store::FrontMatter;
use crate::tracker::Section;

/// Deepest heading level markdown knows about.
const MAX_LEVEL: usize = 6;

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Post {
    pub front_matter: FrontMatter,
    pub toc: Vec<Heading>,
    pub html_body: String,
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Heading {
    // Captured as plain text: any markdown formatting of the heading is lost.
    pub name: String,
    /// 1 to 6.
    pub level: u8,
    /// Section number, e.g. `[1, 2, 0, 0, 0, 0]` for 1.2.
    pub path: [u16; MAX_LEVEL],
    /// Element id of the heading in the rendered post.
    pub id: String,
}

impl std::fmt::Debug for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let section_number = self
            .path
            .iter()
            .take(self.level as usize)
            .map(|n| n.to_string())
            .collect::<Vec<String>>()
            .join(".");
        write!(f, "{} {}", section_number, self.name)
    }
}

impl Heading {
    #[cfg(feature = "ssr")]
    fn new(name: String, level: u8, path: [u16; MAX_LEVEL]) -> Self {
        let mut heading = Self {
            name,
            level,
            path,
            id: String::new(),
        };
        heading.id = slug::slugify(format!("{:?}", heading));
        heading
    }
}

impl Post {
    /// The outline of the post as table of contents sections: one section
    /// per top-level heading, deeper headings as its items.
    pub fn sections(&self) -> Vec<Section> {
        outline(&self.toc)
    }
}

fn outline(toc: &[Heading]) -> Vec<Section> {
    let Some(top) = toc.iter().map(|heading| heading.level).min() else {
        return Vec::new();
    };

    let mut sections: Vec<Section> = Vec::new();
    for heading in toc {
        if heading.level == top {
            sections.push(Section::new(heading.id.clone(), true, Vec::new()));
        } else if let Some(section) = sections.last_mut() {
            section.items.push(heading.id.clone());
        }
    }
    sections
}

#[cfg(feature = "ssr")]
pub use render::render;

#[cfg(feature = "ssr")]
mod render {
    use pulldown_cmark::{CowStr, Event, Tag, TagEnd};
    use std::path::Path;

    use super::{Heading, Post, MAX_LEVEL};
    use crate::store::{FrontMatter, Result};

    pub fn render(path: &Path) -> Result<Post> {
        let (front_matter, contents) = FrontMatter::read(path)?;

        let mut headings: Vec<Heading> = vec![];
        let mut heading_path = [0u16; MAX_LEVEL];
        let mut on_heading: Vec<Event> = vec![];
        let events: Vec<Event> = pulldown_cmark::Parser::new_ext(&contents, pulldown_cmark::Options::all())
            .inspect(|event| match event {
                Event::Start(Tag::Heading { .. }) => {
                    on_heading.clear();
                    on_heading.push(event.clone());
                }
                Event::End(TagEnd::Heading(level)) => {
                    let name = heading_events_to_heading_name(&on_heading);
                    on_heading.clear();
                    let depth = *level as usize - 1;
                    heading_path[depth] = heading_path[depth].saturating_add(1);
                    for deeper in heading_path[depth + 1..].iter_mut() {
                        *deeper = 0;
                    }
                    headings.push(Heading::new(name, *level as u8, heading_path));
                }
                _ => {
                    if !on_heading.is_empty() {
                        on_heading.push(event.clone());
                    }
                }
            })
            .collect();
        let events = add_section_ids(events, &headings);

        let mut html = String::with_capacity(contents.len() * 3 / 2);
        pulldown_cmark::html::push_html(&mut html, events.into_iter());

        log::debug!("ToC for \"{}\":", front_matter.metadata.title);
        for heading in headings.iter() {
            log::debug!("{:?}", heading);
        }

        Ok(Post {
            front_matter,
            toc: headings,
            html_body: html,
        })
    }

    fn heading_events_to_heading_name(events: &[Event]) -> String {
        events
            .iter()
            .skip(1)
            .filter_map(|event| {
                match event {
                    Event::Text(value) => Some(value),
                    Event::Code(value) => Some(value),
                    Event::Start(Tag::Emphasis)
                    | Event::End(TagEnd::Emphasis)
                    | Event::Start(Tag::Strong)
                    | Event::End(TagEnd::Strong)
                    | Event::Start(Tag::Strikethrough)
                    | Event::End(TagEnd::Strikethrough) => None,
                    _ => {
                        log::warn!("Unsupported event while collecting heading name: {event:?}");
                        None
                    }
                }
                .map(|cow| &**cow)
            })
            .collect::<String>()
    }

    /// Gives every heading its id and appends a `#` anchor pointing at it.
    fn add_section_ids<'input>(events: Vec<Event<'input>>, headings: &[Heading]) -> Vec<Event<'input>> {
        let mut events_with_ids = Vec::with_capacity(events.len() + headings.len() * 2);
        let mut ids = headings.iter().map(|heading| heading.id.as_str());
        let mut current = "";
        for each in events {
            match each {
                Event::Start(Tag::Heading {
                    level,
                    id: _,
                    classes,
                    attrs,
                }) => {
                    current = ids.next().unwrap_or_default();
                    events_with_ids.push(Event::Start(Tag::Heading {
                        level,
                        id: Some(CowStr::from(String::from(current))),
                        classes,
                        attrs,
                    }));
                }
                Event::End(TagEnd::Heading(_)) => {
                    events_with_ids.push(Event::Text(CowStr::from(" ")));
                    events_with_ids.push(Event::Html(CowStr::from(format!(
                        "<a href=\"#{}\"><span class=\"heading-anchor\">#</span></a>",
                        current,
                    ))));
                    events_with_ids.push(each);
                }
                _ => events_with_ids.push(each),
            }
        }

        events_with_ids
    }
}
