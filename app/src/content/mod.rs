//! Static content for the site.
//!
//! Everything here is `'static` and read-only: pages iterate over these
//! records to produce markup, and the about page derives its table of
//! contents from [`About::structure`].

mod data;

pub use data::{ABOUT, BLOG, HOME, NEWSLETTER, PERSON, SOCIAL};

use crate::tracker::{Section, TrackerOptions};

#[derive(Clone, Copy, Debug)]
pub struct Person {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    /// IANA name, only used for display.
    pub location: &'static str,
    /// Offset of `location` from UTC, the clock in the header uses it.
    pub utc_offset_minutes: i32,
    pub languages: &'static [&'static str],
}

impl Person {
    pub fn name(&self) -> String {
        format!("{}.{}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub link: &'static str,
}

impl SocialLink {
    pub fn is_mailto(&self) -> bool {
        self.link.starts_with("mailto:")
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Newsletter {
    pub display: bool,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub link: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct CaseStudy {
    pub title: &'static str,
    pub client: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    pub link: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Client {
    pub name: &'static str,
    pub logo: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Home {
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub headline: &'static str,
    pub subline: &'static str,
    pub cta: Link,
    pub services: &'static [Service],
    pub case_studies: &'static [CaseStudy],
    pub clients: &'static [Client],
    pub testimonials: &'static [Testimonial],
}

#[derive(Clone, Copy, Debug)]
pub struct Intro {
    pub display: bool,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub mission: &'static str,
    pub vision: &'static str,
    pub values: &'static [CoreValue],
}

#[derive(Clone, Copy, Debug)]
pub struct CoreValue {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Work {
    pub display: bool,
    pub title: &'static str,
    pub description: &'static str,
    pub milestones: &'static [Milestone],
}

#[derive(Clone, Copy, Debug)]
pub struct Institution {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Studies {
    pub display: bool,
    pub title: &'static str,
    pub institutions: &'static [Institution],
}

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Technical {
    pub display: bool,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub skills: &'static [Skill],
}

#[derive(Clone, Copy, Debug)]
pub struct Calendar {
    pub display: bool,
    pub link: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct About {
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub table_of_content: TrackerOptions,
    pub calendar: Calendar,
    pub intro: Intro,
    pub work: Work,
    pub studies: Studies,
    pub technical: Technical,
}

impl About {
    /// Sections of the about page in display order, as fed to the table of
    /// contents. Block titles double as the element ids of their headings.
    pub fn structure(&self) -> Vec<Section> {
        vec![
            Section::new(self.intro.title, self.intro.display, Vec::new()),
            Section::new(
                self.work.title,
                self.work.display,
                self.work.milestones.iter().map(|m| m.title.to_string()).collect(),
            ),
            Section::new(
                self.studies.title,
                self.studies.display,
                self.studies.institutions.iter().map(|i| i.name.to_string()).collect(),
            ),
            Section::new(
                self.technical.title,
                self.technical.display,
                self.technical.skills.iter().map(|s| s.title.to_string()).collect(),
            ),
        ]
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PostLink {
    pub title: &'static str,
    pub slug: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct BlogCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub posts: &'static [PostLink],
}

#[derive(Clone, Copy, Debug)]
pub struct Blog {
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub categories: &'static [BlogCategory],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_name_joins_with_a_dot() {
        assert_eq!("Web1.LK", PERSON.name());
    }

    #[test]
    fn about_structure_follows_block_order_and_flags() {
        let structure = ABOUT.structure();
        let ids: Vec<&str> = structure.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            vec!["Introduction", "Our Journey", "Our Partners", "Our Technology Expertise"],
            ids
        );
        assert!(structure[0].display);
        assert!(structure[0].items.is_empty());
        assert!(!structure[2].display);
        assert_eq!(ABOUT.technical.skills.len(), structure[3].items.len());
        assert_eq!("Frontend Architecture", structure[3].items[0]);
    }

    #[test]
    fn mailto_links_are_detected() {
        let email = SOCIAL.iter().find(|s| s.name == "Email").unwrap();
        assert!(email.is_mailto());
        assert!(!SOCIAL[0].is_mailto());
    }
}
