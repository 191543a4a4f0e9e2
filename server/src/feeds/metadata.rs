use app::config::SiteConfig;
use app::content::{BLOG, PERSON};

pub const BLOG_PATH: &str = "/blog";
pub const COPYRIGHT: &str = "All rights reserved";
pub const DESCRIPTION: &str = BLOG.description;

pub fn title() -> String {
    format!("{} :: {}", PERSON.name(), BLOG.title)
}

pub fn language(config: &SiteConfig) -> String {
    config.locale.to_lowercase()
}

/// The blog index, or one of its posts.
pub fn blog_link(config: &SiteConfig, slug: Option<&str>) -> String {
    match slug {
        Some(slug) => config.url(&format!("{}/{}", BLOG_PATH, slug)),
        None => config.url(BLOG_PATH),
    }
}

pub fn feed_link(config: &SiteConfig, url_path: &str) -> String {
    config.url(url_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_are_absolute() {
        let config = SiteConfig {
            base_url: String::from("web1.lk"),
            ..SiteConfig::default()
        };
        assert_eq!("https://web1.lk/blog", blog_link(&config, None));
        assert_eq!(
            "https://web1.lk/blog/pos-systems-comparison",
            blog_link(&config, Some("pos-systems-comparison"))
        );
        assert_eq!("https://web1.lk/blog/feed.rss", feed_link(&config, "/blog/feed.rss"));
        assert_eq!("en-gb", language(&config));
    }
}
