use serde::{Deserialize, Serialize};

use crate::theme::Theme;

const DEFAULT_BASE_URL: &str = "web1.lk";

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Routes {
    pub home: bool,
    pub about: bool,
    pub blog: bool,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            home: true,
            about: true,
            blog: true,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// Theme used until the visitor picks one.
    pub theme: Theme,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Host the site is served from, without the scheme.
    pub base_url: String,
    pub routes: Routes,
    pub style: Style,
    pub locale: String,
    /// Path of the social preview image endpoint.
    pub og_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: base_url(option_env!("SITE_BASE_URL")),
            routes: Routes::default(),
            style: Style::default(),
            locale: String::from("en-GB"),
            og_path: String::from("/og"),
        }
    }
}

/// The host is fixed at build time so the server and the hydrated client
/// agree on canonical URLs.
fn base_url(configured: Option<&str>) -> String {
    match configured.map(str::trim) {
        Some(host) if !host.is_empty() => String::from(host.trim_end_matches('/')),
        _ => String::from(DEFAULT_BASE_URL),
    }
}

impl SiteConfig {
    pub fn url(&self, path: &str) -> String {
        format!("https://{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_prefixes_the_scheme_and_host() {
        let config = SiteConfig {
            base_url: String::from("web1.lk"),
            ..SiteConfig::default()
        };
        assert_eq!("https://web1.lk", config.url(""));
        assert_eq!("https://web1.lk/blog", config.url("/blog"));
    }

    #[test]
    fn blank_build_time_host_falls_back() {
        assert_eq!("web1.lk", base_url(None));
        assert_eq!("web1.lk", base_url(Some("  ")));
        assert_eq!("staging.web1.lk", base_url(Some("staging.web1.lk/")));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"base_url": "example.org", "style": {"theme": "light"}}"#).unwrap();
        assert_eq!("example.org", config.base_url);
        assert_eq!(Theme::Light, config.style.theme);
        assert_eq!(Routes::default(), config.routes);
        assert_eq!("/og", config.og_path);
    }
}
