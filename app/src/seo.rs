//! Per-page metadata: title, description, social previews and JSON-LD.
//!
//! Everything here is a pure function of the content and the site
//! configuration.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::json;

use crate::config::SiteConfig;
use crate::content::{ABOUT, BLOG, HOME, PERSON, SOCIAL};
use crate::store::FrontMatter;

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const TWITTER_CARD: &str = "summary_large_image";

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// URL of the generated social preview image for `title`.
pub fn og_image(config: &SiteConfig, title: &str) -> String {
    format!(
        "{}?title={}",
        config.url(&config.og_path),
        encode_uri_component(title)
    )
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub url: String,
    pub og_image: String,
    pub structured_data: serde_json::Value,
}

impl PageMetadata {
    fn new(config: &SiteConfig, title: &str, description: &str, path: &str, structured_data: serde_json::Value) -> Self {
        Self {
            title: String::from(title),
            description: String::from(description),
            url: config.url(path),
            og_image: og_image(config, title),
            structured_data,
        }
    }

    /// The JSON-LD block, safe to embed in a `<script>` element.
    pub fn json_ld(&self) -> String {
        self.structured_data.to_string().replace("</", "<\\/")
    }
}

pub fn home_metadata(config: &SiteConfig) -> PageMetadata {
    let data = json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": PERSON.name(),
        "description": HOME.description,
        "url": config.url(""),
        "image": og_image(config, HOME.title),
        "logo": {
            "@type": "ImageObject",
            "url": config.url(PERSON.avatar),
        },
    });
    PageMetadata::new(config, HOME.title, HOME.description, "", data)
}

pub fn about_metadata(config: &SiteConfig) -> PageMetadata {
    let same_as: Vec<&str> = SOCIAL
        .iter()
        .filter(|social| !social.link.is_empty() && !social.is_mailto())
        .map(|social| social.link)
        .collect();
    let data = json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": PERSON.name(),
        "description": ABOUT.intro.paragraphs.join(" "),
        "url": config.url("/about"),
        "image": config.url(PERSON.avatar),
        "sameAs": same_as,
    });
    PageMetadata::new(config, ABOUT.title, ABOUT.description, "/about", data)
}

fn author(config: &SiteConfig) -> serde_json::Value {
    json!({
        "@type": "Person",
        "name": PERSON.name(),
        "image": {
            "@type": "ImageObject",
            "url": config.url(PERSON.avatar),
        },
    })
}

pub fn blog_metadata(config: &SiteConfig) -> PageMetadata {
    let data = json!({
        "@context": "https://schema.org",
        "@type": "Blog",
        "headline": BLOG.title,
        "description": BLOG.description,
        "url": config.url("/blog"),
        "image": og_image(config, BLOG.title),
        "author": author(config),
    });
    PageMetadata::new(config, BLOG.title, BLOG.description, "/blog", data)
}

pub fn post_metadata(config: &SiteConfig, front_matter: &FrontMatter) -> PageMetadata {
    let title = front_matter.metadata.title.as_str();
    let description = front_matter.metadata.summary.as_deref().unwrap_or(BLOG.description);
    let path = format!("/blog/{}", front_matter.slug);
    let image = match &front_matter.metadata.image {
        Some(image) => config.url(image),
        None => og_image(config, title),
    };
    let mut data = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": title,
        "description": description,
        "url": config.url(&path),
        "image": image,
        "author": author(config),
    });
    if let Some(date) = front_matter.metadata.published_at {
        data["datePublished"] = json!(date.format("%Y-%m-%d").to_string());
    }
    PageMetadata::new(config, title, description, &path, data)
}

/// Site-wide metadata placed by the root layout.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub og_locale: &'static str,
    pub robots: &'static str,
    pub manifest: &'static str,
    pub icons: &'static [Icon],
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Icon {
    pub rel: &'static str,
    pub href: &'static str,
    pub sizes: Option<&'static str>,
}

const ICONS: &[Icon] = &[
    Icon { rel: "icon", href: "/favicons/favicon-16x16.png", sizes: Some("16x16") },
    Icon { rel: "icon", href: "/favicons/favicon-32x32.png", sizes: Some("32x32") },
    Icon { rel: "icon", href: "/favicons/favicon-96x96.png", sizes: Some("96x96") },
    Icon { rel: "shortcut icon", href: "/favicons/favicon.ico", sizes: None },
    Icon { rel: "apple-touch-icon", href: "/favicons/apple-touch-icon.png", sizes: Some("180x180") },
    Icon { rel: "icon", href: "/favicons/android-chrome-192x192.png", sizes: Some("192x192") },
    Icon { rel: "icon", href: "/favicons/android-chrome-512x512.png", sizes: Some("512x512") },
];

pub fn site_metadata(config: &SiteConfig) -> SiteMetadata {
    SiteMetadata {
        title: String::from(HOME.title),
        description: String::from(HOME.description),
        url: config.url(""),
        site_name: PERSON.name(),
        og_locale: "en_US",
        robots: "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1",
        manifest: "/site.webmanifest",
        icons: ICONS,
    }
}

/// Puts `metadata` into the document head.
#[component]
pub fn PageHead(metadata: PageMetadata) -> impl IntoView {
    let PageMetadata {
        title,
        description,
        url,
        og_image,
        structured_data: _,
    } = metadata.clone();
    let json_ld = metadata.json_ld();

    view! {
        <Title text=title.clone()/>
        <Meta name="description" content=description.clone()/>
        <Meta property="og:title" content=title.clone()/>
        <Meta property="og:description" content=description.clone()/>
        <Meta property="og:type" content="website"/>
        <Meta property="og:url" content=url/>
        <Meta property="og:image" content=og_image.clone()/>
        <Meta property="og:image:alt" content=title.clone()/>
        <Meta name="twitter:card" content=TWITTER_CARD/>
        <Meta name="twitter:title" content=title/>
        <Meta name="twitter:description" content=description/>
        <Meta name="twitter:image" content=og_image/>
        <script type="application/ld+json" inner_html=json_ld></script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Metadata;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(
            "Industry%20Insights%20%26%20Updates",
            encode_uri_component("Industry Insights & Updates")
        );
        assert_eq!("a-b_c.d!e~f*g'h(i)", encode_uri_component("a-b_c.d!e~f*g'h(i)"));
        assert_eq!("%2F%3F%3D%23%2C", encode_uri_component("/?=#,"));
        assert_eq!("caf%C3%A9", encode_uri_component("café"));
    }

    #[test]
    fn og_image_points_at_the_preview_endpoint() {
        let config = SiteConfig::default();
        assert_eq!(
            "https://web1.lk/og?title=About%20us",
            og_image(&config, "About us")
        );
    }

    #[test]
    fn home_is_an_organization_with_a_logo() {
        let config = SiteConfig::default();
        let metadata = home_metadata(&config);
        assert_eq!(HOME.title, metadata.title);
        assert_eq!("https://web1.lk", metadata.url);
        assert_eq!("Organization", metadata.structured_data["@type"]);
        assert_eq!("Web1.LK", metadata.structured_data["name"]);
        assert_eq!(
            "https://web1.lk/images/avatar.jpg",
            metadata.structured_data["logo"]["url"]
        );
    }

    #[test]
    fn about_same_as_skips_mailto_links() {
        let metadata = about_metadata(&SiteConfig::default());
        let same_as = metadata.structured_data["sameAs"].as_array().unwrap();
        assert_eq!(3, same_as.len());
        assert!(same_as.iter().all(|link| !link.as_str().unwrap().starts_with("mailto:")));
        assert_eq!("https://web1.lk/about", metadata.url);
    }

    #[test]
    fn blog_has_an_author() {
        let metadata = blog_metadata(&SiteConfig::default());
        assert_eq!("Blog", metadata.structured_data["@type"]);
        assert_eq!(BLOG.title, metadata.structured_data["headline"]);
        assert_eq!("Person", metadata.structured_data["author"]["@type"]);
        assert_eq!(
            "https://web1.lk/og?title=Industry%20Insights%20%26%20Updates",
            metadata.og_image
        );
    }

    #[test]
    fn post_uses_its_summary_and_date() {
        let front_matter = FrontMatter {
            slug: String::from("scaling-saas-applications"),
            metadata: Metadata {
                title: String::from("Scaling SaaS"),
                published_at: chrono::NaiveDate::from_ymd_opt(2025, 2, 1),
                tags: vec![],
                summary: Some(String::from("Architecture decisions.")),
                image: None,
            },
        };
        let metadata = post_metadata(&SiteConfig::default(), &front_matter);
        assert_eq!("Architecture decisions.", metadata.description);
        assert_eq!("https://web1.lk/blog/scaling-saas-applications", metadata.url);
        assert_eq!("2025-02-01", metadata.structured_data["datePublished"]);
    }

    #[test]
    fn json_ld_cannot_close_its_script() {
        let mut metadata = blog_metadata(&SiteConfig::default());
        metadata.structured_data = json!({"headline": "</script><script>"});
        assert_eq!(r#"{"headline":"<\/script><script>"}"#, metadata.json_ld());
    }

    #[test]
    fn site_metadata_names_the_site_after_the_person() {
        let site = site_metadata(&SiteConfig::default());
        assert_eq!("Web1.LK", site.site_name);
        assert_eq!("en_US", site.og_locale);
        assert!(site.icons.iter().any(|icon| icon.rel == "apple-touch-icon"));
    }
}
