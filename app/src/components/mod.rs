use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::config::SiteConfig;
use crate::content::{Service, ABOUT, BLOG, HOME, PERSON, SOCIAL};

mod clock;
mod theme;
mod toc;

pub use clock::TimeDisplay;
pub use theme::ThemeSwitch;
pub use toc::TableOfContents;

/// Whether the header entry for `href` is highlighted on `pathname`. The
/// home entry needs an exact match, the others match their whole subtree.
pub fn is_selected(pathname: &str, href: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname == href || pathname.starts_with(&format!("{}/", href.trim_end_matches('/')))
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let pathname = use_location().pathname;
    let toggle_class = move |href: &'static str| {
        move || {
            if is_selected(&pathname.get(), href) {
                "toggle-button selected"
            } else {
                "toggle-button"
            }
        }
    };

    view! {
        <header class="site-header">
            <nav class="site-nav">
                {config.routes.home.then(|| view! {
                    <A href="/">
                        <span class=toggle_class("/")><Icon name="home"/></span>
                    </A>
                })}
                <span class="line-vertical"></span>
                {config.routes.about.then(|| view! {
                    <A href="/about">
                        <span class=toggle_class("/about")>
                            <Icon name="person"/>
                            <span class="s-flex-hide">{ABOUT.label}</span>
                        </span>
                    </A>
                })}
                {config.routes.blog.then(|| view! {
                    <A href="/blog">
                        <span class=toggle_class("/blog")>
                            <Icon name="book"/>
                            <span class="s-flex-hide">{BLOG.label}</span>
                        </span>
                    </A>
                })}
                <span class="line-vertical"></span>
                <ThemeSwitch default=config.style.theme/>
                <span class="s-flex-hide time">
                    {PERSON.location}" "<TimeDisplay utc_offset_minutes=PERSON.utc_offset_minutes/>
                </span>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="site-footer">
            <p>
                <a href="#top">
                    <small>"\u{2191} Copyright \u{24d2}"{year}" "{PERSON.name()}" / "{PERSON.role}" \u{2191}"</small>
                </a>
            </p>
            <SocialLinks/>
        </footer>
    }
}

#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <ul class="social-links">
            {SOCIAL
                .iter()
                .filter(|social| !social.link.is_empty())
                .map(|social| view! {
                    <li>
                        <a href=social.link title=social.name aria-label=social.name>
                            <Icon name=social.icon/>
                        </a>
                    </li>
                })
                .collect_view()}
        </ul>
    }
}

/// Icons are provided by the stylesheet, keyed by name.
#[component]
pub fn Icon(name: &'static str) -> impl IntoView {
    view! { <i class=format!("icon icon-{}", name) aria-hidden="true"></i> }
}

#[component]
pub fn Badge(#[prop(default = "neutral")] variant: &'static str, children: Children) -> impl IntoView {
    view! { <span class=format!("badge badge-{}", variant)>{children()}</span> }
}

/// Fades and slides its children into view, the animation itself lives in
/// the stylesheet.
#[component]
pub fn Reveal(
    #[prop(default = 8)] translate_y: u8,
    #[prop(default = 0.0)] delay: f32,
    children: Children,
) -> impl IntoView {
    let style = format!(
        "--reveal-translate-y: {}; --reveal-delay: {:.1}s",
        translate_y, delay
    );
    view! { <div class="reveal" style=style>{children()}</div> }
}

#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <a class="card service-card" href=service.link>
            <div class="service-icon">
                <Icon name=service.icon/>
            </div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <span class="learn-more">"Learn more" <Icon name="arrowRight"/></span>
        </a>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <main class="not-found">
            <h1>"Page not found."</h1>
            <A href="/">{HOME.label}</A>
        </main>
    }
}

/// Renders `children` only for routes enabled in the site configuration.
#[component]
pub fn RouteGuard(enabled: bool, children: Children) -> impl IntoView {
    if enabled {
        children().into_any()
    } else {
        view! { <NotFound/> }.into_any()
    }
}
