pub mod clock;
pub mod components;
pub mod config;
pub mod content;
#[cfg(feature = "ssr")]
pub mod context;
pub mod pages;
pub mod seo;
pub mod store;
pub mod theme;
pub mod tracker;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, SsrMode, StaticSegment,
};

use crate::components::{Footer, Header, NotFound, RouteGuard};
use crate::config::SiteConfig;
use crate::pages::about::Index as AboutPage;
use crate::pages::blog::{Index as BlogPage, Post as PostPage};
use crate::pages::home::Index as HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = SiteConfig::default();
    let site = seo::site_metadata(&config);
    let theme = config.style.theme.as_str();

    view! {
        <!DOCTYPE html>
        <html lang=config.locale.clone() data-theme=theme>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=site.description.clone()/>
                <meta name="robots" content=site.robots/>
                <link rel="manifest" href=site.manifest/>
                {site.icons.iter().map(|icon| view! {
                    <link rel=icon.rel href=icon.href sizes=icon.sizes/>
                }).collect_view()}
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body id="top">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<SiteConfig>().unwrap_or_default();
    provide_context(config.clone());
    let site = seo::site_metadata(&config);
    let title = site.title;
    let routes = config.routes;

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/web1.css"/>
        <Meta property="og:site_name" content=site.site_name/>
        <Meta property="og:locale" content=site.og_locale/>

        <Title formatter=move |text: String| {
            if text.is_empty() {
                title.clone()
            } else {
                text
            }
        }/>

        <Router>
            <Header/>
            <Routes fallback=|| view! { <NotFound/> }>
                // Content is static: render it fully on the server. Blog
                // pages wait on the store through blocking resources.
                <Route
                    path=StaticSegment("")
                    view=move || view! { <RouteGuard enabled=routes.home><HomePage/></RouteGuard> }
                    ssr=SsrMode::Async
                />
                <Route
                    path=StaticSegment("about")
                    view=move || view! { <RouteGuard enabled=routes.about><AboutPage/></RouteGuard> }
                    ssr=SsrMode::Async
                />
                <Route
                    path=StaticSegment("blog")
                    view=move || view! { <RouteGuard enabled=routes.blog><BlogPage/></RouteGuard> }
                    ssr=SsrMode::PartiallyBlocked
                />
                <Route
                    path=(StaticSegment("blog"), ParamSegment("slug"))
                    view=move || view! { <RouteGuard enabled=routes.blog><PostPage/></RouteGuard> }
                    ssr=SsrMode::PartiallyBlocked
                />
            </Routes>
            <Footer/>
        </Router>
    }
}
