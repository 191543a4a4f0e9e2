use std::path::PathBuf;

use anyhow::Context as _;
use leptos::prelude::*;

use app::config::SiteConfig;
use app::context::Context;
use app::store;

mod feeds;

const LEPTOS_SERVER_FN_URL_PATH: &str = "/api/{*fn_name}";
const POST_ASSETS_URL_PATH: &str = "/blog/assets";
const POSTS_PATH_VAR: &str = "BLOG_POSTS_PATH";
const DEFAULT_POSTS_PATH: &str = "posts";

/// `BLOG_POSTS_PATH` at runtime, then at build time, then `posts`.
fn posts_path() -> PathBuf {
    std::env::var(POSTS_PATH_VAR)
        .ok()
        .filter(|path| !path.is_empty())
        .or_else(|| option_env!("BLOG_POSTS_PATH").map(String::from))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_POSTS_PATH))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let conf = get_configuration(None).context("Could not load the leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let posts = posts_path();
    let ctx = Context {
        leptos_options: leptos_options.clone(),
        store: store::Store::new(posts.clone(), leptos_options.env == Env::PROD),
        config: SiteConfig::default(),
    };
    log::info!("serving posts from {:?}", ctx.store.path());

    let routes = generate_route_list(app::App);
    let ctx_fn = {
        let ctx = ctx.clone();
        move || provide_shared_context(&ctx)
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };

    let leptos_server_fn_method_router =
        axum::routing::get(leptos_server_fn_axum_handler).post(leptos_server_fn_axum_handler);
    let json_feed_method_router = axum::routing::get(feeds::json::handler);
    let rss_feed_method_router = axum::routing::get(feeds::rss::handler);
    let app = axum::Router::new()
        .route(LEPTOS_SERVER_FN_URL_PATH, leptos_server_fn_method_router)
        .route(feeds::json::URL_PATH, json_feed_method_router)
        .route(feeds::rss::URL_PATH, rss_feed_method_router)
        .nest_service(POST_ASSETS_URL_PATH, tower_http::services::ServeDir::new(posts))
        .leptos_routes_with_context(&ctx, routes, ctx_fn, app_fn)
        .fallback(leptos_axum::file_and_error_handler::<Context, _>(app::shell))
        .with_state(ctx);

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}

/// What the leptos routes and server functions find in their context.
fn provide_shared_context(ctx: &Context) {
    provide_context(ctx.store.clone());
    provide_context(ctx.config.clone());
}

async fn leptos_server_fn_axum_handler(
    axum::extract::State(ctx): axum::extract::State<Context>,
    request: axum::extract::Request<axum::body::Body>,
) -> impl axum::response::IntoResponse {
    let additional_context = move || provide_shared_context(&ctx);
    leptos_axum::handle_server_fns_with_context(additional_context, request).await
}
