use axum::response::IntoResponse;

use super::metadata::{blog_link, language, title, COPYRIGHT, DESCRIPTION};

pub const URL_PATH: &str = "/blog/feed.rss";

pub async fn handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
    _request: axum::extract::Request<axum::body::Body>,
) -> Result<axum::response::Response, app::store::Error> {
    let config = &ctx.config;
    let mut items: Vec<rss::Item> = vec![];
    for front_matter in ctx.store.index()? {
        let mut entry = rss::Item::default();
        let slug = &front_matter.slug;
        let post = ctx.store.get_post_by_slug(slug)?;
        entry.set_title(front_matter.metadata.title.to_string());
        entry.set_link(blog_link(config, Some(slug)));
        entry.set_description(front_matter.metadata.summary.clone());
        if let Some(midnight) = front_matter.metadata.published_at.and_then(|date| date.and_hms_opt(0, 0, 0)) {
            entry.set_pub_date(midnight.and_utc().to_rfc2822());
        }
        entry.set_categories(
            front_matter
                .metadata
                .tags
                .into_iter()
                .map(|name| rss::Category { name, domain: None })
                .collect::<Vec<rss::Category>>(),
        );
        entry.set_content(post.html_body);
        items.push(entry);
    }

    let channel = rss::ChannelBuilder::default()
        .title(title())
        .link(blog_link(config, None))
        .description(DESCRIPTION)
        .language(language(config))
        .copyright(String::from(COPYRIGHT))
        .items(items)
        .build();
    let response = (
        axum::http::StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "application/rss+xml")],
        channel.to_string(),
    )
        .into_response();
    Ok(response)
}
