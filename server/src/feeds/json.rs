use super::metadata::{blog_link, feed_link, language, title, DESCRIPTION};

pub const URL_PATH: &str = "/blog/feed.json";

pub async fn handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
    _request: axum::extract::Request<axum::body::Body>,
) -> Result<axum::Json<json_feed_model::Feed>, app::store::Error> {
    let config = &ctx.config;
    let mut feed = json_feed_model::Feed::new();
    feed.set_title(title());
    feed.set_home_page_url(blog_link(config, None));
    feed.set_feed_url(feed_link(config, URL_PATH));
    feed.set_description(DESCRIPTION);
    feed.set_language(language(config));
    let mut items: Vec<json_feed_model::Item> = vec![];
    for front_matter in ctx.store.index()? {
        let mut entry = json_feed_model::Item::new();
        let slug = &front_matter.slug;
        let post = ctx.store.get_post_by_slug(slug)?;
        entry.set_id(slug);
        entry.set_url(blog_link(config, Some(slug)));
        entry.set_title(&front_matter.metadata.title);
        entry.set_content_html(post.html_body);
        if let Some(summary) = &front_matter.metadata.summary {
            entry.set_summary(summary);
        }
        if let Some(date) = front_matter.metadata.published_at {
            entry.set_date_published(date.format("%Y-%m-%dT00:00:00Z"));
        }
        entry.set_tags(front_matter.metadata.tags);
        items.push(entry);
    }
    feed.set_items(items);

    Ok(axum::Json(feed))
}
