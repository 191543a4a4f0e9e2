use app::store::{Error, Store};
use std::path::PathBuf;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn store(is_running_in_prod: bool) -> Store {
    Store::new(PathBuf::from("tests/data/posts"), is_running_in_prod)
}

#[test]
fn index_is_newest_first_with_drafts_last() {
    setup();

    let slugs: Vec<String> = store(false)
        .index()
        .unwrap()
        .into_iter()
        .map(|front_matter| front_matter.slug)
        .collect();
    assert_eq!(vec!["future-web-applications-2025", "toc", "draft"], slugs);
}

#[test]
fn drafts_are_hidden_in_prod() {
    setup();

    let store = store(true);
    let index = store.index().unwrap();
    assert_eq!(2, index.len());
    assert!(index.iter().all(|front_matter| front_matter.metadata.published_at.is_some()));
    assert!(matches!(store.get_post_by_slug("draft"), Err(Error::NotFound { .. })));
}

#[test]
fn range_counts_from_one() {
    setup();

    let featured = store(false).range(1, 2).unwrap();
    assert_eq!(2, featured.len());
    assert_eq!("future-web-applications-2025", featured[0].slug);
    assert_eq!("toc", featured[1].slug);

    assert!(store(false).range(4, 6).unwrap().is_empty());
}

#[test]
fn get_post_by_slug() {
    setup();

    let post = store(false).get_post_by_slug("toc").unwrap();
    assert_eq!("Reading a table of contents", post.front_matter.metadata.title);
    assert_eq!(5, post.toc.len());
    assert_eq!([1u16, 0, 0, 0, 0, 0], post.toc[0].path);
    assert_eq!([1u16, 1, 0, 0, 0, 0], post.toc[1].path);
    assert_eq!([1u16, 1, 0, 1, 0, 0], post.toc[2].path);
    assert_eq!([1u16, 1, 1, 0, 0, 0], post.toc[3].path);
    assert_eq!([1u16, 2, 0, 0, 0, 0], post.toc[4].path);

    assert_eq!("A deeply nested note", post.toc[2].name);
    assert_eq!("1-1-getting-started", post.toc[1].id);
    assert!(post.html_body.contains(r##"<h2 id="1-1-getting-started">"##));
    assert!(post.html_body.contains(r##"<a href="#1-1-getting-started">"##));
}

#[test]
fn post_outline_feeds_the_table_of_contents() {
    setup();

    let sections = store(false).get_post_by_slug("toc").unwrap().sections();
    assert_eq!(1, sections.len());
    assert_eq!("1-overview", sections[0].id);
    assert_eq!(4, sections[0].items.len());
}

#[test]
fn directory_posts_are_found_by_directory_name() {
    setup();

    let post = store(false)
        .get_post_by_slug("future-web-applications-2025")
        .unwrap();
    assert_eq!(Some("/images/blog/future.jpg"), post.front_matter.metadata.image.as_deref());
    assert_eq!("0-1-where-we-are", post.toc[0].id);
}

#[test]
fn unknown_slug_is_not_found() {
    setup();

    let error = store(false).get_post_by_slug("nope").unwrap_err();
    assert!(matches!(error, Error::NotFound { .. }));
    assert_eq!(axum::http::StatusCode::NOT_FOUND, error.status());
}
