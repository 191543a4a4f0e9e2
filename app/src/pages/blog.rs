use std::collections::HashMap;

use leptos::either::EitherOf3;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{NotFound, Reveal, TableOfContents};
use crate::config::SiteConfig;
use crate::content::{BlogCategory, BLOG, NEWSLETTER, SOCIAL};
use crate::seo::{blog_metadata, post_metadata, PageHead};
use crate::store;
use crate::tracker::TrackerOptions;

#[component]
pub fn Index() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let featured = Resource::new_blocking(|| (), move |_| async { get_featured_posts().await });

    view! {
        <PageHead metadata=blog_metadata(&config)/>
        <main class="blog">
            <section class="hero">
                <h1 class="display">{BLOG.title}</h1>
                <p class="subline">{BLOG.description}</p>
            </section>

            <section class="featured">
                <h2>"Featured Articles"</h2>
                {move || match featured.get() {
                    None => EitherOf3::A(view! { <p>"Loading…"</p> }),
                    Some(Ok(posts)) => EitherOf3::B(view! {
                        <ul class="posts">
                            {posts
                                .into_iter()
                                .map(|front_matter| view! { <PostCard front_matter=front_matter/> })
                                .collect_view()}
                        </ul>
                    }),
                    Some(Err(err)) => EitherOf3::C(view! {
                        <p>{format!("Could not load the featured articles: {}", err)}</p>
                    }),
                }}
            </section>

            {BLOG
                .categories
                .iter()
                .enumerate()
                .map(|(index, category)| view! {
                    <Reveal delay={0.1 * index as f32}>
                        <Category category=*category/>
                    </Reveal>
                })
                .collect_view()}

            {NEWSLETTER.display.then(|| view! { <Newsletter/> })}
        </main>
    }
}

#[component]
fn PostCard(front_matter: store::FrontMatter) -> impl IntoView {
    let url = format!("/blog/{}", front_matter.slug);
    let metadata = front_matter.metadata;
    view! {
        <li class="card post-card">
            {metadata.image.clone().map(|image| view! { <img class="thumbnail" src=image alt=metadata.title.clone()/> })}
            <A href=url>
                <h3>{metadata.title.clone()}</h3>
            </A>
            {metadata.published_at.map(|date| view! {
                <time datetime=date.format("%Y-%m-%d").to_string()>{date.format("%B %-d, %Y").to_string()}</time>
            })}
            {metadata.summary.map(|summary| view! { <p>{summary}</p> })}
        </li>
    }
}

#[component]
fn Category(category: BlogCategory) -> impl IntoView {
    view! {
        <section class="category">
            <h2>{category.title}</h2>
            <p>{category.description}</p>
            <div class="grid grid-2">
                {category
                    .posts
                    .iter()
                    .map(|post| view! {
                        <div class="card">
                            <A href=format!("/blog/{}", post.slug)>{post.title}</A>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Newsletter() -> impl IntoView {
    let subscribe = SOCIAL.iter().find(|social| social.is_mailto()).map(|social| social.link);

    view! {
        <section class="card newsletter">
            <h2>{NEWSLETTER.title}</h2>
            <p>{NEWSLETTER.description}</p>
            {subscribe.map(|link| view! { <a class="button button-primary" href=link>"Subscribe"</a> })}
        </section>
    }
}

#[server(GetStoreIndex, "/api", "GetJson", "blog_index")]
pub async fn get_store_index() -> Result<Vec<store::FrontMatter>, ServerFnError> {
    post_store()?
        .index()
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}

#[server(GetFeaturedPosts, "/api", "GetJson", "blog_featured")]
pub async fn get_featured_posts() -> Result<Vec<store::FrontMatter>, ServerFnError> {
    // Positions in the index, counting from the newest.
    let (start, end) = (1, 3);
    post_store()?
        .range(start, end)
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}

#[component]
pub fn Post() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let params = leptos_router::hooks::use_params_map();

    let post = Resource::new_blocking(
        move || params.read().get("slug").unwrap_or_default(),
        move |slug| async {
            if slug.is_empty() {
                return Err(ServerFnError::MissingArg(String::from("empty slug")));
            }
            get_post_by_slug(slug).await
        },
    );

    view! {
        {move || match post.get() {
            None => EitherOf3::A(view! { <p>"Loading…"</p> }),
            Some(Ok(post)) => {
                let metadata = post_metadata(&config, &post.front_matter);
                let structure = post.sections();
                let labels: HashMap<String, String> = post
                    .toc
                    .iter()
                    .map(|heading| (heading.id.clone(), heading.name.clone()))
                    .collect();
                let options = TrackerOptions {
                    display: !post.toc.is_empty(),
                    sub_items: true,
                };
                EitherOf3::B(view! {
                    <PageHead metadata=metadata/>
                    <div class="post">
                        <TableOfContents structure=structure options=options labels=labels/>
                        <article inner_html=post.html_body></article>
                    </div>
                })
            }
            Some(Err(err)) => {
                log::warn!("could not load post: {}", err);
                EitherOf3::C(view! { <NotFound/> })
            }
        }}
    }
}

#[server(GetPostBySlug, "/api", "GetJson", "blog_post")]
pub async fn get_post_by_slug(slug: String) -> Result<store::Post, ServerFnError> {
    post_store()?
        .get_post_by_slug(&slug)
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}

#[cfg(feature = "ssr")]
fn post_store() -> Result<store::Store, ServerFnError> {
    use_context::<store::Store>().ok_or_else(|| ServerFnError::ServerError(String::from("the post store is missing from the context")))
}
