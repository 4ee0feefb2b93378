use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::app::SiteLayout;
use crate::components::cards::{display_date, tag_href, BlogCard, SeedNotice, TagList};
use crate::components::hero::Hero;
use crate::components::not_found::NotFound;
use crate::components::search_bar::SearchBar;
use crate::components::seo::Seo;
use crate::content::catalog::{BlogDetail, BlogIndex};
use crate::content::search::filter_blog_posts;

/// Blog index narrowed by `term` and an exact `tag`.
#[server]
pub async fn get_blog_index(term: String, tag: Option<String>) -> Result<BlogIndex, ServerFnError> {
    let state = crate::state::app_state()?;
    Ok(crate::content::catalog::blog_index(state.blogs.as_ref(), &term, tag.as_deref()).await)
}

#[server]
pub async fn get_blog_detail(id: String) -> Result<Option<BlogDetail>, ServerFnError> {
    let state = crate::state::app_state()?;
    Ok(crate::content::catalog::blog_detail(state.blogs.as_ref(), &id).await)
}

#[component]
pub fn BlogIndexPage() -> impl IntoView {
    let query_map = use_query_map();
    let tag = Memo::new(move |_| {
        query_map
            .read()
            .get("tag")
            .filter(|tag| !tag.trim().is_empty())
    });
    // The tag narrows on the server; the search term filters locally as the visitor types.
    let index = Resource::new(move || tag.get(), |tag| get_blog_index(String::new(), tag));
    let query = RwSignal::new(String::new());

    view! {
        <SiteLayout>
            <Seo title="Blog" path="/blog" description="Articles on contracts, fintech, insolvency and technology law."/>
            <Hero
                title="Legal Insights"
                subtitle="Plain-language articles on rights, disputes and the law in practice."
            />
            <section class="container">
                <SearchBar query=query placeholder="Search articles..."/>
                <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                    {move || index.get().map(|result| match result {
                        Ok(index) => {
                            let active = tag.get();
                            let BlogIndex { source, tags, entries } = index;
                            view! {
                                <SeedNotice source=source/>
                                <nav class="tag-filter">
                                    <a href="/blog" class="badge" class:active=active.is_none()>"All"</a>
                                    {tags
                                        .into_iter()
                                        .map(|t| {
                                            let is_active = active.as_deref() == Some(t.as_str());
                                            let href = tag_href(&t);
                                            view! { <a href=href class="badge" class:active=is_active>{t}</a> }
                                        })
                                        .collect_view()}
                                </nav>
                                {move || {
                                    let matches = filter_blog_posts(&entries, &query.get(), None);
                                    if matches.is_empty() {
                                        view! { <p class="empty">"No articles match your search."</p> }.into_any()
                                    } else {
                                        view! {
                                            <div class="card-grid">
                                                {matches
                                                    .into_iter()
                                                    .map(|entry| view! { <BlogCard entry=entry/> })
                                                    .collect_view()}
                                            </div>
                                        }
                                        .into_any()
                                    }
                                }}
                            }
                            .into_any()
                        }
                        Err(e) => view! { <p class="error">"Error loading articles: " {e.to_string()}</p> }.into_any(),
                    })}
                </Suspense>
            </section>
        </SiteLayout>
    }
}

#[component]
pub fn BlogDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let detail = Resource::new(move || id.get(), get_blog_detail);

    view! {
        <SiteLayout>
            <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                {move || detail.get().map(|result| match result {
                    Ok(Some(detail)) => view! { <BlogDetailView detail=detail/> }.into_any(),
                    Ok(None) => view! {
                        <Title text="Article not found"/>
                        <NotFound
                            heading="Article not found"
                            message="This article does not exist or has been removed."
                            back_href="/blog"
                            back_label="Back to the blog"
                        />
                    }
                    .into_any(),
                    Err(e) => view! { <p class="error">"Error loading article: " {e.to_string()}</p> }.into_any(),
                })}
            </Suspense>
        </SiteLayout>
    }
}

#[component]
fn BlogDetailView(detail: BlogDetail) -> impl IntoView {
    let path = format!("/blog/{}", detail.entry.id);
    let post = detail.entry.record;

    view! {
        <Seo
            title=post.title.clone()
            path=path
            description=post.card_text().to_string()
            image=post.image_url.clone()
        />
        <article class="container blog-detail">
            <a href="/blog" class="back-link">"← All articles"</a>
            <header>
                <h1>{post.title.clone()}</h1>
                <p class="post-meta">
                    {display_date(post.created_at).map(|date| view! { <time>{date}</time>" · " })}
                    {format!("{} min read", detail.reading_minutes)}
                </p>
                <TagList tags=post.tags.clone()/>
            </header>
            {post.image_url.clone().map(|url| view! { <img class="detail-image" src=url alt=post.title.clone()/> })}
            <p class="lead">{post.summary.clone()}</p>
            <div class="prose" inner_html=detail.content_html></div>
        </article>
        {(!detail.related.is_empty()).then(|| view! {
            <section class="container related-posts">
                <h2>"Related articles"</h2>
                <div class="card-grid">
                    {detail
                        .related
                        .into_iter()
                        .map(|entry| view! { <BlogCard entry=entry/> })
                        .collect_view()}
                </div>
            </section>
        })}
    }
}
