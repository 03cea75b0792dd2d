//! Blog index: featured post, filterable article grid, and the sidebar
//! with search, popular posts, and newsletter signup.
//!
//! DESIGN
//! ======
//! Category chips and the sidebar search box drive the same page-local
//! `FilterState` used everywhere else, so the article grid narrows by
//! category and title/excerpt text in combination. The featured post stays
//! pinned above the grid and never enters the filtered set.

use leptos::prelude::*;

use catalog::{BlogPost, FilterState, apply_filters, chip_options};

use crate::components::chips::FilterChips;
use crate::components::post_card::PostCard;
use crate::state::{content::ContentState, ui::UiState};
use crate::util::assets::image_url;

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

/// The post pinned to the hero slot: the first flagged `featured`, falling
/// back to the first post so the slot never renders empty.
fn featured_post(posts: &[BlogPost]) -> Option<BlogPost> {
    posts
        .iter()
        .find(|post| post.featured)
        .or_else(|| posts.first())
        .cloned()
}

/// Grid posts visible under `state`. The featured post is excluded even
/// when it would match the active filters.
fn grid_posts(posts: &[BlogPost], state: &FilterState) -> Vec<BlogPost> {
    apply_filters(posts, state)
        .into_iter()
        .filter(|post| !post.featured)
        .cloned()
        .collect()
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let filters = RwSignal::new(FilterState::default());

    let newsletter_email = RwSignal::new(String::new());
    let newsletter_busy = RwSignal::new(false);
    let newsletter_error = RwSignal::new(None::<String>);

    let featured = move || {
        content.with(|c| c.content.as_ref().and_then(|c| featured_post(&c.posts)))
    };
    let grid = move || {
        content.with(|c| {
            c.content
                .as_ref()
                .map(|c| filters.with(|f| grid_posts(&c.posts, f)))
                .unwrap_or_default()
        })
    };
    let categories = Signal::derive(move || {
        content.with(|c| {
            c.content
                .as_ref()
                .map(|c| chip_options(&c.site.blog_categories))
                .unwrap_or_default()
        })
    });
    let popular = move || {
        content.with(|c| {
            c.content
                .as_ref()
                .map(|c| c.site.popular_posts.clone())
                .unwrap_or_default()
        })
    };

    let select_category = Callback::new(move |value: String| filters.update(|f| f.category = value));

    let subscribe = move |_| {
        if newsletter_busy.get_untracked() {
            return;
        }
        let email = newsletter_email.get_untracked().trim().to_owned();
        if !catalog::inquiry::is_plausible_email(&email) {
            newsletter_error.set(Some("Please enter a valid email address.".to_owned()));
            return;
        }
        newsletter_error.set(None);
        newsletter_busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::subscribe_newsletter(&email).await {
                Ok(()) => {
                    newsletter_email.set(String::new());
                    ui.update(|state| {
                        state.show_toast(
                            "Subscribed!",
                            "Wedding planning tips are on their way to your inbox.",
                        );
                    });
                }
                Err(message) => newsletter_error.set(Some(message)),
            }
            newsletter_busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, ui);
            newsletter_busy.set(false);
        }
    };

    view! {
        <div class="page blog-page">
            <section class="page-hero">
                <h1 class="page-hero__title">"Wedding Planning Blog"</h1>
                <p class="page-hero__lead">
                    "Expert advice, real wedding stories, and cultural wedding traditions to inspire and guide your perfect celebration."
                </p>
            </section>

            <div class="blog-page__layout">
                <div class="blog-page__main">
                    <Show when=move || featured().is_some()>
                        {move || {
                            featured()
                                .map(|post| {
                                    let src = image_url(&post.image);
                                    view! {
                                        <article class="featured-post">
                                            <div class="featured-post__media">
                                                <span class="badge badge--featured">"Featured"</span>
                                                <img
                                                    class="featured-post__image"
                                                    src=src
                                                    alt=post.title.clone()
                                                />
                                            </div>
                                            <div class="featured-post__body">
                                                <div class="featured-post__meta">
                                                    <span class="badge">{post.category}</span>
                                                    <span>{post.date}</span>
                                                    <span>{post.author}</span>
                                                </div>
                                                <h2 class="featured-post__title">{post.title}</h2>
                                                <p class="featured-post__excerpt">{post.excerpt}</p>
                                                <span class="featured-post__read-time">{post.read_time}</span>
                                            </div>
                                        </article>
                                    }
                                })
                        }}
                    </Show>

                    <div class="blog-page__categories">
                        <h3 class="section-subtitle">"Browse by Category"</h3>
                        <FilterChips
                            options=categories
                            selected=Signal::derive(move || filters.get().category)
                            on_select=select_category
                        />
                    </div>

                    <Show
                        when=move || !content.get().loading
                        fallback=|| view! { <p class="page-loading">"Loading articles..."</p> }
                    >
                        <Show
                            when=move || !grid().is_empty()
                            fallback=move || {
                                view! {
                                    <div class="empty-state">
                                        <p class="empty-state__message">
                                            "No articles found matching your criteria."
                                        </p>
                                        <button
                                            class="btn btn--outline"
                                            on:click=move |_| filters.update(FilterState::clear)
                                        >
                                            "Clear Filters"
                                        </button>
                                    </div>
                                }
                            }
                        >
                            <div class="card-grid card-grid--posts">
                                {move || {
                                    grid()
                                        .into_iter()
                                        .map(|post| view! { <PostCard post=post/> })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </Show>
                </div>

                <aside class="blog-page__sidebar">
                    <div class="sidebar-card">
                        <h3 class="sidebar-card__title">"Search Blog"</h3>
                        <input
                            class="search-input"
                            type="search"
                            placeholder="Search articles..."
                            prop:value=move || filters.get().search
                            on:input=move |ev| filters.update(|f| f.search = event_target_value(&ev))
                        />
                    </div>

                    <div class="sidebar-card">
                        <h3 class="sidebar-card__title">"Popular Posts"</h3>
                        <ul class="sidebar-card__list">
                            {move || {
                                popular()
                                    .into_iter()
                                    .map(|title| view! { <li class="sidebar-card__item">{title}</li> })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </div>

                    <div class="sidebar-card sidebar-card--newsletter">
                        <h3 class="sidebar-card__title">"Stay Updated"</h3>
                        <p class="sidebar-card__blurb">
                            "Get the latest wedding planning tips and real wedding features delivered to your inbox."
                        </p>
                        <input
                            class="text-input"
                            type="email"
                            placeholder="Your email address"
                            prop:value=move || newsletter_email.get()
                            on:input=move |ev| newsletter_email.set(event_target_value(&ev))
                        />
                        <Show when=move || newsletter_error.get().is_some()>
                            <p class="form-error">{move || newsletter_error.get().unwrap_or_default()}</p>
                        </Show>
                        <button
                            class="btn btn--primary"
                            disabled=move || newsletter_busy.get()
                            on:click=subscribe
                        >
                            {move || if newsletter_busy.get() { "Subscribing..." } else { "Subscribe" }}
                        </button>
                    </div>
                </aside>
            </div>
        </div>
    }
}
