//! Photo gallery with single-select category filtering.

use leptos::prelude::*;

use catalog::{FilterState, Photo, apply_filters, chip_options};

use crate::components::chips::FilterChips;
use crate::components::photo_tile::PhotoTile;
use crate::state::content::ContentState;
use crate::util::assets::image_url;

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Photos visible under `state`, cloned out of the shared catalog.
fn visible_photos(photos: &[Photo], state: &FilterState) -> Vec<Photo> {
    apply_filters(photos, state).into_iter().cloned().collect()
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();
    let filters = RwSignal::new(FilterState::default());

    let visible = move || {
        content.with(|c| {
            c.content
                .as_ref()
                .map(|c| filters.with(|f| visible_photos(&c.photos, f)))
                .unwrap_or_default()
        })
    };
    let categories = Signal::derive(move || {
        content.with(|c| {
            c.content
                .as_ref()
                .map(|c| chip_options(&c.site.gallery_categories))
                .unwrap_or_default()
        })
    });
    let featured = move || {
        content.with(|c| c.content.as_ref().map(|c| c.projects.clone()).unwrap_or_default())
    };

    let select_category = Callback::new(move |value: String| filters.update(|f| f.category = value));

    view! {
        <div class="page gallery-page">
            <section class="page-hero">
                <h1 class="page-hero__title">"Wedding Gallery"</h1>
                <p class="page-hero__lead">
                    "Celebrating love across all cultures and traditions. Each wedding tells a unique story of romance, heritage, and joy."
                </p>
            </section>

            <section class="gallery-page__filters">
                <FilterChips
                    options=categories
                    selected=Signal::derive(move || filters.get().category)
                    on_select=select_category
                />
            </section>

            <section class="gallery-page__grid-section">
                <Show
                    when=move || !content.get().loading
                    fallback=|| view! { <p class="page-loading">"Loading gallery..."</p> }
                >
                    <Show
                        when=move || !visible().is_empty()
                        fallback=move || {
                            view! {
                                <div class="empty-state">
                                    <p class="empty-state__message">"No photos found for this category."</p>
                                    <button
                                        class="btn btn--outline"
                                        on:click=move |_| filters.update(FilterState::clear)
                                    >
                                        "Show All Photos"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <div class="photo-grid">
                            {move || {
                                visible()
                                    .into_iter()
                                    .map(|photo| view! { <PhotoTile photo=photo/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </section>

            <section class="gallery-page__featured">
                <h2 class="section-title">"Featured Weddings"</h2>
                <p class="section-lead">"Discover the beauty and diversity of our couples' special days"</p>
                <div class="card-grid card-grid--featured">
                    {move || {
                        featured()
                            .into_iter()
                            .map(|project| {
                                let src = image_url(&project.image);
                                view! {
                                    <div class="featured-card">
                                        <img class="featured-card__image" src=src alt=project.title.clone() loading="lazy"/>
                                        <h3 class="featured-card__title">{project.title}</h3>
                                        <p class="featured-card__blurb">{project.result}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>
        </div>
    }
}
