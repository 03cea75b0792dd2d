//! Content catalog routes.
//!
//! The hydrated client fetches the whole aggregate once via `/api/content`;
//! the per-catalog routes exist for external callers and accept the same
//! filter dimensions the pages offer, as query parameters.

use axum::extract::{Query, State};
use axum::response::Json;
use catalog::{BlogPost, FilterState, Photo, SiteContent, Vendor, apply_filters};
use serde::Deserialize;

use crate::state::AppState;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Filter dimensions accepted by the catalog listing routes. Absent or
/// empty parameters leave the matching dimension at rest.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub culture: Option<String>,
    pub q: Option<String>,
}

impl CatalogQuery {
    fn into_filter(self) -> FilterState {
        let mut filter = FilterState::default();
        if let Some(category) = non_empty(self.category) {
            filter.category = category;
        }
        if let Some(culture) = non_empty(self.culture) {
            filter.culture = culture;
        }
        if let Some(q) = non_empty(self.q) {
            filter.search = q;
        }
        filter
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn cloned<T: Clone>(refs: Vec<&T>) -> Vec<T> {
    refs.into_iter().cloned().collect()
}

/// `GET /api/content` — the full content aggregate.
pub async fn site_content(State(state): State<AppState>) -> Json<SiteContent> {
    Json(state.content.as_ref().clone())
}

/// `GET /api/photos` — gallery photos, filterable by `category`.
pub async fn photos(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<Photo>> {
    let filter = query.into_filter();
    Json(cloned(apply_filters(&state.content.photos, &filter)))
}

/// `GET /api/vendors` — vendor directory, filterable by `category`,
/// `culture`, and `q`.
pub async fn vendors(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<Vendor>> {
    let filter = query.into_filter();
    Json(cloned(apply_filters(&state.content.vendors, &filter)))
}

/// `GET /api/posts` — blog posts, filterable by `category` and `q`.
pub async fn posts(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<BlogPost>> {
    let filter = query.into_filter();
    Json(cloned(apply_filters(&state.content.posts, &filter)))
}
