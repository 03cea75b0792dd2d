//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool, the content catalog loaded at startup, and the
//! inquiry rate limiter. Content is immutable for the process lifetime; a
//! copy change ships as a content-file edit plus a restart.

use std::sync::Arc;

use catalog::SiteContent;
use sqlx::SqlitePool;

use crate::rate_limit::RateLimiter;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Site catalogs and business copy, loaded once at startup.
    pub content: Arc<SiteContent>,
    /// Bearer token for the operator inquiry listing. `None` disables it.
    pub admin_token: Option<Arc<str>>,
    /// In-memory rate limiter for inquiry submissions.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(pool: SqlitePool, content: SiteContent, admin_token: Option<String>) -> Self {
        Self {
            pool,
            content: Arc::new(content),
            admin_token: admin_token.map(Into::into),
            rate_limiter: RateLimiter::new(),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
