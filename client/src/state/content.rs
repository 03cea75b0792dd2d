//! Catalog content state shared by every page.
//!
//! DESIGN
//! ======
//! The whole catalog is small enough to ship in one `/api/content` response,
//! so pages never fetch individually. They read slices of this state and
//! filter locally.

use catalog::SiteContent;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Shared catalog state. `loading` starts true so server-rendered pages
/// show their loading shell until hydration completes the fetch.
#[derive(Clone, Debug)]
pub struct ContentState {
    pub content: Option<SiteContent>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ContentState {
    fn default() -> Self {
        Self {
            content: None,
            loading: true,
            error: None,
        }
    }
}

impl ContentState {
    /// Record the outcome of the catalog fetch.
    pub fn resolve(&mut self, result: Result<SiteContent, String>) {
        self.loading = false;
        match result {
            Ok(content) => {
                self.content = Some(content);
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }

    /// True once the catalog has arrived.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.content.is_some()
    }
}
