//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state (filters, form drafts) and delegates
//! rendering details to `components`. Filter state lives in the page so it
//! resets on navigation.

pub mod blog;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod portfolio;
pub mod services;
pub mod vendors;
