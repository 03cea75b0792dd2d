//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own persistence concerns so route handlers can stay
//! focused on protocol translation: ids, timestamps, and SQL live here,
//! status codes and JSON bodies live in `routes`.

pub mod inquiry;
pub mod newsletter;
