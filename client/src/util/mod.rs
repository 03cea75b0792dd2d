//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate presentation formatting from page and component
//! logic to improve reuse and testability.

pub mod assets;
pub mod format;
