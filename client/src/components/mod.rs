//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and catalog cards while reading shared
//! state from Leptos context providers. Pages own filter state; components
//! stay presentation-only and report interactions through callbacks.

pub mod carousel;
pub mod chips;
pub mod faq_list;
pub mod layout;
pub mod photo_tile;
pub mod post_card;
pub mod toast;
pub mod vendor_card;
