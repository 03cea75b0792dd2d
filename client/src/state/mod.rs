//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `content` holds the catalog fetched from the
//! server, `ui` holds transient chrome (menu, toast). Both are provided as
//! `RwSignal` contexts from the root component.

pub mod content;
pub mod ui;
