//! Shared content model and filter engine for the Eternal Moments site.
//!
//! This crate owns the record types that `client` renders and `server`
//! serves, the [`SiteContent`] aggregate loaded from the YAML content
//! directory, and the pure filter engine that computes the visible subset of
//! a catalog. Keeping all of it in one place means both sides agree on field
//! names and filter semantics by construction.
//!
//! File loading lives behind the `fs` feature so the WASM client never links
//! the YAML parser; the client receives the same structure as JSON over the
//! content API.

pub mod content;
pub mod filter;
pub mod inquiry;
pub mod records;

pub use content::{ContactInfo, ContentError, FaqSections, SiteContent, SiteInfo};
pub use filter::{ALL, Criterion, FilterState, Record, apply_filters, chip_options};
pub use inquiry::{InquiryDraft, InquiryFieldError};
pub use records::{
    BlogPost, CulturalSpecialty, DesignStyle, Faq, Photo, ProcessStep, Project, ServicePackage,
    Statistic, Testimonial, Vendor,
};
