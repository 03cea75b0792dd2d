//! Networking modules for server HTTP calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST endpoints: the one-shot catalog fetch plus the
//! inquiry and newsletter form submissions.

pub mod api;
