//! Consultation inquiry draft shared by the contact form and the API.
//!
//! The client validates a draft before posting and the server validates the
//! same payload again on receipt; both sides call [`validate`], so they
//! cannot drift on what "required" means or how failures are worded.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "inquiry_test.rs"]
mod inquiry_test;

/// A consultation request as entered on the contact form.
///
/// Only `name` and `email` are required; everything else defaults to empty
/// so partially filled forms serialize without ceremony.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryDraft {
    /// Full name.
    pub name: String,
    /// Reply-to email address.
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Planned wedding date, free-form text from the date input.
    #[serde(default)]
    pub wedding_date: String,
    /// Venue, if already chosen.
    #[serde(default)]
    pub venue: String,
    /// Selected budget range label.
    #[serde(default)]
    pub budget: String,
    /// Service options ticked on the form.
    #[serde(default)]
    pub services: Vec<String>,
    /// Cultural or religious considerations to plan around.
    #[serde(default)]
    pub cultural_notes: String,
    /// How the couple heard about the business.
    #[serde(default)]
    pub referral_source: String,
    /// Free-form message about the wedding.
    #[serde(default)]
    pub message: String,
}

/// Validation failure for an [`InquiryDraft`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InquiryFieldError {
    /// A required field was empty or whitespace.
    #[error("{0} is required")]
    Missing(&'static str),
    /// The email address does not look deliverable.
    #[error("email address is not valid")]
    InvalidEmail,
}

/// Check a draft for submission.
///
/// # Errors
///
/// Returns the first failure found: missing name, missing email, or a
/// malformed email address.
pub fn validate(draft: &InquiryDraft) -> Result<(), InquiryFieldError> {
    if draft.name.trim().is_empty() {
        return Err(InquiryFieldError::Missing("name"));
    }
    let email = draft.email.trim();
    if email.is_empty() {
        return Err(InquiryFieldError::Missing("email"));
    }
    if !is_plausible_email(email) {
        return Err(InquiryFieldError::InvalidEmail);
    }
    Ok(())
}

/// Loose deliverability check: exactly one `@`, a non-empty local part, and
/// a dotted domain. Anything stricter belongs in a confirmation email, not
/// a form validator.
#[must_use]
pub fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
