//! Consultation inquiry persistence.
//!
//! The route layer validates drafts with `catalog::inquiry::validate` before
//! calling in; this module owns id assignment, timestamping, and the SQL.
//! The services list is stored as a JSON array in a TEXT column, which keeps
//! the schema flat for a list that is only ever read back whole.

use catalog::InquiryDraft;
use serde::Serialize;
use sqlx::Row;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

#[cfg(test)]
#[path = "inquiry_test.rs"]
mod inquiry_test;

#[derive(Debug, thiserror::Error)]
pub enum InquiryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("services list encoding failed: {0}")]
    Services(#[from] serde_json::Error),
    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// A stored consultation request, as returned to the operator listing.
#[derive(Debug, Clone, Serialize)]
pub struct StoredInquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub wedding_date: String,
    pub venue: String,
    pub budget: String,
    pub services: Vec<String>,
    pub cultural_notes: String,
    pub referral_source: String,
    pub message: String,
    pub created_at: String,
}

/// Persist a validated draft and return the stored row.
///
/// # Errors
///
/// Returns an error if the services list cannot be encoded, the timestamp
/// cannot be formatted, or the insert fails.
pub async fn record_inquiry(
    pool: &SqlitePool,
    draft: &InquiryDraft,
) -> Result<StoredInquiry, InquiryError> {
    let id = Uuid::new_v4().to_string();
    let created_at = OffsetDateTime::now_utc().format(&Rfc3339)?;
    let services_json = serde_json::to_string(&draft.services)?;

    sqlx::query(
        "INSERT INTO inquiries
         (id, name, email, phone, wedding_date, venue, budget, services,
          cultural_notes, referral_source, message, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(draft.name.trim())
    .bind(draft.email.trim())
    .bind(&draft.phone)
    .bind(&draft.wedding_date)
    .bind(&draft.venue)
    .bind(&draft.budget)
    .bind(&services_json)
    .bind(&draft.cultural_notes)
    .bind(&draft.referral_source)
    .bind(&draft.message)
    .bind(&created_at)
    .execute(pool)
    .await?;

    Ok(StoredInquiry {
        id,
        name: draft.name.trim().to_owned(),
        email: draft.email.trim().to_owned(),
        phone: draft.phone.clone(),
        wedding_date: draft.wedding_date.clone(),
        venue: draft.venue.clone(),
        budget: draft.budget.clone(),
        services: draft.services.clone(),
        cultural_notes: draft.cultural_notes.clone(),
        referral_source: draft.referral_source.clone(),
        message: draft.message.clone(),
        created_at,
    })
}

/// List every stored inquiry, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored services list cannot be
/// decoded.
pub async fn list_inquiries(pool: &SqlitePool) -> Result<Vec<StoredInquiry>, InquiryError> {
    let rows = sqlx::query(
        "SELECT id, name, email, phone, wedding_date, venue, budget, services,
                cultural_notes, referral_source, message, created_at
         FROM inquiries
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_inquiry).collect()
}

fn row_to_inquiry(row: &SqliteRow) -> Result<StoredInquiry, InquiryError> {
    let services_json: String = row.try_get("services")?;
    Ok(StoredInquiry {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        wedding_date: row.try_get("wedding_date")?,
        venue: row.try_get("venue")?,
        budget: row.try_get("budget")?,
        services: serde_json::from_str(&services_json)?,
        cultural_notes: row.try_get("cultural_notes")?,
        referral_source: row.try_get("referral_source")?,
        message: row.try_get("message")?,
        created_at: row.try_get("created_at")?,
    })
}
