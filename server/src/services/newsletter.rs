//! Newsletter subscription persistence.

use sqlx::SqlitePool;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

#[derive(Debug, thiserror::Error)]
pub enum NewsletterError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Record a subscription, returning `true` if the address was new.
///
/// The address is stored trimmed and lowercased so case variants of one
/// inbox collapse to a single row, and re-subscribing is a no-op rather
/// than an error.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn subscribe(pool: &SqlitePool, email: &str) -> Result<bool, NewsletterError> {
    let email = email.trim().to_lowercase();
    let created_at = OffsetDateTime::now_utc().format(&Rfc3339)?;

    let result =
        sqlx::query("INSERT OR IGNORE INTO newsletter_subscribers (email, created_at) VALUES (?, ?)")
            .bind(&email)
            .bind(&created_at)
            .execute(pool)
            .await?;

    Ok(result.rows_affected() > 0)
}
