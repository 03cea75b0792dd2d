//! Newsletter signup route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use catalog::inquiry::is_plausible_email;

use crate::routes::inquiries::error_response;
use crate::services::newsletter;
use crate::state::AppState;

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

#[derive(Debug, Deserialize)]
pub struct SubscribeBody {
    pub email: String,
}

/// `POST /api/newsletter` — add an address to the mailing list.
///
/// Subscribing an address that is already on the list is a success, not a
/// conflict; the response does not reveal whether the address was known.
pub async fn subscribe(
    State(state): State<AppState>,
    Json(body): Json<SubscribeBody>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let email = body.email.trim();
    if !is_plausible_email(email) {
        return Err(error_response(StatusCode::UNPROCESSABLE_ENTITY, "email address is not valid"));
    }

    newsletter::subscribe(&state.pool, email).await.map_err(|err| {
        tracing::error!(error = %err, "newsletter insert failed");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "subscription could not be stored")
    })?;

    Ok(Json(serde_json::json!({ "ok": true })))
}
