//! Consultation inquiry routes.
//!
//! ERROR HANDLING
//! ==============
//! Submission failures carry a JSON `error` body so the contact form can
//! show the message inline. The operator listing maps straight to status
//! codes; its caller is a person with curl, not a browser form.

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::Json;
use serde::Serialize;

use catalog::InquiryDraft;

use crate::services::inquiry::{self, StoredInquiry};
use crate::state::AppState;

#[cfg(test)]
#[path = "inquiries_test.rs"]
mod inquiries_test;

/// Receipt returned for an accepted submission.
#[derive(Debug, Serialize)]
pub struct InquiryReceipt {
    pub id: String,
    pub received_at: String,
}

pub(crate) fn error_response(
    status: StatusCode,
    message: &str,
) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": message })))
}

/// `POST /api/inquiries` — validate, rate limit, and store a consultation
/// request.
pub async fn submit_inquiry(
    State(state): State<AppState>,
    Json(draft): Json<InquiryDraft>,
) -> Result<(StatusCode, Json<InquiryReceipt>), (StatusCode, Json<serde_json::Value>)> {
    // Validate before rate limiting so a rejected draft never burns quota.
    if let Err(err) = catalog::inquiry::validate(&draft) {
        return Err(error_response(StatusCode::UNPROCESSABLE_ENTITY, &err.to_string()));
    }

    if let Err(err) = state.rate_limiter.check_and_record(&draft.email) {
        return Err(error_response(StatusCode::TOO_MANY_REQUESTS, &err.to_string()));
    }

    let stored = inquiry::record_inquiry(&state.pool, &draft).await.map_err(|err| {
        tracing::error!(error = %err, "inquiry insert failed");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "inquiry could not be stored")
    })?;

    Ok((
        StatusCode::CREATED,
        Json(InquiryReceipt { id: stored.id, received_at: stored.created_at }),
    ))
}

/// Bearer-token guard for operator-only routes. Rejects with 503 when no
/// token is configured and 401 on a missing or wrong header.
#[derive(Debug)]
pub struct AdminToken;

impl<S> FromRequestParts<S> for AdminToken
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let Some(expected) = app_state.admin_token else {
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        };

        let supplied = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match supplied {
            Some(token) if token == expected.as_ref() => Ok(Self),
            _ => Err(StatusCode::UNAUTHORIZED),
        }
    }
}

/// `GET /api/inquiries` — operator listing, newest first.
pub async fn list_inquiries(
    State(state): State<AppState>,
    _admin: AdminToken,
) -> Result<Json<Vec<StoredInquiry>>, StatusCode> {
    let rows = inquiry::list_inquiries(&state.pool).await.map_err(|err| {
        tracing::error!(error = %err, "inquiry listing failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(rows))
}
