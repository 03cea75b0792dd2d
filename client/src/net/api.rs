//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed
//! fetch degrades to an inline message without crashing hydration. Where the
//! server supplies a validation message in the response body, that message
//! wins over the generic status line.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::{InquiryDraft, SiteContent};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
fn content_request_failed_message(status: u16) -> String {
    format!("content request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn inquiry_failed_message(status: u16, server_error: Option<String>) -> String {
    match server_error {
        Some(message) if !message.trim().is_empty() => message,
        _ => format!("inquiry request failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn newsletter_failed_message(status: u16, server_error: Option<String>) -> String {
    match server_error {
        Some(message) if !message.trim().is_empty() => message,
        _ => format!("newsletter signup failed: {status}"),
    }
}

/// Error body shape shared by the form endpoints.
#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: String,
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> Option<String> {
    resp.json::<ApiErrorResponse>().await.ok().map(|b| b.error)
}

/// Fetch the full site catalog from `GET /api/content`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_site_content() -> Result<SiteContent, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/content")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(content_request_failed_message(resp.status()));
        }
        resp.json::<SiteContent>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Submit a consultation inquiry via `POST /api/inquiries`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server rejects
/// the draft. For validation rejections the server's own message is
/// surfaced so the form can show it inline.
pub async fn submit_inquiry(draft: &InquiryDraft) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/inquiries")
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let server_error = error_from_response(resp).await;
            return Err(inquiry_failed_message(status, server_error));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct NewsletterResponse {
    ok: bool,
}

/// Subscribe an email address to the newsletter via `POST /api/newsletter`.
///
/// Re-subscribing an address that is already on the list succeeds.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server rejects
/// the address.
pub async fn subscribe_newsletter(email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/newsletter")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let server_error = error_from_response(resp).await;
            return Err(newsletter_failed_message(status, server_error));
        }
        let body: NewsletterResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("newsletter signup failed".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}
