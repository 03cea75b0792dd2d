use super::*;

use axum::http::Request;

use crate::state::test_helpers::{test_app_state, test_app_state_with_db};

fn valid_draft() -> InquiryDraft {
    InquiryDraft {
        name: "Priya Sharma".to_owned(),
        email: "priya@example.com".to_owned(),
        message: "Planning a fusion ceremony for next spring.".to_owned(),
        ..InquiryDraft::default()
    }
}

fn parts_with_auth(header: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/api/inquiries");
    if let Some(value) = header {
        builder = builder.header(axum::http::header::AUTHORIZATION, value);
    }
    let (parts, ()) = builder.body(()).unwrap().into_parts();
    parts
}

#[tokio::test]
async fn submit_rejects_missing_name() {
    let draft = InquiryDraft { email: "priya@example.com".to_owned(), ..InquiryDraft::default() };

    let err = submit_inquiry(State(test_app_state()), Json(draft)).await.unwrap_err();

    assert_eq!(err.0, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err.1.0["error"], "name is required");
}

#[tokio::test]
async fn submit_rejects_malformed_email() {
    let draft = InquiryDraft {
        name: "Priya Sharma".to_owned(),
        email: "priya-at-example".to_owned(),
        ..InquiryDraft::default()
    };

    let err = submit_inquiry(State(test_app_state()), Json(draft)).await.unwrap_err();

    assert_eq!(err.0, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err.1.0["error"], "email address is not valid");
}

#[tokio::test]
async fn submit_stores_and_returns_receipt() {
    let state = test_app_state_with_db().await;

    let (status, Json(receipt)) =
        submit_inquiry(State(state.clone()), Json(valid_draft())).await.unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert!(!receipt.id.is_empty());
    assert!(!receipt.received_at.is_empty());

    let listed = inquiry::list_inquiries(&state.pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].email, "priya@example.com");
}

#[tokio::test]
async fn submit_rate_limits_repeat_senders() {
    let state = test_app_state_with_db().await;

    let mut denial = None;
    for _ in 0..10 {
        match submit_inquiry(State(state.clone()), Json(valid_draft())).await {
            Ok(_) => {}
            Err(err) => {
                denial = Some(err);
                break;
            }
        }
    }

    let err = denial.expect("repeat submissions should eventually be limited");
    assert_eq!(err.0, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn admin_token_unconfigured_is_unavailable() {
    let mut state = test_app_state();
    state.admin_token = None;
    let mut parts = parts_with_auth(Some("Bearer test-admin-token"));

    let err = AdminToken::from_request_parts(&mut parts, &state).await.unwrap_err();

    assert_eq!(err, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn admin_token_rejects_missing_or_wrong_header() {
    let state = test_app_state();

    let mut parts = parts_with_auth(None);
    let err = AdminToken::from_request_parts(&mut parts, &state).await.unwrap_err();
    assert_eq!(err, StatusCode::UNAUTHORIZED);

    let mut parts = parts_with_auth(Some("Bearer wrong"));
    let err = AdminToken::from_request_parts(&mut parts, &state).await.unwrap_err();
    assert_eq!(err, StatusCode::UNAUTHORIZED);

    // A token without the Bearer scheme is also rejected.
    let mut parts = parts_with_auth(Some("test-admin-token"));
    let err = AdminToken::from_request_parts(&mut parts, &state).await.unwrap_err();
    assert_eq!(err, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_token_accepts_configured_token() {
    let state = test_app_state();
    let mut parts = parts_with_auth(Some("Bearer test-admin-token"));

    assert!(AdminToken::from_request_parts(&mut parts, &state).await.is_ok());
}

#[tokio::test]
async fn list_returns_stored_rows() {
    let state = test_app_state_with_db().await;
    submit_inquiry(State(state.clone()), Json(valid_draft())).await.unwrap();

    let Json(rows) = list_inquiries(State(state), AdminToken).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Priya Sharma");
}
