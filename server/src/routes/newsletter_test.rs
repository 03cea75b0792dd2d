use super::*;

use crate::state::test_helpers::{test_app_state, test_app_state_with_db};

#[tokio::test]
async fn subscribe_rejects_implausible_email() {
    let body = SubscribeBody { email: "not-an-email".to_owned() };

    let err = subscribe(State(test_app_state()), Json(body)).await.unwrap_err();

    assert_eq!(err.0, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err.1.0["error"], "email address is not valid");
}

#[tokio::test]
async fn subscribe_accepts_new_address() {
    let state = test_app_state_with_db().await;
    let body = SubscribeBody { email: "couple@example.com".to_owned() };

    let Json(response) = subscribe(State(state), Json(body)).await.unwrap();

    assert_eq!(response["ok"], true);
}

#[tokio::test]
async fn subscribe_repeat_is_still_ok() {
    let state = test_app_state_with_db().await;

    let first = SubscribeBody { email: "couple@example.com".to_owned() };
    subscribe(State(state.clone()), Json(first)).await.unwrap();

    // Same inbox, different casing: still a success, same stored row.
    let second = SubscribeBody { email: "Couple@Example.com".to_owned() };
    let Json(response) = subscribe(State(state), Json(second)).await.unwrap();

    assert_eq!(response["ok"], true);
}
