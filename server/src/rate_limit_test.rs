use super::*;

#[test]
fn per_sender_allows_up_to_limit() {
    let rl = RateLimiter::new();
    let now = Instant::now();

    for i in 0..DEFAULT_PER_SENDER_LIMIT {
        assert!(
            rl.check_and_record_at("couple@example.com", now).is_ok(),
            "submission {i} should succeed"
        );
    }
    assert!(matches!(
        rl.check_and_record_at("couple@example.com", now),
        Err(RateLimitError::PerSenderExceeded { .. })
    ));
}

#[test]
fn sender_key_ignores_case_and_whitespace() {
    let rl = RateLimiter::new();
    let now = Instant::now();

    for _ in 0..DEFAULT_PER_SENDER_LIMIT {
        rl.check_and_record_at("Couple@Example.com", now).unwrap();
    }
    assert!(rl.check_and_record_at("  couple@example.com  ", now).is_err());
}

#[test]
fn global_allows_up_to_limit() {
    let rl = RateLimiter::new();
    let now = Instant::now();

    // Distinct senders so the per-sender limit never trips first.
    for i in 0..DEFAULT_GLOBAL_LIMIT {
        let sender = format!("couple{i}@example.com");
        assert!(rl.check_and_record_at(&sender, now).is_ok(), "submission {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at("late@example.com", now),
        Err(RateLimitError::GlobalExceeded { .. })
    ));
}

#[test]
fn window_expiry_allows_new_submissions() {
    let rl = RateLimiter::new();
    let start = Instant::now();

    // Fill up the per-sender limit, including a denied attempt.
    for _ in 0..DEFAULT_PER_SENDER_LIMIT {
        rl.check_and_record_at("couple@example.com", start).unwrap();
    }
    assert!(rl.check_and_record_at("couple@example.com", start).is_err());

    // After the window passes, submissions succeed again; the denied attempt
    // above must not have extended the window.
    let after_window =
        start + Duration::from_secs(DEFAULT_PER_SENDER_WINDOW_SECS) + Duration::from_millis(1);
    assert!(rl.check_and_record_at("couple@example.com", after_window).is_ok());
}

#[test]
fn distinct_senders_do_not_interfere() {
    let rl = RateLimiter::new();
    let now = Instant::now();

    // Fill up sender A.
    for _ in 0..DEFAULT_PER_SENDER_LIMIT {
        rl.check_and_record_at("a@example.com", now).unwrap();
    }
    assert!(rl.check_and_record_at("a@example.com", now).is_err());

    // Sender B should still be able to submit.
    assert!(rl.check_and_record_at("b@example.com", now).is_ok());
}
