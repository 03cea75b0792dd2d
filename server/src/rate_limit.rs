//! In-memory rate limiting for inquiry submissions.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`,
//! keyed by the normalized sender email. Two limits are enforced:
//! - Per-sender: 3 submissions/hour
//! - Global: 60 submissions/hour
//!
//! TRADE-OFFS
//! ==========
//! Counters live in process memory: they reset on restart and are not shared
//! between instances. The inquiries table remains the durable record, so a
//! restart costs at most one window of slack, never data.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};

const DEFAULT_PER_SENDER_LIMIT: usize = 3;
const DEFAULT_PER_SENDER_WINDOW_SECS: u64 = 3600;

const DEFAULT_GLOBAL_LIMIT: usize = 60;
const DEFAULT_GLOBAL_WINDOW_SECS: u64 = 3600;

#[derive(Clone, Copy)]
struct RateLimitConfig {
    per_sender_limit: usize,
    per_sender_window: Duration,
    global_limit: usize,
    global_window: Duration,
}

impl RateLimitConfig {
    fn from_env() -> Self {
        let per_sender_window_secs =
            env_parse("RATE_LIMIT_PER_SENDER_WINDOW_SECS", DEFAULT_PER_SENDER_WINDOW_SECS);
        let global_window_secs = env_parse("RATE_LIMIT_GLOBAL_WINDOW_SECS", DEFAULT_GLOBAL_WINDOW_SECS);

        Self {
            per_sender_limit: env_parse("RATE_LIMIT_PER_SENDER", DEFAULT_PER_SENDER_LIMIT),
            per_sender_window: Duration::from_secs(per_sender_window_secs),
            global_limit: env_parse("RATE_LIMIT_GLOBAL", DEFAULT_GLOBAL_LIMIT),
            global_window: Duration::from_secs(global_window_secs),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("submission limit for this address reached (max {limit} per {window_secs}s)")]
    PerSenderExceeded { limit: usize, window_secs: u64 },
    #[error("submission volume is high right now (max {limit} per {window_secs}s), please try again later")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: std::sync::Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

struct RateLimiterInner {
    /// Per-sender submission timestamps, keyed by normalized email.
    sender_requests: HashMap<String, VecDeque<Instant>>,
    /// Global submission timestamps.
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: std::sync::Arc::new(Mutex::new(RateLimiterInner {
                sender_requests: HashMap::new(),
                global_requests: VecDeque::new(),
            })),
            config: RateLimitConfig::from_env(),
        }
    }

    /// Check both per-sender and global limits, then record the submission.
    ///
    /// The sender key is the email address trimmed and lowercased, so case
    /// and whitespace variants of one address share a window. A denied
    /// submission is not recorded against either window.
    pub fn check_and_record(&self, sender: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(sender, Instant::now())
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, sender: &str, now: Instant) -> Result<(), RateLimitError> {
        let sender = sender.trim().to_lowercase();
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;

        // Prune and check global first (no borrow conflict). Checking before
        // the sender entry is created also caps map growth at the global rate.
        prune_window(&mut inner.global_requests, now, cfg.global_window);
        if inner.global_requests.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded {
                limit: cfg.global_limit,
                window_secs: cfg.global_window.as_secs(),
            });
        }

        // Prune and check per-sender.
        let sender_deque = inner.sender_requests.entry(sender).or_default();
        prune_window(sender_deque, now, cfg.per_sender_window);
        if sender_deque.len() >= cfg.per_sender_limit {
            return Err(RateLimitError::PerSenderExceeded {
                limit: cfg.per_sender_limit,
                window_secs: cfg.per_sender_window.as_secs(),
            });
        }

        // Record.
        sender_deque.push_back(now);
        inner.global_requests.push_back(now);

        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
