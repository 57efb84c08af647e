//! Retry rules and their construction from config.

use std::time::Duration;

use tonic::{Code, Status};

use crate::config::Config;

/// Base delay of the linear backoff for transient failures.
pub const TRANSIENT_BACKOFF_BASE: Duration = Duration::from_millis(500);

/// Trailer with the seconds left until the rate limit window resets.
pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Failure classes for retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// Server-side hiccup (`UNAVAILABLE`, `INTERNAL`).
    Transient,
    /// Rate limit exhausted (`RESOURCE_EXHAUSTED`).
    RateLimited,
    /// Anything else; never retried.
    Other,
}

impl FailureClass {
    /// Classify a gRPC code.
    #[must_use]
    pub const fn from_code(code: Code) -> Self {
        match code {
            Code::Unavailable | Code::Internal => Self::Transient,
            Code::ResourceExhausted => Self::RateLimited,
            _ => Self::Other,
        }
    }

    /// Classify a failed call.
    #[must_use]
    pub fn of(status: &Status) -> Self {
        Self::from_code(status.code())
    }
}

/// Wait strategy between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// `base * attempt`, attempt counted from 1.
    Linear {
        /// Delay before the first retry.
        base: Duration,
    },
    /// Wait for the server's `x-ratelimit-reset` trailer; no wait without it.
    RateLimitReset,
}

impl Backoff {
    /// Delay before retry number `attempt` (1-based) after `status`.
    #[must_use]
    pub fn delay(&self, attempt: u32, status: &Status) -> Duration {
        match self {
            Self::Linear { base } => base.saturating_mul(attempt.max(1)),
            Self::RateLimitReset => rate_limit_reset(status).unwrap_or(Duration::ZERO),
        }
    }
}

/// Seconds until the rate limit resets, as reported by the server.
#[must_use]
pub fn rate_limit_reset(status: &Status) -> Option<Duration> {
    status
        .metadata()
        .get(RATE_LIMIT_RESET_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// One (class, backoff, budget) rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryRule {
    /// Failures this rule applies to.
    pub class: FailureClass,
    /// Wait between attempts.
    pub backoff: Backoff,
    /// Retries allowed after the first attempt.
    pub max_retries: u32,
}

impl RetryRule {
    /// Linear backoff from [`TRANSIENT_BACKOFF_BASE`] on transient failures.
    #[must_use]
    pub const fn transient(max_retries: u32) -> Self {
        Self {
            class: FailureClass::Transient,
            backoff: Backoff::Linear {
                base: TRANSIENT_BACKOFF_BASE,
            },
            max_retries,
        }
    }

    /// Rate limit retries, waiting for the server's reset hint.
    #[must_use]
    pub const fn rate_limited(max_retries: u32) -> Self {
        Self {
            class: FailureClass::RateLimited,
            backoff: Backoff::RateLimitReset,
            max_retries,
        }
    }
}

/// Ordered retry rules applied around one kind of call.
///
/// The first rule whose class matches a failure decides whether it is
/// retried; an empty policy never retries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetryPolicy {
    rules: Vec<RetryRule>,
}

impl RetryPolicy {
    /// Policy that never retries.
    #[must_use]
    pub const fn none() -> Self {
        Self { rules: Vec::new() }
    }

    /// Policy from explicit rules, in match order.
    #[must_use]
    pub const fn new(rules: Vec<RetryRule>) -> Self {
        Self { rules }
    }

    /// Policy for unary calls.
    ///
    /// `[transient]`, plus `[rate-limited]` unless
    /// `DisableResourceExhaustedRetry` is set; empty when `MaxRetries` is 0.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        if config.disable_all_retry || config.max_retries == 0 {
            return Self::none();
        }

        let mut rules = vec![RetryRule::transient(config.max_retries)];
        if !config.disable_resource_exhausted_retry {
            rules.push(RetryRule::rate_limited(config.max_retries));
        }
        Self { rules }
    }

    /// Policy for opening server streams: transient failures only.
    #[must_use]
    pub fn stream_from_config(config: &Config) -> Self {
        if config.disable_all_retry || config.max_retries == 0 {
            return Self::none();
        }
        Self {
            rules: vec![RetryRule::transient(config.max_retries)],
        }
    }

    /// Rules in match order.
    #[must_use]
    pub fn rules(&self) -> &[RetryRule] {
        &self.rules
    }

    /// Whether this policy never retries.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.rules.iter().all(|rule| rule.max_retries == 0)
    }

    /// Index and rule handling `class`, if any.
    pub(crate) fn rule_for(&self, class: FailureClass) -> Option<(usize, &RetryRule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.class == class)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;
    use tonic::metadata::MetadataValue;

    use super::*;

    #[test_case(Code::Unavailable, FailureClass::Transient)]
    #[test_case(Code::Internal, FailureClass::Transient)]
    #[test_case(Code::ResourceExhausted, FailureClass::RateLimited)]
    #[test_case(Code::InvalidArgument, FailureClass::Other)]
    #[test_case(Code::Unauthenticated, FailureClass::Other)]
    #[test_case(Code::DeadlineExceeded, FailureClass::Other)]
    #[test_case(Code::NotFound, FailureClass::Other)]
    fn classifies_codes(code: Code, expected: FailureClass) {
        assert_eq!(FailureClass::from_code(code), expected);
    }

    #[test]
    fn linear_backoff_strictly_increases() {
        let backoff = Backoff::Linear {
            base: TRANSIENT_BACKOFF_BASE,
        };
        let status = Status::unavailable("down");
        let delays: Vec<Duration> = (1..=5).map(|n| backoff.delay(n, &status)).collect();
        assert_eq!(delays[0], Duration::from_millis(500));
        assert_eq!(delays[2], Duration::from_millis(1500));
        assert!(delays.windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn rate_limit_reset_reads_trailer() {
        let mut status = Status::resource_exhausted("limit");
        assert_eq!(Backoff::RateLimitReset.delay(1, &status), Duration::ZERO);

        status
            .metadata_mut()
            .insert(RATE_LIMIT_RESET_HEADER, MetadataValue::from_static("7"));
        assert_eq!(
            Backoff::RateLimitReset.delay(1, &status),
            Duration::from_secs(7)
        );
    }

    #[test]
    fn unary_policy_has_both_rules_in_order() {
        let config = Config::new("t-token");
        let policy = RetryPolicy::from_config(&config);
        let classes: Vec<FailureClass> = policy.rules().iter().map(|r| r.class).collect();
        assert_eq!(
            classes,
            vec![FailureClass::Transient, FailureClass::RateLimited]
        );
        assert!(policy.rules().iter().all(|r| r.max_retries == 3));
    }

    #[test]
    fn rate_limit_rule_can_be_disabled() {
        let config = Config {
            disable_resource_exhausted_retry: true,
            ..Config::new("t-token")
        };
        let policy = RetryPolicy::from_config(&config);
        assert_eq!(policy.rules(), &[RetryRule::transient(3)]);
        assert!(policy.rule_for(FailureClass::RateLimited).is_none());
    }

    #[test]
    fn disable_all_retry_empties_both_policies() {
        let config = Config {
            disable_all_retry: true,
            ..Config::new("t-token")
        }
        .with_defaults();
        assert!(RetryPolicy::from_config(&config).is_disabled());
        assert!(RetryPolicy::stream_from_config(&config).is_disabled());
    }

    #[test]
    fn stream_policy_is_transient_only() {
        let policy = RetryPolicy::stream_from_config(&Config::new("t-token"));
        assert_eq!(policy.rules(), &[RetryRule::transient(3)]);
    }
}
