//! The retry decorator around call dispatch.

use std::future::Future;

use tonic::Status;

use super::policy::{FailureClass, RetryPolicy};

impl RetryPolicy {
    /// Run `call` until it succeeds, fails with a class no rule covers, or
    /// the matching rule's budget is spent.
    ///
    /// `call` is invoked once per attempt and must build a fresh request each
    /// time. Each rule counts its own retries, so `max_retries` retries of a
    /// class mean up to `max_retries + 1` attempts for that class.
    ///
    /// # Errors
    ///
    /// Returns the status of the last attempt.
    pub async fn run<T, F, Fut>(&self, method: &'static str, mut call: F) -> Result<T, Status>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, Status>>,
    {
        let mut used = vec![0_u32; self.rules().len()];
        let mut attempt: u32 = 1;

        loop {
            let status = match call().await {
                Ok(value) => return Ok(value),
                Err(status) => status,
            };

            let class = FailureClass::of(&status);
            let Some((index, rule)) = self.rule_for(class) else {
                return Err(status);
            };
            if used[index] >= rule.max_retries {
                tracing::warn!(
                    method,
                    attempts = attempt,
                    code = ?status.code(),
                    "retry budget exhausted"
                );
                return Err(status);
            }

            used[index] += 1;
            let delay = rule.backoff.delay(used[index], &status);
            tracing::warn!(
                method,
                attempt,
                class = ?class,
                code = ?status.code(),
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "retrying call"
            );

            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    use tokio::time::Instant;
    use tonic::metadata::MetadataValue;

    use super::*;
    use crate::config::Config;
    use crate::retry::policy::{RATE_LIMIT_RESET_HEADER, RetryRule};

    /// Fails with the given statuses in order, then succeeds.
    fn scripted(
        failures: Vec<Status>,
    ) -> (Arc<AtomicU32>, impl FnMut() -> std::future::Ready<Result<u32, Status>>) {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let mut failures = failures.into_iter();
        let call = move || {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            std::future::ready(failures.next().map_or(Ok(n), Err))
        };
        (calls, call)
    }

    #[tokio::test(start_paused = true)]
    async fn two_transient_failures_then_success() {
        let policy = RetryPolicy::from_config(&Config::new("t-token"));
        let (calls, call) = scripted(vec![
            Status::unavailable("down"),
            Status::internal("oops"),
        ]);

        let start = Instant::now();
        let result = policy.run("PostOrder", call).await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        // 500ms * 1 + 500ms * 2
        assert_eq!(start.elapsed(), Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn transient_budget_is_max_retries() {
        let policy = RetryPolicy::new(vec![RetryRule::transient(3)]);
        let (calls, call) = scripted((0..10).map(|_| Status::unavailable("down")).collect());

        let err = policy.run("GetCandles", call).await.unwrap_err();

        assert_eq!(err.code(), tonic::Code::Unavailable);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn other_failures_are_not_retried() {
        let policy = RetryPolicy::from_config(&Config::new("t-token"));
        let (calls, call) = scripted(vec![Status::invalid_argument("bad figi")]);

        let err = policy.run("GetInstrumentBy", call).await.unwrap_err();

        assert_eq!(err.code(), tonic::Code::InvalidArgument);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn rate_limit_waits_for_reset_hint() {
        let policy = RetryPolicy::from_config(&Config::new("t-token"));
        let mut limited = Status::resource_exhausted("limit");
        limited
            .metadata_mut()
            .insert(RATE_LIMIT_RESET_HEADER, MetadataValue::from_static("2"));
        let (calls, call) = scripted(vec![limited]);

        let start = Instant::now();
        assert!(policy.run("GetLastPrices", call).await.is_ok());

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn disabled_rate_limit_retry_fails_first_time() {
        let config = Config {
            disable_resource_exhausted_retry: true,
            ..Config::new("t-token")
        };
        let policy = RetryPolicy::from_config(&config);
        let (calls, call) = scripted(vec![Status::resource_exhausted("limit")]);

        let err = policy.run("GetLastPrices", call).await.unwrap_err();

        assert_eq!(err.code(), tonic::Code::ResourceExhausted);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn disable_all_retry_never_retries() {
        let config = Config {
            disable_all_retry: true,
            ..Config::new("t-token")
        }
        .with_defaults();
        let policy = RetryPolicy::from_config(&config);

        for status in [
            Status::unavailable("down"),
            Status::internal("oops"),
            Status::resource_exhausted("limit"),
        ] {
            let (calls, call) = scripted(vec![status]);
            assert!(policy.run("GetAccounts", call).await.is_err());
            assert_eq!(calls.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn classes_keep_separate_budgets() {
        let policy = RetryPolicy::new(vec![
            RetryRule::transient(1),
            RetryRule::rate_limited(1),
        ]);
        let (calls, call) = scripted(vec![
            Status::unavailable("down"),
            Status::resource_exhausted("limit"),
        ]);

        assert!(policy.run("GetPortfolio", call).await.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
