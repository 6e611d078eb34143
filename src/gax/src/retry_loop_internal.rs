// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::Result;
use super::backoff_policy::BackoffPolicy;
use super::error::Error;
use super::retry_policy::RetryPolicy;
use super::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;

/// Runs the retry loop for a given function.
///
/// This function calls `inner` until (1) it returns a successful response, or
/// (2) the retry policy rejects the last error, or (3) the retry policy is
/// exhausted.
///
/// In between calls the function waits the amount of time prescribed by the
/// backoff policy, using `sleep`. An exhausted policy produces an
/// [Exhausted][Error::is_exhausted] error wrapping the last failure.
pub async fn retry_loop<F, S, Response>(
    mut inner: F,
    sleep: S,
    idempotent: bool,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
{
    let loop_start = tokio::time::Instant::now().into_std();
    let mut attempt_count = 0_u32;
    loop {
        let remaining_time = retry_policy.remaining_time(loop_start, attempt_count);
        attempt_count += 1;
        let error = match inner(remaining_time).await {
            Ok(r) => return Ok(r),
            Err(e) => e,
        };
        let error = match retry_policy.on_error(loop_start, attempt_count, idempotent, error) {
            RetryResult::Permanent(e) => return Err(e),
            RetryResult::Exhausted(e) if attempt_count == 1 => return Err(e),
            RetryResult::Exhausted(e) => return Err(Error::exhausted(e)),
            RetryResult::Continue(e) => e,
        };
        let delay = backoff_policy.on_failure(loop_start, attempt_count);
        if retry_policy
            .remaining_time(loop_start, attempt_count)
            .is_some_and(|remaining| remaining < delay)
        {
            return Err(Error::exhausted(error));
        }
        tracing::debug!(attempt_count, ?delay, "retrying after error: {error}");
        sleep(delay).await;
    }
}

/// Computes the timeout for one attempt, given the attempt timeout in the
/// request options and the time remaining in the retry loop.
pub fn effective_timeout(
    options: &crate::options::RequestOptions,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    match (options.attempt_timeout(), remaining_time) {
        (None, None) => None,
        (None, Some(t)) => Some(t),
        (Some(t), None) => Some(*t),
        (Some(a), Some(r)) => Some(std::cmp::min(*a, r)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::{Code, Status};
    use crate::retry_policy::{Aip194Strict, NeverRetry, RetryPolicyExt};
    use std::error::Error as _;
    use std::time::Instant;
    use test_case::test_case;

    mockall::mock! {
        #[derive(Debug)]
        RetryPolicy {}
        impl RetryPolicy for RetryPolicy {
            fn on_error(&self, loop_start: Instant, attempt_count: u32, idempotent: bool, error: Error) -> RetryResult;
            fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        BackoffPolicy {}
        impl BackoffPolicy for BackoffPolicy {
            fn on_failure(&self, loop_start: Instant, attempt_count: u32) -> Duration;
        }
    }

    mockall::mock! {
        Call {
            fn call(&self, d: Option<Duration>) -> Result<String>;
        }
    }

    fn transient() -> Result<String> {
        Err(Error::service(
            Status::default()
                .set_code(Code::Unavailable)
                .set_message("try-again"),
        ))
    }

    fn permanent() -> Result<String> {
        Err(Error::service(
            Status::default()
                .set_code(Code::PermissionDenied)
                .set_message("uh-oh"),
        ))
    }

    fn success() -> Result<String> {
        Ok("success".into())
    }

    #[test_case(None, None, None)]
    #[test_case(Some(Duration::from_secs(4)), Some(Duration::from_secs(4)), None)]
    #[test_case(Some(Duration::from_secs(4)), None, Some(Duration::from_secs(4)))]
    #[test_case(
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(4))
    )]
    #[test_case(
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(4)),
        Some(Duration::from_secs(2))
    )]
    fn effective_timeouts(
        want: Option<Duration>,
        remaining: Option<Duration>,
        request: Option<Duration>,
    ) {
        let mut options = crate::options::RequestOptions::default();
        if let Some(t) = request {
            options.set_attempt_timeout(t);
        }
        assert_eq!(effective_timeout(&options, remaining), want);
    }

    #[tokio::test]
    async fn immediate_success() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| success());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy.expect_remaining_time().once().return_const(None);
        let backoff_policy = MockBackoffPolicy::new();

        let response = retry_loop(
            inner,
            async |_| {},
            true,
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await?;
        assert_eq!(response, "success");
        Ok(())
    }

    #[tokio::test]
    async fn immediate_failure() {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| permanent());
        let inner = async move |d| call.call(d);

        let response = retry_loop(
            inner,
            async |_| {},
            true,
            Arc::new(Aip194Strict.with_attempt_limit(5)),
            Arc::new(MockBackoffPolicy::new()),
        )
        .await;
        let err = response.unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
    }

    #[test_case(true)]
    #[test_case(false)]
    #[tokio::test]
    async fn retry_success(idempotent: bool) -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut call = MockCall::new();
        for want in [3, 2] {
            call.expect_call()
                .once()
                .in_sequence(&mut seq)
                .withf(move |got| got == &Some(Duration::from_secs(want)))
                .returning(|_| transient());
        }
        call.expect_call()
            .once()
            .in_sequence(&mut seq)
            .withf(|got| got == &Some(Duration::from_secs(1)))
            .returning(|_| success());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        let mut remaining = vec![3, 2, 2, 1, 1].into_iter();
        retry_policy
            .expect_remaining_time()
            .times(5)
            .returning(move |_, _| remaining.next().map(Duration::from_secs));
        retry_policy
            .expect_on_error()
            .times(2)
            .withf(move |_, _, got, _| got == &idempotent)
            .returning(|_, _, _, e| RetryResult::Continue(e));

        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .times(2)
            .return_const(Duration::from_millis(10));

        let sleeps = Arc::new(std::sync::Mutex::new(Vec::new()));
        let recorded = sleeps.clone();
        let sleep = async move |d| recorded.lock().unwrap().push(d);
        let response = retry_loop(
            inner,
            sleep,
            idempotent,
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await?;
        assert_eq!(response, "success");
        assert_eq!(
            *sleeps.lock().unwrap(),
            vec![Duration::from_millis(10), Duration::from_millis(10)]
        );
        Ok(())
    }

    #[tokio::test]
    async fn too_many_transients() {
        let mut call = MockCall::new();
        call.expect_call().times(3).returning(|_| transient());
        let inner = async move |d| call.call(d);

        let response = retry_loop(
            inner,
            async |_| {},
            true,
            Arc::new(Aip194Strict.with_attempt_limit(3)),
            Arc::new(crate::exponential_backoff::ExponentialBackoff::default()),
        )
        .await;
        let err = response.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<Error>())
            .and_then(|e| e.status());
        assert_eq!(source.map(|s| s.code), Some(Code::Unavailable));
    }

    #[tokio::test]
    async fn never_retry_returns_first_error() {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| transient());
        let inner = async move |d| call.call(d);

        let response = retry_loop(
            inner,
            async |_| {},
            true,
            Arc::new(NeverRetry),
            Arc::new(MockBackoffPolicy::new()),
        )
        .await;
        let err = response.unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
    }

    #[tokio::test]
    async fn backoff_exceeds_remaining_time() {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| transient());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .returning(|_, _| Some(Duration::from_millis(5)));
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, _, _, e| RetryResult::Continue(e));
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .once()
            .return_const(Duration::from_secs(1));

        let response = retry_loop(
            inner,
            async |_| {},
            true,
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await;
        let err = response.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
    }
}
