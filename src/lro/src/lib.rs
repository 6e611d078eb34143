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

//! Types and functions to make long-running operations (LROs) easier to use.
//!
//! Some methods start an operation on the service and return immediately with
//! a handle to it. The handle, an [Operation], tracks the latest known state of
//! the operation, polls the service to refresh that state, and waits for the
//! final result.
//!
//! ```no_run
//! # use vertexai_lro::{Operation, Poller};
//! # async fn sample(mut op: Operation<wkt::Empty, wkt::Empty>) -> gax::Result<()> {
//! // Wait up to ten minutes for the operation to complete.
//! let response = op.result(Some(std::time::Duration::from_secs(600))).await?;
//! println!("{response:?}");
//! # Ok(()) }
//! ```

use gax::Result;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::PollingErrorPolicy;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::{Duration, Instant};

mod details;

/// The result of polling a long-running operation.
///
/// # Parameters
/// * `R` - the response type. This is the type returned when the operation
///   completes successfully.
/// * `M` - the metadata type. While in progress the operation may report
///   values of this type.
#[derive(Debug)]
pub enum PollingResult<R, M> {
    /// The operation is still in progress.
    InProgress(Option<M>),
    /// The operation completed. This includes the result.
    Completed(Result<R>),
    /// An error trying to poll the operation.
    ///
    /// Not all errors indicate that the operation failed. Transient errors,
    /// such as a dropped connection, may disappear in the next polling
    /// attempt. Errors that cannot recover are reported as
    /// [PollingResult::Completed].
    PollingError(Error),
}

/// The lifecycle state of an [Operation].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum State {
    /// The operation was started and has not been polled yet.
    Pending,
    /// The service reported the operation as not done.
    Running,
    /// The operation completed with a response.
    Succeeded,
    /// The operation completed with an error.
    Failed,
    /// The operation was cancelled.
    Cancelled,
}

impl State {
    /// Returns true for the states where the operation has finished.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Cancelled)
    }
}

/// The trait implemented by operation handles.
///
/// # Parameters
/// * `R` - the response type, that is, the type of response included when the
///   operation completes successfully.
/// * `M` - the metadata type, that is, the type returned by the service when
///   the operation is still in progress.
pub trait Poller<R, M>: Send {
    /// Queries the current status of the operation.
    ///
    /// Returns `None` once the operation has completed, or once polling has
    /// stopped. After a `PollingResult::Completed` the application should stop
    /// calling this function.
    fn poll(&mut self) -> impl Future<Output = Option<PollingResult<R, M>>> + Send;

    /// Polls the operation until it is completed.
    ///
    /// This is a convenience function to poll the operation until it
    /// completes, sleeping between attempts as configured by the polling
    /// backoff policy.
    fn until_done(self) -> impl Future<Output = Result<R>> + Send;

    /// Converts the poller into a [futures::stream::Stream].
    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>>;
}

/// A handle to a long-running operation.
///
/// The handle caches the latest state reported by the service. Only
/// [Poller::poll], [Operation::result], and [Operation::cancel] make RPCs.
#[derive(Debug)]
pub struct Operation<R, M> {
    latest: longrunning::model::Operation,
    state: State,
    stopped: bool,
    client: Arc<dyn internal::OperationsClient>,
    options: RequestOptions,
    error_policy: Arc<dyn PollingErrorPolicy>,
    backoff_policy: Arc<dyn PollingBackoffPolicy>,
    loop_start: Instant,
    attempt_count: u32,
    _phantom: PhantomData<fn() -> (R, M)>,
}

impl<R, M> Operation<R, M>
where
    R: wkt::message::Message,
    M: wkt::message::Message,
{
    /// Creates a handle from the operation returned by the starting RPC.
    ///
    /// Applications should not need to call this function. The clients return
    /// [Operation] values from the methods that start an operation.
    #[doc(hidden)]
    pub fn new(
        initial: longrunning::model::Operation,
        client: Arc<dyn internal::OperationsClient>,
        options: RequestOptions,
        error_policy: Arc<dyn PollingErrorPolicy>,
        backoff_policy: Arc<dyn PollingBackoffPolicy>,
    ) -> Self {
        let state = if initial.done {
            details::state_of(&initial)
        } else {
            State::Pending
        };
        Self {
            latest: initial,
            state,
            stopped: false,
            client,
            options,
            error_policy,
            backoff_policy,
            loop_start: tokio::time::Instant::now().into_std(),
            attempt_count: 0,
            _phantom: PhantomData,
        }
    }

    /// The name of the operation, as assigned by the service.
    pub fn name(&self) -> &str {
        &self.latest.name
    }

    /// The current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns true if the last known state is terminal.
    ///
    /// This never makes an RPC, the value may be stale.
    pub fn done(&self) -> bool {
        self.state.is_terminal()
    }

    /// Decodes the metadata in the last known state, if any.
    pub fn metadata(&self) -> Option<M> {
        details::as_metadata(&self.latest)
    }

    /// The last known state, as returned by the service.
    pub fn raw(&self) -> &longrunning::model::Operation {
        &self.latest
    }

    /// Waits for the operation to complete and returns its result.
    ///
    /// With a `timeout` the wait is bounded. If the operation does not
    /// complete in time this returns a timeout error, the operation keeps
    /// running on the service, and the handle may be used again.
    ///
    /// If the operation was cancelled this returns a cancellation error.
    pub async fn result(&mut self, timeout: Option<Duration>) -> Result<R> {
        let Some(timeout) = timeout else {
            return self.wait().await;
        };
        let result = tokio::time::timeout(timeout, self.wait()).await;
        match result {
            Ok(r) => r,
            Err(_) => Err(Error::timeout(format!(
                "operation {} did not complete within {timeout:?}",
                self.latest.name
            ))),
        }
    }

    /// Requests the cancellation of the operation.
    ///
    /// Returns `Ok(false)` without making any RPCs if the operation is
    /// already done. Otherwise returns `Ok(true)` if the service accepted the
    /// request. Cancellation is best-effort: the operation may still complete
    /// successfully, in which case the handle reports the success.
    pub async fn cancel(&mut self) -> Result<bool> {
        if self.done() {
            return Ok(false);
        }
        self.client
            .cancel_operation(self.latest.name.clone(), self.options.clone())
            .await?;
        match self
            .client
            .get_operation(self.latest.name.clone(), self.options.clone())
            .await
        {
            Ok(op) if op.done => {
                self.state = details::state_of(&op);
                if self.state == State::Failed {
                    self.state = State::Cancelled;
                }
                self.latest = op;
            }
            Ok(op) => {
                self.latest = op;
                self.state = State::Cancelled;
            }
            Err(e) => {
                tracing::debug!(operation = %self.latest.name, "cannot refresh cancelled operation: {e}");
                self.state = State::Cancelled;
            }
        }
        Ok(true)
    }

    fn terminal_result(&self) -> Result<R> {
        let result = details::as_result::<R>(&self.latest);
        if self.state != State::Cancelled {
            return result;
        }
        match result {
            Err(e) if e.is_cancelled() => Err(e),
            Err(e) if self.latest.done => Err(Error::cancelled(e)),
            _ => Err(Error::cancelled(format!(
                "operation {} was cancelled",
                self.latest.name
            ))),
        }
    }

    fn stopped_error(&self) -> Error {
        Error::exhausted(format!(
            "polling stopped before operation {} completed",
            self.latest.name
        ))
    }

    async fn wait(&mut self) -> Result<R> {
        loop {
            if self.done() {
                return self.terminal_result();
            }
            if self.stopped {
                return Err(self.stopped_error());
            }
            if let Some(PollingResult::Completed(r)) = self.poll_once().await {
                return r;
            }
            let delay = self
                .backoff_policy
                .wait_period(self.loop_start, self.attempt_count);
            tracing::debug!(operation = %self.latest.name, ?delay, "operation in progress");
            tokio::time::sleep(delay).await;
        }
    }

    async fn poll_once(&mut self) -> Option<PollingResult<R, M>> {
        if self.done() || self.stopped {
            return None;
        }
        self.attempt_count += 1;
        let result = self
            .client
            .get_operation(self.latest.name.clone(), self.options.clone())
            .await;
        let op = match result {
            Ok(op) => op,
            Err(e) => {
                return match details::classify_polling_error(
                    self.error_policy.as_ref(),
                    self.loop_start,
                    self.attempt_count,
                    e,
                ) {
                    Ok(e) => Some(PollingResult::PollingError(e)),
                    Err(e) => {
                        self.stopped = true;
                        Some(PollingResult::Completed(Err(e)))
                    }
                };
            }
        };
        self.latest = op;
        if self.latest.done {
            self.state = details::state_of(&self.latest);
            return Some(PollingResult::Completed(self.terminal_result()));
        }
        self.state = State::Running;
        if let Some(e) = self.error_policy.on_in_progress(
            self.loop_start,
            self.attempt_count,
            &self.latest.name,
        ) {
            self.stopped = true;
            return Some(PollingResult::Completed(Err(e)));
        }
        Some(PollingResult::InProgress(self.metadata()))
    }
}

impl<R, M> Poller<R, M> for Operation<R, M>
where
    R: wkt::message::Message + 'static,
    M: wkt::message::Message + 'static,
{
    fn poll(&mut self) -> impl Future<Output = Option<PollingResult<R, M>>> + Send {
        self.poll_once()
    }

    fn until_done(mut self) -> impl Future<Output = Result<R>> + Send {
        async move { self.wait().await }
    }

    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>> {
        futures::stream::unfold(self, |mut op| async move {
            op.poll_once().await.map(|r| (r, op))
        })
    }
}

#[doc(hidden)]
pub mod internal {
    //! Implementation details used by the generated clients.

    use gax::Result;
    use gax::options::RequestOptions;

    /// The RPCs needed to poll and cancel long-running operations.
    #[async_trait::async_trait]
    pub trait OperationsClient: std::fmt::Debug + Send + Sync {
        /// Fetches the latest state of an operation.
        async fn get_operation(
            &self,
            name: String,
            options: RequestOptions,
        ) -> Result<longrunning::model::Operation>;

        /// Requests the cancellation of an operation.
        async fn cancel_operation(&self, name: String, options: RequestOptions) -> Result<()>;
    }
}
