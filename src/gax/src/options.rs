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

//! Per request options.
//!
//! The client defaults are intended to work for most applications. Sometimes
//! an application needs to change the behavior of a single call, for example,
//! to change the timeout, disable retries, or attach extra metadata. The
//! builder returned by each client method implements [RequestOptionsBuilder]
//! for this purpose.
//!
//! Timeouts and retry policies are tri-state, see [MethodOption]: a call may
//! use the method default, an explicit value, or disable the feature.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling_error_policy::{PollingErrorPolicy, PollingErrorPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// A per-call override for a method default.
///
/// # Example
/// ```
/// # use vertexai_gax::options::MethodOption;
/// use std::time::Duration;
/// let default = Some(Duration::from_secs(60));
/// assert_eq!(MethodOption::Default.resolve(default), default);
/// assert_eq!(MethodOption::Explicit(Duration::from_secs(5)).resolve(default), Some(Duration::from_secs(5)));
/// assert_eq!(MethodOption::<Duration>::Disabled.resolve(default), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum MethodOption<T> {
    /// Use the value configured for the method.
    Default,
    /// Use this value.
    Explicit(T),
    /// Do not use this feature at all, e.g., no timeout or no retries.
    Disabled,
}

impl<T> MethodOption<T> {
    /// Combines the option with the method default.
    pub fn resolve(self, default: Option<T>) -> Option<T> {
        match self {
            Self::Default => default,
            Self::Explicit(v) => Some(v),
            Self::Disabled => None,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    pub fn as_ref(&self) -> MethodOption<&T> {
        match self {
            Self::Default => MethodOption::Default,
            Self::Explicit(v) => MethodOption::Explicit(v),
            Self::Disabled => MethodOption::Disabled,
        }
    }
}

impl<T> Default for MethodOption<T> {
    fn default() -> Self {
        Self::Default
    }
}

impl<T> From<T> for MethodOption<T> {
    fn from(value: T) -> Self {
        Self::Explicit(value)
    }
}

/// The value of an extra metadata entry.
///
/// Keys ending in `-bin` carry bytes, all other keys carry strings.
#[derive(Clone, Debug, PartialEq)]
pub enum MetadataValue {
    Ascii(String),
    Binary(bytes::Bytes),
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::Ascii(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::Ascii(value)
    }
}

impl From<bytes::Bytes> for MetadataValue {
    fn from(value: bytes::Bytes) -> Self {
        Self::Binary(value)
    }
}

impl From<Vec<u8>> for MetadataValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Binary(value.into())
    }
}

/// A set of options configuring a single request.
///
/// Applications only use this type directly in mocks, where they may want to
/// verify the application has configured the right options. All other code
/// uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
    timeout: MethodOption<Duration>,
    retry_policy: MethodOption<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
    metadata: Vec<(String, MetadataValue)>,
    cancellation: Option<CancellationToken>,
}

impl RequestOptions {
    /// Gets the idempotency.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Treat the RPC underlying this method as idempotent.
    ///
    /// Retry policies consult the idempotency to decide if an error is
    /// retryable. The client libraries provide a default based on the HTTP
    /// verb of the method.
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    pub(crate) fn set_default_idempotency(&mut self, default: bool) {
        self.idempotent.get_or_insert(default);
    }

    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    ///
    /// With retries this bounds each attempt, the overall bound is set with
    /// [set_timeout][Self::set_timeout].
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    /// Sets the total timeout for the call, including all retry attempts.
    pub fn set_timeout<T: Into<MethodOption<Duration>>>(&mut self, v: T) {
        self.timeout = v.into();
    }

    pub fn timeout(&self) -> &MethodOption<Duration> {
        &self.timeout
    }

    /// Sets the retry policy for the call.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = MethodOption::Explicit(v.into().into());
    }

    /// Disables retries for the call.
    pub fn disable_retry(&mut self) {
        self.retry_policy = MethodOption::Disabled;
    }

    pub fn retry_policy(&self) -> &MethodOption<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }

    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    pub fn set_polling_error_policy<V: Into<PollingErrorPolicyArg>>(&mut self, v: V) {
        self.polling_error_policy = Some(v.into().into());
    }

    pub fn polling_error_policy(&self) -> &Option<Arc<dyn PollingErrorPolicy>> {
        &self.polling_error_policy
    }

    pub fn set_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(&mut self, v: V) {
        self.polling_backoff_policy = Some(v.into().into());
    }

    pub fn polling_backoff_policy(&self) -> &Option<Arc<dyn PollingBackoffPolicy>> {
        &self.polling_backoff_policy
    }

    /// Appends a metadata entry sent with the request.
    ///
    /// Entries are appended after the routing header, in insertion order.
    pub fn add_metadata<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata.push((key.into(), value.into()));
    }

    pub fn metadata(&self) -> &[(String, MetadataValue)] {
        &self.metadata
    }

    /// Sets a token to cancel the call.
    ///
    /// Cancelling the token fails the in-flight call with a
    /// [cancelled][crate::error::Error::is_cancelled] error.
    pub fn set_cancellation_token(&mut self, token: CancellationToken) {
        self.cancellation = Some(token);
    }

    pub fn cancellation_token(&self) -> &Option<CancellationToken> {
        &self.cancellation
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client libraries provide a builder for each RPC. These builders set the
/// request parameters, e.g., the name of the resource targeted by the RPC, as
/// well as any options affecting the request.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// If `v` is `true`, treat the RPC underlying this method as idempotent.
    fn with_idempotency(self, v: bool) -> Self;

    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the total timeout, or disables it with [MethodOption::Disabled].
    fn with_timeout<V: Into<MethodOption<Duration>>>(self, v: V) -> Self;

    /// Sets the retry policy configuration.
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    /// Disables retries for this call.
    fn without_retry(self) -> Self;

    /// Sets the backoff policy configuration.
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;

    /// Sets the polling error policy configuration.
    fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(self, v: V) -> Self;

    /// Sets the polling backoff policy configuration.
    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(self, v: V) -> Self;

    /// Appends a metadata entry.
    fn with_metadata<K: Into<String>, V: Into<MetadataValue>>(self, key: K, value: V) -> Self;

    /// Sets a cancellation token for the call.
    fn with_cancellation_token(self, token: CancellationToken) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! Implementation details, not part of the public API.
    use super::RequestOptions;

    /// Simplifies the implementation of [super::RequestOptionsBuilder] in
    /// the request builders.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.set_default_idempotency(default);
        options
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_timeout<V: Into<MethodOption<Duration>>>(mut self, v: V) -> Self {
        self.request_options().set_timeout(v);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn without_retry(mut self) -> Self {
        self.request_options().disable_retry();
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }

    fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_error_policy(v);
        self
    }

    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_backoff_policy(v);
        self
    }

    fn with_metadata<K: Into<String>, V: Into<MetadataValue>>(mut self, key: K, value: V) -> Self {
        self.request_options().add_metadata(key, value);
        self
    }

    fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.request_options().set_cancellation_token(token);
        self
    }
}
