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

//! Wrapped methods: the per-method defaults combined with the client
//! configuration.
//!
//! Each client wraps every method at most once. Per-call settings are
//! resolved against the wrapped method for each request, without modifying
//! it.

use crate::descriptor::{MethodDescriptor, RetrySettings};
use gax::backoff_policy::BackoffPolicy;
use gax::exponential_backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use gax::options::RequestOptions;
use gax::retry_policy::{RetryOn, RetryPolicy, RetryPolicyExt};
use http::HeaderMap;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// The client-level settings applied to all wrapped methods.
#[derive(Clone, Debug, Default)]
pub struct WrapperDefaults {
    pub retry_policy: Option<Arc<dyn RetryPolicy>>,
    pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    /// Sent with every request, e.g. `x-goog-api-client` and `user-agent`.
    pub metadata: HeaderMap,
}

#[derive(Debug)]
pub struct WrappedMethod {
    descriptor: &'static MethodDescriptor,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Arc<dyn BackoffPolicy>,
    timeout: Option<Duration>,
    metadata: HeaderMap,
}

/// The settings for a single call.
#[derive(Clone, Debug)]
pub struct CallSettings {
    pub idempotent: bool,
    pub retry_policy: Option<Arc<dyn RetryPolicy>>,
    pub backoff_policy: Arc<dyn BackoffPolicy>,
    pub timeout: Option<Duration>,
}

impl WrappedMethod {
    pub fn new(descriptor: &'static MethodDescriptor, defaults: &WrapperDefaults) -> Self {
        let (retry_policy, backoff_policy) = match &descriptor.retry {
            RetrySettings::None => (None, None),
            RetrySettings::OnCodes {
                codes,
                initial_delay,
                maximum_delay,
                multiplier,
                deadline,
            } => {
                let retry: Arc<dyn RetryPolicy> =
                    Arc::new(RetryOn::new(codes.iter().copied()).with_time_limit(*deadline));
                let backoff: Arc<dyn BackoffPolicy> = Arc::new(
                    ExponentialBackoffBuilder::new()
                        .with_initial_delay(*initial_delay)
                        .with_maximum_delay(*maximum_delay)
                        .with_scaling(*multiplier)
                        .clamp(),
                );
                (Some(retry), Some(backoff))
            }
        };
        Self {
            descriptor,
            retry_policy: defaults.retry_policy.clone().or(retry_policy),
            backoff_policy: defaults
                .backoff_policy
                .clone()
                .or(backoff_policy)
                .unwrap_or_else(|| Arc::new(ExponentialBackoff::default())),
            timeout: descriptor.default_timeout,
            metadata: defaults.metadata.clone(),
        }
    }

    pub fn descriptor(&self) -> &'static MethodDescriptor {
        self.descriptor
    }

    /// The metadata sent with every call to this method.
    pub fn metadata(&self) -> &HeaderMap {
        &self.metadata
    }

    /// Combines the per-call options with the method defaults.
    pub fn settings(&self, options: &RequestOptions) -> CallSettings {
        CallSettings {
            idempotent: options.idempotent().unwrap_or(self.descriptor.idempotent),
            retry_policy: options
                .retry_policy()
                .clone()
                .resolve(self.retry_policy.clone()),
            backoff_policy: options
                .backoff_policy()
                .clone()
                .unwrap_or_else(|| self.backoff_policy.clone()),
            timeout: options.timeout().clone().resolve(self.timeout),
        }
    }
}

/// The wrapped methods for a client, keyed by method.
#[derive(Debug, Default)]
pub struct MethodWrapperCache {
    wrappers: Mutex<HashMap<&'static str, Arc<WrappedMethod>>>,
}

impl MethodWrapperCache {
    /// Returns the wrapped method, creating it on first use.
    pub fn get_or_wrap(
        &self,
        descriptor: &'static MethodDescriptor,
        defaults: &WrapperDefaults,
    ) -> Arc<WrappedMethod> {
        let mut wrappers = self.wrappers.lock().unwrap_or_else(PoisonError::into_inner);
        wrappers
            .entry(descriptor.key())
            .or_insert_with(|| Arc::new(WrappedMethod::new(descriptor, defaults)))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.wrappers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::tests::GET_DATASET;
    use crate::descriptor::{Body, HttpRule};
    use gax::options::MethodOption;
    use gax::retry_policy::NeverRetry;

    static DELETE_DATASET: MethodDescriptor = MethodDescriptor {
        service: "google.cloud.aiplatform.v1.DatasetService",
        method: "DeleteDataset",
        grpc_path: "/google.cloud.aiplatform.v1.DatasetService/DeleteDataset",
        http: HttpRule {
            verb: http::Method::DELETE,
            path_template: "/v1/{name=projects/*/locations/*/datasets/*}",
            body: Body::None,
        },
        idempotent: false,
        default_timeout: None,
        retry: RetrySettings::None,
        routing: &[],
        long_running: true,
    };

    #[test]
    fn defaults_from_descriptor() {
        let wrapped = WrappedMethod::new(&GET_DATASET, &WrapperDefaults::default());
        let settings = wrapped.settings(&RequestOptions::default());
        assert!(settings.idempotent);
        assert!(settings.retry_policy.is_some(), "{settings:?}");
        assert_eq!(settings.timeout, Some(Duration::from_secs(5)));

        let wrapped = WrappedMethod::new(&DELETE_DATASET, &WrapperDefaults::default());
        let settings = wrapped.settings(&RequestOptions::default());
        assert!(!settings.idempotent);
        assert!(settings.retry_policy.is_none(), "{settings:?}");
        assert_eq!(settings.timeout, None);
    }

    #[test]
    fn client_overrides_descriptor() {
        let defaults = WrapperDefaults {
            retry_policy: Some(Arc::new(NeverRetry)),
            ..Default::default()
        };
        let wrapped = WrappedMethod::new(&DELETE_DATASET, &defaults);
        let settings = wrapped.settings(&RequestOptions::default());
        let policy = format!("{:?}", settings.retry_policy);
        assert!(policy.contains("NeverRetry"), "{policy}");
    }

    #[test]
    fn per_call_overrides() {
        let wrapped = WrappedMethod::new(&GET_DATASET, &WrapperDefaults::default());

        let mut options = RequestOptions::default();
        options.set_timeout(Duration::from_secs(30));
        options.disable_retry();
        options.set_idempotency(false);
        let settings = wrapped.settings(&options);
        assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
        assert!(settings.retry_policy.is_none(), "{settings:?}");
        assert!(!settings.idempotent);

        let mut options = RequestOptions::default();
        options.set_timeout(MethodOption::Disabled);
        let settings = wrapped.settings(&options);
        assert_eq!(settings.timeout, None);

        // The wrapped method is unchanged.
        let settings = wrapped.settings(&RequestOptions::default());
        assert_eq!(settings.timeout, Some(Duration::from_secs(5)));
        assert!(settings.retry_policy.is_some(), "{settings:?}");
    }

    #[test]
    fn cache_returns_same_wrapper() {
        let cache = MethodWrapperCache::default();
        assert!(cache.is_empty());
        let defaults = WrapperDefaults::default();
        let w1 = cache.get_or_wrap(&GET_DATASET, &defaults);
        let w2 = cache.get_or_wrap(&GET_DATASET, &defaults);
        assert!(Arc::ptr_eq(&w1, &w2));
        let w3 = cache.get_or_wrap(&DELETE_DATASET, &defaults);
        assert!(!Arc::ptr_eq(&w1, &w3));
        assert_eq!(cache.len(), 2);
    }
}
