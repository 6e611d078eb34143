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

//! The transport shared by all the clients in a service crate.
//!
//! A [Transport] owns the connection, the credentials, and the wrapped
//! methods. It runs each call through the same pipeline: compute the routing
//! header, run the interceptor `before` hook, apply the timeout and retry
//! policies, send the request, enrich authentication errors, and finally run
//! the interceptor `after` hook.

use crate::api_header::{X_GOOG_API_CLIENT, api_client_header, user_agent};
use crate::descriptor::MethodDescriptor;
use crate::endpoint::{host_from_endpoint, resolve_endpoint, resolve_universe_domain};
use crate::environment::EnvironmentSnapshot;
use crate::grpc::GrpcClient;
use crate::http::HttpClient;
use crate::operations::OperationsClient;
use crate::options::{ClientConfig, Credentials, ServiceInfo, tracing_enabled};
use crate::routing_parameter::{X_GOOG_REQUEST_PARAMS, request_params};
use crate::transcode::{HttpRequest, lookup};
use crate::wrapper::{MethodWrapperCache, WrappedMethod, WrapperDefaults};
use base64::Engine as _;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::client_builder::Result as BuilderResult;
use gax::client_builder::TransportKind;
use gax::error::Error;
use gax::exponential_backoff::ExponentialBackoff;
use gax::interceptor::Interceptors;
use gax::options::{MetadataValue, RequestOptions};
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::{Aip194Strict, PollingErrorPolicy};
use gax::retry_loop_internal::{effective_timeout, retry_loop};
use http::header::{HeaderName, HeaderValue, USER_AGENT};
use http::HeaderMap;
use serde_json::Value;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use std::time::Duration;
use tracing::Instrument;
use wkt::message::Message;

#[derive(Clone, Debug)]
enum Channel {
    Http(HttpClient),
    Grpc(GrpcClient),
}

// A request ready to send, possibly many times.
enum Prepared<Req> {
    Http(HttpClient, HttpRequest),
    Grpc(GrpcClient, Req),
}

#[derive(Clone, Debug)]
pub struct Transport {
    inner: Arc<TransportInner>,
}

#[derive(Debug)]
pub(crate) struct TransportInner {
    info: &'static ServiceInfo,
    endpoint: String,
    host: String,
    universe_domain: String,
    transport_kind: TransportKind,
    credentials: Credentials,
    channel: RwLock<Option<Channel>>,
    wrappers: MethodWrapperCache,
    wrapper_defaults: WrapperDefaults,
    operations: OnceLock<Arc<OperationsClient>>,
    polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
    interceptors: Interceptors,
    tracing: bool,
}

impl Transport {
    /// Creates a transport, capturing the environment once.
    pub async fn new(config: ClientConfig, info: &'static ServiceInfo) -> BuilderResult<Self> {
        let env = EnvironmentSnapshot::capture()?;
        Self::with_environment(config, info, env).await
    }

    /// Creates a transport using a previously captured environment.
    pub async fn with_environment(
        config: ClientConfig,
        info: &'static ServiceInfo,
        env: EnvironmentSnapshot,
    ) -> BuilderResult<Self> {
        let universe_domain = resolve_universe_domain(config.universe_domain.as_deref(), &env)?;
        let client_cert = match (&config.client_cert_source, env.use_client_certificate) {
            (Some(source), true) => Some(source.load().map_err(BuilderError::transport)?),
            _ => None,
        };
        let endpoint = resolve_endpoint(
            info,
            config.endpoint.as_deref(),
            client_cert.is_some(),
            &universe_domain,
            &env,
        )?;
        let default_endpoint = resolve_endpoint(
            info,
            None,
            false,
            &universe_domain,
            &EnvironmentSnapshot::default(),
        )?;
        let host = host_from_endpoint(Some(&endpoint), &default_endpoint)?;

        let credentials = crate::credentials::resolve(&config, info)?;
        crate::credentials::check_universe_domain(&credentials, &universe_domain).await?;

        let channel = make_channel(config.transport_kind, &endpoint, client_cert.as_ref())?;
        let wrapper_defaults = WrapperDefaults {
            retry_policy: config.retry_policy.clone(),
            backoff_policy: config.backoff_policy.clone(),
            metadata: default_metadata(info, config.transport_kind, config.user_agent.as_deref())?,
        };
        let tracing = tracing_enabled(&config, &env);
        tracing::debug!(
            service = info.service_name,
            endpoint = %endpoint,
            universe_domain = %universe_domain,
            transport = ?config.transport_kind,
            "transport created"
        );
        Ok(Self {
            inner: Arc::new(TransportInner {
                info,
                endpoint,
                host,
                universe_domain,
                transport_kind: config.transport_kind,
                credentials,
                channel: RwLock::new(Some(channel)),
                wrappers: MethodWrapperCache::default(),
                wrapper_defaults,
                operations: OnceLock::new(),
                polling_error_policy: config.polling_error_policy,
                polling_backoff_policy: config.polling_backoff_policy,
                interceptors: config.interceptors,
                tracing,
            }),
        })
    }

    pub(crate) fn from_inner(inner: Arc<TransportInner>) -> Self {
        Self { inner }
    }

    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    pub fn host(&self) -> &str {
        &self.inner.host
    }

    pub fn universe_domain(&self) -> &str {
        &self.inner.universe_domain
    }

    pub fn transport_kind(&self) -> TransportKind {
        self.inner.transport_kind
    }

    pub fn tracing(&self) -> bool {
        self.inner.tracing
    }

    /// Releases the connection.
    ///
    /// Calling `close()` more than once has no effect. Calls started after
    /// the transport is closed fail with a "transport closed" error.
    pub fn close(&self) {
        let mut channel = self
            .inner
            .channel
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if channel.take().is_some() {
            tracing::debug!(service = self.inner.info.service_name, "transport closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner
            .channel
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Returns the wrapped method, creating it on first use.
    ///
    /// Wrapping a long-running method also creates the operations client.
    pub fn wrapper(&self, method: &'static MethodDescriptor) -> Arc<WrappedMethod> {
        if method.long_running {
            let _ = self.operations_client();
        }
        self.inner
            .wrappers
            .get_or_wrap(method, &self.inner.wrapper_defaults)
    }

    /// The number of wrapped methods created so far.
    pub fn wrapped_method_count(&self) -> usize {
        self.inner.wrappers.len()
    }

    /// Returns the operations client, if it was already created.
    pub fn existing_operations_client(&self) -> Option<Arc<OperationsClient>> {
        self.inner.operations.get().cloned()
    }

    /// Returns the client used to poll and cancel long-running operations.
    ///
    /// The client is created on first use and shared by all the calls. It
    /// holds a weak reference to the transport. Returns `None` for services
    /// without long-running operations.
    pub fn operations_client(&self) -> Option<Arc<OperationsClient>> {
        let methods = self.inner.info.operations?;
        let client = self.inner.operations.get_or_init(|| {
            Arc::new(OperationsClient::new(Arc::downgrade(&self.inner), methods))
        });
        Some(client.clone())
    }

    /// Sends a request and returns the response.
    pub async fn invoke<Req, Resp>(
        &self,
        method: &'static MethodDescriptor,
        request: Req,
        options: RequestOptions,
    ) -> Result<Resp>
    where
        Req: Message,
        Resp: Message,
    {
        let token = options.cancellation_token().clone();
        let call = async {
            let call = self.call::<Req, Resp>(method, request, &options);
            match &token {
                None => call.await,
                Some(token) => tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(Error::cancelled("the call was cancelled by the application")),
                    r = call => r,
                },
            }
        };
        if !self.inner.tracing {
            return call.await;
        }
        let span = tracing::info_span!(
            "client_request",
            rpc.system = self.inner.rpc_system(),
            rpc.service = method.service,
            rpc.method = method.method,
            url.domain = self.inner.host.as_str(),
        );
        let result = call.instrument(span.clone()).await;
        if let Err(e) = &result {
            span.in_scope(|| tracing::warn!(error = %e, "request failed"));
        }
        result
    }

    /// Starts a long-running operation.
    pub async fn invoke_lro<Req, R, M>(
        &self,
        method: &'static MethodDescriptor,
        request: Req,
        options: RequestOptions,
    ) -> Result<lro::Operation<R, M>>
    where
        Req: Message,
        R: Message,
        M: Message,
    {
        if !method.long_running {
            return Err(Error::invalid_argument(format!(
                "{} is not a long-running method",
                method.method
            )));
        }
        let client = self.operations_client().ok_or_else(|| {
            Error::invalid_argument(format!(
                "{} does not support long-running operations",
                self.inner.info.service_name
            ))
        })?;
        let initial = self
            .invoke::<Req, longrunning::model::Operation>(method, request, options.clone())
            .await?;
        let error_policy = self.polling_error_policy(&options);
        let backoff_policy = self.polling_backoff_policy(&options);
        Ok(lro::Operation::new(
            initial,
            client,
            options,
            error_policy,
            backoff_policy,
        ))
    }

    pub fn polling_error_policy(&self, options: &RequestOptions) -> Arc<dyn PollingErrorPolicy> {
        options
            .polling_error_policy()
            .clone()
            .or_else(|| self.inner.polling_error_policy.clone())
            .unwrap_or_else(|| Arc::new(Aip194Strict))
    }

    pub fn polling_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn PollingBackoffPolicy> {
        options
            .polling_backoff_policy()
            .clone()
            .or_else(|| self.inner.polling_backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }

    async fn call<Req, Resp>(
        &self,
        method: &'static MethodDescriptor,
        request: Req,
        options: &RequestOptions,
    ) -> Result<Resp>
    where
        Req: Message,
        Resp: Message,
    {
        let channel = self.inner.channel()?;
        let wrapper = self.wrapper(method);
        let settings = wrapper.settings(options);
        let json = serde_json::to_value(&request).map_err(Error::ser)?;
        let headers = request_headers(method, &wrapper, &json, options)?;

        let interceptor = self
            .inner
            .interceptors
            .get::<Req, Resp>(method.key())
            .cloned();
        let (request, headers) = match &interceptor {
            Some(i) => i.before(request, headers),
            None => (request, headers),
        };
        let prepared = prepare(channel, method, request, json, interceptor.is_some())?;

        let timeout = settings.timeout;
        let attempts = async {
            match settings.retry_policy.clone() {
                None => {
                    self.inner
                        .attempt::<Req, Resp>(&prepared, method, &headers, options, timeout)
                        .await
                }
                Some(policy) => {
                    let transport = self.inner.clone();
                    let options = options.clone();
                    let inner = async move |remaining: Option<Duration>| {
                        let remaining = match (remaining, timeout) {
                            (Some(r), Some(t)) => Some(std::cmp::min(r, t)),
                            (r, t) => r.or(t),
                        };
                        transport
                            .attempt::<Req, Resp>(&prepared, method, &headers, &options, remaining)
                            .await
                    };
                    let sleep = async |d| tokio::time::sleep(d).await;
                    boxed_send(retry_loop(
                        inner,
                        sleep,
                        settings.idempotent,
                        policy,
                        settings.backoff_policy.clone(),
                    ))
                    .await
                }
            }
        };
        let result = match timeout {
            None => attempts.await,
            Some(t) => tokio::time::timeout(t, attempts).await.unwrap_or_else(|_| {
                Err(Error::timeout(format!(
                    "{} did not complete within {t:?}",
                    method.method
                )))
            }),
        };
        let (response, metadata) = result?;
        Ok(match &interceptor {
            Some(i) => i.after(response, metadata).0,
            None => response,
        })
    }
}

impl TransportInner {
    fn channel(&self) -> Result<Channel> {
        self.channel
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(Error::transport_closed)
    }

    fn rpc_system(&self) -> &'static str {
        match self.transport_kind {
            TransportKind::Grpc => "grpc",
            TransportKind::Rest => "http",
        }
    }

    async fn attempt<Req, Resp>(
        &self,
        prepared: &Prepared<Req>,
        method: &'static MethodDescriptor,
        headers: &HeaderMap,
        options: &RequestOptions,
        remaining: Option<Duration>,
    ) -> Result<(Resp, HeaderMap)>
    where
        Req: Message,
        Resp: Message,
    {
        let timeout = effective_timeout(options, remaining);
        let mut headers = headers.clone();
        let auth_headers = self
            .credentials
            .headers()
            .await
            .map_err(Error::authentication)?;
        headers.extend(auth_headers);
        let result = match prepared {
            Prepared::Http(client, request) => {
                crate::http::send::<Resp>(client, &self.endpoint, request, headers, timeout).await
            }
            Prepared::Grpc(client, request) => {
                crate::grpc::send::<Req, Resp>(client, method, request.clone(), headers, timeout)
                    .await
            }
        };
        result.map_err(|e| self.enrich(e))
    }

    /// Adds the credential description to authentication and authorization
    /// errors.
    fn enrich(&self, error: Error) -> Error {
        if !matches!(error.http_equivalent_code(), Some(401 | 403 | 404)) {
            return error;
        }
        let info = self
            .credentials
            .credential_info()
            .and_then(|info| serde_json::to_string(&info).ok());
        match info {
            Some(info) => error.with_credential_info(info),
            None => error,
        }
    }
}

// Erases the future type, which works around "implementation of `Send` is
// not general enough" errors from the closures passed to `retry_loop`.
fn boxed_send<'a, T>(
    f: impl Future<Output = T> + Send + 'a,
) -> std::pin::Pin<Box<dyn Future<Output = T> + Send + 'a>> {
    Box::pin(f)
}

fn make_channel(
    kind: TransportKind,
    endpoint: &str,
    cert: Option<&gax::client_builder::ClientCertificate>,
) -> BuilderResult<Channel> {
    match kind {
        TransportKind::Rest => crate::http::make_client(cert).map(Channel::Http),
        TransportKind::Grpc => crate::grpc::make_client(endpoint, cert).map(Channel::Grpc),
    }
}

fn prepare<Req: Message>(
    channel: Channel,
    method: &'static MethodDescriptor,
    request: Req,
    json: Value,
    refresh: bool,
) -> Result<Prepared<Req>> {
    match channel {
        Channel::Http(client) => {
            // The `before` hook may have modified the request.
            let json = if refresh {
                serde_json::to_value(&request).map_err(Error::ser)?
            } else {
                json
            };
            let request = crate::transcode::transcode(&method.http, &json)?;
            Ok(Prepared::Http(client, request))
        }
        Channel::Grpc(client) => Ok(Prepared::Grpc(client, request)),
    }
}

fn default_metadata(
    info: &ServiceInfo,
    kind: TransportKind,
    prefix: Option<&str>,
) -> BuilderResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(X_GOOG_API_CLIENT),
        HeaderValue::from_str(&api_client_header(info, kind)).map_err(BuilderError::invalid_argument)?,
    );
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&user_agent(info, prefix)).map_err(BuilderError::invalid_argument)?,
    );
    Ok(headers)
}

fn request_headers(
    method: &MethodDescriptor,
    wrapper: &WrappedMethod,
    json: &Value,
    options: &RequestOptions,
) -> Result<HeaderMap> {
    let mut headers = wrapper.metadata().clone();
    if let Value::Object(fields) = json {
        let values = method
            .routing
            .iter()
            .filter_map(|p| {
                lookup(fields, p.field)
                    .and_then(Value::as_str)
                    .map(|v| (p.key, v))
            })
            .collect::<Vec<_>>();
        if let Some(params) = request_params(values) {
            headers.insert(
                HeaderName::from_static(X_GOOG_REQUEST_PARAMS),
                HeaderValue::from_str(&params).map_err(Error::ser)?,
            );
        }
    }
    if let Some(prefix) = options.user_agent() {
        let current = headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        let value = format!("{prefix} {current}");
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(value.trim_end()).map_err(Error::invalid_argument)?,
        );
    }
    for (key, value) in options.metadata() {
        let name = HeaderName::from_bytes(key.to_ascii_lowercase().as_bytes())
            .map_err(Error::invalid_argument)?;
        if name == X_GOOG_REQUEST_PARAMS {
            tracing::warn!("ignoring user-supplied {X_GOOG_REQUEST_PARAMS} metadata");
            continue;
        }
        let value = match value {
            MetadataValue::Ascii(s) => HeaderValue::from_str(s),
            MetadataValue::Binary(b) => {
                HeaderValue::from_str(&base64::prelude::BASE64_STANDARD_NO_PAD.encode(b))
            }
        }
        .map_err(Error::invalid_argument)?;
        headers.append(name, value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::tests::GET_DATASET;
    use serde_json::json;

    #[test]
    fn routing_header() -> anyhow::Result<()> {
        let wrapper = WrappedMethod::new(&GET_DATASET, &WrapperDefaults::default());
        let json = json!({"name": "projects/p/locations/l/datasets/d"});
        let headers = request_headers(&GET_DATASET, &wrapper, &json, &RequestOptions::default())?;
        assert_eq!(
            headers
                .get(X_GOOG_REQUEST_PARAMS)
                .and_then(|v| v.to_str().ok()),
            Some("name=projects/p/locations/l/datasets/d")
        );

        let json = json!({"name": ""});
        let headers = request_headers(&GET_DATASET, &wrapper, &json, &RequestOptions::default())?;
        assert!(headers.get(X_GOOG_REQUEST_PARAMS).is_none(), "{headers:?}");
        Ok(())
    }

    #[test]
    fn user_metadata() -> anyhow::Result<()> {
        let mut defaults = WrapperDefaults::default();
        defaults
            .metadata
            .insert(USER_AGENT, HeaderValue::from_static("lib/1.0"));
        let wrapper = WrappedMethod::new(&GET_DATASET, &defaults);
        let mut options = RequestOptions::default();
        options.add_metadata("X-Custom", "value");
        options.add_metadata("x-custom-bin", vec![0_u8, 1, 2]);
        options.set_user_agent("my-app/2.0");
        let headers = request_headers(&GET_DATASET, &wrapper, &json!({}), &options)?;
        assert_eq!(
            headers.get("x-custom").and_then(|v| v.to_str().ok()),
            Some("value")
        );
        assert_eq!(
            headers.get("x-custom-bin").and_then(|v| v.to_str().ok()),
            Some("AAEC")
        );
        assert_eq!(
            headers.get(USER_AGENT).and_then(|v| v.to_str().ok()),
            Some("my-app/2.0 lib/1.0")
        );
        Ok(())
    }

    #[test]
    fn user_routing_metadata_is_ignored() -> anyhow::Result<()> {
        let wrapper = WrappedMethod::new(&GET_DATASET, &WrapperDefaults::default());
        let json = json!({"name": "projects/p/locations/l/datasets/d"});
        let mut options = RequestOptions::default();
        options.add_metadata("X-Goog-Request-Params", "name=other");
        let headers = request_headers(&GET_DATASET, &wrapper, &json, &options)?;
        let values = headers
            .get_all(X_GOOG_REQUEST_PARAMS)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect::<Vec<_>>();
        assert_eq!(values, vec!["name=projects/p/locations/l/datasets/d"]);
        Ok(())
    }

    #[test]
    fn invalid_metadata() {
        let wrapper = WrappedMethod::new(&GET_DATASET, &WrapperDefaults::default());
        let mut options = RequestOptions::default();
        options.add_metadata("bad key", "value");
        let err = request_headers(&GET_DATASET, &wrapper, &json!({}), &options).unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
    }
}
