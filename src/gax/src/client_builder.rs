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

//! Types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or the authentication
//! credentials. The client libraries use a generic builder type to provide
//! such functionality.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use vertexai_gax::client_builder::examples;
//! # use vertexai_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! # use examples::Client;
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use vertexai_gax::client_builder::examples;
//! # use vertexai_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! # use examples::Client;
//! let client = Client::builder()
//!     .with_endpoint("https://private.googleapis.com")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::interceptor::Interceptors;
use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling_error_policy::{PollingErrorPolicy, PollingErrorPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::path::PathBuf;
use std::sync::Arc;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use vertexai_gax::client_builder::examples;
/// use vertexai_gax::client_builder::Error;
/// # use examples::Client;
/// # tokio_test::block_on(async {
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_default_credentials() => {
///         println!("error during client initialization: {e}");
///         println!("troubleshoot using https://cloud.google.com/docs/authentication/client-libraries");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client options, or the environment, are invalid.
    ///
    /// For example, both credentials and an API key are configured, or an
    /// environment variable has an unsupported value.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(&self.0, ErrorKind::InvalidArgument(_))
    }

    /// If true, the options are valid in isolation, but cannot be combined.
    ///
    /// For example, mTLS was requested outside the default universe domain.
    pub fn is_configuration(&self) -> bool {
        matches!(&self.0, ErrorKind::Configuration(_))
    }

    /// If true, the client could not initialize the credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn invalid_argument<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::InvalidArgument(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn configuration<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Configuration(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("invalid client options: {0}")]
    InvalidArgument(#[source] BoxError),
    #[error("incompatible client configuration: {0}")]
    Configuration(#[source] BoxError),
    #[error("could not create default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The wire protocol used by a client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransportKind {
    /// Binary RPCs over HTTP/2.
    #[default]
    Grpc,
    /// HTTP/JSON with transcoded URIs.
    Rest,
}

/// The PEM-encoded certificate chain and private key for mTLS.
#[derive(Clone)]
pub struct ClientCertificate {
    pub cert_pem: Vec<u8>,
    pub key_pem: Vec<u8>,
}

impl std::fmt::Debug for ClientCertificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCertificate")
            .field("cert_pem", &format!("[{} bytes]", self.cert_pem.len()))
            .field("key_pem", &"[censored]")
            .finish()
    }
}

type CertFn = dyn Fn() -> std::result::Result<ClientCertificate, BoxError> + Send + Sync;

/// A source of client certificates for mTLS.
///
/// The source is invoked once, when the transport is created.
#[derive(Clone)]
pub struct ClientCertSource(Arc<CertFn>);

impl ClientCertSource {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> std::result::Result<ClientCertificate, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// A source returning a fixed certificate.
    pub fn from_pem(cert_pem: Vec<u8>, key_pem: Vec<u8>) -> Self {
        let cert = ClientCertificate { cert_pem, key_pem };
        Self::new(move || Ok(cert.clone()))
    }

    pub fn load(&self) -> std::result::Result<ClientCertificate, BoxError> {
        (self.0)()
    }
}

impl std::fmt::Debug for ClientCertSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ClientCertSource")
    }
}

/// A generic builder for clients.
///
/// Each client library defines one or more client types. All the clients are
/// initialized using a `ClientBuilder`. Applications obtain a builder with the
/// correct generic types using the `builder()` method on each client:
/// ```
/// # use vertexai_gax::client_builder::examples;
/// # use vertexai_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// # use examples::Client;
/// let client = Client::builder()
///     .with_endpoint("http://private.googleapis.com")
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    ///
    /// Fails if more than one of credentials, credentials file, credentials
    /// info, or API key is configured.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.config.validate_credentials()?;
        self.factory.build(self.config).await
    }

    /// Creates a new client using a prebuilt transport.
    ///
    /// The transport carries its own credentials, so configuring credentials
    /// or an API key in the builder is an error.
    pub async fn build_with_transport<C, T>(self, transport: T) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr, Transport = T>,
    {
        if self.config.api_key.is_some() {
            return Err(Error::configuration(
                "provide one of `api_key` or `transport`, an API key cannot be used with a prebuilt transport",
            ));
        }
        if self.config.has_credentials() {
            return Err(Error::invalid_argument(
                "provide one of `credentials` or `transport`, not both",
            ));
        }
        self.factory
            .build_with_transport(self.config, transport)
            .await
    }

    /// Sets the endpoint.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Sets the universe domain, `googleapis.com` by default.
    pub fn with_universe_domain<V: Into<String>>(mut self, v: V) -> Self {
        self.config.universe_domain = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Authenticate with an API key.
    pub fn with_api_key<V: Into<String>>(mut self, v: V) -> Self {
        self.config.api_key = Some(v.into());
        self
    }

    /// Load the credentials from a JSON file.
    pub fn with_credentials_file<V: Into<PathBuf>>(mut self, v: V) -> Self {
        self.config.credentials_file = Some(v.into());
        self
    }

    /// Create the credentials from a JSON object, such as a service account
    /// key.
    pub fn with_credentials_info(mut self, v: serde_json::Value) -> Self {
        self.config.credentials_info = Some(v);
        self
    }

    /// Sets the access token scopes, the service default when not set.
    ///
    /// Only applies to the credentials created by the client. Building a
    /// client with this setting and explicit credentials or an API key fails.
    pub fn with_scopes<I, V>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.config.scopes = Some(scopes.into_iter().map(|v| v.into()).collect());
        self
    }

    /// Sets the project billed for quota.
    ///
    /// Only applies to the credentials created by the client. Building a
    /// client with this setting and explicit credentials or an API key fails.
    pub fn with_quota_project_id<V: Into<String>>(mut self, v: V) -> Self {
        self.config.quota_project_id = Some(v.into());
        self
    }

    /// Use self-signed JWTs for service account credentials, even when
    /// scopes are configured.
    ///
    /// Only applies to the credentials created by the client. Building a
    /// client with this setting and explicit credentials or an API key fails.
    pub fn with_always_use_jwt_access(mut self, v: bool) -> Self {
        self.config.always_use_jwt_access = v;
        self
    }

    /// Sets the source of client certificates for mTLS.
    pub fn with_client_cert_source(mut self, v: ClientCertSource) -> Self {
        self.config.client_cert_source = Some(v);
        self
    }

    /// Selects the wire protocol.
    pub fn with_transport_kind(mut self, v: TransportKind) -> Self {
        self.config.transport_kind = v;
        self
    }

    /// Prepends a prefix to the user agent header.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }

    /// Configure the retry policy for all methods.
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Configure the retry backoff policy.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }

    /// Configure the polling error policy for long-running operations.
    pub fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_error_policy = Some(v.into().into());
        self
    }

    /// Configure the polling backoff policy for long-running operations.
    pub fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_backoff_policy = Some(v.into().into());
        self
    }

    /// Install request and response hooks.
    pub fn with_interceptors<V: Into<Interceptors>>(mut self, v: V) -> Self {
        self.config.interceptors = v.into();
        self
    }
}

#[doc(hidden)]
pub mod internal {
    //! Implementation details, not part of the public API.
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        type Transport;
        fn build(
            self,
            config: ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
        fn build_with_transport(
            self,
            config: ClientConfig<Self::Credentials>,
            transport: Self::Transport,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub universe_domain: Option<String>,
        pub cred: Option<Cr>,
        pub api_key: Option<String>,
        pub credentials_file: Option<PathBuf>,
        pub credentials_info: Option<serde_json::Value>,
        pub scopes: Option<Vec<String>>,
        pub quota_project_id: Option<String>,
        pub always_use_jwt_access: bool,
        pub client_cert_source: Option<ClientCertSource>,
        pub transport_kind: TransportKind,
        pub user_agent: Option<String>,
        pub tracing: bool,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
        pub polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
        pub polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
        pub interceptors: Interceptors,
    }

    impl<Cr> ClientConfig<Cr> {
        pub(crate) fn has_credentials(&self) -> bool {
            self.cred.is_some() || self.credentials_file.is_some() || self.credentials_info.is_some()
        }

        pub(crate) fn validate_credentials(&self) -> Result<()> {
            let sources = [
                ("credentials", self.cred.is_some()),
                ("credentials_file", self.credentials_file.is_some()),
                ("credentials_info", self.credentials_info.is_some()),
                ("api_key", self.api_key.is_some()),
            ];
            let configured = sources
                .iter()
                .filter_map(|(name, set)| set.then_some(format!("`{name}`")))
                .collect::<Vec<_>>();
            if configured.len() > 1 {
                return Err(Error::invalid_argument(format!(
                    "provide one of {}, not more than one",
                    configured.join(" or ")
                )));
            }
            Ok(())
        }
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                universe_domain: None,
                cred: None,
                api_key: None,
                credentials_file: None,
                credentials_info: None,
                scopes: None,
                quota_project_id: None,
                always_use_jwt_access: false,
                client_cert_source: None,
                transport_kind: TransportKind::default(),
                user_agent: None,
                tracing: false,
                retry_policy: None,
                backoff_policy: None,
                polling_error_policy: None,
                polling_backoff_policy: None,
                interceptors: Interceptors::default(),
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! Helper types used in the rustdoc examples.

    type Config = super::internal::ClientConfig<Credentials>;
    use super::Result;

    #[allow(dead_code)]
    pub struct Client(pub(crate) Config, pub(crate) Option<Transport>);

    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Transport;

    pub mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Credentials>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Credentials = super::Credentials;
            type Client = super::Client;
            type Transport = super::Transport;
            async fn build(
                self,
                config: super::Config,
            ) -> super::Result<Self::Client> {
                Ok(super::Client(config, None))
            }
            async fn build_with_transport(
                self,
                config: super::Config,
                transport: Self::Transport,
            ) -> super::Result<Self::Client> {
                Ok(super::Client(config, Some(transport)))
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Credentials {
        pub scopes: Vec<String>,
    }

}
