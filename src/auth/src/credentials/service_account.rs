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

//! [Service Account] Credentials type.
//!
//! A service account is an account for an application or compute workload
//! instead of an individual end user. The recommended practice is to use
//! Application Default Credentials, which relies on the configuration of the
//! Google Cloud system hosting your application to authenticate your
//! workload. But sometimes you may need to create and download a
//! [service account key], for example, to use a service account when running
//! your application outside Google Cloud.
//!
//! Service account keys should be treated as any other secret with security
//! implications. Think of them as unencrypted passwords. Do not store them
//! where unauthorized persons or programs may read them.
//!
//! By default these credentials use [Self-signed JWTs] to bypass the
//! intermediate step of exchanging client assertions for OAuth tokens. When
//! the application configures scopes, and does not request JWT access, the
//! credentials exchange a signed assertion for an access token instead.
//!
//! # Example
//! ```
//! # use vertexai_auth::credentials::service_account::Builder;
//! # use vertexai_auth::build_errors::Error;
//! let service_account_key = serde_json::json!({
//!     "client_email": "test-client-email",
//!     "private_key_id": "test-private-key-id",
//!     "private_key": "<YOUR_PKCS8_PEM_KEY_HERE>",
//!     "project_id": "test-project-id",
//!     "universe_domain": "test-universe-domain",
//! });
//! let credentials = Builder::new(service_account_key)
//!     .with_quota_project_id("my-quota-project")
//!     .build()?;
//! # Ok::<(), Error>(())
//! ```
//!
//! [Self-signed JWTs]: https://google.aip.dev/auth/4111
//! [Service Account]: https://cloud.google.com/iam/docs/service-account-creds
//! [service account key]: https://cloud.google.com/iam/docs/keys-create-delete#creating

mod jws;

use crate::build_errors::Error as BuilderError;
use crate::constants::{
    DEFAULT_SCOPE, DEFAULT_UNIVERSE_DOMAIN, JWT_BEARER_GRANT_TYPE, OAUTH2_TOKEN_URI,
};
use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{CredentialInfo, Credentials, make_credential_info};
use crate::headers_util::build_bearer_headers;
use crate::token::{Token, TokenProvider, TokenResponse};
use crate::token_cache::TokenCache;
use crate::{BuildResult, Result, errors};
use http::HeaderMap;
use jws::{CLOCK_SKEW_FUDGE, DEFAULT_TOKEN_TIMEOUT, JwsClaims};
use serde_json::Value;
use tokio::time::Instant;

const MSG: &str = "failed to exchange the service account assertion for an access token";

/// The access requested by the credentials.
#[derive(Clone, Debug, PartialEq)]
enum Access {
    Scopes(Vec<String>),
    Audience(String),
}

/// A builder for service account [Credentials].
#[derive(Debug)]
pub struct Builder {
    service_account_key: Value,
    access: Option<Access>,
    quota_project_id: Option<String>,
    always_use_jwt_access: bool,
    credential_source: Option<String>,
}

impl Builder {
    /// Creates a builder from a [service account key] in [aip/4112] format.
    ///
    /// [aip/4112]: https://google.aip.dev/auth/4112
    /// [service account key]: https://cloud.google.com/iam/docs/keys-create-delete#creating
    pub fn new(service_account_key: Value) -> Self {
        Self {
            service_account_key,
            access: None,
            quota_project_id: None,
            always_use_jwt_access: false,
            credential_source: None,
        }
    }

    /// Sets the [scopes] for these credentials.
    ///
    /// Replaces any audience set with [with_audience][Builder::with_audience].
    ///
    /// [scopes]: https://developers.google.com/identity/protocols/oauth2/scopes
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.access = Some(Access::Scopes(
            scopes.into_iter().map(|s| s.into()).collect(),
        ));
        self
    }

    /// Sets the audience for the self-signed JWT.
    ///
    /// The value should be `https://[SERVICE]/`, for example,
    /// `https://aiplatform.googleapis.com/`. Replaces any scopes.
    pub fn with_audience<S: Into<String>>(mut self, audience: S) -> Self {
        self.access = Some(Access::Audience(audience.into()));
        self
    }

    /// Sets the [quota project] for these credentials.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<S: Into<String>>(mut self, quota_project_id: S) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
        self
    }

    /// Use self-signed JWTs even when scopes are configured.
    pub fn with_always_use_jwt_access(mut self, v: bool) -> Self {
        self.always_use_jwt_access = v;
        self
    }

    pub(crate) fn with_credential_source<S: Into<String>>(mut self, v: S) -> Self {
        self.credential_source = Some(v.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns a parsing error if the key is not a valid service account key.
    pub fn build(self) -> BuildResult<Credentials> {
        let key = serde_json::from_value::<ServiceAccountKey>(self.service_account_key)
            .map_err(BuilderError::parsing)?;
        let mode = match self.access {
            Some(Access::Audience(aud)) => Mode::SelfSigned(Access::Audience(aud)),
            Some(Access::Scopes(scopes)) if !self.always_use_jwt_access => Mode::OAuth(scopes),
            Some(Access::Scopes(scopes)) => Mode::SelfSigned(Access::Scopes(scopes)),
            None => Mode::SelfSigned(Access::Scopes(vec![DEFAULT_SCOPE.to_string()])),
        };
        let info = make_credential_info(
            self.credential_source.as_deref(),
            "service account credentials",
            Some(&key.client_email),
        );
        let quota_project_id = self.quota_project_id.or_else(|| key.quota_project_id.clone());
        let universe_domain = key
            .universe_domain
            .clone()
            .unwrap_or_else(|| DEFAULT_UNIVERSE_DOMAIN.to_string());
        Ok(Credentials::from(ServiceAccountCredentials {
            token_provider: TokenCache::new(ServiceAccountTokenProvider { key, mode }),
            quota_project_id,
            universe_domain,
            info,
        }))
    }
}

/// A representation of a [service account key] in the format described by
/// [aip/4112].
///
/// [aip/4112]: https://google.aip.dev/auth/4112
/// [service account key]: https://cloud.google.com/iam/docs/keys-create-delete#creating
#[derive(serde::Deserialize, Clone)]
struct ServiceAccountKey {
    client_email: String,
    #[serde(default)]
    private_key_id: String,
    private_key: String,
    #[serde(default)]
    project_id: String,
    #[serde(default)]
    universe_domain: Option<String>,
    #[serde(default)]
    token_uri: Option<String>,
    #[serde(default)]
    quota_project_id: Option<String>,
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"[censored]")
            .field("project_id", &self.project_id)
            .field("universe_domain", &self.universe_domain)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

#[derive(Debug)]
enum Mode {
    SelfSigned(Access),
    OAuth(Vec<String>),
}

#[derive(Debug)]
struct ServiceAccountTokenProvider {
    key: ServiceAccountKey,
    mode: Mode,
}

impl ServiceAccountTokenProvider {
    fn self_signed(&self, access: &Access) -> Result<Token> {
        let mut claims = JwsClaims::new(&self.key.client_email);
        claims.sub = Some(self.key.client_email.clone());
        match access {
            Access::Scopes(scopes) => claims.scope = Some(scopes.join(" ")),
            Access::Audience(aud) => claims.aud = Some(aud.clone()),
        }
        let token = claims.sign(&self.key.private_key_id, &self.key.private_key)?;
        Ok(Token {
            token,
            token_type: "Bearer".to_string(),
            expires_at: Some(Instant::now() + DEFAULT_TOKEN_TIMEOUT - CLOCK_SKEW_FUDGE),
            metadata: None,
        })
    }

    async fn exchange(&self, scopes: &[String]) -> Result<Token> {
        let token_uri = self.key.token_uri.as_deref().unwrap_or(OAUTH2_TOKEN_URI);
        let mut claims = JwsClaims::new(&self.key.client_email);
        claims.scope = Some(scopes.join(" "));
        claims.aud = Some(token_uri.to_string());
        let assertion = claims.sign(&self.key.private_key_id, &self.key.private_key)?;

        let client = reqwest::Client::new();
        let response = client
            .post(token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| errors::from_http_error(e, MSG))?;
        if !response.status().is_success() {
            return Err(errors::from_http_response(response, MSG).await);
        }
        let response = response
            .json::<TokenResponse>()
            .await
            .map_err(errors::non_retryable)?;
        Ok(response.into_token())
    }
}

#[async_trait::async_trait]
impl TokenProvider for ServiceAccountTokenProvider {
    async fn token(&self) -> Result<Token> {
        match &self.mode {
            Mode::SelfSigned(access) => self.self_signed(access),
            Mode::OAuth(scopes) => self.exchange(scopes).await,
        }
    }
}

#[derive(Debug)]
struct ServiceAccountCredentials<T>
where
    T: TokenProvider,
{
    token_provider: T,
    quota_project_id: Option<String>,
    universe_domain: String,
    info: CredentialInfo,
}

#[async_trait::async_trait]
impl<T> CredentialsProvider for ServiceAccountCredentials<T>
where
    T: TokenProvider,
{
    async fn headers(&self) -> Result<HeaderMap> {
        let token = self.token_provider.token().await?;
        build_bearer_headers(&token, &self.quota_project_id)
    }

    async fn universe_domain(&self) -> Option<String> {
        Some(self.universe_domain.clone())
    }

    fn credential_info(&self) -> Option<CredentialInfo> {
        Some(self.info.clone())
    }
}
