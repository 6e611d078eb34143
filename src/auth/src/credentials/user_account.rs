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

//! [User Account] Credentials type.
//!
//! User accounts represent a developer, administrator, or any other person who
//! interacts with Google APIs and services. User accounts are managed as
//! [Google Accounts].
//!
//! User account credentials are typically created with
//! `gcloud auth application-default login`, which writes an
//! `authorized_user` file used by Application Default Credentials. The
//! credentials hold a refresh token, and exchange it for access tokens.
//!
//! [User Account]: https://cloud.google.com/docs/authentication#user-accounts
//! [Google Accounts]: https://myaccount.google.com/

use crate::build_errors::Error as BuilderError;
use crate::constants::{DEFAULT_UNIVERSE_DOMAIN, OAUTH2_TOKEN_URI};
use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{CredentialInfo, Credentials, make_credential_info};
use crate::headers_util::build_bearer_headers;
use crate::token::{Token, TokenProvider, TokenResponse};
use crate::token_cache::TokenCache;
use crate::{BuildResult, Result, errors};
use http::HeaderMap;
use serde_json::Value;

const MSG: &str = "failed to refresh user access token";

/// A builder for user account [Credentials].
///
/// # Example
/// ```
/// # use vertexai_auth::credentials::user_account::Builder;
/// let authorized_user = serde_json::json!({
///     "client_id": "YOUR_CLIENT_ID.apps.googleusercontent.com",
///     "client_secret": "YOUR_CLIENT_SECRET",
///     "refresh_token": "YOUR_REFRESH_TOKEN",
///     "type": "authorized_user",
/// });
/// let credentials = Builder::new(authorized_user).build();
/// ```
#[derive(Debug)]
pub struct Builder {
    authorized_user: Value,
    scopes: Option<Vec<String>>,
    quota_project_id: Option<String>,
    token_uri: Option<String>,
    credential_source: Option<String>,
}

impl Builder {
    /// Creates a builder from an `authorized_user` JSON object.
    pub fn new(authorized_user: Value) -> Self {
        Self {
            authorized_user,
            scopes: None,
            quota_project_id: None,
            token_uri: None,
            credential_source: None,
        }
    }

    /// Overrides the token endpoint in the `authorized_user` object.
    pub fn with_token_uri<S: Into<String>>(mut self, token_uri: S) -> Self {
        self.token_uri = Some(token_uri.into());
        self
    }

    /// Sets the [scopes] requested when refreshing the access token.
    ///
    /// [scopes]: https://developers.google.com/identity/protocols/oauth2/scopes
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Sets the [quota project] for these credentials.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<S: Into<String>>(mut self, quota_project_id: S) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
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
    /// Returns a parsing error if the JSON object is not a valid
    /// `authorized_user` specification.
    pub fn build(self) -> BuildResult<Credentials> {
        let user = serde_json::from_value::<AuthorizedUser>(self.authorized_user)
            .map_err(BuilderError::parsing)?;
        let endpoint = self
            .token_uri
            .or(user.token_uri)
            .unwrap_or_else(|| OAUTH2_TOKEN_URI.to_string());
        let info = make_credential_info(
            self.credential_source.as_deref(),
            "user credentials",
            user.account.as_deref(),
        );
        let universe_domain = user
            .universe_domain
            .unwrap_or_else(|| DEFAULT_UNIVERSE_DOMAIN.to_string());
        let token_provider = UserTokenProvider {
            client_id: user.client_id,
            client_secret: user.client_secret,
            refresh_token: user.refresh_token,
            endpoint,
            scopes: self.scopes.map(|s| s.join(" ")),
        };
        Ok(Credentials::from(UserCredentials {
            token_provider: TokenCache::new(token_provider),
            quota_project_id: self.quota_project_id.or(user.quota_project_id),
            universe_domain,
            info,
        }))
    }
}

#[derive(PartialEq)]
struct UserTokenProvider {
    client_id: String,
    client_secret: String,
    refresh_token: String,
    endpoint: String,
    scopes: Option<String>,
}

impl std::fmt::Debug for UserTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserTokenProvider")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[censored]")
            .field("refresh_token", &"[censored]")
            .field("endpoint", &self.endpoint)
            .field("scopes", &self.scopes)
            .finish()
    }
}

#[async_trait::async_trait]
impl TokenProvider for UserTokenProvider {
    async fn token(&self) -> Result<Token> {
        let client = reqwest::Client::new();
        let request = Oauth2RefreshRequest {
            grant_type: RefreshGrantType::RefreshToken,
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            refresh_token: self.refresh_token.clone(),
            scopes: self.scopes.clone(),
        };
        let response = client
            .post(self.endpoint.as_str())
            .json(&request)
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

#[derive(Debug)]
struct UserCredentials<T>
where
    T: TokenProvider,
{
    token_provider: T,
    quota_project_id: Option<String>,
    universe_domain: String,
    info: CredentialInfo,
}

#[async_trait::async_trait]
impl<T> CredentialsProvider for UserCredentials<T>
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

#[derive(serde::Deserialize)]
struct AuthorizedUser {
    client_id: String,
    client_secret: String,
    refresh_token: String,
    #[serde(default)]
    token_uri: Option<String>,
    #[serde(default)]
    quota_project_id: Option<String>,
    #[serde(default)]
    account: Option<String>,
    #[serde(default)]
    universe_domain: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
enum RefreshGrantType {
    #[serde(rename = "refresh_token")]
    RefreshToken,
}

#[derive(Clone, PartialEq, serde::Serialize)]
struct Oauth2RefreshRequest {
    grant_type: RefreshGrantType,
    client_id: String,
    client_secret: String,
    refresh_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scopes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers_util::QUOTA_PROJECT_KEY;
    use http::HeaderValue;
    use http::header::AUTHORIZATION;
    use httptest::matchers::{all_of, eq, json_decoded, request};
    use httptest::responders::{json_encoded, status_code};
    use httptest::{Expectation, Server};
    use serde_json::json;

    fn authorized_user(token_uri: Option<String>) -> Value {
        let mut user = json!({
            "client_id": "test-client-id",
            "client_secret": "test-client-secret",
            "refresh_token": "test-refresh-token",
            "type": "authorized_user",
        });
        if let Some(uri) = token_uri {
            user["token_uri"] = Value::String(uri);
        }
        user
    }

    #[test]
    fn debug_censors_secrets() -> anyhow::Result<()> {
        let creds = Builder::new(authorized_user(None)).build()?;
        let fmt = format!("{creds:?}");
        assert!(fmt.contains("test-client-id"), "{fmt}");
        assert!(!fmt.contains("test-client-secret"), "{fmt}");
        assert!(!fmt.contains("test-refresh-token"), "{fmt}");
        Ok(())
    }

    #[test]
    fn parse_failure() {
        let err = Builder::new(json!({"type": "authorized_user"}))
            .build()
            .unwrap_err();
        assert!(err.is_parsing(), "{err:?}");
    }

    #[test]
    fn refresh_request_serde() -> anyhow::Result<()> {
        let request = Oauth2RefreshRequest {
            grant_type: RefreshGrantType::RefreshToken,
            client_id: "a".into(),
            client_secret: "b".into(),
            refresh_token: "c".into(),
            scopes: None,
        };
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({"grant_type": "refresh_token", "client_id": "a", "client_secret": "b", "refresh_token": "c"})
        );
        Ok(())
    }

    #[tokio::test]
    async fn refresh_success() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/token"),
                request::body(json_decoded(eq(json!({
                    "grant_type": "refresh_token",
                    "client_id": "test-client-id",
                    "client_secret": "test-client-secret",
                    "refresh_token": "test-refresh-token",
                    "scopes": "scope1 scope2",
                })))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "access_token": "test-access-token",
                "token_type": "Bearer",
                "expires_in": 3600,
            }))),
        );

        let creds = Builder::new(authorized_user(Some(server.url("/token").to_string())))
            .with_scopes(["scope1", "scope2"])
            .with_quota_project_id("qp")
            .build()?;
        for _ in 0..2 {
            let headers = creds.headers().await?;
            assert_eq!(
                headers.get(AUTHORIZATION),
                Some(&HeaderValue::from_static("Bearer test-access-token"))
            );
            assert_eq!(
                headers.get(QUOTA_PROJECT_KEY),
                Some(&HeaderValue::from_static("qp"))
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn builder_token_uri_overrides_file() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/custom")).respond_with(
                json_encoded(json!({"access_token": "custom-token", "token_type": "Bearer"})),
            ),
        );
        let creds = Builder::new(authorized_user(Some("http://unused.invalid/".into())))
            .with_token_uri(server.url("/custom").to_string())
            .build()?;
        let headers = creds.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer custom-token"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn refresh_retryable_error() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/token"))
                .respond_with(status_code(503).body("try-again")),
        );
        let creds =
            Builder::new(authorized_user(Some(server.url("/token").to_string()))).build()?;
        let err = creds.headers().await.unwrap_err();
        assert!(err.is_transient(), "{err:?}");
        assert!(err.to_string().contains("try-again"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn refresh_permanent_error() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/token"))
                .respond_with(status_code(401)),
        );
        let creds =
            Builder::new(authorized_user(Some(server.url("/token").to_string()))).build()?;
        let err = creds.headers().await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn malformed_response_is_permanent() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/token"))
                .respond_with(json_encoded(json!({"unexpected": "field"}))),
        );
        let creds =
            Builder::new(authorized_user(Some(server.url("/token").to_string()))).build()?;
        let err = creds.headers().await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn universe_and_info() -> anyhow::Result<()> {
        let mut user = authorized_user(None);
        user["account"] = json!("user@example.com");
        let creds = Builder::new(user).build()?;
        assert_eq!(creds.universe_domain().await.as_deref(), Some("googleapis.com"));
        assert_eq!(
            creds.credential_info().map(Value::Object),
            Some(json!({
                "credential_type": "user credentials",
                "principal": "user@example.com",
            }))
        );
        Ok(())
    }
}
