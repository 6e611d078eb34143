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

//! [Metadata Service] Credentials type.
//!
//! Google Cloud environments such as [Google Compute Engine (GCE)][gce-link],
//! [Google Kubernetes Engine (GKE)][gke-link], or [Cloud Run] provide a
//! metadata service. This is a local service to the VM (or pod) which provides
//! access tokens associated with the [default service account] for the VM.
//!
//! The metadata server address can be overridden with the `GCE_METADATA_HOST`
//! environment variable. The variable is read once, when the credentials are
//! built.
//!
//! # Example
//! ```
//! # use vertexai_auth::credentials::mds::Builder;
//! let credentials = Builder::default()
//!     .with_quota_project_id("my-quota-project")
//!     .build();
//! ```
//!
//! [Cloud Run]: https://cloud.google.com/run
//! [default service account]: https://cloud.google.com/iam/docs/service-account-types#default
//! [gce-link]: https://cloud.google.com/products/compute
//! [gke-link]: https://cloud.google.com/kubernetes-engine
//! [Metadata Service]: https://cloud.google.com/compute/docs/metadata/overview

use crate::constants::GCE_METADATA_HOST_VAR;
use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{CredentialInfo, Credentials, make_credential_info};
use crate::headers_util::build_bearer_headers;
use crate::token::{Token, TokenProvider, TokenResponse};
use crate::token_cache::TokenCache;
use crate::{Result, errors};
use http::HeaderMap;

const METADATA_FLAVOR_VALUE: &str = "Google";
const METADATA_FLAVOR: &str = "metadata-flavor";
const METADATA_ROOT: &str = "http://metadata.google.internal";
const TOKEN_PATH: &str = "/computeMetadata/v1/instance/service-accounts/default/token";
const MSG: &str = "failed to fetch token from the metadata service";

/// Creates [Credentials] backed by the metadata service.
#[derive(Debug, Default)]
pub struct Builder {
    endpoint: Option<String>,
    scopes: Option<Vec<String>>,
    quota_project_id: Option<String>,
    universe_domain: Option<String>,
}

impl Builder {
    /// Sets the metadata server endpoint.
    ///
    /// Takes precedence over the `GCE_METADATA_HOST` environment variable.
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the scopes requested for the access tokens.
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

    /// Sets the universe domain reported by these credentials.
    ///
    /// Without this setting the credentials do not report a universe domain.
    pub fn with_universe_domain<S: Into<String>>(mut self, universe_domain: S) -> Self {
        self.universe_domain = Some(universe_domain.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> Credentials {
        let endpoint = self
            .endpoint
            .or_else(|| {
                std::env::var(GCE_METADATA_HOST_VAR)
                    .ok()
                    .map(|host| format!("http://{host}"))
            })
            .unwrap_or_else(|| METADATA_ROOT.to_string());
        let token_provider = MdsTokenProvider {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            scopes: self.scopes,
        };
        Credentials::from(MdsCredentials {
            token_provider: TokenCache::new(token_provider),
            quota_project_id: self.quota_project_id,
            universe_domain: self.universe_domain,
        })
    }
}

#[derive(Debug)]
struct MdsCredentials<T>
where
    T: TokenProvider,
{
    token_provider: T,
    quota_project_id: Option<String>,
    universe_domain: Option<String>,
}

#[async_trait::async_trait]
impl<T> CredentialsProvider for MdsCredentials<T>
where
    T: TokenProvider,
{
    async fn headers(&self) -> Result<HeaderMap> {
        let token = self.token_provider.token().await?;
        build_bearer_headers(&token, &self.quota_project_id)
    }

    async fn universe_domain(&self) -> Option<String> {
        self.universe_domain.clone()
    }

    fn credential_info(&self) -> Option<CredentialInfo> {
        Some(make_credential_info(
            Some("metadata server"),
            "VM credentials",
            None,
        ))
    }
}

#[derive(Debug, Clone)]
struct MdsTokenProvider {
    endpoint: String,
    scopes: Option<Vec<String>>,
}

#[async_trait::async_trait]
impl TokenProvider for MdsTokenProvider {
    async fn token(&self) -> Result<Token> {
        let client = reqwest::Client::new();
        let mut request = client
            .get(format!("{}{TOKEN_PATH}", self.endpoint))
            .header(METADATA_FLAVOR, METADATA_FLAVOR_VALUE);
        if let Some(scopes) = &self.scopes {
            request = request.query(&[("scopes", scopes.join(","))]);
        }
        let response = request
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
