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

//! Credentials for use in tests.
//!
//! Not part of the public API, subject to change without notice.

use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{CredentialInfo, Credentials, Result};
use crate::errors::CredentialsError;
use http::header::{AUTHORIZATION, HeaderValue};
use http::HeaderMap;

/// Credentials that return a fixed bearer token.
#[derive(Debug, Default)]
pub struct TestCredentials {
    universe_domain: Option<String>,
    info: Option<CredentialInfo>,
}

impl TestCredentials {
    pub fn with_universe_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.universe_domain = Some(v.into());
        self
    }

    pub fn with_credential_info(mut self, v: CredentialInfo) -> Self {
        self.info = Some(v);
        self
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for TestCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_static("Bearer test-only-token"),
        );
        Ok(headers)
    }

    async fn universe_domain(&self) -> Option<String> {
        self.universe_domain.clone()
    }

    fn credential_info(&self) -> Option<CredentialInfo> {
        self.info.clone()
    }
}

/// Credentials that always fail to produce headers.
#[derive(Debug)]
pub struct ErrorCredentials(pub bool);

#[async_trait::async_trait]
impl CredentialsProvider for ErrorCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        Err(CredentialsError::from_msg(self.0, "test-only error credentials"))
    }
}

/// Returns credentials with a fixed bearer token.
pub fn test_credentials() -> Credentials {
    Credentials::from(TestCredentials::default())
}

/// Returns credentials that fail with a transient or permanent error.
pub fn error_credentials(transient: bool) -> Credentials {
    Credentials::from(ErrorCredentials(transient))
}
