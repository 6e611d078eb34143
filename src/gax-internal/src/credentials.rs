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

//! Selects the credentials used by a client.

use crate::options::{ClientConfig, Credentials, ServiceInfo};
use auth::credentials::api_key_credentials;
use gax::client_builder::Error as BuilderError;
use gax::client_builder::Result as BuilderResult;

/// Creates the credentials for a client.
///
/// In order of preference: the credentials object, the API key, the
/// credentials file or info, and finally Application Default Credentials.
/// The client builder rejects configurations with more than one source.
pub fn resolve(config: &ClientConfig, info: &ServiceInfo) -> BuilderResult<Credentials> {
    if let Some(c) = &config.cred {
        check_unused_settings(config, "explicit credentials")?;
        return Ok(c.clone());
    }
    if let Some(key) = &config.api_key {
        check_unused_settings(config, "an API key")?;
        return Ok(api_key_credentials::Builder::new(key.clone()).build());
    }
    let scopes = config.scopes.clone().unwrap_or_else(|| {
        info.default_scopes
            .iter()
            .map(|s| s.to_string())
            .collect()
    });
    let mut builder = auth::credentials::Builder::default()
        .with_scopes(scopes)
        .with_always_use_jwt_access(config.always_use_jwt_access);
    if let Some(project) = &config.quota_project_id {
        builder = builder.with_quota_project_id(project.clone());
    }
    if let Some(path) = &config.credentials_file {
        builder = builder.with_credentials_file(path.clone());
    }
    if let Some(json) = &config.credentials_info {
        builder = builder.with_credentials_info(json.clone());
    }
    builder.build().map_err(BuilderError::cred)
}

// These settings only apply to credentials created by the client.
fn check_unused_settings(config: &ClientConfig, source: &str) -> BuilderResult<()> {
    let unused = [
        ("quota_project_id", config.quota_project_id.is_some()),
        ("scopes", config.scopes.is_some()),
        ("always_use_jwt_access", config.always_use_jwt_access),
    ]
    .into_iter()
    .filter_map(|(name, set)| set.then_some(name))
    .collect::<Vec<_>>();
    if unused.is_empty() {
        return Ok(());
    }
    Err(BuilderError::configuration(format!(
        "{} cannot be used with {source}, set them on the credentials instead",
        unused.join(", ")
    )))
}

/// Verifies the credentials are valid in the client's universe domain.
pub async fn check_universe_domain(
    credentials: &Credentials,
    universe_domain: &str,
) -> BuilderResult<()> {
    match credentials.universe_domain().await {
        Some(ud) if ud != universe_domain => Err(BuilderError::configuration(format!(
            "the configured universe domain ({universe_domain}) does not match the universe domain found in the credentials ({ud})"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::credentials::testing::{TestCredentials, test_credentials};
    use serde_json::json;

    const INFO: ServiceInfo = ServiceInfo {
        service_name: "google.cloud.aiplatform.v1.DatasetService",
        short_name: "aiplatform",
        client_version: "1.2.3",
        client_artifact: "vertexai-aiplatform-v1",
        endpoint_template: "https://aiplatform.{UNIVERSE_DOMAIN}",
        mtls_endpoint: "https://aiplatform.mtls.googleapis.com",
        default_scopes: &["https://www.googleapis.com/auth/cloud-platform"],
        operations: None,
    };

    #[tokio::test]
    async fn explicit_credentials() -> anyhow::Result<()> {
        let mut config = ClientConfig::default();
        config.cred = Some(test_credentials());
        let cred = resolve(&config, &INFO)?;
        let headers = cred.headers().await?;
        assert_eq!(
            headers.get(http::header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer test-only-token")
        );
        Ok(())
    }

    #[tokio::test]
    async fn api_key() -> anyhow::Result<()> {
        let mut config = ClientConfig::default();
        config.api_key = Some("test-api-key".to_string());
        let cred = resolve(&config, &INFO)?;
        let headers = cred.headers().await?;
        assert_eq!(
            headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()),
            Some("test-api-key")
        );
        Ok(())
    }

    #[test_case::test_case(true, false; "explicit credentials")]
    #[test_case::test_case(false, true; "api key")]
    fn unused_settings(explicit: bool, api_key: bool) {
        let mut config = ClientConfig::default();
        if explicit {
            config.cred = Some(test_credentials());
        }
        if api_key {
            config.api_key = Some("test-api-key".to_string());
        }
        config.quota_project_id = Some("test-project".to_string());
        config.always_use_jwt_access = true;
        let err = resolve(&config, &INFO).unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        let msg = err.to_string();
        assert!(msg.contains("quota_project_id"), "{msg}");
        assert!(msg.contains("always_use_jwt_access"), "{msg}");
        assert!(!msg.contains("scopes"), "{msg}");
    }

    #[test]
    fn credentials_info_invalid() {
        let mut config = ClientConfig::default();
        config.credentials_info = Some(json!({"type": "unknown-credentials-type"}));
        let err = resolve(&config, &INFO).unwrap_err();
        assert!(err.is_default_credentials(), "{err:?}");
    }

    #[tokio::test]
    async fn universe_domain_mismatch() {
        let cred: Credentials = TestCredentials::default()
            .with_universe_domain("other.example.com")
            .into();
        let err = check_universe_domain(&cred, "googleapis.com")
            .await
            .unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
    }

    #[tokio::test]
    async fn universe_domain_match() -> anyhow::Result<()> {
        let cred: Credentials = TestCredentials::default()
            .with_universe_domain("googleapis.com")
            .into();
        check_universe_domain(&cred, "googleapis.com").await?;
        check_universe_domain(&test_credentials(), "other.example.com").await?;
        Ok(())
    }
}
