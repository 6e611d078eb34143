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

use crate::Result;
use crate::errors;
use crate::token::Token;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderName, HeaderValue};

/// The header used to charge quota to a project other than the caller's.
pub(crate) const QUOTA_PROJECT_KEY: &str = "x-goog-user-project";

/// The header used to send API keys.
pub(crate) const API_KEY_HEADER_KEY: &str = "x-goog-api-key";

/// Creates the `authorization` header, and the quota project header if needed.
pub(crate) fn build_bearer_headers(
    token: &Token,
    quota_project_id: &Option<String>,
) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("{} {}", token.token_type, token.token))
        .map_err(errors::non_retryable)?;
    value.set_sensitive(true);
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    add_quota_project(&mut headers, quota_project_id)?;
    Ok(headers)
}

/// Creates the API key header.
pub(crate) fn build_api_key_headers(
    api_key: &str,
    quota_project_id: &Option<String>,
) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(api_key).map_err(errors::non_retryable)?;
    value.set_sensitive(true);
    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(API_KEY_HEADER_KEY), value);
    add_quota_project(&mut headers, quota_project_id)?;
    Ok(headers)
}

fn add_quota_project(headers: &mut HeaderMap, quota_project_id: &Option<String>) -> Result<()> {
    if let Some(project) = quota_project_id {
        headers.insert(
            HeaderName::from_static(QUOTA_PROJECT_KEY),
            HeaderValue::from_str(project).map_err(errors::non_retryable)?,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_token(token: &str, token_type: &str) -> Token {
        Token {
            token: token.to_string(),
            token_type: token_type.to_string(),
            expires_at: None,
            metadata: None,
        }
    }

    #[test]
    fn bearer_basic() -> anyhow::Result<()> {
        let headers = build_bearer_headers(&test_token("test_token", "Bearer"), &None)?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value, HeaderValue::from_static("Bearer test_token"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[test]
    fn bearer_with_quota_project() -> anyhow::Result<()> {
        let quota = Some("test-project-123".to_string());
        let headers = build_bearer_headers(&test_token("test_token", "Bearer"), &quota)?;
        assert_eq!(headers.len(), 2, "{headers:?}");
        let value = headers.get(QUOTA_PROJECT_KEY).unwrap();
        assert_eq!(value, HeaderValue::from_static("test-project-123"));
        assert!(!value.is_sensitive());
        Ok(())
    }

    #[test]
    fn bearer_invalid_token() {
        let got = build_bearer_headers(&test_token("bad\ntoken", "Bearer"), &None);
        let err = got.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
    }

    #[test]
    fn api_key() -> anyhow::Result<()> {
        let headers = build_api_key_headers("test-api-key", &None)?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get(API_KEY_HEADER_KEY).unwrap();
        assert_eq!(value, HeaderValue::from_static("test-api-key"));
        assert!(value.is_sensitive());
        Ok(())
    }
}
