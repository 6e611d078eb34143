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
use serde::Serialize;
use std::time::Duration;
use time::OffsetDateTime;

// Services reject assertions with `iat` in the future. All machines have some
// amount of clock skew, so assertions are backdated by this amount.
pub(crate) const CLOCK_SKEW_FUDGE: Duration = Duration::from_secs(10);
pub(crate) const DEFAULT_TOKEN_TIMEOUT: Duration = Duration::from_secs(3600);

/// The claims in a JSON Web Token signed with a service account key.
#[derive(Serialize)]
pub(crate) struct JwsClaims {
    pub iss: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(with = "time::serde::timestamp")]
    pub exp: OffsetDateTime,
    #[serde(with = "time::serde::timestamp")]
    pub iat: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

impl JwsClaims {
    /// Creates claims valid from (slightly before) now.
    pub fn new(iss: &str) -> Self {
        let iat = OffsetDateTime::now_utc() - CLOCK_SKEW_FUDGE;
        Self {
            iss: iss.to_string(),
            scope: None,
            aud: None,
            exp: iat + DEFAULT_TOKEN_TIMEOUT,
            iat,
            sub: None,
        }
    }

    /// Signs the claims with an RS256 key in PKCS#8 PEM format.
    pub fn sign(&self, key_id: &str, private_key_pem: &str) -> Result<String> {
        if self.exp < self.iat {
            return Err(errors::non_retryable_from_str(format!(
                "expiration time {:?}, must be later than issued time {:?}",
                self.exp, self.iat
            )));
        }
        let key = jsonwebtoken::EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .map_err(errors::non_retryable)?;
        let mut header = jsonwebtoken::Header::new(jsonwebtoken::Algorithm::RS256);
        if !key_id.is_empty() {
            header.kid = Some(key_id.to_string());
        }
        jsonwebtoken::encode(&header, self, &key).map_err(errors::non_retryable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::service_account::tests::{PKCS8_PRIVATE_KEY, PUBLIC_KEY};
    use serde_json::Value;

    fn decode(token: &str) -> anyhow::Result<Value> {
        let key = jsonwebtoken::DecodingKey::from_rsa_pem(PUBLIC_KEY.as_bytes())?;
        let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::RS256);
        validation.validate_aud = false;
        let data = jsonwebtoken::decode::<Value>(token, &key, &validation)?;
        Ok(data.claims)
    }

    #[test]
    fn sign_with_scope() -> anyhow::Result<()> {
        let mut claims = JwsClaims::new("test-iss");
        claims.scope = Some("scope1 scope2".to_string());
        claims.sub = Some("test-sub".to_string());
        let token = claims.sign("test-key-id", &PKCS8_PRIVATE_KEY)?;

        let header = jsonwebtoken::decode_header(&token)?;
        assert_eq!(header.kid.as_deref(), Some("test-key-id"));
        assert_eq!(header.alg, jsonwebtoken::Algorithm::RS256);

        let v = decode(&token)?;
        assert_eq!(v["iss"], "test-iss");
        assert_eq!(v["scope"], "scope1 scope2");
        assert_eq!(v["sub"], "test-sub");
        assert_eq!(v.get("aud"), None);
        assert_eq!(v["iat"], claims.iat.unix_timestamp());
        assert_eq!(v["exp"], claims.exp.unix_timestamp());
        Ok(())
    }

    #[test]
    fn sign_with_audience() -> anyhow::Result<()> {
        let mut claims = JwsClaims::new("test-iss");
        claims.aud = Some("https://aiplatform.googleapis.com/".to_string());
        let token = claims.sign("", &PKCS8_PRIVATE_KEY)?;
        let header = jsonwebtoken::decode_header(&token)?;
        assert_eq!(header.kid, None);
        let v = decode(&token)?;
        assert_eq!(v["aud"], "https://aiplatform.googleapis.com/");
        assert_eq!(v.get("scope"), None);
        Ok(())
    }

    #[test]
    fn exp_before_iat() {
        let mut claims = JwsClaims::new("test-iss");
        claims.exp = claims.iat - Duration::from_secs(4200);
        let err = claims.sign("kid", &PKCS8_PRIVATE_KEY).unwrap_err();
        assert!(
            err.to_string().contains("must be later than issued time"),
            "{err}"
        );
    }

    #[test]
    fn bad_key() {
        let claims = JwsClaims::new("test-iss");
        let err = claims.sign("kid", "not-a-pem-key").unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
    }
}
