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

//! A snapshot of the environment variables that configure a client.
//!
//! Clients read the environment exactly once, while they are built. Changes
//! to the environment after that point do not affect existing clients.

use gax::client_builder::Error as BuilderError;
use gax::client_builder::Result as BuilderResult;

pub const USE_CLIENT_CERTIFICATE_VAR: &str = "GOOGLE_API_USE_CLIENT_CERTIFICATE";
pub const USE_MTLS_ENDPOINT_VAR: &str = "GOOGLE_API_USE_MTLS_ENDPOINT";
pub const UNIVERSE_DOMAIN_VAR: &str = "GOOGLE_CLOUD_UNIVERSE_DOMAIN";
pub const TRACING_VAR: &str = "GOOGLE_CLOUD_RUST_TRACING";

/// When to use the mTLS endpoint of a service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MtlsMode {
    Never,
    /// Use the mTLS endpoint if a client certificate is available.
    #[default]
    Auto,
    Always,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnvironmentSnapshot {
    pub use_client_certificate: bool,
    pub use_mtls_endpoint: MtlsMode,
    pub universe_domain: Option<String>,
    pub tracing: bool,
}

impl EnvironmentSnapshot {
    /// Captures the current values of the process environment.
    pub fn capture() -> BuilderResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Captures the environment using `lookup` to find each variable.
    pub fn from_lookup<F>(lookup: F) -> BuilderResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let use_client_certificate = match lookup(USE_CLIENT_CERTIFICATE_VAR).as_deref() {
            None | Some("false") => false,
            Some("true") => true,
            Some(_) => {
                return Err(BuilderError::invalid_argument(format!(
                    "Environment variable `{USE_CLIENT_CERTIFICATE_VAR}` must be either `true` or `false`"
                )));
            }
        };
        let use_mtls_endpoint = match lookup(USE_MTLS_ENDPOINT_VAR).as_deref() {
            None | Some("auto") => MtlsMode::Auto,
            Some("never") => MtlsMode::Never,
            Some("always") => MtlsMode::Always,
            Some(_) => {
                return Err(BuilderError::invalid_argument(format!(
                    "Environment variable `{USE_MTLS_ENDPOINT_VAR}` must be `never`, `auto` or `always`"
                )));
            }
        };
        Ok(Self {
            use_client_certificate,
            use_mtls_endpoint,
            universe_domain: lookup(UNIVERSE_DOMAIN_VAR),
            tracing: lookup(TRACING_VAR).is_some_and(|v| v == "true"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use serial_test::serial;
    use std::collections::HashMap;
    use test_case::test_case;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let got = EnvironmentSnapshot::from_lookup(lookup(&[]))?;
        assert_eq!(got, EnvironmentSnapshot::default());
        assert!(!got.use_client_certificate);
        assert_eq!(got.use_mtls_endpoint, MtlsMode::Auto);
        Ok(())
    }

    #[test_case("never", MtlsMode::Never)]
    #[test_case("auto", MtlsMode::Auto)]
    #[test_case("always", MtlsMode::Always)]
    fn mtls_mode(value: &str, want: MtlsMode) -> anyhow::Result<()> {
        let got = EnvironmentSnapshot::from_lookup(lookup(&[(USE_MTLS_ENDPOINT_VAR, value)]))?;
        assert_eq!(got.use_mtls_endpoint, want);
        Ok(())
    }

    #[test]
    fn mtls_mode_unsupported() {
        let err =
            EnvironmentSnapshot::from_lookup(lookup(&[(USE_MTLS_ENDPOINT_VAR, "Unsupported")]))
                .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        let fmt = err.to_string();
        assert!(fmt.contains("must be `never`, `auto` or `always`"), "{fmt}");
    }

    #[test_case("true", true)]
    #[test_case("false", false)]
    fn client_certificate(value: &str, want: bool) -> anyhow::Result<()> {
        let got =
            EnvironmentSnapshot::from_lookup(lookup(&[(USE_CLIENT_CERTIFICATE_VAR, value)]))?;
        assert_eq!(got.use_client_certificate, want);
        Ok(())
    }

    #[test]
    fn client_certificate_unsupported() {
        let err =
            EnvironmentSnapshot::from_lookup(lookup(&[(USE_CLIENT_CERTIFICATE_VAR, "yes")]))
                .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        let fmt = err.to_string();
        assert!(fmt.contains("must be either `true` or `false`"), "{fmt}");
    }

    #[test]
    fn universe_and_tracing() -> anyhow::Result<()> {
        let got = EnvironmentSnapshot::from_lookup(lookup(&[
            (UNIVERSE_DOMAIN_VAR, "my-universe.example.com"),
            (TRACING_VAR, "true"),
        ]))?;
        assert_eq!(got.universe_domain.as_deref(), Some("my-universe.example.com"));
        assert!(got.tracing);

        let got = EnvironmentSnapshot::from_lookup(lookup(&[(TRACING_VAR, "yes")]))?;
        assert!(!got.tracing);
        Ok(())
    }

    #[test]
    #[serial]
    fn capture_is_a_snapshot() -> anyhow::Result<()> {
        let _e = ScopedEnv::set(UNIVERSE_DOMAIN_VAR, "first.example.com");
        let snapshot = EnvironmentSnapshot::capture()?;
        let _e = ScopedEnv::set(UNIVERSE_DOMAIN_VAR, "second.example.com");
        assert_eq!(snapshot.universe_domain.as_deref(), Some("first.example.com"));
        Ok(())
    }
}
