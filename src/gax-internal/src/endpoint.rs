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

//! Resolves the endpoint and universe domain of a client.

use crate::environment::{EnvironmentSnapshot, MtlsMode};
use crate::options::ServiceInfo;
use gax::client_builder::Error as BuilderError;
use gax::client_builder::Result as BuilderResult;
use http::Uri;
use std::str::FromStr;

pub const DEFAULT_UNIVERSE_DOMAIN: &str = "googleapis.com";
pub const UNIVERSE_DOMAIN_PLACEHOLDER: &str = "{UNIVERSE_DOMAIN}";

/// Determines the universe domain.
///
/// An explicit value takes precedence over the environment, which takes
/// precedence over the default universe. Empty values are rejected.
pub fn resolve_universe_domain(
    explicit: Option<&str>,
    env: &EnvironmentSnapshot,
) -> BuilderResult<String> {
    let universe_domain = explicit
        .or(env.universe_domain.as_deref())
        .unwrap_or(DEFAULT_UNIVERSE_DOMAIN);
    if universe_domain.trim().is_empty() {
        return Err(BuilderError::invalid_argument(
            "universe domain must be a non-empty string",
        ));
    }
    Ok(universe_domain.to_string())
}

/// Determines the endpoint used by a client.
///
/// An explicit endpoint is always used as-is. Otherwise the mTLS mode and the
/// availability of a client certificate select between the mTLS endpoint and
/// the default endpoint for the universe domain.
pub fn resolve_endpoint(
    info: &ServiceInfo,
    endpoint: Option<&str>,
    has_client_cert: bool,
    universe_domain: &str,
    env: &EnvironmentSnapshot,
) -> BuilderResult<String> {
    if let Some(endpoint) = endpoint {
        return Ok(endpoint.to_string());
    }
    match env.use_mtls_endpoint {
        MtlsMode::Always => Ok(info.mtls_endpoint.to_string()),
        MtlsMode::Auto if has_client_cert => {
            if universe_domain != DEFAULT_UNIVERSE_DOMAIN {
                return Err(BuilderError::configuration(format!(
                    "mTLS is not supported in any universe other than {DEFAULT_UNIVERSE_DOMAIN}"
                )));
            }
            Ok(info.mtls_endpoint.to_string())
        }
        _ => Ok(info
            .endpoint_template
            .replace(UNIVERSE_DOMAIN_PLACEHOLDER, universe_domain)),
    }
}

/// Calculate the host based on the configured endpoint and default endpoint.
///
/// Locational and regional endpoints are detected and used as the host. For
/// VIPs and private networks, we need to use the default host.
pub fn host_from_endpoint(endpoint: Option<&str>, default_endpoint: &str) -> BuilderResult<String> {
    let default_origin = Uri::from_str(default_endpoint).map_err(BuilderError::transport)?;
    let default_host = default_origin
        .authority()
        .ok_or_else(|| BuilderError::transport("missing authority in default endpoint"))?
        .host()
        .to_string();

    let Some(endpoint) = endpoint else {
        return Ok(default_host);
    };
    let custom_origin = Uri::from_str(endpoint).map_err(BuilderError::transport)?;
    let custom_host = custom_origin
        .authority()
        .ok_or_else(|| BuilderError::transport("missing authority in endpoint"))?
        .host()
        .to_string();
    if let (Some(prefix), Some(service)) = (
        custom_host.strip_suffix(".googleapis.com"),
        default_host.strip_suffix(".googleapis.com"),
    ) {
        let parts: Vec<&str> = prefix.split('.').collect();
        // `{service}.{region}.rep.googleapis.com`
        if parts.len() == 3 && parts[0] == service && parts[2] == "rep" {
            return Ok(custom_host);
        }
        // `{region}-{service}.googleapis.com`
        if parts.len() == 1 && parts[0].ends_with(&format!("-{service}")) {
            return Ok(custom_host);
        }
    }
    Ok(default_host)
}
