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

//! Formats the `x-goog-api-client` and `user-agent` headers.

use crate::options::ServiceInfo;
use gax::client_builder::TransportKind;

pub const X_GOOG_API_CLIENT: &str = "x-goog-api-client";
pub const GAPIC: &str = "gapic";

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
// Set by `build.rs`.
const RUSTC_VERSION: &str = env!("VERTEXAI_RUSTC_VERSION");

/// The value of the `x-goog-api-client` header for a client.
pub fn api_client_header(info: &ServiceInfo, transport: TransportKind) -> String {
    let gax_version = PKG_VERSION;
    let transport = match transport {
        TransportKind::Grpc => format!("grpc/{gax_version}-tonic"),
        TransportKind::Rest => format!("rest/{gax_version}-reqwest"),
    };
    format!(
        "gl-rust/{RUSTC_VERSION} gax/{gax_version} {transport} {GAPIC}/{}",
        info.client_version
    )
}

/// The value of the `user-agent` header, with an optional application prefix.
pub fn user_agent(info: &ServiceInfo, prefix: Option<&str>) -> String {
    let library = format!("{}/{}", info.client_artifact, info.client_version);
    match prefix {
        Some(p) if !p.is_empty() => format!("{p} {library}"),
        _ => library,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const INFO: ServiceInfo = ServiceInfo {
        service_name: "google.cloud.aiplatform.v1.DatasetService",
        short_name: "aiplatform",
        client_version: "1.2.3",
        client_artifact: "vertexai-aiplatform-v1",
        endpoint_template: "https://aiplatform.{UNIVERSE_DOMAIN}",
        mtls_endpoint: "https://aiplatform.mtls.googleapis.com",
        default_scopes: &[],
        operations: None,
    };

    fn breakdown(formatted: &str) -> HashMap<String, String> {
        formatted
            .split(' ')
            .filter_map(|v| v.split_once('/'))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn format_rest() {
        let fields = breakdown(&api_client_header(&INFO, TransportKind::Rest));
        assert_eq!(fields.get(GAPIC).map(String::as_str), Some("1.2.3"));
        assert_eq!(
            fields.get("gax").map(String::as_str),
            Some(PKG_VERSION)
        );
        assert!(fields.get("grpc").is_none(), "{fields:?}");
        assert!(fields.get("rest").is_some(), "{fields:?}");
        assert_eq!(
            fields.get("gl-rust").map(String::as_str),
            Some(RUSTC_VERSION)
        );
        assert!(!RUSTC_VERSION.is_empty());
    }

    #[test]
    fn format_grpc() {
        let fields = breakdown(&api_client_header(&INFO, TransportKind::Grpc));
        assert_eq!(fields.get(GAPIC).map(String::as_str), Some("1.2.3"));
        assert!(fields.get("grpc").is_some(), "{fields:?}");
        assert!(fields.get("rest").is_none(), "{fields:?}");
    }

    #[test]
    fn user_agent_prefix() {
        assert_eq!(user_agent(&INFO, None), "vertexai-aiplatform-v1/1.2.3");
        assert_eq!(user_agent(&INFO, Some("")), "vertexai-aiplatform-v1/1.2.3");
        assert_eq!(
            user_agent(&INFO, Some("my-app/0.1")),
            "my-app/0.1 vertexai-aiplatform-v1/1.2.3"
        );
    }
}
