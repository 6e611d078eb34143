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

use crate::descriptor::MethodDescriptor;
use crate::environment::EnvironmentSnapshot;

pub use auth::credentials::Credentials;

// The client configuration for [crate::transport::Transport].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

/// The methods used to poll and cancel long-running operations.
#[derive(Copy, Clone, Debug)]
pub struct OperationsMethods {
    pub get_operation: &'static MethodDescriptor,
    pub cancel_operation: &'static MethodDescriptor,
}

/// Static information about a service and the client library.
#[derive(Copy, Clone, Debug)]
pub struct ServiceInfo {
    /// The fully qualified service name, e.g. `google.cloud.aiplatform.v1.DatasetService`.
    pub service_name: &'static str,
    /// The short service name, e.g. "aiplatform".
    pub short_name: &'static str,
    /// The version of the client library.
    pub client_version: &'static str,
    /// The name of the client library artifact (e.g., crate name).
    pub client_artifact: &'static str,
    /// The default endpoint, with a `{UNIVERSE_DOMAIN}` placeholder.
    pub endpoint_template: &'static str,
    pub mtls_endpoint: &'static str,
    pub default_scopes: &'static [&'static str],
    /// Set for services with long-running operations.
    pub operations: Option<OperationsMethods>,
}

// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig, env: &EnvironmentSnapshot) -> bool {
    config.tracing || env.tracing
}
