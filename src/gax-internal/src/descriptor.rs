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

//! Static descriptions of the RPCs in a service.
//!
//! The generated clients define one [MethodDescriptor] per RPC. The
//! descriptors are `'static`, and the transport uses their address as the
//! identity of the method, e.g., to cache the wrapped method.

use gax::error::rpc::Code;
use std::time::Duration;

#[derive(Debug)]
pub struct MethodDescriptor {
    /// The fully qualified service name, e.g. `google.cloud.aiplatform.v1.DatasetService`.
    pub service: &'static str,
    /// The method name, e.g. `CreateDataset`.
    pub method: &'static str,
    /// The gRPC path, e.g. `/google.cloud.aiplatform.v1.DatasetService/CreateDataset`.
    pub grpc_path: &'static str,
    pub http: HttpRule,
    pub idempotent: bool,
    pub default_timeout: Option<Duration>,
    pub retry: RetrySettings,
    /// The request fields sent in the `x-goog-request-params` header.
    pub routing: &'static [RoutingParam],
    /// Set if the method returns a `google.longrunning.Operation`.
    pub long_running: bool,
}

impl MethodDescriptor {
    /// The name used to key interceptors and caches.
    pub fn key(&self) -> &'static str {
        self.grpc_path
    }
}

/// The HTTP binding for a method.
#[derive(Debug)]
pub struct HttpRule {
    pub verb: http::Method,
    /// The path template, e.g. `/v1/{parent=projects/*/locations/*}/datasets`.
    pub path_template: &'static str,
    pub body: Body,
}

/// How the request maps to the HTTP body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Body {
    /// No body, all non-path fields are sent as query parameters.
    None,
    /// The request, minus any path fields.
    All,
    /// A single request field.
    Field(&'static str),
}

/// The default retry settings for a method.
#[derive(Debug, PartialEq)]
pub enum RetrySettings {
    None,
    OnCodes {
        codes: &'static [Code],
        initial_delay: Duration,
        maximum_delay: Duration,
        multiplier: f64,
        deadline: Duration,
    },
}

/// A request field forwarded in the routing header.
#[derive(Debug, PartialEq)]
pub struct RoutingParam {
    /// The (possibly nested) field name, e.g. `dataset.name`.
    pub field: &'static str,
    /// The key used in the header.
    pub key: &'static str,
}
