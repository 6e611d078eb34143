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

//! Implementation details for the Vertex AI client libraries.
//!
//! All the types, traits, and functions defined in this crate are **not**
//! intended for general use. This crate will remain unstable for the
//! foreseeable future, even if used in the implementation for stable client
//! libraries. The generated clients use it to resolve their configuration,
//! and to send requests over gRPC or HTTP.
//!
//! Changes to this crate may break applications that use it directly.

#[cfg(feature = "_internal-common")]
pub mod api_header;

#[cfg(feature = "_internal-common")]
pub mod credentials;

#[cfg(feature = "_internal-common")]
pub mod descriptor;

#[cfg(feature = "_internal-common")]
pub mod endpoint;

#[cfg(feature = "_internal-common")]
pub mod environment;

#[cfg(feature = "_internal-common")]
pub mod options;

#[cfg(feature = "_internal-common")]
pub mod path_parameter;

#[cfg(feature = "_internal-common")]
pub mod query_parameter;

#[cfg(feature = "_internal-common")]
pub mod routing_parameter;

#[cfg(feature = "_internal-common")]
pub mod transcode;

#[cfg(feature = "_internal-common")]
pub mod wrapper;

#[cfg(feature = "_internal-http-client")]
pub mod http;

#[cfg(feature = "_internal-grpc-client")]
pub mod grpc;

#[cfg(all(feature = "_internal-http-client", feature = "_internal-grpc-client"))]
pub mod operations;

#[cfg(all(feature = "_internal-http-client", feature = "_internal-grpc-client"))]
pub mod transport;
