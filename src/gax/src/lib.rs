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

//! Google APIs helpers for the Vertex AI client libraries.
//!
//! This crate contains the types and functions shared by the client
//! libraries: the error types, per-request options, retry, backoff and
//! polling policies, pagers, the generic client builder, and interceptor
//! hooks.
//!
//! <div class="warning">
//! Items marked <code>#[doc(hidden)]</code> are implementation details used
//! by the client libraries. They are not intended for general use, and may
//! change without notice.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod backoff_policy;
pub mod client_builder;
pub mod error;
pub mod exponential_backoff;
pub mod interceptor;
pub mod options;
pub mod paginator;
pub mod polling_backoff_policy;
pub mod polling_error_policy;
pub mod retry_policy;
pub mod retry_result;

#[doc(hidden)]
pub mod retry_loop_internal;
