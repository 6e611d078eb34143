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

//! Vertex AI API
//!
//! This crate contains the client libraries for the Vertex AI dataset and
//! RAG data services.
//!
//! * [DatasetService](client/struct.DatasetService.html)
//! * [VertexRagDataService](client/struct.VertexRagDataService.html)
//!
//! Each service is behind a feature of the same name (e.g.
//! `dataset-service`), both are enabled by default.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use vertexai_aiplatform_v1::client::DatasetService;
//! let client = DatasetService::builder().build().await?;
//! let mut items = client
//!     .list_datasets()
//!     .set_parent("projects/my-project/locations/us-central1")
//!     .send()
//!     .await?
//!     .by_item();
//! while let Some(dataset) = items.next().await {
//!     println!("{:?}", dataset?);
//! }
//! # anyhow::Result::<()>::Ok(()) });
//! ```

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

/// The error type for all the clients in this crate.
pub use gax::error::Error;

/// The result type for all the clients in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The messages and enums that are part of this client library.
pub mod model;

pub mod builder;

#[cfg(any(feature = "dataset-service", feature = "vertex-rag-data-service"))]
pub mod client;

#[cfg(any(feature = "dataset-service", feature = "vertex-rag-data-service"))]
pub mod stub;

#[cfg(any(feature = "dataset-service", feature = "vertex-rag-data-service"))]
pub mod interceptor;

#[cfg(any(feature = "dataset-service", feature = "vertex-rag-data-service"))]
pub mod blocking;

pub(crate) mod descriptor;

#[cfg(any(feature = "dataset-service", feature = "vertex-rag-data-service"))]
pub(crate) mod tracing;

#[cfg(any(feature = "dataset-service", feature = "vertex-rag-data-service"))]
pub(crate) mod transport;
