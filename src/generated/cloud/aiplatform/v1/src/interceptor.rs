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

//! Typed builders for the interceptor hooks of each service.
//!
//! Each RPC has three optional hooks: `pre_<rpc>` runs before the request is
//! sent, `post_<rpc>` and `post_<rpc>_with_metadata` run, in that order, with
//! each successful response.
//!
//! # Example
//! ```
//! # use vertexai_aiplatform_v1::interceptor;
//! # tokio_test::block_on(async {
//! use vertexai_aiplatform_v1::client::DatasetService;
//! let hooks = interceptor::DatasetService::new()
//!     .pre_get_dataset(|req, mut metadata| {
//!         metadata.insert("x-goog-user-project", http::HeaderValue::from_static("my-project"));
//!         (req, metadata)
//!     })
//!     .post_get_dataset(|mut dataset| {
//!         dataset.labels.insert("seen".into(), "true".into());
//!         dataset
//!     });
//! let client = DatasetService::builder()
//!     .with_interceptors(hooks)
//!     .build()
//!     .await?;
//! # gax::client_builder::Result::<()>::Ok(()) });
//! ```

use gax::interceptor::{Interceptor, Interceptors};
use gaxi::descriptor::MethodDescriptor;
use http::HeaderMap;

#[derive(Clone, Debug, Default)]
struct Hooks(Interceptors);

impl Hooks {
    fn update<Req, Resp, F>(mut self, method: &'static MethodDescriptor, f: F) -> Self
    where
        Req: 'static,
        Resp: 'static,
        F: FnOnce(Interceptor<Req, Resp>) -> Interceptor<Req, Resp>,
    {
        let current = self
            .0
            .get::<Req, Resp>(method.key())
            .cloned()
            .unwrap_or_default();
        self.0.insert(method.key(), f(current));
        self
    }
}

// Generates the `pre_*`, `post_*` and `post_*_with_metadata` setters for one RPC.
macro_rules! rpc_hooks {
    ($rpc:literal, $method:expr, $req:ty, $resp:ty, $pre:ident, $post:ident, $post_with_metadata:ident) => {
        #[doc = concat!("Sets the hook run before each `", $rpc, "` request is sent.")]
        pub fn $pre<F>(self, f: F) -> Self
        where
            F: Fn($req, HeaderMap) -> ($req, HeaderMap) + Send + Sync + 'static,
        {
            Self(self.0.update::<$req, $resp, _>(&$method, |i| i.with_pre(f)))
        }

        #[doc = concat!("Sets the hook run with each successful `", $rpc, "` response.")]
        pub fn $post<F>(self, f: F) -> Self
        where
            F: Fn($resp) -> $resp + Send + Sync + 'static,
        {
            Self(self.0.update::<$req, $resp, _>(&$method, |i| i.with_post(f)))
        }

        #[doc = concat!("Sets the hook run with each successful `", $rpc, "` response and its metadata.")]
        pub fn $post_with_metadata<F>(self, f: F) -> Self
        where
            F: Fn($resp, HeaderMap) -> ($resp, HeaderMap) + Send + Sync + 'static,
        {
            Self(
                self.0
                    .update::<$req, $resp, _>(&$method, |i| i.with_post_with_metadata(f)),
            )
        }
    };
}

/// The interceptor hooks for [DatasetService][crate::client::DatasetService].
///
/// Use [ClientBuilder::with_interceptors][gax::client_builder::ClientBuilder::with_interceptors]
/// to install them.
#[cfg(feature = "dataset-service")]
#[derive(Clone, Debug, Default)]
pub struct DatasetService(Hooks);

#[cfg(feature = "dataset-service")]
impl DatasetService {
    pub fn new() -> Self {
        Self::default()
    }

    rpc_hooks!(
        "CreateDataset",
        crate::descriptor::dataset_service::CREATE_DATASET,
        crate::model::CreateDatasetRequest,
        longrunning::model::Operation,
        pre_create_dataset,
        post_create_dataset,
        post_create_dataset_with_metadata
    );
    rpc_hooks!(
        "GetDataset",
        crate::descriptor::dataset_service::GET_DATASET,
        crate::model::GetDatasetRequest,
        crate::model::Dataset,
        pre_get_dataset,
        post_get_dataset,
        post_get_dataset_with_metadata
    );
    rpc_hooks!(
        "UpdateDataset",
        crate::descriptor::dataset_service::UPDATE_DATASET,
        crate::model::UpdateDatasetRequest,
        crate::model::Dataset,
        pre_update_dataset,
        post_update_dataset,
        post_update_dataset_with_metadata
    );
    rpc_hooks!(
        "ListDatasets",
        crate::descriptor::dataset_service::LIST_DATASETS,
        crate::model::ListDatasetsRequest,
        crate::model::ListDatasetsResponse,
        pre_list_datasets,
        post_list_datasets,
        post_list_datasets_with_metadata
    );
    rpc_hooks!(
        "DeleteDataset",
        crate::descriptor::dataset_service::DELETE_DATASET,
        crate::model::DeleteDatasetRequest,
        longrunning::model::Operation,
        pre_delete_dataset,
        post_delete_dataset,
        post_delete_dataset_with_metadata
    );
    rpc_hooks!(
        "ImportData",
        crate::descriptor::dataset_service::IMPORT_DATA,
        crate::model::ImportDataRequest,
        longrunning::model::Operation,
        pre_import_data,
        post_import_data,
        post_import_data_with_metadata
    );
    rpc_hooks!(
        "ListOperations",
        crate::descriptor::operations::LIST_OPERATIONS,
        longrunning::model::ListOperationsRequest,
        longrunning::model::ListOperationsResponse,
        pre_list_operations,
        post_list_operations,
        post_list_operations_with_metadata
    );
    rpc_hooks!(
        "GetOperation",
        crate::descriptor::operations::GET_OPERATION,
        longrunning::model::GetOperationRequest,
        longrunning::model::Operation,
        pre_get_operation,
        post_get_operation,
        post_get_operation_with_metadata
    );
    rpc_hooks!(
        "DeleteOperation",
        crate::descriptor::operations::DELETE_OPERATION,
        longrunning::model::DeleteOperationRequest,
        wkt::Empty,
        pre_delete_operation,
        post_delete_operation,
        post_delete_operation_with_metadata
    );
    rpc_hooks!(
        "CancelOperation",
        crate::descriptor::operations::CANCEL_OPERATION,
        longrunning::model::CancelOperationRequest,
        wkt::Empty,
        pre_cancel_operation,
        post_cancel_operation,
        post_cancel_operation_with_metadata
    );
    rpc_hooks!(
        "WaitOperation",
        crate::descriptor::operations::WAIT_OPERATION,
        longrunning::model::WaitOperationRequest,
        longrunning::model::Operation,
        pre_wait_operation,
        post_wait_operation,
        post_wait_operation_with_metadata
    );
}

#[cfg(feature = "dataset-service")]
impl From<DatasetService> for Interceptors {
    fn from(value: DatasetService) -> Self {
        (value.0).0
    }
}

/// The interceptor hooks for [VertexRagDataService][crate::client::VertexRagDataService].
#[cfg(feature = "vertex-rag-data-service")]
#[derive(Clone, Debug, Default)]
pub struct VertexRagDataService(Hooks);

#[cfg(feature = "vertex-rag-data-service")]
impl VertexRagDataService {
    pub fn new() -> Self {
        Self::default()
    }

    rpc_hooks!(
        "UploadRagFile",
        crate::descriptor::vertex_rag_data_service::UPLOAD_RAG_FILE,
        crate::model::UploadRagFileRequest,
        crate::model::UploadRagFileResponse,
        pre_upload_rag_file,
        post_upload_rag_file,
        post_upload_rag_file_with_metadata
    );
    rpc_hooks!(
        "GetRagFile",
        crate::descriptor::vertex_rag_data_service::GET_RAG_FILE,
        crate::model::GetRagFileRequest,
        crate::model::RagFile,
        pre_get_rag_file,
        post_get_rag_file,
        post_get_rag_file_with_metadata
    );
    rpc_hooks!(
        "ListRagFiles",
        crate::descriptor::vertex_rag_data_service::LIST_RAG_FILES,
        crate::model::ListRagFilesRequest,
        crate::model::ListRagFilesResponse,
        pre_list_rag_files,
        post_list_rag_files,
        post_list_rag_files_with_metadata
    );
}

#[cfg(feature = "vertex-rag-data-service")]
impl From<VertexRagDataService> for Interceptors {
    fn from(value: VertexRagDataService) -> Self {
        (value.0).0
    }
}
