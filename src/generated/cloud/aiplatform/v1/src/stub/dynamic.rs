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

//! Dyn-compatible versions of the traits in [super].
//!
//! The clients hold an `Arc<dyn ...>` of these traits. Any type implementing
//! the traits in [super] implements these via the blanket implementations.

use crate::Result;
use gax::options::RequestOptions;
use std::sync::Arc;

/// A dyn-compatible, crate-private version of [super::DatasetService].
#[cfg(feature = "dataset-service")]
#[async_trait::async_trait]
pub trait DatasetService: std::fmt::Debug + Send + Sync {
    async fn create_dataset(
        &self,
        req: crate::model::CreateDatasetRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation>;

    async fn get_dataset(
        &self,
        req: crate::model::GetDatasetRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Dataset>;

    async fn update_dataset(
        &self,
        req: crate::model::UpdateDatasetRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Dataset>;

    async fn list_datasets(
        &self,
        req: crate::model::ListDatasetsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListDatasetsResponse>;

    async fn delete_dataset(
        &self,
        req: crate::model::DeleteDatasetRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation>;

    async fn import_data(
        &self,
        req: crate::model::ImportDataRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation>;

    async fn list_operations(
        &self,
        req: longrunning::model::ListOperationsRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::ListOperationsResponse>;

    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation>;

    async fn delete_operation(
        &self,
        req: longrunning::model::DeleteOperationRequest,
        options: RequestOptions,
    ) -> Result<()>;

    async fn cancel_operation(
        &self,
        req: longrunning::model::CancelOperationRequest,
        options: RequestOptions,
    ) -> Result<()>;

    async fn wait_operation(
        &self,
        req: longrunning::model::WaitOperationRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation>;

    fn get_polling_error_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn gax::polling_error_policy::PollingErrorPolicy>;

    fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy>;

    fn operations_client(&self) -> Option<Arc<dyn lro::internal::OperationsClient>>;

    fn close(&self);
}

/// All implementations of [super::DatasetService] also implement [DatasetService].
#[cfg(feature = "dataset-service")]
#[async_trait::async_trait]
impl<T: super::DatasetService> DatasetService for T {
    async fn create_dataset(
        &self,
        req: crate::model::CreateDatasetRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        T::create_dataset(self, req, options).await
    }

    async fn get_dataset(
        &self,
        req: crate::model::GetDatasetRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Dataset> {
        T::get_dataset(self, req, options).await
    }

    async fn update_dataset(
        &self,
        req: crate::model::UpdateDatasetRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Dataset> {
        T::update_dataset(self, req, options).await
    }

    async fn list_datasets(
        &self,
        req: crate::model::ListDatasetsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListDatasetsResponse> {
        T::list_datasets(self, req, options).await
    }

    async fn delete_dataset(
        &self,
        req: crate::model::DeleteDatasetRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        T::delete_dataset(self, req, options).await
    }

    async fn import_data(
        &self,
        req: crate::model::ImportDataRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        T::import_data(self, req, options).await
    }

    async fn list_operations(
        &self,
        req: longrunning::model::ListOperationsRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::ListOperationsResponse> {
        T::list_operations(self, req, options).await
    }

    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        T::get_operation(self, req, options).await
    }

    async fn delete_operation(
        &self,
        req: longrunning::model::DeleteOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        T::delete_operation(self, req, options).await
    }

    async fn cancel_operation(
        &self,
        req: longrunning::model::CancelOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        T::cancel_operation(self, req, options).await
    }

    async fn wait_operation(
        &self,
        req: longrunning::model::WaitOperationRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        T::wait_operation(self, req, options).await
    }

    fn get_polling_error_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        T::get_polling_error_policy(self, options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        T::get_polling_backoff_policy(self, options)
    }

    fn operations_client(&self) -> Option<Arc<dyn lro::internal::OperationsClient>> {
        T::operations_client(self)
    }

    fn close(&self) {
        T::close(self)
    }
}

/// A dyn-compatible, crate-private version of [super::VertexRagDataService].
#[cfg(feature = "vertex-rag-data-service")]
#[async_trait::async_trait]
pub trait VertexRagDataService: std::fmt::Debug + Send + Sync {
    async fn upload_rag_file(
        &self,
        req: crate::model::UploadRagFileRequest,
        options: RequestOptions,
    ) -> Result<crate::model::UploadRagFileResponse>;

    async fn get_rag_file(
        &self,
        req: crate::model::GetRagFileRequest,
        options: RequestOptions,
    ) -> Result<crate::model::RagFile>;

    async fn list_rag_files(
        &self,
        req: crate::model::ListRagFilesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListRagFilesResponse>;

    fn close(&self);
}

/// All implementations of [super::VertexRagDataService] also implement [VertexRagDataService].
#[cfg(feature = "vertex-rag-data-service")]
#[async_trait::async_trait]
impl<T: super::VertexRagDataService> VertexRagDataService for T {
    async fn upload_rag_file(
        &self,
        req: crate::model::UploadRagFileRequest,
        options: RequestOptions,
    ) -> Result<crate::model::UploadRagFileResponse> {
        T::upload_rag_file(self, req, options).await
    }

    async fn get_rag_file(
        &self,
        req: crate::model::GetRagFileRequest,
        options: RequestOptions,
    ) -> Result<crate::model::RagFile> {
        T::get_rag_file(self, req, options).await
    }

    async fn list_rag_files(
        &self,
        req: crate::model::ListRagFilesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListRagFilesResponse> {
        T::list_rag_files(self, req, options).await
    }

    fn close(&self) {
        T::close(self)
    }
}
