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

//! Decorators that instrument the stubs with `tracing` spans.
//!
//! The clients install these when tracing is enabled, either with
//! `ClientBuilder::with_tracing()` or with the `GOOGLE_CLOUD_RUST_TRACING`
//! environment variable.

use crate::Result;
use gax::options::RequestOptions;
#[cfg(feature = "dataset-service")]
use std::sync::Arc;

/// Implements a [DatasetService](super::stub::DatasetService) decorator for logging and tracing.
#[cfg(feature = "dataset-service")]
#[derive(Clone, Debug)]
pub struct DatasetService<T>
where
    T: super::stub::DatasetService + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

#[cfg(feature = "dataset-service")]
impl<T> DatasetService<T>
where
    T: super::stub::DatasetService + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[cfg(feature = "dataset-service")]
impl<T> super::stub::DatasetService for DatasetService<T>
where
    T: super::stub::DatasetService + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn create_dataset(
        &self,
        req: crate::model::CreateDatasetRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        self.inner.create_dataset(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_dataset(
        &self,
        req: crate::model::GetDatasetRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Dataset> {
        self.inner.get_dataset(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_dataset(
        &self,
        req: crate::model::UpdateDatasetRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Dataset> {
        self.inner.update_dataset(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_datasets(
        &self,
        req: crate::model::ListDatasetsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListDatasetsResponse> {
        self.inner.list_datasets(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_dataset(
        &self,
        req: crate::model::DeleteDatasetRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        self.inner.delete_dataset(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn import_data(
        &self,
        req: crate::model::ImportDataRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        self.inner.import_data(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_operations(
        &self,
        req: longrunning::model::ListOperationsRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::ListOperationsResponse> {
        self.inner.list_operations(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        self.inner.get_operation(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_operation(
        &self,
        req: longrunning::model::DeleteOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.inner.delete_operation(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn cancel_operation(
        &self,
        req: longrunning::model::CancelOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.inner.cancel_operation(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn wait_operation(
        &self,
        req: longrunning::model::WaitOperationRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        self.inner.wait_operation(req, options).await
    }

    fn get_polling_error_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        self.inner.get_polling_error_policy(options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        self.inner.get_polling_backoff_policy(options)
    }

    fn operations_client(&self) -> Option<Arc<dyn lro::internal::OperationsClient>> {
        self.inner.operations_client()
    }

    fn close(&self) {
        self.inner.close()
    }
}

/// Implements a [VertexRagDataService](super::stub::VertexRagDataService) decorator for logging and tracing.
#[cfg(feature = "vertex-rag-data-service")]
#[derive(Clone, Debug)]
pub struct VertexRagDataService<T>
where
    T: super::stub::VertexRagDataService + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

#[cfg(feature = "vertex-rag-data-service")]
impl<T> VertexRagDataService<T>
where
    T: super::stub::VertexRagDataService + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[cfg(feature = "vertex-rag-data-service")]
impl<T> super::stub::VertexRagDataService for VertexRagDataService<T>
where
    T: super::stub::VertexRagDataService + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn upload_rag_file(
        &self,
        req: crate::model::UploadRagFileRequest,
        options: RequestOptions,
    ) -> Result<crate::model::UploadRagFileResponse> {
        self.inner.upload_rag_file(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_rag_file(
        &self,
        req: crate::model::GetRagFileRequest,
        options: RequestOptions,
    ) -> Result<crate::model::RagFile> {
        self.inner.get_rag_file(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_rag_files(
        &self,
        req: crate::model::ListRagFilesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListRagFilesResponse> {
        self.inner.list_rag_files(req, options).await
    }

    fn close(&self) {
        self.inner.close()
    }
}
