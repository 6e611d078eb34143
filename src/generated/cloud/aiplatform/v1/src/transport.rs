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

//! Implements the stubs using the shared [gaxi::transport::Transport].

use crate::Result;
use gax::options::RequestOptions;
use gaxi::transport::Transport;
#[cfg(feature = "dataset-service")]
use std::sync::Arc;

/// Implements [DatasetService](super::stub::DatasetService) over gRPC or HTTP/JSON.
#[cfg(feature = "dataset-service")]
#[derive(Clone, Debug)]
pub struct DatasetService {
    inner: Transport,
}

#[cfg(feature = "dataset-service")]
impl DatasetService {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = Transport::new(config, &crate::descriptor::dataset_service::INFO).await?;
        Ok(Self { inner })
    }

    pub fn from_transport(inner: Transport) -> Self {
        Self { inner }
    }

    pub fn tracing(&self) -> bool {
        self.inner.tracing()
    }
}

#[cfg(feature = "dataset-service")]
impl super::stub::DatasetService for DatasetService {
    async fn create_dataset(
        &self,
        req: crate::model::CreateDatasetRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        use crate::descriptor::dataset_service::CREATE_DATASET;
        self.inner.invoke(&CREATE_DATASET, req, options).await
    }

    async fn get_dataset(
        &self,
        req: crate::model::GetDatasetRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Dataset> {
        use crate::descriptor::dataset_service::GET_DATASET;
        self.inner.invoke(&GET_DATASET, req, options).await
    }

    async fn update_dataset(
        &self,
        req: crate::model::UpdateDatasetRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Dataset> {
        use crate::descriptor::dataset_service::UPDATE_DATASET;
        self.inner.invoke(&UPDATE_DATASET, req, options).await
    }

    async fn list_datasets(
        &self,
        req: crate::model::ListDatasetsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListDatasetsResponse> {
        use crate::descriptor::dataset_service::LIST_DATASETS;
        self.inner.invoke(&LIST_DATASETS, req, options).await
    }

    async fn delete_dataset(
        &self,
        req: crate::model::DeleteDatasetRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        use crate::descriptor::dataset_service::DELETE_DATASET;
        self.inner.invoke(&DELETE_DATASET, req, options).await
    }

    async fn import_data(
        &self,
        req: crate::model::ImportDataRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        use crate::descriptor::dataset_service::IMPORT_DATA;
        self.inner.invoke(&IMPORT_DATA, req, options).await
    }

    async fn list_operations(
        &self,
        req: longrunning::model::ListOperationsRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::ListOperationsResponse> {
        use crate::descriptor::operations::LIST_OPERATIONS;
        self.inner.invoke(&LIST_OPERATIONS, req, options).await
    }

    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        use crate::descriptor::operations::GET_OPERATION;
        self.inner.invoke(&GET_OPERATION, req, options).await
    }

    async fn delete_operation(
        &self,
        req: longrunning::model::DeleteOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        use crate::descriptor::operations::DELETE_OPERATION;
        self.inner
            .invoke::<_, wkt::Empty>(&DELETE_OPERATION, req, options)
            .await
            .map(|_| ())
    }

    async fn cancel_operation(
        &self,
        req: longrunning::model::CancelOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        use crate::descriptor::operations::CANCEL_OPERATION;
        self.inner
            .invoke::<_, wkt::Empty>(&CANCEL_OPERATION, req, options)
            .await
            .map(|_| ())
    }

    async fn wait_operation(
        &self,
        req: longrunning::model::WaitOperationRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        use crate::descriptor::operations::WAIT_OPERATION;
        self.inner.invoke(&WAIT_OPERATION, req, options).await
    }

    fn get_polling_error_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        self.inner.polling_error_policy(options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        self.inner.polling_backoff_policy(options)
    }

    fn operations_client(&self) -> Option<Arc<dyn lro::internal::OperationsClient>> {
        self.inner
            .operations_client()
            .map(|c| c as Arc<dyn lro::internal::OperationsClient>)
    }

    fn close(&self) {
        self.inner.close()
    }
}

/// Implements [VertexRagDataService](super::stub::VertexRagDataService) over gRPC or HTTP/JSON.
#[cfg(feature = "vertex-rag-data-service")]
#[derive(Clone, Debug)]
pub struct VertexRagDataService {
    inner: Transport,
}

#[cfg(feature = "vertex-rag-data-service")]
impl VertexRagDataService {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner =
            Transport::new(config, &crate::descriptor::vertex_rag_data_service::INFO).await?;
        Ok(Self { inner })
    }

    pub fn from_transport(inner: Transport) -> Self {
        Self { inner }
    }

    pub fn tracing(&self) -> bool {
        self.inner.tracing()
    }
}

#[cfg(feature = "vertex-rag-data-service")]
impl super::stub::VertexRagDataService for VertexRagDataService {
    async fn upload_rag_file(
        &self,
        req: crate::model::UploadRagFileRequest,
        options: RequestOptions,
    ) -> Result<crate::model::UploadRagFileResponse> {
        use crate::descriptor::vertex_rag_data_service::UPLOAD_RAG_FILE;
        self.inner.invoke(&UPLOAD_RAG_FILE, req, options).await
    }

    async fn get_rag_file(
        &self,
        req: crate::model::GetRagFileRequest,
        options: RequestOptions,
    ) -> Result<crate::model::RagFile> {
        use crate::descriptor::vertex_rag_data_service::GET_RAG_FILE;
        self.inner.invoke(&GET_RAG_FILE, req, options).await
    }

    async fn list_rag_files(
        &self,
        req: crate::model::ListRagFilesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListRagFilesResponse> {
        use crate::descriptor::vertex_rag_data_service::LIST_RAG_FILES;
        self.inner.invoke(&LIST_RAG_FILES, req, options).await
    }

    fn close(&self) {
        self.inner.close()
    }
}

#[cfg(all(test, feature = "dataset-service"))]
mod tests {
    use super::*;
    use crate::descriptor::dataset_service::{CREATE_DATASET, GET_DATASET, INFO};
    use gaxi::environment::EnvironmentSnapshot;
    use gaxi::options::ClientConfig;

    async fn transport() -> anyhow::Result<Transport> {
        let mut config = ClientConfig::default();
        config.endpoint = Some("http://127.0.0.1:1".to_string());
        config.cred = Some(auth::credentials::testing::test_credentials());
        config.transport_kind = gax::client_builder::TransportKind::Rest;
        let transport =
            Transport::with_environment(config, &INFO, EnvironmentSnapshot::default()).await?;
        Ok(transport)
    }

    #[tokio::test]
    async fn wrapping_long_running_method_creates_operations_client() -> anyhow::Result<()> {
        let transport = transport().await?;
        assert!(transport.existing_operations_client().is_none());

        let _ = transport.wrapper(&GET_DATASET);
        assert!(transport.existing_operations_client().is_none());

        let _ = transport.wrapper(&CREATE_DATASET);
        let created = transport
            .existing_operations_client()
            .expect("created with the wrapper");
        let shared = transport
            .operations_client()
            .expect("the service has operations");
        assert!(Arc::ptr_eq(&created, &shared));
        Ok(())
    }
}
