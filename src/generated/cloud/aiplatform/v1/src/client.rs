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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

#[cfg(any(feature = "dataset-service", feature = "vertex-rag-data-service"))]
use std::sync::Arc;

/// Implements a client for the Vertex AI API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use vertexai_aiplatform_v1::client::DatasetService;
/// let client = DatasetService::builder().build().await?;
/// let parent = "projects/my-project/locations/us-central1";
/// let mut items = client.list_datasets().set_parent(parent).send().await?.by_item();
/// while let Some(item) = items.next().await {
///     println!("{:?}", item?);
/// }
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// The service that manages Vertex AI Dataset and its child resources.
///
/// # Configuration
///
/// To configure `DatasetService` use the `with_*` methods in the type returned
/// by [builder()][DatasetService::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://aiplatform.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::dataset_service::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::dataset_service::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `DatasetService` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `DatasetService` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[cfg(feature = "dataset-service")]
#[derive(Clone, Debug)]
pub struct DatasetService {
    inner: Arc<dyn super::stub::dynamic::DatasetService>,
}

#[cfg(feature = "dataset-service")]
impl DatasetService {
    /// Returns a builder for [DatasetService].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use vertexai_aiplatform_v1::client::DatasetService;
    /// let client = DatasetService::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::dataset_service::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::dataset_service::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::DatasetService + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let stub = super::transport::DatasetService::new(config).await?;
        Ok(Self {
            inner: Self::decorate(stub),
        })
    }

    pub(crate) async fn new_with_transport(
        _config: gaxi::options::ClientConfig,
        transport: gaxi::transport::Transport,
    ) -> gax::client_builder::Result<Self> {
        let stub = super::transport::DatasetService::from_transport(transport);
        Ok(Self {
            inner: Self::decorate(stub),
        })
    }

    fn decorate(
        stub: super::transport::DatasetService,
    ) -> Arc<dyn super::stub::dynamic::DatasetService> {
        if stub.tracing() {
            Arc::new(super::tracing::DatasetService::new(stub))
        } else {
            Arc::new(stub)
        }
    }

    /// Closes the client.
    ///
    /// Closing is idempotent. Calls made after the client is closed, including
    /// calls from its clones, pagers, and operations, fail with a
    /// "transport closed" error.
    pub fn close(&self) {
        self.inner.close()
    }

    /// Creates a Dataset.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The returned [lro::Operation] polls the operation until it completes.
    ///
    /// [long-running Operation]: https://google.aip.dev/151
    pub fn create_dataset(&self) -> super::builder::dataset_service::CreateDataset {
        super::builder::dataset_service::CreateDataset::new(self.inner.clone())
    }

    /// Gets a Dataset.
    pub fn get_dataset(&self) -> super::builder::dataset_service::GetDataset {
        super::builder::dataset_service::GetDataset::new(self.inner.clone())
    }

    /// Updates a Dataset.
    pub fn update_dataset(&self) -> super::builder::dataset_service::UpdateDataset {
        super::builder::dataset_service::UpdateDataset::new(self.inner.clone())
    }

    /// Lists Datasets in a Location.
    pub fn list_datasets(&self) -> super::builder::dataset_service::ListDatasets {
        super::builder::dataset_service::ListDatasets::new(self.inner.clone())
    }

    /// Deletes a Dataset.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The returned [lro::Operation] polls the operation until it completes.
    ///
    /// [long-running Operation]: https://google.aip.dev/151
    pub fn delete_dataset(&self) -> super::builder::dataset_service::DeleteDataset {
        super::builder::dataset_service::DeleteDataset::new(self.inner.clone())
    }

    /// Imports data into a Dataset.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The returned [lro::Operation] polls the operation until it completes.
    ///
    /// [long-running Operation]: https://google.aip.dev/151
    pub fn import_data(&self) -> super::builder::dataset_service::ImportData {
        super::builder::dataset_service::ImportData::new(self.inner.clone())
    }

    /// Provides the [Operations][longrunning] service functionality in this
    /// service.
    pub fn list_operations(&self) -> super::builder::dataset_service::ListOperations {
        super::builder::dataset_service::ListOperations::new(self.inner.clone())
    }

    /// Provides the [Operations][longrunning] service functionality in this
    /// service.
    pub fn get_operation(&self) -> super::builder::dataset_service::GetOperation {
        super::builder::dataset_service::GetOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][longrunning] service functionality in this
    /// service.
    pub fn delete_operation(&self) -> super::builder::dataset_service::DeleteOperation {
        super::builder::dataset_service::DeleteOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][longrunning] service functionality in this
    /// service.
    pub fn cancel_operation(&self) -> super::builder::dataset_service::CancelOperation {
        super::builder::dataset_service::CancelOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][longrunning] service functionality in this
    /// service.
    pub fn wait_operation(&self) -> super::builder::dataset_service::WaitOperation {
        super::builder::dataset_service::WaitOperation::new(self.inner.clone())
    }
}

/// Implements a client for the Vertex AI API.
///
/// # Service Description
///
/// A service for managing user data for RAG.
///
/// # Configuration
///
/// To configure `VertexRagDataService` use the `with_*` methods in the type
/// returned by [builder()][VertexRagDataService::builder].
///
/// # Pooling and Cloning
///
/// `VertexRagDataService` holds a connection pool internally, it is advised
/// to create one and then reuse it. You do not need to wrap it in an
/// [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[cfg(feature = "vertex-rag-data-service")]
#[derive(Clone, Debug)]
pub struct VertexRagDataService {
    inner: Arc<dyn super::stub::dynamic::VertexRagDataService>,
}

#[cfg(feature = "vertex-rag-data-service")]
impl VertexRagDataService {
    /// Returns a builder for [VertexRagDataService].
    pub fn builder() -> super::builder::vertex_rag_data_service::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::vertex_rag_data_service::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::VertexRagDataService + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let stub = super::transport::VertexRagDataService::new(config).await?;
        Ok(Self {
            inner: Self::decorate(stub),
        })
    }

    pub(crate) async fn new_with_transport(
        _config: gaxi::options::ClientConfig,
        transport: gaxi::transport::Transport,
    ) -> gax::client_builder::Result<Self> {
        let stub = super::transport::VertexRagDataService::from_transport(transport);
        Ok(Self {
            inner: Self::decorate(stub),
        })
    }

    fn decorate(
        stub: super::transport::VertexRagDataService,
    ) -> Arc<dyn super::stub::dynamic::VertexRagDataService> {
        if stub.tracing() {
            Arc::new(super::tracing::VertexRagDataService::new(stub))
        } else {
            Arc::new(stub)
        }
    }

    /// Closes the client.
    ///
    /// Closing is idempotent. Calls made after the client is closed fail with
    /// a "transport closed" error.
    pub fn close(&self) {
        self.inner.close()
    }

    /// Upload a file into a RagCorpus.
    pub fn upload_rag_file(&self) -> super::builder::vertex_rag_data_service::UploadRagFile {
        super::builder::vertex_rag_data_service::UploadRagFile::new(self.inner.clone())
    }

    /// Gets a RagFile.
    pub fn get_rag_file(&self) -> super::builder::vertex_rag_data_service::GetRagFile {
        super::builder::vertex_rag_data_service::GetRagFile::new(self.inner.clone())
    }

    /// Lists RagFiles in a RagCorpus.
    pub fn list_rag_files(&self) -> super::builder::vertex_rag_data_service::ListRagFiles {
        super::builder::vertex_rag_data_service::ListRagFiles::new(self.inner.clone())
    }
}
