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

//! Blocking versions of the clients.
//!
//! Each blocking client owns a multi-threaded tokio runtime and runs the
//! asynchronous client on it. The clients are `Send + Sync` and may be used
//! from many threads at once.
//!
//! The blocking clients must not be used from within an asynchronous
//! context: blocking on the runtime from one of its own tasks panics.
//!
//! # Example
//! ```no_run
//! # use vertexai_aiplatform_v1::blocking::DatasetService;
//! # use vertexai_aiplatform_v1::model::ListDatasetsRequest;
//! # fn sample() -> anyhow::Result<()> {
//! let client = DatasetService::new()?;
//! let request = ListDatasetsRequest::default()
//!     .set_parent("projects/my-project/locations/us-central1");
//! for dataset in client.list_datasets(request, Default::default())?.items() {
//!     println!("{:?}", dataset?);
//! }
//! # Ok(()) }
//! ```

use crate::Result;
use gax::client_builder::Error as BuilderError;
use gax::client_builder::Result as BuilderResult;
use gax::options::RequestOptions;
use gax::paginator::PageableResponse;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

fn new_runtime() -> BuilderResult<Arc<Runtime>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("vertexai-blocking")
        .build()
        .map_err(BuilderError::transport)?;
    Ok(Arc::new(runtime))
}

/// A blocking pager over the pages of a list RPC.
///
/// The pager starts with the response of the initial RPC. It fetches each
/// following page when needed, with the options of the initial call.
pub struct Pager<T> {
    runtime: Arc<Runtime>,
    inner: gax::paginator::Pager<T, crate::Error>,
}

impl<T> Pager<T>
where
    T: PageableResponse + Clone + Send + 'static,
{
    fn new(runtime: Arc<Runtime>, inner: gax::paginator::Pager<T, crate::Error>) -> Self {
        Self { runtime, inner }
    }

    /// The latest page observed by this pager.
    pub fn current(&self) -> &T {
        self.inner.current()
    }

    /// Returns the next page, blocking while it is fetched.
    ///
    /// The first call returns the response of the initial RPC.
    pub fn next_page(&mut self) -> Option<Result<T>> {
        self.runtime.block_on(self.inner.next_page())
    }

    /// Converts the pager into an iterator over the pages.
    pub fn pages(self) -> Pages<T> {
        Pages { pager: self }
    }

    /// Converts the pager into an iterator over the items of all the pages.
    pub fn items(self) -> Items<T> {
        Items {
            pager: self,
            buffer: VecDeque::new(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Pager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager").field("inner", &self.inner).finish()
    }
}

/// An iterator over the pages of a [Pager].
#[derive(Debug)]
pub struct Pages<T> {
    pager: Pager<T>,
}

impl<T> Iterator for Pages<T>
where
    T: PageableResponse + Clone + Send + 'static,
{
    type Item = Result<T>;
    fn next(&mut self) -> Option<Self::Item> {
        self.pager.next_page()
    }
}

/// An iterator over the items of all the pages in a [Pager].
pub struct Items<T: PageableResponse> {
    pager: Pager<T>,
    buffer: VecDeque<T::PageItem>,
}

impl<T> Iterator for Items<T>
where
    T: PageableResponse + Clone + Send + 'static,
{
    type Item = Result<T::PageItem>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(item));
            }
            match self.pager.next_page()? {
                Ok(page) => self.buffer.extend(page.items()),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

impl<T> std::fmt::Debug for Items<T>
where
    T: PageableResponse + std::fmt::Debug,
    T::PageItem: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Items")
            .field("pager", &self.pager)
            .field("buffer", &self.buffer)
            .finish()
    }
}

/// A blocking handle to a long-running operation.
#[derive(Debug)]
pub struct Operation<R, M> {
    runtime: Arc<Runtime>,
    inner: lro::Operation<R, M>,
}

impl<R, M> Operation<R, M>
where
    R: wkt::message::Message,
    M: wkt::message::Message,
{
    fn new(runtime: Arc<Runtime>, inner: lro::Operation<R, M>) -> Self {
        Self { runtime, inner }
    }

    /// The name of the operation, as assigned by the service.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// The last known lifecycle state.
    pub fn state(&self) -> lro::State {
        self.inner.state()
    }

    /// Returns true if the last known state is terminal. Never blocks.
    pub fn done(&self) -> bool {
        self.inner.done()
    }

    /// Decodes the metadata of the last known state.
    pub fn metadata(&self) -> Option<M> {
        self.inner.metadata()
    }

    /// Blocks until the operation completes, or the timeout expires.
    pub fn result(&mut self, timeout: Option<Duration>) -> Result<R> {
        self.runtime.block_on(self.inner.result(timeout))
    }

    /// Requests the cancellation of the operation.
    pub fn cancel(&mut self) -> Result<bool> {
        self.runtime.block_on(self.inner.cancel())
    }
}

/// A blocking client for the Vertex AI dataset service.
///
/// See [crate::client::DatasetService] for the description of each RPC.
#[cfg(feature = "dataset-service")]
#[derive(Clone, Debug)]
pub struct DatasetService {
    runtime: Arc<Runtime>,
    inner: crate::client::DatasetService,
}

#[cfg(feature = "dataset-service")]
impl DatasetService {
    /// Creates a client with the default configuration.
    pub fn new() -> BuilderResult<Self> {
        Self::from_builder(crate::client::DatasetService::builder())
    }

    /// Creates a client from a configured builder.
    pub fn from_builder(
        builder: crate::builder::dataset_service::ClientBuilder,
    ) -> BuilderResult<Self> {
        let runtime = new_runtime()?;
        let inner = runtime.block_on(builder.build())?;
        Ok(Self { runtime, inner })
    }

    /// Creates a client from the provided stub, typically a mock.
    pub fn from_stub<T>(stub: T) -> BuilderResult<Self>
    where
        T: crate::stub::DatasetService + 'static,
    {
        let runtime = new_runtime()?;
        let inner = crate::client::DatasetService::from_stub(stub);
        Ok(Self { runtime, inner })
    }

    /// Closes the client. See [crate::client::DatasetService::close].
    pub fn close(&self) {
        self.inner.close()
    }

    /// Creates a Dataset, returning a handle to the long-running operation.
    pub fn create_dataset(
        &self,
        request: crate::model::CreateDatasetRequest,
        options: RequestOptions,
    ) -> Result<Operation<crate::model::Dataset, crate::model::CreateDatasetOperationMetadata>>
    {
        let builder = self
            .inner
            .create_dataset()
            .with_request(request)
            .with_options(options);
        let op = self.runtime.block_on(builder.send())?;
        Ok(Operation::new(self.runtime.clone(), op))
    }

    pub fn get_dataset(
        &self,
        request: crate::model::GetDatasetRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Dataset> {
        let builder = self
            .inner
            .get_dataset()
            .with_request(request)
            .with_options(options);
        self.runtime.block_on(builder.send())
    }

    pub fn update_dataset(
        &self,
        request: crate::model::UpdateDatasetRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Dataset> {
        let builder = self
            .inner
            .update_dataset()
            .with_request(request)
            .with_options(options);
        self.runtime.block_on(builder.send())
    }

    /// Lists the Datasets in a Location.
    ///
    /// Returns after the first page is fetched.
    pub fn list_datasets(
        &self,
        request: crate::model::ListDatasetsRequest,
        options: RequestOptions,
    ) -> Result<Pager<crate::model::ListDatasetsResponse>> {
        let builder = self
            .inner
            .list_datasets()
            .with_request(request)
            .with_options(options);
        let pager = self.runtime.block_on(builder.send())?;
        Ok(Pager::new(self.runtime.clone(), pager))
    }

    pub fn delete_dataset(
        &self,
        request: crate::model::DeleteDatasetRequest,
        options: RequestOptions,
    ) -> Result<Operation<wkt::Empty, crate::model::DeleteOperationMetadata>> {
        let builder = self
            .inner
            .delete_dataset()
            .with_request(request)
            .with_options(options);
        let op = self.runtime.block_on(builder.send())?;
        Ok(Operation::new(self.runtime.clone(), op))
    }

    pub fn import_data(
        &self,
        request: crate::model::ImportDataRequest,
        options: RequestOptions,
    ) -> Result<Operation<crate::model::ImportDataResponse, crate::model::ImportDataOperationMetadata>>
    {
        let builder = self
            .inner
            .import_data()
            .with_request(request)
            .with_options(options);
        let op = self.runtime.block_on(builder.send())?;
        Ok(Operation::new(self.runtime.clone(), op))
    }

    pub fn list_operations(
        &self,
        request: longrunning::model::ListOperationsRequest,
        options: RequestOptions,
    ) -> Result<Pager<longrunning::model::ListOperationsResponse>> {
        let builder = self
            .inner
            .list_operations()
            .with_request(request)
            .with_options(options);
        let pager = self.runtime.block_on(builder.send())?;
        Ok(Pager::new(self.runtime.clone(), pager))
    }

    pub fn get_operation(
        &self,
        request: longrunning::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        let builder = self
            .inner
            .get_operation()
            .with_request(request)
            .with_options(options);
        self.runtime.block_on(builder.send())
    }

    pub fn delete_operation(
        &self,
        request: longrunning::model::DeleteOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let builder = self
            .inner
            .delete_operation()
            .with_request(request)
            .with_options(options);
        self.runtime.block_on(builder.send())
    }

    pub fn cancel_operation(
        &self,
        request: longrunning::model::CancelOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let builder = self
            .inner
            .cancel_operation()
            .with_request(request)
            .with_options(options);
        self.runtime.block_on(builder.send())
    }

    pub fn wait_operation(
        &self,
        request: longrunning::model::WaitOperationRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        let builder = self
            .inner
            .wait_operation()
            .with_request(request)
            .with_options(options);
        self.runtime.block_on(builder.send())
    }
}

/// A blocking client for the Vertex AI RAG data service.
#[cfg(feature = "vertex-rag-data-service")]
#[derive(Clone, Debug)]
pub struct VertexRagDataService {
    runtime: Arc<Runtime>,
    inner: crate::client::VertexRagDataService,
}

#[cfg(feature = "vertex-rag-data-service")]
impl VertexRagDataService {
    /// Creates a client with the default configuration.
    pub fn new() -> BuilderResult<Self> {
        Self::from_builder(crate::client::VertexRagDataService::builder())
    }

    /// Creates a client from a configured builder.
    pub fn from_builder(
        builder: crate::builder::vertex_rag_data_service::ClientBuilder,
    ) -> BuilderResult<Self> {
        let runtime = new_runtime()?;
        let inner = runtime.block_on(builder.build())?;
        Ok(Self { runtime, inner })
    }

    /// Creates a client from the provided stub, typically a mock.
    pub fn from_stub<T>(stub: T) -> BuilderResult<Self>
    where
        T: crate::stub::VertexRagDataService + 'static,
    {
        let runtime = new_runtime()?;
        let inner = crate::client::VertexRagDataService::from_stub(stub);
        Ok(Self { runtime, inner })
    }

    pub fn close(&self) {
        self.inner.close()
    }

    pub fn upload_rag_file(
        &self,
        request: crate::model::UploadRagFileRequest,
        options: RequestOptions,
    ) -> Result<crate::model::UploadRagFileResponse> {
        let builder = self
            .inner
            .upload_rag_file()
            .with_request(request)
            .with_options(options);
        self.runtime.block_on(builder.send())
    }

    pub fn get_rag_file(
        &self,
        request: crate::model::GetRagFileRequest,
        options: RequestOptions,
    ) -> Result<crate::model::RagFile> {
        let builder = self
            .inner
            .get_rag_file()
            .with_request(request)
            .with_options(options);
        self.runtime.block_on(builder.send())
    }

    pub fn list_rag_files(
        &self,
        request: crate::model::ListRagFilesRequest,
        options: RequestOptions,
    ) -> Result<Pager<crate::model::ListRagFilesResponse>> {
        let builder = self
            .inner
            .list_rag_files()
            .with_request(request)
            .with_options(options);
        let pager = self.runtime.block_on(builder.send())?;
        Ok(Pager::new(self.runtime.clone(), pager))
    }
}

#[cfg(all(test, feature = "dataset-service"))]
mod tests {
    use super::*;
    use crate::model::{Dataset, ListDatasetsRequest, ListDatasetsResponse};
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};

    mockall::mock! {
        #[derive(Debug)]
        DatasetService {}
        impl crate::stub::DatasetService for DatasetService {
            async fn list_datasets(&self, req: ListDatasetsRequest, _options: RequestOptions) -> Result<ListDatasetsResponse>;
            async fn get_operation(&self, req: longrunning::model::GetOperationRequest, _options: RequestOptions) -> Result<longrunning::model::Operation>;
            async fn create_dataset(&self, req: crate::model::CreateDatasetRequest, _options: RequestOptions) -> Result<longrunning::model::Operation>;
            async fn get_dataset(&self, req: crate::model::GetDatasetRequest, _options: RequestOptions) -> Result<Dataset>;
        }
    }

    fn page(names: &[&str], token: &str) -> ListDatasetsResponse {
        ListDatasetsResponse::default()
            .set_datasets(names.iter().map(|n| Dataset::default().set_name(*n)))
            .set_next_page_token(token)
    }

    #[test]
    fn items_across_pages() -> anyhow::Result<()> {
        let mut mock = MockDatasetService::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_datasets()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.parent == "projects/p/locations/l" && r.page_token.is_empty())
            .returning(|_, _| Ok(page(&["a", "b"], "next")));
        mock.expect_list_datasets()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page_token == "next")
            .returning(|_, _| Ok(page(&["c"], "")));

        let client = DatasetService::from_stub(mock)?;
        let request = ListDatasetsRequest::default().set_parent("projects/p/locations/l");
        let pager = client.list_datasets(request, RequestOptions::default())?;
        assert_eq!(pager.current().datasets.len(), 2);
        let names = pager
            .items()
            .map(|d| d.map(|d| d.name))
            .collect::<Result<Vec<_>>>()?;
        assert_eq!(names, vec!["a", "b", "c"]);
        Ok(())
    }

    #[test]
    fn pages_stop_after_error() -> anyhow::Result<()> {
        let mut mock = MockDatasetService::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_datasets()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(page(&["a"], "next")));
        mock.expect_list_datasets()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Err(Error::service(
                    Status::default().set_code(Code::PermissionDenied),
                ))
            });

        let client = DatasetService::from_stub(mock)?;
        let pages = client
            .list_datasets(ListDatasetsRequest::default(), RequestOptions::default())?
            .pages()
            .collect::<Vec<_>>();
        assert_eq!(pages.len(), 2, "{pages:?}");
        assert!(pages[0].is_ok(), "{pages:?}");
        let err = pages[1].as_ref().unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
        Ok(())
    }

    #[test]
    fn shared_across_threads() -> anyhow::Result<()> {
        const WORKERS: usize = 8;
        let mut mock = MockDatasetService::new();
        mock.expect_get_dataset()
            .times(WORKERS)
            .returning(|r, _| {
                Ok(Dataset::default()
                    .set_display_name(r.name.clone())
                    .set_name(r.name))
            });

        let client = DatasetService::from_stub(mock)?;
        let workers = (0..WORKERS)
            .map(|i| {
                let client = client.clone();
                std::thread::spawn(move || {
                    let name = format!("projects/p/locations/l/datasets/d-{i}");
                    let request = crate::model::GetDatasetRequest::default().set_name(&name);
                    client
                        .get_dataset(request, RequestOptions::default())
                        .map(|d| (name, d))
                })
            })
            .collect::<Vec<_>>();
        for worker in workers {
            let (name, dataset) = worker.join().expect("worker thread panicked")?;
            assert_eq!(dataset.name, name);
            assert_eq!(dataset.display_name, name);
        }
        Ok(())
    }

    #[test]
    fn operation_result() -> anyhow::Result<()> {
        let dataset = Dataset::default().set_name("projects/p/locations/l/datasets/d");
        let any = wkt::Any::from_msg(&dataset)?;
        let mut mock = MockDatasetService::new();
        mock.expect_create_dataset().once().returning(|_, _| {
            Ok(longrunning::model::Operation::default()
                .set_name("projects/p/locations/l/datasets/d/operations/op"))
        });
        mock.expect_get_operation()
            .once()
            .withf(|r, _| r.name == "projects/p/locations/l/datasets/d/operations/op")
            .returning(move |r, _| {
                Ok(longrunning::model::Operation::default()
                    .set_name(r.name)
                    .set_done(true)
                    .set_response(any.clone()))
            });

        let client = DatasetService::from_stub(mock)?;
        let request = crate::model::CreateDatasetRequest::default()
            .set_parent("projects/p/locations/l")
            .set_dataset(Dataset::default().set_display_name("d"));
        let mut op = client.create_dataset(request, RequestOptions::default())?;
        assert!(!op.done());
        assert_eq!(op.name(), "projects/p/locations/l/datasets/d/operations/op");
        let got = op.result(None)?;
        assert_eq!(got, dataset);
        assert!(op.done());
        Ok(())
    }
}
