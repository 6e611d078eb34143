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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

use crate::Result;
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::options::RequestOptions;
use std::sync::Arc;

#[allow(dead_code)]
async fn unimplemented_stub<T>(method: &'static str) -> Result<T> {
    Err(Error::service(
        Status::default()
            .set_code(Code::Unimplemented)
            .set_message(format!("{method} is not implemented by this stub")),
    ))
}

/// Defines the trait used to implement [super::client::DatasetService].
///
/// Application developers may need to implement this trait to mock
/// `client::DatasetService`. In other use-cases, application developers only
/// use `client::DatasetService` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "dataset-service")]
pub trait DatasetService: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::DatasetService::create_dataset].
    fn create_dataset(
        &self,
        _req: crate::model::CreateDatasetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<longrunning::model::Operation>> + Send {
        unimplemented_stub("create_dataset")
    }

    /// Implements [super::client::DatasetService::get_dataset].
    fn get_dataset(
        &self,
        _req: crate::model::GetDatasetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::Dataset>> + Send {
        unimplemented_stub("get_dataset")
    }

    /// Implements [super::client::DatasetService::update_dataset].
    fn update_dataset(
        &self,
        _req: crate::model::UpdateDatasetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::Dataset>> + Send {
        unimplemented_stub("update_dataset")
    }

    /// Implements [super::client::DatasetService::list_datasets].
    fn list_datasets(
        &self,
        _req: crate::model::ListDatasetsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::ListDatasetsResponse>> + Send {
        unimplemented_stub("list_datasets")
    }

    /// Implements [super::client::DatasetService::delete_dataset].
    fn delete_dataset(
        &self,
        _req: crate::model::DeleteDatasetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<longrunning::model::Operation>> + Send {
        unimplemented_stub("delete_dataset")
    }

    /// Implements [super::client::DatasetService::import_data].
    fn import_data(
        &self,
        _req: crate::model::ImportDataRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<longrunning::model::Operation>> + Send {
        unimplemented_stub("import_data")
    }

    /// Implements [super::client::DatasetService::list_operations].
    fn list_operations(
        &self,
        _req: longrunning::model::ListOperationsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<longrunning::model::ListOperationsResponse>> + Send
    {
        unimplemented_stub("list_operations")
    }

    /// Implements [super::client::DatasetService::get_operation].
    fn get_operation(
        &self,
        _req: longrunning::model::GetOperationRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<longrunning::model::Operation>> + Send {
        unimplemented_stub("get_operation")
    }

    /// Implements [super::client::DatasetService::delete_operation].
    fn delete_operation(
        &self,
        _req: longrunning::model::DeleteOperationRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub("delete_operation")
    }

    /// Implements [super::client::DatasetService::cancel_operation].
    fn cancel_operation(
        &self,
        _req: longrunning::model::CancelOperationRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub("cancel_operation")
    }

    /// Implements [super::client::DatasetService::wait_operation].
    fn wait_operation(
        &self,
        _req: longrunning::model::WaitOperationRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<longrunning::model::Operation>> + Send {
        unimplemented_stub("wait_operation")
    }

    /// Returns the polling error policy.
    ///
    /// The default uses the policy in `options`, if any.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to verify
    /// it is called by your mocks.
    fn get_polling_error_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        options
            .polling_error_policy()
            .clone()
            .unwrap_or_else(|| Arc::new(gax::polling_error_policy::Aip194Strict))
    }

    /// Returns the polling backoff policy.
    ///
    /// The default uses the policy in `options`, if any.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to verify
    /// it is called by your mocks.
    fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        options
            .polling_backoff_policy()
            .clone()
            .unwrap_or_else(|| Arc::new(gax::exponential_backoff::ExponentialBackoff::default()))
    }

    /// Returns the client used to poll long-running operations.
    ///
    /// With the default `None` the operations are polled with
    /// [get_operation][Self::get_operation] and cancelled with
    /// [cancel_operation][Self::cancel_operation].
    #[doc(hidden)]
    fn operations_client(&self) -> Option<Arc<dyn lro::internal::OperationsClient>> {
        None
    }

    /// Releases any resources held by the stub.
    fn close(&self) {}
}

/// Defines the trait used to implement [super::client::VertexRagDataService].
///
/// Application developers may need to implement this trait to mock
/// `client::VertexRagDataService`. In other use-cases, application developers
/// only use `client::VertexRagDataService` and need not be concerned with this
/// trait or its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "vertex-rag-data-service")]
pub trait VertexRagDataService: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::VertexRagDataService::upload_rag_file].
    fn upload_rag_file(
        &self,
        _req: crate::model::UploadRagFileRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::UploadRagFileResponse>> + Send {
        unimplemented_stub("upload_rag_file")
    }

    /// Implements [super::client::VertexRagDataService::get_rag_file].
    fn get_rag_file(
        &self,
        _req: crate::model::GetRagFileRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::RagFile>> + Send {
        unimplemented_stub("get_rag_file")
    }

    /// Implements [super::client::VertexRagDataService::list_rag_files].
    fn list_rag_files(
        &self,
        _req: crate::model::ListRagFilesRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::ListRagFilesResponse>> + Send {
        unimplemented_stub("list_rag_files")
    }

    /// Releases any resources held by the stub.
    fn close(&self) {}
}
