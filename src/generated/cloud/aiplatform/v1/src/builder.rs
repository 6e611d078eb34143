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

//! Request builders for each RPC.
//!
//! Each client method returns a builder. Set the request fields with the
//! `set_*` methods, or replace the full request with `with_request()`,
//! configure the call with the [RequestOptionsBuilder] methods, and then
//! call `send()`.

pub use gax::options::RequestOptionsBuilder;

use crate::Result;
use gax::error::Error;

/// Tracks how a builder received its request.
///
/// Some fields have dedicated setters, known as flattened arguments. A call
/// can receive a full request, or flattened arguments, but not both.
#[derive(Clone, Debug, Default)]
struct Arguments {
    request: bool,
    fields: bool,
}

impl Arguments {
    fn check(&self) -> Result<()> {
        if self.request && self.fields {
            return Err(Error::invalid_argument(
                "cannot accept both request and individual field arguments",
            ));
        }
        Ok(())
    }
}

#[cfg(feature = "dataset-service")]
pub mod dataset_service {
    use super::Arguments;
    use crate::Result;
    use gax::options::RequestOptions;
    use gax::paginator::Pager;
    use std::sync::Arc;

    /// A builder for [DatasetService][crate::client::DatasetService].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use vertexai_aiplatform_v1::*;
    /// # use builder::dataset_service::ClientBuilder;
    /// # use client::DatasetService;
    /// let builder : ClientBuilder = DatasetService::builder();
    /// let client = builder
    ///     .with_endpoint("https://aiplatform.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::DatasetService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = DatasetService;
            type Credentials = gaxi::options::Credentials;
            type Transport = gaxi::transport::Transport;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
            async fn build_with_transport(
                self,
                config: gaxi::options::ClientConfig,
                transport: Self::Transport,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new_with_transport(config, transport).await
            }
        }
    }

    /// Common implementation for [crate::client::DatasetService] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::DatasetService>,
        request: R,
        options: RequestOptions,
        arguments: Arguments,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::DatasetService>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: RequestOptions::default(),
                arguments: Arguments::default(),
            }
        }
    }

    // Polls long-running operations through the stub, for stubs without a
    // dedicated operations client.
    #[derive(Debug)]
    struct StubOperations(Arc<dyn crate::stub::dynamic::DatasetService>);

    #[async_trait::async_trait]
    impl lro::internal::OperationsClient for StubOperations {
        async fn get_operation(
            &self,
            name: String,
            options: RequestOptions,
        ) -> Result<longrunning::model::Operation> {
            let req = longrunning::model::GetOperationRequest::default().set_name(name);
            self.0.get_operation(req, options).await
        }

        async fn cancel_operation(&self, name: String, options: RequestOptions) -> Result<()> {
            let req = longrunning::model::CancelOperationRequest::default().set_name(name);
            self.0.cancel_operation(req, options).await
        }
    }

    fn new_operation<R, M>(
        stub: &Arc<dyn crate::stub::dynamic::DatasetService>,
        initial: longrunning::model::Operation,
        options: RequestOptions,
    ) -> lro::Operation<R, M>
    where
        R: wkt::message::Message,
        M: wkt::message::Message,
    {
        let client = stub
            .operations_client()
            .unwrap_or_else(|| Arc::new(StubOperations(stub.clone())));
        let error_policy = stub.get_polling_error_policy(&options);
        let backoff_policy = stub.get_polling_backoff_policy(&options);
        lro::Operation::new(initial, client, options, error_policy, backoff_policy)
    }

    /// The request builder for [DatasetService::create_dataset][crate::client::DatasetService::create_dataset] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use vertexai_aiplatform_v1::builder;
    /// use builder::dataset_service::CreateDataset;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let mut operation = builder.send().await?;
    /// let dataset = operation.result(None).await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateDataset {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateDataset(RequestBuilder<crate::model::CreateDatasetRequest>);

    impl CreateDataset {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::DatasetService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateDatasetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.arguments.request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request and returns a handle to the long-running operation.
        ///
        /// Sets the `request_id` field to a new UUID4 if it is empty.
        pub async fn send(
            self,
        ) -> Result<lro::Operation<crate::model::Dataset, crate::model::CreateDatasetOperationMetadata>>
        {
            self.0.arguments.check()?;
            let req = Self::auto_populate(self.0.request);
            let initial = self
                .0
                .stub
                .create_dataset(req, self.0.options.clone())
                .await?;
            Ok(new_operation(&self.0.stub, initial, self.0.options))
        }

        fn auto_populate(
            mut req: crate::model::CreateDatasetRequest,
        ) -> crate::model::CreateDatasetRequest {
            if req.request_id.is_empty() {
                req = req.set_request_id(uuid::Uuid::new_v4().to_string());
            }
            req
        }

        /// Sets the value of [parent][crate::model::CreateDatasetRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self.0.arguments.fields = true;
            self
        }

        /// Sets the value of [dataset][crate::model::CreateDatasetRequest::dataset].
        ///
        /// This is a **required** field for requests.
        pub fn set_dataset<T: Into<crate::model::Dataset>>(mut self, v: T) -> Self {
            self.0.request.dataset = Some(v.into());
            self.0.arguments.fields = true;
            self
        }

        /// Sets the value of [request_id][crate::model::CreateDatasetRequest::request_id].
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.request_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateDataset {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DatasetService::get_dataset][crate::client::DatasetService::get_dataset] calls.
    #[derive(Clone, Debug)]
    pub struct GetDataset(RequestBuilder<crate::model::GetDatasetRequest>);

    impl GetDataset {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::DatasetService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetDatasetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.arguments.request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Dataset> {
            self.0.arguments.check()?;
            self.0.stub.get_dataset(self.0.request, self.0.options).await
        }

        /// Sets the value of [name][crate::model::GetDatasetRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.arguments.fields = true;
            self
        }

        /// Sets the value of [read_mask][crate::model::GetDatasetRequest::read_mask].
        pub fn set_read_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.read_mask = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDataset {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DatasetService::update_dataset][crate::client::DatasetService::update_dataset] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateDataset(RequestBuilder<crate::model::UpdateDatasetRequest>);

    impl UpdateDataset {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::DatasetService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateDatasetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.arguments.request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Dataset> {
            self.0.arguments.check()?;
            self.0
                .stub
                .update_dataset(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [dataset][crate::model::UpdateDatasetRequest::dataset].
        ///
        /// This is a **required** field for requests.
        pub fn set_dataset<T: Into<crate::model::Dataset>>(mut self, v: T) -> Self {
            self.0.request.dataset = Some(v.into());
            self.0.arguments.fields = true;
            self
        }

        /// Sets the value of [update_mask][crate::model::UpdateDatasetRequest::update_mask].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.update_mask = Some(v.into());
            self.0.arguments.fields = true;
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateDataset {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DatasetService::list_datasets][crate::client::DatasetService::list_datasets] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use vertexai_aiplatform_v1::builder;
    /// use builder::dataset_service::ListDatasets;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let mut items = builder.send().await?.by_item();
    /// while let Some(dataset) = items.next().await {
    ///   let dataset = dataset?;
    ///   println!("{}", dataset.name);
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListDatasets {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListDatasets(RequestBuilder<crate::model::ListDatasetsRequest>);

    impl ListDatasets {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::DatasetService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListDatasetsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.arguments.request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Fetches the first page and returns a pager over all the pages.
        ///
        /// The pager fetches the following pages on demand, using the same
        /// request options.
        pub async fn send(self) -> Result<Pager<crate::model::ListDatasetsResponse, gax::error::Error>> {
            self.0.arguments.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let first = stub.list_datasets(request.clone(), options.clone()).await?;
            Ok(Pager::new(first, move |token| {
                let stub = stub.clone();
                let request = request.clone().set_page_token(token);
                let options = options.clone();
                async move { stub.list_datasets(request, options).await }
            }))
        }

        /// Sets the value of [parent][crate::model::ListDatasetsRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self.0.arguments.fields = true;
            self
        }

        /// Sets the value of [filter][crate::model::ListDatasetsRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListDatasetsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListDatasetsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [read_mask][crate::model::ListDatasetsRequest::read_mask].
        pub fn set_read_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.read_mask = Some(v.into());
            self
        }

        /// Sets the value of [order_by][crate::model::ListDatasetsRequest::order_by].
        pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.order_by = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDatasets {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DatasetService::delete_dataset][crate::client::DatasetService::delete_dataset] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteDataset(RequestBuilder<crate::model::DeleteDatasetRequest>);

    impl DeleteDataset {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::DatasetService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteDatasetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.arguments.request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request and returns a handle to the long-running operation.
        pub async fn send(
            self,
        ) -> Result<lro::Operation<wkt::Empty, crate::model::DeleteOperationMetadata>> {
            self.0.arguments.check()?;
            let initial = self
                .0
                .stub
                .delete_dataset(self.0.request, self.0.options.clone())
                .await?;
            Ok(new_operation(&self.0.stub, initial, self.0.options))
        }

        /// Sets the value of [name][crate::model::DeleteDatasetRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.arguments.fields = true;
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteDataset {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DatasetService::import_data][crate::client::DatasetService::import_data] calls.
    #[derive(Clone, Debug)]
    pub struct ImportData(RequestBuilder<crate::model::ImportDataRequest>);

    impl ImportData {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::DatasetService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ImportDataRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.arguments.request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request and returns a handle to the long-running operation.
        pub async fn send(
            self,
        ) -> Result<
            lro::Operation<crate::model::ImportDataResponse, crate::model::ImportDataOperationMetadata>,
        > {
            self.0.arguments.check()?;
            let initial = self
                .0
                .stub
                .import_data(self.0.request, self.0.options.clone())
                .await?;
            Ok(new_operation(&self.0.stub, initial, self.0.options))
        }

        /// Sets the value of [name][crate::model::ImportDataRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.arguments.fields = true;
            self
        }

        /// Sets the value of [import_configs][crate::model::ImportDataRequest::import_configs].
        ///
        /// This is a **required** field for requests.
        pub fn set_import_configs<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::ImportDataConfig>,
        {
            self.0.request.import_configs = v.into_iter().map(|i| i.into()).collect();
            self.0.arguments.fields = true;
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ImportData {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DatasetService::list_operations][crate::client::DatasetService::list_operations] calls.
    #[derive(Clone, Debug)]
    pub struct ListOperations(RequestBuilder<longrunning::model::ListOperationsRequest>);

    impl ListOperations {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::DatasetService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<longrunning::model::ListOperationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self.0.arguments.request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Fetches the first page and returns a pager over all the pages.
        pub async fn send(
            self,
        ) -> Result<Pager<longrunning::model::ListOperationsResponse, gax::error::Error>> {
            self.0.arguments.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let first = stub
                .list_operations(request.clone(), options.clone())
                .await?;
            Ok(Pager::new(first, move |token| {
                let stub = stub.clone();
                let request = request.clone().set_page_token(token);
                let options = options.clone();
                async move { stub.list_operations(request, options).await }
            }))
        }

        /// Sets the value of [name][longrunning::model::ListOperationsRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.arguments.fields = true;
            self
        }

        /// Sets the value of [filter][longrunning::model::ListOperationsRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [page_size][longrunning::model::ListOperationsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][longrunning::model::ListOperationsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListOperations {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DatasetService::get_operation][crate::client::DatasetService::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<longrunning::model::GetOperationRequest>);

    impl GetOperation {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::DatasetService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<longrunning::model::GetOperationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self.0.arguments.request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.0.arguments.check()?;
            self.0
                .stub
                .get_operation(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][longrunning::model::GetOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.arguments.fields = true;
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetOperation {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DatasetService::delete_operation][crate::client::DatasetService::delete_operation] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteOperation(RequestBuilder<longrunning::model::DeleteOperationRequest>);

    impl DeleteOperation {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::DatasetService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<longrunning::model::DeleteOperationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self.0.arguments.request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.0.arguments.check()?;
            self.0
                .stub
                .delete_operation(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][longrunning::model::DeleteOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.arguments.fields = true;
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteOperation {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DatasetService::cancel_operation][crate::client::DatasetService::cancel_operation] calls.
    #[derive(Clone, Debug)]
    pub struct CancelOperation(RequestBuilder<longrunning::model::CancelOperationRequest>);

    impl CancelOperation {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::DatasetService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<longrunning::model::CancelOperationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self.0.arguments.request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.0.arguments.check()?;
            self.0
                .stub
                .cancel_operation(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][longrunning::model::CancelOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.arguments.fields = true;
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CancelOperation {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DatasetService::wait_operation][crate::client::DatasetService::wait_operation] calls.
    #[derive(Clone, Debug)]
    pub struct WaitOperation(RequestBuilder<longrunning::model::WaitOperationRequest>);

    impl WaitOperation {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::DatasetService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<longrunning::model::WaitOperationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self.0.arguments.request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.0.arguments.check()?;
            self.0
                .stub
                .wait_operation(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][longrunning::model::WaitOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.arguments.fields = true;
            self
        }

        /// Sets the value of [timeout][longrunning::model::WaitOperationRequest::timeout].
        pub fn set_timeout<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
            self.0.request.timeout = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for WaitOperation {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}

#[cfg(feature = "vertex-rag-data-service")]
pub mod vertex_rag_data_service {
    use super::Arguments;
    use crate::Result;
    use gax::options::RequestOptions;
    use gax::paginator::Pager;
    use std::sync::Arc;

    /// A builder for [VertexRagDataService][crate::client::VertexRagDataService].
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::VertexRagDataService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = VertexRagDataService;
            type Credentials = gaxi::options::Credentials;
            type Transport = gaxi::transport::Transport;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
            async fn build_with_transport(
                self,
                config: gaxi::options::ClientConfig,
                transport: Self::Transport,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new_with_transport(config, transport).await
            }
        }
    }

    /// Common implementation for [crate::client::VertexRagDataService] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::VertexRagDataService>,
        request: R,
        options: RequestOptions,
        arguments: Arguments,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::VertexRagDataService>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: RequestOptions::default(),
                arguments: Arguments::default(),
            }
        }
    }

    /// The request builder for [VertexRagDataService::upload_rag_file][crate::client::VertexRagDataService::upload_rag_file] calls.
    #[derive(Clone, Debug)]
    pub struct UploadRagFile(RequestBuilder<crate::model::UploadRagFileRequest>);

    impl UploadRagFile {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::VertexRagDataService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UploadRagFileRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.arguments.request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// The upload completes in a single call, the response reports the
        /// uploaded file or the reason it was rejected.
        pub async fn send(self) -> Result<crate::model::UploadRagFileResponse> {
            self.0.arguments.check()?;
            self.0
                .stub
                .upload_rag_file(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [parent][crate::model::UploadRagFileRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self.0.arguments.fields = true;
            self
        }

        /// Sets the value of [rag_file][crate::model::UploadRagFileRequest::rag_file].
        ///
        /// This is a **required** field for requests.
        pub fn set_rag_file<T: Into<crate::model::RagFile>>(mut self, v: T) -> Self {
            self.0.request.rag_file = Some(v.into());
            self.0.arguments.fields = true;
            self
        }

        /// Sets the value of [upload_rag_file_config][crate::model::UploadRagFileRequest::upload_rag_file_config].
        ///
        /// This is a **required** field for requests.
        pub fn set_upload_rag_file_config<T: Into<crate::model::UploadRagFileConfig>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.upload_rag_file_config = Some(v.into());
            self.0.arguments.fields = true;
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UploadRagFile {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [VertexRagDataService::get_rag_file][crate::client::VertexRagDataService::get_rag_file] calls.
    #[derive(Clone, Debug)]
    pub struct GetRagFile(RequestBuilder<crate::model::GetRagFileRequest>);

    impl GetRagFile {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::VertexRagDataService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetRagFileRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.arguments.request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RagFile> {
            self.0.arguments.check()?;
            self.0
                .stub
                .get_rag_file(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::GetRagFileRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.arguments.fields = true;
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetRagFile {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [VertexRagDataService::list_rag_files][crate::client::VertexRagDataService::list_rag_files] calls.
    #[derive(Clone, Debug)]
    pub struct ListRagFiles(RequestBuilder<crate::model::ListRagFilesRequest>);

    impl ListRagFiles {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::VertexRagDataService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListRagFilesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.arguments.request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Fetches the first page and returns a pager over all the pages.
        pub async fn send(
            self,
        ) -> Result<Pager<crate::model::ListRagFilesResponse, gax::error::Error>> {
            self.0.arguments.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let first = stub.list_rag_files(request.clone(), options.clone()).await?;
            Ok(Pager::new(first, move |token| {
                let stub = stub.clone();
                let request = request.clone().set_page_token(token);
                let options = options.clone();
                async move { stub.list_rag_files(request, options).await }
            }))
        }

        /// Sets the value of [parent][crate::model::ListRagFilesRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self.0.arguments.fields = true;
            self
        }

        /// Sets the value of [page_size][crate::model::ListRagFilesRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListRagFilesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListRagFiles {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}
