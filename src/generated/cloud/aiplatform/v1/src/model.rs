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

//! The messages used by the Vertex AI services in this crate.
//!
//! All messages carry both a protobuf binary encoding, used by the gRPC
//! transport, and a JSON encoding, used by the HTTP transport.

use std::collections::HashMap;

/// A collection of DataItems and Annotations on them.
#[serde_with::serde_as]
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dataset {
    /// Identifier. The resource name of the Dataset.
    /// Format:
    /// `projects/{project}/locations/{location}/datasets/{dataset}`
    #[prost(string, tag = "1")]
    pub name: String,

    /// Required. The user-defined name of the Dataset.
    #[prost(string, tag = "2")]
    pub display_name: String,

    /// The description of the Dataset.
    #[prost(string, tag = "16")]
    pub description: String,

    /// Required. Points to a YAML file stored on Google Cloud Storage
    /// describing additional information about the Dataset.
    #[prost(string, tag = "3")]
    pub metadata_schema_uri: String,

    /// Output only. The number of DataItems in this Dataset.
    #[prost(int64, tag = "10")]
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub data_item_count: i64,

    /// Output only. Timestamp when this Dataset was created.
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<wkt::Timestamp>,

    /// Output only. Timestamp when this Dataset was last updated.
    #[prost(message, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<wkt::Timestamp>,

    /// Used to perform consistent read-modify-write updates.
    #[prost(string, tag = "6")]
    pub etag: String,

    /// The labels with user-defined metadata to organize your Datasets.
    #[prost(map = "string, string", tag = "7")]
    pub labels: HashMap<String, String>,
}

impl Dataset {
    /// Sets the value of [name][Dataset::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][Dataset::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [description][Dataset::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [metadata_schema_uri][Dataset::metadata_schema_uri].
    pub fn set_metadata_schema_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.metadata_schema_uri = v.into();
        self
    }

    /// Sets the value of [data_item_count][Dataset::data_item_count].
    pub fn set_data_item_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.data_item_count = v.into();
        self
    }

    /// Sets the value of [create_time][Dataset::create_time].
    pub fn set_create_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [update_time][Dataset::update_time].
    pub fn set_update_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets the value of [etag][Dataset::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = v.into();
        self
    }

    /// Sets the value of [labels][Dataset::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl wkt::message::Message for Dataset {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.Dataset"
    }
}

/// Describes the location from where we import data into a Dataset.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportDataConfig {
    /// The Google Cloud Storage location for the input content.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs_source: Option<GcsSource>,

    /// Labels that will be applied to newly imported DataItems.
    #[prost(map = "string, string", tag = "2")]
    pub data_item_labels: HashMap<String, String>,

    /// Required. Points to a YAML file stored on Google Cloud Storage
    /// describing the import format.
    #[prost(string, tag = "4")]
    pub import_schema_uri: String,
}

impl ImportDataConfig {
    /// Sets the value of [gcs_source][ImportDataConfig::gcs_source].
    pub fn set_gcs_source<T: Into<GcsSource>>(mut self, v: T) -> Self {
        self.gcs_source = Some(v.into());
        self
    }

    /// Sets the value of [data_item_labels][ImportDataConfig::data_item_labels].
    pub fn set_data_item_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.data_item_labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [import_schema_uri][ImportDataConfig::import_schema_uri].
    pub fn set_import_schema_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.import_schema_uri = v.into();
        self
    }
}

impl wkt::message::Message for ImportDataConfig {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.ImportDataConfig"
    }
}

/// The Google Cloud Storage location for the input content.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GcsSource {
    /// Required. Google Cloud Storage URI(-s) to the input file(s).
    #[prost(string, repeated, tag = "1")]
    pub uris: Vec<String>,
}

impl GcsSource {
    /// Sets the value of [uris][GcsSource::uris].
    pub fn set_uris<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.uris = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for GcsSource {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.GcsSource"
    }
}

/// Generic metadata for long-running operations.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenericOperationMetadata {
    /// Output only. Partial failures encountered.
    #[prost(message, repeated, tag = "1")]
    pub partial_failures: Vec<rpc::model::Status>,

    /// Output only. Time when the operation was created.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<wkt::Timestamp>,

    /// Output only. Time when the operation was updated for the last time.
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<wkt::Timestamp>,
}

impl GenericOperationMetadata {
    /// Sets the value of [partial_failures][GenericOperationMetadata::partial_failures].
    pub fn set_partial_failures<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<rpc::model::Status>,
    {
        self.partial_failures = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [create_time][GenericOperationMetadata::create_time].
    pub fn set_create_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [update_time][GenericOperationMetadata::update_time].
    pub fn set_update_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }
}

impl wkt::message::Message for GenericOperationMetadata {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.GenericOperationMetadata"
    }
}

/// Details of operations that perform deletes of any entities.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteOperationMetadata {
    /// The common part of the operation metadata.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic_metadata: Option<GenericOperationMetadata>,
}

impl DeleteOperationMetadata {
    /// Sets the value of [generic_metadata][DeleteOperationMetadata::generic_metadata].
    pub fn set_generic_metadata<T: Into<GenericOperationMetadata>>(mut self, v: T) -> Self {
        self.generic_metadata = Some(v.into());
        self
    }
}

impl wkt::message::Message for DeleteOperationMetadata {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.DeleteOperationMetadata"
    }
}

/// Request message for [DatasetService.CreateDataset][crate::client::DatasetService::create_dataset].
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateDatasetRequest {
    /// Required. The resource name of the Location to create the Dataset in.
    /// Format: `projects/{project}/locations/{location}`
    #[prost(string, tag = "1")]
    pub parent: String,

    /// Required. The Dataset to create.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<Dataset>,

    /// A unique identifier for this request, a UUID4.
    ///
    /// The client library sets this field when it is empty. The service uses
    /// it to ignore retried requests.
    #[prost(string, tag = "3")]
    pub request_id: String,
}

impl CreateDatasetRequest {
    /// Sets the value of [parent][CreateDatasetRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [dataset][CreateDatasetRequest::dataset].
    pub fn set_dataset<T: Into<Dataset>>(mut self, v: T) -> Self {
        self.dataset = Some(v.into());
        self
    }

    /// Sets the value of [request_id][CreateDatasetRequest::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = v.into();
        self
    }
}

impl wkt::message::Message for CreateDatasetRequest {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.CreateDatasetRequest"
    }
}

/// Runtime operation information for
/// [DatasetService.CreateDataset][crate::client::DatasetService::create_dataset].
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateDatasetOperationMetadata {
    /// The operation generic information.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic_metadata: Option<GenericOperationMetadata>,
}

impl CreateDatasetOperationMetadata {
    /// Sets the value of [generic_metadata][CreateDatasetOperationMetadata::generic_metadata].
    pub fn set_generic_metadata<T: Into<GenericOperationMetadata>>(mut self, v: T) -> Self {
        self.generic_metadata = Some(v.into());
        self
    }
}

impl wkt::message::Message for CreateDatasetOperationMetadata {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.CreateDatasetOperationMetadata"
    }
}

/// Request message for [DatasetService.GetDataset][crate::client::DatasetService::get_dataset].
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetDatasetRequest {
    /// Required. The name of the Dataset resource.
    #[prost(string, tag = "1")]
    pub name: String,

    /// Mask specifying which fields to read.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_mask: Option<wkt::FieldMask>,
}

impl GetDatasetRequest {
    /// Sets the value of [name][GetDatasetRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [read_mask][GetDatasetRequest::read_mask].
    pub fn set_read_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.read_mask = Some(v.into());
        self
    }
}

impl wkt::message::Message for GetDatasetRequest {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.GetDatasetRequest"
    }
}

/// Request message for [DatasetService.UpdateDataset][crate::client::DatasetService::update_dataset].
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateDatasetRequest {
    /// Required. The Dataset which replaces the resource on the server.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<Dataset>,

    /// Required. The update mask applies to the resource.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<wkt::FieldMask>,
}

impl UpdateDatasetRequest {
    /// Sets the value of [dataset][UpdateDatasetRequest::dataset].
    pub fn set_dataset<T: Into<Dataset>>(mut self, v: T) -> Self {
        self.dataset = Some(v.into());
        self
    }

    /// Sets the value of [update_mask][UpdateDatasetRequest::update_mask].
    pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }
}

impl wkt::message::Message for UpdateDatasetRequest {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.UpdateDatasetRequest"
    }
}

/// Request message for [DatasetService.ListDatasets][crate::client::DatasetService::list_datasets].
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDatasetsRequest {
    /// Required. The name of the Dataset's parent resource.
    /// Format: `projects/{project}/locations/{location}`
    #[prost(string, tag = "1")]
    pub parent: String,

    /// An expression for filtering the results of the request.
    #[prost(string, tag = "2")]
    pub filter: String,

    /// The standard list page size.
    #[prost(int32, tag = "3")]
    pub page_size: i32,

    /// The standard list page token.
    #[prost(string, tag = "4")]
    pub page_token: String,

    /// Mask specifying which fields to read.
    #[prost(message, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_mask: Option<wkt::FieldMask>,

    /// A comma-separated list of fields to order by, sorted in ascending
    /// order. Use "desc" after a field name for descending.
    #[prost(string, tag = "6")]
    pub order_by: String,
}

impl ListDatasetsRequest {
    /// Sets the value of [parent][ListDatasetsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][ListDatasetsRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][ListDatasetsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListDatasetsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [read_mask][ListDatasetsRequest::read_mask].
    pub fn set_read_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.read_mask = Some(v.into());
        self
    }

    /// Sets the value of [order_by][ListDatasetsRequest::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }
}

impl wkt::message::Message for ListDatasetsRequest {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.ListDatasetsRequest"
    }
}

/// Response message for [DatasetService.ListDatasets][crate::client::DatasetService::list_datasets].
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDatasetsResponse {
    /// A list of Datasets that matches the specified filter in the request.
    #[prost(message, repeated, tag = "1")]
    pub datasets: Vec<Dataset>,

    /// The standard List next-page token.
    #[prost(string, tag = "2")]
    pub next_page_token: String,
}

impl ListDatasetsResponse {
    /// Sets the value of [datasets][ListDatasetsResponse::datasets].
    pub fn set_datasets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Dataset>,
    {
        self.datasets = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListDatasetsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListDatasetsResponse {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.ListDatasetsResponse"
    }
}

impl gax::paginator::PageableResponse for ListDatasetsResponse {
    type PageItem = Dataset;

    fn items(self) -> Vec<Self::PageItem> {
        self.datasets
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Request message for [DatasetService.DeleteDataset][crate::client::DatasetService::delete_dataset].
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteDatasetRequest {
    /// Required. The resource name of the Dataset to delete.
    #[prost(string, tag = "1")]
    pub name: String,
}

impl DeleteDatasetRequest {
    /// Sets the value of [name][DeleteDatasetRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteDatasetRequest {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.DeleteDatasetRequest"
    }
}

/// Request message for [DatasetService.ImportData][crate::client::DatasetService::import_data].
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportDataRequest {
    /// Required. The name of the Dataset resource.
    #[prost(string, tag = "1")]
    pub name: String,

    /// Required. The desired input locations. The contents of all input
    /// locations will be imported in one batch.
    #[prost(message, repeated, tag = "2")]
    pub import_configs: Vec<ImportDataConfig>,
}

impl ImportDataRequest {
    /// Sets the value of [name][ImportDataRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [import_configs][ImportDataRequest::import_configs].
    pub fn set_import_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ImportDataConfig>,
    {
        self.import_configs = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for ImportDataRequest {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.ImportDataRequest"
    }
}

/// Response message for [DatasetService.ImportData][crate::client::DatasetService::import_data].
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportDataResponse {}

impl wkt::message::Message for ImportDataResponse {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.ImportDataResponse"
    }
}

/// Runtime operation information for
/// [DatasetService.ImportData][crate::client::DatasetService::import_data].
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportDataOperationMetadata {
    /// The common part of the operation metadata.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic_metadata: Option<GenericOperationMetadata>,
}

impl ImportDataOperationMetadata {
    /// Sets the value of [generic_metadata][ImportDataOperationMetadata::generic_metadata].
    pub fn set_generic_metadata<T: Into<GenericOperationMetadata>>(mut self, v: T) -> Self {
        self.generic_metadata = Some(v.into());
        self
    }
}

impl wkt::message::Message for ImportDataOperationMetadata {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.ImportDataOperationMetadata"
    }
}

/// A RagFile contains user data for chunking, embedding and indexing.
#[serde_with::serde_as]
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RagFile {
    /// Output only. The resource name of the RagFile.
    #[prost(string, tag = "1")]
    pub name: String,

    /// Required. The display name of the RagFile.
    #[prost(string, tag = "2")]
    pub display_name: String,

    /// Optional. The description of the RagFile.
    #[prost(string, tag = "3")]
    pub description: String,

    /// Output only. The size of the RagFile in bytes.
    #[prost(int64, tag = "4")]
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub size_bytes: i64,

    /// Output only. Timestamp when this RagFile was created.
    #[prost(message, optional, tag = "6")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<wkt::Timestamp>,

    /// Output only. Timestamp when this RagFile was last updated.
    #[prost(message, optional, tag = "7")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<wkt::Timestamp>,
}

impl RagFile {
    /// Sets the value of [name][RagFile::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][RagFile::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [description][RagFile::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [size_bytes][RagFile::size_bytes].
    pub fn set_size_bytes<T: Into<i64>>(mut self, v: T) -> Self {
        self.size_bytes = v.into();
        self
    }
}

impl wkt::message::Message for RagFile {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.RagFile"
    }
}

/// Specifies the size and overlap of chunks for RagFiles.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RagFileChunkingConfig {
    /// The size of the chunks.
    #[prost(int32, tag = "1")]
    pub chunk_size: i32,

    /// The overlap between chunks.
    #[prost(int32, tag = "2")]
    pub chunk_overlap: i32,
}

impl RagFileChunkingConfig {
    /// Sets the value of [chunk_size][RagFileChunkingConfig::chunk_size].
    pub fn set_chunk_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.chunk_size = v.into();
        self
    }

    /// Sets the value of [chunk_overlap][RagFileChunkingConfig::chunk_overlap].
    pub fn set_chunk_overlap<T: Into<i32>>(mut self, v: T) -> Self {
        self.chunk_overlap = v.into();
        self
    }
}

impl wkt::message::Message for RagFileChunkingConfig {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.RagFileChunkingConfig"
    }
}

/// Config for uploading RagFile.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UploadRagFileConfig {
    /// Specifies the chunking config for the RagFile.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rag_file_chunking_config: Option<RagFileChunkingConfig>,
}

impl UploadRagFileConfig {
    /// Sets the value of [rag_file_chunking_config][UploadRagFileConfig::rag_file_chunking_config].
    pub fn set_rag_file_chunking_config<T: Into<RagFileChunkingConfig>>(mut self, v: T) -> Self {
        self.rag_file_chunking_config = Some(v.into());
        self
    }
}

impl wkt::message::Message for UploadRagFileConfig {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.UploadRagFileConfig"
    }
}

/// Request message for [VertexRagDataService.UploadRagFile][crate::client::VertexRagDataService::upload_rag_file].
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UploadRagFileRequest {
    /// Required. The name of the RagCorpus resource into which to upload the
    /// file. Format:
    /// `projects/{project}/locations/{location}/ragCorpora/{rag_corpus}`
    #[prost(string, tag = "1")]
    pub parent: String,

    /// Required. The RagFile to upload.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rag_file: Option<RagFile>,

    /// Required. The config for the RagFiles to be uploaded into the RagCorpus.
    #[prost(message, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_rag_file_config: Option<UploadRagFileConfig>,
}

impl UploadRagFileRequest {
    /// Sets the value of [parent][UploadRagFileRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [rag_file][UploadRagFileRequest::rag_file].
    pub fn set_rag_file<T: Into<RagFile>>(mut self, v: T) -> Self {
        self.rag_file = Some(v.into());
        self
    }

    /// Sets the value of [upload_rag_file_config][UploadRagFileRequest::upload_rag_file_config].
    pub fn set_upload_rag_file_config<T: Into<UploadRagFileConfig>>(mut self, v: T) -> Self {
        self.upload_rag_file_config = Some(v.into());
        self
    }
}

impl wkt::message::Message for UploadRagFileRequest {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.UploadRagFileRequest"
    }
}

/// Response message for [VertexRagDataService.UploadRagFile][crate::client::VertexRagDataService::upload_rag_file].
///
/// Only one of `rag_file` and `error` is set.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UploadRagFileResponse {
    /// The RagFile that had been uploaded into the RagCorpus.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rag_file: Option<RagFile>,

    /// The error that occurred while processing the RagFile.
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<rpc::model::Status>,
}

impl UploadRagFileResponse {
    /// Sets the value of [rag_file][UploadRagFileResponse::rag_file], clearing
    /// any error.
    pub fn set_rag_file<T: Into<RagFile>>(mut self, v: T) -> Self {
        self.rag_file = Some(v.into());
        self.error = None;
        self
    }

    /// Sets the value of [error][UploadRagFileResponse::error], clearing any
    /// RagFile.
    pub fn set_error<T: Into<rpc::model::Status>>(mut self, v: T) -> Self {
        self.error = Some(v.into());
        self.rag_file = None;
        self
    }
}

impl wkt::message::Message for UploadRagFileResponse {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.UploadRagFileResponse"
    }
}

/// Request message for [VertexRagDataService.GetRagFile][crate::client::VertexRagDataService::get_rag_file].
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetRagFileRequest {
    /// Required. The name of the RagFile resource.
    #[prost(string, tag = "1")]
    pub name: String,
}

impl GetRagFileRequest {
    /// Sets the value of [name][GetRagFileRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetRagFileRequest {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.GetRagFileRequest"
    }
}

/// Request message for [VertexRagDataService.ListRagFiles][crate::client::VertexRagDataService::list_rag_files].
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListRagFilesRequest {
    /// Required. The resource name of the RagCorpus from which to list the
    /// RagFiles.
    #[prost(string, tag = "1")]
    pub parent: String,

    /// Optional. The standard list page size.
    #[prost(int32, tag = "2")]
    pub page_size: i32,

    /// Optional. The standard list page token.
    #[prost(string, tag = "3")]
    pub page_token: String,
}

impl ListRagFilesRequest {
    /// Sets the value of [parent][ListRagFilesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][ListRagFilesRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListRagFilesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListRagFilesRequest {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.ListRagFilesRequest"
    }
}

/// Response message for [VertexRagDataService.ListRagFiles][crate::client::VertexRagDataService::list_rag_files].
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListRagFilesResponse {
    /// List of RagFiles in the requested page.
    #[prost(message, repeated, tag = "1")]
    pub rag_files: Vec<RagFile>,

    /// A token to retrieve the next page of results.
    #[prost(string, tag = "2")]
    pub next_page_token: String,
}

impl ListRagFilesResponse {
    /// Sets the value of [rag_files][ListRagFilesResponse::rag_files].
    pub fn set_rag_files<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<RagFile>,
    {
        self.rag_files = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListRagFilesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListRagFilesResponse {
    fn typename() -> &'static str {
        "google.cloud.aiplatform.v1.ListRagFilesResponse"
    }
}

impl gax::paginator::PageableResponse for ListRagFilesResponse {
    type PageItem = RagFile;

    fn items(self) -> Vec<Self::PageItem> {
        self.rag_files
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use prost::Message as _;
    use serde_json::json;

    fn dataset() -> Dataset {
        Dataset::default()
            .set_name("projects/p/locations/l/datasets/d")
            .set_display_name("my dataset")
            .set_data_item_count(42)
            .set_labels([("env", "test")])
    }

    #[test]
    fn dataset_json() -> anyhow::Result<()> {
        let got = serde_json::to_value(dataset())?;
        assert_eq!(
            got,
            json!({
                "name": "projects/p/locations/l/datasets/d",
                "displayName": "my dataset",
                "description": "",
                "metadataSchemaUri": "",
                "dataItemCount": "42",
                "etag": "",
                "labels": {"env": "test"},
            })
        );
        let roundtrip = serde_json::from_value::<Dataset>(got)?;
        assert_eq!(roundtrip, dataset());
        Ok(())
    }

    #[test]
    fn dataset_binary() -> anyhow::Result<()> {
        let input = dataset().set_create_time(wkt::Timestamp::new(1_700_000_000, 0)?);
        let bytes = input.encode_to_vec();
        let decoded = Dataset::decode(bytes.as_slice())?;
        assert_eq!(decoded, input);
        assert_eq!(decoded.encode_to_vec(), bytes);
        Ok(())
    }

    #[test]
    fn missing_fields_use_defaults() -> anyhow::Result<()> {
        let got = serde_json::from_value::<ListDatasetsResponse>(json!({}))?;
        assert_eq!(got, ListDatasetsResponse::default());
        let got = serde_json::from_value::<ImportDataResponse>(json!({"unknown": 1}))?;
        assert_eq!(got, ImportDataResponse::default());
        Ok(())
    }

    #[test]
    fn pageable() {
        use gax::paginator::PageableResponse;
        let page = ListDatasetsResponse::default()
            .set_datasets([dataset(), dataset()])
            .set_next_page_token("abc");
        assert_eq!(PageableResponse::next_page_token(&page), "abc");
        assert_eq!(page.items().len(), 2);
    }

    // Checks both the JSON and the protobuf encodings preserve the value.
    fn roundtrip<T>(input: &T) -> anyhow::Result<serde_json::Value>
    where
        T: prost::Message
            + Default
            + serde::Serialize
            + serde::de::DeserializeOwned
            + PartialEq
            + std::fmt::Debug,
    {
        let json = serde_json::to_value(input)?;
        let got = serde_json::from_value::<T>(json.clone())?;
        assert_eq!(&got, input);
        let got = T::decode(input.encode_to_vec().as_slice())?;
        assert_eq!(&got, input);
        Ok(json)
    }

    fn rag_file(name: &str) -> RagFile {
        RagFile::default()
            .set_name(format!("projects/p/locations/l/ragCorpora/c/ragFiles/{name}"))
            .set_display_name(name)
            .set_size_bytes(1024)
    }

    #[test]
    fn list_datasets_response() -> anyhow::Result<()> {
        let input = ListDatasetsResponse::default()
            .set_datasets([
                dataset(),
                dataset().set_name("projects/p/locations/l/datasets/e"),
            ])
            .set_next_page_token("next");
        let json = roundtrip(&input)?;
        assert_eq!(json["nextPageToken"], json!("next"));
        assert_eq!(
            json["datasets"][1]["name"],
            json!("projects/p/locations/l/datasets/e")
        );
        Ok(())
    }

    #[test]
    fn list_rag_files_response() -> anyhow::Result<()> {
        let input = ListRagFilesResponse::default()
            .set_rag_files([rag_file("a"), rag_file("b")])
            .set_next_page_token("next");
        let json = roundtrip(&input)?;
        assert_eq!(json["ragFiles"][0]["sizeBytes"], json!("1024"));
        assert_eq!(json["nextPageToken"], json!("next"));
        Ok(())
    }

    #[test]
    fn import_data_response() -> anyhow::Result<()> {
        let json = roundtrip(&ImportDataResponse::default())?;
        assert_eq!(json, json!({}));
        Ok(())
    }

    #[test]
    fn upload_rag_file_response() -> anyhow::Result<()> {
        let uploaded = UploadRagFileResponse::default().set_rag_file(rag_file("a"));
        let json = roundtrip(&uploaded)?;
        assert_eq!(json["ragFile"]["displayName"], json!("a"));
        assert!(json.get("error").is_none(), "{json}");

        let failed = UploadRagFileResponse::default()
            .set_error(rpc::model::Status::default().set_code(3).set_message("bad file"));
        let json = roundtrip(&failed)?;
        assert_eq!(json["error"]["message"], json!("bad file"));
        assert!(json.get("ragFile").is_none(), "{json}");
        Ok(())
    }

    #[test]
    fn upload_response_oneof() {
        let response = UploadRagFileResponse::default()
            .set_error(rpc::model::Status::default().set_message("bad file"))
            .set_rag_file(RagFile::default().set_name("f"));
        assert!(response.error.is_none(), "{response:?}");
        assert_eq!(response.rag_file.map(|f| f.name).as_deref(), Some("f"));
    }
}
