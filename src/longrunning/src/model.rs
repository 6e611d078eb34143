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

/// This resource represents a long-running operation that is the result of a
/// network API call.
///
/// # JSON
///
/// The `result` oneof is flattened in the JSON representation: a completed
/// operation has either an `error` or a `response` field, never both.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(from = "OperationJson", into = "OperationJson")]
pub struct Operation {
    /// The server-assigned name, which is only unique within the same service
    /// that originally returns it.
    #[prost(string, tag = "1")]
    pub name: String,

    /// Service-specific metadata associated with the operation. It typically
    /// contains progress information and common metadata such as create time.
    #[prost(message, optional, tag = "2")]
    pub metadata: Option<wkt::Any>,

    /// If the value is `false`, it means the operation is still in progress.
    /// If `true`, the operation is completed, and either `error` or `response`
    /// is available.
    #[prost(bool, tag = "3")]
    pub done: bool,

    /// The operation result, which can be either an `error` or a valid
    /// `response`.
    #[prost(oneof = "operation::Result", tags = "4, 5")]
    pub result: Option<operation::Result>,
}

impl Operation {
    /// Sets the value of [name][Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [metadata][Operation::metadata].
    pub fn set_metadata<T: Into<wkt::Any>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets or clears the value of [metadata][Operation::metadata].
    pub fn set_or_clear_metadata<T: Into<wkt::Any>>(mut self, v: Option<T>) -> Self {
        self.metadata = v.map(|x| x.into());
        self
    }

    /// Sets the value of [done][Operation::done].
    pub fn set_done(mut self, v: bool) -> Self {
        self.done = v;
        self
    }

    /// Sets the value of [result][Operation::result] to hold an `error`.
    pub fn set_error<T: Into<rpc::model::Status>>(mut self, v: T) -> Self {
        self.result = Some(operation::Result::Error(v.into()));
        self
    }

    /// Sets the value of [result][Operation::result] to hold a `response`.
    pub fn set_response<T: Into<wkt::Any>>(mut self, v: T) -> Self {
        self.result = Some(operation::Result::Response(v.into()));
        self
    }

    /// The value of [result][Operation::result] if it holds an `error`.
    pub fn error(&self) -> Option<&rpc::model::Status> {
        match &self.result {
            Some(operation::Result::Error(e)) => Some(e),
            _ => None,
        }
    }

    /// The value of [result][Operation::result] if it holds a `response`.
    pub fn response(&self) -> Option<&wkt::Any> {
        match &self.result {
            Some(operation::Result::Response(r)) => Some(r),
            _ => None,
        }
    }
}

impl wkt::message::Message for Operation {
    fn typename() -> &'static str {
        "google.longrunning.Operation"
    }
}

/// Defines additional types related to [Operation].
pub mod operation {
    /// The operation result.
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Result {
        /// The error result of the operation in case of failure or
        /// cancellation.
        #[prost(message, tag = "4")]
        Error(rpc::model::Status),
        /// The normal, successful response of the operation.
        #[prost(message, tag = "5")]
        Response(wkt::Any),
    }
}

#[derive(Default, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct OperationJson {
    #[serde(skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<wkt::Any>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<rpc::model::Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<wkt::Any>,
}

impl From<OperationJson> for Operation {
    fn from(value: OperationJson) -> Self {
        let result = match (value.error, value.response) {
            (Some(e), _) => Some(operation::Result::Error(e)),
            (None, Some(r)) => Some(operation::Result::Response(r)),
            (None, None) => None,
        };
        Self {
            name: value.name,
            metadata: value.metadata,
            done: value.done,
            result,
        }
    }
}

impl From<Operation> for OperationJson {
    fn from(value: Operation) -> Self {
        let (error, response) = match value.result {
            Some(operation::Result::Error(e)) => (Some(e), None),
            Some(operation::Result::Response(r)) => (None, Some(r)),
            None => (None, None),
        };
        Self {
            name: value.name,
            metadata: value.metadata,
            done: value.done,
            error,
            response,
        }
    }
}

/// The request message for Operations.GetOperation.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetOperationRequest {
    /// The name of the operation resource.
    #[prost(string, tag = "1")]
    pub name: String,
}

impl GetOperationRequest {
    /// Sets the value of [name][GetOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetOperationRequest {
    fn typename() -> &'static str {
        "google.longrunning.GetOperationRequest"
    }
}

/// The request message for Operations.ListOperations.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListOperationsRequest {
    /// The name of the operation's parent resource.
    #[prost(string, tag = "4")]
    pub name: String,

    /// The standard list filter.
    #[prost(string, tag = "1")]
    pub filter: String,

    /// The standard list page size.
    #[prost(int32, tag = "2")]
    pub page_size: i32,

    /// The standard list page token.
    #[prost(string, tag = "3")]
    pub page_token: String,

    /// When set to `true`, operations that are reachable are returned as
    /// normal, and those that are unreachable are returned in the
    /// [ListOperationsResponse::unreachable] field.
    #[prost(bool, tag = "5")]
    pub return_partial_success: bool,
}

impl ListOperationsRequest {
    /// Sets the value of [name][ListOperationsRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [filter][ListOperationsRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][ListOperationsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListOperationsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [return_partial_success][ListOperationsRequest::return_partial_success].
    pub fn set_return_partial_success(mut self, v: bool) -> Self {
        self.return_partial_success = v;
        self
    }
}

impl wkt::message::Message for ListOperationsRequest {
    fn typename() -> &'static str {
        "google.longrunning.ListOperationsRequest"
    }
}

/// The response message for Operations.ListOperations.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListOperationsResponse {
    /// A list of operations that matches the specified filter in the request.
    #[prost(message, repeated, tag = "1")]
    pub operations: Vec<Operation>,

    /// The standard List next-page token.
    #[prost(string, tag = "2")]
    pub next_page_token: String,

    /// Unordered list. Unreachable resources.
    #[prost(string, repeated, tag = "3")]
    pub unreachable: Vec<String>,
}

impl ListOperationsResponse {
    /// Sets the value of [operations][ListOperationsResponse::operations].
    pub fn set_operations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Operation>,
    {
        self.operations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListOperationsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListOperationsResponse {
    fn typename() -> &'static str {
        "google.longrunning.ListOperationsResponse"
    }
}

impl gax::paginator::PageableResponse for ListOperationsResponse {
    type PageItem = Operation;

    fn items(self) -> Vec<Self::PageItem> {
        self.operations
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// The request message for Operations.DeleteOperation.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteOperationRequest {
    /// The name of the operation resource to be deleted.
    #[prost(string, tag = "1")]
    pub name: String,
}

impl DeleteOperationRequest {
    /// Sets the value of [name][DeleteOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteOperationRequest {
    fn typename() -> &'static str {
        "google.longrunning.DeleteOperationRequest"
    }
}

/// The request message for Operations.CancelOperation.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CancelOperationRequest {
    /// The name of the operation resource to be cancelled.
    #[prost(string, tag = "1")]
    pub name: String,
}

impl CancelOperationRequest {
    /// Sets the value of [name][CancelOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for CancelOperationRequest {
    fn typename() -> &'static str {
        "google.longrunning.CancelOperationRequest"
    }
}

/// The request message for Operations.WaitOperation.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaitOperationRequest {
    /// The name of the operation resource to wait on.
    #[prost(string, tag = "1")]
    pub name: String,

    /// The maximum duration to wait before timing out. If left blank, the wait
    /// will be at most the time permitted by the underlying HTTP/RPC protocol.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<wkt::Duration>,
}

impl WaitOperationRequest {
    /// Sets the value of [name][WaitOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [timeout][WaitOperationRequest::timeout].
    pub fn set_timeout<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.timeout = Some(v.into());
        self
    }
}

impl wkt::message::Message for WaitOperationRequest {
    fn typename() -> &'static str {
        "google.longrunning.WaitOperationRequest"
    }
}
