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

//! The method descriptors and service information for each RPC.

use gax::error::rpc::Code;
use gaxi::descriptor::{Body, HttpRule, MethodDescriptor, RetrySettings, RoutingParam};
#[cfg(feature = "dataset-service")]
use gaxi::options::OperationsMethods;
#[cfg(any(feature = "dataset-service", feature = "vertex-rag-data-service"))]
use gaxi::options::ServiceInfo;
use std::time::Duration;

const ENDPOINT_TEMPLATE: &str = "https://aiplatform.{UNIVERSE_DOMAIN}";
const MTLS_ENDPOINT: &str = "https://aiplatform.mtls.googleapis.com";
const DEFAULT_SCOPES: &[&str] = &["https://www.googleapis.com/auth/cloud-platform"];

const DEFAULT_TIMEOUT: Option<Duration> = Some(Duration::from_secs(5));

// Reads retry on `UNAVAILABLE`, mutations are not retried by default.
const READ_RETRY: RetrySettings = RetrySettings::OnCodes {
    codes: &[Code::Unavailable],
    initial_delay: Duration::from_millis(100),
    maximum_delay: Duration::from_secs(60),
    multiplier: 1.3,
    deadline: Duration::from_secs(5),
};

const NAME: &[RoutingParam] = &[RoutingParam {
    field: "name",
    key: "name",
}];
const PARENT: &[RoutingParam] = &[RoutingParam {
    field: "parent",
    key: "parent",
}];

#[cfg(feature = "dataset-service")]
const OPERATIONS: OperationsMethods = OperationsMethods {
    get_operation: &operations::GET_OPERATION,
    cancel_operation: &operations::CANCEL_OPERATION,
};

/// The `google.longrunning.Operations` mixin.
#[cfg(feature = "dataset-service")]
pub(crate) mod operations {
    use super::*;

    const SERVICE: &str = "google.longrunning.Operations";

    pub(crate) static LIST_OPERATIONS: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        method: "ListOperations",
        grpc_path: "/google.longrunning.Operations/ListOperations",
        http: HttpRule {
            verb: http::Method::GET,
            path_template: "/v1/{name=projects/*/locations/*/datasets/*}/operations",
            body: Body::None,
        },
        idempotent: true,
        default_timeout: DEFAULT_TIMEOUT,
        retry: READ_RETRY,
        routing: NAME,
        long_running: false,
    };

    pub(crate) static GET_OPERATION: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        method: "GetOperation",
        grpc_path: "/google.longrunning.Operations/GetOperation",
        http: HttpRule {
            verb: http::Method::GET,
            path_template: "/v1/{name=projects/*/locations/*/datasets/*/operations/*}",
            body: Body::None,
        },
        idempotent: true,
        default_timeout: DEFAULT_TIMEOUT,
        retry: READ_RETRY,
        routing: NAME,
        long_running: false,
    };

    pub(crate) static DELETE_OPERATION: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        method: "DeleteOperation",
        grpc_path: "/google.longrunning.Operations/DeleteOperation",
        http: HttpRule {
            verb: http::Method::DELETE,
            path_template: "/v1/{name=projects/*/locations/*/datasets/*/operations/*}",
            body: Body::None,
        },
        idempotent: true,
        default_timeout: DEFAULT_TIMEOUT,
        retry: RetrySettings::None,
        routing: NAME,
        long_running: false,
    };

    pub(crate) static CANCEL_OPERATION: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        method: "CancelOperation",
        grpc_path: "/google.longrunning.Operations/CancelOperation",
        http: HttpRule {
            verb: http::Method::POST,
            path_template: "/v1/{name=projects/*/locations/*/datasets/*/operations/*}:cancel",
            body: Body::None,
        },
        idempotent: true,
        default_timeout: DEFAULT_TIMEOUT,
        retry: RetrySettings::None,
        routing: NAME,
        long_running: false,
    };

    pub(crate) static WAIT_OPERATION: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        method: "WaitOperation",
        grpc_path: "/google.longrunning.Operations/WaitOperation",
        http: HttpRule {
            verb: http::Method::POST,
            path_template: "/v1/{name=projects/*/locations/*/datasets/*/operations/*}:wait",
            body: Body::None,
        },
        idempotent: true,
        // The service bounds the wait with the `timeout` field.
        default_timeout: None,
        retry: RetrySettings::None,
        routing: NAME,
        long_running: false,
    };
}

#[cfg(feature = "dataset-service")]
pub(crate) mod dataset_service {
    use super::*;

    const SERVICE: &str = "google.cloud.aiplatform.v1.DatasetService";

    pub(crate) static INFO: ServiceInfo = ServiceInfo {
        service_name: SERVICE,
        short_name: "aiplatform",
        client_version: env!("CARGO_PKG_VERSION"),
        client_artifact: env!("CARGO_PKG_NAME"),
        endpoint_template: ENDPOINT_TEMPLATE,
        mtls_endpoint: MTLS_ENDPOINT,
        default_scopes: DEFAULT_SCOPES,
        operations: Some(OPERATIONS),
    };

    pub(crate) static CREATE_DATASET: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        method: "CreateDataset",
        grpc_path: "/google.cloud.aiplatform.v1.DatasetService/CreateDataset",
        http: HttpRule {
            verb: http::Method::POST,
            path_template: "/v1/{parent=projects/*/locations/*}/datasets",
            body: Body::Field("dataset"),
        },
        // The request id makes retries safe.
        idempotent: true,
        default_timeout: DEFAULT_TIMEOUT,
        retry: RetrySettings::None,
        routing: PARENT,
        long_running: true,
    };

    pub(crate) static GET_DATASET: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        method: "GetDataset",
        grpc_path: "/google.cloud.aiplatform.v1.DatasetService/GetDataset",
        http: HttpRule {
            verb: http::Method::GET,
            path_template: "/v1/{name=projects/*/locations/*/datasets/*}",
            body: Body::None,
        },
        idempotent: true,
        default_timeout: DEFAULT_TIMEOUT,
        retry: READ_RETRY,
        routing: NAME,
        long_running: false,
    };

    pub(crate) static UPDATE_DATASET: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        method: "UpdateDataset",
        grpc_path: "/google.cloud.aiplatform.v1.DatasetService/UpdateDataset",
        http: HttpRule {
            verb: http::Method::PATCH,
            path_template: "/v1/{dataset.name=projects/*/locations/*/datasets/*}",
            body: Body::Field("dataset"),
        },
        idempotent: false,
        default_timeout: DEFAULT_TIMEOUT,
        retry: RetrySettings::None,
        routing: &[RoutingParam {
            field: "dataset.name",
            key: "dataset.name",
        }],
        long_running: false,
    };

    pub(crate) static LIST_DATASETS: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        method: "ListDatasets",
        grpc_path: "/google.cloud.aiplatform.v1.DatasetService/ListDatasets",
        http: HttpRule {
            verb: http::Method::GET,
            path_template: "/v1/{parent=projects/*/locations/*}/datasets",
            body: Body::None,
        },
        idempotent: true,
        default_timeout: DEFAULT_TIMEOUT,
        retry: READ_RETRY,
        routing: PARENT,
        long_running: false,
    };

    pub(crate) static DELETE_DATASET: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        method: "DeleteDataset",
        grpc_path: "/google.cloud.aiplatform.v1.DatasetService/DeleteDataset",
        http: HttpRule {
            verb: http::Method::DELETE,
            path_template: "/v1/{name=projects/*/locations/*/datasets/*}",
            body: Body::None,
        },
        idempotent: true,
        default_timeout: DEFAULT_TIMEOUT,
        retry: RetrySettings::None,
        routing: NAME,
        long_running: true,
    };

    pub(crate) static IMPORT_DATA: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        method: "ImportData",
        grpc_path: "/google.cloud.aiplatform.v1.DatasetService/ImportData",
        http: HttpRule {
            verb: http::Method::POST,
            path_template: "/v1/{name=projects/*/locations/*/datasets/*}:import",
            body: Body::All,
        },
        idempotent: false,
        default_timeout: DEFAULT_TIMEOUT,
        retry: RetrySettings::None,
        routing: NAME,
        long_running: true,
    };
}

#[cfg(feature = "vertex-rag-data-service")]
pub(crate) mod vertex_rag_data_service {
    use super::*;

    const SERVICE: &str = "google.cloud.aiplatform.v1.VertexRagDataService";

    pub(crate) static INFO: ServiceInfo = ServiceInfo {
        service_name: SERVICE,
        short_name: "aiplatform",
        client_version: env!("CARGO_PKG_VERSION"),
        client_artifact: env!("CARGO_PKG_NAME"),
        endpoint_template: ENDPOINT_TEMPLATE,
        mtls_endpoint: MTLS_ENDPOINT,
        default_scopes: DEFAULT_SCOPES,
        operations: None,
    };

    pub(crate) static UPLOAD_RAG_FILE: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        method: "UploadRagFile",
        grpc_path: "/google.cloud.aiplatform.v1.VertexRagDataService/UploadRagFile",
        http: HttpRule {
            verb: http::Method::POST,
            path_template: "/upload/v1/{parent=projects/*/locations/*/ragCorpora/*}/ragFiles:upload",
            body: Body::All,
        },
        idempotent: false,
        default_timeout: Some(Duration::from_secs(60)),
        retry: RetrySettings::None,
        routing: PARENT,
        long_running: false,
    };

    pub(crate) static GET_RAG_FILE: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        method: "GetRagFile",
        grpc_path: "/google.cloud.aiplatform.v1.VertexRagDataService/GetRagFile",
        http: HttpRule {
            verb: http::Method::GET,
            path_template: "/v1/{name=projects/*/locations/*/ragCorpora/*/ragFiles/*}",
            body: Body::None,
        },
        idempotent: true,
        default_timeout: DEFAULT_TIMEOUT,
        retry: READ_RETRY,
        routing: NAME,
        long_running: false,
    };

    pub(crate) static LIST_RAG_FILES: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        method: "ListRagFiles",
        grpc_path: "/google.cloud.aiplatform.v1.VertexRagDataService/ListRagFiles",
        http: HttpRule {
            verb: http::Method::GET,
            path_template: "/v1/{parent=projects/*/locations/*/ragCorpora/*}/ragFiles",
            body: Body::None,
        },
        idempotent: true,
        default_timeout: DEFAULT_TIMEOUT,
        retry: READ_RETRY,
        routing: PARENT,
        long_running: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "dataset-service")]
    #[test]
    fn operations_mixin() {
        assert!(std::ptr::eq(
            OPERATIONS.get_operation,
            &operations::GET_OPERATION
        ));
        assert!(std::ptr::eq(
            OPERATIONS.cancel_operation,
            &operations::CANCEL_OPERATION
        ));
    }

    #[cfg(feature = "dataset-service")]
    #[test]
    fn long_running_methods() {
        use dataset_service::*;
        for m in [&CREATE_DATASET, &DELETE_DATASET, &IMPORT_DATA] {
            assert!(m.long_running, "{m:?}");
        }
        for m in [&GET_DATASET, &LIST_DATASETS, &UPDATE_DATASET] {
            assert!(!m.long_running, "{m:?}");
        }
        assert!(INFO.operations.is_some());
    }
}
