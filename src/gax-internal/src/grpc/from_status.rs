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

//! Converts gRPC status values into [gax::error::Error].
//!
//! A `tonic::Status` may come from the service, from the channel, or from
//! the tower timeout layer. Only the first kind becomes a service error.

use gax::error::Error;
use gax::error::rpc::{Code, Status};
use prost::Message;
use std::error::Error as _;

// Bounds the walk over `source()` chains that might contain cycles.
const MAX_SOURCE_DEPTH: usize = 32;

#[derive(Debug, PartialEq)]
enum Origin {
    Timeout,
    Channel,
    NotGrpc,
    Service,
}

fn origin(status: &tonic::Status) -> Origin {
    let mut chain = std::iter::successors(status.source(), |&e| e.source()).take(MAX_SOURCE_DEPTH);
    if chain.any(|e| e.is::<tonic::TimeoutExpired>()) {
        return Origin::Timeout;
    }
    let mut chain = std::iter::successors(status.source(), |&e| e.source()).take(MAX_SOURCE_DEPTH);
    if chain.any(|e| e.is::<tonic::transport::Error>()) {
        return Origin::Channel;
    }
    let grpc_content = status
        .metadata()
        .get("content-type")
        .is_none_or(|v| v.as_bytes().starts_with(b"application/grpc"));
    if grpc_content {
        Origin::Service
    } else {
        Origin::NotGrpc
    }
}

fn to_gax_status(status: &tonic::Status) -> Status {
    // Missing or malformed details decode as empty.
    let details = rpc::model::Status::decode(status.details()).unwrap_or_default();
    Status::from(details)
        .set_code(Code::from(status.code() as i32))
        .set_message(status.message())
}

pub fn to_gax_error(status: tonic::Status) -> Error {
    match origin(&status) {
        Origin::Timeout => Error::timeout(status),
        Origin::Channel => {
            let headers = status.metadata().clone().into_headers();
            Error::transport(headers, status)
        }
        Origin::NotGrpc => {
            let headers = status.metadata().clone().into_headers();
            Error::transport(headers, GrpcError::BadContentType(status))
        }
        Origin::Service => {
            let headers = status.metadata().clone().into_headers();
            Error::service_with_http_metadata(to_gax_status(&status), None, Some(headers))
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum GrpcError {
    #[error(
        "the response content-type is not application/grpc, the endpoint may not support gRPC"
    )]
    BadContentType(#[source] tonic::Status),
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::StatusDetails;
    use test_case::test_case;

    #[test_case(tonic::Code::Cancelled, Code::Cancelled)]
    #[test_case(tonic::Code::InvalidArgument, Code::InvalidArgument)]
    #[test_case(tonic::Code::DeadlineExceeded, Code::DeadlineExceeded)]
    #[test_case(tonic::Code::NotFound, Code::NotFound)]
    #[test_case(tonic::Code::PermissionDenied, Code::PermissionDenied)]
    #[test_case(tonic::Code::ResourceExhausted, Code::ResourceExhausted)]
    #[test_case(tonic::Code::Unavailable, Code::Unavailable)]
    #[test_case(tonic::Code::Unauthenticated, Code::Unauthenticated)]
    fn check_code(input: tonic::Code, want: Code) {
        let got = to_gax_status(&tonic::Status::new(input, "test-only"));
        assert_eq!(got.code, want);
        assert_eq!(&got.message, "test-only");
    }

    #[test]
    fn origins() {
        assert_eq!(origin(&tonic::Status::unavailable("try again")), Origin::Service);
        let mut status = tonic::Status::internal("oh noes");
        status.metadata_mut().append(
            "content-type",
            tonic::metadata::AsciiMetadataValue::from_static("text/html"),
        );
        assert_eq!(origin(&status), Origin::NotGrpc);
    }

    #[test]
    fn service_error() {
        let mut input = tonic::Status::not_found("dataset not found");
        input.metadata_mut().append(
            "content-type",
            tonic::metadata::AsciiMetadataValue::from_static("application/grpc"),
        );
        let got = to_gax_error(input);
        let status = got.status().expect("a service error");
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(&status.message, "dataset not found");
        assert_eq!(got.http_equivalent_code(), Some(404));
        assert!(got.http_headers().is_some(), "{got:?}");
    }

    #[test]
    fn bad_content_type() {
        let mut status = tonic::Status::internal("oh noes");
        status.metadata_mut().append(
            "content-type",
            tonic::metadata::AsciiMetadataValue::from_static("application/xml; charset=UTF-8"),
        );
        let got = to_gax_error(status);
        assert!(got.is_transport(), "{got:?}");
        assert!(got.status().is_none(), "{got:?}");
        let source = got
            .source()
            .and_then(|e| e.downcast_ref::<GrpcError>())
            .expect("want a GrpcError as source");
        assert!(matches!(source, GrpcError::BadContentType(_)), "{source:?}");
    }

    #[test]
    fn with_details() -> anyhow::Result<()> {
        let code = Code::InvalidArgument;
        let status = rpc::model::Status::default()
            .set_code(code)
            .set_message("test-only")
            .set_details([wkt::Any::from_msg(
                &rpc::model::ErrorInfo::default()
                    .set_reason("reason")
                    .set_domain("aiplatform.googleapis.com"),
            )?]);
        let status = tonic::Status::with_details(
            tonic::Code::InvalidArgument,
            "test-only",
            status.encode_to_vec().into(),
        );
        let got = to_gax_error(status);
        let status = got.status().expect("a service error");
        assert_eq!(status.code, Code::InvalidArgument);
        assert_eq!(&status.message, "test-only");
        assert_eq!(
            status.details,
            vec![StatusDetails::ErrorInfo(
                rpc::model::ErrorInfo::default()
                    .set_reason("reason")
                    .set_domain("aiplatform.googleapis.com")
            )]
        );
        Ok(())
    }
}
