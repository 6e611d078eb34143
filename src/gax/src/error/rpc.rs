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

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// The [Status] type defines a logical error model that is suitable for
/// different programming environments, including REST APIs and RPC APIs. Each
/// [Status] message contains three pieces of data: error code, error message,
/// and error details.
///
/// You can find out more about this error model and how to work with it in the
/// [API Design Guide](https://cloud.google.com/apis/design/errors).
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The status code.
    pub code: Code,

    /// A developer-facing error message, which should be in English.
    pub message: String,

    /// A list of messages that carry the error details.
    ///
    /// Errors with HTTP-equivalent codes 401, 403 and 404 may also carry a
    /// JSON description of the credentials used in the call, see
    /// [StatusDetails::CredentialInfo].
    pub details: Vec<StatusDetails>,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [details][Status::details].
    pub fn set_details<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<StatusDetails>,
    {
        self.details = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

// Each row: variant, numeric value, canonical name, HTTP status, docs.
macro_rules! canonical_codes {
    ($($(#[doc = $doc:literal])* $variant:ident = $value:literal, $name:literal, $http:literal;)*) => {
        /// The canonical error codes for APIs.
        ///
        /// Sometimes multiple error codes may apply. Services should return
        /// the most specific error code that applies.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum Code {
            $(
                $(#[doc = $doc])*
                #[doc = ""]
                #[doc = concat!("HTTP Mapping: ", $http)]
                $variant = $value,
            )*
        }

        impl Code {
            /// The canonical name of the code, as used in the JSON error payloads.
            pub fn name(&self) -> &str {
                match self {
                    $(Code::$variant => $name,)*
                }
            }

            /// The HTTP status code that corresponds to this code.
            pub fn http_equivalent(&self) -> u16 {
                match self {
                    $(Code::$variant => $http,)*
                }
            }
        }

        impl From<i32> for Code {
            fn from(value: i32) -> Self {
                match value {
                    $($value => Code::$variant,)*
                    _ => Code::default(),
                }
            }
        }

        impl TryFrom<&str> for Code {
            type Error = String;
            fn try_from(value: &str) -> std::result::Result<Code, Self::Error> {
                match value {
                    $($name => Ok(Code::$variant),)*
                    _ => Err(format!("unknown status code value {value}")),
                }
            }
        }
    };
}

canonical_codes! {
    /// Not an error; returned on success.
    Ok = 0, "OK", 200;
    /// The operation was cancelled, typically by the caller.
    Cancelled = 1, "CANCELLED", 499;
    /// Unknown error.
    Unknown = 2, "UNKNOWN", 500;
    /// The client specified an invalid argument.
    InvalidArgument = 3, "INVALID_ARGUMENT", 400;
    /// The deadline expired before the operation could complete.
    DeadlineExceeded = 4, "DEADLINE_EXCEEDED", 504;
    /// A requested resource, such as a dataset or a RAG file, was not found.
    NotFound = 5, "NOT_FOUND", 404;
    /// The resource a client attempted to create already exists.
    AlreadyExists = 6, "ALREADY_EXISTS", 409;
    /// The caller lacks permission for the operation.
    PermissionDenied = 7, "PERMISSION_DENIED", 403;
    /// A quota or other resource is exhausted.
    ResourceExhausted = 8, "RESOURCE_EXHAUSTED", 429;
    /// The system is not in the state the operation requires.
    FailedPrecondition = 9, "FAILED_PRECONDITION", 400;
    /// The operation was aborted, typically by a concurrency conflict.
    Aborted = 10, "ABORTED", 409;
    /// The operation was attempted past the valid range.
    OutOfRange = 11, "OUT_OF_RANGE", 400;
    /// The operation is not implemented, or not enabled in this service.
    Unimplemented = 12, "UNIMPLEMENTED", 501;
    /// An internal error in the service.
    Internal = 13, "INTERNAL", 500;
    /// The service is unavailable. Retrying with a backoff usually succeeds.
    Unavailable = 14, "UNAVAILABLE", 503;
    /// Unrecoverable data loss or corruption.
    DataLoss = 15, "DATA_LOSS", 500;
    /// The request lacks valid authentication credentials.
    Unauthenticated = 16, "UNAUTHENTICATED", 401;
}

impl Default for Code {
    fn default() -> Self {
        Code::Unknown
    }
}

impl Code {
    /// The code that best describes an HTTP status code.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            200..=299 => Code::Ok,
            400 => Code::InvalidArgument,
            401 => Code::Unauthenticated,
            403 => Code::PermissionDenied,
            404 => Code::NotFound,
            409 => Code::Aborted,
            416 => Code::OutOfRange,
            429 => Code::ResourceExhausted,
            499 => Code::Cancelled,
            501 => Code::Unimplemented,
            503 => Code::Unavailable,
            504 => Code::DeadlineExceeded,
            _ => Code::Unknown,
        }
    }
}

impl From<Code> for i32 {
    fn from(value: Code) -> Self {
        value as i32
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(*self as i32)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i32::deserialize(deserializer).map(Code::from)
    }
}

/// A helper to deserialize wrapped Status messages.
#[derive(Clone, Debug, Deserialize)]
struct ErrorWrapper {
    error: WrapperStatus,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct WrapperStatus {
    code: i32,
    message: String,
    status: Option<String>,
    details: Vec<StatusDetails>,
}

/// Parses the payload of an HTTP error response.
///
/// The payload has the form `{"error": {"code": ..., "status": ..., ...}}`,
/// where `code` is the HTTP status code and `status` the name of the
/// [Code].
impl TryFrom<&bytes::Bytes> for Status {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let wrapper = serde_json::from_slice::<ErrorWrapper>(value)
            .map(|w| w.error)
            .map_err(Error::deser)?;
        let code = match wrapper.status.as_deref().map(Code::try_from) {
            Some(Ok(code)) => code,
            Some(Err(_)) | None => u16::try_from(wrapper.code)
                .map(Code::from_http_status)
                .unwrap_or_default(),
        };
        Ok(Status {
            code,
            message: wrapper.message,
            details: wrapper.details,
        })
    }
}

impl From<&rpc::model::Status> for Status {
    fn from(value: &rpc::model::Status) -> Self {
        Self {
            code: value.code.into(),
            message: value.message.clone(),
            details: value.details.iter().map(StatusDetails::from).collect(),
        }
    }
}

impl From<rpc::model::Status> for Status {
    fn from(value: rpc::model::Status) -> Self {
        Self::from(&value)
    }
}

/// The type of details associated with [Status].
///
/// Services often return a detailed error description. These details can be
/// used to better understand the root cause of the problem.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "@type")]
#[non_exhaustive]
pub enum StatusDetails {
    #[serde(rename = "type.googleapis.com/google.rpc.DebugInfo")]
    DebugInfo(rpc::model::DebugInfo),
    #[serde(rename = "type.googleapis.com/google.rpc.ErrorInfo")]
    ErrorInfo(rpc::model::ErrorInfo),
    #[serde(rename = "type.googleapis.com/google.rpc.LocalizedMessage")]
    LocalizedMessage(rpc::model::LocalizedMessage),
    /// A JSON object describing the credentials used in the call.
    ///
    /// The client library appends this detail to errors with HTTP-equivalent
    /// codes 401, 403 and 404, when the credentials can describe themselves.
    #[serde(untagged)]
    CredentialInfo(String),
    #[serde(untagged)]
    Other(wkt::Any),
}

impl From<&wkt::Any> for StatusDetails {
    fn from(value: &wkt::Any) -> Self {
        macro_rules! try_convert {
            ($($variant:ident),*) => {
                $(
                    if let Ok(v) = value.to_msg::<rpc::model::$variant>() {
                        return StatusDetails::$variant(v);
                    }
                )*
            };
        }

        try_convert!(DebugInfo, ErrorInfo, LocalizedMessage);

        StatusDetails::Other(value.clone())
    }
}

impl From<wkt::Any> for StatusDetails {
    fn from(value: wkt::Any) -> Self {
        Self::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use rpc::model::{ErrorInfo, LocalizedMessage};
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn status_basic_setters() {
        let got = Status::default()
            .set_code(Code::Unimplemented)
            .set_message("test-message");
        assert_eq!(got.code, Code::Unimplemented);
        assert_eq!(got.message, "test-message");
        assert!(got.details.is_empty(), "{got:?}");
    }

    #[test]
    fn try_from_bytes() -> Result<()> {
        let body = json!({"error": {
            "code": 404,
            "message": "The thing is not there, oh noes!",
            "status": "NOT_FOUND",
            "details": [{
                "@type": "type.googleapis.com/google.rpc.LocalizedMessage",
                "locale": "en-US",
                "message": "we searched everywhere, honest",
            }]
        }});
        let got = Status::try_from(&bytes::Bytes::from(body.to_string()))?;
        let want = Status::default()
            .set_code(Code::NotFound)
            .set_message("The thing is not there, oh noes!")
            .set_details([StatusDetails::LocalizedMessage(
                LocalizedMessage::default()
                    .set_locale("en-US")
                    .set_message("we searched everywhere, honest"),
            )]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn try_from_bytes_without_status_name() -> Result<()> {
        let body = json!({"error": {"code": 403, "message": "nope"}});
        let got = Status::try_from(&bytes::Bytes::from(body.to_string()))?;
        assert_eq!(got.code, Code::PermissionDenied);
        Ok(())
    }

    #[test]
    fn try_from_bytes_invalid() {
        let got = Status::try_from(&bytes::Bytes::from_static(b"<html>oops</html>"));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn details_from_any() -> Result<()> {
        let info = ErrorInfo::default().set_reason("reason").set_domain("domain");
        let any = wkt::Any::from_msg(&info)?;
        assert_eq!(StatusDetails::from(&any), StatusDetails::ErrorInfo(info));

        let other = wkt::Any::from_msg(&wkt::Empty::default())?;
        assert_eq!(StatusDetails::from(&other), StatusDetails::Other(other.clone()));
        Ok(())
    }

    #[test]
    fn credential_info_serde() -> Result<()> {
        let info = r#"{"principal":"p"}"#.to_string();
        let detail = StatusDetails::CredentialInfo(info.clone());
        let value = serde_json::to_value(&detail)?;
        assert_eq!(value, json!(info));
        let back = serde_json::from_value::<StatusDetails>(value)?;
        assert_eq!(back, detail);
        Ok(())
    }

    #[test]
    fn from_rpc_status() {
        let input = rpc::model::Status::default()
            .set_code(Code::Unavailable as i32)
            .set_message("try again");
        let got = Status::from(&input);
        assert_eq!(got.code, Code::Unavailable);
        assert_eq!(got.message, "try again");
    }

    #[test_case(Code::Unauthenticated, 401)]
    #[test_case(Code::PermissionDenied, 403)]
    #[test_case(Code::NotFound, 404)]
    #[test_case(Code::Unavailable, 503)]
    #[test_case(Code::DeadlineExceeded, 504)]
    fn http_mapping(code: Code, http: u16) {
        assert_eq!(code.http_equivalent(), http);
        assert_eq!(Code::from_http_status(http), code);
    }

    #[test_case("OK")]
    #[test_case("NOT_FOUND")]
    #[test_case("UNAUTHENTICATED")]
    fn code_roundtrip(input: &str) -> Result<()> {
        let code = Code::try_from(input).map_err(anyhow::Error::msg)?;
        assert_eq!(code.name(), input);
        assert_eq!(Code::from(code as i32), code);
        Ok(())
    }

    #[test]
    fn code_unknown() {
        assert!(Code::try_from("NOT-A-CODE").is_err());
        assert_eq!(Code::from(1234), Code::Unknown);
    }
}
