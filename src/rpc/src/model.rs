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

use std::collections::HashMap;

/// The `Status` type defines a logical error model that is suitable for
/// different programming environments, including REST APIs and RPC APIs.
///
/// Each `Status` message contains three pieces of data: error code, error
/// message, and error details.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Status {
    /// The status code, which should be an enum value of `google.rpc.Code`.
    #[prost(int32, tag = "1")]
    pub code: i32,

    /// A developer-facing error message, which should be in English.
    #[prost(string, tag = "2")]
    pub message: String,

    /// A list of messages that carry the error details.
    #[prost(message, repeated, tag = "3")]
    pub details: Vec<wkt::Any>,
}

impl Status {
    /// Sets the value of [code][Status::code].
    pub fn set_code<T: Into<i32>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value of [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value of [details][Status::details].
    pub fn set_details<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = wkt::Any>,
    {
        self.details = v.into_iter().collect();
        self
    }
}

impl wkt::message::Message for Status {
    fn typename() -> &'static str {
        "google.rpc.Status"
    }
}

/// Describes the cause of the error with structured details.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorInfo {
    /// The reason of the error, a constant value in `UPPER_SNAKE_CASE`.
    #[prost(string, tag = "1")]
    pub reason: String,

    /// The logical grouping to which the "reason" belongs.
    #[prost(string, tag = "2")]
    pub domain: String,

    /// Additional structured details about this error.
    #[prost(map = "string, string", tag = "3")]
    pub metadata: HashMap<String, String>,
}

impl ErrorInfo {
    /// Sets the value of [reason][ErrorInfo::reason].
    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = v.into();
        self
    }

    /// Sets the value of [domain][ErrorInfo::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = v.into();
        self
    }

    /// Sets the value of [metadata][ErrorInfo::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl wkt::message::Message for ErrorInfo {
    fn typename() -> &'static str {
        "google.rpc.ErrorInfo"
    }
}

/// Provides a localized error message that is safe to return to the user.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocalizedMessage {
    /// The locale used following the specification defined at
    /// <https://www.rfc-editor.org/rfc/bcp/bcp47.txt>.
    #[prost(string, tag = "1")]
    pub locale: String,

    /// The localized error message in the above locale.
    #[prost(string, tag = "2")]
    pub message: String,
}

impl LocalizedMessage {
    /// Sets the value of [locale][LocalizedMessage::locale].
    pub fn set_locale<T: Into<String>>(mut self, v: T) -> Self {
        self.locale = v.into();
        self
    }

    /// Sets the value of [message][LocalizedMessage::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }
}

impl wkt::message::Message for LocalizedMessage {
    fn typename() -> &'static str {
        "google.rpc.LocalizedMessage"
    }
}

/// Describes additional debugging info.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebugInfo {
    /// The stack trace entries indicating where the error occurred.
    #[prost(string, repeated, tag = "1")]
    pub stack_entries: Vec<String>,

    /// Additional debugging information provided by the server.
    #[prost(string, tag = "2")]
    pub detail: String,
}

impl DebugInfo {
    /// Sets the value of [stack_entries][DebugInfo::stack_entries].
    pub fn set_stack_entries<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.stack_entries = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [detail][DebugInfo::detail].
    pub fn set_detail<T: Into<String>>(mut self, v: T) -> Self {
        self.detail = v.into();
        self
    }
}

impl wkt::message::Message for DebugInfo {
    fn typename() -> &'static str {
        "google.rpc.DebugInfo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message as _;
    use serde_json::json;

    #[test]
    fn status_from_json() -> anyhow::Result<()> {
        let input = json!({
            "code": 5,
            "message": "not found",
            "details": [{
                "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                "reason": "NOT_THERE",
                "domain": "aiplatform.googleapis.com",
            }]
        });
        let status = serde_json::from_value::<Status>(input)?;
        assert_eq!(status.code, 5);
        assert_eq!(status.details.len(), 1);
        let info = status.details[0].to_msg::<ErrorInfo>()?;
        assert_eq!(info.reason, "NOT_THERE");
        Ok(())
    }

    #[test]
    fn status_binary() -> anyhow::Result<()> {
        let info = LocalizedMessage::default()
            .set_locale("en-US")
            .set_message("try again");
        let status = Status::default()
            .set_code(14)
            .set_message("unavailable")
            .set_details([wkt::Any::from_msg(&info)?]);
        let got = Status::decode(status.encode_to_vec().as_slice())?;
        assert_eq!(got.code, 14);
        assert_eq!(got.details[0].to_msg::<LocalizedMessage>()?, info);
        Ok(())
    }
}
