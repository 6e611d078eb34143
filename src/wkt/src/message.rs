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

//! Define traits required of all messages.

/// A trait that must be implemented by all messages.
///
/// Messages travel over two encodings: protobuf binary for the gRPC transport,
/// and JSON for the HTTP transport. This trait collects the bounds required by
/// both, plus the fully-qualified type name used by [Any][crate::Any].
pub trait Message:
    prost::Message + Default + Clone + serde::Serialize + serde::de::DeserializeOwned + 'static
{
    /// The fully-qualified typename of this message.
    ///
    /// For example, `google.protobuf.Empty`.
    fn typename() -> &'static str;
}

/// The prefix used in all `Any` type URLs.
pub(crate) const TYPE_URL_PREFIX: &str = "type.googleapis.com/";

/// Returns the type URL for the message type `T`.
pub fn type_url<T: Message>() -> String {
    format!("{TYPE_URL_PREFIX}{}", T::typename())
}
