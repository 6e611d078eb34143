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

/// A generic empty message that you can re-use to avoid defining duplicated
/// empty messages in your APIs.
///
/// A typical example is to use it as the response type of an API method, or
/// as the result of a long-running operation that returns no data.
///
/// The JSON representation for `Empty` is empty JSON object `{}`.
#[derive(Clone, Copy, PartialEq, Eq, prost::Message, serde::Serialize, serde::Deserialize)]
pub struct Empty {}

impl crate::message::Message for Empty {
    fn typename() -> &'static str {
        "google.protobuf.Empty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message as _;

    #[test]
    fn json() -> anyhow::Result<()> {
        let got = serde_json::to_value(Empty::default())?;
        assert_eq!(got, serde_json::json!({}));
        let back = serde_json::from_value::<Empty>(serde_json::json!({}))?;
        assert_eq!(back, Empty::default());
        Ok(())
    }

    #[test]
    fn binary() -> anyhow::Result<()> {
        let buf = Empty::default().encode_to_vec();
        assert!(buf.is_empty(), "{buf:?}");
        let back = Empty::decode(bytes::Bytes::new())?;
        assert_eq!(back, Empty::default());
        Ok(())
    }
}
