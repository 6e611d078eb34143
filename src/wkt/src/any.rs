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

use crate::message::{Message, TYPE_URL_PREFIX};
use bytes::Bytes;

type Map = serde_json::Map<String, serde_json::Value>;

/// `Any` contains an arbitrary serialized message along with a URL that
/// describes the type of the serialized message.
///
/// The value may arrive in either of the two encodings used by the
/// transports. Values received over gRPC carry the binary encoding, values
/// received over HTTP carry the JSON encoding. Values created locally with
/// [Any::from_msg] carry both, and can be sent over either transport.
///
/// # JSON
///
/// The JSON representation of an `Any` value uses the regular
/// representation of the embedded message, with an additional field `@type`
/// which contains the type URL. Example:
///
/// ```norust
///     {
///       "@type": "type.googleapis.com/google.cloud.aiplatform.v1.Dataset",
///       "displayName": <string>
///     }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Any {
    type_url: String,
    binary: Option<Bytes>,
    json: Option<Map>,
}

/// Indicates a problem trying to use an [Any].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AnyError {
    /// Problem serializing an object into an [Any].
    #[error("cannot serialize object into an Any, source={0}")]
    Serialization(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Problem deserializing an object from an [Any].
    #[error("cannot deserialize from an Any, source={0}")]
    Deserialization(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Mismatched type, the [Any] does not contain the desired type.
    #[error("expected type mismatch in Any deserialization, want={want}, got={got}")]
    TypeMismatch { want: String, got: String },
}

type Error = AnyError;

impl Any {
    /// Creates a new [Any] from a message.
    ///
    /// # Example
    /// ```
    /// # use vertexai_wkt::{Any, AnyError, Empty};
    /// let any = Any::from_msg(&Empty::default())?;
    /// assert_eq!(any.type_url(), "type.googleapis.com/google.protobuf.Empty");
    /// # Ok::<(), AnyError>(())
    /// ```
    pub fn from_msg<T: Message>(message: &T) -> Result<Self, Error> {
        let json = match serde_json::to_value(message).map_err(Error::ser)? {
            serde_json::Value::Object(map) => map,
            other => {
                // Well-known types with scalar JSON encodings nest the value.
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        Ok(Self {
            type_url: crate::message::type_url::<T>(),
            binary: Some(Bytes::from(message.encode_to_vec())),
            json: Some(json),
        })
    }

    /// Creates an [Any] from its binary encoding.
    pub fn from_binary<U: Into<String>>(type_url: U, value: Bytes) -> Self {
        Self {
            type_url: type_url.into(),
            binary: Some(value),
            json: None,
        }
    }

    /// Returns the type URL of the contained message.
    pub fn type_url(&self) -> &str {
        &self.type_url
    }

    /// Returns the typename of the contained message, that is, the type URL
    /// without its prefix.
    pub fn typename(&self) -> &str {
        self.type_url
            .strip_prefix(TYPE_URL_PREFIX)
            .unwrap_or(&self.type_url)
    }

    /// Extracts the contained message.
    ///
    /// Fails if the type URL does not match `T`, or if the payload cannot be
    /// decoded.
    pub fn to_msg<T: Message>(&self) -> Result<T, Error> {
        if self.typename() != T::typename() {
            return Err(Error::TypeMismatch {
                want: T::typename().to_string(),
                got: self.typename().to_string(),
            });
        }
        if let Some(binary) = &self.binary {
            return T::decode(binary.clone()).map_err(Error::deser);
        }
        match &self.json {
            None => Ok(T::default()),
            Some(map) => {
                let mut map = map.clone();
                map.remove("@type");
                let value = match map.remove("value") {
                    Some(v) if map.is_empty() && !v.is_object() => v,
                    Some(v) => {
                        map.insert("value".to_string(), v);
                        serde_json::Value::Object(map)
                    }
                    None => serde_json::Value::Object(map),
                };
                serde_json::from_value::<T>(value).map_err(Error::deser)
            }
        }
    }
}

impl AnyError {
    pub(crate) fn ser<T>(v: T) -> Self
    where
        T: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization(v.into())
    }

    pub(crate) fn deser<T>(v: T) -> Self
    where
        T: std::error::Error + Send + Sync + 'static,
    {
        Self::Deserialization(v.into())
    }
}

impl prost::Message for Any {
    fn encode_raw(&self, buf: &mut impl bytes::BufMut) {
        use prost::encoding::{bytes, string};
        if !self.type_url.is_empty() {
            string::encode(1, &self.type_url, buf);
        }
        if let Some(value) = self.binary.as_ref().filter(|v| !v.is_empty()) {
            bytes::encode(2, value, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), prost::DecodeError> {
        use prost::encoding::{bytes, skip_field, string};
        match tag {
            1 => string::merge(wire_type, &mut self.type_url, buf, ctx),
            2 => {
                let mut value = Bytes::new();
                bytes::merge(wire_type, &mut value, buf, ctx)?;
                self.binary = Some(value);
                self.json = None;
                Ok(())
            }
            _ => skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        use prost::encoding::{bytes, string};
        let mut len = 0;
        if !self.type_url.is_empty() {
            len += string::encoded_len(1, &self.type_url);
        }
        if let Some(value) = self.binary.as_ref().filter(|v| !v.is_empty()) {
            len += bytes::encoded_len(2, value);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

impl serde::ser::Serialize for Any {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("@type", &self.type_url)?;
        if let Some(json) = &self.json {
            for (k, v) in json.iter().filter(|(k, _)| *k != "@type") {
                map.serialize_entry(k, v)?;
            }
        }
        map.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for Any {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        use serde::de::Error as _;
        let mut map = Map::deserialize(deserializer)?;
        let type_url = match map.remove("@type") {
            Some(serde_json::Value::String(s)) => s,
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "expected a string in the `@type` field, got {other}"
                )));
            }
            None => return Err(D::Error::missing_field("@type")),
        };
        Ok(Self {
            type_url,
            binary: None,
            json: Some(map),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Empty, FieldMask, Timestamp};
    use prost::Message as _;
    use serde_json::json;

    #[test]
    fn from_msg_both_encodings() -> anyhow::Result<()> {
        let mask = FieldMask::default().set_paths(["display_name"]);
        let any = Any::from_msg(&mask)?;
        assert_eq!(any.typename(), "google.protobuf.FieldMask");

        let json = serde_json::to_value(&any)?;
        assert_eq!(
            json,
            json!({"@type": "type.googleapis.com/google.protobuf.FieldMask", "value": "displayName"})
        );

        let decoded = Any::decode(any.encode_to_vec().as_slice())?;
        assert_eq!(decoded.to_msg::<FieldMask>()?, mask);
        Ok(())
    }

    #[test]
    fn from_json() -> anyhow::Result<()> {
        let input = json!({
            "@type": "type.googleapis.com/google.protobuf.Timestamp",
            "value": "2025-05-16T09:46:12.5Z",
        });
        let any = serde_json::from_value::<Any>(input)?;
        let ts = any.to_msg::<Timestamp>()?;
        assert_eq!(ts, Timestamp::new(1747388772, 500_000_000)?);
        Ok(())
    }

    #[test]
    fn type_mismatch() -> anyhow::Result<()> {
        let any = Any::from_msg(&Empty::default())?;
        let got = any.to_msg::<FieldMask>();
        assert!(
            matches!(got, Err(AnyError::TypeMismatch { ref want, .. }) if want == "google.protobuf.FieldMask"),
            "{got:?}"
        );
        Ok(())
    }

    #[test]
    fn missing_type() {
        let got = serde_json::from_value::<Any>(json!({"value": 1}));
        assert!(got.is_err(), "{got:?}");
    }
}
