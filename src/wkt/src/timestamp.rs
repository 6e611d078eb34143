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

/// Well-known point in time representation.
///
/// A Timestamp represents a point in time independent of any time zone or local
/// calendar, encoded as a count of seconds and fractions of seconds at
/// nanosecond resolution. The count is relative to an epoch at UTC midnight on
/// January 1, 1970.
///
/// # JSON Mapping
///
/// In JSON format, the Timestamp type is encoded as a string in the
/// [RFC 3339](https://www.ietf.org/rfc/rfc3339.txt) format, for example
/// `"2017-01-15T01:30:15.01Z"`.
///
/// # Examples
/// ```
/// # use vertexai_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::try_from("2025-05-16T09:46:12.500Z")?;
/// assert_eq!(ts.seconds(), 1747388772);
/// assert_eq!(ts.nanos(), 500_000_000);
/// # Ok::<(), TimestampError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, prost::Message)]
pub struct Timestamp {
    #[prost(int64, tag = "1")]
    seconds: i64,
    #[prost(int32, tag = "2")]
    nanos: i32,
}

/// Represent failures in converting or creating [Timestamp] instances.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum TimestampError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// There was a problem deserializing a timestamp.
    #[error("cannot deserialize timestamp, source={0}")]
    Deserialize(String),
}

type Error = TimestampError;

impl Timestamp {
    const NS: i64 = 1_000_000_000;
    // 0001-01-01T00:00:00Z
    const MIN_SECONDS: i64 = -62135596800;
    // 9999-12-31T23:59:59Z
    const MAX_SECONDS: i64 = 253402300799;

    /// Creates a new [Timestamp] from the seconds and nanoseconds.
    ///
    /// Fails if the value is outside the range supported by RFC 3339.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(0..Self::NS as i32).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        Ok(Self { seconds, nanos })
    }

    /// Seconds since the Unix epoch.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Sub-second component, always in `[0, 1e9)`.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

impl crate::message::Message for Timestamp {
    fn typename() -> &'static str {
        "google.protobuf.Timestamp"
    }
}

impl TryFrom<time::OffsetDateTime> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: time::OffsetDateTime) -> Result<Self, Self::Error> {
        let ns = value.unix_timestamp_nanos();
        let seconds = ns.div_euclid(Self::NS as i128) as i64;
        let nanos = ns.rem_euclid(Self::NS as i128) as i32;
        Self::new(seconds, nanos)
    }
}

impl TryFrom<Timestamp> for time::OffsetDateTime {
    type Error = TimestampError;

    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        let ns = value.seconds as i128 * Timestamp::NS as i128 + value.nanos as i128;
        time::OffsetDateTime::from_unix_timestamp_nanos(ns).map_err(|_| Error::OutOfRange)
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        use time::format_description::well_known::Rfc3339;
        let odt = time::OffsetDateTime::parse(value, &Rfc3339)
            .map_err(|e| Error::Deserialize(e.to_string()))?;
        Timestamp::try_from(odt)
    }
}

impl serde::ser::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::Error as _;
        use time::format_description::well_known::Rfc3339;
        let odt = time::OffsetDateTime::try_from(*self).map_err(S::Error::custom)?;
        let formatted = odt.format(&Rfc3339).map_err(S::Error::custom)?;
        serializer.serialize_str(&formatted)
    }
}

impl<'de> serde::de::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        use serde::de::Error as _;
        let value = String::deserialize(deserializer)?;
        Timestamp::try_from(value.as_str()).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(0, 0, "1970-01-01T00:00:00Z")]
    #[test_case(1747388772, 500_000_000, "2025-05-16T09:46:12.5Z")]
    #[test_case(-1, 0, "1969-12-31T23:59:59Z")]
    fn json_roundtrip(seconds: i64, nanos: i32, want: &str) -> anyhow::Result<()> {
        let ts = Timestamp::new(seconds, nanos)?;
        let got = serde_json::to_value(ts)?;
        assert_eq!(got, json!(want));
        let back = serde_json::from_value::<Timestamp>(got)?;
        assert_eq!(back, ts);
        Ok(())
    }

    #[test_case(Timestamp::MAX_SECONDS + 1, 0)]
    #[test_case(Timestamp::MIN_SECONDS - 1, 0)]
    #[test_case(0, -1)]
    #[test_case(0, 1_000_000_000)]
    fn out_of_range(seconds: i64, nanos: i32) {
        let got = Timestamp::new(seconds, nanos);
        assert_eq!(got, Err(TimestampError::OutOfRange));
    }

    #[test]
    fn parse_error() {
        let got = serde_json::from_value::<Timestamp>(json!("not a timestamp"));
        assert!(got.is_err(), "{got:?}");
    }
}
