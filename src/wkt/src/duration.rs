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

/// Well-known duration representation.
///
/// A signed, fixed-length span of time represented as a count of seconds and
/// fractions of seconds at nanosecond resolution.
///
/// # JSON Mapping
///
/// In JSON format, the Duration type is encoded as a string. The string ends
/// in the suffix `s` (indicating seconds) and is preceded by the number of
/// seconds, with nanoseconds expressed as fractional seconds. For example,
/// 3 seconds with 0 nanoseconds is `"3s"`, and 3 seconds with 1 nanosecond is
/// `"3.000000001s"`.
///
/// # Examples
/// ```
/// # use vertexai_wkt::{Duration, DurationError};
/// let d = Duration::try_from("12.34s")?;
/// assert_eq!(d.seconds(), 12);
/// assert_eq!(d.nanos(), 340_000_000);
/// # Ok::<(), DurationError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, prost::Message)]
pub struct Duration {
    #[prost(int64, tag = "1")]
    seconds: i64,
    #[prost(int32, tag = "2")]
    nanos: i32,
}

/// Represent failures in converting or creating [Duration] instances.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum DurationError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// The sign of the seconds and nanoseconds components differ.
    #[error("if seconds and nanoseconds are not zero, they must have the same sign")]
    MismatchedSigns,

    /// There was a problem deserializing a duration.
    #[error("cannot deserialize the duration: {0}")]
    Deserialize(String),
}

type Error = DurationError;

impl Duration {
    const NS: i32 = 1_000_000_000;
    /// About 10,000 years.
    const MAX_SECONDS: i64 = 315_576_000_000;
    const MIN_SECONDS: i64 = -Self::MAX_SECONDS;

    /// Creates a [Duration] from the seconds and nanoseconds components.
    ///
    /// Fails if either component is out of range, or if the signs of
    /// non-zero components differ.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(-Self::NS + 1..Self::NS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        if (seconds != 0 && nanos != 0) && ((seconds < 0) != (nanos < 0)) {
            return Err(Error::MismatchedSigns);
        }
        Ok(Self { seconds, nanos })
    }

    /// The seconds component.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The sub-second component.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

impl crate::message::Message for Duration {
    fn typename() -> &'static str {
        "google.protobuf.Duration"
    }
}

impl From<Duration> for String {
    fn from(duration: Duration) -> String {
        let sign = if duration.seconds < 0 || duration.nanos < 0 {
            "-"
        } else {
            ""
        };
        if duration.nanos == 0 {
            return format!("{sign}{}s", duration.seconds.abs());
        }
        let ns = format!("{:09}", duration.nanos.abs());
        format!(
            "{sign}{}.{}s",
            duration.seconds.abs(),
            ns.trim_end_matches('0')
        )
    }
}

impl TryFrom<&str> for Duration {
    type Error = DurationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let digits = value
            .strip_suffix('s')
            .ok_or_else(|| Error::Deserialize("missing trailing 's'".into()))?;
        let (sign, digits) = match digits.strip_prefix('-') {
            Some(stripped) => (-1, stripped),
            None => (1, digits),
        };
        let (seconds, nanos) = match digits.split_once('.') {
            Some((s, n)) => (s, Some(n)),
            None => (digits, None),
        };
        let seconds = seconds
            .parse::<i64>()
            .map_err(|e| Error::Deserialize(e.to_string()))?;
        let nanos = match nanos {
            None => 0,
            Some(n) if n.is_empty() || n.len() > 9 => {
                return Err(Error::Deserialize(format!("invalid fraction in {value}")));
            }
            Some(n) => format!("{n:0<9}")
                .parse::<i32>()
                .map_err(|e| Error::Deserialize(e.to_string()))?,
        };
        Duration::new(sign * seconds, sign as i32 * nanos)
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = DurationError;

    fn try_from(value: std::time::Duration) -> Result<Self, Self::Error> {
        let seconds = i64::try_from(value.as_secs()).map_err(|_| Error::OutOfRange)?;
        Self::new(seconds, value.subsec_nanos() as i32)
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = DurationError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        if value.seconds < 0 || value.nanos < 0 {
            return Err(Error::OutOfRange);
        }
        Ok(Self::new(value.seconds as u64, value.nanos as u32))
    }
}

impl serde::ser::Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&String::from(*self))
    }
}

impl<'de> serde::de::Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        use serde::de::Error as _;
        let value = String::deserialize(deserializer)?;
        Duration::try_from(value.as_str()).map_err(D::Error::custom)
    }
}
