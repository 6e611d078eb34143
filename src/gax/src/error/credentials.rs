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

use std::error::Error;
use std::sync::Arc;

/// Represents an error creating or using credentials.
///
/// The client libraries may experience problems creating credentials and/or
/// using them. An example of problems creating credentials may be a badly
/// formatted or missing key file. An example of problems using credentials
/// may be a temporary failure to retrieve or create access tokens.
///
/// # Example
/// ```
/// # use vertexai_gax::error::CredentialsError;
/// let err = CredentialsError::from_msg(
///     true, "simulated transient error while trying to create credentials");
/// assert!(err.is_transient());
/// assert!(format!("{err}").contains("simulated transient error"));
/// ```
#[derive(Clone, Debug)]
pub struct CredentialsError {
    is_transient: bool,
    message: Option<String>,
    source: Option<Arc<dyn Error + Send + Sync>>,
}

impl CredentialsError {
    /// Creates a new `CredentialsError` wrapping `source`.
    ///
    /// # Arguments
    /// * `is_transient` - if true, the operation may succeed in future attempts.
    /// * `source` - the underlying error that caused the auth failure.
    pub fn from_source<T: Error + Send + Sync + 'static>(is_transient: bool, source: T) -> Self {
        Self {
            is_transient,
            message: None,
            source: Some(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` with a message.
    ///
    /// # Arguments
    /// * `is_transient` - if true, the operation may succeed in future attempts.
    /// * `message` - a description of the auth failure.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        Self {
            is_transient,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Creates a new `CredentialsError` with a message and a source.
    pub fn new<M, T>(is_transient: bool, message: M, source: T) -> Self
    where
        M: Into<String>,
        T: Error + Send + Sync + 'static,
    {
        Self {
            is_transient,
            message: Some(message.into()),
            source: Some(Arc::new(source)),
        }
    }

    /// Returns `true` if the error is transient and may succeed in future
    /// attempts.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

impl std::error::Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn Error))
    }
}

const TRANSIENT_MSG: &str = "but future attempts may succeed";
const PERMANENT_MSG: &str = "and future attempts will not succeed";

impl std::fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = if self.is_transient {
            TRANSIENT_MSG
        } else {
            PERMANENT_MSG
        };
        match (&self.message, &self.source) {
            (Some(m), Some(s)) => write!(f, "{m} {msg}, source: {s}"),
            (Some(m), None) => write!(f, "{m} {msg}"),
            (None, Some(s)) => write!(f, "cannot create access token {msg}, source: {s}"),
            (None, None) => write!(f, "cannot create access token {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(true)]
    #[test_case(false)]
    fn from_msg(transient: bool) {
        let e = CredentialsError::from_msg(transient, "test-only");
        assert_eq!(e.is_transient(), transient);
        assert!(e.source().is_none(), "{e:?}");
        let fmt = e.to_string();
        assert!(fmt.contains("test-only"), "{fmt}");
        let want = if transient { TRANSIENT_MSG } else { PERMANENT_MSG };
        assert!(fmt.contains(want), "{fmt}");
    }

    #[test]
    fn from_source() {
        let source = std::io::Error::other("missing file");
        let e = CredentialsError::from_source(false, source);
        assert!(!e.is_transient());
        let got = e
            .source()
            .and_then(|s| s.downcast_ref::<std::io::Error>())
            .map(|s| s.to_string());
        assert_eq!(got.as_deref(), Some("missing file"));
    }

    #[test]
    fn new() {
        let e = CredentialsError::new(true, "reading key", std::io::Error::other("eof"));
        let fmt = e.to_string();
        assert!(fmt.contains("reading key"), "{fmt}");
        assert!(fmt.contains("eof"), "{fmt}");
    }
}
