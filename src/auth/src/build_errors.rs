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

//! Errors created while building credentials.

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for [Credentials] builders.
///
/// [Credentials]: super::credentials::Credentials
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// The credentials file could not be read.
    pub fn is_loading(&self) -> bool {
        matches!(self.0, ErrorKind::Loading { .. })
    }

    /// The credentials are not valid JSON, or miss required fields.
    pub fn is_parsing(&self) -> bool {
        matches!(self.0, ErrorKind::Parsing(_))
    }

    /// The `type` field names a credentials type this crate cannot build.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self.0, ErrorKind::UnknownType(_))
    }

    pub(crate) fn loading<O, T>(origin: O, source: T) -> Error
    where
        O: std::fmt::Display,
        T: Into<BoxError>,
    {
        Error(ErrorKind::Loading {
            origin: origin.to_string(),
            source: source.into(),
        })
    }

    pub(crate) fn parsing<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Parsing(source.into()))
    }

    pub(crate) fn unknown_type<T: Into<String>>(credentials_type: T) -> Error {
        Error(ErrorKind::UnknownType(credentials_type.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("cannot load credentials from {origin}: {source}")]
    Loading {
        origin: String,
        #[source]
        source: BoxError,
    },
    #[error("invalid credentials JSON: {0}")]
    Parsing(#[source] BoxError),
    #[error(
        "unsupported credentials type `{0}`, expected `authorized_user` or `service_account`"
    )]
    UnknownType(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn loading() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = Error::loading("/tmp/adc.json", io);
        assert!(error.is_loading(), "{error:?}");
        assert!(!error.is_parsing(), "{error:?}");
        let msg = error.to_string();
        assert!(msg.contains("/tmp/adc.json"), "{msg}");
        assert!(msg.contains("no such file"), "{msg}");
        assert!(error.source().is_some(), "{error:?}");
    }

    #[test]
    fn parsing() {
        let error = Error::parsing("missing `client_email`");
        assert!(error.is_parsing(), "{error:?}");
        assert!(error.to_string().contains("client_email"), "{error}");
    }

    #[test]
    fn unknown_type() {
        let error = Error::unknown_type("external_account");
        assert!(error.is_unknown_type(), "{error:?}");
        assert!(error.to_string().contains("`external_account`"), "{error}");
        assert!(error.source().is_none(), "{error:?}");
    }
}
