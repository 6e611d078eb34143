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

//! Errors returned while creating or using access tokens.

use http::StatusCode;
use std::error::Error;

pub use gax::error::CredentialsError;

pub(crate) fn is_retryable(c: StatusCode) -> bool {
    match c {
        // The request may be fine, the token endpoint is having problems.
        StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::REQUEST_TIMEOUT
        | StatusCode::TOO_MANY_REQUESTS => true,
        _ => false,
    }
}

pub(crate) fn retryable<T: Error + Send + Sync + 'static>(source: T) -> CredentialsError {
    CredentialsError::from_source(true, source)
}

pub(crate) fn non_retryable<T: Error + Send + Sync + 'static>(source: T) -> CredentialsError {
    CredentialsError::from_source(false, source)
}

pub(crate) fn non_retryable_from_str<T: Into<String>>(message: T) -> CredentialsError {
    CredentialsError::from_msg(false, message)
}

/// Converts a failed HTTP response from a token endpoint into an error.
pub(crate) async fn from_http_response(
    response: reqwest::Response,
    context: &str,
) -> CredentialsError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("[cannot read response body: {e}]"));
    CredentialsError::from_msg(
        is_retryable(status),
        format!("{context}, status={status}, body=<{body}>"),
    )
}

/// Converts a failed HTTP request into an error.
///
/// Failures to send the request are transient, the token endpoint may be
/// temporarily unreachable.
pub(crate) fn from_http_error(err: reqwest::Error, context: &str) -> CredentialsError {
    let transient = err.is_connect() || err.is_timeout() || err.is_request();
    CredentialsError::new(transient, context, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(StatusCode::INTERNAL_SERVER_ERROR)]
    #[test_case(StatusCode::SERVICE_UNAVAILABLE)]
    #[test_case(StatusCode::REQUEST_TIMEOUT)]
    #[test_case(StatusCode::TOO_MANY_REQUESTS)]
    fn retryable_codes(c: StatusCode) {
        assert!(is_retryable(c));
    }

    #[test_case(StatusCode::NOT_FOUND)]
    #[test_case(StatusCode::UNAUTHORIZED)]
    #[test_case(StatusCode::BAD_REQUEST)]
    #[test_case(StatusCode::BAD_GATEWAY)]
    #[test_case(StatusCode::PRECONDITION_FAILED)]
    fn non_retryable_codes(c: StatusCode) {
        assert!(!is_retryable(c));
    }

    #[test]
    fn helpers() {
        let e = retryable(std::io::Error::other("try-again"));
        assert!(e.is_transient(), "{e:?}");
        let e = non_retryable(std::io::Error::other("bad-key"));
        assert!(!e.is_transient(), "{e:?}");
        let e = non_retryable_from_str("bad-key");
        assert!(!e.is_transient(), "{e:?}");
        assert!(e.to_string().contains("bad-key"), "{e}");
    }
}
