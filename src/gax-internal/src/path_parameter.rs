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

//! Handling of missing and mismatched path parameters.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required. But for complicated reasons they may appear in optional fields.
//! The transport returns an error when the parameter is missing, or when its
//! value does not match the path template.

/// Checks if a string field matches a given path pattern.
///
/// If it matches, it returns `Some(value)`. (Having a composable function
/// simplifies the calling code).
///
/// # Example
/// ```
/// # use vertexai_gax_internal::path_parameter::try_match;
/// let p = try_match("projects/my-project/locations/us-central1", "projects/*/locations/*");
/// assert_eq!(p, Some("projects/my-project/locations/us-central1"));
/// ```
pub fn try_match<'a>(value: &'a str, pattern: &str) -> Option<&'a str> {
    crate::routing_parameter::matches_pattern(value, pattern).then_some(value)
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
    #[error("the value of parameter {name} ({value}) does not match the template {pattern}")]
    MismatchedParameter {
        name: String,
        value: String,
        pattern: String,
    },
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::invalid_argument(Error::MissingRequiredParameter(name.to_string()))
}

pub fn mismatched(name: &str, value: &str, pattern: &str) -> gax::error::Error {
    gax::error::Error::invalid_argument(Error::MismatchedParameter {
        name: name.to_string(),
        value: value.to_string(),
        pattern: pattern.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case("projects/my-project", Some("projects/my-project"))]
    #[test_case("", None)]
    #[test_case("projects/", None)]
    #[test_case("projects/my-project/", None)]
    #[test_case("projects/my-project/locations/my-location", None)]
    fn try_match(input: &str, expected: Option<&str>) {
        let p = super::try_match(input, "projects/*");
        assert_eq!(p, expected);
    }

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        assert!(e.is_invalid_argument(), "{e:?}");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }

    #[test]
    fn mismatched() {
        let e = super::mismatched("parent", "folders/f", "projects/*/locations/*");
        assert!(e.is_invalid_argument(), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MismatchedParameter { name, .. }) if name == "parent"),
            "{e:?}"
        );
    }
}
