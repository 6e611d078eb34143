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

//! Helper functions to match and format routing parameters.
//!
//! Routing parameters are sent in the `x-goog-request-params` header. The
//! value of the header is a `&`-separated list of `key=value` pairs, with the
//! values URL-encoded.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const X_GOOG_REQUEST_PARAMS: &str = "x-goog-request-params";

// Unreserved characters per RFC 3986, plus the path separator.
const ROUTING_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Find a routing parameter in `haystack` using the (decomposed) template.
///
/// # Example
/// ```
/// # use vertexai_gax_internal::routing_parameter::*;
/// let matching = find_matching(
///     "projects/p/locations/l/datasets/d",
///     &["projects/", "*", "/"],
///     &["locations/", "*"],
///     &["/datasets/", "**"]);
/// assert_eq!(matching, Some("locations/l"));
/// ```
///
/// # Parameters
/// - `haystack` - a string where to find the path template.
/// - `prefix` - the initial segments in the template that must match,
///   and are not included in the result.
/// - `matching` - the segments in the template that must match and **are**
///   included in the result.
/// - `suffix` - the trailing segments in the template that must match, and
///   are not include in the result.
pub fn find_matching<'h>(
    haystack: &'h str,
    prefix: &[&str],
    matching: &[&str],
    suffix: &[&str],
) -> Option<&'h str> {
    let mut remains = haystack;
    let mut start = 0_usize;
    let mut end = 0_usize;

    for needle in prefix {
        let count = match *needle {
            "*" => consume_single(remains),
            p => consume_literal(remains, p),
        }?;
        start += count;
        end += count;
        remains = &remains[count..];
    }
    for needle in matching {
        let count = consume(remains, needle)?;
        end += count;
        remains = &remains[count..];
    }
    for needle in suffix {
        let count = consume(remains, needle)?;
        remains = &remains[count..];
    }
    if !remains.is_empty() || start == end {
        return None;
    }
    Some(&haystack[start..end])
}

/// Splits a path pattern, such as `projects/*/locations/*`, into the segments
/// used by [find_matching].
///
/// # Example
/// ```
/// # use vertexai_gax_internal::routing_parameter::*;
/// assert_eq!(split_pattern("projects/*/locations/*"), vec!["projects/", "*", "/locations/", "*"]);
/// assert_eq!(split_pattern("*"), vec!["*"]);
/// ```
pub fn split_pattern(pattern: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut literal_start = 0_usize;
    let mut i = 0_usize;
    let bytes = pattern.as_bytes();
    while i < bytes.len() {
        if bytes[i] != b'*' {
            i += 1;
            continue;
        }
        if literal_start < i {
            segments.push(&pattern[literal_start..i]);
        }
        let width = if bytes.get(i + 1) == Some(&b'*') { 2 } else { 1 };
        segments.push(&pattern[i..i + width]);
        i += width;
        literal_start = i;
    }
    if literal_start < bytes.len() {
        segments.push(&pattern[literal_start..]);
    }
    segments
}

/// Returns true if `value` matches the path `pattern`.
pub fn matches_pattern(value: &str, pattern: &str) -> bool {
    find_matching(value, &[], &split_pattern(pattern), &[]).is_some()
}

/// Format a routing parameter key value pair, URL-encoding the value.
pub fn format((k, v): (&str, &str)) -> String {
    format!("{k}={}", utf8_percent_encode(v, ROUTING_VALUE))
}

/// Formats the value of the `x-goog-request-params` header.
///
/// Returns `None` if there are no parameters.
pub fn request_params<'a, I>(params: I) -> Option<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut i = params.into_iter().filter(|(_, v)| !v.is_empty());
    let s = i.next().map(format)?;
    Some(i.fold(s, |s, p| s + "&" + &format(p)))
}

fn consume(remains: &str, needle: &str) -> Option<usize> {
    match needle {
        "*" => consume_single(remains),
        "**" => consume_multi(remains),
        p => consume_literal(remains, p),
    }
}

fn consume_single(remains: &str) -> Option<usize> {
    let i = remains.find('/').unwrap_or(remains.len());
    (i != 0).then_some(i)
}

fn consume_multi(remains: &str) -> Option<usize> {
    let i = remains.len();
    (i != 0).then_some(i)
}

fn consume_literal(remains: &str, literal: &str) -> Option<usize> {
    remains.starts_with(literal).then_some(literal.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const RAG_FILE: &str = "projects/p/locations/us-central1/ragCorpora/c/ragFiles/f";

    #[test_case("", None; "empty")]
    #[test_case("projects/p/locations/l/datasets/d", Some("locations/l"); "success")]
    #[test_case("projects/p/locations/l/datasets/d/extra", Some("locations/l"); "multi-segment suffix")]
    #[test_case("extra/projects/p/locations/l/datasets/d", None; "too much prefix")]
    #[test_case("projects/p/locations//datasets/d", None; "empty match")]
    #[test_case("projects/p/l/datasets/d", None; "missing keyword")]
    #[test_case("projects/p/locations/l", None; "missing suffix")]
    #[test_case("locations/l/datasets/d", None; "missing prefix")]
    fn single_matches(input: &str, want: Option<&str>) {
        let got = find_matching(
            input,
            &["projects/", "*", "/"],
            &["locations/", "*"],
            &["/datasets/", "**"],
        );
        assert_eq!(got, want);
    }

    #[test_case("projects/p/locations/l", true)]
    #[test_case("projects/p/locations/l/", false)]
    #[test_case("projects/p/locations", false)]
    #[test_case("projects//locations/l", false)]
    #[test_case("folders/p/locations/l", false)]
    fn pattern(input: &str, want: bool) {
        assert_eq!(matches_pattern(input, "projects/*/locations/*"), want);
    }

    #[test]
    fn multi_segment_pattern() {
        assert!(matches_pattern(RAG_FILE, "projects/*/locations/*/**"));
        assert!(!matches_pattern("projects/p/locations/l", "projects/*/locations/*/**"));
    }

    #[test_case("", vec![]; "empty")]
    #[test_case("*", vec!["*"]; "single")]
    #[test_case("**", vec!["**"]; "multi")]
    #[test_case("projects/*", vec!["projects/", "*"]; "literal then single")]
    #[test_case("projects/*/locations/*/**", vec!["projects/", "*", "/locations/", "*", "/", "**"]; "nested")]
    fn split(input: &str, want: Vec<&str>) {
        assert_eq!(split_pattern(input), want);
    }

    #[test]
    fn format_encodes() {
        assert_eq!(format(("name", RAG_FILE)), format!("name={RAG_FILE}"));
        assert_eq!(
            format(("parent", "projects/my project/a&b=c")),
            "parent=projects/my%20project/a%26b%3Dc"
        );
    }

    #[test_case(vec![], None; "empty")]
    #[test_case(vec![("parent", "")], None; "empty value")]
    #[test_case(vec![("parent", "projects/p")], Some("parent=projects/p"); "single")]
    #[test_case(vec![("parent", "projects/p"), ("name", "")], Some("parent=projects/p"); "skip empty")]
    #[test_case(vec![("dataset.name", "projects/p/d"), ("location", "l")], Some("dataset.name=projects/p/d&location=l"); "multiple")]
    fn params(input: Vec<(&str, &str)>, want: Option<&str>) {
        assert_eq!(request_params(input).as_deref(), want);
    }
}
