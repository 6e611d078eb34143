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

//! Maps requests to HTTP requests using the method's HTTP binding.
//!
//! The request is first converted to its JSON representation. Path template
//! variables are replaced with the value of the corresponding fields. The
//! body is either the full request, a single field, or empty. Any remaining
//! fields are sent as query parameters.

use crate::descriptor::{Body, HttpRule};
use crate::path_parameter;
use crate::query_parameter::{ALT_PARAMETER, flatten_fields};
use gax::Result;
use gax::error::Error;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::{Map, Value};

// Path segments separators are preserved for multi-segment variables.
const PATH_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: http::Method,
    /// The path, relative to the endpoint.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Transcodes `request` using `rule`.
pub fn transcode(rule: &HttpRule, request: &Value) -> Result<HttpRequest> {
    let Value::Object(fields) = request else {
        return Err(Error::ser("requests must serialize to JSON objects"));
    };
    let mut rest = fields.clone();
    let mut path = String::new();
    let mut remains = rule.path_template;
    while let Some(open) = remains.find('{') {
        path.push_str(&remains[..open]);
        let close = remains[open..]
            .find('}')
            .map(|i| open + i)
            .ok_or_else(|| Error::ser(format!("malformed path template {}", rule.path_template)))?;
        let variable = &remains[open + 1..close];
        let (field, pattern) = variable.split_once('=').unwrap_or((variable, "*"));
        let value = lookup(fields, field)
            .and_then(as_path_value)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| path_parameter::missing(field))?;
        let value = path_parameter::try_match(&value, pattern)
            .ok_or_else(|| path_parameter::mismatched(field, &value, pattern))?;
        path.extend(utf8_percent_encode(value, PATH_VALUE));
        remove(&mut rest, field);
        remains = &remains[close + 1..];
    }
    path.push_str(remains);

    let (body, mut query) = match rule.body {
        Body::None => (None, flatten_fields(&rest)),
        Body::All => (Some(Value::Object(rest)), Vec::new()),
        Body::Field(name) => {
            let key = to_camel_case(name);
            let body = fields
                .get(&key)
                .cloned()
                .unwrap_or_else(|| Value::Object(Map::new()));
            rest.remove(&key);
            (Some(body), flatten_fields(&rest))
        }
    };
    query.push((ALT_PARAMETER.0.to_string(), ALT_PARAMETER.1.to_string()));

    Ok(HttpRequest {
        method: rule.verb.clone(),
        path,
        query,
        body,
    })
}

/// Finds the value of a (possibly nested) field in the JSON representation of
/// a request.
///
/// Field names use the protobuf names (`snake_case`), the JSON representation
/// uses `camelCase`.
pub fn lookup<'a>(fields: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    let mut segments = field.split('.');
    let first = segments.next()?;
    segments.try_fold(fields.get(&to_camel_case(first))?, |value, name| {
        value.as_object()?.get(&to_camel_case(name))
    })
}

fn remove(fields: &mut Map<String, Value>, field: &str) {
    match field.rsplit_once('.') {
        None => {
            fields.remove(&to_camel_case(field));
        }
        Some((parent, name)) => {
            let parent = parent
                .split('.')
                .try_fold(&mut *fields, |object, name| {
                    object.get_mut(&to_camel_case(name))?.as_object_mut()
                });
            if let Some(object) = parent {
                object.remove(&to_camel_case(name));
            }
        }
    }
}

fn as_path_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Converts a protobuf field name to its JSON name.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        match c {
            '_' => upper = true,
            c if upper => {
                out.extend(c.to_uppercase());
                upper = false;
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    const LIST: HttpRule = HttpRule {
        verb: http::Method::GET,
        path_template: "/v1/{parent=projects/*/locations/*}/datasets",
        body: Body::None,
    };
    const CREATE: HttpRule = HttpRule {
        verb: http::Method::POST,
        path_template: "/v1/{parent=projects/*/locations/*}/datasets",
        body: Body::Field("dataset"),
    };
    const UPDATE: HttpRule = HttpRule {
        verb: http::Method::PATCH,
        path_template: "/v1/{dataset.name=projects/*/locations/*/datasets/*}",
        body: Body::Field("dataset"),
    };
    const IMPORT: HttpRule = HttpRule {
        verb: http::Method::POST,
        path_template: "/v1/{name=projects/*/locations/*/datasets/*}:import",
        body: Body::All,
    };

    fn alt() -> (String, String) {
        (ALT_PARAMETER.0.to_string(), ALT_PARAMETER.1.to_string())
    }

    #[test_case("page_size", "pageSize")]
    #[test_case("name", "name")]
    #[test_case("rag_file_chunking_config", "ragFileChunkingConfig")]
    fn camel_case(input: &str, want: &str) {
        assert_eq!(to_camel_case(input), want);
    }

    #[test]
    fn list() -> anyhow::Result<()> {
        let request = json!({
            "parent": "projects/p/locations/us-central1",
            "pageSize": 10,
            "pageToken": "",
            "filter": "labels.a=b",
        });
        let got = transcode(&LIST, &request)?;
        assert_eq!(got.method, http::Method::GET);
        assert_eq!(got.path, "/v1/projects/p/locations/us-central1/datasets");
        assert_eq!(
            got.query,
            vec![
                ("filter".to_string(), "labels.a=b".to_string()),
                ("pageSize".to_string(), "10".to_string()),
                alt(),
            ]
        );
        assert_eq!(got.body, None);
        Ok(())
    }

    #[test]
    fn body_field() -> anyhow::Result<()> {
        let request = json!({
            "parent": "projects/p/locations/l",
            "dataset": {"displayName": "d"},
        });
        let got = transcode(&CREATE, &request)?;
        assert_eq!(got.path, "/v1/projects/p/locations/l/datasets");
        assert_eq!(got.query, vec![alt()]);
        assert_eq!(got.body, Some(json!({"displayName": "d"})));
        Ok(())
    }

    #[test]
    fn nested_path_field() -> anyhow::Result<()> {
        let request = json!({
            "dataset": {"name": "projects/p/locations/l/datasets/d", "displayName": "d"},
            "updateMask": "displayName,labels",
        });
        let got = transcode(&UPDATE, &request)?;
        assert_eq!(got.path, "/v1/projects/p/locations/l/datasets/d");
        assert_eq!(
            got.query,
            vec![
                ("updateMask".to_string(), "displayName,labels".to_string()),
                alt()
            ]
        );
        assert_eq!(
            got.body,
            Some(json!({"name": "projects/p/locations/l/datasets/d", "displayName": "d"}))
        );
        Ok(())
    }

    #[test]
    fn body_all() -> anyhow::Result<()> {
        let request = json!({
            "name": "projects/p/locations/l/datasets/d",
            "importConfigs": [{"importSchemaUri": "gs://b/s.yaml"}],
        });
        let got = transcode(&IMPORT, &request)?;
        assert_eq!(got.path, "/v1/projects/p/locations/l/datasets/d:import");
        assert_eq!(got.query, vec![alt()]);
        assert_eq!(
            got.body,
            Some(json!({"importConfigs": [{"importSchemaUri": "gs://b/s.yaml"}]}))
        );
        Ok(())
    }

    #[test]
    fn encodes_path_values() -> anyhow::Result<()> {
        let rule = HttpRule {
            verb: http::Method::GET,
            path_template: "/v1/{name}",
            body: Body::None,
        };
        let got = transcode(&rule, &json!({"name": "a b?c"}))?;
        assert_eq!(got.path, "/v1/a%20b%3Fc");
        Ok(())
    }

    #[test_case(json!({}); "missing")]
    #[test_case(json!({"parent": ""}); "empty")]
    #[test_case(json!({"parent": null}); "null")]
    fn missing_path_parameter(request: Value) {
        let err = transcode(&LIST, &request).unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        let source = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<path_parameter::Error>());
        assert!(
            matches!(source, Some(path_parameter::Error::MissingRequiredParameter(p)) if p == "parent"),
            "{err:?}"
        );
    }

    #[test]
    fn mismatched_path_parameter() {
        let request = json!({"parent": "folders/f"});
        let err = transcode(&LIST, &request).unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        let source = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<path_parameter::Error>());
        assert!(
            matches!(source, Some(path_parameter::Error::MismatchedParameter { .. })),
            "{err:?}"
        );
    }

    #[test]
    fn lookup_nested() {
        let request = json!({"dataset": {"name": "n", "metadataSchemaUri": "u"}});
        let Value::Object(fields) = request else {
            unreachable!("a JSON object");
        };
        assert_eq!(lookup(&fields, "dataset.name"), Some(&json!("n")));
        assert_eq!(
            lookup(&fields, "dataset.metadata_schema_uri"),
            Some(&json!("u"))
        );
        assert_eq!(lookup(&fields, "dataset.missing"), None);
        assert_eq!(lookup(&fields, "missing.name"), None);
    }
}
