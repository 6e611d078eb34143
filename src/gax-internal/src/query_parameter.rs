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

//! Flattens request fields into query parameters.
//!
//! Nested messages use dotted names (`a.b.c`), repeated fields produce one
//! parameter per element. Fields with default values are omitted, as they
//! would be in the JSON representation of the request.

use serde_json::Value;

/// The query parameter requesting JSON responses with integer enums.
pub const ALT_PARAMETER: (&str, &str) = ("$alt", "json;enum-encoding=int");

/// Appends the query parameters for `value`, named `name`, to `out`.
pub fn flatten(value: &Value, name: &str, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(object) => object
            .iter()
            .for_each(|(k, v)| flatten(v, &format!("{name}.{k}"), out)),
        Value::Array(array) => array.iter().for_each(|v| flatten_element(v, name, out)),
        Value::Null => {}
        Value::String(s) if s.is_empty() => {}
        Value::String(s) => out.push((name.to_string(), s.clone())),
        Value::Number(n) if n.as_f64() == Some(0.0) => {}
        Value::Number(n) => out.push((name.to_string(), n.to_string())),
        Value::Bool(false) => {}
        Value::Bool(b) => out.push((name.to_string(), b.to_string())),
    }
}

/// Flattens all the fields of a JSON object.
pub fn flatten_fields(object: &serde_json::Map<String, Value>) -> Vec<(String, String)> {
    let mut out = Vec::new();
    object.iter().for_each(|(k, v)| flatten(v, k, &mut out));
    out
}

// Elements of repeated fields are sent even if they have default values.
fn flatten_element(value: &Value, name: &str, out: &mut Vec<(String, String)>) {
    match value {
        Value::String(s) => out.push((name.to_string(), s.clone())),
        Value::Number(n) => out.push((name.to_string(), n.to_string())),
        Value::Bool(b) => out.push((name.to_string(), b.to_string())),
        v => flatten(v, name, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(value: Value, name: &str) -> Vec<(String, String)> {
        let mut out = Vec::new();
        flatten(&value, name, &mut out);
        out
    }

    fn want(p: &[(&str, &str)]) -> Vec<(String, String)> {
        p.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn object() {
        let value = json!({
            "a": 123,
            "b": [123, 0, 789],
            "c": "123",
            "d": true,
            "e": {
                "f": "abc",
                "g": false,
                "h": {
                    "i": 42,
                }
            }
        });
        assert_eq!(
            pairs(value, "name"),
            want(&[
                ("name.a", "123"),
                ("name.b", "123"),
                ("name.b", "0"),
                ("name.b", "789"),
                ("name.c", "123"),
                ("name.d", "true"),
                ("name.e.f", "abc"),
                ("name.e.h.i", "42"),
            ])
        );
    }

    #[test]
    fn defaults_are_skipped() {
        let value = json!({
            "pageSize": 0,
            "pageToken": "",
            "filter": "display_name=\"d\"",
            "readMask": null,
            "returnPartialSuccess": false,
        });
        let Value::Object(object) = value else {
            unreachable!("a JSON object");
        };
        assert_eq!(
            flatten_fields(&object),
            want(&[("filter", "display_name=\"d\"")])
        );
    }

    #[test]
    fn scalars() {
        assert_eq!(pairs(json!("abc123"), "name"), want(&[("name", "abc123")]));
        assert_eq!(pairs(json!(7.5), "name"), want(&[("name", "7.5")]));
        assert_eq!(pairs(json!(true), "name"), want(&[("name", "true")]));
        assert_eq!(pairs(json!(null), "name"), want(&[]));
    }

    #[test]
    fn array() {
        assert_eq!(
            pairs(json!(["a", "", "c"]), "name"),
            want(&[("name", "a"), ("name", ""), ("name", "c")])
        );
    }
}
