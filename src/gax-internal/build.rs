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

// Exposes the compiler version to `api_header.rs` as `VERTEXAI_RUSTC_VERSION`.
fn main() {
    println!("cargo::rerun-if-changed=build.rs");
    let version = match rustc_version::version() {
        Ok(v) => format!("{}.{}.{}", v.major, v.minor, v.patch),
        Err(e) => {
            println!("cargo::warning=cannot determine the rustc version: {e}");
            "unknown".to_string()
        }
    };
    println!("cargo::rustc-env=VERTEXAI_RUSTC_VERSION={version}");
}
