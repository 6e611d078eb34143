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

//! Hooks that observe or modify requests and responses.
//!
//! Each RPC may have an [Interceptor] with up to three hooks:
//!
//! * `pre`: receives the request and the request metadata before they are
//!   sent, and returns the (possibly modified) values.
//! * `post`: receives the response and returns the (possibly modified)
//!   response.
//! * `post_with_metadata`: receives the response and the response metadata.
//!
//! Hooks run in the order `pre`, transport, `post`, `post_with_metadata`.
//! Unset hooks are no-ops.
//!
//! Applications rarely use these types directly, each service defines typed
//! builders with one setter per RPC.

use http::HeaderMap;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// The hook invoked before a request is sent.
pub type PreHook<Req> = Arc<dyn Fn(Req, HeaderMap) -> (Req, HeaderMap) + Send + Sync>;

/// The hook invoked with each successful response.
pub type PostHook<Resp> = Arc<dyn Fn(Resp) -> Resp + Send + Sync>;

/// The hook invoked with each successful response and its metadata.
pub type PostWithMetadataHook<Resp> =
    Arc<dyn Fn(Resp, HeaderMap) -> (Resp, HeaderMap) + Send + Sync>;

/// The hooks for a single RPC.
pub struct Interceptor<Req, Resp> {
    pre: Option<PreHook<Req>>,
    post: Option<PostHook<Resp>>,
    post_with_metadata: Option<PostWithMetadataHook<Resp>>,
}

impl<Req, Resp> Interceptor<Req, Resp> {
    pub fn new() -> Self {
        Self {
            pre: None,
            post: None,
            post_with_metadata: None,
        }
    }

    pub fn with_pre<F>(mut self, f: F) -> Self
    where
        F: Fn(Req, HeaderMap) -> (Req, HeaderMap) + Send + Sync + 'static,
    {
        self.pre = Some(Arc::new(f));
        self
    }

    pub fn with_post<F>(mut self, f: F) -> Self
    where
        F: Fn(Resp) -> Resp + Send + Sync + 'static,
    {
        self.post = Some(Arc::new(f));
        self
    }

    pub fn with_post_with_metadata<F>(mut self, f: F) -> Self
    where
        F: Fn(Resp, HeaderMap) -> (Resp, HeaderMap) + Send + Sync + 'static,
    {
        self.post_with_metadata = Some(Arc::new(f));
        self
    }

    /// Runs the `pre` hook, if any.
    pub fn before(&self, request: Req, metadata: HeaderMap) -> (Req, HeaderMap) {
        match &self.pre {
            Some(f) => f(request, metadata),
            None => (request, metadata),
        }
    }

    /// Runs the `post` hook and then the `post_with_metadata` hook.
    pub fn after(&self, response: Resp, metadata: HeaderMap) -> (Resp, HeaderMap) {
        let response = match &self.post {
            Some(f) => f(response),
            None => response,
        };
        match &self.post_with_metadata {
            Some(f) => f(response, metadata),
            None => (response, metadata),
        }
    }
}

impl<Req, Resp> Default for Interceptor<Req, Resp> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, Resp> Clone for Interceptor<Req, Resp> {
    fn clone(&self) -> Self {
        Self {
            pre: self.pre.clone(),
            post: self.post.clone(),
            post_with_metadata: self.post_with_metadata.clone(),
        }
    }
}

impl<Req, Resp> std::fmt::Debug for Interceptor<Req, Resp> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interceptor")
            .field("pre", &self.pre.is_some())
            .field("post", &self.post.is_some())
            .field("post_with_metadata", &self.post_with_metadata.is_some())
            .finish()
    }
}

/// The interceptors for all the RPCs in a client, keyed by method name.
///
/// # Example
/// ```
/// # use vertexai_gax::interceptor::*;
/// let mut interceptors = Interceptors::default();
/// interceptors.insert(
///     "GetThing",
///     Interceptor::<String, String>::new().with_post(|r| format!("{r}!")),
/// );
/// let hooks = interceptors.get::<String, String>("GetThing").unwrap();
/// let (response, _) = hooks.after("hello".to_string(), http::HeaderMap::new());
/// assert_eq!(response, "hello!");
/// ```
#[derive(Clone, Default)]
pub struct Interceptors {
    hooks: HashMap<&'static str, Arc<dyn Any + Send + Sync>>,
}

impl Interceptors {
    /// Sets the hooks for `method`, replacing any previous value.
    pub fn insert<Req, Resp>(&mut self, method: &'static str, interceptor: Interceptor<Req, Resp>)
    where
        Req: 'static,
        Resp: 'static,
    {
        self.hooks.insert(method, Arc::new(interceptor));
    }

    /// Gets the hooks for `method`.
    ///
    /// Returns `None` if there are no hooks for `method`, or they were
    /// registered with different request or response types.
    pub fn get<Req, Resp>(&self, method: &str) -> Option<&Interceptor<Req, Resp>>
    where
        Req: 'static,
        Resp: 'static,
    {
        self.hooks
            .get(method)
            .and_then(|h| h.downcast_ref::<Interceptor<Req, Resp>>())
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl std::fmt::Debug for Interceptors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut methods = self.hooks.keys().collect::<Vec<_>>();
        methods.sort();
        f.debug_struct("Interceptors")
            .field("methods", &methods)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn empty_hooks_are_noops() {
        let i = Interceptor::<String, i32>::new();
        let (req, md) = i.before("req".to_string(), HeaderMap::new());
        assert_eq!(req, "req");
        assert!(md.is_empty());
        let (resp, _) = i.after(42, HeaderMap::new());
        assert_eq!(resp, 42);
    }

    #[test]
    fn hooks_run_in_order() {
        let i = Interceptor::<String, String>::new()
            .with_pre(|req, mut md| {
                md.insert("x-test", HeaderValue::from_static("pre"));
                (format!("{req}+pre"), md)
            })
            .with_post(|resp| format!("{resp}+post"))
            .with_post_with_metadata(|resp, md| (format!("{resp}+md"), md));
        let (req, md) = i.before("req".to_string(), HeaderMap::new());
        assert_eq!(req, "req+pre");
        assert_eq!(md.get("x-test").map(|v| v.as_bytes()), Some(b"pre".as_slice()));
        let (resp, _) = i.after("resp".to_string(), HeaderMap::new());
        assert_eq!(resp, "resp+post+md");
    }

    #[test]
    fn registry_is_typed() {
        let mut r = Interceptors::default();
        assert!(r.is_empty());
        r.insert("A", Interceptor::<String, String>::new());
        assert!(r.get::<String, String>("A").is_some());
        assert!(r.get::<i32, String>("A").is_none());
        assert!(r.get::<String, String>("B").is_none());
        let fmt = format!("{r:?}");
        assert!(fmt.contains("\"A\""), "{fmt}");
    }
}
