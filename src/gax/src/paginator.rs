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

//! Pagers for list RPCs, as defined by [AIP-4233].
//!
//! A list RPC returns one page of results and a `next_page_token`. The
//! [Pager] starts with the first response already in hand, and fetches the
//! following pages on demand, re-issuing the RPC with the page token set to
//! the previous `next_page_token`. An empty token marks the last page.
//!
//! [AIP-4233]: https://google.aip.dev/client-libraries/4233

use futures::stream::{self, Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Describes a response that carries a page of results.
pub trait PageableResponse {
    type PageItem: Send;

    /// Consumes the response and returns its items.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token for the next page, empty on the last page.
    fn next_page_token(&self) -> String;
}

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;
type FetchFn<T, E> = Arc<dyn Fn(String) -> BoxFuture<Result<T, E>> + Send + Sync>;

#[derive(Clone, Debug, PartialEq)]
enum State {
    // The first page is in hand, but the caller has not seen it.
    First,
    // The caller has seen a page, and the next one starts at this token.
    Next(String),
    Done,
}

impl State {
    fn after<T: PageableResponse>(page: &T) -> Self {
        let token = page.next_page_token();
        if token.is_empty() {
            State::Done
        } else {
            State::Next(token)
        }
    }
}

/// A forward-only, single-pass view over the pages of a list RPC.
///
/// # Example
/// ```
/// # use vertexai_gax::paginator::*;
/// # #[derive(Clone)] struct Response { items: Vec<i32>, next_page_token: String }
/// # impl PageableResponse for Response {
/// #     type PageItem = i32;
/// #     fn items(self) -> Vec<i32> { self.items }
/// #     fn next_page_token(&self) -> String { self.next_page_token.clone() }
/// # }
/// # tokio_test::block_on(async {
/// let first = Response { items: vec![1, 2], next_page_token: String::new() };
/// let mut pager = Pager::new(first, |_token| async {
///     Err::<Response, String>("unused".to_string())
/// });
/// assert_eq!(pager.current().items, vec![1, 2]);
/// while let Some(page) = pager.next_page().await {
///     let page = page?;
///     println!("{:?}", page.items);
/// }
/// # Ok::<(), String>(()) });
/// ```
pub struct Pager<T, E> {
    current: T,
    state: State,
    fetch: FetchFn<T, E>,
}

impl<T, E> Pager<T, E>
where
    T: PageableResponse + Clone + Send + 'static,
    E: Send + 'static,
{
    /// Creates a pager from the first response and a function to fetch the
    /// page starting at a given token.
    pub fn new<F, Fut>(first: T, fetch: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            current: first,
            state: State::First,
            fetch: Arc::new(move |token| Box::pin(fetch(token))),
        }
    }

    /// The latest page observed by this pager.
    ///
    /// Before the first call to [next_page][Self::next_page] this is the
    /// response of the initial RPC.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Returns the next page, `None` after the last page or an error.
    ///
    /// The first call returns the response of the initial RPC, without making
    /// any requests. Each following call issues one request.
    pub async fn next_page(&mut self) -> Option<Result<T, E>> {
        match std::mem::replace(&mut self.state, State::Done) {
            State::Done => None,
            State::First => {
                self.state = State::after(&self.current);
                Some(Ok(self.current.clone()))
            }
            State::Next(token) => {
                tracing::debug!(page_token = %token, "fetching next page");
                match (self.fetch)(token).await {
                    Ok(page) => {
                        self.state = State::after(&page);
                        self.current = page.clone();
                        Some(Ok(page))
                    }
                    Err(e) => Some(Err(e)),
                }
            }
        }
    }

    /// Converts the pager into a stream of pages.
    pub fn by_page(self) -> Paginator<T, E> {
        let stream = stream::unfold(self, |mut pager| async move {
            pager.next_page().await.map(|page| (page, pager))
        });
        Paginator {
            stream: Box::pin(stream),
        }
    }

    /// Converts the pager into a stream of items, flattening the pages.
    pub fn by_item(self) -> ItemPaginator<T, E> {
        let stream = self.by_page().flat_map(|page| match page {
            Ok(p) => stream::iter(p.items().into_iter().map(Ok).collect::<Vec<_>>()),
            Err(e) => stream::iter(vec![Err(e)]),
        });
        ItemPaginator {
            stream: Box::pin(stream),
        }
    }
}

impl<T: std::fmt::Debug, E> std::fmt::Debug for Pager<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("current", &self.current)
            .field("state", &self.state)
            .finish()
    }
}

/// A stream of pages returned by [Pager::by_page].
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

impl<T, E> Paginator<T, E> {
    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A stream of items returned by [Pager::by_item].
#[pin_project]
pub struct ItemPaginator<T: PageableResponse, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T::PageItem, E>> + Send>>,
}

impl<T: PageableResponse, E> ItemPaginator<T, E> {
    /// Returns the next item.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T: PageableResponse, E> Stream for ItemPaginator<T, E> {
    type Item = Result<T::PageItem, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}
