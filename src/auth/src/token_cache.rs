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

use crate::Result;
use crate::token::{Token, TokenProvider};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Notify};
use tokio::time::Instant;

// Tokens are refreshed slightly before they expire, so requests in flight do
// not carry an expired token.
const EXPIRATION_MARGIN: Duration = Duration::from_secs(10);

/// Caches the token returned by a [TokenProvider], refreshing it on expiry.
///
/// At most one refresh is in progress at any time. Concurrent callers wait for
/// the ongoing refresh and share its result.
#[derive(Debug)]
pub(crate) struct TokenCache<T>
where
    T: TokenProvider,
{
    // The cached token, or `None` before the first refresh.
    token: Arc<Mutex<Option<Result<Token>>>>,
    // Held while a refresh is running.
    refresh_in_progress: Arc<Mutex<()>>,
    refresh_notify: Arc<Notify>,
    inner: Arc<T>,
}

fn needs_refresh(token: &Option<Result<Token>>) -> bool {
    match token {
        Some(Ok(t)) => t
            .expires_at
            .is_some_and(|e| e <= Instant::now() + EXPIRATION_MARGIN),
        Some(Err(_)) | None => true,
    }
}

impl<T: TokenProvider> Clone for TokenCache<T> {
    fn clone(&self) -> TokenCache<T> {
        TokenCache {
            token: self.token.clone(),
            refresh_in_progress: self.refresh_in_progress.clone(),
            refresh_notify: self.refresh_notify.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<T: TokenProvider> TokenCache<T> {
    pub fn new(inner: T) -> TokenCache<T> {
        TokenCache {
            token: Arc::new(Mutex::new(None)),
            refresh_in_progress: Arc::new(Mutex::new(())),
            refresh_notify: Arc::new(Notify::new()),
            inner: Arc::new(inner),
        }
    }

    async fn current(&self) -> Option<Result<Token>> {
        self.token.lock().await.clone()
    }

    async fn refresh(&self) -> Result<Token> {
        tracing::debug!("refreshing access token");
        let token = self.inner.token().await;
        if let Err(e) = &token {
            tracing::debug!("access token refresh failed: {e}");
        }
        *self.token.lock().await = Some(token.clone());
        token
    }
}

#[async_trait::async_trait]
impl<T: TokenProvider + 'static> TokenProvider for TokenCache<T> {
    async fn token(&self) -> Result<Token> {
        let current = self.current().await;
        if !needs_refresh(&current) {
            if let Some(token) = current {
                return token;
            }
        }

        // Register interest before checking for a refresh, otherwise the
        // notification may be missed.
        let notified = self.refresh_notify.notified();
        match self.refresh_in_progress.try_lock() {
            Ok(guard) => {
                let token = self.refresh().await;
                drop(guard);
                self.refresh_notify.notify_waiters();
                token
            }
            Err(_) => {
                notified.await;
                match self.current().await {
                    Some(token) => token,
                    None => self.refresh().await,
                }
            }
        }
    }
}
