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

pub mod anonymous;
pub mod api_key_credentials;
pub mod mds;
pub mod service_account;
pub mod user_account;

#[doc(hidden)]
pub mod testing;

use crate::build_errors::Error as BuilderError;
use crate::constants::{GOOGLE_APPLICATION_CREDENTIALS_VAR, GOOGLE_CLOUD_QUOTA_PROJECT_VAR};
use crate::{BuildResult, Result};
use http::HeaderMap;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Describes the principal behind a set of credentials.
///
/// This is a JSON object with (some of) the `credential_source`,
/// `credential_type` and `principal` keys. The clients append it, as a JSON
/// string, to the details of authorization errors.
pub type CredentialInfo = serde_json::Map<String, Value>;

/// An implementation of [crate::credentials::dynamic::CredentialsProvider].
///
/// Represents a [Credentials] used to obtain the auth request headers.
///
/// In general, [Credentials][credentials-link] are "digital object that provide
/// proof of identity", the archetype may be a username and password
/// combination, but a private RSA key may be a better example.
///
/// Modern authentication protocols do not send the credentials to
/// authenticate with a service. Even when sent over encrypted transports, the
/// credentials may be accidentally exposed via logging or may be captured if
/// there are errors in the transport encryption. Because the credentials are
/// often long-lived, that risk of exposure is also long-lived.
///
/// Instead, modern authentication protocols exchange the credentials for a
/// time-limited [Token][token-link], a digital object that shows the caller
/// was in possession of the credentials. Because tokens are time limited, risk
/// of misuse is also time limited. Tokens may be further restricted to only a
/// certain subset of the RPCs in the service, or even to specific resources,
/// or only when used from a given machine (virtual or not). Further limiting
/// the risks associated with any leaks of these tokens.
///
/// This struct also abstracts token sources that are not backed by a
/// specific digital object. The canonical example is the [Metadata Service].
/// This service is available in many Google Cloud environments, including
/// [Google Compute Engine], and [Google Kubernetes Engine].
///
/// [credentials-link]: https://cloud.google.com/docs/authentication#credentials
/// [token-link]: https://cloud.google.com/docs/authentication#token
/// [Metadata Service]: https://cloud.google.com/compute/docs/metadata/overview
/// [Google Compute Engine]: https://cloud.google.com/products/compute
/// [Google Kubernetes Engine]: https://cloud.google.com/kubernetes-engine
#[derive(Clone, Debug)]
pub struct Credentials {
    // We use an `Arc` to hold the inner implementation.
    //
    // Credentials may be shared across threads (`Send + Sync`), so an `Rc`
    // will not do.
    //
    // They also need to derive `Clone`, as the clients need to share the
    // credentials across multiple requests.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: dynamic::CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers used to authenticate a request.
    ///
    /// Credentials backed by access tokens refresh the token as needed. The
    /// refresh is serialized by the credentials, callers may invoke this
    /// function concurrently.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }

    /// The universe domain of these credentials, if they are bound to one.
    pub async fn universe_domain(&self) -> Option<String> {
        self.inner.universe_domain().await
    }

    /// Describes the principal behind these credentials, if known.
    pub fn credential_info(&self) -> Option<CredentialInfo> {
        self.inner.credential_info()
    }
}

pub mod dynamic {
    use super::{CredentialInfo, Result};
    use http::HeaderMap;

    /// A trait for credential types that can provide authentication headers.
    ///
    /// Applications may implement this trait to provide their own credentials,
    /// and wrap them with [Credentials][super::Credentials] using `From`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: std::fmt::Debug + Send + Sync {
        /// Returns the headers used to authenticate a request.
        async fn headers(&self) -> Result<HeaderMap>;

        /// The universe domain of these credentials, `None` if they work in
        /// any universe.
        async fn universe_domain(&self) -> Option<String> {
            None
        }

        /// Describes the principal behind these credentials.
        fn credential_info(&self) -> Option<CredentialInfo> {
            None
        }
    }
}

pub(crate) fn make_credential_info(
    source: Option<&str>,
    credential_type: &str,
    principal: Option<&str>,
) -> CredentialInfo {
    let mut info = CredentialInfo::new();
    if let Some(s) = source {
        info.insert("credential_source".into(), Value::String(s.to_string()));
    }
    info.insert(
        "credential_type".into(),
        Value::String(credential_type.to_string()),
    );
    if let Some(p) = principal.filter(|p| !p.is_empty()) {
        info.insert("principal".into(), Value::String(p.to_string()));
    }
    info
}

/// A builder for [Application Default Credentials].
///
/// Without any other configuration, the builder looks for credentials in:
///
/// 1. The file named by the `GOOGLE_APPLICATION_CREDENTIALS` environment
///    variable.
/// 2. The well-known file created by `gcloud auth application-default login`.
/// 3. The metadata service.
///
/// Applications may skip the search with
/// [with_credentials_file][Builder::with_credentials_file] or
/// [with_credentials_info][Builder::with_credentials_info].
///
/// # Example
/// ```
/// # use vertexai_auth::credentials::Builder;
/// # tokio_test::block_on(async {
/// let credentials = Builder::default()
///     .with_quota_project_id("my-project")
///     .build();
/// # });
/// ```
///
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
#[derive(Debug, Default)]
pub struct Builder {
    scopes: Option<Vec<String>>,
    quota_project_id: Option<String>,
    always_use_jwt_access: bool,
    credentials_file: Option<PathBuf>,
    credentials_info: Option<Value>,
}

impl Builder {
    /// Sets the [scopes] for the credentials.
    ///
    /// [scopes]: https://developers.google.com/identity/protocols/oauth2/scopes
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Sets the [quota project] for the credentials.
    ///
    /// Overrides the `GOOGLE_CLOUD_QUOTA_PROJECT` environment variable and any
    /// value in the credentials file.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<S: Into<String>>(mut self, v: S) -> Self {
        self.quota_project_id = Some(v.into());
        self
    }

    /// Service account credentials use self-signed JWTs even when scopes are
    /// configured.
    pub fn with_always_use_jwt_access(mut self, v: bool) -> Self {
        self.always_use_jwt_access = v;
        self
    }

    /// Loads the credentials from this file instead of searching for them.
    pub fn with_credentials_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    /// Creates the credentials from this JSON object instead of searching
    /// for them.
    pub fn with_credentials_info(mut self, info: Value) -> Self {
        self.credentials_info = Some(info);
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials file cannot be read or parsed, or
    /// if it describes an unsupported credentials type.
    pub fn build(self) -> BuildResult<Credentials> {
        let options = JsonOptions {
            scopes: self.scopes.clone(),
            quota_project_id: self
                .quota_project_id
                .clone()
                .or_else(|| std::env::var(GOOGLE_CLOUD_QUOTA_PROJECT_VAR).ok()),
            always_use_jwt_access: self.always_use_jwt_access,
        };
        if let Some(info) = self.credentials_info {
            return build_from_json(info, None, options);
        }
        if let Some(path) = self.credentials_file {
            let json = load_file(&path, &path.display())?;
            return build_from_json(json, path.to_str(), options);
        }
        match adc_path() {
            Some(AdcPath::FromEnv(path)) => {
                let origin = format!(
                    "{path}, set by the {GOOGLE_APPLICATION_CREDENTIALS_VAR} environment variable"
                );
                let json = load_file(Path::new(&path), &origin)?;
                build_from_json(json, Some(&path), options)
            }
            Some(AdcPath::WellKnown(path)) if Path::new(&path).exists() => {
                let json = load_file(Path::new(&path), &path)?;
                build_from_json(json, Some(&path), options)
            }
            _ => {
                tracing::debug!("no ADC file found, using the metadata service");
                let mut builder = mds::Builder::default();
                if let Some(scopes) = options.scopes {
                    builder = builder.with_scopes(scopes);
                }
                if let Some(project) = options.quota_project_id {
                    builder = builder.with_quota_project_id(project);
                }
                Ok(builder.build())
            }
        }
    }
}

struct JsonOptions {
    scopes: Option<Vec<String>>,
    quota_project_id: Option<String>,
    always_use_jwt_access: bool,
}

enum AdcPath {
    FromEnv(String),
    WellKnown(String),
}

fn adc_path() -> Option<AdcPath> {
    if let Ok(path) = std::env::var(GOOGLE_APPLICATION_CREDENTIALS_VAR) {
        return Some(AdcPath::FromEnv(path));
    }
    adc_well_known_path().map(AdcPath::WellKnown)
}

/// The path to the ADC file created by `gcloud auth application-default login`.
#[cfg(target_os = "windows")]
fn adc_well_known_path() -> Option<String> {
    std::env::var("APPDATA")
        .ok()
        .map(|root| root + "/gcloud/application_default_credentials.json")
}

/// The path to the ADC file created by `gcloud auth application-default login`.
#[cfg(not(target_os = "windows"))]
fn adc_well_known_path() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|root| root + "/.config/gcloud/application_default_credentials.json")
}

fn load_file(path: &Path, origin: &dyn std::fmt::Display) -> BuildResult<Value> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| BuilderError::loading(origin, e))?;
    serde_json::from_str(&contents).map_err(BuilderError::parsing)
}

fn build_from_json(
    json: Value,
    source: Option<&str>,
    options: JsonOptions,
) -> BuildResult<Credentials> {
    let cred_type = json
        .get("type")
        .ok_or_else(|| BuilderError::parsing("no `type` field found."))?
        .as_str()
        .ok_or_else(|| BuilderError::parsing("`type` field is not a string."))?
        .to_string();
    match cred_type.as_str() {
        "authorized_user" => {
            let mut builder = user_account::Builder::new(json);
            if let Some(scopes) = options.scopes {
                builder = builder.with_scopes(scopes);
            }
            if let Some(project) = options.quota_project_id {
                builder = builder.with_quota_project_id(project);
            }
            if let Some(source) = source {
                builder = builder.with_credential_source(source);
            }
            builder.build()
        }
        "service_account" => {
            let mut builder = service_account::Builder::new(json)
                .with_always_use_jwt_access(options.always_use_jwt_access);
            if let Some(scopes) = options.scopes {
                builder = builder.with_scopes(scopes);
            }
            if let Some(project) = options.quota_project_id {
                builder = builder.with_quota_project_id(project);
            }
            if let Some(source) = source {
                builder = builder.with_credential_source(source);
            }
            builder.build()
        }
        _ => Err(BuilderError::unknown_type(cred_type)),
    }
}
