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

//! Sends transcoded requests over HTTP/1.1 with JSON payloads.

use crate::transcode::HttpRequest;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::client_builder::{ClientCertificate, Result as BuilderResult};
use gax::error::Error;
use http::HeaderMap;
use std::time::Duration;

pub(crate) type HttpClient = reqwest::Client;

pub(crate) fn make_client(cert: Option<&ClientCertificate>) -> BuilderResult<HttpClient> {
    if cert.is_some() {
        return Err(BuilderError::configuration(
            "client certificates are only supported with the gRPC transport",
        ));
    }
    reqwest::Client::builder()
        .build()
        .map_err(BuilderError::transport)
}

/// Makes a single request attempt.
pub(crate) async fn send<O>(
    client: &HttpClient,
    endpoint: &str,
    request: &HttpRequest,
    headers: HeaderMap,
    timeout: Option<Duration>,
) -> Result<(O, HeaderMap)>
where
    O: serde::de::DeserializeOwned + Default,
{
    let url = format!("{}{}", endpoint.trim_end_matches('/'), request.path);
    let mut builder = client
        .request(request.method.clone(), url)
        .query(&request.query)
        .headers(headers);
    if let Some(body) = &request.body {
        builder = builder.json(body);
    }
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    let response = builder.send().await.map_err(|e| {
        if e.is_timeout() {
            Error::timeout(e)
        } else {
            Error::io(e)
        }
    })?;
    decode(collect(response).await?)
}

struct Collected {
    status: http::StatusCode,
    headers: HeaderMap,
    body: bytes::Bytes,
}

async fn collect(response: reqwest::Response) -> Result<Collected> {
    let (parts, body) = http::Response::from(response).into_parts();
    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();
    Ok(Collected {
        status: parts.status,
        headers: parts.headers,
        body,
    })
}

fn decode<O>(response: Collected) -> Result<(O, HeaderMap)>
where
    O: serde::de::DeserializeOwned + Default,
{
    let Collected {
        status,
        headers,
        body,
    } = response;
    if !status.is_success() {
        let code = status.as_u16();
        return Err(match gax::error::rpc::Status::try_from(&body) {
            Ok(s) => Error::service_with_http_metadata(s, Some(code), Some(headers)),
            Err(_) => Error::http(code, headers, body),
        });
    }
    // 204 responses carry no body at all.
    if body.is_empty() && status == http::StatusCode::NO_CONTENT {
        return Ok((O::default(), headers));
    }
    let value = serde_json::from_slice::<O>(&body).map_err(Error::deser)?;
    Ok((value, headers))
}
