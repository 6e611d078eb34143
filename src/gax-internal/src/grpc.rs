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

//! Sends requests over gRPC.

use crate::descriptor::MethodDescriptor;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::client_builder::{ClientCertificate, Result as BuilderResult};
use gax::error::Error;
use http::HeaderMap;
use std::time::Duration;

mod from_status;
pub use from_status::to_gax_error;

pub(crate) type GrpcClient = tonic::client::Grpc<tonic::transport::Channel>;

/// Creates the channel.
///
/// The channel connects on first use, so building a client does not block on
/// the network.
pub(crate) fn make_client(
    endpoint: &str,
    cert: Option<&ClientCertificate>,
) -> BuilderResult<GrpcClient> {
    use tonic::transport::{ClientTlsConfig, Endpoint, Identity};
    let mut channel = Endpoint::from_shared(endpoint.to_string()).map_err(BuilderError::transport)?;
    if endpoint.starts_with("https://") {
        let mut tls = ClientTlsConfig::new().with_enabled_roots();
        if let Some(cert) = cert {
            tls = tls.identity(Identity::from_pem(&cert.cert_pem, &cert.key_pem));
        }
        channel = channel.tls_config(tls).map_err(BuilderError::transport)?;
    }
    Ok(tonic::client::Grpc::new(channel.connect_lazy()))
}

/// Makes a single request attempt.
pub(crate) async fn send<Request, Response>(
    client: &GrpcClient,
    method: &'static MethodDescriptor,
    request: Request,
    headers: HeaderMap,
    timeout: Option<Duration>,
) -> Result<(Response, HeaderMap)>
where
    Request: prost::Message + 'static,
    Response: prost::Message + Default + 'static,
{
    let mut extensions = tonic::Extensions::new();
    extensions.insert(tonic::GrpcMethod::new(method.service, method.method));
    let metadata = tonic::metadata::MetadataMap::from_headers(headers);
    let mut request = tonic::Request::from_parts(metadata, extensions, request);
    if let Some(timeout) = timeout {
        request.set_timeout(timeout);
    }
    let codec = tonic_prost::ProstCodec::<Request, Response>::default();
    let path = http::uri::PathAndQuery::from_static(method.grpc_path);
    let mut client = client.clone();
    client.ready().await.map_err(Error::io)?;
    let response = client
        .unary(request, path, codec)
        .await
        .map_err(to_gax_error)?;
    let (metadata, response, _) = response.into_parts();
    Ok((response, metadata.into_headers()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lazy_channel() -> anyhow::Result<()> {
        // Nothing listens on this port, the channel does not connect.
        let _client = make_client("http://127.0.0.1:1", None)?;
        Ok(())
    }

    #[tokio::test]
    async fn bad_endpoint() {
        let err = make_client("not a valid uri", None).unwrap_err();
        assert!(err.is_transport(), "{err:?}");
    }
}
