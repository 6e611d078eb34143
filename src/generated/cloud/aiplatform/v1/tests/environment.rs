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

#[cfg(all(test, feature = "dataset-service"))]
mod environment {
    use auth::credentials::testing::test_credentials;
    use gax::client_builder::{ClientCertSource, TransportKind};
    use scoped_env::ScopedEnv;
    use serial_test::serial;
    use vertexai_aiplatform_v1::client::DatasetService;

    fn cert_source() -> ClientCertSource {
        ClientCertSource::from_pem(b"test-only-cert".to_vec(), b"test-only-key".to_vec())
    }

    #[tokio::test]
    #[serial]
    async fn mtls_outside_default_universe() {
        let _cert = ScopedEnv::set("GOOGLE_API_USE_CLIENT_CERTIFICATE", "true");
        let err = DatasetService::builder()
            .with_universe_domain("bar.com")
            .with_credentials(test_credentials())
            .with_client_cert_source(cert_source())
            .with_transport_kind(TransportKind::Grpc)
            .build()
            .await
            .unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        assert!(
            err.to_string()
                .contains("mTLS is not supported in any universe other than googleapis.com"),
            "{err}"
        );
    }

    #[tokio::test]
    #[serial]
    async fn bad_mtls_endpoint_mode() {
        let _mode = ScopedEnv::set("GOOGLE_API_USE_MTLS_ENDPOINT", "Unsupported");
        let err = DatasetService::builder()
            .with_credentials(test_credentials())
            .build()
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert!(
            err.to_string().contains("must be `never`, `auto` or `always`"),
            "{err}"
        );
    }

    #[tokio::test]
    #[serial]
    async fn bad_client_certificate_flag() {
        let _cert = ScopedEnv::set("GOOGLE_API_USE_CLIENT_CERTIFICATE", "maybe");
        let err = DatasetService::builder()
            .with_credentials(test_credentials())
            .build()
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert!(
            err.to_string().contains("must be either `true` or `false`"),
            "{err}"
        );
    }

    #[tokio::test]
    #[serial]
    async fn explicit_endpoint_ignores_mtls_mode() -> anyhow::Result<()> {
        let _mode = ScopedEnv::set("GOOGLE_API_USE_MTLS_ENDPOINT", "always");
        let client = DatasetService::builder()
            .with_endpoint("http://127.0.0.1:1")
            .with_credentials(test_credentials())
            .with_transport_kind(TransportKind::Rest)
            .build()
            .await?;
        client.close();
        Ok(())
    }

    #[tokio::test]
    async fn credentials_and_api_key() {
        let err = DatasetService::builder()
            .with_credentials(test_credentials())
            .with_api_key("test-only-key")
            .build()
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert!(err.to_string().contains("provide one of"), "{err}");
    }
}
