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

#[cfg(all(
    test,
    feature = "_internal-http-client",
    feature = "_internal-grpc-client"
))]
mod tests {
    use auth::credentials::testing::{TestCredentials, test_credentials};
    use gax::client_builder::TransportKind;
    use gax::error::rpc::{Code, StatusDetails};
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::interceptor::{Interceptor, Interceptors};
    use gax::options::RequestOptions;
    use gax::retry_policy::{AlwaysRetry, RetryPolicyExt};
    use std::error::Error as _;
    use vertexai_gax_internal as gaxi;
    use gaxi::descriptor::{Body, HttpRule, MethodDescriptor, RetrySettings, RoutingParam};
    use gaxi::environment::EnvironmentSnapshot;
    use gaxi::options::{ClientConfig, OperationsMethods, ServiceInfo};
    use gaxi::transport::Transport;
    use httptest::{Expectation, Server, all_of, cycle, matchers::*, responders::*};
    use longrunning::model::{GetOperationRequest, Operation};
    use lro::Poller;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    static GET_OPERATION: MethodDescriptor = MethodDescriptor {
        service: "google.longrunning.Operations",
        method: "GetOperation",
        grpc_path: "/google.longrunning.Operations/GetOperation",
        http: HttpRule {
            verb: http::Method::GET,
            path_template: "/v1/{name=operations/*}",
            body: Body::None,
        },
        idempotent: true,
        default_timeout: Some(Duration::from_secs(30)),
        retry: RetrySettings::OnCodes {
            codes: &[Code::Unavailable],
            initial_delay: Duration::from_millis(1),
            maximum_delay: Duration::from_millis(1),
            multiplier: 1.0,
            deadline: Duration::from_secs(30),
        },
        routing: &[RoutingParam {
            field: "name",
            key: "name",
        }],
        long_running: false,
    };

    static CANCEL_OPERATION: MethodDescriptor = MethodDescriptor {
        service: "google.longrunning.Operations",
        method: "CancelOperation",
        grpc_path: "/google.longrunning.Operations/CancelOperation",
        http: HttpRule {
            verb: http::Method::POST,
            path_template: "/v1/{name=operations/*}:cancel",
            body: Body::All,
        },
        idempotent: false,
        default_timeout: None,
        retry: RetrySettings::None,
        routing: &[],
        long_running: false,
    };

    // A non-idempotent method, with retries for `UNAVAILABLE`.
    static START: MethodDescriptor = MethodDescriptor {
        service: "google.longrunning.Operations",
        method: "Start",
        grpc_path: "/google.longrunning.Operations/Start",
        http: HttpRule {
            verb: http::Method::POST,
            path_template: "/v1/{name=operations/*}:start",
            body: Body::All,
        },
        idempotent: false,
        default_timeout: None,
        retry: RetrySettings::OnCodes {
            codes: &[Code::Unavailable],
            initial_delay: Duration::from_millis(1),
            maximum_delay: Duration::from_millis(1),
            multiplier: 1.0,
            deadline: Duration::from_secs(30),
        },
        routing: &[],
        long_running: true,
    };

    static INFO: ServiceInfo = ServiceInfo {
        service_name: "google.longrunning.Operations",
        short_name: "longrunning",
        client_version: "1.2.3",
        client_artifact: "vertexai-test-only",
        endpoint_template: "https://test.{UNIVERSE_DOMAIN}",
        mtls_endpoint: "https://test.mtls.googleapis.com",
        default_scopes: &["https://www.googleapis.com/auth/cloud-platform"],
        operations: Some(OperationsMethods {
            get_operation: &GET_OPERATION,
            cancel_operation: &CANCEL_OPERATION,
        }),
    };

    fn test_config(server: &Server) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.endpoint = Some(format!("http://{}", server.addr()));
        config.cred = Some(test_credentials());
        config.transport_kind = TransportKind::Rest;
        config
    }

    async fn new_transport(config: ClientConfig) -> Result<Transport> {
        let transport =
            Transport::with_environment(config, &INFO, EnvironmentSnapshot::default()).await?;
        Ok(transport)
    }

    fn get(name: &str) -> GetOperationRequest {
        GetOperationRequest::default().set_name(name)
    }

    fn unavailable() -> impl httptest::responders::Responder {
        status_code(503).body(
            json!({"error": {"code": 503, "message": "try-again", "status": "UNAVAILABLE"}})
                .to_string(),
        )
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn simple_request() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/operations/op-1"),
                request::headers(contains(("x-goog-request-params", "name=operations/op-1"))),
                request::headers(contains(("authorization", "Bearer test-only-token"))),
                request::headers(contains((
                    "user-agent",
                    "vertexai-test-only/1.2.3"
                ))),
                request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/op-1", "done": true}))),
        );

        let transport = new_transport(test_config(&server)).await?;
        let response: Operation = transport
            .invoke(&GET_OPERATION, get("operations/op-1"), RequestOptions::default())
            .await?;
        assert_eq!(response.name, "operations/op-1");
        assert!(response.done);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn api_client_header() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/operations/op-1"),
                request::headers(contains(key("x-goog-api-client"))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/op-1"}))),
        );
        let transport = new_transport(test_config(&server)).await?;
        let _: Operation = transport
            .invoke(&GET_OPERATION, get("operations/op-1"), RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn missing_path_parameter() -> Result<()> {
        let server = Server::run();
        let transport = new_transport(test_config(&server)).await?;
        let err = transport
            .invoke::<_, Operation>(&GET_OPERATION, get(""), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_idempotent() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/operations/op-1"))
                .times(3)
                .respond_with(cycle![
                    unavailable(),
                    unavailable(),
                    json_encoded(json!({"name": "operations/op-1", "done": true})),
                ]),
        );
        let transport = new_transport(test_config(&server)).await?;
        let response: Operation = transport
            .invoke(&GET_OPERATION, get("operations/op-1"), RequestOptions::default())
            .await?;
        assert!(response.done);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn no_retry_when_not_idempotent() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/v1/operations/op-1:start"))
                .times(1)
                .respond_with(unavailable()),
        );
        let transport = new_transport(test_config(&server)).await?;
        let err = transport
            .invoke::<_, Operation>(&START, get("operations/op-1"), RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn per_call_retry_disabled() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/operations/op-1"))
                .times(1)
                .respond_with(unavailable()),
        );
        let transport = new_transport(test_config(&server)).await?;
        let mut options = RequestOptions::default();
        options.disable_retry();
        let err = transport
            .invoke::<_, Operation>(&GET_OPERATION, get("operations/op-1"), options)
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/operations/op-1"))
                .times(..)
                .respond_with(delay_and_then(
                    Duration::from_secs(5),
                    json_encoded(json!({"name": "operations/op-1"})),
                )),
        );
        let transport = new_transport(test_config(&server)).await?;
        let mut options = RequestOptions::default();
        options.set_timeout(Duration::from_millis(100));
        let err = transport
            .invoke::<_, Operation>(&GET_OPERATION, get("operations/op-1"), options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn cancellation() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/operations/op-1"))
                .times(..)
                .respond_with(delay_and_then(
                    Duration::from_secs(5),
                    json_encoded(json!({"name": "operations/op-1"})),
                )),
        );
        let transport = new_transport(test_config(&server)).await?;
        let token = tokio_util::sync::CancellationToken::new();
        let mut options = RequestOptions::default();
        options.set_cancellation_token(token.clone());
        let call = transport.invoke::<_, Operation>(&GET_OPERATION, get("operations/op-1"), options);
        let cancel = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            token.cancel();
        };
        let (result, _) = tokio::join!(call, cancel);
        let err = result.unwrap_err();
        assert!(err.is_cancelled(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn close_is_idempotent() -> Result<()> {
        let server = Server::run();
        let transport = new_transport(test_config(&server)).await?;
        assert!(!transport.is_closed());
        transport.close();
        transport.close();
        assert!(transport.is_closed());
        let err = transport
            .invoke::<_, Operation>(&GET_OPERATION, get("operations/op-1"), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_transport_closed(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn wrapped_methods_are_cached() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/operations/op-1"))
                .times(2)
                .respond_with(json_encoded(json!({"name": "operations/op-1"}))),
        );
        let transport = new_transport(test_config(&server)).await?;
        assert_eq!(transport.wrapped_method_count(), 0);

        let _: Operation = transport
            .invoke(&GET_OPERATION, get("operations/op-1"), RequestOptions::default())
            .await?;
        let first = transport.wrapper(&GET_OPERATION);
        let _: Operation = transport
            .clone()
            .invoke(&GET_OPERATION, get("operations/op-1"), RequestOptions::default())
            .await?;
        assert_eq!(transport.wrapped_method_count(), 1);
        assert!(Arc::ptr_eq(&first, &transport.wrapper(&GET_OPERATION)));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn operations_client_is_shared() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/v1/operations/op-1:start"))
                .times(2)
                .respond_with(json_encoded(json!({"name": "operations/op-1"}))),
        );
        let transport = new_transport(test_config(&server)).await?;
        assert!(transport.existing_operations_client().is_none());

        let _op1 = transport
            .invoke_lro::<_, wkt::Empty, wkt::Empty>(
                &START,
                get("operations/op-1"),
                RequestOptions::default(),
            )
            .await?;
        let c1 = transport
            .existing_operations_client()
            .expect("created by the first call");
        let _op2 = transport
            .invoke_lro::<_, wkt::Empty, wkt::Empty>(
                &START,
                get("operations/op-1"),
                RequestOptions::default(),
            )
            .await?;
        let c2 = transport
            .existing_operations_client()
            .expect("created by the first call");
        assert!(Arc::ptr_eq(&c1, &c2));
        assert_eq!(transport.wrapped_method_count(), 1);

        drop(transport);
        let err = lro::internal::OperationsClient::get_operation(
            c1.as_ref(),
            "operations/op-1".to_string(),
            RequestOptions::default(),
        )
        .await
        .unwrap_err();
        assert!(err.is_transport_closed(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn operations_client_created_with_wrapper() -> Result<()> {
        let server = Server::run();
        let transport = new_transport(test_config(&server)).await?;
        let _ = transport.wrapper(&GET_OPERATION);
        assert!(transport.existing_operations_client().is_none());
        let _ = transport.wrapper(&START);
        assert!(transport.existing_operations_client().is_some());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn operations_client_created_when_start_fails() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/v1/operations/op-1:start"))
                .respond_with(status_code(500).body(
                    json!({"error": {"code": 500, "message": "oops", "status": "INTERNAL"}})
                        .to_string(),
                )),
        );
        let transport = new_transport(test_config(&server)).await?;
        let err = transport
            .invoke_lro::<_, wkt::Empty, wkt::Empty>(
                &START,
                get("operations/op-1"),
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Internal), "{err:?}");
        assert!(transport.existing_operations_client().is_some());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn invoke_lro_rejects_unary_methods() -> Result<()> {
        let server = Server::run();
        let transport = new_transport(test_config(&server)).await?;
        let err = transport
            .invoke_lro::<_, wkt::Empty, wkt::Empty>(
                &GET_OPERATION,
                get("operations/op-1"),
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert_eq!(transport.wrapped_method_count(), 0);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn single_routing_header() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/operations/op-1"),
                request::headers(contains(("x-goog-request-params", "name=operations/op-1"))),
                request::headers(not(contains(("x-goog-request-params", "name=spoofed")))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/op-1"}))),
        );
        let transport = new_transport(test_config(&server)).await?;
        let mut options = RequestOptions::default();
        options.add_metadata("x-goog-request-params", "name=spoofed");
        let _: Operation = transport
            .invoke(&GET_OPERATION, get("operations/op-1"), options)
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn credential_info_survives_retries() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/operations/denied"))
                .times(2)
                .respond_with(status_code(401).body(
                    json!({"error": {"code": 401, "message": "who are you", "status": "UNAUTHENTICATED"}})
                        .to_string(),
                )),
        );
        let mut info = serde_json::Map::new();
        info.insert("principal".to_string(), json!("test-only"));
        let mut config = test_config(&server);
        config.cred = Some(TestCredentials::default().with_credential_info(info).into());
        let transport = new_transport(config).await?;

        let mut options = RequestOptions::default();
        options.set_retry_policy(AlwaysRetry.with_attempt_limit(2));
        options.set_backoff_policy(
            ExponentialBackoffBuilder::new()
                .with_initial_delay(Duration::from_millis(1))
                .with_maximum_delay(Duration::from_millis(1))
                .clamp(),
        );
        let err = transport
            .invoke::<_, Operation>(&GET_OPERATION, get("operations/denied"), options)
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        let last = err
            .source()
            .and_then(|e| e.downcast_ref::<gax::error::Error>())
            .expect("the last attempt's error");
        let status = last.status().expect("a service error");
        assert_eq!(status.code, Code::Unauthenticated);
        assert!(
            status
                .details
                .iter()
                .any(|d| matches!(d, StatusDetails::CredentialInfo(_))),
            "{status:?}"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn long_running_operation() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/v1/operations/op-1:start"))
                .respond_with(json_encoded(json!({"name": "operations/op-1"}))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/operations/op-1"))
                .respond_with(json_encoded(json!({
                    "name": "operations/op-1",
                    "done": true,
                    "response": {"@type": "type.googleapis.com/google.protobuf.Empty"},
                }))),
        );
        let transport = new_transport(test_config(&server)).await?;
        let mut options = RequestOptions::default();
        options.set_polling_backoff_policy(
            ExponentialBackoffBuilder::new()
                .with_initial_delay(Duration::from_millis(1))
                .with_maximum_delay(Duration::from_millis(1))
                .clamp(),
        );
        let op = transport
            .invoke_lro::<_, wkt::Empty, wkt::Empty>(&START, get("operations/op-1"), options)
            .await?;
        assert_eq!(op.name(), "operations/op-1");
        assert!(!op.done());
        let response = op.until_done().await?;
        assert_eq!(response, wkt::Empty::default());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn credential_info_enrichment() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/operations/denied"))
                .respond_with(status_code(403).body(
                    json!({"error": {"code": 403, "message": "denied", "status": "PERMISSION_DENIED"}})
                        .to_string(),
                )),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/operations/broken"))
                .respond_with(status_code(500).body(
                    json!({"error": {"code": 500, "message": "oops", "status": "INTERNAL"}})
                        .to_string(),
                )),
        );
        let mut info = serde_json::Map::new();
        info.insert(
            "principal".to_string(),
            json!("sa@my-project.iam.gserviceaccount.com"),
        );
        let mut config = test_config(&server);
        config.cred = Some(TestCredentials::default().with_credential_info(info).into());
        let transport = new_transport(config).await?;

        let err = transport
            .invoke::<_, Operation>(&GET_OPERATION, get("operations/denied"), RequestOptions::default())
            .await
            .unwrap_err();
        let status = err.status().expect("a service error");
        assert_eq!(status.code, Code::PermissionDenied);
        let info = status
            .details
            .iter()
            .find_map(|d| match d {
                StatusDetails::CredentialInfo(s) => Some(s.clone()),
                _ => None,
            })
            .expect("credential info in the error details");
        let info = serde_json::from_str::<serde_json::Value>(&info)?;
        assert_eq!(
            info,
            json!({"principal": "sa@my-project.iam.gserviceaccount.com"})
        );

        let mut options = RequestOptions::default();
        options.disable_retry();
        let err = transport
            .invoke::<_, Operation>(&GET_OPERATION, get("operations/broken"), options)
            .await
            .unwrap_err();
        let status = err.status().expect("a service error");
        assert!(
            !status
                .details
                .iter()
                .any(|d| matches!(d, StatusDetails::CredentialInfo(_))),
            "{status:?}"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn interceptors() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/operations/op-2"),
                request::headers(contains(("x-test-only", "before"))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/op-2"}))),
        );
        let mut interceptors = Interceptors::default();
        interceptors.insert(
            GET_OPERATION.key(),
            Interceptor::<GetOperationRequest, Operation>::new()
                .with_pre(|request, mut headers| {
                    headers.insert("x-test-only", http::HeaderValue::from_static("before"));
                    (request.set_name("operations/op-2"), headers)
                })
                .with_post(|response| response.set_done(true)),
        );
        let mut config = test_config(&server);
        config.interceptors = interceptors;
        let transport = new_transport(config).await?;
        let response: Operation = transport
            .invoke(&GET_OPERATION, get("operations/op-1"), RequestOptions::default())
            .await?;
        assert_eq!(response.name, "operations/op-2");
        assert!(response.done);
        Ok(())
    }

    #[tokio::test]
    async fn tracing_from_config() -> Result<()> {
        let server = Server::run();
        let mut config = test_config(&server);
        config.tracing = true;
        let transport = new_transport(config).await?;
        assert!(transport.tracing());

        let transport = new_transport(test_config(&server)).await?;
        assert!(!transport.tracing());
        Ok(())
    }

    #[tokio::test]
    async fn universe_domain_mismatch() {
        let server = Server::run();
        let mut config = test_config(&server);
        config.universe_domain = Some("my-universe.example.com".to_string());
        config.cred = Some(
            TestCredentials::default()
                .with_universe_domain("googleapis.com")
                .into(),
        );
        let err = new_transport(config).await.unwrap_err();
        let err = err
            .downcast_ref::<gax::client_builder::Error>()
            .expect("a client builder error");
        assert!(err.is_configuration(), "{err:?}");
    }
}
