//! Integration tests for flick-rs.
//!
//! All tests run against a local wiremock server; no live credentials
//! are needed. The fixture bodies are the upstream API's real captured
//! responses.
//!
//! Run with: cargo test --test client_tests

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use flick_rs::{ClientConfig, Error, FlickClient, Session};

const AUTH_SUCCESS: &str =
    r#"{"access_token":"aCC3ss","expires_in":5184000,"id_token":"1d_T0Ken","token_type":"bearer"}"#;
const AUTH_FAILURE: &str = "Auth failed invalid_grant The access grant you supplied is invalid";
const PRICE_RESPONSE: &str = r#"{"kind": "mobile_provider_price", "needle": {"status": "urn:flick:market:price:forecast", "charge_methods": ["kwh", "spot_price"], "start_at": "2018-07-25T10:00:00Z", "components": [{"kind": "component", "unit_code": "cents", "charge_method": "kwh", "per": "kwh", "charge_setter": "retailer", "_links": {}, "value": "1.58"}, {"kind": "component", "unit_code": "cents", "charge_method": "kwh", "per": "kwh", "charge_setter": "network", "_links": {}, "value": "5.51"}], "unit_code": "cents", "price": "14.456", "now": "2018-07-25T10:01:09.013Z", "type": "rated", "per": "kwh", "end_at": "2018-07-25T10:29:59Z"}, "customer_state": "active"}"#;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Configuration pointing at a mock server.
fn test_config(server: &MockServer) -> ClientConfig {
    init_logging();
    ClientConfig::default()
        .with_base_url(server.uri())
        .with_client_credentials("test-client-id", "test-client-secret")
}

/// Mock server with a happy-path auth endpoint mounted.
async fn server_with_auth() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/identity/oauth/token"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("client_id=test-client-id"))
        .respond_with(ResponseTemplate::new(200).set_body_string(AUTH_SUCCESS))
        .mount(&server)
        .await;
    server
}

mod login_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_populates_session() {
        let server = server_with_auth().await;

        let client = FlickClient::login_with_config("user", "pass", test_config(&server))
            .await
            .expect("login should succeed");

        let session = client.session();
        assert_eq!(session.token(), "1d_T0Ken");
        assert_eq!(session.token_type(), "bearer");
        assert_eq!(session.expires_in(), 5_184_000);
        assert_eq!(session.access_token(), "aCC3ss");
    }

    #[tokio::test]
    async fn test_login_with_bad_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/identity/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(AUTH_FAILURE))
            .mount(&server)
            .await;

        let result = FlickClient::login_with_config("user", "wrong", test_config(&server)).await;
        assert!(matches!(result, Err(Error::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_with_json_error_payload_is_incomplete() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/identity/oauth/token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"error":"server_error"}"#),
            )
            .mount(&server)
            .await;

        let result = FlickClient::login_with_config("user", "pass", test_config(&server)).await;
        assert!(matches!(result, Err(Error::AuthenticationIncomplete(_))));
    }
}

mod price_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_current_price() {
        let server = server_with_auth().await;
        Mock::given(method("GET"))
            .and(path("/customer/mobile_provider/price"))
            .and(header("authorization", "Bearer 1d_T0Ken"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PRICE_RESPONSE))
            .expect(1)
            .mount(&server)
            .await;

        let client = FlickClient::login_with_config("user", "pass", test_config(&server))
            .await
            .expect("login should succeed");

        let price = client.price().current().await.expect("should fetch price");
        assert_eq!(price, 14.456);
    }

    #[tokio::test]
    async fn test_fetch_forecast_document() {
        let server = server_with_auth().await;
        Mock::given(method("GET"))
            .and(path("/customer/mobile_provider/price"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PRICE_RESPONSE))
            .mount(&server)
            .await;

        let client = FlickClient::login_with_config("user", "pass", test_config(&server))
            .await
            .expect("login should succeed");

        let forecast = client.price().forecast().await.expect("should fetch forecast");
        let needle = forecast.needle.expect("needle present");
        assert_eq!(needle.price.as_deref(), Some("14.456"));
        assert_eq!(needle.components.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_needle_is_malformed() {
        let server = server_with_auth().await;
        Mock::given(method("GET"))
            .and(path("/customer/mobile_provider/price"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"kind": "mobile_provider_price", "needle": {}, "customer_state": "active"}"#,
            ))
            .mount(&server)
            .await;

        let client = FlickClient::login_with_config("user", "pass", test_config(&server))
            .await
            .expect("login should succeed");

        let result = client.price().current().await;
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }
}

mod error_marker_tests {
    use super::*;

    #[tokio::test]
    async fn test_token_verification_failure_marker() {
        let server = server_with_auth().await;
        Mock::given(method("GET"))
            .and(path("/customer/mobile_provider/price"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"error":"urn:flick:authentication:error:token_verification_failed"}"#,
            ))
            .mount(&server)
            .await;

        let client = FlickClient::login_with_config("user", "pass", test_config(&server))
            .await
            .expect("login should succeed");

        let result = client.price().current().await;
        assert!(matches!(result, Err(Error::TokenInvalid)));
    }

    #[tokio::test]
    async fn test_method_not_allowed_marker() {
        let server = server_with_auth().await;
        Mock::given(method("GET"))
            .and(path("/customer/mobile_provider/price"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"_status":"405 Not Allowed"}"#),
            )
            .mount(&server)
            .await;

        let client = FlickClient::login_with_config("user", "pass", test_config(&server))
            .await
            .expect("login should succeed");

        let result = client.price().current().await;
        assert!(matches!(result, Err(Error::MethodNotAllowed)));
    }
}

mod precondition_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_token_makes_no_request() {
        let server = MockServer::start().await;
        // Any request reaching the server fails the test on drop.
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let session = Session::new("", "bearer", 0, "");
        let client = FlickClient::with_session(session, test_config(&server))
            .expect("client should build");

        let result = client.price().current().await;
        assert!(matches!(result, Err(Error::Unauthorized)));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_empty_token_type_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let session = Session::new("123", "", 0, "");
        let client = FlickClient::with_session(session, test_config(&server))
            .expect("client should build");

        let result = client.api_call("price").await;
        assert!(matches!(result, Err(Error::Unauthorized)));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_unknown_endpoint_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let session = Session::new("123", "bearer", 0, "");
        let client = FlickClient::with_session(session, test_config(&server))
            .expect("client should build");

        let result = client.api_call("$$$$").await;
        match result {
            Err(Error::UnknownEndpoint(name)) => assert_eq!(name, "$$$$"),
            other => panic!("expected UnknownEndpoint, got {:?}", other),
        }
        server.verify().await;
    }

    #[tokio::test]
    async fn test_api_call_returns_raw_body() {
        let server = server_with_auth().await;
        Mock::given(method("GET"))
            .and(path("/customer/mobile_provider/price"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PRICE_RESPONSE))
            .mount(&server)
            .await;

        let client = FlickClient::login_with_config("user", "pass", test_config(&server))
            .await
            .expect("login should succeed");

        let body = client.api_call("price").await.expect("call should succeed");
        assert_eq!(body, PRICE_RESPONSE.as_bytes());
    }
}
