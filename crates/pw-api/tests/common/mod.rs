use axum::{
    Router,
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use pw_api::{
    config::{ApiConfig, Environment},
    router,
    state::ApiState,
};
use pw_db::{Store, StoreTables, seed};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower::ServiceExt;

/// Test state builder for creating an ApiState over a fixture store
pub struct TestStateBuilder {
    tables: StoreTables,
    environment: Environment,
}

impl TestStateBuilder {
    /// Start from the built-in sample data
    pub fn new() -> Self {
        Self {
            tables: seed::tables(),
            environment: Environment::Development,
        }
    }

    /// Modify the fixture tables before the store is built
    pub fn with_tables(mut self, edit: impl FnOnce(&mut StoreTables)) -> Self {
        edit(&mut self.tables);
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn build(self) -> ApiState {
        let config: ApiConfig =
            envy::from_iter(Vec::<(String, String)>::new()).expect("default config");
        let store = Store::new(self.tables).expect("fixture tables should be valid");

        let mut state = ApiState::new(&config, store);
        state.environment = self.environment;
        state
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Router wired the way the server wires it, minus metrics
pub fn app(state: ApiState) -> Router {
    let environment = state.environment;
    let app = router::router()
        .with_state(state)
        .layer(axum::middleware::from_fn(
            pw_api::middleware::request_id::request_id_middleware,
        ));
    pw_api::middleware::security_headers::apply_security_headers(app, environment)
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Client over the sample data
    pub fn seeded() -> Self {
        Self::new(app(TestStateBuilder::new().build()))
    }

    /// Send a request and get the response
    pub async fn request(&self, mut request: Request<Body>) -> TestResponse {
        // ConnectInfo is needed by the rate limiter's key extractor fallback
        let test_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 8080);
        request.extensions_mut().insert(ConnectInfo(test_addr));

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .header("x-forwarded-for", "127.0.0.1")
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("x-forwarded-for", "127.0.0.1")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.request(request).await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: axum::http::HeaderMap,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }

    /// Ids of the `post` objects in a feed-style array response
    pub fn post_ids(&self) -> Vec<String> {
        let json: serde_json::Value = self.json();
        json.as_array()
            .expect("Response should be an array")
            .iter()
            .map(|item| item["post"]["id"].as_str().unwrap().to_string())
            .collect()
    }
}
