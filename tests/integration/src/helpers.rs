//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, minting tokens and making
//! HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use favorites_api::{create_app, create_app_state};
use favorites_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseBackend, DatabaseConfig, Environment,
    FavoritesConfig, JwtConfig, JwtService, RateLimitConfig, ServerConfig,
};
use favorites_core::UserId;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Public share links produced by the test server start with this
pub const TEST_SHARE_BASE_URL: &str = "https://fav.test/share";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on the in-memory backend
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);

        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            jwt,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Mint an access token the server accepts
    pub fn token_for(&self, user_id: UserId) -> Result<String> {
        Ok(self.jwt.issue_access_token(user_id, None)?)
    }

    /// A fresh user with a synced profile
    pub async fn sign_up(&self, display_name: &str) -> Result<TestUser> {
        let id = UserId::new();
        let token = self.token_for(id)?;
        let response = self
            .put_auth(
                "/api/v1/profile",
                &token,
                &serde_json::json!({ "display_name": display_name }),
            )
            .await?;
        assert_status(response, StatusCode::OK).await?;
        Ok(TestUser { id, token })
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        send(self.client.get(self.url(path)), token).await
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        send(self.client.post(self.url(path)).json(body), token).await
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        send(self.client.put(self.url(path)).json(body), token).await
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        send(self.client.delete(self.url(path)), token).await
    }
}

async fn send(request: RequestBuilder, token: &str) -> Result<Response> {
    Ok(request
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await?)
}

/// Caller identity used by the tests
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: UserId,
    pub token: String,
}

/// Configuration for a memory-backed server with a generous rate limit
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "favorites-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            backend: DatabaseBackend::Memory,
            url: None,
            max_connections: 1,
            min_connections: 1,
            run_migrations: false,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry: 900,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 10_000,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
        favorites: FavoritesConfig {
            default_group_name: "Default".to_string(),
            share_base_url: TEST_SHARE_BASE_URL.to_string(),
            share_key_length: 16,
        },
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status only
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("error body without code: {}", body))
}
