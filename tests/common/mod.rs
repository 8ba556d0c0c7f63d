//! Common test utilities and fixtures.
//!
//! This module provides shared fixtures and helpers for the HTTP tests.

#![cfg(feature = "server")]
#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::Value;
use tempfile::TempDir;

use md_publisher::kv::{KvError, KvStore, MemoryStore};
use md_publisher::notes::NoteStore;
use md_publisher::server::{
    AppState, AuthConfig, Config, CorsConfig, LoggingConfig, ServerConfig, StorageConfig,
    build_cors_layer, router,
};

// =============================================================================
// Note Fixtures
// =============================================================================

/// Note body carrying frontmatter and caller metadata.
pub const FRONTMATTER_NOTE: &str = r#"{
    "id": "frontmatter-note",
    "content": "---\ntitle: Frontmatter Title\ntags:\n  - tag1\n  - tag2\n---\n# Content",
    "metadata": {"existing": "metadata"}
}"#;

/// API key used by the authenticated fixtures.
pub const API_KEY: &str = "test-secret";

// =============================================================================
// Test Application
// =============================================================================

/// Test application wrapper that manages a temporary database.
pub struct TestApp {
    pub server: TestServer,
    _temp_dir: Option<TempDir>, // Keep alive for test duration
}

impl TestApp {
    /// Create a new test application with a fresh on-disk database and no API key.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(None)
    }

    /// Create a test application that requires [`API_KEY`] on write routes.
    pub fn with_api_key() -> anyhow::Result<Self> {
        Self::with_config(Some(API_KEY.to_string()))
    }

    fn with_config(api_key: Option<String>) -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let db_path = temp_dir.path().join("db");
        let config = Config {
            server: ServerConfig {
                bind: "127.0.0.1".into(),
                port: 0,
            },
            storage: StorageConfig {
                path: db_path.to_string_lossy().into(),
            },
            auth: AuthConfig { api_key },
            cors: CorsConfig::default(),
            logging: LoggingConfig::default(),
        };
        let state = AppState::from_config(&config)?;
        let app = router(state).layer(build_cors_layer(&config.cors));
        let server = TestServer::new(app)?;
        Ok(Self {
            server,
            _temp_dir: Some(temp_dir),
        })
    }

    /// Create a test application over an arbitrary engine.
    pub fn with_store(store: Arc<dyn KvStore>) -> anyhow::Result<Self> {
        let state = AppState::new(NoteStore::from_shared(store), None);
        let server = TestServer::new(router(state))?;
        Ok(Self {
            server,
            _temp_dir: None,
        })
    }

    /// Create a test application over a shared in-memory engine.
    pub fn in_memory(store: Arc<MemoryStore>) -> anyhow::Result<Self> {
        Self::with_store(store)
    }

    /// Publish a JSON note body and expect success.
    pub async fn publish(&self, body: Value) -> anyhow::Result<()> {
        self.server
            .post("/publish")
            .json(&body)
            .await
            .assert_status_ok();
        Ok(())
    }

    /// Publish with the fixture API key.
    pub async fn publish_authenticated(&self, body: Value) -> anyhow::Result<()> {
        self.server
            .post("/publish")
            .add_header(api_key_header(), HeaderValue::from_static(API_KEY))
            .json(&body)
            .await
            .assert_status_ok();
        Ok(())
    }

    /// Fetch a note and return its JSON body.
    pub async fn get_note(&self, id: &str) -> anyhow::Result<Value> {
        let response = self.server.get(&format!("/note/{}", id)).await;
        response.assert_status_ok();
        Ok(response.json())
    }
}

// =============================================================================
// Broken Engine
// =============================================================================

/// Engine that fails every operation.
pub struct BrokenStore;

impl KvStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Vec<u8>, KvError> {
        Err(KvError::Io(std::io::Error::other("disk on fire")))
    }

    fn set(&self, _key: &str, _value: &[u8]) -> Result<(), KvError> {
        Err(KvError::Io(std::io::Error::other("disk full")))
    }

    fn delete(&self, _key: &str) -> Result<(), KvError> {
        Err(KvError::Io(std::io::Error::other("read-only")))
    }

    fn list_keys(&self) -> Result<Vec<String>, KvError> {
        Err(KvError::Io(std::io::Error::other("disk on fire")))
    }

    fn close(&self) -> Result<(), KvError> {
        Ok(())
    }
}

// =============================================================================
// Assertion Helpers
// =============================================================================

/// The `X-API-Key` header name.
pub fn api_key_header() -> HeaderName {
    HeaderName::from_static("x-api-key")
}

/// Assert a JSON error response with the given status and code.
pub fn assert_error(response: &axum_test::TestResponse, status: StatusCode, code: &str) {
    response.assert_status(status);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["code"].as_str(),
        Some(code),
        "unexpected error body: {}",
        body
    );
}
