//! Remote Layer - Settings Resource Client
//!
//! Typed wrapper over the `/settings/{collection}` REST endpoints.
//! The client is stateless; every call is a single request.

mod http;

use async_trait::async_trait;

use crate::domain::Resource;

pub use http::HttpResourceClient;
/// Connection pool shared by resource clients
pub use reqwest::Client as HttpClient;

/// Result type for remote operations
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Any transport or server failure.
///
/// Callers treat every variant the same way (log + notice); the variants
/// only exist so logs say what went wrong.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response is missing `{0}`")]
    MissingField(&'static str),

    #[error("Server error: HTTP {status} - {message}")]
    Status { status: u16, message: String },
}

/// CRUD contract for one settings collection
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ResourceClient<T: Resource> {
    /// Every entity, active or not (`GET /settings/{c}/all`)
    async fn list_all(&self) -> RemoteResult<Vec<T>>;

    /// Active entities only (`GET /settings/{c}`)
    async fn list_active(&self) -> RemoteResult<Vec<T>>;

    /// Single entity by id
    async fn get(&self, id: &T::Id) -> RemoteResult<T>;

    /// Create from a draft; returns the server's canonical entity
    async fn create(&self, draft: &T::Draft) -> RemoteResult<T>;

    /// Apply a partial draft; returns the server's canonical entity
    async fn update(&self, id: &T::Id, patch: &T::Patch) -> RemoteResult<T>;

    /// Delete by id; returns the server confirmation message
    async fn delete(&self, id: &T::Id) -> RemoteResult<String>;

    /// Flip `isActive`; returns the server's canonical entity
    async fn toggle_status(&self, id: &T::Id) -> RemoteResult<T>;
}
