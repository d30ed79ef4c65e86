//! HTTP Resource Client
//!
//! `reqwest` implementation of [`ResourceClient`]. Response envelopes look
//! like `{ "categories": [...], "total": n }`, `{ "category": {...} }` or
//! `{ "message": "..." }`.

use std::marker::PhantomData;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{RemoteError, RemoteResult, ResourceClient};
use crate::config::ApiConfig;
use crate::domain::Resource;

/// Characters escaped in an id path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// REST client for one settings collection
pub struct HttpResourceClient<T> {
    http: reqwest::Client,
    config: ApiConfig,
    _resource: PhantomData<fn() -> T>,
}

impl<T> Clone for HttpResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone(),
            _resource: PhantomData,
        }
    }
}

impl<T: Resource> HttpResourceClient<T> {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Shares an existing connection pool
    pub fn with_client(http: reqwest::Client, config: ApiConfig) -> Self {
        Self {
            http,
            config,
            _resource: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/settings/{}", self.config.base_url(), T::COLLECTION)
    }

    fn item_url(&self, id: &T::Id) -> String {
        let id = id.to_string();
        format!("{}/{}", self.collection_url(), utf8_percent_encode(&id, PATH_SEGMENT))
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.config.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> RemoteResult<Value> {
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_string))
                .unwrap_or(text);
            return Err(RemoteError::Status {
                status: status.as_u16(),
                message,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn send_json<B: Serialize + ?Sized>(&self, method: Method, url: String, body: &B) -> RemoteResult<Value> {
        self.send(self.request(method, url).json(body)).await
    }
}

/// Pulls one key out of a response envelope
fn take_field<D: DeserializeOwned>(mut body: Value, key: &'static str) -> RemoteResult<D> {
    let field = body
        .get_mut(key)
        .map(Value::take)
        .ok_or(RemoteError::MissingField(key))?;
    Ok(serde_json::from_value(field)?)
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<T: Resource> ResourceClient<T> for HttpResourceClient<T> {
    async fn list_all(&self) -> RemoteResult<Vec<T>> {
        let url = format!("{}/all", self.collection_url());
        let body = self.send(self.request(Method::GET, url)).await?;
        take_field(body, T::COLLECTION)
    }

    async fn list_active(&self) -> RemoteResult<Vec<T>> {
        let body = self.send(self.request(Method::GET, self.collection_url())).await?;
        take_field(body, T::COLLECTION)
    }

    async fn get(&self, id: &T::Id) -> RemoteResult<T> {
        let body = self.send(self.request(Method::GET, self.item_url(id))).await?;
        take_field(body, T::SINGULAR)
    }

    async fn create(&self, draft: &T::Draft) -> RemoteResult<T> {
        let body = self.send_json(Method::POST, self.collection_url(), draft).await?;
        take_field(body, T::SINGULAR)
    }

    async fn update(&self, id: &T::Id, patch: &T::Patch) -> RemoteResult<T> {
        let body = self.send_json(Method::PUT, self.item_url(id), patch).await?;
        take_field(body, T::SINGULAR)
    }

    async fn delete(&self, id: &T::Id) -> RemoteResult<String> {
        let body = self.send(self.request(Method::DELETE, self.item_url(id))).await?;
        // Some deployments answer 204 with an empty body.
        Ok(take_field(body, "message").unwrap_or_default())
    }

    async fn toggle_status(&self, id: &T::Id) -> RemoteResult<T> {
        let url = format!("{}/toggle-status", self.item_url(id));
        let body = self.send(self.request(Method::PATCH, url)).await?;
        take_field(body, T::SINGULAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Branch, Category};

    #[test]
    fn test_urls_follow_collection_layout() {
        let client = HttpResourceClient::<Category>::new(ApiConfig::new("http://host/api/"));
        assert_eq!(client.collection_url(), "http://host/api/settings/categories");
        assert_eq!(client.item_url(&"a1".to_string()), "http://host/api/settings/categories/a1");
    }

    #[test]
    fn test_item_url_escapes_id() {
        let client = HttpResourceClient::<Branch>::new(ApiConfig::new("http://host/api"));
        assert_eq!(client.item_url(&"a/b c".to_string()), "http://host/api/settings/branches/a%2Fb%20c");
    }

    #[test]
    fn test_take_field_missing_key() {
        let err = take_field::<Vec<Category>>(serde_json::json!({"total": 0}), "categories").unwrap_err();
        assert!(matches!(err, RemoteError::MissingField("categories")));
    }
}
