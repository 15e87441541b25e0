//! HTTP adapter for the remote posts API.
//!
//! Implements both remote collaborator traits and owns the boundary
//! normalization: reference objects on the way in, plain values on the
//! way out. Nothing past this module sees the wire shape.

use async_trait::async_trait;
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;

use bozza_api_types::{PostCreateRequest, PostEnvelope, PostPayload, PostUpdateRequest};

use crate::application::store::{PostFeed, PostStore, RemoteError};
use crate::config::ApiSettings;
use crate::domain::posts::{Category, Post};

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .build()
            .map_err(RemoteError::from_transport)?;
        Ok(Self {
            client,
            base: settings.base_url.clone(),
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("bozza/", env!("CARGO_PKG_VERSION"))
    }

    fn url(&self, path: &str) -> Result<Url, RemoteError> {
        self.base
            .join(path)
            .map_err(|err| RemoteError::InvalidPayload(err.to_string()))
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T, RemoteError> {
        let resp = self
            .client
            .request(method, self.url(path)?)
            .send()
            .await
            .map_err(RemoteError::from_transport)?;
        Self::handle(resp).await
    }

    async fn request_unit(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(), RemoteError> {
        let mut req = self.client.request(method, self.url(path)?);
        if let Some(b) = body {
            req = req.json(&b);
        }

        let resp = req.send().await.map_err(RemoteError::from_transport)?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    async fn handle<T: DeserializeOwned>(resp: Response) -> Result<T, RemoteError> {
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(RemoteError::from_transport)?;
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        serde_json::from_slice(&bytes).map_err(|err| RemoteError::Decode(err.to_string()))
    }

    fn to_value<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, RemoteError> {
        serde_json::to_value(value).map_err(|err| RemoteError::InvalidPayload(err.to_string()))
    }
}

/// Map one remote payload into the canonical shape. An unknown category
/// name rejects the payload rather than admitting a half-normalized
/// post.
fn normalize(payload: PostPayload) -> Result<Post, RemoteError> {
    let category = payload
        .category
        .map(|reference| Category::try_from(reference.name.as_str()))
        .transpose()
        .map_err(|err| RemoteError::InvalidPayload(err.to_string()))?;

    Ok(Post {
        title: payload.title,
        content: payload.content,
        image: payload.image.filter(|value| !value.is_empty()),
        category,
        tags: payload.tags.into_iter().map(|tag| tag.name).collect(),
    })
}

fn create_request(post: &Post) -> PostCreateRequest {
    PostCreateRequest {
        title: post.title.clone(),
        content: post.content.clone(),
        image: post.image.clone(),
        category: post.category.map(|category| category.as_str().to_string()),
        tags: post.tags.clone(),
    }
}

fn update_request(post: &Post) -> PostUpdateRequest {
    PostUpdateRequest {
        title: post.title.clone(),
        content: post.content.clone(),
        image: post.image.clone(),
        category: post.category.map(|category| category.as_str().to_string()),
        tags: post.tags.clone(),
    }
}

#[async_trait]
impl PostFeed for ApiClient {
    async fn fetch_all(&self) -> Result<Vec<Post>, RemoteError> {
        let envelope: PostEnvelope = self.request_json(Method::GET, "posts").await?;
        envelope.data.into_iter().map(normalize).collect()
    }
}

#[async_trait]
impl PostStore for ApiClient {
    async fn create(&self, post: &Post) -> Result<(), RemoteError> {
        let body = Self::to_value(&create_request(post))?;
        self.request_unit(Method::POST, "posts", Some(body)).await
    }

    async fn update(&self, index: usize, post: &Post) -> Result<(), RemoteError> {
        let body = Self::to_value(&update_request(post))?;
        self.request_unit(Method::PUT, &format!("posts/{index}"), Some(body))
            .await
    }

    async fn delete(&self, index: usize) -> Result<(), RemoteError> {
        self.request_unit(Method::DELETE, &format!("posts/{index}"), None)
            .await
    }
}
