//! Request and response shapes for the remote posts API.
//!
//! Reads return tag and category *reference objects*; writes send plain
//! values. Conversion into the client's canonical post shape happens in
//! the client, at the fetch boundary, never here.

use serde::{Deserialize, Serialize};

/// Collection envelope returned by `GET /posts`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostEnvelope {
    pub data: Vec<PostPayload>,
}

/// A post as the remote API returns it.
///
/// Server-side extras (ids, timestamps) are tolerated on deserialize
/// and dropped.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
}

/// Category reference object, e.g. `{"name": "news"}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryRef {
    pub name: String,
}

/// Tag reference object, e.g. `{"name": "css"}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagRef {
    pub name: String,
}

/// Plain-value body for `POST /posts`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostCreateRequest {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Plain-value body for `PUT /posts/{index}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostUpdateRequest {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
