//! Canonical post shapes and the fixed editorial vocabulary.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// The fixed set of tags the composer offers.
pub const TAG_VOCABULARY: [&str; 6] = ["html", "css", "javascript", "react", "php", "vue"];

pub fn is_known_tag(value: &str) -> bool {
    TAG_VOCABULARY.contains(&value)
}

/// Fixed category choices offered by the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    News,
    Sport,
    Entertainment,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::News => "news",
            Category::Sport => "sport",
            Category::Entertainment => "entertainment",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, DomainError> {
        match value {
            "news" => Ok(Category::News),
            "sport" => Ok(Category::Sport),
            "entertainment" => Ok(Category::Entertainment),
            other => Err(DomainError::validation(format!(
                "unknown category `{other}`"
            ))),
        }
    }
}

/// A post in the locally cached list. Fetched and locally created
/// entries both live in this one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub category: Option<Category>,
    pub tags: Vec<String>,
}

/// The in-progress form state. Starts empty, is patched one field at a
/// time, and resets after every successful submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub image: String,
    pub category: Option<Category>,
    pub tags: Vec<String>,
}

/// One field merge against the draft.
#[derive(Debug, Clone)]
pub enum DraftPatch {
    Title(String),
    Content(String),
    Image(String),
    Category(Option<Category>),
    Tags(Vec<String>),
}

impl Draft {
    /// Produce a copy with one field replaced. Untouched fields keep
    /// their value.
    pub fn with(&self, patch: DraftPatch) -> Self {
        let mut next = self.clone();
        match patch {
            DraftPatch::Title(value) => next.title = value,
            DraftPatch::Content(value) => next.content = value,
            DraftPatch::Image(value) => next.image = value,
            DraftPatch::Category(value) => next.category = value,
            DraftPatch::Tags(value) => next.tags = value,
        }
        next
    }

    /// Tag list with `tag` membership flipped, order of the remaining
    /// entries preserved. Membership is by value equality.
    pub fn toggled_tags(&self, tag: &str) -> Vec<String> {
        let mut tags = self.tags.clone();
        match tags.iter().position(|existing| existing == tag) {
            Some(index) => {
                tags.remove(index);
            }
            None => tags.push(tag.to_string()),
        }
        tags
    }
}

impl From<&Draft> for Post {
    /// Commit-time shape: an empty image field means "no image".
    fn from(draft: &Draft) -> Self {
        Self {
            title: draft.title.clone(),
            content: draft.content.clone(),
            image: (!draft.image.is_empty()).then(|| draft.image.clone()),
            category: draft.category,
            tags: draft.tags.clone(),
        }
    }
}

impl From<&Post> for Draft {
    /// Edit-mode copy: raw field copy, no normalization.
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            image: post.image.clone().unwrap_or_default(),
            category: post.category,
            tags: post.tags.clone(),
        }
    }
}
