//! Idea Model
//!
//! Snapshot of an idea as rendered by the server for this page load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::User;
use super::status::IdeaStatus;
use crate::error::ModelError;

/// Per-tenant idea number used by the action endpoints
pub type IdeaNumber = u32;

/// Idea data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: u32,
    pub number: IdeaNumber,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_on: DateTime<Utc>,
    /// Raw status code, see [`Idea::status`]
    pub status: i32,
    pub user: User,
    #[serde(default)]
    pub viewer_supported: bool,
    #[serde(default)]
    pub response: Option<IdeaResponse>,
    #[serde(default)]
    pub total_supporters: i32,
    #[serde(default)]
    pub total_comments: i32,
    #[serde(default)]
    pub tags: Vec<u32>,
    #[serde(default)]
    pub ranking: f64,
}

impl Idea {
    pub fn status(&self) -> Result<IdeaStatus, ModelError> {
        IdeaStatus::from_code(self.status)
    }

    /// Relative link to the idea page
    pub fn url(&self) -> String {
        format!("/ideas/{}/{}", self.number, self.slug)
    }
}

/// Staff response attached to an idea
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaResponse {
    pub user: User,
    pub text: String,
    pub responded_on: DateTime<Utc>,
}
