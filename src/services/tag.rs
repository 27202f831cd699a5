//! Tag Actions
//!
//! Assign / unassign a tag on an idea. Both share one path; the HTTP
//! method selects the action.

use async_trait::async_trait;

use super::{ApiClient, TagService};
use crate::error::ServiceResult;
use crate::models::IdeaNumber;

pub(crate) fn idea_tag_path(tag_slug: &str, idea: IdeaNumber) -> String {
    format!("/api/ideas/{}/tags/{}", idea, tag_slug)
}

pub struct HttpTagService {
    client: ApiClient,
}

impl HttpTagService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl TagService for HttpTagService {
    async fn assign(&self, tag_slug: &str, idea: IdeaNumber) -> ServiceResult<()> {
        self.client.post(&idea_tag_path(tag_slug, idea)).await
    }

    async fn unassign(&self, tag_slug: &str, idea: IdeaNumber) -> ServiceResult<()> {
        self.client.delete(&idea_tag_path(tag_slug, idea)).await
    }
}
