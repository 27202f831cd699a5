//! Idea Actions
//!
//! Support / unsupport endpoints.

use async_trait::async_trait;

use super::{ApiClient, IdeaService};
use crate::error::ServiceResult;
use crate::models::IdeaNumber;

pub(crate) fn support_path(idea: IdeaNumber) -> String {
    format!("/api/ideas/{}/support", idea)
}

pub(crate) fn unsupport_path(idea: IdeaNumber) -> String {
    format!("/api/ideas/{}/unsupport", idea)
}

pub struct HttpIdeaService {
    client: ApiClient,
}

impl HttpIdeaService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl IdeaService for HttpIdeaService {
    async fn add_support(&self, idea: IdeaNumber) -> ServiceResult<()> {
        self.client.post(&support_path(idea)).await
    }

    async fn remove_support(&self, idea: IdeaNumber) -> ServiceResult<()> {
        self.client.post(&unsupport_path(idea)).await
    }
}
