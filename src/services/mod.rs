//! Remote Action Services
//!
//! Mutations against the backend, plus the two UI collaborators widgets
//! report to: the notifier and the sign-in prompt.

mod http;
mod idea;
mod tag;

use std::rc::Rc;

use async_trait::async_trait;

use crate::error::ServiceResult;
use crate::models::IdeaNumber;

pub use http::ApiClient;
pub use idea::HttpIdeaService;
pub use tag::HttpTagService;

#[async_trait(?Send)]
pub trait IdeaService {
    async fn add_support(&self, idea: IdeaNumber) -> ServiceResult<()>;
    async fn remove_support(&self, idea: IdeaNumber) -> ServiceResult<()>;
}

#[async_trait(?Send)]
pub trait TagService {
    async fn assign(&self, tag_slug: &str, idea: IdeaNumber) -> ServiceResult<()>;
    async fn unassign(&self, tag_slug: &str, idea: IdeaNumber) -> ServiceResult<()>;
}

/// Surfaces failures to the viewer
pub trait Notifier {
    fn error(&self, message: &str);
}

/// Asks an anonymous viewer to authenticate
pub trait SignInPrompt {
    fn show_sign_in(&self);
}

/// Collaborators shared by every widget on the page
#[derive(Clone)]
pub struct Services {
    pub ideas: Rc<dyn IdeaService>,
    pub tags: Rc<dyn TagService>,
    pub notifier: Rc<dyn Notifier>,
    pub sign_in: Rc<dyn SignInPrompt>,
}
