//! Frontend Models
//!
//! Data structures matching backend entities.

mod idea;
mod identity;
mod status;
mod tag;

pub use idea::{Idea, IdeaNumber, IdeaResponse};
pub use identity::{AppSettings, CurrentUser, Role, Tenant, User};
pub use status::IdeaStatus;
pub use tag::{tags_with_ids, visible_tags, Tag};
