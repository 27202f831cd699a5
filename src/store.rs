//! Page Store
//!
//! Server-rendered snapshot for this page load, read once from the
//! session and exposed with reactive_stores field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::SessionResult;
use crate::models::{Idea, Tag};
use crate::session::Session;

#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Ideas listed on the home page
    pub ideas: Vec<Idea>,
    /// Idea shown on its own page
    pub idea: Option<Idea>,
    /// Full tag catalog of the tenant
    pub tags: Vec<Tag>,
}

impl PageState {
    pub fn from_session(session: &Session) -> SessionResult<Self> {
        Ok(Self {
            ideas: session.get_array("ideas")?,
            idea: session.get("idea")?,
            tags: session.get_array("tags")?,
        })
    }
}

pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}
