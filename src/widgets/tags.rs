//! Tags Panel Controller
//!
//! Tracks which catalog tags are assigned to one idea and whether the
//! panel is in editing mode. Editing requires the collaborator role and a
//! non-empty catalog.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ServiceError;
use crate::models::{tags_with_ids, Idea, IdeaNumber, Tag};
use crate::services::{Notifier, Services, TagService};
use crate::session::Session;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagsPanelState {
    pub assigned: Vec<Tag>,
    pub is_editing: bool,
}

impl TagsPanelState {
    pub fn is_assigned(&self, tag_id: u32) -> bool {
        self.assigned.iter().any(|t| t.id == tag_id)
    }

    /// Add a confirmed assignment; already-assigned tags are kept once
    fn add(&mut self, tag: Tag) {
        if !self.is_assigned(tag.id) {
            self.assigned.push(tag);
        }
    }

    fn remove(&mut self, tag_id: u32) {
        self.assigned.retain(|t| t.id != tag_id);
    }
}

/// Result of selecting a tag in editing mode
#[derive(Debug, Clone, PartialEq)]
pub enum TagOutcome {
    /// Not editing, unknown tag, or a request for this tag still in flight
    Ignored,
    Assigned(Tag),
    Unassigned(Tag),
    Failed(ServiceError),
}

/// One catalog entry as shown in editing mode
#[derive(Debug, Clone, PartialEq)]
pub struct TagRow {
    pub tag: Tag,
    pub assigned: bool,
}

pub struct TagsPanel {
    idea: IdeaNumber,
    catalog: Vec<Tag>,
    can_edit: bool,
    state: RefCell<TagsPanelState>,
    pending: RefCell<Vec<u32>>,
    tags: Rc<dyn TagService>,
    notifier: Rc<dyn Notifier>,
}

impl TagsPanel {
    pub fn new(idea: &Idea, catalog: Vec<Tag>, session: &Session, services: &Services) -> Self {
        let can_edit = session.is_collaborator() && !catalog.is_empty();
        let assigned = tags_with_ids(&catalog, &idea.tags);
        Self {
            idea: idea.number,
            catalog,
            can_edit,
            state: RefCell::new(TagsPanelState {
                assigned,
                is_editing: false,
            }),
            pending: RefCell::new(Vec::new()),
            tags: services.tags.clone(),
            notifier: services.notifier.clone(),
        }
    }

    pub fn can_edit(&self) -> bool {
        self.can_edit
    }

    /// Hidden for viewers who cannot edit when nothing is assigned
    pub fn is_visible(&self) -> bool {
        self.can_edit || !self.state.borrow().assigned.is_empty()
    }

    pub fn state(&self) -> TagsPanelState {
        self.state.borrow().clone()
    }

    /// Full catalog with check marks, for editing mode
    pub fn rows(&self) -> Vec<TagRow> {
        let state = self.state.borrow();
        self.catalog
            .iter()
            .map(|tag| TagRow {
                tag: tag.clone(),
                assigned: state.is_assigned(tag.id),
            })
            .collect()
    }

    /// Flip editing mode; returns the resulting mode.
    pub fn toggle_editing(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if self.can_edit {
            state.is_editing = !state.is_editing;
        }
        state.is_editing
    }

    pub async fn assign_or_unassign(&self, tag_id: u32) -> TagOutcome {
        if !self.can_edit || !self.state.borrow().is_editing {
            return TagOutcome::Ignored;
        }
        let Some(tag) = self.catalog.iter().find(|t| t.id == tag_id).cloned() else {
            return TagOutcome::Ignored;
        };
        if self.pending.borrow().contains(&tag_id) {
            return TagOutcome::Ignored;
        }

        let unassign = self.state.borrow().is_assigned(tag_id);
        self.pending.borrow_mut().push(tag_id);
        let result = if unassign {
            self.tags.unassign(&tag.slug, self.idea).await
        } else {
            self.tags.assign(&tag.slug, self.idea).await
        };
        self.pending.borrow_mut().retain(|id| *id != tag_id);

        match result {
            Ok(()) if unassign => {
                self.state.borrow_mut().remove(tag_id);
                log::debug!("[TAGS] idea {} unassigned '{}'", self.idea, tag.slug);
                TagOutcome::Unassigned(tag)
            }
            Ok(()) => {
                self.state.borrow_mut().add(tag.clone());
                log::debug!("[TAGS] idea {} assigned '{}'", self.idea, tag.slug);
                TagOutcome::Assigned(tag)
            }
            Err(err) => {
                log::warn!("[TAGS] idea {} tag '{}' failed: {}", self.idea, tag.slug, err);
                self.notifier.error(&err.user_message());
                TagOutcome::Failed(err)
            }
        }
    }
}
