//! Widget Controllers
//!
//! Framework-independent state machines behind the interactive widgets.
//! Components in `crate::components` render them.

mod support;
mod tags;

pub use support::{ClickOutcome, SupportCounter, SupportState};
pub use tags::{TagOutcome, TagRow, TagsPanel, TagsPanelState};
