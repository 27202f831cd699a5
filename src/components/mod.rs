//! UI Components
//!
//! Leptos views over the widget controllers.

mod alert_box;
mod idea_list;
mod show_idea;
mod show_tag;
mod sign_in_modal;
mod status_label;
mod support_counter;
mod tags_panel;

pub use alert_box::{AlertBox, AlertNotifier};
pub use idea_list::IdeaList;
pub use show_idea::ShowIdea;
pub use show_tag::ShowTag;
pub use sign_in_modal::{ModalSignIn, SignInModal};
pub use status_label::StatusLabel;
pub use support_counter::SupportCounter;
pub use tags_panel::TagsPanel;
