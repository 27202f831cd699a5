//! Idea Status
//!
//! Fixed lifecycle table. Closed statuses accept no further votes.

use std::fmt;

use crate::error::ModelError;

/// Lifecycle status of an idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdeaStatus {
    Open,
    Planned,
    Started,
    Completed,
    Declined,
}

impl IdeaStatus {
    /// All statuses in display order
    pub const ALL: [IdeaStatus; 5] = [
        IdeaStatus::Open,
        IdeaStatus::Planned,
        IdeaStatus::Started,
        IdeaStatus::Completed,
        IdeaStatus::Declined,
    ];

    /// Look up a status by its wire code.
    pub fn from_code(code: i32) -> Result<Self, ModelError> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .ok_or(ModelError::UnknownStatus(code))
    }

    pub fn code(self) -> i32 {
        match self {
            IdeaStatus::Open => 0,
            IdeaStatus::Started => 1,
            IdeaStatus::Completed => 2,
            IdeaStatus::Declined => 3,
            IdeaStatus::Planned => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            IdeaStatus::Open => "Open",
            IdeaStatus::Planned => "Planned",
            IdeaStatus::Started => "Started",
            IdeaStatus::Completed => "Completed",
            IdeaStatus::Declined => "Declined",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            IdeaStatus::Open => "open",
            IdeaStatus::Planned => "planned",
            IdeaStatus::Started => "started",
            IdeaStatus::Completed => "completed",
            IdeaStatus::Declined => "declined",
        }
    }

    /// Whether a status label is rendered next to the idea
    pub fn show(self) -> bool {
        !matches!(self, IdeaStatus::Open)
    }

    /// Closed ideas accept no voting or tagging
    pub fn closed(self) -> bool {
        matches!(self, IdeaStatus::Completed | IdeaStatus::Declined)
    }

    /// Color hint for the status label (Open has none)
    pub fn color(self) -> Option<&'static str> {
        match self {
            IdeaStatus::Open => None,
            IdeaStatus::Planned => Some("violet"),
            IdeaStatus::Started => Some("blue"),
            IdeaStatus::Completed => Some("green"),
            IdeaStatus::Declined => Some("red"),
        }
    }
}

impl TryFrom<i32> for IdeaStatus {
    type Error = ModelError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
