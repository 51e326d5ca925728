use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    /// Unknown strings fall back to Medium, the form's default choice.
    pub fn from_str(s: &str) -> Self {
        match s {
            "Low" => Priority::Low,
            "High" => Priority::High,
            "Critical" => Priority::Critical,
            _ => Priority::Medium,
        }
    }

    pub fn all() -> Vec<Priority> {
        vec![
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Critical,
        ]
    }

    /// High and Critical cards get the warning tint in the board view.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Priority::High | Priority::Critical)
    }
}

/// A single ticket on the board.
///
/// The wire shape matches what the widget exchanges with the page: `id`,
/// `content`, `description`, `assignee`, `priority`. `created_at` is
/// additive and defaults to the epoch when an older payload omits it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(draft: TicketDraft) -> Self {
        Self {
            // Random ids instead of a count-derived suffix: counting breaks
            // as soon as a removal is followed by an addition.
            id: format!("item-{}", Uuid::new_v4()),
            content: draft.title,
            description: draft.description,
            assignee: draft.assignee,
            priority: draft.priority,
            created_at: Utc::now(),
        }
    }
}

/// Form input for a new ticket, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub priority: Priority,
}
