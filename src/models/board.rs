use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::item::{Item, Priority, TicketDraft};
use super::validate::BoardError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// The whole board. Serializes transparently as the bare column array the
/// host and the widget exchange.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    /// Demo data every fresh session starts from.
    pub fn sample() -> Self {
        fn seed(
            id: &str,
            content: &str,
            description: &str,
            assignee: &str,
            priority: Priority,
        ) -> Item {
            Item {
                id: id.to_string(),
                content: content.to_string(),
                description: description.to_string(),
                assignee: assignee.to_string(),
                priority,
                created_at: Utc::now(),
            }
        }

        Board {
            columns: vec![
                Column {
                    id: "todo".to_string(),
                    title: "To Do".to_string(),
                    items: vec![
                        seed(
                            "item-1",
                            "Research Leptos components",
                            "Read the official documentation and check out examples.",
                            "Domenick",
                            Priority::High,
                        ),
                        seed(
                            "item-2",
                            "Set up Trunk project",
                            "Initialize Trunk, install dependencies, and configure the build.",
                            "AI Assistant",
                            Priority::High,
                        ),
                        seed(
                            "item-3",
                            "Implement Drag and Drop",
                            "Track pointer movement to enable drag and drop between columns.",
                            "Domenick",
                            Priority::Medium,
                        ),
                    ],
                },
                Column {
                    id: "in-progress".to_string(),
                    title: "In Progress".to_string(),
                    items: vec![seed(
                        "item-4",
                        "Write Host Wrapper",
                        "Expose the widget through the host bridge.",
                        "AI Assistant",
                        Priority::Medium,
                    )],
                },
                Column {
                    id: "done".to_string(),
                    title: "Done".to_string(),
                    items: vec![seed(
                        "item-5",
                        "Project Planning",
                        "Outline the features and structure of the widget.",
                        "Team",
                        Priority::Low,
                    )],
                },
            ],
        }
    }

    /// Adds a new ticket to the first column and returns the updated board
    /// together with the created item.
    pub fn add_ticket(&self, draft: TicketDraft) -> Result<(Board, Item), BoardError> {
        if draft.title.trim().is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        let mut next = self.clone();
        let column = next.columns.first_mut().ok_or(BoardError::NoColumns)?;
        let item = Item::new(draft);
        column.items.push(item.clone());
        Ok((next, item))
    }

    /// Drops every item whose id is in `ids`. Ids that are not on the board
    /// are ignored.
    pub fn remove_tickets(&self, ids: &[String]) -> Board {
        let mut next = self.clone();
        for column in &mut next.columns {
            column.items.retain(|item| !ids.contains(&item.id));
        }
        next
    }

    /// Moves an item into `to_column` at `index`. The index is interpreted
    /// after the item has been taken out, so a same-column move behaves like
    /// remove-then-insert; out-of-range indexes clamp to the end.
    pub fn move_item(&self, item_id: &str, to_column: &str, index: usize) -> Result<Board, BoardError> {
        let (from_col, from_idx) = self
            .position_of(item_id)
            .ok_or_else(|| BoardError::UnknownItem(item_id.to_string()))?;
        let to_col = self
            .columns
            .iter()
            .position(|col| col.id == to_column)
            .ok_or_else(|| BoardError::UnknownColumn(to_column.to_string()))?;

        let mut next = self.clone();
        let item = next.columns[from_col].items.remove(from_idx);
        let slot = index.min(next.columns[to_col].items.len());
        next.columns[to_col].items.insert(slot, item);
        Ok(next)
    }

    /// Replaces an existing item in place, keeping its position.
    pub fn update_item(&self, updated: Item) -> Result<Board, BoardError> {
        let (col, idx) = self
            .position_of(&updated.id)
            .ok_or_else(|| BoardError::UnknownItem(updated.id.clone()))?;
        let mut next = self.clone();
        next.columns[col].items[idx] = updated;
        Ok(next)
    }

    pub fn all_items(&self) -> Vec<&Item> {
        self.columns.iter().flat_map(|col| col.items.iter()).collect()
    }

    pub fn find_item(&self, item_id: &str) -> Option<&Item> {
        self.columns
            .iter()
            .flat_map(|col| col.items.iter())
            .find(|item| item.id == item_id)
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.id == column_id)
    }

    /// The column currently holding `item_id`.
    pub fn column_of(&self, item_id: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|col| col.items.iter().any(|item| item.id == item_id))
    }

    /// Column index and in-column index of an item.
    pub fn position_of(&self, item_id: &str) -> Option<(usize, usize)> {
        self.columns.iter().enumerate().find_map(|(ci, col)| {
            col.items
                .iter()
                .position(|item| item.id == item_id)
                .map(|ii| (ci, ii))
        })
    }

    pub fn total_items(&self) -> usize {
        self.columns.iter().map(|col| col.items.len()).sum()
    }
}
