use std::collections::HashSet;

use thiserror::Error;

use super::board::Board;

/// Errors from board operations and from checking boards handed back by the
/// widget.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Ticket title cannot be empty")]
    EmptyTitle,

    #[error("Board has no columns")]
    NoColumns,

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),

    #[error("Duplicate column id: {0}")]
    DuplicateColumn(String),

    #[error("Returned board changed the column set")]
    ColumnsChanged,

    #[error("Returned board changed the item set")]
    ItemsChanged,
}

impl Board {
    /// Checks the structural invariants: column ids unique, item ids unique
    /// across the whole board.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut columns = HashSet::new();
        for column in &self.columns {
            if !columns.insert(column.id.as_str()) {
                return Err(BoardError::DuplicateColumn(column.id.clone()));
            }
        }
        let mut items = HashSet::new();
        for item in self.all_items() {
            if !items.insert(item.id.as_str()) {
                return Err(BoardError::DuplicateItem(item.id.clone()));
            }
        }
        Ok(())
    }

    /// Checks a board handed back by the widget before it replaces `self`.
    /// Dragging rearranges items but never invents, drops or re-homes ids
    /// into unknown columns, so the incoming board must be structurally
    /// valid, keep the column sequence, and keep the same set of item ids.
    pub fn validate_update(&self, incoming: &Board) -> Result<(), BoardError> {
        incoming.validate()?;

        let ours: Vec<(&str, &str)> = self
            .columns
            .iter()
            .map(|col| (col.id.as_str(), col.title.as_str()))
            .collect();
        let theirs: Vec<(&str, &str)> = incoming
            .columns
            .iter()
            .map(|col| (col.id.as_str(), col.title.as_str()))
            .collect();
        if ours != theirs {
            return Err(BoardError::ColumnsChanged);
        }

        let ours: HashSet<&str> = self.all_items().iter().map(|item| item.id.as_str()).collect();
        let theirs: HashSet<&str> = incoming.all_items().iter().map(|item| item.id.as_str()).collect();
        if ours != theirs {
            return Err(BoardError::ItemsChanged);
        }
        Ok(())
    }
}
