pub mod board;
pub mod column;
pub mod item_card;
pub mod item_modal;

pub use board::KanbanBoardWidget;
pub use column::BoardColumn;
pub use item_card::ItemCard;
pub use item_modal::ItemModal;
