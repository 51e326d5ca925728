pub mod board;
pub mod item;
pub mod validate;


// Export the board types for use throughout the app
pub use board::{Board, Column};
pub use item::{Item, Priority, TicketDraft};
pub use validate::BoardError;
