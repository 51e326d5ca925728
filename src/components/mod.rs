pub mod remove_panel;
pub mod state_dump;
pub mod ticket_form;
pub mod ticket_panel;

pub use remove_panel::RemoveTickets;
pub use state_dump::StateDump;
pub use ticket_form::TicketForm;
pub use ticket_panel::TicketPanel;
