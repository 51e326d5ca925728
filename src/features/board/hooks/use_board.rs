use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

use crate::commands::{is_dev_mode, load_board_state, reset_board_state, save_board_state};
use crate::features::board::services::session_id;
use crate::models::{Board, TicketDraft};

/// Outcome line shown by the ticket panel.
#[derive(Clone, Debug, PartialEq)]
pub enum StatusLine {
    Success(String),
    Error(String),
}

/// Everything the page needs to drive the board: the canonical state, the
/// host session it belongs to, and the handlers the panel and the widget
/// call into.
pub struct BoardHook {
    pub session: String,
    /// `None` until the first load from the host settles
    pub board: ReadSignal<Option<Board>>,
    pub dev_mode: ReadSignal<bool>,
    pub status: ReadSignal<Option<StatusLine>>,
    pub add_ticket: Box<dyn Fn(TicketDraft) + 'static>,
    pub remove_tickets: Box<dyn Fn(Vec<String>) + 'static>,
    /// Boards reported by the widget pass through here; invalid ones are
    /// dropped with a message instead of replacing the canonical state
    pub accept_board: Arc<dyn Fn(Board) + Send + Sync + 'static>,
    pub reset_board: Box<dyn Fn() + 'static>,
}

fn save_failure(e: &str) -> StatusLine {
    StatusLine::Error(format!("Could not save the board to the host: {}", e))
}

// Every save to the host goes through here; failures land in the status line
async fn push_board_now(session: &str, board: &Board, set_status: WriteSignal<Option<StatusLine>>) {
    if let Err(e) = save_board_state(session, board).await {
        web_sys::console::error_1(&format!("Failed to push board to host: {}", e).into());
        set_status.set(Some(save_failure(&e)));
    }
}

// Background variant for the panel and widget handlers
fn push_board(session: String, board: Board, set_status: WriteSignal<Option<StatusLine>>) {
    spawn_local(async move { push_board_now(&session, &board, set_status).await });
}

pub fn use_board() -> BoardHook {
    let session = session_id();
    let board = RwSignal::new(None::<Board>);
    let (dev_mode, set_dev_mode) = signal(false);
    let (status, set_status) = signal(None::<StatusLine>);

    // Load the session's board on mount; first access seeds the demo data
    {
        let session = session.clone();
        spawn_local(async move {
            match load_board_state(&session).await {
                Ok(Some(stored)) => board.set(Some(stored)),
                Ok(None) => {
                    let seeded = Board::sample();
                    push_board_now(&session, &seeded, set_status).await;
                    board.set(Some(seeded));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load board: {}", e).into());
                    set_status.set(Some(StatusLine::Error(format!(
                        "Could not load the saved board: {}",
                        e
                    ))));
                    // Still usable: fall back to fresh demo data for this page
                    board.set(Some(Board::sample()));
                }
            }
        });
    }

    spawn_local(async move {
        match is_dev_mode().await {
            Ok(dev) => set_dev_mode.set(dev),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to query host mode: {}", e).into());
            }
        }
    });

    let add_ticket = {
        let session = session.clone();
        Box::new(move |draft: TicketDraft| {
            let Some(current) = board.get_untracked() else {
                return;
            };
            match current.add_ticket(draft) {
                Ok((next, item)) => {
                    let column_title = next
                        .columns
                        .first()
                        .map(|col| col.title.clone())
                        .unwrap_or_default();
                    board.set(Some(next.clone()));
                    set_status.set(Some(StatusLine::Success(format!(
                        "Added '{}' to {}",
                        item.content, column_title
                    ))));
                    push_board(session.clone(), next, set_status);
                }
                Err(e) => set_status.set(Some(StatusLine::Error(e.to_string()))),
            }
        }) as Box<dyn Fn(TicketDraft) + 'static>
    };

    let remove_tickets = {
        let session = session.clone();
        Box::new(move |ids: Vec<String>| {
            let Some(current) = board.get_untracked() else {
                return;
            };
            // Ids already gone from the board are not counted
            let removed = ids.iter().filter(|id| current.find_item(id).is_some()).count();
            let next = current.remove_tickets(&ids);
            board.set(Some(next.clone()));
            set_status.set(Some(StatusLine::Success(format!(
                "Removed {} ticket(s)",
                removed
            ))));
            push_board(session.clone(), next, set_status);
        }) as Box<dyn Fn(Vec<String>) + 'static>
    };

    let accept_board = {
        let session = session.clone();
        Arc::new(move |incoming: Board| {
            let Some(current) = board.get_untracked() else {
                return;
            };
            if incoming == current {
                return;
            }
            match current.validate_update(&incoming) {
                Ok(()) => {
                    board.set(Some(incoming.clone()));
                    push_board(session.clone(), incoming, set_status);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Rejected board from widget: {}", e).into(),
                    );
                    set_status.set(Some(StatusLine::Error(format!(
                        "Ignored an invalid board update: {}",
                        e
                    ))));
                }
            }
        }) as Arc<dyn Fn(Board) + Send + Sync + 'static>
    };

    let reset_board = {
        let session = session.clone();
        Box::new(move || {
            let seeded = Board::sample();
            board.set(Some(seeded.clone()));
            set_status.set(Some(StatusLine::Success("Demo data restored".to_string())));

            let session = session.clone();
            spawn_local(async move {
                if let Err(e) = reset_board_state(&session).await {
                    web_sys::console::error_1(
                        &format!("Failed to reset host session: {}", e).into(),
                    );
                }
                push_board_now(&session, &seeded, set_status).await;
            });
        }) as Box<dyn Fn() + 'static>
    };

    BoardHook {
        session,
        board: board.read_only(),
        dev_mode,
        status,
        add_ticket,
        remove_tickets,
        accept_board,
        reset_board,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_failed_save_surfaces_as_an_error_status() {
        assert_eq!(
            save_failure("host unreachable"),
            StatusLine::Error(
                "Could not save the board to the host: host unreachable".to_string()
            )
        );
    }
}
