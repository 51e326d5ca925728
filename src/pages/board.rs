use leptos::prelude::*;

use crate::components::{StateDump, TicketPanel};
use crate::features::board::components::KanbanBoardWidget;
use crate::features::board::hooks::{use_board, BoardHook};

#[component]
pub fn BoardPage() -> impl IntoView {
    let BoardHook {
        session,
        board,
        dev_mode,
        status,
        add_ticket,
        remove_tickets,
        accept_board,
        reset_board,
    } = use_board();

    let loaded = move || board.with(|b| b.is_some());
    // The widgets read the board through this; it only ever shows once the
    // load has settled, so the default is never visible
    let board = Signal::derive(move || board.get().unwrap_or_default());

    view! {
        <div class="board-page">
            {move || (!loaded()).then(|| view! { <p class="loading">"Loading board..."</p> })}
            <div class="board-page-content" class:hidden=move || !loaded()>
                <TicketPanel
                    board=board
                    status=status
                    on_add=add_ticket
                    on_remove=remove_tickets
                    on_reset=reset_board
                />
                <KanbanBoardWidget board=board on_change=accept_board />
                <StateDump board=board session=session dev_mode=dev_mode />
            </div>
        </div>
    }
}
