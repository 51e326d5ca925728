use leptos::prelude::*;

use super::{RemoveTickets, TicketForm};
use crate::features::board::hooks::StatusLine;
use crate::models::{Board, TicketDraft};

/// Collapsible management section: add form on the left, remove multi-select
/// on the right, shared status line and the demo-data reset underneath.
#[component]
pub fn TicketPanel(
    #[prop(into)] board: Signal<Board>,
    #[prop(into)] status: ReadSignal<Option<StatusLine>>,
    on_add: Box<dyn Fn(TicketDraft) + 'static>,
    on_remove: Box<dyn Fn(Vec<String>) + 'static>,
    on_reset: Box<dyn Fn() + 'static>,
) -> impl IntoView {
    // Closed by default; the body stays mounted so selections survive a
    // collapse
    let expanded = RwSignal::new(false);

    view! {
        <section class="ticket-panel">
            <button
                type="button"
                class="panel-toggle"
                on:click=move |_| expanded.update(|open| *open = !*open)
            >
                {move || if expanded.get() { "▾ Ticket Management" } else { "▸ Ticket Management" }}
            </button>
            <div class="panel-body" class:collapsed=move || !expanded.get()>
                <div class="panel-columns">
                    <TicketForm on_add=on_add />
                    <RemoveTickets board=board on_remove=on_remove />
                </div>
                {move || {
                    status
                        .get()
                        .map(|line| {
                            let (class, message) = match line {
                                StatusLine::Success(message) => ("status-line success", message),
                                StatusLine::Error(message) => ("status-line error", message),
                            };
                            view! { <p class=class>{message}</p> }
                        })
                }}
                <button type="button" class="btn-secondary reset-demo" on:click=move |_| on_reset()>
                    "Reset demo data"
                </button>
            </div>
        </section>
    }
}
