use leptos::prelude::*;

use crate::models::{Board, Item};

#[component]
pub fn RemoveTickets(
    #[prop(into)] board: Signal<Board>,
    #[prop(into)] on_remove: Box<dyn Fn(Vec<String>) + 'static>,
) -> impl IntoView {
    let selected = RwSignal::new(Vec::<String>::new());

    let toggle = move |id: String| {
        selected.update(|ids| {
            if let Some(pos) = ids.iter().position(|existing| existing == &id) {
                ids.remove(pos);
            } else {
                ids.push(id);
            }
        });
    };

    let handle_remove = move |_| {
        let ids = selected.get_untracked();
        if ids.is_empty() {
            return;
        }
        on_remove(ids);
        selected.set(Vec::new());
    };

    view! {
        <div class="remove-tickets">
            <h4>"Remove Tickets"</h4>
            <div class="ticket-choices">
                {move || {
                    let items: Vec<Item> = board
                        .with(|b| b.all_items().into_iter().cloned().collect());
                    items
                        .into_iter()
                        .map(|item| {
                            let id = item.id.clone();
                            let id_for_check = item.id.clone();
                            view! {
                                <label class="ticket-choice">
                                    <input
                                        type="checkbox"
                                        checked=move || selected.with(|ids| ids.contains(&id_for_check))
                                        on:change=move |_| toggle(id.clone())
                                    />
                                    <span>{format!("{} ({})", item.content, item.id)}</span>
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <button
                type="button"
                class="btn-secondary"
                disabled=move || selected.with(|ids| ids.is_empty())
                on:click=handle_remove
            >
                "Remove Selected"
            </button>
        </div>
    }
}
