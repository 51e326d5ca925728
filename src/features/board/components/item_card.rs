use leptos::prelude::*;
use std::sync::Arc;

use crate::features::board::dnd::{make_on_card_mousemove, make_on_mousedown, DragState, DropTarget};
use crate::models::Item;

#[component]
pub fn ItemCard(
    #[prop(into)] item: Item,
    #[prop(into)] column_id: String,
    index: usize,
    drag: DragState,
    on_open: Arc<dyn Fn(Item) + Send + Sync + 'static>,
) -> impl IntoView {
    let card_id = item.id.clone();
    let created = item
        .created_at
        .format("Created %Y-%m-%d %H:%M UTC")
        .to_string();

    let id_for_class = card_id.clone();
    let col_for_before = column_id.clone();
    let col_for_after = column_id.clone();
    let item_for_click = item.clone();

    view! {
        <div
            class="item-card"
            title=created
            class:dragging=move || drag.dragging.with(|d| d.as_deref() == Some(id_for_class.as_str()))
            class:drop-before=move || {
                drag.target
                    .with(|t| matches!(t, Some(DropTarget::Slot { column, index: i }) if *i == index && column == &col_for_before))
            }
            class:drop-after=move || {
                drag.target
                    .with(|t| matches!(t, Some(DropTarget::Slot { column, index: i }) if *i == index + 1 && column == &col_for_after))
            }
            on:mousedown=make_on_mousedown(drag, card_id.clone())
            on:mousemove=make_on_card_mousemove(drag, column_id.clone(), index, card_id.clone())
            on:click=move |_| {
                // A mouseup that ended a drag fires a click right after; skip it
                if drag.drag_just_ended.get_untracked() {
                    return;
                }
                on_open(item_for_click.clone());
            }
        >
            <div class="item-content">{item.content.clone()}</div>
            {(!item.assignee.is_empty())
                .then(|| view! { <div class="item-assignee">{format!("👤 {}", item.assignee)}</div> })}
            <span class="priority-badge" class:urgent=item.priority.is_urgent()>
                {item.priority.as_str()}
            </span>
        </div>
    }
}
