use leptos::prelude::*;
use std::sync::Arc;

use super::ItemCard;
use crate::features::board::dnd::{make_on_column_mousemove, DragState};
use crate::models::{Column, Item};

#[component]
pub fn BoardColumn(
    #[prop(into)] column: Column,
    drag: DragState,
    on_open: Arc<dyn Fn(Item) + Send + Sync + 'static>,
) -> impl IntoView {
    let column_id = column.id.clone();
    let id_for_class = column.id.clone();
    let count = column.items.len();

    view! {
        <div
            class="board-column"
            class:drop-target=move || {
                drag.target.with(|t| t.as_ref().map(|t| t.column()) == Some(id_for_class.as_str()))
            }
            on:mousemove=make_on_column_mousemove(drag, column_id)
        >
            <div class="column-header">
                <h3>{column.title.clone()}</h3>
                <span class="item-count">{count}</span>
            </div>
            <div class="column-content">
                {column
                    .items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        view! {
                            <ItemCard
                                item=item.clone()
                                column_id=column.id.clone()
                                index=index
                                drag=drag
                                on_open=on_open.clone()
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
