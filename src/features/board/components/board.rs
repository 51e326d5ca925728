use leptos::html::Dialog;
use leptos::prelude::*;
use std::sync::Arc;

use super::{BoardColumn, ItemModal};
use crate::features::board::dnd::{bind_global_mouseup, DragState, DropTarget};
use crate::models::{Board, Item};

// Slot indexes count the dragged card when it sits earlier in the same
// column, but `move_item` inserts after taking it out, so shift those down.
fn resolve_index(board: &Board, dragged: &str, target: &DropTarget) -> usize {
    match target {
        DropTarget::Slot { column, index } => match board.position_of(dragged) {
            Some((col, idx)) if board.columns[col].id == *column && idx < *index => index - 1,
            _ => *index,
        },
        DropTarget::ColumnEnd { column } => {
            board.column(column).map(|col| col.items.len()).unwrap_or(0)
        }
    }
}

/// The drag-and-drop board. Renders the handed-in board, lets the user drag
/// cards between and within columns and edit a card through a modal, and
/// reports every resulting board through `on_change`. It never touches the
/// canonical state itself.
#[component]
pub fn KanbanBoardWidget(
    #[prop(into)] board: Signal<Board>,
    on_change: Arc<dyn Fn(Board) + Send + Sync + 'static>,
) -> impl IntoView {
    // Working copy the drag preview mutates; the page stays canonical
    let working = RwSignal::new(board.get_untracked());

    // A changed input resets the working copy
    Effect::new(move |_| {
        let incoming = board.get();
        if working.with_untracked(|current| current != &incoming) {
            working.set(incoming);
        }
    });

    let drag = DragState::new();
    let (editing_item, set_editing_item) = signal::<Option<Item>>(None);
    let edit_dialog_ref: NodeRef<Dialog> = NodeRef::new();

    // Crossing into another column moves the card right away, so the live
    // preview always matches what releasing would produce
    Effect::new(move |_| {
        let Some(target) = drag.target.get() else {
            return;
        };
        let Some(dragging) = drag.dragging.get() else {
            return;
        };
        let moved = working.with_untracked(|current| {
            let from = current.column_of(&dragging).map(|col| col.id.clone());
            if from.as_deref() == Some(target.column()) {
                return None;
            }
            let index = resolve_index(current, &dragging, &target);
            current.move_item(&dragging, target.column(), index).ok()
        });
        if let Some(next) = moved {
            working.set(next);
        }
    });

    // Drop handler: commit the final slot, then report the board when it
    // differs from the input value
    {
        let on_change = on_change.clone();
        bind_global_mouseup(drag, move |dragged: String, target: Option<DropTarget>| {
            let current = working.get_untracked();
            let next = match target {
                Some(target) => {
                    let index = resolve_index(&current, &dragged, &target);
                    match current.move_item(&dragged, target.column(), index) {
                        Ok(next) => next,
                        Err(e) => {
                            web_sys::console::error_1(&format!("Drop ignored: {}", e).into());
                            current
                        }
                    }
                }
                // Released outside every slot: keep the preview moves
                None => current,
            };
            working.set(next.clone());
            if next != board.get_untracked() {
                on_change(next);
            }
        });
    }

    let open_item: Arc<dyn Fn(Item) + Send + Sync> = Arc::new(move |item: Item| {
        set_editing_item.set(Some(item));
        if let Some(dialog) = edit_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    });

    let on_change_for_edit = on_change.clone();

    view! {
        <div class="kanban-board">
            {move || {
                let open_item = open_item.clone();
                working
                    .get()
                    .columns
                    .into_iter()
                    .map(|column| {
                        view! { <BoardColumn column=column drag=drag on_open=open_item.clone() /> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>

        {move || {
            editing_item
                .get()
                .map(|item| {
                    let save_callback = {
                        let on_change = on_change_for_edit.clone();
                        Box::new(move |updated: Item| {
                            let current = working.get_untracked();
                            match current.update_item(updated) {
                                Ok(next) => {
                                    working.set(next.clone());
                                    on_change(next);
                                }
                                Err(e) => {
                                    web_sys::console::error_1(
                                        &format!("Edit ignored: {}", e).into(),
                                    );
                                }
                            }
                            set_editing_item.set(None);
                        }) as Box<dyn Fn(Item) + 'static>
                    };

                    view! { <ItemModal item=item on_save=save_callback dialog_ref=edit_dialog_ref /> }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(column: &str, index: usize) -> DropTarget {
        DropTarget::Slot {
            column: column.to_string(),
            index,
        }
    }

    #[test]
    fn slot_below_the_dragged_card_shifts_down() {
        // todo = [item-1, item-2, item-3]; dropping item-1 after item-2
        // shows the marker at slot 2 and must land at post-removal index 1
        let board = Board::sample();
        assert_eq!(resolve_index(&board, "item-1", &slot("todo", 2)), 1);
    }

    #[test]
    fn slot_above_the_dragged_card_is_unchanged() {
        let board = Board::sample();
        assert_eq!(resolve_index(&board, "item-3", &slot("todo", 1)), 1);
    }

    #[test]
    fn cross_column_slots_are_unchanged() {
        let board = Board::sample();
        assert_eq!(resolve_index(&board, "item-1", &slot("in-progress", 1)), 1);
    }

    #[test]
    fn column_end_targets_the_column_length() {
        let board = Board::sample();
        let end = DropTarget::ColumnEnd {
            column: "todo".to_string(),
        };
        // Same-column length still counts the dragged card; move_item clamps
        assert_eq!(resolve_index(&board, "item-4", &end), 3);
        assert_eq!(resolve_index(&board, "item-1", &end), 3);
    }

    #[test]
    fn widget_callbacks_can_ride_in_view_closures() {
        // Dynamic view children are render closures and require Send captures
        fn view_closure<F: Fn() + Send + 'static>(f: F) -> F {
            f
        }

        let props = KanbanBoardWidgetProps::builder()
            .board(RwSignal::new(Board::sample()))
            .on_change(Arc::new(|_: Board| {}) as Arc<dyn Fn(Board) + Send + Sync>)
            .build();

        let on_change = props.on_change;
        let on_open: Arc<dyn Fn(Item) + Send + Sync> = Arc::new(|_| {});
        let render = view_closure(move || {
            on_change(Board::sample());
            on_open(Board::sample().columns[0].items[0].clone());
        });
        render();
    }
}
