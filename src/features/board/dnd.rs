//! Board Drag and Drop
//!
//! Mouse-event drag and drop for the kanban widget. A movement threshold
//! distinguishes click from drag; drop slots are computed from the pointer
//! position against each card's vertical midpoint.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Where the dragged card would land.
#[derive(Clone, Debug, PartialEq)]
pub enum DropTarget {
    /// A slot in a column's card list (insert before the card at `index`)
    Slot { column: String, index: usize },
    /// The empty space below a column's cards
    ColumnEnd { column: String },
}

impl DropTarget {
    pub fn column(&self) -> &str {
        match self {
            DropTarget::Slot { column, .. } => column,
            DropTarget::ColumnEnd { column } => column,
        }
    }
}

/// Drag state shared by the whole widget tree.
#[derive(Clone, Copy)]
pub struct DragState {
    /// Card under a mousedown that has not crossed the threshold yet
    pub pending: RwSignal<Option<String>>,
    /// Card being dragged
    pub dragging: RwSignal<Option<String>>,
    pub target: RwSignal<Option<DropTarget>>,
    /// Set for a beat after a drop so the synthetic click can be ignored
    pub drag_just_ended: RwSignal<bool>,
    start_x: RwSignal<i32>,
    start_y: RwSignal<i32>,
}

impl DragState {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
            dragging: RwSignal::new(None),
            target: RwSignal::new(None),
            drag_just_ended: RwSignal::new(false),
            start_x: RwSignal::new(0),
            start_y: RwSignal::new(0),
        }
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::new()
    }
}

/// End drag operation
pub fn end_drag(state: &DragState) {
    state.dragging.set(None);
    state.target.set(None);
    state.pending.set(None);
    state.drag_just_ended.set(true);

    if let Some(win) = web_sys::window() {
        let clear = state.drag_just_ended;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            100,
        );
        cb.forget();
    }
}

/// Create mousedown handler for draggable cards.
/// Records a pending drag with the start position.
pub fn make_on_mousedown(state: DragState, item_id: String) -> impl Fn(web_sys::MouseEvent) + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                    return;
                }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                    return;
                }
            }
            state.pending.set(Some(item_id.clone()));
            state.start_x.set(ev.client_x());
            state.start_y.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for a card: picks the slot before or after the
/// card depending on which side of its midpoint the pointer is on.
pub fn make_on_card_mousemove(
    state: DragState,
    column: String,
    index: usize,
    card_id: String,
) -> impl Fn(web_sys::MouseEvent) + 'static {
    move |ev: web_sys::MouseEvent| {
        let Some(dragging) = state.dragging.get_untracked() else {
            return;
        };
        // Keep the column-level handler from overriding the slot
        ev.stop_propagation();
        // Hovering the dragged card itself changes nothing
        if dragging == card_id {
            return;
        }

        let Some(el) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let before = (ev.client_y() as f64) < rect.top() + rect.height() / 2.0;
        let slot = DropTarget::Slot {
            column: column.clone(),
            index: if before { index } else { index + 1 },
        };
        if state.target.with_untracked(|t| t.as_ref() != Some(&slot)) {
            state.target.set(Some(slot));
        }
    }
}

/// Create mousemove handler for a column's own surface (the space below its
/// cards): targets the end of that column.
pub fn make_on_column_mousemove(
    state: DragState,
    column: String,
) -> impl Fn(web_sys::MouseEvent) + 'static {
    move |_ev: web_sys::MouseEvent| {
        if state.dragging.get_untracked().is_none() {
            return;
        }
        let end = DropTarget::ColumnEnd {
            column: column.clone(),
        };
        if state.target.with_untracked(|t| t.as_ref() != Some(&end)) {
            state.target.set(Some(end));
        }
    }
}

/// Create mousemove handler for document - starts the drag once the pointer
/// has moved far enough from the mousedown position.
pub fn bind_global_mousemove(state: DragState) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = state.pending.get_untracked();

        if pending.is_some() && state.dragging.get_untracked().is_none() {
            let dx = (ev.client_x() - state.start_x.get_untracked()).abs();
            let dy = (ev.client_y() - state.start_y.get_untracked()).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                state.dragging.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback(
                "mousemove",
                on_mousemove.as_ref().unchecked_ref(),
            );
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection. Also binds the global
/// mousemove that promotes pending drags.
///
/// `on_drop` fires whenever a real drag ends, with the current target if the
/// pointer was over one. A release outside every slot still ends the drag,
/// and the caller decides what to do with the moves made along the way.
pub fn bind_global_mouseup<F>(state: DragState, on_drop: F)
where
    F: Fn(String, Option<DropTarget>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = state.dragging.get_untracked();
        let target = state.target.get_untracked();

        state.pending.set(None);

        if let Some(dragged) = dragging {
            end_drag(&state);
            on_drop(dragged, target);
        }
        // Otherwise it was a plain click and fires naturally on the card;
        // only a real drag arms the click suppression.
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback(
                "mouseup",
                on_mouseup.as_ref().unchecked_ref(),
            );
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(state);
}
