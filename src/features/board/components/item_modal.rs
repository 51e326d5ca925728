use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::models::{Item, Priority};

#[component]
pub fn ItemModal(
    #[prop(into)] item: Item,
    #[prop(into)] on_save: Box<dyn Fn(Item) + 'static>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (content, set_content) = signal(item.content.clone());
    let (description, set_description) = signal(item.description.clone());
    let (assignee, set_assignee) = signal(item.assignee.clone());
    let (priority, set_priority) = signal(item.priority);

    let base = item.clone();

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        // Same id and creation time, edited fields on top
        let updated = Item {
            id: base.id.clone(),
            content: content.get_untracked(),
            description: description.get_untracked(),
            assignee: assignee.get_untracked(),
            priority: priority.get_untracked(),
            created_at: base.created_at,
        };
        on_save(updated);

        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    // Closing without saving puts the original values back
    let close_modal = {
        let item = item.clone();
        move |_| {
            set_content.set(item.content.clone());
            set_description.set(item.description.clone());
            set_assignee.set(item.assignee.clone());
            set_priority.set(item.priority);
            if let Some(dialog) = dialog_ref.get() {
                dialog.close();
            }
        }
    };
    let close_modal_x = close_modal.clone();

    view! {
        <dialog node_ref=dialog_ref class="item-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"Edit Ticket"</h3>
                    <button type="button" class="modal-close" on:click=close_modal_x>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"Title"</label>
                        <input
                            type="text"
                            on:input=move |ev| set_content.set(event_target_value(&ev))
                            prop:value=move || content.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"Description"</label>
                        <textarea
                            rows="4"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label>"Assignee"</label>
                        <input
                            type="text"
                            on:input=move |ev| set_assignee.set(event_target_value(&ev))
                            prop:value=move || assignee.get()
                        />
                    </div>
                    <div class="form-group">
                        <label>"Priority"</label>
                        <select
                            on:change=move |ev| set_priority.set(Priority::from_str(&event_target_value(&ev)))
                            prop:value=move || priority.get().as_str().to_string()
                        >
                            {Priority::all()
                                .into_iter()
                                .map(|p| view! { <option value=p.as_str()>{p.as_str()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"Cancel"</button>
                        <button type="submit" class="btn-primary">"Save"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
