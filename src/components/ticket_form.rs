use leptos::prelude::*;
use leptos::ev;

use crate::models::{BoardError, Priority, TicketDraft};

#[component]
pub fn TicketForm(#[prop(into)] on_add: Box<dyn Fn(TicketDraft) + 'static>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (assignee, set_assignee) = signal(String::new());
    let (priority, set_priority) = signal(Priority::default());
    let (form_error, set_form_error) = signal(None::<String>);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        if title.get_untracked().trim().is_empty() {
            set_form_error.set(Some(BoardError::EmptyTitle.to_string()));
            return;
        }
        set_form_error.set(None);

        on_add(TicketDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            assignee: assignee.get_untracked(),
            priority: priority.get_untracked(),
        });

        set_title.set(String::new());
        set_description.set(String::new());
        set_assignee.set(String::new());
        set_priority.set(Priority::default());
    };

    view! {
        <div class="add-ticket">
            <h4>"Add New Ticket"</h4>
            <form on:submit=handle_submit>
                <div class="form-group">
                    <label>"Title"</label>
                    <input
                        type="text"
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        prop:value=move || title.get()
                    />
                    {move || {
                        form_error.get().map(|message| view! { <p class="form-error">{message}</p> })
                    }}
                </div>
                <div class="form-group">
                    <label>"Description"</label>
                    <textarea
                        rows="3"
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
                <button type="submit" class="btn-primary">"Add Ticket"</button>
            </form>
        </div>
    }
}
