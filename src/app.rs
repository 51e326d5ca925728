use leptos::prelude::*;

use crate::commands::host_available;
use crate::pages::BoardPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <h1>"Kanban Board"</h1>
            <p class="intro">
                "A kanban board demo built with Leptos. Try dragging items between columns!"
            </p>
            {if host_available() {
                view! { <BoardPage /> }.into_any()
            } else {
                view! {
                    <div class="bridge-error">
                        <h2>"Host bridge not found"</h2>
                        <p>
                            "This page expects its host to provide "
                            <code>"window.__KANBAN_HOST__"</code>
                            ". Start the kanban host and open the board through it."
                        </p>
                    </div>
                }
                .into_any()
            }}
        </main>
    }
}
