use leptos::prelude::*;

use crate::models::Board;

/// Read-only dump of the canonical board, refreshed on every change.
#[component]
pub fn StateDump(
    #[prop(into)] board: Signal<Board>,
    #[prop(into)] session: String,
    #[prop(into)] dev_mode: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <section class="state-dump">
            <hr />
            <h3>"Current State"</h3>
            <p class="session-line">
                "Session: " <code>{session}</code>
                {move || {
                    dev_mode.get().then(|| view! { <span class="dev-badge">"dev server"</span> })
                }}
            </p>
            <pre>
                {move || {
                    board
                        .with(|b| serde_json::to_string_pretty(b))
                        .unwrap_or_else(|e| format!("serialization error: {}", e))
                }}
            </pre>
        </section>
    }
}
