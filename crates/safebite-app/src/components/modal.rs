//! Modal dialog shell

use leptos::*;

/// Modal dialog with a backdrop. Clicking the backdrop or the close button
/// fires `on_close`; clicks inside the dialog stay inside.
#[component]
pub fn Modal(
    /// Dialog title
    #[prop(into)]
    title: String,
    /// Whether the dialog is shown
    #[prop(into)]
    open: Signal<bool>,
    /// Callback when the user dismisses the dialog
    #[prop(into)]
    on_close: Callback<()>,
    /// Dialog body
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.call(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3>{title.clone()}</h3>
                        <button class="modal-close" on:click=move |_| on_close.call(())>
                            "\u{00d7}"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
