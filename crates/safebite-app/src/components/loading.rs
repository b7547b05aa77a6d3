//! Loading and error state components

use leptos::*;

/// Loading spinner component
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}

/// Inline error banner shown when a fetch fails
#[component]
pub fn ErrorNotice(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-notice" role="alert">
            <span class="error-notice-label">"Could not load data: "</span>
            <span class="error-notice-message">{message}</span>
        </div>
    }
}
