//! Stat card widget for labeled summary numbers

use leptos::*;

/// A labeled numeric summary card
#[component]
pub fn StatCard(
    /// Card label
    #[prop(into)]
    label: String,
    /// Rendered value
    #[prop(into)]
    value: String,
    /// Optional secondary line
    #[prop(optional, into)]
    hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
            {hint.map(|hint| view! { <div class="stat-hint">{hint}</div> })}
        </div>
    }
}
