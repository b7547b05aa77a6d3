//! Table helpers shared by the list pages

use leptos::*;

/// The explicit empty state: one row spanning all columns. Rendered instead
/// of an empty table body so a filtered-out table never looks broken.
#[component]
pub fn EmptyRow(
    /// Column count of the owning table
    colspan: u32,
    /// Override for the placeholder text
    #[prop(default = "No Data Available")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <tr class="empty-row">
            <td class="empty-cell" colspan=colspan>{message}</td>
        </tr>
    }
}
