//! Export controls for table pages

use leptos::*;
use safebite_core::export;

/// Download anchor carrying the current table as a CSV data URL
#[component]
pub fn ExportCsvButton(
    /// Suggested download filename
    #[prop(into)]
    filename: String,
    /// CSV text for the current filtered rows
    #[prop(into)]
    csv: Signal<String>,
) -> impl IntoView {
    view! {
        <a
            class="btn export-btn"
            download=filename
            href=move || export::csv_data_url(&csv.get())
        >
            "Export CSV"
        </a>
    }
}

/// Best-effort PDF export through the browser's print dialog
#[component]
pub fn PrintButton() -> impl IntoView {
    view! {
        <button
            class="btn print-btn"
            on:click=move |_| {
                if let Some(window) = web_sys::window() {
                    let _ = window.print();
                }
            }
        >
            "Print / PDF"
        </button>
    }
}
