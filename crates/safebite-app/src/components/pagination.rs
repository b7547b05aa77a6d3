//! Pagination component for navigating through data

use leptos::*;

/// Pagination controls: Previous / numbered page buttons / Next.
///
/// Page numbers are 1-based; the owning page clamps them before they get
/// here, so the button row always matches the total page count.
#[component]
pub fn Pagination(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,
    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,
    /// Callback when page changes
    #[prop(into)]
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let has_prev = move || current_page.get() > 1;
    let has_next = move || current_page.get() < total_pages.get();

    view! {
        <div class="pagination">
            <button
                class="pagination-btn"
                disabled=move || !has_prev()
                on:click=move |_| {
                    if has_prev() {
                        on_page_change.call(current_page.get() - 1);
                    }
                }
            >
                "Previous"
            </button>

            <For
                each=move || 1..=total_pages.get()
                key=|page| *page
                children=move |page| {
                    view! {
                        <button
                            class=move || {
                                if current_page.get() == page {
                                    "pagination-btn active"
                                } else {
                                    "pagination-btn"
                                }
                            }
                            on:click=move |_| on_page_change.call(page)
                        >
                            {page}
                        </button>
                    }
                }
            />

            <button
                class="pagination-btn"
                disabled=move || !has_next()
                on:click=move |_| {
                    if has_next() {
                        on_page_change.call(current_page.get() + 1);
                    }
                }
            >
                "Next"
            </button>
        </div>
    }
}
