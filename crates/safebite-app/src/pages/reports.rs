//! Detailed spoilage report, server-paginated
//!
//! One parameterized component serves both roles; the scope supplies the
//! endpoint prefix and the copy. Pagination, date range, and category all
//! travel to the backend as query parameters.

use leptos::*;
use safebite_core::export;
use safebite_core::types::{ReportPage, ReportQuery};
use safebite_core::utils::{table_timestamp, ymd};

use crate::api;
use crate::components::{
    EmptyRow, ErrorNotice, ExportCsvButton, Loading, Pagination, PrintButton,
};
use crate::pages::{non_empty, select_value};
use crate::state::{use_app_state, Role};

const REPORT_PAGE_SIZE: u32 = 10;

/// Endpoint prefix and copy for one role's report variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportScope {
    /// Report endpoint
    pub endpoint: &'static str,
    /// Page heading
    pub heading: &'static str,
    /// Short description under the heading
    pub blurb: &'static str,
}

/// Fleet-wide report for admins
pub const ADMIN_REPORT: ReportScope = ReportScope {
    endpoint: "/api/admin/detailed-spoilage-report",
    heading: "Fleet Spoilage Report",
    blurb: "Detailed readings across every registered device.",
};

/// Own-device report for regular users
pub const USER_REPORT: ReportScope = ReportScope {
    endpoint: "/api/users/detailed-spoilage-report",
    heading: "My Spoilage Report",
    blurb: "Detailed readings from your own devices.",
};

/// Report page component; picks the role variant from app state
#[component]
pub fn ReportGenerator() -> impl IntoView {
    let state = use_app_state();

    view! {
        {move || {
            let scope = match state.role.get() {
                Role::Admin => ADMIN_REPORT,
                Role::User => USER_REPORT,
            };
            view! { <SpoilageReport scope=scope/> }
        }}
    }
}

#[component]
fn SpoilageReport(scope: ReportScope) -> impl IntoView {
    let (report, set_report) = create_signal(ReportPage::default());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let start_date = create_rw_signal(String::new());
    let end_date = create_rw_signal(String::new());
    let category = create_rw_signal(String::from("all"));

    let endpoint = scope.endpoint;
    let load = create_action(move |query: &ReportQuery| {
        let query = query.clone();
        async move {
            let _ = set_loading.try_set(true);
            match api::fetch_report(endpoint, &query).await {
                Ok(page) => {
                    let _ = set_report.try_set(page);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    let _ = set_report.try_set(ReportPage::default());
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
            let _ = set_loading.try_set(false);
        }
    });

    // Untracked reads: fetches fire on Apply and page clicks, not on every
    // control keystroke.
    let build_query = move |page: u32| ReportQuery {
        page: Some(page),
        limit: Some(REPORT_PAGE_SIZE),
        start_date: non_empty(start_date.get_untracked()),
        end_date: non_empty(end_date.get_untracked()),
        food_category: select_value(category.get_untracked()),
    };
    create_effect(move |_| load.dispatch(build_query(1)));

    let csv = create_memo(move |_| {
        report.with(|page| {
            let data: Vec<Vec<String>> = page
                .rows
                .iter()
                .map(|row| {
                    vec![
                        row.food_item.clone(),
                        row.food_category.clone(),
                        row.risk_level.clone(),
                        format!("{:.1}", row.gas_level),
                        format!("{:.1}", row.temperature),
                        format!("{:.1}", row.humidity),
                        ymd(row.recorded_at),
                    ]
                })
                .collect();

            export::csv_string(
                &["item", "category", "risk", "gas_ppm", "temp_c", "humidity_pct", "recorded"],
                &data,
            )
            .unwrap_or_default()
        })
    });

    view! {
        <div class="report-page">
            <div class="page-header">
                <div>
                    <h2>{scope.heading}</h2>
                    <p class="page-blurb">{scope.blurb}</p>
                </div>
                <div class="page-actions">
                    <ExportCsvButton filename="spoilage-report.csv" csv=csv/>
                    <PrintButton/>
                </div>
            </div>

            {move || error.get().map(|message| view! { <ErrorNotice message=message/> })}

            <div class="filter-bar">
                <input
                    type="date"
                    class="date-filter"
                    on:change=move |ev| start_date.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    class="date-filter"
                    on:change=move |ev| end_date.set(event_target_value(&ev))
                />
                <select
                    class="filter-select"
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="all">"All Categories"</option>
                    <option value="dairy">"Dairy"</option>
                    <option value="meat">"Meat"</option>
                    <option value="produce">"Produce"</option>
                    <option value="bakery">"Bakery"</option>
                    <option value="seafood">"Seafood"</option>
                </select>
                <button
                    class="btn btn-primary"
                    on:click=move |_| load.dispatch(build_query(1))
                >
                    "Apply"
                </button>
            </div>

            <Show when=move || loading.get()>
                <Loading/>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Item"</th>
                        <th>"Category"</th>
                        <th>"Risk"</th>
                        <th>"Gas (ppm)"</th>
                        <th>"Temp (C)"</th>
                        <th>"Humidity (%)"</th>
                        <th>"Recorded"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        report.with(|page| {
                            if page.rows.is_empty() {
                                view! { <EmptyRow colspan=7/> }.into_view()
                            } else {
                                page.rows
                                    .iter()
                                    .cloned()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td>{row.food_item}</td>
                                                <td>{row.food_category}</td>
                                                <td>
                                                    <span class=format!(
                                                        "status-badge status-{}", row.risk_level
                                                    )>
                                                        {row.risk_level.clone()}
                                                    </span>
                                                </td>
                                                <td>{format!("{:.1}", row.gas_level)}</td>
                                                <td>{format!("{:.1}", row.temperature)}</td>
                                                <td>{format!("{:.1}", row.humidity)}</td>
                                                <td>{table_timestamp(row.recorded_at)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }
                        })
                    }}
                </tbody>
            </table>

            <Show when=move || report.with(|page| !page.rows.is_empty())>
                <div class="table-footer">
                    <span class="showing-label">
                        {move || report.with(|page| page.pagination.showing_label())}
                    </span>
                    <Pagination
                        current_page=Signal::derive(move || {
                            report.with(|page| page.pagination.page)
                        })
                        total_pages=Signal::derive(move || {
                            report.with(|page| page.pagination.total_pages)
                        })
                        on_page_change=move |next: u32| load.dispatch(build_query(next))
                    />
                </div>
            </Show>
        </div>
    }
}
