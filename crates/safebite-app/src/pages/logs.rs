//! Audit log pages
//!
//! The admin log and the user activity log are the same table with a
//! different source and actor column, so one component serves both.

use leptos::*;
use safebite_core::filter::{self, FilterCriteria};
use safebite_core::Result;

use crate::api;
use crate::components::{ErrorNotice, Loading, LogLine, LogTable, Pagination};
use crate::pages::{resolve_range, today};

/// Which backend log feeds the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogSource {
    Admin,
    UserActivity,
}

async fn fetch_lines(source: LogSource) -> Result<Vec<LogLine>> {
    match source {
        LogSource::Admin => Ok(api::fetch_admin_log()
            .await?
            .into_iter()
            .map(|row| LogLine {
                timestamp: row.logged_at,
                actor: row.actor,
                action: row.action,
                detail: row.detail,
            })
            .collect()),
        LogSource::UserActivity => Ok(api::fetch_user_activity()
            .await?
            .into_iter()
            .map(|row| LogLine {
                timestamp: row.logged_at,
                actor: row.username,
                action: row.activity,
                detail: row.page,
            })
            .collect()),
    }
}

/// Admin audit log page component
#[component]
pub fn AdminLog() -> impl IntoView {
    view! { <AuditPage title="Admin Log" actor_heading="Admin" source=LogSource::Admin/> }
}

/// User activity log page component
#[component]
pub fn UserActivityLog() -> impl IntoView {
    view! {
        <AuditPage
            title="User Activity"
            actor_heading="User"
            source=LogSource::UserActivity
        />
    }
}

#[component]
fn AuditPage(
    title: &'static str,
    actor_heading: &'static str,
    source: LogSource,
) -> impl IntoView {
    let (lines, set_lines) = create_signal(Vec::<LogLine>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let criteria = create_rw_signal(FilterCriteria::new(10));

    let range_kind = create_rw_signal(String::from("all"));

    let load = create_action(move |(): &()| async move {
        let _ = set_loading.try_set(true);
        match fetch_lines(source).await {
            Ok(rows) => {
                let _ = set_lines.try_set(rows);
                let _ = set_error.try_set(None);
            }
            Err(e) => {
                let _ = set_lines.try_set(Vec::new());
                let _ = set_error.try_set(Some(e.to_string()));
            }
        }
        let _ = set_loading.try_set(false);
    });
    create_effect(move |_| load.dispatch(()));

    let page = create_memo(move |_| {
        lines.with(|rows| filter::apply(rows, &criteria.get(), today()))
    });

    view! {
        <div class="log-page">
            <h2>{title}</h2>

            {move || error.get().map(|message| view! { <ErrorNotice message=message/> })}

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search log..."
                    on:input=move |ev| {
                        criteria.update(|c| {
                            c.search = event_target_value(&ev);
                            c.page = 1;
                        });
                    }
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        range_kind.set(event_target_value(&ev));
                        criteria.update(|c| {
                            c.range = resolve_range(&range_kind.get(), "", "");
                            c.page = 1;
                        });
                    }
                >
                    <option value="all">"All Time"</option>
                    <option value="daily">"Today"</option>
                    <option value="weekly">"This Week"</option>
                    <option value="monthly">"This Month"</option>
                    <option value="yearly">"This Year"</option>
                </select>
            </div>

            <Show when=move || loading.get()>
                <Loading/>
            </Show>

            {move || {
                let p = page.get();
                view! { <LogTable actor_heading=actor_heading rows=p.rows/> }
            }}

            <Show when=move || !page.get().is_empty()>
                <div class="table-footer">
                    <span class="showing-label">{move || page.get().showing_label()}</span>
                    <Pagination
                        current_page=Signal::derive(move || page.get().page)
                        total_pages=Signal::derive(move || page.get().total_pages)
                        on_page_change=move |next: u32| criteria.update(|c| c.page = next)
                    />
                </div>
            </Show>
        </div>
    }
}
