//! Sensor analytics pages: aggregate summary and per-record detail
//!
//! The detail view is a sub-view of the summary; the sidebar keeps the
//! summary link highlighted while it is open.

use leptos::*;
use safebite_core::filter::{self, FilterCriteria};
use safebite_core::types::{AnalyticsSummary, SensorReadingRow};
use safebite_core::utils::{format_percent, table_timestamp};

use crate::api;
use crate::components::{EmptyRow, ErrorNotice, Loading, Pagination, StatCard};
use crate::pages::{resolve_range, select_value, today};

/// Aggregate analytics page component
#[component]
pub fn AnalyticsSummaryPage() -> impl IntoView {
    let (summary, set_summary) = create_signal(None::<AnalyticsSummary>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let load = create_action(move |(): &()| async move {
        let _ = set_loading.try_set(true);
        match api::fetch_analytics_summary().await {
            Ok(aggregates) => {
                let _ = set_summary.try_set(Some(aggregates));
                let _ = set_error.try_set(None);
            }
            Err(e) => {
                let _ = set_summary.try_set(None);
                let _ = set_error.try_set(Some(e.to_string()));
            }
        }
        let _ = set_loading.try_set(false);
    });
    create_effect(move |_| load.dispatch(()));

    view! {
        <div class="analytics-page">
            <div class="page-header">
                <h2>"Sensor Analytics"</h2>
                <a href="/analytics/detail" class="btn">
                    "View readings"
                </a>
            </div>

            {move || error.get().map(|message| view! { <ErrorNotice message=message/> })}

            <Show when=move || loading.get()>
                <Loading/>
            </Show>

            {move || {
                summary
                    .get()
                    .map(|s| {
                        view! {
                            <div class="stats-grid">
                                <StatCard
                                    label="Avg Gas (ppm)"
                                    value=format!("{:.1}", s.avg_gas)
                                />
                                <StatCard
                                    label="Avg Temperature (C)"
                                    value=format!("{:.1}", s.avg_temperature)
                                />
                                <StatCard
                                    label="Avg Humidity (%)"
                                    value=format!("{:.1}", s.avg_humidity)
                                />
                                <StatCard
                                    label="Readings Today"
                                    value=s.readings_today.to_string()
                                />
                                <StatCard
                                    label="Spoilage Rate"
                                    value=format_percent(s.spoilage_rate)
                                />
                            </div>
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Food Category"</th>
                                        <th>"Readings"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if s.by_category.is_empty() {
                                        view! { <EmptyRow colspan=2/> }.into_view()
                                    } else {
                                        s.by_category
                                            .into_iter()
                                            .map(|row| {
                                                view! {
                                                    <tr>
                                                        <td>{row.category}</td>
                                                        <td>{row.count}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </tbody>
                            </table>
                        }
                    })
            }}
        </div>
    }
}

/// Per-record readings page component
#[component]
pub fn AnalyticsDetail() -> impl IntoView {
    let (readings, set_readings) = create_signal(Vec::<SensorReadingRow>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let criteria = create_rw_signal(FilterCriteria::new(10));

    let range_kind = create_rw_signal(String::from("all"));
    let custom_start = create_rw_signal(String::new());
    let custom_end = create_rw_signal(String::new());

    let load = create_action(move |(): &()| async move {
        let _ = set_loading.try_set(true);
        match api::fetch_sensor_readings().await {
            Ok(rows) => {
                let _ = set_readings.try_set(rows);
                let _ = set_error.try_set(None);
            }
            Err(e) => {
                let _ = set_readings.try_set(Vec::new());
                let _ = set_error.try_set(Some(e.to_string()));
            }
        }
        let _ = set_loading.try_set(false);
    });
    create_effect(move |_| load.dispatch(()));

    let apply_range = move || {
        criteria.update(|c| {
            c.range = resolve_range(&range_kind.get(), &custom_start.get(), &custom_end.get());
            c.page = 1;
        });
    };

    let page = create_memo(move |_| {
        readings.with(|rows| filter::apply(rows, &criteria.get(), today()))
    });

    view! {
        <div class="analytics-page">
            <div class="page-header">
                <h2>"Sensor Readings"</h2>
                <a href="/analytics" class="btn">
                    "Back to summary"
                </a>
            </div>

            {move || error.get().map(|message| view! { <ErrorNotice message=message/> })}

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search readings..."
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
                        criteria.update(|c| {
                            c.category = select_value(event_target_value(&ev));
                            c.page = 1;
                        });
                    }
                >
                    <option value="all">"All Categories"</option>
                    <option value="dairy">"Dairy"</option>
                    <option value="meat">"Meat"</option>
                    <option value="produce">"Produce"</option>
                    <option value="bakery">"Bakery"</option>
                    <option value="seafood">"Seafood"</option>
                </select>
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        range_kind.set(event_target_value(&ev));
                        apply_range();
                    }
                >
                    <option value="all">"All Time"</option>
                    <option value="daily">"Today"</option>
                    <option value="weekly">"This Week"</option>
                    <option value="monthly">"This Month"</option>
                    <option value="yearly">"This Year"</option>
                    <option value="custom">"Custom"</option>
                </select>
                <Show when=move || range_kind.get() == "custom">
                    <input
                        type="date"
                        class="date-filter"
                        on:change=move |ev| {
                            custom_start.set(event_target_value(&ev));
                            apply_range();
                        }
                    />
                    <input
                        type="date"
                        class="date-filter"
                        on:change=move |ev| {
                            custom_end.set(event_target_value(&ev));
                            apply_range();
                        }
                    />
                </Show>
            </div>

            <Show when=move || loading.get()>
                <Loading/>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Time"</th>
                        <th>"Device"</th>
                        <th>"Category"</th>
                        <th>"Gas (ppm)"</th>
                        <th>"Temp (C)"</th>
                        <th>"Humidity (%)"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let p = page.get();
                        if p.is_empty() {
                            view! { <EmptyRow colspan=6/> }.into_view()
                        } else {
                            p.rows
                                .into_iter()
                                .map(|reading| {
                                    view! {
                                        <tr>
                                            <td>{table_timestamp(reading.recorded_at)}</td>
                                            <td>{reading.device_name}</td>
                                            <td>{reading.food_category}</td>
                                            <td>{format!("{:.1}", reading.gas_level)}</td>
                                            <td>{format!("{:.1}", reading.temperature)}</td>
                                            <td>{format!("{:.1}", reading.humidity)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }
                    }}
                </tbody>
            </table>

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
