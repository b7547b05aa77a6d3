//! Dashboard page: stat cards, activity counters, and the usage chart

use leptos::*;
use safebite_core::chart::ChartScale;
use safebite_core::types::{ActivityBuckets, ActivityCounts, ActivityGranularity, DashboardStats};

use crate::api;
use crate::components::charts::{monthly_series, yearly_series};
use crate::components::{ErrorNotice, Loading, StatCard, UsageBarChart, UsageLineChart};
use crate::pages::current_year;

/// Main dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (stats, set_stats) = create_signal(None::<DashboardStats>);
    let (counts, set_counts) = create_signal(None::<ActivityCounts>);
    let (buckets, set_buckets) = create_signal(ActivityBuckets::default());
    let (granularity, set_granularity) = create_signal(ActivityGranularity::Monthly);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let load = create_action(move |(): &()| async move {
        let _ = set_loading.try_set(true);
        let _ = set_error.try_set(None);

        match api::fetch_dashboard_stats().await {
            Ok(aggregates) => {
                let _ = set_stats.try_set(Some(aggregates));
            }
            Err(e) => {
                let _ = set_stats.try_set(None);
                let _ = set_error.try_set(Some(e.to_string()));
            }
        }

        match api::fetch_activity_counts().await {
            Ok(activity) => {
                let _ = set_counts.try_set(Some(activity));
            }
            Err(e) => {
                let _ = set_counts.try_set(None);
                let _ = set_error.try_set(Some(e.to_string()));
            }
        }

        let _ = set_loading.try_set(false);
    });

    let load_chart = create_action(move |granularity: &ActivityGranularity| {
        let granularity = *granularity;
        async move {
            match api::fetch_activity_data(granularity).await {
                Ok(data) => {
                    let _ = set_buckets.try_set(data);
                }
                Err(_) => {
                    let _ = set_buckets.try_set(ActivityBuckets::default());
                }
            }
        }
    });

    create_effect(move |_| {
        load.dispatch(());
        load_chart.dispatch(ActivityGranularity::Monthly);
    });

    view! {
        <div class="dashboard">
            <h2>"Dashboard"</h2>

            {move || error.get().map(|message| view! { <ErrorNotice message=message/> })}

            <Show when=move || loading.get()>
                <Loading/>
            </Show>

            <div class="stats-grid">
                {move || {
                    stats
                        .get()
                        .map(|s| {
                            view! {
                                <StatCard label="Total Devices" value=s.total_devices.to_string()/>
                                <StatCard label="Active Devices" value=s.active_devices.to_string()/>
                                <StatCard label="Spoilage Alerts" value=s.spoilage_alerts.to_string()/>
                                <StatCard label="Registered Users" value=s.registered_users.to_string()/>
                            }
                        })
                }}
            </div>

            <div class="activity-counters">
                {move || {
                    counts
                        .get()
                        .map(|c| {
                            view! {
                                <div class="activity-counter">{c.today_label()}</div>
                                <div class="activity-counter">{c.last7d_label()}</div>
                                <div class="activity-counter">{c.last30d_label()}</div>
                            }
                        })
                }}
            </div>

            <div class="dashboard-card">
                <div class="chart-header">
                    <h3>"Device Usage"</h3>
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            let picked = if event_target_value(&ev) == "yearly" {
                                ActivityGranularity::Yearly
                            } else {
                                ActivityGranularity::Monthly
                            };
                            set_granularity.set(picked);
                            load_chart.dispatch(picked);
                        }
                    >
                        <option value="monthly">"Monthly"</option>
                        <option value="yearly">"Yearly"</option>
                    </select>
                </div>
                {move || {
                    let data = buckets.get();
                    match granularity.get() {
                        ActivityGranularity::Monthly => {
                            let series = monthly_series(&data);
                            let scale = ChartScale::monthly_usage(&series.values);
                            view! { <UsageLineChart series=series scale=scale/> }.into_view()
                        }
                        ActivityGranularity::Yearly => {
                            let series = yearly_series(&data, current_year());
                            let scale = ChartScale::yearly_usage(&series.values);
                            view! { <UsageBarChart series=series scale=scale/> }.into_view()
                        }
                    }
                }}
            </div>
        </div>
    }
}
