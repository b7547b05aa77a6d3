//! ML spoilage predictions page

use leptos::*;
use safebite_core::filter::{self, FilterCriteria};
use safebite_core::types::MlPrediction;
use safebite_core::utils::{format_percent, table_timestamp};

use crate::api;
use crate::components::{EmptyRow, ErrorNotice, Loading, Pagination};
use crate::pages::{select_value, today};

/// ML predictions page component
#[component]
pub fn MlPredictions() -> impl IntoView {
    let (predictions, set_predictions) = create_signal(Vec::<MlPrediction>::new());
    let (generated_at, set_generated_at) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let criteria = create_rw_signal(FilterCriteria::new(10));

    let load = create_action(move |(): &()| async move {
        let _ = set_loading.try_set(true);
        match api::fetch_predictions().await {
            Ok(response) => {
                let _ = set_predictions.try_set(response.predictions);
                let _ = set_generated_at
                    .try_set(response.generated_at.map(table_timestamp));
                let _ = set_error.try_set(None);
            }
            Err(e) => {
                let _ = set_predictions.try_set(Vec::new());
                let _ = set_generated_at.try_set(None);
                let _ = set_error.try_set(Some(e.to_string()));
            }
        }
        let _ = set_loading.try_set(false);
    });
    create_effect(move |_| load.dispatch(()));

    let page = create_memo(move |_| {
        predictions.with(|rows| filter::apply(rows, &criteria.get(), today()))
    });

    view! {
        <div class="predictions-page">
            <div class="page-header">
                <h2>"ML Predictions"</h2>
                {move || {
                    generated_at
                        .get()
                        .map(|when| {
                            view! {
                                <span class="page-blurb">{format!("Model run: {when}")}</span>
                            }
                        })
                }}
            </div>

            {move || error.get().map(|message| view! { <ErrorNotice message=message/> })}

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search predictions..."
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
                            c.status = select_value(event_target_value(&ev));
                            c.page = 1;
                        });
                    }
                >
                    <option value="all">"All Outcomes"</option>
                    <option value="safe">"Safe"</option>
                    <option value="at-risk">"At Risk"</option>
                    <option value="spoiled">"Spoiled"</option>
                </select>
            </div>

            <Show when=move || loading.get()>
                <Loading/>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Food Category"</th>
                        <th>"Predicted Status"</th>
                        <th>"Confidence"</th>
                        <th>"Horizon"</th>
                        <th>"Model"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let p = page.get();
                        if p.is_empty() {
                            view! { <EmptyRow colspan=5/> }.into_view()
                        } else {
                            p.rows
                                .into_iter()
                                .map(|prediction| {
                                    view! {
                                        <tr>
                                            <td>{prediction.food_category}</td>
                                            <td>
                                                <span class=format!(
                                                    "status-badge status-{}",
                                                    prediction.predicted_status
                                                )>
                                                    {prediction.predicted_status.clone()}
                                                </span>
                                            </td>
                                            <td>{format_percent(prediction.confidence)}</td>
                                            <td>{format!("{} h", prediction.horizon_hours)}</td>
                                            <td>
                                                {prediction
                                                    .model_version
                                                    .unwrap_or_else(|| "-".to_string())}
                                            </td>
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
