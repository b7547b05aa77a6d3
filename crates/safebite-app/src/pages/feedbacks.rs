//! Feedback triage page with a reply modal

use leptos::*;
use safebite_core::filter::{self, FilterCriteria};
use safebite_core::types::{FeedbackRecord, FeedbackReply};
use safebite_core::utils::table_timestamp;

use crate::api;
use crate::components::{EmptyRow, ErrorNotice, Loading, Modal, Pagination};
use crate::pages::{select_value, today};

/// Feedback triage page component
#[component]
pub fn Feedbacks() -> impl IntoView {
    let (feedbacks, set_feedbacks) = create_signal(Vec::<FeedbackRecord>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let criteria = create_rw_signal(FilterCriteria::new(10));

    // Reply modal state
    let (reply_target, set_reply_target) = create_signal(None::<FeedbackRecord>);
    let reply_status = create_rw_signal(String::from("resolved"));
    let reply_text = create_rw_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    let load = create_action(move |(): &()| async move {
        let _ = set_loading.try_set(true);
        match api::fetch_feedbacks().await {
            Ok(rows) => {
                let _ = set_feedbacks.try_set(rows);
                let _ = set_error.try_set(None);
            }
            Err(e) => {
                let _ = set_feedbacks.try_set(Vec::new());
                let _ = set_error.try_set(Some(e.to_string()));
            }
        }
        let _ = set_loading.try_set(false);
    });
    create_effect(move |_| load.dispatch(()));

    let submit_reply = create_action(move |input: &(i64, FeedbackReply)| {
        let (id, reply) = input.clone();
        async move {
            let _ = set_saving.try_set(true);
            match api::reply_to_feedback(id, &reply).await {
                Ok(updated) => {
                    let _ = set_feedbacks.try_update(|rows| {
                        if let Some(row) = rows.iter_mut().find(|row| row.id == updated.id) {
                            *row = updated.clone();
                        }
                    });
                    let _ = set_reply_target.try_set(None);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
            let _ = set_saving.try_set(false);
        }
    });

    let page = create_memo(move |_| {
        feedbacks.with(|rows| filter::apply(rows, &criteria.get(), today()))
    });

    view! {
        <div class="feedbacks-page">
            <h2>"Feedbacks"</h2>

            {move || error.get().map(|message| view! { <ErrorNotice message=message/> })}

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search feedback..."
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
                    <option value="bug">"Bug"</option>
                    <option value="feature">"Feature"</option>
                    <option value="general">"General"</option>
                </select>
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        criteria.update(|c| {
                            c.status = select_value(event_target_value(&ev));
                            c.page = 1;
                        });
                    }
                >
                    <option value="all">"All Statuses"</option>
                    <option value="open">"Open"</option>
                    <option value="resolved">"Resolved"</option>
                </select>
            </div>

            <Show when=move || loading.get()>
                <Loading/>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"User"</th>
                        <th>"Message"</th>
                        <th>"Category"</th>
                        <th>"Status"</th>
                        <th>"Submitted"</th>
                        <th>"Actions"</th>
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
                                .map(|feedback| {
                                    let modal_seed = feedback.clone();
                                    view! {
                                        <tr>
                                            <td>{feedback.user_name}</td>
                                            <td class="message-cell">{feedback.message}</td>
                                            <td>{feedback.category}</td>
                                            <td>
                                                <span class=format!(
                                                    "status-badge status-{}", feedback.status
                                                )>
                                                    {feedback.status.clone()}
                                                </span>
                                            </td>
                                            <td>{table_timestamp(feedback.submitted_at)}</td>
                                            <td>
                                                <button
                                                    class="btn btn-sm"
                                                    on:click=move |_| {
                                                        reply_status.set(
                                                            if modal_seed.status.is_empty() {
                                                                "open".to_string()
                                                            } else {
                                                                modal_seed.status.clone()
                                                            },
                                                        );
                                                        reply_text.set(
                                                            modal_seed.reply.clone().unwrap_or_default(),
                                                        );
                                                        set_reply_target.set(Some(modal_seed.clone()));
                                                    }
                                                >
                                                    "Reply"
                                                </button>
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

            <Modal
                title="Reply to Feedback"
                open=Signal::derive(move || reply_target.get().is_some())
                on_close=move |()| set_reply_target.set(None)
            >
                {move || {
                    reply_target
                        .get()
                        .map(|feedback| {
                            view! {
                                <blockquote class="feedback-quote">{feedback.message}</blockquote>
                            }
                        })
                }}
                <label class="form-label">"Status"</label>
                <select
                    class="filter-select"
                    prop:value=move || reply_status.get()
                    on:change=move |ev| reply_status.set(event_target_value(&ev))
                >
                    <option value="open">"Open"</option>
                    <option value="resolved">"Resolved"</option>
                </select>
                <label class="form-label">"Reply"</label>
                <textarea
                    class="form-textarea"
                    prop:value=move || reply_text.get()
                    on:input=move |ev| reply_text.set(event_target_value(&ev))
                ></textarea>
                <div class="modal-actions">
                    <button
                        class="btn btn-primary"
                        disabled=move || saving.get()
                        on:click=move |_| {
                            if let Some(target) = reply_target.get() {
                                submit_reply
                                    .dispatch((
                                        target.id,
                                        FeedbackReply {
                                            status: reply_status.get(),
                                            reply: reply_text.get(),
                                        },
                                    ));
                            }
                        }
                    >
                        {move || if saving.get() { "Saving..." } else { "Send Reply" }}
                    </button>
                    <button class="btn" on:click=move |_| set_reply_target.set(None)>
                        "Cancel"
                    </button>
                </div>
            </Modal>
        </div>
    }
}
