//! User management page

use leptos::*;
use safebite_core::filter::{self, FilterCriteria};
use safebite_core::types::UserRecord;
use safebite_core::utils::table_timestamp;

use crate::api;
use crate::components::{EmptyRow, ErrorNotice, Loading, Pagination};
use crate::pages::{select_value, today};

/// User management page component
#[component]
pub fn Users() -> impl IntoView {
    let (users, set_users) = create_signal(Vec::<UserRecord>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let criteria = create_rw_signal(FilterCriteria::new(10));

    let load = create_action(move |(): &()| async move {
        let _ = set_loading.try_set(true);
        match api::fetch_users().await {
            Ok(rows) => {
                let _ = set_users.try_set(rows);
                let _ = set_error.try_set(None);
            }
            Err(e) => {
                let _ = set_users.try_set(Vec::new());
                let _ = set_error.try_set(Some(e.to_string()));
            }
        }
        let _ = set_loading.try_set(false);
    });
    create_effect(move |_| load.dispatch(()));

    let page = create_memo(move |_| {
        users.with(|rows| filter::apply(rows, &criteria.get(), today()))
    });

    view! {
        <div class="users-page">
            <h2>"Users"</h2>

            {move || error.get().map(|message| view! { <ErrorNotice message=message/> })}

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search users..."
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
                    <option value="all">"All Roles"</option>
                    <option value="admin">"Admin"</option>
                    <option value="user">"User"</option>
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
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                </select>
            </div>

            <Show when=move || loading.get()>
                <Loading/>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th>"Created"</th>
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
                                .map(|user| {
                                    let status = if user.active { "active" } else { "inactive" };
                                    view! {
                                        <tr>
                                            <td>{user.username}</td>
                                            <td>{user.email}</td>
                                            <td>{user.role}</td>
                                            <td>
                                                <span class=format!("status-badge status-{status}")>
                                                    {status}
                                                </span>
                                            </td>
                                            <td>{table_timestamp(user.created_at)}</td>
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
