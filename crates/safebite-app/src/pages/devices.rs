//! Device management page with CRUD modals and CSV export

use leptos::*;
use safebite_core::export;
use safebite_core::filter::{self, FilterCriteria};
use safebite_core::types::{DevicePayload, DeviceRecord};
use safebite_core::utils::table_timestamp;

use crate::api;
use crate::components::{EmptyRow, ErrorNotice, ExportCsvButton, Loading, Modal, Pagination};
use crate::pages::{select_value, today};

/// Device management page component
#[component]
pub fn DeviceManagement() -> impl IntoView {
    let (devices, set_devices) = create_signal(Vec::<DeviceRecord>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let criteria = create_rw_signal(FilterCriteria::new(10));

    // Create/edit modal state
    let (form_open, set_form_open) = create_signal(false);
    let (editing_id, set_editing_id) = create_signal(None::<i64>);
    let form_name = create_rw_signal(String::new());
    let form_type = create_rw_signal(String::from("gas"));
    let form_status = create_rw_signal(String::from("active"));
    let form_location = create_rw_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    // Delete confirmation state
    let (delete_target, set_delete_target) = create_signal(None::<DeviceRecord>);

    let load = create_action(move |(): &()| async move {
        let _ = set_loading.try_set(true);
        match api::fetch_devices().await {
            Ok(rows) => {
                let _ = set_devices.try_set(rows);
                let _ = set_error.try_set(None);
            }
            Err(e) => {
                let _ = set_devices.try_set(Vec::new());
                let _ = set_error.try_set(Some(e.to_string()));
            }
        }
        let _ = set_loading.try_set(false);
    });
    create_effect(move |_| load.dispatch(()));

    let save_device = create_action(move |input: &(Option<i64>, DevicePayload)| {
        let (editing, payload) = input.clone();
        async move {
            let _ = set_saving.try_set(true);
            let result = match editing {
                Some(id) => api::update_device(id, &payload).await,
                None => api::create_device(&payload).await,
            };
            match result {
                Ok(saved) => {
                    let _ = set_devices.try_update(|rows| {
                        match rows.iter_mut().find(|row| row.id == saved.id) {
                            Some(row) => *row = saved.clone(),
                            None => rows.push(saved.clone()),
                        }
                    });
                    let _ = set_form_open.try_set(false);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
            let _ = set_saving.try_set(false);
        }
    });

    let remove_device = create_action(move |id: &i64| {
        let id = *id;
        async move {
            match api::delete_device(id).await {
                Ok(()) => {
                    let _ = set_devices.try_update(|rows| rows.retain(|row| row.id != id));
                    let _ = set_delete_target.try_set(None);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
        }
    });

    let page = create_memo(move |_| {
        devices.with(|rows| filter::apply(rows, &criteria.get(), today()))
    });

    // CSV covers the whole filtered set, not just the visible page.
    let csv = create_memo(move |_| {
        devices.with(|rows| {
            let mut all = criteria.get();
            all.page = 1;
            all.page_size = u32::MAX;
            let filtered = filter::apply(rows, &all, today());

            let data: Vec<Vec<String>> = filtered
                .rows
                .iter()
                .map(|device| {
                    vec![
                        device.name.clone(),
                        device.device_type.clone(),
                        device.status.clone(),
                        device.location.clone(),
                        device.last_seen.map(table_timestamp).unwrap_or_default(),
                    ]
                })
                .collect();

            export::csv_string(&["name", "type", "status", "location", "last_seen"], &data)
                .unwrap_or_default()
        })
    });

    let open_create = move |_| {
        set_editing_id.set(None);
        form_name.set(String::new());
        form_type.set("gas".to_string());
        form_status.set("active".to_string());
        form_location.set(String::new());
        set_form_open.set(true);
    };

    view! {
        <div class="devices-page">
            <div class="page-header">
                <h2>"Device Management"</h2>
                <div class="page-actions">
                    <ExportCsvButton filename="devices.csv" csv=csv/>
                    <button class="btn btn-primary" on:click=open_create>
                        "Add Device"
                    </button>
                </div>
            </div>

            {move || error.get().map(|message| view! { <ErrorNotice message=message/> })}

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search devices..."
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
                    <option value="all">"All Statuses"</option>
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                    <option value="maintenance">"Maintenance"</option>
                </select>
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        criteria.update(|c| {
                            c.category = select_value(event_target_value(&ev));
                            c.page = 1;
                        });
                    }
                >
                    <option value="all">"All Types"</option>
                    <option value="gas">"Gas"</option>
                    <option value="temperature">"Temperature"</option>
                    <option value="humidity">"Humidity"</option>
                    <option value="combo">"Combo"</option>
                </select>
            </div>

            <Show when=move || loading.get()>
                <Loading/>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Type"</th>
                        <th>"Status"</th>
                        <th>"Location"</th>
                        <th>"Last Seen"</th>
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
                                .map(|device| {
                                    let edit_seed = device.clone();
                                    let delete_seed = device.clone();
                                    view! {
                                        <tr>
                                            <td>{device.name}</td>
                                            <td>{device.device_type}</td>
                                            <td>
                                                <span class=format!(
                                                    "status-badge status-{}", device.status
                                                )>
                                                    {device.status.clone()}
                                                </span>
                                            </td>
                                            <td>{device.location}</td>
                                            <td>
                                                {device
                                                    .last_seen
                                                    .map(table_timestamp)
                                                    .unwrap_or_else(|| "never".to_string())}
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn-sm"
                                                    on:click=move |_| {
                                                        set_editing_id.set(Some(edit_seed.id));
                                                        form_name.set(edit_seed.name.clone());
                                                        form_type.set(edit_seed.device_type.clone());
                                                        form_status.set(edit_seed.status.clone());
                                                        form_location.set(edit_seed.location.clone());
                                                        set_form_open.set(true);
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn-sm btn-danger"
                                                    on:click=move |_| {
                                                        set_delete_target.set(Some(delete_seed.clone()));
                                                    }
                                                >
                                                    "Delete"
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
                title="Device"
                open=Signal::derive(move || form_open.get())
                on_close=move |()| set_form_open.set(false)
            >
                <label class="form-label">"Name"</label>
                <input
                    type="text"
                    class="form-input"
                    prop:value=move || form_name.get()
                    on:input=move |ev| form_name.set(event_target_value(&ev))
                />
                <label class="form-label">"Type"</label>
                <select
                    class="filter-select"
                    prop:value=move || form_type.get()
                    on:change=move |ev| form_type.set(event_target_value(&ev))
                >
                    <option value="gas">"Gas"</option>
                    <option value="temperature">"Temperature"</option>
                    <option value="humidity">"Humidity"</option>
                    <option value="combo">"Combo"</option>
                </select>
                <label class="form-label">"Status"</label>
                <select
                    class="filter-select"
                    prop:value=move || form_status.get()
                    on:change=move |ev| form_status.set(event_target_value(&ev))
                >
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                    <option value="maintenance">"Maintenance"</option>
                </select>
                <label class="form-label">"Location"</label>
                <input
                    type="text"
                    class="form-input"
                    prop:value=move || form_location.get()
                    on:input=move |ev| form_location.set(event_target_value(&ev))
                />
                <div class="modal-actions">
                    <button
                        class="btn btn-primary"
                        disabled=move || saving.get()
                        on:click=move |_| {
                            if form_name.get().trim().is_empty() {
                                return;
                            }
                            save_device
                                .dispatch((
                                    editing_id.get(),
                                    DevicePayload {
                                        name: form_name.get().trim().to_string(),
                                        device_type: form_type.get(),
                                        status: form_status.get(),
                                        location: form_location.get().trim().to_string(),
                                    },
                                ));
                        }
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button class="btn" on:click=move |_| set_form_open.set(false)>
                        "Cancel"
                    </button>
                </div>
            </Modal>

            <Modal
                title="Remove Device"
                open=Signal::derive(move || delete_target.get().is_some())
                on_close=move |()| set_delete_target.set(None)
            >
                {move || {
                    delete_target
                        .get()
                        .map(|device| {
                            view! {
                                <p>
                                    "Remove "
                                    <strong>{device.name}</strong>
                                    " from the fleet? Its readings stay on the server."
                                </p>
                            }
                        })
                }}
                <div class="modal-actions">
                    <button
                        class="btn btn-danger"
                        on:click=move |_| {
                            if let Some(target) = delete_target.get() {
                                remove_device.dispatch(target.id);
                            }
                        }
                    >
                        "Remove"
                    </button>
                    <button class="btn" on:click=move |_| set_delete_target.set(None)>
                        "Cancel"
                    </button>
                </div>
            </Modal>
        </div>
    }
}
