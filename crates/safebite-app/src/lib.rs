//! `SafeBite` Dashboard
//!
//! The browser-side single page application for the `SafeBite` food-spoilage
//! monitoring system: admin and user dashboards, charts, tables, filters,
//! and modals over the backend REST API.

// No forbid(unsafe_code) here: the wasm-bindgen entry point expands to
// unsafe FFI glue on the wasm32 target.
#![warn(clippy::all, clippy::pedantic, missing_docs, rust_2018_idioms)]

pub mod api;
pub mod components;
pub mod pages;
pub mod state;

use leptos::*;
use leptos_router::*;
use safebite_core::page::{NavGroup, PageKey, REGISTRY};

use state::{use_app_state, Role};

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    state::provide_app_state();

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar/>
                <main class="content">
                    <Routes>
                        <Route path="/" view=pages::Dashboard/>
                        <Route path="/users" view=pages::Users/>
                        <Route path="/feedbacks" view=pages::Feedbacks/>
                        <Route path="/devices" view=pages::DeviceManagement/>
                        <Route path="/analytics" view=pages::AnalyticsSummaryPage/>
                        <Route path="/analytics/detail" view=pages::AnalyticsDetail/>
                        <Route path="/reports" view=pages::ReportGenerator/>
                        <Route path="/predictions" view=pages::MlPredictions/>
                        <Route path="/admin-log" view=pages::AdminLog/>
                        <Route path="/activity-log" view=pages::UserActivityLog/>
                        <Route path="/*any" view=pages::NotFound/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Sidebar navigation, generated from the page registry.
///
/// Exactly one link carries the active class; detail sub-views light up
/// their summary parent.
#[component]
fn Sidebar() -> impl IntoView {
    let state = use_app_state();
    let location = use_location();
    let active = create_memo(move |_| {
        PageKey::from_path(&location.pathname.get()).map(PageKey::nav_parent)
    });

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="sidebar-logo">"SB"</span>
                <span class="sidebar-title">"SafeBite"</span>
            </div>
            <nav class="sidebar-nav">
                {NavGroup::ALL
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="nav-section">
                                <div class="nav-section-title">{group.label()}</div>
                                {REGISTRY
                                    .into_iter()
                                    .filter(|entry| entry.group == group)
                                    .map(|entry| {
                                        let key = entry.key;
                                        view! {
                                            <a
                                                href=key.path()
                                                class=move || {
                                                    if active.get() == Some(key) {
                                                        "nav-item active"
                                                    } else {
                                                        "nav-item"
                                                    }
                                                }
                                            >
                                                {entry.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar-footer">
                <label class="role-switch-label">"Viewing as"</label>
                <select
                    class="role-switch"
                    on:change=move |ev| {
                        let role = if event_target_value(&ev) == "user" {
                            Role::User
                        } else {
                            Role::Admin
                        };
                        state.role.set(role);
                    }
                >
                    <option value="admin">"Admin"</option>
                    <option value="user">"User"</option>
                </select>
            </div>
        </aside>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    mount_to_body(App);
}
