//! Shared log table used by the admin and user activity pages

use chrono::{DateTime, Utc};
use leptos::*;
use safebite_core::filter::Filterable;
use safebite_core::utils::table_timestamp;

use crate::components::EmptyRow;

/// One normalized log row; both audit sources map into this shape
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    /// Event timestamp
    pub timestamp: DateTime<Utc>,
    /// Who acted
    pub actor: String,
    /// What happened
    pub action: String,
    /// Free-form detail
    pub detail: String,
}

impl Filterable for LogLine {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.actor, &self.action, &self.detail]
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.timestamp)
    }
}

/// Log table body shared by both audit pages
#[component]
pub fn LogTable(
    /// Header for the actor column
    actor_heading: &'static str,
    /// Rows for the current page slice
    rows: Vec<LogLine>,
) -> impl IntoView {
    view! {
        <table class="data-table log-table">
            <thead>
                <tr>
                    <th>"Time"</th>
                    <th>{actor_heading}</th>
                    <th>"Action"</th>
                    <th>"Detail"</th>
                </tr>
            </thead>
            <tbody>
                {if rows.is_empty() {
                    view! { <EmptyRow colspan=4/> }.into_view()
                } else {
                    rows.into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td>{table_timestamp(row.timestamp)}</td>
                                    <td>{row.actor}</td>
                                    <td>{row.action}</td>
                                    <td>{row.detail}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_log_line_is_filterable() {
        let line = LogLine {
            timestamp: Utc.with_ymd_and_hms(2025, 8, 5, 10, 0, 0).unwrap(),
            actor: "ops".to_string(),
            action: "device.update".to_string(),
            detail: "renamed Fridge A".to_string(),
        };

        assert_eq!(line.search_fields().len(), 3);
        assert!(line.timestamp().is_some());
        assert!(line.status().is_none());
    }
}
