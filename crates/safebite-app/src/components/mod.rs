//! Reusable view components shared across the dashboard pages

pub mod charts;
pub mod data_table;
pub mod export;
pub mod loading;
pub mod log_table;
pub mod modal;
pub mod pagination;
pub mod stat_card;

pub use charts::{ChartSeries, UsageBarChart, UsageLineChart};
pub use data_table::EmptyRow;
pub use export::{ExportCsvButton, PrintButton};
pub use loading::{ErrorNotice, Loading};
pub use log_table::{LogLine, LogTable};
pub use modal::Modal;
pub use pagination::Pagination;
pub use stat_card::StatCard;
