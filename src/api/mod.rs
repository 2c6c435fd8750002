mod balance_chart;
mod chart_config;
mod label_text;
mod snapshot;

pub use balance_chart::BalanceChart;
pub use chart_config::{BalanceChartConfig, ChartStyle, LabelStyle};
pub use label_text::format_label_value;
pub use snapshot::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1};
