//! balance-chart: core computations for a balance-over-steps area chart.
//!
//! The crate derives a padded value domain, the gradient split point of a
//! reference value and per-point extremum labels, then materializes them into
//! a backend-agnostic [`render::RenderFrame`] for an external renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BalanceChart, BalanceChartConfig};
pub use error::{ChartError, ChartResult};
