pub mod area_series;
pub mod domain;
pub mod extrema;
pub mod scale;
pub mod split;
pub mod types;

pub use area_series::{AreaGeometry, AreaVertex, project_area_geometry};
pub use domain::{DomainTuning, ValueDomain, compute_domain, compute_domain_tuned};
pub use extrema::{
    LabelDecision, LabelOffset, LabelPosition, PointLabel, label_for, label_series,
};
pub use scale::LinearScale;
pub use split::compute_split_fraction;
pub use types::{Step, Viewport, series_from_values, validate_series};
