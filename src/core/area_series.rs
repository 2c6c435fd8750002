use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Step, ValueDomain, Viewport};
use crate::error::{ChartError, ChartResult};

/// Vertex in pixel coordinates, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaVertex {
    pub x: f64,
    pub y: f64,
}

/// Deterministic geometry for the balance area.
///
/// `line_points` follows the steps. `fill_polygon` is explicitly closed
/// against the bottom edge of the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<AreaVertex>,
    pub fill_polygon: Vec<AreaVertex>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }
}

pub fn project_area_geometry(
    series: &[Step],
    step_scale: LinearScale,
    domain: ValueDomain,
    viewport: Viewport,
) -> ChartResult<AreaGeometry> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if series.is_empty() {
        return Ok(AreaGeometry::empty());
    }

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);

    let mut line_points = Vec::with_capacity(series.len());
    for step in series {
        let x = step_scale.domain_to_pixel(step.index as f64, width)?;
        let y = domain.value_to_pixel(step.value, height)?;
        line_points.push(AreaVertex { x, y });
    }

    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;

    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(AreaVertex {
        x: first_x,
        y: height,
    });
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.push(AreaVertex { x: last_x, y: height });
    // Repeat the first bottom vertex so backends need no implicit closure.
    fill_polygon.push(AreaVertex {
        x: first_x,
        y: height,
    });

    Ok(AreaGeometry {
        line_points,
        fill_polygon,
    })
}
