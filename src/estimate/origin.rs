use super::EstimateError;
use crate::graticule::{Graticule, Orientation};
use crate::stats::RunningStats;

use log::debug;

/// Mean map-space distance of one family's lines to the pixel origin.
///
/// Each record contributes the perpendicular pixel distance from (0, 0) to
/// its infinite line, converted to map units via the family's scale. Adding
/// the known map coordinate of the upper-left pixel center to the result
/// gives the translation term (F for the LAT family, C for LON).
pub fn origin_offset(
    family: &[Graticule],
    orientation: Orientation,
    scale: f64,
) -> Result<f64, EstimateError> {
    let mut stats = RunningStats::new();
    for record in family {
        stats.push(record.distance_to_point([0.0, 0.0]) * scale);
    }
    let mean = stats
        .mean()
        .ok_or(EstimateError::EmptyFamily { orientation })?;
    debug!(
        "{} family: origin offset {:.6} map units over {} lines",
        orientation.family_name(),
        mean,
        stats.count()
    );
    Ok(mean)
}
