use super::EstimateError;
use crate::graticule::{Graticule, Orientation};
use crate::stats::RunningStats;

use log::debug;

/// Mean orientation angle of one family, with the max−min spread.
///
/// The mean over the LAT family is theta, over the LON family phi. An empty
/// family has no mean and is rejected.
pub fn mean_family_angle(
    family: &[Graticule],
    orientation: Orientation,
) -> Result<(f64, f64), EstimateError> {
    let mut stats = RunningStats::new();
    for record in family {
        stats.push(record.angle());
    }
    let mean = stats
        .mean()
        .ok_or(EstimateError::EmptyFamily { orientation })?;
    debug!(
        "{} family: {} lines, angle range {:.6} deg",
        orientation.family_name(),
        stats.count(),
        stats.range().to_degrees()
    );
    Ok((mean, stats.range()))
}
