use super::EstimateError;
use crate::graticule::{Graticule, Orientation};
use crate::stats::RunningStats;

use log::debug;

/// Pixel-to-map scale of one family: map units per pixel measured
/// perpendicular to the family's lines.
///
/// The family must already be sorted ascending by signed map value. Each
/// consecutive pair contributes one ratio: the map-value delta between the
/// two lines over their perpendicular pixel spacing, where the spacing is
/// the mean perpendicular distance from the current record's infinite line
/// to the previous record's two endpoints. The LAT family uses the absolute
/// map delta (rows may be digitized in either direction); the LON family
/// keeps the signed delta so a reflected easting axis yields a negative
/// scale. Returns the mean ratio and its max−min spread.
pub fn family_scale(
    sorted_family: &[Graticule],
    orientation: Orientation,
) -> Result<(f64, f64), EstimateError> {
    if sorted_family.len() < 2 {
        return Err(match sorted_family.len() {
            0 => EstimateError::EmptyFamily { orientation },
            _ => EstimateError::SingletonFamily { orientation },
        });
    }

    let mut stats = RunningStats::new();
    for pair in sorted_family.windows(2) {
        let (prev, current) = (&pair[0], &pair[1]);
        let delta = current.real_value() - prev.real_value();
        let delta_map = match orientation {
            Orientation::Lat => delta.abs(),
            Orientation::Lon => delta,
        } as f64;
        let delta_pixel =
            (current.distance_to_point(prev.p0) + current.distance_to_point(prev.p1)) / 2.0;
        if delta_pixel == 0.0 {
            return Err(EstimateError::CoincidentLines { orientation });
        }
        stats.push(delta_map / delta_pixel);
    }

    // len >= 2 guarantees at least one pair.
    let mean = stats.mean().unwrap_or_default();
    debug!(
        "{} family: {} spacing pairs, scale range {:.9}",
        orientation.family_name(),
        stats.count(),
        stats.range()
    );
    Ok((mean, stats.range()))
}
