//! World-file parameter estimation.
//!
//! Stages run in dependency order: per-family mean angles, then in-family
//! sort and pairwise spacing for the scales, then perpendicular distances to
//! the pixel origin for the translation, finally affine composition. Every
//! stage is a pure function of its inputs; accumulators are local to one
//! call.

mod angle;
mod origin;
mod scale;

pub use angle::mean_family_angle;
pub use origin::origin_offset;
pub use scale::family_scale;

use crate::config::FitParams;
use crate::family::{sort_by_real_value, FamilySplit};
use crate::graticule::Orientation;
use crate::worldfile::WorldFile;

use log::debug;
use serde::Serialize;

/// Reasons why estimation cannot produce a world file.
///
/// The reference behavior for the first two cases was to let NaN or a
/// division by zero propagate into the output file; here they are hard
/// errors reported before anything is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EstimateError {
    /// A family has no records; its mean orientation angle is undefined.
    EmptyFamily { orientation: Orientation },
    /// A family has a single record; no consecutive pair exists to measure
    /// line spacing.
    SingletonFamily { orientation: Orientation },
    /// Two consecutive lines of a family lie on the same infinite pixel
    /// line, so the spacing ratio divides by zero.
    CoincidentLines { orientation: Orientation },
}

impl std::fmt::Display for EstimateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimateError::EmptyFamily { orientation } => write!(
                f,
                "no {} lines in the input; cannot estimate an orientation angle",
                orientation.family_name()
            ),
            EstimateError::SingletonFamily { orientation } => write!(
                f,
                "only one {} line in the input; at least two are needed to measure spacing",
                orientation.family_name()
            ),
            EstimateError::CoincidentLines { orientation } => write!(
                f,
                "two {} lines with different map values are coincident in pixel space",
                orientation.family_name()
            ),
        }
    }
}

impl std::error::Error for EstimateError {}

/// Per-family summary of the estimation stages. The spreads are max−min
/// over the family and are diagnostic only; a large angle spread means the
/// traces disagree about the rotation and the map is likely not affine.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FamilyDiagnostics {
    pub count: usize,
    pub angle_rad: f64,
    pub angle_spread_rad: f64,
    /// Map units per pixel perpendicular to this family's lines.
    pub scale: f64,
    pub scale_spread: f64,
}

/// Result of a fit: the six world-file coefficients plus per-family
/// diagnostics.
#[derive(Clone, Debug, Serialize)]
pub struct FitReport {
    pub world: WorldFile,
    pub lat: FamilyDiagnostics,
    pub lon: FamilyDiagnostics,
}

/// Estimates the six affine coefficients from partitioned graticule
/// records.
///
/// `theta` (latitude-family rotation) and the `y` scale come from the LAT
/// family, `phi` and the `x` scale from the LON family; the translation
/// terms add the caller-supplied coordinates of the upper-left pixel
/// center. Fails fast if either family is empty or a singleton.
pub fn fit_world_file(
    mut families: FamilySplit,
    params: &FitParams,
) -> Result<FitReport, EstimateError> {
    let (theta, theta_spread) = mean_family_angle(&families.lat, Orientation::Lat)?;
    let (phi, phi_spread) = mean_family_angle(&families.lon, Orientation::Lon)?;
    debug!(
        "theta = {:.6} deg (spread {:.6} deg), phi = {:.6} deg (spread {:.6} deg)",
        theta.to_degrees(),
        theta_spread.to_degrees(),
        phi.to_degrees(),
        phi_spread.to_degrees()
    );

    // Consecutive-pair analysis needs each family in map-value order.
    sort_by_real_value(&mut families.lat);
    sort_by_real_value(&mut families.lon);

    let (y, y_spread) = family_scale(&families.lat, Orientation::Lat)?;
    let (x, x_spread) = family_scale(&families.lon, Orientation::Lon)?;
    debug!("x = {x:.9} (spread {x_spread:.9}), y = {y:.9} (spread {y_spread:.9})");

    let f = origin_offset(&families.lat, Orientation::Lat, y)? + params.origin_northing;
    let c = origin_offset(&families.lon, Orientation::Lon, x)? + params.origin_easting;

    let world = WorldFile::compose(theta, phi, x, y, params.units_to_meters, c, f);
    Ok(FitReport {
        world,
        lat: FamilyDiagnostics {
            count: families.lat.len(),
            angle_rad: theta,
            angle_spread_rad: theta_spread,
            scale: y,
            scale_spread: y_spread,
        },
        lon: FamilyDiagnostics {
            count: families.lon.len(),
            angle_rad: phi,
            angle_spread_rad: phi_spread,
            scale: x,
            scale_spread: x_spread,
        },
    })
}
