#![doc = include_str!("../README.md")]

pub mod angle;
pub mod config;
pub mod estimate;
pub mod family;
pub mod graticule;
pub mod io;
pub mod stats;
pub mod worldfile;

// --- High-level re-exports -------------------------------------------------

pub use crate::config::FitParams;
pub use crate::estimate::{fit_world_file, EstimateError, FamilyDiagnostics, FitReport};
pub use crate::family::{split_families, FamilySplit};
pub use crate::graticule::{Direction, Graticule, Orientation};
pub use crate::worldfile::WorldFile;

/// Small prelude for quick experiments.
///
/// ```
/// use graticule_wld::prelude::*;
///
/// let records = vec![
///     Graticule::new(Orientation::Lat, Direction::N, 100, [0.0, 0.0], [50.0, 0.0]),
///     Graticule::new(Orientation::Lat, Direction::N, 0, [0.0, 100.0], [50.0, 100.0]),
///     Graticule::new(Orientation::Lon, Direction::E, 0, [0.0, 0.0], [0.0, 100.0]),
///     Graticule::new(Orientation::Lon, Direction::E, 100, [100.0, 0.0], [100.0, 100.0]),
/// ];
/// let params = FitParams {
///     origin_easting: 0.0,
///     origin_northing: 0.0,
///     units_to_meters: 1.0,
/// };
/// let report = fit_world_file(split_families(records), &params).unwrap();
/// assert!((report.world.a - 1.0).abs() < 1e-9);
/// assert!((report.world.e + 1.0).abs() < 1e-9);
/// ```
pub mod prelude {
    pub use crate::config::FitParams;
    pub use crate::estimate::fit_world_file;
    pub use crate::family::split_families;
    pub use crate::graticule::{Direction, Graticule, Orientation};
    pub use crate::worldfile::WorldFile;
}
