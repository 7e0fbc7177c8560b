use crate::angle::{lat_angle, lon_angle};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::cmp::Ordering;

/// Which coordinate family a digitized line belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// A line of latitude, running broadly east-west across the raster.
    Lat,
    /// A line of longitude, running broadly north-south.
    Lon,
}

impl Orientation {
    /// Human-readable family name for messages.
    pub fn family_name(self) -> &'static str {
        match self {
            Orientation::Lat => "latitude",
            Orientation::Lon => "longitude",
        }
    }
}

/// Compass direction a record's magnitude is measured in. Southern and
/// western magnitudes denote negative coordinate values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    N,
    S,
    E,
    W,
}

impl Direction {
    /// Parses an input direction code. `h` and `v` are legacy aliases for
    /// north and east respectively (no sign inversion).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "n" | "h" => Some(Direction::N),
            "s" => Some(Direction::S),
            "e" | "v" => Some(Direction::E),
            "w" => Some(Direction::W),
            _ => None,
        }
    }
}

/// One digitized graticule line: a pixel-space segment labeled with the
/// map-unit value of the reference line it traces.
///
/// Records are immutable once constructed; the derived geometry (orientation
/// angle, normalized infinite line) is computed lazily and cached.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Graticule {
    pub orientation: Orientation,
    pub direction: Direction,
    /// Absolute map-unit value of the traced line (easting or northing
    /// reading); the sign comes from `direction`.
    pub magnitude: u32,
    /// First traced endpoint, image coordinates (+x right, +y down).
    pub p0: [f64; 2],
    /// Second traced endpoint.
    pub p1: [f64; 2],
    #[serde(skip)]
    line: OnceCell<Vector3<f64>>,
    #[serde(skip)]
    angle: OnceCell<f64>,
}

impl Graticule {
    pub fn new(
        orientation: Orientation,
        direction: Direction,
        magnitude: u32,
        p0: [f64; 2],
        p1: [f64; 2],
    ) -> Self {
        Self {
            orientation,
            direction,
            magnitude,
            p0,
            p1,
            line: OnceCell::new(),
            angle: OnceCell::new(),
        }
    }

    /// Signed map-unit value: negative for southern and western magnitudes.
    pub fn real_value(&self) -> i64 {
        match self.direction {
            Direction::S | Direction::W => -i64::from(self.magnitude),
            Direction::N | Direction::E => i64::from(self.magnitude),
        }
    }

    /// Midpoint of the traced segment (diagnostics only).
    pub fn mean_point(&self) -> [f64; 2] {
        [
            (self.p0[0] + self.p1[0]) * 0.5,
            (self.p0[1] + self.p1[1]) * 0.5,
        ]
    }

    fn compute_angle(&self) -> f64 {
        let dx = self.p1[0] - self.p0[0];
        let dy = self.p1[1] - self.p0[1];
        match self.orientation {
            Orientation::Lat => lat_angle(dx, dy),
            Orientation::Lon => lon_angle(dx, dy),
        }
    }

    /// Orientation angle of the segment relative to its family's reference
    /// axis, in radians, range (−π/2, π/2]. Invariant under endpoint order.
    pub fn angle(&self) -> f64 {
        *self.angle.get_or_init(|| self.compute_angle())
    }

    fn compute_line(&self) -> Vector3<f64> {
        let a = self.p1[1] - self.p0[1];
        let b = self.p0[0] - self.p1[0];
        let c = self.p1[0] * self.p0[1] - self.p0[0] * self.p1[1];
        let norm = (a * a + b * b).sqrt();
        Vector3::new(a / norm, b / norm, c / norm)
    }

    /// Infinite line through the segment: ax + by + c = 0 with
    /// sqrt(a² + b²) = 1. The segment must have nonzero length.
    pub fn line(&self) -> Vector3<f64> {
        *self.line.get_or_init(|| self.compute_line())
    }

    /// Perpendicular distance from a point to the infinite line through the
    /// segment (not to the segment's nearest point).
    pub fn distance_to_point(&self, point: [f64; 2]) -> f64 {
        let l = self.line();
        (l.x * point[0] + l.y * point[1] + l.z).abs()
    }

    /// Total order by signed map value, defined only within one orientation
    /// family. Ordering a latitude line against a longitude line is a
    /// programming error.
    pub fn cmp_within_family(&self, other: &Self) -> Ordering {
        assert_eq!(
            self.orientation, other.orientation,
            "graticule ordering is only defined within one orientation family"
        );
        self.real_value().cmp(&other.real_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    fn grat(
        orientation: Orientation,
        direction: Direction,
        magnitude: u32,
        p0: [f64; 2],
        p1: [f64; 2],
    ) -> Graticule {
        Graticule::new(orientation, direction, magnitude, p0, p1)
    }

    #[test]
    fn vertical_lon_through_origin() {
        let g = grat(Orientation::Lon, Direction::E, 0, [0.0, 1.0], [0.0, 0.0]);
        assert!(approx_eq(g.angle(), 0.0));
        assert_eq!(g.real_value(), 0);

        let rev = grat(Orientation::Lon, Direction::E, 0, [0.0, 0.0], [0.0, 1.0]);
        assert!(approx_eq(rev.angle(), 0.0));
    }

    #[test]
    fn horizontal_lat_through_origin() {
        let g = grat(Orientation::Lat, Direction::N, 0, [0.0, 0.0], [1.0, 0.0]);
        assert!(approx_eq(g.angle(), 0.0));
        assert_eq!(g.real_value(), 0);

        let rev = grat(Orientation::Lat, Direction::N, 0, [1.0, 0.0], [0.0, 0.0]);
        assert!(approx_eq(rev.angle(), 0.0));
    }

    #[test]
    fn lon_at_45_degrees() {
        let g = grat(Orientation::Lon, Direction::E, 100, [0.0, 1.0], [1.0, 0.0]);
        assert!(approx_eq(g.angle(), FRAC_PI_4));
        assert_eq!(g.real_value(), 100);

        // Reversed trace of the same line, labeled from the west.
        let rev = grat(Orientation::Lon, Direction::W, 100, [1.0, 0.0], [0.0, 1.0]);
        assert!(approx_eq(rev.angle(), FRAC_PI_4));
        assert_eq!(rev.real_value(), -100);
    }

    #[test]
    fn lat_at_minus_45_degrees() {
        let g = grat(Orientation::Lat, Direction::N, 100, [0.0, 0.0], [1.0, 1.0]);
        assert!(approx_eq(g.angle(), -FRAC_PI_4));
        assert_eq!(g.real_value(), 100);

        let rev = grat(Orientation::Lat, Direction::S, 100, [1.0, 1.0], [0.0, 0.0]);
        assert!(approx_eq(rev.angle(), -FRAC_PI_4));
        assert_eq!(rev.real_value(), -100);
    }

    #[test]
    fn direction_codes_with_aliases() {
        assert_eq!(Direction::from_code("n"), Some(Direction::N));
        assert_eq!(Direction::from_code("h"), Some(Direction::N));
        assert_eq!(Direction::from_code("e"), Some(Direction::E));
        assert_eq!(Direction::from_code("v"), Some(Direction::E));
        assert_eq!(Direction::from_code("s"), Some(Direction::S));
        assert_eq!(Direction::from_code("w"), Some(Direction::W));
        assert_eq!(Direction::from_code("x"), None);
        assert_eq!(Direction::from_code("N"), None);
    }

    #[test]
    fn distance_to_point_is_perpendicular_to_infinite_line() {
        // Line y = x, normalized; distance from (0, 4) is 4/sqrt(2).
        let g = grat(Orientation::Lat, Direction::N, 0, [0.0, 0.0], [2.0, 2.0]);
        assert!(approx_eq(g.distance_to_point([0.0, 4.0]), 4.0 / 2.0_f64.sqrt()));
        // A point far beyond the segment's extent still measures to the line.
        assert!(approx_eq(g.distance_to_point([100.0, 100.0]), 0.0));
    }

    #[test]
    fn ordering_within_family_follows_real_value() {
        let south = grat(Orientation::Lat, Direction::S, 50, [0.0, 0.0], [1.0, 0.0]);
        let north = grat(Orientation::Lat, Direction::N, 10, [0.0, 5.0], [1.0, 5.0]);
        assert_eq!(south.cmp_within_family(&north), Ordering::Less);
        assert_eq!(north.cmp_within_family(&south), Ordering::Greater);
        assert_eq!(south.cmp_within_family(&south.clone()), Ordering::Equal);
    }

    #[test]
    #[should_panic(expected = "within one orientation family")]
    fn ordering_across_families_panics() {
        let lat = grat(Orientation::Lat, Direction::N, 0, [0.0, 0.0], [1.0, 0.0]);
        let lon = grat(Orientation::Lon, Direction::E, 0, [0.0, 0.0], [0.0, 1.0]);
        let _ = lat.cmp_within_family(&lon);
    }
}
