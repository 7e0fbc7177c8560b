use serde::{Deserialize, Serialize};

/// Six-coefficient affine transform in the standard world-file convention:
///
/// ```text
/// easting  = a * col + b * row + c
/// northing = d * col + e * row + f
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldFile {
    pub a: f64,
    pub d: f64,
    pub b: f64,
    pub e: f64,
    pub c: f64,
    pub f: f64,
}

impl WorldFile {
    /// Composes the coefficients from the estimated family rotations
    /// (`theta` for latitude lines, `phi` for longitude), the perpendicular
    /// scales (`x` map units per pixel across longitude lines, `y` across
    /// latitude), the unit-conversion factor, and the translation terms.
    ///
    /// `e` carries the negative cosine because pixel rows grow downward
    /// while northings grow upward.
    pub fn compose(
        theta: f64,
        phi: f64,
        x: f64,
        y: f64,
        units_to_meters: f64,
        c: f64,
        f: f64,
    ) -> Self {
        Self {
            a: x * units_to_meters * theta.cos(),
            d: -x * units_to_meters * theta.sin(),
            b: y * units_to_meters * phi.sin(),
            e: -y * units_to_meters * phi.cos(),
            c,
            f,
        }
    }

    /// Maps a pixel coordinate to (easting, northing).
    pub fn apply(&self, col: f64, row: f64) -> (f64, f64) {
        (
            self.a * col + self.b * row + self.c,
            self.d * col + self.e * row + self.f,
        )
    }

    /// The coefficients in world-file line order: A, D, B, E, C, F.
    pub fn lines(&self) -> [f64; 6] {
        [self.a, self.d, self.b, self.e, self.c, self.f]
    }
}
