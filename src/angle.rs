//! Canonical orientation angles for digitized graticule segments.
//!
//! Both functions fold the direction vector into a fixed half-plane before
//! measuring, so the two possible tracing directions of the same physical
//! line report the same angle. Pixel space has +x rightward and +y downward.

/// Angle a latitude line makes with the horizontal pixel axis.
///
/// The vector is folded into the right half-plane (x-component ≥ 0) and the
/// angle is measured counter-clockwise-positive from +x in conventional
/// (y-up) terms. Range (−π/2, π/2].
#[inline]
pub fn lat_angle(dx: f64, dy: f64) -> f64 {
    let (dx, dy) = if dx < 0.0 { (-dx, -dy) } else { (dx, dy) };
    (-dy).atan2(dx)
}

/// Angle a longitude line makes with the vertical pixel axis.
///
/// The vector is folded into the upper half-plane (y-component ≤ 0 in image
/// coordinates) and the angle is measured clockwise-positive from the
/// upward vertical. Range (−π/2, π/2].
#[inline]
pub fn lon_angle(dx: f64, dy: f64) -> f64 {
    let (dx, dy) = if dy > 0.0 { (-dx, -dy) } else { (dx, dy) };
    dx.atan2(-dy)
}
