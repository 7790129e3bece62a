use super::Vector2d;

/// Gets the unit vector pointing "forward" for a body with the given heading.
///
/// A heading of zero faces towards negative z, and positive headings turn
/// anticlockwise when viewed from above, so a heading of `-π/2` faces positive x.
pub fn heading_direction(heading: f64) -> Vector2d {
    Vector2d::new(-heading.sin(), -heading.cos())
}

/// Computes the half extents of the axis-aligned box enclosing a rectangle
/// with the given half extents, after rotating it by `heading` about its centre.
///
/// # Returns
/// A tuple containing the half extents along x and z respectively.
pub fn rotated_half_extents(half_x: f64, half_z: f64, heading: f64) -> (f64, f64) {
    let (sin, cos) = heading.sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    (cos * half_x + sin * half_z, sin * half_x + cos * half_z)
}

#[cfg(test)]
mod test {
    use super::{heading_direction, rotated_half_extents};
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn forward_directions() {
        let dir = heading_direction(0.0);
        assert_approx_eq!(dir.x, 0.0);
        assert_approx_eq!(dir.y, -1.0);

        let dir = heading_direction(-FRAC_PI_2);
        assert_approx_eq!(dir.x, 1.0);
        assert_approx_eq!(dir.y, 0.0);

        let dir = heading_direction(FRAC_PI_2);
        assert_approx_eq!(dir.x, -1.0);
        assert_approx_eq!(dir.y, 0.0);
    }

    #[test]
    fn rotated_extents() {
        let (hx, hz) = rotated_half_extents(3.0, 2.0, 0.0);
        assert_approx_eq!(hx, 3.0);
        assert_approx_eq!(hz, 2.0);

        let (hx, hz) = rotated_half_extents(3.0, 2.0, -FRAC_PI_2);
        assert_approx_eq!(hx, 2.0);
        assert_approx_eq!(hz, 3.0);

        // The enclosing box grows at oblique headings
        let (hx, hz) = rotated_half_extents(3.0, 2.0, FRAC_PI_4);
        assert_approx_eq!(hx, 5.0 * FRAC_PI_4.cos());
        assert_approx_eq!(hz, 5.0 * FRAC_PI_4.cos());
    }
}
