pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

/// Point on a circle of `radius` around the origin.
///
/// Angle zero sits at 12 o'clock and angles grow clockwise in a y-down plane, the same convention
/// d3's circular layouts use.
pub fn polar(radius: f64, angle: f64) -> Point {
    point(radius * angle.sin(), -radius * angle.cos())
}

pub(crate) fn large_arc(delta: f64) -> bool {
    delta > std::f64::consts::PI
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn polar_zero_points_up() {
        let p = polar(10.0, 0.0);
        assert!(close(p.x, 0.0));
        assert!(close(p.y, -10.0));
    }

    #[test]
    fn polar_quarter_turn_points_right() {
        let p = polar(10.0, std::f64::consts::FRAC_PI_2);
        assert!(close(p.x, 10.0));
        assert!(close(p.y, 0.0));
    }
}
