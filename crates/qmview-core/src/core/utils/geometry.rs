use nalgebra::{Point3, Rotation3, Unit, Vector3};

pub fn rotation_from_axis_angle(axis: &Vector3<f64>, angle_degrees: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Unit::new_normalize(*axis), angle_degrees.to_radians())
}

/// Tilt applied before an orthographic drop of z: first about X, then about Y.
pub fn tilt_rotation(x_degrees: f64, y_degrees: f64) -> Rotation3<f64> {
    rotation_from_axis_angle(&Vector3::y(), y_degrees)
        * rotation_from_axis_angle(&Vector3::x(), x_degrees)
}

/// Strict proximity test: `true` iff the points are closer than `threshold`.
/// Two points exactly `threshold` apart are not within it.
#[inline]
pub fn is_within(p1: &Point3<f64>, p2: &Point3<f64>, threshold: f64) -> bool {
    nalgebra::distance(p1, p2) < threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn is_within_is_strict_at_threshold() {
        let a = Point3::origin();
        let b = Point3::new(100.0, 0.0, 0.0);
        assert!(!is_within(&a, &b, 100.0));
        assert!(is_within(&a, &b, 100.000_001));
        assert!(is_within(&a, &Point3::new(99.999, 0.0, 0.0), 100.0));
    }

    #[test]
    fn is_within_handles_pythagorean_boundary() {
        let a = Point3::new(1.0, 1.0, 1.0);
        let b = Point3::new(61.0, 81.0, 1.0);
        assert!(!is_within(&a, &b, 100.0));
    }

    #[test]
    fn rotation_from_axis_angle_turns_x_into_y() {
        let rot = rotation_from_axis_angle(&Vector3::z(), 90.0);
        let v = rot * Vector3::x();
        assert!((v - Vector3::y()).norm() < EPS);
    }

    #[test]
    fn tilt_rotation_applies_x_before_y() {
        let rot = tilt_rotation(90.0, 90.0);
        // X by 90° maps y -> z, then Y by 90° maps z -> x.
        let v = rot * Vector3::y();
        assert!((v - Vector3::x()).norm() < EPS);
    }
}
