//! Degree arithmetic shared by every component.

/// Normalize an angle into `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `360.0`, so that
/// case is folded back to zero.
pub fn normalize_degrees(angle: f64) -> f64 {
    let r = angle.rem_euclid(360.0);
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Wrap an angular difference into `(-180, 180]`.
pub fn wrap_signed_degrees(delta: f64) -> f64 {
    let r = normalize_degrees(delta);
    if r > 180.0 {
        r - 360.0
    } else {
        r
    }
}

/// Shortest arc between two longitudes, in `[0, 180]`.
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    diff.min(360.0 - diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert!(normalize_degrees(-1e-17) < 360.0);
    }

    #[test]
    fn test_wrap_signed_degrees() {
        assert_eq!(wrap_signed_degrees(10.0), 10.0);
        assert_eq!(wrap_signed_degrees(350.0), -10.0);
        assert_eq!(wrap_signed_degrees(-350.0), 10.0);
        assert_eq!(wrap_signed_degrees(180.0), 180.0);
        assert_eq!(wrap_signed_degrees(-180.0), 180.0);
    }

    #[test]
    fn test_angular_separation_wraps() {
        assert_eq!(angular_separation(350.0, 10.0), 20.0);
        assert_eq!(angular_separation(10.0, 350.0), 20.0);
        assert_eq!(angular_separation(0.0, 180.0), 180.0);
    }
}
