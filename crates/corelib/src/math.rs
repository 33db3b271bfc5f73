mod vector;

pub use glam::*;
pub use vector::Vector;

/// `π * 2`
pub const TAU: f64 = std::f64::consts::TAU;

/// Converts degrees to radians
#[inline]
pub fn to_rad(degs: f64) -> f64 {
    degs * (std::f64::consts::PI / 180.0)
}

/// Converts radians to degrees
#[inline]
pub fn to_deg(rads: f64) -> f64 {
    rads * (180.0 / std::f64::consts::PI)
}

/// Constrains `num` within `min` and `max`, the bounds can be passed in any order
#[inline]
pub fn constrain(num: f64, min: f64, max: f64) -> f64 {
    let (lower, upper) = if min <= max { (min, max) } else { (max, min) };
    num.min(upper).max(lower)
}

/// Polar coordinates, `theta` in radians
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    pub theta: f64,
    pub radius: f64,
}

/// Converts polar coordinates to cartesian coordinates
#[inline]
pub fn to_cartesian(radius: f64, theta: f64) -> Vector {
    Vector::new(radius * theta.cos(), radius * theta.sin())
}

/// Converts cartesian coordinates to polar coordinates
#[inline]
pub fn to_polar(x: f64, y: f64) -> Polar {
    let v = Vector::new(x, y);
    Polar {
        theta: v.angle(),
        radius: v.magnitude(),
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    #[inline]
    pub const fn new(origin: DVec2, size: DVec2) -> Self {
        Self { origin, size }
    }
}

pub trait IntoVector {
    fn into_vector(self) -> Vector;
}

impl IntoVector for Vector {
    #[inline(always)]
    fn into_vector(self) -> Vector {
        self
    }
}
impl IntoVector for DVec2 {
    #[inline(always)]
    fn into_vector(self) -> Vector {
        self.into()
    }
}
impl IntoVector for (f64, f64) {
    #[inline(always)]
    fn into_vector(self) -> Vector {
        self.into()
    }
}
impl IntoVector for [f64; 2] {
    #[inline(always)]
    fn into_vector(self) -> Vector {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-3;

    #[test]
    fn test_angle_conversion() {
        assert!((to_rad(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((to_deg(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
        assert!((to_deg(to_rad(33.0)) - 33.0).abs() < 1e-12);
    }

    #[test]
    fn test_constrain() {
        assert_eq!(constrain(15.0, 0.0, 10.0), 10.0);
        assert_eq!(constrain(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(constrain(5.0, 0.0, 10.0), 5.0);
    }

    #[test]
    fn test_constrain_inverted_bounds() {
        assert_eq!(constrain(15.0, 10.0, 0.0), 10.0);
        assert_eq!(constrain(-3.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_to_polar() {
        let p = to_polar(3.0, 4.0);
        assert!((p.radius - 5.0).abs() < 1e-12);
        assert!((p.theta - 0.927).abs() < EPS);
    }

    #[test]
    fn test_polar_roundtrip() {
        let v = to_cartesian(5.0, 0.927);
        // 0.927 is a truncated angle, so allow a wider margin
        assert!((v.x - 3.0).abs() < 1e-2);
        assert!((v.y - 4.0).abs() < 1e-2);
    }

    #[test]
    fn test_into_vector() {
        assert_eq!((3.0, 4.0).into_vector(), Vector::new(3.0, 4.0));
        assert_eq!([5.0, 6.0].into_vector(), Vector::new(5.0, 6.0));
        assert_eq!(DVec2::new(1.0, 2.0).into_vector(), Vector::new(1.0, 2.0));
    }
}
