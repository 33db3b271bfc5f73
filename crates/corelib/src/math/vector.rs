use glam::DVec2;
use std::fmt;

/// A mutable 2D vector.
///
/// Arithmetic methods (`add`, `subtract`, `multiply`, `divide`) work in
/// place on the receiver, while [`Vector::sum`] and [`Vector::difference`]
/// produce a new value and leave the operands alone.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0);
    pub const ONE: Vector = Vector::new(1.0, 1.0);

    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v)
    }

    /// Sums two vectors together
    #[inline]
    pub fn sum(v1: &Vector, v2: &Vector) -> Vector {
        Vector::new(v1.x + v2.x, v1.y + v2.y)
    }

    /// Subtracts `v2` from `v1` (`v1 - v2`)
    #[inline]
    pub fn difference(v1: &Vector, v2: &Vector) -> Vector {
        Vector::new(v1.x - v2.x, v1.y - v2.y)
    }

    /// Adds `v` to this vector
    #[inline]
    pub fn add(&mut self, v: &Vector) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self
    }

    /// Subtracts `v` from this vector
    #[inline]
    pub fn subtract(&mut self, v: &Vector) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self
    }

    /// Multiplies both components by `num`
    #[inline]
    pub fn multiply(&mut self, num: f64) -> &mut Self {
        self.x *= num;
        self.y *= num;
        self
    }

    /// Divides both components by `num`, zero gives inf/NaN as usual for floats
    #[inline]
    pub fn divide(&mut self, num: f64) -> &mut Self {
        self.x /= num;
        self.y /= num;
        self
    }

    /// Single argument arctangent of `y / x`.
    ///
    /// It only covers `(-π/2, π/2)`, so vectors on the left half-plane
    /// report the same heading as their opposite. Use [`Vector::angle`] for
    /// the full polar angle.
    #[inline]
    pub fn heading(&self) -> f64 {
        (self.y / self.x).atan()
    }

    /// Signed polar angle in `(-π, π]`
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rescales the vector to a magnitude of 1, zero vectors are left as they are
    pub fn normalize(&mut self) -> &mut Self {
        let m = self.magnitude();
        if m > 0.0 {
            self.divide(m);
        }
        self
    }

    /// Limits the magnitude of the vector to `max`
    pub fn limit(&mut self, max: f64) -> &mut Self {
        if self.magnitude() > max {
            self.normalize().multiply(max);
        }
        self
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

impl From<[f64; 2]> for Vector {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector::new(x, y)
    }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}
