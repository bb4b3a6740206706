//! Two-dimensional vector value type.
//!
//! There are two ways to work with a [`Vector2`]:
//!
//! * the free functions in this module ([`add`], [`dot`], [`lerp`], ...) never
//!   touch their inputs and always hand back a fresh value;
//! * the methods [`Vector2::set`], [`Vector2::add`], [`Vector2::subtract`],
//!   [`Vector2::multiply`] and [`Vector2::divide`] mutate the receiver and
//!   return it, so they can be chained.
//!
//! Nothing here validates input. Division by zero, normalizing a zero vector
//! or an out-of-domain angle all produce `NaN`/`inf` the usual IEEE-754 way.

use glam::DVec2;
use std::fmt;
use std::ops::{AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A point or displacement in the plane. Screen convention: +y points down.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn one() -> Self {
        Self::new(1.0, 1.0)
    }

    /// `(0, -1)`: up is toward negative y on screen.
    pub fn up() -> Self {
        Self::new(0.0, -1.0)
    }

    /// `(0, 1)`: down is toward positive y on screen.
    pub fn down() -> Self {
        Self::new(0.0, 1.0)
    }

    pub fn left() -> Self {
        Self::new(-1.0, 0.0)
    }

    pub fn right() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Unit vector pointing at `angle` radians.
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        Self::new(magnitude * angle.cos(), magnitude * angle.sin())
    }

    /// Both components uniform in `[0, 1)`. Not reproducible.
    pub fn random() -> Self {
        Self::new(fastrand::f64(), fastrand::f64())
    }

    /// Rotated 90° counter-clockwise.
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn inverse(&self) -> Self {
        let mut inverse = *self;
        inverse.multiply(-1.0);
        inverse
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit-length copy. A zero vector comes back as `(NaN, NaN)`.
    pub fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.divide(self.magnitude());
        normalized
    }

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Adds `other` in place.
    ///
    /// With `std::ops::Add` in scope, `v.add(&w)` on a by-value `v` resolves
    /// to the operator instead; call it as `Vector2::add(&mut v, &w)` there.
    pub fn add(&mut self, other: &Vector2) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    pub fn subtract(&mut self, other: &Vector2) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    pub fn multiply(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self
    }

    pub fn divide(&mut self, scalar: f64) -> &mut Self {
        self.x /= scalar;
        self.y /= scalar;
        self
    }

    pub fn equals(&self, other: &Vector2) -> bool {
        self.x == other.x && self.y == other.y
    }
}

pub fn add(v1: &Vector2, v2: &Vector2) -> Vector2 {
    let mut sum = *v1;
    sum.add(v2);
    sum
}

pub fn subtract(v1: &Vector2, v2: &Vector2) -> Vector2 {
    let mut difference = *v1;
    difference.subtract(v2);
    difference
}

pub fn multiply(v: &Vector2, scalar: f64) -> Vector2 {
    let mut scaled = *v;
    scaled.multiply(scalar);
    scaled
}

pub fn divide(v: &Vector2, scalar: f64) -> Vector2 {
    let mut scaled = *v;
    scaled.divide(scalar);
    scaled
}

pub fn dot(v1: &Vector2, v2: &Vector2) -> f64 {
    v1.x * v2.x + v1.y * v2.y
}

/// Z component of the 3D cross product; positive when `v2` is
/// counter-clockwise from `v1`.
pub fn cross(v1: &Vector2, v2: &Vector2) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

/// Unsigned angle between the two vectors in `[0, π]`. The cosine is not
/// clamped, so rounding past ±1 yields `NaN`, as does a zero-length input.
pub fn angle(v1: &Vector2, v2: &Vector2) -> f64 {
    (dot(v1, v2) / (v1.magnitude() * v2.magnitude())).acos()
}

pub fn distance(v1: &Vector2, v2: &Vector2) -> f64 {
    subtract(v1, v2).magnitude()
}

/// Linear interpolation. `t` is not clamped, values outside `[0, 1]`
/// extrapolate along the line.
pub fn lerp(v1: &Vector2, v2: &Vector2, t: f64) -> Vector2 {
    Vector2::new(v1.x + (v2.x - v1.x) * t, v1.y + (v2.y - v1.y) * t)
}

pub fn equals(v1: &Vector2, v2: &Vector2) -> bool {
    v1.equals(v2)
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// Not imported: `std::ops::Add` in scope would shadow the mutating `add` on
// by-value receivers.
impl std::ops::Add for Vector2 {
    type Output = Vector2;
    fn add(self, other: Vector2) -> Vector2 {
        add(&self, &other)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, other: Vector2) -> Vector2 {
        subtract(&self, &other)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, scalar: f64) -> Vector2 {
        multiply(&self, scalar)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    fn mul(self, vector: Vector2) -> Vector2 {
        multiply(&vector, self)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;
    fn div(self, scalar: f64) -> Vector2 {
        divide(&self, scalar)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        self.inverse()
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Vector2) {
        Vector2::add(self, &other);
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Vector2) {
        Vector2::subtract(self, &other);
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, scalar: f64) {
        Vector2::multiply(self, scalar);
    }
}

impl DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, scalar: f64) {
        Vector2::divide(self, scalar);
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
