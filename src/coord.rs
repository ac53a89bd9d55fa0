use std::ops::{Add, Mul};

/// A 2D point in mesh space.
///
/// Equality is exact per component. Two vertices are only merged when their
/// coordinates are numerically identical.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord {
    pub x: f32,
    pub y: f32,
}

impl Coord {
    pub const ZERO: Coord = Coord::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Canonical form for bitwise comparison: `-0.0` becomes `0.0`.
    #[must_use]
    pub fn canonical(self) -> Self {
        Self::new(self.x + 0.0, self.y + 0.0)
    }

    pub fn to_bits(self) -> [u32; 2] {
        let c = self.canonical();
        [c.x.to_bits(), c.y.to_bits()]
    }

    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f32> for Coord {
    type Output = Coord;

    fn mul(self, rhs: f32) -> Coord {
        Coord::new(self.x * rhs, self.y * rhs)
    }
}

/// Per-axis scaling, e.g. mesh space to tile space.
impl Mul<Coord> for Coord {
    type Output = Coord;

    fn mul(self, rhs: Coord) -> Coord {
        Coord::new(self.x * rhs.x, self.y * rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_scale() {
        let a = Coord::new(1.0, 0.5);
        let b = Coord::new(-0.5, 2.0);
        assert_eq!(a + b, Coord::new(0.5, 2.5));
        assert_eq!(a * 2.0, Coord::new(2.0, 1.0));
        assert_eq!(a * Coord::new(32.0, 16.0), Coord::new(32.0, 8.0));
    }

    #[test]
    fn test_equality_is_exact() {
        // No epsilon: values one ulp apart are distinct.
        let a = Coord::new(0.5, 0.5);
        let b = Coord::new(0.5, 0.5 + f32::EPSILON);
        assert_ne!(a, b);
        assert_eq!(a, Coord::new(0.25 * 2.0, 1.0 - 0.5));
    }

    #[test]
    fn test_canonical_negative_zero() {
        let neg = Coord::new(-0.0, 1.0);
        assert_eq!(neg, Coord::new(0.0, 1.0));
        assert_eq!(neg.to_bits(), Coord::new(0.0, 1.0).to_bits());
    }
}
