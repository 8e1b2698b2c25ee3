/*

    Responsible for creating a struct that represents
    ranges from a to b, used as one axis of a bounding
    box or of the running extents accumulator.

    The EMPTY constant (inf, -inf) doubles as the "nothing
    folded in yet" sentinel: expanding or unioning anything
    into EMPTY yields that thing back, so aggregation needs
    no special first-element case.

    @author: Bartu
    @date: Sept 2025

*/

use crate::numeric::{Float};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {

    pub const EMPTY: Self = Self {
        min: FloatConst::INF,
        max: FloatConst::NEG_INF,
    };

    pub fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    /// False for EMPTY and for any interval where expansion went wrong.
    pub fn validate(&self) -> bool {
        self.max >= self.min
    }

    pub fn size(&self) -> Float {
        self.max - self.min
    }

    pub fn center(&self) -> Float {
        (self.min + self.max) / 2.0
    }

    pub fn expand(&mut self, x: Float) {
        if x < self.min { self.min = x; }
        if x > self.max { self.max = x; }
    }

    /// Smallest interval covering both operands. Commutative and
    /// associative with EMPTY as identity, so it can drive a fold.
    pub fn union(&self, other: &Interval) -> Interval {
        Interval {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

}


pub trait FloatConst: Copy {
    const PI: Self;
    const INF: Self;
    const NEG_INF: Self;
}

impl FloatConst for f32 {
    const PI: Self = std::f32::consts::PI;
    const INF: Self = f32::INFINITY;
    const NEG_INF: Self = f32::NEG_INFINITY;
}

impl FloatConst for f64 {
    const PI: Self = std::f64::consts::PI;
    const INF: Self = f64::INFINITY;
    const NEG_INF: Self = f64::NEG_INFINITY;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_invalid_until_expanded() {
        let mut i = Interval::EMPTY;
        assert!(!i.validate());

        i.expand(3.0);
        assert!(i.validate());
        assert_eq!(i.min, 3.0);
        assert_eq!(i.max, 3.0);
        assert_eq!(i.size(), 0.0);
    }

    #[test]
    fn union_has_empty_as_identity() {
        let i = Interval::new(-1.0, 2.0);
        assert_eq!(Interval::EMPTY.union(&i), i);
        assert_eq!(i.union(&Interval::EMPTY), i);
    }

    #[test]
    fn union_is_commutative() {
        let a = Interval::new(-2.0, 0.5);
        let b = Interval::new(-0.5, 4.0);
        assert_eq!(a.union(&b), b.union(&a));
        assert_eq!(a.union(&b), Interval::new(-2.0, 4.0));
    }

    #[test]
    fn center_and_size() {
        let i = Interval::new(-1.0, 3.0);
        assert_eq!(i.center(), 1.0);
        assert_eq!(i.size(), 4.0);
    }
}
