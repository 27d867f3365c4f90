//! Plane angle value type with wrap-to-canonical-range arithmetic.

use std::f64::consts::PI;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A plane angle, stored internally in radians.
///
/// Arithmetic (`+`, `-`, `*`, unary `-`) does not normalize the result; call
/// [`Angle::clamp`] explicitly when a canonical value is required. Pose angles
/// stored on [`crate::Segment`] are always canonical between public calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const PI: Angle = Angle(PI);

    /// Build an angle from a radian value.
    pub fn from_radians(radians: f64) -> Self {
        Angle(radians)
    }

    /// Build an angle from a degree value.
    pub fn from_degrees(degrees: f64) -> Self {
        Angle(degrees.to_radians())
    }

    pub fn radians(self) -> f64 {
        self.0
    }

    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Reduce `self` modulo 2π into the canonical range (-π, π].
    pub fn clamp(self) -> Angle {
        let mut a = self.0 % (2.0 * PI);
        if a < -PI {
            a += 2.0 * PI;
        } else if a > PI {
            a -= 2.0 * PI;
        }
        Angle(a)
    }

    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    pub fn min(self, other: Angle) -> Angle {
        Angle(self.0.min(other.0))
    }

    pub fn max(self, other: Angle) -> Angle {
        Angle(self.0.max(other.0))
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        self.0 += rhs.0;
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl Default for Angle {
    fn default() -> Self {
        Angle::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn degrees_and_radians_round_trip() {
        let a = Angle::from_degrees(57.295_779_513);
        assert_relative_eq!(a.radians(), 1.0, epsilon = 1e-9);
        let b = Angle::from_radians(1.0);
        assert_relative_eq!(b.degrees(), 57.295_779_513, epsilon = 1e-6);
    }

    #[test]
    fn clamp_is_idempotent_on_boundary_values() {
        assert_relative_eq!(Angle::PI.clamp().radians(), PI);
        // -pi is a fixed point of this clamp (matches the original
        // implementation's fmod-based algorithm exactly): it is left
        // untouched rather than folded onto +pi.
        assert_relative_eq!((-Angle::PI).clamp().radians(), -PI);
        assert_relative_eq!(Angle::ZERO.clamp().radians(), 0.0);
    }

    #[test]
    fn add_then_subtract_is_identity_after_clamp() {
        let a = Angle::from_degrees(170.0);
        let b = Angle::from_degrees(40.0);
        let back = ((a + b).clamp() - b).clamp();
        assert_relative_eq!(back.radians(), a.clamp().radians(), epsilon = 1e-9);
    }

    proptest! {
        #[test]
        fn clamp_always_in_canonical_range(r in -1000.0f64..1000.0) {
            let clamped = Angle::from_radians(r).clamp().radians();
            prop_assert!(clamped > -PI - 1e-9 && clamped <= PI + 1e-9);
        }

        #[test]
        fn clamp_idempotent(r in -1000.0f64..1000.0) {
            let once = Angle::from_radians(r).clamp();
            let twice = once.clamp();
            prop_assert!((once.radians() - twice.radians()).abs() < 1e-9);
        }

        #[test]
        fn deg_of_rad_round_trips(x in -100.0f64..100.0) {
            let rebuilt = Angle::from_degrees(Angle::from_radians(x).degrees());
            prop_assert!((rebuilt.radians() - x).abs() < 1e-9);
        }

        #[test]
        fn rad_of_deg_round_trips(x in -100.0f64..100.0) {
            let rebuilt = Angle::from_radians(Angle::from_degrees(x).radians());
            prop_assert!((rebuilt.degrees() - x).abs() < 1e-9);
        }
    }
}
