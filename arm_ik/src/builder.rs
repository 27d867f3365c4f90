//! Fluent configuration builder: the only supported way to construct an
//! [`Arm`](crate::Arm).
//!
//! Mirrors the two-level builder/segment-handle split of the codebase this
//! was distilled from: `ArmBuilder` owns a growable sequence of draft
//! [`SegmentDefinition`]s, and each `bone(...)` call returns a short-lived
//! [`BoneBuilder`] bound to that draft's index. `build()` freezes the drafts
//! and moves them into a new `Arm`; no reference cycles, no handle outlives
//! the builder that produced it.

use crate::angle::Angle;
use crate::definition::{ArmDefinition, SegmentDefinition, ServoAngleFn};
use crate::error::ArmBuilderError;
use crate::solver::Arm;

pub struct ArmBuilder {
    body_height: u32,
    body_radius: u32,
    arm_offset_x: u32,
    arm_offset_y: u32,
    segments: Vec<SegmentDefinition>,
}

impl ArmBuilder {
    pub fn new() -> Self {
        ArmBuilder {
            body_height: 0,
            body_radius: 0,
            arm_offset_x: 0,
            arm_offset_y: 0,
            segments: Vec::new(),
        }
    }

    pub fn body(mut self, height_mm: u32, radius_mm: u32) -> Self {
        self.body_height = height_mm;
        self.body_radius = radius_mm;
        self
    }

    pub fn arm_offset(mut self, x_mm: u32, y_mm: u32) -> Self {
        self.arm_offset_x = x_mm;
        self.arm_offset_y = y_mm;
        self
    }

    /// Append a new segment with default limits and return a configurator
    /// bound to it. Call [`BoneBuilder::done`] to return to the arm builder.
    pub fn bone(mut self, length_mm: u32) -> BoneBuilder {
        self.segments.push(SegmentDefinition {
            length: length_mm,
            ..Default::default()
        });
        let index = self.segments.len() - 1;
        BoneBuilder {
            arm: self,
            index,
        }
    }

    /// Consume the builder, producing an `Arm`. The core does not validate
    /// its configuration (SPEC_FULL.md §7); use [`ArmBuilder::try_build`]
    /// for eager validation.
    pub fn build(self) -> Arm {
        Arm::new(ArmDefinition {
            body_height: self.body_height,
            body_radius: self.body_radius,
            arm_offset_x: self.arm_offset_x,
            arm_offset_y: self.arm_offset_y,
            segments: self.segments,
        })
    }

    /// Like [`ArmBuilder::build`], but rejects obviously broken
    /// configurations (zero-length segments, inverted limit pairs) instead
    /// of handing them to the solver.
    pub fn try_build(self) -> Result<Arm, ArmBuilderError> {
        for (i, seg) in self.segments.iter().enumerate() {
            if seg.length == 0 {
                return Err(ArmBuilderError::ZeroLengthSegment(i));
            }
            check_limits(i, "relative", seg.rel_min, seg.rel_max)?;
            check_limits(i, "absolute", seg.abs_min, seg.abs_max)?;
            check_limits(i, "base-relative", seg.base_rel_min, seg.base_rel_max)?;
        }
        Ok(self.build())
    }
}

fn check_limits(segment: usize, kind: &'static str, min: Angle, max: Angle) -> Result<(), ArmBuilderError> {
    if min.radians() > max.radians() {
        Err(ArmBuilderError::InvertedLimits { segment, kind })
    } else {
        Ok(())
    }
}

impl Default for ArmBuilder {
    fn default() -> Self {
        ArmBuilder::new()
    }
}

/// Per-segment configurator handed out by [`ArmBuilder::bone`]. Does not
/// outlive the builder it borrows ownership of; call [`BoneBuilder::done`]
/// to get it back.
pub struct BoneBuilder {
    arm: ArmBuilder,
    index: usize,
}

impl BoneBuilder {
    pub fn rel_stops(mut self, min: f64, max: f64) -> Self {
        self.arm.segments[self.index].rel_min = Angle::from_radians(min);
        self.arm.segments[self.index].rel_max = Angle::from_radians(max);
        self
    }

    pub fn abs_stops(mut self, min: f64, max: f64) -> Self {
        self.arm.segments[self.index].abs_min = Angle::from_radians(min);
        self.arm.segments[self.index].abs_max = Angle::from_radians(max);
        self
    }

    pub fn base_rel_stops(mut self, min: f64, max: f64) -> Self {
        self.arm.segments[self.index].base_rel_min = Angle::from_radians(min);
        self.arm.segments[self.index].base_rel_max = Angle::from_radians(max);
        self
    }

    pub fn servo_angle_fn(mut self, f: ServoAngleFn) -> Self {
        self.arm.segments[self.index].servo_angle = f;
        self
    }

    /// Return to the enclosing [`ArmBuilder`] to add more segments or build.
    pub fn done(self) -> ArmBuilder {
        self.arm
    }

    /// Convenience for ending the fluent chain directly on `build()`.
    pub fn build(self) -> Arm {
        self.arm.build()
    }

    /// Convenience for ending the fluent chain directly on `try_build()`.
    pub fn try_build(self) -> Result<Arm, ArmBuilderError> {
        self.arm.try_build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_produces_arm_with_correct_segment_count() {
        let arm = ArmBuilder::new().bone(100).done().bone(50).done().build();
        assert_eq!(arm.segments().len(), 2);
        assert_eq!(arm.definition().segments[0].length, 100);
        assert_eq!(arm.definition().segments[1].length, 50);
    }

    #[test]
    fn try_build_rejects_zero_length_segment() {
        let result = ArmBuilder::new().bone(0).done().try_build();
        assert_eq!(result.unwrap_err(), ArmBuilderError::ZeroLengthSegment(0));
    }

    #[test]
    fn try_build_rejects_inverted_limits() {
        let result = ArmBuilder::new().bone(10).rel_stops(1.0, -1.0).done().try_build();
        assert_eq!(
            result.unwrap_err(),
            ArmBuilderError::InvertedLimits { segment: 0, kind: "relative" }
        );
    }

    #[test]
    fn try_build_accepts_well_formed_configuration() {
        let result = ArmBuilder::new().body(60, 110).arm_offset(0, 20).bone(110).done().try_build();
        assert!(result.is_ok());
    }
}
