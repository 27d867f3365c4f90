//! Immutable arm geometry: body rectangle, root offset, and the ordered
//! sequence of segment definitions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::angle::Angle;

/// A pure mapping from a segment's current pose to a servo-frame angle.
///
/// Opaque to the solver: invoked read-only by [`crate::Segment::servo_angle`]
/// and never by anything on the `solve` path. Must be pure; side effects are
/// undefined behaviour from the core's perspective.
pub type ServoAngleFn = Arc<dyn Fn(Angle, Angle) -> Angle + Send + Sync>;

/// Immutable per-segment configuration: length, the three classes of angular
/// stop, and the servo-angle mapping.
#[derive(Clone, Serialize, Deserialize)]
pub struct SegmentDefinition {
    /// Length in millimetres.
    pub length: u32,
    pub rel_min: Angle,
    pub rel_max: Angle,
    pub abs_min: Angle,
    pub abs_max: Angle,
    pub base_rel_min: Angle,
    pub base_rel_max: Angle,
    #[serde(skip, default = "default_servo_angle_fn")]
    pub servo_angle: ServoAngleFn,
}

fn default_servo_angle_fn() -> ServoAngleFn {
    Arc::new(|_absolute, relative| relative)
}

impl std::fmt::Debug for SegmentDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentDefinition")
            .field("length", &self.length)
            .field("rel_min", &self.rel_min)
            .field("rel_max", &self.rel_max)
            .field("abs_min", &self.abs_min)
            .field("abs_max", &self.abs_max)
            .field("base_rel_min", &self.base_rel_min)
            .field("base_rel_max", &self.base_rel_max)
            .finish_non_exhaustive()
    }
}

impl Default for SegmentDefinition {
    fn default() -> Self {
        SegmentDefinition {
            length: 0,
            rel_min: -Angle::PI,
            rel_max: Angle::PI,
            abs_min: -Angle::PI,
            abs_max: Angle::PI,
            base_rel_min: -Angle::PI,
            base_rel_max: Angle::PI,
            servo_angle: default_servo_angle_fn(),
        }
    }
}

/// Immutable arm geometry, produced once by [`crate::ArmBuilder::build`] and
/// owned by the [`crate::Arm`] for its lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmDefinition {
    pub body_height: u32,
    pub body_radius: u32,
    pub arm_offset_x: u32,
    pub arm_offset_y: u32,
    pub segments: Vec<SegmentDefinition>,
}

impl ArmDefinition {
    /// Left edge of the body exclusion rectangle, in mm (may be negative).
    pub fn body_left_edge(&self) -> i64 {
        self.body_radius as i64 - self.arm_offset_x as i64
    }

    /// Top edge of the body exclusion rectangle, in mm.
    pub fn body_top_edge(&self) -> i64 {
        self.arm_offset_y as i64 + self.body_height as i64
    }
}
