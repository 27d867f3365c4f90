//! Mutable per-segment pose and forward kinematics.

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::definition::SegmentDefinition;

/// Runtime pose of one segment: its angle relative to the parent segment
/// (or world frame, for segment 0), the derived absolute angle, and the
/// integer-millimetre position of its far end ("tip").
///
/// Between public calls, `absolute_angle`/`tip_x`/`tip_y` are always
/// consistent with `relative_angle` (applying [`forward_kinematics`] to the
/// chain would reproduce them exactly).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub relative_angle: Angle,
    pub absolute_angle: Angle,
    pub tip_x: i32,
    pub tip_y: i32,
}

impl Segment {
    /// A fresh segment with the default initial pose (relative angle -π/2,
    /// absolute angle and tip undefined until the first forward-kinematics
    /// pass).
    pub fn new() -> Self {
        Segment {
            relative_angle: Angle::from_radians(-std::f64::consts::FRAC_PI_2),
            absolute_angle: Angle::ZERO,
            tip_x: 0,
            tip_y: 0,
        }
    }

    /// The servo-frame angle for this segment's current pose, computed
    /// on demand from the owning definition's `servo_angle` mapping.
    pub fn servo_angle(&self, def: &SegmentDefinition) -> Angle {
        (def.servo_angle)(self.absolute_angle, self.relative_angle)
    }
}

impl Default for Segment {
    fn default() -> Self {
        Segment::new()
    }
}

/// Recompute `absolute_angle` and `(tip_x, tip_y)` for every segment from its
/// current `relative_angle`, walking the chain root to tip.
///
/// Each segment's absolute angle is the canonical sum of its own relative
/// angle and its parent's absolute angle (or just its own relative angle, for
/// segment 0). Each tip is the previous segment's tip plus `length * (cos,
/// sin)` of the absolute angle, rounded to the nearest integer millimetre.
pub fn forward_kinematics(defs: &[SegmentDefinition], segments: &mut [Segment]) {
    let mut prev_abs = Angle::ZERO;
    let mut prev_tip = (0i64, 0i64);
    for (k, (def, seg)) in defs.iter().zip(segments.iter_mut()).enumerate() {
        let abs = if k == 0 {
            seg.relative_angle.clamp()
        } else {
            (prev_abs + seg.relative_angle).clamp()
        };
        let dx = (abs.cos() * def.length as f64).round() as i64;
        let dy = (abs.sin() * def.length as f64).round() as i64;
        let tip = (prev_tip.0 + dx, prev_tip.1 + dy);

        seg.absolute_angle = abs;
        seg.tip_x = tip.0 as i32;
        seg.tip_y = tip.1 as i32;

        prev_abs = abs;
        prev_tip = tip;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::SegmentDefinition;
    use approx::assert_relative_eq;

    #[test]
    fn single_segment_at_zero_points_along_x_axis() {
        let def = SegmentDefinition {
            length: 100,
            ..Default::default()
        };
        let mut seg = Segment::new();
        seg.relative_angle = Angle::ZERO;
        let mut segments = [seg];
        forward_kinematics(std::slice::from_ref(&def), &mut segments);
        assert_eq!(segments[0].tip_x, 100);
        assert_eq!(segments[0].tip_y, 0);
        assert_relative_eq!(segments[0].absolute_angle.radians(), 0.0);
    }

    #[test]
    fn second_segment_absolute_is_cumulative() {
        let defs = [
            SegmentDefinition {
                length: 100,
                ..Default::default()
            },
            SegmentDefinition {
                length: 50,
                ..Default::default()
            },
        ];
        let mut segments = [Segment::new(), Segment::new()];
        segments[0].relative_angle = Angle::from_degrees(90.0);
        segments[1].relative_angle = Angle::from_degrees(-90.0);
        forward_kinematics(&defs, &mut segments);
        assert_relative_eq!(segments[0].absolute_angle.radians(), std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
        assert_relative_eq!(segments[1].absolute_angle.radians(), 0.0, epsilon = 1e-9);
        assert_eq!(segments[0].tip_x, 0);
        assert_eq!(segments[0].tip_y, 100);
        assert_eq!(segments[1].tip_x, 50);
        assert_eq!(segments[1].tip_y, 100);
    }

    #[test]
    fn servo_angle_defaults_to_identity_on_relative() {
        let def = SegmentDefinition {
            length: 100,
            ..Default::default()
        };
        let mut seg = Segment::new();
        seg.relative_angle = Angle::from_degrees(30.0);
        seg.absolute_angle = Angle::from_degrees(75.0);
        assert_relative_eq!(seg.servo_angle(&def).radians(), seg.relative_angle.radians());
    }

    #[test]
    fn servo_angle_uses_custom_mapping() {
        use std::sync::Arc;

        let def = SegmentDefinition {
            length: 100,
            servo_angle: Arc::new(|absolute, relative| absolute - relative),
            ..Default::default()
        };
        let mut seg = Segment::new();
        seg.relative_angle = Angle::from_degrees(30.0);
        seg.absolute_angle = Angle::from_degrees(75.0);
        assert_relative_eq!(seg.servo_angle(&def).radians(), Angle::from_degrees(45.0).radians(), epsilon = 1e-9);
    }
}
