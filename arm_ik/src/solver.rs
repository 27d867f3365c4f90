//! The `Arm` itself, and the CCD-style iterative solver that drives its
//! end effector toward a target.

use nalgebra::{Rotation2, Vector2};

use crate::angle::Angle;
use crate::definition::ArmDefinition;
use crate::segment::{forward_kinematics, Segment};

/// Squared distance, in mm^2, within which the end effector counts as
/// "reached" the target. Do not tune without updating the scenario tests.
const CONVERGENCE_TOLERANCE_SQ: f64 = 100.0;

/// Maximum number of CCD sweeps per `solve` call.
const MAX_OUTER_ITERATIONS: u32 = 10;

/// A planar multi-segment arm: an immutable [`ArmDefinition`] plus the
/// mutable [`Segment`] state it owns exclusively. No aliasing, no
/// back-references (segments are indexed into their definitions, never
/// pointing back at them).
#[derive(Debug, Clone)]
pub struct Arm {
    pub(crate) definition: ArmDefinition,
    pub(crate) segments: Vec<Segment>,
}

impl Arm {
    pub(crate) fn new(definition: ArmDefinition) -> Self {
        let mut segments: Vec<Segment> = definition.segments.iter().map(|_| Segment::new()).collect();
        forward_kinematics(&definition.segments, &mut segments);
        Arm { definition, segments }
    }

    pub fn definition(&self) -> &ArmDefinition {
        &self.definition
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Drive the end effector toward `(target_x, target_y)` (integer mm),
    /// mutating segment state in place. Returns `true` if the end effector
    /// came within [`CONVERGENCE_TOLERANCE_SQ`] of the (possibly
    /// body-projected) target, `false` if the solver stagnated first.
    pub fn solve(&mut self, target_x: i32, target_y: i32) -> bool {
        let (target_x, target_y) = self.project_target_out_of_body(target_x, target_y);

        for _ in 0..MAX_OUTER_ITERATIONS {
            let (converged, modified) = self.solve_iteration(target_x, target_y);
            if converged {
                // solve_iteration can return mid-sweep, after committing a
                // joint's relative_angle but before the tip/absolute_angle
                // fields of segments further down the chain are refreshed.
                // Resync here so callers reading segments() right after a
                // converged solve() see a pose consistent with the angles
                // actually committed, rather than a stale pre-sweep snapshot.
                forward_kinematics(&self.definition.segments, &mut self.segments);
                return true;
            }
            if !modified {
                break;
            }
        }
        false
    }

    /// Targets inside the body's exclusion region can never be reached
    /// directly; clip to whichever of the body's faces the target is
    /// nearest, per SPEC_FULL.md §4.4.
    fn project_target_out_of_body(&self, target_x: i32, target_y: i32) -> (i32, i32) {
        let body_left = self.definition.body_left_edge();
        let clipped_y = if (target_x as i64) < body_left {
            (target_y as i64).min(self.definition.arm_offset_y as i64)
        } else {
            (target_y as i64).min(self.definition.body_top_edge())
        };
        (target_x, clipped_y as i32)
    }

    /// One CCD sweep: refresh forward kinematics, then walk joints tip to
    /// root rotating each toward the target. Returns `(converged,
    /// modified)`.
    fn solve_iteration(&mut self, target_x: i32, target_y: i32) -> (bool, bool) {
        forward_kinematics(&self.definition.segments, &mut self.segments);

        let n = self.segments.len();
        if n == 0 {
            return (target_x == 0 && target_y == 0, false);
        }

        let target = Vector2::new(target_x as f64, target_y as f64);
        let mut end = tip_of(&self.segments, n - 1);
        let mut modified = false;

        for i in (0..n).rev() {
            let b = if i == 0 {
                Vector2::new(0.0, 0.0)
            } else {
                tip_of(&self.segments, i - 1)
            };

            let to_end = end - b;
            let to_target = target - b;
            let theta = rotation_toward(to_end, to_target);

            let effective = self.rotate_segment(i, theta);

            let rotated = Rotation2::new(effective.radians()) * to_end;
            end = Vector2::new((b.x + rotated.x).round(), (b.y + rotated.y).round());

            let remaining = target - end;
            if remaining.norm_squared() <= CONVERGENCE_TOLERANCE_SQ {
                return (true, modified);
            }

            if effective.radians().abs() * to_end.norm() > 1e-6 {
                modified = true;
            }
        }

        (false, modified)
    }
}

fn tip_of(segments: &[Segment], idx: usize) -> Vector2<f64> {
    Vector2::new(segments[idx].tip_x as f64, segments[idx].tip_y as f64)
}

/// The rotation (as a signed angle) that would place `to_end` onto the ray
/// through `to_target`, via the 2D cross/dot product. Degenerate when either
/// vector is (near) zero-length: treated as the identity rotation.
fn rotation_toward(to_end: Vector2<f64>, to_target: Vector2<f64>) -> Angle {
    let mag = to_end.norm() * to_target.norm();
    let (cos_theta, sin_theta) = if mag <= 1e-4 {
        (1.0, 0.0)
    } else {
        let cos_theta = to_end.dot(&to_target) / mag;
        let sin_theta = (to_end.x * to_target.y - to_end.y * to_target.x) / mag;
        (cos_theta, sin_theta)
    };
    let mut theta = cos_theta.clamp(-1.0, 1.0).acos();
    if sin_theta < 0.0 {
        theta = -theta;
    }
    Angle::from_radians(theta)
}
