//! Rotation-with-constraints: the cascade that turns a candidate rotation of
//! one segment into the rotation actually realized, enforcing relative,
//! absolute, body-collision, and base-relative stops together.

use crate::angle::Angle;
use crate::solver::Arm;

impl Arm {
    /// Apply `delta` to segment `i`'s relative angle and return the rotation
    /// actually realized (always canonical; zero if the whole proposal was
    /// rejected by the body-collision check).
    ///
    /// See the module docs and `SPEC_FULL.md` §4.3 for the enforcement
    /// cascade this implements.
    pub(crate) fn rotate_segment(&mut self, i: usize, delta: Angle) -> Angle {
        let rel_min = self.definition.segments[i].rel_min;
        let rel_max = self.definition.segments[i].rel_max;
        let abs_min = self.definition.segments[i].abs_min;
        let abs_max = self.definition.segments[i].abs_max;

        let old_rel = self.segments[i].relative_angle;
        let mut new_rel = (old_rel + delta).clamp();
        new_rel = new_rel.max(rel_min).min(rel_max);

        let body_left = self.definition.body_left_edge();
        let body_top = self.definition.body_top_edge();
        let arm_offset_y = self.definition.arm_offset_y as i64;

        let mut prev_abs = Angle::ZERO;
        let mut x: i64 = 0;
        let mut y: i64 = 0;

        for k in 0..self.segments.len() {
            let a = if k == i {
                new_rel
            } else {
                self.segments[k].relative_angle
            };
            let mut abs_k = if k == 0 { a.clamp() } else { (prev_abs + a).clamp() };

            if k == i {
                if abs_k.radians() < abs_min.radians() {
                    abs_k = abs_min;
                    new_rel = (abs_k - prev_abs).clamp();
                } else if abs_k.radians() > abs_max.radians() {
                    abs_k = abs_max;
                    new_rel = (abs_k - prev_abs).clamp();
                }
            }

            let length = self.definition.segments[k].length as f64;
            let nx = x + (abs_k.cos() * length).round() as i64;
            let ny = y + (abs_k.sin() * length).round() as i64;

            if nx < body_left {
                if ny > arm_offset_y {
                    return Angle::ZERO;
                }
            } else if ny > body_top {
                return Angle::ZERO;
            }

            if k > 0 {
                let base_rel_min = self.definition.segments[k].base_rel_min;
                let base_rel_max = self.definition.segments[k].base_rel_max;
                let delta_base = abs_k - self.segments[0].absolute_angle;
                if delta_base.radians() < base_rel_min.radians() {
                    self.segments[0].absolute_angle = (abs_k - base_rel_min).clamp();
                } else if delta_base.radians() > base_rel_max.radians() {
                    self.segments[0].absolute_angle = (abs_k - base_rel_max).clamp();
                }
            }

            x = nx;
            y = ny;
            prev_abs = abs_k;
        }

        self.segments[i].relative_angle = new_rel;
        (new_rel - old_rel).clamp()
    }
}
