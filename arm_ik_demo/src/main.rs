// Drives the canonical two-segment arm through a handful of targets and
// prints the resulting pose as JSON. Run with: cargo run -p arm_ik_demo

use arm_ik::{Arm, ArmBuilder};
use tracing::{debug, info};

#[allow(clippy::approx_constant)]
fn build_arm() -> Arm {
    ArmBuilder::new()
        .body(60, 110)
        .arm_offset(0, 20)
        .bone(110)
        .rel_stops(-1.7, 0.0)
        .done()
        .bone(140)
        .rel_stops(0.523_599, std::f64::consts::PI - 0.261_799)
        .abs_stops(-0.35, std::f64::consts::PI)
        .base_rel_stops(0.7, 2.8)
        .done()
        .build()
}

fn drive_to(arm: &mut Arm, target_x: i32, target_y: i32) {
    let converged = arm.solve(target_x, target_y);
    if converged {
        info!(target_x, target_y, "converged");
    } else {
        info!(target_x, target_y, "stagnated, reporting best pose reached");
    }
    for (i, seg) in arm.segments().iter().enumerate() {
        debug!(
            segment = i,
            relative_deg = seg.relative_angle.degrees(),
            absolute_deg = seg.absolute_angle.degrees(),
            tip_x = seg.tip_x,
            tip_y = seg.tip_y,
            "segment pose"
        );
    }
    let pose = serde_json::json!({
        "target": { "x": target_x, "y": target_y },
        "converged": converged,
        "segments": arm.segments().iter().map(|s| serde_json::json!({
            "relative_angle_rad": s.relative_angle.radians(),
            "absolute_angle_rad": s.absolute_angle.radians(),
            "tip_x": s.tip_x,
            "tip_y": s.tip_y,
        })).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&pose).unwrap());
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut arm = build_arm();
    for (target_x, target_y) in [(150, -140), (200, -50), (200, 0), (-300, -300)] {
        drive_to(&mut arm, target_x, target_y);
    }
}
