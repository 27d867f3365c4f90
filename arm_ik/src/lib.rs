//! Inverse-kinematics solver for a planar, multi-segment robotic arm mounted
//! on a cylindrical body.
//!
//! Given a target point in the arm's 2D working plane, [`Arm::solve`]
//! iteratively adjusts per-joint rotations so the end of the final segment
//! approaches the target, respecting per-joint, cumulative-absolute, and
//! base-relative angular stops, and never letting a segment's tip penetrate
//! the body's rectangular exclusion zone.
//!
//! Construction goes through [`ArmBuilder`] only. The solver itself is a
//! pure, synchronous, allocation-free function of its inputs: no logging, no
//! I/O, no async runtime (see `SPEC_FULL.md` §5, §7).

mod angle;
mod builder;
mod definition;
mod error;
mod kinematics;
mod segment;
mod solver;

pub use angle::Angle;
pub use builder::{ArmBuilder, BoneBuilder};
pub use definition::{ArmDefinition, SegmentDefinition, ServoAngleFn};
pub use error::ArmBuilderError;
pub use segment::Segment;
pub use solver::Arm;
