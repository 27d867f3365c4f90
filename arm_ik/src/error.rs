//! Builder-side validation errors.
//!
//! The solver itself never validates or fails (see the crate-level docs); this
//! error type exists purely for callers that want `ArmBuilder::try_build` to
//! reject an obviously broken configuration before it reaches the solver.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ArmBuilderError {
    ZeroLengthSegment(usize),
    InvertedLimits { segment: usize, kind: &'static str },
}

impl Error for ArmBuilderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl fmt::Display for ArmBuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmBuilderError::ZeroLengthSegment(i) => {
                write!(f, "segment {i} has zero length")
            }
            ArmBuilderError::InvertedLimits { segment, kind } => {
                write!(f, "segment {segment} has inverted {kind} limits (min > max)")
            }
        }
    }
}
