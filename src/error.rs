use std::{error::Error, fmt::Display};

/// Errors raised by the spline evaluator and the input validator.
#[derive(Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Method selector is not one of the known strategy names.
    InvalidMethod(String),
    /// A strategy was given fewer knots than it can work with.
    InsufficientKnots { required: usize, actual: usize },
    /// The natural cubic spline system could not be solved.
    SingularSystem,
    /// Knot or value sequence is empty.
    EmptyKnots,
    /// Knot and value sequences have different lengths.
    LengthMismatch { knots: usize, values: usize },
    /// Knot sequence is not sorted in ascending order.
    UnsortedKnots,
}

impl Display for SplineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplineError::InvalidMethod(name) => {
                write!(f, "Invalid interpolation method: {}", name)
            }
            SplineError::InsufficientKnots { required, actual } => {
                write!(f, "Interpolation requires at least {} knots, got {}", required, actual)
            }
            SplineError::SingularSystem => {
                write!(f, "Error while solving set of equations")
            }
            SplineError::EmptyKnots => {
                write!(f, "Empty knot array")
            }
            SplineError::LengthMismatch { knots, values } => {
                write!(f, "Lengths of xp and yp must match ({} vs {})", knots, values)
            }
            SplineError::UnsortedKnots => {
                write!(f, "xp must be sorted in ascending order")
            }
        }
    }
}

impl Error for SplineError {}
