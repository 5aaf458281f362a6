use std::fmt::{self, Display};

/// Enum representing the possible errors of a least-squares fit.
///
/// - `EmptyInput`: there are no rows to fit.
/// - `DimensionMismatch`: a row or the target does not have the expected length.
/// - `NonFiniteInput`: a feature or target value is NaN or infinite.
/// - `Singular`: the solver could not produce a finite solution.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    EmptyInput,
    DimensionMismatch { expected: usize, got: usize },
    NonFiniteInput,
    Singular,
}

impl Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionError::EmptyInput => write!(f, "[EmptyInput]: there are no rows to fit"),
            RegressionError::DimensionMismatch { expected, got } => write!(
                f,
                "[DimensionMismatch]: expected {} values, got {}",
                expected, got
            ),
            RegressionError::NonFiniteInput => {
                write!(f, "[NonFiniteInput]: the data holds NaN or infinite values")
            }
            RegressionError::Singular => {
                write!(f, "[Singular]: the least-squares system has no finite solution")
            }
        }
    }
}

impl std::error::Error for RegressionError {}
