use std::fmt;

/// Which unit cost of the disc model a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostKind {
    Inflate,
    Deflate,
}

impl fmt::Display for CostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostKind::Inflate => f.write_str("inflate"),
            CostKind::Deflate => f.write_str("deflate"),
        }
    }
}

/// Failure of a solver entry point.
///
/// Everything except `Infeasible` and `CostOverflow` is invalid input,
/// rejected before any computation starts. A legitimate zero answer is never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two parallel inputs disagree in length.
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A path needs at least two strokes.
    TooFewStrokes(usize),
    InvalidDirection {
        index: usize,
        found: char,
    },
    NegativeLength {
        index: usize,
        length: i64,
    },
    MalformedStroke {
        token: String,
    },
    /// The walk left the `i64` coordinate range.
    CoordinateOverflow {
        index: usize,
    },
    NonPositiveRadius {
        index: usize,
        radius: i64,
    },
    NegativeCost {
        which: CostKind,
        value: i64,
    },
    /// No finite-cost arrangement exists.
    Infeasible,
    /// The minimum cost exists but does not fit in `u128`.
    CostOverflow,
}

impl Error {
    /// True for every variant caused by malformed arguments.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Error::Infeasible | Error::CostOverflow)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LengthMismatch {
                what,
                expected,
                actual,
            } => write!(f, "invalid input: expected {expected} {what}, got {actual}"),
            Error::TooFewStrokes(n) => {
                write!(f, "invalid input: a path needs at least 2 strokes, got {n}")
            }
            Error::InvalidDirection { index, found } => {
                write!(f, "invalid input: direction {found:?} at stroke {index}")
            }
            Error::NegativeLength { index, length } => {
                write!(f, "invalid input: negative length {length} at stroke {index}")
            }
            Error::MalformedStroke { token } => {
                write!(f, "invalid input: malformed stroke {token:?}")
            }
            Error::CoordinateOverflow { index } => {
                write!(f, "invalid input: coordinate overflow at stroke {index}")
            }
            Error::NonPositiveRadius { index, radius } => {
                write!(f, "invalid input: radius {radius} at disc {index}")
            }
            Error::NegativeCost { which, value } => {
                write!(f, "invalid input: negative {which} cost {value}")
            }
            Error::Infeasible => f.write_str("no finite-cost arrangement exists"),
            Error::CostOverflow => f.write_str("minimum cost exceeds the u128 range"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
