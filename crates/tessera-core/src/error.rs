//! Error types for lattice and region operations.
//!
//! Every fallible operation in Tessera returns `Result<_, GeomError>`.
//! The variants mirror the result kinds of the geometry core; success is
//! simply `Ok`.

use std::error::Error;
use std::fmt;

/// Errors arising from vector, multi-index, region, or iterator operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// A required input was absent.
    NullArgument {
        /// Name of the missing argument.
        what: &'static str,
    },
    /// Operand dimensions disagree, or an axis lies outside the dimension.
    DimensionMismatch {
        /// The dimension the operation required.
        expected: usize,
        /// The offending dimension or axis.
        found: usize,
    },
    /// A lattice or coordinate index lies outside its valid range.
    ///
    /// Also returned by iterator advancement when the lattice is exhausted;
    /// in that position it marks the end of the sequence.
    IndexOutOfBound,
    /// An argument failed validation (malformed permutation, bad tolerance).
    InvalidArgument {
        /// What was wrong with the argument.
        reason: String,
    },
    /// A buffer could not be sized or allocated.
    AllocationFailure {
        /// Number of elements requested, saturated on overflow.
        requested: usize,
    },
    /// A computation produced NaN.
    NotANumber,
    /// A computation produced an infinite value.
    InfinityOverflow,
    /// The region that owns an iterator's control block has been dropped.
    SourceDestroyed,
}

impl GeomError {
    /// Stable snake_case identifier, used as the `code` field in diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NullArgument { .. } => "null_argument",
            Self::DimensionMismatch { .. } => "dimension_mismatch",
            Self::IndexOutOfBound => "index_out_of_bound",
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::AllocationFailure { .. } => "allocation_failure",
            Self::NotANumber => "not_a_number",
            Self::InfinityOverflow => "infinity_overflow",
            Self::SourceDestroyed => "source_destroyed",
        }
    }

    /// Shorthand for an [`InvalidArgument`](Self::InvalidArgument) error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Classify a non-finite float as [`NotANumber`](Self::NotANumber) or
    /// [`InfinityOverflow`](Self::InfinityOverflow). Returns `None` for
    /// finite values.
    pub fn from_non_finite(value: f64) -> Option<Self> {
        if value.is_nan() {
            Some(Self::NotANumber)
        } else if value.is_infinite() {
            Some(Self::InfinityOverflow)
        } else {
            None
        }
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullArgument { what } => write!(f, "missing argument: {what}"),
            Self::DimensionMismatch { expected, found } => {
                write!(f, "mismatching dimensions: expected {expected}, found {found}")
            }
            Self::IndexOutOfBound => write!(f, "index out of bounds"),
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::AllocationFailure { requested } => {
                write!(f, "allocation failed for {requested} elements")
            }
            Self::NotANumber => write!(f, "calculation produced a NaN value"),
            Self::InfinityOverflow => write!(f, "calculation overflowed to infinity"),
            Self::SourceDestroyed => write!(f, "source compact has been destroyed"),
        }
    }
}

impl Error for GeomError {}
