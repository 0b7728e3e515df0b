use thiserror::Error;

/// Shape of one operand in a [`DimensionMismatch`](AlgebraError::DimensionMismatch) report.
///
/// `start` is the logical offset of the first stored element.  It is zero for
/// plain sequences and square grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    /// number of stored elements (or grid side)
    pub len: usize,
    /// index of the first stored element
    pub start: usize,
}

impl Extent {
    pub(crate) fn new(len: usize, start: usize) -> Self {
        Self { len, start }
    }
}

impl std::fmt::Display for Extent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.start == 0 {
            write!(f, "{}", self.len)
        } else {
            write!(f, "{} (from {})", self.len, self.start)
        }
    }
}

/// Error type returned by container construction, access and arithmetic.
///
/// Every operation reports its failure before touching any data, so the
/// operands of a failed call are always left unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Requested length or dimension is zero, negative or above the configured limit
    #[error("{what} size {requested} is outside the allowed range 1..={max}")]
    SizeRange {
        what: &'static str,
        requested: String,
        max: usize,
    },
    /// A required input is absent or unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Index falls outside `[lower, upper)`
    #[error("Index {index} out of range [{lower}, {upper})")]
    OutOfRange {
        index: usize,
        lower: usize,
        upper: usize,
    },
    /// Operand shapes disagree for a binary operation
    #[error("Dimension mismatch in {op}: {left} vs {right}")]
    DimensionMismatch {
        op: &'static str,
        left: Extent,
        right: Extent,
    },
}

/// Error type returned when reading containers from whitespace-delimited text.
#[derive(Error, Debug)]
pub enum TextIoError {
    /// The underlying reader failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A token could not be parsed as an element value
    #[error("Cannot parse token {token:?} at position {position}")]
    Parse { token: String, position: usize },
    /// The input ended before the container was filled
    #[error("Unexpected end of input: expected {expected} values, found {found}")]
    UnexpectedEof { expected: usize, found: usize },
}

/// Error type returned by [`Limits`](crate::algebra::Limits) validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LimitsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field {0}")]
    BadFieldValue(&'static str),
}
