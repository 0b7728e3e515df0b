use crate::algebra::{AlgebraError, Dim, LimitsError};
use derive_builder::Builder;
use lazy_static::lazy_static;
use std::sync::RwLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest length accepted for a [`Sequence`](crate::algebra::Sequence)
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Largest side accepted for a square or triangular grid
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Size limits applied at container construction.
///
/// Limits may be lowered below the compile-time maxima
/// [`MAX_VECTOR_SIZE`] and [`MAX_MATRIX_SIZE`], but never raised above them.
///
/// ```
/// use dynmat::algebra::*;
///
/// let limits = LimitsBuilder::default()
///     .max_matrix_size(4)
///     .build()
///     .unwrap();
///
/// assert!(SquareGrid::<i32>::new_with_limits(4, &limits).is_ok());
/// assert!(SquareGrid::<i32>::new_with_limits(5, &limits).is_err());
/// ```
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLimits"))]
pub struct Limits {
    ///maximum sequence length
    #[builder(default = "MAX_VECTOR_SIZE")]
    pub max_vector_size: usize,

    ///maximum grid side
    #[builder(default = "MAX_MATRIX_SIZE")]
    pub max_matrix_size: usize,
}

impl Default for Limits {
    fn default() -> Limits {
        LimitsBuilder::default().build().unwrap()
    }
}

impl Limits {
    /// Checks that both limits are non-zero and within the compile-time maxima.
    pub fn validate(&self) -> Result<(), LimitsError> {
        validate_max_vector_size(self.max_vector_size)?;
        validate_max_matrix_size(self.max_matrix_size)?;
        Ok(())
    }

    /// Converts a requested sequence length into a checked `usize`.
    ///
    /// The fields are public, so a hand-built `Limits` may exceed the
    /// compile-time maximum.  The maximum still applies in that case.
    pub(crate) fn check_vector_size<D: Dim>(&self, len: D) -> Result<usize, AlgebraError> {
        check_size("Vector", len, self.max_vector_size.min(MAX_VECTOR_SIZE))
    }

    /// Converts a requested grid side into a checked `usize`.
    pub(crate) fn check_matrix_size<D: Dim>(&self, n: D) -> Result<usize, AlgebraError> {
        check_size("Matrix", n, self.max_matrix_size.min(MAX_MATRIX_SIZE))
    }
}

fn check_size<D: Dim>(what: &'static str, requested: D, max: usize) -> Result<usize, AlgebraError> {
    let err = || AlgebraError::SizeRange {
        what,
        requested: requested.to_string(),
        max,
    };
    let n: usize = requested.try_into().map_err(|_| err())?;
    if n == 0 || n > max {
        return Err(err());
    }
    Ok(n)
}

// pre build checker (for auto-validation when using the builder)

impl From<LimitsError> for LimitsBuilderError {
    fn from(e: LimitsError) -> Self {
        LimitsBuilderError::ValidationError(e.to_string())
    }
}

impl LimitsBuilder {
    /// check that any explicitly set limit is legal
    pub fn validate(&self) -> Result<(), LimitsError> {
        if let Some(v) = self.max_vector_size {
            validate_max_vector_size(v)?;
        }
        if let Some(v) = self.max_matrix_size {
            validate_max_matrix_size(v)?;
        }
        Ok(())
    }
}

fn validate_max_vector_size(v: usize) -> Result<(), LimitsError> {
    if v == 0 || v > MAX_VECTOR_SIZE {
        return Err(LimitsError::BadFieldValue("max_vector_size"));
    }
    Ok(())
}

fn validate_max_matrix_size(v: usize) -> Result<(), LimitsError> {
    if v == 0 || v > MAX_MATRIX_SIZE {
        return Err(LimitsError::BadFieldValue("max_matrix_size"));
    }
    Ok(())
}

// limits loaded from json are validated like built ones;
// absent fields take their defaults

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(default)]
struct RawLimits {
    max_vector_size: usize,
    max_matrix_size: usize,
}

#[cfg(feature = "serde")]
impl Default for RawLimits {
    fn default() -> Self {
        RawLimits {
            max_vector_size: MAX_VECTOR_SIZE,
            max_matrix_size: MAX_MATRIX_SIZE,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawLimits> for Limits {
    type Error = LimitsError;
    fn try_from(raw: RawLimits) -> Result<Self, LimitsError> {
        let limits = Limits {
            max_vector_size: raw.max_vector_size,
            max_matrix_size: raw.max_matrix_size,
        };
        limits.validate()?;
        Ok(limits)
    }
}

// ---------------------------------------------------------
// process-wide defaults used by the plain constructors
// ---------------------------------------------------------

lazy_static! {
    static ref DEFAULT_LIMITS: RwLock<Limits> = RwLock::new(Limits::default());
}

/// Limits currently used by `Sequence::new`, `SquareGrid::new` etc.
pub fn default_limits() -> Limits {
    match DEFAULT_LIMITS.read() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Replace the process-wide default limits.
pub fn set_default_limits(limits: Limits) -> Result<(), LimitsError> {
    limits.validate()?;
    match DEFAULT_LIMITS.write() {
        Ok(mut guard) => *guard = limits,
        Err(poisoned) => *poisoned.into_inner() = limits,
    }
    Ok(())
}

/// Revert the process-wide default limits to the compile-time maxima.
pub fn reset_default_limits() {
    // the compile-time maxima always validate
    let _ = set_default_limits(Limits::default());
}

#[test]
fn test_limits_builder_defaults() {
    let limits = LimitsBuilder::default().build().unwrap();
    assert_eq!(limits.max_vector_size, MAX_VECTOR_SIZE);
    assert_eq!(limits.max_matrix_size, MAX_MATRIX_SIZE);
    assert_eq!(limits, Limits::default());
}

#[test]
fn test_limits_builder_rejects_bad_values() {
    assert!(LimitsBuilder::default().max_vector_size(0).build().is_err());
    assert!(LimitsBuilder::default()
        .max_matrix_size(MAX_MATRIX_SIZE + 1)
        .build()
        .is_err());
    assert!(LimitsBuilder::default().max_matrix_size(3).build().is_ok());
}

#[test]
fn test_check_size() {
    let limits = LimitsBuilder::default()
        .max_vector_size(10)
        .build()
        .unwrap();

    assert_eq!(limits.check_vector_size(10), Ok(10));
    assert_eq!(limits.check_vector_size(1usize), Ok(1));

    for bad in [0i64, -1, 11] {
        match limits.check_vector_size(bad) {
            Err(AlgebraError::SizeRange {
                what,
                requested,
                max,
            }) => {
                assert_eq!(what, "Vector");
                assert_eq!(requested, bad.to_string());
                assert_eq!(max, 10);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}

#[test]
fn test_check_size_capped_at_maximum() {
    // public fields let a caller bypass the builder
    let limits = Limits {
        max_vector_size: MAX_VECTOR_SIZE + 10,
        max_matrix_size: MAX_MATRIX_SIZE + 10,
    };
    assert!(limits.validate().is_err());

    assert_eq!(limits.check_matrix_size(MAX_MATRIX_SIZE), Ok(MAX_MATRIX_SIZE));
    match limits.check_matrix_size(MAX_MATRIX_SIZE + 1) {
        Err(AlgebraError::SizeRange { max, .. }) => assert_eq!(max, MAX_MATRIX_SIZE),
        other => panic!("unexpected result {:?}", other),
    }
    assert!(limits.check_vector_size(MAX_VECTOR_SIZE + 1).is_err());
}
