use super::display_rows;
use crate::algebra::*;
use crate::io::{ReadText, TokenReader};
use itertools::izip;
use std::io::BufRead;
use std::ops::Mul;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Upper triangular matrix storing only the entries on or above the diagonal.
///
/// Row `i` is a [`Sequence`] of length `n - i` starting at column `i`, so
/// elements are addressed by their true `(row, column)` position and any
/// column below the diagonal is rejected.
///
/// ```
/// use dynmat::algebra::*;
///
/// let mut U = UpperTriangularGrid::<i32>::new(3).unwrap();
/// U.set(0, 2, 3).unwrap();
/// U.set(2, 2, 6).unwrap();
///
/// assert_eq!(U.row(1).unwrap().len(), 2);
/// assert!(U.get(2, 1).is_err());
/// ```
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawUpperTriangularGrid<T>",
        bound(
            serialize = "T: Serialize",
            deserialize = "T: ElementT + DeserializeOwned"
        )
    )
)]
pub struct UpperTriangularGrid<T = f64> {
    /// row `i` has length `n - i` and starts at column `i`
    pub(super) rows: Vec<Sequence<T>>,
}

impl<T> UpperTriangularGrid<T>
where
    T: ElementT,
{
    /// `n` x `n` upper triangle of default values, checked against [`default_limits`].
    pub fn new<D: Dim>(n: D) -> Result<Self, AlgebraError> {
        Self::new_with_limits(n, &default_limits())
    }

    pub fn new_with_limits<D: Dim>(n: D, limits: &Limits) -> Result<Self, AlgebraError> {
        let n = limits.check_matrix_size(n)?;
        let rows = (0..n)
            .map(|i| Sequence::from_parts(i, vec![T::default(); n - i]))
            .collect();
        Ok(Self { rows })
    }

    /// Builds a grid from rows where row `i` has length `n - i` and starts at `i`.
    pub fn from_rows(rows: Vec<Sequence<T>>) -> Result<Self, AlgebraError> {
        let n = default_limits().check_matrix_size(rows.len())?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n - i || row.start() != i {
                return Err(AlgebraError::DimensionMismatch {
                    op: "from_rows",
                    left: Extent::new(n - i, i),
                    right: row.extent(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Every stored element multiplied by `c`
    pub fn scale(&self, c: &T) -> Self {
        let rows = self.rows.iter().map(|row| row.scale(c)).collect();
        Self { rows }
    }

    /// Elementwise sum
    pub fn add(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_same_size("add", other)?;
        let rows = izip!(&self.rows, &other.rows)
            .map(|(a, b)| a.add(b))
            .collect::<Result<_, _>>()?;
        Ok(Self { rows })
    }

    /// Elementwise difference
    pub fn subtract(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_same_size("subtract", other)?;
        let rows = izip!(&self.rows, &other.rows)
            .map(|(a, b)| a.subtract(b))
            .collect::<Result<_, _>>()?;
        Ok(Self { rows })
    }

    /// Full square matrix with default values below the diagonal
    pub fn to_square(&self) -> SquareGrid<T> {
        let n = self.size();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut full = vec![T::default(); n];
                full[row.start()..].clone_from_slice(row.as_slice());
                Sequence::from_parts(0, full)
            })
            .collect();
        // row lengths are all n by construction
        SquareGrid::from_rows_unchecked(rows)
    }

    fn check_same_size(&self, op: &'static str, other: &Self) -> Result<(), AlgebraError> {
        if self.size() != other.size() {
            return Err(AlgebraError::DimensionMismatch {
                op,
                left: Extent::new(self.size(), 0),
                right: Extent::new(other.size(), 0),
            });
        }
        Ok(())
    }
}

impl<T> UpperTriangularGrid<T> {
    /// Moves the contents out, leaving `self` as a valid zero-size grid.
    pub fn take(&mut self) -> Self {
        Self {
            rows: std::mem::take(&mut self.rows),
        }
    }

    /// Exchanges contents with `other` without copying any elements.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.rows, &mut other.rows);
    }
}

impl<T: Clone> Clone for UpperTriangularGrid<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

impl<T: ElementT> Mul<T> for &UpperTriangularGrid<T> {
    type Output = UpperTriangularGrid<T>;
    fn mul(self, c: T) -> UpperTriangularGrid<T> {
        self.scale(&c)
    }
}

impl<T> std::fmt::Display for UpperTriangularGrid<T>
where
    T: std::fmt::Display,
{
    // line i holds the n - i stored values of row i
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_rows(&self.rows, f)
    }
}

impl<T> ReadText for UpperTriangularGrid<T>
where
    T: FromStr,
{
    // reads the n(n+1)/2 stored values row by row
    fn read_text<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<(), TextIoError> {
        let count = self.rows.iter().map(|row| row.len()).sum();
        let mut values = tokens.read_values::<T>(count)?.into_iter();
        for row in self.rows.iter_mut() {
            for x in row.as_mut_slice() {
                if let Some(v) = values.next() {
                    *x = v;
                }
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(bound = "T: ElementT + DeserializeOwned")]
struct RawUpperTriangularGrid<T> {
    rows: Vec<Sequence<T>>,
}

#[cfg(feature = "serde")]
impl<T: ElementT> TryFrom<RawUpperTriangularGrid<T>> for UpperTriangularGrid<T> {
    type Error = AlgebraError;
    fn try_from(raw: RawUpperTriangularGrid<T>) -> Result<Self, AlgebraError> {
        Self::from_rows(raw.rows)
    }
}
