use super::display_rows;
use crate::algebra::sequence::dot_unchecked;
use crate::algebra::*;
use crate::io::{ReadText, TokenReader};
use itertools::izip;
use num_traits::{One, Zero};
use std::io::BufRead;
use std::ops::Mul;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Dense square matrix stored as `n` rows of length `n`.
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1  2  3]
///     [0  4  5]
///     [0  0  6]
/// ```
///
/// ```
/// use dynmat::algebra::*;
///
/// let A = SquareGrid::<i32>::try_from(&[
///     [1, 2, 3],
///     [0, 4, 5],
///     [0, 0, 6],
/// ]).unwrap();
///
/// let E = SquareGrid::<i32>::identity(3).unwrap();
/// assert_eq!(A.matmul(&E).unwrap(), A);
/// assert_eq!(*A.get(1, 2).unwrap(), 5);
/// ```
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawSquareGrid<T>",
        bound(
            serialize = "T: Serialize",
            deserialize = "T: ElementT + DeserializeOwned"
        )
    )
)]
pub struct SquareGrid<T = f64> {
    /// one sequence of length `n` per row
    pub(super) rows: Vec<Sequence<T>>,
}

impl<T> SquareGrid<T>
where
    T: ElementT,
{
    /// `n` x `n` grid of default values, checked against [`default_limits`].
    pub fn new<D: Dim>(n: D) -> Result<Self, AlgebraError> {
        Self::new_with_limits(n, &default_limits())
    }

    pub fn new_with_limits<D: Dim>(n: D, limits: &Limits) -> Result<Self, AlgebraError> {
        let n = limits.check_matrix_size(n)?;
        let rows = (0..n)
            .map(|_| Sequence::from_parts(0, vec![T::default(); n]))
            .collect();
        Ok(Self { rows })
    }

    /// `n` x `n` identity
    pub fn identity<D: Dim>(n: D) -> Result<Self, AlgebraError>
    where
        T: Zero + One,
    {
        let mut mat = Self::new(n)?;
        mat.set_identity();
        Ok(mat)
    }

    pub fn set_identity(&mut self)
    where
        T: Zero + One,
    {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.as_mut_slice().fill(T::zero());
            row.as_mut_slice()[i] = T::one();
        }
    }

    /// Builds a grid from `n` rows, each of length `n` and starting at 0.
    pub fn from_rows(rows: Vec<Sequence<T>>) -> Result<Self, AlgebraError> {
        let n = default_limits().check_matrix_size(rows.len())?;
        for row in rows.iter() {
            if row.len() != n || row.start() != 0 {
                return Err(AlgebraError::DimensionMismatch {
                    op: "from_rows",
                    left: Extent::new(n, 0),
                    right: row.extent(),
                });
            }
        }
        Ok(Self { rows })
    }

    pub(crate) fn from_rows_unchecked(rows: Vec<Sequence<T>>) -> Self {
        Self { rows }
    }

    // ------------------------------------------------
    // arithmetic

    /// Every element multiplied by `c`
    pub fn scale(&self, c: &T) -> Self {
        let rows = self.rows.iter().map(|row| row.scale(c)).collect();
        Self { rows }
    }

    /// Matrix-vector product.  `v` must have length `n` and start 0.
    pub fn mul_vec(&self, v: &Sequence<T>) -> Result<Sequence<T>, AlgebraError> {
        let n = self.size();
        if v.len() != n || v.start() != 0 {
            return Err(AlgebraError::DimensionMismatch {
                op: "mul_vec",
                left: self.extent(),
                right: v.extent(),
            });
        }
        let data = self
            .rows
            .iter()
            .map(|row| dot_unchecked(row.as_slice(), v.as_slice()))
            .collect();
        Ok(Sequence::from_parts(0, data))
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

    /// Matrix product `self * other`.
    ///
    /// Entry `(i, j)` is the sum over `k` of `self(i, k) * other(k, j)`,
    /// accumulated from `T::default()` in increasing `k`.
    pub fn matmul(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_same_size("matmul", other)?;
        let n = self.size();
        let mut rows = Vec::with_capacity(n);
        for row in self.rows.iter() {
            // accumulate row i of the product one k at a time
            let mut acc = vec![T::default(); n];
            for (a, brow) in izip!(row, &other.rows) {
                for (c, b) in izip!(acc.iter_mut(), brow) {
                    *c += a.clone() * b.clone();
                }
            }
            rows.push(Sequence::from_parts(0, acc));
        }
        Ok(Self { rows })
    }

    /// Rows and columns exchanged
    pub fn transpose(&self) -> Self {
        let n = self.size();
        let rows = (0..n)
            .map(|j| {
                let col = self.rows.iter().map(|row| row.as_slice()[j].clone()).collect();
                Sequence::from_parts(0, col)
            })
            .collect();
        Self { rows }
    }

    fn check_same_size(&self, op: &'static str, other: &Self) -> Result<(), AlgebraError> {
        if self.size() != other.size() {
            return Err(AlgebraError::DimensionMismatch {
                op,
                left: self.extent(),
                right: other.extent(),
            });
        }
        Ok(())
    }

    fn extent(&self) -> Extent {
        Extent::new(self.size(), 0)
    }
}

impl<T> SquareGrid<T> {
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

impl<T: Clone> Clone for SquareGrid<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }

    // rows that already exist are overwritten in place, so
    // their buffers are reused whenever the lengths agree
    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

impl<T: ElementT> Mul<T> for &SquareGrid<T> {
    type Output = SquareGrid<T>;
    fn mul(self, c: T) -> SquareGrid<T> {
        self.scale(&c)
    }
}

impl<T, const N: usize> TryFrom<&[[T; N]; N]> for SquareGrid<T>
where
    T: ElementT,
{
    type Error = AlgebraError;
    fn try_from(rows: &[[T; N]; N]) -> Result<Self, AlgebraError> {
        default_limits().check_matrix_size(N)?;
        let rows = rows
            .iter()
            .map(|row| Sequence::from_parts(0, row.to_vec()))
            .collect();
        Ok(Self { rows })
    }
}

impl<T> std::fmt::Display for SquareGrid<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_rows(&self.rows, f)
    }
}

impl<T> ReadText for SquareGrid<T>
where
    T: FromStr,
{
    // reads n * n values in row-major order
    fn read_text<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<(), TextIoError> {
        let n = self.rows.len();
        let mut values = tokens.read_values::<T>(n * n)?.into_iter();
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
struct RawSquareGrid<T> {
    rows: Vec<Sequence<T>>,
}

#[cfg(feature = "serde")]
impl<T: ElementT> TryFrom<RawSquareGrid<T>> for SquareGrid<T> {
    type Error = AlgebraError;
    fn try_from(raw: RawSquareGrid<T>) -> Result<Self, AlgebraError> {
        Self::from_rows(raw.rows)
    }
}
