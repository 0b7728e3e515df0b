//! Square containers built from one [`Sequence`] per row.
//!
//! Two storage policies are provided:
//!
//! * [`SquareGrid`]: every row holds all `n` columns.
//! * [`UpperTriangularGrid`]: row `i` holds only the columns `i..n`.
//!
//! Both implement the [`Grid`] trait for shape queries and checked access.

use crate::algebra::{AlgebraError, ElementT, Sequence};
use std::ops::Deref;

mod square;
mod triangular;
pub use square::*;
pub use triangular::*;

/// Shape queries and checked element access shared by all grid types.
///
/// Row indices are always checked against `0..n`.  Column indices are checked
/// by the row itself, so for an [`UpperTriangularGrid`] a column below the
/// diagonal is rejected just like one past the end.
pub trait Grid<T: ElementT> {
    /// side of the grid
    fn size(&self) -> usize;

    /// side of the grid as a signed value
    fn get_size(&self) -> i32 {
        // never exceeds MAX_MATRIX_SIZE
        self.size() as i32
    }

    /// all rows, in order
    fn rows(&self) -> &[Sequence<T>];

    /// row `i`
    fn row(&self, i: usize) -> Result<&Sequence<T>, AlgebraError> {
        let n = self.size();
        self.rows().get(i).ok_or(AlgebraError::OutOfRange {
            index: i,
            lower: 0,
            upper: n,
        })
    }

    /// mutable view of row `i`
    fn row_mut(&mut self, i: usize) -> Result<RowMut<'_, T>, AlgebraError>;

    /// element in row `i`, column `j`
    fn get(&self, i: usize, j: usize) -> Result<&T, AlgebraError> {
        self.row(i)?.get(j)
    }

    /// mutable element in row `i`, column `j`
    fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T, AlgebraError>;

    /// assign the element in row `i`, column `j`
    fn set(&mut self, i: usize, j: usize, value: T) -> Result<(), AlgebraError> {
        *self.get_mut(i, j)? = value;
        Ok(())
    }
}

/// Mutable view of one grid row.
///
/// The view allows the values of the row to change but not its length or
/// start offset, so the shape of the owning grid is preserved.  Read access
/// is available through `Deref` to the underlying [`Sequence`].
pub struct RowMut<'a, T> {
    row: &'a mut Sequence<T>,
}

impl<'a, T> RowMut<'a, T>
where
    T: ElementT,
{
    pub(crate) fn new(row: &'a mut Sequence<T>) -> Self {
        Self { row }
    }

    /// mutable value at absolute column `j`
    pub fn get_mut(&mut self, j: usize) -> Result<&mut T, AlgebraError> {
        self.row.get_mut(j)
    }

    /// assign `value` at absolute column `j`
    pub fn set(&mut self, j: usize, value: T) -> Result<(), AlgebraError> {
        self.row.set(j, value)
    }

    /// overwrite the whole row with values of a sequence of the same shape
    pub fn assign(&mut self, src: &Sequence<T>) -> Result<(), AlgebraError> {
        self.row.check_same_shape("assign", src)?;
        self.row.clone_from(src);
        Ok(())
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.row.as_mut_slice()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.row.iter_mut()
    }
}

impl<T> Deref for RowMut<'_, T> {
    type Target = Sequence<T>;
    fn deref(&self) -> &Sequence<T> {
        self.row
    }
}

// Both grid types store their rows in a field named `rows`,
// so the storage-dependent parts of `Grid` are identical.
macro_rules! impl_grid_access {
    ($ty:ident) => {
        impl<T: ElementT> Grid<T> for $ty<T> {
            fn size(&self) -> usize {
                self.rows.len()
            }

            fn rows(&self) -> &[Sequence<T>] {
                &self.rows
            }

            fn row_mut(&mut self, i: usize) -> Result<RowMut<'_, T>, AlgebraError> {
                let n = self.rows.len();
                match self.rows.get_mut(i) {
                    Some(row) => Ok(RowMut::new(row)),
                    None => Err(AlgebraError::OutOfRange {
                        index: i,
                        lower: 0,
                        upper: n,
                    }),
                }
            }

            fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T, AlgebraError> {
                let n = self.rows.len();
                match self.rows.get_mut(i) {
                    Some(row) => row.get_mut(j),
                    None => Err(AlgebraError::OutOfRange {
                        index: i,
                        lower: 0,
                        upper: n,
                    }),
                }
            }
        }
    };
}
impl_grid_access!(SquareGrid);
impl_grid_access!(UpperTriangularGrid);

// text form shared by both grid types: one row per line,
// no trailing newline after the last row
fn display_rows<T>(rows: &[Sequence<T>], f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    T: std::fmt::Display,
{
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        write!(f, "{}", row)?;
    }
    Ok(())
}
