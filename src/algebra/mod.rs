//! Dense containers and the arithmetic defined on them.
//!
//! All container types in this module are built on [`Sequence`], a dense
//! vector with checked access.  The grid types compose one `Sequence` per
//! row and implement the [`Grid`] trait.
//!
//! Every fallible operation returns an [`AlgebraError`].  Construction is
//! checked against a set of [`Limits`], which default to the crate-wide
//! constants [`MAX_VECTOR_SIZE`] and [`MAX_MATRIX_SIZE`].

mod element;
mod error_types;
mod grid;
mod limits;
pub(crate) mod sequence;

pub use element::*;
pub use error_types::*;
pub use grid::*;
pub use limits::*;
pub use sequence::Sequence;

#[cfg(feature = "serde")]
mod json;
#[cfg(feature = "serde")]
pub use json::*;

#[cfg(test)]
mod tests;
