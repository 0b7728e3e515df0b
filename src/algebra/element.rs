use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// Core trait for values stored in a [`Sequence`](crate::algebra::Sequence)
/// or a grid.
///
/// The container types only need default construction (the zero used to seed
/// accumulators), copying, equality and the basic arithmetic operators.  Any
/// type satisfying these bounds gets `ElementT` through the blanket
/// implementation below, so native integers and floats work out of the box.
///
/// Operations that need a multiplicative identity, e.g.
/// [`SquareGrid::identity`](crate::algebra::SquareGrid::identity), add
/// [`num_traits::One`] and [`num_traits::Zero`] bounds locally.
pub trait ElementT:
    'static
    + Default
    + Clone
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + Sized
{
}

impl<T> ElementT for T where
    T: 'static
        + Default
        + Clone
        + PartialEq
        + Debug
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + AddAssign
        + SubAssign
        + MulAssign
        + Sized
{
}

/// Integer types accepted as a requested container dimension.
///
/// Signed arguments are accepted so that a negative request is reported as a
/// [`SizeRange`](crate::algebra::AlgebraError::SizeRange) error rather than
/// being silently wrapped into a huge `usize`.
pub trait Dim: Copy + std::fmt::Display + TryInto<usize> {}

impl<D> Dim for D where D: Copy + std::fmt::Display + TryInto<usize> {}
