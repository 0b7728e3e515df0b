use crate::algebra::{default_limits, AlgebraError, Dim, ElementT, Extent, Limits, TextIoError};
use crate::io::{ReadText, TokenReader};
use itertools::izip;
use std::io::BufRead;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Dense vector with a fixed length and an optional logical start offset.
///
/// A `Sequence` of length `len` starting at `start` stores exactly `len`
/// values addressed by the absolute indices `start..start + len`.  Plain
/// sequences have `start == 0`.  The rows of an
/// [`UpperTriangularGrid`](crate::algebra::UpperTriangularGrid) use the offset
/// so that row `i` is addressed by its true column indices.
///
/// __Example usage__ :
///
/// ```
/// use dynmat::algebra::*;
///
/// let mut v = Sequence::<i32>::new(3).unwrap();
/// v.set(0, 1).unwrap();
/// v.set(2, 5).unwrap();
/// assert_eq!(v.to_string(), "1 0 5");
///
/// // checked access
/// assert!(v.get(3).is_err());
///
/// // elementwise arithmetic requires matching shapes
/// let w = Sequence::from_slice(&[1, 1, 1]).unwrap();
/// assert_eq!(v.add(&w).unwrap(), Sequence::from_slice(&[2, 1, 6]).unwrap());
/// assert_eq!(v.dot(&w).unwrap(), 6);
/// ```
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawSequence<T>",
        bound(
            serialize = "T: Serialize",
            deserialize = "T: ElementT + DeserializeOwned"
        )
    )
)]
pub struct Sequence<T = f64> {
    /// absolute index of the first element
    start: usize,
    /// element storage, one entry per index
    data: Vec<T>,
}

impl<T> Sequence<T>
where
    T: ElementT,
{
    /// Sequence of `len` default values, checked against [`default_limits`].
    pub fn new<D: Dim>(len: D) -> Result<Self, AlgebraError> {
        Self::with_start_and_limits(len, 0, &default_limits())
    }

    /// Sequence of `len` default values addressed from `start`.
    pub fn with_start<D: Dim>(len: D, start: usize) -> Result<Self, AlgebraError> {
        Self::with_start_and_limits(len, start, &default_limits())
    }

    pub fn new_with_limits<D: Dim>(len: D, limits: &Limits) -> Result<Self, AlgebraError> {
        Self::with_start_and_limits(len, 0, limits)
    }

    pub fn with_start_and_limits<D: Dim>(
        len: D,
        start: usize,
        limits: &Limits,
    ) -> Result<Self, AlgebraError> {
        let len = limits.check_vector_size(len)?;
        check_start(start, len)?;
        Ok(Self {
            start,
            data: vec![T::default(); len],
        })
    }

    /// Copies the first `len` values of `src`.
    ///
    /// Fails with [`InvalidArgument`](AlgebraError::InvalidArgument) when
    /// `src` is absent or holds fewer than `len` values.
    pub fn from_source<D: Dim>(src: Option<&[T]>, len: D) -> Result<Self, AlgebraError> {
        Self::from_source_with_limits(src, len, &default_limits())
    }

    pub fn from_source_with_limits<D: Dim>(
        src: Option<&[T]>,
        len: D,
        limits: &Limits,
    ) -> Result<Self, AlgebraError> {
        let src = src.ok_or(AlgebraError::InvalidArgument("source array is absent"))?;
        let len = limits.check_vector_size(len)?;
        if src.len() < len {
            return Err(AlgebraError::InvalidArgument(
                "source array is shorter than the requested length",
            ));
        }
        Ok(Self {
            start: 0,
            data: src[..len].to_vec(),
        })
    }

    /// Copies every value of `src`.
    pub fn from_slice(src: &[T]) -> Result<Self, AlgebraError> {
        Self::from_source(Some(src), src.len())
    }

    /// Wraps an already checked buffer.  An empty buffer is allowed, so
    /// that a taken sequence stays usable in arithmetic.
    pub(crate) fn from_parts(start: usize, data: Vec<T>) -> Self {
        Self { start, data }
    }

    // ------------------------------------------------
    // element access

    /// Value at absolute index `pos`
    pub fn get(&self, pos: usize) -> Result<&T, AlgebraError> {
        let i = self.local_index(pos)?;
        Ok(&self.data[i])
    }

    /// Mutable value at absolute index `pos`
    pub fn get_mut(&mut self, pos: usize) -> Result<&mut T, AlgebraError> {
        let i = self.local_index(pos)?;
        Ok(&mut self.data[i])
    }

    /// Assigns `value` at absolute index `pos`
    pub fn set(&mut self, pos: usize, value: T) -> Result<(), AlgebraError> {
        *self.get_mut(pos)? = value;
        Ok(())
    }

    /// Value at storage position `i`, ignoring the start offset
    pub fn at(&self, i: usize) -> Result<&T, AlgebraError> {
        self.data.get(i).ok_or(AlgebraError::OutOfRange {
            index: i,
            lower: 0,
            upper: self.len(),
        })
    }

    /// Mutable value at storage position `i`, ignoring the start offset
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, AlgebraError> {
        let upper = self.len();
        self.data.get_mut(i).ok_or(AlgebraError::OutOfRange {
            index: i,
            lower: 0,
            upper,
        })
    }

    // ------------------------------------------------
    // sequence-sequence arithmetic

    /// Elementwise sum.  Shapes (length and start) must match.
    pub fn add(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_same_shape("add", other)?;
        let data = izip!(&self.data, &other.data)
            .map(|(a, b)| a.clone() + b.clone())
            .collect();
        Ok(Self::from_parts(self.start, data))
    }

    /// Elementwise difference.  Shapes (length and start) must match.
    pub fn subtract(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_same_shape("subtract", other)?;
        let data = izip!(&self.data, &other.data)
            .map(|(a, b)| a.clone() - b.clone())
            .collect();
        Ok(Self::from_parts(self.start, data))
    }

    /// Inner product, accumulated from `T::default()`.
    pub fn dot(&self, other: &Self) -> Result<T, AlgebraError> {
        self.check_same_shape("dot", other)?;
        Ok(dot_unchecked(&self.data, &other.data))
    }

    // ------------------------------------------------
    // sequence-scalar arithmetic

    pub fn add_scalar(&self, c: &T) -> Self {
        self.map(|x| x.clone() + c.clone())
    }

    pub fn sub_scalar(&self, c: &T) -> Self {
        self.map(|x| x.clone() - c.clone())
    }

    pub fn scale(&self, c: &T) -> Self {
        self.map(|x| x.clone() * c.clone())
    }

    fn map(&self, op: impl Fn(&T) -> T) -> Self {
        Self::from_parts(self.start, self.data.iter().map(op).collect())
    }

    pub(crate) fn check_same_shape(&self, op: &'static str, other: &Self) -> Result<(), AlgebraError> {
        if self.len() != other.len() || self.start != other.start {
            return Err(AlgebraError::DimensionMismatch {
                op,
                left: self.extent(),
                right: other.extent(),
            });
        }
        Ok(())
    }
}

impl<T> Sequence<T> {
    /// Zero-length sequence.  Only ever observable as the state left
    /// behind by [`take`](Sequence::take).
    pub(crate) fn empty() -> Self {
        Self {
            start: 0,
            data: Vec::new(),
        }
    }

    /// Moves the contents out, leaving `self` as a valid zero-length sequence.
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::empty())
    }

    /// Exchanges contents with `other` without copying any elements.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True only for a sequence that has been moved out of
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Absolute index of the first element
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the absolute index of the last element
    pub fn end(&self) -> usize {
        self.start + self.len()
    }

    pub fn extent(&self) -> Extent {
        Extent::new(self.len(), self.start)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    fn local_index(&self, pos: usize) -> Result<usize, AlgebraError> {
        if pos < self.start || pos >= self.end() {
            return Err(AlgebraError::OutOfRange {
                index: pos,
                lower: self.start,
                upper: self.end(),
            });
        }
        Ok(pos - self.start)
    }
}

pub(crate) fn dot_unchecked<T: ElementT>(x: &[T], y: &[T]) -> T {
    let mut acc = T::default();
    for (a, b) in izip!(x, y) {
        acc += a.clone() * b.clone();
    }
    acc
}

fn check_start(start: usize, len: usize) -> Result<(), AlgebraError> {
    if start.checked_add(len).is_none() {
        return Err(AlgebraError::InvalidArgument(
            "start offset overflows the index range",
        ));
    }
    Ok(())
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            data: self.data.clone(),
        }
    }

    // reuses the existing allocation when it is large enough
    fn clone_from(&mut self, source: &Self) {
        self.start = source.start;
        self.data.clone_from(&source.data);
    }
}

// ------------------------------------------------
// indexing by absolute position.  These panic on a bad
// index and are meant for already validated loops; the
// checked interface is `get`/`get_mut`/`set`.

impl<T> Index<usize> for Sequence<T> {
    type Output = T;
    fn index(&self, pos: usize) -> &T {
        match self.local_index(pos) {
            Ok(i) => &self.data[i],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, pos: usize) -> &mut T {
        match self.local_index(pos) {
            Ok(i) => &mut self.data[i],
            Err(e) => panic!("{}", e),
        }
    }
}

// ------------------------------------------------
// infallible scalar operators

impl<T: ElementT> Add<T> for &Sequence<T> {
    type Output = Sequence<T>;
    fn add(self, c: T) -> Sequence<T> {
        self.add_scalar(&c)
    }
}

impl<T: ElementT> Sub<T> for &Sequence<T> {
    type Output = Sequence<T>;
    fn sub(self, c: T) -> Sequence<T> {
        self.sub_scalar(&c)
    }
}

impl<T: ElementT> Mul<T> for &Sequence<T> {
    type Output = Sequence<T>;
    fn mul(self, c: T) -> Sequence<T> {
        self.scale(&c)
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// ------------------------------------------------
// text i/o

impl<T> std::fmt::Display for Sequence<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}

impl<T> ReadText for Sequence<T>
where
    T: FromStr,
{
    fn read_text<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<(), TextIoError> {
        let values = tokens.read_values(self.len())?;
        self.data = values;
        Ok(())
    }
}

// ------------------------------------------------
// serialization goes through a raw mirror so that the
// shape invariants are checked again on load

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSequence<T> {
    start: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: ElementT> TryFrom<RawSequence<T>> for Sequence<T> {
    type Error = AlgebraError;
    fn try_from(raw: RawSequence<T>) -> Result<Self, AlgebraError> {
        let len = default_limits().check_vector_size(raw.data.len())?;
        check_start(raw.start, len)?;
        Ok(Self::from_parts(raw.start, raw.data))
    }
}
