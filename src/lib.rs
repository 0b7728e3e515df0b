//! __dynmat__ is a small Rust library of dense, dynamically sized containers:
//! a vector type and square matrices built from vectors.
//!
//! The containers own their storage outright, copy deeply, and check every
//! indexed access.  Arithmetic between containers returns a `Result`, so that
//! operands of mismatched shape are reported as an error instead of producing
//! a partially computed value.
//!
//! ## Features
//!
//! * [`Sequence`](algebra::Sequence): a fixed-length dense vector, optionally
//!   addressed from a non-zero start index.  Supports elementwise `+` / `-`,
//!   scalar `+` / `-` / `*`, and the dot product.
//!
//! * [`SquareGrid`](algebra::SquareGrid): an `n x n` matrix with elementwise
//!   addition and subtraction, scaling, matrix-vector and matrix-matrix
//!   products.
//!
//! * [`UpperTriangularGrid`](algebra::UpperTriangularGrid): an `n x n` upper
//!   triangular matrix that stores only the entries on or above the diagonal.
//!
//! * Plain text input and output through [`Display`](std::fmt::Display) and
//!   [`ReadText`](io::ReadText), and optional JSON snapshots when compiled with
//!   the `serde` feature (enabled by default).
//!
//! __Example usage__ :
//!
//! ```
//! use dynmat::algebra::*;
//!
//! let mut A = SquareGrid::<i64>::new(3).unwrap();
//! for i in 0..3 {
//!     for j in 0..3 {
//!         A.set(i, j, (10 * i + j) as i64).unwrap();
//!     }
//! }
//!
//! let E = SquareGrid::<i64>::identity(3).unwrap();
//! assert_eq!(A.matmul(&E).unwrap(), A);
//! assert_eq!(A.to_string(), "0 1 2\n10 11 12\n20 21 22");
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

#![allow(non_snake_case)]

pub mod algebra;
pub mod io;
