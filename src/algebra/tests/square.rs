#![allow(non_snake_case)]
use crate::algebra::*;
use crate::io::ReadText;
use itertools::iproduct;

fn test_matrix_3x3() -> SquareGrid<i32> {
    // A =
    //[ 1  2  3 ]
    //[ 0  4  5 ]
    //[ 0  0  6 ]
    SquareGrid::<i32>::try_from(&[
        [1, 2, 3], //
        [0, 4, 5], //
        [0, 0, 6], //
    ])
    .unwrap()
}

fn test_matrix_index_pattern(n: usize) -> SquareGrid<i64> {
    let mut A = SquareGrid::<i64>::new(n).unwrap();
    for (i, j) in iproduct!(0..n, 0..n) {
        A.set(i, j, (i * 10 + j) as i64).unwrap();
    }
    A
}

#[test]
fn test_new_is_default_filled() {
    let A = SquareGrid::<f64>::new(4).unwrap();
    assert_eq!(A.size(), 4);
    assert_eq!(A.get_size(), 4);
    for row in A.rows() {
        assert_eq!(row.len(), 4);
        assert_eq!(row.start(), 0);
        assert!(row.iter().all(|x| *x == 0.0));
    }
}

#[test]
fn test_new_bad_sizes() {
    for result in [
        SquareGrid::<i32>::new(0),
        SquareGrid::<i32>::new(-5),
        SquareGrid::<i32>::new(MAX_MATRIX_SIZE as i64 + 1),
    ] {
        assert!(matches!(result, Err(AlgebraError::SizeRange { .. })));
    }
}

#[test]
fn test_identity() {
    let E = SquareGrid::<i32>::identity(3).unwrap();
    for (i, j) in iproduct!(0..3, 0..3) {
        let expected = if i == j { 1 } else { 0 };
        assert_eq!(*E.get(i, j).unwrap(), expected);
    }
}

#[test]
fn test_from_rows() {
    let rows = vec![
        Sequence::from_slice(&[1, 2]).unwrap(),
        Sequence::from_slice(&[3, 4]).unwrap(),
    ];
    let A = SquareGrid::from_rows(rows).unwrap();
    assert_eq!(*A.get(1, 0).unwrap(), 3);

    let ragged = vec![
        Sequence::from_slice(&[1, 2]).unwrap(),
        Sequence::from_slice(&[3]).unwrap(),
    ];
    assert!(matches!(
        SquareGrid::from_rows(ragged),
        Err(AlgebraError::DimensionMismatch { .. })
    ));

    let offset = vec![Sequence::<i32>::with_start(1, 1).unwrap()];
    assert!(SquareGrid::from_rows(offset).is_err());
    assert!(SquareGrid::<i32>::from_rows(vec![]).is_err());
}

#[test]
fn test_row_access() {
    let mut A = test_matrix_3x3();
    assert_eq!(A.row(1).unwrap().as_slice(), &[0, 4, 5]);

    {
        let mut row = A.row_mut(2).unwrap();
        row.set(0, 7).unwrap();
        *row.get_mut(1).unwrap() = 8;
        assert!(row.set(3, 0).is_err());
        assert_eq!(row.len(), 3);
    }
    assert_eq!(A.row(2).unwrap().as_slice(), &[7, 8, 6]);

    assert!(matches!(
        A.row(3),
        Err(AlgebraError::OutOfRange {
            index: 3,
            lower: 0,
            upper: 3
        })
    ));
    assert!(A.row_mut(3).is_err());
    assert!(A.get(0, 3).is_err());
    assert!(A.get(3, 0).is_err());
    assert!(A.set(3, 3, 1).is_err());
}

#[test]
fn test_row_assign_keeps_shape() {
    let mut A = test_matrix_3x3();
    let r = Sequence::from_slice(&[9, 9, 9]).unwrap();
    A.row_mut(0).unwrap().assign(&r).unwrap();
    assert_eq!(A.row(0).unwrap(), &r);

    let short = Sequence::from_slice(&[1, 1]).unwrap();
    assert!(A.row_mut(0).unwrap().assign(&short).is_err());
    assert_eq!(A.row(0).unwrap(), &r);
}

#[test]
fn test_clone_and_assign() {
    let A = test_matrix_3x3();
    let mut B = A.clone();
    assert_eq!(A, B);

    B.set(0, 0, 100).unwrap();
    assert_ne!(A, B);
    assert_eq!(*A.get(0, 0).unwrap(), 1);

    // assigning a grid of a different size adopts its shape
    let mut C = SquareGrid::<i32>::new(5).unwrap();
    C.clone_from(&A);
    assert_eq!(C, A);
    assert_eq!(C.size(), 3);

    let mut D = SquareGrid::<i32>::new(2).unwrap();
    D.clone_from(&A);
    assert_eq!(D, A);

    // self assignment
    let before = D.clone();
    D = D.clone();
    assert_eq!(D, before);
}

#[test]
fn test_take_and_swap() {
    let mut A = test_matrix_3x3();
    let B = A.take();
    assert_eq!(B, test_matrix_3x3());
    assert_eq!(A.size(), 0);
    assert!(A.row(0).is_err());

    let mut C = SquareGrid::<i32>::new(2).unwrap();
    let mut D = test_matrix_3x3();
    C.swap(&mut D);
    assert_eq!(C.size(), 3);
    assert_eq!(D.size(), 2);
}

#[test]
fn test_equality() {
    let A = test_matrix_3x3();
    let B = test_matrix_3x3();
    let C = SquareGrid::<i32>::new(3).unwrap();
    let D = SquareGrid::<i32>::new(2).unwrap();
    assert!(A == B);
    assert!(A != C);
    assert!(C != D);
}

#[test]
fn test_scale() {
    let A = test_matrix_3x3();
    let B = A.scale(&2);
    for (i, j) in iproduct!(0..3, 0..3) {
        assert_eq!(*B.get(i, j).unwrap(), 2 * *A.get(i, j).unwrap());
    }
    assert_eq!(&A * 2, B);
}

#[test]
fn test_mul_vec() {
    let A = test_matrix_3x3();
    let x = Sequence::from_slice(&[1, -1, 2]).unwrap();
    let y = A.mul_vec(&x).unwrap();
    assert_eq!(y.as_slice(), &[5, 6, 12]);

    let bad = Sequence::from_slice(&[1, 2]).unwrap();
    assert!(matches!(
        A.mul_vec(&bad),
        Err(AlgebraError::DimensionMismatch { .. })
    ));
    let offset = Sequence::<i32>::with_start(3, 1).unwrap();
    assert!(A.mul_vec(&offset).is_err());
}

#[test]
fn test_add_subtract() {
    let A = test_matrix_3x3();
    let B = SquareGrid::<i32>::try_from(&[
        [10, 20, 30], //
        [0, 40, 50],  //
        [0, 0, 60],   //
    ])
    .unwrap();

    let C = A.add(&B).unwrap();
    assert_eq!(*C.get(0, 2).unwrap(), 33);
    assert_eq!(*C.get(2, 2).unwrap(), 66);

    let D = B.subtract(&A).unwrap();
    assert_eq!(*D.get(1, 1).unwrap(), 36);

    assert_eq!(C.subtract(&B).unwrap(), A);
}

#[test]
fn test_mismatched_sizes() {
    let A = test_matrix_3x3();
    let B = SquareGrid::<i32>::new(2).unwrap();

    for result in [A.add(&B), A.subtract(&B), A.matmul(&B), B.matmul(&A)] {
        assert!(matches!(
            result,
            Err(AlgebraError::DimensionMismatch { .. })
        ));
    }

    // operands untouched
    assert_eq!(A, test_matrix_3x3());
    assert_eq!(B, SquareGrid::<i32>::new(2).unwrap());
}

#[test]
fn test_matmul() {
    let A = test_matrix_3x3();
    let B = SquareGrid::<i32>::try_from(&[
        [1, 0, 2],  //
        [-1, 1, 0], //
        [3, 2, 1],  //
    ])
    .unwrap();

    // reference product from the definition
    let C = A.matmul(&B).unwrap();
    for (i, j) in iproduct!(0..3, 0..3) {
        let mut expected = 0;
        for k in 0..3 {
            expected += A.get(i, k).unwrap() * B.get(k, j).unwrap();
        }
        assert_eq!(*C.get(i, j).unwrap(), expected);
    }
    assert_eq!(C.row(0).unwrap().as_slice(), &[8, 8, 5]);
}

#[test]
fn test_matmul_identity() {
    for n in [1, 2, 5, 8] {
        let A = test_matrix_index_pattern(n);
        let E = SquareGrid::<i64>::identity(n).unwrap();
        assert_eq!(A.matmul(&E).unwrap(), A);
        assert_eq!(E.matmul(&A).unwrap(), A);
    }
}

#[test]
fn test_transpose() {
    let A = test_matrix_3x3();
    let At = A.transpose();
    for (i, j) in iproduct!(0..3, 0..3) {
        assert_eq!(A.get(i, j).unwrap(), At.get(j, i).unwrap());
    }
    assert_eq!(At.transpose(), A);
}

#[test]
fn test_display() {
    let A = test_matrix_3x3();
    assert_eq!(A.to_string(), "1 2 3\n0 4 5\n0 0 6");

    let B = SquareGrid::<i32>::new(1).unwrap();
    assert_eq!(B.to_string(), "0");
}

#[test]
fn test_read_text() {
    let mut A = SquareGrid::<i32>::new(3).unwrap();
    A.read_str("1 2 3\n0 4 5\n0 0 6").unwrap();
    assert_eq!(A, test_matrix_3x3());

    // layout does not matter, only the token order
    let mut B = SquareGrid::<i32>::new(3).unwrap();
    B.read_str("1 2 3 0 4\n5 0 0 6\n").unwrap();
    assert_eq!(B, A);

    // a failed read leaves the grid alone
    assert!(B.read_str("1 2 3").is_err());
    assert_eq!(B, A);
}

#[test]
fn test_arithmetic_on_taken() {
    let mut A = test_matrix_3x3();
    let mut B = test_matrix_3x3();
    let mut x = Sequence::from_slice(&[1, 2, 3]).unwrap();
    A.take();
    B.take();
    x.take();

    assert!(A.mul_vec(&x).unwrap().is_empty());
    assert_eq!(A.add(&B).unwrap().size(), 0);
    assert_eq!(A.matmul(&B).unwrap().size(), 0);
    assert_eq!(A.scale(&2).size(), 0);
    assert_eq!(A.transpose().size(), 0);
    assert_eq!(A.to_string(), "");
}
