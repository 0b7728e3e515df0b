use dynmat::algebra::*;

// the process-wide defaults are shared state, so every
// check on them lives in this single test
#[test]
fn test_default_limits() {
    assert_eq!(default_limits(), Limits::default());

    let limits = LimitsBuilder::default()
        .max_vector_size(4)
        .max_matrix_size(2)
        .build()
        .unwrap();
    set_default_limits(limits).unwrap();
    assert_eq!(default_limits(), limits);

    assert!(Sequence::<f64>::new(4).is_ok());
    assert!(Sequence::<f64>::new(5).is_err());
    assert!(Sequence::from_slice(&[1.0; 5]).is_err());
    assert!(SquareGrid::<f64>::new(2).is_ok());
    assert!(SquareGrid::<f64>::new(3).is_err());
    assert!(UpperTriangularGrid::<f64>::new(3).is_err());
    assert!(SquareGrid::<f64>::identity(3).is_err());

    // explicit limits bypass the defaults
    assert!(Sequence::<f64>::new_with_limits(5, &Limits::default()).is_ok());

    // illegal limits are refused and leave the defaults in place
    let bad = Limits {
        max_matrix_size: MAX_MATRIX_SIZE + 1,
        ..limits
    };
    assert!(set_default_limits(bad).is_err());
    assert_eq!(default_limits(), limits);

    reset_default_limits();
    assert_eq!(default_limits(), Limits::default());
    assert!(SquareGrid::<f64>::new(3).is_ok());
}
