#![allow(non_snake_case)]

#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use dynmat::algebra::*;
    use std::io::{Seek, SeekFrom};

    let mut U = UpperTriangularGrid::<f64>::new(3).unwrap();
    U.set(0, 1, 2.5).unwrap();
    U.set(2, 2, -1.0).unwrap();
    let x = Sequence::<i64>::with_start(4, 2).unwrap();

    // write both containers to files
    let mut file = tempfile::tempfile().unwrap();
    U.save_to_file(&mut file).unwrap();
    let mut file2 = tempfile::tempfile().unwrap();
    x.save_to_file(&mut file2).unwrap();

    // read them back
    file.seek(SeekFrom::Start(0)).unwrap();
    let V = UpperTriangularGrid::<f64>::load_from_file(&mut file).unwrap();
    assert_eq!(U, V);

    file2.seek(SeekFrom::Start(0)).unwrap();
    let y = Sequence::<i64>::load_from_file(&mut file2).unwrap();
    assert_eq!(y.start(), 2);
    assert_eq!(x, y);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_load_rejects_bad_shape() {
    use dynmat::algebra::*;
    use std::io::{Seek, SeekFrom, Write};

    // a triangular grid whose second row starts at the wrong column
    let text = r#"{"rows":[{"start":0,"data":[1,2]},{"start":0,"data":[3]}]}"#;
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    match UpperTriangularGrid::<i32>::load_from_file(&mut file) {
        Err(JsonIoError::Json(_)) => {}
        other => panic!("unexpected result {:?}", other),
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_json_limits() {
    use dynmat::algebra::*;

    let limits = LimitsBuilder::default().max_matrix_size(8).build().unwrap();
    let json = serde_json::to_string(&limits).unwrap();
    let back: Limits = serde_json::from_str(&json).unwrap();
    assert_eq!(limits, back);

    // absent fields take their defaults
    let back: Limits = serde_json::from_str(r#"{"max_matrix_size":8}"#).unwrap();
    assert_eq!(back.max_vector_size, MAX_VECTOR_SIZE);

    // limits above the compile-time maxima are refused on load
    let text = format!(r#"{{"max_matrix_size":{}}}"#, MAX_MATRIX_SIZE + 1);
    assert!(serde_json::from_str::<Limits>(&text).is_err());
    assert!(serde_json::from_str::<Limits>(r#"{"max_vector_size":0}"#).is_err());
}
