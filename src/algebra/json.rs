#![allow(non_snake_case)]
use crate::algebra::*;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use thiserror::Error;

/// Error type returned by JSON snapshot reads and writes
#[derive(Error, Debug)]
pub enum JsonIoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// malformed JSON, or data violating a container invariant
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON snapshots of containers.
///
/// Loading re-validates every shape invariant, so a file that was edited by
/// hand into e.g. a ragged grid is rejected rather than loaded.
pub trait JsonReadWrite: Sized {
    fn save_to_file(&self, file: &mut File) -> Result<(), JsonIoError>;
    fn load_from_file(file: &mut File) -> Result<Self, JsonIoError>;
}

macro_rules! impl_json_read_write {
    ($ty:ident) => {
        impl<T> JsonReadWrite for $ty<T>
        where
            T: ElementT + Serialize + DeserializeOwned,
        {
            fn save_to_file(&self, file: &mut File) -> Result<(), JsonIoError> {
                let json = serde_json::to_string(self)?;
                file.write_all(json.as_bytes())?;
                Ok(())
            }

            fn load_from_file(file: &mut File) -> Result<Self, JsonIoError> {
                let mut buffer = String::new();
                file.read_to_string(&mut buffer)?;
                Ok(serde_json::from_str(&buffer)?)
            }
        }
    };
}
impl_json_read_write!(Sequence);
impl_json_read_write!(SquareGrid);
impl_json_read_write!(UpperTriangularGrid);

#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};

    let A = SquareGrid::<f64>::try_from(&[
        [1.0, 2.0], //
        [-3.5, 4.25],
    ])
    .unwrap();

    // write the grid to a file
    let mut file = tempfile::tempfile().unwrap();
    A.save_to_file(&mut file).unwrap();

    // read the grid from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let B = SquareGrid::<f64>::load_from_file(&mut file).unwrap();
    assert_eq!(A, B);
}

#[test]
fn test_json_rejects_ragged_grid() {
    let text = r#"{"rows":[{"start":0,"data":[1,2]},{"start":0,"data":[3]}]}"#;
    assert!(serde_json::from_str::<SquareGrid<i32>>(text).is_err());

    let text = r#"{"rows":[{"start":0,"data":[1,2]},{"start":0,"data":[3]}]}"#;
    assert!(serde_json::from_str::<UpperTriangularGrid<i32>>(text).is_err());

    let text = r#"{"rows":[{"start":0,"data":[1,2]},{"start":1,"data":[3]}]}"#;
    let U = serde_json::from_str::<UpperTriangularGrid<i32>>(text).unwrap();
    assert_eq!(*U.get(1, 1).unwrap(), 3);

    let text = r#"{"start":0,"data":[]}"#;
    assert!(serde_json::from_str::<Sequence<i32>>(text).is_err());
}

#[test]
fn test_json_serialize_needs_only_serialize() {
    // writing a container must not require T to be deserializable
    fn to_json<T: ElementT + Serialize>(x: &Sequence<T>) -> String {
        serde_json::to_string(x).unwrap()
    }
    let x = Sequence::<i32>::with_start(2, 1).unwrap();
    assert_eq!(to_json(&x), r#"{"start":1,"data":[0,0]}"#);

    let A = SquareGrid::<i32>::identity(2).unwrap();
    let json = serde_json::to_string(&A).unwrap();
    assert_eq!(json, r#"{"rows":[{"start":0,"data":[1,0]},{"start":0,"data":[0,1]}]}"#);
}
