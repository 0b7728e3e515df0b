//! Text input and output for containers.
//!
//! Containers write themselves through [`std::fmt::Display`] and read
//! themselves through [`ReadText`].  Neither form carries a shape header, so
//! a reader must already hold a container of the right shape.  Output can
//! be routed to stdout, a file, an in-memory buffer or any other stream
//! through a [`PrintTarget`].

use std::fs::File;
use std::io::{Result, Stdout, Write};

mod text;
pub use text::*;

/// Destination for the text form of containers.
///
/// ```
/// use dynmat::{algebra::*, io::*};
///
/// let x = Sequence::from_slice(&[1, 2, 3]).unwrap();
/// let mut out = PrintTarget::buffer();
/// x.print_to(&mut out).unwrap();
/// assert_eq!(out.contents(), Some("1 2 3\n".to_string()));
/// ```
pub enum PrintTarget {
    Stdout(Stdout),
    File(File),
    /// in-memory capture, read back with [`contents`](PrintTarget::contents)
    Buffer(Vec<u8>),
    Stream(Box<dyn Write + Send + Sync>),
}

impl PrintTarget {
    pub fn stdout() -> Self {
        PrintTarget::Stdout(std::io::stdout())
    }

    pub fn buffer() -> Self {
        PrintTarget::Buffer(Vec::new())
    }

    pub fn stream(stream: Box<dyn Write + Send + Sync>) -> Self {
        PrintTarget::Stream(stream)
    }

    /// Text captured so far, or `None` unless this is a buffer target.
    pub fn contents(&self) -> Option<String> {
        match self {
            PrintTarget::Buffer(buffer) => Some(String::from_utf8_lossy(buffer).into_owned()),
            _ => None,
        }
    }
}

impl From<File> for PrintTarget {
    fn from(file: File) -> Self {
        PrintTarget::File(file)
    }
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            PrintTarget::Stdout(_) => "Stdout",
            PrintTarget::File(_) => "File",
            PrintTarget::Buffer(_) => "Buffer",
            PrintTarget::Stream(_) => "Stream",
        };
        write!(f, "PrintTarget::{}", kind)
    }
}

impl Default for PrintTarget {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match self {
            PrintTarget::Stdout(stdout) => stdout.write(buf),
            PrintTarget::File(file) => file.write(buf),
            PrintTarget::Buffer(buffer) => buffer.write(buf),
            PrintTarget::Stream(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            PrintTarget::Stdout(stdout) => stdout.flush(),
            PrintTarget::File(file) => file.flush(),
            PrintTarget::Buffer(_) => Ok(()),
            PrintTarget::Stream(stream) => stream.flush(),
        }
    }
}

/// Writes the text form of a value, followed by a newline, to any stream.
///
/// Implemented for everything that is `Display`, i.e. all of the container
/// types in [`algebra`](crate::algebra).
pub trait Printable {
    fn print_to(&self, out: &mut dyn Write) -> Result<()>;
}

impl<D> Printable for D
where
    D: std::fmt::Display + ?Sized,
{
    fn print_to(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self)
    }
}

#[test]
fn test_print_to_buffer() {
    let mut target = PrintTarget::buffer();

    "1 2 3".print_to(&mut target).unwrap();
    4.5f64.print_to(&mut target).unwrap();

    assert_eq!(target.contents().unwrap(), "1 2 3\n4.5\n");
    assert!(PrintTarget::default().contents().is_none());
}
