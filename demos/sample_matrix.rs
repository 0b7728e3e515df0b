#![allow(non_snake_case)]
use dynmat::{algebra::*, io::*};
use std::io::Write;

// Reads a grid size from stdin, multiplies an index-pattern
// grid by the identity and checks that the product is unchanged.

#[derive(Debug, thiserror::Error)]
enum SampleError {
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
    #[error(transparent)]
    Text(#[from] TextIoError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn run(out: &mut PrintTarget) -> Result<(), SampleError> {
    write!(out, "Enter matrix size: ")?;
    out.flush()?;

    let mut tokens = TokenReader::new(std::io::stdin().lock());
    let n = tokens.read_values::<i64>(1)?[0];

    let mut A = SquareGrid::<i64>::new(n)?;
    let size = A.size();
    for i in 0..size {
        for j in 0..size {
            A.set(i, j, (i * 10 + j) as i64)?;
        }
    }
    writeln!(out, "Matrix A:")?;
    A.print_to(out)?;

    let E = SquareGrid::<i64>::identity(size)?;
    writeln!(out, "Matrix E (identity):")?;
    E.print_to(out)?;

    let C = A.matmul(&E)?;
    writeln!(out, "Result of A * E:")?;
    C.print_to(out)?;

    if C == A {
        writeln!(out, "Multiplication checked: correct (A * E = A).")?;
    } else {
        writeln!(out, "Multiplication checked: incorrect.")?;
    }
    Ok(())
}

fn main() {
    let mut out = PrintTarget::default();
    if let Err(e) = run(&mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
