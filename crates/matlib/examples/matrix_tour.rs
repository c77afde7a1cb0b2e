//! A tour of the matlib matrix operations.
//!
//! Run with: cargo run --example matrix_tour

use matlib::prelude::*;

fn main() -> Result<(), MatrixError> {
    // Integer matrices
    let a = Matrix::from_rows(vec![vec![1i64, 2], vec![3, 4]])?;
    let b = Matrix::from_rows(vec![vec![5i64, 6], vec![7, 8]])?;

    println!("A =\n{a}");
    println!("B =\n{b}");
    println!("A + B =\n{}", a.checked_add(&b)?);
    println!("A * B =\n{}", a.checked_mul(&b)?);
    println!("trans(A) =\n{}", a.transpose()?);

    // Complex matrices get the conjugating adjoint instead
    let z = Matrix::from_rows(vec![
        vec![Complex::new(1.0, 2.0), Complex::new(0.0, -1.0)],
        vec![Complex::new(3.0, 0.0), Complex::new(2.0, 2.0)],
    ])?;

    println!("Z =\n{z}");
    println!("adjoint(Z) =\n{}", z.adjoint()?);

    // Violations come back as inspectable error kinds
    let wide = Matrix::<i64>::zeros(2, 3)?;
    if let Err(e) = wide.transpose() {
        println!("rejected: {e}");
    }
    let tall = Matrix::<i64>::zeros(4, 2)?;
    if let Err(e) = wide.checked_mul(&tall) {
        println!("rejected: {e}");
    }

    Ok(())
}
