/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Dense linear solves using the Faer library
//!
//! The systems solved here are tiny (one unknown per heteroatomic element pair),
//! so a plain LU with partial pivoting on a Faer matrix is all that is needed.

use super::errors::{Result, UtilsError};
use faer::Mat;
use ndarray::{Array1, Array2};

/// Pivots smaller than this are treated as zero
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Convert from ndarray::Array2<f64> to faer::Mat<f64>
pub fn ndarray_to_faer(array: &Array2<f64>) -> Mat<f64> {
    let (rows, cols) = array.dim();
    let mut result = Mat::<f64>::zeros(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            result[(i, j)] = array[[i, j]];
        }
    }
    result
}

/// In-place LU decomposition with partial pivoting; returns the row permutation
fn lu_decompose(lu: &mut Mat<f64>) -> Result<Vec<usize>> {
    let n = lu.nrows();
    let mut piv: Vec<usize> = (0..n).collect();

    for k in 0..n {
        let mut pivot_row = k;
        let mut pivot_val = lu[(k, k)].abs();
        for i in (k + 1)..n {
            let val = lu[(i, k)].abs();
            if val > pivot_val {
                pivot_row = i;
                pivot_val = val;
            }
        }

        if pivot_val < SINGULAR_TOLERANCE {
            return Err(UtilsError::Singular {
                column: k,
                pivot: pivot_val,
            });
        }

        if pivot_row != k {
            piv.swap(k, pivot_row);
            for j in 0..n {
                let temp = lu[(k, j)];
                lu[(k, j)] = lu[(pivot_row, j)];
                lu[(pivot_row, j)] = temp;
            }
        }

        for i in (k + 1)..n {
            lu[(i, k)] = lu[(i, k)] / lu[(k, k)];
            for j in (k + 1)..n {
                lu[(i, j)] = lu[(i, j)] - lu[(i, k)] * lu[(k, j)];
            }
        }
    }

    Ok(piv)
}

/// Solve the square system `a * x = b`
pub fn solve_linear_system(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let (rows, cols) = a.dim();
    if rows != cols || rows != b.len() {
        return Err(UtilsError::Dimension(format!(
            "cannot solve a {}x{} system with a right-hand side of length {}",
            rows,
            cols,
            b.len()
        )));
    }

    let n = rows;
    let mut lu = ndarray_to_faer(a);
    let piv = lu_decompose(&mut lu)?;

    // Forward substitution on the permuted right-hand side
    let mut x: Vec<f64> = piv.iter().map(|&p| b[p]).collect();
    for i in 0..n {
        for k in 0..i {
            x[i] = x[i] - lu[(i, k)] * x[k];
        }
    }

    // Backward substitution
    for i in (0..n).rev() {
        for k in (i + 1)..n {
            x[i] = x[i] - lu[(i, k)] * x[k];
        }
        x[i] = x[i] / lu[(i, i)];
    }

    Ok(Array1::from(x))
}

/// Least-squares solution of the overdetermined system `a * x ≈ b`
///
/// Solves the normal equations `aᵀa x = aᵀb`; requires at least as many rows
/// as columns and full column rank.
pub fn least_squares(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let (rows, cols) = a.dim();
    if rows != b.len() {
        return Err(UtilsError::Dimension(format!(
            "{} equations but {} right-hand side values",
            rows,
            b.len()
        )));
    }
    if rows < cols {
        return Err(UtilsError::Dimension(format!(
            "underdetermined system: {} equations for {} unknowns",
            rows, cols
        )));
    }

    let ata = a.t().dot(a);
    let atb = a.t().dot(b);
    solve_linear_system(&ata, &atb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_solve_needs_pivoting() {
        let a = array![[0.0, 2.0, 1.0], [1.0, 1.0, 0.0], [3.0, 0.0, 1.0]];
        let b = array![5.0, 3.0, 6.0];
        let x = solve_linear_system(&a, &b).unwrap();

        let check = a.dot(&x);
        for i in 0..3 {
            assert_relative_eq!(check[i], b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_singular_system() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        let b = array![1.0, 2.0];
        assert!(matches!(
            solve_linear_system(&a, &b),
            Err(UtilsError::Singular { .. })
        ));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = array![[1.0, 0.0], [0.0, 1.0]];
        let b = array![1.0, 2.0, 3.0];
        assert!(matches!(
            solve_linear_system(&a, &b),
            Err(UtilsError::Dimension(_))
        ));
    }

    #[test]
    fn test_least_squares_line_fit() {
        // y = 2x + 1 sampled exactly, so the fit is exact
        let a = array![[0.0, 1.0], [1.0, 1.0], [2.0, 1.0], [3.0, 1.0]];
        let b = array![1.0, 3.0, 5.0, 7.0];
        let x = least_squares(&a, &b).unwrap();
        assert_relative_eq!(x[0], 2.0, epsilon = 1e-10);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_least_squares_underdetermined() {
        let a = array![[1.0, 1.0]];
        let b = array![2.0];
        assert!(least_squares(&a, &b).is_err());
    }
}
