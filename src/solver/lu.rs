//! Dense complex LU factorization with partial pivoting.

use num_complex::Complex64;

use super::SolverConfig;
use crate::error::{Result, SpiceError};

/// LU decomposition of a square matrix, stored in place (L below the
/// diagonal with implicit unit diagonal, U on and above it).
#[derive(Debug, Clone)]
pub struct LuFactors {
    lu: Vec<Complex64>,
    /// Row permutation: row `i` of the factored matrix is row `pivots[i]` of A
    pivots: Vec<usize>,
    size: usize,
}

impl LuFactors {
    /// Factor a row-major `size x size` matrix.
    ///
    /// A pivot smaller than `max(relative * max|A|, absolute)` means the
    /// system has no unique solution.
    pub fn factor(a: &[Complex64], size: usize, config: &SolverConfig) -> Result<Self> {
        debug_assert_eq!(a.len(), size * size);
        let n = size;
        let mut lu = a.to_vec();
        let mut pivots: Vec<usize> = (0..n).collect();

        let scale = lu.iter().map(|v| v.norm()).fold(0.0_f64, f64::max);
        let min_pivot = (scale * config.relative_pivot_tolerance).max(config.absolute_pivot_tolerance);

        for k in 0..n {
            // Find pivot
            let mut max_val = lu[k * n + k].norm();
            let mut max_row = k;

            for i in (k + 1)..n {
                let val = lu[i * n + k].norm();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if !(max_val > min_pivot) {
                log::debug!(
                    "pivot {:.3e} in column {} below threshold {:.3e}",
                    max_val,
                    k,
                    min_pivot
                );
                return Err(SpiceError::SingularMatrix { size });
            }

            // Swap rows if needed
            if max_row != k {
                pivots.swap(k, max_row);
                for j in 0..n {
                    lu.swap(k * n + j, max_row * n + j);
                }
            }

            // Eliminate
            let pivot = lu[k * n + k];
            for i in (k + 1)..n {
                let factor = lu[i * n + k] / pivot;
                lu[i * n + k] = factor;
                for j in (k + 1)..n {
                    let upper = lu[k * n + j];
                    lu[i * n + j] -= factor * upper;
                }
            }
        }

        Ok(Self { lu, pivots, size })
    }

    /// Solve Ax = b using the factorization.
    pub fn solve(&self, b: &[Complex64]) -> Vec<Complex64> {
        let n = self.size;
        debug_assert_eq!(b.len(), n);

        // Apply pivot permutation to b
        let mut x: Vec<Complex64> = self.pivots.iter().map(|&p| b[p]).collect();

        // Forward substitution (L * y = Pb)
        for i in 0..n {
            for j in 0..i {
                let xj = x[j];
                x[i] -= self.lu[i * n + j] * xj;
            }
        }

        // Back substitution (U * x = y)
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let xj = x[j];
                x[i] -= self.lu[i * n + j] * xj;
            }
            x[i] /= self.lu[i * n + i];
        }

        x
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Solve the square system Ax = b.
pub fn solve(a: &[Complex64], b: &[Complex64], config: &SolverConfig) -> Result<Vec<Complex64>> {
    let size = b.len();
    let factors = LuFactors::factor(a, size, config)?;
    Ok(factors.solve(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_real_system() {
        // [2 1; 1 3] x = [3; 5] -> x = [0.8, 1.4]
        let a = [c(2.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(3.0, 0.0)];
        let b = [c(3.0, 0.0), c(5.0, 0.0)];
        let x = solve(&a, &b, &SolverConfig::default()).unwrap();
        assert_abs_diff_eq!(x[0].re, 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1].re, 1.4, epsilon = 1e-12);
    }

    #[test]
    fn test_requires_pivoting() {
        // Zero on the leading diagonal, as in a bare voltage source system
        let a = [c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)];
        let b = [c(0.0, 0.0), c(5.0, 0.0)];
        let x = solve(&a, &b, &SolverConfig::default()).unwrap();
        assert_abs_diff_eq!(x[0].re, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1].re, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_complex_system() {
        // (1 + j) x = 2 -> x = 1 - j
        let x = solve(&[c(1.0, 1.0)], &[c(2.0, 0.0)], &SolverConfig::default()).unwrap();
        assert_abs_diff_eq!(x[0].re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[0].im, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_singular_detected() {
        let a = [c(1.0, 0.0), c(-1.0, 0.0), c(-1.0, 0.0), c(1.0, 0.0)];
        let b = [c(0.0, 0.0), c(0.0, 0.0)];
        match solve(&a, &b, &SolverConfig::default()) {
            Err(SpiceError::SingularMatrix { size }) => assert_eq!(size, 2),
            other => panic!("expected SingularMatrix, got {:?}", other),
        }
    }

    #[test]
    fn test_tolerance_is_configurable() {
        let a = [c(1e-6, 0.0)];
        let b = [c(1.0, 0.0)];
        assert!(solve(&a, &b, &SolverConfig::default()).is_ok());

        let strict = SolverConfig::default().with_absolute_pivot_tolerance(1e-3);
        assert!(solve(&a, &b, &strict).is_err());
    }

    #[test]
    fn test_empty_system() {
        let x = solve(&[], &[], &SolverConfig::default()).unwrap();
        assert!(x.is_empty());
    }
}
