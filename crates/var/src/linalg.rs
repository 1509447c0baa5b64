//! Structured matrices for delta-method covariance algebra.
//!
//! All vec operations follow the column-major stacking convention, matching
//! the storage order of [`nalgebra`] matrices.

use nalgebra::DMatrix;

/// Position of entry `(i, j)`, `i >= j`, in the half-vectorisation of an
/// `m x m` matrix (lower triangle stacked column by column).
pub(crate) fn vech_index(m: usize, i: usize, j: usize) -> usize {
    debug_assert!(i >= j && i < m);
    j * (2 * m - j + 1) / 2 + (i - j)
}

/// Commutation matrix `K_{m,n}` with `K vec(A) = vec(A')` for `A` of
/// shape `m x n`.
pub(crate) fn commutation(m: usize, n: usize) -> DMatrix<f64> {
    let mut k = DMatrix::zeros(m * n, m * n);
    for r in 0..m {
        for c in 0..n {
            k[(r * n + c, c * m + r)] = 1.0;
        }
    }
    k
}

/// Elimination matrix `L_m` with `L vec(A) = vech(A)`.
pub(crate) fn elimination(m: usize) -> DMatrix<f64> {
    let mut l = DMatrix::zeros(m * (m + 1) / 2, m * m);
    for j in 0..m {
        for i in j..m {
            l[(vech_index(m, i, j), j * m + i)] = 1.0;
        }
    }
    l
}

/// Moore-Penrose inverse of the duplication matrix, `D_m^+`.
///
/// Row `vech(i, j)` averages the two mirrored vec positions, so
/// `D^+ vec(S) = vech(S)` for symmetric `S` and `D^+ D = I`.
pub(crate) fn duplication_pinv(m: usize) -> DMatrix<f64> {
    let mut p = DMatrix::zeros(m * (m + 1) / 2, m * m);
    for j in 0..m {
        for i in j..m {
            let h = vech_index(m, i, j);
            if i == j {
                p[(h, i * m + i)] = 1.0;
            } else {
                p[(h, j * m + i)] = 0.5;
                p[(h, i * m + j)] = 0.5;
            }
        }
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{DMatrix, DVector, dmatrix};

    fn vec_of(a: &DMatrix<f64>) -> DVector<f64> {
        DVector::from_column_slice(a.as_slice())
    }

    /// Duplication matrix `D_m` with `D vech(S) = vec(S)` for symmetric `S`,
    /// the ground truth the pseudo-inverse is checked against.
    fn duplication(m: usize) -> DMatrix<f64> {
        let mut d = DMatrix::zeros(m * m, m * (m + 1) / 2);
        for c in 0..m {
            for r in 0..m {
                let h = vech_index(m, r.max(c), r.min(c));
                d[(c * m + r, h)] = 1.0;
            }
        }
        d
    }

    #[test]
    fn vech_index_walks_lower_triangle() {
        // 3 x 3: (0,0) (1,0) (2,0) (1,1) (2,1) (2,2)
        assert_eq!(vech_index(3, 0, 0), 0);
        assert_eq!(vech_index(3, 1, 0), 1);
        assert_eq!(vech_index(3, 2, 0), 2);
        assert_eq!(vech_index(3, 1, 1), 3);
        assert_eq!(vech_index(3, 2, 1), 4);
        assert_eq!(vech_index(3, 2, 2), 5);
    }

    #[test]
    fn commutation_transposes_vec() {
        let a = dmatrix![1.0, 2.0, 3.0; 4.0, 5.0, 6.0];
        let k = commutation(2, 3);
        assert_eq!(k * vec_of(&a), vec_of(&a.transpose()));
    }

    #[test]
    fn square_commutation_is_involutory() {
        let k = commutation(3, 3);
        assert_eq!(&k * &k, DMatrix::identity(9, 9));
    }

    #[test]
    fn duplication_restores_symmetric_vec() {
        let s = dmatrix![2.0, 0.5, -1.0; 0.5, 3.0, 0.25; -1.0, 0.25, 1.5];
        let vech = DVector::from_vec(vec![2.0, 0.5, -1.0, 3.0, 0.25, 1.5]);
        assert_eq!(duplication(3) * vech, vec_of(&s));
    }

    #[test]
    fn elimination_extracts_lower_triangle() {
        let a = dmatrix![1.0, 9.0; 2.0, 3.0];
        let vech = elimination(2) * vec_of(&a);
        assert_eq!(vech, DVector::from_vec(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn pinv_is_left_inverse_of_duplication() {
        for m in 1..=4 {
            let prod = duplication_pinv(m) * duplication(m);
            let dim = m * (m + 1) / 2;
            assert_eq!(prod, DMatrix::identity(dim, dim));
        }
    }

    #[test]
    fn elimination_is_left_inverse_of_duplication() {
        let prod = elimination(3) * duplication(3);
        assert_eq!(prod, DMatrix::identity(6, 6));
    }
}
