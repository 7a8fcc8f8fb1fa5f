//! Integration tests for dioptra-linalg.

#[cfg(test)]
mod integration_tests {
    use crate::dense_matrix::DenseMatrix;
    use dioptra_integers::Integer;

    fn pell_norm(u: &Integer, v: &Integer) -> Integer {
        u * u - &(&Integer::new(2) * &(v * v))
    }

    #[test]
    fn test_automorphism_preserves_pell_form() {
        // maps solutions of u^2 - 2v^2 = c onto solutions of the same equation
        let t = DenseMatrix::from_i64_rows(&[&[3, 4], &[2, 3]]);
        for (u, v) in [(0, 1), (1, 0), (3, 1), (-7, 5), (12, -9)] {
            let (u, v) = (Integer::new(u), Integer::new(v));
            let next_u = &t[(0, 0)] * &u + &t[(0, 1)] * &v;
            let next_v = &t[(1, 0)] * &u + &t[(1, 1)] * &v;
            assert_eq!(pell_norm(&next_u, &next_v), pell_norm(&u, &v));
        }
    }
}
