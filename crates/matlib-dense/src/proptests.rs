//! Property-based tests for the matrix algebra.

#[cfg(test)]
mod tests {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use crate::matrix::Matrix;

    // Strategy for generating small dimensions
    fn dim() -> impl Strategy<Value = usize> {
        1usize..6
    }

    // Strategy for a rows x cols integer matrix with small entries
    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<i64>> {
        vec(-100i64..100, rows * cols)
            .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
    }

    // Strategy for a shape plus several matrices of that shape
    fn same_shape_triple() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>, Matrix<i64>)> {
        (dim(), dim()).prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c), matrix(r, c)))
    }

    // Strategy for a multiplicable chain: A (n x m), then B and C (m x p)
    fn mul_chain() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>, Matrix<i64>)> {
        (dim(), dim(), dim())
            .prop_flat_map(|(n, m, p)| (matrix(n, m), matrix(m, p), matrix(m, p)))
    }

    // Strategy for a square matrix
    fn square() -> impl Strategy<Value = Matrix<i64>> {
        dim().prop_flat_map(|n| matrix(n, n))
    }

    proptest! {
        #[test]
        fn add_commutative((a, b, _) in same_shape_triple()) {
            prop_assert_eq!(a.checked_add(&b).unwrap(), b.checked_add(&a).unwrap());
        }

        #[test]
        fn add_associative((a, b, c) in same_shape_triple()) {
            let lhs = a.checked_add(&b).unwrap().checked_add(&c).unwrap();
            let rhs = a.checked_add(&b.checked_add(&c).unwrap()).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn sub_undoes_add((a, b, _) in same_shape_triple()) {
            prop_assert_eq!(a.checked_add(&b).unwrap().checked_sub(&b).unwrap(), a);
        }

        #[test]
        fn mul_shape((n, m, p) in (dim(), dim(), dim())) {
            let a = Matrix::<i64>::zeros(n, m).unwrap();
            let b = Matrix::<i64>::zeros(m, p).unwrap();
            prop_assert_eq!(a.checked_mul(&b).unwrap().shape(), (n, p));
        }

        #[test]
        fn mul_distributes_over_add((a, b, c) in mul_chain()) {
            // A * (B + C) == A*B + A*C
            let lhs = a.checked_mul(&b.checked_add(&c).unwrap()).unwrap();
            let rhs = a
                .checked_mul(&b)
                .unwrap()
                .checked_add(&a.checked_mul(&c).unwrap())
                .unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn transpose_involution(a in square()) {
            prop_assert_eq!(a.transpose().unwrap().transpose().unwrap(), a.clone());
        }

        #[test]
        fn equality_reflexive_and_consistent((a, b, _) in same_shape_triple()) {
            prop_assert_eq!(&a, &a);
            prop_assert_eq!(a == b, !(a != b));
        }

        #[test]
        fn iteration_matches_accessors((a, _, _) in same_shape_triple()) {
            let flat: Vec<i64> = a.iter().copied().collect();
            prop_assert_eq!(flat.len(), a.rows() * a.cols());
            for row in 0..a.rows() {
                for col in 0..a.cols() {
                    prop_assert_eq!(flat[col + a.cols() * row], *a.at(row, col).unwrap());
                }
            }
        }
    }
}
