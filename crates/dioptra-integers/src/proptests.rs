//! Property-based tests for the exact integer primitives.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn non_negative() -> impl Strategy<Value = i64> {
        0i64..1_000_000_000i64
    }

    fn small_int() -> impl Strategy<Value = i64> {
        -100_000i64..100_000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn isqrt_brackets_the_root(n in non_negative()) {
            let n = Integer::new(n);
            let r = n.isqrt().unwrap();
            let next = &r + &Integer::one();
            prop_assert!(&r * &r <= n);
            prop_assert!(&next * &next > n);
        }

        #[test]
        fn squares_are_detected(r in 0i64..3_000_000i64) {
            let r = Integer::new(r);
            let square = &r * &r;
            prop_assert_eq!(square.exact_sqrt(), Some(r));
        }

        #[test]
        fn non_squares_are_rejected(r in 1i64..3_000_000i64, offset in 1i64..100i64) {
            // r^2 < r^2 + offset < (r + 1)^2 whenever offset <= 2r
            prop_assume!(offset <= 2 * r);
            let r = Integer::new(r);
            let candidate = &r * &r + Integer::new(offset);
            prop_assert_eq!(candidate.exact_sqrt(), None);
        }

        #[test]
        fn div_exact_inverts_multiplication(a in small_int(), d in non_zero_int()) {
            let a = Integer::new(a);
            let d = Integer::new(d);
            let product = &a * &d;
            prop_assert_eq!(product.div_exact(&d), Some(a));
        }

        #[test]
        fn div_exact_rejects_remainders(a in small_int(), d in non_zero_int()) {
            let a = Integer::new(a);
            let d = Integer::new(d);
            let divides = (&a % &d).is_zero();
            prop_assert_eq!(a.div_exact(&d).is_some(), divides);
        }

        #[test]
        fn rem_euclid_is_in_range(a in small_int(), m in non_zero_int()) {
            let a = Integer::new(a);
            let m = Integer::new(m);
            let r = a.rem_euclid(&m);
            prop_assert!(!r.is_negative());
            prop_assert!(r < m.abs());
            prop_assert!((&a - &r).div_exact(&m).is_some());
        }

        #[test]
        fn half_of_is_integral_iff_even(n in small_int()) {
            let n = Integer::new(n);
            let half = Rational::half_of(n.clone());
            prop_assert_eq!(half.is_integer(), n.is_even());
            prop_assert_eq!(half.to_integer(), n.div_exact(&Integer::new(2)));
        }
    }
}
