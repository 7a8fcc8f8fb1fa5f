//! Property-based tests for the bounded searches.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use dioptra_integers::Integer;

    use crate::params::{ParallelConfig, SolveParams};
    use crate::pell::PellEquation;
    use crate::quadratic::{enumerate_solutions, QuadraticForm};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn every_record_satisfies_form_and_congruences(
            z in 1u64..40,
            max_n in 1u64..120,
            cap in 1usize..6,
        ) {
            let params = SolveParams::builder()
                .z(z)
                .max_n(max_n)
                .max_solutions_per_n(cap)
                .parallel(ParallelConfig::sequential())
                .build()
                .unwrap();
            let form = QuadraticForm::new(z);

            let records = enumerate_solutions(&params);
            for record in &records {
                prop_assert!(record.satisfies(&form), "{:?}", record);
                prop_assert!(record.n >= 1 && record.n <= max_n);
            }

            // ascending n, at most `cap` distinct pairs per n
            prop_assert!(records.windows(2).all(|w| w[0].n <= w[1].n));
            for n in 1..=max_n {
                let pairs: Vec<_> = records.iter().filter(|r| r.n == n).collect();
                let distinct: HashSet<_> = pairs.iter().map(|r| (&r.x, &r.y)).collect();
                prop_assert!(pairs.len() <= cap);
                prop_assert_eq!(distinct.len(), pairs.len());
            }

            // re-running is deterministic
            prop_assert_eq!(enumerate_solutions(&params), records);
        }

        #[test]
        fn enumeration_matches_reduced_equation(z in 1u64..12, n in 1u64..200) {
            // x = 32z·X and y = 16z·(2Y + 1) reduce the form to n = 2X² + z(2Y + 1)²
            let form = QuadraticForm::new(z);
            let found = form.solutions_for(n, usize::MAX);

            let mut expected = Vec::new();
            let mut odd = 1u64;
            while z * odd * odd <= n {
                let rest = n - z * odd * odd;
                if rest % 2 == 0 {
                    let half = rest / 2;
                    let x_red = (half as f64).sqrt() as u64;
                    for candidate in x_red.saturating_sub(1)..=x_red + 1 {
                        if candidate * candidate == half {
                            expected.push((
                                Integer::from(32 * z * candidate),
                                Integer::from(16 * z * odd),
                            ));
                        }
                    }
                }
                odd += 2;
            }

            prop_assert_eq!(found, expected);
        }

        #[test]
        fn pell_search_is_complete(c in -300i64..300) {
            let eq = PellEquation::new(Integer::new(c));
            let found = eq.find_sample(None);

            // brute force far past the classical bound
            let brute = (0i64..200).find_map(|p| {
                let d = p * p - c;
                if d < 0 || d % 2 != 0 {
                    return None;
                }
                let q2 = d / 2;
                let q = (q2 as f64).sqrt() as i64;
                (q.saturating_sub(1)..=q + 1)
                    .find(|&q| q >= 0 && q * q == q2)
                    .map(|q| (p, q))
            });

            match (found, brute) {
                (Ok(sample), Some((p, q))) => {
                    prop_assert_eq!(sample.p, Integer::new(p));
                    prop_assert_eq!(sample.q, Integer::new(q));
                }
                (Err(_), None) => {}
                (found, brute) => prop_assert!(false, "c = {}: {:?} vs {:?}", c, found, brute),
            }
        }
    }
}
