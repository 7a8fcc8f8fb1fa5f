//! Property-based tests for the recurrence.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use dioptra_integers::{Integer, Rational};
    use dioptra_solve::{find_samples, PellEquation, SolutionRecord};

    use crate::recurrence::{HalvingMode, PellState, PellStates, TripleRecurrenceEngine};
    use crate::table::Cell;

    /// `z` values whose `2z + 1` is a norm from Z[√2].
    fn representable_z() -> impl Strategy<Value = u64> {
        prop::sample::select(vec![3u64, 4, 8, 11, 12, 20, 23, 24, 35, 36])
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn states_stay_on_the_pell_orbit(iterations in 1usize..30) {
            let eq = PellEquation::negative_two();
            let states: Vec<PellState> = PellStates::new(PellState::from_i64(0, 1))
                .take(iterations)
                .collect();

            prop_assert_eq!(states.len(), iterations);
            for pair in states.windows(2) {
                let (cur, next) = (&pair[0], &pair[1]);
                prop_assert_eq!(&next.u, &(Integer::new(3) * &cur.u + Integer::new(4) * &cur.v));
                prop_assert_eq!(&next.v, &(Integer::new(2) * &cur.u + Integer::new(3) * &cur.v));
            }
            for state in &states {
                prop_assert!(eq.is_solution(&state.u, &state.v));
            }
            let distinct: HashSet<_> = states.iter().collect();
            prop_assert_eq!(distinct.len(), iterations);
        }

        #[test]
        fn exact_triples_match_the_formulas(
            z in representable_z(),
            x_k in 0i64..50,
            y_k in 0i64..50,
            iteration in 0usize..6,
        ) {
            let samples = find_samples(z, None).unwrap();
            let engine = TripleRecurrenceEngine::new(z, &samples)
                .unwrap()
                .with_halving(HalvingMode::Exact);
            let zi = z as i64;
            let record = SolutionRecord::from_i64(32 * zi * x_k, 16 * zi + 32 * zi * y_k, 1);
            let state = engine.states(iteration + 1).pop().unwrap();

            let cell = engine.cell_for(&record, &state, 0, iteration).unwrap();
            let triple = cell.triple().unwrap();

            let (a, b) = (&samples.ab.p, &samples.ab.q);
            let odd = Integer::new(2 * y_k + 1);
            let term1 = &odd * &(b * &state.u + a * &state.v);
            let term2 = Integer::new(2 * x_k);

            let z_numerator = &odd * &(a * &state.u + Integer::new(2) * b * &state.v);

            prop_assert_eq!(&triple.x, &Rational::half_of(&term1 + &term2));
            prop_assert_eq!(&triple.y, &Rational::half_of(&term1 - &term2));
            prop_assert_eq!(&triple.z, &Rational::half_of(z_numerator.clone()));
            // term1 is odd for genuine samples, so X and Y are half-integers
            prop_assert!(!term1.is_even());
            prop_assert_eq!(triple.x.denominator(), Integer::new(2));
            // while Z always halves exactly
            prop_assert!(z_numerator.is_even());
            prop_assert!(triple.z.is_integer());
        }

        #[test]
        fn misaligned_records_are_absent_everywhere(
            z in representable_z(),
            offset in 1i64..31,
            iterations in 1usize..6,
        ) {
            let samples = find_samples(z, None).unwrap();
            let engine = TripleRecurrenceEngine::new(z, &samples).unwrap();
            let zi = z as i64;
            let record = SolutionRecord::from_i64(32 * zi + offset, 16 * zi, 1);

            let table = engine.run(vec![record], iterations).unwrap();
            prop_assert_eq!(table.columns().len(), iterations);
            for column in table.columns() {
                prop_assert_eq!(&column.cells, &vec![Cell::Absent]);
            }
        }
    }
}
