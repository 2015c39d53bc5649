//! Property-based tests for the algebraic laws both structures rely on

use proptest::prelude::*;

use prefix_tools::{DiffArray, PrefixSum};

/// A list of raw (start, end, delta) triples; indices are reduced into
/// bounds by the individual tests.
fn raw_updates() -> impl Strategy<Value = Vec<(usize, usize, i64)>> {
    prop::collection::vec((any::<usize>(), any::<usize>(), -1_000i64..1_000), 0..32)
}

/// Clamp a raw (start, end) pair into a valid half-open interval over [0, n].
fn normalize(l: usize, r: usize, n: usize) -> (usize, usize) {
    let l = l % (n + 1);
    let r = r % (n + 1);
    if l <= r {
        (l, r)
    } else {
        (r, l)
    }
}

proptest! {
    #[test]
    fn full_range_sum_matches_reduction(
        values in prop::collection::vec(-1_000i64..1_000, 0..64),
    ) {
        let ps = PrefixSum::from_values(&values);
        let expected: i64 = values.iter().sum();
        prop_assert_eq!(ps.range_sum(0, ps.len()), expected);
    }

    #[test]
    fn range_sum_decomposes_at_any_midpoint(
        values in prop::collection::vec(-1_000i64..1_000, 0..64),
        raw in any::<[usize; 3]>(),
    ) {
        let ps = PrefixSum::from_values(&values);
        let n = ps.len();

        let mut cuts = [raw[0] % (n + 1), raw[1] % (n + 1), raw[2] % (n + 1)];
        cuts.sort_unstable();
        let [a, b, c] = cuts;

        prop_assert_eq!(ps.range_sum(a, c), ps.range_sum(a, b) + ps.range_sum(b, c));
    }

    #[test]
    fn empty_range_is_additive_identity(
        values in prop::collection::vec(-1_000i64..1_000, 0..64),
    ) {
        let ps = PrefixSum::from_values(&values);
        for i in 0..=ps.len() {
            prop_assert_eq!(ps.range_sum(i, i), 0);
        }
    }

    #[test]
    fn prefix_table_invariant_holds(
        values in prop::collection::vec(-1_000i64..1_000, 0..64),
    ) {
        let ps = PrefixSum::from_values(&values);
        let p = ps.prefix();

        prop_assert_eq!(p.len(), values.len() + 1);
        prop_assert_eq!(p[0], 0);
        for i in 0..values.len() {
            prop_assert_eq!(p[i + 1], p[i] + values[i]);
        }
    }

    #[test]
    fn diff_array_matches_brute_force_model(
        n in 1usize..64,
        updates in raw_updates(),
    ) {
        let mut d = DiffArray::new(n);
        let mut model = vec![0i64; n];

        for &(raw_l, raw_r, v) in &updates {
            let (l, r) = normalize(raw_l, raw_r, n);
            d.range_add(l, r, v);
            for e in &mut model[l..r] {
                *e += v;
            }
        }

        prop_assert_eq!(d.build(), model);
    }

    #[test]
    fn build_reads_are_idempotent(
        n in 1usize..64,
        updates in raw_updates(),
    ) {
        let mut d = DiffArray::new(n);
        for &(raw_l, raw_r, v) in &updates {
            let (l, r) = normalize(raw_l, raw_r, n);
            d.range_add(l, r, v);
        }

        let first = d.build();
        let second = d.build();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(d.diff().to_vec(), d.diff().to_vec());
    }

    #[test]
    fn full_range_update_superposes(
        n in 1usize..64,
        updates in raw_updates(),
        v in -1_000i64..1_000,
    ) {
        let mut d = DiffArray::new(n);
        for &(raw_l, raw_r, w) in &updates {
            let (l, r) = normalize(raw_l, raw_r, n);
            d.range_add(l, r, w);
        }

        let before = d.build();
        d.range_add(0, n, v);
        let after = d.build();

        for i in 0..n {
            prop_assert_eq!(after[i], before[i] + v);
        }
    }

    #[test]
    fn sentinel_never_leaks_into_output(
        n in 1usize..64,
        v in -1_000i64..1_000,
    ) {
        let mut d = DiffArray::new(n);
        d.range_add(0, n, v);

        prop_assert_eq!(d.diff()[n], -v);
        prop_assert_eq!(d.build(), vec![v; n]);
    }
}
