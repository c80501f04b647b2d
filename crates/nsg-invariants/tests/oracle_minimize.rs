use nsg_core::GeneratorSet;
use nsg_invariants::{minimize, minimize_values, reachability_table, representable};

#[test]
fn negative_values_are_never_representable() {
    assert!(!representable(-1, &[1]));
    assert!(!representable(i64::MIN, &[2, 3]));
}

#[test]
fn zero_is_always_representable() {
    assert!(representable(0, &[7, 9]));
    assert!(representable(0, &[]));
}

#[test]
fn reachability_matches_hand_computation() {
    let table = reachability_table(&[3, 5], 10);
    let reachable: Vec<usize> = table
        .iter()
        .enumerate()
        .filter(|(_, r)| **r)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(reachable, vec![0, 3, 5, 6, 8, 9, 10]);
}

#[test]
fn minimize_drops_redundant_generators() {
    let s = GeneratorSet::new(vec![4, 6, 7, 8, 9, 10, 11]).unwrap();
    assert_eq!(minimize(&s).unwrap().values(), &[4, 6, 7, 9]);

    let seed = GeneratorSet::interval(6, 11).unwrap();
    assert_eq!(minimize(&seed).unwrap(), seed);
}

#[test]
fn minimize_values_ignores_duplicates() {
    assert_eq!(minimize_values(&[3, 3, 5]), vec![3, 5]);
    assert_eq!(minimize_values(&[2, 4, 6, 3]), vec![2, 3]);
    assert_eq!(minimize_values(&[1, 2, 3]), vec![1]);
}

#[test]
fn minimize_is_idempotent_on_known_sets() {
    for values in [vec![2u64, 3, 4, 5], vec![5, 7, 10, 12, 14], vec![6, 9, 20, 26]] {
        let s = GeneratorSet::new(values).unwrap();
        let once = minimize(&s).unwrap();
        let twice = minimize(&once).unwrap();
        assert_eq!(once, twice);
    }
}
