use nsg_search::{Combinations, SubsetSweep};
use proptest::prelude::*;

fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    (0..k).fold(1u64, |acc, i| acc * (n - i) / (i + 1))
}

#[test]
fn pairs_come_out_in_lexicographic_order() {
    let pairs: Vec<Vec<u64>> = Combinations::new(vec![2, 3, 4, 5], 2).collect();
    assert_eq!(
        pairs,
        vec![
            vec![2, 3],
            vec![2, 4],
            vec![2, 5],
            vec![3, 4],
            vec![3, 5],
            vec![4, 5],
        ]
    );
}

#[test]
fn oversized_subsets_are_empty() {
    let mut combos = Combinations::new(vec![1, 2], 3);
    assert_eq!(combos.size(), 3);
    assert!(combos.next().is_none());
}

#[test]
fn reset_rewinds_to_the_first_subset() {
    let mut combos = Combinations::new(vec![7, 8, 9], 2);
    assert_eq!(combos.by_ref().count(), 3);
    combos.reset();
    assert_eq!(combos.next(), Some(vec![7, 8]));
}

#[test]
fn sweep_walks_sizes_in_order() {
    let subsets: Vec<Vec<u64>> = SubsetSweep::new(vec![1, 2, 3], 2, 3).collect();
    assert_eq!(
        subsets,
        vec![vec![1, 2], vec![1, 3], vec![2, 3], vec![1, 2, 3]]
    );
    assert_eq!(SubsetSweep::new(vec![1, 2, 3], 3, 2).count(), 0);
}

proptest! {
    #[test]
    fn subset_counts_match_binomials(n in 0u64..12, k in 0u64..6) {
        let pool: Vec<u64> = (1..=n).collect();
        let subsets: Vec<Vec<u64>> = Combinations::new(pool, k as usize).collect();
        prop_assert_eq!(subsets.len() as u64, binomial(n, k));
        for subset in &subsets {
            prop_assert!(subset.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
