use nsg_core::GeneratorSet;
use nsg_search::{classify, Classification, Majority};

fn set(values: &[u64]) -> GeneratorSet {
    GeneratorSet::new(values.to_vec()).unwrap()
}

#[test]
fn leaf_iff_frobenius_exceeds_every_generator() {
    assert_eq!(classify(&set(&[3, 4]), Some(5)), Classification::Leaf);
    assert_eq!(classify(&set(&[2, 7]), Some(5)), Classification::Internal);
    assert_eq!(classify(&set(&[3, 5, 7]), Some(4)), Classification::Internal);
    assert_eq!(classify(&set(&[5, 7]), Some(23)), Classification::Leaf);
}

#[test]
fn whole_of_n_is_internal() {
    assert_eq!(classify(&set(&[1]), None), Classification::Internal);
}

#[test]
fn majority_sentences() {
    assert_eq!(Majority::from_counts(4, 1), Majority::Internal);
    assert_eq!(Majority::from_counts(1, 4), Majority::Leaf);
    assert_eq!(Majority::from_counts(2, 2), Majority::Tie);
    assert!(Majority::Internal.sentence().contains("more internal"));
    assert!(Majority::Leaf.sentence().contains("more leaf"));
    assert!(Majority::Tie.sentence().contains("as many"));
}

#[test]
fn labels_serialize_in_kebab_case() {
    assert_eq!(
        serde_json::to_string(&Classification::Leaf).unwrap(),
        "\"leaf\""
    );
    assert_eq!(Classification::Internal.to_string(), "internal");
}
