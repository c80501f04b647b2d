use nsg_core::{ConductorGenus, GeneratorSet};
use nsg_invariants::{conductor_and_genus, frobenius, representable};

fn set(values: &[u64]) -> GeneratorSet {
    GeneratorSet::new(values.to_vec()).unwrap()
}

#[test]
fn three_five_seven() {
    let s = set(&[3, 5, 7]);
    let gaps: Vec<i64> = (0..20).filter(|v| !representable(*v, s.values())).collect();
    assert_eq!(gaps, vec![1, 2, 4]);
    assert_eq!(
        conductor_and_genus(&s).unwrap(),
        ConductorGenus {
            conductor: 5,
            genus: 3
        }
    );
    assert_eq!(frobenius(&s).unwrap(), Some(4));
}

#[test]
fn two_generator_formulae() {
    // Sylvester: F = ab - a - b, g = (a - 1)(b - 1) / 2.
    for (a, b) in [(2u64, 3u64), (2, 7), (3, 4), (5, 7), (7, 11)] {
        let s = set(&[a, b]);
        let frob = a * b - a - b;
        assert_eq!(frobenius(&s).unwrap(), Some(frob), "<{a},{b}>");
        let cg = conductor_and_genus(&s).unwrap();
        assert_eq!(cg.conductor, frob + 1);
        assert_eq!(cg.genus, (a - 1) * (b - 1) / 2);
    }
}

#[test]
fn frobenius_beyond_generator_sum() {
    // The sum of the generators (12) is not a sufficient table bound here.
    assert_eq!(frobenius(&set(&[5, 7])).unwrap(), Some(23));
    assert_eq!(frobenius(&set(&[6, 9, 20])).unwrap(), Some(43));
}

#[test]
fn whole_naturals_have_no_frobenius_number() {
    let s = set(&[1]);
    assert_eq!(frobenius(&s).unwrap(), None);
    let cg = conductor_and_genus(&s).unwrap();
    assert_eq!(cg.conductor, 0);
    assert_eq!(cg.genus, 0);
    assert_eq!(cg.frobenius(), None);

    let s = set(&[1, 5]);
    assert_eq!(frobenius(&s).unwrap(), None);
}

#[test]
fn ordinary_semigroup() {
    let s = GeneratorSet::interval(6, 11).unwrap();
    assert_eq!(frobenius(&s).unwrap(), Some(5));
    assert_eq!(conductor_and_genus(&s).unwrap().genus, 5);
}
