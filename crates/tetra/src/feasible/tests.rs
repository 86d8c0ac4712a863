use super::*;
use crate::perm::valid_permutations;
use proptest::prelude::*;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn all_agree(e: Edges6, expected: bool) {
    for alg in Algorithm::ALL {
        assert_eq!(alg.eval(&e), Ok(expected), "{alg} on {e}");
    }
}

#[test]
fn degenerate_zero_cases() {
    all_agree(Edges6::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0), true);
    all_agree(Edges6::new(0.0, 0.0, 0.0, 1.0, 0.0, 0.0), false);
    all_agree(Edges6::new(0.0, 0.0, 0.0, 0.0, 1.0, 0.0), false);
    all_agree(Edges6::new(0.0, 0.0, 0.0, 0.0, 0.0, 1.0), false);
    // Collapsed base face, fourth vertex at distance 10.
    all_agree(Edges6::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0), true);
}

#[test]
fn canonical_cases() {
    all_agree(Edges6::new(1.0, 1.0, 1.0, 10.0, 10.0, 10.0), true);
    all_agree(Edges6::new(10.0, 10.0, 10.0, 1.0, 1.0, 1.0), false);
    all_agree(Edges6::new(3.0, 6.0, 3.0, 5.0, 4.0, 5.0), true);
    all_agree(Edges6::new(1.0, 2.0, 4.0, 10.0, 10.0, 10.0), false);
    all_agree(Edges6::new(20.0, 20.0, 20.0, 11.0, 11.0, 11.0), false);
}

#[test]
fn regular_base_resolves_apex_at_1e5() {
    // Equilateral base with side sqrt(3) has circumradius 1: the apex height is
    // real iff the lateral edges are at least 1.
    let r = 3f64.sqrt();
    all_agree(Edges6::new(r, r, r, 1.00001, 1.00001, 1.00001), true);
    all_agree(Edges6::new(r, r, r, 0.99999, 0.99999, 0.99999), false);
}

#[test]
fn regular_tetrahedron() {
    all_agree(Edges6::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0), true);
    all_agree(Edges6::new(2.0, 2.0, 2.0, 2.0, 2.0, 2.0), true);
}

#[test]
fn random_inputs_agree() {
    let mut rng = StdRng::seed_from_u64(12345);
    let dist = Uniform::new(0.0, 100.0);
    let mut feasible = 0usize;
    for _ in 0..10_000 {
        let e = Edges6(std::array::from_fn(|_| dist.sample(&mut rng)));
        let reference = Algorithm::CayleyMenger.eval(&e).unwrap();
        assert_eq!(Algorithm::ClosedForm.eval(&e), Ok(reference), "{e}");
        assert_eq!(Algorithm::Fold.eval(&e), Ok(reference), "{e}");
        feasible += reference as usize;
    }
    // Both verdicts occur.
    assert!(feasible > 0 && feasible < 10_000);
}

#[test]
fn fold_reports_negative_height_instead_of_false() {
    // 0.3 + 0.7 rounds to 1.0 and passes the bound check, but the squared
    // height of the flat triangle rounds below zero.
    let err = fold(0.3, 0.7, 1.0, 1.0, 1.0, 1.0).unwrap_err();
    assert!(matches!(
        err,
        FeasibilityError::NegativeHeight {
            face: FoldFace::Base,
            squared_height
        } if squared_height < 0.0
    ));

    let err = fold(0.3, 0.5, 0.5, 1.0, 1.0, 0.7).unwrap_err();
    assert!(matches!(
        err,
        FeasibilityError::NegativeHeight {
            face: FoldFace::Folded,
            ..
        }
    ));
    assert!(err.to_string().contains("folded face"));
}

#[test]
fn fold_zero_base_edge() {
    // Anchors coincide: b == c, b1 == c1 and a1 closes (b, b1).
    assert_eq!(fold(0.0, 2.0, 2.0, 2.5, 1.0, 1.0), Ok(true));
    assert_eq!(fold(0.0, 2.0, 2.0, 3.5, 1.0, 1.0), Ok(false));
    assert_eq!(fold(0.0, 2.0, 2.1, 2.5, 1.0, 1.0), Ok(false));
    assert_eq!(fold(0.0, 2.0, 2.0, 2.5, 1.0, 1.1), Ok(false));
}

#[test]
fn algorithm_parses_aliases() {
    assert_eq!("cm".parse::<Algorithm>(), Ok(Algorithm::CayleyMenger));
    assert_eq!("Fold".parse::<Algorithm>(), Ok(Algorithm::Fold));
    assert_eq!("closed-form".parse::<Algorithm>(), Ok(Algorithm::ClosedForm));
    assert!("heron".parse::<Algorithm>().is_err());
    for alg in Algorithm::ALL {
        assert_eq!(alg.name().parse::<Algorithm>(), Ok(alg));
    }
}

proptest! {
    #[test]
    fn verdict_invariant_under_relabeling(v in prop::array::uniform6(0.0f64..100.0)) {
        let e = Edges6(v);
        for alg in Algorithm::ALL {
            let base = alg.eval(&e);
            for p in valid_permutations() {
                prop_assert_eq!(alg.eval(&e.permuted(&p)), base, "{} under {}", alg, p);
            }
        }
    }

    #[test]
    fn scaling_preserves_verdict(
        v in prop::array::uniform6(0.0f64..100.0),
        k in prop_oneof![Just(0.5f64), Just(2.0f64), Just(4.0f64)],
    ) {
        // Powers of two scale without rounding.
        let e = Edges6(v);
        let scaled = Edges6(v.map(|x| x * k));
        for alg in Algorithm::ALL {
            prop_assert_eq!(alg.eval(&scaled), alg.eval(&e));
        }
    }
}
