use fuzzy_inference::{apply_rules, clamp, defuzzify, fuzzify, Activations, Centroids, MembershipSet, Rule, Terms};
use proptest::prelude::*;

fn temperature_terms() -> Terms {
    let mut terms = Terms::new();

    terms.insert("frigid", |x| clamp((5. - x) / 10.));
    terms.insert("cold", |x| {
        clamp(if x > 15. { (30. - x) / 20. } else { (x + 10.) / 20. })
    });
    terms.insert("warm", |x| {
        clamp(if x < 30. { (x - 20.) / 10. } else { (40. - x) / 10. })
    });
    terms.insert("hot", |x| clamp((x - 30.) / 20.));
    terms
}

const SETS: [&str; 5] = ["a", "b", "c", "d", "e"];

fn rule_list() -> Vec<Rule> {
    [
        ("a", "x"),
        ("b", "x"),
        ("c", "y"),
        ("d", "y"),
        ("e", "y"),
        ("a", "z"),
        ("e", "z"),
        ("b", "x"),
    ]
    .into_iter()
    .map(Rule::from)
    .collect()
}

proptest! {
    #[test]
    fn fuzzify_is_deterministic(value in -100.0f64..150.) {
        let terms = temperature_terms();

        prop_assert_eq!(fuzzify(value, &terms), fuzzify(value, &terms));
    }

    #[test]
    fn fuzzified_degrees_stay_in_unit_range(value in -100.0f64..150.) {
        for (name, degree) in fuzzify(value, &temperature_terms()).iter() {
            prop_assert!((0. ..=1.).contains(&degree), "{} -> {}", name, degree);
        }
    }

    #[test]
    fn rule_order_does_not_matter(
        degrees in prop::collection::vec(0.0f64..=1., SETS.len()),
        shuffled in Just(rule_list()).prop_shuffle(),
    ) {
        let memberships: MembershipSet = SETS.iter().copied().zip(degrees).collect();
        let ordered = apply_rules(&memberships, &rule_list().into_iter().collect()).unwrap();
        let reordered = apply_rules(&memberships, &shuffled.into_iter().collect()).unwrap();

        prop_assert_eq!(ordered, reordered);
    }

    #[test]
    fn single_activation_returns_its_centroid(degree in 1e-9f64..=1., centroid in -1e6f64..1e6) {
        let activations: Activations = [("only", degree)].into_iter().collect();
        let centroids: Centroids = [("only", centroid)].into_iter().collect();

        prop_assert_eq!(defuzzify(&activations, &centroids), Ok(centroid));
    }

    #[test]
    fn defuzzified_value_is_within_centroid_bounds(
        off in 0.0f64..=1.,
        low in 0.0f64..=1.,
        high in 0.0f64..=1.,
    ) {
        let activations: Activations = [("off", off), ("low", low), ("high", high)].into_iter().collect();
        let centroids: Centroids = [("off", 0.), ("low", 20.), ("high", 80.)].into_iter().collect();
        let crisp = defuzzify(&activations, &centroids).unwrap();

        prop_assert!((0. ..=80. + 1e-9).contains(&crisp), "{}", crisp);
    }
}

#[test]
fn empty_activations_defuzzify_to_zero() {
    assert_eq!(defuzzify(&Activations::new(), &Centroids::new()), Ok(0.));
}
