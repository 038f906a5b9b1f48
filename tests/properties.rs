use std::collections::BTreeSet;
use std::sync::Arc;

use lexclass::{normalize, Interval, IntervalSet, Partitioner, UnicodeDb};
use proptest::collection::vec;
use proptest::prelude::*;

const MAX: u32 = 0xFF;

/// Intervals reaching a little past the alphabet, so clipping is exercised.
fn interval_strategy() -> impl Strategy<Value = Interval> {
    (0u32..0x140, 0u32..0x30).prop_map(|(start, len)| {
        Interval::new(start, (start + len).min(0x17F)).unwrap()
    })
}

fn set_strategy() -> impl Strategy<Value = IntervalSet> {
    vec(interval_strategy(), 0..6).prop_map(IntervalSet::from_intervals)
}

fn refine_all(sets: &[IntervalSet]) -> Partitioner {
    let mut classes = Partitioner::new(MAX, None).unwrap();
    for set in sets {
        classes.make_class(set.clone(), false).unwrap();
    }
    classes
}

fn members(set: &IntervalSet) -> BTreeSet<u32> {
    set.intervals().flat_map(|interval| interval.iter()).collect()
}

fn alphabet() -> IntervalSet {
    IntervalSet::from_interval(Interval::new(0, MAX).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn partition_invariants_hold(sets in vec(set_strategy(), 0..8)) {
        let classes = refine_all(&sets);
        classes.check();

        for c in 0..=MAX {
            let owners = classes.classes().filter(|class| class.contains(c)).count();
            prop_assert_eq!(owners, 1, "U+{:04X}", c);
        }
        prop_assert!(classes.class_code(MAX + 1).is_err());
    }

    #[test]
    fn refinement_is_idempotent(sets in vec(set_strategy(), 0..8)) {
        let mut classes = refine_all(&sets);
        let before: Vec<IntervalSet> = classes.classes().cloned().collect();
        for set in &sets {
            classes.make_class(set.clone(), false).unwrap();
        }
        let after: Vec<IntervalSet> = classes.classes().cloned().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn refinement_is_order_independent(
        (sets, shuffled) in vec(set_strategy(), 0..8)
            .prop_flat_map(|sets| (Just(sets.clone()), Just(sets).prop_shuffle()))
    ) {
        let blocks = |classes: Partitioner| {
            classes.classes().cloned().collect::<BTreeSet<IntervalSet>>()
        };
        prop_assert_eq!(blocks(refine_all(&sets)), blocks(refine_all(&shuffled)));
    }

    #[test]
    fn class_codes_cover_refining_sets(sets in vec(set_strategy(), 1..8)) {
        let classes = refine_all(&sets);
        for set in &sets {
            let mut cover = IntervalSet::new();
            for code in classes.class_codes(set) {
                cover.add_set(classes.class(code).unwrap());
            }
            prop_assert_eq!(cover, set.and(&alphabet()));

            let mut rest = IntervalSet::new();
            for code in classes.not_class_codes(set) {
                rest.add_set(classes.class(code).unwrap());
            }
            let mut complement = alphabet();
            complement.sub(set);
            prop_assert_eq!(rest, complement);
        }
    }

    #[test]
    fn intervals_tile_the_alphabet(sets in vec(set_strategy(), 0..8)) {
        let classes = refine_all(&sets);
        let table = classes.intervals();

        prop_assert_eq!(table.first().map(|entry| entry.start), Some(0));
        prop_assert_eq!(table.last().map(|entry| entry.end), Some(MAX));
        for pair in table.windows(2) {
            prop_assert_eq!(pair[0].end + 1, pair[1].start);
            prop_assert_ne!(pair[0].class_code, pair[1].class_code);
        }
        for entry in &table {
            for c in entry.start..=entry.end {
                prop_assert_eq!(classes.class_code(c).unwrap(), entry.class_code);
            }
        }
    }

    #[test]
    fn set_algebra_matches_model(a in set_strategy(), b in set_strategy()) {
        let (ma, mb) = (members(&a), members(&b));

        let mut union = a.clone();
        union.add_set(&b);
        prop_assert_eq!(members(&union), &ma | &mb);

        prop_assert_eq!(members(&a.and(&b)), &ma & &mb);

        let mut difference = a.clone();
        difference.sub(&b);
        prop_assert_eq!(members(&difference), &ma - &mb);

        prop_assert_eq!(a.num_chars(), ma.len());
        prop_assert_eq!(union == a, mb.is_subset(&ma));
    }

    #[test]
    fn normalize_ignores_case_and_separators(
        name in prop_oneof![
            Just("LowercaseLetter"),
            Just("Decimal_Number"),
            Just("Greek"),
            Just("gc=Lu"),
            Just("White_Space"),
        ],
        separators in vec(prop_oneof![Just(""), Just(" "), Just("_"), Just("-")], 32),
        upper in vec(any::<bool>(), 32),
    ) {
        let mangled: String = name
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let c = if upper[i] { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() };
                format!("{}{}", separators[i], c)
            })
            .collect();
        prop_assert_eq!(normalize(&mangled), normalize(name));
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1024,
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn caseless_matches_are_symmetric(c in 0u32..=0xFFFF) {
        let db = UnicodeDb::shared("6.0").unwrap();
        if let Some(matches) = db.caseless_matches(c) {
            prop_assert!(matches.contains(c));
            for other in members(matches) {
                let back = db.caseless_matches(other);
                prop_assert!(back.is_some_and(|set| std::ptr::eq(set, matches)));
            }
        }
    }

    #[test]
    fn caseless_refinement_keeps_variants_together(c in 0u32..=0xFFFF) {
        let db = UnicodeDb::shared("4.0").unwrap();
        let mut classes = Partitioner::new(0xFFFF, Some(Arc::clone(&db))).unwrap();
        classes
            .make_class(IntervalSet::from_char(c).unwrap(), true)
            .unwrap();

        let code = classes.class_code(c).unwrap();
        if let Some(matches) = db.caseless_matches(c) {
            for other in members(matches) {
                prop_assert_eq!(classes.class_code(other).unwrap(), code);
            }
        }
        classes.check();
    }
}
