use super::*;

fn iv(start: u32, end: u32) -> Interval {
    Interval::new(start, end).unwrap()
}

fn set(intervals: &[(u32, u32)]) -> IntervalSet {
    intervals.iter().map(|&(start, end)| iv(start, end)).collect()
}

fn overlapping() -> Partitioner {
    let mut classes = Partitioner::new(0xFF, None).unwrap();
    classes.make_class(set(&[(0x41, 0x5A)]), false).unwrap();
    classes.make_class(set(&[(0x50, 0x60)]), false).unwrap();
    classes
}

/// Folds ASCII letters only.
struct AsciiFold {
    groups: Vec<Option<IntervalSet>>,
}

impl AsciiFold {
    fn new() -> Self {
        let groups = (0..0x80u32)
            .map(|c| {
                let ch = char::from_u32(c)?;
                if !ch.is_ascii_alphabetic() {
                    return None;
                }
                let upper = ch.to_ascii_uppercase() as u32;
                let lower = ch.to_ascii_lowercase() as u32;
                Some(set(&[(upper, upper), (lower, lower)]))
            })
            .collect();
        Self { groups }
    }
}

impl CaselessSource for AsciiFold {
    fn caseless_matches(&self, c: u32) -> Option<&IntervalSet> {
        self.groups.get(c as usize)?.as_ref()
    }

    fn maximum_code_point(&self) -> u32 {
        0x7F
    }
}

#[test]
fn test_new_single_class() {
    let classes = Partitioner::new(0xFF, None).unwrap();
    assert_eq!(classes.num_classes(), 1);
    assert_eq!(classes.max_char_code(), 0xFF);
    assert_eq!(classes.class(0), Some(&set(&[(0, 0xFF)])));
    assert!(classes.class(1).is_none());
    classes.check();
}

#[test]
fn test_new_rejects_supplementary_max() {
    assert_eq!(
        Partitioner::new(0x10000, None).unwrap_err(),
        LexClassError::InvalidRange {
            value: 0x10000,
            max: MAX_CHAR
        }
    );
    assert!(Partitioner::new(MAX_CHAR, None).is_ok());
}

#[test]
fn test_with_width() {
    assert_eq!(Partitioner::with_width(CharWidth::SevenBit, None).max_char_code(), 0x7F);
    assert_eq!(Partitioner::with_width(CharWidth::EightBit, None).max_char_code(), 0xFF);
    assert_eq!(Partitioner::with_width(CharWidth::Unicode, None).max_char_code(), 0xFFFF);
}

#[test]
fn test_singleton_refinement() {
    let mut classes = Partitioner::new(0xFF, None).unwrap();
    classes.make_class_char('a', false).unwrap();

    assert_eq!(classes.num_classes(), 2);
    assert_eq!(classes.class(0), Some(&set(&[(0, 0x60), (0x62, 0xFF)])));
    assert_eq!(classes.class(1), Some(&set(&[(0x61, 0x61)])));
    assert_ne!(
        classes.class_code('a' as u32).unwrap(),
        classes.class_code('b' as u32).unwrap()
    );
    classes.check();
}

#[test]
fn test_overlapping_refinements() {
    let classes = overlapping();

    assert_eq!(classes.num_classes(), 4);
    assert_eq!(classes.class(0), Some(&set(&[(0x00, 0x40), (0x61, 0xFF)])));
    assert_eq!(classes.class(1), Some(&set(&[(0x41, 0x4F)])));
    assert_eq!(classes.class(2), Some(&set(&[(0x5B, 0x60)])));
    assert_eq!(classes.class(3), Some(&set(&[(0x50, 0x5A)])));
    classes.check();
}

#[test]
fn test_subset_then_superset() {
    let mut classes = Partitioner::new(0x7F, None).unwrap();
    classes.make_class(set(&[(0x61, 0x63)]), false).unwrap();
    classes.make_class(set(&[(0x61, 0x7A)]), false).unwrap();

    assert_eq!(classes.num_classes(), 3);
    assert_eq!(classes.class(1), Some(&set(&[(0x61, 0x63)])));
    assert_eq!(classes.class(2), Some(&set(&[(0x64, 0x7A)])));
    classes.check();
}

#[test]
fn test_refining_with_existing_class_is_noop() {
    let mut classes = overlapping();
    classes.make_class(set(&[(0x41, 0x5A)]), false).unwrap();
    classes.make_class(set(&[(0x50, 0x5A)]), false).unwrap();
    classes.make_class(set(&[(0x00, 0xFF)]), false).unwrap();
    classes.make_class(IntervalSet::new(), false).unwrap();
    assert_eq!(classes.num_classes(), 4);
    classes.check();
}

#[test]
fn test_refining_set_clipped_to_alphabet() {
    let mut classes = Partitioner::new(0x7F, None).unwrap();
    classes
        .make_class_intervals([iv(0x41, 0x5A), iv(0x100, 0x200)], false)
        .unwrap();
    assert_eq!(classes.num_classes(), 2);
    assert_eq!(classes.class(1), Some(&set(&[(0x41, 0x5A)])));

    // Entirely outside the alphabet.
    classes.make_class(set(&[(0x3B1, 0x3C9)]), false).unwrap();
    assert_eq!(classes.num_classes(), 2);
    classes.check();
}

#[test]
fn test_make_class_str() {
    let mut classes = Partitioner::new(0x7F, None).unwrap();
    classes.make_class_str("abca", false).unwrap();
    assert_eq!(classes.num_classes(), 4);

    let codes: Vec<usize> = "abc"
        .chars()
        .map(|c| classes.class_code(c as u32).unwrap())
        .collect();
    assert_eq!(codes, vec![1, 2, 3]);

    classes.make_class_str("", false).unwrap();
    assert_eq!(classes.num_classes(), 4);
}

#[test]
fn test_make_class_str_rejects_supplementary() {
    let mut classes = Partitioner::new(0xFFFF, None).unwrap();
    assert_eq!(
        classes.make_class_str("a\u{10000}", false),
        Err(LexClassError::InvalidRange {
            value: 0x10000,
            max: MAX_CHAR
        })
    );
    // Characters before the failing one were applied.
    assert_eq!(classes.num_classes(), 2);
}

#[test]
fn test_make_class_not_matches_make_class() {
    let ranges = [iv(0x30, 0x39), iv(0x41, 0x46)];

    let mut positive = Partitioner::new(0xFF, None).unwrap();
    positive.make_class_intervals(ranges, false).unwrap();
    let mut negative = Partitioner::new(0xFF, None).unwrap();
    negative.make_class_not(ranges, false).unwrap();

    assert_eq!(
        positive.classes().collect::<Vec<_>>(),
        negative.classes().collect::<Vec<_>>()
    );
}

#[test]
fn test_class_code_out_of_range() {
    let classes = Partitioner::new(0xFF, None).unwrap();
    assert_eq!(classes.class_code(0xFF), Ok(0));
    assert_eq!(
        classes.class_code(0x100),
        Err(LexClassError::InvalidRange {
            value: 0x100,
            max: 0xFF
        })
    );
}

#[test]
fn test_class_codes() {
    let classes = overlapping();
    let upper = set(&[(0x41, 0x5A)]);
    assert_eq!(classes.class_codes(&upper), vec![1, 3]);
    assert_eq!(classes.not_class_codes(&upper), vec![0, 2]);

    let everything = set(&[(0x00, 0xFF)]);
    assert_eq!(classes.class_codes(&everything), vec![0, 1, 2, 3]);
    assert!(classes.not_class_codes(&everything).is_empty());
}

#[test]
fn test_intervals_dump() {
    let classes = overlapping();
    let table = classes.intervals();

    let expected = [
        (0x00, 0x40, 0),
        (0x41, 0x4F, 1),
        (0x50, 0x5A, 3),
        (0x5B, 0x60, 2),
        (0x61, 0xFF, 0),
    ];
    assert_eq!(
        table
            .iter()
            .map(|entry| (entry.start, entry.end, entry.class_code))
            .collect::<Vec<_>>(),
        expected
    );

    assert_eq!(table.first().map(|entry| entry.start), Some(0));
    assert_eq!(table.last().map(|entry| entry.end), Some(0xFF));
    for pair in table.windows(2) {
        assert_eq!(pair[0].end + 1, pair[1].start);
    }
    for entry in &table {
        let mid = entry.start + (entry.end - entry.start) / 2;
        assert_eq!(classes.class_code(mid), Ok(entry.class_code));
    }
}

#[test]
fn test_intervals_single_class() {
    let classes = Partitioner::with_width(CharWidth::Unicode, None);
    assert_eq!(
        classes.intervals(),
        vec![CharClassInterval {
            start: 0,
            end: 0xFFFF,
            class_code: 0
        }]
    );
}

#[test]
fn test_caseless_requires_source() {
    let mut classes = Partitioner::new(0xFF, None).unwrap();
    assert_eq!(
        classes.make_class_char('a', true),
        Err(LexClassError::NoCaselessSource)
    );
    assert_eq!(classes.num_classes(), 1);
}

#[test]
fn test_caseless_with_unicode_db() {
    let db = UnicodeDb::shared("4.0").unwrap();
    let mut classes = Partitioner::new(0xFFFF, Some(db)).unwrap();
    classes.make_class_char('A', true).unwrap();

    assert_eq!(classes.num_classes(), 2);
    assert_eq!(
        classes.class_code('A' as u32).unwrap(),
        classes.class_code('a' as u32).unwrap()
    );
    assert_ne!(
        classes.class_code('A' as u32).unwrap(),
        classes.class_code('B' as u32).unwrap()
    );

    // Kelvin sign folds with k.
    classes.make_class_char('k', true).unwrap();
    assert_eq!(
        classes.class_code(0x212A).unwrap(),
        classes.class_code('K' as u32).unwrap()
    );
    classes.check();
}

#[test]
fn test_caseless_fold_clipped_to_alphabet() {
    let db = UnicodeDb::shared("4.0").unwrap();
    let mut classes = Partitioner::with_width(CharWidth::EightBit, Some(db));
    classes.make_class_char('k', true).unwrap();
    assert_eq!(classes.class(1), Some(&set(&[(0x4B, 0x4B), (0x6B, 0x6B)])));
    classes.check();
}

#[test]
fn test_custom_caseless_source() {
    let mut classes = Partitioner::with_source(0x7F, Some(Arc::new(AsciiFold::new()))).unwrap();
    classes.make_class_str("if", true).unwrap();

    assert_eq!(classes.num_classes(), 3);
    assert_eq!(classes.class(1), Some(&set(&[(0x49, 0x49), (0x69, 0x69)])));
    assert_eq!(classes.class(2), Some(&set(&[(0x46, 0x46), (0x66, 0x66)])));
    classes.check();
}

#[test]
fn test_display() {
    let mut classes = Partitioner::new(0xFF, None).unwrap();
    classes.make_class_char('a', false).unwrap();
    assert_eq!(
        classes.to_string(),
        "CharClasses:\nclass 0:\n{ [\\u0000-'`']['b'-\\u00FF] }\nclass 1:\n{ ['a'] }\n"
    );

    let entry = CharClassInterval {
        start: 0x41,
        end: 0x4F,
        class_code: 1,
    };
    assert_eq!(entry.to_string(), "['A'-'O'=1]");
}

#[test]
#[should_panic(expected = "overlap")]
fn test_check_detects_overlap() {
    let classes: Partitioner = Partitioner {
        classes: vec![set(&[(0, 0x7F)]), set(&[(0x41, 0x41)])],
        max_char_used: 0x7F,
        caseless_source: None,
    };
    classes.check();
}

#[test]
#[should_panic(expected = "do not cover")]
fn test_check_detects_gap() {
    let classes: Partitioner = Partitioner {
        classes: vec![set(&[(0, 0x40)]), set(&[(0x42, 0x7F)])],
        max_char_used: 0x7F,
        caseless_source: None,
    };
    classes.check();
}

#[test]
fn test_widen_alphabet_extends_class_zero() {
    let mut classes = Partitioner::with_width(CharWidth::SevenBit, None);
    classes.make_class_char('a', false).unwrap();
    assert!(classes.class_code(0x80).is_err());

    classes.set_max_char_code(0xFFFF).unwrap();
    assert_eq!(classes.max_char_code(), 0xFFFF);
    assert_eq!(classes.class_code(0x80), Ok(0));
    assert_eq!(classes.class(0), Some(&set(&[(0, 0x60), (0x62, 0xFFFF)])));
    assert_eq!(classes.class(1), Some(&set(&[(0x61, 0x61)])));
    assert_eq!(classes.intervals().last().map(|entry| entry.end), Some(0xFFFF));
    classes.check();
}

#[test]
fn test_narrow_alphabet_clips_classes() {
    let mut classes = Partitioner::new(0xFF, None).unwrap();
    classes.make_class(set(&[(0x41, 0x5A), (0xC0, 0xDE)]), false).unwrap();

    classes.set_max_char_code(0x7F).unwrap();
    assert_eq!(classes.num_classes(), 2);
    assert_eq!(classes.class(0), Some(&set(&[(0, 0x40), (0x5B, 0x7F)])));
    assert_eq!(classes.class(1), Some(&set(&[(0x41, 0x5A)])));
    assert!(classes.class_code(0x80).is_err());
    classes.check();
}

#[test]
fn test_narrow_alphabet_rejects_emptied_class() {
    let mut classes = Partitioner::new(0xFF, None).unwrap();
    classes.make_class_char('\u{E9}', false).unwrap();

    assert_eq!(
        classes.set_max_char_code(0x7F),
        Err(LexClassError::EmptiedClass { code: 1, max: 0x7F })
    );
    assert_eq!(classes.max_char_code(), 0xFF);
    assert_eq!(classes.num_classes(), 2);
    assert_eq!(classes.class_code(0xE9), Ok(1));
    classes.check();
}

#[test]
fn test_set_max_char_code_range() {
    let mut classes = Partitioner::new(0xFF, None).unwrap();
    assert_eq!(
        classes.set_max_char_code(0x10000),
        Err(LexClassError::InvalidRange {
            value: 0x10000,
            max: MAX_CHAR
        })
    );
    classes.set_max_char_code(0xFF).unwrap();
    assert_eq!(classes.num_classes(), 1);
    classes.check();
}
