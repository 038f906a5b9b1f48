//! Benchmarks for table loading and alphabet partitioning

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lexclass::{CharWidth, Interval, IntervalSet, Partitioner, UnicodeDb};

// Character classes typical of a Java-like scanner specification
const KEYWORDS: &[&str] = &[
    "abstract", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "super", "switch", "synchronized", "this", "throw", "throws", "transient",
    "try", "void", "volatile", "while",
];
const OPERATORS: &str = "(){}[];,.=><!~?:+-*/&|^%@";

fn ranges(pairs: &[(char, char)]) -> IntervalSet {
    pairs
        .iter()
        .map(|&(start, end)| Interval::from_chars(start, end).unwrap())
        .collect()
}

fn build_scanner_classes(db: &Arc<UnicodeDb>) -> Partitioner {
    let mut classes = Partitioner::with_width(CharWidth::Unicode, Some(Arc::clone(db)));
    for name in ["L", "Nd", "Zs", "Greek", "Cyrillic"] {
        if let Some(set) = db.get_interval_set(name) {
            classes.make_class(set.clone(), false).unwrap();
        }
    }
    classes.make_class(ranges(&[('a', 'z'), ('A', 'Z'), ('_', '_'), ('$', '$')]), false).unwrap();
    classes.make_class(ranges(&[('0', '9')]), false).unwrap();
    classes.make_class(ranges(&[('0', '9'), ('a', 'f'), ('A', 'F')]), false).unwrap();
    for keyword in KEYWORDS {
        classes.make_class_str(keyword, false).unwrap();
    }
    classes.make_class_str(OPERATORS, false).unwrap();
    classes
}

fn bench_load_tables(c: &mut Criterion) {
    c.bench_function("load_unicode_6_0", |b| {
        b.iter(|| UnicodeDb::new(black_box("6.0")).unwrap())
    });
}

fn bench_caseless_unpack(c: &mut Criterion) {
    c.bench_function("caseless_first_lookup", |b| {
        b.iter_batched(
            || UnicodeDb::new("6.0").unwrap(),
            |db| db.caseless_matches(black_box('k' as u32)).is_some(),
            BatchSize::SmallInput,
        )
    });
}

fn bench_refine_scanner(c: &mut Criterion) {
    let db = UnicodeDb::shared("6.0").unwrap();
    c.bench_function("refine_scanner_classes", |b| {
        b.iter(|| build_scanner_classes(black_box(&db)).num_classes())
    });
}

fn bench_caseless_refine(c: &mut Criterion) {
    let db = UnicodeDb::shared("6.0").unwrap();
    db.caseless_matches('a' as u32);
    c.bench_function("refine_caseless_keywords", |b| {
        b.iter(|| {
            let mut classes = Partitioner::with_width(CharWidth::Unicode, Some(Arc::clone(&db)));
            for keyword in KEYWORDS {
                classes.make_class_str(black_box(keyword), true).unwrap();
            }
            classes.num_classes()
        })
    });
}

fn bench_intervals(c: &mut Criterion) {
    let db = UnicodeDb::shared("6.0").unwrap();
    let classes = build_scanner_classes(&db);
    c.bench_function("class_table", |b| b.iter(|| black_box(&classes).intervals()));
}

fn bench_class_code(c: &mut Criterion) {
    let db = UnicodeDb::shared("6.0").unwrap();
    let classes = build_scanner_classes(&db);
    c.bench_function("class_code_lookup", |b| {
        b.iter(|| {
            "public static void main(String[] args) { return; }"
                .chars()
                .map(|ch| classes.class_code(black_box(ch as u32)).unwrap())
                .sum::<usize>()
        })
    });
}

criterion_group!(
    benches,
    bench_load_tables,
    bench_caseless_unpack,
    bench_refine_scanner,
    bench_caseless_refine,
    bench_intervals,
    bench_class_code,
);

criterion_main!(benches);
