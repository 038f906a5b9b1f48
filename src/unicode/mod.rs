//! Unicode property database.
//!
//! A [`UnicodeDb`] decodes the packed tables of one Unicode version into
//! interval sets keyed by normalized property value name (`lu`, `greek`,
//! `whitespace`, ...), and lazily builds the caseless equivalence lookup
//! used by case-insensitive character classes.
//!
//! Only the Basic Multilingual Plane is represented: supplementary code
//! points in the tables are dropped, and intervals crossing `U+FFFF` are
//! clamped.

mod data;

use std::sync::{Arc, OnceLock};

use log::debug;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::interval::{Interval, MAX_CHAR};
use crate::interval_set::{CaselessSource, IntervalSet};
use crate::LexClassError;

use self::data::UnicodeData;

/// Version used when a specification does not request one.
pub const DEFAULT_UNICODE_VERSION: &str = "4.0";

/// Canonical names of the versions with embedded tables, oldest first.
pub fn supported_versions() -> impl Iterator<Item = &'static str> {
    data::canonical_versions()
}

/// Normalize a property or property value name for lookup: lowercase,
/// drop whitespace, `_`, `-`, `(` and `)`, and turn `:` into `=`.
///
/// ```
/// use lexclass::normalize;
///
/// assert_eq!(normalize("Lower Case_Letter"), "lowercaseletter");
/// assert_eq!(normalize("Script:Greek"), "script=greek");
/// ```
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|&c| !is_word_separator(c))
        .flat_map(char::to_lowercase)
        .map(|c| if c == ':' { '=' } else { c })
        .collect()
}

/// ASCII whitespace (including vertical tab), `_`, `-`, `(` and `)`.
fn is_word_separator(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, '\x0B' | '_' | '-' | '(' | ')')
}

/// Property data for one Unicode version.
///
/// Property lookups are decoded up front; the caseless table is decoded on
/// the first [`caseless_matches`](UnicodeDb::caseless_matches) call and
/// shared by every thread holding the database.
#[derive(Debug)]
pub struct UnicodeDb {
    data: &'static UnicodeData,
    /// Normalized name -> set. Aliases share the set of their target.
    property_values: FxHashMap<String, Arc<IntervalSet>>,
    caseless_matches: OnceLock<Vec<Option<Arc<IntervalSet>>>>,
}

impl UnicodeDb {
    /// Decode the tables for `version`.
    ///
    /// Accepts canonical versions (`"4.0"`) and their aliases (`"4"`,
    /// `"4.0.1"`); anything else fails with
    /// [`LexClassError::UnsupportedVersion`].
    pub fn new(version: &str) -> Result<Self, LexClassError> {
        let data = data::lookup(version).ok_or_else(|| LexClassError::UnsupportedVersion {
            version: version.to_string(),
            supported: data::version_names().collect::<Vec<_>>().join(", "),
        })?;

        let property_values = bind(data);
        debug!(
            "loaded Unicode {} tables: {} property values and aliases",
            data.version,
            property_values.len()
        );

        Ok(Self {
            data,
            property_values,
            caseless_matches: OnceLock::new(),
        })
    }

    /// Decode the tables for [`DEFAULT_UNICODE_VERSION`].
    pub fn with_default_version() -> Result<Self, LexClassError> {
        Self::new(DEFAULT_UNICODE_VERSION)
    }

    /// A database shared process-wide, decoded on first request per
    /// canonical version.
    pub fn shared(version: &str) -> Result<Arc<Self>, LexClassError> {
        static CACHE: OnceLock<Mutex<FxHashMap<&'static str, Arc<UnicodeDb>>>> = OnceLock::new();

        // Resolve aliases first so "4" and "4.0" share one entry.
        let canonical = match data::lookup(version) {
            Some(data) => data.version,
            None => return Self::new(version).map(Arc::new),
        };

        let mut cache = CACHE.get_or_init(|| Mutex::new(FxHashMap::default())).lock();
        if let Some(db) = cache.get(canonical) {
            return Ok(Arc::clone(db));
        }
        let db = Arc::new(Self::new(canonical)?);
        cache.insert(canonical, Arc::clone(&db));
        Ok(db)
    }

    /// Canonical version string of the loaded tables.
    pub fn version(&self) -> &'static str {
        self.data.version
    }

    /// The maximum code point of the selected Unicode version.
    pub fn maximum_code_point(&self) -> u32 {
        self.data.maximum_code_point
    }

    /// The set of characters with the given property value, looked up
    /// after [`normalize`]. Returns `None` for unknown names.
    pub fn get_interval_set(&self, name: &str) -> Option<&IntervalSet> {
        self.property_values.get(&normalize(name)).map(Arc::as_ref)
    }

    /// Every recognized normalized name, aliases included, in no
    /// particular order.
    pub fn property_values(&self) -> impl Iterator<Item = &str> + '_ {
        self.property_values.keys().map(String::as_str)
    }

    /// All characters caselessly equivalent to `c`, including `c`, or
    /// `None` if `c` has no case variants. Every member of one
    /// equivalence class returns the same shared set.
    pub fn caseless_matches(&self, c: u32) -> Option<&IntervalSet> {
        self.caseless_table()
            .get(c as usize)
            .and_then(Option::as_deref)
    }

    fn caseless_table(&self) -> &[Option<Arc<IntervalSet>>] {
        self.caseless_matches
            .get_or_init(|| unpack_caseless_matches(self.data))
    }
}

impl CaselessSource for UnicodeDb {
    fn caseless_matches(&self, c: u32) -> Option<&IntervalSet> {
        UnicodeDb::caseless_matches(self, c)
    }

    fn maximum_code_point(&self) -> u32 {
        UnicodeDb::maximum_code_point(self)
    }
}

/// Decode every property value of `data`, derive the single-letter general
/// categories, then add aliases and the `ascii`/`any` invariants.
fn bind(data: &UnicodeData) -> FxHashMap<String, Arc<IntervalSet>> {
    let mut sets: FxHashMap<String, IntervalSet> = FxHashMap::default();

    for (&name, &packed) in data.property_values.iter().zip(data.intervals) {
        let set = unpack_intervals(packed);

        // Two-letter values are general categories (`lu`, `nd`, ...); their
        // first letter names the union of the whole group.
        if name.len() == 2 {
            sets.entry(name[..1].to_string())
                .or_default()
                .add_set(&set);
        }
        sets.insert(name.to_string(), set);
    }

    let mut property_values: FxHashMap<String, Arc<IntervalSet>> = sets
        .into_iter()
        .map(|(name, set)| (name, Arc::new(set)))
        .collect();

    for &(alias, target) in data.property_value_aliases {
        if let Some(set) = property_values.get(target).cloned() {
            property_values.entry(alias.to_string()).or_insert(set);
        }
    }

    property_values.insert(
        normalize("ASCII"),
        Arc::new(IntervalSet::from_interval(Interval::new_unchecked(0x00, 0x7F))),
    );
    property_values.insert(
        normalize("Any"),
        Arc::new(IntervalSet::from_interval(Interval::new_unchecked(0x00, MAX_CHAR))),
    );

    property_values
}

/// Decode `(start, end)` pairs, skipping intervals that start above the BMP
/// and clamping those that cross it.
fn unpack_intervals(packed: &[u32]) -> IntervalSet {
    packed
        .chunks_exact(2)
        .filter(|pair| pair[0] <= MAX_CHAR)
        .map(|pair| Interval::new_unchecked(pair[0], pair[1].min(MAX_CHAR)))
        .collect()
}

/// Build the per-code-point caseless lookup. All members of one group point
/// at the same `Arc`.
fn unpack_caseless_matches(data: &UnicodeData) -> Vec<Option<Arc<IntervalSet>>> {
    let size = data.maximum_code_point.min(MAX_CHAR) as usize + 1;
    let mut lookup: Vec<Option<Arc<IntervalSet>>> = vec![None; size];

    let mut groups = 0usize;
    for group in data
        .caseless_match_partitions
        .chunks_exact(data.caseless_match_partition_size)
    {
        let members: SmallVec<[u32; 4]> = group
            .iter()
            .copied()
            .filter(|&c| c > 0 && c <= MAX_CHAR)
            .collect();
        if members.is_empty() {
            continue;
        }

        let set = Arc::new(
            members
                .iter()
                .map(|&c| Interval::new_unchecked(c, c))
                .collect::<IntervalSet>(),
        );
        for &c in &members {
            if let Some(slot) = lookup.get_mut(c as usize) {
                *slot = Some(Arc::clone(&set));
            }
        }
        groups += 1;
    }

    debug!(
        "unpacked {} caseless equivalence classes for Unicode {}",
        groups, data.version
    );
    lookup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: u32, end: u32) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Lower Case_Letter"), "lowercaseletter");
        assert_eq!(normalize("lowercase-letter"), "lowercaseletter");
        assert_eq!(normalize("LOWERCASELETTER"), "lowercaseletter");
        assert_eq!(normalize(" (L) "), "l");
        assert_eq!(normalize("gc : Lu"), "gc=lu");
    }

    #[test]
    fn test_normalize_keeps_non_ascii_spaces() {
        assert_eq!(normalize("Gre\u{00A0}ek"), "gre\u{00A0}ek");
        assert_eq!(normalize("Gre\u{3000}ek"), "gre\u{3000}ek");
        assert_eq!(normalize("\tGre\x0Bek\r\n"), "greek");
        assert!(UnicodeDb::new("6.0")
            .unwrap()
            .get_interval_set("Gre\u{00A0}ek")
            .is_none());
    }

    #[test]
    fn test_default_version() {
        let db = UnicodeDb::with_default_version().unwrap();
        assert_eq!(db.version(), "4.0");
        assert_eq!(db.version(), DEFAULT_UNICODE_VERSION);
        assert!(db.get_interval_set("Lu").is_some());
    }

    #[test]
    fn test_caseless_source_contract() {
        let db = UnicodeDb::new("1.1").unwrap();
        let source: &dyn CaselessSource = &db;
        assert_eq!(source.maximum_code_point(), 0xFFFF);
        assert_eq!(
            source.caseless_matches('a' as u32),
            db.caseless_matches('A' as u32)
        );
    }

    static COLLIDING: UnicodeData = UnicodeData {
        version: "test",
        maximum_code_point: 0xFFFF,
        property_values: &["lu", "greek"],
        intervals: &[&[0x41, 0x5A], &[0x370, 0x3FF]],
        property_value_aliases: &[("greek", "lu"), ("grek", "greek"), ("klingon", "piqad")],
        caseless_match_partitions: &[],
        caseless_match_partition_size: 4,
    };

    #[test]
    fn test_alias_never_overrides_value() {
        let values = bind(&COLLIDING);
        let greek = values.get("greek").unwrap();
        assert!(greek.contains(0x3B1));
        assert!(!greek.contains('A' as u32));
        assert!(Arc::ptr_eq(greek, values.get("grek").unwrap()));
        assert_eq!(values.get("l"), values.get("lu"));
        assert!(!values.contains_key("klingon"));
    }

    #[test]
    fn test_unsupported_version() {
        let err = UnicodeDb::new("7.0").unwrap_err();
        match &err {
            LexClassError::UnsupportedVersion { version, supported } => {
                assert_eq!(version, "7.0");
                assert!(supported.starts_with("1.1, 1.1.5, 2, 2.0"));
                assert!(supported.ends_with("6, 6.0, 6.0.0"));
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(err.to_string().contains("4.0.1"));
    }

    #[test]
    fn test_version_aliases() {
        assert_eq!(UnicodeDb::new("3").unwrap().version(), "3.0");
        assert_eq!(UnicodeDb::new("5.2.0").unwrap().version(), "5.2");
        assert_eq!(UnicodeDb::new("1.1").unwrap().maximum_code_point(), 0xFFFF);
        assert_eq!(UnicodeDb::new("6.0").unwrap().maximum_code_point(), 0x10FFFF);
    }

    #[test]
    fn test_letter_aliases() {
        let db = UnicodeDb::new("6.0").unwrap();
        let letter = db.get_interval_set("Letter").unwrap();
        assert_eq!(Some(letter), db.get_interval_set("L"));
        assert_eq!(Some(letter), db.get_interval_set(" l "));
        assert_eq!(Some(letter), db.get_interval_set("gc=L"));
        assert!(letter.contains('a' as u32));
        assert!(letter.contains(0x3B1));
        assert!(!letter.contains('1' as u32));
    }

    #[test]
    fn test_single_letter_category_is_union() {
        let db = UnicodeDb::new("4.0").unwrap();
        let mut union = IntervalSet::new();
        for name in ["Nd", "Nl", "No"] {
            union.add_set(db.get_interval_set(name).unwrap());
        }
        assert_eq!(db.get_interval_set("N"), Some(&union));
        assert_eq!(db.get_interval_set("Number"), Some(&union));
    }

    #[test]
    fn test_general_category_names() {
        let db = UnicodeDb::new("4.0").unwrap();
        let lu = db.get_interval_set("Lu").unwrap();
        assert!(lu.contains('A' as u32));
        assert!(!lu.contains('a' as u32));
        assert_eq!(db.get_interval_set("Uppercase Letter"), Some(lu));
        assert_eq!(db.get_interval_set("General_Category:Lu"), Some(lu));

        let nd = db.get_interval_set("digit").unwrap();
        assert!(nd.contains('0' as u32));
        assert_eq!(db.get_interval_set("Decimal_Number"), Some(nd));
    }

    #[test]
    fn test_scripts() {
        let db = UnicodeDb::new("4.0").unwrap();
        let greek = db.get_interval_set("Greek").unwrap();
        assert!(greek.contains(0x3B1));
        assert!(!greek.contains('a' as u32));
        assert_eq!(db.get_interval_set("Grek"), Some(greek));
        assert_eq!(db.get_interval_set("sc=Greek"), Some(greek));
        assert_eq!(db.get_interval_set("script:grek"), Some(greek));
        assert!(db.get_interval_set("Klingon").is_none());
    }

    #[test]
    fn test_version_restricts_repertoire() {
        // NKo was added in Unicode 5.0.
        assert!(UnicodeDb::new("4.1").unwrap().get_interval_set("Nko").is_none());
        let nko = UnicodeDb::new("5.0").unwrap();
        assert!(nko.get_interval_set("Nko").unwrap().contains(0x7C0));
    }

    #[test]
    fn test_binary_properties() {
        let db = UnicodeDb::new("6.0").unwrap();
        let space = db.get_interval_set("White_Space").unwrap();
        assert!(space.contains(' ' as u32));
        assert!(space.contains(0x3000));
        assert_eq!(db.get_interval_set("wspace"), Some(space));
        assert!(db.get_interval_set("alpha").unwrap().contains('x' as u32));
    }

    #[test]
    fn test_supplementary_intervals_clamped() {
        let set = unpack_intervals(&[0x41, 0x5A, 0xFFF0, 0x10010, 0x10400, 0x1044F]);
        assert_eq!(
            set.intervals().collect::<Vec<_>>(),
            vec![iv(0x41, 0x5A), iv(0xFFF0, 0xFFFF)]
        );
    }

    #[test]
    fn test_invariant_sets() {
        for version in supported_versions() {
            let db = UnicodeDb::new(version).unwrap();
            assert_eq!(
                db.get_interval_set("ASCII"),
                Some(&IntervalSet::from_interval(iv(0, 0x7F))),
                "{}",
                version
            );
            assert_eq!(
                db.get_interval_set("any"),
                Some(&IntervalSet::from_interval(iv(0, 0xFFFF))),
                "{}",
                version
            );
        }
    }

    #[test]
    fn test_property_values_listing() {
        let db = UnicodeDb::new("6.0").unwrap();
        let names: Vec<&str> = db.property_values().collect();
        for expected in ["lu", "l", "letter", "greek", "grek", "ascii", "any", "whitespace"] {
            assert!(names.contains(&expected), "missing {}", expected);
        }
        assert!(names.iter().all(|n| *n == normalize(n)));
    }

    #[test]
    fn test_caseless_matches() {
        let db = UnicodeDb::new("4.0").unwrap();
        let a = db.caseless_matches('A' as u32).unwrap();
        assert_eq!(a.intervals().collect::<Vec<_>>(), vec![iv(0x41, 0x41), iv(0x61, 0x61)]);

        let k = db.caseless_matches('k' as u32).unwrap();
        assert!(k.contains('K' as u32));
        assert!(k.contains(0x212A));

        assert!(db.caseless_matches('1' as u32).is_none());
        assert!(db.caseless_matches(0x10FFFF).is_none());
    }

    #[test]
    fn test_caseless_matches_shared_per_class() {
        let db = UnicodeDb::new("6.0").unwrap();
        let upper = db.caseless_matches(0x3A3).unwrap();
        let lower = db.caseless_matches(0x3C3).unwrap();
        let final_sigma = db.caseless_matches(0x3C2).unwrap();
        assert!(std::ptr::eq(upper, lower));
        assert!(std::ptr::eq(upper, final_sigma));
        assert_eq!(upper.num_chars(), 3);
    }

    #[test]
    fn test_shared_cache_resolves_aliases() {
        let a = UnicodeDb::shared("5").unwrap();
        let b = UnicodeDb::shared("5.0.0").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.version(), "5.0");
        assert!(UnicodeDb::shared("9.0").is_err());
    }
}
