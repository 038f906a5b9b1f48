//! Sets of code points stored as sorted, disjoint, non-adjacent intervals.
//!
//! The representation is canonical: two sets with the same members always
//! hold the same interval sequence, so structural equality is set equality.
//! All operations are linear merges over the two interval lists.

use std::fmt;

use crate::interval::{Interval, MAX_CHAR};
use crate::LexClassError;

/// Source of caseless equivalence classes, used to fold a set so that
/// upper, lower and title case variants land in the same character class.
///
/// [`UnicodeDb`](crate::UnicodeDb) is the production implementation.
pub trait CaselessSource {
    /// All code points caselessly equivalent to `c`, including `c` itself,
    /// or `None` if `c` is only equivalent to itself.
    fn caseless_matches(&self, c: u32) -> Option<&IntervalSet>;

    /// The largest code point the source has data for. Callers use it to
    /// size per-code-point lookups.
    fn maximum_code_point(&self) -> u32;
}

/// A set of code points in `[0, MAX_CHAR]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntervalSet {
    /// Sorted by start; `next.start > cur.end + 1` for neighbours.
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Create the set containing only `c`.
    pub fn from_char(c: u32) -> Result<Self, LexClassError> {
        Ok(Self::from_interval(Interval::single(c)?))
    }

    /// Create the set containing exactly the members of `interval`.
    pub fn from_interval(interval: Interval) -> Self {
        Self {
            intervals: vec![interval],
        }
    }

    /// Create a set from intervals in any order, overlapping or not.
    pub fn from_intervals<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = Interval>,
    {
        let mut sorted: Vec<Interval> = intervals.into_iter().collect();
        sorted.sort_unstable();

        let mut canonical = Vec::with_capacity(sorted.len());
        for interval in sorted {
            push_merged(&mut canonical, interval);
        }
        Self {
            intervals: canonical,
        }
    }

    /// The whole alphabet `[0, max]`, clamped to `MAX_CHAR`.
    pub(crate) fn alphabet(max: u32) -> Self {
        Self::from_interval(Interval::new_unchecked(0, max.min(MAX_CHAR)))
    }

    /// Membership test.
    pub fn contains(&self, c: u32) -> bool {
        let idx = self.intervals.partition_point(|iv| iv.end() < c);
        self.intervals
            .get(idx)
            .is_some_and(|iv| iv.start() <= c)
    }

    /// Returns true if the set has at least one member.
    #[inline]
    pub fn has_elements(&self) -> bool {
        !self.intervals.is_empty()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of intervals in the canonical representation.
    #[inline]
    pub fn num_intervals(&self) -> usize {
        self.intervals.len()
    }

    /// Number of code points in the set.
    pub fn num_chars(&self) -> usize {
        self.intervals.iter().map(Interval::len).sum()
    }

    /// The intervals of the set in ascending order.
    pub fn intervals(&self) -> impl ExactSizeIterator<Item = Interval> + '_ {
        self.intervals.iter().copied()
    }

    /// A rewindable cursor over the intervals of the set.
    pub fn cursor(&self) -> IntervalCursor<'_> {
        IntervalCursor {
            intervals: &self.intervals,
            pos: 0,
        }
    }

    /// Add a single code point.
    pub fn add_char(&mut self, c: u32) -> Result<(), LexClassError> {
        self.add_interval(Interval::single(c)?);
        Ok(())
    }

    /// Union with one interval.
    pub fn add_interval(&mut self, interval: Interval) {
        let mut start = interval.start();
        let mut end = interval.end();

        // First interval that touches or follows the new one.
        let lo = self.intervals.partition_point(|iv| iv.end() + 1 < start);
        let mut hi = lo;
        while hi < self.intervals.len() && self.intervals[hi].start() <= end + 1 {
            start = start.min(self.intervals[hi].start());
            end = end.max(self.intervals[hi].end());
            hi += 1;
        }

        self.intervals
            .splice(lo..hi, std::iter::once(Interval::new_unchecked(start, end)));
    }

    /// Union with another set.
    pub fn add_set(&mut self, other: &IntervalSet) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.intervals = other.intervals.clone();
            return;
        }

        let mut merged = Vec::with_capacity(self.intervals.len() + other.intervals.len());
        let (mut i, mut j) = (0, 0);
        while i < self.intervals.len() || j < other.intervals.len() {
            let take_self = match (self.intervals.get(i), other.intervals.get(j)) {
                (Some(a), Some(b)) => a.start() <= b.start(),
                (Some(_), None) => true,
                _ => false,
            };
            if take_self {
                push_merged(&mut merged, self.intervals[i]);
                i += 1;
            } else {
                push_merged(&mut merged, other.intervals[j]);
                j += 1;
            }
        }
        self.intervals = merged;
    }

    /// Intersection, returned as a new set.
    pub fn and(&self, other: &IntervalSet) -> IntervalSet {
        let mut result = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < self.intervals.len() && j < other.intervals.len() {
            let a = self.intervals[i];
            let b = other.intervals[j];

            let start = a.start().max(b.start());
            let end = a.end().min(b.end());
            if start <= end {
                result.push(Interval::new_unchecked(start, end));
            }

            // Advance whichever interval finishes first.
            if a.end() < b.end() {
                i += 1;
            } else {
                j += 1;
            }
        }

        IntervalSet { intervals: result }
    }

    /// Difference: removes every member of `other` from this set.
    pub fn sub(&mut self, other: &IntervalSet) {
        if self.is_empty() || other.is_empty() {
            return;
        }

        let mut result = Vec::with_capacity(self.intervals.len() + 1);
        let mut j = 0;

        for interval in &self.intervals {
            let mut start = interval.start();
            let end = interval.end();

            while j < other.intervals.len() && other.intervals[j].end() < start {
                j += 1;
            }

            let mut remaining = true;
            let mut k = j;
            while k < other.intervals.len() && other.intervals[k].start() <= end {
                let cut = other.intervals[k];
                if cut.start() > start {
                    result.push(Interval::new_unchecked(start, cut.start() - 1));
                }
                if cut.end() >= end {
                    // `cut` may also overlap the next interval, so keep it.
                    remaining = false;
                    break;
                }
                start = cut.end() + 1;
                k += 1;
            }
            j = k;

            if remaining {
                result.push(Interval::new_unchecked(start, end));
            }
        }

        self.intervals = result;
    }

    /// The set obtained by replacing every member with all of its caseless
    /// equivalents.
    pub fn caseless<S>(&self, source: &S) -> IntervalSet
    where
        S: CaselessSource + ?Sized,
    {
        let mut result = self.clone();
        for interval in &self.intervals {
            for c in interval.iter() {
                if let Some(matches) = source.caseless_matches(c) {
                    result.add_set(matches);
                }
            }
        }
        result
    }
}

/// Append `interval` to a list sorted by start, merging it into the last
/// entry when they overlap or touch.
fn push_merged(out: &mut Vec<Interval>, interval: Interval) {
    if let Some(last) = out.last_mut() {
        if interval.start() <= last.end() + 1 {
            if interval.end() > last.end() {
                *last = Interval::new_unchecked(last.start(), interval.end());
            }
            return;
        }
    }
    out.push(interval);
}

impl From<Interval> for IntervalSet {
    fn from(interval: Interval) -> Self {
        Self::from_interval(interval)
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self::from_intervals(iter)
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for interval in &self.intervals {
            write!(f, "{}", interval)?;
        }
        f.write_str(" }")
    }
}

/// Cursor over the intervals of one set.
///
/// Unlike a plain iterator it can be rewound and walked again; the
/// partitioner keeps one per class while it tiles the alphabet.
#[derive(Debug, Clone)]
pub struct IntervalCursor<'a> {
    intervals: &'a [Interval],
    pos: usize,
}

impl IntervalCursor<'_> {
    /// Move back to the first interval.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }
}

impl Iterator for IntervalCursor<'_> {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        let interval = self.intervals.get(self.pos).copied()?;
        self.pos += 1;
        Some(interval)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.intervals.len() - self.pos;
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;

    use super::*;

    fn iv(start: u32, end: u32) -> Interval {
        Interval::new(start, end).unwrap()
    }

    fn set(pairs: &[(u32, u32)]) -> IntervalSet {
        pairs.iter().map(|&(s, e)| iv(s, e)).collect()
    }

    fn pairs(set: &IntervalSet) -> Vec<(u32, u32)> {
        set.intervals().map(|i| (i.start(), i.end())).collect()
    }

    /// Caseless source backed by explicit equivalence groups.
    struct Groups {
        lookup: FxHashMap<u32, IntervalSet>,
    }

    impl Groups {
        fn new(groups: &[&[u32]]) -> Self {
            let mut lookup = FxHashMap::default();
            for group in groups {
                let members: IntervalSet = group.iter().map(|&c| iv(c, c)).collect();
                for &c in group.iter() {
                    lookup.insert(c, members.clone());
                }
            }
            Self { lookup }
        }
    }

    impl CaselessSource for Groups {
        fn caseless_matches(&self, c: u32) -> Option<&IntervalSet> {
            self.lookup.get(&c)
        }

        fn maximum_code_point(&self) -> u32 {
            MAX_CHAR
        }
    }

    #[test]
    fn test_from_intervals_canonicalizes() {
        let s = set(&[(10, 20), (0, 5), (21, 30), (3, 8), (40, 40)]);
        assert_eq!(pairs(&s), vec![(0, 8), (10, 30), (40, 40)]);
    }

    #[test]
    fn test_equality_is_set_equality() {
        let a = set(&[(0, 4), (5, 9)]);
        let b = set(&[(0, 9)]);
        assert_eq!(a, b);
        assert_ne!(a, set(&[(0, 8)]));
    }

    #[test]
    fn test_contains() {
        let s = set(&[(0x41, 0x5A), (0x61, 0x7A)]);
        assert!(s.contains(0x41));
        assert!(s.contains(0x5A));
        assert!(s.contains(0x70));
        assert!(!s.contains(0x5B));
        assert!(!s.contains(0x7B));
        assert!(!IntervalSet::new().contains(0));
    }

    #[test]
    fn test_add_interval_merges_neighbours() {
        let mut s = set(&[(0, 2), (6, 8), (12, 14)]);
        s.add_interval(iv(3, 5));
        assert_eq!(pairs(&s), vec![(0, 8), (12, 14)]);

        s.add_interval(iv(10, 20));
        assert_eq!(pairs(&s), vec![(0, 8), (10, 20)]);

        s.add_interval(iv(30, 31));
        assert_eq!(pairs(&s), vec![(0, 8), (10, 20), (30, 31)]);

        s.add_interval(iv(0, 0xFFFF));
        assert_eq!(pairs(&s), vec![(0, 0xFFFF)]);
    }

    #[test]
    fn test_add_set() {
        let mut s = set(&[(0, 2), (10, 12)]);
        s.add_set(&set(&[(3, 4), (8, 9), (20, 25)]));
        assert_eq!(pairs(&s), vec![(0, 4), (8, 12), (20, 25)]);

        let mut empty = IntervalSet::new();
        empty.add_set(&s);
        assert_eq!(empty, s);
    }

    #[test]
    fn test_and() {
        let a = set(&[(0, 10), (20, 30), (40, 50)]);
        let b = set(&[(5, 25), (45, 60)]);
        assert_eq!(pairs(&a.and(&b)), vec![(5, 10), (20, 25), (45, 50)]);
        assert!(!a.and(&set(&[(11, 19)])).has_elements());
    }

    #[test]
    fn test_sub_splits_intervals() {
        let mut s = set(&[(0, 100)]);
        s.sub(&set(&[(10, 20), (30, 30), (90, 200)]));
        assert_eq!(pairs(&s), vec![(0, 9), (21, 29), (31, 89)]);
    }

    #[test]
    fn test_sub_cut_spanning_intervals() {
        let mut s = set(&[(0, 10), (20, 30), (40, 50)]);
        s.sub(&set(&[(5, 45)]));
        assert_eq!(pairs(&s), vec![(0, 4), (46, 50)]);
    }

    #[test]
    fn test_sub_everything() {
        let mut s = set(&[(3, 4), (8, 9)]);
        s.sub(&set(&[(0, 0xFFFF)]));
        assert!(s.is_empty());
    }

    #[test]
    fn test_num_chars() {
        assert_eq!(set(&[(0, 9), (20, 20)]).num_chars(), 11);
    }

    #[test]
    fn test_caseless() {
        let groups = Groups::new(&[&[0x41, 0x61], &[0x4B, 0x6B, 0x212A]]);
        let s = set(&[(0x41, 0x41), (0x6B, 0x6B), (0x30, 0x31)]);
        let folded = s.caseless(&groups);
        assert_eq!(
            pairs(&folded),
            vec![(0x30, 0x31), (0x41, 0x41), (0x4B, 0x4B), (0x61, 0x61), (0x6B, 0x6B), (0x212A, 0x212A)]
        );
    }

    #[test]
    fn test_cursor_rewind() {
        let s = set(&[(0, 1), (5, 6)]);
        let mut cursor = s.cursor();
        assert_eq!(cursor.next(), Some(iv(0, 1)));
        assert_eq!(cursor.next(), Some(iv(5, 6)));
        assert_eq!(cursor.next(), None);
        cursor.rewind();
        assert_eq!(cursor.next(), Some(iv(0, 1)));
    }

    #[test]
    fn test_display() {
        let s = set(&[('a' as u32, 'z' as u32), (0x0A, 0x0A)]);
        assert_eq!(s.to_string(), "{ [\\u000A]['a'-'z'] }");
    }
}
