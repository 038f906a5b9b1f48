//! Partitioning of the input alphabet into character classes.
//!
//! Every character set that appears in a scanner specification refines the
//! partition, so that in the end each set is an exact union of classes and
//! two characters in the same class are indistinguishable by the scanner.
//! The generated automaton then transitions on class codes instead of
//! characters.
//!
//! ```
//! use lexclass::{IntervalSet, Interval, Partitioner};
//!
//! let mut classes = Partitioner::new(0xFF, None)?;
//! classes.make_class(IntervalSet::from_interval(Interval::from_chars('a', 'z')?), false)?;
//! classes.make_class_char('x', false)?;
//!
//! assert_eq!(classes.num_classes(), 3);
//! assert_eq!(classes.class_code('a' as u32)?, classes.class_code('b' as u32)?);
//! assert_ne!(classes.class_code('a' as u32)?, classes.class_code('x' as u32)?);
//! # Ok::<(), lexclass::LexClassError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use log::trace;

use crate::interval::{code_point, fmt_code_point, Interval, MAX_CHAR};
use crate::interval_set::{CaselessSource, IntervalCursor, IntervalSet};
use crate::unicode::UnicodeDb;
use crate::LexClassError;

#[cfg(test)]
mod tests;

/// Input character width of a generated scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharWidth {
    /// `%7bit`: code points `0..=0x7F`.
    SevenBit,
    /// `%8bit`: code points `0..=0xFF`.
    EightBit,
    /// `%unicode`: the whole BMP.
    Unicode,
}

impl CharWidth {
    /// Largest code point of this width.
    pub fn max_char_code(self) -> u32 {
        match self {
            CharWidth::SevenBit => 0x7F,
            CharWidth::EightBit => 0xFF,
            CharWidth::Unicode => MAX_CHAR,
        }
    }
}

/// One entry of the class table: every code point in `[start, end]` has
/// class `class_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharClassInterval {
    pub start: u32,
    pub end: u32,
    pub class_code: usize,
}

impl fmt::Display for CharClassInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        fmt_code_point(self.start, f)?;
        f.write_str("-")?;
        fmt_code_point(self.end, f)?;
        write!(f, "={}]", self.class_code)
    }
}

/// Partition of `[0, max_char_code]` into disjoint, non-empty classes.
///
/// Class codes are indices into the partition and never change once
/// assigned: refinement shrinks existing classes and appends new ones.
/// Class 0 always exists and holds every character no refinement has
/// singled out.
///
/// `S` supplies caseless equivalents for case-insensitive refinements and
/// defaults to [`UnicodeDb`].
#[derive(Debug)]
pub struct Partitioner<S: ?Sized = UnicodeDb> {
    classes: Vec<IntervalSet>,
    max_char_used: u32,
    caseless_source: Option<Arc<S>>,
}

impl Partitioner<UnicodeDb> {
    /// Create a partition with the single class `[0, max_char_code]`.
    ///
    /// `db` is only consulted for caseless refinements and may be `None`
    /// if there are none. Fails with [`LexClassError::InvalidRange`] if
    /// `max_char_code` lies above the BMP.
    pub fn new(max_char_code: u32, db: Option<Arc<UnicodeDb>>) -> Result<Self, LexClassError> {
        Self::with_source(max_char_code, db)
    }

    /// Create a partition for the alphabet of a scanner of the given width.
    pub fn with_width(width: CharWidth, db: Option<Arc<UnicodeDb>>) -> Self {
        Self::from_parts(width.max_char_code(), db)
    }
}

impl<S: CaselessSource + ?Sized> Partitioner<S> {
    /// Like [`Partitioner::new`], with any [`CaselessSource`].
    pub fn with_source(max_char_code: u32, source: Option<Arc<S>>) -> Result<Self, LexClassError> {
        if max_char_code > MAX_CHAR {
            return Err(LexClassError::InvalidRange {
                value: max_char_code,
                max: MAX_CHAR,
            });
        }
        Ok(Self::from_parts(max_char_code, source))
    }

    fn from_parts(max_char_code: u32, caseless_source: Option<Arc<S>>) -> Self {
        Self {
            classes: vec![IntervalSet::alphabet(max_char_code)],
            max_char_used: max_char_code,
            caseless_source,
        }
    }

    /// Largest code point of the alphabet.
    pub fn max_char_code(&self) -> u32 {
        self.max_char_used
    }

    /// Change the alphabet to `[0, max_char_code]` after classes exist.
    ///
    /// Widening adds the new code points to class 0. Narrowing clips every
    /// class to the new alphabet and fails with
    /// [`LexClassError::EmptiedClass`], leaving the partition unchanged, if
    /// a class would lose all its members.
    pub fn set_max_char_code(&mut self, max_char_code: u32) -> Result<(), LexClassError> {
        if max_char_code > MAX_CHAR {
            return Err(LexClassError::InvalidRange {
                value: max_char_code,
                max: MAX_CHAR,
            });
        }

        if max_char_code > self.max_char_used {
            let added = Interval::new_unchecked(self.max_char_used + 1, max_char_code);
            if let Some(rest) = self.classes.first_mut() {
                rest.add_interval(added);
            }
        } else if max_char_code < self.max_char_used {
            let alphabet = IntervalSet::alphabet(max_char_code);
            let clipped: Vec<IntervalSet> =
                self.classes.iter().map(|class| class.and(&alphabet)).collect();
            if let Some(code) = clipped.iter().position(|class| !class.has_elements()) {
                return Err(LexClassError::EmptiedClass {
                    code,
                    max: max_char_code,
                });
            }
            self.classes = clipped;
        }

        trace!(
            "alphabet changed from U+{:04X} to U+{:04X}",
            self.max_char_used,
            max_char_code
        );
        self.max_char_used = max_char_code;
        Ok(())
    }

    /// Current number of classes.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// The class with code `code`, if it exists.
    pub fn class(&self, code: usize) -> Option<&IntervalSet> {
        self.classes.get(code)
    }

    /// All classes in class code order.
    pub fn classes(&self) -> impl ExactSizeIterator<Item = &IntervalSet> + '_ {
        self.classes.iter()
    }

    /// Refine the partition so that `set` becomes a union of classes.
    ///
    /// With `caseless`, `set` is first extended by every caseless
    /// equivalent of its members, which requires a caseless source. The
    /// set is clipped to the alphabet before refining.
    pub fn make_class(&mut self, set: IntervalSet, caseless: bool) -> Result<(), LexClassError> {
        let set = if caseless {
            set.caseless(self.caseless_source()?)
        } else {
            set
        };
        let set = set.and(&IntervalSet::alphabet(self.max_char_used));

        self.refine(set);
        trace!("{} classes after refinement", self.classes.len());
        Ok(())
    }

    /// Refine by the single character `c`.
    pub fn make_class_char(&mut self, c: char, caseless: bool) -> Result<(), LexClassError> {
        let set = IntervalSet::from_interval(Interval::single(code_point(c)?)?);
        self.make_class(set, caseless)
    }

    /// Refine by each character of `s` in turn.
    pub fn make_class_str(&mut self, s: &str, caseless: bool) -> Result<(), LexClassError> {
        for c in s.chars() {
            self.make_class_char(c, caseless)?;
        }
        Ok(())
    }

    /// Refine by the union of `intervals`.
    pub fn make_class_intervals<I>(&mut self, intervals: I, caseless: bool) -> Result<(), LexClassError>
    where
        I: IntoIterator<Item = Interval>,
    {
        self.make_class(IntervalSet::from_intervals(intervals), caseless)
    }

    /// Refine for a negated class `[^...]` over `intervals`.
    ///
    /// The partition needed for a set and for its complement is the same,
    /// so this refines by the intervals themselves; the complement is taken
    /// when reading codes back with [`not_class_codes`](Self::not_class_codes).
    pub fn make_class_not<I>(&mut self, intervals: I, caseless: bool) -> Result<(), LexClassError>
    where
        I: IntoIterator<Item = Interval>,
    {
        self.make_class_intervals(intervals, caseless)
    }

    /// The class code of `c`.
    ///
    /// Fails with [`LexClassError::InvalidRange`] if `c` lies outside the
    /// alphabet.
    pub fn class_code(&self, c: u32) -> Result<usize, LexClassError> {
        self.classes
            .iter()
            .position(|class| class.contains(c))
            .ok_or(LexClassError::InvalidRange {
                value: c,
                max: self.max_char_used,
            })
    }

    /// Codes of all classes intersecting `set`, ascending.
    ///
    /// For a set that has been passed to [`make_class`](Self::make_class)
    /// these classes cover it exactly.
    pub fn class_codes(&self, set: &IntervalSet) -> Vec<usize> {
        self.codes(set, false)
    }

    /// Codes of all classes disjoint from `set`, ascending: the classes of
    /// the complement of `set`.
    pub fn not_class_codes(&self, set: &IntervalSet) -> Vec<usize> {
        self.codes(set, true)
    }

    fn codes(&self, set: &IntervalSet, negate: bool) -> Vec<usize> {
        self.classes
            .iter()
            .enumerate()
            .filter(|(_, class)| class.and(set).has_elements() != negate)
            .map(|(code, _)| code)
            .collect()
    }

    /// The class table: maximal runs of code points with the same class,
    /// tiling `[0, max_char_code]` in ascending order.
    pub fn intervals(&self) -> Vec<CharClassInterval> {
        let mut cursors: Vec<IntervalCursor<'_>> =
            self.classes.iter().map(IntervalSet::cursor).collect();
        let mut result = Vec::new();

        let mut start = 0;
        while start <= self.max_char_used {
            let Ok(code) = self.class_code(start) else {
                break;
            };
            // Runs come in ascending order, so each cursor only moves forward.
            let Some(interval) = cursors[code].find(|interval| interval.contains(start)) else {
                break;
            };
            result.push(CharClassInterval {
                start,
                end: interval.end(),
                class_code: code,
            });
            start = interval.end() + 1;
        }

        result
    }

    /// Assert that the classes are non-empty, pairwise disjoint and cover
    /// exactly `[0, max_char_code]`.
    ///
    /// # Panics
    ///
    /// Panics on any violation.
    pub fn check(&self) {
        let mut covered = IntervalSet::new();
        for (i, class) in self.classes.iter().enumerate() {
            assert!(class.has_elements(), "class {} is empty", i);
            for (j, other) in self.classes.iter().enumerate().skip(i + 1) {
                assert!(
                    !class.and(other).has_elements(),
                    "classes {} and {} overlap: {} {}",
                    i,
                    j,
                    class,
                    other
                );
            }
            covered.add_set(class);
        }
        assert_eq!(
            covered,
            IntervalSet::alphabet(self.max_char_used),
            "classes do not cover the alphabet"
        );
    }

    fn caseless_source(&self) -> Result<&S, LexClassError> {
        self.caseless_source
            .as_deref()
            .ok_or(LexClassError::NoCaselessSource)
    }

    /// Split classes until `set` is a union of classes. Only classes that
    /// existed on entry are visited; pieces split off are appended.
    fn refine(&mut self, mut set: IntervalSet) {
        trace!("refining with {}", set);

        let old_size = self.classes.len();
        for i in 0..old_size {
            if !set.has_elements() {
                return;
            }

            let class = &self.classes[i];
            if *class == set {
                return;
            }

            let common = class.and(&set);
            if !common.has_elements() {
                continue;
            }

            if *class == common {
                // class lies inside set and stays whole
                set.sub(&common);
                continue;
            }

            if set == common {
                // set lies inside class
                self.classes[i].sub(&common);
                self.classes.push(common);
                return;
            }

            set.sub(&common);
            self.classes[i].sub(&common);
            self.classes.push(common);
        }
    }
}

impl<S: ?Sized> fmt::Display for Partitioner<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CharClasses:")?;
        for (i, class) in self.classes.iter().enumerate() {
            writeln!(f, "class {}:", i)?;
            writeln!(f, "{}", class)?;
        }
        Ok(())
    }
}
