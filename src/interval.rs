//! Closed code point intervals.
//!
//! Code points are restricted to the Basic Multilingual Plane. They are held
//! as `u32` rather than `char` because the alphabet of a generated scanner
//! includes the surrogate range `0xD800..=0xDFFF`, which `char` cannot hold.

use std::fmt;

use crate::LexClassError;

/// The largest code point that can appear in a character class.
pub const MAX_CHAR: u32 = 0xFFFF;

/// An inclusive range `[start, end]` of code points with
/// `start <= end <= MAX_CHAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    start: u32,
    end: u32,
}

impl Interval {
    /// Create the interval `[start, end]`.
    ///
    /// Fails with [`LexClassError::InvalidInterval`] if `start > end` or
    /// `end > MAX_CHAR`.
    pub fn new(start: u32, end: u32) -> Result<Self, LexClassError> {
        if start > end || end > MAX_CHAR {
            return Err(LexClassError::InvalidInterval { lo: start, hi: end });
        }
        Ok(Self { start, end })
    }

    /// Create the interval containing only `c`.
    pub fn single(c: u32) -> Result<Self, LexClassError> {
        Self::new(c, c)
    }

    /// Create an interval from two `char` bounds.
    pub fn from_chars(start: char, end: char) -> Result<Self, LexClassError> {
        Self::new(start as u32, end as u32)
    }

    /// Caller guarantees `start <= end <= MAX_CHAR`.
    pub(crate) const fn new_unchecked(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of code points in the interval.
    #[inline]
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Intervals are never empty; provided for symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn contains(&self, c: u32) -> bool {
        self.start <= c && c <= self.end
    }

    /// Iterate over every code point in the interval.
    pub fn iter(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

/// Convert a `char` to a BMP code point.
///
/// Fails with [`LexClassError::InvalidRange`] for supplementary characters.
pub fn code_point(c: char) -> Result<u32, LexClassError> {
    let value = c as u32;
    if value > MAX_CHAR {
        return Err(LexClassError::InvalidRange {
            value,
            max: MAX_CHAR,
        });
    }
    Ok(value)
}

/// Writes a code point the way character classes are dumped: printable
/// ASCII as a quoted character, everything else as `\uXXXX`.
pub(crate) fn fmt_code_point(c: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match char::from_u32(c) {
        Some(ch) if ch.is_ascii_graphic() || ch == ' ' => write!(f, "'{}'", ch),
        _ => write!(f, "\\u{:04X}", c),
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        fmt_code_point(self.start, f)?;
        if self.start != self.end {
            f.write_str("-")?;
            fmt_code_point(self.end, f)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let iv = Interval::new(0x41, 0x5A).unwrap();
        assert_eq!(iv.start(), 0x41);
        assert_eq!(iv.end(), 0x5A);
        assert_eq!(iv.len(), 26);
        assert!(iv.contains('M' as u32));
        assert!(!iv.contains('a' as u32));
    }

    #[test]
    fn test_new_reversed_bounds() {
        assert_eq!(
            Interval::new(0x5A, 0x41),
            Err(LexClassError::InvalidInterval { lo: 0x5A, hi: 0x41 })
        );
    }

    #[test]
    fn test_new_out_of_range() {
        assert!(Interval::new(0xFFFF, 0x10000).is_err());
        assert!(Interval::single(MAX_CHAR).is_ok());
    }

    #[test]
    fn test_code_point_rejects_supplementary() {
        assert_eq!(code_point('a'), Ok(0x61));
        assert_eq!(
            code_point('\u{1F600}'),
            Err(LexClassError::InvalidRange {
                value: 0x1F600,
                max: MAX_CHAR
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::from_chars('a', 'z').unwrap().to_string(), "['a'-'z']");
        assert_eq!(Interval::single(0x0A).unwrap().to_string(), "[\\u000A]");
    }
}
