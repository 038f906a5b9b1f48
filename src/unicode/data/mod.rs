//! Packed Unicode property tables, one module per supported version.
//!
//! Each property value's intervals are a flat list of `(start, end)` code
//! point pairs. Caseless equivalence classes are a flat list of code points
//! in fixed-width groups of `caseless_match_partition_size`, padded with `0`.
//! Both may contain supplementary code points; the decoder drops or clamps
//! them to the BMP.

use std::fmt;

mod unicode_1_1;
mod unicode_2_0;
mod unicode_2_1;
mod unicode_3_0;
mod unicode_3_1;
mod unicode_3_2;
mod unicode_4_0;
mod unicode_4_1;
mod unicode_5_0;
mod unicode_5_1;
mod unicode_5_2;
mod unicode_6_0;

/// Packed property data for one Unicode version.
pub(crate) struct UnicodeData {
    /// Canonical version string, e.g. `"4.0"`.
    pub version: &'static str,
    pub maximum_code_point: u32,
    /// Normalized property value names, parallel to `intervals`.
    pub property_values: &'static [&'static str],
    pub intervals: &'static [&'static [u32]],
    /// `(alias, property value)` pairs, both normalized.
    pub property_value_aliases: &'static [(&'static str, &'static str)],
    pub caseless_match_partitions: &'static [u32],
    pub caseless_match_partition_size: usize,
}

impl fmt::Debug for UnicodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnicodeData")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

/// Every accepted version string, grouped by the table it selects.
static VERSIONS: &[(&[&str], &UnicodeData)] = &[
    (&["1.1", "1.1.5"], &unicode_1_1::UNICODE_1_1),
    (&["2", "2.0", "2.0.14"], &unicode_2_0::UNICODE_2_0),
    (&["2.1", "2.1.9"], &unicode_2_1::UNICODE_2_1),
    (&["3", "3.0", "3.0.1"], &unicode_3_0::UNICODE_3_0),
    (&["3.1", "3.1.0"], &unicode_3_1::UNICODE_3_1),
    (&["3.2", "3.2.0"], &unicode_3_2::UNICODE_3_2),
    (&["4", "4.0", "4.0.1"], &unicode_4_0::UNICODE_4_0),
    (&["4.1", "4.1.0"], &unicode_4_1::UNICODE_4_1),
    (&["5", "5.0", "5.0.0"], &unicode_5_0::UNICODE_5_0),
    (&["5.1", "5.1.0"], &unicode_5_1::UNICODE_5_1),
    (&["5.2", "5.2.0"], &unicode_5_2::UNICODE_5_2),
    (&["6", "6.0", "6.0.0"], &unicode_6_0::UNICODE_6_0),
];

/// Find the table for a version string or one of its aliases.
pub(crate) fn lookup(version: &str) -> Option<&'static UnicodeData> {
    VERSIONS
        .iter()
        .find(|(names, _)| names.contains(&version))
        .map(|(_, data)| *data)
}

/// All accepted version strings, in release order.
pub(crate) fn version_names() -> impl Iterator<Item = &'static str> {
    VERSIONS.iter().flat_map(|(names, _)| names.iter().copied())
}

/// Canonical version strings, in release order.
pub(crate) fn canonical_versions() -> impl Iterator<Item = &'static str> {
    VERSIONS.iter().map(|(_, data)| data.version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_aliases() {
        assert_eq!(lookup("4").map(|d| d.version), Some("4.0"));
        assert_eq!(lookup("4.0.1").map(|d| d.version), Some("4.0"));
        assert_eq!(lookup("1.1.5").map(|d| d.version), Some("1.1"));
        assert!(lookup("7.0").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_tables_are_well_formed() {
        for (_, data) in VERSIONS {
            assert_eq!(data.property_values.len(), data.intervals.len(), "{}", data.version);
            for packed in data.intervals {
                assert_eq!(packed.len() % 2, 0, "{}", data.version);
                for pair in packed.chunks(2) {
                    assert!(pair[0] <= pair[1], "{}", data.version);
                }
            }
            for (alias, _) in data.property_value_aliases {
                assert!(
                    !data.property_values.contains(alias),
                    "{}: alias {} shadows a property value",
                    data.version,
                    alias
                );
            }
            let k = data.caseless_match_partition_size;
            assert!(k >= 2);
            assert_eq!(data.caseless_match_partitions.len() % k, 0, "{}", data.version);
        }
    }

    #[test]
    fn test_canonical_versions() {
        let versions: Vec<_> = canonical_versions().collect();
        assert_eq!(
            versions,
            vec!["1.1", "2.0", "2.1", "3.0", "3.1", "3.2", "4.0", "4.1", "5.0", "5.1", "5.2", "6.0"]
        );
        assert_eq!(version_names().count(), 29);
    }
}
