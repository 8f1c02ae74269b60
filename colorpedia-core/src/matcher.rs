//! Query resolution against the reference table.
//!
//! Resolution order: exact name match, exact hex match, nearest-neighbor by
//! Euclidean RGB distance. All comparisons are case-insensitive, and every
//! tie-break is first-occurrence-in-snapshot-order, so resolution is fully
//! deterministic. The whole routine is a pure function of the dataset and
//! the query: no scratch state, safe under arbitrary concurrency.

use crate::dataset::ColorDataset;
use crate::error::MatchError;
use crate::record::ColorRecord;

/// The outcome of resolving a query string.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult<'a> {
    /// The query equals a record's name or hex code. No distance applies.
    Exact(&'a ColorRecord),

    /// No exact match; `record` minimizes Euclidean RGB distance to the
    /// parsed query color. `distance` is `>= 0`, and `0` only when the query
    /// triple equals the record's triple without matching its stored hex
    /// text (e.g. a `#`-prefix variant not present in the snapshot).
    Nearest {
        /// The closest record in RGB space.
        record: &'a ColorRecord,
        /// Euclidean distance between the query and the record.
        distance: f64,
    },
}

impl<'a> MatchResult<'a> {
    /// The matched record, however it was found.
    pub fn record(&self) -> &'a ColorRecord {
        match self {
            MatchResult::Exact(record) => record,
            MatchResult::Nearest { record, .. } => record,
        }
    }
}

/// Parse `input` as a hex color: an optional leading `#`, then exactly six
/// hex digits, each pair one channel. Returns `None` on any other shape.
pub fn parse_hex(input: &str) -> Option<(u8, u8, u8)> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Euclidean distance between two RGB triples.
fn rgb_distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> f64 {
    let dr = f64::from(a.0) - f64::from(b.0);
    let dg = f64::from(a.1) - f64::from(b.1);
    let db = f64::from(a.2) - f64::from(b.2);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Resolve a free-form query to exactly one record.
///
/// The query is trimmed and lower-cased before comparison. An empty query,
/// or one that is neither a known name, a known hex code, nor a parseable
/// hex triple, yields [`MatchError::InvalidFormat`] carrying the original
/// query text.
pub fn resolve<'a>(
    dataset: &'a ColorDataset,
    query: &str,
) -> Result<MatchResult<'a>, MatchError> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(MatchError::InvalidFormat {
            query: query.to_string(),
        });
    }

    // Name matches take precedence over hex matches; within each, the first
    // record in snapshot order wins.
    let name_match = dataset
        .iter()
        .find(|record| record.name.to_lowercase() == normalized);
    let hex_match = dataset.iter().find(|record| {
        let stored = record.hex.to_lowercase();
        let stored = stored.strip_prefix('#').unwrap_or(&stored);
        let queried = normalized.strip_prefix('#').unwrap_or(&normalized);
        stored == queried
    });

    if let Some(record) = name_match.or(hex_match) {
        return Ok(MatchResult::Exact(record));
    }

    let Some(rgb) = parse_hex(&normalized) else {
        return Err(MatchError::InvalidFormat {
            query: query.to_string(),
        });
    };

    nearest(dataset, rgb)
}

/// Nearest-neighbor scan. Strict `<` while iterating keeps the first record
/// in snapshot order on distance ties; no sort is involved.
fn nearest(
    dataset: &ColorDataset,
    rgb: (u8, u8, u8),
) -> Result<MatchResult<'_>, MatchError> {
    let mut best: Option<(&ColorRecord, f64)> = None;

    for record in dataset.iter() {
        let distance = rgb_distance(rgb, record.rgb());
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((record, distance)),
        }
    }

    match best {
        Some((record, distance)) => Ok(MatchResult::Nearest { record, distance }),
        None => Err(MatchError::EmptyDataset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{record, sample_records};

    fn dataset() -> ColorDataset {
        ColorDataset::from_records(sample_records()).expect("sample dataset")
    }

    #[test]
    fn parses_hex_with_and_without_prefix() {
        assert_eq!(parse_hex("#FF0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex("ff0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex("#dc143c"), Some((220, 20, 60)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#12"), None);
        assert_eq!(parse_hex("ZZZZZZ"), None);
        assert_eq!(parse_hex("#1234567"), None);
        assert_eq!(parse_hex("##123456"), None);
    }

    #[test]
    fn exact_name_match_is_case_insensitive() {
        let dataset = dataset();
        let result = resolve(&dataset, "CRIMSON").expect("match");
        assert_eq!(result, MatchResult::Exact(&dataset.records()[0]));
    }

    #[test]
    fn exact_hex_match_accepts_both_prefix_forms() {
        let dataset = dataset();
        for query in ["#dc143c", "dc143c", "#DC143C"] {
            let result = resolve(&dataset, query).expect("match");
            assert_eq!(result.record().name, "Crimson", "query {query:?}");
            assert!(matches!(result, MatchResult::Exact(_)));
        }
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let dataset = dataset();
        let result = resolve(&dataset, "  crimson \n").expect("match");
        assert_eq!(result.record().name, "Crimson");
    }

    #[test]
    fn name_match_takes_precedence_over_hex_match() {
        // A record literally named "123456" and another whose hex is 123456.
        let dataset = ColorDataset::from_records(vec![
            record("Steel", "#123456", 0x12, 0x34, 0x56),
            record("123456", "#654321", 0x65, 0x43, 0x21),
        ])
        .expect("build");

        let result = resolve(&dataset, "123456").expect("match");
        assert_eq!(result.record().name, "123456");
    }

    #[test]
    fn first_record_wins_among_duplicate_names() {
        let mut a = record("Twin", "#101010", 0x10, 0x10, 0x10);
        a.description = "first".to_string();
        let mut b = record("Twin", "#202020", 0x20, 0x20, 0x20);
        b.description = "second".to_string();

        let dataset = ColorDataset::from_records(vec![a, b]).expect("build");
        let result = resolve(&dataset, "twin").expect("match");
        assert_eq!(result.record().description, "first");
    }

    #[test]
    fn nearest_neighbor_off_by_one_channel() {
        let dataset = dataset();
        // One greater in the blue channel than Crimson.
        match resolve(&dataset, "#DC143D").expect("match") {
            MatchResult::Nearest { record, distance } => {
                assert_eq!(record.name, "Crimson");
                assert!((distance - 1.0).abs() < f64::EPSILON);
            }
            other => panic!("expected nearest match, got {other:?}"),
        }
    }

    #[test]
    fn nearest_distance_is_zero_only_for_identical_triples() {
        // With a validated snapshot the exact-hex scan catches every query
        // whose triple equals a stored record, so a surviving nearest match
        // always sits at a strictly positive distance.
        let dataset = dataset();
        for query in ["#DC143D", "#0A0A0A", "fffffe"] {
            match resolve(&dataset, query).expect("match") {
                MatchResult::Nearest { distance, .. } => {
                    assert!(distance > 0.0, "query {query:?}");
                }
                other => panic!("expected nearest match, got {other:?}"),
            }
        }
    }

    #[test]
    fn nearest_ties_break_to_first_in_snapshot_order() {
        // Both records are at distance 1 from #000001.
        let dataset = ColorDataset::from_records(vec![
            record("First", "#000000", 0, 0, 0),
            record("Second", "#000002", 0, 0, 2),
        ])
        .expect("build");

        match resolve(&dataset, "#000001").expect("match") {
            MatchResult::Nearest { record, distance } => {
                assert_eq!(record.name, "First");
                assert!((distance - 1.0).abs() < f64::EPSILON);
            }
            other => panic!("expected nearest match, got {other:?}"),
        }
    }

    #[test]
    fn resolution_is_deterministic_across_repeated_calls() {
        let dataset = dataset();
        let first = resolve(&dataset, "#336699").expect("match");
        for _ in 0..10 {
            let again = resolve(&dataset, "#336699").expect("match");
            assert_eq!(again, first);
        }
    }

    #[test]
    fn invalid_queries_report_invalid_format() {
        let dataset = dataset();
        for query in ["", "   ", "not-a-color", "#12", "ZZZZZZ"] {
            match resolve(&dataset, query) {
                Err(MatchError::InvalidFormat { query: original }) => {
                    assert_eq!(original, query, "original text is preserved");
                }
                other => panic!("query {query:?}: expected InvalidFormat, got {other:?}"),
            }
        }
    }

    #[test]
    fn invalid_format_keeps_untrimmed_query_text() {
        let dataset = dataset();
        let err = resolve(&dataset, "  #12 ").unwrap_err();
        assert_eq!(
            err,
            MatchError::InvalidFormat {
                query: "  #12 ".to_string()
            }
        );
    }

    #[test]
    fn empty_dataset_yields_distinct_error() {
        // from_records rejects empty tables; drive the scan directly.
        let err = nearest(&ColorDataset::empty_unchecked(), (0, 0, 0)).unwrap_err();
        assert_eq!(err, MatchError::EmptyDataset);
    }

    #[test]
    fn nearest_distance_is_never_negative() {
        let dataset = dataset();
        for query in ["#000000", "#FFFFFF", "#808080", "123123"] {
            if let Ok(MatchResult::Nearest { distance, .. }) =
                resolve(&dataset, query)
            {
                assert!(distance >= 0.0);
            }
        }
    }
}
