//! Rule Notation Parsers
//!
//! Two accepted surface notations with a shared validation policy:
//! the compact `B<digits>/S<digits>` form and a pair of free-form
//! delimited numeric lists. Both produce a canonical [`RuleSet`].
//!
//! Both parsers are pure functions over their string arguments and may be
//! called concurrently without restriction.

use std::collections::BTreeSet;

use crate::error::{Result, RuleError};
use crate::rules::{RuleSet, MAX_NEIGHBORS};

// == Compact Notation ==
/// Parses the compact `B<digits>/S<digits>` notation.
///
/// The first slash-separated segment, when prefixed with `B` (or `b`), is
/// read as a literal sequence of single digits for the birth set; the second
/// segment, when prefixed with `S` (or `s`), likewise for survival. A missing
/// or wrongly-prefixed segment yields an empty set for that half rather than
/// an error. Digits above 8 are discarded to keep the neighbor-count domain.
///
/// # Examples
/// ```
/// use lifecore::rules::parse_compact;
///
/// let rule = parse_compact("B36/S23");
/// assert!(rule.births_on(6));
/// assert!(rule.survives_on(2));
/// ```
pub fn parse_compact(rule: &str) -> RuleSet {
    let mut segments = rule.trim().splitn(2, '/');

    let birth = segments
        .next()
        .and_then(|seg| strip_marker(seg, 'B'))
        .map(digit_run)
        .unwrap_or_default();

    let survival = segments
        .next()
        .and_then(|seg| strip_marker(seg, 'S'))
        .map(digit_run)
        .unwrap_or_default();

    RuleSet { birth, survival }
}

// == Delimited Notation ==
/// Parses two free-form numeric list fields into a rule set.
///
/// Each field is either a pure digit run (decomposed into single digits, so
/// `"37"` reads as 3 and 7) or a list of numbers separated by commas and/or
/// whitespace. Tokens that fail to parse or fall outside 0..=8 are silently
/// dropped; the call still succeeds with a smaller set.
///
/// # Errors
/// - [`RuleError::EmptyInput`] when both fields are empty or whitespace-only
/// - [`RuleError::InvalidCharacter`] when a field contains a character other
///   than digits, commas or whitespace
pub fn parse_delimited(birth_text: &str, survival_text: &str) -> Result<RuleSet> {
    if birth_text.trim().is_empty() && survival_text.trim().is_empty() {
        return Err(RuleError::EmptyInput);
    }

    Ok(RuleSet {
        birth: parse_field("birth", birth_text)?,
        survival: parse_field("survival", survival_text)?,
    })
}

// == Field Tokenizer ==
/// Tokenizes one delimited field into a neighbor-count set.
fn parse_field(field: &'static str, text: &str) -> Result<BTreeSet<u8>> {
    // Validate the alphabet up front; the tokenizer below is lenient
    if let Some(found) = text
        .chars()
        .find(|c| !c.is_ascii_digit() && *c != ',' && !c.is_whitespace())
    {
        return Err(RuleError::InvalidCharacter { field, found });
    }

    let trimmed = text.trim();

    // A pure digit run decomposes into single-digit values
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Ok(digit_run(trimmed));
    }

    // Otherwise split on separator runs and keep the tokens that parse
    Ok(trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<u8>().ok())
        .filter(|&n| n <= MAX_NEIGHBORS)
        .collect())
}

// == Utility Functions ==
/// Strips a segment marker, accepting either case.
fn strip_marker(segment: &str, marker: char) -> Option<&str> {
    let segment = segment.trim();
    segment
        .strip_prefix(marker)
        .or_else(|| segment.strip_prefix(marker.to_ascii_lowercase()))
}

/// Reads a string as a literal sequence of single digits, keeping 0..=8.
fn digit_run(digits: &str) -> BTreeSet<u8> {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .filter(|&d| d <= MAX_NEIGHBORS)
        .collect()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u8]) -> BTreeSet<u8> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_compact_conway() {
        let rule = parse_compact("B3/S23");
        assert_eq!(rule.birth, set(&[3]));
        assert_eq!(rule.survival, set(&[2, 3]));
    }

    #[test]
    fn test_compact_highlife() {
        let rule = parse_compact("B36/S23");
        assert_eq!(rule.birth, set(&[3, 6]));
        assert_eq!(rule.survival, set(&[2, 3]));
    }

    #[test]
    fn test_compact_lowercase_markers() {
        let rule = parse_compact("b3/s23");
        assert_eq!(rule, RuleSet::conway());
    }

    #[test]
    fn test_compact_birth_only() {
        let rule = parse_compact("B37");
        assert_eq!(rule.birth, set(&[3, 7]));
        assert!(rule.survival.is_empty());
    }

    #[test]
    fn test_compact_missing_segment_is_empty_not_error() {
        let rule = parse_compact("/S23");
        assert!(rule.birth.is_empty());
        assert_eq!(rule.survival, set(&[2, 3]));
    }

    #[test]
    fn test_compact_wrong_prefix_degrades_to_empty() {
        let rule = parse_compact("X3/S23");
        assert!(rule.birth.is_empty());
        assert_eq!(rule.survival, set(&[2, 3]));
    }

    #[test]
    fn test_compact_clamps_nine() {
        // The surface format allows 0-9 but 9 is outside the neighbor domain
        let rule = parse_compact("B39/S9");
        assert_eq!(rule.birth, set(&[3]));
        assert!(rule.survival.is_empty());
    }

    #[test]
    fn test_compact_duplicates_collapse() {
        let rule = parse_compact("B333/S2233");
        assert_eq!(rule.birth, set(&[3]));
        assert_eq!(rule.survival, set(&[2, 3]));
    }

    #[test]
    fn test_compact_empty_string() {
        let rule = parse_compact("");
        assert!(rule.is_empty());
    }

    #[test]
    fn test_delimited_both_empty_is_error() {
        assert_eq!(parse_delimited("", ""), Err(RuleError::EmptyInput));
        assert_eq!(parse_delimited("  ", "\t"), Err(RuleError::EmptyInput));
    }

    #[test]
    fn test_delimited_one_side_empty_is_ok() {
        let rule = parse_delimited("3", "").unwrap();
        assert_eq!(rule.birth, set(&[3]));
        assert!(rule.survival.is_empty());
    }

    #[test]
    fn test_delimited_comma_list() {
        let rule = parse_delimited("3,7", "23").unwrap();
        assert_eq!(rule.birth, set(&[3, 7]));
        assert_eq!(rule.survival, set(&[2, 3]));
    }

    #[test]
    fn test_delimited_digit_run_decomposes() {
        let rule = parse_delimited("37", "23").unwrap();
        assert_eq!(rule.birth, set(&[3, 7]));
        assert_eq!(rule.survival, set(&[2, 3]));
    }

    #[test]
    fn test_delimited_mixed_separators() {
        let rule = parse_delimited("3, 6\t8", "2  3").unwrap();
        assert_eq!(rule.birth, set(&[3, 6, 8]));
        assert_eq!(rule.survival, set(&[2, 3]));
    }

    #[test]
    fn test_delimited_out_of_range_token_dropped() {
        // 9 is outside the domain: dropped silently, not an error
        let rule = parse_delimited("9", "").unwrap();
        assert!(rule.birth.is_empty());
    }

    #[test]
    fn test_delimited_multi_digit_token_dropped() {
        // "12" as a separated token is the number twelve, not digits 1 and 2
        let rule = parse_delimited("3,12", "2").unwrap();
        assert_eq!(rule.birth, set(&[3]));
    }

    #[test]
    fn test_delimited_invalid_character() {
        let err = parse_delimited("3;7", "2").unwrap_err();
        assert_eq!(
            err,
            RuleError::InvalidCharacter {
                field: "birth",
                found: ';'
            }
        );
    }

    #[test]
    fn test_delimited_invalid_character_names_survival_field() {
        let err = parse_delimited("3", "2a").unwrap_err();
        assert_eq!(
            err,
            RuleError::InvalidCharacter {
                field: "survival",
                found: 'a'
            }
        );
    }

    #[test]
    fn test_delimited_trailing_commas_ignored() {
        let rule = parse_delimited(",3,,7,", "2,").unwrap();
        assert_eq!(rule.birth, set(&[3, 7]));
        assert_eq!(rule.survival, set(&[2]));
    }

    #[test]
    fn test_display_roundtrips_through_compact() {
        let rule = parse_delimited("3,6", "2 3").unwrap();
        assert_eq!(parse_compact(&rule.to_string()), rule);
    }
}
