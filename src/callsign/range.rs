// src/callsign/range.rs  —  "AY-AZ" style prefix ranges → explicit prefixes
use super::error::TableError;

/// Longest prefix the table accepts ("VK9X" style).
pub const MAX_PREFIX_LEN: usize = 4;

/// True for the characters a prefix may be built from.
pub fn is_prefix_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

/// Expand one comma-separated prefix definition such as `"AA-AL,K,N,W"`.
///
/// Each item is either a literal prefix or a `START-END` range. A range only
/// varies its last character: both bounds must have the same length, share
/// every character but the last, and the last characters must be of the same
/// class (letter or digit) with `START <= END`.
pub fn expand(territory: &str, def: &str) -> Result<Vec<String>, TableError> {
    let mut out = Vec::new();
    for item in def.split(',').map(str::trim) {
        match item.split_once('-') {
            Some((start, end)) => expand_range(territory, item, start, end, &mut out)?,
            None => {
                check_prefix(territory, item)?;
                out.push(item.to_string());
            }
        }
    }
    Ok(out)
}

fn expand_range(
    territory: &str,
    item: &str,
    start: &str,
    end: &str,
    out: &mut Vec<String>,
) -> Result<(), TableError> {
    let malformed = |reason| TableError::MalformedRange {
        territory: territory.to_string(),
        range:     item.to_string(),
        reason,
    };

    if end.contains('-') {
        return Err(malformed("more than one '-'"));
    }
    check_prefix(territory, start)?;
    check_prefix(territory, end)?;
    if start.len() != end.len() {
        return Err(malformed("bounds differ in length"));
    }

    let stem = &start[..start.len() - 1];
    if stem != &end[..end.len() - 1] {
        return Err(malformed("bounds differ before the last character"));
    }

    // check_prefix guarantees ASCII, so the last byte is the last char
    let first = start.as_bytes()[start.len() - 1];
    let last  = end.as_bytes()[end.len() - 1];
    if first.is_ascii_digit() != last.is_ascii_digit() {
        return Err(malformed("mixes a letter and a digit"));
    }
    if first > last {
        return Err(malformed("start is after end"));
    }

    out.extend((first..=last).map(|b| format!("{stem}{}", b as char)));
    Ok(())
}

fn check_prefix(territory: &str, prefix: &str) -> Result<(), TableError> {
    let ok = !prefix.is_empty()
        && prefix.len() <= MAX_PREFIX_LEN
        && prefix.chars().all(is_prefix_char);
    if ok {
        Ok(())
    } else {
        Err(TableError::InvalidPrefix {
            territory: territory.to_string(),
            prefix:    prefix.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_pass_through() {
        assert_eq!(expand("US", "K,N,W").unwrap(), vec!["K", "N", "W"]);
    }

    #[test]
    fn range_expands_last_character() {
        assert_eq!(expand("AR", "AY-AZ").unwrap(), vec!["AY", "AZ"]);
        assert_eq!(
            expand("PK", "6P-6S").unwrap(),
            vec!["6P", "6Q", "6R", "6S"]
        );
        assert_eq!(expand("XX", "L2-L4").unwrap(), vec!["L2", "L3", "L4"]);
    }

    #[test]
    fn mixed_items_keep_order() {
        assert_eq!(
            expand("US", "AA-AC,K").unwrap(),
            vec!["AA", "AB", "AC", "K"]
        );
    }

    #[test]
    fn single_element_range() {
        assert_eq!(expand("ZZ", "VO-VO").unwrap(), vec!["VO"]);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = expand("XX", "A-AZ").unwrap_err();
        assert!(matches!(err, TableError::MalformedRange { .. }));
    }

    #[test]
    fn differing_stem_is_rejected() {
        let err = expand("XX", "AY-BZ").unwrap_err();
        assert!(matches!(err, TableError::MalformedRange { reason, .. }
            if reason.contains("before the last")));
    }

    #[test]
    fn reversed_or_mixed_class_is_rejected() {
        assert!(expand("XX", "AZ-AY").is_err());
        assert!(expand("XX", "A9-AA").is_err());
        assert!(expand("XX", "A-B-C").is_err());
    }

    #[test]
    fn bad_literals_are_rejected() {
        assert!(matches!(
            expand("XX", "ab").unwrap_err(),
            TableError::InvalidPrefix { .. }
        ));
        assert!(expand("XX", "K,,N").is_err());
        assert!(expand("XX", "ABCDE").is_err());
    }
}
