// src/callsign/resolver.rs  —  Parsed call sign → territory + phonetics
use super::parser::{self, ParsedCallsign};
use super::phonetic::Spelling;
use super::prefixes::PrefixTable;
use super::scanner;
use std::ops::Range;

/// Final output unit handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedCallsign {
    /// Token as it appeared in the text
    pub token:     String,
    pub parsed:    ParsedCallsign,
    /// ISO 3166-1 alpha-2 code, `None` when the prefix is not in the table
    pub territory: Option<String>,
    pub spelling:  Spelling,
}

impl DecoratedCallsign {
    pub fn phonetic(&self) -> String { self.spelling.to_string() }

    pub fn flag(&self) -> Option<String> {
        self.territory.as_deref().map(flag_emoji)
    }
}

/// A decorated call sign found by [`search`], with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub span:      Range<usize>,
    pub callsign:  DecoratedCallsign,
}

/// Attach territory and phonetic spelling to `parsed`.
///
/// `token` is the original text the call sign was parsed from; the spelling
/// covers all of it except the portable slash.
pub fn decorate(parsed: ParsedCallsign, token: &str, table: &PrefixTable) -> DecoratedCallsign {
    let territory = table.lookup_territory(&parsed.prefix).map(str::to_string);
    if territory.is_none() {
        log::debug!("[resolver] no territory for prefix {} ({token})", parsed.prefix);
    }

    let spelling = Spelling::of(token);
    if !spelling.is_complete() {
        log::warn!(
            "[resolver] {token}: no phonetic word for {:?}",
            spelling.unmapped().collect::<String>()
        );
    }

    DecoratedCallsign {
        token: token.to_string(),
        parsed,
        territory,
        spelling,
    }
}

/// Scan → parse → decorate in one pass. Tokens that do not parse are skipped.
pub fn search(text: &str, table: &PrefixTable) -> Vec<Found> {
    scanner::scan(text)
        .into_iter()
        .filter_map(|tok| match parser::parse(tok.text) {
            Ok(parsed) => Some(Found {
                span:     tok.span,
                callsign: decorate(parsed, tok.text, table),
            }),
            Err(e) => {
                log::trace!("[resolver] skipping {:?}: {e}", tok.text);
                None
            }
        })
        .collect()
}

/// ISO 3166-1 alpha-2 code → regional-indicator flag emoji.
pub fn flag_emoji(code: &str) -> String {
    const REGIONAL_A: u32 = 0x1F1E6;
    code.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                char::from_u32(REGIONAL_A + (c as u32 - 'A' as u32)).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callsign::parser::parse;

    fn table() -> &'static PrefixTable {
        PrefixTable::builtin().unwrap()
    }

    fn dec(token: &str) -> DecoratedCallsign {
        decorate(parse(token).unwrap(), token, table())
    }

    #[test]
    fn resolves_territory_and_phonetics() {
        let d = dec("W1AW");
        assert_eq!(d.territory.as_deref(), Some("US"));
        assert_eq!(d.phonetic(), "Whiskey One Alfa Whiskey");
        assert_eq!(d.parsed.prefix, "W");

        let d = dec("SM8AYA");
        assert_eq!(d.territory.as_deref(), Some("SE"));
        assert_eq!(d.phonetic(), "Sierra Mike Eight Alfa Yankee Alfa");
    }

    #[test]
    fn unknown_prefix_still_decorates() {
        let d = dec("QQ3ABC");
        assert_eq!(d.territory, None);
        assert_eq!(d.flag(), None);
        assert_eq!(d.phonetic(), "Quebec Quebec Tree Alfa Bravo Charlie");
    }

    #[test]
    fn portable_token_is_spelled_without_slash() {
        let d = dec("SM8AYA/5");
        assert_eq!(d.phonetic(), "Sierra Mike Eight Alfa Yankee Alfa Five");
        assert_eq!(d.token, "SM8AYA/5");
    }

    #[test]
    fn flags() {
        assert_eq!(flag_emoji("US"), "\u{1F1FA}\u{1F1F8}");
        assert_eq!(flag_emoji("SE"), "\u{1F1F8}\u{1F1EA}");
        assert_eq!(flag_emoji("AA"), "\u{1F1E6}\u{1F1E6}");
        assert_eq!(dec("DL1ABC").flag().as_deref(), Some("\u{1F1E9}\u{1F1EA}"));
    }

    #[test]
    fn search_skips_nothing_that_parses() {
        let found = search("Valid: W1AW K2ABC Invalid: Q1XYZ X2ABC Real: DL1ABC ", table());
        let calls: Vec<&str> = found.iter().map(|f| f.callsign.token.as_str()).collect();
        assert_eq!(calls, ["W1AW", "K2ABC", "Q1XYZ", "X2ABC", "DL1ABC"]);
        assert_eq!(found[2].callsign.territory, None);
    }

    #[test]
    fn search_end_to_end() {
        let text = "Worked W1AW on 20m, then SM8AYA on 40m.";
        let found = search(text, table());
        assert_eq!(found.len(), 2);
        assert_eq!(&text[found[0].span.clone()], "W1AW");
        assert_eq!(found[1].callsign.parsed.prefix, "SM");
        assert_eq!(found[1].callsign.territory.as_deref(), Some("SE"));
    }
}
