// src/callsign/parser.rs  —  Token → prefix / area digit / suffix / portable digit
use super::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// prefix(1-3) area-digit suffix(1-3 letters) [/portable-digit], ending the token
///
/// The prefix quantifier is greedy, so when several digits could serve as
/// the area digit the rightmost one before the suffix wins.
static PARTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z0-9]{1,3})([0-9])([A-Z]{1,3})(?:/([0-9]))?$")
        .expect("call sign pattern is valid")
});

/// A call sign split into its structural parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedCallsign {
    pub prefix:         String,
    pub area_digit:     char,
    pub suffix:         String,
    pub portable_digit: Option<char>,
}

impl ParsedCallsign {
    /// The call sign without its portable indicator, e.g. `SM8AYA`.
    pub fn base(&self) -> String {
        format!("{}{}{}", self.prefix, self.area_digit, self.suffix)
    }

    pub fn is_portable(&self) -> bool { self.portable_digit.is_some() }
}

impl fmt::Display for ParsedCallsign {
    /// Reassembles the matched call sign: `prefix + digit + suffix [+ /digit]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.area_digit, self.suffix)?;
        if let Some(p) = self.portable_digit {
            write!(f, "/{p}")?;
        }
        Ok(())
    }
}

/// Decompose `token` into a [`ParsedCallsign`].
///
/// Only uppercase Latin letters, digits and `/` are accepted; anything else
/// (lowercase included) is an error. The match must end the token; leading
/// characters before it are dropped as context, so `ABCD1XYZ` parses as
/// `BCD` `1` `XYZ` while `W1ABCD` is rejected.
pub fn parse(token: &str) -> Result<ParsedCallsign, ParseError> {
    if token.is_empty() {
        return Err(ParseError::Empty);
    }
    if let Some((index, ch)) = token
        .chars()
        .enumerate()
        .find(|&(_, c)| !(c.is_ascii_uppercase() || c.is_ascii_digit() || c == '/'))
    {
        return Err(ParseError::InvalidCharacter { ch, index });
    }
    // '/' only introduces the trailing portable digit
    if token.find('/').is_some_and(|i| i + 2 != token.len()) {
        return Err(ParseError::NoMatch(token.to_string()));
    }

    let caps = PARTS
        .captures(token)
        .ok_or_else(|| ParseError::NoMatch(token.to_string()))?;

    // Groups 1-3 are mandatory in the pattern, so they are present on a match
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let first = |s: &str| s.chars().next();

    Ok(ParsedCallsign {
        prefix:         group(1).to_string(),
        area_digit:     first(group(2)).unwrap_or('0'),
        suffix:         group(3).to_string(),
        portable_digit: first(group(4)),
    })
}
