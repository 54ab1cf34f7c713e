// src/callsign/phonetic.rs  —  Character → spoken word (ITU/NATO alphabet)
use std::fmt;

/// ITU phonetic alphabet, including the ITU digit pronunciations
/// ("Tree", "Niner", ...).
pub fn lookup_phonetic(c: char) -> Option<&'static str> {
    match c {
        'A' => Some("Alfa"),     'B' => Some("Bravo"),   'C' => Some("Charlie"),
        'D' => Some("Delta"),    'E' => Some("Echo"),    'F' => Some("Foxtrot"),
        'G' => Some("Golf"),     'H' => Some("Hotel"),   'I' => Some("India"),
        'J' => Some("Juliett"),  'K' => Some("Kilo"),    'L' => Some("Lima"),
        'M' => Some("Mike"),     'N' => Some("November"),'O' => Some("Oscar"),
        'P' => Some("Papa"),     'Q' => Some("Quebec"),  'R' => Some("Romeo"),
        'S' => Some("Sierra"),   'T' => Some("Tango"),   'U' => Some("Uniform"),
        'V' => Some("Victor"),   'W' => Some("Whiskey"), 'X' => Some("X-ray"),
        'Y' => Some("Yankee"),   'Z' => Some("Zulu"),
        '0' => Some("Ziro"),     '1' => Some("One"),     '2' => Some("Two"),
        '3' => Some("Tree"),     '4' => Some("Four"),    '5' => Some("Five"),
        '6' => Some("Six"),      '7' => Some("Seven"),   '8' => Some("Eight"),
        '9' => Some("Niner"),
        _   => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spelled {
    Word(&'static str),
    /// No table entry; the character is kept so positions still line up
    Unmapped(char),
}

/// Word-per-character spelling of a call sign.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Spelling(Vec<Spelled>);

impl Spelling {
    /// Spell every character of `text` except the portable-indicator slash.
    pub fn of(text: &str) -> Self {
        Self(
            text.chars()
                .filter(|&c| c != '/')
                .map(|c| lookup_phonetic(c).map_or(Spelled::Unmapped(c), Spelled::Word))
                .collect(),
        )
    }

    pub fn parts(&self) -> &[Spelled] { &self.0 }

    pub fn unmapped(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().filter_map(|s| match s {
            Spelled::Unmapped(c) => Some(*c),
            Spelled::Word(_)     => None,
        })
    }

    pub fn is_complete(&self) -> bool { self.unmapped().next().is_none() }
}

impl fmt::Display for Spelling {
    /// Words joined by single spaces; an unmapped character shows as itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.0.iter().enumerate() {
            if i > 0 { f.write_str(" ")?; }
            match s {
                Spelled::Word(w)     => f.write_str(w)?,
                Spelled::Unmapped(c) => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

/// Phonetic string for `text`, e.g. `"W1AW"` → `"Whiskey One Alfa Whiskey"`.
pub fn phonetics(text: &str) -> String {
    Spelling::of(text).to_string()
}
