// src/callsign/mod.rs  —  Prefix table, phonetics, parser, scanner, resolver
pub mod error;
pub mod parser;
pub mod phonetic;
pub mod prefixes;
pub mod range;
pub mod resolver;
pub mod scanner;

pub use error::{ParseError, TableError};
pub use parser::{parse, ParsedCallsign};
pub use phonetic::{lookup_phonetic, phonetics, Spelled, Spelling};
pub use prefixes::{PrefixTable, ITU_PREFIXES};
pub use resolver::{decorate, flag_emoji, search, DecoratedCallsign, Found};
pub use scanner::{scan, CallsignToken};
