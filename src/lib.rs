// src/lib.rs  —  callsign-tag library
//! Find amateur radio call signs in text, split them into prefix / area
//! digit / suffix / portable digit, resolve the issuing territory and spell
//! them phonetically.
//!
//! ```
//! use callsign_tag::callsign::{search, PrefixTable};
//!
//! let table = PrefixTable::builtin().unwrap();
//! let found = search("Worked W1AW on 20m, then SM8AYA on 40m.", table);
//! assert_eq!(found[1].callsign.territory.as_deref(), Some("SE"));
//! assert_eq!(found[0].callsign.phonetic(), "Whiskey One Alfa Whiskey");
//! ```
pub mod callsign;
pub mod config;
pub mod markup;

pub use callsign::{decorate, parse, scan, search, DecoratedCallsign, ParsedCallsign, PrefixTable};
pub use config::AppConfig;
pub use markup::{annotate, Annotated};
