// src/callsign/prefixes.rs  —  ITU prefix blocks per territory + lookup
use super::error::TableError;
use super::range;
use once_cell::sync::OnceCell;
use std::collections::{HashMap, HashSet};

/// Built-in prefix allocations, keyed by ISO 3166-1 alpha-2 territory code.
///
/// Each definition is a comma-separated list of literal prefixes and
/// `START-END` ranges (last character only). Order matters: when a prefix
/// is listed under two territories the earlier one wins the lookup.
pub static ITU_PREFIXES: &[(&str, &str)] = &[
    ("AD", "C3"),
    ("AE", "A6"),
    ("AF", "YA,T6"),
    ("AG", "V2"),
    ("AL", "ZA"),
    ("AO", "D2,D3"),
    ("AR", "AY,AZ,LO-LW"),
    ("AT", "OE"),
    ("AU", "AX,VH-VK,VN,VZ"),
    ("BA", "E7,T9"),
    ("BB", "8P"),
    ("BD", "S2,S3"),
    ("BE", "ON-OT"),
    ("BF", "XT"),
    ("BG", "LZ"),
    ("BH", "A9"),
    ("BO", "CP"),
    ("BR", "PP-PY,ZV-ZZ"),
    ("BS", "C6"),
    ("BT", "A5"),
    ("BW", "A2"),
    ("BY", "EU,EV,EW"),
    ("BZ", "V3"),
    ("CA", "CF-CK,CY,CZ,VA-VG,VO,VX,VY,XJ-XO"),
    ("CD", "9Q"),
    ("CF", "TL"),
    ("CG", "TN"),
    ("CH", "HB,HE"),
    ("CI", "TU"),
    ("CL", "CA-CE,XQ,XR,3G"),
    ("CM", "TJ"),
    ("CN", "B,VR,XS,XX"),
    ("CO", "HJ,HK,5J,5K"),
    ("CR", "TE,TI"),
    ("CU", "CM,CO,T4"),
    ("CY", "5B,C4,H2,P3"),
    ("CZ", "OK,OL"),
    ("DE", "DA-DR"),
    ("DK", "OU-OZ,XP"),
    ("DM", "J7"),
    ("DO", "HI"),
    ("DZ", "7X"),
    ("EC", "HC,HD,5X"),
    ("EE", "ES"),
    ("EG", "SU"),
    ("ES", "AM,AN,AO,EA-EH"),
    ("ET", "ET"),
    ("FI", "OF-OJ"),
    ("FR", "F,HW,HX,HY,TH,TM-TZ"),
    ("GA", "TR"),
    ("GB", "G,M,VP,VQ,VS,ZB-ZJ,ZN,ZO,ZQ"),
    ("GD", "J3"),
    ("GF", "FY"),
    ("GH", "9G"),
    ("GQ", "3C"),
    ("GR", "J4,SV-SZ"),
    ("GT", "TD,TG"),
    ("GY", "8R"),
    ("HK", "VR"),
    ("HN", "HQ,HR"),
    ("HR", "9A"),
    ("HT", "4V,HH"),
    ("HU", "HA,HG"),
    ("ID", "YB-YH,7A-7I,8A-8I"),
    ("IE", "EI,EJ"),
    ("IL", "4X,4Z"),
    ("IN", "AT-AW,VT-VW"),
    ("IQ", "HN,YI"),
    ("IR", "EP,EQ"),
    ("IS", "TF"),
    ("IT", "I,IZ"),
    ("JM", "6Y"),
    ("JO", "JY"),
    ("JP", "JA-JS"),
    ("KE", "5Z"),
    ("KH", "XU"),
    ("KN", "V4"),
    ("KP", "HM,P5-P9"),
    ("KR", "DS,DT,HL"),
    ("KW", "9K"),
    ("LA", "XW"),
    ("LB", "OD"),
    ("LC", "J6"),
    ("LI", "HB0"),
    ("LK", "4P-4S"),
    ("LS", "7P"),
    ("LT", "LY"),
    ("LU", "LX"),
    ("LV", "YL"),
    ("LY", "5A"),
    ("MA", "CN"),
    ("MC", "3A"),
    ("MD", "ER"),
    ("ME", "4O"),
    ("MG", "5R,5S"),
    ("MK", "Z3"),
    ("ML", "TZ"),
    ("MM", "XY,XZ"),
    ("MN", "JT,JU,JV"),
    ("MO", "XX9"),
    ("MT", "9H"),
    ("MU", "3B"),
    ("MW", "7Q"),
    ("MX", "XA-XO,4A,4B,4C,6D-6J"),
    ("MY", "9M"),
    ("MZ", "C9"),
    ("NA", "V5"),
    ("NE", "5U"),
    ("NG", "5N"),
    ("NI", "H6,H7,HT"),
    ("NL", "PA-PJ"),
    ("NO", "LA-LN"),
    ("NP", "9N"),
    ("NZ", "ZK,ZL,ZM"),
    ("OM", "A4"),
    ("PA", "HO,HP,3E,3F"),
    ("PE", "OA,OB,OC,4T"),
    ("PH", "DU-DZ,4D-4I"),
    ("PK", "AP-AS,6P-6S"),
    ("PL", "HF,SN-SR,3Z"),
    ("PR", "KP,NP,WP"),
    ("PT", "CR-CU"),
    ("PY", "ZP"),
    ("QA", "A7"),
    ("RE", "FR"),
    ("RO", "YO-YR"),
    ("RS", "YT,YU"),
    ("RU", "R,UA-UI"),
    ("SA", "HZ,7Z,8Z"),
    ("SC", "S7,S79"),
    ("SE", "SA-SM,7S"),
    ("SG", "9V"),
    ("SI", "S5"),
    ("SK", "OM"),
    ("SM", "T7"),
    ("SN", "6V,6W"),
    ("SR", "PZ"),
    ("SV", "HU,YS"),
    ("SY", "YK"),
    ("SZ", "3D"),
    ("TD", "TT"),
    ("TH", "HS"),
    ("TN", "3V"),
    ("TR", "TA,TB,TC,YM"),
    ("TT", "9Y,9Z"),
    ("TW", "BM-BQ,BU-BX"),
    ("TZ", "5H,5I"),
    ("UA", "EM,EN,EO,UR-UZ"),
    ("UG", "5X"),
    ("US", "AA-AL,K,N,W"),
    ("UY", "CV,CW,CX"),
    ("VA", "HV"),
    ("VC", "J8"),
    ("VE", "4M,YV-YY"),
    ("VN", "3W,XV"),
    ("VU", "YJ"),
    ("YE", "7O"),
    ("ZA", "ZR-ZU"),
    ("ZM", "9J"),
    ("ZW", "Z2"),
];

/// Territory → prefix set, built once from definitions like [`ITU_PREFIXES`].
#[derive(Debug, Clone)]
pub struct PrefixTable {
    entries: Vec<(String, Vec<String>)>,
    /// prefix → index into `entries` of the first territory listing it
    index:   HashMap<String, usize>,
}

impl PrefixTable {
    /// Expand and validate `defs`. Any malformed entry fails the whole build.
    pub fn build(defs: &[(&str, &str)]) -> Result<Self, TableError> {
        let mut entries: Vec<(String, Vec<String>)> = Vec::with_capacity(defs.len());
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut codes = HashSet::new();

        for (code, def) in defs {
            check_territory(code)?;
            if !codes.insert(*code) {
                return Err(TableError::DuplicateTerritory(code.to_string()));
            }

            let prefixes = range::expand(code, def)?;
            let mut seen = HashSet::new();
            for p in &prefixes {
                if !seen.insert(p.as_str()) {
                    return Err(TableError::DuplicatePrefix {
                        territory: code.to_string(),
                        prefix:    p.clone(),
                    });
                }
                // First territory to list a prefix keeps it
                match index.get(p) {
                    Some(&owner) => log::debug!(
                        "[prefixes] {p} listed under {} and {code}; lookup keeps {}",
                        entries[owner].0, entries[owner].0
                    ),
                    None => { index.insert(p.clone(), entries.len()); }
                }
            }
            entries.push((code.to_string(), prefixes));
        }

        log::debug!(
            "[prefixes] built table: {} territories, {} distinct prefixes",
            entries.len(), index.len()
        );
        Ok(Self { entries, index })
    }

    /// The built-in ITU table, built on first use.
    pub fn builtin() -> Result<&'static Self, TableError> {
        static TABLE: OnceCell<PrefixTable> = OnceCell::new();
        TABLE.get_or_try_init(|| Self::build(ITU_PREFIXES))
    }

    /// Territory of the first entry (in table order) whose set contains
    /// exactly `prefix`.
    pub fn lookup_territory(&self, prefix: &str) -> Option<&str> {
        self.index.get(prefix).map(|&i| self.entries[i].0.as_str())
    }

    pub fn is_valid_prefix(&self, prefix: &str) -> bool {
        self.index.contains_key(prefix)
    }

    pub fn prefixes_for(&self, territory: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(code, _)| code == territory)
            .map(|(_, p)| p.as_slice())
    }

    /// Territory codes in table order.
    pub fn territories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    /// Prefixes listed under more than one territory, as
    /// `(prefix, winning territory, shadowed territory)`.
    pub fn shadowed(&self) -> Vec<(&str, &str, &str)> {
        let mut out = Vec::new();
        for (i, (code, prefixes)) in self.entries.iter().enumerate() {
            for p in prefixes {
                if let Some(&owner) = self.index.get(p) {
                    if owner != i {
                        out.push((p.as_str(), self.entries[owner].0.as_str(), code.as_str()));
                    }
                }
            }
        }
        out
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

fn check_territory(code: &str) -> Result<(), TableError> {
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(TableError::InvalidTerritory(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn itu() -> &'static PrefixTable {
        PrefixTable::builtin().unwrap()
    }

    #[test]
    fn builtin_table_builds() {
        assert_eq!(itu().len(), ITU_PREFIXES.len());
    }

    #[test]
    fn lookup_known_prefixes() {
        assert_eq!(itu().lookup_territory("SM"), Some("SE"));
        assert_eq!(itu().lookup_territory("W"), Some("US"));
        assert_eq!(itu().lookup_territory("AL"), Some("US"));
        assert_eq!(itu().lookup_territory("DL"), Some("DE"));
        assert_eq!(itu().lookup_territory("9V"), Some("SG"));
        assert_eq!(itu().lookup_territory("HB0"), Some("LI"));
        assert_eq!(itu().lookup_territory("ZZ"), Some("BR"));
        assert_eq!(itu().lookup_territory("VK"), Some("AU"));
    }

    #[test]
    fn lookup_misses() {
        assert_eq!(itu().lookup_territory("QQ"), None);
        assert_eq!(itu().lookup_territory("KD"), None);
        assert_eq!(itu().lookup_territory("VK2"), None);
        assert_eq!(itu().lookup_territory(""), None);
        assert_eq!(itu().lookup_territory("w"), None);
    }

    #[test]
    fn validity_matches_lookup() {
        for p in ["W", "K", "N", "AA", "AB", "SM", "7S", "G", "M", "XX9", "XX", "YY", "AZ"] {
            assert!(itu().is_valid_prefix(p), "{p}");
        }
        for p in ["Q", "X", "QQ", "BB", "KK", "123", ""] {
            assert!(!itu().is_valid_prefix(p), "{p}");
        }
    }

    #[test]
    fn first_listed_territory_wins() {
        // TR is French (TH,TM-TZ) before Gabon
        assert_eq!(itu().lookup_territory("TR"), Some("FR"));
        assert_eq!(itu().lookup_territory("VR"), Some("CN"));
        let shadowed = itu().shadowed();
        assert!(shadowed.contains(&("TR", "FR", "GA")));
        assert!(shadowed.contains(&("VR", "CN", "HK")));
    }

    #[test]
    fn ranges_are_expanded() {
        let au = itu().prefixes_for("AU").unwrap();
        assert_eq!(au, ["AX", "VH", "VI", "VJ", "VK", "VN", "VZ"]);
        assert_eq!(itu().prefixes_for("DE").unwrap().len(), 18);
        assert!(itu().prefixes_for("QQ").is_none());
    }

    #[test]
    fn territories_keep_table_order() {
        let first: Vec<&str> = itu().territories().take(3).collect();
        assert_eq!(first, ["AD", "AE", "AF"]);
    }

    #[test]
    fn duplicate_territory_is_rejected() {
        let err = PrefixTable::build(&[("SE", "SM"), ("SE", "7S")]).unwrap_err();
        assert_eq!(err, TableError::DuplicateTerritory("SE".into()));
    }

    #[test]
    fn duplicate_prefix_in_one_territory_is_rejected() {
        let err = PrefixTable::build(&[("SE", "SA-SM,SM")]).unwrap_err();
        assert!(matches!(err, TableError::DuplicatePrefix { .. }));
    }

    #[test]
    fn malformed_definitions_fail_the_build() {
        assert!(matches!(
            PrefixTable::build(&[("AR", "AY-AZZ")]).unwrap_err(),
            TableError::MalformedRange { .. }
        ));
        assert!(matches!(
            PrefixTable::build(&[("usa", "W")]).unwrap_err(),
            TableError::InvalidTerritory(_)
        ));
    }

    #[test]
    fn lookup_is_deterministic() {
        let a = PrefixTable::build(ITU_PREFIXES).unwrap();
        let b = PrefixTable::build(ITU_PREFIXES).unwrap();
        for p in ["SM", "TR", "5X", "XX", "QQ"] {
            assert_eq!(a.lookup_territory(p), b.lookup_territory(p));
            assert_eq!(a.lookup_territory(p), a.lookup_territory(p));
        }
    }
}
