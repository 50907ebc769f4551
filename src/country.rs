//! Factory location registry.
//!
//! Maps two-letter factory location codes to the countries that have
//! historically used them. A code can belong to more than one country
//! because factories relocated or were shared; the order of the
//! associated countries is the order of association.

use crate::DateCodeError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Countries that have hosted known factories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Country {
    France,
    Germany,
    Italy,
    Spain,
    Switzerland,
    USA,
}

/// Location table, sorted by code so lookups can binary search.
/// FL and SD moved from France to the USA, LW from France to Spain;
/// those codes keep both countries.
const LOCATIONS: &[(&str, &[Country])] = &[
    ("A0", &[Country::France]),
    ("A1", &[Country::France]),
    ("A2", &[Country::France]),
    ("AA", &[Country::France]),
    ("AH", &[Country::France]),
    ("AN", &[Country::France]),
    ("AR", &[Country::France]),
    ("AS", &[Country::France]),
    ("BA", &[Country::France]),
    ("BC", &[Country::Italy]),
    ("BJ", &[Country::France]),
    ("BO", &[Country::Italy]),
    ("BU", &[Country::France]),
    ("CA", &[Country::Spain]),
    ("CE", &[Country::Italy]),
    ("CO", &[Country::France]),
    ("CT", &[Country::France]),
    ("CX", &[Country::France]),
    ("DI", &[Country::Switzerland]),
    ("DR", &[Country::France]),
    ("DT", &[Country::France]),
    ("DU", &[Country::France]),
    ("ET", &[Country::France]),
    ("FA", &[Country::Switzerland]),
    ("FC", &[Country::USA]),
    ("FH", &[Country::USA]),
    ("FL", &[Country::France, Country::USA]),
    ("FO", &[Country::Italy]),
    ("GI", &[Country::Spain]),
    ("LA", &[Country::USA]),
    ("LB", &[Country::Spain]),
    ("LM", &[Country::Spain]),
    ("LO", &[Country::Spain]),
    ("LP", &[Country::Germany]),
    ("LW", &[Country::France, Country::Spain]),
    ("MA", &[Country::Italy]),
    ("MB", &[Country::France]),
    ("MI", &[Country::France]),
    ("NO", &[Country::France]),
    ("OB", &[Country::Italy]),
    ("OL", &[Country::Germany]),
    ("OS", &[Country::USA]),
    ("RA", &[Country::France]),
    ("RC", &[Country::Italy]),
    ("RE", &[Country::Italy]),
    ("RI", &[Country::France]),
    ("SA", &[Country::Italy]),
    ("SD", &[Country::France, Country::USA]),
    ("SF", &[Country::France]),
    ("SL", &[Country::France]),
    ("SN", &[Country::France]),
    ("SP", &[Country::France]),
    ("SR", &[Country::France]),
    ("TD", &[Country::Italy]),
    ("TH", &[Country::France]),
    ("TJ", &[Country::France]),
    ("TR", &[Country::France]),
    ("TS", &[Country::France]),
    ("VI", &[Country::France]),
    ("VX", &[Country::France]),
];

/// Resolves a factory location code to the countries known to have used it.
///
/// Lookup is case-insensitive. Unknown codes resolve to an empty vec:
/// an unresolved location is expected, not an error.
///
/// # Errors
/// Returns `DateCodeError::InvalidArgument` if the code is empty.
pub fn resolve_countries(code: &str) -> Result<Vec<Country>, DateCodeError> {
    if code.is_empty() {
        return Err(DateCodeError::InvalidArgument("factory location code"));
    }
    let canonical = code.to_ascii_uppercase();
    let countries = LOCATIONS
        .binary_search_by_key(&canonical.as_str(), |entry| entry.0)
        .map(|idx| LOCATIONS[idx].1.to_vec())
        .unwrap_or_default();
    Ok(countries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        // Binary search precondition
        assert!(LOCATIONS.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_table_size() {
        assert_eq!(LOCATIONS.len(), 60);
    }

    #[test]
    fn test_empty_code_is_an_error() {
        let result = resolve_countries("");
        assert!(matches!(result, Err(DateCodeError::InvalidArgument(_))));
    }

    #[test]
    fn test_unknown_code_resolves_to_nothing() {
        assert_eq!(resolve_countries("ZZ").unwrap(), vec![]);
        assert_eq!(resolve_countries("A").unwrap(), vec![]);
        assert_eq!(resolve_countries("AAA").unwrap(), vec![]);
        // Total for any non-empty input, letters or not
        assert_eq!(resolve_countries("12").unwrap(), vec![]);
    }

    #[test]
    fn test_multi_country_codes() {
        assert_eq!(
            resolve_countries("FL").unwrap(),
            vec![Country::France, Country::USA]
        );
        assert_eq!(
            resolve_countries("SD").unwrap(),
            vec![Country::France, Country::USA]
        );
        assert_eq!(
            resolve_countries("LW").unwrap(),
            vec![Country::France, Country::Spain]
        );
    }

    #[test]
    fn test_single_country_codes() {
        struct TestCase {
            code: &'static str,
            country: Country,
        }

        let cases = [
            TestCase {
                code: "A0",
                country: Country::France,
            },
            TestCase {
                code: "VX",
                country: Country::France,
            },
            TestCase {
                code: "LP",
                country: Country::Germany,
            },
            TestCase {
                code: "OL",
                country: Country::Germany,
            },
            TestCase {
                code: "SA",
                country: Country::Italy,
            },
            TestCase {
                code: "GI",
                country: Country::Spain,
            },
            TestCase {
                code: "DI",
                country: Country::Switzerland,
            },
            TestCase {
                code: "FA",
                country: Country::Switzerland,
            },
            TestCase {
                code: "OS",
                country: Country::USA,
            },
        ];

        for case in &cases {
            assert_eq!(
                resolve_countries(case.code).unwrap(),
                vec![case.country],
                "code {}",
                case.code
            );
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            resolve_countries("sd").unwrap(),
            vec![Country::France, Country::USA]
        );
        assert_eq!(resolve_countries("Lp").unwrap(), vec![Country::Germany]);
    }

    #[test]
    fn test_country_display() {
        assert_eq!(Country::France.to_string(), "France");
        assert_eq!(Country::USA.to_string(), "USA");
    }

    #[test]
    fn test_country_serde() {
        let json = serde_json::to_string(&Country::Switzerland).unwrap();
        assert_eq!(json, r#""Switzerland""#);

        let parsed: Country = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Country::Switzerland);
    }
}
