//! Premium postcode lookup
//!
//! A per-state table of postcodes whose location reduces risk. The built-in
//! table covers the capital-city markets; configuration may replace any
//! state's list.

use std::collections::BTreeMap;

/// State and territory codes accepted as table keys
pub const KNOWN_STATES: &[&str] = &["NSW", "VIC", "QLD", "WA", "SA", "TAS", "ACT", "NT"];

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "NSW",
        &[
            "2000", "2021", "2024", "2027", "2028", "2030", "2060", "2061", "2088", "2108",
        ],
    ),
    (
        "VIC",
        &["3101", "3141", "3142", "3143", "3144", "3186", "3206"],
    ),
    ("QLD", &["4005", "4007", "4064", "4217", "4218", "4567"]),
    ("WA", &["6009", "6010", "6011", "6151"]),
    ("SA", &["5006", "5061", "5065", "5066", "5067"]),
    ("TAS", &["7004", "7005"]),
    ("ACT", &["2600", "2603"]),
];

/// Premium postcode table keyed by upper-case state code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiumPostcodes {
    by_state: BTreeMap<String, Vec<String>>,
}

impl Default for PremiumPostcodes {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PremiumPostcodes {
    /// The built-in table
    pub fn builtin() -> Self {
        let by_state = BUILTIN
            .iter()
            .map(|(state, codes)| {
                (
                    state.to_string(),
                    codes.iter().map(|c| c.to_string()).collect(),
                )
            })
            .collect();
        PremiumPostcodes { by_state }
    }

    /// A table with no premium postcodes
    pub fn empty() -> Self {
        PremiumPostcodes {
            by_state: BTreeMap::new(),
        }
    }

    /// Replace one state's list
    pub fn set_state<I, S>(&mut self, state: &str, postcodes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = postcodes
            .into_iter()
            .map(|c| c.as_ref().trim().to_string())
            .collect();
        self.by_state.insert(normalize_state(state), codes);
    }

    /// Postcodes listed for a state (empty if the state has no entry)
    pub fn for_state(&self, state: &str) -> &[String] {
        self.by_state
            .get(&normalize_state(state))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate states in sorted order
    pub fn states(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.by_state.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Check whether a postcode is premium
    ///
    /// With a known state only that state's list is consulted; without one,
    /// any state's list matches.
    pub fn is_premium(&self, state: Option<&str>, postcode: &str) -> bool {
        let postcode = postcode.trim();
        if postcode.is_empty() {
            return false;
        }
        match state.map(str::trim).filter(|s| !s.is_empty()) {
            Some(state) => self.for_state(state).iter().any(|p| p == postcode),
            None => self
                .by_state
                .values()
                .any(|codes| codes.iter().any(|p| p == postcode)),
        }
    }
}

/// Upper-case, trimmed state code
pub fn normalize_state(state: &str) -> String {
    state.trim().to_ascii_uppercase()
}

/// True for recognised Australian state and territory codes
pub fn is_known_state(state: &str) -> bool {
    KNOWN_STATES.contains(&normalize_state(state).as_str())
}

/// True for a four-digit Australian postcode
pub fn is_valid_postcode(postcode: &str) -> bool {
    let postcode = postcode.trim();
    postcode.len() == 4 && postcode.bytes().all(|b| b.is_ascii_digit())
}
