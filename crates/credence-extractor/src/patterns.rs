//! Regex tables for URLs and identifier families
//!
//! Compiled once per process and shared read-only.

use once_cell::sync::Lazy;
use regex::Regex;

static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://\S+|www\.\S+").expect("Invalid URL regex"));

// "case #4471", "Ticket# AB12", "ref #: 88213"
static LABELED_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:case|report|ticket|order|invoice|reference|ref)\s*#\s*:?\s*[a-z0-9]{4,}\b",
    )
    .expect("Invalid labeled identifier regex")
});

// "INV-2231", "ab-00912"
static GENERIC_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z]{2,5}-\d{3,}\b").expect("Invalid generic code regex")
});

/// A family of identifier patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdFamily {
    /// A label word followed by `#` and an alphanumeric token
    Labeled,
    /// Two to five letters, a hyphen, three or more digits
    GenericCode,
}

impl IdFamily {
    /// Every family
    pub const ALL: [IdFamily; 2] = [IdFamily::Labeled, IdFamily::GenericCode];

    fn regex(&self) -> &'static Regex {
        match self {
            IdFamily::Labeled => &LABELED_ID,
            IdFamily::GenericCode => &GENERIC_CODE,
        }
    }

    /// Whether the family matches anywhere in the text
    pub fn is_present(&self, text: &str) -> bool {
        self.regex().is_match(text)
    }
}

/// Families present in the text
pub fn id_families(text: &str) -> Vec<IdFamily> {
    IdFamily::ALL
        .into_iter()
        .filter(|family| family.is_present(text))
        .collect()
}

/// Number of families present; repeat matches within a family count once
pub fn count_id_families(text: &str) -> usize {
    id_families(text).len()
}

/// Whether the raw text contains a URL
pub fn contains_url(text: &str) -> bool {
    URL.is_match(text)
}
