//! Rule-based annotation provider
//!
//! Offline tokenizer and entity tagger. Lemmas are left empty, so accusation
//! matching falls back to surface forms.

use crate::NlpError;
use credence_domain::traits::Annotator;
use credence_domain::{Annotations, EntityKind, EntitySpan, Token};
use once_cell::sync::Lazy;
use regex::Regex;

const MONTHS: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?xi)
        (?P<url>https?://\S+|www\.\S+)
        | (?P<domain>[a-z0-9-]+(?:\.[a-z0-9-]+)*\.(?:com|org|net|io|gov|edu|co|uk|us)\b(?:/\S*)?)
        | (?P<money>[$€£]\d[\d,]*(?:\.\d+)?)
        | (?P<number>\d+(?:[.,:/-]\d+)*(?:st|nd|rd|th|am|pm)?)
        | (?P<word>[a-z]+)
        | (?P<clitic>['’][a-z]+)
        | (?P<punct>[^\sa-z0-9])
        ",
    )
    .expect("Invalid token regex")
});

static DATE_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        format!(r"(?i)\b(?:{MONTHS})\.?\s+\d{{1,2}}(?:st|nd|rd|th)?(?:,?\s+\d{{4}})?\b"),
        format!(r"(?i)\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:of\s+)?(?:{MONTHS})\b(?:,?\s+\d{{4}})?"),
        r"\b\d{1,2}/\d{1,2}/\d{2,4}\b".to_string(),
        r"\b\d{4}-\d{2}-\d{2}\b".to_string(),
        r"\b(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)\b".to_string(),
        r"(?i)\b(?:yesterday|today|tomorrow|last\s+(?:night|week|month|year)|(?:a|two|three|several)\s+(?:days|weeks|months)\s+ago)\b".to_string(),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid date regex"))
    .collect()
});

static TIME_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b\d{1,2}:\d{2}(?:\s?[ap]m)?\b",
        r"(?i)\b\d{1,2}\s?[ap]m\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid time regex"))
    .collect()
});

static MONEY_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"[$€£]\s?\d[\d,]*(?:\.\d+)?",
        r"(?i)\b\d[\d,]*(?:\.\d+)?\s?(?:dollars|bucks|usd|euros?|eur|pounds|gbp)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid money regex"))
    .collect()
});

static PERSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:Mr|Mrs|Ms|Miss|Dr|Prof|Officer)\.?\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?\b")
        .expect("Invalid person regex")
});

static ORG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:[A-Z][A-Za-z&]*\s+){1,3}(?:Inc|LLC|Ltd|Corp|Corporation|Company|Co|Bank|Group|Bancorp)\b\.?",
    )
    .expect("Invalid organization regex")
});

/// Offline annotator built from regular expressions
///
/// Recognizes DATE, TIME, MONEY, PERSON (honorific + name) and ORG (name +
/// company suffix) spans. Overlapping spans keep the earliest, longest match.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleAnnotator;

impl RuleAnnotator {
    /// Create a new RuleAnnotator
    pub fn new() -> Self {
        Self
    }

    /// Split text into tokens
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        TOKEN
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let token = Token::new(whole.as_str());
                if caps.name("url").is_some() || caps.name("domain").is_some() {
                    Some(token.url_like())
                } else {
                    Some(token)
                }
            })
            .collect()
    }

    /// Recognize entity spans, ordered by offset
    pub fn entities(&self, text: &str) -> Vec<EntitySpan> {
        let mut candidates: Vec<EntitySpan> = Vec::new();

        let mut collect = |regex: &Regex, kind: EntityKind| {
            for m in regex.find_iter(text) {
                candidates.push(EntitySpan {
                    text: m.as_str().trim_end().to_string(),
                    kind: kind.clone(),
                    start: m.start(),
                    end: m.start() + m.as_str().trim_end().len(),
                });
            }
        };

        for regex in DATE_RULES.iter() {
            collect(regex, EntityKind::Date);
        }
        for regex in TIME_RULES.iter() {
            collect(regex, EntityKind::Time);
        }
        for regex in MONEY_RULES.iter() {
            collect(regex, EntityKind::Money);
        }
        collect(&*PERSON, EntityKind::Person);
        collect(&*ORG, EntityKind::Org);

        // Earliest first, then longest
        candidates.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then((b.end - b.start).cmp(&(a.end - a.start)))
        });

        let mut spans: Vec<EntitySpan> = Vec::with_capacity(candidates.len());
        for span in candidates {
            let overlaps = spans.last().is_some_and(|last| span.start < last.end);
            if !overlaps {
                spans.push(span);
            }
        }

        spans
    }
}

impl Annotator for RuleAnnotator {
    type Error = NlpError;

    fn annotate(&self, text: &str) -> Result<Annotations, Self::Error> {
        Ok(Annotations {
            tokens: self.tokenize(text),
            entities: self.entities(text),
        })
    }
}
