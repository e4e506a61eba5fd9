//! Annotation types produced by the natural-language provider
//!
//! The classifier never tokenizes text itself; it consumes these values from an
//! [`Annotator`](crate::traits::Annotator).

use serde::{Deserialize, Serialize};

/// One token of the annotated text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Token {
    /// Literal token text
    pub text: String,

    /// Lemma, empty when the provider has none
    #[serde(default)]
    pub lemma: String,

    /// Token consists of alphabetic characters only
    #[serde(default)]
    pub is_alpha: bool,

    /// Token looks like a URL
    #[serde(default)]
    pub like_url: bool,
}

impl Token {
    /// Create a token, deriving `is_alpha` from its text
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let is_alpha = !text.is_empty() && text.chars().all(char::is_alphabetic);
        Self {
            text,
            lemma: String::new(),
            is_alpha,
            like_url: false,
        }
    }

    /// Set the lemma
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }

    /// Mark the token as URL-like
    pub fn url_like(mut self) -> Self {
        self.like_url = true;
        self
    }

    /// Lower-cased lemma, falling back to the token text when no lemma exists
    pub fn lemma_or_text(&self) -> String {
        if self.lemma.trim().is_empty() {
            self.text.to_lowercase()
        } else {
            self.lemma.to_lowercase()
        }
    }
}

/// Named-entity type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityKind {
    /// Calendar date or relative day
    Date,
    /// Time of day
    Time,
    /// Monetary amount
    Money,
    /// Person name
    Person,
    /// Organization
    Org,
    /// Geo-political entity
    Gpe,
    /// Any other provider label
    Other(String),
}

impl EntityKind {
    /// Provider label for this kind
    pub fn as_str(&self) -> &str {
        match self {
            EntityKind::Date => "DATE",
            EntityKind::Time => "TIME",
            EntityKind::Money => "MONEY",
            EntityKind::Person => "PERSON",
            EntityKind::Org => "ORG",
            EntityKind::Gpe => "GPE",
            EntityKind::Other(label) => label,
        }
    }

    /// Parse a provider label (case-insensitive); unknown labels are kept
    pub fn parse(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "DATE" => EntityKind::Date,
            "TIME" => EntityKind::Time,
            "MONEY" => EntityKind::Money,
            "PERSON" => EntityKind::Person,
            "ORG" => EntityKind::Org,
            "GPE" => EntityKind::Gpe,
            other => EntityKind::Other(other.to_string()),
        }
    }

    /// DATE or TIME
    pub fn is_temporal(&self) -> bool {
        matches!(self, EntityKind::Date | EntityKind::Time)
    }
}

impl From<String> for EntityKind {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<EntityKind> for String {
    fn from(kind: EntityKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A recognized named-entity span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Surface text of the entity
    pub text: String,

    /// Entity type
    #[serde(alias = "label")]
    pub kind: EntityKind,

    /// Byte offset of the span start in the source text
    #[serde(default)]
    pub start: usize,

    /// Byte offset of the span end in the source text
    #[serde(default)]
    pub end: usize,
}

impl EntitySpan {
    /// Create a span without offsets
    pub fn new(text: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            text: text.into(),
            kind,
            start: 0,
            end: 0,
        }
    }
}

/// Provider output for one text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotations {
    /// Token stream in text order
    #[serde(default)]
    pub tokens: Vec<Token>,

    /// Named-entity spans
    #[serde(default)]
    pub entities: Vec<EntitySpan>,
}

impl Annotations {
    /// Build annotations from whitespace-separated words with no entities
    ///
    /// Mostly useful in tests and for providers that only tokenize.
    pub fn from_words(text: &str) -> Self {
        Self {
            tokens: text.split_whitespace().map(Token::new).collect(),
            entities: Vec::new(),
        }
    }

    /// Add an entity span
    pub fn with_entity(mut self, text: impl Into<String>, kind: EntityKind) -> Self {
        self.entities.push(EntitySpan::new(text, kind));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lemma_fallback() {
        let token = Token::new("Scammed");
        assert_eq!(token.lemma_or_text(), "scammed");

        let token = Token::new("stole").with_lemma("Steal");
        assert_eq!(token.lemma_or_text(), "steal");
    }

    #[test]
    fn test_is_alpha_derivation() {
        assert!(Token::new("receipt").is_alpha);
        assert!(!Token::new("$40").is_alpha);
        assert!(!Token::new("I'm").is_alpha);
        assert!(!Token::new("").is_alpha);
    }

    #[test]
    fn test_entity_kind_labels() {
        assert_eq!(EntityKind::parse("money"), EntityKind::Money);
        assert_eq!(EntityKind::parse("NORP"), EntityKind::Other("NORP".to_string()));
        assert!(EntityKind::Time.is_temporal());
        assert!(!EntityKind::Money.is_temporal());
    }

    #[test]
    fn test_entity_span_accepts_label_field() {
        let span: EntitySpan =
            serde_json::from_str(r#"{"text": "$40", "label": "MONEY", "start": 3, "end": 6}"#)
                .unwrap();
        assert_eq!(span.kind, EntityKind::Money);
        assert_eq!(span.end, 6);
    }
}
