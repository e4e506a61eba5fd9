//! Integration tests for the FeatureExtractor

#[cfg(test)]
mod tests {
    use crate::{FeatureExtractor, LexiconConfig};
    use credence_domain::{
        AnchoredModel, Annotations, AttachmentMetadata, EntityKind, Label, ScoringModel, Token,
    };

    fn padded(sentence: &str, total_words: usize) -> String {
        let mut words: Vec<&str> = sentence.split_whitespace().collect();
        while words.len() < total_words {
            words.push("word");
        }
        words.join(" ")
    }

    #[test]
    fn test_evidence_narrative_features() {
        let extractor = FeatureExtractor::default();
        let text = padded("I paid the invoice and kept a screenshot of the transfer", 70);
        let annotations = Annotations::from_words(&text)
            .with_entity("March 3", EntityKind::Date)
            .with_entity("$120", EntityKind::Money);

        let features = extractor.extract(&text, &[], &annotations);

        assert_eq!(features.word_count, 70);
        assert_eq!(features.evidence_hits, 2);
        assert_eq!(features.opinion_hits, 0);
        assert!(features.has_dates);
        assert!(features.has_money);
        assert!(features.has_named_entities);
        assert_eq!(features.entity_count, 2);
        assert_eq!(features.id_hits, 0);
        assert_eq!(features.attachment_count, 0);

        let breakdown = AnchoredModel::new().score(&features);
        assert_eq!(breakdown.label, Label::EvidenceBased);
    }

    #[test]
    fn test_hedged_accusation_features() {
        let extractor = FeatureExtractor::default();
        let text = "I think he is crazy and a liar";

        let features = extractor.extract(text, &[], &Annotations::from_words(text));

        assert_eq!(features.word_count, 8);
        assert_eq!(features.opinion_hits, 1);
        assert_eq!(features.accusation_count, 1);
        assert_eq!(features.evidence_hits, 0);
        assert!(!features.has_named_entities);

        let breakdown = AnchoredModel::new().score(&features);
        assert_eq!(breakdown.anchors, 0.0);
        assert_eq!(breakdown.label, Label::OpinionBased);
    }

    #[test]
    fn test_neutral_text_has_no_signals() {
        let extractor = FeatureExtractor::default();
        let text = "the weather was nice and we walked along the river";

        let features = extractor.extract(text, &[], &Annotations::from_words(text));

        assert_eq!(features.word_count, 10);
        assert_eq!(features.evidence_hits, 0);
        assert_eq!(features.opinion_hits, 0);
        assert_eq!(features.accusation_count, 0);
        assert_eq!(features.id_hits, 0);
        assert!(!features.has_url);
        assert_eq!(AnchoredModel::new().score(&features).label, Label::Unclear);
    }

    #[test]
    fn test_attachment_count_alone() {
        let extractor = FeatureExtractor::default();
        let text = "please look at this";
        let attachments = vec![
            AttachmentMetadata::new("a1", "uploads/one.bin"),
            AttachmentMetadata::new("a2", "uploads/two.bin"),
        ];

        let features = extractor.extract(text, &attachments, &Annotations::from_words(text));

        assert_eq!(features.attachment_count, 2);
        assert!(!features.strong_attachment_types);

        let breakdown = AnchoredModel::new().score(&features);
        assert!((breakdown.anchors - 0.12).abs() < 1e-9);
        assert_eq!(breakdown.label, Label::Unclear);
    }

    #[test]
    fn test_strong_attachment_type() {
        let extractor = FeatureExtractor::default();
        let text = "receipt attached";
        let attachments = vec![
            AttachmentMetadata::new("a1", "uploads/notes.txt"),
            AttachmentMetadata::new("a2", "uploads/scan").with_mime_type("application/pdf"),
        ];

        let features = extractor.extract(text, &attachments, &Annotations::from_words(text));

        assert!(features.strong_attachment_types);
    }

    #[test]
    fn test_accusation_uses_lemma_then_text() {
        let extractor = FeatureExtractor::default();
        let annotations = Annotations {
            tokens: vec![
                Token::new("They"),
                Token::new("were").with_lemma("be"),
                Token::new("lying").with_lemma("lie"),
                Token::new("and"),
                Token::new("SCAMMED"),
                Token::new("me"),
            ],
            entities: vec![],
        };

        let features = extractor.extract("They were lying and SCAMMED me", &[], &annotations);

        assert_eq!(features.accusation_count, 2);
    }

    #[test]
    fn test_url_from_text_or_token_flag() {
        let extractor = FeatureExtractor::default();

        let text = "details at https://example.com/order";
        let features = extractor.extract(text, &[], &Annotations::from_words(text));
        assert!(features.has_url);

        let annotations = Annotations {
            tokens: vec![Token::new("see"), Token::new("example.com").url_like()],
            entities: vec![],
        };
        let features = extractor.extract("see example.com", &[], &annotations);
        assert!(features.has_url);
    }

    #[test]
    fn test_entity_kinds() {
        let extractor = FeatureExtractor::default();
        let text = "Dr Smith at Acme Bank";
        let annotations = Annotations::from_words(text)
            .with_entity("Dr Smith", EntityKind::Person)
            .with_entity("Acme Bank", EntityKind::Org)
            .with_entity("10:30", EntityKind::Time);

        let features = extractor.extract(text, &[], &annotations);

        assert_eq!(features.entity_count, 3);
        assert!(features.has_person);
        assert!(features.has_org_or_gpe);
        assert!(features.has_dates);
        assert!(!features.has_money);
    }

    #[test]
    fn test_single_entity_is_not_named_entities() {
        let extractor = FeatureExtractor::default();
        let text = "last Tuesday";
        let annotations =
            Annotations::from_words(text).with_entity("last Tuesday", EntityKind::Date);

        let features = extractor.extract(text, &[], &annotations);

        assert_eq!(features.entity_count, 1);
        assert!(!features.has_named_entities);
        assert!(features.has_dates);
    }

    #[test]
    fn test_identifier_families() {
        let extractor = FeatureExtractor::default();
        let text = "my case #44120 relates to INV-2231 and INV-2232";

        let features = extractor.extract(text, &[], &Annotations::from_words(text));

        assert_eq!(features.id_hits, 2);
    }

    #[test]
    fn test_custom_lexicon() {
        let config = LexiconConfig {
            evidence_phrases: vec!["delivery note".to_string()],
            opinion_phrases: vec!["i suspect".to_string()],
            accusation_terms: vec!["swindled".to_string()],
        };
        let extractor = FeatureExtractor::from_config(&config).unwrap();
        let text = "I suspect they swindled me despite the Delivery Note";

        let features = extractor.extract(text, &[], &Annotations::from_words(text));

        assert_eq!(features.evidence_hits, 1);
        assert_eq!(features.opinion_hits, 1);
        assert_eq!(features.accusation_count, 1);
    }

    #[test]
    fn test_invalid_lexicon_rejected() {
        let config = LexiconConfig {
            opinion_phrases: vec![],
            ..LexiconConfig::default()
        };

        assert!(FeatureExtractor::from_config(&config).is_err());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = FeatureExtractor::default();
        let text = "I believe the email and the receipt show order #99812 was paid";
        let annotations = Annotations::from_words(text);

        let first = extractor.extract(text, &[], &annotations);
        let second = extractor.extract(text, &[], &annotations);

        assert_eq!(first, second);
    }
}
