//! Integration tests for the Classifier

use credence_classifier::{Classifier, ClassifierConfig, ClassifierError};
use credence_domain::{
    Annotations, AttachmentMetadata, EntityKind, Label, Revision, ScoringModel,
};
use credence_nlp::MockAnnotator;

fn seventy_words(sentence: &str) -> String {
    let mut words: Vec<&str> = sentence.split_whitespace().collect();
    while words.len() < 70 {
        words.push("word");
    }
    words.join(" ")
}

#[test]
fn test_empty_text_is_unclear_without_annotation() {
    let annotator = MockAnnotator::new();
    let classifier = Classifier::new(annotator.clone());

    for text in ["", "   ", "\n\t"] {
        let result = classifier.classify(text, &[]).unwrap();

        assert_eq!(result.label, Label::Unclear);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.classifier_version, "anchored-v4");
        assert_eq!(result.explanation.reason.as_deref(), Some("missing description"));
        assert!(!result.was_scored());
    }

    assert_eq!(annotator.call_count(), 0);
}

#[test]
fn test_evidence_narrative() {
    let annotator = MockAnnotator::new()
        .with_entity("March 3", EntityKind::Date)
        .with_entity("$120", EntityKind::Money);
    let classifier = Classifier::new(annotator.clone());
    let text = seventy_words("I paid the invoice on time and kept a screenshot of the transfer");

    let result = classifier.classify(&text, &[]).unwrap();

    assert_eq!(result.label, Label::EvidenceBased);
    assert!(result.score >= 0.42);
    assert_eq!(annotator.call_count(), 1);

    let features = result.explanation.features.unwrap();
    assert_eq!(features.evidence_hits, 2);
    assert_eq!(features.word_count, 70);
}

#[test]
fn test_hedged_accusation() {
    let classifier = Classifier::new(MockAnnotator::new());

    let result = classifier.classify("I think he is crazy and a liar", &[]).unwrap();

    assert_eq!(result.label, Label::OpinionBased);
    assert!(result.score >= 0.52);
    let breakdown = result.explanation.breakdown.unwrap();
    assert_eq!(breakdown.anchors, 0.0);
}

#[test]
fn test_neutral_text() {
    let classifier = Classifier::new(MockAnnotator::new());

    let result = classifier
        .classify("the weather was nice and we walked along the river", &[])
        .unwrap();

    assert_eq!(result.label, Label::Unclear);
    assert_eq!(result.score, 0.5);
}

#[test]
fn test_attachments_alone_stay_unclear() {
    let classifier = Classifier::new(MockAnnotator::new());
    let attachments = vec![
        AttachmentMetadata::new("a1", "uploads/a.bin"),
        AttachmentMetadata::new("a2", "uploads/b.bin"),
    ];

    let result = classifier.classify("please look at this", &attachments).unwrap();

    let breakdown = result.explanation.breakdown.unwrap();
    assert!((breakdown.anchors - 0.12).abs() < 1e-9);
    assert_eq!(result.label, Label::Unclear);
}

#[test]
fn test_annotation_failure_is_an_error() {
    let classifier = Classifier::new(MockAnnotator::failing("service down"));

    let result = classifier.classify("I have the receipt", &[]);

    match result {
        Err(ClassifierError::Annotation(message)) => assert!(message.contains("service down")),
        other => panic!("Expected annotation error, got {:?}", other),
    }
}

#[test]
fn test_classification_is_deterministic() {
    let classifier = Classifier::new(MockAnnotator::new().with_entity("Friday", EntityKind::Date));
    let text = "I believe the email proves order #44120 shipped";
    let attachments = vec![AttachmentMetadata::new("a1", "proof.png")];

    let first = classifier.classify(text, &attachments).unwrap();
    let second = classifier.classify(text, &attachments).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_classify_annotated_skips_annotator() {
    let annotator = MockAnnotator::new();
    let classifier = Classifier::new(annotator.clone());
    let text = "the receipt and the bank statement";

    let result = classifier.classify_annotated(text, &[], &Annotations::from_words(text));

    assert_eq!(annotator.call_count(), 0);
    assert_eq!(result.explanation.features.unwrap().evidence_hits, 2);
}

#[test]
fn test_summary_is_stamped_with_version() {
    let classifier = Classifier::new(MockAnnotator::new());

    let result = classifier.classify("maybe it was lost", &[]).unwrap();

    assert!(result.explanation.summary.starts_with("anchored-v4: label="));
    assert_eq!(result.explanation.version, result.classifier_version);
}

#[test]
fn test_from_config_historical_revision() {
    let classifier =
        Classifier::from_config(MockAnnotator::new(), &ClassifierConfig::historical()).unwrap();

    assert_eq!(classifier.version(), "additive-v1");

    let result = classifier
        .classify("they scammed me and lied", &[])
        .unwrap();
    assert_eq!(result.label, Label::OpinionBased);
    assert!(result.explanation.summary.contains("accusations=2"));
}

#[test]
fn test_from_config_custom_thresholds() {
    let mut config = ClassifierConfig::default();
    config.thresholds.evidence_min = Some(0.9);
    let annotator = MockAnnotator::new()
        .with_entity("May 2", EntityKind::Date)
        .with_entity("$40", EntityKind::Money);
    let text = "receipt invoice screenshot photo";

    let default_result = Classifier::new(annotator.clone()).classify(text, &[]).unwrap();
    assert_eq!(default_result.label, Label::EvidenceBased);

    let classifier = Classifier::from_config(annotator, &config).unwrap();
    assert_eq!(classifier.version(), "anchored-v4+custom");

    let result = classifier.classify(text, &[]).unwrap();
    assert_eq!(result.label, Label::Unclear);
    assert_eq!(result.classifier_version, "anchored-v4+custom");
}

#[test]
fn test_from_config_rejects_invalid() {
    let mut config = ClassifierConfig::default();
    config.lexicon.evidence_phrases.clear();

    let result = Classifier::from_config(MockAnnotator::new(), &config);
    assert!(matches!(result, Err(ClassifierError::Config(_))));
}

#[test]
fn test_with_model_swaps_revision() {
    let classifier =
        Classifier::new(MockAnnotator::new()).with_model(Revision::AdditiveV1.model());

    assert_eq!(classifier.version(), "additive-v1");
}

#[test]
fn test_compare_annotates_once() {
    let annotator = MockAnnotator::new();
    let classifier = Classifier::new(annotator.clone());

    let results = classifier
        .compare("I think the photo proves it", &[])
        .unwrap();

    assert_eq!(annotator.call_count(), 1);
    assert_eq!(results.len(), Revision::ALL.len());
    for (revision, result) in &results {
        assert_eq!(result.classifier_version, revision.as_str());
        assert_eq!(result.explanation.version, revision.model().version());
    }
}

#[test]
fn test_compare_empty_text() {
    let annotator = MockAnnotator::new();
    let classifier = Classifier::new(annotator.clone());

    let results = classifier.compare("", &[]).unwrap();

    assert_eq!(annotator.call_count(), 0);
    assert!(results.iter().all(|(_, r)| r.label == Label::Unclear && r.score == 0.0));
}

#[test]
fn test_result_serializes_label_names() {
    let classifier = Classifier::new(MockAnnotator::new());
    let result = classifier.classify("I think he is crazy and a liar", &[]).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["label"], "Opinion-Based");
    assert_eq!(json["classifier_version"], "anchored-v4");
    assert!(json["explanation"].get("reason").is_none());
}
