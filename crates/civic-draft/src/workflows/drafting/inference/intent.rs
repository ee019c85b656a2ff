use super::super::domain::{ConfidenceLevel, DocumentType, IntentResult};
use super::entities::extract_entities;

const INFORMATION_PHRASES: &[&str] = &[
    "how many",
    "list of",
    "details of",
    "information about",
    "copies of",
    "records of",
];

const ACTION_VERBS: &[&str] = &[
    "need", "want", "should", "must", "require", "fix", "solve", "address",
];

/// Keyword intent scoring. Information-seeking wins over action-seeking.
pub fn classify_intent(text: &str) -> IntentResult {
    let lower = text.to_lowercase();

    let is_information_request = INFORMATION_PHRASES
        .iter()
        .any(|phrase| lower.contains(phrase));
    let is_action_request = ACTION_VERBS.iter().any(|verb| lower.contains(verb));

    let confidence = if is_information_request || is_action_request {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    };

    let suggested_document_type = if is_information_request {
        DocumentType::Rti
    } else if is_action_request {
        DocumentType::Complaint
    } else {
        DocumentType::Unknown
    };

    IntentResult {
        is_information_request,
        is_action_request,
        entities: extract_entities(text),
        confidence,
        suggested_document_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn information_phrase_suggests_rti() {
        let intent = classify_intent("Please share the list of contractors paid in 2023");
        assert!(intent.is_information_request);
        assert_eq!(intent.suggested_document_type, DocumentType::Rti);
        assert_eq!(intent.confidence, ConfidenceLevel::Medium);
        assert_eq!(intent.entities.time_period.as_deref(), Some("2023"));
    }

    #[test]
    fn information_wins_when_both_signals_present() {
        let intent = classify_intent("I need copies of the tender file");
        assert!(intent.is_information_request);
        assert!(intent.is_action_request);
        assert_eq!(intent.suggested_document_type, DocumentType::Rti);
    }

    #[test]
    fn action_verb_suggests_complaint() {
        let intent = classify_intent("The department must FIX the drainage");
        assert!(!intent.is_information_request);
        assert_eq!(intent.suggested_document_type, DocumentType::Complaint);
    }

    #[test]
    fn no_signal_is_low_confidence_unknown() {
        let intent = classify_intent("Streetlights stay dark every night");
        assert_eq!(intent.confidence, ConfidenceLevel::Low);
        assert_eq!(intent.suggested_document_type, DocumentType::Unknown);
    }
}
