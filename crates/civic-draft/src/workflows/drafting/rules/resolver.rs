use super::super::domain::{ConfidenceLevel, DocumentType, DocumentTypeResult, IntentResult};

pub(crate) const RTI_KEYWORDS: &[&str] = &[
    "information",
    "rti",
    "right to information",
    "details",
    "records",
    "documents",
    "copies",
    "data",
    "statistics",
    "report",
    "know",
];

pub(crate) const COMPLAINT_KEYWORDS: &[&str] = &[
    "complaint",
    "problem",
    "issue",
    "grievance",
    "dispute",
    "harassment",
    "corruption",
    "misconduct",
    "action",
    "redressal",
    "solve",
    "fix",
];

/// Raw keyword tallies behind a resolution, kept for audit output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordScores {
    pub rti: usize,
    pub complaint: usize,
}

impl KeywordScores {
    /// Each keyword counts once, matched as a plain substring.
    pub fn tally(text: &str) -> Self {
        let lower = text.to_lowercase();
        let count = |keywords: &[&str]| {
            keywords
                .iter()
                .filter(|keyword| lower.contains(*keyword))
                .count()
        };

        Self {
            rti: count(RTI_KEYWORDS),
            complaint: count(COMPLAINT_KEYWORDS),
        }
    }

    pub fn resolve(self) -> DocumentTypeResult {
        let (document_type, confidence) = if self.rti > self.complaint && self.rti > 0 {
            (DocumentType::Rti, ConfidenceLevel::High)
        } else if self.complaint > self.rti && self.complaint > 0 {
            (DocumentType::Complaint, ConfidenceLevel::High)
        } else if self.rti > 0 {
            // tie at a positive score goes to RTI
            (DocumentType::Rti, ConfidenceLevel::Medium)
        } else {
            (DocumentType::Unknown, ConfidenceLevel::Low)
        };

        DocumentTypeResult {
            document_type,
            confidence,
        }
    }
}

pub fn determine_document_type(text: &str) -> DocumentTypeResult {
    KeywordScores::tally(text).resolve()
}

/// A high-confidence rule verdict stands; otherwise the intent suggestion overrides it.
pub fn reconcile(rule: &DocumentTypeResult, intent: &IntentResult) -> DocumentType {
    if rule.confidence == ConfidenceLevel::High {
        rule.document_type
    } else {
        intent.suggested_document_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::drafting::domain::EntitySet;

    fn intent(suggested: DocumentType) -> IntentResult {
        IntentResult {
            is_information_request: suggested == DocumentType::Rti,
            is_action_request: suggested == DocumentType::Complaint,
            entities: EntitySet::default(),
            confidence: ConfidenceLevel::Medium,
            suggested_document_type: suggested,
        }
    }

    #[test]
    fn rti_only_keywords_resolve_to_rti_high() {
        for keyword in RTI_KEYWORDS {
            let result = determine_document_type(&format!("Share the {keyword} please"));
            assert_eq!(result.document_type, DocumentType::Rti, "keyword {keyword}");
            assert_eq!(result.confidence, ConfidenceLevel::High);
        }
    }

    #[test]
    fn complaint_only_keywords_resolve_to_complaint_high() {
        for keyword in COMPLAINT_KEYWORDS {
            let result = determine_document_type(&format!("There is {keyword} here"));
            assert_eq!(
                result.document_type,
                DocumentType::Complaint,
                "keyword {keyword}"
            );
            assert_eq!(result.confidence, ConfidenceLevel::High);
        }
    }

    #[test]
    fn no_keywords_resolve_to_unknown_low() {
        let result = determine_document_type("Streetlights stay dark every night");
        assert_eq!(
            result,
            DocumentTypeResult {
                document_type: DocumentType::Unknown,
                confidence: ConfidenceLevel::Low,
            }
        );
    }

    #[test]
    fn ties_favor_rti_at_medium_confidence() {
        let scores = KeywordScores::tally("Corruption records");
        assert_eq!(scores, KeywordScores { rti: 1, complaint: 1 });
        assert_eq!(
            scores.resolve(),
            DocumentTypeResult {
                document_type: DocumentType::Rti,
                confidence: ConfidenceLevel::Medium,
            }
        );
    }

    #[test]
    fn repeated_keyword_counts_once() {
        let scores = KeywordScores::tally("problem problem problem with the records");
        assert_eq!(scores, KeywordScores { rti: 1, complaint: 1 });
    }

    #[test]
    fn matching_is_not_word_boundary_aware() {
        // "prefix" contains "fix", "knowledge" contains "know"
        let scores = KeywordScores::tally("prefix knowledge");
        assert_eq!(scores, KeywordScores { rti: 1, complaint: 1 });
    }

    #[test]
    fn high_confidence_rule_wins_reconciliation() {
        let rule = DocumentTypeResult {
            document_type: DocumentType::Complaint,
            confidence: ConfidenceLevel::High,
        };
        assert_eq!(
            reconcile(&rule, &intent(DocumentType::Rti)),
            DocumentType::Complaint
        );
    }

    #[test]
    fn intent_overrides_non_high_rule() {
        let rule = DocumentTypeResult {
            document_type: DocumentType::Rti,
            confidence: ConfidenceLevel::Medium,
        };
        assert_eq!(
            reconcile(&rule, &intent(DocumentType::Complaint)),
            DocumentType::Complaint
        );

        let unknown = DocumentTypeResult {
            document_type: DocumentType::Unknown,
            confidence: ConfidenceLevel::Low,
        };
        assert_eq!(
            reconcile(&unknown, &intent(DocumentType::Unknown)),
            DocumentType::Unknown
        );
    }
}
