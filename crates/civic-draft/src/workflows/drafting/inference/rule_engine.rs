//! Category-scored rule engine: an alternative to the single-keyword heuristics.
//!
//! Intent is decided by the number of RTI, complaint and appeal phrases present; authorities
//! come from issue categories, each scored by how many of its keywords appear.

use async_trait::async_trait;

use super::super::domain::{
    AuthorityCandidate, ConfidenceLevel, DocumentType, EntitySet, IntentResult, Language,
};
use super::entities::extract_entities;
use super::{InferenceBackend, InferenceError};

const RTI_PHRASES: &[&str] = &[
    "information",
    "records",
    "documents",
    "copies",
    "rti",
    "right to information",
    "public authority",
    "inspection",
    "certified copies",
    "section 6",
    "section 8",
];

const COMPLAINT_PHRASES: &[&str] = &[
    "complaint",
    "grievance",
    "problem",
    "issue",
    "harassment",
    "corruption",
    "delay",
    "negligence",
    "misconduct",
    "fraud",
    "not working",
    "broken",
    "damaged",
    "poor service",
];

const APPEAL_PHRASES: &[&str] = &[
    "appeal",
    "review",
    "reconsider",
    "rejected",
    "denial",
    "first appeal",
    "second appeal",
    "information commission",
];

/// Candidates returned at most.
const MAX_CANDIDATES: usize = 3;

struct IssueCategory {
    name: &'static str,
    departments: &'static [&'static str],
    keywords: &'static [&'static str],
}

const ISSUE_CATEGORIES: &[IssueCategory] = &[
    IssueCategory {
        name: "electricity",
        departments: &["State Electricity Board", "DISCOM", "Power Department"],
        keywords: &["electricity", "power", "meter", "billing", "load shedding", "transformer"],
    },
    IssueCategory {
        name: "water",
        departments: &["Water Supply Department", "Municipal Corporation", "Jal Board"],
        keywords: &["water", "water supply", "pipeline", "sewage", "drainage"],
    },
    IssueCategory {
        name: "roads",
        departments: &["PWD", "Municipal Corporation", "NHAI"],
        keywords: &["road", "pothole", "highway", "street", "footpath"],
    },
    IssueCategory {
        name: "education",
        departments: &["Education Department", "School Board", "University"],
        keywords: &["school", "college", "education", "admission", "fees", "certificate"],
    },
    IssueCategory {
        name: "health",
        departments: &["Health Department", "Hospital Administration", "Medical Board"],
        keywords: &["hospital", "health", "medical", "doctor", "medicine", "treatment"],
    },
    IssueCategory {
        name: "police",
        departments: &["Police Department", "SP Office", "Police Commissioner"],
        keywords: &["police", "fir", "crime", "theft", "harassment", "safety"],
    },
    IssueCategory {
        name: "land",
        departments: &["Revenue Department", "Land Records", "Tehsildar"],
        keywords: &["land", "property", "registry", "mutation", "encroachment"],
    },
    IssueCategory {
        name: "transport",
        departments: &["RTO", "Transport Department", "Traffic Police"],
        keywords: &["vehicle", "license", "registration", "traffic", "bus", "transport"],
    },
    IssueCategory {
        name: "ration",
        departments: &["Food & Civil Supplies", "PDS Office"],
        keywords: &["ration", "pds", "food", "fair price", "aadhar", "ration card"],
    },
    IssueCategory {
        name: "pension",
        departments: &["Pension Department", "Treasury Office"],
        keywords: &["pension", "retirement", "epf", "gratuity"],
    },
];

fn count_hits(lower: &str, phrases: &[&str]) -> usize {
    phrases.iter().filter(|phrase| lower.contains(*phrase)).count()
}

/// Two or more phrase hits are decisive, a single hit is suggestive.
fn confidence_for(hits: usize) -> ConfidenceLevel {
    match hits {
        0 => ConfidenceLevel::Low,
        1 => ConfidenceLevel::Medium,
        _ => ConfidenceLevel::High,
    }
}

/// Phrase-count intent. Appeals are filed under the RTI Act, so they resolve to RTI;
/// a tie between RTI and complaint stays unknown.
pub fn classify_by_rules(text: &str) -> IntentResult {
    let lower = text.to_lowercase();
    let rti = count_hits(&lower, RTI_PHRASES);
    let complaint = count_hits(&lower, COMPLAINT_PHRASES);
    let appeal = count_hits(&lower, APPEAL_PHRASES);
    let top = rti.max(complaint).max(appeal);

    let (suggested_document_type, confidence) = if top == 0 {
        (DocumentType::Unknown, ConfidenceLevel::Low)
    } else if rti == top && rti > complaint {
        (DocumentType::Rti, confidence_for(rti))
    } else if complaint == top && complaint > rti {
        (DocumentType::Complaint, confidence_for(complaint))
    } else if appeal == top {
        (DocumentType::Rti, confidence_for(appeal))
    } else {
        (DocumentType::Unknown, ConfidenceLevel::Low)
    };

    IntentResult {
        is_information_request: rti > 0 || appeal > 0,
        is_action_request: complaint > 0,
        entities: extract_entities(text),
        confidence,
        suggested_document_type,
    }
}

/// Up to three categories ranked by keyword hits, each naming its lead department.
/// Falls back to the state information officer when nothing matches.
pub fn rank_authorities(text: &str, state: &str) -> Vec<AuthorityCandidate> {
    let lower = text.to_lowercase();

    let mut scored: Vec<(usize, &IssueCategory)> = ISSUE_CATEGORIES
        .iter()
        .map(|category| (count_hits(&lower, category.keywords), category))
        .filter(|(hits, _)| *hits > 0)
        .collect();
    // stable: equal scores keep table order
    scored.sort_by(|left, right| right.0.cmp(&left.0));

    let mut candidates: Vec<AuthorityCandidate> = scored
        .into_iter()
        .take(MAX_CANDIDATES)
        .filter_map(|(hits, category)| {
            category.departments.first().map(|department| AuthorityCandidate {
                name: format!("{department}, {state}"),
                confidence: confidence_for(hits),
                reason: format!(
                    "Issue relates to {} ({hits} matching keywords)",
                    category.name
                ),
            })
        })
        .collect();

    if candidates.is_empty() {
        candidates.push(AuthorityCandidate {
            name: format!("Public Information Officer, {state} Government"),
            confidence: ConfidenceLevel::Low,
            reason: "Default state-level authority".to_string(),
        });
    }

    candidates
}

/// Backend driven by the category and phrase tables above.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngineBackend;

#[async_trait]
impl InferenceBackend for RuleEngineBackend {
    async fn classify_intent(
        &self,
        text: &str,
        language: Language,
    ) -> Result<IntentResult, InferenceError> {
        tracing::debug!(language = language.label(), "classifying intent by rule tables");
        Ok(classify_by_rules(text))
    }

    async fn suggest_authority(
        &self,
        text: &str,
        state: &str,
        _entities: &EntitySet,
    ) -> Result<Vec<AuthorityCandidate>, InferenceError> {
        let candidates = rank_authorities(text, state);
        tracing::debug!(
            state,
            candidates = candidates.len(),
            "ranked authorities by issue category"
        );
        Ok(candidates)
    }
}
