use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::DraftingConfig;

use super::domain::{
    deserialize_optional_state, AuthorityCandidate, DocumentData, DocumentType,
    DocumentTypeResult, Draft, DraftMetadata, DraftRequest, DraftResult, IndianState,
    IntentResult, Language, Tone,
};
use super::inference::{adapt_tone, suggest_tone, InferenceBackend, InferenceError, Urgency};
use super::relief::{extract_relief_sought, UNKNOWN_TYPE_RELIEF};
use super::rules::{
    determine_document_type, detect_legal_triggers, reconcile, validate_document, LegalTriggers,
};
use super::sections::generate_sections;

const SUBJECT_CHARS: usize = 60;

/// Subject line from the first characters of the issue text. The cut ignores word boundaries.
pub fn generate_subject(text: &str, document_type: DocumentType) -> String {
    let shortened: String = text.chars().take(SUBJECT_CHARS).collect();
    let shortened = shortened.trim();
    match document_type {
        DocumentType::Rti => format!("Request for Information: {shortened}..."),
        DocumentType::Complaint | DocumentType::Unknown => {
            format!("Complaint regarding: {shortened}...")
        }
    }
}

/// Ad hoc inference over a piece of issue text, without drafting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceQuery {
    #[serde(rename = "issueDescription")]
    pub text: String,
    #[serde(default, deserialize_with = "deserialize_optional_state")]
    pub state: Option<IndianState>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub urgent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceReport {
    pub intent: IntentResult,
    pub keyword_verdict: DocumentTypeResult,
    pub document_type: DocumentType,
    pub authorities: Vec<AuthorityCandidate>,
    pub legal_triggers: LegalTriggers,
    pub suggested_tone: Tone,
}

/// Orchestrates inference, rule resolution, section generation and validation for one request.
pub struct DraftService {
    backend: Arc<dyn InferenceBackend>,
    min_issue_chars: usize,
}

impl DraftService {
    pub fn new(backend: Arc<dyn InferenceBackend>, config: &DraftingConfig) -> Self {
        Self {
            backend,
            min_issue_chars: config.min_issue_chars,
        }
    }

    pub fn from_config(config: &DraftingConfig) -> Self {
        Self::new(config.backend.build(), config)
    }

    /// Whether the description is long enough to draft from.
    pub fn accepts(&self, request: &DraftRequest) -> bool {
        request.issue.description.trim().chars().count() >= self.min_issue_chars
    }

    /// Produce a draft, or a structured failure. Never panics on bad input.
    pub async fn generate_draft(&self, request: &DraftRequest) -> DraftResult {
        if !self.accepts(request) {
            tracing::debug!(
                min_chars = self.min_issue_chars,
                "issue description below drafting threshold"
            );
            return DraftResult::too_short();
        }

        match self.draft(request).await {
            Ok(draft) => {
                tracing::info!(
                    document_type = draft.document_type.label(),
                    confidence = draft.confidence.label(),
                    valid = draft.validation.is_valid,
                    "draft generated"
                );
                DraftResult::Drafted(Box::new(draft))
            }
            Err(error) => {
                tracing::warn!(error = %error, "draft generation failed");
                DraftResult::generation_failed(error.to_string())
            }
        }
    }

    async fn draft(&self, request: &DraftRequest) -> Result<Draft, InferenceError> {
        let issue = &request.issue;
        let applicant = &request.applicant;
        let text = issue.description.trim();

        let intent = self.backend.classify_intent(text, issue.language).await?;
        let verdict = determine_document_type(text);
        let document_type = reconcile(&verdict, &intent);
        tracing::debug!(
            keyword_type = verdict.document_type.label(),
            intent_type = intent.suggested_document_type.label(),
            resolved = document_type.label(),
            "document type resolved"
        );

        let authorities = self
            .backend
            .suggest_authority(text, applicant.state_label(), &intent.entities)
            .await?;

        let relief_sought = match document_type {
            DocumentType::Rti => None,
            DocumentType::Complaint => Some(extract_relief_sought(text)),
            DocumentType::Unknown => Some(UNKNOWN_TYPE_RELIEF.to_string()),
        };

        let data = DocumentData {
            applicant: applicant.clone(),
            authority: authorities
                .first()
                .map(|candidate| candidate.name.clone())
                .unwrap_or_default(),
            subject: generate_subject(text, document_type),
            issue_description: adapt_tone(text, issue.tone),
            time_period: intent.entities.time_period.clone(),
            previous_rti: issue.previous_rti,
            previous_rti_number: issue.previous_rti_number.clone(),
            relief_sought,
            language: issue.language,
        };

        let sections = generate_sections(&data, document_type);
        let validation = validate_document(document_type, &data);
        if !validation.is_valid {
            tracing::debug!(errors = ?validation.errors, "draft has missing sections");
        }

        Ok(Draft {
            success: true,
            document_type,
            confidence: verdict.confidence,
            sections,
            authorities,
            intent,
            validation,
            legal_triggers: detect_legal_triggers(text),
            metadata: DraftMetadata {
                generated_at: Utc::now(),
                language: issue.language,
                tone: issue.tone,
            },
        })
    }

    /// Classification, authority and tone hints for a piece of text.
    pub async fn infer(&self, query: &InferenceQuery) -> Result<InferenceReport, InferenceError> {
        let state = query.state.map(IndianState::label).unwrap_or("");
        let intent = self
            .backend
            .classify_intent(&query.text, query.language)
            .await?;
        let keyword_verdict = determine_document_type(&query.text);
        let document_type = reconcile(&keyword_verdict, &intent);
        let authorities = self
            .backend
            .suggest_authority(&query.text, state, &intent.entities)
            .await?;
        let legal_triggers = detect_legal_triggers(&query.text);
        let urgency = if query.urgent {
            Urgency::Critical
        } else {
            Urgency::Routine
        };
        let suggested_tone = suggest_tone(document_type, &legal_triggers, urgency);

        Ok(InferenceReport {
            intent,
            keyword_verdict,
            document_type,
            authorities,
            legal_triggers,
            suggested_tone,
        })
    }
}
