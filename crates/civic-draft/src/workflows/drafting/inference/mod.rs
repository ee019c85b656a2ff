//! Text inference: entity extraction, intent classification, authority suggestion and tone.
//!
//! Classification and authority lookup sit behind [`InferenceBackend`] so a model-backed
//! implementation can replace the keyword heuristics without touching the pipeline.

pub mod authority;
pub mod entities;
pub mod intent;
pub mod rule_engine;
pub mod tone;

use std::sync::Arc;

use async_trait::async_trait;

use super::domain::{AuthorityCandidate, EntitySet, IntentResult, Language};

pub use authority::suggest_authority;
pub use entities::extract_entities;
pub use intent::classify_intent;
pub use rule_engine::RuleEngineBackend;
pub use tone::{adapt_tone, suggest_tone, Urgency};

/// Error raised by an inference backend. Surfaces to callers as a failed draft.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("inference backend unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn classify_intent(
        &self,
        text: &str,
        language: Language,
    ) -> Result<IntentResult, InferenceError>;

    /// Ranked candidates; implementations never return an empty list.
    async fn suggest_authority(
        &self,
        text: &str,
        state: &str,
        entities: &EntitySet,
    ) -> Result<Vec<AuthorityCandidate>, InferenceError>;
}

/// Deterministic keyword backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicBackend;

#[async_trait]
impl InferenceBackend for HeuristicBackend {
    async fn classify_intent(
        &self,
        text: &str,
        language: Language,
    ) -> Result<IntentResult, InferenceError> {
        tracing::debug!(language = language.label(), "classifying intent");
        Ok(classify_intent(text))
    }

    async fn suggest_authority(
        &self,
        text: &str,
        state: &str,
        entities: &EntitySet,
    ) -> Result<Vec<AuthorityCandidate>, InferenceError> {
        tracing::debug!(
            state,
            department = entities.department.as_deref().unwrap_or(""),
            "suggesting authority"
        );
        Ok(suggest_authority(text, state))
    }
}

/// Backend selected through `DRAFT_INFERENCE_BACKEND`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InferenceBackendKind {
    #[default]
    Heuristic,
    RuleEngine,
}

impl InferenceBackendKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Some(InferenceBackendKind::Heuristic),
            "rule_engine" | "rule-engine" | "rules" => Some(InferenceBackendKind::RuleEngine),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            InferenceBackendKind::Heuristic => "heuristic",
            InferenceBackendKind::RuleEngine => "rule_engine",
        }
    }

    pub fn build(self) -> Arc<dyn InferenceBackend> {
        match self {
            InferenceBackendKind::Heuristic => Arc::new(HeuristicBackend),
            InferenceBackendKind::RuleEngine => Arc::new(RuleEngineBackend),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::drafting::domain::{ConfidenceLevel, DocumentType};

    #[test]
    fn backend_kind_parses_case_insensitively() {
        assert_eq!(
            InferenceBackendKind::parse(" Heuristic "),
            Some(InferenceBackendKind::Heuristic)
        );
        assert_eq!(
            InferenceBackendKind::parse("RULE-ENGINE"),
            Some(InferenceBackendKind::RuleEngine)
        );
        assert_eq!(InferenceBackendKind::parse("gpt"), None);
        assert_eq!(InferenceBackendKind::default().label(), "heuristic");
    }

    #[tokio::test]
    async fn heuristic_backend_delegates_to_keyword_rules() {
        let backend = InferenceBackendKind::Heuristic.build();

        let intent = backend
            .classify_intent("I want details of the ward budget", Language::English)
            .await
            .expect("heuristic never fails");
        assert_eq!(intent.suggested_document_type, DocumentType::Rti);

        let authorities = backend
            .suggest_authority("Nothing matches here", "Goa", &EntitySet::default())
            .await
            .expect("heuristic never fails");
        assert_eq!(authorities.len(), 1);
        assert_eq!(authorities[0].confidence, ConfidenceLevel::Low);
    }

    #[tokio::test]
    async fn rule_engine_backend_is_selectable() {
        let backend = InferenceBackendKind::parse("rule_engine")
            .expect("known backend")
            .build();

        let authorities = backend
            .suggest_authority("Potholes on the highway", "Punjab", &EntitySet::default())
            .await
            .expect("rule engine never fails");
        assert_eq!(authorities[0].name, "PWD, Punjab");

        let intent = backend
            .classify_intent(
                "File a first appeal with the information commission",
                Language::Hindi,
            )
            .await
            .expect("rule engine never fails");
        assert_eq!(intent.suggested_document_type, DocumentType::Rti);
    }
}
