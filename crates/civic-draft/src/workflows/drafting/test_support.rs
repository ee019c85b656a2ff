use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::DraftingConfig;

use super::domain::{
    AuthorityCandidate, DraftRequest, EntitySet, IndianState, IntentResult, Language,
};
use super::inference::{HeuristicBackend, InferenceBackend, InferenceError};
use super::service::DraftService;

/// Heuristic backend that records how often it is called, optionally after a delay.
#[derive(Default)]
pub(crate) struct CountingBackend {
    delay: Option<Duration>,
    intent_calls: AtomicUsize,
    authority_calls: AtomicUsize,
}

impl CountingBackend {
    pub(crate) fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub(crate) fn intent_calls(&self) -> usize {
        self.intent_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn authority_calls(&self) -> usize {
        self.authority_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InferenceBackend for CountingBackend {
    async fn classify_intent(
        &self,
        text: &str,
        language: Language,
    ) -> Result<IntentResult, InferenceError> {
        self.intent_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        HeuristicBackend.classify_intent(text, language).await
    }

    async fn suggest_authority(
        &self,
        text: &str,
        state: &str,
        entities: &EntitySet,
    ) -> Result<Vec<AuthorityCandidate>, InferenceError> {
        self.authority_calls.fetch_add(1, Ordering::SeqCst);
        HeuristicBackend
            .suggest_authority(text, state, entities)
            .await
    }
}

/// Backend standing in for an unreachable remote model.
pub(crate) struct OfflineBackend;

#[async_trait]
impl InferenceBackend for OfflineBackend {
    async fn classify_intent(
        &self,
        _text: &str,
        _language: Language,
    ) -> Result<IntentResult, InferenceError> {
        Err(InferenceError::Unavailable("connection refused".to_string()))
    }

    async fn suggest_authority(
        &self,
        _text: &str,
        _state: &str,
        _entities: &EntitySet,
    ) -> Result<Vec<AuthorityCandidate>, InferenceError> {
        Err(InferenceError::Unavailable("connection refused".to_string()))
    }
}

pub(crate) fn request(description: &str) -> DraftRequest {
    let mut request = DraftRequest::default();
    request.applicant.name = "Asha Rao".to_string();
    request.applicant.address = "14 Lodhi Road".to_string();
    request.applicant.state = Some(IndianState::Delhi);
    request.issue.description = description.to_string();
    request
}

pub(crate) fn service(backend: Arc<dyn InferenceBackend>) -> DraftService {
    DraftService::new(backend, &DraftingConfig::default())
}
