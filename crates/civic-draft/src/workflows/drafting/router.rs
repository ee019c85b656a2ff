use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::assembly::{assemble_document, export_file_name};
use super::domain::{
    deserialize_optional_state, DocumentType, DraftRequest, DraftResult, FailureReason,
    IndianState, SectionSet,
};
use super::guidance::{
    postal_address, state_portals, submission_guidance, PostalAddress, StatePortals,
    SubmissionGuidance,
};
use super::service::{DraftService, InferenceQuery};

/// HTTP endpoints for drafting, assembly, inference and filing guidance.
pub fn drafting_router(service: Arc<DraftService>) -> Router {
    Router::new()
        .route("/api/v1/drafts", post(draft_handler))
        .route("/api/v1/drafts/assemble", post(assemble_handler))
        .route("/api/v1/infer", post(infer_handler))
        .route("/api/v1/guidance", post(guidance_handler))
        .with_state(service)
}

pub(crate) async fn draft_handler(
    State(service): State<Arc<DraftService>>,
    axum::Json(request): axum::Json<DraftRequest>,
) -> Response {
    let result = service.generate_draft(&request).await;
    let status = match &result {
        DraftResult::Drafted(_) => StatusCode::OK,
        DraftResult::Failed(failure) => match failure.reason {
            FailureReason::InputTooShort => StatusCode::UNPROCESSABLE_ENTITY,
            FailureReason::GenerationFailed => StatusCode::INTERNAL_SERVER_ERROR,
        },
    };
    (status, axum::Json(result)).into_response()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembleRequest {
    pub document_type: DocumentType,
    pub sections: SectionSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembledDocument {
    pub document: String,
    pub file_name: String,
}

pub(crate) async fn assemble_handler(axum::Json(request): axum::Json<AssembleRequest>) -> Response {
    let assembled = AssembledDocument {
        document: assemble_document(&request.sections, request.document_type),
        file_name: export_file_name(request.document_type, Utc::now().date_naive()),
    };
    (StatusCode::OK, axum::Json(assembled)).into_response()
}

pub(crate) async fn infer_handler(
    State(service): State<Arc<DraftService>>,
    axum::Json(query): axum::Json<InferenceQuery>,
) -> Response {
    match service.infer(&query).await {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => {
            tracing::warn!(error = %error, "inference request failed");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceRequest {
    pub document_type: DocumentType,
    #[serde(default)]
    pub authority: String,
    #[serde(default, deserialize_with = "deserialize_optional_state")]
    pub state: Option<IndianState>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceResponse {
    pub guidance: SubmissionGuidance,
    pub portals: Option<StatePortals>,
    pub postal_address: PostalAddress,
}

impl GuidanceResponse {
    pub fn build(document_type: DocumentType, authority: &str, state: Option<IndianState>) -> Self {
        let state_label = state.map(IndianState::label).unwrap_or("");
        Self {
            guidance: submission_guidance(document_type, authority, state),
            portals: state.map(state_portals),
            postal_address: postal_address(authority, state_label),
        }
    }
}

pub(crate) async fn guidance_handler(
    axum::Json(request): axum::Json<GuidanceRequest>,
) -> Response {
    let response = GuidanceResponse::build(request.document_type, &request.authority, request.state);
    (StatusCode::OK, axum::Json(response)).into_response()
}
