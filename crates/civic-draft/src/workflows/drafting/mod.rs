//! RTI request and grievance letter drafting.
//!
//! Free text goes through keyword inference and rule resolution, then becomes bilingual
//! document sections that can be edited and assembled into a final letter.

pub mod assembly;
pub mod domain;
pub mod guidance;
pub mod inference;
pub mod projection;
pub mod relief;
pub mod router;
pub mod rules;
pub mod sections;
pub mod service;

#[cfg(test)]
mod test_support;

pub use assembly::{assemble_document, export_file_name};
pub use domain::{
    ApplicantProfile, AuthorityCandidate, ConfidenceLevel, DocumentData, DocumentType,
    DocumentTypeResult, Draft, DraftFailure, DraftMemoKey, DraftMetadata, DraftRequest,
    DraftResult, EntitySet, FailureReason, IndianState, IntentResult, IssueInput, Language,
    SectionKey, SectionSet, Signatory, Tone, ValidationResult, GENERATION_FAILED_MESSAGE,
    INPUT_TOO_SHORT_MESSAGE,
};
pub use guidance::{postal_address, state_portals, submission_guidance, SubmissionGuidance};
pub use inference::{
    HeuristicBackend, InferenceBackend, InferenceBackendKind, InferenceError, RuleEngineBackend,
    Urgency,
};
pub use projection::{DraftProjector, Projection, ProjectorClosed};
pub use router::{drafting_router, GuidanceResponse};
pub use rules::{detect_legal_triggers, validate_document, LegalTriggers};
pub use sections::generate_sections;
pub use service::{generate_subject, DraftService, InferenceQuery, InferenceReport};
