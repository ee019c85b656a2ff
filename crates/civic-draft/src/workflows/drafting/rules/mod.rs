//! Deterministic rules: document-type resolution, structure validation and legal trigger detection.

pub mod resolver;
pub mod structure;
pub mod triggers;

pub use resolver::{determine_document_type, reconcile, KeywordScores};
pub use structure::{structure_for, validate_document, DocumentStructure, StructureSection};
pub use triggers::{detect_legal_triggers, LegalTriggers};
