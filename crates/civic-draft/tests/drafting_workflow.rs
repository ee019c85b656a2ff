//! End-to-end drafting scenarios exercised through the public service facade.

use std::sync::Arc;
use std::time::Duration;

use civic_draft::config::DraftingConfig;
use civic_draft::workflows::drafting::{
    assemble_document, ConfidenceLevel, DocumentType, DraftProjector, DraftRequest, DraftService,
    IndianState, InferenceBackendKind, Language, Projection, SectionKey, SectionSet, Tone,
};

fn service() -> DraftService {
    DraftService::from_config(&DraftingConfig::default())
}

fn request(description: &str) -> DraftRequest {
    let mut request = DraftRequest::default();
    request.applicant.name = "Asha Rao".to_string();
    request.applicant.state = Some(IndianState::Delhi);
    request.issue.description = description.to_string();
    request
}

/// Every section text appears in the document, in layout order.
fn assert_sections_in_order(document: &str, sections: &SectionSet, document_type: DocumentType) {
    let mut cursor = 0;
    for key in SectionKey::keys_for(document_type) {
        let text = sections.get(*key);
        let offset = document[cursor..]
            .find(text)
            .unwrap_or_else(|| panic!("section {} missing or out of order", key.as_str()));
        cursor += offset + text.len();
    }
}

#[tokio::test]
async fn information_request_becomes_rti_draft() {
    let result = service()
        .generate_draft(&request(
            "I want information about road repair work done in 2024 in my locality.",
        ))
        .await;

    let draft = result.draft().expect("draft generated");
    assert_eq!(draft.document_type, DocumentType::Rti);
    assert_eq!(draft.confidence, ConfidenceLevel::High);
    assert_eq!(draft.intent.entities.time_period.as_deref(), Some("2024"));

    let authority = draft.primary_authority().expect("authority suggested");
    assert_eq!(
        authority.name,
        "Public Information Officer, Delhi Government"
    );
    assert_eq!(authority.confidence, ConfidenceLevel::Low);

    assert!(draft
        .sections
        .get(SectionKey::Subject)
        .starts_with("Subject: Request for Information: I want information about road repair"));
    assert_eq!(
        draft.sections.get(SectionKey::ToSection),
        "To,\nPublic Information Officer, Delhi Government"
    );
    assert_eq!(
        draft.sections.get(SectionKey::TimePeriod),
        "\nTime Period: 2024"
    );

    // no address supplied
    assert!(!draft.validation.is_valid);
    assert_eq!(draft.validation.errors, vec!["Applicant Details is required"]);
    assert_eq!(draft.metadata.language, Language::English);
    assert_eq!(draft.metadata.tone, Tone::Neutral);
}

#[tokio::test]
async fn strict_pothole_report_becomes_complaint() {
    let mut input = request("My street has potholes, please fix them immediately");
    input.applicant.address = "7 Ring Road".to_string();
    input.issue.tone = Tone::Strict;

    let result = service().generate_draft(&input).await;
    let draft = result.draft().expect("draft generated");

    assert_eq!(draft.document_type, DocumentType::Complaint);
    assert_eq!(draft.sections.get(SectionKey::Relief), "fix them immediately");
    assert!(draft
        .sections
        .get(SectionKey::Issue)
        .starts_with("I must bring to your immediate attention that My street has potholes"));
    assert!(draft
        .sections
        .get(SectionKey::Subject)
        .starts_with("Subject: Complaint regarding: My street has potholes"));
    assert!(draft.validation.is_valid);
}

#[tokio::test]
async fn rule_engine_routes_road_complaints_to_public_works() {
    let config = DraftingConfig {
        backend: InferenceBackendKind::RuleEngine,
        ..DraftingConfig::default()
    };
    let mut input = request("My street has potholes, please fix them immediately");
    input.applicant.address = "7 Ring Road".to_string();

    let result = DraftService::from_config(&config).generate_draft(&input).await;
    let draft = result.draft().expect("draft generated");

    assert_eq!(draft.document_type, DocumentType::Complaint);
    assert_eq!(draft.sections.get(SectionKey::ToSection), "To,\nPWD, Delhi");
    assert_eq!(draft.authorities[0].confidence, ConfidenceLevel::High);
}

#[tokio::test]
async fn assembled_documents_keep_every_section() {
    let service = service();
    for description in [
        "Need copies of records for the water tanker contract in 2023",
        "The electricity meter is broken, I need a replacement",
        "Streetlights stay dark every night",
    ] {
        let mut input = request(description);
        input.applicant.address = "14 Lodhi Road".to_string();
        let result = service.generate_draft(&input).await;
        let draft = result.draft().expect("draft generated");

        let document = assemble_document(&draft.sections, draft.document_type);
        assert_sections_in_order(&document, &draft.sections, draft.document_type);
        assert!(document.ends_with("Asha Rao\n14 Lodhi Road"));
    }
}

#[tokio::test]
async fn edited_copy_assembles_without_touching_the_draft() {
    let result = service()
        .generate_draft(&request("My street has potholes, please fix them immediately"))
        .await;
    let draft = result.draft().expect("draft generated");

    let mut edited = draft.sections.clone();
    edited.set(SectionKey::Relief, "Resurface the whole street");

    let document = assemble_document(&edited, draft.document_type);
    assert!(document.contains("Relief Sought:\nResurface the whole street"));
    assert_eq!(draft.sections.get(SectionKey::Relief), "fix them immediately");
}

#[tokio::test]
async fn hindi_drafts_render_hindi_sections() {
    let mut input = request("I need details of the ration shop stock in my ward");
    input.issue.language = Language::Hindi;

    let result = service().generate_draft(&input).await;
    let draft = result.draft().expect("draft generated");

    assert_eq!(draft.document_type, DocumentType::Rti);
    assert_eq!(
        draft.sections.get(SectionKey::Header),
        "सूचना का अधिकार अधिनियम, 2005 के तहत आवेदन"
    );
    assert_eq!(draft.sections.get(SectionKey::Salutation), "महोदय/महोदया,");
}

#[tokio::test(start_paused = true)]
async fn projector_publishes_the_settled_draft() {
    let config = DraftingConfig::default();
    let service = Arc::new(DraftService::from_config(&config));
    let projector = DraftProjector::spawn(service, config.debounce);
    let mut updates = projector.subscribe();

    for partial in [
        "My street",
        "My street has potholes",
        "My street has potholes, please fix them",
    ] {
        projector
            .submit(request(partial))
            .expect("projector accepts input");
        tokio::time::sleep(Duration::from_millis(300)).await;
    }

    let projection = updates
        .wait_for(|projection| matches!(projection, Projection::Ready(_)))
        .await
        .expect("projector alive")
        .clone();
    let draft = projection.draft().expect("ready draft");
    assert_eq!(draft.sections.get(SectionKey::Relief), "fix them");

    projector.shutdown().await;
}
