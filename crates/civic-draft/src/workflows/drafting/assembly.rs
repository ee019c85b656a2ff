use chrono::NaiveDate;

use super::domain::{DocumentType, SectionKey, SectionSet, Signatory};

/// Paragraph layout per document type. Keys inside a paragraph are joined by a single newline.
const RTI_LAYOUT: &[&[SectionKey]] = &[
    &[SectionKey::Header],
    &[SectionKey::ToSection],
    &[SectionKey::FromSection],
    &[SectionKey::Subject],
    &[SectionKey::Salutation],
    &[SectionKey::Body],
    &[SectionKey::Requests, SectionKey::TimePeriod],
    &[SectionKey::Fee],
    &[SectionKey::Closing],
];

const COMPLAINT_LAYOUT: &[&[SectionKey]] = &[
    &[SectionKey::Header],
    &[SectionKey::ToSection],
    &[SectionKey::FromSection],
    &[SectionKey::Subject],
    &[SectionKey::Salutation],
    &[SectionKey::Body],
    &[SectionKey::Issue],
    &[SectionKey::ReliefHeader, SectionKey::Relief],
    &[SectionKey::Closing],
];

fn layout(document_type: DocumentType) -> &'static [&'static [SectionKey]] {
    match document_type {
        DocumentType::Rti => RTI_LAYOUT,
        DocumentType::Complaint | DocumentType::Unknown => COMPLAINT_LAYOUT,
    }
}

fn signature_block(signatory: &Signatory) -> Option<String> {
    let lines: Vec<&str> = [signatory.name.trim(), signatory.address.trim()]
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Final plain-text document. Works the same on generated and user-edited sections;
/// absent keys render as empty text.
pub fn assemble_document(sections: &SectionSet, document_type: DocumentType) -> String {
    let mut paragraphs: Vec<String> = layout(document_type)
        .iter()
        .map(|keys| {
            keys.iter()
                .map(|key| sections.get(*key))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();

    if let Some(signature) = signature_block(&sections.signatory) {
        paragraphs.push(signature);
    }

    paragraphs.join("\n\n")
}

/// Download name for an exported draft, e.g. `RTI_2024-05-01.txt`.
pub fn export_file_name(document_type: DocumentType, date: NaiveDate) -> String {
    format!("{}_{}.txt", document_type.label(), date.format("%Y-%m-%d"))
}
