use super::domain::{DocumentData, DocumentType, Language, SectionKey, SectionSet};

/// Fixed wording for one output language.
struct Phrases {
    to: &'static str,
    subject_label: &'static str,
    salutation: &'static str,
    phone_label: &'static str,
    email_label: &'static str,
    name_placeholder: &'static str,
    address_placeholder: &'static str,
    rti: RtiPhrases,
    complaint: ComplaintPhrases,
}

struct RtiPhrases {
    header: &'static str,
    authority_placeholder: &'static str,
    applicant_label: &'static str,
    default_subject: &'static str,
    reference_opening: &'static str,
    reference_closing: &'static str,
    reference_placeholder: &'static str,
    body: &'static str,
    requests_placeholder: &'static str,
    time_period_label: &'static str,
    fee: &'static str,
    closing: &'static str,
}

struct ComplaintPhrases {
    header: &'static str,
    authority_placeholder: &'static str,
    applicant_label: &'static str,
    default_subject: &'static str,
    body: &'static str,
    issue_placeholder: &'static str,
    relief_header: &'static str,
    relief_placeholder: &'static str,
    closing: &'static str,
}

const ENGLISH: Phrases = Phrases {
    to: "To",
    subject_label: "Subject",
    salutation: "Sir/Madam,",
    phone_label: "Phone",
    email_label: "Email",
    name_placeholder: "[Applicant Name]",
    address_placeholder: "[Address]",
    rti: RtiPhrases {
        header: "Application under Right to Information Act, 2005",
        authority_placeholder: "[Public Authority Name]",
        applicant_label: "Applicant",
        default_subject: "Request for Information under RTI Act",
        reference_opening:
            "This is with reference to my previous RTI application filed with your office (Reference Number:",
        reference_closing: "and I hereby request the following information:",
        reference_placeholder: "[Reference Number]",
        body: "Under the Right to Information Act, 2005, I hereby request the following information:",
        requests_placeholder: "[Enter your information requests here]",
        time_period_label: "Time Period",
        fee: "\nI am willing to pay the required application fee.",
        closing: "Please provide the requested information within the stipulated time frame as per the provisions of the Act.\n\nThank you.",
    },
    complaint: ComplaintPhrases {
        header: "Complaint Letter",
        authority_placeholder: "[Concerned Authority/Grievance Cell]",
        applicant_label: "Complainant",
        default_subject: "Complaint Registration",
        body: "I wish to file a formal complaint regarding the following matter:",
        issue_placeholder: "[Enter your complaint details here]",
        relief_header: "\nRelief Sought:",
        relief_placeholder: "[What action or resolution you seek]",
        closing: "\nKindly look into this matter on priority and take appropriate action.\n\nThank you.",
    },
};

const HINDI: Phrases = Phrases {
    to: "सेवा में",
    subject_label: "विषय",
    salutation: "महोदय/महोदया,",
    phone_label: "फोन",
    email_label: "ईमेल",
    name_placeholder: "[आवेदक का नाम]",
    address_placeholder: "[पता]",
    rti: RtiPhrases {
        header: "सूचना का अधिकार अधिनियम, 2005 के तहत आवेदन",
        authority_placeholder: "[प्राधिकरण का नाम]",
        applicant_label: "आवेदक",
        default_subject: "सूचना के अधिकार के तहत सूचना का अनुरोध",
        reference_opening: "मैं आपके कार्यालय में पहले दायर आरटीआई आवेदन (संदर्भ संख्या:",
        reference_closing: "के संदर्भ में निम्नलिखित जानकारी का अनुरोध कर रहा/रही हूं:",
        reference_placeholder: "[संदर्भ संख्या]",
        body: "मैं सूचना के अधिकार अधिनियम, 2005 के तहत निम्नलिखित जानकारी का अनुरोध कर रहा/रही हूं:",
        requests_placeholder: "[यहां अपने सूचना अनुरोध दर्ज करें]",
        time_period_label: "समय अवधि",
        fee: "\nमैं आवेदन शुल्क के रूप में आवश्यक राशि का भुगतान करने के लिए तैयार हूं।",
        closing: "कृपया अधिनियम के प्रावधानों के अनुसार निर्धारित समय सीमा के भीतर अनुरोधित जानकारी प्रदान करें।\n\nधन्यवाद।",
    },
    complaint: ComplaintPhrases {
        header: "शिकायत पत्र",
        authority_placeholder: "[संबंधित प्राधिकरण/शिकायत निवारण प्रकोष्ठ]",
        applicant_label: "शिकायतकर्ता",
        default_subject: "शिकायत पंजीकरण",
        body: "मैं निम्नलिखित मुद्दे के संबंध में औपचारिक शिकायत दर्ज करना चाहता/चाहती हूं:",
        issue_placeholder: "[अपनी शिकायत का विवरण यहां दर्ज करें]",
        relief_header: "\nअनुरोधित निवारण:",
        relief_placeholder: "[आप क्या कार्रवाई या समाधान चाहते हैं]",
        closing: "\nकृपया इस मामले को प्राथमिकता के आधार पर देखें और उचित कार्रवाई करें।\n\nधन्यवाद।",
    },
};

fn phrases(language: Language) -> &'static Phrases {
    match language {
        Language::English => &ENGLISH,
        Language::Hindi => &HINDI,
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder
    } else {
        trimmed
    }
}

fn optional_or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    or_placeholder(value.unwrap_or(""), placeholder)
}

/// Sender block: label line, then name, address and state, then any contact lines.
fn from_section(data: &DocumentData, phrases: &Phrases, label: &str) -> String {
    let applicant = &data.applicant;
    let mut lines = vec![
        format!("{label}:"),
        or_placeholder(&applicant.name, phrases.name_placeholder).to_string(),
        or_placeholder(&applicant.address, phrases.address_placeholder).to_string(),
    ];

    if let Some(state) = applicant.state {
        lines.push(state.label().to_string());
    }
    if let Some(phone) = applicant.phone.as_deref().filter(|v| !v.trim().is_empty()) {
        lines.push(format!("{}: {}", phrases.phone_label, phone.trim()));
    }
    if let Some(email) = applicant.email.as_deref().filter(|v| !v.trim().is_empty()) {
        lines.push(format!("{}: {}", phrases.email_label, email.trim()));
    }

    lines.join("\n")
}

fn rti_sections(data: &DocumentData, sections: &mut SectionSet) {
    let phrases = phrases(data.language);
    let rti = &phrases.rti;

    let body = if data.previous_rti {
        let reference =
            optional_or_placeholder(data.previous_rti_number.as_deref(), rti.reference_placeholder);
        format!(
            "{} {}) {}",
            rti.reference_opening, reference, rti.reference_closing
        )
    } else {
        rti.body.to_string()
    };

    let time_period = data
        .time_period
        .as_deref()
        .map(str::trim)
        .filter(|period| !period.is_empty())
        .map(|period| format!("\n{}: {}", rti.time_period_label, period))
        .unwrap_or_default();

    sections.set(SectionKey::Header, rti.header);
    sections.set(
        SectionKey::ToSection,
        format!(
            "{},\n{}",
            phrases.to,
            or_placeholder(&data.authority, rti.authority_placeholder)
        ),
    );
    sections.set(
        SectionKey::FromSection,
        from_section(data, phrases, rti.applicant_label),
    );
    sections.set(
        SectionKey::Subject,
        format!(
            "{}: {}",
            phrases.subject_label,
            or_placeholder(&data.subject, rti.default_subject)
        ),
    );
    sections.set(SectionKey::Salutation, phrases.salutation);
    sections.set(SectionKey::Body, body);
    sections.set(
        SectionKey::Requests,
        or_placeholder(&data.issue_description, rti.requests_placeholder),
    );
    sections.set(SectionKey::TimePeriod, time_period);
    sections.set(SectionKey::Fee, rti.fee);
    sections.set(SectionKey::Closing, rti.closing);
}

fn complaint_sections(data: &DocumentData, sections: &mut SectionSet) {
    let phrases = phrases(data.language);
    let complaint = &phrases.complaint;

    sections.set(SectionKey::Header, complaint.header);
    sections.set(
        SectionKey::ToSection,
        format!(
            "{},\n{}",
            phrases.to,
            or_placeholder(&data.authority, complaint.authority_placeholder)
        ),
    );
    sections.set(
        SectionKey::FromSection,
        from_section(data, phrases, complaint.applicant_label),
    );
    sections.set(
        SectionKey::Subject,
        format!(
            "{}: {}",
            phrases.subject_label,
            or_placeholder(&data.subject, complaint.default_subject)
        ),
    );
    sections.set(SectionKey::Salutation, phrases.salutation);
    sections.set(SectionKey::Body, complaint.body);
    sections.set(
        SectionKey::Issue,
        or_placeholder(&data.issue_description, complaint.issue_placeholder),
    );
    sections.set(SectionKey::ReliefHeader, complaint.relief_header);
    sections.set(
        SectionKey::Relief,
        optional_or_placeholder(data.relief_sought.as_deref(), complaint.relief_placeholder),
    );
    sections.set(SectionKey::Closing, complaint.closing);
}

/// Render every section for the document type. Unknown documents render as complaints.
pub fn generate_sections(data: &DocumentData, document_type: DocumentType) -> SectionSet {
    let mut sections = SectionSet::new(data.signatory());
    match document_type {
        DocumentType::Rti => rti_sections(data, &mut sections),
        DocumentType::Complaint | DocumentType::Unknown => complaint_sections(data, &mut sections),
    }
    sections
}
