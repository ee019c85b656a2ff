use super::super::domain::{DocumentType, Tone};
use super::super::rules::triggers::{LegalTriggers, Severity};

const FORMAL_PREFIX: &str = "I respectfully submit that ";
const FORMAL_SUFFIX: &str = " I trust this matter will receive due attention.";
const STRICT_PREFIX: &str = "I must bring to your immediate attention that ";
const STRICT_SUFFIX: &str =
    " I expect prompt action on this matter as per applicable regulations.";

/// Wrap the issue text with register-appropriate framing. Neutral is the identity.
pub fn adapt_tone(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Neutral => text.to_string(),
        Tone::Formal => format!("{FORMAL_PREFIX}{text}{FORMAL_SUFFIX}"),
        Tone::Strict => format!("{STRICT_PREFIX}{text}{STRICT_SUFFIX}"),
    }
}

/// How pressing the applicant says the matter is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Routine,
    Critical,
}

/// Register recommendation shown next to the tone picker.
pub fn suggest_tone(
    document_type: DocumentType,
    triggers: &LegalTriggers,
    urgency: Urgency,
) -> Tone {
    if urgency == Urgency::Critical {
        return Tone::Strict;
    }

    // corruption and misconduct are the high-severity markers
    if triggers.highest_severity() == Some(Severity::High) {
        return Tone::Strict;
    }

    if document_type == DocumentType::Rti {
        Tone::Formal
    } else {
        Tone::Neutral
    }
}
