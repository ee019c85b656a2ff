use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rules::triggers::LegalTriggers;

/// States and union territories an applicant can file from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IndianState {
    AndhraPradesh,
    ArunachalPradesh,
    Assam,
    Bihar,
    Chhattisgarh,
    Goa,
    Gujarat,
    Haryana,
    HimachalPradesh,
    Jharkhand,
    Karnataka,
    Kerala,
    MadhyaPradesh,
    Maharashtra,
    Manipur,
    Meghalaya,
    Mizoram,
    Nagaland,
    Odisha,
    Punjab,
    Rajasthan,
    Sikkim,
    TamilNadu,
    Telangana,
    Tripura,
    UttarPradesh,
    Uttarakhand,
    WestBengal,
    AndamanAndNicobarIslands,
    Chandigarh,
    DadraAndNagarHaveliAndDamanAndDiu,
    Delhi,
    JammuAndKashmir,
    Ladakh,
    Lakshadweep,
    Puducherry,
}

impl IndianState {
    pub const ALL: [IndianState; 36] = [
        IndianState::AndhraPradesh,
        IndianState::ArunachalPradesh,
        IndianState::Assam,
        IndianState::Bihar,
        IndianState::Chhattisgarh,
        IndianState::Goa,
        IndianState::Gujarat,
        IndianState::Haryana,
        IndianState::HimachalPradesh,
        IndianState::Jharkhand,
        IndianState::Karnataka,
        IndianState::Kerala,
        IndianState::MadhyaPradesh,
        IndianState::Maharashtra,
        IndianState::Manipur,
        IndianState::Meghalaya,
        IndianState::Mizoram,
        IndianState::Nagaland,
        IndianState::Odisha,
        IndianState::Punjab,
        IndianState::Rajasthan,
        IndianState::Sikkim,
        IndianState::TamilNadu,
        IndianState::Telangana,
        IndianState::Tripura,
        IndianState::UttarPradesh,
        IndianState::Uttarakhand,
        IndianState::WestBengal,
        IndianState::AndamanAndNicobarIslands,
        IndianState::Chandigarh,
        IndianState::DadraAndNagarHaveliAndDamanAndDiu,
        IndianState::Delhi,
        IndianState::JammuAndKashmir,
        IndianState::Ladakh,
        IndianState::Lakshadweep,
        IndianState::Puducherry,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            IndianState::AndhraPradesh => "Andhra Pradesh",
            IndianState::ArunachalPradesh => "Arunachal Pradesh",
            IndianState::Assam => "Assam",
            IndianState::Bihar => "Bihar",
            IndianState::Chhattisgarh => "Chhattisgarh",
            IndianState::Goa => "Goa",
            IndianState::Gujarat => "Gujarat",
            IndianState::Haryana => "Haryana",
            IndianState::HimachalPradesh => "Himachal Pradesh",
            IndianState::Jharkhand => "Jharkhand",
            IndianState::Karnataka => "Karnataka",
            IndianState::Kerala => "Kerala",
            IndianState::MadhyaPradesh => "Madhya Pradesh",
            IndianState::Maharashtra => "Maharashtra",
            IndianState::Manipur => "Manipur",
            IndianState::Meghalaya => "Meghalaya",
            IndianState::Mizoram => "Mizoram",
            IndianState::Nagaland => "Nagaland",
            IndianState::Odisha => "Odisha",
            IndianState::Punjab => "Punjab",
            IndianState::Rajasthan => "Rajasthan",
            IndianState::Sikkim => "Sikkim",
            IndianState::TamilNadu => "Tamil Nadu",
            IndianState::Telangana => "Telangana",
            IndianState::Tripura => "Tripura",
            IndianState::UttarPradesh => "Uttar Pradesh",
            IndianState::Uttarakhand => "Uttarakhand",
            IndianState::WestBengal => "West Bengal",
            IndianState::AndamanAndNicobarIslands => "Andaman and Nicobar Islands",
            IndianState::Chandigarh => "Chandigarh",
            IndianState::DadraAndNagarHaveliAndDamanAndDiu => {
                "Dadra and Nagar Haveli and Daman and Diu"
            }
            IndianState::Delhi => "Delhi",
            IndianState::JammuAndKashmir => "Jammu and Kashmir",
            IndianState::Ladakh => "Ladakh",
            IndianState::Lakshadweep => "Lakshadweep",
            IndianState::Puducherry => "Puducherry",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_label(value: &str) -> Option<Self> {
        let needle = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|state| state.label().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for IndianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for IndianState {
    type Error = UnknownState;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value).ok_or(UnknownState(value))
    }
}

impl From<IndianState> for String {
    fn from(value: IndianState) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("'{0}' is not a recognised Indian state or union territory")]
pub struct UnknownState(pub String);

/// Blank selections (the form's initial value) deserialize as `None`.
pub(crate) fn deserialize_optional_state<'de, D>(
    deserializer: D,
) -> Result<Option<IndianState>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => IndianState::from_label(value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(UnknownState(value.to_string()))),
    }
}

/// Output language for generated sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// Anything other than Hindi renders in English.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "hindi" | "hi" => Language::Hindi,
            _ => Language::English,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
        }
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Register used when framing the issue text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Tone {
    #[default]
    Neutral,
    Formal,
    Strict,
}

impl Tone {
    /// Unknown registers fall back to neutral.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "formal" => Tone::Formal,
            "strict" => Tone::Strict,
            _ => Tone::Neutral,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Formal => "formal",
            Tone::Strict => "strict",
        }
    }
}

impl From<String> for Tone {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Rti,
    Complaint,
    Unknown,
}

impl DocumentType {
    pub const fn label(self) -> &'static str {
        match self {
            DocumentType::Rti => "RTI",
            DocumentType::Complaint => "COMPLAINT",
            DocumentType::Unknown => "UNKNOWN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "RTI" => Some(DocumentType::Rti),
            "COMPLAINT" => Some(DocumentType::Complaint),
            "UNKNOWN" => Some(DocumentType::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative certainty attached to a classification or suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

/// Who is filing. Name, address and state are mandatory for a complete submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantProfile {
    #[serde(rename = "applicantName", default)]
    pub name: String,
    #[serde(rename = "applicantAddress", default)]
    pub address: String,
    #[serde(
        rename = "applicantState",
        default,
        deserialize_with = "deserialize_optional_state"
    )]
    pub state: Option<IndianState>,
    #[serde(rename = "applicantPhone", default)]
    pub phone: Option<String>,
    #[serde(rename = "applicantEmail", default)]
    pub email: Option<String>,
}

impl ApplicantProfile {
    /// Mandatory fields that are absent or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        if self.state.is_none() {
            missing.push("state");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn state_label(&self) -> &'static str {
        self.state.map(IndianState::label).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueInput {
    #[serde(rename = "issueDescription", default)]
    pub description: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub tone: Tone,
    #[serde(rename = "previousRTI", default)]
    pub previous_rti: bool,
    #[serde(rename = "previousRTINumber", default)]
    pub previous_rti_number: Option<String>,
}

/// Single input to the drafting pipeline: applicant profile plus issue details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftRequest {
    #[serde(flatten)]
    pub applicant: ApplicantProfile,
    #[serde(flatten)]
    pub issue: IssueInput,
}

/// Structural fingerprint of a normalized request, used to skip redundant regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DraftMemoKey(u64);

impl DraftRequest {
    pub fn memo_key(&self) -> DraftMemoKey {
        let mut hasher = DefaultHasher::new();
        self.normalized().hash(&mut hasher);
        DraftMemoKey(hasher.finish())
    }

    /// Whitespace-trimmed copy with blank optionals collapsed to `None`.
    pub fn normalized(&self) -> DraftRequest {
        fn blank_to_none(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        }

        DraftRequest {
            applicant: ApplicantProfile {
                name: self.applicant.name.trim().to_string(),
                address: self.applicant.address.trim().to_string(),
                state: self.applicant.state,
                phone: blank_to_none(&self.applicant.phone),
                email: blank_to_none(&self.applicant.email),
            },
            issue: IssueInput {
                description: self.issue.description.trim().to_string(),
                language: self.issue.language,
                tone: self.issue.tone,
                previous_rti: self.issue.previous_rti,
                previous_rti_number: blank_to_none(&self.issue.previous_rti_number),
            },
        }
    }
}

/// Structured hints pulled out of free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySet {
    pub time_period: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResult {
    pub is_information_request: bool,
    pub is_action_request: bool,
    pub entities: EntitySet,
    pub confidence: ConfidenceLevel,
    pub suggested_document_type: DocumentType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeResult {
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub confidence: ConfidenceLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityCandidate {
    pub name: String,
    pub confidence: ConfidenceLevel,
    pub reason: String,
}

/// Merged record feeding section generation. Built once per draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentData {
    #[serde(flatten)]
    pub applicant: ApplicantProfile,
    pub authority: String,
    pub subject: String,
    pub issue_description: String,
    pub time_period: Option<String>,
    #[serde(rename = "previousRTI")]
    pub previous_rti: bool,
    #[serde(rename = "previousRTINumber")]
    pub previous_rti_number: Option<String>,
    pub relief_sought: Option<String>,
    pub language: Language,
}

impl DocumentData {
    pub fn signatory(&self) -> Signatory {
        Signatory {
            name: self.applicant.name.trim().to_string(),
            address: self.applicant.address.trim().to_string(),
        }
    }
}

/// Named blocks of document text, in the order the assembler emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    Header,
    ToSection,
    FromSection,
    Subject,
    Salutation,
    Body,
    Requests,
    TimePeriod,
    Fee,
    Issue,
    ReliefHeader,
    Relief,
    Closing,
}

impl SectionKey {
    pub const fn keys_for(document_type: DocumentType) -> &'static [SectionKey] {
        match document_type {
            DocumentType::Rti => &[
                SectionKey::Header,
                SectionKey::ToSection,
                SectionKey::FromSection,
                SectionKey::Subject,
                SectionKey::Salutation,
                SectionKey::Body,
                SectionKey::Requests,
                SectionKey::TimePeriod,
                SectionKey::Fee,
                SectionKey::Closing,
            ],
            DocumentType::Complaint | DocumentType::Unknown => &[
                SectionKey::Header,
                SectionKey::ToSection,
                SectionKey::FromSection,
                SectionKey::Subject,
                SectionKey::Salutation,
                SectionKey::Body,
                SectionKey::Issue,
                SectionKey::ReliefHeader,
                SectionKey::Relief,
                SectionKey::Closing,
            ],
        }
    }

    /// Wire name, matching the serialized key.
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionKey::Header => "header",
            SectionKey::ToSection => "toSection",
            SectionKey::FromSection => "fromSection",
            SectionKey::Subject => "subject",
            SectionKey::Salutation => "salutation",
            SectionKey::Body => "body",
            SectionKey::Requests => "requests",
            SectionKey::TimePeriod => "timePeriod",
            SectionKey::Fee => "fee",
            SectionKey::Issue => "issue",
            SectionKey::ReliefHeader => "reliefHeader",
            SectionKey::Relief => "relief",
            SectionKey::Closing => "closing",
        }
    }
}

/// Sign-off rendered under the closing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signatory {
    pub name: String,
    pub address: String,
}

/// Rendered sections of a draft. Cloning gives an independently editable copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSet {
    pub sections: BTreeMap<SectionKey, String>,
    #[serde(default)]
    pub signatory: Signatory,
}

impl SectionSet {
    pub fn new(signatory: Signatory) -> Self {
        Self {
            sections: BTreeMap::new(),
            signatory,
        }
    }

    /// Section text, or the empty string when the key is absent.
    pub fn get(&self, key: SectionKey) -> &str {
        self.sections.get(&key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: SectionKey, text: impl Into<String>) {
        self.sections.insert(key, text.into());
    }

    pub fn contains(&self, key: SectionKey) -> bool {
        self.sections.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftMetadata {
    pub generated_at: DateTime<Utc>,
    pub language: Language,
    pub tone: Tone,
}

/// A successfully generated draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub success: bool,
    pub document_type: DocumentType,
    pub confidence: ConfidenceLevel,
    pub sections: SectionSet,
    pub authorities: Vec<AuthorityCandidate>,
    pub intent: IntentResult,
    pub validation: ValidationResult,
    pub legal_triggers: LegalTriggers,
    pub metadata: DraftMetadata,
}

impl Draft {
    /// Candidate surfaced to the user.
    pub fn primary_authority(&self) -> Option<&AuthorityCandidate> {
        self.authorities.first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    InputTooShort,
    GenerationFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftFailure {
    pub success: bool,
    pub reason: FailureReason,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub const INPUT_TOO_SHORT_MESSAGE: &str =
    "Issue description is too short. Please provide more details.";
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate draft. Please try again.";

/// Top-level pipeline output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DraftResult {
    Drafted(Box<Draft>),
    Failed(DraftFailure),
}

impl DraftResult {
    pub fn too_short() -> Self {
        DraftResult::Failed(DraftFailure {
            success: false,
            reason: FailureReason::InputTooShort,
            message: INPUT_TOO_SHORT_MESSAGE.to_string(),
            error: None,
        })
    }

    pub fn generation_failed(details: impl Into<String>) -> Self {
        DraftResult::Failed(DraftFailure {
            success: false,
            reason: FailureReason::GenerationFailed,
            message: GENERATION_FAILED_MESSAGE.to_string(),
            error: Some(details.into()),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DraftResult::Drafted(_))
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            DraftResult::Drafted(draft) => Some(&**draft),
            DraftResult::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&DraftFailure> {
        match self {
            DraftResult::Drafted(_) => None,
            DraftResult::Failed(failure) => Some(failure),
        }
    }
}
