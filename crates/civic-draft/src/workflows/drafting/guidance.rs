//! Static filing guidance: where to send a finished draft, what it costs and how long it takes.

use serde::{Deserialize, Serialize};

use super::domain::{DocumentType, IndianState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionChannel {
    Online,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionMethod {
    #[serde(rename = "type")]
    pub channel: SubmissionChannel,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub amount: String,
    pub description: String,
    pub exemptions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTimeline {
    pub standard: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgent: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionGuidance {
    pub document_type: DocumentType,
    pub authority: String,
    pub state: Option<IndianState>,
    pub methods: Vec<SubmissionMethod>,
    pub fees: Option<FeeSchedule>,
    pub timeline: Option<ResponseTimeline>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatePortals {
    pub state: IndianState,
    pub rti_portal: Option<String>,
    pub grievance_portal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    pub recipient: String,
    pub address_line: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub full_address: String,
}

const RTI_TIPS: &[&str] = &[
    "Keep a copy of your application for records",
    "Note down the application/acknowledgment number",
    "If no response within 30 days, you can file a first appeal",
    "Clearly number each information request",
    "Be specific about the time period for which you need information",
];

const COMPLAINT_TIPS: &[&str] = &[
    "Attach supporting documents if available",
    "Keep a copy of the complaint and all correspondence",
    "Note down the complaint/registration number",
    "Follow up regularly if no response is received",
    "Escalate to higher authority if issue is not resolved",
];

/// (state, RTI portal, grievance portal)
const STATE_PORTALS: &[(IndianState, &str, &str)] = &[
    (
        IndianState::Delhi,
        "https://rtionline.delhi.gov.in/",
        "https://esamadhan.delhi.gov.in/",
    ),
    (
        IndianState::Maharashtra,
        "https://rtionline.maharashtra.gov.in/",
        "https://grievances.maharashtra.gov.in/",
    ),
    (
        IndianState::Karnataka,
        "https://www.kannadaganaka.kar.nic.in/",
        "https://cm.karnataka.gov.in/",
    ),
];

fn method(
    channel: SubmissionChannel,
    title: &str,
    url: Option<&str>,
    description: &str,
) -> SubmissionMethod {
    SubmissionMethod {
        channel,
        title: title.to_string(),
        url: url.map(str::to_string),
        description: description.to_string(),
    }
}

fn tips(list: &[&str]) -> Vec<String> {
    list.iter().map(|tip| tip.to_string()).collect()
}

/// Filing methods, fees, response timeline and tips. Unknown documents get no guidance.
pub fn submission_guidance(
    document_type: DocumentType,
    authority: &str,
    state: Option<IndianState>,
) -> SubmissionGuidance {
    let mut guidance = SubmissionGuidance {
        document_type,
        authority: authority.to_string(),
        state,
        methods: Vec::new(),
        fees: None,
        timeline: None,
        tips: Vec::new(),
    };

    match document_type {
        DocumentType::Rti => {
            guidance.methods = vec![
                method(
                    SubmissionChannel::Online,
                    "RTI Online Portal",
                    Some("https://rtionline.gov.in/"),
                    "Submit your RTI application online through the official government portal",
                ),
                method(
                    SubmissionChannel::Post,
                    "By Post/In Person",
                    None,
                    "Send the application via registered post or submit in person to the Public Information Officer",
                ),
            ];
            guidance.fees = Some(FeeSchedule {
                amount: "₹10".to_string(),
                description: "Application fee (may vary by state)".to_string(),
                exemptions: "BPL card holders are exempt from fees".to_string(),
            });
            guidance.timeline = Some(ResponseTimeline {
                standard: "30 days".to_string(),
                urgent: Some("48 hours (for life and liberty matters)".to_string()),
                description: "The authority must respond within 30 days as per RTI Act, 2005"
                    .to_string(),
            });
            guidance.tips = tips(RTI_TIPS);
        }
        DocumentType::Complaint => {
            guidance.methods = vec![
                method(
                    SubmissionChannel::Online,
                    "Public Grievance Portal",
                    Some("https://pgportal.gov.in/"),
                    "Lodge your complaint through the centralized public grievance portal",
                ),
                method(
                    SubmissionChannel::Post,
                    "By Post/In Person",
                    None,
                    "Send the complaint via registered post or submit in person to the concerned department",
                ),
            ];
            guidance.fees = Some(FeeSchedule {
                amount: "Free".to_string(),
                description: "No fee required for filing complaints".to_string(),
                exemptions: "N/A".to_string(),
            });
            guidance.timeline = Some(ResponseTimeline {
                standard: "60 days".to_string(),
                urgent: None,
                description: "Departments typically respond within 60 days".to_string(),
            });
            guidance.tips = tips(COMPLAINT_TIPS);
        }
        DocumentType::Unknown => {}
    }

    guidance
}

/// State-run portals where known; `None` for states without a listed portal.
pub fn state_portals(state: IndianState) -> StatePortals {
    let known = STATE_PORTALS
        .iter()
        .find(|(candidate, _, _)| *candidate == state);

    StatePortals {
        state,
        rti_portal: known.map(|(_, rti, _)| rti.to_string()),
        grievance_portal: known.map(|(_, _, grievance)| grievance.to_string()),
    }
}

pub fn postal_address(authority: &str, state: &str) -> PostalAddress {
    PostalAddress {
        recipient: authority.to_string(),
        address_line: "[Department Address]".to_string(),
        city: "[City]".to_string(),
        state: state.to_string(),
        pincode: "[Pincode]".to_string(),
        full_address: format!("{authority}\n[Department Address]\n[City], {state} - [Pincode]"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rti_guidance_lists_portal_fee_and_timeline() {
        let guidance = submission_guidance(
            DocumentType::Rti,
            "Public Information Officer, Delhi Government",
            Some(IndianState::Delhi),
        );
        assert_eq!(guidance.methods.len(), 2);
        assert_eq!(
            guidance.methods[0].url.as_deref(),
            Some("https://rtionline.gov.in/")
        );
        assert_eq!(guidance.fees.as_ref().map(|fee| fee.amount.as_str()), Some("₹10"));
        assert_eq!(
            guidance.timeline.as_ref().map(|t| t.standard.as_str()),
            Some("30 days")
        );
        assert_eq!(guidance.tips.len(), 5);
    }

    #[test]
    fn complaint_guidance_is_free_with_sixty_day_timeline() {
        let guidance = submission_guidance(DocumentType::Complaint, "Police Department, Goa", None);
        let fees = guidance.fees.expect("complaint fees");
        assert_eq!(fees.amount, "Free");
        let timeline = guidance.timeline.expect("complaint timeline");
        assert_eq!(timeline.standard, "60 days");
        assert!(timeline.urgent.is_none());
    }

    #[test]
    fn unknown_documents_get_empty_guidance() {
        let guidance = submission_guidance(DocumentType::Unknown, "", None);
        assert!(guidance.methods.is_empty());
        assert!(guidance.fees.is_none());
        assert!(guidance.tips.is_empty());
    }

    #[test]
    fn portals_are_known_for_a_few_states_only() {
        let delhi = state_portals(IndianState::Delhi);
        assert_eq!(
            delhi.grievance_portal.as_deref(),
            Some("https://esamadhan.delhi.gov.in/")
        );

        let goa = state_portals(IndianState::Goa);
        assert!(goa.rti_portal.is_none());
        assert!(goa.grievance_portal.is_none());
    }

    #[test]
    fn postal_address_uses_placeholders() {
        let address = postal_address("Water Supply Department, Kerala", "Kerala");
        assert_eq!(
            address.full_address,
            "Water Supply Department, Kerala\n[Department Address]\n[City], Kerala - [Pincode]"
        );
    }

    #[test]
    fn methods_serialize_channel_as_type() {
        let guidance = submission_guidance(DocumentType::Complaint, "x", None);
        let value = serde_json::to_value(&guidance).expect("serializes");
        assert_eq!(value["methods"][0]["type"], "Online");
        assert!(value["methods"][1].get("url").is_none());
        assert_eq!(value["documentType"], "COMPLAINT");
    }
}
