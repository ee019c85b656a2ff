use serde::{Deserialize, Serialize};

/// RTI Act, 2005 provisions an applicant's text may touch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RtiSection {
    Section6,
    Section7,
    Section8,
    Section19,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrievanceMarker {
    ServiceDelay,
    Corruption,
    Misconduct,
    Infrastructure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtiSectionMatch {
    pub section: RtiSection,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrievanceMatch {
    pub marker: GrievanceMarker,
    pub severity: Severity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalTriggers {
    pub rti_sections: Vec<RtiSectionMatch>,
    pub grievance_markers: Vec<GrievanceMatch>,
}

impl LegalTriggers {
    pub fn is_empty(&self) -> bool {
        self.rti_sections.is_empty() && self.grievance_markers.is_empty()
    }

    pub fn highest_severity(&self) -> Option<Severity> {
        let mut highest = None;
        for found in &self.grievance_markers {
            match found.severity {
                Severity::High => return Some(Severity::High),
                Severity::Medium => highest = Some(Severity::Medium),
            }
        }
        highest
    }
}

struct SectionRule {
    section: RtiSection,
    title: &'static str,
    description: &'static str,
    triggers: &'static [&'static str],
}

struct MarkerRule {
    marker: GrievanceMarker,
    severity: Severity,
    triggers: &'static [&'static str],
}

const SECTION_RULES: &[SectionRule] = &[
    SectionRule {
        section: RtiSection::Section6,
        title: "Request for obtaining information",
        description: "Standard RTI application under Section 6(1)",
        triggers: &["application", "request", "seeking information"],
    },
    SectionRule {
        section: RtiSection::Section7,
        title: "Disposal of request",
        description: "Timeline for response (30 days)",
        triggers: &["30 days", "time limit", "no response"],
    },
    SectionRule {
        section: RtiSection::Section8,
        title: "Exemption from disclosure",
        description: "Information exempt from disclosure",
        triggers: &["exemption", "cannot disclose", "refused"],
    },
    SectionRule {
        section: RtiSection::Section19,
        title: "Appeal",
        description: "Appeal against decisions",
        triggers: &["appeal", "first appeal", "second appeal"],
    },
];

const MARKER_RULES: &[MarkerRule] = &[
    MarkerRule {
        marker: GrievanceMarker::ServiceDelay,
        severity: Severity::Medium,
        triggers: &["delay", "pending", "waiting", "no action"],
    },
    MarkerRule {
        marker: GrievanceMarker::Corruption,
        severity: Severity::High,
        triggers: &["bribe", "corruption", "money demanded", "illegal payment"],
    },
    MarkerRule {
        marker: GrievanceMarker::Misconduct,
        severity: Severity::High,
        triggers: &["rude behavior", "harassment", "misconduct", "misbehavior"],
    },
    MarkerRule {
        marker: GrievanceMarker::Infrastructure,
        severity: Severity::Medium,
        triggers: &["broken", "damaged", "not working", "poor condition"],
    },
];

/// Each provision or marker is reported at most once, in table order.
pub fn detect_legal_triggers(text: &str) -> LegalTriggers {
    let lower = text.to_lowercase();

    let rti_sections = SECTION_RULES
        .iter()
        .filter(|rule| rule.triggers.iter().any(|trigger| lower.contains(trigger)))
        .map(|rule| RtiSectionMatch {
            section: rule.section,
            title: rule.title.to_string(),
            description: rule.description.to_string(),
        })
        .collect();

    let grievance_markers = MARKER_RULES
        .iter()
        .filter(|rule| rule.triggers.iter().any(|trigger| lower.contains(trigger)))
        .map(|rule| GrievanceMatch {
            marker: rule.marker,
            severity: rule.severity,
        })
        .collect();

    LegalTriggers {
        rti_sections,
        grievance_markers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_appeal_and_timeline_provisions() {
        let triggers =
            detect_legal_triggers("No response after 30 days, so I am filing a first appeal");
        let sections: Vec<RtiSection> = triggers.rti_sections.iter().map(|m| m.section).collect();
        assert_eq!(sections, vec![RtiSection::Section7, RtiSection::Section19]);
    }

    #[test]
    fn markers_are_reported_once_with_severity() {
        let triggers = detect_legal_triggers(
            "The pump is broken and damaged; the officer demanded a bribe. Still pending.",
        );
        let markers: Vec<GrievanceMarker> =
            triggers.grievance_markers.iter().map(|m| m.marker).collect();
        assert_eq!(
            markers,
            vec![
                GrievanceMarker::ServiceDelay,
                GrievanceMarker::Corruption,
                GrievanceMarker::Infrastructure,
            ]
        );
        assert_eq!(triggers.highest_severity(), Some(Severity::High));
    }

    #[test]
    fn plain_text_has_no_triggers() {
        let triggers = detect_legal_triggers("Streetlights are dim on my lane");
        assert!(triggers.is_empty());
        assert_eq!(triggers.highest_severity(), None);
    }
}
