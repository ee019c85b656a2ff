use super::super::domain::{DocumentData, DocumentType, ValidationResult};

/// Logical parts a document type is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureSection {
    Applicant,
    Authority,
    Subject,
    Requests,
    TimePeriod,
    Fee,
    Issue,
    Relief,
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRequirement {
    pub section: StructureSection,
    pub name: &'static str,
    pub required: bool,
}

#[derive(Debug)]
pub struct DocumentStructure {
    pub sections: &'static [SectionRequirement],
}

impl DocumentStructure {
    pub fn required(&self) -> impl Iterator<Item = &SectionRequirement> {
        self.sections.iter().filter(|section| section.required)
    }
}

pub const RTI_STRUCTURE: DocumentStructure = DocumentStructure {
    sections: &[
        SectionRequirement {
            section: StructureSection::Applicant,
            name: "Applicant Details",
            required: true,
        },
        SectionRequirement {
            section: StructureSection::Authority,
            name: "Public Authority",
            required: true,
        },
        SectionRequirement {
            section: StructureSection::Subject,
            name: "Subject Line",
            required: true,
        },
        SectionRequirement {
            section: StructureSection::Requests,
            name: "Information Requests",
            required: true,
        },
        SectionRequirement {
            section: StructureSection::TimePeriod,
            name: "Time Period",
            required: false,
        },
        SectionRequirement {
            section: StructureSection::Fee,
            name: "Fee Declaration",
            required: false,
        },
        SectionRequirement {
            section: StructureSection::Closing,
            name: "Closing Statement",
            required: true,
        },
    ],
};

pub const COMPLAINT_STRUCTURE: DocumentStructure = DocumentStructure {
    sections: &[
        SectionRequirement {
            section: StructureSection::Applicant,
            name: "Applicant Details",
            required: true,
        },
        SectionRequirement {
            section: StructureSection::Authority,
            name: "Authority/Grievance Cell",
            required: true,
        },
        SectionRequirement {
            section: StructureSection::Issue,
            name: "Issue Description",
            required: true,
        },
        SectionRequirement {
            section: StructureSection::Relief,
            name: "Relief Sought",
            required: true,
        },
        SectionRequirement {
            section: StructureSection::Closing,
            name: "Closing Statement",
            required: true,
        },
    ],
};

/// Unknown drafts are rendered and checked as complaints.
pub fn structure_for(document_type: DocumentType) -> &'static DocumentStructure {
    match document_type {
        DocumentType::Rti => &RTI_STRUCTURE,
        DocumentType::Complaint | DocumentType::Unknown => &COMPLAINT_STRUCTURE,
    }
}

fn has_text(value: Option<&str>) -> bool {
    value.map(|text| !text.trim().is_empty()).unwrap_or(false)
}

fn is_present(data: &DocumentData, section: StructureSection) -> bool {
    match section {
        StructureSection::Applicant => data.applicant.is_complete(),
        StructureSection::Authority => has_text(Some(&data.authority)),
        StructureSection::Subject => has_text(Some(&data.subject)),
        StructureSection::Requests | StructureSection::Issue => {
            has_text(Some(&data.issue_description))
        }
        StructureSection::TimePeriod => has_text(data.time_period.as_deref()),
        // the fee declaration is fixed template text
        StructureSection::Fee => true,
        StructureSection::Relief => has_text(data.relief_sought.as_deref()),
        // closing needs a signatory
        StructureSection::Closing => has_text(Some(&data.applicant.name)),
    }
}

/// Advisory completeness check; never blocks export.
pub fn validate_document(document_type: DocumentType, data: &DocumentData) -> ValidationResult {
    let errors: Vec<String> = structure_for(document_type)
        .required()
        .filter(|requirement| !is_present(data, requirement.section))
        .map(|requirement| format!("{} is required", requirement.name))
        .collect();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}
