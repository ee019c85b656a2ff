use std::io::Read;
use std::path::{Path, PathBuf};

use civic_draft::config::AppConfig;
use civic_draft::error::AppError;
use civic_draft::workflows::drafting::{
    assemble_document, DocumentType, DraftRequest, DraftResult, DraftService, GuidanceResponse,
    IndianState,
};
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct DraftArgs {
    /// JSON draft request file, or `-` to read standard input
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the assembled letter instead of the draft JSON
    #[arg(long)]
    pub(crate) assemble: bool,
}

#[derive(Args, Debug)]
pub(crate) struct GuidanceArgs {
    /// Document type (RTI or COMPLAINT)
    #[arg(long = "type", value_parser = parse_document_type)]
    pub(crate) document_type: DocumentType,
    /// State or union territory the applicant files from
    #[arg(long, value_parser = parse_state)]
    pub(crate) state: IndianState,
    /// Authority the document is addressed to (defaults to the state PIO)
    #[arg(long)]
    pub(crate) authority: Option<String>,
}

fn parse_document_type(raw: &str) -> Result<DocumentType, String> {
    DocumentType::parse(raw).ok_or_else(|| format!("unknown document type '{raw}'"))
}

fn parse_state(raw: &str) -> Result<IndianState, String> {
    IndianState::from_label(raw).ok_or_else(|| format!("unknown state '{raw}'"))
}

fn read_input(path: &Path) -> Result<String, AppError> {
    if path == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

pub(crate) async fn run_draft(args: DraftArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = DraftService::from_config(&config.drafting);

    let raw = read_input(&args.input)?;
    let request: DraftRequest = serde_json::from_str(&raw)?;
    let result = service.generate_draft(&request).await;

    println!("{}", render_draft(&result, args.assemble)?);
    Ok(())
}

/// Assembled letter when requested and available, otherwise the draft result as JSON.
pub(crate) fn render_draft(result: &DraftResult, assemble: bool) -> Result<String, AppError> {
    match result.draft() {
        Some(draft) if assemble => Ok(assemble_document(&draft.sections, draft.document_type)),
        _ => Ok(serde_json::to_string_pretty(result)?),
    }
}

pub(crate) fn run_guidance(args: GuidanceArgs) -> Result<(), AppError> {
    let authority = args
        .authority
        .unwrap_or_else(|| format!("Public Information Officer, {} Government", args.state));
    let response = GuidanceResponse::build(args.document_type, &authority, Some(args.state));
    println!("{}", render_guidance(&response));
    Ok(())
}

pub(crate) fn render_guidance(response: &GuidanceResponse) -> String {
    let guidance = &response.guidance;
    let mut lines = vec![
        format!("Submission guidance for {}", guidance.document_type),
        format!("Addressed to: {}", guidance.authority),
        String::new(),
    ];

    if guidance.methods.is_empty() {
        lines.push("Methods: none for this document type".to_string());
    } else {
        lines.push("Methods".to_string());
        for method in &guidance.methods {
            lines.push(match &method.url {
                Some(url) => format!("- {} ({}): {}", method.title, url, method.description),
                None => format!("- {}: {}", method.title, method.description),
            });
        }
    }

    if let Some(fees) = &guidance.fees {
        lines.push(String::new());
        lines.push(format!(
            "Fee: {} ({}); {}",
            fees.amount, fees.description, fees.exemptions
        ));
    }
    if let Some(timeline) = &guidance.timeline {
        lines.push(match &timeline.urgent {
            Some(urgent) => format!("Response time: {}, urgent {urgent}", timeline.standard),
            None => format!("Response time: {}", timeline.standard),
        });
    }

    if let Some(portals) = &response.portals {
        if let Some(rti) = &portals.rti_portal {
            lines.push(format!("State RTI portal: {rti}"));
        }
        if let Some(grievance) = &portals.grievance_portal {
            lines.push(format!("State grievance portal: {grievance}"));
        }
    }

    if !guidance.tips.is_empty() {
        lines.push(String::new());
        lines.push("Tips".to_string());
        lines.extend(guidance.tips.iter().map(|tip| format!("- {tip}")));
    }

    lines.push(String::new());
    lines.push("Postal address".to_string());
    lines.push(response.postal_address.full_address.clone());

    lines.join("\n")
}
