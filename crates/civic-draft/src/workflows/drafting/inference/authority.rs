use super::super::domain::{AuthorityCandidate, ConfidenceLevel};

/// Keyword to department, scanned in order. Every hit yields a candidate.
const DEPARTMENT_AUTHORITIES: &[(&str, &str)] = &[
    ("municipal", "Municipal Corporation"),
    ("corporation", "Municipal Corporation"),
    ("electricity", "State Electricity Board"),
    ("water", "Water Supply Department"),
    ("police", "Police Department"),
    ("transport", "Transport Department"),
    ("education", "Education Department"),
    ("health", "Health Department"),
    ("public works", "Public Works Department (PWD)"),
    ("pwd", "Public Works Department (PWD)"),
    ("revenue", "Revenue Department"),
    ("forest", "Forest Department"),
    ("agriculture", "Agriculture Department"),
];

pub fn suggest_authority(text: &str, state: &str) -> Vec<AuthorityCandidate> {
    let lower = text.to_lowercase();

    let mut authorities: Vec<AuthorityCandidate> = DEPARTMENT_AUTHORITIES
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|(keyword, department)| AuthorityCandidate {
            name: format!("{department}, {state}"),
            confidence: ConfidenceLevel::Medium,
            reason: format!("Issue relates to {keyword}"),
        })
        .collect();

    if authorities.is_empty() {
        authorities.push(state_fallback(state));
    }

    authorities
}

fn state_fallback(state: &str) -> AuthorityCandidate {
    AuthorityCandidate {
        name: format!("Public Information Officer, {state} Government"),
        confidence: ConfidenceLevel::Low,
        reason: "Default state-level authority".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_hit_is_retained_in_table_order() {
        let authorities = suggest_authority(
            "Water pipes dug up by the Municipal Corporation team",
            "Maharashtra",
        );
        let names: Vec<&str> = authorities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Municipal Corporation, Maharashtra",
                "Municipal Corporation, Maharashtra",
                "Water Supply Department, Maharashtra",
            ]
        );
        assert!(authorities
            .iter()
            .all(|a| a.confidence == ConfidenceLevel::Medium));
        assert_eq!(authorities[2].reason, "Issue relates to water");
    }

    #[test]
    fn falls_back_to_state_information_officer() {
        let authorities = suggest_authority("Road repair was never completed", "Delhi");
        assert_eq!(authorities.len(), 1);
        assert_eq!(
            authorities[0].name,
            "Public Information Officer, Delhi Government"
        );
        assert_eq!(authorities[0].confidence, ConfidenceLevel::Low);
    }

    #[test]
    fn never_empty_even_for_blank_input() {
        for (text, state) in [("", ""), ("   ", "Goa"), ("pwd", ""), ("ok", "Assam")] {
            assert!(!suggest_authority(text, state).is_empty());
        }
    }
}
