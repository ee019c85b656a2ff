use std::sync::OnceLock;

use regex::Regex;

/// Relief line used when the resolved type is unknown.
pub const UNKNOWN_TYPE_RELIEF: &str = "Please take appropriate action.";

const REPAIR_RELIEF: &str = "Please arrange for immediate repair/fixing of the mentioned issue.";
const REFUND_RELIEF: &str = "Please process the refund/payment at the earliest.";
const INVESTIGATION_RELIEF: &str = "Please investigate the matter and take appropriate action.";
const GENERIC_RELIEF: &str = "Please look into this matter and provide appropriate resolution.";

fn relief_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"(?i)i want (.+)",
            r"(?i)i need (.+)",
            r"(?i)please (.+)",
            r"(?i)kindly (.+)",
            r"(?i)request (.+)",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("relief pattern compiles"))
        .collect()
    })
}

/// What the complainant is asking for, pulled from their own words when possible.
///
/// Patterns are tried in order and the first capture wins; captures stop at a line break.
/// Without an explicit ask, a canned sentence is chosen from keywords in the text.
pub fn extract_relief_sought(text: &str) -> String {
    for pattern in relief_patterns() {
        if let Some(capture) = pattern.captures(text).and_then(|found| found.get(1)) {
            let relief = capture.as_str().trim();
            if !relief.is_empty() {
                return relief.to_string();
            }
        }
    }

    let lower = text.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|word| lower.contains(word));

    if mentions(&["repair", "fix"]) {
        REPAIR_RELIEF.to_string()
    } else if mentions(&["refund", "payment"]) {
        REFUND_RELIEF.to_string()
    } else if mentions(&["action", "investigate"]) {
        INVESTIGATION_RELIEF.to_string()
    } else {
        GENERIC_RELIEF.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn please_clause_is_extracted() {
        assert_eq!(
            extract_relief_sought("My street has potholes, please fix them immediately"),
            "fix them immediately"
        );
    }

    #[test]
    fn earlier_patterns_take_precedence() {
        assert_eq!(
            extract_relief_sought("Kindly help. I need a new meter installed"),
            "a new meter installed"
        );
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(
            extract_relief_sought("I WANT the garbage cleared"),
            "the garbage cleared"
        );
    }

    #[test]
    fn canned_sentences_follow_keywords() {
        assert_eq!(
            extract_relief_sought("The handpump needs repair since March"),
            REPAIR_RELIEF
        );
        assert_eq!(
            extract_relief_sought("My refund has not arrived"),
            REFUND_RELIEF
        );
        assert_eq!(
            extract_relief_sought("Officials took no action on the encroachment"),
            INVESTIGATION_RELIEF
        );
        assert_eq!(
            extract_relief_sought("The park gate stays locked all day"),
            GENERIC_RELIEF
        );
    }
}
