use std::sync::OnceLock;

use regex::Regex;

use super::super::domain::EntitySet;

const LOCATION_MARKERS: &[&[&str]] = &[&["located", "in"], &["in"], &["at"], &["near"]];

const DEPARTMENTS: &[&str] = &[
    "municipal",
    "electricity",
    "water",
    "police",
    "transport",
    "education",
    "health",
    "public works",
    "revenue",
    "forest",
    "agriculture",
];

fn year_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("year pattern compiles"))
}

fn month_year_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+(?:19|20)\d{2}",
        )
        .expect("month-year pattern compiles")
    })
}

pub fn extract_entities(text: &str) -> EntitySet {
    EntitySet {
        time_period: extract_time_period(text),
        location: extract_location(text),
        department: extract_department(text),
    }
}

/// All years in 1900..=2099 joined with ", ", else the first "Month YYYY" phrase.
pub fn extract_time_period(text: &str) -> Option<String> {
    let years: Vec<&str> = year_pattern()
        .find_iter(text)
        .map(|found| found.as_str())
        .collect();
    if !years.is_empty() {
        return Some(years.join(", "));
    }

    month_year_pattern()
        .find(text)
        .map(|found| found.as_str().to_string())
}

/// Token immediately following the first locative marker.
pub fn extract_location(text: &str) -> Option<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    for index in 0..tokens.len() {
        for marker in LOCATION_MARKERS {
            let end = index + marker.len();
            if end >= tokens.len() {
                continue;
            }
            let matches = tokens[index..end]
                .iter()
                .zip(marker.iter())
                .all(|(token, word)| token.eq_ignore_ascii_case(word));
            if matches {
                return Some(tokens[end].to_string());
            }
        }
    }

    None
}

pub fn extract_department(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    DEPARTMENTS
        .iter()
        .find(|department| lower.contains(*department))
        .map(|department| department.to_string())
}
