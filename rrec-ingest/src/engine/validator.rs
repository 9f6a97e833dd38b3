//! Candidate validity filtering
//!
//! Drops records with missing required fields and records whose name looks
//! like staff or administrative noise rather than an athlete.

use crate::models::CandidateRecord;

/// Staff/coach vocabulary filtered out of candidate names
///
/// Matched as substrings of the lowercased name, not whole words. A
/// legitimate surname embedding one of these terms is also rejected; see
/// the filtering note in DESIGN.md.
pub const STAFF_KEYWORDS: &[&str] = &[
    "coach",
    "staff",
    "director",
    "manager",
    "trainer",
    "assistant",
    "head coach",
    "associate",
    "coordinator",
    "administrator",
];

/// Check whether a candidate record is a well-formed athlete entry
///
/// Pure predicate, no side effects. Fails when any of `name`, `college`,
/// or `sport` is empty after trimming, or when the lowercased name
/// contains a staff keyword.
pub fn is_valid(record: &CandidateRecord) -> bool {
    let name = record.name.trim();
    let college = record.college.trim();
    let sport = record.sport.trim();

    if name.is_empty() || college.is_empty() || sport.is_empty() {
        return false;
    }

    let name_lower = name.to_lowercase();
    !STAFF_KEYWORDS
        .iter()
        .any(|keyword| name_lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, college: &str, sport: &str) -> CandidateRecord {
        CandidateRecord {
            name: name.to_string(),
            college: college.to_string(),
            sport: sport.to_string(),
            position: None,
            year: None,
            hometown: None,
            nationality: None,
            height: None,
            high_school: None,
            roster_url: None,
            image: None,
            parser_version: None,
        }
    }

    #[test]
    fn accepts_complete_athlete() {
        assert!(is_valid(&candidate("Jane Smith", "X", "Y")));
    }

    #[test]
    fn rejects_missing_required_fields() {
        assert!(!is_valid(&candidate("", "X", "Y")));
        assert!(!is_valid(&candidate("Jane Smith", "   ", "Y")));
        assert!(!is_valid(&candidate("Jane Smith", "X", "")));
    }

    #[test]
    fn rejects_staff_keywords_case_insensitively() {
        assert!(!is_valid(&candidate("Head Coach Smith", "X", "Y")));
        assert!(!is_valid(&candidate("ASSISTANT Jane Doe", "X", "Y")));
        assert!(!is_valid(&candidate("Athletic Director", "X", "Y")));
    }

    #[test]
    fn substring_matching_rejects_embedded_keywords() {
        // Known over-broad behavior: "Costaff" contains "staff"
        assert!(!is_valid(&candidate("Ann Costaff", "X", "Y")));
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        assert!(!is_valid(&candidate("   ", "X", "Y")));
    }
}
