//! Weighted confidence scoring between a candidate and one corpus record
//!
//! Names are fuzzy-matched because scraping noise mostly lands in free
//! text; college and sport come from constrained vocabularies and are
//! compared exactly. Each term is computed independently, summed, and the
//! result clamped to [0,100].

use crate::engine::similarity::similarity;
use crate::models::{CandidateRecord, CorpusRecord, MatchComparison};

/// Weight of fuzzy name similarity
pub const NAME_WEIGHT: f64 = 40.0;
/// Weight of exact college match
pub const COLLEGE_WEIGHT: f64 = 30.0;
/// Weight of exact sport match
pub const SPORT_WEIGHT: f64 = 20.0;
/// Weight of fuzzy hometown similarity (only when both sides have one)
pub const HOMETOWN_WEIGHT: f64 = 10.0;

/// Confidence score in [0,100] that `candidate` and `existing` are the
/// same athlete
pub fn confidence(candidate: &CandidateRecord, existing: &CorpusRecord) -> f64 {
    let mut score = similarity(&candidate.name, &existing.name) * NAME_WEIGHT;

    if field_matches(&candidate.college, &existing.college) {
        score += COLLEGE_WEIGHT;
    }

    if field_matches(&candidate.sport, &existing.sport) {
        score += SPORT_WEIGHT;
    }

    if let (Some(candidate_hometown), Some(existing_hometown)) =
        (candidate.hometown_trimmed(), existing.hometown_trimmed())
    {
        score += similarity(candidate_hometown, existing_hometown) * HOMETOWN_WEIGHT;
    }

    score.clamp(0.0, 100.0)
}

/// Per-field comparison breakdown for review queue entries
pub fn compare(candidate: &CandidateRecord, existing: &CorpusRecord) -> MatchComparison {
    let hometown_similarity = match (candidate.hometown_trimmed(), existing.hometown_trimmed()) {
        (Some(candidate_hometown), Some(existing_hometown)) => {
            similarity(candidate_hometown, existing_hometown)
        }
        _ => 0.0,
    };

    MatchComparison {
        name_similarity: similarity(&candidate.name, &existing.name),
        college_match: field_matches(&candidate.college, &existing.college),
        sport_match: field_matches(&candidate.sport, &existing.sport),
        hometown_similarity,
    }
}

/// Case-insensitive, trimmed equality for constrained-vocabulary fields
fn field_matches(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, college: &str, sport: &str, hometown: Option<&str>) -> CandidateRecord {
        CandidateRecord {
            name: name.to_string(),
            college: college.to_string(),
            sport: sport.to_string(),
            position: None,
            year: None,
            hometown: hometown.map(str::to_string),
            nationality: None,
            height: None,
            high_school: None,
            roster_url: None,
            image: None,
            parser_version: None,
        }
    }

    fn corpus(name: &str, college: &str, sport: &str, hometown: &str) -> CorpusRecord {
        CorpusRecord {
            id: "rec001".to_string(),
            name: name.to_string(),
            college: college.to_string(),
            sport: sport.to_string(),
            hometown: hometown.to_string(),
            year: String::new(),
            position: String::new(),
        }
    }

    #[test]
    fn identical_records_score_one_hundred() {
        let score = confidence(
            &candidate("Jane Smith", "State U", "Soccer", Some("Austin")),
            &corpus("Jane Smith", "State U", "Soccer", "Austin"),
        );
        assert_eq!(score, 100.0);
    }

    #[test]
    fn name_variant_without_hometown_lands_in_review_band() {
        let score = confidence(
            &candidate("Jane Smyth", "State U", "Soccer", None),
            &corpus("Jane Smith", "State U", "Soccer", "Austin"),
        );
        // 0.9 * 40 + 30 + 20 = 86
        assert!((70.0..90.0).contains(&score), "got {score}");
    }

    #[test]
    fn college_and_sport_compare_case_insensitively_trimmed() {
        let score = confidence(
            &candidate("Jane Smith", " state u ", "SOCCER", None),
            &corpus("Jane Smith", "State U", "Soccer", ""),
        );
        assert_eq!(score, 90.0);
    }

    #[test]
    fn hometown_contributes_only_when_both_present() {
        let without = confidence(
            &candidate("Jane Smith", "State U", "Soccer", Some("Austin")),
            &corpus("Jane Smith", "State U", "Soccer", ""),
        );
        assert_eq!(without, 90.0);

        let blank = confidence(
            &candidate("Jane Smith", "State U", "Soccer", Some("   ")),
            &corpus("Jane Smith", "State U", "Soccer", "Austin"),
        );
        assert_eq!(blank, 90.0);
    }

    #[test]
    fn score_stays_in_range_for_arbitrary_fields() {
        let score = confidence(
            &candidate("", "", "", Some("")),
            &corpus("", "", "", ""),
        );
        assert!((0.0..=100.0).contains(&score));

        let disjoint = confidence(
            &candidate("Aaa Bbb", "Ccc", "Ddd", Some("Eee")),
            &corpus("Zzz Yyy", "Xxx", "Www", "Vvv"),
        );
        assert!((0.0..=100.0).contains(&disjoint));
    }

    #[test]
    fn comparison_breakdown_reports_each_field() {
        let breakdown = compare(
            &candidate("Jane Smyth", "State U", "Soccer", None),
            &corpus("Jane Smith", "State U", "Golf", "Austin"),
        );
        assert!((breakdown.name_similarity - 0.9).abs() < 1e-9);
        assert!(breakdown.college_match);
        assert!(!breakdown.sport_match);
        assert_eq!(breakdown.hometown_similarity, 0.0);
    }
}
