//! Typed shape of a successful analysis reply.

use serde::{Deserialize, Serialize};

/// Classification label the model assigns to a candidate.
/// Serialized with the spaced spellings the prompt asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Recommended,
    #[default]
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "Not Matching")]
    NotMatching,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Recommended => "Recommended",
            MatchStatus::UnderReview => "Under Review",
            MatchStatus::NotMatching => "Not Matching",
        }
    }
}

/// The six-field analysis object the adapter contract promises.
///
/// Every field is defaulted: a model that omits a field yields an empty
/// string / zero / Under Review, never a deserialization failure on absence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisReport {
    pub match_percentage: i32,
    pub matched_skills: String,
    pub missing_skills: String,
    pub improvement_suggestions: String,
    pub learning_resources: String,
    pub status: MatchStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_report_parses() {
        let json = r#"{
            "matchPercentage": 82,
            "matchedSkills": "Rust, PostgreSQL",
            "missingSkills": "Kubernetes",
            "improvementSuggestions": "Add container orchestration experience.",
            "learningResources": "Kubernetes for Developers - https://coursera.org/learn/kubernetes",
            "status": "Recommended"
        }"#;
        let report: AnalysisReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.match_percentage, 82);
        assert_eq!(report.status, MatchStatus::Recommended);
    }

    #[test]
    fn test_absent_fields_default() {
        let report: AnalysisReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report.match_percentage, 0);
        assert_eq!(report.matched_skills, "");
        assert_eq!(report.status, MatchStatus::UnderReview);
    }

    #[test]
    fn test_spaced_status_literals_round_trip() {
        let under: MatchStatus = serde_json::from_str("\"Under Review\"").unwrap();
        assert_eq!(under, MatchStatus::UnderReview);
        assert_eq!(serde_json::to_string(&under).unwrap(), "\"Under Review\"");

        let not_matching: MatchStatus = serde_json::from_str("\"Not Matching\"").unwrap();
        assert_eq!(not_matching, MatchStatus::NotMatching);
        assert_eq!(not_matching.as_str(), "Not Matching");
    }
}
