use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An assessed candidate as stored in the `candidates` table.
/// Serialized camelCase because the admin frontend reads these field names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRow {
    pub id: Uuid,
    /// Falls back to the upload filename when the resume carries no name.
    pub name: String,
    pub email: Option<String>,
    pub position: Option<String>,
    pub resume_text: String,
    pub job_description: String,
    pub match_percentage: i32,
    pub matched_skills: String,
    pub missing_skills: String,
    pub improvement_suggestions: String,
    pub learning_resources: String,
    pub status: String,
    pub processed_at: DateTime<Utc>,
}
