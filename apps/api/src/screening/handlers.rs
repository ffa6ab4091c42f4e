//! Axum route handlers for the screening API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use uuid::Uuid;

use crate::ai::report::AnalysisReport;
use crate::errors::AppError;
use crate::models::candidate::CandidateRow;
use crate::screening::extract::extract_resume_text;
use crate::settings::store::ProviderSettings;
use crate::state::AppState;

/// POST /api/analyze
///
/// Multipart form with a `file` part (the resume document) and a
/// `jobDescription` text part. Runs the full pipeline and returns the
/// persisted candidate. An adapter error envelope surfaces as a 400 carrying
/// the provider's message.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CandidateRow>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("resume").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                upload = Some((filename, data));
            }
            Some("jobDescription") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' part".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("Missing 'jobDescription' part".to_string()))?;
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    let resume_text = extract_resume_text(&filename, &data)?;
    if resume_text.trim().is_empty() {
        return Err(AppError::Parse(format!(
            "No text could be extracted from '{filename}'"
        )));
    }

    // Fresh snapshot per call; settings writes apply from the next call on.
    let provider_settings = ProviderSettings::load(&state.db, &state.config).await?;
    let raw = state
        .ai
        .analyze(&resume_text, &job_description, &provider_settings)
        .await;

    let value: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|_| AppError::Ai("AI returned a malformed analysis".to_string()))?;
    if let Some(message) = value.get("error").and_then(|v| v.as_str()) {
        return Err(AppError::Ai(message.to_string()));
    }

    let report: AnalysisReport = serde_json::from_value(value)
        .map_err(|e| AppError::Ai(format!("AI analysis did not match the expected shape: {e}")))?;

    let candidate = sqlx::query_as::<_, CandidateRow>(
        r#"
        INSERT INTO candidates
            (id, name, email, position, resume_text, job_description,
             match_percentage, matched_skills, missing_skills,
             improvement_suggestions, learning_resources, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&filename)
    .bind(None::<String>)
    .bind(None::<String>)
    .bind(&resume_text)
    .bind(&job_description)
    .bind(report.match_percentage)
    .bind(&report.matched_skills)
    .bind(&report.missing_skills)
    .bind(&report.improvement_suggestions)
    .bind(&report.learning_resources)
    .bind(report.status.as_str())
    .fetch_one(&state.db)
    .await?;

    tracing::info!(
        "Analyzed '{}': {}% match, status {}",
        candidate.name,
        candidate.match_percentage,
        candidate.status
    );

    Ok(Json(candidate))
}

/// GET /api/candidates
///
/// Every assessed candidate, newest first.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateRow>>, AppError> {
    let candidates = sqlx::query_as::<_, CandidateRow>(
        "SELECT * FROM candidates ORDER BY processed_at DESC",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(candidates))
}
