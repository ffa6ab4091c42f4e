//! Settings storage and the per-call provider configuration snapshot.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::config::Config;
use crate::models::setting::AppSettingRow;

/// Reads the whole settings table into a flat map.
pub async fn all_settings(pool: &PgPool) -> Result<HashMap<String, String>, sqlx::Error> {
    let rows: Vec<AppSettingRow> =
        sqlx::query_as("SELECT config_key, config_value FROM settings")
            .fetch_all(pool)
            .await?;

    Ok(rows
        .into_iter()
        .map(|row| (row.config_key, row.config_value))
        .collect())
}

/// Upserts every pair. Each key is written independently; concurrent
/// writers interleave per key, last write wins.
pub async fn upsert_settings(
    pool: &PgPool,
    settings: &HashMap<String, String>,
) -> Result<(), sqlx::Error> {
    for (key, value) in settings {
        sqlx::query(
            "INSERT INTO settings (config_key, config_value) VALUES ($1, $2)
             ON CONFLICT (config_key) DO UPDATE SET config_value = EXCLUDED.config_value",
        )
        .bind(key)
        .bind(value)
        .execute(pool)
        .await?;
    }
    Ok(())
}

/// Snapshot of every AI-relevant setting, resolved once per analysis call.
///
/// Resolution order per key: settings table, then the compiled-in default
/// from `Config`. Handing the adapter a snapshot (instead of letting it read
/// the table mid-call) pins one consistent view per call; the caller decides
/// when to refresh by loading a new one.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub provider: String,
    pub gemini_key: String,
    pub gemini_url: String,
    pub cohere_key: String,
    pub cohere_url: String,
    pub huggingface_key: String,
    pub huggingface_model: String,
}

impl ProviderSettings {
    /// Loads a fresh snapshot. No caching: every analysis call reads the
    /// table again so settings writes take effect on the next call.
    pub async fn load(pool: &PgPool, config: &Config) -> Result<Self, sqlx::Error> {
        let map = all_settings(pool).await?;
        Ok(Self::from_map(&map, config))
    }

    pub fn from_map(map: &HashMap<String, String>, config: &Config) -> Self {
        let get = |key: &str, default: &str| {
            map.get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        ProviderSettings {
            provider: get("ai.provider", &config.ai_provider),
            gemini_key: get("gemini.key", &config.gemini_api_key),
            gemini_url: get("gemini.url", &config.gemini_api_url),
            cohere_key: get("cohere.key", &config.cohere_api_key),
            cohere_url: get("cohere.url", &config.cohere_api_url),
            huggingface_key: get("huggingface.key", &config.huggingface_api_key),
            huggingface_model: get("huggingface.model", &config.huggingface_model),
        }
    }
}
