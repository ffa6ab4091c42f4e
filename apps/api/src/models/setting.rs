use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the runtime key/value settings table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AppSettingRow {
    pub config_key: String,
    pub config_value: String,
}
