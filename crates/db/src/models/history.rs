//! Work history log entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::{display_timestamp, null_as_default, DbId, Timestamp};

/// A row from the `update_history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: DbId,
    #[serde(serialize_with = "display_timestamp::serialize")]
    pub timestamp: Timestamp,
    pub description: String,
    pub effort_hours: Decimal,
    pub claude_prompt: String,
}

/// DTO for appending an entry.
///
/// Absent or `null` fields default to empty / zero; a missing description is then
/// rejected by validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateHistoryEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub effort_hours: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub claude_prompt: String,
}
