use base64::Engine;
use chrono::Utc;
use rand::RngCore;
use rusqlite::{params, OptionalExtension};

use crate::db::connection::Database;
use crate::errors::ServerError;
use crate::filters::FilterSet;

/// New anonymous session id: 32 random bytes, url-safe base64.
pub fn new_session_id() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Persist the session's filters as JSON, replacing any earlier snapshot.
pub fn save_filters(db: &Database, sid: &str, filters: &FilterSet) -> Result<(), ServerError> {
    let json = serde_json::to_string(filters)
        .map_err(|e| ServerError::DbError(format!("Serialize filters failed: {e}")))?;
    let now = Utc::now().to_rfc3339();

    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO search_sessions (sid, filters_json, updated_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT(sid) DO UPDATE SET filters_json = excluded.filters_json, \
             updated_at = excluded.updated_at",
            params![sid, json, now],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
}

/// Load the saved filters for a session. Missing rows, unreadable storage,
/// and corrupt JSON all come back as an empty filter set; restoring a
/// search must never take the page down.
pub fn load_filters(db: &Database, sid: &str) -> FilterSet {
    let stored: Option<String> = db
        .with_conn(|conn| {
            conn.query_row(
                "SELECT filters_json FROM search_sessions WHERE sid = ?1",
                params![sid],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| ServerError::DbError(e.to_string()))
        })
        .unwrap_or(None);

    stored
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}
