use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    AddUser,
    UpdateUser,
    DeleteUser,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AuditAction::AddUser => "ADD_USER",
            AuditAction::UpdateUser => "UPDATE_USER",
            AuditAction::DeleteUser => "DELETE_USER",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub user_id: u32,
    pub action: AuditAction,
    pub payload: String,
    pub created_at: DateTime<Utc>,
}

impl AuditLogEntry {
    // Create audit log entry with structured JSON payload
    pub fn new<T: Serialize>(user_id: u32, action: AuditAction, payload: &T) -> Self {
        AuditLogEntry {
            id: Uuid::new_v4(),
            user_id,
            action,
            payload: serde_json::to_string(payload).unwrap_or_default(),
            created_at: Utc::now(),
        }
    }
}
