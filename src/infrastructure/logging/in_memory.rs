use crate::core::models::AuditLogEntry;
use crate::infrastructure::logging::AuditLogger;
use log::debug;

#[derive(Debug, Default)]
pub struct InMemoryAuditLogger {
    logs: Vec<AuditLogEntry>,
}

impl InMemoryAuditLogger {
    pub fn new() -> Self {
        InMemoryAuditLogger { logs: Vec::new() }
    }

    pub fn get_logs(&self) -> &[AuditLogEntry] {
        &self.logs
    }
}

impl AuditLogger for InMemoryAuditLogger {
    fn log(&mut self, entry: AuditLogEntry) {
        debug!("Audit {} for user {}: {}", entry.action, entry.user_id, entry.payload);
        self.logs.push(entry);
    }
}
