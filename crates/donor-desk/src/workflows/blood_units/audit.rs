use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{BloodUnitId, UnitStatus};

/// One accepted status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionAuditEntry {
    pub unit_id: BloodUnitId,
    pub from: UnitStatus,
    pub to: UnitStatus,
    /// Unit version after the change.
    pub version: u64,
    pub recorded_at: DateTime<Utc>,
}

/// Sink for accepted transitions.
///
/// The workflow records an entry before it saves the unit, and retracts it when
/// the save is refused.
pub trait TransitionLog: Send + Sync {
    fn record(&self, entry: TransitionAuditEntry) -> Result<(), AuditError>;
    /// Remove the most recent entry equal to `entry`.
    fn retract(&self, entry: &TransitionAuditEntry) -> Result<(), AuditError>;
    /// Entries for one unit, oldest first.
    fn history(&self, unit_id: &BloodUnitId) -> Result<Vec<TransitionAuditEntry>, AuditError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("audit log unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default, Clone)]
pub struct MemoryTransitionLog {
    entries: Arc<Mutex<Vec<TransitionAuditEntry>>>,
}

impl MemoryTransitionLog {
    pub fn entries(&self) -> Result<Vec<TransitionAuditEntry>, AuditError> {
        self.entries
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| AuditError::Unavailable("audit mutex poisoned".to_string()))
    }
}

impl TransitionLog for MemoryTransitionLog {
    fn record(&self, entry: TransitionAuditEntry) -> Result<(), AuditError> {
        self.entries
            .lock()
            .map_err(|_| AuditError::Unavailable("audit mutex poisoned".to_string()))?
            .push(entry);
        Ok(())
    }

    fn retract(&self, entry: &TransitionAuditEntry) -> Result<(), AuditError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| AuditError::Unavailable("audit mutex poisoned".to_string()))?;
        if let Some(position) = guard.iter().rposition(|stored| stored == entry) {
            guard.remove(position);
        }
        Ok(())
    }

    fn history(&self, unit_id: &BloodUnitId) -> Result<Vec<TransitionAuditEntry>, AuditError> {
        Ok(self
            .entries()?
            .into_iter()
            .filter(|entry| &entry.unit_id == unit_id)
            .collect())
    }
}
