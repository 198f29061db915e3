use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};

use super::audit::{TransitionAuditEntry, TransitionLog};
use super::domain::{BloodUnit, BloodUnitId, Locale, UnitStatus, UnitView};
use super::error::WorkflowError;
use super::query::{run_query, UnitQuery};
use super::repository::{BloodUnitRepository, RepositoryError};
use super::statistics::UnitStatistics;
use crate::workflows::pagination::Page;

/// Result of an accepted status change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionOutcome {
    pub unit: BloodUnit,
    pub statistics: UnitStatistics,
}

/// Service composing the unit repository, the status state machine and the
/// transition log.
pub struct BloodUnitWorkflow<R, L> {
    repository: Arc<R>,
    log: Arc<L>,
    default_locale: Locale,
    reference_date: Option<NaiveDate>,
}

impl<R, L> BloodUnitWorkflow<R, L>
where
    R: BloodUnitRepository + 'static,
    L: TransitionLog + 'static,
{
    pub fn new(repository: Arc<R>, log: Arc<L>) -> Self {
        Self {
            repository,
            log,
            default_locale: Locale::default(),
            reference_date: None,
        }
    }

    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Pin the date expiry countdowns are measured from. Defaults to the local date.
    pub fn with_reference_date(mut self, date: Option<NaiveDate>) -> Self {
        self.reference_date = date;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn view(&self, unit: BloodUnit) -> UnitView {
        let expiry = unit.expiry_status(self.today());
        UnitView { unit, expiry }
    }

    /// Move a unit to `target` without a version check.
    pub fn transition(
        &self,
        unit_id: &BloodUnitId,
        target: &str,
    ) -> Result<TransitionOutcome, WorkflowError> {
        self.apply(unit_id, target, None)
    }

    /// Move a unit to `target`, refusing if it changed since the caller read
    /// `expected_version`.
    pub fn transition_checked(
        &self,
        unit_id: &BloodUnitId,
        target: &str,
        expected_version: u64,
    ) -> Result<TransitionOutcome, WorkflowError> {
        self.apply(unit_id, target, Some(expected_version))
    }

    fn apply(
        &self,
        unit_id: &BloodUnitId,
        target: &str,
        expected_version: Option<u64>,
    ) -> Result<TransitionOutcome, WorkflowError> {
        let target = target
            .parse::<UnitStatus>()
            .map_err(WorkflowError::InvalidStatus)?;

        let unit = self
            .repository
            .fetch(unit_id)?
            .ok_or_else(|| WorkflowError::NotFound(unit_id.clone()))?;

        if let Some(expected) = expected_version {
            if expected != unit.version {
                return Err(WorkflowError::VersionConflict {
                    expected,
                    found: unit.version,
                });
            }
        }

        if let Err(error) = unit.status.check_transition(target) {
            warn!(unit = %unit_id, from = %unit.status, to = %target, %error, "transition rejected");
            return Err(error);
        }

        let from = unit.status;
        let read_version = unit.version;
        let mut updated = unit;
        updated.status = target;
        updated.version = read_version + 1;

        let entry = TransitionAuditEntry {
            unit_id: unit_id.clone(),
            from,
            to: target,
            version: updated.version,
            recorded_at: Utc::now(),
        };
        self.log.record(entry.clone())?;

        if let Err(error) = self
            .repository
            .compare_and_swap(updated.clone(), read_version)
        {
            if let Err(audit_error) = self.log.retract(&entry) {
                warn!(unit = %unit_id, %audit_error, "could not retract audit entry");
            }
            return Err(match error {
                RepositoryError::StaleVersion { expected, found } => {
                    WorkflowError::VersionConflict { expected, found }
                }
                RepositoryError::NotFound => WorkflowError::NotFound(unit_id.clone()),
                other => WorkflowError::Repository(other),
            });
        }

        let statistics = self.statistics()?;
        info!(
            unit = %unit_id,
            %from,
            to = %target,
            version = updated.version,
            approved = statistics.approved_units,
            pending = statistics.pending_units,
            "blood unit status changed"
        );

        Ok(TransitionOutcome {
            unit: updated,
            statistics,
        })
    }

    /// Run the listing pipeline over the current inventory.
    pub fn query(&self, query: &UnitQuery) -> Result<Page<BloodUnit>, WorkflowError> {
        let units = self.repository.all()?;
        Ok(run_query(units, query))
    }

    pub fn statistics(&self) -> Result<UnitStatistics, WorkflowError> {
        let units = self.repository.all()?;
        Ok(UnitStatistics::from_units(&units))
    }

    pub fn get(&self, unit_id: &BloodUnitId) -> Result<BloodUnit, WorkflowError> {
        self.repository
            .fetch(unit_id)?
            .ok_or_else(|| WorkflowError::NotFound(unit_id.clone()))
    }

    /// Accepted transitions for one unit, oldest first.
    pub fn history(
        &self,
        unit_id: &BloodUnitId,
    ) -> Result<Vec<TransitionAuditEntry>, WorkflowError> {
        self.get(unit_id)?;
        Ok(self.log.history(unit_id)?)
    }
}
