use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{BloodUnit, BloodUnitId};

/// Storage abstraction so the workflow can be exercised in isolation.
pub trait BloodUnitRepository: Send + Sync {
    fn insert(&self, unit: BloodUnit) -> Result<BloodUnit, RepositoryError>;
    fn fetch(&self, id: &BloodUnitId) -> Result<Option<BloodUnit>, RepositoryError>;
    /// Every unit, in identifier (creation) order.
    fn all(&self) -> Result<Vec<BloodUnit>, RepositoryError>;
    /// Replace the stored unit only if its version still equals `expected_version`.
    fn compare_and_swap(
        &self,
        unit: BloodUnit,
        expected_version: u64,
    ) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("stale write: expected version {expected}, stored version {found}")]
    StaleVersion { expected: u64, found: u64 },
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local inventory. Cloning shares the underlying map.
#[derive(Debug, Default, Clone)]
pub struct MemoryBloodUnitRepository {
    units: Arc<Mutex<BTreeMap<BloodUnitId, BloodUnit>>>,
}

impl MemoryBloodUnitRepository {
    pub fn with_units(units: impl IntoIterator<Item = BloodUnit>) -> Result<Self, RepositoryError> {
        let repository = Self::default();
        for unit in units {
            repository.insert(unit)?;
        }
        Ok(repository)
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<BloodUnitId, BloodUnit>>, RepositoryError> {
        self.units
            .lock()
            .map_err(|_| RepositoryError::Unavailable("inventory mutex poisoned".to_string()))
    }
}

impl BloodUnitRepository for MemoryBloodUnitRepository {
    fn insert(&self, unit: BloodUnit) -> Result<BloodUnit, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&unit.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(unit.id.clone(), unit.clone());
        Ok(unit)
    }

    fn fetch(&self, id: &BloodUnitId) -> Result<Option<BloodUnit>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }

    fn all(&self) -> Result<Vec<BloodUnit>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.values().cloned().collect())
    }

    fn compare_and_swap(
        &self,
        unit: BloodUnit,
        expected_version: u64,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        let stored = guard.get_mut(&unit.id).ok_or(RepositoryError::NotFound)?;
        if stored.version != expected_version {
            return Err(RepositoryError::StaleVersion {
                expected: expected_version,
                found: stored.version,
            });
        }
        *stored = unit;
        Ok(())
    }
}
