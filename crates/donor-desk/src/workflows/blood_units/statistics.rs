use serde::{Deserialize, Serialize};

use super::domain::{BloodUnit, UnitStatus};

/// Inventory counters shown above the unit table. Always recomputed from the
/// current units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitStatistics {
    pub total_units: usize,
    pub approved_units: usize,
    pub pending_units: usize,
    pub approved_volume_ml: u64,
}

impl UnitStatistics {
    pub fn from_units(units: &[BloodUnit]) -> Self {
        units.iter().fold(
            Self {
                total_units: units.len(),
                ..Self::default()
            },
            |mut stats, unit| {
                match unit.status {
                    UnitStatus::Approved => {
                        stats.approved_units += 1;
                        stats.approved_volume_ml += u64::from(unit.volume_ml);
                    }
                    UnitStatus::Pending => stats.pending_units += 1,
                    UnitStatus::Denied | UnitStatus::Expired => {}
                }
                stats
            },
        )
    }
}
