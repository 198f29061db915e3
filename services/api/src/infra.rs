use chrono::NaiveDate;
use donor_desk::config::DashboardConfig;
use donor_desk::error::AppError;
use donor_desk::seed::{self, DemoInventory};
use donor_desk::workflows::appointments::{AppointmentBook, AppointmentState, BloodDriveCatalog};
use donor_desk::workflows::blood_units::{
    BloodUnitWorkflow, MemoryBloodUnitRepository, MemoryTransitionLog,
};
use donor_desk::workflows::donors::{DonorDirectory, DonorDirectoryState};
use donor_desk::workflows::eligibility::router::EligibilityState;
use donor_desk::workflows::eligibility::EligibilityEvaluator;
use donor_desk::workflows::records::DonationRecordRegistry;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type UnitWorkflow = BloodUnitWorkflow<MemoryBloodUnitRepository, MemoryTransitionLog>;

/// In-memory services behind the dashboard routes.
pub(crate) struct Dashboard {
    pub(crate) eligibility: Arc<EligibilityState>,
    pub(crate) appointments: Arc<AppointmentState>,
    pub(crate) units: Arc<UnitWorkflow>,
    pub(crate) donors: Arc<DonorDirectoryState>,
    pub(crate) records: DonationRecordRegistry,
}

impl Dashboard {
    /// Wire the services, seeding the demo inventory when configured to. `today`
    /// pins the reference date used by screening and the donor directory.
    pub(crate) fn build(
        config: &DashboardConfig,
        today: Option<NaiveDate>,
    ) -> Result<Self, AppError> {
        let inventory = if config.seed_demo_data {
            DemoInventory::load()?
        } else {
            DemoInventory {
                donors: Vec::new(),
                units: Vec::new(),
                records: Vec::new(),
                drives: Vec::new(),
            }
        };
        info!(
            donors = inventory.donors.len(),
            units = inventory.units.len(),
            records = inventory.records.len(),
            drives = inventory.drives.len(),
            "dashboard inventory loaded"
        );

        let units = BloodUnitWorkflow::new(
            Arc::new(inventory.unit_repository()?),
            Arc::new(MemoryTransitionLog::default()),
        )
        .with_default_locale(config.locale)
        .with_reference_date(today);

        let mut eligibility = EligibilityState::new(EligibilityEvaluator::default());
        eligibility.today = today;

        let mut appointments = AppointmentState::new(
            AppointmentBook::new(seed::locations()),
            BloodDriveCatalog::new(inventory.drives),
        );
        appointments.today = today;

        let mut donors = DonorDirectoryState::new(DonorDirectory::new(inventory.donors));
        donors.today = today;

        Ok(Self {
            eligibility: Arc::new(eligibility),
            appointments: Arc::new(appointments),
            units: Arc::new(units),
            donors: Arc::new(donors),
            records: DonationRecordRegistry::new(inventory.records),
        })
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use donor_desk::workflows::blood_units::Locale;

    fn config(seed_demo_data: bool) -> DashboardConfig {
        DashboardConfig {
            locale: Locale::Vi,
            seed_demo_data,
        }
    }

    #[test]
    fn seeded_dashboard_exposes_demo_inventory() {
        let dashboard = Dashboard::build(&config(true), None).expect("dashboard builds");

        assert_eq!(dashboard.units.statistics().expect("stats").total_units, 20);
        assert_eq!(dashboard.units.default_locale(), Locale::Vi);
        assert_eq!(dashboard.donors.directory.len(), 20);
        assert_eq!(
            dashboard.records.statistics().expect("stats").total_records,
            20
        );
    }

    #[test]
    fn unseeded_dashboard_starts_empty() {
        let dashboard = Dashboard::build(&config(false), None).expect("dashboard builds");

        assert_eq!(dashboard.units.statistics().expect("stats").total_units, 0);
        assert!(dashboard.donors.directory.is_empty());
    }

    #[test]
    fn parse_date_trims_and_reports_bad_input() {
        assert_eq!(
            parse_date(" 2024-01-15 "),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"))
        );
        assert!(parse_date("15/01/2024").is_err());
    }
}
