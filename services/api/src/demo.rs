use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use donor_desk::error::AppError;
use donor_desk::seed::DemoInventory;
use donor_desk::workflows::blood_units::{
    BloodUnit, BloodUnitWorkflow, Locale, MemoryTransitionLog, SortMode, StatusFilter, UnitQuery,
    UnitStatistics, UnitStatus,
};
use donor_desk::workflows::donors::{DonorDirectory, DonorQuery, Readiness};
use donor_desk::workflows::eligibility::{
    EligibilityEvaluator, IntakeGuard, QuestionnaireSubmission, ReasonCode,
};
use donor_desk::workflows::records::DonationRecordRegistry;
use serde::Serialize;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference date for donor readiness and expiry countdowns (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Status label language for the unit listing (en or vi).
    #[arg(long, default_value = "en")]
    pub(crate) locale: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct EligibilityArgs {
    /// Donor age in years
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) age: i32,
    /// Donor weight in kilograms
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) weight: i32,
    /// The donor is not feeling well today
    #[arg(long)]
    pub(crate) unwell: bool,
    /// The donor gave blood within the minimum interval
    #[arg(long)]
    pub(crate) recent_donation: bool,
    /// Date of the last donation (YYYY-MM-DD); derives the interval answer
    #[arg(long, value_parser = parse_date)]
    pub(crate) last_donation: Option<NaiveDate>,
    /// Currently taking antibiotics
    #[arg(long)]
    pub(crate) antibiotics: bool,
    /// Dental work within the last few days
    #[arg(long)]
    pub(crate) dental_work: bool,
    /// Tattoo or piercing within the deferral window
    #[arg(long)]
    pub(crate) tattoo_or_piercing: bool,
    /// Recent travel to an affected region
    #[arg(long)]
    pub(crate) travel: bool,
    /// Declared medical condition tag; repeat for several
    #[arg(long = "condition")]
    pub(crate) conditions: Vec<String>,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the verdict as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl EligibilityArgs {
    fn submission(&self) -> QuestionnaireSubmission {
        QuestionnaireSubmission {
            age: self.age,
            weight_kg: self.weight,
            feeling_well: !self.unwell,
            recent_donation_within_window: self.recent_donation,
            last_donation_date: self.last_donation,
            on_antibiotics: self.antibiotics,
            recent_dental_work: self.dental_work,
            recent_tattoo_or_piercing: self.tattoo_or_piercing,
            recent_relevant_travel: self.travel,
            medical_conditions: self.conditions.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct EligibilityReport {
    eligible: bool,
    reasons: Vec<ReasonCode>,
    details: Vec<String>,
}

pub(crate) fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let evaluator = EligibilityEvaluator::default();
    let guard = IntakeGuard::new(evaluator.config().clone());

    let questionnaire = guard.questionnaire_from_submission(args.submission(), today)?;
    let verdict = evaluator.evaluate(&questionnaire);
    let report = EligibilityReport {
        details: evaluator.explain(&verdict),
        eligible: verdict.eligible,
        reasons: verdict.reasons.clone(),
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Verdict payload unavailable: {err}"),
        }
        return Ok(());
    }

    println!("Eligibility screening ({today})");
    println!("- {}", verdict.summary());
    for detail in &report.details {
        println!("  - {detail}");
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let locale = args.locale.parse::<Locale>().unwrap_or_else(|raw| {
        println!("Unknown locale '{raw}', falling back to English labels");
        Locale::En
    });

    let inventory = DemoInventory::load()?;
    let workflow = BloodUnitWorkflow::new(
        Arc::new(inventory.unit_repository()?),
        Arc::new(MemoryTransitionLog::default()),
    )
    .with_default_locale(locale);

    println!("Blood unit workflow demo");
    render_statistics("Inventory before review", &workflow.statistics()?);

    let queue = workflow.query(&UnitQuery {
        status: StatusFilter::All,
        sort: SortMode::PendingFirst,
        locale,
        ..UnitQuery::default()
    })?;
    println!(
        "\nReview queue (page {} of {}, {} units, pending first)",
        queue.page, queue.total_pages, queue.total_count
    );
    for unit in &queue.items {
        render_unit(unit, locale, today);
    }

    let pending: Vec<&BloodUnit> = queue
        .items
        .iter()
        .filter(|unit| unit.status == UnitStatus::Pending)
        .collect();

    println!("\nStatus changes");
    let mut approved = None;
    if let Some(unit) = pending.first() {
        let outcome = workflow.transition(&unit.id, "approved")?;
        println!(
            "- {} approved (version {}) -> {} approved units, {} ml ready",
            outcome.unit.id,
            outcome.unit.version,
            outcome.statistics.approved_units,
            outcome.statistics.approved_volume_ml
        );
        approved = Some(outcome.unit);
    }
    if let Some(unit) = pending.get(1) {
        let outcome = workflow.transition(&unit.id, "denied")?;
        println!(
            "- {} denied -> {} units still pending",
            outcome.unit.id, outcome.statistics.pending_units
        );
    }

    if let Some(unit) = &approved {
        match workflow.transition(&unit.id, "expired") {
            Ok(outcome) => println!("- {} unexpectedly expired", outcome.unit.id),
            Err(err) => println!("- Rejected: {err}"),
        }
        match workflow.transition_checked(&unit.id, "denied", unit.version - 1) {
            Ok(outcome) => println!("- {} unexpectedly accepted", outcome.unit.id),
            Err(err) => println!("- Rejected: {err}"),
        }

        println!("\nHistory for {}", unit.id);
        for entry in workflow.history(&unit.id)? {
            println!(
                "  - v{} {} -> {} at {}",
                entry.version,
                entry.from,
                entry.to,
                entry.recorded_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
    }

    render_statistics("\nInventory after review", &workflow.statistics()?);

    let directory = DonorDirectory::new(inventory.donors);
    let donor_stats = directory.statistics(today);
    println!(
        "\nDonor directory ({today}): {} donors, {} ready to donate",
        donor_stats.total_donors, donor_stats.eligible_donors
    );
    let recent = directory.query(&DonorQuery::default(), today);
    for view in recent.items.iter().take(3) {
        let readiness = match view.readiness {
            Readiness::Eligible => "ready",
            Readiness::Waiting => "due soon",
            Readiness::NotYet => "resting",
        };
        println!(
            "  - {} ({}, {} years) last gave {} days ago: {}",
            view.donor.name,
            view.donor.blood_type,
            view.age,
            view.days_since_last_donation.unwrap_or_default(),
            readiness
        );
    }

    let registry = DonationRecordRegistry::new(inventory.records);
    match registry.statistics() {
        Ok(stats) => println!(
            "\nDonation records: {} total | {} passed | {} flagged",
            stats.total_records, stats.good_records, stats.poor_records
        ),
        Err(err) => println!("\nDonation records unavailable: {err}"),
    }

    Ok(())
}

fn render_statistics(title: &str, stats: &UnitStatistics) {
    println!(
        "{title}: {} units | {} approved ({} ml) | {} pending",
        stats.total_units, stats.approved_units, stats.approved_volume_ml, stats.pending_units
    );
}

fn render_unit(unit: &BloodUnit, locale: Locale, today: NaiveDate) {
    println!(
        "  - {} {:<3} {} ml donated {} expires {} ({}) [{}]",
        unit.id,
        unit.blood_type.label(),
        unit.volume_ml,
        unit.donation_date,
        unit.expiry_date,
        unit.expiry_status(today).display_label(locale),
        unit.status.display_label(locale)
    );
}
