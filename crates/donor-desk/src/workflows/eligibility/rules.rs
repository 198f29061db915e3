use super::config::EligibilityConfig;
use super::domain::{DonorQuestionnaire, ReasonCode};

type Rule = fn(&DonorQuestionnaire, &EligibilityConfig) -> bool;

/// Rules in reporting order. Each returns `true` when the donor fails it.
const RULES: [(ReasonCode, Rule); 9] = [
    (ReasonCode::AgeTooLow, age_too_low),
    (ReasonCode::WeightTooLow, weight_too_low),
    (ReasonCode::NotFeelingWell, not_feeling_well),
    (ReasonCode::DonationIntervalNotMet, donation_interval_not_met),
    (ReasonCode::OnAntibiotics, on_antibiotics),
    (ReasonCode::RecentDentalWork, recent_dental_work),
    (ReasonCode::RecentTattooPiercing, recent_tattoo_piercing),
    (ReasonCode::RecentTravel, recent_travel),
    (ReasonCode::DisqualifyingCondition, disqualifying_condition),
];

fn age_too_low(q: &DonorQuestionnaire, config: &EligibilityConfig) -> bool {
    q.age < config.minimum_age
}

fn weight_too_low(q: &DonorQuestionnaire, config: &EligibilityConfig) -> bool {
    q.weight_kg < config.minimum_weight_kg
}

fn not_feeling_well(q: &DonorQuestionnaire, _: &EligibilityConfig) -> bool {
    !q.feeling_well
}

fn donation_interval_not_met(q: &DonorQuestionnaire, _: &EligibilityConfig) -> bool {
    q.recent_donation_within_window
}

fn on_antibiotics(q: &DonorQuestionnaire, _: &EligibilityConfig) -> bool {
    q.on_antibiotics
}

fn recent_dental_work(q: &DonorQuestionnaire, _: &EligibilityConfig) -> bool {
    q.recent_dental_work
}

fn recent_tattoo_piercing(q: &DonorQuestionnaire, _: &EligibilityConfig) -> bool {
    q.recent_tattoo_or_piercing
}

fn recent_travel(q: &DonorQuestionnaire, _: &EligibilityConfig) -> bool {
    q.recent_relevant_travel
}

fn disqualifying_condition(q: &DonorQuestionnaire, config: &EligibilityConfig) -> bool {
    q.medical_conditions
        .iter()
        .any(|condition| config.disqualifying_conditions.contains(condition))
}

/// Run every rule; no rule short-circuits another.
pub(crate) fn failed_rules(
    questionnaire: &DonorQuestionnaire,
    config: &EligibilityConfig,
) -> Vec<ReasonCode> {
    RULES
        .iter()
        .filter(|(_, fails)| fails(questionnaire, config))
        .map(|(reason, _)| *reason)
        .collect()
}

/// Human-readable explanation with the configured thresholds filled in.
pub(crate) fn describe(reason: ReasonCode, config: &EligibilityConfig) -> String {
    match reason {
        ReasonCode::AgeTooLow => format!("donors must be at least {} years old", config.minimum_age),
        ReasonCode::WeightTooLow => {
            format!("donors must weigh at least {} kg", config.minimum_weight_kg)
        }
        ReasonCode::NotFeelingWell => "donors must be feeling well on the day".to_string(),
        ReasonCode::DonationIntervalNotMet => format!(
            "at least {} days ({} weeks) must pass between donations",
            config.donation_interval_days,
            config.donation_interval_days / 7
        ),
        ReasonCode::OnAntibiotics => "donors currently taking antibiotics must wait".to_string(),
        ReasonCode::RecentDentalWork => format!(
            "wait {} days after dental work",
            config.dental_work_window_days
        ),
        ReasonCode::RecentTattooPiercing => format!(
            "wait {} days after a tattoo or piercing from an unregulated facility",
            config.tattoo_piercing_window_days
        ),
        ReasonCode::RecentTravel => {
            "recent travel to an affected region requires deferral".to_string()
        }
        ReasonCode::DisqualifyingCondition => {
            let tags: Vec<&str> = config
                .disqualifying_conditions
                .iter()
                .map(|condition| condition.tag())
                .collect();
            format!("reported condition is disqualifying ({})", tags.join(", "))
        }
    }
}
