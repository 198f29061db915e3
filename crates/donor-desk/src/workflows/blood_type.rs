use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// ABO group with Rh factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodType {
    pub const ALL: [BloodType; 8] = [
        BloodType::APositive,
        BloodType::ANegative,
        BloodType::BPositive,
        BloodType::BNegative,
        BloodType::AbPositive,
        BloodType::AbNegative,
        BloodType::OPositive,
        BloodType::ONegative,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
        }
    }

    const fn antigens(self) -> (bool, bool, bool) {
        match self {
            BloodType::APositive => (true, false, true),
            BloodType::ANegative => (true, false, false),
            BloodType::BPositive => (false, true, true),
            BloodType::BNegative => (false, true, false),
            BloodType::AbPositive => (true, true, true),
            BloodType::AbNegative => (true, true, false),
            BloodType::OPositive => (false, false, true),
            BloodType::ONegative => (false, false, false),
        }
    }

    /// Red cells are compatible when the recipient carries every antigen the donor does.
    pub const fn can_donate_red_cells_to(self, recipient: BloodType) -> bool {
        let (donor_a, donor_b, donor_rh) = self.antigens();
        let (recipient_a, recipient_b, recipient_rh) = recipient.antigens();
        (!donor_a || recipient_a) && (!donor_b || recipient_b) && (!donor_rh || recipient_rh)
    }

    pub fn red_cell_recipients(self) -> Vec<BloodType> {
        BloodType::ALL
            .into_iter()
            .filter(|recipient| self.can_donate_red_cells_to(*recipient))
            .collect()
    }

    /// Donor-facing blurb shown after a visitor picks their blood type.
    pub const fn donor_message(self) -> &'static str {
        match self {
            BloodType::ONegative => "Your blood type O- is especially valuable as you are a universal donor! Your donations can help patients of all blood types.",
            BloodType::OPositive => "Your blood type O+ is very common and always in high demand. You can donate to any Rh+ blood type recipient.",
            BloodType::ANegative => "Your blood type A- is somewhat rare. You can donate to A and AB recipients, and your plasma is valuable for all blood types.",
            BloodType::APositive => "Your blood type A+ is common. You can donate to A+ and AB+ recipients.",
            BloodType::BNegative => "Your blood type B- is rare. You can donate to B and AB recipients.",
            BloodType::BPositive => "Your blood type B+ is somewhat common. You can donate to B+ and AB+ recipients.",
            BloodType::AbNegative => "Your blood type AB- is rare. You can donate to AB recipients, and your plasma can be given to all blood types.",
            BloodType::AbPositive => "Your blood type AB+ means you are a universal plasma donor! While your red cells can only go to AB+ recipients, your plasma can help anyone.",
        }
    }

    pub fn compatibility(self) -> CompatibilityInfo {
        CompatibilityInfo {
            blood_type: self,
            red_cell_recipients: self.red_cell_recipients(),
            message: format!(
                "{} All blood types are needed. Schedule your donation today!",
                self.donor_message()
            ),
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown blood type '{0}'")]
pub struct UnknownBloodType(pub String);

impl FromStr for BloodType {
    type Err = UnknownBloodType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        BloodType::ALL
            .into_iter()
            .find(|candidate| candidate.label() == normalized)
            .ok_or_else(|| UnknownBloodType(value.to_string()))
    }
}

/// Payload for the public blood-type lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityInfo {
    pub blood_type: BloodType,
    pub red_cell_recipients: Vec<BloodType>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn o_negative_gives_to_everyone() {
        assert_eq!(
            BloodType::ONegative.red_cell_recipients().len(),
            BloodType::ALL.len()
        );
    }

    #[test]
    fn ab_positive_only_gives_to_itself() {
        assert_eq!(
            BloodType::AbPositive.red_cell_recipients(),
            vec![BloodType::AbPositive]
        );
    }

    #[test]
    fn a_positive_matches_the_donor_message() {
        assert_eq!(
            BloodType::APositive.red_cell_recipients(),
            vec![BloodType::APositive, BloodType::AbPositive]
        );
        assert!(BloodType::APositive.donor_message().contains("AB+"));
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("ab-".parse::<BloodType>(), Ok(BloodType::AbNegative));
        assert_eq!(" O+ ".parse::<BloodType>(), Ok(BloodType::OPositive));
        assert_eq!(
            "C+".parse::<BloodType>(),
            Err(UnknownBloodType("C+".to_string()))
        );
    }

    #[test]
    fn serializes_with_clinical_labels() {
        let json = serde_json::to_string(&BloodType::AbNegative).expect("serializes");
        assert_eq!(json, "\"AB-\"");
    }
}
