pub mod appointments;
pub mod blood_type;
pub mod blood_units;
pub mod donors;
pub mod eligibility;
pub mod pagination;
pub mod records;

pub use blood_type::{BloodType, CompatibilityInfo, UnknownBloodType};
pub use pagination::{Page, PAGE_SIZE};
