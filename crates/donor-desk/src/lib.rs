//! Donor eligibility screening and blood-unit inventory workflows.
//!
//! The crate exposes the rule logic behind the staff dashboard of a blood-donation
//! support site: the donor questionnaire evaluator, the blood-unit status workflow,
//! and the read-only donor directory and donation record registry that sit beside it.

pub mod config;
pub mod error;
pub mod seed;
pub mod session;
pub mod telemetry;
pub mod workflows;
