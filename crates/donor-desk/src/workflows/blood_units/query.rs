use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{BloodUnit, Locale, UnitStatus};
use super::error::WorkflowError;
use crate::workflows::pagination::{matches_search, Page};

/// Status filter; `All` bypasses filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(UnitStatus),
}

impl StatusFilter {
    fn admits(self, status: UnitStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = WorkflowError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        trimmed
            .parse::<UnitStatus>()
            .map(StatusFilter::Only)
            .map_err(WorkflowError::InvalidStatus)
    }
}

/// Listing order. Every mode breaks ties by donation date, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Newest,
    PendingFirst,
    StatusAsc,
    StatusDesc,
}

impl SortMode {
    pub const fn label(self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::PendingFirst => "pending-first",
            SortMode::StatusAsc => "status-asc",
            SortMode::StatusDesc => "status-desc",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortMode {
    type Err = WorkflowError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "newest" | "donation-date-desc" => Ok(SortMode::Newest),
            "pending-first" => Ok(SortMode::PendingFirst),
            "status-asc" => Ok(SortMode::StatusAsc),
            "status-desc" => Ok(SortMode::StatusDesc),
            _ => Err(WorkflowError::InvalidSortMode(value.to_string())),
        }
    }
}

/// Inputs to the inventory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitQuery {
    pub status: StatusFilter,
    pub search: String,
    pub sort: SortMode,
    pub page: usize,
    pub locale: Locale,
}

impl Default for UnitQuery {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            search: String::new(),
            sort: SortMode::Newest,
            page: 1,
            locale: Locale::default(),
        }
    }
}

/// Filter by status, then search, then sort, then paginate.
pub(crate) fn run_query(units: Vec<BloodUnit>, query: &UnitQuery) -> Page<BloodUnit> {
    let mut filtered: Vec<BloodUnit> = units
        .into_iter()
        .filter(|unit| query.status.admits(unit.status))
        .filter(|unit| {
            matches_search(&query.search, &[unit.id.as_str(), unit.blood_type.label()])
        })
        .collect();

    filtered.sort_by(|left, right| compare(left, right, query.sort, query.locale));

    Page::from_filtered(filtered, query.page)
}

fn compare(left: &BloodUnit, right: &BloodUnit, sort: SortMode, locale: Locale) -> Ordering {
    let newest_first = right.donation_date.cmp(&left.donation_date);
    let primary = match sort {
        SortMode::Newest => Ordering::Equal,
        SortMode::PendingFirst => {
            let left_pending = left.status == UnitStatus::Pending;
            let right_pending = right.status == UnitStatus::Pending;
            right_pending.cmp(&left_pending)
        }
        SortMode::StatusAsc => collate(
            left.status.display_label(locale),
            right.status.display_label(locale),
            locale,
        ),
        SortMode::StatusDesc => collate(
            right.status.display_label(locale),
            left.status.display_label(locale),
            locale,
        ),
    };
    primary.then(newest_first)
}

/// Vietnamese alphabet, with the Latin letters it borrows slotted in place.
const VI_ALPHABET: &str = "aăâbcdđeêfghijklmnoôơpqrstuưvwxyz";

/// Toned forms of each vowel: none, grave, hook, tilde, acute, dot below.
const VI_TONED_VOWELS: [&str; 12] = [
    "aàảãáạ", "ăằẳẵắặ", "âầẩẫấậ", "eèẻẽéẹ", "êềểễếệ", "iìỉĩíị", "oòỏõóọ", "ôồổỗốộ",
    "ơờởỡớợ", "uùủũúụ", "ưừửữứự", "yỳỷỹýỵ",
];

/// Letter position, then tone. Characters outside the alphabet sort after it by
/// code point.
fn vi_letter_key(ch: char) -> (u32, u32) {
    let lower = ch.to_lowercase().next().unwrap_or(ch);
    let (base, tone) = VI_TONED_VOWELS
        .iter()
        .find_map(|forms| {
            forms
                .chars()
                .position(|form| form == lower)
                .and_then(|tone| forms.chars().next().map(|base| (base, tone as u32)))
        })
        .unwrap_or((lower, 0));

    match VI_ALPHABET.chars().position(|letter| letter == base) {
        Some(index) => (index as u32, tone),
        None => (VI_ALPHABET.chars().count() as u32 + base as u32, tone),
    }
}

/// Compare two labels in the alphabetical order of `locale`. Vietnamese compares
/// base letters first (so `Đ` follows `D`), then tones.
fn collate(left: &str, right: &str, locale: Locale) -> Ordering {
    match locale {
        Locale::En => left.cmp(right),
        Locale::Vi => {
            let keys = |text: &str| text.chars().map(vi_letter_key).collect::<Vec<_>>();
            let (left_keys, right_keys) = (keys(left), keys(right));
            let letters = |keys: &[(u32, u32)]| keys.iter().map(|key| key.0).collect::<Vec<_>>();
            letters(left_keys.as_slice())
                .cmp(&letters(right_keys.as_slice()))
                .then_with(|| left_keys.cmp(&right_keys))
                .then_with(|| left.cmp(right))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vietnamese_d_with_stroke_follows_d() {
        let mut labels = UnitStatus::ALL.map(|status| status.display_label(Locale::Vi));
        labels.sort_by(|left, right| collate(left, right, Locale::Vi));

        assert_eq!(labels, ["Chờ duyệt", "Đã duyệt", "Hết hạn", "Từ chối"]);
        assert_eq!(collate("dê", "đa", Locale::Vi), Ordering::Less);
    }

    #[test]
    fn tones_only_break_ties_between_identical_letters() {
        assert_eq!(collate("ma", "má", Locale::Vi), Ordering::Less);
        assert_eq!(collate("má", "mb", Locale::Vi), Ordering::Less);
        assert_eq!(collate("Ơ", "ô", Locale::Vi), Ordering::Greater);
    }
}
