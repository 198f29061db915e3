use super::domain::BloodDrive;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid ZIP code")]
pub struct InvalidZipCode(pub String);

/// Upcoming public blood drives, searchable by ZIP code.
#[derive(Debug, Clone, Default)]
pub struct BloodDriveCatalog {
    drives: Vec<BloodDrive>,
}

impl BloodDriveCatalog {
    pub fn new(drives: Vec<BloodDrive>) -> Self {
        Self { drives }
    }

    /// Drives near `zip_code`, closest first. Distances are precomputed per drive,
    /// so any well-formed ZIP code sees the same list.
    pub fn search(&self, zip_code: &str) -> Result<Vec<BloodDrive>, InvalidZipCode> {
        let zip = zip_code.trim();
        let well_formed = matches!(zip.len(), 5 | 10)
            && zip.char_indices().all(|(index, ch)| match index {
                5 => ch == '-',
                _ => ch.is_ascii_digit(),
            });
        if !well_formed {
            return Err(InvalidZipCode(zip_code.to_string()));
        }

        let mut drives = self.drives.clone();
        drives.sort_by(|left, right| left.distance_miles.total_cmp(&right.distance_miles));
        Ok(drives)
    }
}
