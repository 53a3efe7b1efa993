use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use super::domain::{ApplicantProfile, HouseholdSize, UnknownHouseholdSize};

/// Errors raised while loading a poverty guideline table.
#[derive(Debug, thiserror::Error)]
pub enum FplTableError {
    #[error("invalid FPL CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    UnknownHousehold(#[from] UnknownHouseholdSize),
    #[error("threshold for household size {household_size} must be finite and non-negative (found {value})")]
    InvalidThreshold {
        household_size: HouseholdSize,
        value: f64,
    },
    #[error("household size {0} is listed more than once")]
    DuplicateHousehold(HouseholdSize),
    #[error("failed to read FPL table: {0}")]
    Io(#[from] std::io::Error),
}

/// Annual Federal Poverty Level thresholds keyed by household category.
#[derive(Debug, Clone, PartialEq)]
pub struct FplTable {
    thresholds: BTreeMap<HouseholdSize, f64>,
}

impl FplTable {
    pub fn new<I>(entries: I) -> Result<Self, FplTableError>
    where
        I: IntoIterator<Item = (HouseholdSize, f64)>,
    {
        let mut thresholds = BTreeMap::new();
        for (household_size, value) in entries {
            if !value.is_finite() || value < 0.0 {
                return Err(FplTableError::InvalidThreshold {
                    household_size,
                    value,
                });
            }
            if thresholds.insert(household_size, value).is_some() {
                return Err(FplTableError::DuplicateHousehold(household_size));
            }
        }

        Ok(Self { thresholds })
    }

    /// 2024 guideline values used by the screening questionnaire.
    pub fn federal_2024() -> Self {
        let thresholds = [
            (HouseholdSize::One, 15_060.0),
            (HouseholdSize::Two, 20_440.0),
            (HouseholdSize::Three, 25_820.0),
            (HouseholdSize::Four, 31_200.0),
            (HouseholdSize::FivePlus, 36_580.0),
        ]
        .into_iter()
        .collect();

        Self { thresholds }
    }

    /// Load `household_size,annual_threshold` rows.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, FplTableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for row in csv_reader.deserialize::<FplRow>() {
            let row = row?;
            let household_size = row.household_size.parse::<HouseholdSize>()?;
            entries.push((household_size, row.annual_threshold));
        }

        Self::new(entries)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FplTableError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn entries(&self) -> impl Iterator<Item = (HouseholdSize, f64)> + '_ {
        self.thresholds.iter().map(|(size, value)| (*size, *value))
    }

    /// Threshold for `household_size`, falling back to the single-person entry when the
    /// category is missing. A table without that entry either resolves to zero.
    pub fn threshold_for(&self, household_size: HouseholdSize) -> f64 {
        if let Some(value) = self.thresholds.get(&household_size) {
            return *value;
        }

        let fallback = self
            .thresholds
            .get(&HouseholdSize::One)
            .copied()
            .unwrap_or(0.0);
        warn!(
            household_size = household_size.label(),
            fallback, "household size missing from FPL table, using single-person threshold"
        );
        fallback
    }

    /// Income as a multiple of the household's threshold. A zero threshold yields
    /// positive infinity so every ratio-gated rule rejects the household.
    pub fn income_ratio(&self, profile: &ApplicantProfile) -> f64 {
        let threshold = self.threshold_for(profile.household_size);
        if threshold == 0.0 {
            f64::INFINITY
        } else {
            profile.annual_income / threshold
        }
    }
}

impl Default for FplTable {
    fn default() -> Self {
        Self::federal_2024()
    }
}

#[derive(Debug, Deserialize)]
struct FplRow {
    household_size: String,
    annual_threshold: f64,
}
