use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Household-size categories used by the poverty guideline table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HouseholdSize {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5+", alias = "5-or-more")]
    FivePlus,
}

impl HouseholdSize {
    pub const fn ordered() -> [Self; 5] {
        [Self::One, Self::Two, Self::Three, Self::Four, Self::FivePlus]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::FivePlus => "5+",
        }
    }

    /// Maps a head count onto its category. Zero people is not a household.
    pub const fn from_count(count: u32) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => Some(Self::FivePlus),
        }
    }
}

impl fmt::Display for HouseholdSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HouseholdSize {
    type Err = UnknownHouseholdSize;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if matches!(trimmed, "5+" | "5-or-more") {
            return Ok(Self::FivePlus);
        }

        trimmed
            .parse::<u32>()
            .ok()
            .and_then(Self::from_count)
            .ok_or_else(|| UnknownHouseholdSize(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized household size '{0}' (expected 1, 2, 3, 4 or 5+)")]
pub struct UnknownHouseholdSize(pub String);

/// Household attributes scored against the catalog. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub age: u32,
    pub household_size: HouseholdSize,
    pub annual_income: f64,
    pub has_children: bool,
    pub is_veteran: bool,
    pub is_disabled: bool,
}

/// Questionnaire as submitted by the screening front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Questionnaire {
    pub age: u32,
    pub zip_code: String,
    pub annual_income: f64,
    pub household_size: HouseholdSize,
    pub has_children: bool,
    #[serde(default)]
    pub is_veteran: bool,
    #[serde(default)]
    pub is_disabled: bool,
}

impl Questionnaire {
    pub fn profile(&self) -> ApplicantProfile {
        ApplicantProfile {
            age: self.age,
            household_size: self.household_size,
            annual_income: self.annual_income,
            has_children: self.has_children,
            is_veteran: self.is_veteran,
            is_disabled: self.is_disabled,
        }
    }
}

impl From<Questionnaire> for ApplicantProfile {
    fn from(questionnaire: Questionnaire) -> Self {
        questionnaire.profile()
    }
}

/// Stable key used to dispatch a program to its eligibility rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProgramId(pub String);

impl ProgramId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProgramId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProgramId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Catalog entry describing an assistance program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitProgram {
    pub id: ProgramId,
    pub name: String,
    pub description: String,
    pub estimated_amount: String,
    pub requirements: Vec<String>,
    pub application_url: String,
    pub documents_needed: Vec<String>,
}

/// A program the household may qualify for, with the engine's confidence in `[0, 100]`.
///
/// Built as an owned copy so catalog entries are never annotated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredBenefit {
    #[serde(flatten)]
    pub program: BenefitProgram,
    pub confidence_score: f64,
}

impl ScoredBenefit {
    pub fn new(program: &BenefitProgram, confidence_score: f64) -> Self {
        Self {
            program: program.clone(),
            confidence_score,
        }
    }

    pub fn id(&self) -> &ProgramId {
        &self.program.id
    }
}

/// Ranked benefits alongside the profile they were computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningOutcome {
    pub eligible_benefits: Vec<ScoredBenefit>,
    pub profile: ApplicantProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn household_size_parses_labels_and_counts() {
        assert_eq!("1".parse::<HouseholdSize>(), Ok(HouseholdSize::One));
        assert_eq!(" 4 ".parse::<HouseholdSize>(), Ok(HouseholdSize::Four));
        assert_eq!("5+".parse::<HouseholdSize>(), Ok(HouseholdSize::FivePlus));
        assert_eq!("9".parse::<HouseholdSize>(), Ok(HouseholdSize::FivePlus));
        assert!("0".parse::<HouseholdSize>().is_err());
        assert!("many".parse::<HouseholdSize>().is_err());
    }

    #[test]
    fn questionnaire_defaults_optional_flags() {
        let questionnaire: Questionnaire = serde_json::from_str(
            r#"{"age":41,"zip_code":"94110","annual_income":18000.0,"household_size":"5+","has_children":true}"#,
        )
        .expect("questionnaire decodes");

        let profile = ApplicantProfile::from(questionnaire);
        assert_eq!(profile.household_size, HouseholdSize::FivePlus);
        assert!(!profile.is_veteran);
        assert!(!profile.is_disabled);
    }

    #[test]
    fn profile_requires_every_field() {
        let result = serde_json::from_str::<ApplicantProfile>(
            r#"{"age":41,"household_size":"2","annual_income":18000.0,"has_children":true}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn scored_benefit_serializes_flat() {
        let program = BenefitProgram {
            id: ProgramId::new("calfresh"),
            name: "CalFresh".to_string(),
            description: "Food".to_string(),
            estimated_amount: "$200".to_string(),
            requirements: Vec::new(),
            application_url: "https://example.org".to_string(),
            documents_needed: Vec::new(),
        };

        let value = serde_json::to_value(ScoredBenefit::new(&program, 85.0)).expect("serializes");
        assert_eq!(value["id"], "calfresh");
        assert_eq!(value["confidence_score"], 85.0);
    }
}
