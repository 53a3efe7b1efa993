use crate::screening::domain::{ApplicantProfile, BenefitProgram, HouseholdSize, ProgramId};
use crate::screening::{BenefitCatalog, EligibilityRule, ScoredBenefit};

pub(super) fn profile(household_size: HouseholdSize, annual_income: f64) -> ApplicantProfile {
    ApplicantProfile {
        age: 34,
        household_size,
        annual_income,
        has_children: false,
        is_veteran: false,
        is_disabled: false,
    }
}

pub(super) fn single_adult(annual_income: f64) -> ApplicantProfile {
    profile(HouseholdSize::One, annual_income)
}

pub(super) fn program(id: &str) -> BenefitProgram {
    BenefitProgram {
        id: ProgramId::new(id),
        name: format!("Program {id}"),
        description: format!("Synthetic program {id}"),
        estimated_amount: "$100/month".to_string(),
        requirements: vec!["Resident".to_string()],
        application_url: format!("https://benefits.example.org/{id}"),
        documents_needed: vec!["Photo ID".to_string()],
    }
}

pub(super) fn catalog_of(ids: &[&str]) -> BenefitCatalog {
    BenefitCatalog::new(ids.iter().map(|id| program(id)).collect()).expect("unique ids")
}

pub(super) fn ids(benefits: &[ScoredBenefit]) -> Vec<&str> {
    benefits.iter().map(|benefit| benefit.id().as_str()).collect()
}

/// Rule that ignores the household and returns a fixed confidence.
#[derive(Debug, Clone, Copy)]
pub(super) struct FlatRule(pub f64);

impl EligibilityRule for FlatRule {
    fn base_confidence(&self, _income_ratio: f64, _profile: &ApplicantProfile) -> f64 {
        self.0
    }
}
