//! Household benefits screening: program catalog, poverty guideline lookup, and the
//! rule-based eligibility scorer.
//!
//! Scoring is a pure function of the profile, the catalog, and the FPL table. Catalogs and
//! tables are shared read-only across evaluations; results are fresh owned values.

pub mod catalog;
pub mod domain;
pub mod evaluation;
pub mod fpl;
pub mod providers;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{BenefitCatalog, CatalogError};
pub use domain::{
    ApplicantProfile, BenefitProgram, HouseholdSize, ProgramId, Questionnaire, ScoredBenefit,
    ScreeningOutcome, UnknownHouseholdSize,
};
pub use evaluation::{
    CashAidRule, EligibilityRule, EligibilityScorer, EnergyAssistanceRule, IncomeAssistanceRule,
    RatioBand, RuleRegistry, ScoringPolicy,
};
pub use fpl::{FplTable, FplTableError};
pub use providers::{
    CatalogProvider, FplTableProvider, ProviderError, RefreshableFplTable, StaticCatalogProvider,
    StaticFplTable,
};
pub use service::{ScreeningService, ScreeningServiceError};

/// Score `profile` against `catalog` with the built-in rules and the 2024 FPL table.
pub fn evaluate(profile: &ApplicantProfile, catalog: &BenefitCatalog) -> Vec<ScoredBenefit> {
    EligibilityScorer::standard().evaluate(profile, catalog, &FplTable::federal_2024())
}
