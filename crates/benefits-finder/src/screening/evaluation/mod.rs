mod config;
mod policy;
mod rules;

pub use config::ScoringPolicy;
pub use rules::{
    CashAidRule, EligibilityRule, EnergyAssistanceRule, IncomeAssistanceRule, RatioBand,
    RuleRegistry,
};

use tracing::debug;

use super::catalog::BenefitCatalog;
use super::domain::{ApplicantProfile, ScoredBenefit};
use super::fpl::FplTable;

/// Stateless scorer mapping a profile onto the catalog's programs.
#[derive(Debug, Clone)]
pub struct EligibilityScorer {
    rules: RuleRegistry,
    policy: ScoringPolicy,
}

impl EligibilityScorer {
    pub fn new(rules: RuleRegistry, policy: ScoringPolicy) -> Self {
        Self { rules, policy }
    }

    pub fn standard() -> Self {
        Self::new(RuleRegistry::standard(), ScoringPolicy::default())
    }

    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Rank the programs `profile` may qualify for, highest confidence first.
    pub fn evaluate(
        &self,
        profile: &ApplicantProfile,
        catalog: &BenefitCatalog,
        fpl: &FplTable,
    ) -> Vec<ScoredBenefit> {
        let income_ratio = fpl.income_ratio(profile);
        let mut benefits = Vec::new();

        for program in catalog {
            let base_confidence = match self.rules.get(&program.id) {
                Some(rule) => rule.base_confidence(income_ratio, profile),
                None => {
                    debug!(program_id = %program.id, "no eligibility rule registered");
                    0.0
                }
            };

            let confidence =
                policy::apply_household_bonuses(base_confidence, profile, &self.policy);
            if policy::is_reportable(confidence, &self.policy) {
                benefits.push(ScoredBenefit::new(
                    program,
                    policy::round_to_tenth(confidence),
                ));
            }
        }

        policy::rank(&mut benefits, self.policy.max_results);

        debug!(
            income_ratio,
            programs = catalog.len(),
            eligible = benefits.len(),
            "eligibility evaluated"
        );

        benefits
    }
}

impl Default for EligibilityScorer {
    fn default() -> Self {
        Self::standard()
    }
}
