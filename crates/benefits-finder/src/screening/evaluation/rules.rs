use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::super::domain::{ApplicantProfile, ProgramId};

/// Base-confidence contract every program rule implements.
///
/// `income_ratio` is annual income over the household's poverty threshold and may be
/// positive infinity when the threshold is zero.
pub trait EligibilityRule: fmt::Debug + Send + Sync {
    fn base_confidence(&self, income_ratio: f64, profile: &ApplicantProfile) -> f64;
}

/// Linear confidence band gated by an exclusive income-ratio ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioBand {
    pub ceiling: f64,
    pub intercept: f64,
    pub slope: f64,
    pub cap: f64,
}

impl RatioBand {
    pub const fn new(ceiling: f64, intercept: f64, slope: f64, cap: f64) -> Self {
        Self {
            ceiling,
            intercept,
            slope,
            cap,
        }
    }

    /// `intercept - slope * ratio` bounded to `[0, cap]` while `ratio < ceiling`, else zero.
    pub fn confidence(&self, income_ratio: f64) -> f64 {
        if income_ratio < self.ceiling {
            (self.intercept - income_ratio * self.slope)
                .max(0.0)
                .min(self.cap)
        } else {
            0.0
        }
    }
}

/// Food assistance: households under 200% of the poverty level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomeAssistanceRule {
    band: RatioBand,
}

impl IncomeAssistanceRule {
    pub const fn new(band: RatioBand) -> Self {
        Self { band }
    }
}

impl Default for IncomeAssistanceRule {
    fn default() -> Self {
        Self::new(RatioBand::new(2.0, 100.0, 30.0, 95.0))
    }
}

impl EligibilityRule for IncomeAssistanceRule {
    fn base_confidence(&self, income_ratio: f64, _profile: &ApplicantProfile) -> f64 {
        self.band.confidence(income_ratio)
    }
}

/// Heating and cooling assistance: households under 150% of the poverty level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyAssistanceRule {
    band: RatioBand,
}

impl EnergyAssistanceRule {
    pub const fn new(band: RatioBand) -> Self {
        Self { band }
    }
}

impl Default for EnergyAssistanceRule {
    fn default() -> Self {
        Self::new(RatioBand::new(1.5, 95.0, 40.0, 90.0))
    }
}

impl EligibilityRule for EnergyAssistanceRule {
    fn base_confidence(&self, income_ratio: f64, _profile: &ApplicantProfile) -> f64 {
        self.band.confidence(income_ratio)
    }
}

/// Cash aid: families with children below the poverty level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashAidRule {
    band: RatioBand,
}

impl CashAidRule {
    pub const fn new(band: RatioBand) -> Self {
        Self { band }
    }
}

impl Default for CashAidRule {
    fn default() -> Self {
        Self::new(RatioBand::new(1.0, 90.0, 50.0, 85.0))
    }
}

impl EligibilityRule for CashAidRule {
    fn base_confidence(&self, income_ratio: f64, profile: &ApplicantProfile) -> f64 {
        if !profile.has_children {
            return 0.0;
        }
        self.band.confidence(income_ratio)
    }
}

/// Program id to rule lookup. Programs without an entry score zero.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<ProgramId, Arc<dyn EligibilityRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules for the built-in California catalog.
    pub fn standard() -> Self {
        Self::new()
            .with_rule("calfresh", IncomeAssistanceRule::default())
            .with_rule("liheap", EnergyAssistanceRule::default())
            .with_rule("calworks", CashAidRule::default())
    }

    /// Register `rule` for `program_id`, returning the rule it replaced.
    pub fn register<R>(
        &mut self,
        program_id: impl Into<ProgramId>,
        rule: R,
    ) -> Option<Arc<dyn EligibilityRule>>
    where
        R: EligibilityRule + 'static,
    {
        self.rules.insert(program_id.into(), Arc::new(rule))
    }

    pub fn with_rule<R>(mut self, program_id: impl Into<ProgramId>, rule: R) -> Self
    where
        R: EligibilityRule + 'static,
    {
        self.register(program_id, rule);
        self
    }

    pub fn get(&self, program_id: &ProgramId) -> Option<&dyn EligibilityRule> {
        self.rules.get(program_id).map(|rule| rule.as_ref())
    }

    pub fn contains(&self, program_id: &ProgramId) -> bool {
        self.rules.contains_key(program_id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
