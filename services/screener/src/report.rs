use std::fmt::Write;

use benefits_finder::screening::{
    ApplicantProfile, BenefitCatalog, RuleRegistry, ScreeningOutcome,
};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// JSON payload emitted by `screen --format json`.
#[derive(Debug, Serialize)]
pub(crate) struct ScreeningReport<'a> {
    pub(crate) screened_on: NaiveDate,
    #[serde(flatten)]
    pub(crate) outcome: &'a ScreeningOutcome,
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

pub(crate) fn household_line(profile: &ApplicantProfile) -> String {
    format!(
        "age {}, household size {}, annual income ${:.2}, children: {}, veteran: {}, disabled: {}",
        profile.age,
        profile.household_size,
        profile.annual_income,
        yes_no(profile.has_children),
        yes_no(profile.is_veteran),
        yes_no(profile.is_disabled),
    )
}

pub(crate) fn render_outcome(outcome: &ScreeningOutcome, screened_on: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Benefits screening ({screened_on})");
    let _ = writeln!(out, "Household: {}", household_line(&outcome.profile));

    if outcome.eligible_benefits.is_empty() {
        let _ = writeln!(out, "\nEligible programs: none");
        return out;
    }

    let _ = writeln!(out, "\nEligible programs");
    for benefit in &outcome.eligible_benefits {
        let program = &benefit.program;
        let _ = writeln!(
            out,
            "- {} [{}]: {:.1}% confidence, {}",
            program.name, program.id, benefit.confidence_score, program.estimated_amount
        );
        let _ = writeln!(out, "    apply: {}", program.application_url);
        if !program.documents_needed.is_empty() {
            let _ = writeln!(out, "    bring: {}", program.documents_needed.join(", "));
        }
    }

    out
}

pub(crate) fn render_catalog(catalog: &BenefitCatalog, rules: &RuleRegistry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Program catalog ({} programs)", catalog.len());
    for program in catalog {
        let rule = if rules.contains(&program.id) {
            "rule registered"
        } else {
            "no rule"
        };
        let _ = writeln!(out, "- {} [{}]: {}", program.name, program.id, rule);
        for requirement in &program.requirements {
            let _ = writeln!(out, "    requires: {requirement}");
        }
    }
    out
}
