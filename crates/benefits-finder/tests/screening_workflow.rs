//! Integration scenarios for household screening through the public facade.
//!
//! Scenarios exercise the catalog, poverty table, and scorer together the way a caller
//! wires them, without reaching into private modules.

use std::sync::Arc;

use benefits_finder::screening::{
    evaluate, ApplicantProfile, BenefitCatalog, EligibilityRule, EligibilityScorer, FplTable,
    HouseholdSize, Questionnaire, RatioBand, RuleRegistry, ScoringPolicy, ScreeningService,
    StaticCatalogProvider, StaticFplTable,
};

fn household(household_size: HouseholdSize, annual_income: f64) -> ApplicantProfile {
    ApplicantProfile {
        age: 45,
        household_size,
        annual_income,
        has_children: true,
        is_veteran: false,
        is_disabled: false,
    }
}

#[derive(Debug)]
struct SeniorNutritionRule {
    band: RatioBand,
}

impl EligibilityRule for SeniorNutritionRule {
    fn base_confidence(&self, income_ratio: f64, profile: &ApplicantProfile) -> f64 {
        if profile.age < 60 {
            return 0.0;
        }
        self.band.confidence(income_ratio)
    }
}

#[test]
fn family_of_four_below_poverty_qualifies_for_every_program() {
    let results = evaluate(
        &household(HouseholdSize::Four, 15_600.0),
        &BenefitCatalog::california(),
    );

    let ids: Vec<&str> = results.iter().map(|benefit| benefit.id().as_str()).collect();
    assert_eq!(ids, vec!["calfresh", "liheap", "calworks"]);
    assert_eq!(results[0].confidence_score, 85.0);
    assert_eq!(results[1].confidence_score, 75.0);
    assert_eq!(results[2].confidence_score, 65.0);
}

#[test]
fn results_copy_program_details() {
    let catalog = BenefitCatalog::california();

    let results = evaluate(&household(HouseholdSize::Two, 0.0), &catalog);

    let food = &results[0];
    let listed = catalog.get(food.id()).expect("program listed");
    assert_eq!(&food.program, listed);
    assert_eq!(food.program.application_url, "https://www.getcalfresh.org/");
}

#[test]
fn custom_rules_extend_the_engine() {
    let mut programs = BenefitCatalog::california().programs().to_vec();
    let mut senior = programs[0].clone();
    senior.id = "senior-nutrition".into();
    senior.name = "Senior Nutrition".to_string();
    programs.push(senior);
    let catalog = BenefitCatalog::new(programs).expect("unique program ids");

    let rules = RuleRegistry::standard().with_rule(
        "senior-nutrition",
        SeniorNutritionRule {
            band: RatioBand::new(3.0, 80.0, 10.0, 80.0),
        },
    );
    let scorer = EligibilityScorer::new(rules, ScoringPolicy::default());
    let table = FplTable::federal_2024();

    let mut retiree = household(HouseholdSize::One, 37_650.0);
    retiree.has_children = false;
    retiree.age = 71;
    let results = scorer.evaluate(&retiree, &catalog, &table);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id().as_str(), "senior-nutrition");
    assert_eq!(results[0].confidence_score, 55.0);

    retiree.age = 59;
    assert!(scorer.evaluate(&retiree, &catalog, &table).is_empty());
}

#[test]
fn service_serializes_outcome_for_callers() {
    let service = ScreeningService::new(
        Arc::new(StaticCatalogProvider::new(BenefitCatalog::california())),
        Arc::new(StaticFplTable::new(FplTable::federal_2024())),
        EligibilityScorer::standard(),
    );
    let questionnaire: Questionnaire = serde_json::from_str(
        r#"{"age":67,"zip_code":"95814","annual_income":12000,"household_size":"2","has_children":false,"is_veteran":true}"#,
    )
    .expect("questionnaire decodes");

    let outcome = service
        .screen_questionnaire(questionnaire)
        .expect("screening succeeds");
    let body = serde_json::to_value(&outcome).expect("outcome serializes");

    let benefits = body["eligible_benefits"]
        .as_array()
        .expect("benefits listed");
    assert_eq!(benefits.len(), 2);
    assert_eq!(benefits[0]["id"], "calfresh");
    assert_eq!(benefits[0]["confidence_score"], 87.4);
    assert_eq!(body["profile"]["household_size"], "2");
    assert_eq!(body["profile"]["is_veteran"], true);
}
