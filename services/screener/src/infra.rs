use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use benefits_finder::config::ScreeningConfig;
use benefits_finder::error::AppError;
use benefits_finder::screening::{
    BenefitCatalog, EligibilityScorer, FplTable, Questionnaire, RuleRegistry, ScreeningService,
    StaticCatalogProvider, StaticFplTable,
};
use tracing::{info, warn};

pub(crate) type AppService = ScreeningService<StaticCatalogProvider, StaticFplTable>;

/// Wire the configured catalog, poverty table, and scoring policy into a service.
pub(crate) fn build_service(config: &ScreeningConfig) -> Result<AppService, AppError> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "loading program catalog");
            BenefitCatalog::from_path(path)?
        }
        None => BenefitCatalog::california(),
    };

    let table = match &config.fpl_table_path {
        Some(path) => {
            info!(path = %path.display(), "loading poverty guideline table");
            FplTable::from_path(path)?
        }
        None => FplTable::federal_2024(),
    };

    let rules = RuleRegistry::standard();
    for program in &catalog {
        if !rules.contains(&program.id) {
            warn!(program_id = %program.id, "catalog program has no eligibility rule and will never be reported");
        }
    }

    let scorer = EligibilityScorer::new(rules, config.policy.clone());
    Ok(ScreeningService::new(
        Arc::new(StaticCatalogProvider::new(catalog)),
        Arc::new(StaticFplTable::new(table)),
        scorer,
    ))
}

pub(crate) fn read_questionnaire(path: &Path) -> Result<Questionnaire, AppError> {
    let file = std::fs::File::open(path)?;
    decode_questionnaire(std::io::BufReader::new(file))
}

/// Decode a questionnaire and hold it to the same income rules as `--income`.
pub(crate) fn decode_questionnaire<R: Read>(reader: R) -> Result<Questionnaire, AppError> {
    let questionnaire: Questionnaire = serde_json::from_reader(reader)?;
    if !questionnaire.annual_income.is_finite() || questionnaire.annual_income < 0.0 {
        return Err(AppError::InvalidInput(format!(
            "annual income must be a non-negative amount, got {}",
            questionnaire.annual_income
        )));
    }
    Ok(questionnaire)
}

pub(crate) fn parse_income(raw: &str) -> Result<f64, String> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|ch| *ch != ',' && *ch != '$')
        .collect();
    let value = cleaned
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{raw}' as an annual income ({err})"))?;

    if !value.is_finite() || value < 0.0 {
        return Err(format!("annual income must be a non-negative amount, got '{raw}'"));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use benefits_finder::screening::ScoringPolicy;

    #[test]
    fn parse_income_accepts_currency_formatting() {
        assert_eq!(parse_income("$30,120"), Ok(30_120.0));
        assert_eq!(parse_income(" 7530.50 "), Ok(7_530.5));
    }

    #[test]
    fn parse_income_rejects_negative_and_garbage() {
        assert!(parse_income("-1").is_err());
        assert!(parse_income("plenty").is_err());
        assert!(parse_income("NaN").is_err());
    }

    #[test]
    fn questionnaire_with_negative_income_is_rejected() {
        let body = r#"{"age":30,"zip_code":"90012","annual_income":-5000,"household_size":"1","has_children":false}"#;

        let error = decode_questionnaire(body.as_bytes()).expect_err("negative income rejected");

        assert!(matches!(error, AppError::InvalidInput(_)));
    }

    #[test]
    fn questionnaire_file_is_validated_like_flags() {
        let path = std::env::temp_dir().join(format!(
            "screener-questionnaire-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"age":30,"zip_code":"90012","annual_income":-1,"household_size":"2","has_children":true}"#,
        )
        .expect("fixture written");

        let result = read_questionnaire(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn questionnaire_with_valid_income_decodes() {
        let body = r#"{"age":30,"zip_code":"90012","annual_income":0,"household_size":"1","has_children":false}"#;

        let questionnaire = decode_questionnaire(body.as_bytes()).expect("questionnaire decodes");

        assert_eq!(questionnaire.annual_income, 0.0);
    }

    #[test]
    fn build_service_defaults_to_builtin_data() {
        let config = ScreeningConfig {
            fpl_table_path: None,
            catalog_path: None,
            policy: ScoringPolicy::default(),
        };

        let service = build_service(&config).expect("service builds");

        let catalog = service.catalog().expect("catalog available");
        assert_eq!(catalog.len(), 3);
        assert_eq!(service.scorer().policy(), &ScoringPolicy::default());
    }

    #[test]
    fn build_service_reports_missing_files() {
        let config = ScreeningConfig {
            fpl_table_path: Some("does/not/exist.csv".into()),
            catalog_path: None,
            policy: ScoringPolicy::default(),
        };

        let error = build_service(&config).err().expect("missing table rejected");

        assert!(matches!(error, AppError::Fpl(_)));
    }
}
