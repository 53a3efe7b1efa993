use std::sync::Arc;

use tracing::info;

use super::catalog::BenefitCatalog;
use super::domain::{ApplicantProfile, Questionnaire, ScreeningOutcome};
use super::evaluation::EligibilityScorer;
use super::providers::{CatalogProvider, FplTableProvider, ProviderError};

/// Service composing the catalog and FPL providers with the eligibility scorer.
pub struct ScreeningService<C, F> {
    catalogs: Arc<C>,
    fpl: Arc<F>,
    scorer: Arc<EligibilityScorer>,
}

impl<C, F> ScreeningService<C, F>
where
    C: CatalogProvider + 'static,
    F: FplTableProvider + 'static,
{
    pub fn new(catalogs: Arc<C>, fpl: Arc<F>, scorer: EligibilityScorer) -> Self {
        Self {
            catalogs,
            fpl,
            scorer: Arc::new(scorer),
        }
    }

    pub fn scorer(&self) -> &EligibilityScorer {
        &self.scorer
    }

    pub fn catalog(&self) -> Result<Arc<BenefitCatalog>, ScreeningServiceError> {
        Ok(self.catalogs.catalog()?)
    }

    /// Score a profile against one snapshot of the catalog and FPL table.
    pub fn screen(
        &self,
        profile: ApplicantProfile,
    ) -> Result<ScreeningOutcome, ScreeningServiceError> {
        let catalog = self.catalogs.catalog()?;
        let fpl = self.fpl.snapshot()?;

        let eligible_benefits = self.scorer.evaluate(&profile, &catalog, &fpl);
        info!(
            household_size = profile.household_size.label(),
            eligible = eligible_benefits.len(),
            "screening completed"
        );

        Ok(ScreeningOutcome {
            eligible_benefits,
            profile,
        })
    }

    pub fn screen_questionnaire(
        &self,
        questionnaire: Questionnaire,
    ) -> Result<ScreeningOutcome, ScreeningServiceError> {
        self.screen(questionnaire.into())
    }
}

impl<C, F> Clone for ScreeningService<C, F> {
    fn clone(&self) -> Self {
        Self {
            catalogs: Arc::clone(&self.catalogs),
            fpl: Arc::clone(&self.fpl),
            scorer: Arc::clone(&self.scorer),
        }
    }
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
