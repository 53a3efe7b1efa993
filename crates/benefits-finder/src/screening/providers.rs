use std::sync::{Arc, RwLock};

use super::catalog::BenefitCatalog;
use super::fpl::FplTable;

/// Source of the program catalog. Implementations hand out shared, immutable snapshots.
pub trait CatalogProvider: Send + Sync {
    fn catalog(&self) -> Result<Arc<BenefitCatalog>, ProviderError>;
}

/// Source of poverty guideline thresholds.
pub trait FplTableProvider: Send + Sync {
    fn snapshot(&self) -> Result<Arc<FplTable>, ProviderError>;
}

/// Error enumeration for provider failures.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Catalog fixed at construction.
#[derive(Debug, Clone)]
pub struct StaticCatalogProvider {
    catalog: Arc<BenefitCatalog>,
}

impl StaticCatalogProvider {
    pub fn new(catalog: BenefitCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

impl CatalogProvider for StaticCatalogProvider {
    fn catalog(&self) -> Result<Arc<BenefitCatalog>, ProviderError> {
        Ok(Arc::clone(&self.catalog))
    }
}

/// Table fixed at construction.
#[derive(Debug, Clone)]
pub struct StaticFplTable {
    table: Arc<FplTable>,
}

impl StaticFplTable {
    pub fn new(table: FplTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}

impl FplTableProvider for StaticFplTable {
    fn snapshot(&self) -> Result<Arc<FplTable>, ProviderError> {
        Ok(Arc::clone(&self.table))
    }
}

/// Table that can be swapped while evaluations are running. Readers holding an earlier
/// snapshot keep using it until they finish.
#[derive(Debug)]
pub struct RefreshableFplTable {
    current: RwLock<Arc<FplTable>>,
}

impl RefreshableFplTable {
    pub fn new(table: FplTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// Install `table`, returning the snapshot it replaced.
    pub fn replace(&self, table: FplTable) -> Result<Arc<FplTable>, ProviderError> {
        let mut guard = self
            .current
            .write()
            .map_err(|_| ProviderError::Unavailable("FPL table lock poisoned".to_string()))?;
        Ok(std::mem::replace(&mut *guard, Arc::new(table)))
    }
}

impl FplTableProvider for RefreshableFplTable {
    fn snapshot(&self) -> Result<Arc<FplTable>, ProviderError> {
        let guard = self
            .current
            .read()
            .map_err(|_| ProviderError::Unavailable("FPL table lock poisoned".to_string()))?;
        Ok(Arc::clone(&*guard))
    }
}
