use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use super::domain::{BenefitProgram, ProgramId};

/// Errors raised while assembling a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("program id '{0}' appears more than once in the catalog")]
    DuplicateProgramId(ProgramId),
    #[error("catalog entry at position {position} has an empty id")]
    EmptyProgramId { position: usize },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordered, read-only list of programs. Ids are unique.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BenefitCatalog {
    programs: Vec<BenefitProgram>,
}

impl BenefitCatalog {
    pub fn new(programs: Vec<BenefitProgram>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(programs.len());
        for (position, program) in programs.iter().enumerate() {
            if program.id.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyProgramId { position });
            }
            if !seen.insert(&program.id) {
                return Err(CatalogError::DuplicateProgramId(program.id.clone()));
            }
        }

        Ok(Self { programs })
    }

    /// Decode a JSON array of programs.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let programs: Vec<BenefitProgram> = serde_json::from_reader(reader)?;
        Self::new(programs)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    pub fn programs(&self) -> &[BenefitProgram] {
        &self.programs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BenefitProgram> {
        self.programs.iter()
    }

    pub fn get(&self, id: &ProgramId) -> Option<&BenefitProgram> {
        self.programs.iter().find(|program| &program.id == id)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// California programs served by the screening questionnaire.
    pub fn california() -> Self {
        Self {
            programs: vec![
                program(
                    "calfresh",
                    "CalFresh (Food Assistance)",
                    "Monthly food assistance for low-income individuals and families",
                    "$200-$600/month",
                    &[
                        "California resident",
                        "Income below 200% Federal Poverty Level",
                        "U.S. Citizen or eligible immigrant",
                    ],
                    "https://www.getcalfresh.org/",
                    &[
                        "Photo ID",
                        "Proof of income (pay stubs, tax returns)",
                        "Proof of address (utility bill, lease)",
                        "Social Security numbers for household",
                    ],
                ),
                program(
                    "liheap",
                    "LIHEAP (Energy Assistance)",
                    "Help with heating and cooling costs for eligible households",
                    "$300-$1,000/year",
                    &[
                        "California resident",
                        "Income at or below 60% of state median",
                        "Recent utility bill",
                    ],
                    "https://www.csd.ca.gov/energybills",
                    &[
                        "Photo ID",
                        "Recent utility bill",
                        "Proof of income",
                        "Social Security numbers",
                    ],
                ),
                program(
                    "calworks",
                    "CalWORKs (Cash Aid & Employment)",
                    "Cash assistance and employment services for families with children",
                    "$500-$1,000/month",
                    &[
                        "California resident",
                        "Have at least one child under 18",
                        "Income below program limits",
                        "Participate in work activities",
                    ],
                    "https://www.cdss.ca.gov/calworks",
                    &[
                        "Photo ID",
                        "Birth certificates for children",
                        "Proof of income",
                        "School enrollment records",
                    ],
                ),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a BenefitCatalog {
    type Item = &'a BenefitProgram;
    type IntoIter = std::slice::Iter<'a, BenefitProgram>;

    fn into_iter(self) -> Self::IntoIter {
        self.programs.iter()
    }
}

fn program(
    id: &str,
    name: &str,
    description: &str,
    estimated_amount: &str,
    requirements: &[&str],
    application_url: &str,
    documents_needed: &[&str],
) -> BenefitProgram {
    BenefitProgram {
        id: ProgramId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        estimated_amount: estimated_amount.to_string(),
        requirements: requirements.iter().map(|item| item.to_string()).collect(),
        application_url: application_url.to_string(),
        documents_needed: documents_needed.iter().map(|item| item.to_string()).collect(),
    }
}
