/// Inclusion threshold, result cap, and household bonuses applied after rule scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringPolicy {
    /// Programs must score strictly above this value to be reported.
    pub minimum_confidence: f64,
    pub max_results: usize,
    pub veteran_bonus: f64,
    pub disability_bonus: f64,
    pub confidence_ceiling: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            minimum_confidence: 30.0,
            max_results: 10,
            veteran_bonus: 5.0,
            disability_bonus: 5.0,
            confidence_ceiling: 100.0,
        }
    }
}
