pub mod catalog;
pub mod criteria;
mod reasoning;
pub mod router;
mod rules;
pub mod weights;

pub use catalog::{Candidate, Catalog, CatalogError, CatalogImporter};
pub use criteria::{Criterion, UnknownCriterion, NEUTRAL_METRIC};
pub use reasoning::explain;
pub use router::analysis_router;
pub use rules::score;
pub use weights::{parse_weight, WeightSet};

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Stateless engine that ranks an injected catalog against caller weights.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Arc<Catalog>,
}

impl ScoringEngine {
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        Self {
            catalog: catalog.into(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validates raw caller criteria and ranks the catalog against them.
    pub fn rank_all(&self, criteria: &Value) -> Result<RankedOutcome, AnalysisError> {
        let raw = criteria.as_object().ok_or(AnalysisError::InvalidInput)?;
        let weights = WeightSet::from_raw(raw);
        debug!(
            requested = raw.len(),
            accepted = weights.len(),
            "criteria filtered"
        );
        self.rank(&weights)
    }

    /// Ranks the catalog against an already validated weight set.
    pub fn rank(&self, weights: &WeightSet) -> Result<RankedOutcome, AnalysisError> {
        if weights.is_empty() {
            return Err(AnalysisError::NoCriteriaSelected);
        }

        let scored: Vec<(&Candidate, f64)> = self
            .catalog
            .iter()
            .map(|candidate| (candidate, score(candidate, weights)))
            .collect();

        let mut best: Option<(&Candidate, f64)> = None;
        let mut best_score = -1.0;
        for (candidate, value) in &scored {
            if *value > best_score {
                best_score = *value;
                best = Some((*candidate, *value));
            }
        }
        let (winner, winner_score) = best.ok_or(AnalysisError::EmptyCatalog)?;

        let mut all_scores: Vec<RankingEntry> = scored
            .iter()
            .map(|(candidate, value)| RankingEntry::new(&candidate.id, *value))
            .collect();
        // stable: equal display scores keep catalog order
        all_scores.sort_by(|a, b| b.rounded().total_cmp(&a.rounded()));

        debug!(
            winner = %winner.id,
            score = winner_score,
            criteria = weights.len(),
            "catalog ranked"
        );

        Ok(RankedOutcome {
            best_provider: winner.id.clone(),
            provider_details: winner.clone(),
            score: winner_score,
            reasoning: explain(winner, weights),
            all_scores,
        })
    }

    /// Runs [`Self::rank_all`] and folds the result into the wire payload.
    pub fn analyze(&self, criteria: &Value) -> AnalysisResponse {
        self.rank_all(criteria).into()
    }
}

/// Winner, justification and full ranking for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOutcome {
    pub best_provider: String,
    pub provider_details: Candidate,
    pub score: f64,
    pub reasoning: String,
    pub all_scores: Vec<RankingEntry>,
}

/// One row of the ranking; the score is rendered with two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub provider: String,
    pub score: String,
    #[serde(skip)]
    pub value: f64,
}

impl RankingEntry {
    fn new(provider: &str, value: f64) -> Self {
        Self {
            provider: provider.to_string(),
            score: format!("{value:.2}"),
            value,
        }
    }

    fn rounded(&self) -> f64 {
        (self.value * 100.0).round() / 100.0
    }
}

/// Validation failures reported to callers instead of a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Invalid criteria provided")]
    InvalidInput,
    #[error("Please select at least one criteria")]
    NoCriteriaSelected,
    #[error("No providers available to analyze")]
    EmptyCatalog,
}

/// Wire payload: `success` plus either the outcome fields or `error`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: Option<RankedOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            outcome: None,
            error: Some(message.into()),
        }
    }
}

impl From<Result<RankedOutcome, AnalysisError>> for AnalysisResponse {
    fn from(result: Result<RankedOutcome, AnalysisError>) -> Self {
        match result {
            Ok(outcome) => Self {
                success: true,
                outcome: Some(outcome),
                error: None,
            },
            Err(err) => Self::failure(err.to_string()),
        }
    }
}
