mod builtin;
mod import;

pub use import::CatalogImporter;

use super::criteria::Criterion;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashSet};

/// A scorable provider with its raw metric values.
///
/// Serializes as the flat provider record returned in analysis payloads; the
/// id is the catalog key and is not repeated inside the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    #[serde(flatten, serialize_with = "serialize_metrics")]
    pub metrics: BTreeMap<Criterion, f64>,
    pub description: String,
}

impl Candidate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            metrics: BTreeMap::new(),
            description: description.into(),
        }
    }

    pub fn with_metric(mut self, criterion: Criterion, value: f64) -> Self {
        self.metrics.insert(criterion, value);
        self
    }

    pub fn metric(&self, criterion: Criterion) -> Option<f64> {
        self.metrics.get(&criterion).copied()
    }
}

fn serialize_metrics<S>(metrics: &BTreeMap<Criterion, f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(
        metrics
            .iter()
            .map(|(criterion, value)| (criterion, MetricValue(*value))),
    )
}

/// Whole metric values are written as integers (`75`, not `75.0`).
struct MetricValue(f64);

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
        let value = self.0;
        if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

/// Immutable, ordered collection of candidates.
///
/// Iteration order is insertion order and decides ties during ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    candidates: Vec<Candidate>,
}

impl Catalog {
    pub fn new(candidates: Vec<Candidate>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for candidate in &candidates {
            if !seen.insert(candidate.id.as_str()) {
                return Err(CatalogError::DuplicateId(candidate.id.clone()));
            }
            if let Some((criterion, value)) = candidate
                .metrics
                .iter()
                .find(|(_, value)| !value.is_finite())
            {
                return Err(CatalogError::InvalidMetric {
                    id: candidate.id.clone(),
                    criterion: criterion.key().to_string(),
                    value: value.to_string(),
                });
            }
        }

        Ok(Self { candidates })
    }

    /// The six reference providers shipped with the selector.
    pub fn builtin() -> Self {
        Self {
            candidates: builtin::providers(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| candidate.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read provider catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid provider catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("provider catalog is missing the '{0}' column")]
    MissingColumn(&'static str),
    #[error("provider '{0}' appears more than once in the catalog")]
    DuplicateId(String),
    #[error("provider '{id}' has a non-numeric {criterion} value '{value}'")]
    InvalidMetric {
        id: String,
        criterion: String,
        value: String,
    },
    #[error("provider catalog contains no providers")]
    Empty,
}
