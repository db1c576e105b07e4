use super::{Candidate, Catalog, CatalogError};
use crate::scoring::criteria::Criterion;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Loads a provider catalog from CSV.
///
/// The header must carry `id`, `name` and `description`; any criterion key
/// may follow as a metric column. Empty metric cells leave the metric unset.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let layout = ColumnLayout::from_headers(csv_reader.headers()?)?;
        let mut candidates = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            candidates.push(layout.candidate(&record)?);
        }

        if candidates.is_empty() {
            return Err(CatalogError::Empty);
        }

        debug!(providers = candidates.len(), "provider catalog imported");
        Catalog::new(candidates)
    }
}

struct ColumnLayout {
    id: usize,
    name: usize,
    description: usize,
    metrics: Vec<(usize, Criterion)>,
}

impl ColumnLayout {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, CatalogError> {
        let position = |column: &'static str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or(CatalogError::MissingColumn(column))
        };

        let metrics = headers
            .iter()
            .enumerate()
            .filter_map(|(index, header)| Criterion::from_key(header).map(|c| (index, c)))
            .collect();

        Ok(Self {
            id: position("id")?,
            name: position("name")?,
            description: position("description")?,
            metrics,
        })
    }

    fn candidate(&self, record: &csv::StringRecord) -> Result<Candidate, CatalogError> {
        let field = |index: usize| record.get(index).unwrap_or_default();
        let id = field(self.id);
        let mut candidate = Candidate::new(id, field(self.name), field(self.description));

        for (index, criterion) in &self.metrics {
            let raw = field(*index);
            if raw.is_empty() {
                continue;
            }
            let value = raw
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| CatalogError::InvalidMetric {
                    id: id.to_string(),
                    criterion: criterion.key().to_string(),
                    value: raw.to_string(),
                })?;
            candidate = candidate.with_metric(*criterion, value);
        }

        Ok(candidate)
    }
}
