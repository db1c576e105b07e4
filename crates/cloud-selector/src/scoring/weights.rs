use super::criteria::Criterion;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Strictly positive importance weights keyed by criterion.
///
/// Iteration follows the canonical criterion order. A criterion that is not
/// present was not requested and takes no part in scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightSet {
    weights: BTreeMap<Criterion, f64>,
}

impl WeightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a weight set from a raw JSON object.
    ///
    /// Unknown keys are ignored and values that do not classify as a
    /// positive number are discarded.
    pub fn from_raw(raw: &Map<String, Value>) -> Self {
        let mut set = Self::new();
        for criterion in Criterion::ordered() {
            if let Some(weight) = raw.get(criterion.key()).and_then(parse_weight) {
                set.weights.insert(criterion, weight);
            }
        }
        set
    }

    /// Inserts a weight, returning `false` when it is not a positive finite number.
    pub fn insert(&mut self, criterion: Criterion, weight: f64) -> bool {
        if !is_positive(weight) {
            return false;
        }
        self.weights.insert(criterion, weight);
        true
    }

    pub fn get(&self, criterion: Criterion) -> Option<f64> {
        self.weights.get(&criterion).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        self.weights.iter().map(|(criterion, weight)| (*criterion, *weight))
    }

    /// Multiplies every weight by `factor`; non-positive factors leave the set unchanged.
    ///
    /// Products that overflow to infinity are dropped like any other invalid weight.
    pub fn scaled(&self, factor: f64) -> Self {
        if !is_positive(factor) {
            return self.clone();
        }
        self.iter()
            .map(|(criterion, weight)| (criterion, weight * factor))
            .collect()
    }
}

impl FromIterator<(Criterion, f64)> for WeightSet {
    fn from_iter<I: IntoIterator<Item = (Criterion, f64)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (criterion, weight) in iter {
            set.insert(criterion, weight);
        }
        set
    }
}

/// Classifies one raw weight value.
///
/// Numbers and numeric strings count when strictly positive and finite;
/// `true` counts as 1. Everything else is discarded.
pub fn parse_weight(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        Value::Bool(true) => 1.0,
        _ => return None,
    };
    is_positive(number).then_some(number)
}

fn is_positive(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}
