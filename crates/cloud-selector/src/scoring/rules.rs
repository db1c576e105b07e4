use super::catalog::Candidate;
use super::criteria::NEUTRAL_METRIC;
use super::weights::WeightSet;

/// Weighted average of the candidate's transformed metrics over the requested criteria.
///
/// Returns `0.0` for an empty weight set. Missing metrics score as the neutral value.
/// Weights are divided by the largest one before accumulating, so any finite
/// weights stay in range.
pub fn score(candidate: &Candidate, weights: &WeightSet) -> f64 {
    let max_weight = weights.iter().fold(0.0_f64, |max, (_, weight)| max.max(weight));
    if max_weight <= 0.0 {
        return 0.0;
    }

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for (criterion, weight) in weights.iter() {
        let weight = weight / max_weight;
        let raw = candidate.metric(criterion).unwrap_or(NEUTRAL_METRIC);
        weighted_sum += criterion.transform(raw) * weight;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::criteria::Criterion;

    fn candidate() -> Candidate {
        Candidate::new("AWS", "Amazon Web Services", "Market leader")
            .with_metric(Criterion::Price, 75.0)
            .with_metric(Criterion::Reliability, 99.99)
            .with_metric(Criterion::Efficiency, 92.0)
            .with_metric(Criterion::Support, 140.0)
    }

    fn weights(entries: &[(Criterion, f64)]) -> WeightSet {
        entries.iter().copied().collect()
    }

    #[test]
    fn empty_weight_set_scores_zero() {
        assert_eq!(score(&candidate(), &WeightSet::new()), 0.0);
    }

    #[test]
    fn averages_price_and_reliability() {
        let value = score(
            &candidate(),
            &weights(&[(Criterion::Price, 50.0), (Criterion::Reliability, 50.0)]),
        );
        assert!((value - 62.495).abs() < 1e-9, "got {value}");
    }

    #[test]
    fn single_criterion_score_ignores_weight_magnitude() {
        for weight in [0.01, 1.0, 250.0] {
            let value = score(&candidate(), &weights(&[(Criterion::Efficiency, weight)]));
            assert!((value - 92.0).abs() < 1e-9);
        }
    }

    #[test]
    fn missing_metric_uses_neutral_default() {
        let value = score(&candidate(), &weights(&[(Criterion::Sustainability, 3.0)]));
        assert_eq!(value, NEUTRAL_METRIC);
    }

    #[test]
    fn out_of_band_metrics_are_clamped() {
        let value = score(&candidate(), &weights(&[(Criterion::Support, 1.0)]));
        assert_eq!(value, 100.0);
    }

    #[test]
    fn extreme_weights_do_not_overflow() {
        let single = score(&candidate(), &weights(&[(Criterion::Price, 1e308)]));
        assert_eq!(single, 25.0);

        let pair = score(
            &candidate(),
            &weights(&[(Criterion::Price, 1e308), (Criterion::Efficiency, f64::MAX)]),
        );
        assert!(pair.is_finite());
        assert!((0.0..=100.0).contains(&pair), "got {pair}");
    }

    #[test]
    fn scaling_weights_preserves_score() {
        let base = weights(&[
            (Criterion::Price, 2.0),
            (Criterion::Efficiency, 5.0),
            (Criterion::Reliability, 1.0),
        ]);
        let original = score(&candidate(), &base);
        let scaled = score(&candidate(), &base.scaled(37.5));
        assert!((original - scaled).abs() < 1e-9);
    }
}
