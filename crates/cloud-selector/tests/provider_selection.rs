use cloud_selector::scoring::{
    AnalysisError, Candidate, Catalog, CatalogImporter, Criterion, ScoringEngine, WeightSet,
};
use serde_json::json;

fn builtin_engine() -> ScoringEngine {
    ScoringEngine::new(Catalog::builtin())
}

#[test]
fn price_and_reliability_favour_the_cheapest_provider() {
    let outcome = builtin_engine()
        .rank_all(&json!({ "price": 50, "reliability": 50 }))
        .expect("ranking succeeds");

    assert_eq!(outcome.best_provider, "Linode");
    assert!((outcome.score - 77.45).abs() < 1e-9);

    let aws = outcome
        .all_scores
        .iter()
        .find(|entry| entry.provider == "AWS")
        .expect("aws ranked");
    assert!((aws.value - 62.495).abs() < 1e-9);

    assert_eq!(
        outcome.reasoning,
        "Price consideration: Linode offers pricing at 45/100 | \
Reliability: Linode guarantees 99.9% uptime | \
Cost-effective with good performance"
    );
}

#[test]
fn single_criterion_scores_equal_transformed_metric() {
    let engine = builtin_engine();
    for criterion in Criterion::ordered() {
        for weight in [0.5, 3.0, 1000.0] {
            let weights: WeightSet = [(criterion, weight)].into_iter().collect();
            let outcome = engine.rank(&weights).expect("ranking succeeds");
            for entry in &outcome.all_scores {
                let candidate = engine.catalog().get(&entry.provider).expect("known id");
                let expected = criterion.transform(candidate.metric(criterion).expect("metric"));
                assert!(
                    (entry.value - expected).abs() < 1e-9,
                    "{criterion} for {}",
                    entry.provider
                );
            }
        }
    }
}

#[test]
fn scaling_all_weights_leaves_ranking_unchanged() {
    let engine = builtin_engine();
    let weights: WeightSet = [
        (Criterion::Security, 4.0),
        (Criterion::GlobalReach, 2.0),
        (Criterion::Sustainability, 1.0),
    ]
    .into_iter()
    .collect();

    let base = engine.rank(&weights).expect("ranking succeeds");
    let scaled = engine.rank(&weights.scaled(0.001)).expect("ranking succeeds");

    assert_eq!(base.best_provider, scaled.best_provider);
    for (left, right) in base.all_scores.iter().zip(&scaled.all_scores) {
        assert_eq!(left.provider, right.provider);
        assert!((left.value - right.value).abs() < 1e-9);
    }
}

#[test]
fn unrecognized_and_malformed_weights_are_ignored() {
    let outcome = builtin_engine()
        .rank_all(&json!({
            "speed": "2",
            "latency": 100,
            "price": "cheap",
            "support": null,
        }))
        .expect("ranking succeeds");

    assert_eq!(outcome.best_provider, "AWS");
    assert_eq!(outcome.score, 95.0);
    assert_eq!(
        outcome.reasoning,
        "Performance: Amazon Web Services delivers speed 95/100 | Market leader with comprehensive services"
    );
}

#[test]
fn validation_failures_carry_messages() {
    let engine = builtin_engine();

    let invalid = engine.rank_all(&json!(null)).expect_err("null rejected");
    assert_eq!(invalid, AnalysisError::InvalidInput);
    assert_eq!(invalid.to_string(), "Invalid criteria provided");

    let empty = engine
        .rank_all(&json!({ "price": 0, "speed": -10 }))
        .expect_err("no criteria");
    assert_eq!(empty, AnalysisError::NoCriteriaSelected);
    assert_eq!(empty.to_string(), "Please select at least one criteria");
}

#[test]
fn partial_catalog_entries_score_missing_metrics_as_neutral() {
    let catalog = Catalog::new(vec![
        Candidate::new("sparse", "Sparse Cloud", "Publishes little data"),
        Candidate::new("weak", "Weak Cloud", "Struggles on support")
            .with_metric(Criterion::Support, 40.0),
    ])
    .expect("valid catalog");

    let outcome = ScoringEngine::new(catalog)
        .rank_all(&json!({ "support": 1 }))
        .expect("ranking succeeds");

    assert_eq!(outcome.best_provider, "sparse");
    assert_eq!(outcome.score, 50.0);
    assert_eq!(outcome.reasoning, "Publishes little data");
}

#[test]
fn bundled_csv_matches_builtin_catalog() {
    let data = include_bytes!("../data/providers.csv");

    let imported = CatalogImporter::from_reader(&data[..]).expect("bundled catalog imports");

    assert_eq!(imported, Catalog::builtin());
}
