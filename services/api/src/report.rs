use crate::infra::{load_catalog, parse_weight_arg};
use clap::Args;
use cloud_selector::config::AppConfig;
use cloud_selector::error::AppError;
use cloud_selector::scoring::{
    AnalysisResponse, Catalog, Criterion, RankedOutcome, ScoringEngine, WeightSet,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Criterion weight as criterion=weight (repeatable, e.g. --weight price=50)
    #[arg(long = "weight", value_parser = parse_weight_arg)]
    pub(crate) weights: Vec<(Criterion, f64)>,
    /// Provider catalog CSV (defaults to APP_CATALOG_PATH or the built-in providers)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the JSON payload served by /api/analyze instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Provider catalog CSV (defaults to APP_CATALOG_PATH or the built-in providers)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_analysis(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        weights,
        catalog,
        json,
    } = args;

    let engine = ScoringEngine::new(resolve_catalog(catalog)?);
    let weights: WeightSet = weights.into_iter().collect();
    let result = engine.rank(&weights);

    if json {
        let payload = AnalysisResponse::from(result);
        let rendered = serde_json::to_string_pretty(&payload).map_err(std::io::Error::from)?;
        println!("{rendered}");
        return Ok(());
    }

    let outcome = result?;
    println!("{}", render_outcome(&outcome, &weights));
    Ok(())
}

pub(crate) fn run_catalog_listing(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = resolve_catalog(args.catalog)?;
    println!("{}", render_catalog(&catalog));
    Ok(())
}

fn resolve_catalog(path: Option<PathBuf>) -> Result<Catalog, AppError> {
    let path = match path {
        Some(path) => Some(path),
        None => AppConfig::load()?.catalog.path,
    };
    Ok(load_catalog(path.as_deref())?)
}

fn render_outcome(outcome: &RankedOutcome, weights: &WeightSet) -> String {
    let criteria: Vec<String> = weights
        .iter()
        .map(|(criterion, weight)| format!("{criterion}={weight}"))
        .collect();

    let mut lines = vec![
        "Cloud provider analysis".to_string(),
        format!("Criteria: {}", criteria.join(", ")),
        format!(
            "Recommended: {} ({}) with score {:.2}",
            outcome.provider_details.name, outcome.best_provider, outcome.score
        ),
        format!("Why: {}", outcome.reasoning),
        "Ranking:".to_string(),
    ];
    for (position, entry) in outcome.all_scores.iter().enumerate() {
        lines.push(format!(
            "  {}. {} - {}",
            position + 1,
            entry.provider,
            entry.score
        ));
    }
    lines.join("\n")
}

fn render_catalog(catalog: &Catalog) -> String {
    let mut lines = vec![format!("Provider catalog ({} providers)", catalog.len())];
    for candidate in catalog {
        lines.push(format!(
            "- {} | {} | {}",
            candidate.id, candidate.name, candidate.description
        ));
        let metrics: Vec<String> = candidate
            .metrics
            .iter()
            .map(|(criterion, value)| format!("{criterion}={value}"))
            .collect();
        if !metrics.is_empty() {
            lines.push(format!("  {}", metrics.join(" ")));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_summary_lists_ranking_in_order() {
        let engine = ScoringEngine::new(Catalog::builtin());
        let weights: WeightSet = [(Criterion::Efficiency, 1.0)].into_iter().collect();
        let outcome = engine.rank(&weights).expect("ranking succeeds");

        let rendered = render_outcome(&outcome, &weights);

        assert!(rendered.contains("Criteria: efficiency=1"));
        assert!(rendered.contains("Recommended: Google Cloud Platform (GCP) with score 94.00"));
        assert!(rendered.contains("  1. GCP - 94.00"));
        assert!(rendered.ends_with("  6. Linode - 83.00"));
    }

    #[test]
    fn catalog_listing_includes_every_provider() {
        let rendered = render_catalog(&Catalog::builtin());

        assert!(rendered.starts_with("Provider catalog (6 providers)"));
        assert!(rendered.contains("- IBM | IBM Cloud |"));
        assert!(rendered.contains("reliability=99.99"));
    }
}
