use super::catalog::Candidate;
use super::criteria::Criterion;
use super::weights::WeightSet;

const DELIMITER: &str = " | ";

type FragmentTemplate = fn(Criterion, &Candidate, f64) -> String;

/// Dedicated phrasing per criterion; anything else uses [`generic_fragment`].
const TEMPLATES: [(Criterion, FragmentTemplate); 4] = [
    (Criterion::Price, price_fragment),
    (Criterion::Efficiency, efficiency_fragment),
    (Criterion::Speed, speed_fragment),
    (Criterion::Reliability, reliability_fragment),
];

fn price_fragment(_: Criterion, candidate: &Candidate, value: f64) -> String {
    format!(
        "Price consideration: {} offers pricing at {value}/100",
        candidate.name
    )
}

fn efficiency_fragment(_: Criterion, candidate: &Candidate, value: f64) -> String {
    format!(
        "Efficiency: {} has an efficiency rating of {value}/100",
        candidate.name
    )
}

fn speed_fragment(_: Criterion, candidate: &Candidate, value: f64) -> String {
    format!("Performance: {} delivers speed {value}/100", candidate.name)
}

fn reliability_fragment(_: Criterion, candidate: &Candidate, value: f64) -> String {
    format!("Reliability: {} guarantees {value}% uptime", candidate.name)
}

fn generic_fragment(criterion: Criterion, candidate: &Candidate, value: f64) -> String {
    format!(
        "{}: {} scores {value}/100",
        criterion.label(),
        candidate.name
    )
}

fn template_for(criterion: Criterion) -> FragmentTemplate {
    TEMPLATES
        .iter()
        .find(|(key, _)| *key == criterion)
        .map(|(_, template)| *template)
        .unwrap_or(generic_fragment)
}

/// Explains the winner in terms of the criteria the caller weighted.
///
/// Criteria the winner carries no metric for are skipped; the description
/// always closes the text.
pub fn explain(winner: &Candidate, weights: &WeightSet) -> String {
    let mut fragments: Vec<String> = weights
        .iter()
        .filter_map(|(criterion, _)| {
            winner
                .metric(criterion)
                .map(|value| template_for(criterion)(criterion, winner, value))
        })
        .collect();
    fragments.push(winner.description.clone());
    fragments.join(DELIMITER)
}
