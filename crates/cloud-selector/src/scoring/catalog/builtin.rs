use super::Candidate;
use crate::scoring::criteria::Criterion;

struct ProviderRow {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    /// Values in `Criterion::ordered()` order.
    metrics: [f64; 11],
}

const PROVIDERS: [ProviderRow; 6] = [
    ProviderRow {
        id: "AWS",
        name: "Amazon Web Services",
        description: "Market leader with comprehensive services",
        metrics: [75.0, 92.0, 95.0, 99.99, 92.0, 98.0, 99.0, 90.0, 98.0, 80.0, 70.0],
    },
    ProviderRow {
        id: "Azure",
        name: "Microsoft Azure",
        description: "Strong enterprise integration and hybrid capabilities",
        metrics: [78.0, 88.0, 90.0, 99.95, 90.0, 95.0, 98.0, 88.0, 95.0, 78.0, 68.0],
    },
    ProviderRow {
        id: "GCP",
        name: "Google Cloud Platform",
        description: "Excellent data analytics and AI/ML capabilities",
        metrics: [72.0, 94.0, 93.0, 99.95, 91.0, 96.0, 97.0, 85.0, 94.0, 82.0, 75.0],
    },
    ProviderRow {
        id: "Oracle",
        name: "Oracle Cloud",
        description: "Enterprise-grade cloud with strong database and hybrid features",
        metrics: [60.0, 90.0, 92.0, 99.95, 94.0, 94.0, 85.0, 86.0, 88.0, 70.0, 60.0],
    },
    ProviderRow {
        id: "Linode",
        name: "Linode",
        description: "Cost-effective with good performance",
        metrics: [45.0, 83.0, 85.0, 99.9, 80.0, 70.0, 65.0, 82.0, 70.0, 85.0, 55.0],
    },
    ProviderRow {
        id: "IBM",
        name: "IBM Cloud",
        description: "Strong for enterprise and hybrid cloud solutions",
        metrics: [85.0, 86.0, 88.0, 99.9, 89.0, 90.0, 80.0, 87.0, 86.0, 68.0, 66.0],
    },
];

pub(super) fn providers() -> Vec<Candidate> {
    PROVIDERS
        .iter()
        .map(|row| {
            Criterion::ordered()
                .into_iter()
                .zip(row.metrics)
                .fold(
                    Candidate::new(row.id, row.name, row.description),
                    |candidate, (criterion, value)| candidate.with_metric(criterion, value),
                )
        })
        .collect()
}
