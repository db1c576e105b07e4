use cloud_selector::scoring::{Catalog, CatalogError, CatalogImporter, Criterion};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the CSV catalog at `path`, or the built-in providers when none is given.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    let catalog = match path {
        Some(path) => {
            let catalog = CatalogImporter::from_path(path)?;
            info!(path = %path.display(), providers = catalog.len(), "provider catalog loaded");
            catalog
        }
        None => Catalog::builtin(),
    };
    Ok(catalog)
}

/// Parses a `criterion=weight` pair for the CLI.
pub(crate) fn parse_weight_arg(raw: &str) -> Result<(Criterion, f64), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected criterion=weight, got '{raw}'"))?;
    let criterion = key.parse::<Criterion>().map_err(|err| err.to_string())?;
    let weight = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse weight '{value}' ({err})"))?;
    Ok((criterion, weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_weight_arg_splits_pairs() {
        assert_eq!(
            parse_weight_arg("ease_of_use= 3"),
            Ok((Criterion::EaseOfUse, 3.0))
        );
        assert!(parse_weight_arg("price").is_err());
        assert!(parse_weight_arg("price=lots").is_err());
        assert!(parse_weight_arg("latency=4").is_err());
    }

    #[test]
    fn load_catalog_defaults_to_builtin() {
        let catalog = load_catalog(None).expect("builtin loads");
        assert_eq!(catalog, Catalog::builtin());
    }

    #[test]
    fn load_catalog_reports_missing_files() {
        let err = load_catalog(Some(Path::new("does/not/exist.csv"))).expect_err("missing file");
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
