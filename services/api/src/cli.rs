use crate::report::{run_analysis, run_catalog_listing, AnalyzeArgs, CatalogArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use cloud_selector::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Cloud Provider Selector",
    about = "Rank cloud providers against weighted criteria from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank the catalog against weights given on the command line
    Analyze(AnalyzeArgs),
    /// List the providers in the active catalog
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured provider catalog CSV
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analysis(args),
        Command::Catalog(args) => run_catalog_listing(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud_selector::scoring::Criterion;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["cloud-selector-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_repeated_weights() {
        let cli = Cli::try_parse_from([
            "cloud-selector-api",
            "analyze",
            "--weight",
            "price=50",
            "--weight",
            "global_reach=2.5",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Analyze(args)) => {
                assert_eq!(
                    args.weights,
                    vec![(Criterion::Price, 50.0), (Criterion::GlobalReach, 2.5)]
                );
                assert!(args.json);
            }
            other => panic!("expected analyze command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_criteria() {
        let result = Cli::try_parse_from(["cloud-selector-api", "analyze", "--weight", "latency=5"]);
        assert!(result.is_err());
    }
}
