mod cli;
mod infra;
mod report;
mod routes;
mod server;

use cloud_selector::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
