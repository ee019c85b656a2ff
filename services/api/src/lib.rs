mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use civic_draft::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
