mod cli;
mod infra;
mod render;
mod routes;
mod server;

use eoi_calculator::error::AppError;

pub use routes::build_router;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
