//! Blood-donation dashboard service: the HTTP API plus the `eligibility` and
//! `demo` commands that run against the same in-memory services.

mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use donor_desk::error::AppError;

/// Parse the command line and run the selected command to completion.
pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
