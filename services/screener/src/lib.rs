mod cli;
mod demo;
mod infra;
mod report;

use benefits_finder::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
