use std::path::PathBuf;

use benefits_finder::config::AppConfig;
use benefits_finder::error::AppError;
use benefits_finder::screening::{ApplicantProfile, HouseholdSize};
use benefits_finder::telemetry;
use chrono::Local;
use clap::{Args, Parser, Subcommand};

use crate::demo::{run_demo, DemoArgs};
use crate::infra::{build_service, parse_income, read_questionnaire, AppService};
use crate::report::{render_catalog, render_outcome, OutputFormat, ScreeningReport};

#[derive(Parser, Debug)]
#[command(
    name = "Benefits Finder",
    about = "Screen households for public assistance programs from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one household against the program catalog
    Screen(ScreenArgs),
    /// List catalog programs and whether an eligibility rule is registered for each
    Catalog,
    /// Run sample households through the engine
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Questionnaire JSON file (replaces the household flags)
    #[arg(
        long,
        conflicts_with_all = ["age", "household_size", "income", "children", "veteran", "disabled"]
    )]
    pub(crate) questionnaire: Option<PathBuf>,
    /// Age of the applicant
    #[arg(long, required_unless_present = "questionnaire")]
    pub(crate) age: Option<u32>,
    /// Household size: 1, 2, 3, 4 or 5+
    #[arg(long, required_unless_present = "questionnaire")]
    pub(crate) household_size: Option<HouseholdSize>,
    /// Annual household income
    #[arg(long, value_parser = parse_income, required_unless_present = "questionnaire")]
    pub(crate) income: Option<f64>,
    /// The household includes children
    #[arg(long)]
    pub(crate) children: bool,
    /// The applicant is a veteran
    #[arg(long)]
    pub(crate) veteran: bool,
    /// The applicant has a disability
    #[arg(long)]
    pub(crate) disabled: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

impl ScreenArgs {
    fn profile(&self) -> Result<ApplicantProfile, AppError> {
        if let Some(path) = &self.questionnaire {
            return Ok(read_questionnaire(path)?.into());
        }

        match (self.age, self.household_size, self.income) {
            (Some(age), Some(household_size), Some(annual_income)) => Ok(ApplicantProfile {
                age,
                household_size,
                annual_income,
                has_children: self.children,
                is_veteran: self.veteran,
                is_disabled: self.disabled,
            }),
            _ => Err(AppError::InvalidInput(
                "--age, --household-size and --income are required without --questionnaire"
                    .to_string(),
            )),
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let service = build_service(&config.screening)?;

    match cli.command {
        Command::Screen(args) => run_screen(&service, args),
        Command::Catalog => run_catalog(&service),
        Command::Demo(args) => run_demo(&service, args),
    }
}

fn run_screen(service: &AppService, args: ScreenArgs) -> Result<(), AppError> {
    let profile = args.profile()?;
    let outcome = service.screen(profile)?;
    let screened_on = Local::now().date_naive();

    match args.format {
        OutputFormat::Text => print!("{}", render_outcome(&outcome, screened_on)),
        OutputFormat::Json => {
            let report = ScreeningReport {
                screened_on,
                outcome: &outcome,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn run_catalog(service: &AppService) -> Result<(), AppError> {
    let catalog = service.catalog()?;
    print!("{}", render_catalog(&catalog, service.scorer().rules()));
    Ok(())
}
