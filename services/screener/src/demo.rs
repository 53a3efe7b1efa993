use benefits_finder::error::AppError;
use benefits_finder::screening::{ApplicantProfile, HouseholdSize, ScreeningOutcome};
use chrono::{Local, NaiveDate};
use clap::Args;

use crate::infra::AppService;
use crate::report::{render_outcome, OutputFormat, ScreeningReport};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Output format for each sample household
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

/// Sample household used to walk stakeholders through the scoring rules.
pub(crate) struct DemoHousehold {
    pub(crate) label: &'static str,
    pub(crate) profile: ApplicantProfile,
}

fn adult(annual_income: f64) -> ApplicantProfile {
    ApplicantProfile {
        age: 34,
        household_size: HouseholdSize::One,
        annual_income,
        has_children: false,
        is_veteran: false,
        is_disabled: false,
    }
}

pub(crate) fn demo_households() -> Vec<DemoHousehold> {
    vec![
        DemoHousehold {
            label: "Single adult at half the poverty line",
            profile: adult(7_530.0),
        },
        DemoHousehold {
            label: "Single adult at exactly twice the poverty line",
            profile: adult(30_120.0),
        },
        DemoHousehold {
            label: "Single adult without children or income",
            profile: adult(0.0),
        },
        DemoHousehold {
            label: "Veteran parent with a disability at a quarter of the poverty line",
            profile: ApplicantProfile {
                has_children: true,
                is_veteran: true,
                is_disabled: true,
                ..adult(3_765.0)
            },
        },
        DemoHousehold {
            label: "High-income family of five",
            profile: ApplicantProfile {
                household_size: HouseholdSize::FivePlus,
                has_children: true,
                ..adult(250_000.0)
            },
        },
    ]
}

pub(crate) fn run_demo(service: &AppService, args: DemoArgs) -> Result<(), AppError> {
    let screened_on = Local::now().date_naive();

    for (index, household) in demo_households().into_iter().enumerate() {
        let outcome = service.screen(household.profile)?;
        match args.format {
            OutputFormat::Text => {
                if index > 0 {
                    println!();
                }
                println!("== {}", household.label);
                print!("{}", render_outcome(&outcome, screened_on));
            }
            OutputFormat::Json => {
                println!("{}", demo_json(household.label, &outcome, screened_on)?);
            }
        }
    }

    Ok(())
}

fn demo_json(
    label: &str,
    outcome: &ScreeningOutcome,
    screened_on: NaiveDate,
) -> Result<String, AppError> {
    let mut value = serde_json::to_value(ScreeningReport {
        screened_on,
        outcome,
    })?;
    if let Some(map) = value.as_object_mut() {
        map.insert("label".to_string(), serde_json::Value::from(label));
    }
    Ok(serde_json::to_string(&value)?)
}
