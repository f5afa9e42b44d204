mod coefficients;
mod domain;
mod engine;
mod error;
mod formulas;
mod server;
mod units;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::domain::{Division, Equipment, MeetCategory, Sex, TargetSystem};
use crate::engine::{
    Field, calculate_all_scores, calculate_target_weight, format_score, format_weight,
    parse_positive,
};
use crate::server::AppState;
use crate::units::MassUnit;

/// Powerlifting score calculator.
#[derive(Parser, Debug)]
#[command(name = "powerscore")]
#[command(about = "IPF GL, DOTS and Wilks scores, and the lifts needed to reach them")]
#[command(version)]
struct Args {
    /// Unit for entered and printed weights (kg or lbs).
    /// Can also be set via POWERSCORE_UNIT environment variable.
    #[arg(long, global = true, env = "POWERSCORE_UNIT", default_value = "kg")]
    unit: MassUnit,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute all five scores for a lift.
    Score {
        #[arg(long, allow_hyphen_values = true)]
        bodyweight: String,

        /// Total, or bench press for bench-only meets.
        #[arg(long, allow_hyphen_values = true)]
        lifted: String,

        #[command(flatten)]
        lifter: LifterArgs,
    },

    /// Compute the weight needed to reach a target score.
    Target {
        #[arg(long, allow_hyphen_values = true)]
        bodyweight: String,

        #[arg(long, allow_hyphen_values = true)]
        score: String,

        /// dots, wilks2 or ipfgl.
        #[arg(long, default_value = "dots")]
        system: TargetSystem,

        #[command(flatten)]
        lifter: LifterArgs,
    },

    /// Run the JSON API.
    Serve {
        /// Port number for the web server.
        /// Can also be set via POWERSCORE_PORT environment variable.
        #[arg(long, env = "POWERSCORE_PORT", default_value = "8080")]
        port: u16,
    },
}

#[derive(clap::Args, Debug)]
struct LifterArgs {
    #[arg(long, default_value = "male")]
    sex: Sex,

    /// classic or equipped.
    #[arg(long, default_value = "classic")]
    equipment: Equipment,

    /// full or bench.
    #[arg(long, default_value = "full")]
    category: MeetCategory,
}

impl LifterArgs {
    fn division(&self) -> Division {
        Division::new(self.equipment, self.category)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Score {
            bodyweight,
            lifted,
            lifter,
        } => print_scores(&bodyweight, &lifted, &lifter, args.unit),
        Command::Target {
            bodyweight,
            score,
            system,
            lifter,
        } => print_target(&bodyweight, &score, system, &lifter, args.unit),
        Command::Serve { port } => {
            let state = Arc::new(AppState {
                default_unit: args.unit,
            });
            server::run_server(state, port)
                .await
                .with_context(|| format!("Failed to serve on port {}", port))
        }
    }
}

fn print_scores(bodyweight: &str, lifted: &str, lifter: &LifterArgs, unit: MassUnit) -> Result<()> {
    let bodyweight = parse_positive(bodyweight, Field::Bodyweight)?;
    let lifted = parse_positive(lifted, Field::WeightLifted)?;
    let division = lifter.division();

    let scores = calculate_all_scores(bodyweight, lifted, lifter.sex, division, unit);

    println!(
        "{} {} {}, {} at {}",
        lifter.sex,
        lifter.equipment,
        lifter.category,
        format_weight(lifted, unit),
        format_weight(bodyweight, unit)
    );
    println!();
    for (system, score) in scores.entries() {
        println!("{:12} {:>8}", system.display_name(), format_score(score));
    }

    Ok(())
}

fn print_target(
    bodyweight: &str,
    score: &str,
    system: TargetSystem,
    lifter: &LifterArgs,
    unit: MassUnit,
) -> Result<()> {
    let bodyweight = parse_positive(bodyweight, Field::Bodyweight)?;
    let target = parse_positive(score, Field::TargetScore)?;

    let weight =
        calculate_target_weight(bodyweight, target, system, lifter.sex, lifter.division(), unit);

    println!(
        "{} {} at {}: {}",
        system,
        format_score(target),
        format_weight(bodyweight, unit),
        format_weight(weight, unit)
    );

    Ok(())
}
