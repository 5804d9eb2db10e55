use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Rescales a weekly meal-plan template so its average macros land on a personal target.
#[derive(Parser, Debug)]
#[command(name = "meal_plan_scaler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where to find the plan template.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// JSON file mapping plan ids to week plans.
    #[arg(long)]
    pub plans: PathBuf,

    /// Plan id to use.
    #[arg(long)]
    pub plan_id: String,

    /// Ingredient references (JSON array, or CSV when the extension is .csv).
    #[arg(long)]
    pub references: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rescale a plan towards a target profile.
    Scale {
        #[command(flatten)]
        plan: PlanArgs,

        /// Target profile JSON ({"protein": .., "carbs": .., "fat": ..}).
        #[arg(long)]
        target: PathBuf,

        /// Scaling config JSON.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the tolerance band half-width (e.g. 0.05).
        #[arg(long)]
        tolerance: Option<f64>,

        /// Override the dominant-share threshold (e.g. 0.40).
        #[arg(long)]
        threshold: Option<f64>,

        /// Write the scaled plan and scaling info as JSON.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Write the per-ingredient audit as CSV.
        #[arg(long)]
        audit_csv: Option<PathBuf>,
    },

    /// Show per-day totals and the weekly baseline of a plan.
    Baseline {
        #[command(flatten)]
        plan: PlanArgs,
    },

    /// Show each reference's caloric shares and category.
    Classify {
        /// Ingredient references (JSON or CSV).
        #[arg(long)]
        references: PathBuf,

        /// Override the dominant-share threshold.
        #[arg(long)]
        threshold: Option<f64>,
    },
}
