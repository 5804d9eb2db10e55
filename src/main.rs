use std::path::Path;

use clap::Parser;

use meal_plan_scaler_rs::cli::{Cli, Command, PlanArgs};
use meal_plan_scaler_rs::error::{Result, ScaleError};
use meal_plan_scaler_rs::interface::{
    display_classifications, display_scaling_report, display_week_totals, write_audit_csv,
    write_result_json,
};
use meal_plan_scaler_rs::logging;
use meal_plan_scaler_rs::models::WeekPlan;
use meal_plan_scaler_rs::scaler::{
    aggregate_week, DominantSharePolicy, ReferenceSnapshot, ScalingConfig, ScalingEngine,
};
use meal_plan_scaler_rs::store::{
    load_config, load_plans, load_references, load_target, PlanProvider, ReferenceTable,
};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Scale {
            plan,
            target,
            config,
            tolerance,
            threshold,
            out,
            audit_csv,
        } => {
            let mut config = match config {
                Some(path) => load_config(path)?,
                None => ScalingConfig::default(),
            };
            if let Some(t) = tolerance {
                config.tolerance = t;
            }
            if let Some(t) = threshold {
                config.dominant_share_threshold = t;
            }
            config.validate()?;

            cmd_scale(
                &plan,
                &target,
                config,
                out.as_deref(),
                audit_csv.as_deref(),
            )
        }
        Command::Baseline { plan } => cmd_baseline(&plan),
        Command::Classify {
            references,
            threshold,
        } => cmd_classify(&references, threshold),
    }
}

fn load_plan_inputs(args: &PlanArgs) -> Result<(WeekPlan, ReferenceTable)> {
    let library = load_plans(&args.plans)?;
    let plan = library
        .fetch_plan(&args.plan_id)
        .ok_or_else(|| ScaleError::MissingPlan(args.plan_id.clone()))?;
    let references = load_references(&args.references)?;
    Ok((plan, references))
}

/// Rescale a plan and report what changed.
fn cmd_scale(
    args: &PlanArgs,
    target_path: &Path,
    config: ScalingConfig,
    out: Option<&Path>,
    audit_csv: Option<&Path>,
) -> Result<()> {
    let library = load_plans(&args.plans)?;
    let references = load_references(&args.references)?;
    let target = if target_path.exists() {
        Some(load_target(target_path)?)
    } else {
        None
    };

    println!(
        "Loaded {} plans and {} references",
        library.len(),
        references.len()
    );

    let engine = ScalingEngine::new(config);
    let result = engine.run(&args.plan_id, target.as_ref(), &library, &references)?;

    display_scaling_report(&result);

    if let Some(path) = out {
        write_result_json(&result, path)?;
        println!("Scaled plan written to {}", path.display());
    }
    if let Some(path) = audit_csv {
        write_audit_csv(&result.info.per_ingredient_audit, path)?;
        println!("Audit written to {}", path.display());
    }

    Ok(())
}

/// Print a plan's per-day totals and baseline.
fn cmd_baseline(args: &PlanArgs) -> Result<()> {
    let (plan, references) = load_plan_inputs(args)?;
    let snapshot = ReferenceSnapshot::resolve(&plan, &references);

    let mut warnings = Vec::new();
    let totals = aggregate_week(&plan, &snapshot, &mut warnings);
    display_week_totals(&totals);

    for w in &warnings {
        println!("  ! {}", w);
    }
    Ok(())
}

/// Print the classification of every reference.
fn cmd_classify(path: &Path, threshold: Option<f64>) -> Result<()> {
    let references = load_references(path)?;

    let mut config = ScalingConfig::default();
    if let Some(t) = threshold {
        config.dominant_share_threshold = t;
    }
    config.validate()?;

    let policy = DominantSharePolicy {
        threshold: config.dominant_share_threshold,
        tie_break: config.tie_break,
    };
    display_classifications(&references.all(), &policy);
    Ok(())
}
