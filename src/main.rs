use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use planrs::config::AppConfig;
use planrs::export::{export_schedule_report, text, ExportFormat, ScheduleReport};
use planrs::import::{load_ai_result, ImportManager};
use planrs::logging::{init_logging, LogLevel};
use planrs::selector::{ScheduleInputs, ScheduleSelector};
use planrs::summary::ScheduleSummary;
use planrs::validation::PlanValidator;
use planrs::{AiAgentResult, Macros, Plan};

/// planrs - Daily Schedule Planner
///
/// A Rust-based tool for reconciling a daily health schedule from a
/// baseline routine, a selected plan, and an AI-generated schedule.
#[derive(Parser)]
#[command(name = "planrs")]
#[command(author = "planrs Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Daily Schedule Planner", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and display today's schedule
    Schedule {
        /// Plan file to merge into the baseline routine (JSON or CSV)
        #[arg(short, long)]
        plan: Option<PathBuf>,

        /// AI-generated schedule result file (JSON)
        #[arg(short, long)]
        ai_result: Option<PathBuf>,

        /// Show instructions and sub-activities for each entry
        #[arg(short, long)]
        details: bool,
    },

    /// Validate plan files without scheduling them
    Validate {
        /// Plan file or directory of plan files
        #[arg(short, long)]
        path: PathBuf,
    },

    /// Export the computed schedule to a file
    Export {
        /// Plan file to merge into the baseline routine
        #[arg(short, long)]
        plan: Option<PathBuf>,

        /// AI-generated schedule result file (JSON)
        #[arg(short, long)]
        ai_result: Option<PathBuf>,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Export format (json, csv, text)
        #[arg(short = 'f', long, default_value = "json")]
        format: String,
    },

    /// Show or initialize application configuration
    Config {
        /// Write a default configuration file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::load_or_default(),
    };

    if cli.verbose > 0 {
        config.logging.level = LogLevel::from_verbosity(cli.verbose);
    }
    init_logging(&config.logging)?;

    match cli.command {
        Commands::Schedule {
            plan,
            ai_result,
            details,
        } => run_schedule(&config, plan, ai_result, details),
        Commands::Validate { path } => run_validate(path),
        Commands::Export {
            plan,
            ai_result,
            output,
            format,
        } => run_export(&config, plan, ai_result, output, &format),
        Commands::Config { init } => run_config(&mut config, init),
    }
}

fn load_inputs(
    config: &AppConfig,
    plan_path: Option<PathBuf>,
    ai_path: Option<PathBuf>,
) -> Result<(Option<Plan>, Option<AiAgentResult>)> {
    let manager = ImportManager::new();

    let plan_path = plan_path.or_else(|| config.settings.default_plan.clone());
    let plan = plan_path
        .map(|path| manager.import_file(&path))
        .transpose()?;

    let ai_path = ai_path.or_else(|| config.settings.default_ai_result.clone());
    let ai_result = ai_path.map(|path| load_ai_result(&path)).transpose()?;

    Ok((plan, ai_result))
}

fn run_schedule(
    config: &AppConfig,
    plan_path: Option<PathBuf>,
    ai_path: Option<PathBuf>,
    details: bool,
) -> Result<()> {
    let (plan, ai_result) = load_inputs(config, plan_path, ai_path)?;

    let inputs = ScheduleInputs {
        plan: plan.as_ref(),
        ai_result: ai_result.as_ref(),
    };
    let (schedule, source) = ScheduleSelector::new().select(&inputs);

    match &plan {
        Some(plan) => println!("{}", format!("Following: {}", plan.title).green().bold()),
        None => println!("{}", "Your daily routine".green().bold()),
    }
    println!("{}", format!("Source: {}", source).dimmed());
    println!();

    println!("{}", text::render_schedule_table(&schedule));

    if details || config.display.show_details {
        for activity in &schedule {
            if activity.instructions.is_empty() && activity.sub_activities.is_empty() {
                continue;
            }

            println!();
            println!(
                "{} {} ({})",
                activity.time.to_string().cyan(),
                activity.title.bold(),
                activity.duration.dimmed()
            );
            for instruction in &activity.instructions {
                println!("  • {}", instruction);
            }
            for sub in &activity.sub_activities {
                println!("  {} {} ({})", sub.time, sub.activity, sub.duration.dimmed());
            }
        }
    }

    if config.display.show_summary {
        let summary = ScheduleSummary::from_activities(&schedule);
        println!();
        println!("{}", "Summary".bold());
        println!("  Activities: {}", summary.total_activities);
        println!("  Calories: {}", summary.total_calories);
        if summary.total_macros != Macros::default() {
            println!(
                "  Macros: {}P / {}C / {}F",
                summary.total_macros.protein,
                summary.total_macros.carbs,
                summary.total_macros.fats
            );
        }
    }

    Ok(())
}

fn run_validate(path: PathBuf) -> Result<()> {
    let manager = ImportManager::new();

    let plans = if path.is_dir() {
        manager.import_directory(&path)?
    } else {
        vec![manager.import_file(&path)?]
    };

    let mut any_invalid = false;
    for plan in &plans {
        let report = PlanValidator::validate_plan(plan);

        if report.is_valid() && report.warnings.is_empty() {
            println!("{} {}", "✓".green(), plan.title);
            continue;
        }

        if report.is_valid() {
            println!("{} {}", "!".yellow(), plan.title);
        } else {
            any_invalid = true;
            println!("{} {}", "✗".red(), plan.title);
        }
        for issue in &report.errors {
            println!("    {} {}", "error:".red(), issue);
        }
        for issue in &report.warnings {
            println!("    {} {}", "warning:".yellow(), issue);
        }
    }

    if any_invalid {
        anyhow::bail!("{} of {} plans failed validation",
            plans.iter()
                .filter(|p| !PlanValidator::validate_plan(p).is_valid())
                .count(),
            plans.len());
    }

    Ok(())
}

fn run_export(
    config: &AppConfig,
    plan_path: Option<PathBuf>,
    ai_path: Option<PathBuf>,
    output: PathBuf,
    format: &str,
) -> Result<()> {
    let export_format =
        ExportFormat::from_str(format).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let (plan, ai_result) = load_inputs(config, plan_path, ai_path)?;

    let inputs = ScheduleInputs {
        plan: plan.as_ref(),
        ai_result: ai_result.as_ref(),
    };
    let (schedule, source) = ScheduleSelector::new().select(&inputs);

    let report = ScheduleReport::new(plan.map(|p| p.title), source, schedule);
    export_schedule_report(&report, &export_format, &output)
        .with_context(|| format!("Failed to export schedule to {}", output.display()))?;

    println!(
        "{}",
        format!("✓ Exported schedule to {}", output.display()).green()
    );
    Ok(())
}

fn run_config(config: &mut AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::default_config_path();

    if init {
        config.save_default()?;
        println!(
            "{}",
            format!("✓ Wrote configuration to {}", path.display()).green()
        );
        return Ok(());
    }

    println!("Config file: {}", path.display());
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
