//! Foal Development - command-line entry point
//!
//! Reads a JSON foal snapshot and prints either a development report
//! (milestones and enrichment eligibility) or a milestone evaluation.

use clap::{Parser, Subcommand};
use foal_development::core::config::{self, DevelopmentConfig};
use foal_development::core::error::{FoalError, Result};
use foal_development::core::types::Timestamp;
use foal_development::enrichment::{assess_catalog, cooldown_display};
use foal_development::evaluation::{evaluate_milestone, EvaluationSummary};
use foal_development::foal::FoalSnapshot;
use foal_development::milestones::{
    self, advance_milestones, current_milestone, development_progress, MilestoneType,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "foal-dev")]
#[command(about = "Inspect foal milestone progress, enrichment eligibility and evaluations")]
struct Cli {
    /// TOML file overriding evaluation tuning
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Milestone timeline and enrichment eligibility for a foal
    Report {
        /// JSON foal snapshot
        #[arg(long)]
        snapshot: PathBuf,

        /// Reference time (RFC 3339 or epoch milliseconds); defaults to now
        #[arg(long)]
        now: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Evaluate one milestone from the foal's care history
    Evaluate {
        #[arg(long)]
        snapshot: PathBuf,

        /// Milestone key, e.g. curiosity_play
        #[arg(long)]
        milestone: String,

        /// Seed for the trait draw when the score does not confirm a trait
        #[arg(long, default_value_t = 0)]
        seed: u64,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("foal_development=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Some(path) = &cli.config {
        let loaded = DevelopmentConfig::load(path)?;
        tracing::info!("Loaded evaluation config from {}", path.display());
        if config::set_config(loaded).is_err() {
            tracing::warn!("Evaluation config already set, ignoring {}", path.display());
        }
    }

    match cli.command {
        Command::Report { snapshot, now, json } => {
            let snapshot = FoalSnapshot::load(&snapshot)?;
            let now = match now {
                Some(raw) => parse_now(&raw)?,
                None => Timestamp::now(),
            };
            report(&snapshot, now, json)
        }
        Command::Evaluate {
            snapshot,
            milestone,
            seed,
            json,
        } => {
            let snapshot = FoalSnapshot::load(&snapshot)?;
            let milestone = MilestoneType::from_key(&milestone)
                .ok_or(FoalError::UnknownMilestone(milestone))?;
            evaluate(&snapshot, milestone, seed, json)
        }
    }
}

fn parse_now(raw: &str) -> Result<Timestamp> {
    match raw.parse::<i64>() {
        Ok(millis) => Timestamp::from_millis(millis),
        Err(_) => Timestamp::parse(raw),
    }
}

fn report(snapshot: &FoalSnapshot, now: Timestamp, json: bool) -> Result<()> {
    let foal = &snapshot.foal;
    let age = foal.age_days;
    let timeline = advance_milestones(&snapshot.milestones(), age);
    let assessed = assess_catalog(foal, &snapshot.activity_statuses);

    if json {
        let activities: Vec<serde_json::Value> = assessed
            .iter()
            .map(|(activity, eligibility)| {
                let cooldown = snapshot
                    .activity_statuses
                    .iter()
                    .find(|s| s.activity_id == activity.id)
                    .and_then(|s| cooldown_display(s, now));
                serde_json::json!({
                    "id": activity.id,
                    "eligibility": eligibility,
                    "cooldown": cooldown,
                })
            })
            .collect();
        let out = serde_json::json!({
            "foal": foal.name,
            "ageDays": age,
            "developmentProgress": development_progress(&timeline, age),
            "currentMilestone": current_milestone(&timeline, age).map(|m| m.milestone_type),
            "milestones": timeline,
            "activities": activities,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("=== {} (day {}) ===", foal.name, age);
    println!("Development: {}%", development_progress(&timeline, age));
    match current_milestone(&timeline, age) {
        Some(m) => println!("Current milestone: {}", m.milestone_type),
        None => println!("Current milestone: none"),
    }
    println!();
    println!("Milestones:");
    for m in &timeline {
        let countdown = match milestones::days_until(m, age) {
            0 => String::new(),
            days => format!(" (starts in {} days)", days),
        };
        println!(
            "  {:<26} days {:>2}-{:<2} {:<12} {:>3}%{}",
            m.milestone_type.display_name(),
            m.age_window.min,
            m.age_window.max,
            m.status.label(),
            milestones::progress(m, age),
            countdown
        );
    }
    println!();
    println!("Enrichment:");
    for (activity, eligibility) in &assessed {
        let detail = match eligibility.reason() {
            None => "ready".to_string(),
            Some(reason) => {
                let cooldown = snapshot
                    .activity_statuses
                    .iter()
                    .find(|s| s.activity_id == activity.id)
                    .and_then(|s| cooldown_display(s, now));
                match cooldown {
                    Some(left) => format!("{} ({} left)", reason, left),
                    None => reason,
                }
            }
        };
        println!(
            "  {:<20} [{}] {}",
            activity.name,
            activity.category.label(),
            detail
        );
    }
    Ok(())
}

fn evaluate(snapshot: &FoalSnapshot, milestone: MilestoneType, seed: u64, json: bool) -> Result<()> {
    let evaluation = evaluate_milestone(&snapshot.foal, milestone, config::config(), seed);
    let summary = EvaluationSummary::from_evaluation(&evaluation);

    if json {
        let out = serde_json::json!({
            "evaluation": evaluation,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let breakdown = evaluation.component_breakdown();
    println!("=== {} evaluation for {} ===", summary.milestone_name, snapshot.foal.name);
    println!(
        "Score: {:+} ({}, {})  [{}%]",
        summary.score,
        summary.category,
        summary.color.name(),
        summary.bar_percentage
    );
    println!(
        "  bond {:+}  consistency {:+}  care {:+}",
        breakdown.bond_modifier, breakdown.task_consistency, breakdown.care_quality
    );
    println!("Outcome: {}", summary.confirmation_reason);
    if !summary.traits.is_empty() {
        println!("Traits: {}", summary.traits.join(", "));
    }
    println!();
    println!("{}", summary.explanation);
    println!("{}", summary.guidance);
    Ok(())
}
