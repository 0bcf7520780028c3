//! NutriTrack - Daily Nutrition & Hydration Goal Tracking
//!
//! Headless front end: logs contributions for the day and prints the
//! resulting dashboard.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nutritrack::goals::{DailyStats, GoalEvent, MetricKind};
use nutritrack::recipes;
use nutritrack::storage::config::{self, AppConfig};

#[derive(Parser)]
#[command(name = "nutritrack")]
#[command(about = "Daily nutrition, hydration and activity goal tracking", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log contributions and show today's progress
    Dashboard {
        /// Water intake in ml (repeatable)
        #[arg(long)]
        water: Vec<f64>,
        /// Log the Nth configured quick-add water amount (repeatable)
        #[arg(long, value_name = "N")]
        quick: Vec<usize>,
        /// Calories consumed in kcal (repeatable)
        #[arg(long)]
        calories: Vec<f64>,
        /// Steps walked (repeatable)
        #[arg(long)]
        steps: Vec<f64>,
        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,
    },
    /// List built-in recipes
    Recipes {
        /// Search text
        query: Option<String>,
    },
    /// Write the current config (defaults if none) to disk
    InitConfig,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting NutriTrack v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(config::get_config_path);
    let app_config = config::load_config_from(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    match cli.command {
        Commands::Dashboard {
            water,
            quick,
            calories,
            steps,
            json,
        } => {
            let mut water = water;
            for button in quick {
                let amount = app_config.tracker.quick_add_amount(button).with_context(|| {
                    format!(
                        "no quick-add #{} (configured: {:?} ml)",
                        button, app_config.tracker.quick_add_ml
                    )
                })?;
                water.push(amount);
            }
            run_dashboard(&app_config, &water, &calories, &steps, json)?
        }
        Commands::Recipes { query } => {
            for recipe in recipes::search_recipes(query.as_deref().unwrap_or("")) {
                println!("[{}] {} - {}", recipe.id, recipe.title, recipe.description);
            }
        }
        Commands::InitConfig => {
            config::save_config_to(&app_config, &config_path)?;
            println!("Wrote config to {}", config_path.display());
        }
    }

    Ok(())
}

fn run_dashboard(
    app_config: &AppConfig,
    water: &[f64],
    calories: &[f64],
    steps: &[f64],
    json: bool,
) -> Result<()> {
    let mut stats = DailyStats::from_settings(&app_config.goals)?;

    let contributions = water
        .iter()
        .map(|amount| (MetricKind::Water, *amount))
        .chain(calories.iter().map(|amount| (MetricKind::Calories, *amount)))
        .chain(steps.iter().map(|amount| (MetricKind::Steps, *amount)));

    let mut completed = Vec::new();
    for (kind, amount) in contributions {
        let (next, event) = stats
            .contribute(kind, amount)
            .with_context(|| format!("cannot log {} {}", amount, kind.unit()))?;
        stats = next;
        if let Some(GoalEvent::GoalCompleted { kind, .. }) = event {
            completed.push(kind);
        }
    }

    let summary = stats.summary()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Today's Progress");
    for item in &summary {
        println!(
            "  {:<10} {:>7} / {:<7} {:<6} {:>3}% [{}]",
            item.kind.display_name(),
            item.consumed,
            item.goal,
            item.unit,
            item.percent,
            item.tier
        );
    }

    let recent = stats.water.recent_log(app_config.tracker.recent_log_len);
    if !recent.is_empty() {
        println!("Recent Activity");
        for entry in recent {
            println!("  {}ml at {}", entry.amount, entry.timestamp.format("%H:%M:%S"));
        }
    }

    for kind in completed {
        println!("{} goal reached!", kind);
    }

    let quick_add: Vec<String> = app_config
        .tracker
        .quick_add_ml
        .iter()
        .enumerate()
        .map(|(index, ml)| format!("#{} {}ml", index + 1, ml))
        .collect();
    if !quick_add.is_empty() {
        println!("Quick add (--quick N): {}", quick_add.join(", "));
    }

    Ok(())
}
