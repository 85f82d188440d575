//! Damage Calculator - Development Tools

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use dmgcalc_core::prelude::*;
use dmgcalc_tools::panel::PlayerPanel;
use dmgcalc_tools::report::{monster_message, OutcomeReport};
use dmgcalc_tools::resolver::BasicDamageResolver;
use dmgcalc_tools::scenario::{load_rules, Scenario, ScenarioError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "dmgcalc-tools")]
#[command(about = "Development tools for the damage calculator")]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast a combat scenario
    Forecast {
        /// Path to the scenario file
        scenario: PathBuf,
        /// Rules file overriding the scenario's rules
        #[arg(long)]
        rules: Option<PathBuf>,
        /// Print the forecast as JSON
        #[arg(long)]
        json: bool,
        /// Turn phase to render the player panel in
        #[arg(long, value_enum, default_value_t = PhaseArg::Player)]
        phase: PhaseArg,
    },
    /// Validate scenario and rules files
    Validate {
        /// Path to data directory
        #[arg(default_value = "crates/dmgcalc_tools/scenarios")]
        path: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PhaseArg {
    Player,
    Enemy,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match cli.command {
        Commands::Forecast {
            scenario,
            rules,
            json,
            phase,
        } => {
            if let Err(e) = forecast(&scenario, rules.as_deref(), json, phase) {
                tracing::error!("Forecast failed: {e}");
                std::process::exit(1);
            }
        }
        Commands::Validate { path } => {
            tracing::info!("Validating data files in: {}", path.display());
            match dmgcalc_tools::validate::validate_data_directory(&path) {
                Ok(report) if report.passed() => {
                    tracing::info!("Validation passed ({} files)", report.checked);
                }
                Ok(report) => {
                    for (file, message) in &report.failures {
                        tracing::error!("{}: {message}", file.display());
                    }
                    tracing::error!(
                        "Validation failed: {} of {} files",
                        report.failures.len(),
                        report.checked
                    );
                    std::process::exit(1);
                }
                Err(e) => {
                    tracing::error!("Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn forecast(
    path: &Path,
    rules_path: Option<&Path>,
    json: bool,
    phase: PhaseArg,
) -> std::result::Result<(), ScenarioError> {
    let scenario = Scenario::load(path)?;
    let rules = match rules_path {
        Some(rules_path) => load_rules(rules_path)?,
        None => scenario.rules.clone().unwrap_or_default(),
    };
    tracing::info!("Forecasting scenario: {}", scenario.name);

    let forecaster = Forecaster::new(BasicDamageResolver).with_rules(rules);
    tracing::debug!(rules = ?forecaster.rules(), "Rules in use");
    let mut combat = scenario.combat;
    let forecast = forecaster.forecast(&mut combat, scenario.hovered_card.as_ref());

    if json {
        let text = serde_json::to_string_pretty(&forecast).map_err(std::io::Error::other)?;
        println!("{text}");
        return Ok(());
    }

    let mut panel = PlayerPanel::new();
    panel.on_signal(TurnSignal::Started);
    panel.render(|| OutcomeReport::new(&forecast.player).to_string());
    if phase == PhaseArg::Enemy {
        panel.on_signal(TurnSignal::Ended);
    }
    let player_message = panel.render(|| OutcomeReport::new(&forecast.player).to_string());

    println!("[player {}]", combat.player.id);
    println!("{player_message}");
    for monster in &forecast.monsters {
        let message = monster_message(monster);
        if !message.is_empty() {
            println!();
            println!("[monster {}]", monster.monster);
            println!("{message}");
        }
    }
    Ok(())
}
