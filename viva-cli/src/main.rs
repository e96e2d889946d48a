//! # Viva CLI - Health Tip of the Day
//!
//! A terminal sidebar that rotates short health tips, plus one-shot
//! commands for scripts.
//!
//! ## Features
//! - Full-screen TUI with the rotating tip card in a collapsible sidebar
//! - Searchable tips library
//! - Falls back to a built-in tip when the tips API is unavailable
//!
//! ## Usage
//! ```bash
//! # Run the interactive TUI
//! viva
//!
//! # Use the built-in tips instead of the API
//! viva --offline
//!
//! # Print hydration tips as JSON
//! viva tips --category hydration --json
//!
//! # Run system diagnostics
//! viva doctor
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tabled::settings::{Modify, Style, Width, object::Columns};
use tabled::{Table, Tabled};
use tracing::info;

use viva_core::prelude::*;
use viva_providers::NetworkConfig;

#[cfg(feature = "http")]
use viva_providers::HttpTipSource;

mod config_loader;
mod tui;

use config_loader::CliConfig;
use tui::{App, handle_events, ui};

/// Viva Health tip of the day
#[derive(Parser, Debug)]
#[command(name = "viva")]
#[command(author = "Viva Health contributors")]
#[command(version)]
#[command(about = "Rotating health tips in your terminal", long_about = None)]
struct Args {
    /// Enable file logging to logs/ directory
    #[arg(long, default_value = "false")]
    log: bool,

    /// Use the built-in tips instead of the tips API
    #[arg(long, default_value = "false")]
    offline: bool,

    /// Tips API endpoint (overrides the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Seconds between automatic rotations
    #[arg(long)]
    rotation_secs: Option<u64>,

    /// Seed for tip selection, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the tips once and print them
    Tips {
        /// Only tips in this category
        #[arg(long)]
        category: Option<String>,

        /// Only tips containing this text
        #[arg(long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },
    /// Run diagnostics to check system health and connectivity
    Doctor,
    /// Write a sample config file to the config directory
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let file_config = CliConfig::load();

    // NOTE: In TUI mode, we only log to file (no console) to avoid corrupting the UI
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>;
    let is_tui_mode = args.command.is_none();
    let log_to_file = args.log || file_config.enable_logging.unwrap_or(false);

    if log_to_file {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        std::fs::create_dir_all("logs")?;

        let file_appender = tracing_appender::rolling::daily("logs", "viva.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        _file_guard = Some(guard);

        let env_filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("viva_core=debug".parse()?)
            .add_directive("viva_providers=debug".parse()?)
            .add_directive("viva=debug".parse()?);

        if is_tui_mode {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
        }

        info!("--- Viva Session Started [{}] ---", chrono::Utc::now());
    } else {
        _file_guard = None;
        // The TUI owns the terminal, so without --log nothing is logged there
        if !is_tui_mode {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive("viva_core=warn".parse()?)
                        .add_directive("viva_providers=warn".parse()?),
                )
                .init();
        }
    }

    // Flags override the config file, which overrides the environment defaults
    let mut rotator_config = file_config.rotator(RotatorConfig::from_env()?);
    if let Some(secs) = args.rotation_secs {
        rotator_config.rotation_interval = Duration::from_secs(secs);
    }
    if let Some(seed) = args.seed {
        rotator_config.seed = Some(seed);
    }
    rotator_config.validate()?;

    let mut network = file_config.network();
    if let Some(endpoint) = &args.endpoint {
        network.endpoint = endpoint.clone();
    }
    let offline = args.offline || file_config.offline.unwrap_or(false);

    match args.command {
        Some(Commands::Doctor) => run_doctor(&network).await,
        Some(Commands::InitConfig) => run_init_config(),
        Some(Commands::Tips {
            category,
            search,
            json,
        }) => {
            let (source, _) = build_source(offline, &network)?;
            let mut filter = TipFilter::new();
            if let Some(category) = category {
                filter = filter.with_category(category);
            }
            if let Some(search) = search {
                filter = filter.with_search(search);
            }
            run_tips(source, &filter, &rotator_config, json).await
        }
        None => {
            let (source, label) = build_source(offline, &network)?;
            run_tui(source, label, rotator_config).await
        }
    }
}

/// Tips bundled with the binary for offline use.
fn offline_tips() -> Vec<Tip> {
    vec![
        Tip::fallback(),
        Tip::new("Take a short walk after meals to help your digestion.").with_category("activity"),
        Tip::new("Stand up and stretch for a minute every half hour.").with_category("activity"),
        Tip::new("Fill half your plate with vegetables.").with_category("nutrition"),
        Tip::new("Keep a piece of fruit nearby for a snack.").with_category("nutrition"),
        Tip::new("Start the day with a glass of water.").with_category("hydration"),
        Tip::new("Aim for seven to nine hours of sleep.").with_category("wellness"),
        Tip::new("Take three slow, deep breaths when you feel stressed.").with_category("wellness"),
        Tip::new("Step outside for some daylight this morning."),
    ]
}

/// Picks the tip source and a label for the header.
fn build_source(
    offline: bool,
    network: &NetworkConfig,
) -> Result<(Arc<dyn TipSource>, String), Box<dyn std::error::Error>> {
    if offline {
        return Ok(offline_source());
    }
    live_source(network)
}

fn offline_source() -> (Arc<dyn TipSource>, String) {
    (Arc::new(StaticTipSource::new(offline_tips())), "offline".to_string())
}

#[cfg(feature = "http")]
fn live_source(
    network: &NetworkConfig,
) -> Result<(Arc<dyn TipSource>, String), Box<dyn std::error::Error>> {
    network.validate()?;
    let source = HttpTipSource::new(network);
    let label = source.endpoint().to_string();
    Ok((Arc::new(source), label))
}

#[cfg(not(feature = "http"))]
fn live_source(
    network: &NetworkConfig,
) -> Result<(Arc<dyn TipSource>, String), Box<dyn std::error::Error>> {
    tracing::warn!(endpoint = %network.endpoint, "Built without 'http', using offline tips");
    Ok(offline_source())
}

/// Run the TUI application
async fn run_tui(
    source: Arc<dyn TipSource>,
    label: String,
    config: RotatorConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(label, &config);
    app.attach(RotatorHandle::spawn(source, config));

    // Initialize terminal
    let mut terminal = ratatui::init();

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    ratatui::restore();

    if let Some(rotator) = app.take_rotator() {
        rotator.unmount().await;
    }

    result
}

/// Main application loop
fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.sync();

        terminal.draw(|frame| ui(frame, app))?;

        if handle_events(app)? {
            break;
        }
    }

    Ok(())
}

#[derive(Tabled)]
struct TipRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "")]
    icon: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Tip")]
    content: String,
}

/// Fetch once and print (outside TUI)
async fn run_tips(
    source: Arc<dyn TipSource>,
    filter: &TipFilter,
    config: &RotatorConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = (!json).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });
    if let Some(pb) = &spinner {
        pb.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
        pb.set_message(format!("Fetching tips from {}...", source.name()));
    }

    let fetched = source.fetch_tips().await.map(TipsPayload::into_tips);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let (tips, warning) = tips_for_output(fetched, &config.fallback_tip);
    if let Some(warning) = warning {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }

    let matching = filter.apply(&tips);

    if json {
        println!("{}", serde_json::to_string_pretty(&matching)?);
        return Ok(());
    }

    if matching.is_empty() {
        println!("{}", "No tips match the filter.".dimmed());
        return Ok(());
    }

    let rows: Vec<TipRow> = matching
        .iter()
        .enumerate()
        .map(|(i, tip)| TipRow {
            index: i + 1,
            icon: tip.icon().glyph(),
            category: tip.category.clone().unwrap_or_default(),
            content: tip.content.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Width::wrap(60)));

    println!("{}", table);
    println!("{}", summary_line(matching.len(), tips.len(), filter).dimmed());
    Ok(())
}

/// Tips to print after a one-shot fetch, plus the warning to show.
///
/// Runs the result through [`TipRotator`] so an empty or failed fetch falls
/// back exactly as the sidebar does.
fn tips_for_output(
    result: Result<Vec<Tip>, VivaError>,
    fallback: &Tip,
) -> (Vec<Tip>, Option<String>) {
    let mut rotator = TipRotator::new(fallback.clone());
    rotator.begin_fetch();
    rotator.finish_fetch(result, &mut rand::thread_rng());

    let warning = rotator.error().map(str::to_string);
    let tips = if rotator.all_tips().is_empty() {
        vec![rotator.current_tip().clone()]
    } else {
        rotator.all_tips().to_vec()
    };
    (tips, warning)
}

fn summary_line(shown: usize, total: usize, filter: &TipFilter) -> String {
    let mut line = format!("{} of {} tips", shown, total);
    if let Some(category) = filter.category() {
        line.push_str(&format!(" in {}", category));
    }
    if let Some(search) = filter.search() {
        line.push_str(&format!(" matching \"{}\"", search));
    }
    line
}

/// Write the sample config file
fn run_init_config() -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = CliConfig::config_path()
        && path.exists()
    {
        println!("{} Config already exists at {}", "!".yellow(), path.display());
        return Ok(());
    }

    let path = CliConfig::sample().save()?;
    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}

/// Run doctor diagnostics (outside TUI)
async fn run_doctor(network: &NetworkConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n🩺 Viva Doctor - Diagnostics Tool");
    println!("═══════════════════════════════════════════════\n");

    // 1. Environment Info
    println!("1. System Information:");
    println!("   OS: {}", env::consts::OS);
    println!("   Arch: {}", env::consts::ARCH);
    println!("   CLI Version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "   NO_COLOR: {}",
        if env::var("NO_COLOR").is_ok() {
            "Set (True)"
        } else {
            "Unset"
        }
    );

    // 2. Configuration
    println!("\n2. Configuration:");
    match CliConfig::config_path() {
        Some(path) if path.exists() => println!("   Config File: {}", path.display()),
        Some(path) => println!("   Config File: {} (not created, run `viva init-config`)", path.display()),
        None => println!("   Config File: no config directory on this platform"),
    }

    // 3. Network Connectivity
    println!("\n3. Tips API:");
    println!("   Endpoint: {}", network.endpoint);

    #[cfg(feature = "http")]
    {
        if let Err(e) = network.validate() {
            println!("   {} {}", "✗".red(), e);
        } else {
            print!("   Fetching tips... ");
            use std::io::Write;
            std::io::stdout().flush()?;

            let source = HttpTipSource::new(network);
            match source.fetch_tips().await {
                Ok(payload) => {
                    let count = payload.into_tips().len();
                    if count > 0 {
                        println!("{}", "✓ OK".green());
                        println!("   Tips: {}", count);
                    } else {
                        println!("{}", "⚠ Connected but returned no tips".yellow());
                    }
                }
                Err(e) => {
                    println!("{}", "✗ FAILED".red());
                    println!("   Error: {}", e);
                }
            }
        }
    }

    #[cfg(not(feature = "http"))]
    {
        println!("   HTTP Feature: Disabled (Compiled without 'http')");
    }

    println!("\nDiagnostics Complete.\n");
    Ok(())
}
