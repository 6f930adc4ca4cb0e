//! Secret Santa - Main entry point

use anyhow::Context;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use secret_santa::cli::{Cli, Commands};
use secret_santa::config::validate_candidates;
use secret_santa::submission::{AliasService, FormFields, HttpAliasClient};
use secret_santa::{App, AppConfig, SelectorWheel, logging, signals};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.log_file.as_deref(), cli.is_interactive())?;
    info!("Secret Santa starting up");

    match &cli.command {
        Some(Commands::Validate { path }) => validate_config(path),
        Some(Commands::Submit { email, name }) => {
            let config = load_config(&cli)?;
            run_submit(&config, email, name)
        }
        Some(Commands::Spin { names, seed }) => {
            let config = load_config(&cli)?;
            run_spin(&config, names, *seed)
        }
        Some(Commands::Run) | None => {
            let config = load_config(&cli)?;
            run_tui(&config)
        }
    }
}

/// Defaults, then the config file, then command-line overrides
fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            AppConfig::load_from_file(path)?
        }
        None => AppConfig::default(),
    };
    config.apply_overrides(cli.endpoint.clone(), cli.settle_ms);
    config.validate().context("Invalid configuration")?;
    debug!(?config, "Configuration loaded");
    Ok(config)
}

fn validate_config(path: &Path) -> anyhow::Result<()> {
    info!("Validating configuration file: {:?}", path);
    let result = AppConfig::load_from_file(path).and_then(|config| config.validate());
    match result {
        Ok(()) => {
            println!("✓ Configuration file is valid: {}", path.display());
            Ok(())
        }
        Err(e) => {
            error!("Configuration validation failed: {:#}", e);
            eprintln!("✗ Configuration validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run_submit(config: &AppConfig, email: &str, name: &str) -> anyhow::Result<()> {
    let request = FormFields::new(email, name)
        .to_request()
        .map_err(anyhow::Error::msg)?;
    let client = HttpAliasClient::new(config.endpoint.clone(), config.request_timeout());

    match client.request_alias(&request) {
        Ok(alias) => {
            println!("{}", alias);
            Ok(())
        }
        Err(e) => {
            error!("Submission failed: {}", e);
            eprintln!("✗ {}", e.user_message());
            std::process::exit(1);
        }
    }
}

fn run_spin(config: &AppConfig, names: &[String], seed: Option<u64>) -> anyhow::Result<()> {
    let names = if names.is_empty() {
        config.candidates.clone()
    } else {
        validate_candidates(names).context("Invalid --names")?;
        names.to_vec()
    };
    let delay = config.settle_delay();

    let wheel = match seed {
        Some(seed) => SelectorWheel::with_seed(names, delay, seed)?,
        None => SelectorWheel::new(names, delay)?,
    };
    let mut wheel = wheel.with_observer(|label| println!("Selected: {}", label));

    let rotation = wheel
        .trigger(Instant::now())
        .context("Wheel refused to spin")?;
    println!("Rotation: {:.1}°", rotation);

    while wheel.is_spinning() {
        thread::sleep(Duration::from_millis(10));
        wheel.tick(Instant::now());
    }
    Ok(())
}

fn run_tui(config: &AppConfig) -> anyhow::Result<()> {
    debug!("Initializing terminal for TUI mode");

    let shutdown = match signals::install_shutdown_flag() {
        Ok(flag) => flag,
        Err(e) => {
            // Keys still quit the app; only external signals are affected
            warn!("Failed to install signal handlers: {}", e);
            Arc::new(AtomicBool::new(false))
        }
    };

    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let service: Arc<dyn AliasService> = Arc::new(HttpAliasClient::new(
        config.endpoint.clone(),
        config.request_timeout(),
    ));
    let mut app = App::new(config, service);
    let result = app.run(&mut terminal, &shutdown);

    // Always restore the terminal, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    info!("Secret Santa shutting down");
    result.map_err(Into::into)
}
