use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::{AppConfig, ConfigSource};
use connect_four::console::ConsoleSession;
use connect_four::ui::App;

/// Play Connect Four against the computer.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Play in the full-screen terminal UI instead of the line console
    #[arg(long)]
    tui: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let (config, source) = AppConfig::load_with_source(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    init_logging(&config.logging.level);
    if source == ConfigSource::Defaults {
        log::warn!("config file '{}' not found, using defaults", cli.config.display());
    }
    log::debug!("configuration: {:?}", config);

    if cli.tui {
        run_tui(&config).context("running terminal UI")
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        ConsoleSession::new(stdin.lock(), stdout.lock(), &config)
            .run()
            .context("running console session")?;
        Ok(())
    }
}

/// `RUST_LOG` wins over the configured level when set.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env).format_timestamp(None).init();
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.players());
    let res = app.run(&mut terminal);

    // Restore terminal even if the app returned an error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
