mod command;
mod config;
mod logging;
mod script;
mod session;
mod tui;

use anyhow::Result;
use clap::{Command, CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::{Generator, Shell, generate};
use config::{Config, ConfigError};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use logging::LogTarget;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use session::Session;
use std::io;
use tracing::{info, warn};
use tui::{app::App, terminal::TerminalGuard, ui};

#[derive(Parser)]
#[command(name = "cmdlist")]
#[command(about = "An item list where every change is a command that can be undone")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Run a script of add/remove/clear/undo lines and print the result")]
    Run {
        #[arg(help = "Script file, or '-' to read from stdin", value_hint = ValueHint::FilePath)]
        script: String,
        #[arg(long, help = "Start from an empty list instead of the configured seed items")]
        no_seed: bool,
    },
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key ('seed_items' or 'log_level')")]
        key: String,
        #[arg(help = "Configuration value; seed_items takes a comma-separated list")]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run { script, no_seed }) => run_script(&script, no_seed),
        Some(Commands::Config { action }) => handle_config_command(action).map_err(anyhow::Error::from),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
            Ok(())
        }
        None => run_main_app(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            let config = Config::load_or_default()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::List => {
            let config = Config::load_or_default()?;
            for key in config::KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
    }
    Ok(())
}

fn run_script(path: &str, no_seed: bool) -> Result<()> {
    let config = Config::load_or_default()?;
    logging::setup_tracing(&config.log_level, LogTarget::Stderr)?;

    let mut session = if no_seed {
        Session::new()
    } else {
        Session::with_items(config.seed_items)
    };

    script::run_script(&mut session, path)?;
    print!("{}", script::writer::render_report(&session));

    Ok(())
}

fn run_main_app() -> Result<()> {
    let config = Config::load_or_default()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;
    logging::setup_tracing(&config.log_level, LogTarget::File(logging::default_log_file()?))?;

    info!(seed_items = config.seed_items.len(), "starting session");
    let mut app = App::new(Session::with_items(config.seed_items));

    run_tui(&mut app)?;

    info!(history = app.history_count(), "session ended");
    Ok(())
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let _guard = TerminalGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, app)
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show) {
        warn!(error = %e, "failed to restore terminal");
    }
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key_event(key)?;
            if app.should_quit {
                break;
            }
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
