mod args;
mod commands;
mod config;
mod global;
mod handlers;

use base85::DecodeError;
use clap::Parser;
use log::LevelFilter;
use std::error::Error;
use std::io::{self, IsTerminal};

use args::Commands;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base85")]
#[command(version)]
#[command(about = "Encode and decode binary data as RFC 1924 base85 text", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// A failed run, together with whether its report may use color.
pub struct Failure {
    error: Box<dyn Error>,
    color: bool,
}

impl Failure {
    fn new(error: Box<dyn Error>, color: bool) -> Self {
        Self { error, color }
    }

    /// Prints the error to stderr. Decode errors carry their own
    /// "error:" header and hint.
    pub fn report(&self) {
        match self.error.downcast_ref::<DecodeError>() {
            Some(err) => eprintln!("{}", err.render(self.color && stderr_supports_color())),
            None => eprintln!("error: {}", self.error),
        }
    }
}

pub fn run() -> Result<(), Failure> {
    let cli = Cli::parse();
    let flag_color = !cli.global.no_color;

    let explicit_level =
        init_logger(cli.global.log_level.as_deref()).map_err(|e| Failure::new(e, flag_color))?;
    let settings = config::load_settings(&cli.global).map_err(|e| Failure::new(e, flag_color))?;

    if !explicit_level && let Some(level) = settings.log_level.as_deref() {
        let filter = level.parse::<LevelFilter>().map_err(|_| {
            Failure::new(
                format!("Invalid log level in config: '{}'", level).into(),
                settings.color,
            )
        })?;
        log::set_max_level(filter);
    }

    let result = match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &settings),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &settings),
        Commands::Config { action } => handlers::config::handle(action, &cli.global, &settings),
    };

    result.map_err(|e| Failure::new(e, settings.color))
}

fn stderr_supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal()
}

/// Installs the logger. Returns whether the level was chosen explicitly
/// (`--log-level` or `RUST_LOG`); otherwise it starts at `warn` and the
/// config file may adjust it.
fn init_logger(cli_level: Option<&str>) -> Result<bool, Box<dyn Error>> {
    let mut builder = env_logger::Builder::new();
    builder.format_timestamp(None);

    let explicit = match cli_level {
        Some(level) => {
            let filter = level
                .parse::<LevelFilter>()
                .map_err(|_| format!("Invalid log level: '{}'", level))?;
            builder.filter_level(filter);
            true
        }
        None => match std::env::var("RUST_LOG") {
            Ok(filters) => {
                builder.parse_filters(&filters);
                true
            }
            Err(_) => {
                builder.filter_level(LevelFilter::Trace);
                false
            }
        },
    };

    builder.try_init()?;

    if !explicit {
        log::set_max_level(LevelFilter::Warn);
    }

    Ok(explicit)
}
