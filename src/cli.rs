use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use print_combn::{OutputStyle, print_all};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Layout of the printed combinations
#[derive(Debug, Clone, ValueEnum)]
pub enum Style {
    /// One combination per line
    Lines,
    /// One line per size, combinations separated by ", "
    List,
}

impl Style {
    pub fn to_output_style(&self) -> OutputStyle {
        match self {
            Style::Lines => OutputStyle::Lines,
            Style::List => OutputStyle::List,
        }
    }
}

/// print_combn - Print every strictly increasing combination of digits 0-9
#[derive(Parser, Debug)]
#[command(name = "print_combn")]
#[command(about = "Print every strictly increasing combination of n digits, for n = 1 through 9")]
#[command(version)]
pub struct CliArgs {
    /// Output layout (default: lines)
    #[arg(short, long, value_enum, default_value = "lines")]
    pub style: Style,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    info!("Starting print_combn with {:?} style", args.style);

    print_all(args.style.to_output_style()).context("Failed to print combinations")?;

    Ok(())
}
