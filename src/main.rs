// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use app_controller::Controller;

mod app_config;
mod timecode;
mod subtitle_processor;
mod file_utils;
mod app_controller;
mod errors;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Shift subtitle timestamps (default command)
    #[command(alias = "shift")]
    Shift(ShiftArgs),

    /// Generate shell completions for subshift
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ShiftArgs {
    /// Path to the SRT subtitle file to shift
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Shift amount in seconds, fractional and negative values allowed
    /// (e.g. "1.5", "-0.250"). Parsed exactly, never through a float.
    #[arg(short, long, allow_hyphen_values = true)]
    shift: Option<String>,

    /// Renumber entries sequentially starting at 1
    #[arg(short, long)]
    renumber: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subshift - SRT subtitle shifter
///
/// Shifts every timestamp in an SRT subtitle file by a fixed offset and
/// optionally renumbers the entries. The original file is preserved under
/// a backup name before the shifted file is written.
#[derive(Parser, Debug)]
#[command(name = "subshift")]
#[command(version = "1.0.0")]
#[command(about = "Shift SRT subtitle timestamps by a fixed offset")]
#[command(long_about = "subshift rewrites an SRT subtitle file with every timestamp moved by a
fixed signed offset, optionally renumbering the entries from 1.

EXAMPLES:
    subshift -s 1.5 movie.srt              # Delay subtitles by 1.5 seconds
    subshift -s -0.250 movie.srt           # Advance subtitles by 250ms
    subshift -s 2 -r movie.srt             # Shift and renumber entries
    subshift movie.srt                     # Prompt for the shift amount
    subshift completions bash > subshift.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.

BACKUP:
    Before writing, the original file is renamed with a suffix inserted
    before the extension (movie.srt -> movie_old.srt). If that backup
    already exists the run fails rather than overwriting it.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the SRT subtitle file to shift
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Shift amount in seconds, fractional and negative values allowed
    #[arg(short, long, allow_hyphen_values = true)]
    shift: Option<String>,

    /// Renumber entries sequentially starting at 1
    #[arg(short, long)]
    renumber: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subshift", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Shift(args)) => run_shift(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let shift_args = ShiftArgs {
                input_path: cli.input_path,
                shift: cli.shift,
                renumber: cli.renumber,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_shift(shift_args)
        }
    }
}

fn run_shift(options: ShiftArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    // Resolve the two core inputs, prompting interactively when missing
    let input_path = resolve_input_path(options.input_path, &config.subtitle_extension)?;
    let shift_ms = resolve_shift_amount(options.shift)?;

    // Create controller and run the pipeline
    let controller = Controller::with_config(config)?;
    controller.run(&input_path, shift_ms, options.renumber)
}

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

/// Validate the input path, prompting on stdin until a usable one is given
fn resolve_input_path(initial: Option<PathBuf>, extension: &str) -> Result<PathBuf> {
    let mut candidate = initial;

    loop {
        if let Some(path) = candidate.take() {
            if !FileManager::file_exists(&path) {
                eprintln!("File not found: {:?}", path);
            } else if !FileManager::has_extension(&path, extension) {
                eprintln!(
                    "Unsupported format: {}",
                    path.extension()
                        .map(|e| e.to_string_lossy().to_string())
                        .unwrap_or_else(|| "(none)".to_string())
                );
            } else {
                return Ok(path);
            }
        }

        candidate = Some(PathBuf::from(prompt("Enter file path: ")?));
    }
}

/// Validate the shift amount, prompting on stdin until it parses
fn resolve_shift_amount(initial: Option<String>) -> Result<i64> {
    let mut candidate = initial;

    loop {
        if let Some(text) = candidate.take() {
            match timecode::parse_seconds(&text) {
                Ok(ms) => return Ok(ms),
                Err(_) => eprintln!("Value should be a number of seconds, e.g. 1.5 or -2."),
            }
        }

        candidate = Some(prompt("Enter shift value: ")?);
    }
}

/// Print a prompt to stderr and read one trimmed line from stdin
fn prompt(message: &str) -> Result<String> {
    eprint!("{}", message);
    std::io::stderr().flush()?;

    let mut line = String::new();
    let read = std::io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(anyhow!("stdin closed while waiting for input"));
    }

    Ok(line.trim().to_string())
}
