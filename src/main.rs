// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::{Config, PairingPolicy};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod language_utils;
mod segmenter;
mod subtitle_processor;
mod timecode;

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
    /// Re-segment a translated/source subtitle pair (default command)
    Split(SplitArgs),

    /// Generate shell completions for bisplit
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SplitArgs {
    /// Translated subtitle file (the track that drives the splitting)
    #[arg(value_name = "TRANSLATED_SRT")]
    translated: PathBuf,

    /// Source subtitle file, positionally aligned with the translated one
    #[arg(value_name = "SOURCE_SRT")]
    source: PathBuf,

    /// Output directory (defaults to the translated file's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Minimum ideograph run length before a boundary can split
    #[arg(short, long)]
    min_run_length: Option<usize>,

    /// Source language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'zh', 'ja', 'ko')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Fail instead of truncating when track entry counts differ
    #[arg(long)]
    strict_pairing: bool,
}

/// bisplit - Bilingual Subtitle Re-segmentation
///
/// Re-segments a pair of time-aligned SRT subtitle tracks so that overlong
/// translated entries are split into shorter captions, with the paired
/// source entries split at matching positions.
#[derive(Parser, Debug)]
#[command(name = "bisplit")]
#[command(version = "1.0.0")]
#[command(about = "Bilingual subtitle re-segmentation tool")]
#[command(long_about = "bisplit re-segments a pair of time-aligned SRT subtitle tracks: overlong
translated entries are split at ideograph boundaries, the paired source
entries are split at matching relative positions without breaking words,
and timing is redistributed so every caption stays in sync.

EXAMPLES:
    bisplit movie.zh.srt movie.en.srt            # Re-segment using default config
    bisplit -f movie.zh.srt movie.en.srt         # Force overwrite existing files
    bisplit -m 8 movie.zh.srt movie.en.srt       # Require longer ideograph runs
    bisplit -s en -t zh movie.zh.srt movie.en.srt
    bisplit -o out movie.zh.srt movie.en.srt     # Write outputs to a directory
    bisplit --strict-pairing a.srt b.srt         # Fail on entry-count mismatch
    bisplit --log-level debug a.srt b.srt        # Verbose logging
    bisplit completions bash > bisplit.bash      # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Translated subtitle file (the track that drives the splitting)
    #[arg(value_name = "TRANSLATED_SRT")]
    translated: Option<PathBuf>,

    /// Source subtitle file, positionally aligned with the translated one
    #[arg(value_name = "SOURCE_SRT")]
    source: Option<PathBuf>,

    /// Output directory (defaults to the translated file's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Minimum ideograph run length before a boundary can split
    #[arg(short, long)]
    min_run_length: Option<usize>,

    /// Source language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'zh', 'ja', 'ko')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Fail instead of truncating when track entry counts differ
    #[arg(long)]
    strict_pairing: bool,
}

/// Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    /// Create a new logger with the specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    /// Initialize the global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");

            let color = match record.level() {
                Level::Error => "\x1B[1;31m",
                Level::Warn => "\x1B[1;33m",
                Level::Info => "\x1B[1;32m",
                Level::Debug => "\x1B[1;36m",
                Level::Trace => "\x1B[1;35m",
            };

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
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
            generate(shell, &mut cmd, "bisplit", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Split(args)) => run_split(args),
        None => {
            // Default behavior - use top-level args
            let translated = cli.translated.ok_or_else(|| {
                anyhow!("TRANSLATED_SRT is required when no subcommand is specified")
            })?;
            let source = cli.source.ok_or_else(|| {
                anyhow!("SOURCE_SRT is required when no subcommand is specified")
            })?;

            let split_args = SplitArgs {
                translated,
                source,
                output_dir: cli.output_dir,
                force_overwrite: cli.force_overwrite,
                min_run_length: cli.min_run_length,
                source_language: cli.source_language,
                target_language: cli.target_language,
                config_path: cli.config_path,
                log_level: cli.log_level,
                strict_pairing: cli.strict_pairing,
            };
            run_split(split_args)
        }
    }
}

fn run_split(options: SplitArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        let log_level = match config_log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };
        log::set_max_level(log_level);
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        // Save pristine defaults; CLI overrides below apply to this run only
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(source_lang) = &options.source_language {
        config.source_language = source_lang.clone();
    }

    if let Some(target_lang) = &options.target_language {
        config.target_language = target_lang.clone();
    }

    if let Some(min_run_length) = options.min_run_length {
        config.split.min_run_length = min_run_length;
    }

    if options.strict_pairing {
        config.pairing = PairingPolicy::Strict;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        let log_level = match config.log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };

        // Just update the max level without reinitializing the logger
        log::set_max_level(log_level);
    }

    // Create controller
    let controller = Controller::with_config(config.clone())?;

    // Write outputs next to the translated input unless a directory is given
    let output_dir = match &options.output_dir {
        Some(dir) => dir.clone(),
        None => match options.translated.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    };

    controller.run(
        options.translated.clone(),
        options.source.clone(),
        output_dir,
        options.force_overwrite,
    )?;

    Ok(())
}
