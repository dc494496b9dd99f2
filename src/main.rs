// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use zubaan::app_config::{self, Config};
use zubaan::{DetectionContext, LanguageService};

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
    /// Detect the language of a text
    Detect {
        /// Text to classify
        text: String,

        /// Sender the text comes from
        #[arg(long, requires = "last")]
        sender: Option<String>,

        /// Last language known for the sender (used for short or numeric text)
        #[arg(long, requires = "sender")]
        last: Option<String>,
    },

    /// Translate a text into English
    ToEnglish {
        /// Text to translate
        text: String,

        /// Source language code (e.g., 'ur', 'fr'); detected when omitted
        #[arg(short, long)]
        source: Option<String>,
    },

    /// Translate an English text into another language
    FromEnglish {
        /// Text to translate
        text: String,

        /// Target language code (e.g., 'ur', 'de')
        #[arg(short, long)]
        target: String,
    },

    /// List supported language codes
    Languages,

    /// Check that the chat model answers
    Check,

    /// Generate shell completions for zubaan
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// zubaan - language detection and English ↔ Urdu translation
#[derive(Parser, Debug)]
#[command(name = "zubaan")]
#[command(version)]
#[command(about = "Detect languages and translate to and from English, Roman Urdu included")]
#[command(long_about = "zubaan detects the language of short chat messages and translates them to and from English.

EXAMPLES:
    zubaan detect \"mera balance kya hai\"
    zubaan to-english -s ur \"meri pichli 8 transactions batao\"
    zubaan from-english -t ur \"check my balance\"
    zubaan detect 12 --sender 923001234567 --last ur
    zubaan completions bash > zubaan.bash

CONFIGURATION:
    Settings are read from zubaan.json when present. The chat model API key is
    read from OPENAI_API_KEY (a .env file is honored). Without a key every
    request uses statistical detection and Google Translate.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", default_value = "zubaan.json", global = true)]
    config_path: String,

    /// Chat model to use
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Disable the chat model even when an API key is present
    #[arg(long, global = true)]
    no_llm: bool,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
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
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
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

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()), now, record.level(), record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Warnings only until the config tells us otherwise
    CustomLogger::init(LevelFilter::Warn)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "zubaan", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::load(&cli.config_path)?;

    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }

    if cli.no_llm {
        config.llm.enabled = false;
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    log::set_max_level(config.log_level.to_level_filter());

    config.validate()
        .context("Configuration validation failed")?;

    let service = LanguageService::new(&config);
    run_command(&service, cli.command).await
}

async fn run_command(service: &LanguageService, command: Commands) -> Result<()> {
    match command {
        Commands::Detect { text, sender, last } => {
            let detected = match (sender.as_deref(), last) {
                (Some(sender_id), Some(last_language)) => {
                    let memory = move |_: &str| last_language.clone();
                    service.detect_language_smart(&text, Some(DetectionContext::new(sender_id, &memory))).await
                }
                _ => service.detect_language(&text).await,
            };
            println!("{}\t{}", detected, service.get_language_name(&detected));
        }
        Commands::ToEnglish { text, source } => {
            let source = match source {
                Some(source) => source,
                None => service.detect_language(&text).await,
            };
            info!("Translating from {} ({})", source, service.get_language_name(&source));
            println!("{}", service.translate_to_english(&text, &source).await);
        }
        Commands::FromEnglish { text, target } => {
            println!("{}", service.translate_from_english(&text, &target).await);
        }
        Commands::Languages => {
            for (code, name) in service.supported_languages() {
                println!("{}\t{}", code, name);
            }
        }
        Commands::Check => {
            service.test_connection().await
                .context("Chat model connection check failed")?;
            println!("Chat model is reachable");
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
