//! Passforge CLI
//!
//! Thin command-line wrapper: parses options, calls the library, and
//! prints the returned strings and reports verbatim.

use clap::{Args, Parser, Subcommand};
use passforge::{
    analyze, metrics::MetricsRegistry, CharacterClassConfig, FileConfig, PasswordGenerator,
    StrengthReport,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "passforge", version, about = "Generate passwords and score their strength")]
struct Cli {
    /// TOML configuration file supplying defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print Prometheus metrics to stderr when done
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate random passwords
    Generate(GenerateArgs),
    /// Generate a memorable word-based passphrase
    Memorable {
        /// Number of words
        #[arg(short, long)]
        words: Option<usize>,
    },
    /// Score the strength of a password
    Analyze {
        password: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Password length
    #[arg(short, long)]
    length: Option<usize>,
    #[arg(long)]
    no_uppercase: bool,
    #[arg(long)]
    no_lowercase: bool,
    #[arg(long)]
    no_numbers: bool,
    #[arg(long)]
    no_symbols: bool,
    /// Drop look-alike characters such as l, 1, O and 0
    #[arg(long)]
    exclude_similar: bool,
    /// Extra characters to draw from
    #[arg(long)]
    custom: Option<String>,
    /// Number of passwords to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,
    /// Print a strength report for each password
    #[arg(long)]
    analyze: bool,
}

impl GenerateArgs {
    fn apply(&self, mut config: CharacterClassConfig) -> CharacterClassConfig {
        if let Some(length) = self.length {
            config.length = length;
        }
        config.uppercase &= !self.no_uppercase;
        config.lowercase &= !self.no_lowercase;
        config.numbers &= !self.no_numbers;
        config.symbols &= !self.no_symbols;
        config.exclude_similar |= self.exclude_similar;
        if let Some(custom) = &self.custom {
            config.custom_characters = Some(custom.clone());
        }
        config
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    debug!("Passforge v{}", passforge::VERSION);

    let file_config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => FileConfig::default(),
    };

    let metrics = match MetricsRegistry::new() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Failed to create metrics registry: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let status = run(cli.command, &file_config, &metrics);

    if cli.metrics {
        match metrics.encode() {
            Ok(text) => eprint!("{}", text),
            Err(e) => error!("Failed to encode metrics: {}", e),
        }
    }

    status
}

fn run(command: Command, file_config: &FileConfig, metrics: &MetricsRegistry) -> ExitCode {
    let mut generator = PasswordGenerator::new();

    match command {
        Command::Generate(args) => {
            let config = args.apply(file_config.generator.clone());
            let count = args.count.unwrap_or(file_config.output.count);
            let show_report = args.analyze || file_config.output.analyze;

            match generator.generate_many(&config, count) {
                Ok(passwords) => {
                    metrics.record_passwords(passwords.len(), config.length);
                    for password in passwords {
                        if show_report {
                            let report = analyze(&password);
                            metrics.record_analysis(&report);
                            println!("{}  [{} {}]", password, report.score, report.level);
                        } else {
                            println!("{}", password);
                        }
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    metrics.record_failure();
                    eprintln!("Failed to generate password: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Memorable { words } => {
            let word_count = words.unwrap_or(file_config.memorable.word_count);
            match generator.generate_memorable(word_count) {
                Ok(phrase) => {
                    metrics.record_passphrase();
                    println!("{}", phrase);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    metrics.record_failure();
                    eprintln!("Failed to generate passphrase: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Analyze { password, json } => {
            let report = analyze(&password);
            metrics.record_analysis(&report);
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Failed to serialize report: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_report(&report);
            }
            ExitCode::SUCCESS
        }
    }
}

fn print_report(report: &StrengthReport) {
    println!("Score: {}/100", report.score);
    println!("Level: {}", report.level);
    for message in &report.feedback {
        println!("  - {}", message);
    }
}
