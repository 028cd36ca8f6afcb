//! Seedpass CLI
//!
//! Command-line front end for generating seeded passwords and
//! estimating password strength.

use clap::{Args, Parser, Subcommand};
use seedpass::{
    analysis::StrengthAnalyzer,
    config::FileConfig,
    generation::{CharacterClass, GenerationSettings, PasswordBuilder},
    random::SecureRandom,
    StrengthAnalysis,
};
use serde::Serialize;
use std::io::BufRead;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "seedpass", version, about = "Seeded password generator and strength estimator")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate passwords.
    Generate(GenerateArgs),
    /// Estimate the strength of a password.
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Memorable word to embed.
    #[arg(long)]
    word: Option<String>,
    /// Memorable number to embed after the word.
    #[arg(long)]
    number: Option<String>,
    /// Extra symbols to add to the pool.
    #[arg(long)]
    symbols: Option<String>,
    /// Password length (4-64).
    #[arg(short, long)]
    length: Option<usize>,
    /// Leave lowercase out of the pool.
    #[arg(long)]
    no_lowercase: bool,
    /// Leave uppercase out of the pool.
    #[arg(long)]
    no_uppercase: bool,
    /// Leave digits out of the pool.
    #[arg(long)]
    no_digits: bool,
    /// Leave symbols out of the pool.
    #[arg(long)]
    no_symbols: bool,
    /// Number of passwords to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
    /// Also print a strength analysis for each password.
    #[arg(long)]
    analyze: bool,
    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Password to analyze; read from stdin if omitted.
    password: Option<String>,
    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct GeneratedPassword {
    password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<StrengthAnalysis>,
}

fn main() {
    // Logs go to stderr so stdout carries only passwords and reports.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.config.as_ref() {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => fail(format!("Invalid configuration: {e}")),
        },
        None => FileConfig::default(),
    };

    let analyzer = StrengthAnalyzer::new(config.analysis.to_analysis_config());

    let result = match cli.command {
        Command::Generate(args) => run_generate(&config, &analyzer, args),
        Command::Analyze(args) => run_analyze(&analyzer, args),
    };

    if let Err(e) = result {
        fail(e);
    }
}

fn run_generate(
    config: &FileConfig,
    analyzer: &StrengthAnalyzer,
    args: GenerateArgs,
) -> Result<(), String> {
    let settings = settings_from_args(config, &args);
    settings.validate().map_err(|e| format!("Invalid settings: {e}"))?;

    let builder = PasswordBuilder::new();
    let mut rng = SecureRandom::from_os_entropy();

    let mut generated = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let password = builder
            .build_with(&settings, &mut rng)
            .map_err(|e| format!("Generation failed: {e}"))?;
        let analysis = args.analyze.then(|| analyzer.analyze(&password));
        generated.push(GeneratedPassword { password, analysis });
    }

    info!(
        count = generated.len(),
        bytes_drawn = rng.bytes_drawn(),
        rejections = rng.rejections(),
        "Generated passwords"
    );

    if args.json {
        print_json(&generated)?;
    } else {
        for entry in &generated {
            println!("{}", entry.password);
            if let Some(analysis) = &entry.analysis {
                print_report(analysis);
            }
        }
    }
    Ok(())
}

fn run_analyze(analyzer: &StrengthAnalyzer, args: AnalyzeArgs) -> Result<(), String> {
    let password = match args.password {
        Some(password) => password,
        None => read_stdin_line()?,
    };

    let analysis = analyzer.analyze(&password);
    if args.json {
        print_json(&analysis)?;
    } else {
        print_report(&analysis);
    }
    Ok(())
}

fn settings_from_args(config: &FileConfig, args: &GenerateArgs) -> GenerationSettings {
    let mut settings = config.generation.to_settings();

    settings.word = args.word.clone().filter(|w| !w.is_empty());
    settings.number_seed = args.number.clone().filter(|n| !n.is_empty());
    if args.symbols.is_some() {
        settings.custom_symbols = args.symbols.clone();
    }
    if let Some(length) = args.length {
        settings.length = length;
    }

    let disabled = [
        (args.no_lowercase, CharacterClass::Lowercase),
        (args.no_uppercase, CharacterClass::Uppercase),
        (args.no_digits, CharacterClass::Digits),
        (args.no_symbols, CharacterClass::Symbols),
    ];
    for (off, class) in disabled {
        if off {
            settings.classes.remove(&class);
        }
    }

    settings
}

fn read_stdin_line() -> Result<String, String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read password from stdin: {e}"))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to encode JSON: {e}"))?;
    println!("{text}");
    Ok(())
}

fn print_report(analysis: &StrengthAnalysis) {
    let Some(strength) = analysis.strength else {
        println!("  (empty password)");
        return;
    };

    println!(
        "  strength: {} ({}%), {:.1} bits, pool {}",
        strength, analysis.strength_percent, analysis.entropy_bits, analysis.pool_size
    );
    println!("  online crack time:  {}", analysis.online_crack_time);
    println!("  offline crack time: {}", analysis.offline_crack_time);
    if !analysis.detected_patterns.is_empty() {
        let labels: Vec<String> = analysis
            .detected_patterns
            .iter()
            .map(ToString::to_string)
            .collect();
        println!(
            "  patterns: {} (-{} bits)",
            labels.join(", "),
            analysis.penalty_bits
        );
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
