use anyhow::{Context, Result};
use casefmt::case::Case;
use casefmt::cli::output::{self, OutputFormat};
use casefmt::config::{Config, Overrides};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use serde_json::Value;
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "casefmt")]
#[command(version, about = "Convert strings to kebab-case, camelCase or dot.case", long_about = None)]
struct Cli {
    /// Strings to convert (reads stdin lines when none are given). Options
    /// must come before the first input; inputs may start with `-`
    #[arg(value_name = "INPUTS", allow_hyphen_values = true, trailing_var_arg = true)]
    inputs: Vec<String>,

    /// Target case (kebab, camel, dot)
    #[arg(short, long)]
    case: Option<Case>,

    /// Reject blank input and input with no words in kebab-case too
    #[arg(long)]
    strict_kebab: bool,

    /// Treat every input as a JSON value; an empty line is an absent value
    #[arg(long)]
    json: bool,

    /// Convert each line of a file
    #[arg(short, long = "file", value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs could not be converted
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "casefmt", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(Overrides {
        case: cli.case,
        strict_kebab: cli.strict_kebab,
        output: cli.format,
    })?;

    init_tracing(&config.log_level);
    debug!(?config, "configuration loaded");

    let raw = collect_inputs(&cli)?;
    let converter = config.converter();

    let results = if cli.json {
        let values = parse_values(&raw)?;
        converter.convert_value_batch(&values)
    } else {
        converter.convert_batch(&raw)
    };

    let colored = !cli.no_color;
    output::print_results(config.case, &results, colored, &config.output)?;

    let failed = output::count_failures(&results);
    if config.output == OutputFormat::Text {
        output::print_failure_summary(failed, results.len(), colored);
    }

    if failed > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Positional inputs first, then file lines; stdin only when neither is given.
fn collect_inputs(cli: &Cli) -> Result<Vec<String>> {
    let mut inputs = cli.inputs.clone();

    for path in &cli.files {
        if !path.exists() {
            warn!("file not found, skipping: {}", path.display());
            continue;
        }
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!("unreadable file, skipping: {}: {}", path.display(), err);
                continue;
            }
        };
        inputs.extend(content.lines().map(str::to_string));
    }

    if cli.inputs.is_empty() && cli.files.is_empty() {
        for line in io::stdin().lock().lines() {
            inputs.push(line.context("Failed to read stdin")?);
        }
    }

    Ok(inputs)
}

fn parse_values(raw: &[String]) -> Result<Vec<Option<Value>>> {
    raw.iter()
        .enumerate()
        .map(|(i, text)| {
            if text.trim().is_empty() {
                return Ok(None);
            }
            serde_json::from_str(text)
                .map(Some)
                .with_context(|| format!("Input {} is not valid JSON: {}", i + 1, text))
        })
        .collect()
}
