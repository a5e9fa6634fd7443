use crate::case::{Case, Conversion};
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonResult {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    case: Case,
    total: usize,
    failed: usize,
    results: Vec<JsonResult>,
}

pub fn print_results(
    case: Case,
    results: &[Conversion],
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_results(results, colored_output);
            Ok(())
        }
        OutputFormat::Json => print_json_results(case, results),
    }
}

fn print_text_results(results: &[Conversion], colored_output: bool) {
    for conversion in results {
        match &conversion.result {
            Ok(output) => println!("{}", output),
            Err(err) => {
                if colored_output {
                    eprintln!(
                        "{} {} {}",
                        "error:".red().bold(),
                        err,
                        format!("(input: {:?})", conversion.input).dimmed()
                    );
                } else {
                    eprintln!("error: {} (input: {:?})", err, conversion.input);
                }
            }
        }
    }
}

fn print_json_results(case: Case, results: &[Conversion]) -> Result<()> {
    let output = json_output(case, results);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn json_output(case: Case, results: &[Conversion]) -> JsonOutput {
    let json_results: Vec<JsonResult> = results
        .iter()
        .map(|c| match &c.result {
            Ok(output) => JsonResult {
                input: c.input.clone(),
                output: Some(output.clone()),
                error: None,
                kind: None,
            },
            Err(err) => JsonResult {
                input: c.input.clone(),
                output: None,
                error: Some(err.to_string()),
                kind: Some(err.kind().to_string()),
            },
        })
        .collect();

    JsonOutput {
        case,
        total: results.len(),
        failed: count_failures(results),
        results: json_results,
    }
}

pub fn count_failures(results: &[Conversion]) -> usize {
    results.iter().filter(|c| c.result.is_err()).count()
}

/// Printed to stderr after text output when at least one of several inputs
/// failed. A single input already has its own error line.
pub fn print_failure_summary(failed: usize, total: usize, colored: bool) {
    if failed == 0 || total <= 1 {
        return;
    }
    if colored {
        eprintln!(
            "{} {} of {} inputs could not be converted",
            "✗".red().bold(),
            failed.to_string().red().bold(),
            total
        );
    } else {
        eprintln!("✗ {} of {} inputs could not be converted", failed, total);
    }
}
