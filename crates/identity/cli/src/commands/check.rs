use std::io::Read;
use std::path::Path;

use colored::Colorize;

use cloak_identity_bridge::{from_settings, parse_settings};
use cloak_identity_engine::{summarize, validate};
use cloak_identity_types::{
    CoherenceFinding, CoherenceStatus, CoherenceSummary, ProfileAttributes, Severity,
};

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;

pub fn execute(input: &Path, settings: bool, format: OutputFormat) -> CliResult<()> {
    let raw = read_input(input)?;

    let attrs: ProfileAttributes = if settings {
        from_settings(&parse_settings(&raw)?)
    } else {
        serde_json::from_str(&raw)?
    };

    let findings = validate(&attrs);
    let summary = summarize(&findings);

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "findings": findings,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => print_report(&findings, &summary),
    }

    if summary.status == CoherenceStatus::Error {
        return Err(CliError::IncoherentProfile {
            count: summary.error_count,
        });
    }
    Ok(())
}

fn read_input(input: &Path) -> CliResult<String> {
    if input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Io {
                path: "stdin".into(),
                source,
            })?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input).map_err(|source| CliError::Io {
            path: input.display().to_string(),
            source,
        })
    }
}

fn print_report(findings: &[CoherenceFinding], summary: &CoherenceSummary) {
    println!("{}", "Coherence Report".bold().cyan());
    println!("{}", "=".repeat(60));

    if findings.is_empty() {
        println!("  {} {}", "✓".green(), summary.message);
        return;
    }

    for finding in findings {
        let badge = match finding.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        println!("  [{}] {} {}", badge, finding.id.bold(), finding.title);
        println!("      {}", finding.message.dimmed());
        if let Some(suggestion) = &finding.suggestion {
            println!("      {} {}", "hint:".dimmed(), suggestion);
        }
    }

    println!();
    let status = match summary.status {
        CoherenceStatus::Ok => summary.status.as_str().green(),
        CoherenceStatus::Warning => summary.status.as_str().yellow(),
        CoherenceStatus::Error => summary.status.as_str().red(),
    };
    println!("  {} {} — {}", "status:".bold(), status, summary.message);
}
