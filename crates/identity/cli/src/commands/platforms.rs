use colored::Colorize;

use cloak_identity_engine::{catalog, locale};
use cloak_identity_types::PlatformFamily;

use crate::error::CliResult;
use crate::output::OutputFormat;

pub fn execute(format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = PlatformFamily::ALL
                .iter()
                .map(|&family| {
                    let cat = catalog::platform_catalog(family);
                    serde_json::json!({
                        "family": family,
                        "userAgents": cat.user_agents.len(),
                        "gpus": cat.gpus.len(),
                        "hardware": cat.hardware.len(),
                        "screens": cat.screens.len(),
                    })
                })
                .collect();
            let report = serde_json::json!({
                "platforms": entries,
                "localeGroups": locale::locale_groups().len(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            println!("{}", "Platform Catalogs".bold().cyan());
            println!("{}", "=".repeat(60));
            for family in PlatformFamily::ALL {
                let cat = catalog::platform_catalog(family);
                println!(
                    "  {:<14} {} GPUs, {} hardware specs, {} screens, {} user agents",
                    family.as_str().bold(),
                    cat.gpus.len(),
                    cat.hardware.len(),
                    cat.screens.len(),
                    cat.user_agents.len()
                );
            }
            println!();
            println!(
                "  {} locale groups with geographically consistent timezones",
                locale::locale_groups().len()
            );
        }
    }

    Ok(())
}
