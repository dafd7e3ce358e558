use colored::Colorize;

use cloak_identity_engine::{generate, generate_seeded};
use cloak_identity_types::{CoherentProfile, PlatformFamily};

use crate::error::CliResult;
use crate::output::OutputFormat;

pub fn execute(
    platform: Option<PlatformFamily>,
    seed: Option<u32>,
    format: OutputFormat,
) -> CliResult<()> {
    let profile = match seed {
        Some(seed) => generate_seeded(seed, platform),
        None => generate(platform),
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        OutputFormat::Table => print_profile(&profile, seed),
    }

    Ok(())
}

fn print_profile(profile: &CoherentProfile, seed: Option<u32>) {
    println!("{}", "Coherent Identity Profile".bold().cyan());
    println!("{}", "=".repeat(60));
    if let Some(seed) = seed {
        println!("  {:<18} {}", "seed".dimmed(), seed);
    }
    println!("  {:<18} {}", "platform".dimmed(), profile.platform);
    println!("  {:<18} {}", "user agent".dimmed(), profile.user_agent);
    println!("  {:<18} {}", "gpu vendor".dimmed(), profile.gpu_vendor);
    println!("  {:<18} {}", "gpu renderer".dimmed(), profile.gpu_renderer);
    println!(
        "  {:<18} {} cores / {} GiB",
        "hardware".dimmed(),
        profile.cores,
        profile.memory_gib
    );
    println!(
        "  {:<18} {}x{} @{}x, {}-bit",
        "screen".dimmed(),
        profile.screen_width,
        profile.screen_height,
        profile.pixel_ratio,
        profile.color_depth
    );
    println!(
        "  {:<18} {}",
        "touch points".dimmed(),
        profile.max_touch_points
    );
    println!(
        "  {:<18} {} (UTC{:+})",
        "timezone".dimmed(),
        profile.timezone,
        profile.timezone_offset_minutes / 60
    );
    println!(
        "  {:<18} {} [{}]",
        "language".dimmed(),
        profile.language,
        profile.languages.join(", ")
    );
}
