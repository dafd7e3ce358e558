//! Profile assembly.
//!
//! One complete [`CoherentProfile`] per call, every field drawn from the
//! chosen family's catalog. The draw order is fixed and part of the seeded
//! determinism contract: platform (only when not supplied) → GPU →
//! hardware → screen → locale group → timezone → user agent → touch
//! points.

use cloak_identity_types::{CoherentProfile, PlatformFamily};
use tracing::debug;

use crate::catalog;
use crate::locale;
use crate::rng::{Lcg, RandomSource, ThreadSource};
use crate::sampler;

/// Generate a fresh profile with non-deterministic randomness.
///
/// Picks the platform family uniformly when none is supplied. Total: it
/// always succeeds given the engine's own (verified) catalogs.
pub fn generate(platform: Option<PlatformFamily>) -> CoherentProfile {
    let mut source = ThreadSource::new();
    generate_with(&mut source, platform)
}

/// Generate a profile deterministically from a 32-bit seed.
///
/// Equal seed and equal explicit platform family yield field-for-field
/// identical profiles, forever: every uniform pick consumes the next
/// value of the seeded linear-congruential sequence.
pub fn generate_seeded(seed: u32, platform: Option<PlatformFamily>) -> CoherentProfile {
    let mut source = Lcg::new(seed);
    generate_with(&mut source, platform)
}

/// Generate a profile from a caller-supplied randomness source.
pub fn generate_with(
    source: &mut dyn RandomSource,
    platform: Option<PlatformFamily>,
) -> CoherentProfile {
    let family = platform
        .unwrap_or_else(|| PlatformFamily::ALL[source.pick_index(PlatformFamily::ALL.len())]);
    let catalog = catalog::platform_catalog(family);

    let gpu = &catalog.gpus[source.pick_index(catalog.gpus.len())];
    let hardware = sampler::sample(
        source,
        catalog.hardware,
        sampler::hardware_range(gpu.tier, catalog.hardware.len()),
    );
    let screen = sampler::sample(
        source,
        catalog.screens,
        sampler::screen_range(gpu.tier, catalog.screens.len()),
    );

    let groups = locale::locale_groups();
    let group = &groups[source.pick_index(groups.len())];
    let timezone = &group.timezones[source.pick_index(group.timezones.len())];

    let user_agent = catalog.user_agents[source.pick_index(catalog.user_agents.len())];
    let touch_points = catalog.touch_points[source.pick_index(catalog.touch_points.len())];

    debug!(
        family = %family,
        tier = gpu.tier.as_str(),
        renderer = gpu.renderer,
        language = group.language,
        "assembled identity profile"
    );

    CoherentProfile {
        platform: family,
        user_agent: user_agent.to_string(),
        gpu_vendor: gpu.vendor.to_string(),
        gpu_renderer: gpu.renderer.to_string(),
        cores: hardware.cores,
        memory_gib: hardware.memory_gib,
        max_touch_points: touch_points,
        screen_width: screen.width,
        screen_height: screen.height,
        pixel_ratio: screen.pixel_ratio,
        color_depth: screen.color_depth,
        timezone: timezone.id.to_string(),
        timezone_offset_minutes: timezone.offset_minutes,
        language: group.language.to_string(),
        languages: group.languages.iter().map(|l| l.to_string()).collect(),
    }
}
