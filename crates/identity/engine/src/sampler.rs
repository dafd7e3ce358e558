//! Tier-constrained sampling over ordered pools.
//!
//! Hardware and screen pools are ordered low→high capability. Given the
//! tier of the GPU already drawn, the sampler narrows each pool to the
//! sub-range plausible for that tier and then picks uniformly within it.
//!
//! The integrated and mid ranges deliberately overlap (both include the
//! 30–40% region of the hardware pool), so a borderline mid-tier draw can
//! pair with hardware that the validator grades as integrated-class. That
//! slack is accepted input-space behavior; downstream warning rules were
//! tuned assuming it.

use std::ops::Range;

use cloak_identity_types::GpuTier;

use crate::rng::RandomSource;

/// Sub-range of an ordered hardware pool plausible for `tier`.
pub fn hardware_range(tier: GpuTier, len: usize) -> Range<usize> {
    assert!(len > 0, "empty hardware pool");
    match tier {
        GpuTier::Integrated => 0..ceil_frac(len, 0.4),
        GpuTier::Mid => floor_frac(len, 0.3)..len,
        GpuTier::High => floor_frac(len, 0.5)..len,
    }
}

/// Sub-range of an ordered screen pool plausible for `tier`.
pub fn screen_range(tier: GpuTier, len: usize) -> Range<usize> {
    assert!(len > 0, "empty screen pool");
    match tier {
        GpuTier::Integrated => 0..ceil_frac(len, 0.5),
        GpuTier::Mid => 0..len,
        GpuTier::High => floor_frac(len, 0.4)..len,
    }
}

/// Pick uniformly from `pool` restricted to `range`.
pub fn sample<'a, T>(
    source: &mut dyn RandomSource,
    pool: &'a [T],
    range: Range<usize>,
) -> &'a T {
    let slice = &pool[range];
    assert!(!slice.is_empty(), "tier slice selected an empty sub-range");
    &slice[source.pick_index(slice.len())]
}

fn ceil_frac(len: usize, frac: f64) -> usize {
    (len as f64 * frac).ceil() as usize
}

fn floor_frac(len: usize, frac: f64) -> usize {
    (len as f64 * frac).floor() as usize
}
