use serde::Serialize;

use crate::platform::PlatformFamily;

/// Performance tier of a GPU descriptor.
///
/// The tier keeps the GPU choice consistent with CPU/memory and screen
/// choices: an integrated GPU draws from the low end of the hardware pool,
/// a high-end card from the top end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GpuTier {
    Integrated,
    Mid,
    High,
}

impl GpuTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            GpuTier::Integrated => "integrated",
            GpuTier::Mid => "mid",
            GpuTier::High => "high",
        }
    }
}

/// One catalog-owned GPU identity: the WebGL vendor/renderer pair a page
/// would observe, tagged with its performance tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GpuDescriptor {
    pub vendor: &'static str,
    pub renderer: &'static str,
    pub tier: GpuTier,
}

/// A CPU core count / memory pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HardwareSpec {
    pub cores: u32,
    pub memory_gib: u32,
}

/// A screen configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScreenSpec {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f64,
    pub color_depth: u32,
}

/// Per-family table of mutually compatible attribute values.
///
/// `hardware` and `screens` are ordered low→high capability; the
/// tier-constrained sampler slices them by that ordering. `touch_points`
/// is a weighted list: repeating a value makes it proportionally more
/// likely to be drawn.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PlatformCatalog {
    pub family: PlatformFamily,
    pub user_agents: &'static [&'static str],
    pub gpus: &'static [GpuDescriptor],
    pub hardware: &'static [HardwareSpec],
    pub screens: &'static [ScreenSpec],
    pub touch_points: &'static [u32],
}
