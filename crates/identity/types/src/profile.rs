use serde::{Deserialize, Serialize};

use crate::platform::PlatformFamily;

/// One complete, internally consistent bundle of fingerprint attributes.
///
/// Freshly constructed by the generator on every call; every field is
/// always set. A generated profile validates with zero error-severity
/// findings by construction, because all values are drawn from the same
/// family's catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoherentProfile {
    pub platform: PlatformFamily,
    pub user_agent: String,
    pub gpu_vendor: String,
    pub gpu_renderer: String,
    pub cores: u32,
    pub memory_gib: u32,
    pub max_touch_points: u32,
    pub screen_width: u32,
    pub screen_height: u32,
    pub pixel_ratio: f64,
    pub color_depth: u32,
    pub timezone: String,
    pub timezone_offset_minutes: i32,
    pub language: String,
    pub languages: Vec<String>,
}

/// A possibly user-edited, possibly partial attribute bag.
///
/// This is the validator's input: every field is optional, and a missing
/// field silently skips any rule that depends on it — absence is never
/// itself flagged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileAttributes {
    pub platform: Option<PlatformFamily>,
    pub user_agent: Option<String>,
    pub gpu_vendor: Option<String>,
    pub gpu_renderer: Option<String>,
    pub cores: Option<u32>,
    pub memory_gib: Option<u32>,
    pub max_touch_points: Option<u32>,
    pub screen_width: Option<u32>,
    pub screen_height: Option<u32>,
    pub pixel_ratio: Option<f64>,
    pub color_depth: Option<u32>,
    pub timezone: Option<String>,
    pub timezone_offset_minutes: Option<i32>,
    pub language: Option<String>,
    pub languages: Option<Vec<String>>,
}

impl From<&CoherentProfile> for ProfileAttributes {
    fn from(profile: &CoherentProfile) -> Self {
        ProfileAttributes {
            platform: Some(profile.platform),
            user_agent: Some(profile.user_agent.clone()),
            gpu_vendor: Some(profile.gpu_vendor.clone()),
            gpu_renderer: Some(profile.gpu_renderer.clone()),
            cores: Some(profile.cores),
            memory_gib: Some(profile.memory_gib),
            max_touch_points: Some(profile.max_touch_points),
            screen_width: Some(profile.screen_width),
            screen_height: Some(profile.screen_height),
            pixel_ratio: Some(profile.pixel_ratio),
            color_depth: Some(profile.color_depth),
            timezone: Some(profile.timezone.clone()),
            timezone_offset_minutes: Some(profile.timezone_offset_minutes),
            language: Some(profile.language.clone()),
            languages: Some(profile.languages.clone()),
        }
    }
}
