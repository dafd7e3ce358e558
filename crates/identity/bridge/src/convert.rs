//! Profile ⇄ settings conversions.

use cloak_identity_types::{CoherentProfile, ProfileAttributes};

use crate::settings::{
    LocaleSettings, NavigatorSettings, ScreenSettings, SettingsFragment, WebglSettings,
};

/// Reshape a generated profile into a settings fragment.
///
/// Overlay semantics: every profile field replaces its counterpart; the
/// `enabled` flag of each group is carried over from `existing` when that
/// group is present there, and defaults to true otherwise. The user's
/// on/off choices survive a re-randomize.
pub fn to_settings_fragment(
    profile: &CoherentProfile,
    existing: Option<&SettingsFragment>,
) -> SettingsFragment {
    let group_enabled = |flag: Option<bool>| flag.unwrap_or(true);

    SettingsFragment {
        navigator: Some(NavigatorSettings {
            enabled: group_enabled(
                existing.and_then(|e| e.navigator.as_ref()).map(|g| g.enabled),
            ),
            user_agent: Some(profile.user_agent.clone()),
            platform: Some(profile.platform.as_str().to_string()),
            hardware_concurrency: Some(profile.cores),
            device_memory: Some(profile.memory_gib),
            max_touch_points: Some(profile.max_touch_points),
        }),
        webgl: Some(WebglSettings {
            enabled: group_enabled(existing.and_then(|e| e.webgl.as_ref()).map(|g| g.enabled)),
            vendor: Some(profile.gpu_vendor.clone()),
            renderer: Some(profile.gpu_renderer.clone()),
        }),
        screen: Some(ScreenSettings {
            enabled: group_enabled(existing.and_then(|e| e.screen.as_ref()).map(|g| g.enabled)),
            width: Some(profile.screen_width),
            height: Some(profile.screen_height),
            pixel_ratio: Some(profile.pixel_ratio),
            color_depth: Some(profile.color_depth),
        }),
        locale: Some(LocaleSettings {
            enabled: group_enabled(existing.and_then(|e| e.locale.as_ref()).map(|g| g.enabled)),
            language: Some(profile.language.clone()),
            languages: Some(profile.languages.clone()),
            timezone: Some(profile.timezone.clone()),
            timezone_offset: Some(profile.timezone_offset_minutes),
        }),
    }
}

/// Project a settings bag into a validator attribute bag.
///
/// Tolerant of missing groups: an absent group leaves all of its fields
/// `None`, never defaulted. An unrecognized platform label also projects
/// to `None` so validation skips platform-dependent rules instead of
/// guessing.
pub fn from_settings(settings: &SettingsFragment) -> ProfileAttributes {
    let mut attrs = ProfileAttributes::default();

    if let Some(navigator) = &settings.navigator {
        attrs.user_agent = navigator.user_agent.clone();
        attrs.platform = navigator
            .platform
            .as_deref()
            .and_then(|label| label.parse().ok());
        attrs.cores = navigator.hardware_concurrency;
        attrs.memory_gib = navigator.device_memory;
        attrs.max_touch_points = navigator.max_touch_points;
    }
    if let Some(webgl) = &settings.webgl {
        attrs.gpu_vendor = webgl.vendor.clone();
        attrs.gpu_renderer = webgl.renderer.clone();
    }
    if let Some(screen) = &settings.screen {
        attrs.screen_width = screen.width;
        attrs.screen_height = screen.height;
        attrs.pixel_ratio = screen.pixel_ratio;
        attrs.color_depth = screen.color_depth;
    }
    if let Some(locale) = &settings.locale {
        attrs.language = locale.language.clone();
        attrs.languages = locale.languages.clone();
        attrs.timezone = locale.timezone.clone();
        attrs.timezone_offset_minutes = locale.timezone_offset;
    }

    attrs
}
