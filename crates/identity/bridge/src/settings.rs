//! The external settings schema.
//!
//! Mirrors what the settings store persists: four optional groups, each
//! with its own `enabled` flag, camelCase field names on the wire. Every
//! field except `enabled` is optional so partially populated or
//! user-edited fragments parse without loss.

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

fn default_enabled() -> bool {
    true
}

/// A (possibly partial) settings document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigator: Option<NavigatorSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webgl: Option<WebglSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<ScreenSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<LocaleSettings>,
}

/// Navigator-surface overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigatorSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub user_agent: Option<String>,
    pub platform: Option<String>,
    pub hardware_concurrency: Option<u32>,
    pub device_memory: Option<u32>,
    pub max_touch_points: Option<u32>,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        NavigatorSettings {
            enabled: true,
            user_agent: None,
            platform: None,
            hardware_concurrency: None,
            device_memory: None,
            max_touch_points: None,
        }
    }
}

/// WebGL vendor/renderer overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebglSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub vendor: Option<String>,
    pub renderer: Option<String>,
}

impl Default for WebglSettings {
    fn default() -> Self {
        WebglSettings {
            enabled: true,
            vendor: None,
            renderer: None,
        }
    }
}

/// Screen metric overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub pixel_ratio: Option<f64>,
    pub color_depth: Option<u32>,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        ScreenSettings {
            enabled: true,
            width: None,
            height: None,
            pixel_ratio: None,
            color_depth: None,
        }
    }
}

/// Language and timezone overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub language: Option<String>,
    pub languages: Option<Vec<String>>,
    pub timezone: Option<String>,
    pub timezone_offset: Option<i32>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        LocaleSettings {
            enabled: true,
            language: None,
            languages: None,
            timezone: None,
            timezone_offset: None,
        }
    }
}

/// Parse a settings fragment from its JSON wire form.
pub fn parse_settings(input: &str) -> Result<SettingsFragment, BridgeError> {
    Ok(serde_json::from_str(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_parses_to_empty_fragment() {
        let fragment = parse_settings("{}").unwrap();
        assert_eq!(fragment, SettingsFragment::default());
    }

    #[test]
    fn enabled_defaults_to_true_when_absent() {
        let fragment =
            parse_settings(r#"{"navigator":{"userAgent":"Mozilla/5.0"}}"#).unwrap();
        let nav = fragment.navigator.unwrap();
        assert!(nav.enabled);
        assert_eq!(nav.user_agent.as_deref(), Some("Mozilla/5.0"));
    }

    #[test]
    fn explicit_disabled_flag_is_preserved() {
        let fragment = parse_settings(r#"{"webgl":{"enabled":false}}"#).unwrap();
        assert!(!fragment.webgl.unwrap().enabled);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let fragment = SettingsFragment {
            navigator: Some(NavigatorSettings {
                hardware_concurrency: Some(8),
                ..Default::default()
            }),
            ..Default::default()
        };
        let json = serde_json::to_string(&fragment).unwrap();
        assert!(json.contains("hardwareConcurrency"));
        assert!(!json.contains("hardware_concurrency"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(parse_settings("{not json").is_err());
    }
}
