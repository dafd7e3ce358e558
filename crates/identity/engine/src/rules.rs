//! The coherence rule battery.
//!
//! A fixed list of independent, pure rule functions. Each rule receives
//! the full attribute bag and returns at most one finding; the first
//! applicable condition inside a rule wins. A rule whose fields are
//! missing returns nothing — absence is never itself flagged, so partial
//! bags produce no false positives.
//!
//! Findings are returned in rule-declaration order, unsorted.

use cloak_identity_types::{CoherenceFinding, PlatformFamily, ProfileAttributes, Severity};
use tracing::trace;

type RuleFn = fn(&ProfileAttributes) -> Option<CoherenceFinding>;

const RULES: &[RuleFn] = &[
    gpu_platform_apple,
    gpu_platform_mesa,
    gpu_platform_d3d,
    ua_platform_mismatch,
    hardware_unusual,
    screen_unusual,
    touch_mac,
    gpu_specs_mismatch,
    gpu_specs_mismatch_2,
    tz_language_mismatch,
];

/// Run the full rule battery over an attribute bag.
///
/// Never fails; an empty bag yields an empty list. Finding ids are unique
/// per run because each rule emits at most once.
pub fn validate(attrs: &ProfileAttributes) -> Vec<CoherenceFinding> {
    let findings: Vec<CoherenceFinding> = RULES.iter().filter_map(|rule| rule(attrs)).collect();
    trace!(count = findings.len(), "coherence validation complete");
    findings
}

fn finding(
    id: &str,
    severity: Severity,
    title: &str,
    message: String,
    affected_fields: &[&str],
    suggestion: Option<&str>,
) -> CoherenceFinding {
    CoherenceFinding {
        id: id.to_string(),
        severity,
        title: title.to_string(),
        message,
        affected_fields: affected_fields.iter().map(|f| f.to_string()).collect(),
        suggestion: suggestion.map(|s| s.to_string()),
    }
}

/// Lowercased concatenation of whatever GPU labels are present.
fn gpu_label(attrs: &ProfileAttributes) -> Option<String> {
    match (&attrs.gpu_vendor, &attrs.gpu_renderer) {
        (None, None) => None,
        (vendor, renderer) => Some(
            format!(
                "{} {}",
                vendor.as_deref().unwrap_or(""),
                renderer.as_deref().unwrap_or("")
            )
            .to_ascii_lowercase(),
        ),
    }
}

fn label_matches(label: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| label.contains(marker))
}

fn gpu_platform_apple(attrs: &ProfileAttributes) -> Option<CoherenceFinding> {
    let platform = attrs.platform?;
    if platform == PlatformFamily::MacLike {
        return None;
    }
    let label = gpu_label(attrs)?;
    if label_matches(&label, &["apple"]) {
        return Some(finding(
            "gpu-platform-apple",
            Severity::Error,
            "Apple GPU on a non-Mac platform",
            format!("An Apple-silicon renderer cannot appear on a {platform} device."),
            &["platform", "gpu_vendor", "gpu_renderer"],
            Some("Switch the platform to mac-like or pick a GPU native to this platform."),
        ));
    }
    None
}

fn gpu_platform_mesa(attrs: &ProfileAttributes) -> Option<CoherenceFinding> {
    let platform = attrs.platform?;
    if platform == PlatformFamily::LinuxLike {
        return None;
    }
    let label = gpu_label(attrs)?;
    if label_matches(&label, &["mesa", "x.org", "xorg"]) {
        return Some(finding(
            "gpu-platform-mesa",
            Severity::Error,
            "Mesa driver on a non-Linux platform",
            format!("A Mesa/X.org renderer string only appears on Linux, not on a {platform} device."),
            &["platform", "gpu_vendor", "gpu_renderer"],
            Some("Switch the platform to linux-like or pick a GPU native to this platform."),
        ));
    }
    None
}

fn gpu_platform_d3d(attrs: &ProfileAttributes) -> Option<CoherenceFinding> {
    let platform = attrs.platform?;
    if platform == PlatformFamily::WindowsLike {
        return None;
    }
    let label = gpu_label(attrs)?;
    if label_matches(&label, &["direct3d", "d3d11", "d3d12", "d3d9"]) {
        return Some(finding(
            "gpu-platform-d3d",
            Severity::Error,
            "Direct3D backend on a non-Windows platform",
            format!("A Direct3D/D3D11 renderer string only appears on Windows, not on a {platform} device."),
            &["platform", "gpu_vendor", "gpu_renderer"],
            Some("Switch the platform to windows-like or pick a GPU native to this platform."),
        ));
    }
    None
}

fn ua_platform_mismatch(attrs: &ProfileAttributes) -> Option<CoherenceFinding> {
    let platform = attrs.platform?;
    let ua = attrs.user_agent.as_deref()?.to_ascii_lowercase();
    let expected: &[&str] = match platform {
        PlatformFamily::WindowsLike => &["windows nt"],
        PlatformFamily::MacLike => &["macintosh", "mac os x"],
        PlatformFamily::LinuxLike => &["linux", "x11"],
    };
    if !expected.iter().any(|marker| ua.contains(marker)) {
        return Some(finding(
            "ua-platform-mismatch",
            Severity::Error,
            "User agent contradicts the platform",
            format!("The user-agent string does not look like a {platform} browser."),
            &["platform", "user_agent"],
            Some("Use a user-agent string that names the declared platform."),
        ));
    }
    None
}

fn hardware_unusual(attrs: &ProfileAttributes) -> Option<CoherenceFinding> {
    if let Some(cores) = attrs.cores {
        if !(2..=24).contains(&cores) {
            return Some(finding(
                "hardware-unusual",
                Severity::Warning,
                "Implausible core count",
                format!("{cores} CPU cores is outside the range seen on consumer devices."),
                &["cores"],
                Some("Pick a core count between 2 and 24."),
            ));
        }
    }
    if attrs.platform == Some(PlatformFamily::MacLike) && attrs.memory_gib == Some(2) {
        return Some(finding(
            "hardware-unusual",
            Severity::Warning,
            "Too little memory for a Mac",
            "No shipping Mac reports 2 GiB of memory.".to_string(),
            &["platform", "memory_gib"],
            None,
        ));
    }
    if let (Some(cores), Some(memory)) = (attrs.cores, attrs.memory_gib) {
        if cores >= 12 && memory <= 4 {
            return Some(finding(
                "hardware-unusual",
                Severity::Warning,
                "Many cores with very little memory",
                format!("{cores} cores paired with {memory} GiB of memory is a rare combination."),
                &["cores", "memory_gib"],
                None,
            ));
        }
    }
    None
}

fn screen_unusual(attrs: &ProfileAttributes) -> Option<CoherenceFinding> {
    let mac = attrs.platform == Some(PlatformFamily::MacLike);
    if mac {
        if let Some(ratio) = attrs.pixel_ratio {
            if ratio < 2.0 {
                return Some(finding(
                    "screen-unusual",
                    Severity::Warning,
                    "Non-Retina pixel ratio on a Mac",
                    format!("Modern Macs report a pixel ratio of 2 or more, not {ratio}."),
                    &["platform", "pixel_ratio"],
                    Some("Use a pixel ratio of 2 on mac-like platforms."),
                ));
            }
        }
        if let (Some(width), Some(ratio)) = (attrs.screen_width, attrs.pixel_ratio) {
            if width >= 3840 && ratio == 1.0 {
                return Some(finding(
                    "screen-unusual",
                    Severity::Warning,
                    "4K Mac screen without scaling",
                    "A 4K Mac display at pixel ratio 1 does not match real hardware.".to_string(),
                    &["platform", "screen_width", "pixel_ratio"],
                    None,
                ));
            }
        }
    }
    if let (Some(width), Some(memory)) = (attrs.screen_width, attrs.memory_gib) {
        if width >= 3840 && memory <= 4 {
            return Some(finding(
                "screen-unusual",
                Severity::Warning,
                "4K screen on a low-memory device",
                format!("A {width}px-wide screen rarely pairs with {memory} GiB of memory."),
                &["screen_width", "memory_gib"],
                None,
            ));
        }
    }
    None
}

fn touch_mac(attrs: &ProfileAttributes) -> Option<CoherenceFinding> {
    if attrs.platform == Some(PlatformFamily::MacLike) {
        let touch = attrs.max_touch_points?;
        if touch > 0 {
            return Some(finding(
                "touch-mac",
                Severity::Warning,
                "Touch screen on a Mac",
                format!("macOS devices report 0 touch points, not {touch}."),
                &["platform", "max_touch_points"],
                Some("Set max touch points to 0 on mac-like platforms."),
            ));
        }
    }
    None
}

const HIGH_END_GPU_MARKERS: &[&str] = &[
    "rtx 4090", "rtx 4080", "rtx 3090", "rtx 3080", "rtx 3070", "rx 7900", "rx 6900",
];

const INTEGRATED_GPU_MARKERS: &[&str] = &["uhd graphics", "hd graphics", "iris"];

fn gpu_specs_mismatch(attrs: &ProfileAttributes) -> Option<CoherenceFinding> {
    let label = gpu_label(attrs)?;
    if !label_matches(&label, HIGH_END_GPU_MARKERS) {
        return None;
    }
    let weak_cores = attrs.cores.is_some_and(|c| c <= 4);
    let weak_memory = attrs.memory_gib.is_some_and(|m| m <= 4);
    if weak_cores || weak_memory {
        return Some(finding(
            "gpu-specs-mismatch",
            Severity::Warning,
            "High-end GPU on a weak machine",
            "A flagship GPU paired with entry-level CPU or memory is unusual.".to_string(),
            &["gpu_renderer", "cores", "memory_gib"],
            None,
        ));
    }
    None
}

fn gpu_specs_mismatch_2(attrs: &ProfileAttributes) -> Option<CoherenceFinding> {
    let label = gpu_label(attrs)?;
    if !label_matches(&label, INTEGRATED_GPU_MARKERS) {
        return None;
    }
    let cores = attrs.cores?;
    let memory = attrs.memory_gib?;
    if cores >= 16 && memory >= 32 {
        return Some(finding(
            "gpu-specs-mismatch-2",
            Severity::Warning,
            "Integrated GPU on a workstation",
            format!(
                "{cores} cores and {memory} GiB of memory rarely ship with integrated graphics."
            ),
            &["gpu_renderer", "cores", "memory_gib"],
            None,
        ));
    }
    None
}

/// Per-language continent prefixes that would be an obvious cross-continent
/// mismatch. Heuristic and non-exhaustive by design.
const IMPLAUSIBLE_TZ_PREFIXES: &[(&str, &[&str])] = &[
    ("en-US", &["Asia/", "Europe/", "Africa/", "Australia/"]),
    ("en-GB", &["Asia/", "Australia/"]),
    ("de-DE", &["Asia/", "America/"]),
    ("fr-FR", &["Asia/", "America/"]),
    ("es-ES", &["Asia/", "America/"]),
    ("it-IT", &["Asia/", "America/"]),
    ("nl-NL", &["Asia/", "America/"]),
    ("pl-PL", &["Asia/", "America/"]),
    ("pt-BR", &["Asia/", "Europe/"]),
    ("ja-JP", &["America/", "Europe/"]),
    ("ko-KR", &["America/", "Europe/"]),
    ("zh-CN", &["America/", "Europe/"]),
    ("ru-RU", &["America/"]),
];

fn tz_language_mismatch(attrs: &ProfileAttributes) -> Option<CoherenceFinding> {
    let language = attrs.language.as_deref()?;
    let timezone = attrs.timezone.as_deref()?;
    let (_, implausible) = IMPLAUSIBLE_TZ_PREFIXES
        .iter()
        .find(|(lang, _)| *lang == language)?;
    if implausible
        .iter()
        .any(|prefix| timezone.starts_with(prefix))
    {
        return Some(finding(
            "tz-language-mismatch",
            Severity::Warning,
            "Timezone far from the language region",
            format!("The {language} language rarely pairs with the {timezone} timezone."),
            &["language", "timezone"],
            Some("Pick a timezone from the language's home region."),
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag() -> ProfileAttributes {
        ProfileAttributes::default()
    }

    fn ids(findings: &[CoherenceFinding]) -> Vec<&str> {
        findings.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn empty_bag_yields_no_findings() {
        assert!(validate(&bag()).is_empty());
    }

    #[test]
    fn apple_gpu_on_windows_is_an_error() {
        let attrs = ProfileAttributes {
            platform: Some(PlatformFamily::WindowsLike),
            gpu_renderer: Some("Apple M2".into()),
            ..bag()
        };
        let findings = validate(&attrs);
        assert_eq!(ids(&findings), vec!["gpu-platform-apple"]);
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn apple_gpu_on_mac_is_coherent() {
        let attrs = ProfileAttributes {
            platform: Some(PlatformFamily::MacLike),
            gpu_renderer: Some("ANGLE (Apple, ANGLE Metal Renderer: Apple M2, Unspecified Version)".into()),
            ..bag()
        };
        assert!(validate(&attrs).is_empty());
    }

    #[test]
    fn mesa_gpu_on_windows_is_an_error() {
        let attrs = ProfileAttributes {
            platform: Some(PlatformFamily::WindowsLike),
            gpu_renderer: Some("Mesa Intel UHD".into()),
            ..bag()
        };
        assert_eq!(ids(&validate(&attrs)), vec!["gpu-platform-mesa"]);
    }

    #[test]
    fn d3d_gpu_on_linux_is_an_error() {
        let attrs = ProfileAttributes {
            platform: Some(PlatformFamily::LinuxLike),
            gpu_renderer: Some(
                "ANGLE (NVIDIA, NVIDIA GeForce RTX 3060 Direct3D11 vs_5_0 ps_5_0, D3D11)".into(),
            ),
            ..bag()
        };
        assert_eq!(ids(&validate(&attrs)), vec!["gpu-platform-d3d"]);
    }

    #[test]
    fn gpu_vendor_alone_can_trigger_platform_rules() {
        let attrs = ProfileAttributes {
            platform: Some(PlatformFamily::LinuxLike),
            gpu_vendor: Some("Apple Inc.".into()),
            ..bag()
        };
        assert_eq!(ids(&validate(&attrs)), vec!["gpu-platform-apple"]);
    }

    #[test]
    fn gpu_rules_need_a_platform() {
        let attrs = ProfileAttributes {
            gpu_renderer: Some("Apple M2".into()),
            ..bag()
        };
        assert!(validate(&attrs).is_empty());
    }

    #[test]
    fn ua_mismatch_is_an_error() {
        let attrs = ProfileAttributes {
            platform: Some(PlatformFamily::WindowsLike),
            user_agent: Some(
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0.0.0".into(),
            ),
            ..bag()
        };
        let findings = validate(&attrs);
        assert_eq!(ids(&findings), vec!["ua-platform-mismatch"]);
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn matching_ua_is_coherent() {
        let attrs = ProfileAttributes {
            platform: Some(PlatformFamily::MacLike),
            user_agent: Some(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36".into(),
            ),
            ..bag()
        };
        assert!(validate(&attrs).is_empty());
    }

    #[test]
    fn core_count_out_of_range_is_a_warning() {
        for cores in [1, 25, 128] {
            let attrs = ProfileAttributes {
                cores: Some(cores),
                ..bag()
            };
            let findings = validate(&attrs);
            assert_eq!(ids(&findings), vec!["hardware-unusual"], "cores={cores}");
            assert_eq!(findings[0].severity, Severity::Warning);
        }
    }

    #[test]
    fn two_gib_mac_is_a_warning() {
        let attrs = ProfileAttributes {
            platform: Some(PlatformFamily::MacLike),
            memory_gib: Some(2),
            ..bag()
        };
        assert_eq!(ids(&validate(&attrs)), vec!["hardware-unusual"]);
    }

    #[test]
    fn many_cores_little_memory_is_a_warning() {
        let attrs = ProfileAttributes {
            cores: Some(16),
            memory_gib: Some(4),
            ..bag()
        };
        assert_eq!(ids(&validate(&attrs)), vec!["hardware-unusual"]);
    }

    #[test]
    fn hardware_rule_reports_only_its_first_hit() {
        // 32 cores is both out of range and paired with low memory; one
        // finding, for the first condition.
        let attrs = ProfileAttributes {
            cores: Some(32),
            memory_gib: Some(2),
            ..bag()
        };
        let findings = validate(&attrs);
        assert_eq!(ids(&findings), vec!["hardware-unusual"]);
        assert!(findings[0].message.contains("32"));
    }

    #[test]
    fn low_dpr_mac_is_a_warning() {
        let attrs = ProfileAttributes {
            platform: Some(PlatformFamily::MacLike),
            pixel_ratio: Some(1.0),
            ..bag()
        };
        assert_eq!(ids(&validate(&attrs)), vec!["screen-unusual"]);
    }

    #[test]
    fn four_k_with_low_memory_is_a_warning() {
        let attrs = ProfileAttributes {
            screen_width: Some(3840),
            memory_gib: Some(4),
            ..bag()
        };
        assert_eq!(ids(&validate(&attrs)), vec!["screen-unusual"]);
    }

    #[test]
    fn touch_on_mac_is_a_warning() {
        let attrs = ProfileAttributes {
            platform: Some(PlatformFamily::MacLike),
            max_touch_points: Some(5),
            ..bag()
        };
        let findings = validate(&attrs);
        assert_eq!(ids(&findings), vec!["touch-mac"]);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn touch_on_windows_is_coherent() {
        let attrs = ProfileAttributes {
            platform: Some(PlatformFamily::WindowsLike),
            max_touch_points: Some(10),
            ..bag()
        };
        assert!(validate(&attrs).is_empty());
    }

    #[test]
    fn flagship_gpu_with_weak_specs_is_a_warning() {
        let attrs = ProfileAttributes {
            gpu_renderer: Some("NVIDIA GeForce RTX 4090".into()),
            cores: Some(4),
            memory_gib: Some(16),
            ..bag()
        };
        assert_eq!(ids(&validate(&attrs)), vec!["gpu-specs-mismatch"]);
    }

    #[test]
    fn integrated_gpu_on_a_workstation_is_a_warning() {
        let attrs = ProfileAttributes {
            gpu_renderer: Some("Intel(R) UHD Graphics 630".into()),
            cores: Some(16),
            memory_gib: Some(64),
            ..bag()
        };
        assert_eq!(ids(&validate(&attrs)), vec!["gpu-specs-mismatch-2"]);
    }

    #[test]
    fn integrated_gpu_on_a_laptop_is_coherent() {
        let attrs = ProfileAttributes {
            gpu_renderer: Some("Intel(R) UHD Graphics 630".into()),
            cores: Some(8),
            memory_gib: Some(16),
            ..bag()
        };
        assert!(validate(&attrs).is_empty());
    }

    #[test]
    fn us_english_in_asia_is_a_warning() {
        let attrs = ProfileAttributes {
            language: Some("en-US".into()),
            timezone: Some("Asia/Tokyo".into()),
            ..bag()
        };
        let findings = validate(&attrs);
        assert_eq!(ids(&findings), vec!["tz-language-mismatch"]);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn us_english_in_america_is_coherent() {
        let attrs = ProfileAttributes {
            language: Some("en-US".into()),
            timezone: Some("America/Chicago".into()),
            ..bag()
        };
        assert!(validate(&attrs).is_empty());
    }

    #[test]
    fn unlisted_language_never_mismatches() {
        let attrs = ProfileAttributes {
            language: Some("sv-SE".into()),
            timezone: Some("Asia/Tokyo".into()),
            ..bag()
        };
        assert!(validate(&attrs).is_empty());
    }

    #[test]
    fn findings_preserve_rule_declaration_order() {
        // One bag that trips an error rule and two warning rules at once.
        let attrs = ProfileAttributes {
            platform: Some(PlatformFamily::WindowsLike),
            gpu_renderer: Some("Apple M2".into()),
            cores: Some(1),
            language: Some("en-US".into()),
            timezone: Some("Europe/Paris".into()),
            ..bag()
        };
        assert_eq!(
            ids(&validate(&attrs)),
            vec!["gpu-platform-apple", "hardware-unusual", "tz-language-mismatch"]
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let attrs = ProfileAttributes {
            platform: Some(PlatformFamily::MacLike),
            max_touch_points: Some(5),
            ..bag()
        };
        assert_eq!(validate(&attrs), validate(&attrs));
    }
}
