//! The language / timezone coherence table.
//!
//! Hand-curated and deliberately non-exhaustive: each group pairs one
//! primary language with a negotiation list and the timezones that are
//! geographically plausible for it. Offsets are standard-time minutes
//! east of UTC; this is heuristic data, not a DST model.

use cloak_identity_types::{CatalogError, LocaleGroup, TimezoneOption};

static LOCALE_GROUPS: &[LocaleGroup] = &[
    LocaleGroup {
        language: "en-US",
        languages: &["en-US", "en"],
        timezones: &[
            TimezoneOption { id: "America/New_York", offset_minutes: -300 },
            TimezoneOption { id: "America/Chicago", offset_minutes: -360 },
            TimezoneOption { id: "America/Denver", offset_minutes: -420 },
            TimezoneOption { id: "America/Phoenix", offset_minutes: -420 },
            TimezoneOption { id: "America/Los_Angeles", offset_minutes: -480 },
        ],
    },
    LocaleGroup {
        language: "en-GB",
        languages: &["en-GB", "en"],
        timezones: &[TimezoneOption { id: "Europe/London", offset_minutes: 0 }],
    },
    LocaleGroup {
        language: "de-DE",
        languages: &["de-DE", "de", "en-US", "en"],
        timezones: &[
            TimezoneOption { id: "Europe/Berlin", offset_minutes: 60 },
            TimezoneOption { id: "Europe/Vienna", offset_minutes: 60 },
            TimezoneOption { id: "Europe/Zurich", offset_minutes: 60 },
        ],
    },
    LocaleGroup {
        language: "fr-FR",
        languages: &["fr-FR", "fr", "en-US", "en"],
        timezones: &[
            TimezoneOption { id: "Europe/Paris", offset_minutes: 60 },
            TimezoneOption { id: "Europe/Brussels", offset_minutes: 60 },
        ],
    },
    LocaleGroup {
        language: "es-ES",
        languages: &["es-ES", "es", "en-US", "en"],
        timezones: &[TimezoneOption { id: "Europe/Madrid", offset_minutes: 60 }],
    },
    LocaleGroup {
        language: "it-IT",
        languages: &["it-IT", "it", "en-US", "en"],
        timezones: &[TimezoneOption { id: "Europe/Rome", offset_minutes: 60 }],
    },
    LocaleGroup {
        language: "nl-NL",
        languages: &["nl-NL", "nl", "en-US", "en"],
        timezones: &[TimezoneOption { id: "Europe/Amsterdam", offset_minutes: 60 }],
    },
    LocaleGroup {
        language: "pl-PL",
        languages: &["pl-PL", "pl", "en-US", "en"],
        timezones: &[TimezoneOption { id: "Europe/Warsaw", offset_minutes: 60 }],
    },
    LocaleGroup {
        language: "pt-BR",
        languages: &["pt-BR", "pt", "en-US", "en"],
        timezones: &[
            TimezoneOption { id: "America/Sao_Paulo", offset_minutes: -180 },
            TimezoneOption { id: "America/Fortaleza", offset_minutes: -180 },
        ],
    },
    LocaleGroup {
        language: "ja-JP",
        languages: &["ja-JP", "ja", "en-US", "en"],
        timezones: &[TimezoneOption { id: "Asia/Tokyo", offset_minutes: 540 }],
    },
    LocaleGroup {
        language: "ko-KR",
        languages: &["ko-KR", "ko", "en-US", "en"],
        timezones: &[TimezoneOption { id: "Asia/Seoul", offset_minutes: 540 }],
    },
    LocaleGroup {
        language: "zh-CN",
        languages: &["zh-CN", "zh", "en-US", "en"],
        timezones: &[TimezoneOption { id: "Asia/Shanghai", offset_minutes: 480 }],
    },
    LocaleGroup {
        language: "ru-RU",
        languages: &["ru-RU", "ru", "en-US", "en"],
        timezones: &[TimezoneOption { id: "Europe/Moscow", offset_minutes: 180 }],
    },
];

/// All locale groups, in declaration order.
pub fn locale_groups() -> &'static [LocaleGroup] {
    LOCALE_GROUPS
}

/// Check the locale-table invariants the generator relies on.
pub fn verify() -> Result<(), CatalogError> {
    if LOCALE_GROUPS.is_empty() {
        return Err(CatalogError::EmptyLocaleTable);
    }
    for group in LOCALE_GROUPS {
        if group.timezones.is_empty() {
            return Err(CatalogError::EmptyTimezoneSet {
                language: group.language,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_passes_verification() {
        verify().unwrap();
    }

    #[test]
    fn negotiation_lists_start_with_the_primary_language() {
        for group in locale_groups() {
            assert_eq!(group.languages.first(), Some(&group.language));
        }
    }

    #[test]
    fn us_english_only_pairs_with_american_timezones() {
        let group = locale_groups()
            .iter()
            .find(|g| g.language == "en-US")
            .unwrap();
        for tz in group.timezones {
            assert!(tz.id.starts_with("America/"));
        }
    }

    #[test]
    fn offsets_match_the_zone_region() {
        for group in locale_groups() {
            for tz in group.timezones {
                if tz.id.starts_with("Asia/") {
                    assert!(tz.offset_minutes > 0, "{}", tz.id);
                }
                if tz.id.starts_with("America/") {
                    assert!(tz.offset_minutes < 0, "{}", tz.id);
                }
            }
        }
    }
}
