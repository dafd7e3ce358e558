use thiserror::Error;

use crate::platform::PlatformFamily;

/// Catalog invariant violations.
///
/// These are build-time defects in the engine's own constant tables, not
/// runtime conditions: the generator asserts on them, and `verify()`
/// surfaces them in tests and at CLI startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("empty {pool} pool in {family} catalog")]
    EmptyPool {
        family: PlatformFamily,
        pool: &'static str,
    },

    #[error("{pool} pool in {family} catalog is not ordered low-to-high at index {index}")]
    UnorderedPool {
        family: PlatformFamily,
        pool: &'static str,
        index: usize,
    },

    #[error("{family} catalog has no {tier} tier GPU")]
    MissingTier {
        family: PlatformFamily,
        tier: &'static str,
    },

    #[error("locale table is empty")]
    EmptyLocaleTable,

    #[error("locale group {language} has no timezone options")]
    EmptyTimezoneSet { language: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_pool() {
        let err = CatalogError::EmptyPool {
            family: PlatformFamily::MacLike,
            pool: "hardware",
        };
        assert_eq!(err.to_string(), "empty hardware pool in mac-like catalog");
    }
}
