use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The coarse platform family a spoofed identity claims to run on.
///
/// Every catalog is keyed by a family, and most coherence rules anchor on
/// it: an Apple GPU only makes sense on `mac-like`, a Direct3D backend only
/// on `windows-like`, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformFamily {
    /// Windows desktops and laptops
    WindowsLike,
    /// macOS machines
    MacLike,
    /// Linux desktops
    LinuxLike,
}

impl PlatformFamily {
    /// Every supported family, in catalog declaration order.
    pub const ALL: [PlatformFamily; 3] = [
        PlatformFamily::WindowsLike,
        PlatformFamily::MacLike,
        PlatformFamily::LinuxLike,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformFamily::WindowsLike => "windows-like",
            PlatformFamily::MacLike => "mac-like",
            PlatformFamily::LinuxLike => "linux-like",
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a platform label is not one of the known families.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown platform family: {0}")]
pub struct UnknownPlatformFamily(pub String);

impl FromStr for PlatformFamily {
    type Err = UnknownPlatformFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "windows-like" => Ok(PlatformFamily::WindowsLike),
            "mac-like" => Ok(PlatformFamily::MacLike),
            "linux-like" => Ok(PlatformFamily::LinuxLike),
            other => Err(UnknownPlatformFamily(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trip() {
        for family in PlatformFamily::ALL {
            assert_eq!(family.as_str().parse::<PlatformFamily>(), Ok(family));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "beos-like".parse::<PlatformFamily>().unwrap_err();
        assert!(err.to_string().contains("beos-like"));
    }

    #[test]
    fn serde_uses_kebab_case_labels() {
        let json = serde_json::to_string(&PlatformFamily::MacLike).unwrap();
        assert_eq!(json, "\"mac-like\"");
        let back: PlatformFamily = serde_json::from_str("\"windows-like\"").unwrap();
        assert_eq!(back, PlatformFamily::WindowsLike);
    }
}
