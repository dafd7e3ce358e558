//! # cloak-identity-bridge
//!
//! Pure data-shape converters between the engine's profile/attribute-bag
//! representations and the external settings schema used by the settings
//! store and UI.
//!
//! The bridge performs no I/O and owns no storage: it reshapes a
//! [`cloak_identity_types::CoherentProfile`] into a [`SettingsFragment`]
//! with overlay semantics, and projects a settings bag back into a
//! [`cloak_identity_types::ProfileAttributes`] for validation, tolerating
//! missing groups throughout.

#![deny(unsafe_code)]

mod convert;
mod error;
mod settings;

pub use convert::{from_settings, to_settings_fragment};
pub use error::BridgeError;
pub use settings::{
    parse_settings, LocaleSettings, NavigatorSettings, ScreenSettings, SettingsFragment,
    WebglSettings,
};
