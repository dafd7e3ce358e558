//! Cloak Identity Domain Types
//!
//! This crate defines the domain types for coherent device identities —
//! bundles of browser/OS/GPU/hardware/locale attributes that together look
//! like a plausible real device rather than an obviously fabricated one.
//!
//! # Key Concepts
//!
//! - **Platform family**: a coarse OS class (`windows-like`, `mac-like`,
//!   `linux-like`) that anchors every other attribute choice.
//! - **Catalog**: per-family tables of mutually compatible attribute values.
//!   Hardware and screen pools are *ordered* low→high capability; the
//!   tier-constrained sampler relies on that ordering.
//! - **Coherent profile**: one complete, internally consistent attribute
//!   bundle produced by the generator.
//! - **Attribute bag**: the same fields with everything optional — a
//!   possibly user-edited input to the coherence validator.
//! - **Finding**: one graded diagnostic (`warning` or `error`) from the
//!   validator.
//!
//! # Architecture
//!
//! This is a pure types crate with no runtime dependencies. Profile and
//! finding types implement `Clone`, `Debug`, `Serialize`, `Deserialize`;
//! catalog descriptor types are `'static`-borrowing and serialize-only,
//! since catalogs are engine-owned constant data that is never read back.

#![deny(unsafe_code)]

mod catalog;
mod errors;
mod finding;
mod locale;
mod platform;
mod profile;

pub use catalog::*;
pub use errors::*;
pub use finding::*;
pub use locale::*;
pub use platform::*;
pub use profile::*;
