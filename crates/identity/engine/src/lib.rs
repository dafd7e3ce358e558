//! # cloak-identity-engine
//!
//! The Coherent Profile Engine: generates synthetic device identities and
//! validates arbitrary attribute bags for coherence.
//!
//! ## Components
//!
//! - **Catalogs** ([`catalog`], [`locale`]) — immutable per-family tables of
//!   mutually compatible GPU, hardware, screen, user-agent, and touch
//!   values, plus the language/timezone table.
//! - **Tier-constrained sampler** ([`sampler`]) — narrows ordered hardware
//!   and screen pools to the slice plausible for a drawn GPU's tier.
//! - **Generator** ([`generator`]) — assembles one complete profile, in a
//!   thread-rng, a seeded deterministic, and a pluggable-source variant.
//! - **Validator** ([`rules`]) — a fixed battery of independent rules that
//!   inspect a possibly partial attribute bag and emit graded findings.
//! - **Summary reducer** ([`summary`]) — folds findings into one verdict.
//!
//! ## Invariants
//!
//! - Every generated profile validates with zero error-severity findings,
//!   by construction: all values come from the same family's catalog.
//!   Warning-severity findings can legitimately appear on borderline
//!   tier-slice draws and are not a defect.
//! - Equal seed and equal explicit platform family produce bit-identical
//!   profiles, forever. The seeded sequence and the catalogs are stable.
//! - The engine is pure: no I/O, no shared mutable state, no retained
//!   references to caller data. Validation never fails; it only reports.

#![deny(unsafe_code)]

pub mod catalog;
pub mod generator;
pub mod locale;
pub mod rng;
pub mod rules;
pub mod sampler;
pub mod summary;

pub use generator::{generate, generate_seeded, generate_with};
pub use rng::{Lcg, RandomSource, ThreadSource};
pub use rules::validate;
pub use summary::summarize;
