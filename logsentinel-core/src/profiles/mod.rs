// logsentinel-core/src/profiles/mod.rs
//! Built-in compliance profiles.
//!
//! This module contains the compliance profiles that ship with the library.
//! Add new profiles here (or in downstream crates) by implementing
//! [`ComplianceProfile`](crate::profile::ComplianceProfile); the engine
//! itself never needs to change.
//!
//! Available profiles:
//!
//! * `us_global`: default US and global patterns (payment cards, SSN,
//!   cloud credentials, JWT, key=value secrets, vendor tokens).
//!
//! License: MIT OR Apache-2.0

pub mod us_global;

pub use us_global::UsGlobalProfile;
