//! Display derivation helpers
//!
//! Unified imports from the `casework::utils` namespace: avatar initials
//! and status badge tones.

pub use casework_utils::*;
