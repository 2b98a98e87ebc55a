//! Display derivation helpers for casework admin views
//!
//! Small, pure helpers the admin front-end derives rendering data with:
//! avatar initials from display names and badge tones from status values.
//! Nothing here touches I/O or holds state.

pub mod badges;
pub mod text;

pub use badges::{StatusTone, tone_for_status};
pub use text::initials;
