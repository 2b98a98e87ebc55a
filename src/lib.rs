//! # Casework
//!
//! List-filtering toolkit for the casework case-management admin backend.
//!
//! Admin list views (participants, users, audit logs) load their rows once
//! and narrow them in memory on every filter-panel change or search
//! keystroke. This facade crate bundles that logic:
//!
//! - `filters` — the record filtering engine, free-text search, filter-set
//!   ingestion, and dropdown option derivation
//! - `utils` — display derivation helpers (avatar initials, status badge
//!   tones)
//!
//! ## Feature Flags
//!
//! - `filters` (default) - record filtering engine and companions
//! - `utils` (default) - display derivation helpers
//! - `full` - everything
//!
//! ## Quick Example
//!
//! ```rust
//! use casework::{FilterSet, Record, filter_records, initials};
//! use serde_json::json;
//!
//! let mut rosa = Record::new();
//! rosa.insert("name".into(), json!("Rosa Marquez"));
//! rosa.insert("status".into(), json!("Active"));
//! rosa.insert("role".into(), json!("Supervisor"));
//!
//! let mut janet = Record::new();
//! janet.insert("name".into(), json!("Janet Doe"));
//! janet.insert("status".into(), json!("Pending"));
//! janet.insert("role".into(), json!("Participant"));
//!
//! let filters = FilterSet::new()
//!     .with("status", "active")
//!     .with("role", json!(["Admin", "Supervisor"]));
//!
//! let matched = filter_records(&[rosa, janet], &filters);
//! assert_eq!(matched.len(), 1);
//! assert_eq!(initials("Rosa Marquez"), "RM");
//! ```

// Module re-exports following the admin's namespace structure
#[cfg(feature = "filters")]
pub mod filters;
#[cfg(feature = "utils")]
pub mod utils;

// Flat re-exports for the common call sites
#[cfg(feature = "filters")]
pub use casework_filters::{
	FilterError, FilterResult, FilterSet, Record, SearchFilter, field_options, filter_records,
	matches_record,
};
#[cfg(feature = "utils")]
pub use casework_utils::{StatusTone, initials, tone_for_status};
