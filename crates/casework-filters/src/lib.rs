//! Client-side record filtering for casework admin list views
//!
//! Admin list views (participants, users, audit logs) hold their rows in
//! memory and narrow them on every filter-panel change or search keystroke.
//! This crate is that narrowing logic, kept pure and synchronous: no I/O, no
//! shared state, no failure modes beyond "no match".
//!
//! - [`filter_records`]: the keyed engine — AND across fields, OR within an
//!   array filter, case-insensitive string matching (exact on `status`,
//!   substring elsewhere).
//! - [`SearchFilter`]: the search box — one term, substring-matched across
//!   configured columns.
//! - [`FilterSet`]: the active criteria, buildable fluently or ingested from
//!   query parameters / a JSON payload.
//! - [`field_options`]: dropdown options derived from loaded data.

// Keyed filtering engine
pub mod engine;

// Error seam for configuration/ingestion mistakes
pub mod filter;

// Active filter criteria
pub mod filterset;

// Dropdown option derivation
pub mod options;

// Free-text search across columns
pub mod search;

// Core exports
pub use engine::{Record, filter_records, matches_record};
pub use filter::{FilterError, FilterResult};
pub use filterset::FilterSet;

// Companion exports
pub use options::field_options;
pub use search::SearchFilter;
