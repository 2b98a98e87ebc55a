//! Record filtering for admin list views
//!
//! Unified imports from the `casework::filters` namespace: the keyed
//! filtering engine, free-text search, filter-set ingestion, and dropdown
//! option derivation.

pub use casework_filters::*;
