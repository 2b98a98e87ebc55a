use thiserror::Error;

/// Errors raised at the configuration and ingestion seams of the toolkit.
///
/// Filter evaluation itself never fails: malformed or missing record fields
/// degrade to a non-match so one bad row cannot abort rendering of a list.
#[derive(Debug, Error)]
pub enum FilterError {
	#[error("Invalid filter parameter: {0}")]
	InvalidParameter(String),
	#[error("Invalid filter payload: {0}")]
	InvalidPayload(String),
}

pub type FilterResult<T> = Result<T, FilterError>;
