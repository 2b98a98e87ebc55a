//! Free-text search across configured list-view columns.

use crate::engine::{Record, rendered};
use crate::filter::{FilterError, FilterResult};

/// Case-insensitive substring search across a configured set of record
/// fields, the engine behind a list view's search box.
///
/// A record matches when any configured field contains the term. A blank
/// term keeps every record. Unlike the keyed engine in
/// [`filter_records`](crate::filter_records), search never applies the
/// `status` exact-match rule; it is always a substring test.
///
/// # Examples
///
/// ```
/// use casework_filters::{Record, SearchFilter};
/// use serde_json::json;
///
/// let mut record = Record::new();
/// record.insert("name".into(), json!("Janet Doe"));
/// record.insert("email".into(), json!("janet@example.org"));
///
/// let search = SearchFilter::new().with_field("name").with_field("email");
/// assert!(search.matches(&record, "jane"));
/// assert!(!search.matches(&record, "amol"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
	fields: Vec<String>,
}

impl SearchFilter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a field to search in.
	pub fn with_field(mut self, field: impl Into<String>) -> Self {
		self.fields.push(field.into());
		self
	}

	/// True when any configured field of `record` contains `term`
	/// (case-insensitive). A blank term matches everything.
	pub fn matches(&self, record: &Record, term: &str) -> bool {
		let needle = term.trim().to_lowercase();
		if needle.is_empty() {
			return true;
		}
		self.fields
			.iter()
			.any(|field| rendered(record.get(field)).to_lowercase().contains(&needle))
	}

	/// Returns the records matching `term`, in their original order.
	///
	/// A blank term returns every record. Applying a non-blank term with no
	/// configured fields is a configuration error.
	pub fn apply(&self, records: &[Record], term: &str) -> FilterResult<Vec<Record>> {
		if term.trim().is_empty() {
			return Ok(records.to_vec());
		}
		if self.fields.is_empty() {
			return Err(FilterError::InvalidParameter(
				"No search fields configured".to_string(),
			));
		}

		let matched: Vec<Record> = records
			.iter()
			.filter(|record| self.matches(record, term))
			.cloned()
			.collect();

		tracing::debug!(
			total = records.len(),
			matched = matched.len(),
			fields = self.fields.len(),
			"Applied search"
		);

		Ok(matched)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::{Value, json};

	fn row(value: Value) -> Record {
		match value {
			Value::Object(map) => map,
			_ => Record::new(),
		}
	}

	#[rstest]
	fn searches_across_all_configured_fields() {
		let records = vec![
			row(json!({"name": "Janet Doe", "email": "janet@example.org"})),
			row(json!({"name": "Amol Patil", "email": "amol@example.org"})),
		];
		let search = SearchFilter::new().with_field("name").with_field("email");

		let matched = search.apply(&records, "patil").unwrap();
		assert_eq!(matched.len(), 1);
		assert_eq!(matched[0]["name"], "Amol Patil");

		let matched = search.apply(&records, "EXAMPLE.ORG").unwrap();
		assert_eq!(matched.len(), 2);
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	fn blank_term_keeps_every_record(#[case] term: &str) {
		let records = vec![row(json!({"name": "Janet Doe"}))];
		let search = SearchFilter::new().with_field("name");

		assert_eq!(search.apply(&records, term).unwrap(), records);
	}

	#[rstest]
	fn no_configured_fields_is_an_error() {
		let records = vec![row(json!({"name": "Janet Doe"}))];
		let search = SearchFilter::new();

		let result = search.apply(&records, "jane");
		assert!(matches!(result, Err(FilterError::InvalidParameter(_))));
	}

	#[rstest]
	fn missing_fields_simply_do_not_match() {
		let records = vec![row(json!({"name": "Janet Doe"}))];
		let search = SearchFilter::new().with_field("email");

		assert!(search.apply(&records, "janet").unwrap().is_empty());
	}
}
