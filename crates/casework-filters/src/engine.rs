//! Record filtering engine for admin list views.
//!
//! Evaluates the active filter panel against an in-memory collection of
//! records and returns the matching subset. Records carry no fixed schema;
//! every comparison dispatches on the JSON value actually stored under the
//! filtered field.

use serde_json::Value;

use crate::filterset::FilterSet;

/// One row of list-view data: a flat mapping from field name to JSON value.
pub type Record = serde_json::Map<String, Value>;

/// Field name that switches string filters from substring to exact matching.
///
/// Status vocabularies contain values that are substrings of one another
/// ("Onboarded" / "Not Onboarded"), so this field compares whole values.
const STATUS_FIELD: &str = "status";

/// Returns the records satisfying every active filter, in their original
/// order. Never mutates its inputs.
///
/// String filters compare case-insensitively: exact on the `status` field,
/// substring everywhere else. Array filters match when the record's value is
/// a member of the set. Inert filter values (null, `""`, `[]`) match every
/// record.
///
/// # Examples
///
/// ```
/// use casework_filters::{FilterSet, Record, filter_records};
/// use serde_json::json;
///
/// let mut amol = Record::new();
/// amol.insert("name".into(), json!("Amol Patil"));
/// amol.insert("status".into(), json!("Onboarded"));
///
/// let mut janet = Record::new();
/// janet.insert("name".into(), json!("Janet Doe"));
/// janet.insert("status".into(), json!("Not Onboarded"));
///
/// let filters = FilterSet::new().with("status", "onboarded");
/// let matched = filter_records(&[amol, janet], &filters);
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0]["name"], "Amol Patil");
/// ```
pub fn filter_records(records: &[Record], filters: &FilterSet) -> Vec<Record> {
	let matched: Vec<Record> = records
		.iter()
		.filter(|record| matches_record(record, filters))
		.cloned()
		.collect();

	tracing::debug!(
		total = records.len(),
		matched = matched.len(),
		active_filters = filters.active_count(),
		"Filtered records"
	);

	matched
}

/// Evaluates every active filter against a single record.
///
/// Filters combine with AND across fields; an array-valued filter is an OR
/// set within its field.
pub fn matches_record(record: &Record, filters: &FilterSet) -> bool {
	filters
		.iter()
		.all(|(field, filter)| matches_field(record.get(field), filter, field))
}

/// True when a filter value places no constraint on records.
pub(crate) fn is_inert(filter: &Value) -> bool {
	match filter {
		Value::Null => true,
		Value::String(text) => text.is_empty(),
		Value::Array(items) => items.is_empty(),
		_ => false,
	}
}

fn matches_field(field_value: Option<&Value>, filter: &Value, field: &str) -> bool {
	if is_inert(filter) {
		return true;
	}

	match filter {
		Value::Array(wanted) => matches_any(field_value, wanted),
		Value::String(text) => {
			let haystack = rendered(field_value).to_lowercase();
			let needle = text.to_lowercase();
			if field == STATUS_FIELD {
				haystack == needle
			} else {
				haystack.contains(&needle)
			}
		}
		scalar => field_value.is_some_and(|value| value == scalar),
	}
}

/// OR-set membership: lowercased string comparison when the record holds a
/// string, raw value equality otherwise (covers numeric and boolean sets).
fn matches_any(field_value: Option<&Value>, wanted: &[Value]) -> bool {
	match field_value {
		Some(Value::String(have)) => {
			let have = have.to_lowercase();
			wanted
				.iter()
				.any(|entry| scalar_text(entry).to_lowercase() == have)
		}
		Some(value) => wanted.iter().any(|entry| entry == value),
		None => false,
	}
}

/// Renders a field value the way the admin UI displays it: strings verbatim,
/// numbers and booleans via `to_string`, arrays comma-joined. Missing and
/// null fields render empty, so non-blank filters fail to match them rather
/// than erroring.
pub(crate) fn rendered(field_value: Option<&Value>) -> String {
	match field_value {
		None | Some(Value::Null) => String::new(),
		Some(value) => scalar_text(value),
	}
}

pub(crate) fn scalar_text(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		Value::Number(number) => number.to_string(),
		Value::Bool(flag) => flag.to_string(),
		Value::Array(items) => items
			.iter()
			.map(scalar_text)
			.collect::<Vec<_>>()
			.join(","),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}
