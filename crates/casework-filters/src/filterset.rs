//! Active filter criteria for one list view.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::is_inert;
use crate::filter::{FilterError, FilterResult};

/// Query-parameter suffix marking a comma-separated OR set (`role__in=a,b`).
const IN_SUFFIX: &str = "__in";

/// The set of currently active filter criteria, one optional value per field.
///
/// Values follow the list-view conventions: `null`, `""`, and `[]` are inert
/// (no constraint), an array is an OR set, a string is a case-insensitive
/// match (exact on `status`, substring elsewhere), and any other scalar is a
/// strict equality test. Construction never fails; unrepresentable values
/// fall back to inert `null`.
///
/// # Examples
///
/// ```
/// use casework_filters::FilterSet;
/// use serde_json::json;
///
/// let filters = FilterSet::new()
///     .with("status", "Active")
///     .with("role", json!(["Admin", "Supervisor"]))
///     .with("search", "");
///
/// assert_eq!(filters.len(), 3);
/// assert_eq!(filters.active_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
	filters: HashMap<String, Value>,
}

impl FilterSet {
	/// Creates an empty filter set (matches every record).
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a filter for `field`, replacing any previous filter on it.
	pub fn with(mut self, field: impl Into<String>, value: impl Serialize) -> Self {
		self.set(field, value);
		self
	}

	/// In-place variant of [`with`](Self::with), for per-keystroke updates.
	pub fn set(&mut self, field: impl Into<String>, value: impl Serialize) {
		self.filters.insert(
			field.into(),
			serde_json::to_value(value).unwrap_or(Value::Null),
		);
	}

	/// The filter value for `field`, if one is present.
	pub fn get(&self, field: &str) -> Option<&Value> {
		self.filters.get(field)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.filters.iter()
	}

	pub fn len(&self) -> usize {
		self.filters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.filters.is_empty()
	}

	/// Number of filters that actually constrain records (non-inert values).
	pub fn active_count(&self) -> usize {
		self.filters.values().filter(|value| !is_inert(value)).count()
	}

	/// Builds a filter set from URL query parameters.
	///
	/// Each pair becomes a string filter. A key carrying the `__in` suffix
	/// becomes an array filter of its comma-separated values, the way list
	/// views serialize multi-select panels into URLs. Empty values become
	/// inert filters.
	///
	/// # Examples
	///
	/// ```
	/// use casework_filters::FilterSet;
	/// use serde_json::json;
	/// use std::collections::HashMap;
	///
	/// let mut params = HashMap::new();
	/// params.insert("status".to_string(), "Active".to_string());
	/// params.insert("role__in".to_string(), "Admin, Supervisor".to_string());
	///
	/// let filters = FilterSet::from_query_params(&params);
	/// assert_eq!(filters.get("status"), Some(&json!("Active")));
	/// assert_eq!(filters.get("role"), Some(&json!(["Admin", "Supervisor"])));
	/// ```
	pub fn from_query_params(params: &HashMap<String, String>) -> Self {
		let mut filters = Self::new();
		for (key, value) in params {
			if let Some(field) = key.strip_suffix(IN_SUFFIX) {
				let items: Vec<Value> = value
					.split(',')
					.map(str::trim)
					.filter(|item| !item.is_empty())
					.map(|item| Value::String(item.to_string()))
					.collect();
				filters.set(field, Value::Array(items));
			} else {
				filters.set(key, Value::String(value.clone()));
			}
		}
		filters
	}

	/// Builds a filter set from a JSON filter-panel payload.
	///
	/// Accepts a JSON object mapping field names to filter values; any other
	/// JSON type is rejected.
	pub fn from_json(payload: Value) -> FilterResult<Self> {
		match payload {
			Value::Object(map) => Ok(Self {
				filters: map.into_iter().collect(),
			}),
			other => Err(FilterError::InvalidPayload(format!(
				"expected a JSON object of filters, got: {other}"
			))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn with_replaces_existing_filter() {
		let filters = FilterSet::new()
			.with("status", "Active")
			.with("status", "Pending");

		assert_eq!(filters.len(), 1);
		assert_eq!(filters.get("status"), Some(&json!("Pending")));
	}

	#[rstest]
	fn query_params_split_in_suffix_into_or_set() {
		let mut params = HashMap::new();
		params.insert("role__in".to_string(), "Admin,,Supervisor, ".to_string());

		let filters = FilterSet::from_query_params(&params);
		assert_eq!(filters.get("role"), Some(&json!(["Admin", "Supervisor"])));
	}

	#[rstest]
	fn empty_query_param_is_inert() {
		let mut params = HashMap::new();
		params.insert("status".to_string(), String::new());
		params.insert("tags__in".to_string(), String::new());

		let filters = FilterSet::from_query_params(&params);
		assert_eq!(filters.len(), 2);
		assert_eq!(filters.active_count(), 0);
	}

	#[rstest]
	fn from_json_accepts_objects_only() {
		let filters = FilterSet::from_json(json!({"status": "Active"}));
		assert_eq!(filters.unwrap().get("status"), Some(&json!("Active")));

		assert!(FilterSet::from_json(json!(["status"])).is_err());
		assert!(FilterSet::from_json(json!("status")).is_err());
	}

	#[rstest]
	fn serde_round_trips_transparently() {
		let filters = FilterSet::new().with("role", json!(["Admin"]));

		let encoded = serde_json::to_value(&filters).unwrap();
		assert_eq!(encoded, json!({"role": ["Admin"]}));

		let decoded: FilterSet = serde_json::from_value(encoded).unwrap();
		assert_eq!(decoded, filters);
	}
}
