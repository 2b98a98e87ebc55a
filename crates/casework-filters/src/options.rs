//! Dropdown option derivation for filter panels.

use std::collections::HashSet;

use serde_json::Value;

use crate::engine::{Record, scalar_text};

/// The distinct rendered values of `field` across `records`, in order of
/// first appearance.
///
/// This is what a list view feeds its filter dropdowns from the data it
/// already holds. Missing, null, and empty values are skipped; array-valued
/// fields contribute each element.
///
/// # Examples
///
/// ```
/// use casework_filters::{Record, field_options};
/// use serde_json::json;
///
/// let records: Vec<Record> = [
///     json!({"status": "Active"}),
///     json!({"status": "Pending"}),
///     json!({"status": "Active"}),
///     json!({"name": "no status"}),
/// ]
/// .into_iter()
/// .filter_map(|row| match row {
///     serde_json::Value::Object(map) => Some(map),
///     _ => None,
/// })
/// .collect();
///
/// assert_eq!(field_options(&records, "status"), vec!["Active", "Pending"]);
/// ```
pub fn field_options(records: &[Record], field: &str) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut options = Vec::new();

	for record in records {
		match record.get(field) {
			None | Some(Value::Null) => {}
			Some(Value::Array(items)) => {
				for item in items {
					push_option(&mut options, &mut seen, scalar_text(item));
				}
			}
			Some(value) => push_option(&mut options, &mut seen, scalar_text(value)),
		}
	}

	options
}

fn push_option(options: &mut Vec<String>, seen: &mut HashSet<String>, text: String) {
	if !text.is_empty() && seen.insert(text.clone()) {
		options.push(text);
	}
}
