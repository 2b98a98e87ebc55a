//! Status badge tone derivation for list views and cards

use serde::{Deserialize, Serialize};

/// Visual tone of a status badge
///
/// Views map a record's status to one of these tones and leave the actual
/// colors to the theme layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
	/// Settled, healthy states (active, onboarded, completed)
	Positive,
	/// In-flight states awaiting someone's action (pending, invited)
	Caution,
	/// States needing intervention (suspended, rejected, overdue)
	Critical,
	/// Anything unrecognized
	#[default]
	Neutral,
}

/// Maps a status value to its badge tone, case-insensitively.
///
/// Unknown statuses are [`StatusTone::Neutral`]; the mapping is total so a
/// record with a bad status still renders.
///
/// # Examples
///
/// ```
/// use casework_utils::badges::{StatusTone, tone_for_status};
///
/// assert_eq!(tone_for_status("Onboarded"), StatusTone::Positive);
/// assert_eq!(tone_for_status("not onboarded"), StatusTone::Caution);
/// assert_eq!(tone_for_status("SUSPENDED"), StatusTone::Critical);
/// assert_eq!(tone_for_status("archived"), StatusTone::Neutral);
/// ```
pub fn tone_for_status(status: &str) -> StatusTone {
	match status.trim().to_lowercase().as_str() {
		"active" | "onboarded" | "completed" | "approved" => StatusTone::Positive,
		"pending" | "invited" | "in progress" | "not onboarded" => StatusTone::Caution,
		"suspended" | "rejected" | "overdue" | "inactive" => StatusTone::Critical,
		_ => StatusTone::Neutral,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("Active", StatusTone::Positive)]
	#[case("onboarded", StatusTone::Positive)]
	#[case("Not Onboarded", StatusTone::Caution)]
	#[case("PENDING", StatusTone::Caution)]
	#[case("  rejected  ", StatusTone::Critical)]
	#[case("", StatusTone::Neutral)]
	#[case("something else", StatusTone::Neutral)]
	fn maps_status_vocabulary(#[case] status: &str, #[case] expected: StatusTone) {
		assert_eq!(tone_for_status(status), expected);
	}

	#[rstest]
	fn tones_serialize_lowercase() {
		let encoded = serde_json::to_string(&StatusTone::Caution).unwrap();
		assert_eq!(encoded, "\"caution\"");
	}
}
