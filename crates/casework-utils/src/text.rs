//! Text derivation helpers for avatars and name badges

/// Derive the avatar initials for a display name.
///
/// Whitespace runs are treated as single separators. One token yields one
/// initial; two or more yield the first and last tokens' initials with any
/// middle tokens ignored. Always uppercase, never fails.
///
/// # Examples
///
/// ```
/// use casework_utils::text::initials;
///
/// assert_eq!(initials(""), "");
/// assert_eq!(initials("   "), "");
/// assert_eq!(initials("Madonna"), "M");
/// assert_eq!(initials("Amol Patil"), "AP");
/// assert_eq!(initials("John Q Public"), "JP");
/// assert_eq!(initials("  janet   doe  "), "JD");
/// ```
pub fn initials(name: &str) -> String {
	let mut tokens = name.split_whitespace();
	let Some(first) = tokens.next() else {
		return String::new();
	};

	let mut result = String::new();
	if let Some(ch) = first.chars().next() {
		result.extend(ch.to_uppercase());
	}
	if let Some(last) = tokens.next_back()
		&& let Some(ch) = last.chars().next()
	{
		result.extend(ch.to_uppercase());
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", "")]
	#[case("   ", "")]
	#[case("Madonna", "M")]
	#[case("Amol Patil", "AP")]
	#[case("John Q Public", "JP")]
	#[case("  janet   doe  ", "JD")]
	#[case("rosa maria marquez lopez", "RL")]
	fn derives_first_and_last_initial(#[case] name: &str, #[case] expected: &str) {
		assert_eq!(initials(name), expected);
	}

	#[rstest]
	fn handles_non_ascii_names() {
		assert_eq!(initials("ælfred ømdal"), "ÆØ");
		assert_eq!(initials("ß"), "SS");
	}

	mod proptests {
		use super::*;
		use proptest::prelude::*;

		proptest! {
			#[test]
			fn prop_total_over_arbitrary_input(name in "\\PC*") {
				let derived = initials(&name);
				prop_assert_eq!(derived.is_empty(), name.split_whitespace().next().is_none());
			}

			#[test]
			fn prop_at_most_two_initials(name in "[A-Za-z ]{0,40}") {
				prop_assert!(initials(&name).chars().count() <= 2);
			}

			#[test]
			fn prop_uppercase_and_stable(name in "[A-Za-z ]{0,40}") {
				let derived = initials(&name);
				prop_assert_eq!(derived.clone(), derived.to_uppercase());
				prop_assert_eq!(derived, initials(&name));
			}
		}
	}
}
