//! Rewrite configuration.

use serde::Deserialize;

use crate::constants::DEFAULT_FACTORY;

/// Options controlling the rewrite.
///
/// Deserializes from a camelCase JSON object where every key is optional,
/// e.g. `{"factory": "React.createElement", "quotePropNames": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
	/// The callee of every factory call. Defaults to `h`.
	pub factory: String,
	/// Emit attribute keys as string literals instead of identifiers.
	pub quote_prop_names: bool,
	/// Emit lowercase (intrinsic) tag names as string literals instead of
	/// identifiers.
	pub quote_intrinsic: bool,
	/// Reserved. No rewrite behavior depends on it.
	pub keep_comments: bool,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			factory: DEFAULT_FACTORY.to_string(),
			quote_prop_names: true,
			quote_intrinsic: true,
			keep_comments: false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_keys_take_defaults() {
		let options: Options = serde_json::from_str(r#"{"quotePropNames": false}"#).unwrap();
		assert_eq!(
			options,
			Options {
				quote_prop_names: false,
				..Options::default()
			}
		);
		assert_eq!(options.factory, "h");
	}

	#[test]
	fn unknown_keys_are_rejected() {
		assert!(serde_json::from_str::<Options>(r#"{"pragma": "h"}"#).is_err());
	}
}
