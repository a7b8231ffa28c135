//! Validation settings
//!
//! Settings are plain serde structs with a default for every field, so a
//! partial document only overrides what it names:
//!
//! ```
//! use tangente_cms::settings::{CmsSettings, SentinelPolicy};
//! use tangente_validators::UnknownFieldPolicy;
//!
//! let settings = CmsSettings::from_toml_str(
//! 	r#"
//! 	[validation]
//! 	unknown_fields = "allow"
//! 	"#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.validation.unknown_fields, UnknownFieldPolicy::Allow);
//! assert_eq!(settings.validation.sentinel_ids, SentinelPolicy::Reject);
//! assert!(settings.validation.require_unique_ids);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tangente_validators::UnknownFieldPolicy;

use crate::error::{CmsError, CmsResult};

/// Whether content may still carry the template id `"to_regenerate"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentinelPolicy {
	#[default]
	Reject,
	Allow,
}

/// Knobs of [`BlockValidator`](crate::validation::BlockValidator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSettings {
	/// Members not declared by a block schema
	#[serde(default)]
	pub unknown_fields: UnknownFieldPolicy,

	/// Applied by content validation only; single blocks never check it
	#[serde(default)]
	pub sentinel_ids: SentinelPolicy,

	#[serde(default = "default_require_unique_ids")]
	pub require_unique_ids: bool,
}

fn default_require_unique_ids() -> bool {
	true
}

impl Default for ValidationSettings {
	fn default() -> Self {
		Self::strict()
	}
}

impl ValidationSettings {
	/// Reject unknown members, sentinel ids and duplicate ids
	pub fn strict() -> Self {
		Self {
			unknown_fields: UnknownFieldPolicy::Reject,
			sentinel_ids: SentinelPolicy::Reject,
			require_unique_ids: true,
		}
	}

	/// Accept what editors have historically been able to save: unknown
	/// members are dropped, sentinel and duplicate ids pass.
	pub fn permissive() -> Self {
		Self {
			unknown_fields: UnknownFieldPolicy::Allow,
			sentinel_ids: SentinelPolicy::Allow,
			require_unique_ids: false,
		}
	}

	pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
		self.unknown_fields = policy;
		self
	}

	pub fn with_sentinel_policy(mut self, policy: SentinelPolicy) -> Self {
		self.sentinel_ids = policy;
		self
	}

	pub fn with_unique_ids(mut self, required: bool) -> Self {
		self.require_unique_ids = required;
		self
	}
}

/// Top-level settings of the CMS core
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmsSettings {
	#[serde(default)]
	pub validation: ValidationSettings,
}

impl CmsSettings {
	/// Parse settings from a TOML document
	pub fn from_toml_str(source: &str) -> CmsResult<Self> {
		toml::from_str(source).map_err(|error| {
			tracing::warn!(error = %error, "failed to parse CMS settings from TOML");
			CmsError::from(error)
		})
	}

	/// Read settings from an already parsed JSON value
	pub fn from_json_value(value: Value) -> CmsResult<Self> {
		serde_json::from_value(value).map_err(|error| {
			tracing::warn!(error = %error, "failed to read CMS settings from JSON");
			CmsError::from(error)
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[test]
	fn test_default_is_strict() {
		assert_eq!(ValidationSettings::default(), ValidationSettings::strict());
	}

	#[rstest]
	#[case("", ValidationSettings::strict())]
	#[case("[validation]\n", ValidationSettings::strict())]
	#[case(
		"[validation]\nsentinel_ids = \"allow\"\n",
		ValidationSettings::strict().with_sentinel_policy(SentinelPolicy::Allow)
	)]
	#[case(
		"[validation]\nunknown_fields = \"allow\"\nsentinel_ids = \"allow\"\nrequire_unique_ids = false\n",
		ValidationSettings::permissive()
	)]
	fn test_from_toml_str(#[case] source: &str, #[case] expected: ValidationSettings) {
		let settings = CmsSettings::from_toml_str(source).unwrap();

		assert_eq!(settings.validation, expected);
	}

	#[test]
	fn test_from_toml_str_rejects_unknown_policy() {
		let result = CmsSettings::from_toml_str("[validation]\nunknown_fields = \"ignore\"\n");

		assert!(matches!(result, Err(CmsError::Settings(_))));
	}

	#[test]
	fn test_from_json_value() {
		let settings =
			CmsSettings::from_json_value(json!({"validation": {"require_unique_ids": false}}))
				.unwrap();

		assert_eq!(
			settings.validation,
			ValidationSettings::strict().with_unique_ids(false)
		);
	}

	#[test]
	fn test_from_json_value_reports_type_errors() {
		let result = CmsSettings::from_json_value(json!({"validation": {"require_unique_ids": "no"}}));

		assert!(matches!(result, Err(CmsError::Json(_))));
	}
}
