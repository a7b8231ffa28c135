//! Block schema validation
//!
//! Validation runs in two phases per block. The untyped JSON is first
//! walked against the block's [`Shape`], collecting every violation; only a
//! block that passes is then read into its typed [`BlockBody`]. A content
//! sequence additionally gets its id checks (uniqueness, leftover template
//! ids) once every element has been looked at.
//!
//! ```
//! use serde_json::json;
//! use tangente_cms::validation::validate_content;
//!
//! let errors = validate_content(&json!([
//! 	{"id": "1", "type": "heading", "data": {"title": "Hi", "level": 2, "caption": null}},
//! 	{"id": "2", "type": "paragraph", "data": {"text": 42}},
//! ]))
//! .unwrap_err();
//!
//! assert_eq!(errors.failed_indices(), vec![1]);
//! assert_eq!(
//! 	errors.violations()[0].to_string(),
//! 	"blocks[1].data.text: expected string, got number"
//! );
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tangente_validators::{
	FieldPath, JsonKind, Shape, ShapeChecker, Violation, ViolationClass, ViolationKind,
};
use thiserror::Error;

use crate::blocks::{BlockBody, BlockType, CmsBlock, CmsContent, SENTINEL_ID};
use crate::error::CmsResult;
use crate::schema::{block_shape, envelope_shape};
use crate::settings::{SentinelPolicy, ValidationSettings};

/// A violation attributed to one element of a block sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockViolation {
	/// Element index; `None` when the input is not a sequence at all
	pub index: Option<usize>,
	pub violation: Violation,
}

impl BlockViolation {
	pub fn new(index: Option<usize>, violation: Violation) -> Self {
		Self { index, violation }
	}

	/// Path inside the block, e.g. `data.content[3]`
	pub fn path(&self) -> &FieldPath {
		&self.violation.path
	}

	pub fn kind(&self) -> &ViolationKind {
		&self.violation.kind
	}

	pub fn class(&self) -> ViolationClass {
		self.violation.class()
	}

	/// Human-readable reason, without location
	pub fn reason(&self) -> String {
		self.violation.kind.to_string()
	}
}

impl fmt::Display for BlockViolation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.index {
			Some(index) => write!(f, "blocks[{}]", index)?,
			None => f.write_str("blocks")?,
		}
		if !self.violation.path.is_root() {
			write!(f, ".{}", self.violation.path)?;
		}
		write!(f, ": {}", self.violation.kind)
	}
}

/// Flat, serializable form of a [`BlockViolation`] for editor clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMessage {
	pub index: Option<usize>,
	pub path: String,
	pub code: &'static str,
	pub message: String,
}

/// Every violation found while validating blocks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} violation(s): {}", .violations.len(), summarize(.violations))]
pub struct ValidationErrors {
	violations: Vec<BlockViolation>,
}

fn summarize(violations: &[BlockViolation]) -> String {
	violations
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("; ")
}

impl ValidationErrors {
	pub fn new(violations: Vec<BlockViolation>) -> Self {
		Self { violations }
	}

	pub fn violations(&self) -> &[BlockViolation] {
		&self.violations
	}

	pub fn into_violations(self) -> Vec<BlockViolation> {
		self.violations
	}

	pub fn len(&self) -> usize {
		self.violations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.violations.is_empty()
	}

	/// Indices of the elements with at least one violation, ascending
	pub fn failed_indices(&self) -> Vec<usize> {
		self.violations
			.iter()
			.filter_map(|violation| violation.index)
			.collect::<BTreeSet<_>>()
			.into_iter()
			.collect()
	}

	pub fn for_index(&self, index: usize) -> impl Iterator<Item = &BlockViolation> {
		self.violations
			.iter()
			.filter(move |violation| violation.index == Some(index))
	}

	/// Whether element `index` was rejected for its `type`
	pub fn is_unknown_type(&self, index: usize) -> bool {
		self.for_index(index)
			.any(|violation| violation.class() == ViolationClass::UnknownDiscriminant)
	}

	pub fn field_messages(&self) -> Vec<FieldMessage> {
		self.violations
			.iter()
			.map(|violation| FieldMessage {
				index: violation.index,
				path: violation.path().to_string(),
				code: violation.kind().code(),
				message: violation.reason(),
			})
			.collect()
	}
}

/// Validates blocks and block sequences against their schemas
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockValidator {
	settings: ValidationSettings,
	checker: ShapeChecker,
}

impl BlockValidator {
	pub fn new(settings: ValidationSettings) -> Self {
		Self {
			settings,
			checker: ShapeChecker::new(settings.unknown_fields),
		}
	}

	pub fn settings(&self) -> &ValidationSettings {
		&self.settings
	}

	/// Validate a single block
	///
	/// Violations are reported at index 0. Id checks are not applied, so a
	/// template carrying the sentinel id passes.
	pub fn validate_block(&self, value: &Value) -> Result<CmsBlock, ValidationErrors> {
		self.check_element(value).map_err(|violations| {
			ValidationErrors::new(
				violations
					.into_iter()
					.map(|violation| BlockViolation::new(Some(0), violation))
					.collect(),
			)
		})
	}

	/// Validate a block sequence, including id checks
	pub fn validate_content(&self, value: &Value) -> Result<CmsContent, ValidationErrors> {
		let Some(elements) = value.as_array() else {
			let violation = Violation::new(
				FieldPath::root(),
				ViolationKind::TypeMismatch {
					expected: "array".to_string(),
					found: JsonKind::of(value),
				},
			);
			tracing::debug!(found = %JsonKind::of(value), "CMS content is not an array");
			return Err(ValidationErrors::new(vec![BlockViolation::new(None, violation)]));
		};

		let mut blocks = Vec::with_capacity(elements.len());
		let mut errors = Vec::new();
		let mut first_seen: HashMap<&str, usize> = HashMap::new();

		for (index, element) in elements.iter().enumerate() {
			let mut violations = match self.check_element(element) {
				Ok(block) => {
					blocks.push(block);
					Vec::new()
				}
				Err(violations) => violations,
			};

			if let Some(id) = element.get("id").and_then(Value::as_str) {
				violations.extend(self.check_id(id, index, &mut first_seen));
			}

			if !violations.is_empty() {
				let block_type = element
					.get("type")
					.and_then(Value::as_str)
					.unwrap_or_default();
				tracing::trace!(
					index,
					block_type,
					violations = violations.len(),
					"CMS block rejected"
				);
				errors.extend(
					violations
						.into_iter()
						.map(|violation| BlockViolation::new(Some(index), violation)),
				);
			}
		}

		tracing::debug!(
			blocks = elements.len(),
			violations = errors.len(),
			"validated CMS content"
		);

		if errors.is_empty() {
			Ok(CmsContent::from(blocks))
		} else {
			Err(ValidationErrors::new(errors))
		}
	}

	/// Parse a JSON document, then validate it as content
	pub fn validate_content_str(&self, json: &str) -> CmsResult<CmsContent> {
		let value: Value = serde_json::from_str(json)?;
		Ok(self.validate_content(&value)?)
	}

	/// Shape check then typed read of one element
	fn check_element(&self, value: &Value) -> Result<CmsBlock, Vec<Violation>> {
		let mut violations = Vec::new();

		let kind = match value.get("type").and_then(Value::as_str) {
			Some(name) => match name.parse::<BlockType>() {
				Ok(kind) => Some(kind),
				Err(_) => {
					violations.push(Violation::new(
						FieldPath::root().key("type"),
						ViolationKind::UnknownVariant {
							found: name.to_string(),
						},
					));
					None
				}
			},
			// Missing or non-string `type` is reported by the envelope
			None => None,
		};

		let shape = match kind {
			Some(kind) => block_shape(kind),
			None => envelope_shape(Shape::Any),
		};
		violations.extend(self.checker.check(&shape, value));

		match kind {
			Some(kind) if violations.is_empty() => build_block(kind, value).map_err(|error| {
				vec![Violation::new(
					FieldPath::root().key("data"),
					ViolationKind::Malformed(error.to_string()),
				)]
			}),
			_ => Err(violations),
		}
	}

	fn check_id<'a>(
		&self,
		id: &'a str,
		index: usize,
		first_seen: &mut HashMap<&'a str, usize>,
	) -> Vec<Violation> {
		let mut violations = Vec::new();
		let path = FieldPath::root().key("id");

		if self.settings.sentinel_ids == SentinelPolicy::Reject && id == SENTINEL_ID {
			violations.push(Violation::new(
				path.clone(),
				ViolationKind::ReservedValue {
					value: id.to_string(),
				},
			));
		}

		match first_seen.get(id) {
			Some(&first_index) if self.settings.require_unique_ids => {
				violations.push(Violation::new(
					path,
					ViolationKind::DuplicateValue { first_index },
				));
			}
			Some(_) => {}
			None => {
				first_seen.insert(id, index);
			}
		}

		violations
	}
}

fn build_block(kind: BlockType, value: &Value) -> Result<CmsBlock, serde_json::Error> {
	let id = value
		.get("id")
		.and_then(Value::as_str)
		.unwrap_or_default()
		.to_string();
	let data = value.get("data").cloned().unwrap_or(Value::Null);
	let edit_mode = value.get("editMode").and_then(Value::as_bool);

	Ok(CmsBlock {
		id,
		body: BlockBody::from_data(kind, data)?,
		edit_mode,
	})
}

/// [`BlockValidator::validate_block`] with default settings
pub fn validate_block(value: &Value) -> Result<CmsBlock, ValidationErrors> {
	BlockValidator::default().validate_block(value)
}

/// [`BlockValidator::validate_content`] with default settings
pub fn validate_content(value: &Value) -> Result<CmsContent, ValidationErrors> {
	BlockValidator::default().validate_content(value)
}

/// [`BlockValidator::validate_content_str`] with default settings
pub fn validate_content_str(json: &str) -> CmsResult<CmsContent> {
	BlockValidator::default().validate_content_str(json)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_root_violation_display() {
		let errors = validate_content(&json!({"blocks": []})).unwrap_err();

		assert_eq!(errors.len(), 1);
		assert_eq!(errors.violations()[0].index, None);
		assert_eq!(
			errors.violations()[0].to_string(),
			"blocks: expected array, got object"
		);
		assert!(errors.failed_indices().is_empty());
	}

	#[test]
	fn test_missing_type_is_an_envelope_violation() {
		let errors = validate_block(&json!({"id": "x", "data": null})).unwrap_err();

		assert_eq!(errors.len(), 1);
		assert_eq!(errors.violations()[0].path().to_string(), "type");
		assert_eq!(errors.violations()[0].kind(), &ViolationKind::MissingField);
		assert!(!errors.is_unknown_type(0));
	}

	#[test]
	fn test_non_object_element() {
		let errors = validate_content(&json!(["heading"])).unwrap_err();

		assert_eq!(errors.failed_indices(), vec![0]);
		assert_eq!(
			errors.violations()[0].to_string(),
			"blocks[0]: expected object, got string"
		);
	}

	#[test]
	fn test_field_messages_carry_codes() {
		let errors = validate_block(&json!({
			"id": "2",
			"type": "heading",
			"data": {"title": "Hi"}
		}))
		.unwrap_err();

		let messages = errors.field_messages();

		assert_eq!(messages.len(), 2);
		assert_eq!(messages[0].path, "data.level");
		assert_eq!(messages[0].code, "missing_field");
		assert_eq!(
			serde_json::to_value(&messages[1]).unwrap(),
			json!({
				"index": 0,
				"path": "data.caption",
				"code": "missing_field",
				"message": "required field is missing",
			})
		);
	}

	#[test]
	fn test_duplicate_id_names_first_index() {
		let errors = validate_content(&json!([
			{"id": "a", "type": "separator", "data": null},
			{"id": "b", "type": "separator", "data": null},
			{"id": "a", "type": "summary", "data": null},
		]))
		.unwrap_err();

		assert_eq!(errors.failed_indices(), vec![2]);
		assert_eq!(
			errors.violations()[0].kind(),
			&ViolationKind::DuplicateValue { first_index: 0 }
		);
		assert_eq!(errors.violations()[0].path().to_string(), "id");
	}
}
