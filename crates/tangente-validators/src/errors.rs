//! Violation types reported by shape checks

use std::fmt;
use std::ops::Deref;

use serde_json::Value;
use thiserror::Error;

use crate::path::FieldPath;

/// JSON type of a value, as named in violation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
	Null,
	Boolean,
	Number,
	String,
	Array,
	Object,
}

impl JsonKind {
	pub fn of(value: &Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(_) => Self::Boolean,
			Value::Number(_) => Self::Number,
			Value::String(_) => Self::String,
			Value::Array(_) => Self::Array,
			Value::Object(_) => Self::Object,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Boolean => "boolean",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

impl fmt::Display for JsonKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Coarse classification of a violation
///
/// - `UnknownDiscriminant`: the tag of a discriminated union matched no variant
/// - `Shape`: the value is present but structurally wrong
/// - `MissingOrNull`: a required value is absent, or `null` where not allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationClass {
	UnknownDiscriminant,
	Shape,
	MissingOrNull,
}

/// What went wrong at a given path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
	/// Discriminant of a tagged union is not a known literal
	#[error("unknown variant '{found}'")]
	UnknownVariant { found: String },

	#[error("expected {expected}, got {found}")]
	TypeMismatch { expected: String, found: JsonKind },

	#[error("expected one of {}, got '{found}'", quote_list(.allowed))]
	InvalidEnumValue {
		allowed: &'static [&'static str],
		found: String,
	},

	#[error("expected a tuple of {expected} elements, got {found}")]
	TupleLength { expected: usize, found: usize },

	#[error("unknown field")]
	UnknownField,

	#[error("required field is missing")]
	MissingField,

	#[error("null is not allowed here")]
	NullNotAllowed,

	/// Value already used by an earlier element of the same sequence
	#[error("duplicate value, first used at index {first_index}")]
	DuplicateValue { first_index: usize },

	/// Value is reserved and must be replaced before use
	#[error("reserved value '{value}' must be replaced")]
	ReservedValue { value: String },

	/// Structurally valid but rejected while building the typed value
	#[error("malformed value: {0}")]
	Malformed(String),
}

impl ViolationKind {
	pub fn class(&self) -> ViolationClass {
		match self {
			Self::UnknownVariant { .. } => ViolationClass::UnknownDiscriminant,
			Self::MissingField | Self::NullNotAllowed => ViolationClass::MissingOrNull,
			Self::TypeMismatch { .. }
			| Self::InvalidEnumValue { .. }
			| Self::TupleLength { .. }
			| Self::UnknownField
			| Self::DuplicateValue { .. }
			| Self::ReservedValue { .. }
			| Self::Malformed(_) => ViolationClass::Shape,
		}
	}

	/// Stable machine-readable code, for clients mapping errors to messages
	pub fn code(&self) -> &'static str {
		match self {
			Self::UnknownVariant { .. } => "unknown_variant",
			Self::TypeMismatch { .. } => "type_mismatch",
			Self::InvalidEnumValue { .. } => "invalid_enum_value",
			Self::TupleLength { .. } => "tuple_length",
			Self::UnknownField => "unknown_field",
			Self::MissingField => "missing_field",
			Self::NullNotAllowed => "null_not_allowed",
			Self::DuplicateValue { .. } => "duplicate_value",
			Self::ReservedValue { .. } => "reserved_value",
			Self::Malformed(_) => "malformed",
		}
	}
}

fn quote_list(items: &[&str]) -> String {
	items
		.iter()
		.map(|item| format!("'{}'", item))
		.collect::<Vec<_>>()
		.join(", ")
}

/// A single violation at a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
	pub path: FieldPath,
	pub kind: ViolationKind,
}

impl Violation {
	pub fn new(path: FieldPath, kind: ViolationKind) -> Self {
		Self { path, kind }
	}

	pub fn class(&self) -> ViolationClass {
		self.kind.class()
	}
}

impl fmt::Display for Violation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.path.is_root() {
			write!(f, "{}", self.kind)
		} else {
			write!(f, "{}: {}", self.path, self.kind)
		}
	}
}

impl std::error::Error for Violation {}

/// Every violation found by one check, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} violation(s): {}", .0.len(), summarize(.0))]
pub struct Violations(Vec<Violation>);

impl Violations {
	pub fn new(violations: Vec<Violation>) -> Self {
		Self(violations)
	}

	/// Violations reported at exactly `path`
	pub fn at<'a>(&'a self, path: &'a FieldPath) -> impl Iterator<Item = &'a Violation> + 'a {
		self.0.iter().filter(move |violation| &violation.path == path)
	}

	pub fn into_inner(self) -> Vec<Violation> {
		self.0
	}
}

impl Deref for Violations {
	type Target = [Violation];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl IntoIterator for Violations {
	type Item = Violation;
	type IntoIter = std::vec::IntoIter<Violation>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl From<Vec<Violation>> for Violations {
	fn from(violations: Vec<Violation>) -> Self {
		Self(violations)
	}
}

fn summarize(violations: &[Violation]) -> String {
	violations
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("; ")
}

/// Result type for shape validation
pub type ValidationResult<T> = Result<T, Violations>;
