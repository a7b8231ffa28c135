//! Walking JSON values against shapes

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{JsonKind, ValidationResult, Violation, ViolationKind, Violations};
use crate::path::FieldPath;
use crate::shape::{ObjectShape, Presence, Shape};
use crate::Validator;

/// What to do with object members a record shape does not declare
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFieldPolicy {
	/// Report every undeclared member as [`ViolationKind::UnknownField`]
	#[default]
	Reject,
	/// Ignore undeclared members
	Allow,
}

/// Checks values against shapes, collecting every violation
///
/// The checker never stops early: siblings of a failing member are still
/// visited, and every element of an array is checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeChecker {
	unknown_fields: UnknownFieldPolicy,
}

impl ShapeChecker {
	pub fn new(unknown_fields: UnknownFieldPolicy) -> Self {
		Self { unknown_fields }
	}

	pub fn unknown_fields(&self) -> UnknownFieldPolicy {
		self.unknown_fields
	}

	/// Check `value` with paths relative to `value` itself
	pub fn check(&self, shape: &Shape, value: &Value) -> Vec<Violation> {
		let mut path = FieldPath::root();
		let mut violations = Vec::new();
		self.check_at(shape, value, &mut path, &mut violations);
		violations
	}

	/// Check `value`, reporting paths under `path`
	///
	/// `path` is left exactly as it was passed in.
	pub fn check_at(
		&self,
		shape: &Shape,
		value: &Value,
		path: &mut FieldPath,
		violations: &mut Vec<Violation>,
	) {
		match (shape, value) {
			(Shape::Any, _) | (Shape::Null, Value::Null) | (Shape::Nullable(_), Value::Null) => {}
			(Shape::Nullable(inner), _) => self.check_at(inner, value, path, violations),
			(_, Value::Null) => {
				violations.push(Violation::new(path.clone(), ViolationKind::NullNotAllowed));
			}
			(Shape::String, Value::String(_))
			| (Shape::Number, Value::Number(_))
			| (Shape::Boolean, Value::Bool(_)) => {}
			(Shape::OneOf(allowed), Value::String(found)) => {
				if !allowed.iter().any(|candidate| *candidate == found.as_str()) {
					violations.push(Violation::new(
						path.clone(),
						ViolationKind::InvalidEnumValue {
							allowed: *allowed,
							found: found.clone(),
						},
					));
				}
			}
			(Shape::Array(item), Value::Array(elements)) => {
				for (index, element) in elements.iter().enumerate() {
					path.push_index(index);
					self.check_at(item, element, path, violations);
					path.pop();
				}
			}
			(Shape::Tuple(items), Value::Array(elements)) => {
				if items.len() != elements.len() {
					violations.push(Violation::new(
						path.clone(),
						ViolationKind::TupleLength {
							expected: items.len(),
							found: elements.len(),
						},
					));
				}
				for (index, (item, element)) in items.iter().zip(elements).enumerate() {
					path.push_index(index);
					self.check_at(item, element, path, violations);
					path.pop();
				}
			}
			(Shape::Object(object), Value::Object(members)) => {
				self.check_object(object, members, path, violations);
			}
			(_, other) => violations.push(Violation::new(
				path.clone(),
				ViolationKind::TypeMismatch {
					expected: shape.describe(),
					found: JsonKind::of(other),
				},
			)),
		}
	}

	fn check_object(
		&self,
		object: &ObjectShape,
		members: &Map<String, Value>,
		path: &mut FieldPath,
		violations: &mut Vec<Violation>,
	) {
		for field in object.fields() {
			path.push_key(field.name);
			match (members.get(field.name), field.presence) {
				(Some(value), _) => self.check_at(&field.shape, value, path, violations),
				(None, Presence::Required) => {
					violations.push(Violation::new(path.clone(), ViolationKind::MissingField));
				}
				(None, Presence::Optional) => {}
			}
			path.pop();
		}

		if self.unknown_fields == UnknownFieldPolicy::Reject {
			for name in members.keys().filter(|name| !object.declares(name)) {
				path.push_key(name.as_str());
				violations.push(Violation::new(path.clone(), ViolationKind::UnknownField));
				path.pop();
			}
		}
	}
}

/// A shape bundled with a checker, usable as a [`Validator`]
#[derive(Debug, Clone)]
pub struct ShapeValidator {
	shape: Shape,
	checker: ShapeChecker,
}

impl ShapeValidator {
	pub fn new(shape: Shape) -> Self {
		Self {
			shape,
			checker: ShapeChecker::default(),
		}
	}

	pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
		self.checker = ShapeChecker::new(policy);
		self
	}

	pub fn shape(&self) -> &Shape {
		&self.shape
	}
}

impl Validator<Value> for ShapeValidator {
	fn validate(&self, value: &Value) -> ValidationResult<()> {
		let violations = self.checker.check(&self.shape, value);
		if violations.is_empty() {
			Ok(())
		} else {
			Err(Violations::new(violations))
		}
	}
}
