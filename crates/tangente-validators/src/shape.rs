//! Declarative description of accepted JSON values

use std::fmt;

/// Accepted shape of a JSON value
///
/// Shapes are plain data: build them once (typically in a lazily initialized
/// static) and check any number of values against them with a
/// [`ShapeChecker`](crate::ShapeChecker).
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
	/// Any value, including `null`
	Any,
	/// Exactly `null`
	Null,
	String,
	/// Any JSON number, integer or float, unconstrained
	Number,
	Boolean,
	/// A string from a closed set
	OneOf(&'static [&'static str]),
	/// Homogeneous array; element order is preserved
	Array(Box<Shape>),
	/// Fixed-length array with one shape per position
	Tuple(Vec<Shape>),
	Object(ObjectShape),
	/// The inner shape, or `null`
	Nullable(Box<Shape>),
}

impl Shape {
	pub fn one_of(allowed: &'static [&'static str]) -> Self {
		Self::OneOf(allowed)
	}

	pub fn array_of(item: Shape) -> Self {
		Self::Array(Box::new(item))
	}

	pub fn tuple(items: Vec<Shape>) -> Self {
		Self::Tuple(items)
	}

	pub fn object(object: ObjectShape) -> Self {
		Self::Object(object)
	}

	/// Wrap `self` so that `null` is accepted as well
	///
	/// Wrapping an already nullable shape (or `Any`/`Null`) is a no-op.
	pub fn nullable(self) -> Self {
		if self.accepts_null() {
			self
		} else {
			Self::Nullable(Box::new(self))
		}
	}

	pub fn accepts_null(&self) -> bool {
		matches!(self, Self::Any | Self::Null | Self::Nullable(_))
	}

	/// Human-readable name used in "expected ..." messages
	pub fn describe(&self) -> String {
		match self {
			Self::Any => "any value".to_string(),
			Self::Null => "null".to_string(),
			Self::String | Self::OneOf(_) => "string".to_string(),
			Self::Number => "number".to_string(),
			Self::Boolean => "boolean".to_string(),
			Self::Array(_) | Self::Tuple(_) => "array".to_string(),
			Self::Object(_) => "object".to_string(),
			Self::Nullable(inner) => format!("{} or null", inner.describe()),
		}
	}
}

impl fmt::Display for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.describe())
	}
}

/// Whether a record member must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
	/// Key must be present. Whether `null` is accepted depends on the shape.
	Required,
	/// Key may be absent. When present, the value must match the shape.
	Optional,
}

/// One declared member of an [`ObjectShape`]
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
	pub name: &'static str,
	pub shape: Shape,
	pub presence: Presence,
}

/// A closed record: an ordered list of declared members
///
/// # Examples
///
/// ```
/// use tangente_validators::{ObjectShape, Presence, Shape};
///
/// let list = ObjectShape::new()
/// 	.required("type", Shape::one_of(&["ordered", "unordered"]))
/// 	.optional("date", Shape::String)
/// 	.required("content", Shape::array_of(Shape::String));
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.field("date").map(|f| f.presence), Some(Presence::Optional));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectShape {
	fields: Vec<FieldShape>,
}

impl ObjectShape {
	pub fn new() -> Self {
		Self::default()
	}

	/// Member that must be present and match `shape`
	pub fn required(self, name: &'static str, shape: Shape) -> Self {
		self.with_field(name, shape, Presence::Required)
	}

	/// Member that must be present, either matching `shape` or `null`
	pub fn nullable(self, name: &'static str, shape: Shape) -> Self {
		self.with_field(name, shape.nullable(), Presence::Required)
	}

	/// Member that may be absent; `null` is not accepted in its place
	pub fn optional(self, name: &'static str, shape: Shape) -> Self {
		self.with_field(name, shape, Presence::Optional)
	}

	/// Append every member of `other` that `self` does not declare yet
	pub fn extend(mut self, other: ObjectShape) -> Self {
		for field in other.fields {
			if self.field(field.name).is_none() {
				self.fields.push(field);
			}
		}
		self
	}

	fn with_field(mut self, name: &'static str, shape: Shape, presence: Presence) -> Self {
		match self.fields.iter_mut().find(|field| field.name == name) {
			Some(existing) => {
				existing.shape = shape;
				existing.presence = presence;
			}
			None => self.fields.push(FieldShape {
				name,
				shape,
				presence,
			}),
		}
		self
	}

	pub fn field(&self, name: &str) -> Option<&FieldShape> {
		self.fields.iter().find(|field| field.name == name)
	}

	pub fn fields(&self) -> &[FieldShape] {
		&self.fields
	}

	pub fn declares(&self, name: &str) -> bool {
		self.field(name).is_some()
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Shape::String, "string")]
	#[case(Shape::Number.nullable(), "number or null")]
	#[case(Shape::array_of(Shape::String).nullable(), "array or null")]
	#[case(Shape::one_of(&["a", "b"]), "string")]
	#[case(Shape::tuple(vec![Shape::String, Shape::String]), "array")]
	fn test_describe(#[case] shape: Shape, #[case] expected: &str) {
		assert_eq!(shape.describe(), expected);
	}

	#[test]
	fn test_nullable_is_idempotent() {
		let once = Shape::String.nullable();
		let twice = once.clone().nullable();

		assert_eq!(once, twice);
		assert_eq!(Shape::Any.nullable(), Shape::Any);
	}

	#[test]
	fn test_redeclaring_a_field_replaces_it_in_place() {
		// Arrange
		let base = ObjectShape::new()
			.optional("title", Shape::String)
			.required("text", Shape::String);

		// Act
		let shape = base.nullable("title", Shape::String);

		// Assert
		assert_eq!(shape.len(), 2);
		assert_eq!(shape.fields()[0].name, "title");
		assert_eq!(shape.fields()[0].presence, Presence::Required);
		assert!(shape.fields()[0].shape.accepts_null());
	}

	#[test]
	fn test_extend_keeps_existing_members() {
		// Arrange
		let card = ObjectShape::new()
			.optional("title", Shape::String)
			.optional("text", Shape::String);
		let with_image = ObjectShape::new().nullable("image", Shape::Any);

		// Act
		let shape = card.extend(with_image).extend(ObjectShape::new().required("title", Shape::Number));

		// Assert
		let names: Vec<_> = shape.fields().iter().map(|f| f.name).collect();
		assert_eq!(names, vec!["title", "text", "image"]);
		assert_eq!(shape.field("title").map(|f| &f.shape), Some(&Shape::String));
	}
}
