//! Declarative JSON shape validation for Tangente
//!
//! This crate describes the JSON values a record accepts as a [`Shape`] tree
//! and checks arbitrary [`serde_json::Value`]s against it. Unlike a serde
//! derive, a check never stops at the first problem: every violation is
//! collected together with the [`FieldPath`] where it happened, so callers
//! can surface field-level feedback in one pass.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use tangente_validators::{ObjectShape, Shape, ShapeValidator, Validator};
//!
//! let heading = Shape::object(
//! 	ObjectShape::new()
//! 		.nullable("title", Shape::String)
//! 		.nullable("level", Shape::Number),
//! );
//! let validator = ShapeValidator::new(heading);
//!
//! assert!(validator.validate(&json!({"title": "Hi", "level": 2})).is_ok());
//!
//! let errors = validator.validate(&json!({"title": 3})).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].path.to_string(), "title");
//! assert_eq!(errors[1].path.to_string(), "level");
//! ```

pub mod checker;
pub mod errors;
pub mod path;
pub mod shape;

pub use checker::{ShapeChecker, ShapeValidator, UnknownFieldPolicy};
pub use errors::{JsonKind, ValidationResult, Violation, ViolationClass, ViolationKind, Violations};
pub use path::{FieldPath, Segment};
pub use shape::{FieldShape, ObjectShape, Presence, Shape};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::checker::{ShapeChecker, ShapeValidator, UnknownFieldPolicy};
	pub use crate::errors::{
		JsonKind, ValidationResult, Violation, ViolationClass, ViolationKind, Violations,
	};
	pub use crate::path::{FieldPath, Segment};
	pub use crate::shape::{FieldShape, ObjectShape, Presence, Shape};
	pub use crate::Validator;
}

/// Trait for validators
pub trait Validator<T: ?Sized> {
	fn validate(&self, value: &T) -> ValidationResult<()>;
}
