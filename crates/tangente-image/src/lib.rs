//! # tangente-image
//!
//! Image reference embedded by CMS content.
//!
//! An [`Image`] points either at a remote file (`url`), at an inline payload
//! (`base64`, typically a freshly picked file not uploaded yet), or at
//! nothing at all: every member is nullable so editors can hold an empty
//! slot. The crate owns the JSON schema of that structure ([`image_shape`]);
//! block schemas embed it by reference instead of redefining it.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tangente_validators::{ObjectShape, Shape, ShapeValidator, Validator, Violations};
use thiserror::Error;

static IMAGE_SHAPE: Lazy<Shape> = Lazy::new(|| {
	Shape::object(
		ObjectShape::new()
			.nullable("id", Shape::String)
			.nullable("url", Shape::String)
			.nullable("base64", Shape::String)
			.nullable("originalFilename", Shape::String)
			.optional("resizedImages", Shape::Any),
	)
});

/// Schema of an image object
///
/// `id`, `url`, `base64` and `originalFilename` are required and nullable.
/// `resizedImages` is opaque: any value, or absent.
pub fn image_shape() -> Shape {
	IMAGE_SHAPE.clone()
}

/// Errors raised when reading an image from untyped JSON
#[derive(Debug, Error)]
pub enum ImageError {
	#[error("Invalid image: {0}")]
	Invalid(#[from] Violations),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Image reference
///
/// `resizedImages` is carried verbatim: `None` only when the member is
/// absent, `Some(Value::Null)` for an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
	pub id: Option<String>,
	pub url: Option<String>,
	pub base64: Option<String>,
	pub original_filename: Option<String>,
	#[serde(
		default,
		deserialize_with = "present",
		skip_serializing_if = "Option::is_none"
	)]
	pub resized_images: Option<Value>,
}

/// Reads a member that is present, `null` included
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
	D: Deserializer<'de>,
{
	Value::deserialize(deserializer).map(Some)
}

/// Where the bytes of an [`Image`] come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource<'a> {
	Remote(&'a str),
	Inline(&'a str),
	Empty,
}

impl Image {
	/// Image pointing at a remote file
	///
	/// # Examples
	///
	/// ```
	/// use tangente_image::{Image, ImageSource};
	///
	/// let image = Image::from_url("https://cdn.example.com/cover.jpg");
	/// assert_eq!(image.source(), ImageSource::Remote("https://cdn.example.com/cover.jpg"));
	/// assert!(image.id.is_none());
	/// ```
	pub fn from_url(url: impl Into<String>) -> Self {
		Self {
			url: Some(url.into()),
			..Self::default()
		}
	}

	/// Image carried inline, before upload
	pub fn from_base64(payload: impl Into<String>, original_filename: impl Into<String>) -> Self {
		Self {
			base64: Some(payload.into()),
			original_filename: Some(original_filename.into()),
			..Self::default()
		}
	}

	/// Validate untyped JSON against [`image_shape`] and read it
	pub fn from_json(value: &Value) -> Result<Self, ImageError> {
		ShapeValidator::new(image_shape()).validate(value)?;
		Ok(serde_json::from_value(value.clone())?)
	}

	/// A remote URL wins over an inline payload
	pub fn source(&self) -> ImageSource<'_> {
		match (self.url.as_deref(), self.base64.as_deref()) {
			(Some(url), _) if !url.is_empty() => ImageSource::Remote(url),
			(_, Some(payload)) if !payload.is_empty() => ImageSource::Inline(payload),
			_ => ImageSource::Empty,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.source() == ImageSource::Empty
	}

	/// Whether the image has been persisted by the media service
	pub fn is_stored(&self) -> bool {
		self.id.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(Image::from_url("https://x/y.png"), ImageSource::Remote("https://x/y.png"))]
	#[case(Image::from_base64("aGVsbG8=", "a.png"), ImageSource::Inline("aGVsbG8="))]
	#[case(Image::default(), ImageSource::Empty)]
	#[case(Image::from_url(""), ImageSource::Empty)]
	fn test_source(#[case] image: Image, #[case] expected: ImageSource<'static>) {
		assert_eq!(image.source(), expected);
	}

	#[test]
	fn test_url_wins_over_inline_payload() {
		let image = Image {
			url: Some("https://x/y.png".to_string()),
			base64: Some("aGVsbG8=".to_string()),
			..Image::default()
		};

		assert_eq!(image.source(), ImageSource::Remote("https://x/y.png"));
	}

	#[rstest]
	#[case(json!({"id": null, "url": null, "base64": null, "originalFilename": null}), None)]
	#[case(
		json!({"id": null, "url": null, "base64": null, "originalFilename": null, "resizedImages": null}),
		Some(Value::Null)
	)]
	#[case(
		json!({"id": null, "url": null, "base64": null, "originalFilename": null, "resizedImages": {"s": "u"}}),
		Some(json!({"s": "u"}))
	)]
	fn test_resized_images_keeps_null_apart_from_absent(
		#[case] value: Value,
		#[case] expected: Option<Value>,
	) {
		let image: Image = serde_json::from_value(value.clone()).unwrap();

		assert_eq!(image.resized_images, expected);
		assert_eq!(serde_json::to_value(&image).unwrap(), value);
	}

	#[test]
	fn test_serializes_with_camel_case_and_nulls() {
		let value = serde_json::to_value(Image::from_url("https://x/y.png")).unwrap();

		assert_eq!(
			value,
			json!({
				"id": null,
				"url": "https://x/y.png",
				"base64": null,
				"originalFilename": null,
			})
		);
	}
}
