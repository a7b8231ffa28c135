//! Image schema acceptance tests

use rstest::rstest;
use serde_json::{Value, json};
use tangente_image::{Image, ImageError, image_shape};
use tangente_validators::{ShapeChecker, ViolationKind};

#[rstest]
#[case(json!({"id": null, "url": null, "base64": null, "originalFilename": null}))]
#[case(json!({"id": "img-1", "url": "https://cdn/x.jpg", "base64": null, "originalFilename": "x.jpg"}))]
#[case(json!({"id": null, "url": null, "base64": "aGk=", "originalFilename": "x.png", "resizedImages": null}))]
#[case(json!({"id": "1", "url": "u", "base64": null, "originalFilename": null, "resizedImages": {"small": "u-s"}}))]
fn test_accepts_valid_images(#[case] value: Value) {
	// Act
	let violations = ShapeChecker::default().check(&image_shape(), &value);

	// Assert
	assert!(violations.is_empty(), "{:?}", violations);
}

#[rstest]
#[case(json!({"url": "https://cdn/x.jpg"}), 3)]
#[case(json!({"id": 1, "url": null, "base64": null, "originalFilename": null}), 1)]
#[case(json!({"id": null, "url": null, "base64": null, "originalFilename": null, "alt": ""}), 1)]
#[case(json!("https://cdn/x.jpg"), 1)]
fn test_rejects_invalid_images(#[case] value: Value, #[case] expected: usize) {
	// Act
	let violations = ShapeChecker::default().check(&image_shape(), &value);

	// Assert
	assert_eq!(violations.len(), expected, "{:?}", violations);
}

#[test]
fn test_missing_members_are_reported_by_name() {
	// Arrange
	let value = json!({"url": "https://cdn/x.jpg"});

	// Act
	let violations = ShapeChecker::default().check(&image_shape(), &value);

	// Assert
	let missing: Vec<_> = violations
		.iter()
		.filter(|v| v.kind == ViolationKind::MissingField)
		.map(|v| v.path.to_string())
		.collect();
	assert_eq!(missing, vec!["id", "base64", "originalFilename"]);
}

#[test]
fn test_from_json_reads_typed_image() {
	// Arrange
	let value = json!({
		"id": "img-1",
		"url": "https://cdn/x.jpg",
		"base64": null,
		"originalFilename": "x.jpg",
		"resizedImages": {"thumb": "https://cdn/x-thumb.jpg"}
	});

	// Act
	let image = Image::from_json(&value).unwrap();

	// Assert
	assert_eq!(image.id.as_deref(), Some("img-1"));
	assert_eq!(image.original_filename.as_deref(), Some("x.jpg"));
	assert!(image.is_stored());
	assert_eq!(serde_json::to_value(&image).unwrap(), value);
}

#[test]
fn test_from_json_reports_violations() {
	let result = Image::from_json(&json!({"id": null}));

	assert!(matches!(result, Err(ImageError::Invalid(violations)) if violations.len() == 3));
}
