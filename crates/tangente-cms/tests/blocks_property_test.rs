//! Property-based tests for block validation

use proptest::prelude::*;
use serde_json::{Map, Value, json};
use tangente_cms::blocks::{BlockType, CardVariant, ImageLayout};
use tangente_cms::defaults::DefaultShapes;
use tangente_cms::prelude::*;
use tangente_validators::ViolationClass;

fn insertable_type() -> impl Strategy<Value = BlockType> {
	proptest::sample::select(DefaultShapes::block_types())
}

fn text() -> impl Strategy<Value = Value> {
	"[a-zA-Z0-9 ]{0,12}".prop_map(Value::from)
}

fn nullable<S>(inner: S) -> impl Strategy<Value = Value>
where
	S: Strategy<Value = Value> + 'static,
{
	prop_oneof![Just(Value::Null), inner]
}

fn number() -> impl Strategy<Value = Value> {
	prop_oneof![
		any::<i64>().prop_map(Value::from),
		proptest::num::f64::NORMAL.prop_map(Value::from),
	]
}

fn one_of(names: &'static [&'static str]) -> impl Strategy<Value = Value> {
	proptest::sample::select(names).prop_map(Value::from)
}

/// Object from required members plus optional ones that may be absent
fn object(required: Vec<(&str, Value)>, optional: Vec<(&str, Option<Value>)>) -> Value {
	let mut members = Map::new();
	for (key, value) in required {
		members.insert(key.to_string(), value);
	}
	for (key, value) in optional {
		if let Some(value) = value {
			members.insert(key.to_string(), value);
		}
	}
	Value::Object(members)
}

fn image() -> impl Strategy<Value = Value> {
	let resized = proptest::option::of(prop_oneof![
		Just(Value::Null),
		text().prop_map(|url| json!({"small": url})),
	]);
	(
		nullable(text()),
		nullable(text()),
		nullable(text()),
		nullable(text()),
		resized,
	)
		.prop_map(|(id, url, base64, original_filename, resized)| {
			object(
				vec![
					("id", id),
					("url", url),
					("base64", base64),
					("originalFilename", original_filename),
				],
				vec![("resizedImages", resized)],
			)
		})
}

fn heading() -> impl Strategy<Value = (BlockType, Value)> {
	(nullable(text()), nullable(number()), nullable(text())).prop_map(|(title, level, caption)| {
		(
			BlockType::Heading,
			json!({"title": title, "level": level, "caption": caption}),
		)
	})
}

fn image_block() -> impl Strategy<Value = (BlockType, Value)> {
	let flag = || nullable(any::<bool>().prop_map(Value::from));
	(
		one_of(ImageLayout::NAMES),
		nullable(text()),
		nullable(image()),
		nullable(proptest::collection::vec(image(), 0..3).prop_map(Value::from)),
		flag(),
		flag(),
		flag(),
	)
		.prop_map(|(layout, caption, image, images, border, background, stretched)| {
			(
				BlockType::Image,
				json!({
					"type": layout,
					"caption": caption,
					"image": image,
					"images": images,
					"withBorder": border,
					"withBackground": background,
					"stretched": stretched,
				}),
			)
		})
}

fn mosaic_gallery() -> impl Strategy<Value = (BlockType, Value)> {
	(nullable(text()), proptest::collection::vec(image(), 0..4)).prop_map(|(title, images)| {
		(
			BlockType::MosaicGallery,
			json!({"title": title, "images": images}),
		)
	})
}

fn chronology() -> impl Strategy<Value = (BlockType, Value)> {
	let element = (
		text(),
		text(),
		proptest::option::of(text()),
		nullable(image()),
		proptest::option::of(text()),
	)
		.prop_map(|(date, title, body, image, caption)| {
			object(
				vec![("date", date), ("title", title), ("image", image)],
				vec![("text", body), ("imageCaption", caption)],
			)
		});
	(nullable(text()), proptest::collection::vec(element, 0..4)).prop_map(|(title, elements)| {
		(
			BlockType::Chronology,
			json!({"title": title, "chronology": elements}),
		)
	})
}

fn chip_cards() -> impl Strategy<Value = (BlockType, Value)> {
	let chip = (text(), proptest::option::of(text())).prop_map(|(label, variant)| {
		object(vec![("text", label)], vec![("variant", variant)])
	});
	let card = (
		proptest::option::of(one_of(CardVariant::NAMES)),
		proptest::option::of(text()),
		proptest::option::of(text()),
		nullable(image()),
		proptest::option::of(chip),
	)
		.prop_map(|(variant, title, body, image, chip)| {
			object(
				vec![("image", image)],
				vec![
					("variant", variant),
					("title", title),
					("text", body),
					("chip", chip),
				],
			)
		});
	proptest::collection::vec(card, 0..4).prop_map(|cards| {
		(
			BlockType::CardsTextWithImageAndChip,
			json!({"cards": cards}),
		)
	})
}

/// Wire JSON of a valid sequence with varied nullable and optional members
fn varied_content() -> impl Strategy<Value = Value> {
	let block = (
		prop_oneof![
			heading(),
			image_block(),
			mosaic_gallery(),
			chronology(),
			chip_cards(),
		],
		proptest::option::of(any::<bool>()),
	);
	proptest::collection::vec(block, 0..6).prop_map(|blocks| {
		let elements = blocks
			.into_iter()
			.enumerate()
			.map(|(index, ((kind, data), edit_mode))| {
				object(
					vec![
						("id", Value::from(format!("block-{}", index))),
						("type", Value::from(kind.as_str())),
						("data", data),
					],
					vec![("editMode", edit_mode.map(Value::from))],
				)
			})
			.collect();
		Value::Array(elements)
	})
}

proptest! {
	#[test]
	fn prop_unknown_type_is_classified_regardless_of_data(
		name in "[a-z]{1,12}(-[a-z]{1,12})?",
		text in ".*",
	) {
		prop_assume!(name.parse::<BlockType>().is_err());

		// Arrange
		let value = json!([{"id": "x", "type": name, "data": {"text": text}}]);

		// Act
		let errors = validate_content(&value).unwrap_err();

		// Assert
		prop_assert_eq!(errors.len(), 1);
		prop_assert_eq!(errors.violations()[0].class(), ViolationClass::UnknownDiscriminant);
	}

	#[test]
	fn prop_valid_content_round_trips(
		kinds in proptest::collection::vec(insertable_type(), 0..12),
	) {
		// Arrange
		let content: CmsContent = kinds
			.into_iter()
			.filter_map(DefaultShapes::get)
			.enumerate()
			.map(|(index, mut block)| {
				block.id = format!("block-{}", index);
				block
			})
			.collect();

		// Act
		let validated = validate_content(&content.to_json().unwrap());

		// Assert
		prop_assert_eq!(validated.unwrap(), content);
	}

	#[test]
	fn prop_varied_content_round_trips_unchanged(wire in varied_content()) {
		// Act
		let content = validate_content(&wire).unwrap();
		let serialized = content.to_json().unwrap();

		// Assert
		prop_assert_eq!(&serialized, &wire);
		prop_assert_eq!(validate_content(&serialized).unwrap(), content);
	}

	#[test]
	fn prop_table_rows_other_than_pairs_fail(len in 0usize..6, cell in "[a-z]{0,8}") {
		// Arrange
		let row: Vec<String> = vec![cell; len];
		let value = json!({"id": "t", "type": "table", "data": {"title": "T", "content": [row]}});

		// Act
		let result = validate_block(&value);

		// Assert
		prop_assert_eq!(result.is_ok(), len == 2);
	}

	#[test]
	fn prop_paragraph_text_is_kept_verbatim(text in ".*") {
		// Arrange
		let value = json!({"id": "p", "type": "paragraph", "data": {"text": text}});

		// Act
		let block = validate_block(&value).unwrap();

		// Assert
		prop_assert_eq!(block.to_json().unwrap(), value);
	}

	#[test]
	fn prop_heading_level_accepts_any_number(level in proptest::num::f64::NORMAL) {
		// Arrange
		let value = json!({"id": "h", "type": "heading", "data": {"title": null, "level": level, "caption": null}});

		// Act
		let block = validate_block(&value).unwrap();

		// Assert
		prop_assert_eq!(block.to_json().unwrap()["data"]["level"].as_f64(), Some(level));
	}
}
