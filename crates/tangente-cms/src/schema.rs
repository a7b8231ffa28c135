//! Block schemas
//!
//! One [`Shape`] per block type, describing what its `data` accepts, and
//! the envelope every block shares. Shapes are built once and cached.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use tangente_image::image_shape;
use tangente_validators::{ObjectShape, Shape};

use crate::blocks::{
	AlertVariant, BlockType, ButtonVariant, CardVariant, ImageLayout, ImagePosition, ListKind,
};

static DATA_SHAPES: Lazy<BTreeMap<BlockType, Shape>> = Lazy::new(|| {
	BlockType::ALL
		.into_iter()
		.map(|kind| (kind, build_data_shape(kind)))
		.collect()
});

/// Schema of the `data` member for `kind`
pub fn data_shape(kind: BlockType) -> Shape {
	DATA_SHAPES
		.get(&kind)
		.cloned()
		.unwrap_or_else(|| build_data_shape(kind))
}

/// Schema of a whole block of type `kind`
pub fn block_shape(kind: BlockType) -> Shape {
	envelope_shape(data_shape(kind))
}

/// Block envelope around an arbitrary `data` schema
///
/// `type` is only checked to be a string here; dispatch on its value
/// happens before the envelope is checked.
pub fn envelope_shape(data: Shape) -> Shape {
	Shape::object(
		ObjectShape::new()
			.required("id", Shape::String)
			.required("type", Shape::String)
			.required("data", data)
			.optional("editMode", Shape::Boolean),
	)
}

fn image() -> Shape {
	image_shape().nullable()
}

fn card_text() -> ObjectShape {
	ObjectShape::new()
		.optional("variant", Shape::one_of(CardVariant::NAMES))
		.optional("title", Shape::String)
		.optional("text", Shape::String)
}

fn card_text_with_image() -> ObjectShape {
	card_text().nullable("image", image_shape())
}

fn card_text_with_image_and_chip() -> ObjectShape {
	let chip = ObjectShape::new()
		.required("text", Shape::String)
		.optional("variant", Shape::String);
	card_text_with_image().optional("chip", Shape::object(chip))
}

fn cards(card: ObjectShape) -> Shape {
	Shape::object(ObjectShape::new().required("cards", Shape::array_of(Shape::object(card))))
}

fn build_data_shape(kind: BlockType) -> Shape {
	match kind {
		BlockType::Heading => Shape::object(
			ObjectShape::new()
				.nullable("title", Shape::String)
				.nullable("level", Shape::Number)
				.nullable("caption", Shape::String),
		),
		BlockType::Paragraph => Shape::object(
			ObjectShape::new()
				.required("text", Shape::String)
				.optional("spoiler", Shape::Boolean),
		),
		BlockType::List => Shape::object(
			ObjectShape::new()
				.required("type", Shape::one_of(ListKind::NAMES))
				.optional("date", Shape::String)
				.required("content", Shape::array_of(Shape::String)),
		),
		BlockType::Quote => Shape::object(
			ObjectShape::new()
				.required("text", Shape::String)
				.nullable("author", Shape::String),
		),
		BlockType::Equation => Shape::object(
			ObjectShape::new()
				.required("latex", Shape::String)
				.optional("displayMode", Shape::Boolean),
		),
		BlockType::Table => Shape::object(
			ObjectShape::new().required("title", Shape::String).required(
				"content",
				Shape::array_of(Shape::tuple(vec![Shape::String, Shape::String])),
			),
		),
		BlockType::Image => Shape::object(
			ObjectShape::new()
				.required("type", Shape::one_of(ImageLayout::NAMES))
				.nullable("caption", Shape::String)
				.nullable("image", image_shape())
				.nullable("images", Shape::array_of(image_shape()))
				.nullable("withBorder", Shape::Boolean)
				.nullable("withBackground", Shape::Boolean)
				.nullable("stretched", Shape::Boolean),
		),
		BlockType::ImageAndText => Shape::object(
			ObjectShape::new()
				.nullable("title", Shape::String)
				.required("text", Shape::String)
				.required("image", image())
				.required("imagePosition", Shape::one_of(ImagePosition::NAMES)),
		),
		BlockType::MosaicGallery => Shape::object(
			ObjectShape::new()
				.nullable("title", Shape::String)
				.required("images", Shape::array_of(image_shape())),
		),
		BlockType::Video => Shape::object(
			ObjectShape::new()
				.required("url", Shape::String)
				.nullable("caption", Shape::String),
		),
		BlockType::Audio => Shape::object(
			ObjectShape::new()
				.nullable("title", Shape::String)
				.required("url", Shape::String)
				.nullable("caption", Shape::String),
		),
		BlockType::Iframe => Shape::object(
			ObjectShape::new()
				.required("url", Shape::String)
				.nullable("height", Shape::Number)
				.nullable("caption", Shape::String),
		),
		BlockType::CardsText => cards(card_text()),
		BlockType::CardsTextWithImage => cards(card_text_with_image()),
		BlockType::CardsTextWithImageAndChip => cards(card_text_with_image_and_chip()),
		BlockType::QuoteCards => cards(
			ObjectShape::new()
				.required("quote", Shape::String)
				.required("author", Shape::String)
				.optional("role", Shape::String)
				.required("image", image()),
		),
		BlockType::ProfileCards => {
			let profile = ObjectShape::new()
				.required("name", Shape::String)
				.optional("role", Shape::String)
				.optional("description", Shape::String)
				.required("image", image());
			Shape::object(
				ObjectShape::new()
					.optional("title", Shape::String)
					.required("profiles", Shape::array_of(Shape::object(profile))),
			)
		}
		BlockType::PressCoverageCards => {
			let article = ObjectShape::new()
				.required("title", Shape::String)
				.required("source", Shape::String)
				.required("url", Shape::String)
				.optional("date", Shape::String)
				.required("logo", image());
			Shape::object(
				ObjectShape::new()
					.optional("title", Shape::String)
					.required("articles", Shape::array_of(Shape::object(article))),
			)
		}
		BlockType::PodcastCarousel => {
			let podcast = ObjectShape::new()
				.required("title", Shape::String)
				.required("url", Shape::String)
				.optional("duration", Shape::String)
				.required("image", image());
			Shape::object(
				ObjectShape::new()
					.nullable("title", Shape::String)
					.required("podcasts", Shape::array_of(Shape::object(podcast))),
			)
		}
		BlockType::Chronology => {
			let element = ObjectShape::new()
				.required("date", Shape::String)
				.required("title", Shape::String)
				.optional("text", Shape::String)
				.required("image", image())
				.optional("imageCaption", Shape::String);
			Shape::object(
				ObjectShape::new()
					.nullable("title", Shape::String)
					.required("chronology", Shape::array_of(Shape::object(element))),
			)
		}
		BlockType::FaqBlock => {
			let element = ObjectShape::new()
				.required("question", Shape::String)
				.required("answer", Shape::String);
			Shape::object(
				ObjectShape::new()
					.nullable("title", Shape::String)
					.required("elements", Shape::array_of(Shape::object(element))),
			)
		}
		BlockType::Highlight => Shape::object(
			ObjectShape::new()
				.optional("title", Shape::String)
				.required("text", Shape::String)
				.optional("variant", Shape::one_of(CardVariant::NAMES)),
		),
		BlockType::Analyze => Shape::object(
			ObjectShape::new()
				.required("title", Shape::String)
				.required("text", Shape::String)
				.nullable("author", Shape::String)
				.required("image", image()),
		),
		BlockType::KeyFigures => {
			let figure = ObjectShape::new()
				.required("value", Shape::String)
				.required("label", Shape::String);
			Shape::object(
				ObjectShape::new().required("figures", Shape::array_of(Shape::object(figure))),
			)
		}
		BlockType::CallToAction => Shape::object(
			ObjectShape::new()
				.required("label", Shape::String)
				.required("url", Shape::String)
				.optional("variant", Shape::one_of(ButtonVariant::NAMES)),
		),
		BlockType::Documents => {
			let document = ObjectShape::new()
				.required("name", Shape::String)
				.required("url", Shape::String);
			Shape::object(
				ObjectShape::new()
					.optional("title", Shape::String)
					.required("documents", Shape::array_of(Shape::object(document))),
			)
		}
		BlockType::Alert => Shape::object(
			ObjectShape::new()
				.required("text", Shape::String)
				.required("variant", Shape::one_of(AlertVariant::NAMES)),
		),
		BlockType::Auto => Shape::object(
			ObjectShape::new()
				.required("source", Shape::String)
				.nullable("limit", Shape::Number),
		),
		BlockType::Separator
		| BlockType::Summary
		| BlockType::Inputs
		| BlockType::NewsletterSignup
		| BlockType::RelatedArticles
		| BlockType::ClubTeamLeaders
		| BlockType::ClubMentors
		| BlockType::ClubDeals
		| BlockType::ClubEvents
		| BlockType::ClubPerks
		| BlockType::ClubTestimonials
		| BlockType::ClubFaq => Shape::Null,
	}
}
