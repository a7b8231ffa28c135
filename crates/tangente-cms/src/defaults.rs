//! Default-shape registry
//!
//! Every block an editor can insert has a template: a schema-valid block
//! with placeholder text and media, carrying the sentinel id
//! [`SENTINEL_ID`]. Templates are built once; every lookup hands out an
//! independent copy.
//!
//! ```
//! use tangente_cms::blocks::{BlockType, SENTINEL_ID};
//! use tangente_cms::defaults::DefaultShapes;
//!
//! let mut block = DefaultShapes::get(BlockType::Quote).unwrap();
//! assert_eq!(block.id, SENTINEL_ID);
//!
//! block.regenerate_id();
//! assert_eq!(DefaultShapes::get(BlockType::Quote).unwrap().id, SENTINEL_ID);
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde_json::{Number, Value};
use tangente_image::Image;

use crate::blocks::{
	Alert, AlertVariant, Analyze, Audio, Auto, BlockBody, BlockType, ButtonVariant, CallToAction,
	CardText, CardTextWithImage, CardTextWithImageAndChip, CardVariant, CardsText,
	CardsTextWithImage, CardsTextWithImageAndChip, Chip, Chronology, ChronologyElement, CmsBlock,
	Document, Documents, Equation, FaqBlock, FaqElement, Heading, Highlight, Iframe, ImageAndText,
	ImageBlock, ImageLayout, ImagePosition, KeyFigure, KeyFigures, List, ListKind, MosaicGallery,
	Paragraph, Podcast, PodcastCarousel, PressCoverageCard, PressCoverageCards, ProfileCard,
	ProfileCards, Quote, QuoteCard, QuoteCards, SENTINEL_ID, Table, TableRow, Video,
};
use crate::error::{CmsError, CmsResult};

/// Image shown in templates until the editor picks a real one
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400";

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

static DEFAULT_SHAPES: Lazy<BTreeMap<BlockType, CmsBlock>> = Lazy::new(|| {
	BlockType::ALL
		.into_iter()
		.filter_map(|kind| default_body(kind).map(|body| (kind, CmsBlock::new(SENTINEL_ID, body))))
		.collect()
});

/// Lookup of default block templates
pub struct DefaultShapes;

impl DefaultShapes {
	/// Fresh copy of the template for `kind`, `None` for non-insertable types
	pub fn get(kind: BlockType) -> Option<CmsBlock> {
		DEFAULT_SHAPES.get(&kind).cloned()
	}

	/// Template for a block type given by its wire name
	pub fn get_by_name(name: &str) -> CmsResult<CmsBlock> {
		let kind: BlockType = name.parse()?;
		Self::get(kind).ok_or(CmsError::NoDefaultShape(kind))
	}

	/// Template for `kind` as untyped JSON
	pub fn get_json(kind: BlockType) -> CmsResult<Value> {
		let block = Self::get(kind).ok_or(CmsError::NoDefaultShape(kind))?;
		Ok(block.to_json()?)
	}

	/// Block types that have a template, in [`BlockType`] order
	pub fn block_types() -> Vec<BlockType> {
		DEFAULT_SHAPES.keys().copied().collect()
	}

	/// Copies of every template, in [`BlockType`] order
	pub fn iter() -> impl Iterator<Item = CmsBlock> {
		DEFAULT_SHAPES.values().cloned()
	}

	pub fn contains(kind: BlockType) -> bool {
		DEFAULT_SHAPES.contains_key(&kind)
	}
}

fn placeholder_image() -> Option<Image> {
	Some(Image::from_url(PLACEHOLDER_IMAGE_URL))
}

fn text(value: &str) -> String {
	value.to_string()
}

fn default_body(kind: BlockType) -> Option<BlockBody> {
	let body: BlockBody = match kind {
		BlockType::Heading => Heading {
			title: Some(text("Title")),
			level: Some(Number::from(2)),
			caption: None,
		}
		.into(),
		BlockType::Paragraph => Paragraph {
			text: text(LOREM),
			spoiler: None,
		}
		.into(),
		BlockType::List => List {
			kind: ListKind::Unordered,
			date: None,
			content: vec![text("First item"), text("Second item")],
		}
		.into(),
		BlockType::Quote => Quote {
			text: text(LOREM),
			author: Some(text("Author")),
		}
		.into(),
		BlockType::Equation => Equation {
			latex: text("E = mc^2"),
			display_mode: Some(true),
		}
		.into(),
		BlockType::Table => Table {
			title: text("Table"),
			content: vec![
				TableRow::new("Label", "Value"),
				TableRow::new("Label", "Value"),
			],
		}
		.into(),
		BlockType::Image => ImageBlock {
			layout: ImageLayout::Single,
			caption: None,
			image: placeholder_image(),
			images: None,
			with_border: Some(false),
			with_background: Some(false),
			stretched: Some(false),
		}
		.into(),
		BlockType::ImageAndText => ImageAndText {
			title: Some(text("Title")),
			text: text(LOREM),
			image: placeholder_image(),
			image_position: ImagePosition::Left,
		}
		.into(),
		BlockType::MosaicGallery => MosaicGallery {
			title: Some(text("Gallery")),
			images: vec![
				Image::from_url(PLACEHOLDER_IMAGE_URL),
				Image::from_url(PLACEHOLDER_IMAGE_URL),
				Image::from_url(PLACEHOLDER_IMAGE_URL),
			],
		}
		.into(),
		BlockType::Video => Video {
			url: text("https://www.youtube.com/embed/dQw4w9WgXcQ"),
			caption: None,
		}
		.into(),
		BlockType::Audio => Audio {
			title: Some(text("Audio")),
			url: text("https://example.com/audio.mp3"),
			caption: None,
		}
		.into(),
		BlockType::Iframe => Iframe {
			url: text("https://example.com"),
			height: Some(Number::from(400)),
			caption: None,
		}
		.into(),
		BlockType::CardsText => CardsText {
			cards: vec![CardText::new("Title", LOREM), CardText::new("Title", LOREM)],
		}
		.into(),
		BlockType::CardsTextWithImage => CardsTextWithImage {
			cards: vec![card_with_image(), card_with_image()],
		}
		.into(),
		BlockType::CardsTextWithImageAndChip => CardsTextWithImageAndChip {
			cards: vec![card_with_chip(), card_with_chip()],
		}
		.into(),
		BlockType::QuoteCards => QuoteCards {
			cards: vec![QuoteCard {
				quote: text(LOREM),
				author: text("Author"),
				role: Some(text("Role")),
				image: placeholder_image(),
			}],
		}
		.into(),
		BlockType::ProfileCards => ProfileCards {
			title: Some(text("Team")),
			profiles: vec![ProfileCard {
				name: text("Name"),
				role: Some(text("Role")),
				description: Some(text(LOREM)),
				image: placeholder_image(),
			}],
		}
		.into(),
		BlockType::PressCoverageCards => PressCoverageCards {
			title: Some(text("In the press")),
			articles: vec![PressCoverageCard {
				title: text("Article title"),
				source: text("Source"),
				url: text("https://example.com/article"),
				date: None,
				logo: placeholder_image(),
			}],
		}
		.into(),
		BlockType::PodcastCarousel => PodcastCarousel {
			title: Some(text("Podcasts")),
			podcasts: vec![Podcast {
				title: text("Episode"),
				url: text("https://example.com/podcast"),
				duration: None,
				image: placeholder_image(),
			}],
		}
		.into(),
		BlockType::Chronology => Chronology {
			title: Some(text("Chronology")),
			chronology: vec![ChronologyElement {
				date: text("2024"),
				title: text("Milestone"),
				text: Some(text(LOREM)),
				image: None,
				image_caption: None,
			}],
		}
		.into(),
		BlockType::FaqBlock => FaqBlock {
			title: Some(text("FAQ")),
			elements: vec![FaqElement {
				question: text("Question?"),
				answer: text(LOREM),
			}],
		}
		.into(),
		BlockType::Highlight => Highlight {
			title: Some(text("Highlight")),
			text: text(LOREM),
			variant: Some(CardVariant::Green),
		}
		.into(),
		BlockType::Analyze => Analyze {
			title: text("Our analysis"),
			text: text(LOREM),
			author: None,
			image: placeholder_image(),
		}
		.into(),
		BlockType::KeyFigures => KeyFigures {
			figures: vec![
				KeyFigure {
					value: text("100"),
					label: text("Label"),
				},
				KeyFigure {
					value: text("50%"),
					label: text("Label"),
				},
			],
		}
		.into(),
		BlockType::CallToAction => CallToAction {
			label: text("Learn more"),
			url: text("https://example.com"),
			variant: Some(ButtonVariant::Primary),
		}
		.into(),
		BlockType::Documents => Documents {
			title: Some(text("Documents")),
			documents: vec![Document {
				name: text("Document.pdf"),
				url: text("https://example.com/document.pdf"),
			}],
		}
		.into(),
		BlockType::Alert => Alert {
			text: text(LOREM),
			variant: AlertVariant::Info,
		}
		.into(),
		BlockType::Auto => Auto {
			source: text("latest"),
			limit: None,
		}
		.into(),
		BlockType::Separator => BlockBody::Separator,
		BlockType::Summary => BlockBody::Summary,
		BlockType::Inputs => return None,
		BlockType::NewsletterSignup => BlockBody::NewsletterSignup,
		BlockType::RelatedArticles => BlockBody::RelatedArticles,
		BlockType::ClubTeamLeaders => BlockBody::ClubTeamLeaders,
		BlockType::ClubMentors => BlockBody::ClubMentors,
		BlockType::ClubDeals => BlockBody::ClubDeals,
		BlockType::ClubEvents => BlockBody::ClubEvents,
		BlockType::ClubPerks => BlockBody::ClubPerks,
		BlockType::ClubTestimonials => BlockBody::ClubTestimonials,
		BlockType::ClubFaq => BlockBody::ClubFaq,
	};
	Some(body)
}

fn card_with_image() -> CardTextWithImage {
	CardTextWithImage {
		card: CardText::new("Title", LOREM),
		image: placeholder_image(),
	}
}

fn card_with_chip() -> CardTextWithImageAndChip {
	CardTextWithImageAndChip {
		card: card_with_image(),
		chip: Some(Chip {
			text: text("New"),
			variant: None,
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_every_insertable_type_has_a_template() {
		let expected: Vec<_> = BlockType::ALL
			.into_iter()
			.filter(|kind| kind.is_insertable())
			.collect();

		assert_eq!(DefaultShapes::block_types().len(), expected.len());
		for kind in expected {
			assert!(DefaultShapes::contains(kind), "{}", kind);
		}
	}

	#[test]
	fn test_template_type_matches_key() {
		for block in DefaultShapes::iter() {
			assert_eq!(
				DefaultShapes::get(block.block_type()).as_ref(),
				Some(&block)
			);
			assert!(block.has_sentinel_id());
		}
	}

	#[test]
	fn test_inputs_has_no_template() {
		assert!(DefaultShapes::get(BlockType::Inputs).is_none());
		assert!(matches!(
			DefaultShapes::get_by_name("inputs"),
			Err(CmsError::NoDefaultShape(BlockType::Inputs))
		));
	}
}
