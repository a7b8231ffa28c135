//! Typed blocks and their wire representation

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

use super::cards::{
	CardsText, CardsTextWithImage, CardsTextWithImageAndChip, PressCoverageCards, ProfileCards,
	QuoteCards,
};
use super::kind::BlockType;
use super::media::{
	Audio, Auto, Iframe, ImageAndText, ImageBlock, MosaicGallery, PodcastCarousel, Video,
};
use super::text::{
	Alert, Analyze, CallToAction, Documents, Equation, Heading, Highlight, KeyFigures, List,
	Paragraph, Quote, Table,
};
use super::timeline::{Chronology, FaqBlock};
use crate::validation;

/// Placeholder id carried by default-shape templates
///
/// Consumers replace it (see [`CmsBlock::regenerate_id`]) before the block
/// joins real content.
pub const SENTINEL_ID: &str = "to_regenerate";

/// Typed `data` payload of a block, one variant per [`BlockType`]
///
/// Marker blocks are unit variants and serialize their payload as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BlockBody {
	Heading(Heading),
	Paragraph(Paragraph),
	List(List),
	Quote(Quote),
	Equation(Equation),
	Table(Table),
	Image(ImageBlock),
	ImageAndText(ImageAndText),
	MosaicGallery(MosaicGallery),
	Video(Video),
	Audio(Audio),
	Iframe(Iframe),
	CardsText(CardsText),
	CardsTextWithImage(CardsTextWithImage),
	CardsTextWithImageAndChip(CardsTextWithImageAndChip),
	QuoteCards(QuoteCards),
	ProfileCards(ProfileCards),
	PressCoverageCards(PressCoverageCards),
	PodcastCarousel(PodcastCarousel),
	Chronology(Chronology),
	FaqBlock(FaqBlock),
	Highlight(Highlight),
	Analyze(Analyze),
	KeyFigures(KeyFigures),
	CallToAction(CallToAction),
	Documents(Documents),
	Alert(Alert),
	Auto(Auto),
	Separator,
	Summary,
	Inputs,
	NewsletterSignup,
	RelatedArticles,
	ClubTeamLeaders,
	ClubMentors,
	ClubDeals,
	ClubEvents,
	ClubPerks,
	ClubTestimonials,
	ClubFaq,
}

macro_rules! impl_from_payload {
	($($payload:ty => $variant:ident),+ $(,)?) => {
		$(
			impl From<$payload> for BlockBody {
				fn from(payload: $payload) -> Self {
					Self::$variant(payload)
				}
			}
		)+
	};
}

impl_from_payload! {
	Heading => Heading,
	Paragraph => Paragraph,
	List => List,
	Quote => Quote,
	Equation => Equation,
	Table => Table,
	ImageBlock => Image,
	ImageAndText => ImageAndText,
	MosaicGallery => MosaicGallery,
	Video => Video,
	Audio => Audio,
	Iframe => Iframe,
	CardsText => CardsText,
	CardsTextWithImage => CardsTextWithImage,
	CardsTextWithImageAndChip => CardsTextWithImageAndChip,
	QuoteCards => QuoteCards,
	ProfileCards => ProfileCards,
	PressCoverageCards => PressCoverageCards,
	PodcastCarousel => PodcastCarousel,
	Chronology => Chronology,
	FaqBlock => FaqBlock,
	Highlight => Highlight,
	Analyze => Analyze,
	KeyFigures => KeyFigures,
	CallToAction => CallToAction,
	Documents => Documents,
	Alert => Alert,
	Auto => Auto,
}

/// Read a marker payload, which must be exactly `null`
fn marker(data: Value, body: BlockBody) -> Result<BlockBody, serde_json::Error> {
	serde_json::from_value::<()>(data)?;
	Ok(body)
}

impl BlockBody {
	pub fn block_type(&self) -> BlockType {
		match self {
			Self::Heading(_) => BlockType::Heading,
			Self::Paragraph(_) => BlockType::Paragraph,
			Self::List(_) => BlockType::List,
			Self::Quote(_) => BlockType::Quote,
			Self::Equation(_) => BlockType::Equation,
			Self::Table(_) => BlockType::Table,
			Self::Image(_) => BlockType::Image,
			Self::ImageAndText(_) => BlockType::ImageAndText,
			Self::MosaicGallery(_) => BlockType::MosaicGallery,
			Self::Video(_) => BlockType::Video,
			Self::Audio(_) => BlockType::Audio,
			Self::Iframe(_) => BlockType::Iframe,
			Self::CardsText(_) => BlockType::CardsText,
			Self::CardsTextWithImage(_) => BlockType::CardsTextWithImage,
			Self::CardsTextWithImageAndChip(_) => BlockType::CardsTextWithImageAndChip,
			Self::QuoteCards(_) => BlockType::QuoteCards,
			Self::ProfileCards(_) => BlockType::ProfileCards,
			Self::PressCoverageCards(_) => BlockType::PressCoverageCards,
			Self::PodcastCarousel(_) => BlockType::PodcastCarousel,
			Self::Chronology(_) => BlockType::Chronology,
			Self::FaqBlock(_) => BlockType::FaqBlock,
			Self::Highlight(_) => BlockType::Highlight,
			Self::Analyze(_) => BlockType::Analyze,
			Self::KeyFigures(_) => BlockType::KeyFigures,
			Self::CallToAction(_) => BlockType::CallToAction,
			Self::Documents(_) => BlockType::Documents,
			Self::Alert(_) => BlockType::Alert,
			Self::Auto(_) => BlockType::Auto,
			Self::Separator => BlockType::Separator,
			Self::Summary => BlockType::Summary,
			Self::Inputs => BlockType::Inputs,
			Self::NewsletterSignup => BlockType::NewsletterSignup,
			Self::RelatedArticles => BlockType::RelatedArticles,
			Self::ClubTeamLeaders => BlockType::ClubTeamLeaders,
			Self::ClubMentors => BlockType::ClubMentors,
			Self::ClubDeals => BlockType::ClubDeals,
			Self::ClubEvents => BlockType::ClubEvents,
			Self::ClubPerks => BlockType::ClubPerks,
			Self::ClubTestimonials => BlockType::ClubTestimonials,
			Self::ClubFaq => BlockType::ClubFaq,
		}
	}

	/// Build the payload of `kind` from its `data` value
	///
	/// This performs no shape check of its own beyond what serde enforces;
	/// the validator runs the block schema before calling it.
	pub fn from_data(kind: BlockType, data: Value) -> Result<Self, serde_json::Error> {
		use serde_json::from_value;

		Ok(match kind {
			BlockType::Heading => Self::Heading(from_value(data)?),
			BlockType::Paragraph => Self::Paragraph(from_value(data)?),
			BlockType::List => Self::List(from_value(data)?),
			BlockType::Quote => Self::Quote(from_value(data)?),
			BlockType::Equation => Self::Equation(from_value(data)?),
			BlockType::Table => Self::Table(from_value(data)?),
			BlockType::Image => Self::Image(from_value(data)?),
			BlockType::ImageAndText => Self::ImageAndText(from_value(data)?),
			BlockType::MosaicGallery => Self::MosaicGallery(from_value(data)?),
			BlockType::Video => Self::Video(from_value(data)?),
			BlockType::Audio => Self::Audio(from_value(data)?),
			BlockType::Iframe => Self::Iframe(from_value(data)?),
			BlockType::CardsText => Self::CardsText(from_value(data)?),
			BlockType::CardsTextWithImage => Self::CardsTextWithImage(from_value(data)?),
			BlockType::CardsTextWithImageAndChip => {
				Self::CardsTextWithImageAndChip(from_value(data)?)
			}
			BlockType::QuoteCards => Self::QuoteCards(from_value(data)?),
			BlockType::ProfileCards => Self::ProfileCards(from_value(data)?),
			BlockType::PressCoverageCards => Self::PressCoverageCards(from_value(data)?),
			BlockType::PodcastCarousel => Self::PodcastCarousel(from_value(data)?),
			BlockType::Chronology => Self::Chronology(from_value(data)?),
			BlockType::FaqBlock => Self::FaqBlock(from_value(data)?),
			BlockType::Highlight => Self::Highlight(from_value(data)?),
			BlockType::Analyze => Self::Analyze(from_value(data)?),
			BlockType::KeyFigures => Self::KeyFigures(from_value(data)?),
			BlockType::CallToAction => Self::CallToAction(from_value(data)?),
			BlockType::Documents => Self::Documents(from_value(data)?),
			BlockType::Alert => Self::Alert(from_value(data)?),
			BlockType::Auto => Self::Auto(from_value(data)?),
			BlockType::Separator => marker(data, Self::Separator)?,
			BlockType::Summary => marker(data, Self::Summary)?,
			BlockType::Inputs => marker(data, Self::Inputs)?,
			BlockType::NewsletterSignup => marker(data, Self::NewsletterSignup)?,
			BlockType::RelatedArticles => marker(data, Self::RelatedArticles)?,
			BlockType::ClubTeamLeaders => marker(data, Self::ClubTeamLeaders)?,
			BlockType::ClubMentors => marker(data, Self::ClubMentors)?,
			BlockType::ClubDeals => marker(data, Self::ClubDeals)?,
			BlockType::ClubEvents => marker(data, Self::ClubEvents)?,
			BlockType::ClubPerks => marker(data, Self::ClubPerks)?,
			BlockType::ClubTestimonials => marker(data, Self::ClubTestimonials)?,
			BlockType::ClubFaq => marker(data, Self::ClubFaq)?,
		})
	}

	/// Payload as untyped JSON (`null` for markers)
	pub fn to_data(&self) -> Result<Value, serde_json::Error> {
		serde_json::to_value(self)
	}

	pub fn is_marker(&self) -> bool {
		self.block_type().is_marker()
	}
}

/// One block of CMS content
///
/// On the wire a block is `{"id", "type", "data"}` plus an optional
/// `editMode` flag. Deserializing runs the full block schema, so a
/// `CmsBlock` obtained through serde is always schema-valid.
#[derive(Debug, Clone, PartialEq)]
pub struct CmsBlock {
	pub id: String,
	pub body: BlockBody,
	/// Transient editor flag, emitted only when set
	pub edit_mode: Option<bool>,
}

impl CmsBlock {
	pub fn new(id: impl Into<String>, body: impl Into<BlockBody>) -> Self {
		Self {
			id: id.into(),
			body: body.into(),
			edit_mode: None,
		}
	}

	/// Marker block of `kind`, or `None` when `kind` carries a payload
	pub fn marker(id: impl Into<String>, kind: BlockType) -> Option<Self> {
		if !kind.is_marker() {
			return None;
		}
		let body = BlockBody::from_data(kind, Value::Null).ok()?;
		Some(Self::new(id, body))
	}

	pub fn with_edit_mode(mut self, edit_mode: bool) -> Self {
		self.edit_mode = Some(edit_mode);
		self
	}

	pub fn block_type(&self) -> BlockType {
		self.body.block_type()
	}

	pub fn has_sentinel_id(&self) -> bool {
		self.id == SENTINEL_ID
	}

	/// Replace the id with a fresh UUID v4 and return it
	pub fn regenerate_id(&mut self) -> &str {
		self.id = Uuid::new_v4().to_string();
		&self.id
	}

	pub fn to_json(&self) -> Result<Value, serde_json::Error> {
		serde_json::to_value(self)
	}
}

impl Serialize for CmsBlock {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let len = if self.edit_mode.is_some() { 4 } else { 3 };
		let mut state = serializer.serialize_struct("CmsBlock", len)?;
		state.serialize_field("id", &self.id)?;
		state.serialize_field("type", &self.block_type())?;
		state.serialize_field("data", &self.body)?;
		match self.edit_mode {
			Some(edit_mode) => state.serialize_field("editMode", &edit_mode)?,
			None => state.skip_field("editMode")?,
		}
		state.end()
	}
}

impl<'de> Deserialize<'de> for CmsBlock {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		validation::validate_block(&value).map_err(D::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn paragraph(text: &str) -> CmsBlock {
		CmsBlock::new(
			"p-1",
			Paragraph {
				text: text.to_string(),
				spoiler: None,
			},
		)
	}

	#[test]
	fn test_serializes_wire_object() {
		let value = paragraph("Hello").to_json().unwrap();

		assert_eq!(
			value,
			json!({"id": "p-1", "type": "paragraph", "data": {"text": "Hello"}})
		);
	}

	#[test]
	fn test_edit_mode_emitted_only_when_set() {
		let value = paragraph("Hello").with_edit_mode(true).to_json().unwrap();

		assert_eq!(value["editMode"], json!(true));
	}

	#[rstest]
	#[case(BlockType::Separator)]
	#[case(BlockType::Inputs)]
	#[case(BlockType::ClubFaq)]
	fn test_marker_serializes_null_data(#[case] kind: BlockType) {
		let block = CmsBlock::marker("m", kind).unwrap();

		let value = block.to_json().unwrap();

		assert_eq!(value, json!({"id": "m", "type": kind.as_str(), "data": null}));
	}

	#[test]
	fn test_marker_constructor_refuses_payload_types() {
		assert!(CmsBlock::marker("h", BlockType::Heading).is_none());
	}

	#[test]
	fn test_from_data_rejects_payload_on_marker() {
		let result = BlockBody::from_data(BlockType::Summary, json!({}));

		assert!(result.is_err());
	}

	#[test]
	fn test_block_type_matches_every_kind() {
		for kind in BlockType::ALL.into_iter().filter(|kind| kind.is_marker()) {
			let body = BlockBody::from_data(kind, Value::Null).unwrap();
			assert_eq!(body.block_type(), kind);
		}
	}

	#[test]
	fn test_regenerate_id_replaces_sentinel() {
		let mut block = CmsBlock::new(SENTINEL_ID, BlockBody::Separator);
		assert!(block.has_sentinel_id());

		let id = block.regenerate_id().to_string();

		assert!(!block.has_sentinel_id());
		assert!(Uuid::parse_str(&id).is_ok());
	}

	#[test]
	fn test_deserialize_runs_block_schema() {
		let result: Result<CmsBlock, _> = serde_json::from_value(json!({
			"id": "2",
			"type": "heading",
			"data": {"title": "Hi"}
		}));

		let message = result.unwrap_err().to_string();
		assert!(message.contains("data.level"), "{}", message);
	}
}
