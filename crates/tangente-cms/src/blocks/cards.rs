//! Card-based block payloads
//!
//! The three text card flavours build on one another: a card with an image
//! is a text card plus `image`, and a card with a chip is a card with an
//! image plus an optional `chip`. The Rust types mirror that by flattening
//! the smaller card into the larger one, so the wire object stays flat.

use serde::{Deserialize, Serialize};
use tangente_image::Image;

/// Background colour of text cards and highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
	White,
	Green,
}

impl CardVariant {
	pub const NAMES: &'static [&'static str] = &["white", "green"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardText {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub variant: Option<CardVariant>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
}

impl CardText {
	pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			variant: None,
			title: Some(title.into()),
			text: Some(text.into()),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardTextWithImage {
	#[serde(flatten)]
	pub card: CardText,
	pub image: Option<Image>,
}

/// Small label shown on top of a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
	pub text: String,
	/// Free-form; renderers map unknown values to their neutral style
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub variant: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardTextWithImageAndChip {
	#[serde(flatten)]
	pub card: CardTextWithImage,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub chip: Option<Chip>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardsText {
	pub cards: Vec<CardText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardsTextWithImage {
	pub cards: Vec<CardTextWithImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardsTextWithImageAndChip {
	pub cards: Vec<CardTextWithImageAndChip>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteCard {
	pub quote: String,
	pub author: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub role: Option<String>,
	pub image: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteCards {
	pub cards: Vec<QuoteCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCard {
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub role: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub image: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCards {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	pub profiles: Vec<ProfileCard>,
}

/// Press article linking back to the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressCoverageCard {
	pub title: String,
	pub source: String,
	pub url: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub date: Option<String>,
	pub logo: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressCoverageCards {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	pub articles: Vec<PressCoverageCard>,
}
