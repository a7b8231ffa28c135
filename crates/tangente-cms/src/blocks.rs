//! Block model
//!
//! A block is a tagged union: its `type` ([`BlockType`]) selects the shape
//! of its `data` payload ([`BlockBody`]). Page content is an ordered
//! sequence of blocks ([`CmsContent`]).
//!
//! ```
//! use tangente_cms::blocks::{BlockType, CmsBlock, Heading};
//!
//! let block = CmsBlock::new("intro", Heading {
//! 	title: Some("Welcome".to_string()),
//! 	level: Some(2.into()),
//! 	caption: None,
//! });
//!
//! assert_eq!(block.block_type(), BlockType::Heading);
//! assert_eq!(block.to_json().unwrap()["data"]["level"], 2);
//! ```

mod block;
mod cards;
mod content;
mod kind;
mod media;
mod text;
mod timeline;

pub use block::{BlockBody, CmsBlock, SENTINEL_ID};
pub use cards::{
	CardText, CardTextWithImage, CardTextWithImageAndChip, CardVariant, CardsText,
	CardsTextWithImage, CardsTextWithImageAndChip, Chip, PressCoverageCard, PressCoverageCards,
	ProfileCard, ProfileCards, QuoteCard, QuoteCards,
};
pub use content::CmsContent;
pub use kind::BlockType;
pub use media::{
	Audio, Auto, Iframe, ImageAndText, ImageBlock, ImageLayout, ImagePosition, MosaicGallery,
	Podcast, PodcastCarousel, Video,
};
pub use text::{
	Alert, AlertVariant, Analyze, ButtonVariant, CallToAction, Document, Documents, Equation,
	Heading, Highlight, KeyFigure, KeyFigures, List, ListKind, Paragraph, Quote, Table, TableRow,
};
pub use timeline::{Chronology, ChronologyElement, FaqBlock, FaqElement};
