//! Block type discriminant

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CmsError;

/// Declares [`BlockType`] from `Variant => "wire-name"` pairs, so the enum,
/// [`BlockType::ALL`] and [`BlockType::as_str`] cannot drift apart.
macro_rules! block_types {
	($($variant:ident => $name:literal,)+) => {
		/// Value of a block's `type` member
		///
		/// Every table keyed by block type (schemas, payload decoding, default
		/// shapes) matches on this enum exhaustively.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		pub enum BlockType {
			$(
				#[serde(rename = $name)]
				$variant,
			)+
		}

		impl BlockType {
			pub const ALL: [BlockType; [$($name),+].len()] = [$(Self::$variant),+];

			pub fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $name,)+
				}
			}
		}
	};
}

block_types! {
	Heading => "heading",
	Paragraph => "paragraph",
	List => "list",
	Quote => "quote",
	Equation => "equation",
	Table => "table",
	Image => "image",
	ImageAndText => "image-and-text",
	MosaicGallery => "mosaic-gallery",
	Video => "video",
	Audio => "audio",
	Iframe => "iframe",
	CardsText => "cards-text",
	CardsTextWithImage => "cards-text-with-image",
	CardsTextWithImageAndChip => "cards-text-with-image-and-chip",
	QuoteCards => "quote-cards",
	ProfileCards => "profile-cards",
	PressCoverageCards => "press-coverage-cards",
	PodcastCarousel => "podcast-carousel",
	Chronology => "chronology",
	FaqBlock => "faq-block",
	Highlight => "highlight",
	Analyze => "analyze",
	KeyFigures => "key-figures",
	CallToAction => "call-to-action",
	Documents => "documents",
	Alert => "alert",
	Auto => "auto",
	Separator => "separator",
	Summary => "summary",
	Inputs => "inputs",
	NewsletterSignup => "newsletter-signup",
	RelatedArticles => "related-articles",
	ClubTeamLeaders => "club-team-leaders",
	ClubMentors => "club-mentors",
	ClubDeals => "club-deals",
	ClubEvents => "club-events",
	ClubPerks => "club-perks",
	ClubTestimonials => "club-testimonials",
	ClubFaq => "club-faq",
}

impl BlockType {
	/// Marker blocks carry `data: null`; their content is derived server-side
	/// or purely presentational.
	pub fn is_marker(self) -> bool {
		matches!(
			self,
			Self::Separator
				| Self::Summary
				| Self::Inputs
				| Self::NewsletterSignup
				| Self::RelatedArticles
				| Self::ClubTeamLeaders
				| Self::ClubMentors
				| Self::ClubDeals
				| Self::ClubEvents
				| Self::ClubPerks
				| Self::ClubTestimonials
				| Self::ClubFaq
		)
	}

	/// Whether editors can insert this block themselves.
	///
	/// `inputs` is placed by the form builder only.
	pub fn is_insertable(self) -> bool {
		!matches!(self, Self::Inputs)
	}

	pub fn is_club(self) -> bool {
		self.as_str().starts_with("club-")
	}
}

impl fmt::Display for BlockType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for BlockType {
	type Err = CmsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.iter()
			.copied()
			.find(|kind| kind.as_str() == s)
			.ok_or_else(|| CmsError::UnknownBlockType(s.to_string()))
	}
}
