//! Sequenced payloads: chronologies and FAQs

use serde::{Deserialize, Serialize};
use tangente_image::Image;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChronologyElement {
	/// Free text, displayed as written ("Spring 2021" is valid)
	pub date: String,
	pub title: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
	pub image: Option<Image>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image_caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chronology {
	pub title: Option<String>,
	pub chronology: Vec<ChronologyElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqElement {
	pub question: String,
	pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqBlock {
	pub title: Option<String>,
	pub elements: Vec<FaqElement>,
}

impl FaqBlock {
	pub fn questions(&self) -> impl Iterator<Item = &str> {
		self.elements.iter().map(|element| element.question.as_str())
	}
}
