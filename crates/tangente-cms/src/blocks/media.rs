//! Media block payloads: images, embeds, audio and server-fed listings

use serde::{Deserialize, Serialize};
use serde_json::Number;
use tangente_image::Image;

/// How an image block lays out its pictures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageLayout {
	/// One picture, read from `image`
	Single,
	/// Several pictures, read from `images`
	Carousel,
	Gallery,
}

impl ImageLayout {
	pub const NAMES: &'static [&'static str] = &["single", "carousel", "gallery"];
}

/// Payload of the `image` block
///
/// Both `image` and `images` are always present; which one a renderer
/// reads depends on [`ImageLayout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
	#[serde(rename = "type")]
	pub layout: ImageLayout,
	pub caption: Option<String>,
	pub image: Option<Image>,
	pub images: Option<Vec<Image>>,
	pub with_border: Option<bool>,
	pub with_background: Option<bool>,
	pub stretched: Option<bool>,
}

impl ImageBlock {
	/// Pictures the block displays, in order
	pub fn pictures(&self) -> Vec<&Image> {
		match self.layout {
			ImageLayout::Single => self.image.iter().collect(),
			ImageLayout::Carousel | ImageLayout::Gallery => {
				self.images.iter().flatten().collect()
			}
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
	Left,
	Right,
}

impl ImagePosition {
	pub const NAMES: &'static [&'static str] = &["left", "right"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAndText {
	pub title: Option<String>,
	pub text: String,
	pub image: Option<Image>,
	pub image_position: ImagePosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MosaicGallery {
	pub title: Option<String>,
	pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
	pub url: String,
	pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audio {
	pub title: Option<String>,
	pub url: String,
	pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Iframe {
	pub url: String,
	/// Pixel height; `None` lets the renderer pick one
	pub height: Option<Number>,
	pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Podcast {
	pub title: String,
	pub url: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub duration: Option<String>,
	pub image: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodcastCarousel {
	pub title: Option<String>,
	pub podcasts: Vec<Podcast>,
}

/// Listing filled in by the server at render time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auto {
	/// Name of the feed to pull entries from
	pub source: String,
	pub limit: Option<Number>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn image_block(layout: ImageLayout) -> ImageBlock {
		ImageBlock {
			layout,
			caption: None,
			image: Some(Image::from_url("https://x/single.png")),
			images: Some(vec![
				Image::from_url("https://x/1.png"),
				Image::from_url("https://x/2.png"),
			]),
			with_border: None,
			with_background: None,
			stretched: None,
		}
	}

	#[rstest]
	#[case(ImageLayout::Single, 1)]
	#[case(ImageLayout::Carousel, 2)]
	#[case(ImageLayout::Gallery, 2)]
	fn test_pictures_follow_layout(#[case] layout: ImageLayout, #[case] expected: usize) {
		assert_eq!(image_block(layout).pictures().len(), expected);
	}

	#[test]
	fn test_image_block_uses_camel_case() {
		let value = serde_json::to_value(image_block(ImageLayout::Single)).unwrap();

		assert_eq!(value["type"], "single");
		assert!(value.get("withBorder").is_some());
		assert!(value.get("with_border").is_none());
	}
}
