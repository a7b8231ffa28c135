//! Ordered block sequences

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::block::CmsBlock;
use super::kind::BlockType;
use crate::validation;

/// Content of a page: blocks in display order
///
/// Serializes as a plain JSON array. Deserializing runs
/// [`validate_content`](crate::validation::validate_content) with default
/// settings, sequence checks included.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CmsContent(Vec<CmsBlock>);

impl CmsContent {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, index: usize) -> Option<&CmsBlock> {
		self.0.get(index)
	}

	/// First block with the given id
	pub fn find(&self, id: &str) -> Option<&CmsBlock> {
		self.0.iter().find(|block| block.id == id)
	}

	pub fn find_mut(&mut self, id: &str) -> Option<&mut CmsBlock> {
		self.0.iter_mut().find(|block| block.id == id)
	}

	pub fn ids(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|block| block.id.as_str())
	}

	/// Blocks of one type, in display order
	pub fn of_type(&self, kind: BlockType) -> impl Iterator<Item = &CmsBlock> {
		self.0.iter().filter(move |block| block.block_type() == kind)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, CmsBlock> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn push(&mut self, block: CmsBlock) {
		self.0.push(block);
	}

	pub fn blocks(&self) -> &[CmsBlock] {
		&self.0
	}

	pub fn into_blocks(self) -> Vec<CmsBlock> {
		self.0
	}

	pub fn to_json(&self) -> Result<Value, serde_json::Error> {
		serde_json::to_value(self)
	}
}

impl From<Vec<CmsBlock>> for CmsContent {
	fn from(blocks: Vec<CmsBlock>) -> Self {
		Self(blocks)
	}
}

impl FromIterator<CmsBlock> for CmsContent {
	fn from_iter<I: IntoIterator<Item = CmsBlock>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl IntoIterator for CmsContent {
	type Item = CmsBlock;
	type IntoIter = std::vec::IntoIter<CmsBlock>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a CmsContent {
	type Item = &'a CmsBlock;
	type IntoIter = std::slice::Iter<'a, CmsBlock>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl<'de> Deserialize<'de> for CmsContent {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		validation::validate_content(&value).map_err(D::Error::custom)
	}
}
