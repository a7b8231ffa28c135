//! CMS error types

use thiserror::Error;

use crate::blocks::BlockType;
use crate::validation::ValidationErrors;

/// CMS-related errors
#[derive(Error, Debug)]
pub enum CmsError {
	/// Content or block failed schema validation
	#[error("Invalid content: {0}")]
	Validation(#[from] ValidationErrors),

	/// Input was not well-formed JSON
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// Settings file could not be parsed
	#[error("Settings error: {0}")]
	Settings(#[from] toml::de::Error),

	/// Block type name not in the catalogue
	#[error("Block type not registered: {0}")]
	UnknownBlockType(String),

	/// Block type exists but editors cannot insert it
	#[error("No default shape for block type: {0}")]
	NoDefaultShape(BlockType),
}

/// Result type for CMS operations
pub type CmsResult<T> = Result<T, CmsError>;
