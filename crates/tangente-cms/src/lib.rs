//! # Tangente CMS
//!
//! Block content model of the Tangente CMS.
//!
//! Page content is stored as an ordered list of blocks. Each block is a
//! tagged union: a `type` string selects the shape of its `data` payload.
//! This crate provides the typed model of those blocks, the schema that
//! untyped JSON must satisfy before it is accepted, and the templates
//! editors start from when inserting a new block.
//!
//! ## Architecture
//!
//! ```text
//! tangente-cms
//! ├── blocks     - BlockType, typed payloads, CmsBlock, CmsContent
//! ├── schema     - Per-type shapes checked by the validator
//! ├── validation - Aggregating validator and its error report
//! ├── defaults   - Default-shape registry
//! └── settings   - Validation settings (TOML / JSON)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use tangente_cms::prelude::*;
//!
//! let content = validate_content(&json!([
//! 	{"id": "1", "type": "heading", "data": {"title": "Hi", "level": 2, "caption": null}},
//! 	{"id": "2", "type": "separator", "data": null},
//! ]))
//! .unwrap();
//! assert_eq!(content.len(), 2);
//!
//! let mut block = DefaultShapes::get(BlockType::Paragraph).unwrap();
//! block.regenerate_id();
//! ```

#![warn(rustdoc::broken_intra_doc_links)]

// Re-export for downstream serde derives
pub use serde;
pub use serde_json;

pub mod blocks;
pub mod defaults;
pub mod error;
pub mod schema;
pub mod settings;
pub mod validation;

pub use error::{CmsError, CmsResult};

// Prelude for convenient imports
pub mod prelude {
	//! Convenient re-exports of commonly used items

	// Blocks
	pub use crate::blocks::{BlockBody, BlockType, CmsBlock, CmsContent, SENTINEL_ID};

	// Validation
	pub use crate::validation::{
		BlockValidator, BlockViolation, ValidationErrors, validate_block, validate_content,
		validate_content_str,
	};

	// Defaults
	pub use crate::defaults::DefaultShapes;

	// Settings
	pub use crate::settings::{CmsSettings, SentinelPolicy, ValidationSettings};

	// Errors
	pub use crate::error::{CmsError, CmsResult};
}
