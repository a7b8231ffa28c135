//! # Tangente
//!
//! Block content model of the Tangente CMS.
//!
//! Pages are stored as ordered lists of blocks, each a tagged union whose
//! `type` selects the shape of its `data`. This facade re-exports the crates
//! that make up the model:
//!
//! - [`validators`] - declarative JSON shapes and aggregated, path-aware violations
//! - [`image`] - the image reference embedded by blocks
//! - [`cms`] - block types, the block validator and the default-shape registry
//!
//! ## Feature Flags
//!
//! - `minimal` - shape DSL and image type only
//! - `cms` - block model, validator and default shapes (implies `minimal`)
//! - `full` (default) - everything
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "cms")]
//! # {
//! use serde_json::json;
//! use tangente::prelude::*;
//!
//! let errors = validate_content(&json!([
//! 	{"id": "3", "type": "bogus-type", "data": {}},
//! ]))
//! .unwrap_err();
//!
//! assert!(errors.is_unknown_type(0));
//! # }
//! ```

#[cfg(feature = "minimal")]
pub use tangente_image as image;
#[cfg(feature = "minimal")]
pub use tangente_validators as validators;

#[cfg(feature = "cms")]
pub use tangente_cms as cms;

/// Re-export commonly used types
pub mod prelude {
	#[cfg(feature = "minimal")]
	pub use tangente_image::{Image, ImageSource};
	#[cfg(feature = "minimal")]
	pub use tangente_validators::prelude::*;

	#[cfg(feature = "cms")]
	pub use tangente_cms::prelude::*;
}
