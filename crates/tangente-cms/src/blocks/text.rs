//! Text-oriented block payloads

use serde::{Deserialize, Serialize};
use serde_json::Number;
use tangente_image::Image;

use super::cards::CardVariant;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
	pub title: Option<String>,
	/// Unconstrained; renderers clamp it to the heading levels they support
	pub level: Option<Number>,
	pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
	pub text: String,
	/// Hide the text behind a reveal control
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub spoiler: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
	Ordered,
	Unordered,
}

impl ListKind {
	pub const NAMES: &'static [&'static str] = &["ordered", "unordered"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
	#[serde(rename = "type")]
	pub kind: ListKind,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub date: Option<String>,
	pub content: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
	pub text: String,
	pub author: Option<String>,
}

/// LaTeX source typeset by the editor's math plugin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equation {
	pub latex: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub display_mode: Option<bool>,
}

/// Label/value row of a [`Table`]; serialized as a 2-element array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow(pub String, pub String);

impl TableRow {
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self(label.into(), value.into())
	}

	pub fn label(&self) -> &str {
		&self.0
	}

	pub fn value(&self) -> &str {
		&self.1
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
	pub title: String,
	pub content: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	pub text: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub variant: Option<CardVariant>,
}

/// Editorial analysis box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analyze {
	pub title: String,
	pub text: String,
	pub author: Option<String>,
	pub image: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFigure {
	pub value: String,
	pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFigures {
	pub figures: Vec<KeyFigure>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
	Primary,
	Secondary,
}

impl ButtonVariant {
	pub const NAMES: &'static [&'static str] = &["primary", "secondary"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
	pub label: String,
	pub url: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub variant: Option<ButtonVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
	pub name: String,
	pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documents {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	pub documents: Vec<Document>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
	Info,
	Warning,
	Success,
	Error,
}

impl AlertVariant {
	pub const NAMES: &'static [&'static str] = &["info", "warning", "success", "error"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
	pub text: String,
	pub variant: AlertVariant,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_table_row_serializes_as_pair() {
		let table = Table {
			title: "Specs".to_string(),
			content: vec![TableRow::new("Pages", "64")],
		};

		assert_eq!(
			serde_json::to_value(&table).unwrap(),
			json!({"title": "Specs", "content": [["Pages", "64"]]})
		);
	}

	#[test]
	fn test_heading_keeps_integer_level() {
		let heading: Heading =
			serde_json::from_value(json!({"title": "Hi", "level": 2, "caption": null})).unwrap();

		assert_eq!(heading.level.as_ref().and_then(Number::as_u64), Some(2));
		assert_eq!(serde_json::to_value(&heading).unwrap()["level"], json!(2));
	}

	#[test]
	fn test_list_kind_uses_type_member() {
		let list = List {
			kind: ListKind::Unordered,
			date: None,
			content: vec!["a".to_string()],
		};

		assert_eq!(
			serde_json::to_value(&list).unwrap(),
			json!({"type": "unordered", "content": ["a"]})
		);
	}
}
