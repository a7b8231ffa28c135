//! Field paths pointing into a JSON document

use std::fmt;

/// One step of a [`FieldPath`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
	/// Object member
	Key(String),
	/// Array element
	Index(usize),
}

/// Location of a value inside a JSON document, relative to the value the
/// check started from.
///
/// Renders as dotted keys with bracketed indices, e.g. `data.content[3]`.
/// The empty path renders as an empty string.
///
/// # Examples
///
/// ```
/// use tangente_validators::FieldPath;
///
/// let path = FieldPath::root().key("data").key("content").index(3);
/// assert_eq!(path.to_string(), "data.content[3]");
/// assert!(FieldPath::root().is_root());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
	segments: Vec<Segment>,
}

impl FieldPath {
	/// The path of the value a check started from
	pub fn root() -> Self {
		Self::default()
	}

	/// Parse a dotted path such as `data.cards[0].title`.
	///
	/// Purely syntactic; used mostly to compare against reported paths.
	pub fn parse(raw: &str) -> Self {
		let mut path = Self::root();
		for part in raw.split('.').filter(|p| !p.is_empty()) {
			let (name, rest) = match part.find('[') {
				Some(pos) => part.split_at(pos),
				None => (part, ""),
			};
			if !name.is_empty() {
				path.push_key(name);
			}
			for index in rest
				.split(['[', ']'])
				.filter(|s| !s.is_empty())
				.filter_map(|s| s.parse::<usize>().ok())
			{
				path.push_index(index);
			}
		}
		path
	}

	/// Builder-style variant of [`FieldPath::push_key`]
	pub fn key(mut self, name: impl Into<String>) -> Self {
		self.push_key(name);
		self
	}

	/// Builder-style variant of [`FieldPath::push_index`]
	pub fn index(mut self, index: usize) -> Self {
		self.push_index(index);
		self
	}

	pub fn push_key(&mut self, name: impl Into<String>) {
		self.segments.push(Segment::Key(name.into()));
	}

	pub fn push_index(&mut self, index: usize) {
		self.segments.push(Segment::Index(index));
	}

	pub fn pop(&mut self) -> Option<Segment> {
		self.segments.pop()
	}

	pub fn is_root(&self) -> bool {
		self.segments.is_empty()
	}

	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// Last object key on the path, if any
	pub fn last_key(&self) -> Option<&str> {
		self.segments.iter().rev().find_map(|segment| match segment {
			Segment::Key(name) => Some(name.as_str()),
			Segment::Index(_) => None,
		})
	}

	/// Whether `self` starts with every segment of `prefix`
	pub fn starts_with(&self, prefix: &FieldPath) -> bool {
		self.segments.starts_with(&prefix.segments)
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (position, segment) in self.segments.iter().enumerate() {
			match segment {
				Segment::Key(name) if position == 0 => write!(f, "{}", name)?,
				Segment::Key(name) => write!(f, ".{}", name)?,
				Segment::Index(index) => write!(f, "[{}]", index)?,
			}
		}
		Ok(())
	}
}

impl From<&str> for FieldPath {
	fn from(raw: &str) -> Self {
		Self::parse(raw)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", FieldPath::root())]
	#[case("data", FieldPath::root().key("data"))]
	#[case("data.level", FieldPath::root().key("data").key("level"))]
	#[case("data.content[3]", FieldPath::root().key("data").key("content").index(3))]
	#[case(
		"data.cards[0].chip.text",
		FieldPath::root().key("data").key("cards").index(0).key("chip").key("text")
	)]
	#[case("data.content[1][0]", FieldPath::root().key("data").key("content").index(1).index(0))]
	fn test_parse_matches_builder(#[case] raw: &str, #[case] expected: FieldPath) {
		// Act
		let parsed = FieldPath::parse(raw);

		// Assert
		assert_eq!(parsed, expected);
		assert_eq!(parsed.to_string(), raw);
	}

	#[test]
	fn test_push_and_pop_restore_path() {
		// Arrange
		let mut path = FieldPath::root().key("data");

		// Act
		path.push_index(2);
		path.push_key("title");
		path.pop();
		path.pop();

		// Assert
		assert_eq!(path.to_string(), "data");
	}

	#[test]
	fn test_last_key_skips_indices() {
		let path = FieldPath::root().key("data").key("images").index(4);

		assert_eq!(path.last_key(), Some("images"));
		assert_eq!(FieldPath::root().index(1).last_key(), None);
	}
}
