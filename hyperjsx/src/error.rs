//! Errors raised by the rewrite and by the ESTree reader.

/// A node kind the rewrite does not support.
///
/// Any of these aborts the whole rewrite; the tree is left partially
/// rewritten and must be discarded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
	/// An element name or attribute key is neither a simple nor a dotted name.
	#[error("unsupported name type ({kind})")]
	UnsupportedNameKind {
		/// The offending node kind.
		kind: String,
	},
	/// An attribute entry is neither an attribute nor a spread attribute.
	#[error("unsupported attribute type ({kind})")]
	UnsupportedAttributeKind {
		/// The offending node kind.
		kind: String,
	},
	/// An attribute value is neither a literal nor an expression container.
	#[error("unsupported attribute value type ({kind})")]
	UnsupportedAttributeValueKind {
		/// The offending node kind.
		kind: String,
	},
	/// An expression container wraps an expression outside the allow-list.
	#[error("unsupported expression type ({kind})")]
	UnsupportedExpressionKind {
		/// The offending node kind.
		kind: String,
	},
	/// A JSX construct other than an element was reached (e.g. a fragment).
	#[error("unsupported element type ({kind})")]
	UnsupportedElementKind {
		/// The offending node kind.
		kind: String,
	},
}

impl TransformError {
	/// Returns the node kind that caused the failure.
	#[must_use]
	pub fn kind(&self) -> &str {
		match self {
			Self::UnsupportedNameKind { kind }
			| Self::UnsupportedAttributeKind { kind }
			| Self::UnsupportedAttributeValueKind { kind }
			| Self::UnsupportedExpressionKind { kind }
			| Self::UnsupportedElementKind { kind } => kind,
		}
	}
}

/// A JSON document that is not a well-formed ESTree tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstreeError {
	/// A node position holds something other than an object or `null`.
	#[error("expected a node object, found {found}")]
	NotANode {
		/// A description of the JSON value found.
		found: &'static str,
	},
	/// A node object has no string `type` field.
	#[error("node object has no `type` field")]
	MissingType,
	/// A required field is absent.
	#[error("{kind} is missing its `{field}` field")]
	MissingField {
		/// The node kind.
		kind: String,
		/// The missing field.
		field: &'static str,
	},
	/// A field holds a value of the wrong JSON type.
	#[error("{kind}.{field} must be {expected}")]
	InvalidField {
		/// The node kind.
		kind: String,
		/// The offending field.
		field: &'static str,
		/// A description of the expected value.
		expected: &'static str,
	},
}
