use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::{
	error::TransformError,
	tree::{Node, NodeId, Tree},
	walk::Action,
};

/// Matches text that is nothing but the indentation between two tags:
/// blanks, then a line break, then any whitespace.
static INDENTATION: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[ \t]*[\r\n][ \t\r\n]*$").expect("indentation pattern is valid"));

impl super::Rewriter<'_> {
	/// Removes indentation text and trims any other text into a literal.
	pub(crate) fn inner_enter_jsx_text(
		&mut self,
		tree: &mut Tree,
		id: NodeId,
	) -> Result<Action, TransformError> {
		let Node::JsxText { value } = tree.node(id) else {
			unreachable!("dispatched on JSXText");
		};

		if INDENTATION.is_match(value) {
			trace!(?id, "removing indentation text");
			self.removed_text += 1;
			return Ok(Action::Remove);
		}

		// U+FEFF counts as whitespace in JS but not for `char::is_whitespace`.
		let literal =
			Node::string_literal(value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}'));
		tree.replace(id, literal);
		Ok(Action::Continue)
	}
}
