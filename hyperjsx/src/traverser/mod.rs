mod enter_jsx_element;
mod enter_jsx_expression_container;
mod enter_jsx_text;

use tracing::trace;

use crate::{
	constants::JSX_FRAGMENT,
	error::TransformError,
	name::retag_name,
	options::Options,
	tree::{Node, NodeId, Tree},
	walk::{Action, Visitor},
};

/// Rewrites JSX nodes into factory calls as the walk reaches them.
pub struct Rewriter<'o> {
	/// The options the rewrite was invoked with.
	pub options: &'o Options,
	/// Number of elements rewritten into factory calls.
	pub elements: usize,
	/// Number of text nodes removed as indentation.
	pub removed_text: usize,
}

impl<'o> Rewriter<'o> {
	/// Creates a rewriter for the given options.
	pub fn new(options: &'o Options) -> Self {
		Self {
			options,
			elements: 0,
			removed_text: 0,
		}
	}
}

impl Visitor for Rewriter<'_> {
	type Error = TransformError;

	fn enter(&mut self, tree: &mut Tree, id: NodeId) -> Result<Action, TransformError> {
		match tree.node(id) {
			Node::JsxText { .. } => self.inner_enter_jsx_text(tree, id),
			Node::JsxExpressionContainer { .. } => self.inner_enter_jsx_expression_container(tree, id),
			Node::JsxElement { .. } => self.inner_enter_jsx_element(tree, id),
			Node::JsxIdentifier { .. } | Node::JsxMemberExpression { .. } => {
				trace!(kind = tree.node(id).kind(), "retagging name");
				retag_name(tree, id);
				Ok(Action::Continue)
			}
			Node::Generic(generic) if generic.kind == JSX_FRAGMENT => {
				Err(TransformError::UnsupportedElementKind {
					kind: JSX_FRAGMENT.to_string(),
				})
			}
			_ => Ok(Action::Continue),
		}
	}
}
