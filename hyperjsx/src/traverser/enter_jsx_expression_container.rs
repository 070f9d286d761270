use tracing::trace;

use crate::{
	constants::CONTAINER_EXPRESSION_KINDS,
	error::TransformError,
	tree::{Node, NodeId, Tree},
	walk::Action,
};

impl super::Rewriter<'_> {
	/// Replaces `{expression}` with `expression` itself.
	pub(crate) fn inner_enter_jsx_expression_container(
		&mut self,
		tree: &mut Tree,
		id: NodeId,
	) -> Result<Action, TransformError> {
		let Node::JsxExpressionContainer { expression } = *tree.node(id) else {
			unreachable!("dispatched on JSXExpressionContainer");
		};

		let kind = tree.node(expression).kind();
		if !CONTAINER_EXPRESSION_KINDS.iter().any(|allowed| *allowed == kind) {
			return Err(TransformError::UnsupportedExpressionKind {
				kind: kind.to_string(),
			});
		}

		trace!(?id, kind, "unwrapping expression container");
		// The container is the expression's only holder, so moving it out
		// leaves nothing dangling.
		let inner = tree.take(expression);
		tree.replace(id, inner);
		Ok(Action::Continue)
	}
}
