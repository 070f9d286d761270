use tracing::trace;

use crate::{
	attributes::transform_attributes,
	error::TransformError,
	name::transform_name,
	tree::{Node, NodeId, Tree},
	walk::Action,
};

impl super::Rewriter<'_> {
	/// Replaces an element with `factory(name, props | null, [children])`.
	///
	/// The children array holds the element's own child list rather than a
	/// copy of it. The children have not been visited yet at this point; the
	/// walk reaches them through the array once it descends into the call,
	/// and their rewrites (and removals) land in the shared list.
	pub(crate) fn inner_enter_jsx_element(
		&mut self,
		tree: &mut Tree,
		id: NodeId,
	) -> Result<Action, TransformError> {
		let Node::JsxElement {
			name,
			attributes,
			children,
			..
		} = *tree.node(id)
		else {
			unreachable!("dispatched on JSXElement");
		};

		let mut arguments = Vec::with_capacity(3);
		arguments.push(transform_name(tree, name, self.options.quote_intrinsic)?);

		if tree.list(attributes).is_empty() {
			arguments.push(tree.push(Node::null_literal()));
		} else {
			let properties = transform_attributes(tree, attributes, self.options.quote_prop_names)?;
			let properties = tree.push_list(properties);
			arguments.push(tree.push(Node::object(properties)));
		}

		if !tree.list(children).is_empty() {
			arguments.push(tree.push(Node::array(children)));
		}

		trace!(?id, arguments = arguments.len(), "rewriting element");

		let callee = tree.push(Node::identifier(self.options.factory.as_str()));
		let arguments = tree.push_list(arguments);
		tree.replace(id, Node::call(callee, arguments));
		self.elements += 1;

		Ok(Action::Continue)
	}
}
