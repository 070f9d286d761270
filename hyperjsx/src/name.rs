//! Element name handling.

use crate::{
	error::TransformError,
	tree::{Node, NodeId, Tree},
};

/// Whether the first character of `word` is not its own lowercase form,
/// i.e. the name refers to a user-defined component.
fn initial_is_capital(word: &str) -> bool {
	word.chars()
		.next()
		.is_some_and(|c| !c.to_lowercase().eq(std::iter::once(c)))
}

/// Builds the first factory argument from an element's name node.
///
/// Capitalized simple names become identifiers, lowercase (intrinsic) names
/// become string literals unless `quote_intrinsic` is off. Dotted names are
/// returned as-is; the walk re-tags them when it reaches them.
pub fn transform_name(
	tree: &mut Tree,
	name: NodeId,
	quote_intrinsic: bool,
) -> Result<NodeId, TransformError> {
	match tree.node(name) {
		Node::JsxIdentifier { name } | Node::Identifier { name } => {
			let node = if !quote_intrinsic || initial_is_capital(name) {
				Node::identifier(name.clone())
			} else {
				Node::string_literal(name.clone())
			};
			Ok(tree.push(node))
		}
		Node::JsxMemberExpression { .. } | Node::MemberExpression { .. } => Ok(name),
		other => {
			Err(TransformError::UnsupportedNameKind {
				kind: other.kind().to_string(),
			})
		}
	}
}

/// Re-tags a JSX name node as its plain ESTree equivalent, in place.
///
/// Returns whether the node was a JSX name. Re-tagging an already re-tagged
/// node is a no-op.
pub fn retag_name(tree: &mut Tree, id: NodeId) -> bool {
	let node = tree.node_mut(id);
	let retagged = match &mut *node {
		Node::JsxIdentifier { name } => {
			Node::Identifier {
				name: std::mem::take(name),
			}
		}
		Node::JsxMemberExpression { object, property } => {
			Node::MemberExpression {
				object: *object,
				property: *property,
				computed: false,
				optional: false,
			}
		}
		_ => return false,
	};
	*node = retagged;
	true
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tree::LiteralValue;

	fn jsx_name(tree: &mut Tree, name: &str) -> NodeId {
		tree.push(Node::JsxIdentifier { name: name.into() })
	}

	fn dotted(tree: &mut Tree) -> NodeId {
		let object = jsx_name(tree, "A");
		let property = jsx_name(tree, "B");
		tree.push(Node::JsxMemberExpression { object, property })
	}

	#[test]
	fn capitalized_names_are_identifiers() {
		let mut tree = Tree::new();
		let name = jsx_name(&mut tree, "Foo");
		let out = transform_name(&mut tree, name, true).unwrap();
		assert_eq!(tree.node(out), &Node::identifier("Foo"));
	}

	#[test]
	fn intrinsic_names_are_quoted() {
		let mut tree = Tree::new();
		let name = jsx_name(&mut tree, "div");
		let out = transform_name(&mut tree, name, true).unwrap();
		assert_eq!(
			tree.node(out),
			&Node::Literal {
				value: LiteralValue::String("div".into())
			}
		);
	}

	#[test]
	fn intrinsic_names_can_stay_bare() {
		let mut tree = Tree::new();
		let name = jsx_name(&mut tree, "div");
		let out = transform_name(&mut tree, name, false).unwrap();
		assert_eq!(tree.node(out), &Node::identifier("div"));
	}

	#[test]
	fn non_letter_initials_are_intrinsic() {
		assert!(!initial_is_capital("_private"));
		assert!(!initial_is_capital("$el"));
		assert!(!initial_is_capital(""));
		assert!(initial_is_capital("Élan"));
	}

	#[test]
	fn dotted_names_pass_through() {
		let mut tree = Tree::new();
		let name = dotted(&mut tree);
		assert_eq!(transform_name(&mut tree, name, true).unwrap(), name);
	}

	#[test]
	fn namespaced_names_are_rejected() {
		let mut tree = Tree::new();
		let name = tree.push(Node::Generic(Box::new(crate::tree::GenericNode::new(
			"JSXNamespacedName",
			Vec::new(),
		))));
		assert_eq!(
			transform_name(&mut tree, name, true),
			Err(TransformError::UnsupportedNameKind {
				kind: "JSXNamespacedName".into()
			})
		);
	}

	#[test]
	fn retagging_is_idempotent() {
		let mut tree = Tree::new();
		let member = dotted(&mut tree);
		let simple = jsx_name(&mut tree, "x");

		assert!(retag_name(&mut tree, member));
		assert!(retag_name(&mut tree, simple));
		let (member_once, simple_once) = (tree.node(member).clone(), tree.node(simple).clone());

		assert!(!retag_name(&mut tree, member));
		assert!(!retag_name(&mut tree, simple));
		assert_eq!(tree.node(member), &member_once);
		assert_eq!(tree.node(simple), &simple_once);
		assert_eq!(simple_once, Node::identifier("x"));
		assert_eq!(member_once.kind(), "MemberExpression");
	}
}
