//! Attribute handling.

use crate::{
	error::TransformError,
	tree::{ListId, LiteralValue, Node, NodeId, Tree},
};

/// Converts an element's attributes into object properties and spreads,
/// preserving their order.
pub fn transform_attributes(
	tree: &mut Tree,
	attributes: ListId,
	quote_prop_names: bool,
) -> Result<Vec<NodeId>, TransformError> {
	let attributes = tree.list(attributes).to_vec();
	attributes
		.into_iter()
		.map(|attribute| transform_attribute(tree, attribute, quote_prop_names))
		.collect()
}

/// Converts a single attribute.
fn transform_attribute(
	tree: &mut Tree,
	attribute: NodeId,
	quote_prop_names: bool,
) -> Result<NodeId, TransformError> {
	let (name, value) = match tree.node(attribute) {
		Node::JsxAttribute { name, value } => (*name, *value),
		Node::JsxSpreadAttribute { argument } => {
			let spread = Node::spread(*argument);
			return Ok(tree.push(spread));
		}
		other => {
			return Err(TransformError::UnsupportedAttributeKind {
				kind: other.kind().to_string(),
			});
		}
	};

	let key = match tree.node(name) {
		Node::JsxIdentifier { name } if quote_prop_names => Node::string_literal(name.clone()),
		Node::JsxIdentifier { name } => Node::identifier(name.clone()),
		other => {
			return Err(TransformError::UnsupportedNameKind {
				kind: other.kind().to_string(),
			});
		}
	};
	let key = tree.push(key);

	// The container is left in place; the walk unwraps it once it reaches
	// the property's value.
	let value = match value {
		None => tree.push(Node::literal(LiteralValue::Boolean(true))),
		Some(value) => {
			match tree.node(value) {
				Node::Literal { .. } | Node::JsxExpressionContainer { .. } => value,
				other => {
					return Err(TransformError::UnsupportedAttributeValueKind {
						kind: other.kind().to_string(),
					});
				}
			}
		}
	};

	Ok(tree.push(Node::property(key, value)))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn attribute(tree: &mut Tree, name: &str, value: Option<Node>) -> NodeId {
		let name = tree.push(Node::JsxIdentifier { name: name.into() });
		let value = value.map(|value| tree.push(value));
		tree.push(Node::JsxAttribute { name, value })
	}

	fn property_parts(tree: &Tree, id: NodeId) -> (&Node, &Node) {
		let Node::Property { key, value, .. } = tree.node(id) else {
			panic!("expected a property, got {}", tree.node(id).kind());
		};
		(tree.node(*key), tree.node(*value))
	}

	#[test]
	fn shorthand_attribute_is_true() {
		let mut tree = Tree::new();
		let a = attribute(&mut tree, "a", None);
		let list = tree.push_list(vec![a]);
		let out = transform_attributes(&mut tree, list, false).unwrap();
		let (key, value) = property_parts(&tree, out[0]);
		assert_eq!(key, &Node::identifier("a"));
		assert_eq!(value, &Node::literal(LiteralValue::Boolean(true)));
	}

	#[test]
	fn keys_are_quoted_on_request() {
		let mut tree = Tree::new();
		let a = attribute(&mut tree, "a", Some(Node::string_literal("x")));
		let list = tree.push_list(vec![a]);
		let out = transform_attributes(&mut tree, list, true).unwrap();
		let (key, value) = property_parts(&tree, out[0]);
		assert_eq!(key, &Node::string_literal("a"));
		assert_eq!(value, &Node::string_literal("x"));
	}

	#[test]
	fn containers_are_passed_through() {
		let mut tree = Tree::new();
		let inner = tree.push(Node::identifier("y"));
		let a = attribute(
			&mut tree,
			"a",
			Some(Node::JsxExpressionContainer { expression: inner }),
		);
		let list = tree.push_list(vec![a]);
		let out = transform_attributes(&mut tree, list, true).unwrap();
		let (_, value) = property_parts(&tree, out[0]);
		assert_eq!(value, &Node::JsxExpressionContainer { expression: inner });
	}

	#[test]
	fn spreads_keep_their_argument() {
		let mut tree = Tree::new();
		let argument = tree.push(Node::identifier("y"));
		let spread = tree.push(Node::JsxSpreadAttribute { argument });
		let a = attribute(&mut tree, "a", None);
		let list = tree.push_list(vec![spread, a]);
		let out = transform_attributes(&mut tree, list, true).unwrap();
		assert_eq!(out.len(), 2);
		assert_eq!(tree.node(out[0]), &Node::spread(argument));
		assert_eq!(tree.node(out[1]).kind(), "Property");
	}

	#[test]
	fn element_values_are_rejected() {
		let mut tree = Tree::new();
		let name = tree.push(Node::JsxIdentifier { name: "b".into() });
		let attributes = tree.push_list(Vec::new());
		let children = tree.push_list(Vec::new());
		let a = attribute(
			&mut tree,
			"a",
			Some(Node::JsxElement {
				name,
				attributes,
				children,
				self_closing: true,
			}),
		);
		let list = tree.push_list(vec![a]);
		assert_eq!(
			transform_attributes(&mut tree, list, true),
			Err(TransformError::UnsupportedAttributeValueKind {
				kind: "JSXElement".into()
			})
		);
	}

	#[test]
	fn foreign_entries_are_rejected() {
		let mut tree = Tree::new();
		let stray = tree.push(Node::identifier("x"));
		let list = tree.push_list(vec![stray]);
		assert_eq!(
			transform_attributes(&mut tree, list, true),
			Err(TransformError::UnsupportedAttributeKind {
				kind: "Identifier".into()
			})
		);
	}
}
