//! Constructors for the ESTree node shapes emitted by the rewrite.
//!
//! These only build [`Node`] values; placing them in a [`crate::Tree`] is
//! up to the caller.

use crate::tree::{ListId, LiteralValue, Node, NodeId, PropertyKind};

impl Node {
	/// `name`
	pub fn identifier<S: Into<String>>(name: S) -> Self {
		Self::Identifier { name: name.into() }
	}

	/// A literal holding `value`.
	#[must_use]
	pub fn literal(value: LiteralValue) -> Self {
		Self::Literal { value }
	}

	/// A string literal.
	pub fn string_literal<S: Into<String>>(value: S) -> Self {
		Self::literal(LiteralValue::String(value.into()))
	}

	/// `null`
	#[must_use]
	pub fn null_literal() -> Self {
		Self::literal(LiteralValue::Null)
	}

	/// A plain `key: value` property.
	#[must_use]
	pub fn property(key: NodeId, value: NodeId) -> Self {
		Self::Property {
			key,
			value,
			kind: PropertyKind::Init,
			method: false,
			shorthand: false,
			computed: false,
		}
	}

	/// `...argument`
	#[must_use]
	pub fn spread(argument: NodeId) -> Self {
		Self::SpreadElement { argument }
	}

	/// `{ ...properties }`
	#[must_use]
	pub fn object(properties: ListId) -> Self {
		Self::ObjectExpression { properties }
	}

	/// `[ ...elements ]`
	#[must_use]
	pub fn array(elements: ListId) -> Self {
		Self::ArrayExpression { elements }
	}

	/// `callee(...arguments)`
	#[must_use]
	pub fn call(callee: NodeId, arguments: ListId) -> Self {
		Self::CallExpression {
			callee,
			arguments,
			optional: false,
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::tree::{Node, PropertyKind, Tree};

	#[test]
	fn property_is_a_plain_init_property() {
		let mut tree = Tree::new();
		let key = tree.push(Node::identifier("a"));
		let value = tree.push(Node::string_literal("x"));
		assert_eq!(
			Node::property(key, value),
			Node::Property {
				key,
				value,
				kind: PropertyKind::Init,
				method: false,
				shorthand: false,
				computed: false,
			}
		);
	}

	#[test]
	fn call_is_never_optional() {
		let mut tree = Tree::new();
		let callee = tree.push(Node::identifier("h"));
		let arguments = tree.push_list(Vec::new());
		assert!(matches!(
			Node::call(callee, arguments),
			Node::CallExpression {
				optional: false,
				..
			}
		));
	}
}
