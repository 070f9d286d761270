//! The mutable arena tree that the rewrite operates on.
//!
//! Nodes are stored in a flat arena and addressed by [`NodeId`]; node
//! sequences (children, attributes, call arguments, ...) are stored in a
//! second arena and addressed by [`ListId`]. A node that holds a sequence
//! only holds its [`ListId`], which makes sharing a sequence between two
//! nodes a matter of copying the id. The rewrite relies on this: the
//! `ArrayExpression` built for an element's children holds the very same
//! [`ListId`] as the element did, so rewrites applied to the children later
//! in the walk are observed through the array.
//!
//! Replacing a node overwrites its arena slot, so every holder of its
//! [`NodeId`] observes the replacement.

use serde_json::Value;

/// Index of a node in a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Index of a node sequence in a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(usize);

/// The value held by a `Literal` node.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
	/// `null`
	Null,
	/// `true` or `false`
	Boolean(bool),
	/// A numeric literal, kept in its JSON representation.
	Number(serde_json::Number),
	/// A string literal.
	String(String),
}

/// The `kind` of an ESTree `Property`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
	/// A plain `key: value` property.
	Init,
	/// A `get key() {}` accessor.
	Get,
	/// A `set key(v) {}` accessor.
	Set,
}

impl PropertyKind {
	/// Returns the ESTree spelling of this kind.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Init => "init",
			Self::Get => "get",
			Self::Set => "set",
		}
	}
}

/// A field of a [`GenericNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
	/// A single child node.
	Node(NodeId),
	/// A sequence of child nodes.
	List(ListId),
	/// Any other JSON value (operators, names, positions, `null`, ...).
	Value(Value),
}

/// An ESTree node that the rewrite never inspects.
///
/// Its node-valued fields are still walked, so JSX nested anywhere inside
/// (e.g. in the body of an arrow function) is rewritten too.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericNode {
	/// The ESTree `type` tag.
	pub kind: String,
	/// The remaining fields, in source order.
	pub fields: Vec<(String, Field)>,
}

impl GenericNode {
	/// Creates a generic node from its tag and fields.
	pub fn new<K: Into<String>>(kind: K, fields: Vec<(String, Field)>) -> Self {
		Self {
			kind: kind.into(),
			fields,
		}
	}

	/// Looks up a field by name.
	#[must_use]
	pub fn field(&self, name: &str) -> Option<&Field> {
		self.fields
			.iter()
			.find_map(|(key, field)| (key == name).then_some(field))
	}
}

/// A single tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// An absent node: an array hole, a removed field, or a vacated slot.
	Hole,
	/// `<name ...attributes>...children</name>`
	JsxElement {
		/// The opening element's name.
		name: NodeId,
		/// The opening element's attributes.
		attributes: ListId,
		/// The element's children.
		children: ListId,
		/// Whether the element was written `<name/>`.
		self_closing: bool,
	},
	/// A simple JSX name (`div`, `Foo`, or an attribute key).
	JsxIdentifier {
		/// The raw name.
		name: String,
	},
	/// A dotted JSX name (`A.B`).
	JsxMemberExpression {
		/// The object name node.
		object: NodeId,
		/// The property name node.
		property: NodeId,
	},
	/// `name` or `name=value`.
	JsxAttribute {
		/// The attribute key.
		name: NodeId,
		/// The attribute value; `None` for boolean shorthand.
		value: Option<NodeId>,
	},
	/// `{...argument}` in attribute position.
	JsxSpreadAttribute {
		/// The spread expression.
		argument: NodeId,
	},
	/// `{expression}`
	JsxExpressionContainer {
		/// The wrapped expression.
		expression: NodeId,
	},
	/// Raw text between tags.
	JsxText {
		/// The text, whitespace included.
		value: String,
	},
	/// An ESTree `Identifier`.
	Identifier {
		/// The identifier name.
		name: String,
	},
	/// An ESTree `Literal`.
	Literal {
		/// The literal value.
		value: LiteralValue,
	},
	/// An ESTree `Property`.
	Property {
		/// The property key.
		key: NodeId,
		/// The property value.
		value: NodeId,
		/// The property kind.
		kind: PropertyKind,
		/// Whether this is a method shorthand.
		method: bool,
		/// Whether this is a `{ key }` shorthand.
		shorthand: bool,
		/// Whether the key is computed (`[key]: value`).
		computed: bool,
	},
	/// An ESTree `SpreadElement`.
	SpreadElement {
		/// The spread expression.
		argument: NodeId,
	},
	/// An ESTree `ObjectExpression`.
	ObjectExpression {
		/// The properties and spreads.
		properties: ListId,
	},
	/// An ESTree `ArrayExpression`.
	ArrayExpression {
		/// The elements.
		elements: ListId,
	},
	/// An ESTree `CallExpression`.
	CallExpression {
		/// The function being called.
		callee: NodeId,
		/// The call arguments.
		arguments: ListId,
		/// Whether this is an optional call (`f?.()`).
		optional: bool,
	},
	/// An ESTree `MemberExpression`.
	MemberExpression {
		/// The object being accessed.
		object: NodeId,
		/// The accessed property.
		property: NodeId,
		/// Whether the access is computed (`a[b]`).
		computed: bool,
		/// Whether the access is optional (`a?.b`).
		optional: bool,
	},
	/// Any other ESTree node.
	Generic(Box<GenericNode>),
}

/// A child reference of a node, in walk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
	/// A single child node.
	Node(NodeId),
	/// A sequence of child nodes.
	List(ListId),
}

impl Node {
	/// Returns the ESTree `type` tag of this node.
	#[must_use]
	pub fn kind(&self) -> &str {
		match self {
			Self::Hole => "Hole",
			Self::JsxElement { .. } => "JSXElement",
			Self::JsxIdentifier { .. } => "JSXIdentifier",
			Self::JsxMemberExpression { .. } => "JSXMemberExpression",
			Self::JsxAttribute { .. } => "JSXAttribute",
			Self::JsxSpreadAttribute { .. } => "JSXSpreadAttribute",
			Self::JsxExpressionContainer { .. } => "JSXExpressionContainer",
			Self::JsxText { .. } => "JSXText",
			Self::Identifier { .. } => "Identifier",
			Self::Literal { .. } => "Literal",
			Self::Property { .. } => "Property",
			Self::SpreadElement { .. } => "SpreadElement",
			Self::ObjectExpression { .. } => "ObjectExpression",
			Self::ArrayExpression { .. } => "ArrayExpression",
			Self::CallExpression { .. } => "CallExpression",
			Self::MemberExpression { .. } => "MemberExpression",
			Self::Generic(generic) => &generic.kind,
		}
	}

	/// Returns the child references of this node, in walk order.
	#[must_use]
	pub fn edges(&self) -> Vec<Edge> {
		match self {
			Self::Hole
			| Self::JsxIdentifier { .. }
			| Self::JsxText { .. }
			| Self::Identifier { .. }
			| Self::Literal { .. } => Vec::new(),
			Self::JsxElement {
				name,
				attributes,
				children,
				..
			} => vec![Edge::Node(*name), Edge::List(*attributes), Edge::List(*children)],
			Self::JsxMemberExpression { object, property }
			| Self::MemberExpression {
				object, property, ..
			} => vec![Edge::Node(*object), Edge::Node(*property)],
			Self::JsxAttribute { name, value } => {
				let mut edges = vec![Edge::Node(*name)];
				edges.extend(value.map(Edge::Node));
				edges
			}
			Self::JsxSpreadAttribute { argument }
			| Self::SpreadElement { argument }
			| Self::JsxExpressionContainer {
				expression: argument,
			} => vec![Edge::Node(*argument)],
			Self::Property { key, value, .. } => vec![Edge::Node(*key), Edge::Node(*value)],
			Self::ObjectExpression { properties: list } | Self::ArrayExpression { elements: list } => {
				vec![Edge::List(*list)]
			}
			Self::CallExpression {
				callee, arguments, ..
			} => vec![Edge::Node(*callee), Edge::List(*arguments)],
			Self::Generic(generic) => {
				generic
					.fields
					.iter()
					.filter_map(|(_, field)| {
						match field {
							Field::Node(id) => Some(Edge::Node(*id)),
							Field::List(id) => Some(Edge::List(*id)),
							Field::Value(_) => None,
						}
					})
					.collect()
			}
		}
	}
}

/// An arena holding one syntax tree.
#[derive(Debug, Clone)]
pub struct Tree {
	/// Node storage, indexed by [`NodeId`].
	nodes: Vec<Node>,
	/// Sequence storage, indexed by [`ListId`].
	lists: Vec<Vec<NodeId>>,
	/// The root node.
	root: NodeId,
}

impl Default for Tree {
	fn default() -> Self {
		Self::new()
	}
}

impl Tree {
	/// Creates a tree whose root is a [`Node::Hole`].
	#[must_use]
	pub fn new() -> Self {
		Self {
			nodes: vec![Node::Hole],
			lists: Vec::new(),
			root: NodeId(0),
		}
	}

	/// Returns the root node's id.
	#[must_use]
	pub fn root(&self) -> NodeId {
		self.root
	}

	/// Makes `id` the root of the tree.
	pub fn set_root(&mut self, id: NodeId) {
		self.root = id;
	}

	/// Adds a node to the arena.
	pub fn push(&mut self, node: Node) -> NodeId {
		self.nodes.push(node);
		NodeId(self.nodes.len() - 1)
	}

	/// Adds a sequence to the arena.
	pub fn push_list(&mut self, items: Vec<NodeId>) -> ListId {
		self.lists.push(items);
		ListId(self.lists.len() - 1)
	}

	/// Returns the node stored at `id`.
	#[must_use]
	pub fn node(&self, id: NodeId) -> &Node {
		&self.nodes[id.0]
	}

	/// Returns the node stored at `id`, mutably.
	pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
		&mut self.nodes[id.0]
	}

	/// Overwrites the node stored at `id`, returning the previous node.
	pub fn replace(&mut self, id: NodeId, node: Node) -> Node {
		std::mem::replace(&mut self.nodes[id.0], node)
	}

	/// Moves the node out of `id`, leaving a [`Node::Hole`] behind.
	pub fn take(&mut self, id: NodeId) -> Node {
		self.replace(id, Node::Hole)
	}

	/// Returns the sequence stored at `id`.
	#[must_use]
	pub fn list(&self, id: ListId) -> &[NodeId] {
		&self.lists[id.0]
	}

	/// Returns the sequence stored at `id`, mutably.
	pub fn list_mut(&mut self, id: ListId) -> &mut Vec<NodeId> {
		&mut self.lists[id.0]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn replacement_is_seen_through_every_holder() {
		let mut tree = Tree::new();
		let text = tree.push(Node::JsxText {
			value: "hi".into(),
		});
		let children = tree.push_list(vec![text]);
		let first = tree.push(Node::ArrayExpression { elements: children });
		let second = tree.push(Node::ArrayExpression { elements: children });

		tree.replace(
			text,
			Node::Literal {
				value: LiteralValue::String("hi".into()),
			},
		);

		for holder in [first, second] {
			let Node::ArrayExpression { elements } = tree.node(holder) else {
				panic!("expected an array");
			};
			assert_eq!(tree.node(tree.list(*elements)[0]).kind(), "Literal");
		}
	}

	#[test]
	fn list_mutation_is_shared() {
		let mut tree = Tree::new();
		let name = tree.push(Node::JsxIdentifier { name: "p".into() });
		let a = tree.push(Node::Hole);
		let b = tree.push(Node::Hole);
		let attributes = tree.push_list(Vec::new());
		let children = tree.push_list(vec![a, b]);
		let element = tree.push(Node::JsxElement {
			name,
			attributes,
			children,
			self_closing: false,
		});
		let array = tree.push(Node::ArrayExpression { elements: children });

		tree.list_mut(children).remove(0);

		let Node::JsxElement { children, .. } = tree.node(element) else {
			panic!("expected an element");
		};
		assert_eq!(tree.list(*children), [b]);
		let Node::ArrayExpression { elements } = tree.node(array) else {
			panic!("expected an array");
		};
		assert_eq!(tree.list(*elements), [b]);
	}

	#[test]
	fn take_leaves_a_hole() {
		let mut tree = Tree::new();
		let id = tree.push(Node::Identifier { name: "x".into() });
		let taken = tree.take(id);
		assert_eq!(taken.kind(), "Identifier");
		assert_eq!(tree.node(id), &Node::Hole);
	}

	#[test]
	fn generic_edges_skip_plain_values() {
		let mut tree = Tree::new();
		let left = tree.push(Node::Identifier { name: "a".into() });
		let right = tree.push(Node::Identifier { name: "b".into() });
		let node = Node::Generic(Box::new(GenericNode::new(
			"BinaryExpression",
			vec![
				("left".into(), Field::Node(left)),
				("operator".into(), Field::Value(Value::from("+"))),
				("right".into(), Field::Node(right)),
			],
		)));
		assert_eq!(node.edges(), vec![Edge::Node(left), Edge::Node(right)]);
		assert_eq!(node.kind(), "BinaryExpression");
	}
}
