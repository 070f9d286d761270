//! Reading and writing trees in the ESTree JSON format.
//!
//! Node kinds the rewrite works with are read into their dedicated
//! [`Node`] variants (dropping position information); every other node is
//! kept as a [`GenericNode`] with all of its fields, so it is written back
//! exactly as it was read.

use serde_json::{Map, Value};

use crate::{
	error::EstreeError,
	tree::{Field, GenericNode, ListId, LiteralValue, Node, NodeId, PropertyKind, Tree},
};

impl Tree {
	/// Reads a tree from an ESTree JSON document.
	pub fn from_estree(value: &Value) -> Result<Self, EstreeError> {
		let mut tree = Self::new();
		let root = Reader { tree: &mut tree }.node(value)?;
		tree.set_root(root);
		Ok(tree)
	}

	/// Writes the tree reachable from the root as an ESTree JSON document.
	#[must_use]
	pub fn to_estree(&self) -> Value {
		self.node_to_estree(self.root())
	}

	/// Writes the subtree rooted at `id` as ESTree JSON.
	#[must_use]
	pub fn node_to_estree(&self, id: NodeId) -> Value {
		let mut out = Map::new();
		let mut put = |key: &str, value: Value| {
			out.insert(key.to_string(), value);
		};
		let node = self.node(id);
		if *node == Node::Hole {
			return Value::Null;
		}
		put("type", node.kind().into());

		match node {
			Node::Hole => unreachable!(),
			Node::JsxElement {
				name,
				attributes,
				children,
				self_closing,
			} => {
				let name = self.node_to_estree(*name);
				let mut opening = Map::new();
				opening.insert("type".into(), "JSXOpeningElement".into());
				opening.insert("name".into(), name.clone());
				opening.insert("attributes".into(), self.list_to_estree(*attributes));
				opening.insert("selfClosing".into(), (*self_closing).into());
				put("openingElement", opening.into());
				put(
					"closingElement",
					if *self_closing {
						Value::Null
					} else {
						let mut closing = Map::new();
						closing.insert("type".into(), "JSXClosingElement".into());
						closing.insert("name".into(), name);
						closing.into()
					},
				);
				put("children", self.list_to_estree(*children));
			}
			Node::JsxIdentifier { name } | Node::Identifier { name } => {
				put("name", name.as_str().into());
			}
			Node::JsxMemberExpression { object, property } => {
				put("object", self.node_to_estree(*object));
				put("property", self.node_to_estree(*property));
			}
			Node::JsxAttribute { name, value } => {
				put("name", self.node_to_estree(*name));
				put(
					"value",
					value.map_or(Value::Null, |value| self.node_to_estree(value)),
				);
			}
			Node::JsxSpreadAttribute { argument } | Node::SpreadElement { argument } => {
				put("argument", self.node_to_estree(*argument));
			}
			Node::JsxExpressionContainer { expression } => {
				put("expression", self.node_to_estree(*expression));
			}
			Node::JsxText { value } => {
				put("value", value.as_str().into());
				put("raw", value.as_str().into());
			}
			Node::Literal { value } => {
				put(
					"value",
					match value {
						LiteralValue::Null => Value::Null,
						LiteralValue::Boolean(value) => (*value).into(),
						LiteralValue::Number(value) => value.clone().into(),
						LiteralValue::String(value) => value.as_str().into(),
					},
				);
			}
			Node::Property {
				key,
				value,
				kind,
				method,
				shorthand,
				computed,
			} => {
				put("method", (*method).into());
				put("shorthand", (*shorthand).into());
				put("computed", (*computed).into());
				put("key", self.node_to_estree(*key));
				put("value", self.node_to_estree(*value));
				put("kind", kind.as_str().into());
			}
			Node::ObjectExpression { properties } => {
				put("properties", self.list_to_estree(*properties));
			}
			Node::ArrayExpression { elements } => {
				put("elements", self.list_to_estree(*elements));
			}
			Node::CallExpression {
				callee,
				arguments,
				optional,
			} => {
				put("callee", self.node_to_estree(*callee));
				put("arguments", self.list_to_estree(*arguments));
				put("optional", (*optional).into());
			}
			Node::MemberExpression {
				object,
				property,
				computed,
				optional,
			} => {
				put("object", self.node_to_estree(*object));
				put("property", self.node_to_estree(*property));
				put("computed", (*computed).into());
				put("optional", (*optional).into());
			}
			Node::Generic(generic) => {
				for (key, field) in &generic.fields {
					let value = match field {
						Field::Node(id) => self.node_to_estree(*id),
						Field::List(id) => self.list_to_estree(*id),
						Field::Value(value) => value.clone(),
					};
					put(key.as_str(), value);
				}
			}
		}

		out.into()
	}

	/// Writes a sequence as a JSON array.
	fn list_to_estree(&self, id: ListId) -> Value {
		self.list(id)
			.iter()
			.map(|id| self.node_to_estree(*id))
			.collect()
	}
}

/// Reads ESTree JSON into a tree.
struct Reader<'t> {
	/// The tree being filled.
	tree: &'t mut Tree,
}

/// Describes a JSON value for error messages.
fn describe(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

/// Whether `value` is an object carrying a string `type`.
fn is_node(value: &Value) -> bool {
	value
		.as_object()
		.and_then(|object| object.get("type"))
		.is_some_and(Value::is_string)
}

/// A node object being read, with its kind for error reporting.
struct Object<'v> {
	/// The node's `type`.
	kind: &'v str,
	/// The node's fields.
	fields: &'v Map<String, Value>,
}

impl<'v> Object<'v> {
	/// Returns a required field.
	fn get(&self, field: &'static str) -> Result<&'v Value, EstreeError> {
		self.fields
			.get(field)
			.ok_or_else(|| {
				EstreeError::MissingField {
					kind: self.kind.to_string(),
					field,
				}
			})
	}

	/// Returns a required string field.
	fn str(&self, field: &'static str) -> Result<&'v str, EstreeError> {
		self.get(field)?
			.as_str()
			.ok_or_else(|| self.invalid(field, "a string"))
	}

	/// Returns a required array field.
	fn array(&self, field: &'static str) -> Result<&'v [Value], EstreeError> {
		self.get(field)?
			.as_array()
			.map(Vec::as_slice)
			.ok_or_else(|| self.invalid(field, "an array"))
	}

	/// Returns an optional boolean field, `false` when absent.
	fn flag(&self, field: &'static str) -> Result<bool, EstreeError> {
		match self.fields.get(field) {
			None | Some(Value::Null) => Ok(false),
			Some(Value::Bool(flag)) => Ok(*flag),
			Some(_) => Err(self.invalid(field, "a boolean")),
		}
	}

	/// Builds an [`EstreeError::InvalidField`] for this node.
	fn invalid(&self, field: &'static str, expected: &'static str) -> EstreeError {
		EstreeError::InvalidField {
			kind: self.kind.to_string(),
			field,
			expected,
		}
	}
}

impl Reader<'_> {
	/// Reads a node position; `null` becomes a [`Node::Hole`].
	fn node(&mut self, value: &Value) -> Result<NodeId, EstreeError> {
		let fields = match value {
			Value::Null => return Ok(self.tree.push(Node::Hole)),
			Value::Object(fields) => fields,
			other => {
				return Err(EstreeError::NotANode {
					found: describe(other),
				});
			}
		};
		let kind = fields
			.get("type")
			.and_then(Value::as_str)
			.ok_or(EstreeError::MissingType)?;
		let object = Object { kind, fields };

		let node = match kind {
			"JSXElement" => {
				let opening = object.get("openingElement")?;
				let opening = match opening {
					Value::Object(fields) => {
						Object {
							kind: "JSXOpeningElement",
							fields,
						}
					}
					_ => return Err(object.invalid("openingElement", "an object")),
				};
				Node::JsxElement {
					name: self.node(opening.get("name")?)?,
					attributes: self.list(opening.array("attributes")?)?,
					self_closing: opening.flag("selfClosing")?,
					children: self.list(object.array("children")?)?,
				}
			}
			"JSXIdentifier" => {
				Node::JsxIdentifier {
					name: object.str("name")?.to_string(),
				}
			}
			"JSXMemberExpression" => {
				Node::JsxMemberExpression {
					object: self.node(object.get("object")?)?,
					property: self.node(object.get("property")?)?,
				}
			}
			"JSXAttribute" => {
				Node::JsxAttribute {
					name: self.node(object.get("name")?)?,
					value: match fields.get("value") {
						None | Some(Value::Null) => None,
						Some(value) => Some(self.node(value)?),
					},
				}
			}
			"JSXSpreadAttribute" => {
				Node::JsxSpreadAttribute {
					argument: self.node(object.get("argument")?)?,
				}
			}
			"JSXExpressionContainer" => {
				Node::JsxExpressionContainer {
					expression: self.node(object.get("expression")?)?,
				}
			}
			"JSXText" => {
				Node::JsxText {
					value: object.str("value")?.to_string(),
				}
			}
			"Identifier" => Node::identifier(object.str("name")?),
			// Regular expression and bigint literals carry extra fields the
			// dedicated variant has no room for.
			"Literal" if !fields.contains_key("regex") && !fields.contains_key("bigint") => {
				let value = match object.get("value")? {
					Value::Null => LiteralValue::Null,
					Value::Bool(value) => LiteralValue::Boolean(*value),
					Value::Number(value) => LiteralValue::Number(value.clone()),
					Value::String(value) => LiteralValue::String(value.clone()),
					_ => return Err(object.invalid("value", "a primitive")),
				};
				Node::literal(value)
			}
			"Property" => {
				let kind = match object.str("kind")? {
					"init" => PropertyKind::Init,
					"get" => PropertyKind::Get,
					"set" => PropertyKind::Set,
					_ => return Err(object.invalid("kind", "one of init, get or set")),
				};
				Node::Property {
					key: self.node(object.get("key")?)?,
					value: self.node(object.get("value")?)?,
					kind,
					method: object.flag("method")?,
					shorthand: object.flag("shorthand")?,
					computed: object.flag("computed")?,
				}
			}
			"SpreadElement" => Node::spread(self.node(object.get("argument")?)?),
			"ObjectExpression" => Node::object(self.list(object.array("properties")?)?),
			"ArrayExpression" => Node::array(self.list(object.array("elements")?)?),
			"CallExpression" => {
				Node::CallExpression {
					callee: self.node(object.get("callee")?)?,
					arguments: self.list(object.array("arguments")?)?,
					optional: object.flag("optional")?,
				}
			}
			"MemberExpression" => {
				Node::MemberExpression {
					object: self.node(object.get("object")?)?,
					property: self.node(object.get("property")?)?,
					computed: object.flag("computed")?,
					optional: object.flag("optional")?,
				}
			}
			_ => Node::Generic(Box::new(self.generic(kind, fields)?)),
		};

		Ok(self.tree.push(node))
	}

	/// Reads an array of node positions into a sequence.
	fn list(&mut self, items: &[Value]) -> Result<ListId, EstreeError> {
		let items = items
			.iter()
			.map(|item| self.node(item))
			.collect::<Result<Vec<_>, _>>()?;
		Ok(self.tree.push_list(items))
	}

	/// Reads a node of a kind the rewrite does not model, keeping every
	/// field.
	fn generic(&mut self, kind: &str, fields: &Map<String, Value>) -> Result<GenericNode, EstreeError> {
		let mut out = Vec::with_capacity(fields.len());
		for (key, value) in fields {
			if key == "type" {
				continue;
			}
			let field = match value {
				value if is_node(value) => Field::Node(self.node(value)?),
				Value::Array(items)
					if items.iter().any(is_node)
						&& items.iter().all(|item| item.is_null() || is_node(item)) =>
				{
					Field::List(self.list(items)?)
				}
				value => Field::Value(value.clone()),
			};
			out.push((key.clone(), field));
		}
		Ok(GenericNode::new(kind, out))
	}
}
