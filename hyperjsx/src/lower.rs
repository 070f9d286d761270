//! Lowers a program parsed by oxc into a [`Tree`].
//!
//! Covers the syntax a JSX component module typically contains: imports and
//! exports, function and variable declarations, the common statements and
//! expression forms, and the whole JSX surface. Anything else is reported as
//! a diagnostic and left as a hole, so a single pass reports every
//! unsupported construct.

use htmlentity::entity::{ICodedDataTrait, decode};
use oxc::{
	ast::ast::{
		Argument, ArrayExpressionElement, ArrowFunctionExpression, AssignmentTarget, BindingPattern,
		BindingPatternKind, ComputedMemberExpression, Declaration, Expression,
		ExportDefaultDeclarationKind, FormalParameters, Function, ImportDeclarationSpecifier,
		JSXAttributeItem, JSXAttributeName, JSXAttributeValue, JSXChild, JSXElement, JSXElementName,
		JSXExpression, JSXExpressionContainer, JSXFragment, JSXMemberExpression,
		JSXMemberExpressionObject, ModuleExportName, ObjectPropertyKind, Program, PropertyKey,
		PropertyKind as OxcPropertyKind, Statement, StaticMemberExpression, TemplateLiteral,
		VariableDeclaration,
	},
	diagnostics::OxcDiagnostic,
	span::{GetSpan, Span},
};
use serde_json::Value;

use crate::{
	constants::{JSX_EMPTY_EXPRESSION, JSX_FRAGMENT, JSX_NAMESPACED_NAME, JSX_SPREAD_CHILD},
	tree::{Field, GenericNode, ListId, LiteralValue, Node, NodeId, PropertyKind, Tree},
};

/// Return value from [`lower_program()`].
///
/// Be sure to check [`LowerReturn::errors`]; every error stands for a
/// construct that was replaced with a hole in [`LowerReturn::tree`].
pub struct LowerReturn {
	/// The lowered program.
	pub tree: Tree,
	/// Any constructs that could not be lowered.
	pub errors: Vec<OxcDiagnostic>,
}

/// Lowers `program` into a [`Tree`] rooted at an ESTree `Program`.
#[must_use]
pub fn lower_program(program: &Program<'_>) -> LowerReturn {
	let mut lowerer = Lowerer {
		tree: Tree::new(),
		errors: Vec::new(),
	};

	let body = program
		.body
		.iter()
		.map(|statement| lowerer.statement(statement))
		.collect();
	let body = lowerer.tree.push_list(body);
	let source_type = if program.source_type.is_module() {
		"module"
	} else {
		"script"
	};
	let root = lowerer.generic(
		"Program",
		vec![
			("sourceType", Field::Value(source_type.into())),
			("body", Field::List(body)),
		],
	);
	lowerer.tree.set_root(root);

	LowerReturn {
		tree: lowerer.tree,
		errors: lowerer.errors,
	}
}

/// Decodes the HTML entities oxc leaves in JSX text and attribute strings.
fn decode_entities(value: &str) -> String {
	let data = decode(value.as_bytes());
	let decoded = data.bytes();
	String::from_utf8_lossy(decoded.as_ref()).into_owned()
}

/// Converts oxc nodes into tree nodes.
struct Lowerer {
	/// The tree being built.
	tree: Tree,
	/// Constructs that could not be lowered.
	errors: Vec<OxcDiagnostic>,
}

impl Lowerer {
	/// Reports an unsupported construct and stands a hole in for it.
	fn unsupported(&mut self, what: &str, span: Span) -> NodeId {
		self.errors
			.push(OxcDiagnostic::error(format!("{what} is not supported in JSX lowering")).with_label(span));
		self.tree.push(Node::Hole)
	}

	/// Pushes a generic node.
	fn generic(&mut self, kind: &str, fields: Vec<(&str, Field)>) -> NodeId {
		let fields = fields
			.into_iter()
			.map(|(key, field)| (key.to_string(), field))
			.collect();
		self.tree.push(Node::Generic(Box::new(GenericNode::new(kind, fields))))
	}

	/// Lowers a list of items with `lower`, returning the sequence.
	fn list<T>(&mut self, items: &[T], mut lower: impl FnMut(&mut Self, &T) -> NodeId) -> ListId {
		let items = items.iter().map(|item| lower(self, item)).collect();
		self.tree.push_list(items)
	}

	/// Lowers an optional expression into a field, `null` when absent.
	fn optional_expression(&mut self, expression: Option<&Expression<'_>>) -> Field {
		match expression {
			Some(expression) => Field::Node(self.expression(expression)),
			None => Field::Value(Value::Null),
		}
	}

	/// Pushes a string literal.
	fn string(&mut self, value: &str) -> NodeId {
		self.tree.push(Node::string_literal(value))
	}

	/// Lowers a statement.
	fn statement(&mut self, statement: &Statement<'_>) -> NodeId {
		match statement {
			Statement::ExpressionStatement(statement) => {
				let expression = self.expression(&statement.expression);
				self.generic("ExpressionStatement", vec![("expression", Field::Node(expression))])
			}
			Statement::ReturnStatement(statement) => {
				let argument = self.optional_expression(statement.argument.as_ref());
				self.generic("ReturnStatement", vec![("argument", argument)])
			}
			Statement::VariableDeclaration(declaration) => self.variable_declaration(declaration),
			Statement::FunctionDeclaration(function) => self.function("FunctionDeclaration", function),
			Statement::BlockStatement(block) => {
				let body = self.list(&block.body, Self::statement);
				self.generic("BlockStatement", vec![("body", Field::List(body))])
			}
			Statement::IfStatement(statement) => {
				let test = self.expression(&statement.test);
				let consequent = self.statement(&statement.consequent);
				let alternate = match &statement.alternate {
					Some(alternate) => Field::Node(self.statement(alternate)),
					None => Field::Value(Value::Null),
				};
				self.generic(
					"IfStatement",
					vec![
						("test", Field::Node(test)),
						("consequent", Field::Node(consequent)),
						("alternate", alternate),
					],
				)
			}
			Statement::ImportDeclaration(import) => {
				let specifiers = match &import.specifiers {
					Some(specifiers) => self.list(specifiers, Self::import_specifier),
					None => self.tree.push_list(Vec::new()),
				};
				let source = self.string(import.source.value.as_str());
				self.generic(
					"ImportDeclaration",
					vec![
						("specifiers", Field::List(specifiers)),
						("source", Field::Node(source)),
					],
				)
			}
			Statement::ExportDefaultDeclaration(export) => {
				let declaration = match &export.declaration {
					ExportDefaultDeclarationKind::FunctionDeclaration(function) => {
						self.function("FunctionDeclaration", function)
					}
					kind => {
						match kind.as_expression() {
							Some(expression) => self.expression(expression),
							None => self.unsupported("this default export", kind.span()),
						}
					}
				};
				self.generic(
					"ExportDefaultDeclaration",
					vec![("declaration", Field::Node(declaration))],
				)
			}
			Statement::ExportNamedDeclaration(export) => {
				let declaration = match &export.declaration {
					Some(Declaration::VariableDeclaration(declaration)) => {
						Field::Node(self.variable_declaration(declaration))
					}
					Some(Declaration::FunctionDeclaration(function)) => {
						Field::Node(self.function("FunctionDeclaration", function))
					}
					Some(other) => Field::Node(self.unsupported("this exported declaration", other.span())),
					None => Field::Value(Value::Null),
				};
				let specifiers = self.list(&export.specifiers, |this, specifier| {
					let local = this.module_export_name(&specifier.local);
					let exported = this.module_export_name(&specifier.exported);
					this.generic(
						"ExportSpecifier",
						vec![("local", Field::Node(local)), ("exported", Field::Node(exported))],
					)
				});
				let source = match &export.source {
					Some(source) => Field::Node(self.string(source.value.as_str())),
					None => Field::Value(Value::Null),
				};
				self.generic(
					"ExportNamedDeclaration",
					vec![
						("declaration", declaration),
						("specifiers", Field::List(specifiers)),
						("source", source),
					],
				)
			}
			other => self.unsupported("this statement", other.span()),
		}
	}

	/// Lowers a `var`/`let`/`const` declaration.
	fn variable_declaration(&mut self, declaration: &VariableDeclaration<'_>) -> NodeId {
		let declarations = self.list(&declaration.declarations, |this, declarator| {
			let id = this.binding(&declarator.id);
			let init = this.optional_expression(declarator.init.as_ref());
			this.generic("VariableDeclarator", vec![("id", Field::Node(id)), ("init", init)])
		});
		self.generic(
			"VariableDeclaration",
			vec![
				("declarations", Field::List(declarations)),
				("kind", Field::Value(declaration.kind.as_str().into())),
			],
		)
	}

	/// Lowers one specifier of an import declaration.
	fn import_specifier(&mut self, specifier: &ImportDeclarationSpecifier<'_>) -> NodeId {
		match specifier {
			ImportDeclarationSpecifier::ImportSpecifier(specifier) => {
				let imported = self.module_export_name(&specifier.imported);
				let local = self.tree.push(Node::identifier(specifier.local.name.as_str()));
				self.generic(
					"ImportSpecifier",
					vec![("imported", Field::Node(imported)), ("local", Field::Node(local))],
				)
			}
			ImportDeclarationSpecifier::ImportDefaultSpecifier(specifier) => {
				let local = self.tree.push(Node::identifier(specifier.local.name.as_str()));
				self.generic("ImportDefaultSpecifier", vec![("local", Field::Node(local))])
			}
			ImportDeclarationSpecifier::ImportNamespaceSpecifier(specifier) => {
				let local = self.tree.push(Node::identifier(specifier.local.name.as_str()));
				self.generic("ImportNamespaceSpecifier", vec![("local", Field::Node(local))])
			}
		}
	}

	/// `name` in `import { name }` / `export { name }`; string names become
	/// literals.
	fn module_export_name(&mut self, name: &ModuleExportName<'_>) -> NodeId {
		match name {
			ModuleExportName::IdentifierName(ident) => self.tree.push(Node::identifier(ident.name.as_str())),
			ModuleExportName::IdentifierReference(ident) => {
				self.tree.push(Node::identifier(ident.name.as_str()))
			}
			ModuleExportName::StringLiteral(lit) => self.string(lit.value.as_str()),
		}
	}

	/// Lowers a binding; only plain identifiers are supported.
	fn binding(&mut self, pattern: &BindingPattern<'_>) -> NodeId {
		match &pattern.kind {
			BindingPatternKind::BindingIdentifier(ident) => {
				self.tree.push(Node::identifier(ident.name.as_str()))
			}
			_ => self.unsupported("destructuring", pattern.span()),
		}
	}

	/// Lowers a parameter list. A rest parameter is reported and its hole
	/// returned as the error.
	fn params(&mut self, params: &FormalParameters<'_>) -> Result<ListId, NodeId> {
		if let Some(rest) = &params.rest {
			return Err(self.unsupported("a rest parameter", rest.span));
		}
		Ok(self.list(&params.items, |this, param| this.binding(&param.pattern)))
	}

	/// Lowers a function declaration or expression.
	fn function(&mut self, kind: &str, function: &Function<'_>) -> NodeId {
		let id = match &function.id {
			Some(id) => Field::Node(self.tree.push(Node::identifier(id.name.as_str()))),
			None => Field::Value(Value::Null),
		};
		let params = match self.params(&function.params) {
			Ok(params) => params,
			Err(hole) => return hole,
		};
		let body = match &function.body {
			Some(body) => {
				let statements = self.list(&body.statements, Self::statement);
				Field::Node(self.generic("BlockStatement", vec![("body", Field::List(statements))]))
			}
			None => Field::Value(Value::Null),
		};

		self.generic(
			kind,
			vec![
				("id", id),
				("expression", Field::Value(false.into())),
				("generator", Field::Value(function.generator.into())),
				("async", Field::Value(function.r#async.into())),
				("params", Field::List(params)),
				("body", body),
			],
		)
	}

	/// Converts a numeric literal's value to JSON.
	#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
	fn number(value: f64) -> Option<serde_json::Number> {
		// Integral values are kept integral so they print as `1`, not `1.0`.
		if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
			Some((value as i64).into())
		} else {
			serde_json::Number::from_f64(value)
		}
	}

	/// `object.property`
	fn static_member(&mut self, member: &StaticMemberExpression<'_>) -> NodeId {
		let object = self.expression(&member.object);
		let property = self.tree.push(Node::identifier(member.property.name.as_str()));
		self.tree.push(Node::MemberExpression {
			object,
			property,
			computed: false,
			optional: member.optional,
		})
	}

	/// `object[expression]`
	fn computed_member(&mut self, member: &ComputedMemberExpression<'_>) -> NodeId {
		let object = self.expression(&member.object);
		let property = self.expression(&member.expression);
		self.tree.push(Node::MemberExpression {
			object,
			property,
			computed: true,
			optional: member.optional,
		})
	}

	/// Lowers an expression.
	fn expression(&mut self, expression: &Expression<'_>) -> NodeId {
		match expression {
			Expression::Identifier(ident) => self.tree.push(Node::identifier(ident.name.as_str())),
			Expression::StringLiteral(lit) => self.string(lit.value.as_str()),
			Expression::BooleanLiteral(lit) => {
				self.tree.push(Node::literal(LiteralValue::Boolean(lit.value)))
			}
			Expression::NullLiteral(_) => self.tree.push(Node::null_literal()),
			Expression::NumericLiteral(lit) => {
				match Self::number(lit.value) {
					Some(number) => self.tree.push(Node::literal(LiteralValue::Number(number))),
					None => self.unsupported("a non-finite number", lit.span),
				}
			}
			Expression::TemplateLiteral(template) => self.template(template),
			Expression::ThisExpression(_) => self.generic("ThisExpression", Vec::new()),
			Expression::ParenthesizedExpression(paren) => self.expression(&paren.expression),
			Expression::StaticMemberExpression(member) => self.static_member(member),
			Expression::ComputedMemberExpression(member) => self.computed_member(member),
			Expression::BinaryExpression(binary) => {
				let left = self.expression(&binary.left);
				let right = self.expression(&binary.right);
				self.generic(
					"BinaryExpression",
					vec![
						("operator", Field::Value(binary.operator.as_str().into())),
						("left", Field::Node(left)),
						("right", Field::Node(right)),
					],
				)
			}
			Expression::LogicalExpression(logical) => {
				let left = self.expression(&logical.left);
				let right = self.expression(&logical.right);
				self.generic(
					"LogicalExpression",
					vec![
						("operator", Field::Value(logical.operator.as_str().into())),
						("left", Field::Node(left)),
						("right", Field::Node(right)),
					],
				)
			}
			Expression::UnaryExpression(unary) => {
				let argument = self.expression(&unary.argument);
				self.generic(
					"UnaryExpression",
					vec![
						("operator", Field::Value(unary.operator.as_str().into())),
						("prefix", Field::Value(true.into())),
						("argument", Field::Node(argument)),
					],
				)
			}
			Expression::AssignmentExpression(assignment) => {
				let left = match &assignment.left {
					AssignmentTarget::AssignmentTargetIdentifier(ident) => {
						self.tree.push(Node::identifier(ident.name.as_str()))
					}
					AssignmentTarget::StaticMemberExpression(member) => self.static_member(member),
					AssignmentTarget::ComputedMemberExpression(member) => self.computed_member(member),
					other => self.unsupported("this assignment target", other.span()),
				};
				let right = self.expression(&assignment.right);
				self.generic(
					"AssignmentExpression",
					vec![
						("operator", Field::Value(assignment.operator.as_str().into())),
						("left", Field::Node(left)),
						("right", Field::Node(right)),
					],
				)
			}
			Expression::ConditionalExpression(conditional) => {
				let test = self.expression(&conditional.test);
				let consequent = self.expression(&conditional.consequent);
				let alternate = self.expression(&conditional.alternate);
				self.generic(
					"ConditionalExpression",
					vec![
						("test", Field::Node(test)),
						("consequent", Field::Node(consequent)),
						("alternate", Field::Node(alternate)),
					],
				)
			}
			Expression::CallExpression(call) => {
				let callee = self.expression(&call.callee);
				let arguments = self.list(&call.arguments, Self::argument);
				self.tree.push(Node::CallExpression {
					callee,
					arguments,
					optional: call.optional,
				})
			}
			Expression::NewExpression(new) => {
				let callee = self.expression(&new.callee);
				let arguments = self.list(&new.arguments, Self::argument);
				self.generic(
					"NewExpression",
					vec![("callee", Field::Node(callee)), ("arguments", Field::List(arguments))],
				)
			}
			Expression::FunctionExpression(function) => self.function("FunctionExpression", function),
			Expression::ArrowFunctionExpression(arrow) => self.arrow(arrow),
			Expression::ArrayExpression(array) => {
				let elements = self.list(&array.elements, |this, element| {
					match element {
						ArrayExpressionElement::SpreadElement(spread) => {
							let argument = this.expression(&spread.argument);
							this.tree.push(Node::spread(argument))
						}
						ArrayExpressionElement::Elision(_) => this.tree.push(Node::Hole),
						_ => {
							match element.as_expression() {
								Some(expression) => this.expression(expression),
								None => this.unsupported("this array element", element.span()),
							}
						}
					}
				});
				self.tree.push(Node::array(elements))
			}
			Expression::ObjectExpression(object) => {
				let properties = self.list(&object.properties, Self::object_property);
				self.tree.push(Node::object(properties))
			}
			Expression::JSXElement(element) => self.jsx_element(element),
			Expression::JSXFragment(fragment) => self.jsx_fragment(fragment),
			other => self.unsupported("this expression", other.span()),
		}
	}

	/// Lowers a template literal, keeping both the raw and cooked text of
	/// each quasi.
	fn template(&mut self, template: &TemplateLiteral<'_>) -> NodeId {
		let quasis = self.list(&template.quasis, |this, quasi| {
			let cooked = quasi
				.value
				.cooked
				.as_ref()
				.map_or(Value::Null, |cooked| cooked.as_str().into());
			let mut value = serde_json::Map::new();
			value.insert("raw".into(), quasi.value.raw.as_str().into());
			value.insert("cooked".into(), cooked);
			this.generic(
				"TemplateElement",
				vec![
					("value", Field::Value(value.into())),
					("tail", Field::Value(quasi.tail.into())),
				],
			)
		});
		let expressions = self.list(&template.expressions, Self::expression);
		self.generic(
			"TemplateLiteral",
			vec![
				("quasis", Field::List(quasis)),
				("expressions", Field::List(expressions)),
			],
		)
	}

	/// Lowers a call argument.
	fn argument(&mut self, argument: &Argument<'_>) -> NodeId {
		if let Argument::SpreadElement(spread) = argument {
			let inner = self.expression(&spread.argument);
			return self.tree.push(Node::spread(inner));
		}
		match argument.as_expression() {
			Some(expression) => self.expression(expression),
			None => self.unsupported("this argument", argument.span()),
		}
	}

	/// Lowers an object literal member.
	fn object_property(&mut self, property: &ObjectPropertyKind<'_>) -> NodeId {
		let property = match property {
			ObjectPropertyKind::ObjectProperty(property) => property,
			ObjectPropertyKind::SpreadProperty(spread) => {
				let argument = self.expression(&spread.argument);
				return self.tree.push(Node::spread(argument));
			}
		};

		let key = match &property.key {
			PropertyKey::StaticIdentifier(ident) => self.tree.push(Node::identifier(ident.name.as_str())),
			key => {
				match key.as_expression() {
					Some(expression) => self.expression(expression),
					None => self.unsupported("this property key", key.span()),
				}
			}
		};
		let value = self.expression(&property.value);

		self.tree.push(Node::Property {
			key,
			value,
			kind: match property.kind {
				OxcPropertyKind::Init => PropertyKind::Init,
				OxcPropertyKind::Get => PropertyKind::Get,
				OxcPropertyKind::Set => PropertyKind::Set,
			},
			method: property.method,
			shorthand: property.shorthand,
			computed: property.computed,
		})
	}

	/// Lowers an arrow function. Expression bodies stay bare expressions.
	fn arrow(&mut self, arrow: &ArrowFunctionExpression<'_>) -> NodeId {
		let params = match self.params(&arrow.params) {
			Ok(params) => params,
			Err(hole) => return hole,
		};

		let body = if arrow.expression {
			match arrow.body.statements.first() {
				Some(Statement::ExpressionStatement(statement)) => self.expression(&statement.expression),
				_ => self.unsupported("this arrow function body", arrow.body.span),
			}
		} else {
			let statements = self.list(&arrow.body.statements, Self::statement);
			self.generic("BlockStatement", vec![("body", Field::List(statements))])
		};

		self.generic(
			"ArrowFunctionExpression",
			vec![
				("id", Field::Value(Value::Null)),
				("expression", Field::Value(arrow.expression.into())),
				("generator", Field::Value(false.into())),
				("async", Field::Value(arrow.r#async.into())),
				("params", Field::List(params)),
				("body", Field::Node(body)),
			],
		)
	}

	/// Pushes a `JSXIdentifier`.
	fn jsx_identifier(&mut self, name: &str) -> NodeId {
		self.tree.push(Node::JsxIdentifier { name: name.to_string() })
	}

	/// Lowers an element with its name, attributes and children.
	fn jsx_element(&mut self, element: &JSXElement<'_>) -> NodeId {
		let opening = &element.opening_element;
		let name = match &opening.name {
			JSXElementName::Identifier(ident) => self.jsx_identifier(ident.name.as_str()),
			JSXElementName::IdentifierReference(ident) => self.jsx_identifier(ident.name.as_str()),
			JSXElementName::MemberExpression(member) => self.jsx_member(member),
			JSXElementName::ThisExpression(_) => self.jsx_identifier("this"),
			JSXElementName::NamespacedName(name) => {
				let namespace = self.jsx_identifier(name.namespace.name.as_str());
				let local = self.jsx_identifier(name.name.name.as_str());
				self.generic(
					JSX_NAMESPACED_NAME,
					vec![("namespace", Field::Node(namespace)), ("name", Field::Node(local))],
				)
			}
		};
		let attributes = self.list(&opening.attributes, Self::jsx_attribute);
		let children = self.list(&element.children, Self::jsx_child);

		self.tree.push(Node::JsxElement {
			name,
			attributes,
			children,
			self_closing: element.closing_element.is_none(),
		})
	}

	/// Lowers a dotted element name, innermost object first.
	fn jsx_member(&mut self, member: &JSXMemberExpression<'_>) -> NodeId {
		let object = match &member.object {
			JSXMemberExpressionObject::IdentifierReference(ident) => {
				self.jsx_identifier(ident.name.as_str())
			}
			JSXMemberExpressionObject::MemberExpression(inner) => self.jsx_member(inner),
			JSXMemberExpressionObject::ThisExpression(_) => self.jsx_identifier("this"),
		};
		let property = self.jsx_identifier(member.property.name.as_str());
		self.tree.push(Node::JsxMemberExpression { object, property })
	}

	/// Lowers an attribute or spread attribute.
	fn jsx_attribute(&mut self, item: &JSXAttributeItem<'_>) -> NodeId {
		let attribute = match item {
			JSXAttributeItem::Attribute(attribute) => attribute,
			JSXAttributeItem::SpreadAttribute(spread) => {
				let argument = self.expression(&spread.argument);
				return self.tree.push(Node::JsxSpreadAttribute { argument });
			}
		};

		let name = match &attribute.name {
			JSXAttributeName::Identifier(ident) => self.jsx_identifier(ident.name.as_str()),
			JSXAttributeName::NamespacedName(name) => {
				let namespace = self.jsx_identifier(name.namespace.name.as_str());
				let local = self.jsx_identifier(name.name.name.as_str());
				self.generic(
					JSX_NAMESPACED_NAME,
					vec![("namespace", Field::Node(namespace)), ("name", Field::Node(local))],
				)
			}
		};
		let value = attribute.value.as_ref().map(|value| {
			match value {
				JSXAttributeValue::StringLiteral(lit) => {
					self.tree.push(Node::string_literal(decode_entities(lit.value.as_str())))
				}
				JSXAttributeValue::ExpressionContainer(container) => self.jsx_container(container),
				JSXAttributeValue::Element(element) => self.jsx_element(element),
				JSXAttributeValue::Fragment(fragment) => self.jsx_fragment(fragment),
			}
		});

		self.tree.push(Node::JsxAttribute { name, value })
	}

	/// Lowers a child of an element or fragment.
	fn jsx_child(&mut self, child: &JSXChild<'_>) -> NodeId {
		match child {
			JSXChild::Text(text) => {
				self.tree.push(Node::JsxText {
					value: decode_entities(text.value.as_str()),
				})
			}
			JSXChild::Element(element) => self.jsx_element(element),
			JSXChild::Fragment(fragment) => self.jsx_fragment(fragment),
			JSXChild::ExpressionContainer(container) => self.jsx_container(container),
			JSXChild::Spread(spread) => {
				let expression = self.expression(&spread.expression);
				self.generic(JSX_SPREAD_CHILD, vec![("expression", Field::Node(expression))])
			}
		}
	}

	/// Lowers `{expression}`; `{}` holds a `JSXEmptyExpression`.
	fn jsx_container(&mut self, container: &JSXExpressionContainer<'_>) -> NodeId {
		let expression = match &container.expression {
			JSXExpression::EmptyExpression(_) => self.generic(JSX_EMPTY_EXPRESSION, Vec::new()),
			expression => {
				match expression.as_expression() {
					Some(expression) => self.expression(expression),
					None => self.unsupported("this JSX expression", container.span),
				}
			}
		};
		self.tree.push(Node::JsxExpressionContainer { expression })
	}

	/// Lowers a fragment into a generic node; the rewrite rejects it.
	fn jsx_fragment(&mut self, fragment: &JSXFragment<'_>) -> NodeId {
		let children = self.list(&fragment.children, Self::jsx_child);
		self.generic(JSX_FRAGMENT, vec![("children", Field::List(children))])
	}
}


#[cfg(test)]
mod tests {
	use oxc::{allocator::Allocator, parser::Parser, span::SourceType};
	use serde_json::json;

	use super::*;

	fn lower(source: &str) -> LowerReturn {
		let allocator = Allocator::default();
		let parsed = Parser::new(&allocator, source, SourceType::jsx()).parse();
		assert!(parsed.errors.is_empty(), "fixture must parse");
		lower_program(&parsed.program)
	}

	/// Returns the expression of the first statement.
	fn first_expression(tree: &Tree) -> Value {
		let program = tree.to_estree();
		program["body"][0]["expression"].clone()
	}

	#[test]
	fn lowers_jsx_elements() {
		let lowered = lower(r#"<div id="x">hi</div>;"#);
		assert!(lowered.errors.is_empty());
		assert_eq!(
			first_expression(&lowered.tree),
			json!({
				"type": "JSXElement",
				"openingElement": {
					"type": "JSXOpeningElement",
					"name": { "type": "JSXIdentifier", "name": "div" },
					"attributes": [{
						"type": "JSXAttribute",
						"name": { "type": "JSXIdentifier", "name": "id" },
						"value": { "type": "Literal", "value": "x" }
					}],
					"selfClosing": false
				},
				"closingElement": {
					"type": "JSXClosingElement",
					"name": { "type": "JSXIdentifier", "name": "div" }
				},
				"children": [{ "type": "JSXText", "value": "hi", "raw": "hi" }]
			})
		);
	}

	#[test]
	fn capitalized_and_dotted_names_are_jsx_names() {
		let lowered = lower("<Foo.Bar/>;");
		let element = first_expression(&lowered.tree);
		assert_eq!(
			element["openingElement"]["name"],
			json!({
				"type": "JSXMemberExpression",
				"object": { "type": "JSXIdentifier", "name": "Foo" },
				"property": { "type": "JSXIdentifier", "name": "Bar" }
			})
		);
		assert_eq!(element["closingElement"], Value::Null);
	}

	#[test]
	fn parentheses_are_dropped() {
		let lowered = lower("(a + 1);");
		assert_eq!(
			first_expression(&lowered.tree),
			json!({
				"type": "BinaryExpression",
				"operator": "+",
				"left": { "type": "Identifier", "name": "a" },
				"right": { "type": "Literal", "value": 1 }
			})
		);
	}

	#[test]
	fn unsupported_syntax_is_reported() {
		let lowered = lower("class A {}\nx++;");
		assert_eq!(lowered.errors.len(), 2);
		assert_eq!(lowered.tree.to_estree()["body"], json!([null, { "type": "ExpressionStatement", "expression": null }]));
	}

	#[test]
	fn arrow_bodies_are_lowered() {
		let lowered = lower("const f = (x) => <li>{x}</li>;");
		assert!(lowered.errors.is_empty());
		let program = lowered.tree.to_estree();
		let init = &program["body"][0]["declarations"][0]["init"];
		assert_eq!(init["type"], "ArrowFunctionExpression");
		assert_eq!(init["params"], json!([{ "type": "Identifier", "name": "x" }]));
		assert_eq!(init["body"]["type"], "JSXElement");
		assert_eq!(program["body"][0]["kind"], "const");
	}

	#[test]
	fn component_modules_are_lowered() {
		let lowered = lower(
			"import { h } from \"x\";\nexport default function App(props) {\n\tif (props.hidden) return null;\n\tlabel = `n: ${props.n}`;\n\treturn <p>{label}</p>;\n}",
		);
		assert!(lowered.errors.is_empty());
		let program = lowered.tree.to_estree();
		assert_eq!(
			program["body"][0],
			json!({
				"type": "ImportDeclaration",
				"specifiers": [{
					"type": "ImportSpecifier",
					"imported": { "type": "Identifier", "name": "h" },
					"local": { "type": "Identifier", "name": "h" }
				}],
				"source": { "type": "Literal", "value": "x" }
			})
		);
		let function = &program["body"][1]["declaration"];
		assert_eq!(function["type"], "FunctionDeclaration");
		assert_eq!(function["id"]["name"], "App");
		let body = &function["body"]["body"];
		assert_eq!(body[0]["type"], "IfStatement");
		assert_eq!(body[0]["alternate"], Value::Null);
		assert_eq!(body[1]["expression"]["type"], "AssignmentExpression");
		assert_eq!(
			body[1]["expression"]["right"]["quasis"][0]["value"],
			json!({ "raw": "n: ", "cooked": "n: " })
		);
		assert_eq!(body[2]["argument"]["type"], "JSXElement");
	}

	#[test]
	fn entities_are_decoded() {
		let lowered = lower(r#"<p title="a&amp;b">x &lt; y&#33;</p>;"#);
		let element = first_expression(&lowered.tree);
		assert_eq!(
			element["openingElement"]["attributes"][0]["value"]["value"],
			"a&b"
		);
		assert_eq!(element["children"][0]["value"], "x < y!");
	}
}
