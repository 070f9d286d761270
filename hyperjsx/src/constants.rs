//! Holds constant string values used throughout the rewriter.
#![allow(clippy::missing_docs_in_private_items)]

pub const DEFAULT_FACTORY: &str = "h";

/// Inner expression kinds an expression container may be unwrapped to.
pub const CONTAINER_EXPRESSION_KINDS: [&str; 5] = [
	"MemberExpression",
	"BinaryExpression",
	"CallExpression",
	"ArrowFunctionExpression",
	"Identifier",
];

pub const JSX_FRAGMENT: &str = "JSXFragment";
pub const JSX_NAMESPACED_NAME: &str = "JSXNamespacedName";
pub const JSX_EMPTY_EXPRESSION: &str = "JSXEmptyExpression";
pub const JSX_SPREAD_CHILD: &str = "JSXSpreadChild";
