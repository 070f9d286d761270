//! # hyperjsx
//! This is the core library for the hyperjsx JSX rewriter.
//!
//! It rewrites a JSX syntax tree, in place and in a single pre-order walk,
//! into a plain ESTree expression tree in which every element has become a
//! call to a configurable factory function:
//!
//! ```text
//! <div class="a">hi {name}</div>   =>   h("div", {"class": "a"}, ["hi", name])
//! ```
//!
//! Trees come from ESTree JSON ([`Tree::from_estree`]) or from a program
//! parsed by oxc ([`lower_program`]), and go back out as ESTree JSON
//! ([`Tree::to_estree`]).

mod attributes;
mod builders;
mod constants;
mod error;
mod estree;
mod lower;
mod name;
mod options;
mod traverser;
mod tree;
pub mod walk;

use tracing::debug;

pub use crate::{
	error::{EstreeError, TransformError},
	lower::{LowerReturn, lower_program},
	options::Options,
	tree::{Edge, Field, GenericNode, ListId, LiteralValue, Node, NodeId, PropertyKind, Tree},
};
use crate::traverser::Rewriter;

/// Rewrites the JSX in `tree`, in-place.
///
/// On error the tree is left partially rewritten and must not be used.
pub fn transform(tree: &mut Tree, options: &Options) -> Result<(), TransformError> {
	debug!(
		factory = %options.factory,
		quote_prop_names = options.quote_prop_names,
		quote_intrinsic = options.quote_intrinsic,
		keep_comments = options.keep_comments,
		"rewriting JSX tree"
	);

	let mut rewriter = Rewriter::new(options);
	walk::walk(tree, &mut rewriter)?;

	debug!(
		elements = rewriter.elements,
		removed_text = rewriter.removed_text,
		"rewrite complete"
	);
	Ok(())
}
