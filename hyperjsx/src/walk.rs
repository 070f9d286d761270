//! A pre-order walker over a [`Tree`] with replace/remove semantics.
//!
//! The walker calls [`Visitor::enter`] on a node before looking at its
//! children. A visitor replaces the current node by overwriting its slot in
//! the tree; the walker then descends into whatever occupies the slot, so a
//! replacement is walked as if it had been there from the start.
//!
//! Sequences are re-read on every step rather than snapshotted. A node that
//! was removed from a sequence is not visited again, and changes made to a
//! shared sequence are observed by every node holding it.

use crate::tree::{Edge, ListId, Node, NodeId, Tree};

/// What the walker does after entering a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	/// Walk the children of whatever node now occupies the slot.
	Continue,
	/// Leave the node's children unvisited.
	Skip,
	/// Remove the node from its parent.
	///
	/// A node held in a sequence is removed from it; a node held in a plain
	/// field is replaced with a [`Node::Hole`].
	Remove,
}

/// Callbacks invoked by [`walk`].
pub trait Visitor {
	/// The error that aborts the walk.
	type Error;

	/// Called once per node, before its children.
	fn enter(&mut self, tree: &mut Tree, id: NodeId) -> Result<Action, Self::Error>;
}

/// Walks `tree` depth-first in pre-order, starting at its root.
pub fn walk<V: Visitor>(tree: &mut Tree, visitor: &mut V) -> Result<(), V::Error> {
	let root = tree.root();
	if visit(tree, visitor, root)? == Action::Remove {
		tree.replace(root, Node::Hole);
	}
	Ok(())
}

/// Visits a node and, unless told otherwise, its children.
fn visit<V: Visitor>(tree: &mut Tree, visitor: &mut V, id: NodeId) -> Result<Action, V::Error> {
	let action = visitor.enter(tree, id)?;
	if action != Action::Continue {
		return Ok(action);
	}

	for edge in tree.node(id).edges() {
		match edge {
			Edge::Node(child) => {
				if visit(tree, visitor, child)? == Action::Remove {
					tree.replace(child, Node::Hole);
				}
			}
			Edge::List(list) => visit_list(tree, visitor, list)?,
		}
	}

	Ok(Action::Continue)
}

/// Visits every node of a sequence, removing the ones the visitor asks to
/// remove.
fn visit_list<V: Visitor>(tree: &mut Tree, visitor: &mut V, list: ListId) -> Result<(), V::Error> {
	let mut index = 0;
	while let Some(&child) = tree.list(list).get(index) {
		if visit(tree, visitor, child)? == Action::Remove {
			tree.list_mut(list).remove(index);
		} else {
			index += 1;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::convert::Infallible;

	use super::*;
	use crate::tree::{Field, GenericNode};

	/// Records visited identifier names and applies scripted actions.
	#[derive(Default)]
	struct Recorder {
		seen: Vec<String>,
	}

	impl Visitor for Recorder {
		type Error = Infallible;

		fn enter(&mut self, tree: &mut Tree, id: NodeId) -> Result<Action, Infallible> {
			let Node::Identifier { name } = tree.node(id) else {
				return Ok(Action::Continue);
			};
			self.seen.push(name.clone());
			Ok(match name.as_str() {
				"drop" => Action::Remove,
				"wrap" => {
					let inner = tree.push(Node::identifier("inner"));
					let list = tree.push_list(vec![inner]);
					tree.replace(id, Node::array(list));
					Action::Continue
				}
				_ => Action::Continue,
			})
		}
	}

	fn ident(tree: &mut Tree, name: &str) -> NodeId {
		tree.push(Node::identifier(name))
	}

	#[test]
	fn walks_in_pre_order() {
		let mut tree = Tree::new();
		let a = ident(&mut tree, "a");
		let b = ident(&mut tree, "b");
		let c = ident(&mut tree, "c");
		let args = tree.push_list(vec![b, c]);
		let root = tree.push(Node::call(a, args));
		tree.set_root(root);

		let mut recorder = Recorder::default();
		walk(&mut tree, &mut recorder).unwrap();
		assert_eq!(recorder.seen, ["a", "b", "c"]);
	}

	#[test]
	fn removal_from_a_list_continues_at_the_same_index() {
		let mut tree = Tree::new();
		let ids = ["a", "drop", "drop", "b"].map(|name| ident(&mut tree, name));
		let list = tree.push_list(ids.to_vec());
		let root = tree.push(Node::array(list));
		tree.set_root(root);

		let mut recorder = Recorder::default();
		walk(&mut tree, &mut recorder).unwrap();
		assert_eq!(recorder.seen, ["a", "drop", "drop", "b"]);
		assert_eq!(tree.list(list), [ids[0], ids[3]]);
	}

	#[test]
	fn removal_from_a_field_leaves_a_hole() {
		let mut tree = Tree::new();
		let dropped = ident(&mut tree, "drop");
		let root = tree.push(Node::spread(dropped));
		tree.set_root(root);

		walk(&mut tree, &mut Recorder::default()).unwrap();
		assert_eq!(tree.node(dropped), &Node::Hole);
	}

	#[test]
	fn replacements_are_walked() {
		let mut tree = Tree::new();
		let wrapped = ident(&mut tree, "wrap");
		let body = tree.push_list(vec![wrapped]);
		let root = tree.push(Node::Generic(Box::new(GenericNode::new(
			"Program",
			vec![("body".into(), Field::List(body))],
		))));
		tree.set_root(root);

		let mut recorder = Recorder::default();
		walk(&mut tree, &mut recorder).unwrap();
		assert_eq!(recorder.seen, ["wrap", "inner"]);
		assert_eq!(tree.node(wrapped).kind(), "ArrayExpression");
	}
}
