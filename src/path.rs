use crate::Cost;

use std::fmt;
use std::ops::{Deref, Index};

/// A Path found by a search.
///
/// Stores the sequence of Nodes from the start to the goal (both inclusive), each paired with the
/// cumulative Cost of reaching it. The first step always has a Cost of zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<N, C> {
	steps: Vec<(N, C)>,
}

impl<N, C: Cost> Path<N, C> {
	/// creates a new Path from `(Node, cumulative Cost)` steps
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use implicit_pathfinding::Path;
	/// let path = Path::new(vec![('a', 0), ('b', 3), ('c', 4)]);
	///
	/// assert_eq!(path.cost(), 4);
	/// assert_eq!(path.len(), 3);
	/// ```
	pub fn new(steps: Vec<(N, C)>) -> Path<N, C> {
		Path { steps }
	}

	/// The total Cost of the Path, or zero if the Path is empty
	pub fn cost(&self) -> C {
		self.steps
			.last()
			.map(|(_, cost)| cost.clone())
			.unwrap_or_else(C::zero)
	}

	/// The number of Edges in the Path
	///
	/// ```
	/// # use implicit_pathfinding::Path;
	/// assert_eq!(Path::new(vec![('a', 0)]).edge_count(), 0);
	/// assert_eq!(Path::new(vec![('a', 0), ('b', 1)]).edge_count(), 1);
	/// ```
	pub fn edge_count(&self) -> usize {
		self.steps.len().saturating_sub(1)
	}

	/// An Iterator over the Nodes of the Path, without their Costs
	pub fn nodes(&self) -> impl DoubleEndedIterator<Item = &N> + ExactSizeIterator {
		self.steps.iter().map(|(node, _)| node)
	}

	/// The first Node of the Path
	pub fn start(&self) -> Option<&N> {
		self.steps.first().map(|(node, _)| node)
	}

	/// The last Node of the Path, which is the one that satisfied the goal
	pub fn goal(&self) -> Option<&N> {
		self.steps.last().map(|(node, _)| node)
	}

	/// Discards the Costs and returns only the Nodes
	pub fn into_nodes(self) -> Vec<N> {
		self.steps.into_iter().map(|(node, _)| node).collect()
	}

	/// Returns the underlying `(Node, cumulative Cost)` steps
	pub fn into_inner(self) -> Vec<(N, C)> {
		self.steps
	}
}

impl<N, C> Index<usize> for Path<N, C> {
	type Output = (N, C);
	fn index(&self, index: usize) -> &(N, C) {
		&self.steps[index]
	}
}

impl<N, C> Deref for Path<N, C> {
	type Target = [(N, C)];
	fn deref(&self) -> &[(N, C)] {
		&self.steps
	}
}

impl<N, C> IntoIterator for Path<N, C> {
	type Item = (N, C);
	type IntoIter = std::vec::IntoIter<(N, C)>;
	fn into_iter(self) -> Self::IntoIter {
		self.steps.into_iter()
	}
}

impl<N: fmt::Display, C: Cost + fmt::Display> fmt::Display for Path<N, C> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost())?;
		match self.steps.split_first() {
			None => write!(fmt, "<empty>"),
			Some(((first, _), rest)) => {
				write!(fmt, "{}", first)?;
				for (node, _) in rest {
					write!(fmt, " -> {}", node)?;
				}
				Ok(())
			}
		}
	}
}
