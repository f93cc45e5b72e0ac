//! Uniform-cost search from a single start to every reachable Node.

use crate::frontier::Element;
use crate::{NodeMap, NodeSet, Result, SearchError};

use std::collections::BinaryHeap;
use std::hash::Hash;
use std::ops::Add;

/// The outcome of a [`dijkstra_search`]
#[derive(Clone, Debug)]
pub struct DijkstraResult<N, C> {
	/// the Cost of the cheapest Path from the start to every reachable Node
	pub costs: NodeMap<N, C>,
	/// the Node every reachable Node is entered from on one of its cheapest Paths.
	/// The start maps to `None`.
	pub predecessors: NodeMap<N, Option<N>>,
}

impl<N: Clone + Eq + Hash, C> DijkstraResult<N, C> {
	/// The Cost of the cheapest Path to `node`, or `None` if it is unreachable
	pub fn cost(&self, node: &N) -> Option<&C> {
		self.costs.get(node)
	}

	/// Returns `true` if `node` was reached by the search
	pub fn is_reachable(&self, node: &N) -> bool {
		self.costs.contains_key(node)
	}

	/// A cheapest Path from the start to `target`, both inclusive.
	///
	/// See [`reconstruct_path`].
	pub fn path_to(&self, target: &N) -> Result<Vec<N>> {
		reconstruct_path(target, &self.predecessors)
	}
}

/// Searches an implicit Graph using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// Unlike [`a_star_search`](crate::a_star::a_star_search), there is no goal: the search runs until
/// every Node reachable from `start` has its final Cost.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use implicit_pathfinding::prelude::*;
/// // A     B--2--E
/// // |\
/// // | \
/// // 1  9
/// // |   \
/// // |    \
/// // C--6--D
/// let (A, B, C, D, E) = (0, 1, 2, 3, 4);
/// let cost_matrix: [[i32; 5]; 5] = [
/// //    A,  B,  C,  D,  E
/// 	[-1, -1,  1,  9, -1], // A
/// 	[-1, -1, -1, -1,  2], // B
/// 	[ 1, -1, -1,  6, -1], // C
/// 	[ 9, -1,  6, -1, -1], // D
/// 	[-1,  2, -1, -1, -1], // E
/// ];
///
/// let result = dijkstra_search(
/// 	A,
/// 	|&point: &usize| { // get_adjacent
/// 		cost_matrix[point]
/// 			.iter()
/// 			.enumerate()
/// 			.filter(|&(_, cost)| *cost != -1)
/// 			.map(|(id, cost)| (id, *cost as usize))
/// 			.collect::<Vec<_>>()
/// 	},
/// 	0, // zero cost
/// );
///
/// // every reachable Node has an entry
/// assert_eq!(result.cost(&D), Some(&7));
/// assert_eq!(result.path_to(&D).unwrap(), vec![A, C, D]);
///
/// // unreachable Nodes don't
/// assert!(!result.is_reachable(&E));
/// ```
///
/// ## Arguments
/// - `start` - the starting Node
/// - `get_adjacent` - a Function that takes a Node and returns all Nodes reachable from it,
/// 	each paired with the Cost of the Edge. Costs must not be negative
/// - `zero` - the Cost of the start
///
/// ## Returns
/// the Costs of all reachable Nodes and a predecessor map to build Paths with.
///
/// `get_adjacent` is called twice for every reachable Node: once while settling the Costs and
/// once while deriving the predecessors. Among several equally cheap predecessors of a Node the
/// one settled first is kept, so the predecessors always form a tree rooted at `start`.
pub fn dijkstra_search<N, C, I>(
	start: N,
	mut get_adjacent: impl FnMut(&N) -> I,
	zero: C,
) -> DijkstraResult<N, C>
where
	N: Clone + Eq + Hash,
	C: Ord + Clone + Add<Output = C>,
	I: IntoIterator<Item = (N, C)>,
{
	let mut costs = NodeMap::new();
	let mut visited = NodeSet::new();
	let mut settled = Vec::new();
	let mut next = BinaryHeap::new();

	costs.insert(start.clone(), zero.clone());
	next.push(Element(start.clone(), zero.clone(), zero));

	while let Some(Element(node, distance, _)) = next.pop() {
		if !visited.insert(node.clone()) {
			continue;
		}

		for (neighbor, cost) in get_adjacent(&node) {
			let new_cost = distance.clone() + cost;
			let improves = costs.get(&neighbor).map_or(true, |known| new_cost < *known);
			if improves {
				costs.insert(neighbor.clone(), new_cost.clone());
				next.push(Element(neighbor, new_cost.clone(), new_cost));
			}
		}
		settled.push(node);
	}

	let mut predecessors = NodeMap::with_capacity(costs.len());
	predecessors.insert(start, None);

	for node in settled.iter() {
		let Some(distance) = costs.get(node) else {
			continue;
		};
		for (neighbor, cost) in get_adjacent(node) {
			if predecessors.contains_key(&neighbor) {
				continue;
			}
			if costs.get(&neighbor) == Some(&(distance.clone() + cost)) {
				predecessors.insert(neighbor, Some(node.clone()));
			}
		}
	}

	search_debug!(
		"Dijkstra: settled {} nodes, {} with predecessors",
		settled.len(),
		predecessors.len()
	);

	DijkstraResult {
		costs,
		predecessors,
	}
}

/// Same as [`dijkstra_search`], for successor Functions that only return Nodes.
///
/// The Cost of every Edge is obtained from `get_cost`. Pass [`unit_cost`] to count the Edges.
///
/// ## Examples
/// ```
/// # use implicit_pathfinding::prelude::*;
/// // a 3x3 Grid without obstacles
/// let neighborhood = ManhattanNeighborhood::new(3, 3);
/// let result = dijkstra_search_by(
/// 	(0, 0),
/// 	|&point| neighborhood.get_all_neighbors(point),
/// 	unit_cost,
/// 	0u32,
/// );
///
/// assert_eq!(result.cost(&(2, 2)), Some(&4));
/// assert_eq!(result.costs.len(), 9);
/// ```
pub fn dijkstra_search_by<N, C, I>(
	start: N,
	mut get_neighbors: impl FnMut(&N) -> I,
	mut get_cost: impl FnMut(&N, &N) -> C,
	zero: C,
) -> DijkstraResult<N, C>
where
	N: Clone + Eq + Hash,
	C: Ord + Clone + Add<Output = C>,
	I: IntoIterator<Item = N>,
{
	dijkstra_search(
		start,
		|node| {
			get_neighbors(node)
				.into_iter()
				.map(|neighbor| {
					let cost = get_cost(node, &neighbor);
					(neighbor, cost)
				})
				.collect::<Vec<_>>()
		},
		zero,
	)
}

/// An Edge Cost Function where every Edge costs one
pub fn unit_cost<N, C: num::One>(_from: &N, _to: &N) -> C {
	C::one()
}

/// Walks a predecessor map from `target` back to the Node without a predecessor.
///
/// ## Returns
/// the Nodes from the start to `target`, both inclusive.
///
/// ## Errors
/// - [`SearchError::PathNotFound`] if `target` is not in the map (it was never reached)
/// - [`SearchError::InconsistentState`] if the walk runs into a Node that is not in the map,
/// 	or never reaches a Node without predecessor
///
/// ## Examples
/// ```
/// # use implicit_pathfinding::prelude::*;
/// let predecessors: NodeMap<char, Option<char>> =
/// 	[('a', None), ('b', Some('a')), ('c', Some('b'))].into_iter().collect();
///
/// assert_eq!(reconstruct_path(&'c', &predecessors), Ok(vec!['a', 'b', 'c']));
/// assert_eq!(reconstruct_path(&'a', &predecessors), Ok(vec!['a']));
/// assert_eq!(reconstruct_path(&'z', &predecessors), Err(SearchError::PathNotFound));
/// ```
pub fn reconstruct_path<N>(target: &N, predecessors: &NodeMap<N, Option<N>>) -> Result<Vec<N>>
where
	N: Clone + Eq + Hash,
{
	let mut path = vec![];
	let mut current = Some(target.clone());

	while let Some(node) = current {
		let prev = match predecessors.get(&node) {
			Some(prev) => prev.clone(),
			None if path.is_empty() => return Err(SearchError::PathNotFound),
			None => {
				return Err(SearchError::InconsistentState(
					"predecessor chain leaves the predecessor map".into(),
				))
			}
		};
		path.push(node);
		if path.len() > predecessors.len() {
			return Err(SearchError::InconsistentState(
				"predecessors form a cycle".into(),
			));
		}
		current = prev;
	}
	path.reverse();

	Ok(path)
}
