//! Unweighted exploration of everything reachable from a start.

use crate::{NodeMap, NodeSet};

use std::collections::VecDeque;
use std::hash::Hash;

/// Collects every Node reachable from `start`, including `start` itself.
///
/// Nodes are marked as seen when they are discovered, so `get_neighbors` is called exactly once
/// per reachable Node. The Graph is expected to be finite: on an infinite Graph this never
/// returns.
///
/// ## Examples
/// ```
/// # use implicit_pathfinding::prelude::*;
/// // 0 -> 1 -> 2 -> 0, and 3 -> 0 which can't be reached from 0
/// let next = |&n: &u8| match n {
/// 	3 => vec![0],
/// 	n => vec![(n + 1) % 3],
/// };
///
/// let reachable = bfs_reachable(0, next);
///
/// assert_eq!(reachable.len(), 3);
/// assert!(!reachable.contains(&3));
/// ```
pub fn bfs_reachable<N, I>(start: N, get_neighbors: impl FnMut(&N) -> I) -> NodeSet<N>
where
	N: Clone + Eq + Hash,
	I: IntoIterator<Item = N>,
{
	let distances = bfs_distances(start, get_neighbors);
	distances.into_keys().collect()
}

/// Same as [`bfs_reachable`], but also returns the number of Edges on the shortest Path to
/// each Node.
///
/// ## Examples
/// ```
/// # use implicit_pathfinding::prelude::*;
/// let neighborhood = MooreNeighborhood::new(5, 5);
/// let distances = bfs_distances((0, 0), |&point| neighborhood.get_all_neighbors(point));
///
/// assert_eq!(distances.len(), 25);
/// assert_eq!(distances[&(4, 2)], 4);
/// ```
pub fn bfs_distances<N, I>(start: N, mut get_neighbors: impl FnMut(&N) -> I) -> NodeMap<N, usize>
where
	N: Clone + Eq + Hash,
	I: IntoIterator<Item = N>,
{
	let mut seen = NodeMap::new();
	let mut queue = VecDeque::new();

	seen.insert(start.clone(), 0);
	queue.push_back((start, 0));

	while let Some((node, distance)) = queue.pop_front() {
		for neighbor in get_neighbors(&node) {
			if !seen.contains_key(&neighbor) {
				seen.insert(neighbor.clone(), distance + 1);
				queue.push_back((neighbor, distance + 1));
			}
		}
	}

	search_debug!("BFS: reached {} nodes", seen.len());
	seen
}
