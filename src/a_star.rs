//! Best-first search for a single cheapest Path.

use crate::frontier::Element;
use crate::{Cost, NodeMap, Path, Result, SearchError};

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Options for an [`a_star_search`]
///
/// Default options:
/// ```
/// # use implicit_pathfinding::a_star::AStarConfig;
/// assert_eq!(
/// 	AStarConfig::<u32> {
/// 		max_cost: None,
/// 		size_hint: 0,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AStarConfig<C> {
	/// A ceiling for the Cost of the Path (defaults to `None`).
	///
	/// As soon as the cheapest candidate in the open set has a priority (Cost + Heuristic) above
	/// this ceiling, the search is aborted with [`SearchError::PathNotFound`]. With an
	/// admissible Heuristic no Path under the ceiling can exist at that point.
	pub max_cost: Option<C>,
	/// The number of Nodes the search is expected to visit (defaults to `0`).
	///
	/// Only used to preallocate the internal Maps.
	pub size_hint: usize,
}

impl<C> Default for AStarConfig<C> {
	fn default() -> Self {
		AStarConfig {
			max_cost: None,
			size_hint: 0,
		}
	}
}

impl<C> AStarConfig<C> {
	/// Creates a config that aborts once no Path of at most `max_cost` can exist
	pub fn with_max_cost(max_cost: C) -> Self {
		AStarConfig {
			max_cost: Some(max_cost),
			..Default::default()
		}
	}
}

/// Searches an implicit Graph using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The Generic type Parameter `N` is supposed to uniquely identify a Node in the Graph.
/// This may be a Number, a Grid position, the entire state of a Puzzle, ... as long as it can be
/// compared, hashed and cloned.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use implicit_pathfinding::prelude::*;
/// // from any Number, adding 1 costs 1 and tripling costs 2
/// let next = |&n: &u64| [(n + 1, 1u32), (n * 3, 2)];
///
/// let path = a_star_search(
/// 	1,
/// 	|&n| n % 10 == 0, // is_goal
/// 	next,
/// 	|_| 0, // heuristic
/// 	AStarConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(path.goal(), Some(&10));
/// assert_eq!(path.cost(), 5);
/// ```
///
/// With a ceiling below the cheapest Path, the search gives up:
/// ```
/// # use implicit_pathfinding::prelude::*;
/// # let next = |&n: &u64| [(n + 1, 1u32), (n * 3, 2)];
/// let result = a_star_search(1, |&n| n % 10 == 0, next, |_| 0, AStarConfig::with_max_cost(4));
///
/// assert!(result.unwrap_err().is_path_not_found());
/// ```
///
/// ## Arguments
/// - `start` - the starting Node
/// - `is_goal` - returns `true` for Nodes that end the search
/// - `get_adjacent` - a Function that takes a Node and returns all Nodes reachable from it,
/// 	each paired with the Cost of the Edge
/// - `heuristic` - an estimate of the remaining Cost from a Node to the closest goal. It must
/// 	never overestimate, and must not drop by more than an Edge's Cost along that Edge.
/// 	`|_| C::zero()` is always valid, but turns the search into Dijkstra
/// - `config` - see [`AStarConfig`]
///
/// ## Returns
/// the Path to the first Node popped from the open set that satisfies `is_goal`. Every step is
/// paired with its cumulative Cost, starting at zero for `start`.
///
/// ## Errors
/// - [`SearchError::PathNotFound`] if no reachable Node satisfies `is_goal`, or the cheapest
/// 	candidate exceeds `config.max_cost`
/// - [`SearchError::InconsistentState`] if the Path cannot be traced back to `start`
pub fn a_star_search<N, C, I>(
	start: N,
	mut is_goal: impl FnMut(&N) -> bool,
	mut get_adjacent: impl FnMut(&N) -> I,
	mut heuristic: impl FnMut(&N) -> C,
	config: AStarConfig<C>,
) -> Result<Path<N, C>>
where
	N: Clone + Eq + Hash,
	C: Cost,
	I: IntoIterator<Item = (N, C)>,
{
	let AStarConfig {
		max_cost,
		size_hint,
	} = config;

	let mut came_from: NodeMap<N, Option<N>> = NodeMap::with_capacity(size_hint);
	let mut cost_so_far: NodeMap<N, C> = NodeMap::with_capacity(size_hint);
	let mut next = BinaryHeap::with_capacity(size_hint / 2);

	came_from.insert(start.clone(), None);
	cost_so_far.insert(start.clone(), C::zero());
	let start_priority = heuristic(&start);
	next.push(Element(start.clone(), C::zero(), start_priority));

	#[cfg(feature = "log")]
	let (mut expanded, mut peak) = (0usize, next.len());
	let mut goal = None;

	while let Some(Element(current, current_cost, priority)) = next.pop() {
		if let Some(max_cost) = &max_cost {
			if priority > *max_cost {
				search_trace!(
					"A*: cheapest candidate {:?} exceeds ceiling {:?}",
					priority,
					max_cost
				);
				search_debug!(
					"A*: aborted at ceiling after expanding {} nodes (frontier peak {})",
					expanded,
					peak
				);
				return Err(SearchError::PathNotFound);
			}
		}

		match cost_so_far.get(&current).map(|best| current_cost.cmp(best)) {
			Some(Ordering::Greater) => continue, // stale entry
			Some(Ordering::Equal) => {}
			Some(Ordering::Less) | None => {
				return Err(SearchError::InconsistentState(
					"frontier entry does not match the recorded cost".into(),
				))
			}
		}

		if is_goal(&current) {
			goal = Some(current);
			break;
		}
		#[cfg(feature = "log")]
		{
			expanded += 1;
		}

		for (other, edge_cost) in get_adjacent(&current) {
			let other_cost = current_cost.clone() + edge_cost;

			let needs_visit = match cost_so_far.get_mut(&other) {
				Some(prev_cost) if *prev_cost <= other_cost => false,
				Some(prev_cost) => {
					*prev_cost = other_cost.clone();
					true
				}
				None => {
					cost_so_far.insert(other.clone(), other_cost.clone());
					true
				}
			};

			if needs_visit {
				came_from.insert(other.clone(), Some(current.clone()));
				let priority = other_cost.clone() + heuristic(&other);
				next.push(Element(other, other_cost, priority));
			}
		}
		#[cfg(feature = "log")]
		{
			peak = peak.max(next.len());
		}
	}

	let goal = match goal {
		Some(goal) => goal,
		None => {
			search_debug!(
				"A*: no path after expanding {} nodes (frontier peak {})",
				expanded,
				peak
			);
			return Err(SearchError::PathNotFound);
		}
	};

	let path = trace_back(start, goal, &came_from, &cost_so_far)?;
	search_debug!(
		"A*: found path of cost {:?} after expanding {} nodes (frontier peak {})",
		path.cost(),
		expanded,
		peak
	);
	Ok(path)
}

/// Searches an implicit Graph for a Path to one specific Node using [`a_star_search`].
///
/// The Heuristic receives the current Node and `goal`.
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
/// let get_adjacent = |&point: &usize| {
/// 	cost_matrix[point]
/// 		.iter()
/// 		.enumerate()
/// 		.filter(|&(_, cost)| *cost != -1)
/// 		.map(|(id, cost)| (id, *cost as usize))
/// 		.collect::<Vec<_>>()
/// };
///
/// let path = a_star_to(A, D, get_adjacent, |_, _| 0, AStarConfig::default()).unwrap();
/// assert_eq!(path.into_inner(), vec![(A, 0), (C, 1), (D, 7)]);
///
/// let result = a_star_to(A, E, get_adjacent, |_, _| 0, AStarConfig::default());
/// assert_eq!(result, Err(SearchError::PathNotFound));
/// ```
pub fn a_star_to<N, C, I>(
	start: N,
	goal: N,
	get_adjacent: impl FnMut(&N) -> I,
	mut heuristic: impl FnMut(&N, &N) -> C,
	config: AStarConfig<C>,
) -> Result<Path<N, C>>
where
	N: Clone + Eq + Hash,
	C: Cost,
	I: IntoIterator<Item = (N, C)>,
{
	a_star_search(
		start,
		|node| *node == goal,
		get_adjacent,
		|node| heuristic(node, &goal),
		config,
	)
}

fn trace_back<N, C>(
	start: N,
	goal: N,
	came_from: &NodeMap<N, Option<N>>,
	cost_so_far: &NodeMap<N, C>,
) -> Result<Path<N, C>>
where
	N: Clone + Eq + Hash,
	C: Cost,
{
	let mut steps = vec![];
	let mut current = goal;

	while current != start {
		if steps.len() > came_from.len() {
			return Err(SearchError::InconsistentState(
				"predecessors form a cycle".into(),
			));
		}
		let (Some(Some(prev)), Some(cost)) = (came_from.get(&current), cost_so_far.get(&current))
		else {
			return Err(SearchError::InconsistentState(
				"expected node in path to have a predecessor".into(),
			));
		};
		let prev = prev.clone();
		steps.push((current, cost.clone()));
		current = prev;
	}
	steps.push((start, C::zero()));
	steps.reverse();

	Ok(Path::new(steps))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::neighbors::{ManhattanNeighborhood, Neighborhood};
	use crate::Point;

	use std::cell::Cell;

	fn open_grid(
		width: usize,
		height: usize,
	) -> impl Fn(&Point) -> Vec<(Point, usize)> {
		let neighborhood = ManhattanNeighborhood::new(width, height);
		move |&point| neighborhood.get_all_neighbors(point).map(|p| (p, 1)).collect()
	}

	fn manhattan(a: &Point, b: &Point) -> usize {
		a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
	}

	#[test]
	fn open_grid_corner_to_corner() {
		let path = a_star_to(
			(0, 0),
			(4, 4),
			open_grid(5, 5),
			manhattan,
			AStarConfig::default(),
		)
		.unwrap();

		assert_eq!(path.len(), 9);
		assert_eq!(path.edge_count(), 8);
		assert_eq!(path.cost(), 8);
		assert_eq!(path.start(), Some(&(0, 0)));
		assert_eq!(path.goal(), Some(&(4, 4)));
		for (i, (_, cost)) in path.iter().enumerate() {
			assert_eq!(*cost, i);
		}
	}

	#[test]
	fn start_is_goal() {
		let path = a_star_to(
			(2, 2),
			(2, 2),
			open_grid(5, 5),
			manhattan,
			AStarConfig::default(),
		)
		.unwrap();

		assert_eq!(path.into_inner(), vec![((2, 2), 0)]);
	}

	#[test]
	fn predicate_goal() {
		// any cell in the last column
		let path = a_star_search(
			(0, 2),
			|&(x, _)| x == 6,
			open_grid(7, 5),
			|&(x, _): &Point| 6 - x,
			AStarConfig::default(),
		)
		.unwrap();

		assert_eq!(path.cost(), 6);
		assert_eq!(path.goal(), Some(&(6, 2)));
	}

	#[test]
	fn exhausted_frontier() {
		// a line of 4 nodes, the goal is off the line
		let result = a_star_to(
			0u8,
			9,
			|&n| (n < 3).then_some((n + 1, 1u32)),
			|_, _| 0,
			AStarConfig::default(),
		);

		assert_eq!(result, Err(SearchError::PathNotFound));
	}

	#[test]
	fn ceiling_aborts_with_path_not_found() {
		let result = a_star_to(
			(0, 0),
			(4, 4),
			open_grid(5, 5),
			manhattan,
			AStarConfig::with_max_cost(7),
		);

		assert_eq!(result, Err(SearchError::PathNotFound));
		assert!(result.unwrap_err().is_path_not_found());
	}

	#[test]
	fn ceiling_equal_to_cost() {
		let path = a_star_to(
			(0, 0),
			(4, 4),
			open_grid(5, 5),
			manhattan,
			AStarConfig::with_max_cost(8),
		)
		.unwrap();

		assert_eq!(path.cost(), 8);
	}

	#[test]
	fn nodes_expanded_at_most_once() {
		let expansions = Cell::new(0);
		let successors = open_grid(10, 10);

		let path = a_star_to(
			(0, 0),
			(9, 9),
			|point| {
				expansions.set(expansions.get() + 1);
				successors(point)
			},
			manhattan,
			AStarConfig::default(),
		)
		.unwrap();

		assert_eq!(path.cost(), 18);
		assert!(expansions.get() <= 100);
	}

	#[test]
	fn prefers_cheaper_detour() {
		// 0 -> 1 -> 2 -> 3 costs 3 * 5, the detour 0 -> 4 -> 5 -> 6 -> 7 -> 3 costs 5 * 1
		let edges = |&n: &u8| -> Vec<(u8, u32)> {
			match n {
				0 => vec![(1, 5), (4, 1)],
				1 => vec![(2, 5)],
				2 => vec![(3, 5)],
				4 => vec![(5, 1)],
				5 => vec![(6, 1)],
				6 => vec![(7, 1)],
				7 => vec![(3, 1)],
				_ => vec![],
			}
		};

		let path = a_star_to(0, 3, edges, |_, _| 0, AStarConfig::default()).unwrap();

		assert_eq!(path.cost(), 5);
		assert_eq!(path.into_nodes(), vec![0, 4, 5, 6, 7, 3]);
	}

	#[test]
	fn missing_predecessor_is_inconsistent() {
		let came_from: NodeMap<u8, Option<u8>> = [(0, None), (2, Some(1))].into_iter().collect();
		let cost_so_far: NodeMap<u8, u32> = [(0, 0), (1, 1), (2, 2)].into_iter().collect();

		let result = trace_back(0, 2, &came_from, &cost_so_far);

		assert!(matches!(result, Err(SearchError::InconsistentState(_))));
	}

	#[test]
	fn predecessor_cycle_is_inconsistent() {
		let came_from: NodeMap<u8, Option<u8>> =
			[(0, None), (1, Some(2)), (2, Some(1))].into_iter().collect();
		let cost_so_far: NodeMap<u8, u32> = [(0, 0), (1, 1), (2, 2)].into_iter().collect();

		let result = trace_back(0, 2, &came_from, &cost_so_far);

		assert!(matches!(result, Err(SearchError::InconsistentState(_))));
	}
}
