//! The most common Grid Neighborhoods, for searching on 2D Grids.
//!
//! A Grid is an implicit Graph like any other: its Nodes are [`Point`]s and its Edges connect
//! each Point to the ones an Agent can step to. The Neighborhoods in this Module produce those
//! steps and a matching admissible Heuristic, so that a successor Function only has to filter
//! out solid Tiles and attach Costs.

use crate::Point;
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// Different Scenarios may have different constraints as to how a Path may be formed.
/// For example if Agents can only move along the 4 cardinal directions, any Paths generated should
/// reflect that by only containing those steps.
///
/// This Trait is a generalized solution to that problem. It provides a function to query all
/// neighboring Points of an existing Point and a Heuristic for how long it might take to reach
/// a goal from a Point.
///
/// The most common implementations of this Trait are already provided by this Module:
/// - [`ManhattanNeighborhood`] for Agents that can move
/// up, down, left or right
/// - [`MooreNeighborhood`] for Agents that can move
/// up, down, left, right, as well as the 4 diagonals (up-right, ...)
pub trait Neighborhood: Clone + Debug {
	/// Provides a list of Neighbors of a Point
	///
	/// Note that it is not necessary to check weather the Tile at a Point is solid or not.
	/// That check is up to the successor Function.
	fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>>;
	/// Gives a Heuristic for how long it takes to reach `goal` from `point`.
	///
	/// This is the minimum number of steps between the two Points in the Metric of the
	/// Neighborhood, which never overestimates as long as every step costs at least 1.
	fn heuristic(&self, point: Point, goal: Point) -> usize;
}

/// The 4 cardinal directions on a Grid, with `y` growing towards the South
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
	/// towards `y - 1`
	North = 0,
	/// towards `x + 1`
	East = 1,
	/// towards `y + 1`
	South = 2,
	/// towards `x - 1`
	West = 3,
}

const UNIT_CIRCLE: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

impl Direction {
	/// All Directions, clockwise starting at North
	pub fn all() -> [Direction; 4] {
		[
			Direction::North,
			Direction::East,
			Direction::South,
			Direction::West,
		]
	}

	/// The Direction pointing the other way
	///
	/// ```
	/// # use implicit_pathfinding::neighbors::Direction;
	/// assert_eq!(Direction::North.opposite(), Direction::South);
	/// assert_eq!(Direction::West.opposite(), Direction::East);
	/// ```
	pub fn opposite(self) -> Direction {
		Direction::all()[(self as usize + 2) % 4]
	}

	/// The `(dx, dy)` of a single step in this Direction
	pub fn offset(self) -> (isize, isize) {
		UNIT_CIRCLE[self as usize]
	}

	/// Steps from `point` in this Direction, if the result is still on a Grid of size
	/// `(width, height)`
	///
	/// ```
	/// # use implicit_pathfinding::neighbors::Direction;
	/// assert_eq!(Direction::East.step((1, 3), (5, 5)), Some((2, 3)));
	/// assert_eq!(Direction::North.step((1, 0), (5, 5)), None);
	/// ```
	pub fn step(self, point: Point, (width, height): (usize, usize)) -> Option<Point> {
		let (dx, dy) = self.offset();
		let x = point.0.checked_add_signed(dx)?;
		let y = point.1.checked_add_signed(dy)?;
		(x < width && y < height).then_some((x, y))
	}
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ManhattanNeighborhood {
	width: usize,
	height: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `width` and `height` are the size of the Grid to move on.
	pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { width, height }
	}
}

impl Neighborhood for ManhattanNeighborhood {
	fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>> {
		let size = (self.width, self.height);
		let iter = Direction::all()
			.into_iter()
			.filter_map(move |dir| dir.step(point, size));

		Box::new(iter)
	}
	fn heuristic(&self, point: Point, goal: Point) -> usize {
		point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1)
	}
}

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood),
/// [Maximum Metric](https://en.wikipedia.org/wiki/Chebyshev_distance) or Chebyshev Metric.
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MooreNeighborhood {
	width: usize,
	height: usize,
}

impl MooreNeighborhood {
	/// Creates a new MooreNeighborhood.
	///
	/// `width` and `height` are the size of the Grid to move on.
	pub fn new(width: usize, height: usize) -> MooreNeighborhood {
		MooreNeighborhood { width, height }
	}
}

impl Neighborhood for MooreNeighborhood {
	fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>> {
		let (width, height) = (self.width, self.height);

		let iter = [
			(0isize, -1isize),
			(1, -1),
			(1, 0),
			(1, 1),
			(0, 1),
			(-1, 1),
			(-1, 0),
			(-1, -1),
		]
		.into_iter()
		.filter_map(move |(dx, dy)| {
			let x = point.0.checked_add_signed(dx)?;
			let y = point.1.checked_add_signed(dy)?;
			(x < width && y < height).then_some((x, y))
		});

		Box::new(iter)
	}
	fn heuristic(&self, point: Point, goal: Point) -> usize {
		point.0.abs_diff(goal.0).max(point.1.abs_diff(goal.1))
	}
}

#[test]
fn test_manhattan_get_all_neighbors() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	assert_eq!(
		neighborhood.get_all_neighbors((0, 2)).collect::<Vec<_>>(),
		vec![(0, 1), (1, 2), (0, 3)],
	);
}

#[test]
fn test_manhattan_heuristic() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	assert_eq!(neighborhood.heuristic((3, 1), (0, 0)), 3 + 1);
}

#[test]
fn test_moore_get_all_neighbors() {
	let neighborhood = MooreNeighborhood::new(5, 5);
	assert_eq!(
		neighborhood.get_all_neighbors((0, 2)).collect::<Vec<_>>(),
		vec![(0, 1), (1, 1), (1, 2), (1, 3), (0, 3)],
	);
}

#[test]
fn test_moore_heuristic() {
	let neighborhood = MooreNeighborhood::new(5, 5);
	assert_eq!(neighborhood.heuristic((3, 1), (0, 0)), 3);
}

#[test]
fn test_direction_step_at_edges() {
	let size = (3, 2);
	assert_eq!(Direction::West.step((0, 1), size), None);
	assert_eq!(Direction::South.step((2, 1), size), None);
	assert_eq!(Direction::East.step((2, 0), size), None);
	assert_eq!(Direction::South.step((2, 0), size), Some((2, 1)));
	for dir in Direction::all() {
		assert_eq!(dir.opposite().opposite(), dir);
	}
}
