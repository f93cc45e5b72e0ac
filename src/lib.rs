#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to search implicit Graphs.
//!
//! ## Introduction
//! Many Problems can be phrased as a search through a Graph that is never actually stored anywhere:
//! the Nodes are states of a Puzzle, positions on a Grid, configurations of a Machine, ... and the
//! Edges are generated on demand by a Function that takes a Node and returns its successors.
//! Materializing such a Graph up front is usually wasteful or outright impossible.
//!
//! This crate provides three independent searches over such implicit Graphs:
//! - [`a_star_search`](a_star::a_star_search) finds a cheapest Path from a start to the first Node
//!   satisfying a goal predicate, guided by a Heuristic and optionally bounded by a cost ceiling.
//! - [`dijkstra_search`](dijkstra::dijkstra_search) computes the cheapest cost from a start to
//!   *every* reachable Node, together with a predecessor map for reconstructing Paths.
//! - [`bfs_reachable`](bfs::bfs_reachable) collects every Node reachable from a start.
//!
//! None of the searches keep any state between calls. The successor and heuristic Functions are
//! called as often as the search needs them and are expected to be pure.
//!
//! ## Examples
//! Finding a Path across a small Grid:
//! ```
//! use implicit_pathfinding::prelude::*;
//!
//! // 0 = empty, 1 = wall
//! let grid = [
//!     [0, 0, 0, 0, 0],
//!     [1, 1, 1, 1, 0],
//!     [0, 0, 0, 0, 0],
//!     [0, 1, 1, 1, 1],
//!     [0, 0, 0, 0, 0],
//! ];
//! let neighborhood = ManhattanNeighborhood::new(5, 5);
//!
//! let path = a_star_to(
//!     (0, 0),
//!     (4, 4),
//!     |&point| {
//!         neighborhood
//!             .get_all_neighbors(point)
//!             .filter(move |&(x, y)| grid[y][x] == 0)
//!             .map(|p| (p, 1))
//!     },
//!     |&point, &goal| neighborhood.heuristic(point, goal),
//!     AStarConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(path.cost(), 16);
//! assert_eq!(path[0], ((0, 0), 0));
//! ```
//!
//! Searching every reachable Node at once:
//! ```
//! use implicit_pathfinding::prelude::*;
//!
//! // a ring of 10 Nodes where stepping forward costs 1 and stepping backward costs 3
//! let result = dijkstra_search(0u32, |&n| [((n + 1) % 10, 1u32), ((n + 9) % 10, 3)], 0);
//!
//! assert_eq!(result.costs.len(), 10);
//! assert_eq!(result.costs[&9], 3);
//! assert_eq!(result.path_to(&2).unwrap(), vec![0, 1, 2]);
//!
//! let reachable = bfs_reachable(0u32, |&n| [(n + 2) % 10]);
//! assert_eq!(reachable.len(), 5);
//! ```
//!
//! ## Costs
//! Any type implementing [`Cost`] can be used for the Edge weights: all primitive integers,
//! exact rationals like [`num::rational::Ratio`] or floating point Numbers wrapped in a type
//! with a total order.
//!
//! ## Logging
//! With the `log` feature enabled (the default), every search emits a single `debug` record
//! summarizing how many Nodes were expanded and how it ended.

use std::fmt::Debug;

macro_rules! search_debug {
	($($arg:tt)+) => {
		#[cfg(feature = "log")]
		log::debug!($($arg)+);
	};
}

macro_rules! search_trace {
	($($arg:tt)+) => {
		#[cfg(feature = "log")]
		log::trace!($($arg)+);
	};
}

mod error;
pub use self::error::{Result, SearchError};

mod path;
pub use self::path::Path;

mod frontier;

pub mod a_star;
pub mod bfs;
pub mod dijkstra;
pub mod neighbors;

/// A shorthand for Points on a Grid
pub type Point = (usize, usize);

/// The Map used to store per-Node bookkeeping during a search
pub type NodeMap<N, V> = hashbrown::HashMap<N, V>;
/// The Set used to store visited Nodes during a search
pub type NodeSet<N> = hashbrown::HashSet<N>;

/// The Requirements for the Cost of traversing an Edge.
///
/// Costs are accumulated with `+`, compared with a total order and start out at
/// [`Zero::zero`](num::Zero::zero). This is automatically implemented for every type that
/// fulfills these requirements.
///
/// Floating point Numbers don't have a total order, so they need to be wrapped in a type like
/// `ordered_float::OrderedFloat`.
pub trait Cost: num::Zero + Ord + Clone + Debug {}

impl<T: num::Zero + Ord + Clone + Debug> Cost for T {}

/// The most commonly used Types and Functions of this crate
pub mod prelude {
	pub use crate::a_star::{a_star_search, a_star_to, AStarConfig};
	pub use crate::bfs::{bfs_distances, bfs_reachable};
	pub use crate::dijkstra::{
		dijkstra_search, dijkstra_search_by, reconstruct_path, unit_cost, DijkstraResult,
	};
	pub use crate::neighbors::{Direction, ManhattanNeighborhood, MooreNeighborhood, Neighborhood};
	pub use crate::{Cost, NodeMap, NodeSet, Path, Point, Result, SearchError};
}
