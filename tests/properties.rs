use implicit_pathfinding::prelude::*;
use nanorand::{Rng, WyRand};

use std::cell::Cell;

fn init() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// A Grid where entering a Tile costs between 1 and 9, or `None` for walls
struct CostGrid {
	tiles: Vec<Option<u32>>,
	width: usize,
	height: usize,
}

impl CostGrid {
	fn random(width: usize, height: usize, seed: u64) -> CostGrid {
		let mut rng = WyRand::new_seed(seed);
		let tiles = (0..width * height)
			.map(|_| {
				let roll: u32 = rng.generate_range(0..12);
				(roll >= 3).then(|| roll - 2)
			})
			.collect();
		CostGrid {
			tiles,
			width,
			height,
		}
	}

	fn cost(&self, (x, y): Point) -> Option<u32> {
		self.tiles[x + y * self.width]
	}

	fn get_adjacent(&self, point: &Point) -> Vec<(Point, u32)> {
		ManhattanNeighborhood::new(self.width, self.height)
			.get_all_neighbors(*point)
			.filter_map(|p| self.cost(p).map(|cost| (p, cost)))
			.collect()
	}

	fn open_points(&self) -> impl Iterator<Item = Point> + '_ {
		(0..self.height)
			.flat_map(move |y| (0..self.width).map(move |x| (x, y)))
			.filter(|&p| self.cost(p).is_some())
	}
}

#[test]
fn random_grid_tiles() {
	for seed in 0..4 {
		let grid = CostGrid::random(16, 16, seed);
		assert_eq!(grid.tiles.len(), 16 * 16);
		assert!(grid.tiles.iter().flatten().all(|cost| (1..=9).contains(cost)));
		assert!(grid.tiles.iter().any(Option::is_none), "seed {} has no walls", seed);
	}
}

fn manhattan(a: &Point, b: &Point) -> u32 {
	(a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as u32
}

#[test]
fn a_star_agrees_with_dijkstra() {
	init();
	for seed in 0..8 {
		let grid = CostGrid::random(16, 12, seed);
		let start = match grid.open_points().next() {
			Some(start) => start,
			None => continue,
		};
		let result = dijkstra_search(start, |p| grid.get_adjacent(p), 0);

		for goal in grid.open_points().step_by(7) {
			let path = a_star_to(
				start,
				goal,
				|p| grid.get_adjacent(p),
				manhattan,
				AStarConfig::default(),
			);
			match (path, result.cost(&goal)) {
				(Ok(path), Some(&cost)) => {
					assert_eq!(path.cost(), cost, "seed {} goal {:?}", seed, goal);
					let nodes = result.path_to(&goal).unwrap();
					assert_eq!(nodes.first(), Some(&start));
					assert_eq!(nodes.last(), Some(&goal));
				}
				(Err(SearchError::PathNotFound), None) => {}
				(path, cost) => panic!(
					"seed {} goal {:?}: A* gave {:?}, Dijkstra gave {:?}",
					seed, goal, path, cost
				),
			}
		}
	}
}

#[test]
fn dijkstra_paths_add_up() {
	init();
	let grid = CostGrid::random(20, 20, 99);
	let start = grid.open_points().next().unwrap();
	let result = dijkstra_search(start, |p| grid.get_adjacent(p), 0);

	for (node, &cost) in result.costs.iter() {
		let nodes = result.path_to(node).unwrap();
		let total: u32 = nodes.iter().skip(1).map(|&p| grid.cost(p).unwrap()).sum();
		assert_eq!(total, cost);
	}
}

#[test]
fn frontier_is_monotonic() {
	init();
	let grid = CostGrid::random(20, 20, 7);
	let start = grid.open_points().next().unwrap();
	let costs = dijkstra_search(start, |p| grid.get_adjacent(p), 0).costs;
	// the most expensive reachable Node, so the search has to cover most of the Grid
	let goal = costs
		.iter()
		.map(|(&p, &cost)| (cost, p))
		.max()
		.map(|(_, p)| p)
		.unwrap();

	// with a consistent heuristic, Nodes leave the open set in order of their final priority
	let expanded = Cell::new(0u32);
	let last_priority = Cell::new(0u32);
	let path = a_star_to(
		start,
		goal,
		|p| {
			let priority = costs[p] + manhattan(p, &goal);
			assert!(priority >= last_priority.get());
			last_priority.set(priority);
			expanded.set(expanded.get() + 1);
			grid.get_adjacent(p)
		},
		manhattan,
		AStarConfig::default(),
	)
	.unwrap();

	assert_eq!(path.cost(), costs[&goal]);
	assert!(expanded.get() as usize <= grid.open_points().count());
}

#[test]
fn ceiling_prunes_the_search() {
	init();
	let width = 40;
	let neighborhood = ManhattanNeighborhood::new(width, width);
	let calls = Cell::new(0usize);
	let get_adjacent = |p: &Point| {
		calls.set(calls.get() + 1);
		neighborhood
			.get_all_neighbors(*p)
			.map(|p| (p, 1u32))
			.collect::<Vec<_>>()
	};
	let goal = (width - 1, width - 1);

	let path = a_star_to(
		(0, 0),
		goal,
		get_adjacent,
		|_, _| 0,
		AStarConfig::default(),
	)
	.unwrap();
	assert_eq!(path.cost(), 78);
	let unbounded_calls = calls.replace(0);

	let result = a_star_to(
		(0, 0),
		goal,
		get_adjacent,
		|_, _| 0,
		AStarConfig::with_max_cost(10),
	);
	assert!(result.unwrap_err().is_path_not_found());
	// only the Nodes within 10 steps of the start are expanded
	assert_eq!(calls.get(), (1..=11).sum::<usize>());
	assert!(calls.get() < unbounded_calls);

	calls.set(0);
	let result = a_star_to(
		(0, 0),
		goal,
		get_adjacent,
		manhattan,
		AStarConfig::with_max_cost(77),
	);
	assert_eq!(result, Err(SearchError::PathNotFound));
	assert_eq!(calls.get(), 0);
}

#[test]
fn bfs_matches_exhaustive_dfs() {
	init();
	for seed in 100..105 {
		let grid = CostGrid::random(15, 15, seed);
		let start = grid.open_points().next().unwrap();
		let successors = |p: &Point| grid.get_adjacent(p).into_iter().map(|(p, _)| p);

		let mut seen = NodeSet::new();
		let mut stack = vec![start];
		while let Some(p) = stack.pop() {
			if seen.insert(p) {
				stack.extend(successors(&p));
			}
		}

		let reachable = bfs_reachable(start, successors);
		assert_eq!(reachable, seen, "seed {}", seed);

		let distances = bfs_distances(start, successors);
		let unit = dijkstra_search_by(start, successors, unit_cost, 0usize);
		for (node, distance) in distances.iter() {
			assert_eq!(unit.cost(node), Some(distance));
		}
	}
}
