use std::fmt;

use log::info;

use super::state_space::{StateSpace, Transition, explore};
use crate::graph::Graph;

/// Capacity of the first bucket.
pub const FIRST_CAPACITY: u32 = 5;
/// Capacity of the second bucket.
pub const SECOND_CAPACITY: u32 = 3;

/// Water held in each bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Buckets {
	/// Contents of the first bucket.
	pub first: u32,
	/// Contents of the second bucket.
	pub second: u32,
}

impl fmt::Display for Buckets {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.first, self.second)
	}
}

/// The two-bucket measuring puzzle, starting from two empty buckets.
pub struct BucketPuzzle {
	transitions: Vec<Transition<Buckets>>,
}

impl BucketPuzzle {
	/// Puzzle with custom bucket sizes.
	pub fn new(first_capacity: u32, second_capacity: u32) -> Self {
		let (c1, c2) = (first_capacity, second_capacity);
		let transitions = vec![
			Transition::new("fill first", move |s: &Buckets| Buckets { first: c1, ..*s }),
			Transition::new("fill second", move |s: &Buckets| Buckets { second: c2, ..*s }),
			Transition::new("empty first", |s: &Buckets| Buckets { first: 0, ..*s }),
			Transition::new("empty second", |s: &Buckets| Buckets { second: 0, ..*s }),
			Transition::new("pour first into second", move |s: &Buckets| {
				let amount = s.first.min(c2.saturating_sub(s.second));
				Buckets {
					first: s.first - amount,
					second: s.second + amount,
				}
			}),
			Transition::new("pour second into first", move |s: &Buckets| {
				let amount = s.second.min(c1.saturating_sub(s.first));
				Buckets {
					first: s.first + amount,
					second: s.second - amount,
				}
			}),
		];
		Self { transitions }
	}
}

impl Default for BucketPuzzle {
	fn default() -> Self {
		Self::new(FIRST_CAPACITY, SECOND_CAPACITY)
	}
}

impl StateSpace for BucketPuzzle {
	type State = Buckets;

	fn initial(&self) -> Buckets {
		Buckets::default()
	}

	fn transitions(&self) -> &[Transition<Buckets>] {
		&self.transitions
	}

	fn encode(&self, state: &Buckets) -> String {
		state.to_string()
	}
}

/// Full state graph of the 5/3 bucket puzzle from `0-0`.
pub fn bucket_graph() -> Graph {
	let graph = explore(&BucketPuzzle::default());
	info!(
		"bucket puzzle graph: {} states, {} moves",
		graph.node_count(),
		graph.edge_count()
	);
	graph
}
