use std::collections::VecDeque;

use log::{debug, trace};

use crate::graph::Graph;

/// A named single-step move between states.
pub struct Transition<S> {
	/// Label used in trace logs.
	pub name: &'static str,
	apply: Box<dyn Fn(&S) -> S>,
}

impl<S> Transition<S> {
	/// Wraps `apply` under `name`.
	pub fn new(name: &'static str, apply: impl Fn(&S) -> S + 'static) -> Self {
		Self {
			name,
			apply: Box::new(apply),
		}
	}

	/// State reached by taking this move from `state`.
	pub fn apply(&self, state: &S) -> S {
		(self.apply)(state)
	}
}

/// A puzzle or system whose reachable states can be enumerated.
pub trait StateSpace {
	/// A complete snapshot; equal values are the same state.
	type State: Clone + PartialEq;

	/// Where exploration starts.
	fn initial(&self) -> Self::State;

	/// Transitions tried on every state, in this order.
	fn transitions(&self) -> &[Transition<Self::State>];

	/// Node name for a state. Distinct states must encode to distinct names.
	fn encode(&self, state: &Self::State) -> String;
}

/// Builds the directed reachability graph of `space` breadth-first.
pub fn explore<T: StateSpace>(space: &T) -> Graph {
	explore_from(space.initial(), space.transitions(), |s| space.encode(s))
}

/// Breadth-first expansion from `initial`.
///
/// A transition that leaves the state unchanged adds no edge. Terminates only
/// if the reachable state space is finite.
pub fn explore_from<S, F>(initial: S, transitions: &[Transition<S>], encode: F) -> Graph
where
	S: Clone + PartialEq,
	F: Fn(&S) -> String,
{
	let mut graph = Graph::new(true);
	let start = graph.add_node(encode(&initial));
	let mut queue = VecDeque::from([(initial, start)]);

	while let Some((state, node)) = queue.pop_front() {
		for transition in transitions {
			let next = transition.apply(&state);
			if next == state {
				continue;
			}
			let name = encode(&next);
			let known = graph.find_node(&name);
			let next_node = known.unwrap_or_else(|| graph.add_node(name));
			graph.add_edge(node, next_node, None);
			trace!(
				"{} --{}--> {}",
				graph.node_name(node),
				transition.name,
				graph.node_name(next_node)
			);
			if known.is_none() {
				queue.push_back((next, next_node));
			}
		}
	}

	debug!(
		"explored {} states, {} transitions",
		graph.node_count(),
		graph.edge_count()
	);
	graph
}
