use log::debug;

use super::surface::Surface;
use super::types::{
	FillStyle, HIGHLIGHT_EDGE_STROKE, HIGHLIGHT_EDGE_WIDTH, HIGHLIGHT_NODE_FILL,
	HIGHLIGHT_NODE_STROKE, StrokeStyle,
};
use super::view::{LayoutParams, ViewModel, compute_view_with};
use crate::graph::Graph;

/// Element under a pointer, as positions in [`ViewModel::nodes`] and
/// [`ViewModel::edges`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
	/// A node's filled circle contains the point.
	Node(usize),
	/// The point lies on an edge's stroke.
	Edge(usize),
	/// Nothing under the point.
	Miss,
}

/// Nodes take precedence over edges; within a kind the first match in
/// view order wins.
pub fn hit_test(view: &ViewModel, surface: &impl Surface, x: f64, y: f64) -> Hit {
	if let Some(i) = view
		.nodes
		.iter()
		.position(|n| surface.point_in_shape(&n.shape, x, y))
	{
		return Hit::Node(i);
	}
	view.edges
		.iter()
		.position(|e| surface.point_on_stroke(&e.path, &e.stroke, x, y))
		.map_or(Hit::Miss, Hit::Edge)
}

#[derive(Clone, Debug, PartialEq)]
struct SavedNode {
	index: usize,
	fill: FillStyle,
	stroke: StrokeStyle,
}

#[derive(Clone, Debug, PartialEq)]
struct SavedEdge {
	index: usize,
	stroke: StrokeStyle,
}

/// Highlighted node and edge, tracked independently, each with the style it
/// had before it was highlighted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
	node: Option<SavedNode>,
	edge: Option<SavedEdge>,
}

impl Selection {
	/// View position of the highlighted node.
	pub fn selected_node(&self) -> Option<usize> {
		self.node.as_ref().map(|s| s.index)
	}

	/// View position of the highlighted edge.
	pub fn selected_edge(&self) -> Option<usize> {
		self.edge.as_ref().map(|s| s.index)
	}

	/// Applies a hit result to `view`. Returns whether a redraw is needed.
	pub fn apply(&mut self, view: &mut ViewModel, hit: Hit) -> bool {
		match hit {
			Hit::Node(index) => self.select_node(view, index),
			Hit::Edge(index) => self.select_edge(view, index),
			Hit::Miss => {
				let node = self.clear_node(view);
				let edge = self.clear_edge(view);
				node || edge
			}
		}
	}

	/// Highlights node `index`, restoring any other highlighted node first.
	pub fn select_node(&mut self, view: &mut ViewModel, index: usize) -> bool {
		if self.selected_node() == Some(index) || index >= view.nodes.len() {
			return false;
		}
		self.clear_node(view);
		let Some(node) = view.nodes.get_mut(index) else {
			return false;
		};
		self.node = Some(SavedNode {
			index,
			fill: node.fill.clone(),
			stroke: node.stroke.clone(),
		});
		node.fill = FillStyle::new(HIGHLIGHT_NODE_FILL);
		node.stroke.color = HIGHLIGHT_NODE_STROKE.to_string();
		debug!("selected node {index}");
		true
	}

	/// Highlights edge `index`, restoring any other highlighted edge first.
	pub fn select_edge(&mut self, view: &mut ViewModel, index: usize) -> bool {
		if self.selected_edge() == Some(index) || index >= view.edges.len() {
			return false;
		}
		self.clear_edge(view);
		let Some(edge) = view.edges.get_mut(index) else {
			return false;
		};
		self.edge = Some(SavedEdge {
			index,
			stroke: edge.stroke.clone(),
		});
		edge.stroke = StrokeStyle::new(HIGHLIGHT_EDGE_STROKE, HIGHLIGHT_EDGE_WIDTH);
		debug!("selected edge {index}");
		true
	}

	/// Restores the selected node's saved style.
	pub fn clear_node(&mut self, view: &mut ViewModel) -> bool {
		let Some(saved) = self.node.take() else {
			return false;
		};
		if let Some(node) = view.nodes.get_mut(saved.index) {
			node.fill = saved.fill;
			node.stroke = saved.stroke;
		}
		debug!("deselected node {}", saved.index);
		true
	}

	/// Restores the selected edge's saved style.
	pub fn clear_edge(&mut self, view: &mut ViewModel) -> bool {
		let Some(saved) = self.edge.take() else {
			return false;
		};
		if let Some(edge) = view.edges.get_mut(saved.index) {
			edge.stroke = saved.stroke;
		}
		debug!("deselected edge {}", saved.index);
		true
	}
}

/// Everything the canvas component keeps between events.
pub struct GraphCanvasState {
	/// Graph being shown.
	pub graph: Graph,
	/// Layout and current styles.
	pub view: ViewModel,
	/// Highlighted elements.
	pub selection: Selection,
	/// Parameters the view was computed with.
	pub params: LayoutParams,
}

impl GraphCanvasState {
	/// Lays out `graph` with nothing selected.
	pub fn new(graph: Graph, params: LayoutParams, surface: &impl Surface) -> Self {
		let view = compute_view_with(&graph, &params, surface);
		Self {
			graph,
			view,
			selection: Selection::default(),
			params,
		}
	}

	/// Hit-tests a click and updates highlights. Returns whether a redraw is
	/// needed.
	pub fn click(&mut self, surface: &impl Surface, x: f64, y: f64) -> bool {
		let hit = hit_test(&self.view, surface, x, y);
		debug!("click at ({x}, {y}): {hit:?}");
		self.selection.apply(&mut self.view, hit)
	}

	/// Recomputes the layout for a new canvas size. Selection is dropped.
	pub fn resize(&mut self, width: f64, height: f64, surface: &impl Surface) {
		self.params.width = width;
		self.params.height = height;
		self.view = compute_view_with(&self.graph, &self.params, surface);
		self.selection = Selection::default();
	}
}

#[cfg(test)]
mod tests {
	use super::super::surface::tests::RecordingSurface;
	use super::super::types::Point;
	use super::*;

	fn pair() -> Graph {
		let mut graph = Graph::new(true);
		let a = graph.add_node("a");
		let b = graph.add_node("b");
		graph.add_edge(a, b, None);
		graph
	}

	fn state(graph: Graph) -> GraphCanvasState {
		GraphCanvasState::new(
			graph,
			LayoutParams::new(400.0, 400.0),
			&RecordingSurface::default(),
		)
	}

	fn edge_midpoint(state: &GraphCanvasState) -> Point {
		let (a, b) = (state.view.nodes[0].center, state.view.nodes[1].center);
		Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
	}

	#[test]
	fn node_center_beats_edge() {
		let state = state(pair());
		let surface = RecordingSurface::default();
		for (i, node) in state.view.nodes.iter().enumerate() {
			// the edge runs straight through both centers
			assert_eq!(
				hit_test(&state.view, &surface, node.center.x, node.center.y),
				Hit::Node(i)
			);
		}
	}

	#[test]
	fn edge_and_miss() {
		let state = state(pair());
		let surface = RecordingSurface::default();
		let mid = edge_midpoint(&state);
		assert_eq!(hit_test(&state.view, &surface, mid.x, mid.y), Hit::Edge(0));
		assert_eq!(hit_test(&state.view, &surface, 5.0, 5.0), Hit::Miss);
	}

	#[test]
	fn node_selection_round_trip_restores_style() {
		let mut state = state(pair());
		let surface = RecordingSurface::default();
		let before = state.view.nodes[0].clone();
		let c = before.center;

		assert!(state.click(&surface, c.x, c.y));
		assert_eq!(state.selection.selected_node(), Some(0));
		assert_eq!(state.view.nodes[0].fill, FillStyle::new(HIGHLIGHT_NODE_FILL));
		assert_eq!(state.view.nodes[0].stroke.color, HIGHLIGHT_NODE_STROKE);

		assert!(state.click(&surface, 5.0, 5.0));
		assert_eq!(state.selection.selected_node(), None);
		assert_eq!(state.view.nodes[0], before);
	}

	#[test]
	fn edge_selection_round_trip_restores_style() {
		let mut state = state(pair());
		let surface = RecordingSurface::default();
		let before = state.view.edges[0].stroke.clone();
		let mid = edge_midpoint(&state);

		assert!(state.click(&surface, mid.x, mid.y));
		assert_eq!(
			state.view.edges[0].stroke,
			StrokeStyle::new(HIGHLIGHT_EDGE_STROKE, HIGHLIGHT_EDGE_WIDTH)
		);
		assert!(state.click(&surface, 5.0, 5.0));
		assert_eq!(state.view.edges[0].stroke, before);
	}

	#[test]
	fn node_and_edge_selected_together() {
		let mut state = state(pair());
		let surface = RecordingSurface::default();
		let c = state.view.nodes[1].center;
		let mid = edge_midpoint(&state);

		assert!(state.click(&surface, c.x, c.y));
		assert!(state.click(&surface, mid.x, mid.y));
		assert_eq!(state.selection.selected_node(), Some(1));
		assert_eq!(state.selection.selected_edge(), Some(0));

		assert!(state.click(&surface, 5.0, 5.0));
		assert_eq!(state.selection, Selection::default());
		assert_eq!(state.view.nodes[1].fill, FillStyle::new("white"));
		assert_eq!(state.view.edges[0].stroke, StrokeStyle::new("black", 2.0));
	}

	#[test]
	fn reselecting_is_a_no_op_and_switching_restores() {
		let mut state = state(pair());
		let surface = RecordingSurface::default();
		let (a, b) = (state.view.nodes[0].center, state.view.nodes[1].center);

		assert!(state.click(&surface, a.x, a.y));
		assert!(!state.click(&surface, a.x, a.y));
		assert!(state.click(&surface, b.x, b.y));
		assert_eq!(state.selection.selected_node(), Some(1));
		assert_eq!(state.view.nodes[0].fill, FillStyle::new("white"));
	}

	#[test]
	fn miss_without_selection_needs_no_redraw() {
		let mut state = state(pair());
		assert!(!state.click(&RecordingSurface::default(), 5.0, 5.0));
	}

	#[test]
	fn resize_relayouts_and_clears_selection() {
		let mut state = state(pair());
		let surface = RecordingSurface::default();
		let c = state.view.nodes[0].center;
		state.click(&surface, c.x, c.y);
		state.resize(1000.0, 800.0, &surface);
		assert_eq!(state.view.origin, Point::new(500.0, 400.0));
		assert_eq!(state.selection.selected_node(), None);
		assert_eq!(state.view.nodes[0].fill, FillStyle::new("white"));
	}
}
