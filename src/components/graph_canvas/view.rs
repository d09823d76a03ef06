use std::f64::consts::PI;

use log::debug;

use super::surface::Surface;
use super::types::*;
use crate::graph::{EdgeId, Graph, NodeId};

/// Canvas size and edge bending used by [`compute_view_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
	/// Canvas width.
	pub width: f64,
	/// Canvas height.
	pub height: f64,
	/// Control point offset as a fraction of the edge length, measured
	/// perpendicular to the edge. Zero draws straight edges.
	pub curve_factor: f64,
}

impl LayoutParams {
	/// Straight edges on a `width` by `height` canvas.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			curve_factor: 0.0,
		}
	}
}

/// A node's circle on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeView {
	/// Graph node drawn here.
	pub node: NodeId,
	/// Position on the layout circle.
	pub center: Point,
	/// Circle radius.
	pub radius: f64,
	/// Current background, swapped while selected.
	pub fill: FillStyle,
	/// Current outline, swapped while selected.
	pub stroke: StrokeStyle,
	/// Circle used for drawing and hit-testing.
	pub shape: Shape,
}

/// An edge's curve between two node centers.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeView {
	/// Graph edge drawn here.
	pub edge: EdgeId,
	/// Quadratic curve from source to destination center.
	pub path: Shape,
	/// Current line style, swapped while selected.
	pub stroke: StrokeStyle,
}

/// A node's name, centered over its circle.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelView {
	/// Node the label names.
	pub node: NodeId,
	/// Node name.
	pub text: String,
	/// Left end of the text baseline.
	pub position: Point,
	/// Font the width was measured with.
	pub font: Font,
	/// Text color.
	pub fill: FillStyle,
}

/// Renderable projection of a [`Graph`]. `nodes` and `edges` follow the
/// graph's insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewModel {
	/// Canvas width.
	pub width: f64,
	/// Canvas height.
	pub height: f64,
	/// Center of the layout circle.
	pub origin: Point,
	/// Radius of the layout circle.
	pub radius: f64,
	/// One view per graph node.
	pub nodes: Vec<NodeView>,
	/// One view per graph edge.
	pub edges: Vec<EdgeView>,
	/// One label per node, drawn last.
	pub labels: Vec<LabelView>,
}

impl ViewModel {
	/// View of `node`, if it belongs to the laid-out graph.
	pub fn node_view(&self, node: NodeId) -> Option<&NodeView> {
		self.nodes.get(node.index())
	}
}

/// Circular layout with straight edges.
pub fn compute_view(graph: &Graph, width: f64, height: f64, surface: &impl Surface) -> ViewModel {
	compute_view_with(graph, &LayoutParams::new(width, height), surface)
}

/// Places nodes clockwise on a circle starting at the top, then routes
/// edges between them and centers a label under each node's middle.
pub fn compute_view_with(
	graph: &Graph,
	params: &LayoutParams,
	surface: &impl Surface,
) -> ViewModel {
	let origin = Point::new(params.width / 2.0, params.height / 2.0);
	let radius = params.width.min(params.height) * LAYOUT_RADIUS_RATIO;
	let mut view = ViewModel {
		width: params.width,
		height: params.height,
		origin,
		radius,
		..Default::default()
	};
	if graph.node_count() == 0 {
		return view;
	}

	let step = 2.0 * PI / graph.node_count() as f64;
	view.nodes = graph
		.node_ids()
		.map(|node| {
			let angle = -0.5 * PI + step * node.index() as f64;
			let center = Point::new(
				origin.x + radius * angle.cos(),
				origin.y + radius * angle.sin(),
			);
			NodeView {
				node,
				center,
				radius: NODE_RADIUS,
				fill: FillStyle::new(NODE_FILL),
				stroke: StrokeStyle::new(STROKE_COLOR, NODE_STROKE_WIDTH),
				shape: Shape::Circle {
					center,
					radius: NODE_RADIUS,
				},
			}
		})
		.collect();

	view.edges = graph
		.edge_ids()
		.zip(graph.edges())
		.filter_map(|(id, edge)| {
			let from = view.node_view(edge.from())?.center;
			let to = view.node_view(edge.to())?.center;
			Some(EdgeView {
				edge: id,
				path: curve(from, to, params.curve_factor),
				stroke: StrokeStyle::new(STROKE_COLOR, EDGE_STROKE_WIDTH),
			})
		})
		.collect();

	let font = Font::new(NODE_RADIUS);
	view.labels = view
		.nodes
		.iter()
		.map(|node_view| {
			let text = graph.node_name(node_view.node).to_string();
			let width = surface.measure_text_width(&text, &font);
			LabelView {
				node: node_view.node,
				position: Point::new(
					node_view.center.x - width / 2.0,
					node_view.center.y + node_view.radius * LABEL_BASELINE_RATIO,
				),
				text,
				font: font.clone(),
				fill: FillStyle::new(LABEL_FILL),
			}
		})
		.collect();

	debug!(
		"layout {}x{}: {} nodes on radius {radius}, {} edges",
		params.width,
		params.height,
		view.nodes.len(),
		view.edges.len()
	);
	view
}

fn curve(from: Point, to: Point, factor: f64) -> Shape {
	let (dx, dy) = (to.x - from.x, to.y - from.y);
	let control = Point::new(
		(from.x + to.x) / 2.0 - dy * factor,
		(from.y + to.y) / 2.0 + dx * factor,
	);
	Shape::Curve { from, control, to }
}
