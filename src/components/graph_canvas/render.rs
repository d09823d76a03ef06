use super::surface::Surface;
use super::view::ViewModel;

/// Full repaint: edges, then nodes, then labels on top.
pub fn render(view: &ViewModel, surface: &impl Surface) {
	surface.clear_region(0.0, 0.0, view.width, view.height);
	draw_edges(view, surface);
	draw_nodes(view, surface);
	draw_labels(view, surface);
}

fn draw_edges(view: &ViewModel, surface: &impl Surface) {
	for edge in &view.edges {
		surface.stroke(&edge.path, &edge.stroke);
	}
}

fn draw_nodes(view: &ViewModel, surface: &impl Surface) {
	for node in &view.nodes {
		surface.fill(&node.shape, &node.fill);
		surface.stroke(&node.shape, &node.stroke);
	}
}

fn draw_labels(view: &ViewModel, surface: &impl Surface) {
	for label in &view.labels {
		surface.set_font(&label.font);
		surface.draw_text(&label.text, label.position.x, label.position.y, &label.fill);
	}
}
