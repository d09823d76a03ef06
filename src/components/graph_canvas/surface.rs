use std::f64::consts::PI;

use log::warn;
use web_sys::{CanvasRenderingContext2d, Path2d};

use super::types::{FillStyle, Font, Point, Shape, StrokeStyle};

/// The 2D drawing operations the view layer needs from its host.
///
/// Hit tests default to exact geometry; hosts with native path testing
/// can override them.
pub trait Surface {
	/// Fills the inside of `shape`.
	fn fill(&self, shape: &Shape, fill: &FillStyle);
	/// Outlines `shape`.
	fn stroke(&self, shape: &Shape, stroke: &StrokeStyle);
	/// Rendered width of `text` in `font`.
	fn measure_text_width(&self, text: &str, font: &Font) -> f64;
	/// Erases a rectangle.
	fn clear_region(&self, x: f64, y: f64, width: f64, height: f64);
	/// Font for subsequent [`Surface::draw_text`] calls.
	fn set_font(&self, font: &Font);
	/// Draws `text` with its baseline starting at `(x, y)`.
	fn draw_text(&self, text: &str, x: f64, y: f64, fill: &FillStyle);

	/// Whether `(x, y)` is inside the filled `shape`.
	fn point_in_shape(&self, shape: &Shape, x: f64, y: f64) -> bool {
		shape.contains(Point::new(x, y))
	}

	/// Whether `(x, y)` is on the outline of `shape`. `stroke` supplies the
	/// line width the outline is tested with.
	fn point_on_stroke(&self, shape: &Shape, stroke: &StrokeStyle, x: f64, y: f64) -> bool {
		shape.near_stroke(Point::new(x, y), stroke.width / 2.0)
	}
}

/// [`Surface`] backed by a browser canvas 2D context.
#[derive(Clone)]
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Draws on `ctx`.
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}

	fn path(shape: &Shape) -> Option<Path2d> {
		let path = match Path2d::new() {
			Ok(path) => path,
			Err(err) => {
				warn!("failed to create Path2D: {err:?}");
				return None;
			}
		};
		match *shape {
			Shape::Circle { center, radius } => {
				if let Err(err) = path.arc(center.x, center.y, radius, 0.0, 2.0 * PI) {
					warn!("failed to build arc: {err:?}");
					return None;
				}
			}
			Shape::Curve { from, control, to } => {
				path.move_to(from.x, from.y);
				path.quadratic_curve_to(control.x, control.y, to.x, to.y);
			}
		}
		Some(path)
	}
}

impl Surface for CanvasSurface {
	fn fill(&self, shape: &Shape, fill: &FillStyle) {
		let Some(path) = Self::path(shape) else {
			return;
		};
		self.ctx.set_fill_style_str(&fill.color);
		self.ctx.fill_with_path_2d(&path);
	}

	fn stroke(&self, shape: &Shape, stroke: &StrokeStyle) {
		let Some(path) = Self::path(shape) else {
			return;
		};
		self.ctx.set_stroke_style_str(&stroke.color);
		self.ctx.set_line_width(stroke.width);
		self.ctx.stroke_with_path(&path);
	}

	fn measure_text_width(&self, text: &str, font: &Font) -> f64 {
		self.set_font(font);
		match self.ctx.measure_text(text) {
			Ok(metrics) => metrics.width(),
			Err(err) => {
				warn!("failed to measure {text:?}: {err:?}");
				0.0
			}
		}
	}

	fn clear_region(&self, x: f64, y: f64, width: f64, height: f64) {
		self.ctx.clear_rect(x, y, width, height);
	}

	fn set_font(&self, font: &Font) {
		self.ctx.set_font(&font.css());
	}

	fn draw_text(&self, text: &str, x: f64, y: f64, fill: &FillStyle) {
		self.ctx.set_fill_style_str(&fill.color);
		if let Err(err) = self.ctx.fill_text(text, x, y) {
			warn!("failed to draw {text:?}: {err:?}");
		}
	}

	fn point_in_shape(&self, shape: &Shape, x: f64, y: f64) -> bool {
		Self::path(shape)
			.is_some_and(|path| self.ctx.is_point_in_path_with_path_2d_and_f64(&path, x, y))
	}

	fn point_on_stroke(&self, shape: &Shape, stroke: &StrokeStyle, x: f64, y: f64) -> bool {
		let Some(path) = Self::path(shape) else {
			return false;
		};
		self.ctx.set_line_width(stroke.width);
		self.ctx.is_point_in_stroke_with_path_and_x_and_y(&path, x, y)
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use std::cell::RefCell;

	use super::*;

	/// Width of every glyph reported by [`RecordingSurface`].
	pub const GLYPH_WIDTH: f64 = 10.0;

	#[derive(Clone, Debug, PartialEq)]
	pub enum Op {
		Clear,
		Fill(Shape, FillStyle),
		Stroke(Shape, StrokeStyle),
		Font(Font),
		Text(String, f64, f64),
	}

	/// Records draw calls and measures text at a fixed glyph width.
	#[derive(Default)]
	pub struct RecordingSurface {
		pub ops: RefCell<Vec<Op>>,
	}

	impl Surface for RecordingSurface {
		fn fill(&self, shape: &Shape, fill: &FillStyle) {
			self.ops
				.borrow_mut()
				.push(Op::Fill(shape.clone(), fill.clone()));
		}

		fn stroke(&self, shape: &Shape, stroke: &StrokeStyle) {
			self.ops
				.borrow_mut()
				.push(Op::Stroke(shape.clone(), stroke.clone()));
		}

		fn measure_text_width(&self, text: &str, _font: &Font) -> f64 {
			text.chars().count() as f64 * GLYPH_WIDTH
		}

		fn clear_region(&self, _x: f64, _y: f64, _width: f64, _height: f64) {
			self.ops.borrow_mut().push(Op::Clear);
		}

		fn set_font(&self, font: &Font) {
			self.ops.borrow_mut().push(Op::Font(font.clone()));
		}

		fn draw_text(&self, text: &str, x: f64, y: f64, _fill: &FillStyle) {
			self.ops
				.borrow_mut()
				.push(Op::Text(text.to_string(), x, y));
		}
	}

	#[test]
	fn default_hit_tests_use_geometry() {
		let surface = RecordingSurface::default();
		let circle = Shape::Circle {
			center: Point::new(0.0, 0.0),
			radius: 2.0,
		};
		assert!(surface.point_in_shape(&circle, 1.0, 1.0));
		assert!(!surface.point_in_shape(&circle, 2.0, 2.0));
		let line = Shape::Curve {
			from: Point::new(0.0, 0.0),
			control: Point::new(5.0, 0.0),
			to: Point::new(10.0, 0.0),
		};
		let stroke = StrokeStyle::new("black", 2.0);
		assert!(surface.point_on_stroke(&line, &stroke, 5.0, 0.8));
		assert!(!surface.point_on_stroke(&line, &stroke, 5.0, 1.2));
	}
}
