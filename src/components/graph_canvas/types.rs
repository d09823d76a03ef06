/// Radius of every node circle, also the label font size.
pub const NODE_RADIUS: f64 = 30.0;
/// Outline width of node circles.
pub const NODE_STROKE_WIDTH: f64 = 3.0;
/// Line width of edges.
pub const EDGE_STROKE_WIDTH: f64 = 2.0;
/// Node background.
pub const NODE_FILL: &str = "white";
/// Node outline and edge color.
pub const STROKE_COLOR: &str = "black";
/// Label text color.
pub const LABEL_FILL: &str = "black";
/// Label font family.
pub const FONT_FAMILY: &str = "sans-serif";

/// Background of the selected node.
pub const HIGHLIGHT_NODE_FILL: &str = "#77FF77";
/// Outline color of the selected node.
pub const HIGHLIGHT_NODE_STROKE: &str = "#FFFF77";
/// Color of the selected edge.
pub const HIGHLIGHT_EDGE_STROKE: &str = "red";
/// Line width of the selected edge.
pub const HIGHLIGHT_EDGE_WIDTH: f64 = 3.0;

/// Layout circle radius as a fraction of the shorter canvas side.
pub const LAYOUT_RADIUS_RATIO: f64 = 0.4;
/// Label baseline offset below the node center, in node radii.
pub const LABEL_BASELINE_RATIO: f64 = 0.3;

/// Samples per quadratic curve when testing distance to its stroke.
const CURVE_SEGMENTS: usize = 32;

/// Canvas-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal position, growing rightwards.
	pub x: f64,
	/// Vertical position, growing downwards.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance.
	pub fn distance(self, other: Point) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}

	fn lerp(self, other: Point, t: f64) -> Point {
		Point::new(
			self.x + (other.x - self.x) * t,
			self.y + (other.y - self.y) * t,
		)
	}
}

/// Geometry handed to the drawing surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
	/// Full circle, filled for nodes.
	Circle {
		/// Center of the circle.
		center: Point,
		/// Radius of the circle.
		radius: f64,
	},
	/// Quadratic Bézier from `from` to `to` bent towards `control`.
	Curve {
		/// Start point.
		from: Point,
		/// Control point.
		control: Point,
		/// End point.
		to: Point,
	},
}

impl Shape {
	/// Whether `p` lies inside the filled shape. Open curves enclose nothing.
	pub fn contains(&self, p: Point) -> bool {
		match *self {
			Shape::Circle { center, radius } => center.distance(p) <= radius,
			Shape::Curve { .. } => false,
		}
	}

	/// Whether `p` lies within `tolerance` of the shape's outline.
	pub fn near_stroke(&self, p: Point, tolerance: f64) -> bool {
		match *self {
			Shape::Circle { center, radius } => (center.distance(p) - radius).abs() <= tolerance,
			Shape::Curve { from, control, to } => {
				if from == to && control == from {
					return false;
				}
				let mut prev = from;
				(1..=CURVE_SEGMENTS).any(|i| {
					let t = i as f64 / CURVE_SEGMENTS as f64;
					let next = from.lerp(control, t).lerp(control.lerp(to, t), t);
					let hit = segment_distance(p, prev, next) <= tolerance;
					prev = next;
					hit
				})
			}
		}
	}
}

fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
	let (dx, dy) = (b.x - a.x, b.y - a.y);
	let len2 = dx * dx + dy * dy;
	if len2 < f64::EPSILON {
		return p.distance(a);
	}
	let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0);
	p.distance(a.lerp(b, t))
}

/// Paint used to fill a shape or text.
#[derive(Clone, Debug, PartialEq)]
pub struct FillStyle {
	/// CSS color.
	pub color: String,
}

impl FillStyle {
	/// Fill with a CSS color.
	pub fn new(color: &str) -> Self {
		Self {
			color: color.to_string(),
		}
	}
}

/// Paint used to outline a shape.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
	/// CSS color.
	pub color: String,
	/// Line width.
	pub width: f64,
}

impl StrokeStyle {
	/// Outline with a CSS color and line width.
	pub fn new(color: &str, width: f64) -> Self {
		Self {
			color: color.to_string(),
			width,
		}
	}
}

/// Label font.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
	/// Size in pixels.
	pub size: f64,
	/// CSS font family.
	pub family: String,
}

impl Font {
	/// [`FONT_FAMILY`] at `size` pixels.
	pub fn new(size: f64) -> Self {
		Self {
			size,
			family: FONT_FAMILY.to_string(),
		}
	}

	/// CSS shorthand, e.g. `30px sans-serif`.
	pub fn css(&self) -> String {
		format!("{}px {}", self.size, self.family)
	}
}
