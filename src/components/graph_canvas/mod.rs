//! Circular graph view on a canvas, with click selection of nodes and
//! edges.

mod component;
mod render;
mod state;
mod surface;
mod types;
mod view;

pub use component::GraphCanvas;
pub use render::render;
pub use state::{GraphCanvasState, Hit, Selection, hit_test};
pub use surface::{CanvasSurface, Surface};
pub use types::*;
pub use view::{EdgeView, LabelView, LayoutParams, NodeView, ViewModel, compute_view, compute_view_with};
