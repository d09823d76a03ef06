use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::GraphCanvasState;
use super::surface::CanvasSurface;
use super::view::LayoutParams;
use crate::graph::Graph;

const FALLBACK_WIDTH: f64 = 800.0;
const FALLBACK_HEIGHT: f64 = 600.0;

struct Mounted {
	state: GraphCanvasState,
	surface: CanvasSurface,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	match canvas.get_context("2d") {
		Ok(Some(ctx)) => ctx.dyn_into().ok(),
		Ok(None) => None,
		Err(err) => {
			error!("failed to get 2d context: {err:?}");
			None
		}
	}
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width, height))
}

/// Draws `data` on a circular layout. Clicking a node or an edge highlights
/// it; clicking empty space clears the highlights. A `fullscreen` canvas
/// follows the window size and lays the graph out again on resize.
#[component]
pub fn GraphCanvas(
	#[prop(into)] data: Signal<Graph>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(default = 0.0)] curve_factor: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted: Rc<RefCell<Option<Mounted>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (mounted_init, resize_cb_init) = (mounted.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let window = web_sys::window();
		let (w, h) = match window.as_ref().filter(|_| fullscreen).and_then(window_size) {
			Some(size) => size,
			None => (
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.filter(|w| *w > 0.0)
						.unwrap_or(FALLBACK_WIDTH)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.filter(|h| *h > 0.0)
						.unwrap_or(FALLBACK_HEIGHT)
				}),
			),
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			error!("canvas has no 2d context");
			return;
		};
		let surface = CanvasSurface::new(ctx);
		let params = LayoutParams {
			curve_factor,
			..LayoutParams::new(w, h)
		};
		let state = GraphCanvasState::new(data.get(), params, &surface);
		debug!(
			"graph canvas {w}x{h} with {} nodes",
			state.graph.node_count()
		);
		render::render(&state.view, &surface);
		*mounted_init.borrow_mut() = Some(Mounted { state, surface });

		if fullscreen && resize_cb_init.borrow().is_none() {
			let (mounted_resize, canvas_resize) = (mounted_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut m) = *mounted_resize.borrow_mut() {
					m.state.resize(nw, nh, &m.surface);
					render::render(&m.state.view, &m.surface);
				}
			}));
			if let (Some(window), Some(cb)) = (&window, &*resize_cb_init.borrow()) {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});

	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut m) = *mounted.borrow_mut() {
			if m.state.click(&m.surface, x, y) {
				render::render(&m.state.view, &m.surface);
			}
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-canvas"
			on:click=on_click
			style="display: block; cursor: pointer;"
		/>
	}
}
