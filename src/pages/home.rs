use leptos::prelude::*;
use leptos_router::components::A;

use super::generated;
use crate::components::graph_canvas::GraphCanvas;
use crate::components::graph_text::GraphText;
use crate::generate::divisibility_graph;

/// Divisibility relation over 1..=12.
#[component]
pub fn Home() -> impl IntoView {
	let graph = generated(|| divisibility_graph(1, 12));

	view! {
		<nav>
			<A href="/">"Divisibility"</A>
			" | "
			<A href="/buckets">"Two buckets"</A>
		</nav>
		<h1>"Divides"</h1>
		<p class="subtitle">"An edge a → b means a divides b. Click a node or an edge to highlight it."</p>
		<div class="graph-frame">
			<GraphCanvas data=graph width=Some(800.0) height=Some(800.0) />
		</div>
		<GraphText data=graph />
	}
}
