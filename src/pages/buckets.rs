use leptos::prelude::*;
use leptos_router::components::A;

use super::generated;
use crate::components::graph_canvas::GraphCanvas;
use crate::components::graph_text::GraphText;
use crate::generate::{FIRST_CAPACITY, SECOND_CAPACITY, bucket_graph};

/// Every state of the two-bucket puzzle reachable from two empty buckets.
#[component]
pub fn Buckets() -> impl IntoView {
	let graph = generated(bucket_graph);

	view! {
		<nav>
			<A href="/">"Divisibility"</A>
			" | "
			<A href="/buckets">"Two buckets"</A>
		</nav>
		<h1>{format!("Buckets of {FIRST_CAPACITY} and {SECOND_CAPACITY}")}</h1>
		<p class="subtitle">"Nodes are bucket contents; edges are fills, empties and pours."</p>
		<div class="graph-frame">
			<GraphCanvas data=graph width=Some(900.0) height=Some(900.0) />
		</div>
		<GraphText data=graph />
	}
}
