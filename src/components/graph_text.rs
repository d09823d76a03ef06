//! Text serializations of a graph rendered under the canvas.

use leptos::prelude::*;

use crate::graph::Graph;

/// The three text serializations of a graph, side by side.
#[component]
pub fn GraphText(#[prop(into)] data: Signal<Graph>) -> impl IntoView {
	let matrix = move || data.with(Graph::to_adjacency_matrix);
	let list = move || data.with(Graph::to_edge_list);
	let edges = move || data.with(Graph::edge_strings);

	view! {
		<section class="graph-text">
			<div>
				<h2>"Adjacency matrix"</h2>
				<pre id="adjacency-matrix">{matrix}</pre>
			</div>
			<div>
				<h2>"Adjacency list"</h2>
				<pre id="adjacency-list">{list}</pre>
			</div>
			<div>
				<h2>"Edge list"</h2>
				<pre id="edge-list">{edges}</pre>
			</div>
		</section>
	}
}
