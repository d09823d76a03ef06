use leptos::prelude::*;

use crate::graph::Graph;

pub mod buckets;
pub mod home;
pub mod not_found;

/// Builds a page's graph once and shares it with every reader.
fn generated(build: impl FnOnce() -> Graph) -> Signal<Graph> {
	Signal::stored(build())
}
