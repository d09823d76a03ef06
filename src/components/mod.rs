//! Leptos components.

pub mod graph_canvas;
pub mod graph_text;
