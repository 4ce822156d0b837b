//! Predicate lineage core: the document model delivered by the data
//! source, the flattening into node/edge lists for force-directed layout,
//! and per-node display attribute derivation.
//!
//! Everything in here is pure and target-independent; the canvas layer
//! adapts these types for drawing.

mod document;
mod error;
mod fixtures;
mod graph;
mod query;
mod style;

pub use document::{DeviceInfo, LineageDocument};
pub use error::LineageError;
pub use fixtures::{branch_for_device, product_code_for_device, tree_for_product_code};
pub use graph::{GraphEdge, GraphNode, GraphView, build_graph};
pub use query::Query;
pub use style::{
	ColorMode, HIGHLIGHT_COLOR, SizeMode, StyleConfig, color_by_generation, node_color,
	node_size, size_by_child_count, size_by_generation,
};
