use serde::Serialize;

use super::document::LineageDocument;

/// A node record for the layout engine, one per tree key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphNode {
	pub id: String,
	pub name: String,
	/// 1-based position in the document's iteration order.
	pub ordinal: usize,
}

/// A directed edge from a predicate to a clearance that cites it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
	pub source: String,
	pub target: String,
}

/// Flat node/edge lists consumable by a force-directed renderer.
///
/// Derived deterministically from one [`LineageDocument`] and discarded
/// whenever the document is replaced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GraphView {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}

/// Flatten a lineage document into node and edge lists.
///
/// Nodes appear in `tree` iteration order with a running 1-based ordinal;
/// one edge is emitted per (key, descendant) pair, with no deduplication.
/// Descendants that are not themselves tree keys still produce an edge;
/// whether such an edge is drawn is the renderer's decision.
pub fn build_graph(doc: &LineageDocument) -> GraphView {
	let mut view = GraphView::default();
	for (ordinal, (id, children)) in doc.tree.iter().enumerate() {
		view.nodes.push(GraphNode {
			id: id.clone(),
			name: id.clone(),
			ordinal: ordinal + 1,
		});
		for child in children {
			view.edges.push(GraphEdge {
				source: id.clone(),
				target: child.clone(),
			});
		}
	}
	view
}

#[cfg(test)]
mod tests {
	use super::*;

	fn doc(entries: &[(&str, &[&str])]) -> LineageDocument {
		let mut doc = LineageDocument::default();
		for (id, children) in entries {
			doc.tree.insert(
				(*id).to_owned(),
				children.iter().map(|c| (*c).to_owned()).collect(),
			);
		}
		doc
	}

	#[test]
	fn counts_match_the_document() {
		let doc = doc(&[
			("QAS", &["DEN170073"]),
			("DEN170073", &["K180647"]),
			("K180647", &["K190072", "K201020"]),
			("K190072", &[]),
			("K201020", &[]),
		]);
		let view = build_graph(&doc);
		assert_eq!(view.nodes.len(), doc.tree.len());
		assert_eq!(
			view.edges.len(),
			doc.tree.values().map(Vec::len).sum::<usize>()
		);
	}

	#[test]
	fn nodes_follow_iteration_order_with_running_ordinals() {
		let doc = doc(&[("QAS", &["DEN170073"]), ("DEN170073", &[])]);
		let view = build_graph(&doc);
		assert_eq!(
			view.nodes,
			vec![
				GraphNode {
					id: "QAS".into(),
					name: "QAS".into(),
					ordinal: 1,
				},
				GraphNode {
					id: "DEN170073".into(),
					name: "DEN170073".into(),
					ordinal: 2,
				},
			]
		);
		assert_eq!(
			view.edges,
			vec![GraphEdge {
				source: "QAS".into(),
				target: "DEN170073".into(),
			}]
		);
	}

	#[test]
	fn empty_document_yields_empty_view() {
		let view = build_graph(&LineageDocument::default());
		assert!(view.nodes.is_empty());
		assert!(view.edges.is_empty());
	}

	#[test]
	fn repeated_descendants_emit_repeated_edges() {
		let doc = doc(&[("A", &["B", "B"]), ("B", &[])]);
		let view = build_graph(&doc);
		assert_eq!(view.edges.len(), 2);
		assert_eq!(view.edges[0], view.edges[1]);
	}

	#[test]
	fn dangling_targets_still_produce_edges() {
		let doc = doc(&[("A", &["GONE"])]);
		let view = build_graph(&doc);
		assert_eq!(view.nodes.len(), 1);
		assert_eq!(view.edges[0].target, "GONE");
	}

	#[test]
	fn rebuilding_is_deterministic() {
		let doc = doc(&[("QAS", &["DEN170073"]), ("DEN170073", &["K180647"])]);
		assert_eq!(build_graph(&doc), build_graph(&doc));
	}
}
