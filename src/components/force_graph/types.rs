use crate::lineage::{GraphView, LineageDocument, LineageError, StyleConfig, node_color, node_size};

/// Radius drawn for a node with size weight 1.0.
const BASE_RADIUS: f64 = 5.0;
/// Floor on the drawn radius; zero-child nodes stay visible under
/// child-count sizing.
const MIN_RADIUS: f64 = 2.5;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
	pub id: String,
	pub label: String,
	pub color: String,
	pub radius: f64,
	/// Generation row used by the layered layout.
	pub row: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneEdge {
	pub source: String,
	pub target: String,
}

/// Everything the canvas needs to draw one lineage query: styled nodes,
/// directed edges, and the active layout/label flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphScene {
	pub nodes: Vec<SceneNode>,
	pub edges: Vec<SceneEdge>,
	pub show_labels: bool,
	pub layered: bool,
}

impl GraphScene {
	/// Style a flattened graph for drawing. Size and color come from the
	/// attribute deriver under `config`; any lookup failure propagates
	/// rather than yielding a partially styled scene.
	pub fn build(
		doc: &LineageDocument,
		view: &GraphView,
		config: &StyleConfig,
		show_labels: bool,
		layered: bool,
	) -> Result<Self, LineageError> {
		let mut nodes = Vec::with_capacity(view.nodes.len());
		for node in &view.nodes {
			let weight = node_size(doc, &node.id, config)?;
			let color = node_color(doc, &node.id, config)?;
			nodes.push(SceneNode {
				id: node.id.clone(),
				label: node.name.clone(),
				color: color.to_owned(),
				radius: (BASE_RADIUS * weight.sqrt()).max(MIN_RADIUS),
				row: doc.generation_of(&node.id)?,
			});
		}
		let edges = view
			.edges
			.iter()
			.map(|edge| SceneEdge {
				source: edge.source.clone(),
				target: edge.target.clone(),
			})
			.collect();
		Ok(Self {
			nodes,
			edges,
			show_labels,
			layered,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lineage::{
		ColorMode, DeviceInfo, HIGHLIGHT_COLOR, SizeMode, build_graph, tree_for_product_code,
	};

	fn config(highlighted: Option<&str>) -> StyleConfig {
		StyleConfig {
			size_mode: SizeMode::Generation,
			color_mode: ColorMode::Alternating,
			highlighted: highlighted.map(str::to_owned),
		}
	}

	#[test]
	fn styles_every_node_of_a_catalog_tree() {
		let doc = tree_for_product_code("QAS").unwrap();
		let view = build_graph(&doc);
		let scene = GraphScene::build(&doc, &view, &config(Some("K190072")), true, false).unwrap();

		assert_eq!(scene.nodes.len(), view.nodes.len());
		assert_eq!(scene.edges.len(), view.edges.len());

		let highlighted = scene.nodes.iter().find(|n| n.id == "K190072").unwrap();
		assert_eq!(highlighted.color, HIGHLIGHT_COLOR);
		assert_eq!(highlighted.row, 3);

		let root = scene.nodes.iter().find(|n| n.id == "QAS").unwrap();
		assert!(scene.nodes.iter().all(|n| n.radius <= root.radius));
	}

	#[test]
	fn child_count_sizing_clamps_leaves_to_a_visible_radius() {
		let doc = tree_for_product_code("QAS").unwrap();
		let view = build_graph(&doc);
		let cfg = StyleConfig {
			size_mode: SizeMode::ChildCount,
			..StyleConfig::default()
		};
		let scene = GraphScene::build(&doc, &view, &cfg, false, false).unwrap();
		let leaf = scene.nodes.iter().find(|n| n.id == "K220499").unwrap();
		assert_eq!(leaf.radius, MIN_RADIUS);
		assert!(!scene.show_labels);
	}

	#[test]
	fn dangling_edges_survive_into_the_scene() {
		let mut doc = LineageDocument::default();
		doc.tree.insert("A".into(), vec!["GONE".into()]);
		doc.info.insert(
			"A".into(),
			DeviceInfo {
				generation: Some(0),
				..DeviceInfo::default()
			},
		);
		let scene =
			GraphScene::build(&doc, &build_graph(&doc), &config(None), true, false).unwrap();
		assert_eq!(scene.nodes.len(), 1);
		assert_eq!(scene.edges[0].target, "GONE");
	}

	#[test]
	fn missing_metadata_aborts_the_scene() {
		let mut doc = LineageDocument::default();
		doc.tree.insert("A".into(), vec![]);
		let err =
			GraphScene::build(&doc, &build_graph(&doc), &config(None), true, false).unwrap_err();
		assert_eq!(err, LineageError::MissingInfo("A".into()));
	}
}
