use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::{GraphScene, SceneNode};

/// World-space hit radius floor for small nodes.
pub const HIT_RADIUS: f64 = 12.0;
/// Vertical distance between generation rows in layered mode.
const LEVEL_DISTANCE: f64 = 60.0;
/// Horizontal distance between row neighbors in layered mode.
const ROW_SPACING: f64 = 50.0;

/// Per-node draw attributes carried inside the simulation graph.
#[derive(Clone, Debug, Default)]
pub struct NodeVisual {
	pub id: String,
	pub label: String,
	pub color: String,
	pub radius: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeVisual, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	pub show_labels: bool,
	layered: bool,
	ids: Vec<String>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

impl ForceGraphState {
	pub fn new(scene: &GraphScene, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut ids = Vec::with_capacity(scene.nodes.len());
		let mut edges = Vec::new();

		// Layered mode pins nodes on generation rows centered on the
		// origin; free mode seeds a circle and lets the simulation settle.
		let mut row_counts: HashMap<u32, usize> = HashMap::new();
		let mut row_cursor: HashMap<u32, usize> = HashMap::new();
		if scene.layered {
			for node in &scene.nodes {
				*row_counts.entry(node.row).or_default() += 1;
			}
		}
		let max_row = scene.nodes.iter().map(|n| n.row).max().unwrap_or(0);

		for (i, node) in scene.nodes.iter().enumerate() {
			let (x, y) = if scene.layered {
				let count = row_counts[&node.row];
				let slot = row_cursor.entry(node.row).or_default();
				let x = (*slot as f64 - (count as f64 - 1.0) / 2.0) * ROW_SPACING;
				let y = (node.row as f64 - max_row as f64 / 2.0) * LEVEL_DISTANCE;
				*slot += 1;
				(x as f32, y as f32)
			} else {
				let angle = (i as f64) * 2.0 * PI / scene.nodes.len() as f64;
				(
					(width / 2.0 + 100.0 * angle.cos()) as f32,
					(height / 2.0 + 100.0 * angle.sin()) as f32,
				)
			};

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: scene.layered,
				user_data: NodeVisual {
					id: node.id.clone(),
					label: node.label.clone(),
					color: node.color.clone(),
					radius: node.radius,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
			ids.push(node.id.clone());
		}

		for edge in &scene.edges {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&edge.source), id_to_idx.get(&edge.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
			} else {
				// Dangling reference: kept in the graph view, not drawable.
				log::debug!("skipping edge to unknown node {} -> {}", edge.source, edge.target);
			}
		}

		Self {
			graph,
			edges,
			ids,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
			show_labels: scene.show_labels,
			layered: scene.layered,
		}
	}

	/// Whether `scene` describes the same node set and layout mode, so the
	/// running simulation can be kept and only restyled.
	pub fn matches(&self, scene: &GraphScene) -> bool {
		self.layered == scene.layered
			&& self.ids.len() == scene.nodes.len()
			&& self
				.ids
				.iter()
				.zip(&scene.nodes)
				.all(|(id, node)| id == &node.id)
	}

	/// Re-apply colors, radii and the label flag without disturbing node
	/// positions.
	pub fn update_styles(&mut self, scene: &GraphScene) {
		self.show_labels = scene.show_labels;
		let by_id: HashMap<&str, &SceneNode> =
			scene.nodes.iter().map(|n| (n.id.as_str(), n)).collect();
		self.graph.visit_nodes_mut(|node| {
			if let Some(styled) = by_id.get(node.data.user_data.id.as_str()) {
				node.data.user_data.color = styled.color.clone();
				node.data.user_data.radius = styled.radius;
			}
		});
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// Hit radius is world-space and never below the visual radius
			let hit = node.data.user_data.radius.max(HIT_RADIUS);
			if (dx * dx + dy * dy).sqrt() < hit {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.id.clone());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
