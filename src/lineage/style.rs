//! Display attribute derivation: node size and fill color as functions of
//! the current document plus an explicit caller-owned configuration.

use super::document::LineageDocument;
use super::error::LineageError;

/// Fill color for the identifier the user queried for.
pub const HIGHLIGHT_COLOR: &str = "#f1f50a";

/// Warm-to-yellow gradient indexed by generation in tiered mode.
const GENERATION_COLORS: [&str; 4] = ["#f56942", "#f5a442", "#f5d442", "#f5f542"];
const DEFAULT_COLOR: &str = "#f6fc9a";
const ODD_COLOR: &str = "#008000";
const EVEN_COLOR: &str = "#FF0000";

/// Size weights for generations 0, 1 and 2; later generations share one
/// smaller default.
const GENERATION_SIZES: [f64; 3] = [10.0, 2.0, 1.0];
const DEFAULT_SIZE: f64 = 0.5;

/// How node fill colors are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
	/// Tier palette indexed by generation, with one default past tier 3.
	Tiered,
	/// Two fixed colors alternating on generation parity.
	#[default]
	Alternating,
}

/// How node sizes are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeMode {
	/// Fixed weight per generation tier.
	#[default]
	Generation,
	/// Weight equals the node's direct descendant count.
	ChildCount,
}

/// Styling configuration for one draw pass. Owned by the caller and passed
/// in whole; the deriver keeps no state of its own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleConfig {
	pub size_mode: SizeMode,
	pub color_mode: ColorMode,
	/// The identifier the user queried, drawn in [`HIGHLIGHT_COLOR`].
	pub highlighted: Option<String>,
}

/// Size weight from the node's generation tier.
pub fn size_by_generation(doc: &LineageDocument, id: &str) -> Result<f64, LineageError> {
	let generation = doc.generation_of(id)?;
	Ok(GENERATION_SIZES
		.get(generation as usize)
		.copied()
		.unwrap_or(DEFAULT_SIZE))
}

/// Size weight from the node's direct descendant count.
pub fn size_by_child_count(doc: &LineageDocument, id: &str) -> Result<f64, LineageError> {
	Ok(doc.children_of(id)?.len() as f64)
}

/// Fill color for a node. A match against `highlighted` wins over both
/// coloring modes.
pub fn color_by_generation(
	doc: &LineageDocument,
	id: &str,
	mode: ColorMode,
	highlighted: Option<&str>,
) -> Result<&'static str, LineageError> {
	if highlighted == Some(id) {
		return Ok(HIGHLIGHT_COLOR);
	}
	let generation = doc.generation_of(id)?;
	let color = match mode {
		ColorMode::Tiered => GENERATION_COLORS
			.get(generation as usize)
			.copied()
			.unwrap_or(DEFAULT_COLOR),
		ColorMode::Alternating => {
			if generation % 2 == 1 {
				ODD_COLOR
			} else {
				EVEN_COLOR
			}
		}
	};
	Ok(color)
}

/// Size under the configured mode.
pub fn node_size(
	doc: &LineageDocument,
	id: &str,
	config: &StyleConfig,
) -> Result<f64, LineageError> {
	match config.size_mode {
		SizeMode::Generation => size_by_generation(doc, id),
		SizeMode::ChildCount => size_by_child_count(doc, id),
	}
}

/// Color under the configured mode and highlight.
pub fn node_color(
	doc: &LineageDocument,
	id: &str,
	config: &StyleConfig,
) -> Result<&'static str, LineageError> {
	color_by_generation(doc, id, config.color_mode, config.highlighted.as_deref())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lineage::DeviceInfo;

	fn doc_with_generations(entries: &[(&str, u32, &[&str])]) -> LineageDocument {
		let mut doc = LineageDocument::default();
		for (id, generation, children) in entries {
			doc.tree.insert(
				(*id).to_owned(),
				children.iter().map(|c| (*c).to_owned()).collect(),
			);
			doc.info.insert(
				(*id).to_owned(),
				DeviceInfo {
					generation: Some(*generation),
					..DeviceInfo::default()
				},
			);
		}
		doc
	}

	#[test]
	fn generation_tiers_map_to_fixed_sizes() {
		let doc = doc_with_generations(&[
			("A", 0, &[]),
			("B", 1, &[]),
			("C", 2, &[]),
			("D", 3, &[]),
			("E", 7, &[]),
		]);
		assert_eq!(size_by_generation(&doc, "A").unwrap(), 10.0);
		assert_eq!(size_by_generation(&doc, "B").unwrap(), 2.0);
		assert_eq!(size_by_generation(&doc, "C").unwrap(), 1.0);
		assert_eq!(size_by_generation(&doc, "D").unwrap(), 0.5);
		assert_eq!(size_by_generation(&doc, "E").unwrap(), 0.5);
	}

	#[test]
	fn size_by_generation_fails_without_metadata() {
		let mut doc = doc_with_generations(&[("A", 0, &[])]);
		doc.info.shift_remove("A");
		assert_eq!(
			size_by_generation(&doc, "A").unwrap_err(),
			LineageError::MissingInfo("A".into())
		);

		let mut doc = doc_with_generations(&[("A", 0, &[])]);
		doc.info["A"].generation = None;
		assert_eq!(
			size_by_generation(&doc, "A").unwrap_err(),
			LineageError::MissingGeneration("A".into())
		);
	}

	#[test]
	fn child_count_sizing() {
		let doc = doc_with_generations(&[("QAS", 0, &["DEN170073"]), ("DEN170073", 1, &[])]);
		assert_eq!(size_by_child_count(&doc, "QAS").unwrap(), 1.0);
		assert_eq!(size_by_child_count(&doc, "DEN170073").unwrap(), 0.0);
		assert_eq!(
			size_by_child_count(&doc, "K999999").unwrap_err(),
			LineageError::MissingNode("K999999".into())
		);
	}

	#[test]
	fn tiered_palette_with_default_past_tier_three() {
		let doc = doc_with_generations(&[
			("A", 0, &[]),
			("B", 1, &[]),
			("C", 2, &[]),
			("D", 3, &[]),
			("E", 4, &[]),
		]);
		let color = |id| color_by_generation(&doc, id, ColorMode::Tiered, None).unwrap();
		assert_eq!(color("A"), "#f56942");
		assert_eq!(color("B"), "#f5a442");
		assert_eq!(color("C"), "#f5d442");
		assert_eq!(color("D"), "#f5f542");
		assert_eq!(color("E"), "#f6fc9a");
	}

	#[test]
	fn alternating_mode_follows_parity() {
		let doc = doc_with_generations(&[("odd", 3, &[]), ("even", 4, &[])]);
		let odd = color_by_generation(&doc, "odd", ColorMode::Alternating, None).unwrap();
		let even = color_by_generation(&doc, "even", ColorMode::Alternating, None).unwrap();
		assert_eq!(odd, "#008000");
		assert_eq!(even, "#FF0000");
		assert_ne!(odd, even);
	}

	#[test]
	fn highlight_overrides_both_modes() {
		let doc = doc_with_generations(&[("odd", 3, &[]), ("even", 4, &[])]);
		for mode in [ColorMode::Tiered, ColorMode::Alternating] {
			let color = color_by_generation(&doc, "odd", mode, Some("odd")).unwrap();
			assert_eq!(color, HIGHLIGHT_COLOR);
			let other = color_by_generation(&doc, "even", mode, Some("odd")).unwrap();
			assert_ne!(other, HIGHLIGHT_COLOR);
		}
	}

	#[test]
	fn config_dispatch() {
		let doc = doc_with_generations(&[("QAS", 0, &["DEN170073"]), ("DEN170073", 1, &[])]);
		let config = StyleConfig {
			size_mode: SizeMode::ChildCount,
			color_mode: ColorMode::Tiered,
			highlighted: Some("QAS".into()),
		};
		assert_eq!(node_size(&doc, "QAS", &config).unwrap(), 1.0);
		assert_eq!(node_color(&doc, "QAS", &config).unwrap(), HIGHLIGHT_COLOR);
		assert_eq!(node_color(&doc, "DEN170073", &config).unwrap(), "#f5a442");
	}
}
