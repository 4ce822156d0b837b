use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::LineageError;

/// Clearance metadata for one node of a predicate lineage.
///
/// Only `generation` is meaningful to the core; the remaining fields are
/// display-only and frequently absent (roots in particular carry nothing
/// but a generation).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceInfo {
	/// Depth within the lineage, 0 at the oldest ancestor.
	pub generation: Option<u32>,
	pub decision_date: Option<String>,
	pub product_codes: Option<String>,
	pub device_trade_name: Option<String>,
}

/// One device's full predicate tree or branch, as delivered whole by the
/// data source in response to a query.
///
/// A document is replaced atomically on each new query and never mutated
/// in place. Both mappings preserve the iteration order of the source
/// JSON object, which node ordinals depend on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageDocument {
	/// Adjacency: node id to the ids of the clearances that cite it as a
	/// predicate. Leaves map to an empty list.
	pub tree: IndexMap<String, Vec<String>>,
	/// Per-node metadata. Every `tree` key is expected to have an entry.
	pub info: IndexMap<String, DeviceInfo>,
}

impl LineageDocument {
	/// Parse a document from the data source's JSON representation.
	pub fn from_json(raw: &str) -> Result<Self, LineageError> {
		serde_json::from_str(raw).map_err(|err| LineageError::Malformed(err.to_string()))
	}

	/// Check that every tree key carries a metadata record with a
	/// generation number.
	pub fn validate(&self) -> Result<(), LineageError> {
		for id in self.tree.keys() {
			let info = self
				.info
				.get(id)
				.ok_or_else(|| LineageError::MissingInfo(id.clone()))?;
			if info.generation.is_none() {
				return Err(LineageError::MissingGeneration(id.clone()));
			}
		}
		Ok(())
	}

	/// Metadata record for `id`.
	pub fn info_for(&self, id: &str) -> Result<&DeviceInfo, LineageError> {
		self.info
			.get(id)
			.ok_or_else(|| LineageError::MissingInfo(id.to_owned()))
	}

	/// Generation number for `id`.
	pub fn generation_of(&self, id: &str) -> Result<u32, LineageError> {
		self.info_for(id)?
			.generation
			.ok_or_else(|| LineageError::MissingGeneration(id.to_owned()))
	}

	/// Direct descendants of `id`.
	pub fn children_of(&self, id: &str) -> Result<&[String], LineageError> {
		self.tree
			.get(id)
			.map(Vec::as_slice)
			.ok_or_else(|| LineageError::MissingNode(id.to_owned()))
	}

	/// The clearance that `id` cites as its predicate: the first tree key
	/// whose descendant list contains `id`, or `None` for a root.
	pub fn predicate_of(&self, id: &str) -> Option<&str> {
		self.tree
			.iter()
			.find(|(_, children)| children.iter().any(|child| child == id))
			.map(|(key, _)| key.as_str())
	}
}
