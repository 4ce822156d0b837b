use thiserror::Error;

/// Failures surfaced by the lineage core.
///
/// Lookups never substitute defaults for missing data; every failure is
/// reported to the caller, which owns user-visible messaging.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LineageError {
	/// A node referenced during attribute derivation has no metadata record.
	#[error("no metadata record for `{0}`")]
	MissingInfo(String),
	/// A metadata record exists but carries no generation number.
	#[error("no generation recorded for `{0}`")]
	MissingGeneration(String),
	/// An identifier is not a key of the lineage tree.
	#[error("`{0}` is not present in the lineage tree")]
	MissingNode(String),
	/// The document is not shaped as `tree`/`info` mappings.
	#[error("malformed lineage document: {0}")]
	Malformed(String),
}
