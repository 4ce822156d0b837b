/// Interpretation of a search-box entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
	/// A product code, e.g. `QAS`.
	ProductCode(String),
	/// A 510(k) number, e.g. `K180647`.
	DeviceNumber(String),
}

impl Query {
	/// Classify raw user input: a seven-character entry starting with `K`
	/// is a 510(k) number, anything else is treated as a product code.
	pub fn classify(input: &str) -> Self {
		let input = input.trim();
		if input.len() == 7 && input.starts_with('K') {
			Query::DeviceNumber(input.to_owned())
		} else {
			Query::ProductCode(input.to_owned())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn k_numbers_are_device_queries() {
		assert_eq!(
			Query::classify("K180647"),
			Query::DeviceNumber("K180647".into())
		);
		assert_eq!(
			Query::classify("  K190072 "),
			Query::DeviceNumber("K190072".into())
		);
	}

	#[test]
	fn everything_else_is_a_product_code() {
		assert_eq!(Query::classify("QAS"), Query::ProductCode("QAS".into()));
		// De novo numbers are longer than seven characters and fall through.
		assert_eq!(
			Query::classify("DEN170073"),
			Query::ProductCode("DEN170073".into())
		);
		assert_eq!(Query::classify("K1806"), Query::ProductCode("K1806".into()));
	}
}
