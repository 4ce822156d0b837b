//! Embedded example lineages. These stand in for the scraping backend,
//! which is a separate service; the documents below go through the same
//! JSON contract a live data source would deliver.

use super::document::LineageDocument;

const QAS_TREE: &str = r#"{
	"tree": {
		"QAS": ["DEN170073"],
		"DEN170073": ["K180647"],
		"K180647": ["K190072"],
		"K190072": ["K220499", "K201020", "K210237"],
		"K220499": [],
		"K201020": [],
		"K210237": []
	},
	"info": {
		"QAS": { "generation": 0 },
		"DEN170073": {
			"generation": 1,
			"decisionDate": "2018-02-13",
			"productCodes": "QAS",
			"deviceTradeName": "ContaCT"
		},
		"K180647": {
			"generation": 2,
			"decisionDate": "2018-08-01",
			"productCodes": "QAS",
			"deviceTradeName": "BriefCase"
		},
		"K190072": {
			"generation": 3,
			"decisionDate": "2019-04-15",
			"productCodes": "QAS",
			"deviceTradeName": "BriefCase"
		},
		"K220499": {
			"generation": 4,
			"decisionDate": "2022-05-17",
			"productCodes": "QAS",
			"deviceTradeName": "Rapid PE Triage and Notification (PETN)"
		},
		"K201020": {
			"generation": 4,
			"decisionDate": "2020-08-26",
			"productCodes": "QAS",
			"deviceTradeName": "BriefCase"
		},
		"K210237": {
			"generation": 4,
			"decisionDate": "2021-05-19",
			"productCodes": "QAS",
			"deviceTradeName": "CINA CHEST"
		}
	}
}"#;

const MYN_TREE: &str = r#"{
	"tree": {
		"MYN": ["K163253"],
		"K163253": ["K183046"],
		"K183046": ["K201919", "K211370"],
		"K201919": [],
		"K211370": []
	},
	"info": {
		"MYN": { "generation": 0 },
		"K163253": {
			"generation": 1,
			"decisionDate": "2016-11-04",
			"productCodes": "MYN",
			"deviceTradeName": "NeuroWave Analyzer"
		},
		"K183046": {
			"generation": 2,
			"decisionDate": "2018-12-18",
			"productCodes": "MYN",
			"deviceTradeName": "NeuroWave Analyzer II"
		},
		"K201919": {
			"generation": 3,
			"decisionDate": "2020-09-23",
			"productCodes": "MYN",
			"deviceTradeName": "CerebraScan"
		},
		"K211370": {
			"generation": 3,
			"decisionDate": "2021-07-30",
			"productCodes": "MYN",
			"deviceTradeName": "CortiView"
		}
	}
}"#;

const LZA_TREE: &str = r#"{
	"tree": {
		"LZA": ["K112329"],
		"K112329": ["K133866", "K150724"],
		"K133866": ["K162627"],
		"K150724": [],
		"K162627": []
	},
	"info": {
		"LZA": { "generation": 0 },
		"K112329": {
			"generation": 1,
			"decisionDate": "2011-10-12",
			"productCodes": "LZA",
			"deviceTradeName": "SpineMetrics"
		},
		"K133866": {
			"generation": 2,
			"decisionDate": "2014-01-28",
			"productCodes": "LZA",
			"deviceTradeName": "SpineMetrics 2"
		},
		"K150724": {
			"generation": 2,
			"decisionDate": "2015-06-19",
			"productCodes": "LZA",
			"deviceTradeName": "VertAlign"
		},
		"K162627": {
			"generation": 3,
			"decisionDate": "2016-12-02",
			"productCodes": "LZA",
			"deviceTradeName": "OrthoGauge"
		}
	}
}"#;

const K190072_BRANCH: &str = r#"{
	"tree": {
		"K180647": ["K190072"],
		"DEN170073": ["K180647"],
		"QAS": ["DEN170073"],
		"K190072": ["K220499", "K201020", "K210237"],
		"K220499": [],
		"K201020": [],
		"K210237": []
	},
	"info": {
		"K190072": {
			"generation": 3,
			"decisionDate": "2019-04-15",
			"productCodes": "QAS",
			"deviceTradeName": "BriefCase"
		},
		"K220499": {
			"generation": 4,
			"decisionDate": "2022-05-17",
			"productCodes": "QAS",
			"deviceTradeName": "Rapid PE Triage and Notification (PETN)"
		},
		"K201020": {
			"generation": 4,
			"decisionDate": "2020-08-26",
			"productCodes": "QAS",
			"deviceTradeName": "BriefCase"
		},
		"DEN170073": {
			"generation": 1,
			"decisionDate": "2018-02-13",
			"productCodes": "QAS",
			"deviceTradeName": "ContaCT"
		},
		"K210237": {
			"generation": 4,
			"decisionDate": "2021-05-19",
			"productCodes": "QAS",
			"deviceTradeName": "CINA CHEST"
		},
		"K180647": {
			"generation": 2,
			"decisionDate": "2018-08-01",
			"productCodes": "QAS",
			"deviceTradeName": "BriefCase"
		},
		"QAS": { "generation": 0 }
	}
}"#;

const PRODUCT_CODES: [&str; 3] = ["QAS", "MYN", "LZA"];

fn parse(raw: &str) -> Option<LineageDocument> {
	match LineageDocument::from_json(raw) {
		Ok(doc) => match doc.validate() {
			Ok(()) => Some(doc),
			Err(err) => {
				log::error!("embedded lineage fixture is invalid: {err}");
				None
			}
		},
		Err(err) => {
			log::error!("embedded lineage fixture is unreadable: {err}");
			None
		}
	}
}

/// Full predicate tree for a product code, if the catalog has one.
pub fn tree_for_product_code(pcode: &str) -> Option<LineageDocument> {
	match pcode {
		"QAS" => parse(QAS_TREE),
		"MYN" => parse(MYN_TREE),
		"LZA" => parse(LZA_TREE),
		_ => None,
	}
}

/// Branch document rooted at a single 510(k) number.
pub fn branch_for_device(knumber: &str) -> Option<LineageDocument> {
	match knumber {
		"K190072" => parse(K190072_BRANCH),
		_ => None,
	}
}

/// Resolve a 510(k) number to its primary product code by scanning the
/// catalog trees. Stands in for the external record-lookup API.
pub fn product_code_for_device(knumber: &str) -> Option<String> {
	for doc in PRODUCT_CODES.iter().filter_map(|p| tree_for_product_code(p)) {
		if let Some(info) = doc.info.get(knumber) {
			if let Some(codes) = info.product_codes.as_deref() {
				return codes.split(',').next().map(|code| code.trim().to_owned());
			}
		}
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_fixture_parses_and_validates() {
		for raw in [QAS_TREE, MYN_TREE, LZA_TREE, K190072_BRANCH] {
			let doc = LineageDocument::from_json(raw).unwrap();
			doc.validate().unwrap();
			assert!(!doc.tree.is_empty());
		}
	}

	#[test]
	fn catalog_lookups() {
		assert!(tree_for_product_code("QAS").is_some());
		assert!(tree_for_product_code("MYN").is_some());
		assert!(tree_for_product_code("LZA").is_some());
		assert!(tree_for_product_code("ZZZ").is_none());

		assert!(branch_for_device("K190072").is_some());
		assert!(branch_for_device("K999999").is_none());
	}

	#[test]
	fn device_numbers_resolve_to_product_codes() {
		assert_eq!(product_code_for_device("K190072").as_deref(), Some("QAS"));
		assert_eq!(product_code_for_device("K183046").as_deref(), Some("MYN"));
		assert_eq!(product_code_for_device("K999999"), None);
	}

	#[test]
	fn branch_roots_carry_only_a_generation() {
		let doc = branch_for_device("K190072").unwrap();
		let root = doc.info_for("QAS").unwrap();
		assert_eq!(root.generation, Some(0));
		assert!(root.device_trade_name.is_none());
	}
}
