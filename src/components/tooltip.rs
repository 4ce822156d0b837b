use leptos::prelude::*;

use crate::lineage::LineageDocument;

#[derive(Clone, PartialEq, Eq)]
struct Details {
	trade_name: String,
	product_codes: String,
	decision_date: String,
	predicate: String,
	children: usize,
	generation: String,
}

fn details_for(doc: &LineageDocument, id: &str) -> Option<Details> {
	match doc.info_for(id) {
		Ok(info) => Some(Details {
			trade_name: info.device_trade_name.clone().unwrap_or_default(),
			product_codes: info.product_codes.clone().unwrap_or_default(),
			decision_date: info.decision_date.clone().unwrap_or_default(),
			generation: info
				.generation
				.map(|g| g.to_string())
				.unwrap_or_default(),
			predicate: doc.predicate_of(id).unwrap_or_default().to_owned(),
			children: doc.children_of(id).map(|c| c.len()).unwrap_or(0),
		}),
		Err(err) => {
			log::warn!("selected node has no metadata: {err}");
			None
		}
	}
}

/// Detail panel for the clearance record the user clicked on.
#[component]
pub fn NodeDetails(
	#[prop(into)] document: Signal<Option<LineageDocument>>,
	selected: RwSignal<Option<String>>,
) -> impl IntoView {
	let details = Memo::new(move |_| {
		let id = selected.get()?;
		document.with(|doc| details_for(doc.as_ref()?, &id))
	});

	view! {
		{move || {
			details
				.get()
				.map(|d| {
					view! {
						<div class="detail-panel">
							<div class="detail-column">
								<p>
									<b>"Device Name: "</b>
									{d.trade_name}
								</p>
								<p>
									<b>"Product Code(s): "</b>
									{d.product_codes}
								</p>
								<p>
									<b>"Decision Date: "</b>
									{d.decision_date}
								</p>
							</div>
							<div class="detail-column">
								<p>
									<b>"Predicate: "</b>
									{d.predicate}
								</p>
								<p>
									<b>"Number of Children: "</b>
									{d.children}
								</p>
								<p>
									<b>"Generation: "</b>
									{d.generation}
								</p>
							</div>
							<button
								class="detail-close"
								on:click=move |_| selected.set(None)
							>
								"X"
							</button>
						</div>
					}
				})
		}}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lineage::tree_for_product_code;

	#[test]
	fn details_mirror_the_metadata_record() {
		let doc = tree_for_product_code("QAS").unwrap();
		let d = details_for(&doc, "K180647").unwrap();
		assert_eq!(d.trade_name, "BriefCase");
		assert_eq!(d.product_codes, "QAS");
		assert_eq!(d.decision_date, "2018-08-01");
		assert_eq!(d.predicate, "DEN170073");
		assert_eq!(d.children, 1);
		assert_eq!(d.generation, "2");
	}

	#[test]
	fn root_details_render_blank_metadata() {
		let doc = tree_for_product_code("QAS").unwrap();
		let d = details_for(&doc, "QAS").unwrap();
		assert!(d.trade_name.is_empty());
		assert!(d.predicate.is_empty());
		assert_eq!(d.generation, "0");
	}

	#[test]
	fn unknown_selection_yields_nothing() {
		let doc = tree_for_product_code("QAS").unwrap();
		assert!(details_for(&doc, "K999999").is_none());
	}
}
