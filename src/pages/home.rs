use leptos::prelude::*;

use crate::components::force_graph::{ForceGraphCanvas, GraphScene};
use crate::components::links::RecordLinks;
use crate::components::toggles::{ToggleStates, ViewOptions};
use crate::components::tooltip::NodeDetails;
use crate::lineage::{
	LineageDocument, Query, StyleConfig, branch_for_device, build_graph,
	product_code_for_device, tree_for_product_code,
};

/// Search box, display toggles, record details, and the predicate graph.
#[component]
pub fn Home() -> impl IntoView {
	let input = RwSignal::new(String::new());
	let document = RwSignal::new(None::<LineageDocument>);
	let selected = RwSignal::new(None::<String>);
	let highlighted = RwSignal::new(None::<String>);
	let options = RwSignal::new(ViewOptions::default());
	let status = RwSignal::new(None::<String>);

	let apply = move |doc: Option<LineageDocument>| match doc {
		Some(doc) => {
			status.set(None);
			document.set(Some(doc));
		}
		None => {
			let entry = input.get_untracked();
			status.set(Some(format!("No data for \"{}\"", entry.trim())));
			document.set(None);
		}
	};

	// Full predicate tree: by product code directly, or via the product
	// code resolved for a queried 510(k) number.
	let get_tree = move |_| {
		selected.set(None);
		highlighted.set(None);
		let doc = match Query::classify(&input.get_untracked()) {
			Query::DeviceNumber(knumber) => {
				highlighted.set(Some(knumber.clone()));
				product_code_for_device(&knumber).and_then(|pcode| tree_for_product_code(&pcode))
			}
			Query::ProductCode(pcode) => tree_for_product_code(&pcode),
		};
		apply(doc);
	};

	// Single branch rooted at a 510(k) number.
	let get_branch = move |_| {
		selected.set(None);
		let entry = input.get_untracked().trim().to_owned();
		highlighted.set(Some(entry.clone()));
		apply(branch_for_device(&entry));
	};

	let scene = Memo::new(move |_| {
		document.with(|doc| {
			let doc = doc.as_ref()?;
			let opts = options.get();
			let config = StyleConfig {
				size_mode: opts.size_mode,
				color_mode: opts.color_mode,
				highlighted: highlighted.get(),
			};
			match GraphScene::build(doc, &build_graph(doc), &config, opts.labels, opts.layered) {
				Ok(scene) => Some(scene),
				Err(err) => {
					log::error!("failed to style lineage graph: {err}");
					None
				}
			}
		})
	});
	let canvas_scene = Signal::derive(move || scene.get().unwrap_or_default());

	let on_select = Callback::new(move |id: String| {
		selected.set(Some(id.clone()));
		highlighted.set(Some(id));
	});

	view! {
		<div class="explorer">
			<div class="search-row">
				<input
					class="search-input"
					placeholder="Search by Product Code or 510K Number"
					prop:value=move || input.get()
					on:input=move |ev| input.set(event_target_value(&ev))
				/>
				<button on:click=get_tree>"Get Tree"</button>
				<button on:click=get_branch>"Get Branch"</button>
			</div>

			<ToggleStates options=options />

			{move || status.get().map(|msg| view! { <p class="status">{msg}</p> })}

			<NodeDetails document=document selected=selected />
			{move || {
				selected.get().map(|id| view! { <RecordLinks selected=id /> })
			}}

			<div class="graph-panel">
				<ForceGraphCanvas scene=canvas_scene on_select=on_select />
			</div>
		</div>
	}
}
