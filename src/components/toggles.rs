use leptos::prelude::*;

use crate::lineage::{ColorMode, SizeMode};

/// Display options for the current visualization, passed whole to the
/// scene builder on every change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewOptions {
	pub labels: bool,
	pub layered: bool,
	pub size_mode: SizeMode,
	pub color_mode: ColorMode,
}

impl Default for ViewOptions {
	fn default() -> Self {
		Self {
			labels: true,
			layered: false,
			size_mode: SizeMode::Generation,
			color_mode: ColorMode::Alternating,
		}
	}
}

/// Checkbox row mirroring [`ViewOptions`].
#[component]
pub fn ToggleStates(options: RwSignal<ViewOptions>) -> impl IntoView {
	view! {
		<div class="toggle-row">
			<label>
				<input
					type="checkbox"
					prop:checked=move || options.get().labels
					on:change=move |_| options.update(|o| o.labels = !o.labels)
				/>
				"View Labels"
			</label>
			<label>
				<input
					type="checkbox"
					prop:checked=move || options.get().layered
					on:change=move |_| options.update(|o| o.layered = !o.layered)
				/>
				"Format as Tree"
			</label>
			<label>
				<input
					type="checkbox"
					prop:checked=move || options.get().size_mode == SizeMode::Generation
					on:change=move |_| {
						options
							.update(|o| {
								o.size_mode = match o.size_mode {
									SizeMode::Generation => SizeMode::ChildCount,
									SizeMode::ChildCount => SizeMode::Generation,
								};
							})
					}
				/>
				{move || {
					if options.get().size_mode == SizeMode::Generation {
						"Size by Generation"
					} else {
						"Size by Children"
					}
				}}
			</label>
			<label>
				<input
					type="checkbox"
					prop:checked=move || options.get().color_mode == ColorMode::Tiered
					on:change=move |_| {
						options
							.update(|o| {
								o.color_mode = match o.color_mode {
									ColorMode::Tiered => ColorMode::Alternating,
									ColorMode::Alternating => ColorMode::Tiered,
								};
							})
					}
				/>
				{move || {
					if options.get().color_mode == ColorMode::Tiered {
						"Color by Generation"
					} else {
						"Alternate Colors"
					}
				}}
			</label>
		</div>
	}
}
