use leptos::prelude::*;

/// 404 page for unknown routes.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"404: Not Found"</h1>
			<p>"The page you were looking for does not exist."</p>
			<a href="/">"Back to the explorer"</a>
		</div>
	}
}
