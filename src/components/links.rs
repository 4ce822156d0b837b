use leptos::prelude::*;

/// External record systems reachable from a clearance identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExternalSystem {
	Image2000,
	Cts,
	Sharepoint,
}

impl ExternalSystem {
	pub const ALL: [ExternalSystem; 3] = [Self::Image2000, Self::Cts, Self::Sharepoint];

	pub fn label(self) -> &'static str {
		match self {
			Self::Image2000 => "Image 2000",
			Self::Cts => "CTS",
			Self::Sharepoint => "Sharepoint",
		}
	}

	/// Lookup URL for a record in this system.
	pub fn record_url(self, id: &str) -> String {
		match self {
			Self::Image2000 => {
				// Folder ids drop anything after a slash
				let folder = id.split('/').next().unwrap_or(id);
				format!("http://i2kplus.fda.gov/i2kplus?folderId={folder}")
			}
			Self::Cts => {
				format!("http://cts.fda.gov/division-tracking/findTrackable.do?docNum={id}")
			}
			Self::Sharepoint => {
				let prefix = id.get(..3).unwrap_or(id);
				format!(
					"https://fda.sharepoint.com/sites/CDRH-OSEL-DIDSR/Shared%20Documents/Regulatory/Consults/{prefix}/{id}/"
				)
			}
		}
	}
}

/// Row of external-system links for the selected record.
#[component]
pub fn RecordLinks(selected: String) -> impl IntoView {
	view! {
		<div class="link-row">
			{ExternalSystem::ALL
				.into_iter()
				.map(|system| {
					let href = system.record_url(&selected);
					view! {
						<a class="link-button" href=href target="_blank" rel="noreferrer">
							{format!("To {}", system.label())}
						</a>
					}
				})
				.collect_view()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn image2000_uses_the_folder_portion() {
		assert_eq!(
			ExternalSystem::Image2000.record_url("K190072"),
			"http://i2kplus.fda.gov/i2kplus?folderId=K190072"
		);
		assert_eq!(
			ExternalSystem::Image2000.record_url("K190072/S001"),
			"http://i2kplus.fda.gov/i2kplus?folderId=K190072"
		);
	}

	#[test]
	fn cts_tracks_the_full_document_number() {
		assert_eq!(
			ExternalSystem::Cts.record_url("K190072"),
			"http://cts.fda.gov/division-tracking/findTrackable.do?docNum=K190072"
		);
	}

	#[test]
	fn sharepoint_shards_by_identifier_prefix() {
		assert_eq!(
			ExternalSystem::Sharepoint.record_url("K190072"),
			"https://fda.sharepoint.com/sites/CDRH-OSEL-DIDSR/Shared%20Documents/Regulatory/Consults/K19/K190072/"
		);
		// Short ids fall back to the whole identifier
		assert_eq!(
			ExternalSystem::Sharepoint.record_url("K1"),
			"https://fda.sharepoint.com/sites/CDRH-OSEL-DIDSR/Shared%20Documents/Regulatory/Consults/K1/K1/"
		);
	}
}
