//! Page content injected by the hosting page.

use serde::Deserialize;

/// One navigable page section.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteSection {
	/// Element id that nav links scroll to.
	pub id: String,
	/// Link and heading text.
	pub title: String,
	/// Body copy for the section.
	#[serde(default)]
	pub body: String,
}

/// Everything the page renders: owner name, hero tagline, and sections.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteData {
	pub name: String,
	#[serde(default)]
	pub tagline: String,
	#[serde(default)]
	pub sections: Vec<SiteSection>,
}

impl Default for SiteData {
	fn default() -> Self {
		let section = |id: &str, title: &str, body: &str| SiteSection {
			id: id.to_string(),
			title: title.to_string(),
			body: body.to_string(),
		};
		Self {
			name: "Nightfolio".to_string(),
			tagline: "Building things for the web".to_string(),
			sections: vec![
				section("home", "Home", ""),
				section("about", "About", "A few words about me."),
				section("projects", "Projects", "Selected work."),
				section("contact", "Contact", "Say hello."),
			],
		}
	}
}
