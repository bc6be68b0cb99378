mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations()
}

/// Look up a bundled theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim();
	builtins::registrations()
		.into_iter()
		.find(|registration| registration.matches(wanted))
		.map(|registration| registration.theme)
}

/// Names of the bundled themes, in load order.
#[must_use]
pub fn names() -> Vec<String> {
	builtins::registrations()
		.into_iter()
		.map(|registration| registration.name)
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
