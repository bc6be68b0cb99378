use std::str::FromStr;

use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	header: StyleSpec,
	row_highlight: StyleSpec,
	prompt: StyleSpec,
	empty: StyleSpec,
	highlight: StyleSpec,
	muted: StyleSpec,
	focus: StyleSpec,
	link: StyleSpec,
	badge: StyleSpec,
	status_posted: StyleSpec,
	status_forecasted: StyleSpec,
	status_closed: StyleSpec,
	notice_info: StyleSpec,
	notice_success: StyleSpec,
	notice_error: StyleSpec,
}

impl ThemeStyles {
	fn into_theme(self, origin: &str) -> Result<Theme> {
		let style = |spec: StyleSpec, slot: &str| spec.resolve(&format!("{origin}.{slot}"));
		Ok(Theme {
			header: style(self.header, "header")?,
			row_highlight: style(self.row_highlight, "row_highlight")?,
			prompt: style(self.prompt, "prompt")?,
			empty: style(self.empty, "empty")?,
			highlight: style(self.highlight, "highlight")?,
			muted: style(self.muted, "muted")?,
			focus: style(self.focus, "focus")?,
			link: style(self.link, "link")?,
			badge: style(self.badge, "badge")?,
			status_posted: style(self.status_posted, "status_posted")?,
			status_forecasted: style(self.status_forecasted, "status_forecasted")?,
			status_closed: style(self.status_closed, "status_closed")?,
			notice_info: style(self.notice_info, "notice_info")?,
			notice_success: style(self.notice_success, "notice_success")?,
			notice_error: style(self.notice_error, "notice_error")?,
		})
	}
}

#[derive(Debug, Default, Deserialize)]
struct StyleSpec {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleSpec {
	fn resolve(&self, slot: &str) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg).with_context(|| format!("{slot}: bad fg `{fg}`"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg).with_context(|| format!("{slot}: bad bg `{bg}`"))?);
		}
		for modifier in &self.modifiers {
			let parsed =
				parse_modifier(modifier).with_context(|| format!("{slot}: bad modifier `{modifier}`"))?;
			style = style.add_modifier(parsed);
		}
		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<&File> = dir
		.files()
		.filter(|file| file.path().extension().is_some_and(|ext| ext == "toml"))
		.collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::with_capacity(files.len());
	let mut default_name: Option<String> = None;
	let mut default_theme = None;

	for file in files {
		let origin = file.path().display().to_string();
		let contents = file
			.contents_utf8()
			.with_context(|| format!("{origin} is not valid UTF-8"))?;
		let (registration, is_default) = parse_theme(contents, &origin)?;

		if is_default {
			if let Some(existing) = &default_name {
				bail!(
					"both `{existing}` and `{}` are marked as the default theme",
					registration.name
				);
			}
			default_name = Some(registration.name.clone());
			default_theme = Some(registration.theme);
		}
		registrations.push(registration);
	}

	let Some(first) = registrations.first() else {
		bail!("no bundled theme definitions were found");
	};
	let default_theme = default_theme.unwrap_or(first.theme);

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

fn parse_theme(contents: &str, origin: &str) -> Result<(ThemeRegistration, bool)> {
	let file: ThemeFile =
		toml::from_str(contents).with_context(|| format!("failed to parse theme {origin}"))?;
	let theme = file.styles.into_theme(&file.name)?;
	let registration = file
		.aliases
		.iter()
		.map(|alias| alias.trim())
		.filter(|alias| !alias.is_empty())
		.fold(ThemeRegistration::new(file.name.clone(), theme), |acc, alias| {
			acc.alias(alias)
		});
	Ok((registration, file.default))
}

/// Accepts ratatui colour names, `#rrggbb`, ANSI indices and `rgb(r, g, b)`.
fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();
	if let Some(body) = value.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
		let parts = body
			.split(',')
			.map(|part| part.trim().parse::<u8>())
			.collect::<Result<Vec<_>, _>>()
			.with_context(|| format!("invalid rgb() components in `{value}`"))?;
		let [r, g, b] = parts[..] else {
			bail!("rgb() takes three components, found {}", parts.len());
		};
		return Ok(Color::Rgb(r, g, b));
	}
	Color::from_str(value).map_err(|_| anyhow::anyhow!("unknown colour `{value}`"))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	let modifier = match input.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underline" | "underlined" => Modifier::UNDERLINED,
		"reversed" | "reverse" => Modifier::REVERSED,
		"crossed_out" | "strikethrough" => Modifier::CROSSED_OUT,
		other => bail!("unknown modifier `{other}`"),
	};
	Ok(modifier)
}
