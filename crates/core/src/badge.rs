//! Shields-style SVG badge rendering.
//!
//! A badge is a pure value: every acceptable input (the three named levels
//! plus in-progress percentages 0-99) renders to a fixed SVG string, so the
//! full set can be pre-rendered and cached indefinitely.

use std::fmt;

use crate::criteria::Level;

// ---------------------------------------------------------------------------
// Specs
// ---------------------------------------------------------------------------

/// Fill attributes for badge text and its shadow.
struct TextColors {
    color: &'static str,
    shadow: &'static str,
}

/// Dark text with a light shadow, for light badge backgrounds.
const WHITE_TEXT: TextColors = TextColors {
    color: "fill=\"#000\" ",
    shadow: "fill=\"#fefefe\" fill-opacity=\".7\"",
};

/// Default light text with a dark shadow.
const BLACK_TEXT: TextColors = TextColors {
    color: "",
    shadow: "fill=\"#010101\" fill-opacity=\".3\"",
};

/// Geometry and color for one badge variant.
struct BadgeSpec {
    width: u32,
    /// Fixed right-panel color; `None` means percentage-interpolated.
    color: Option<&'static str>,
    text: &'static str,
    text_pos: f32,
    text_colors: TextColors,
}

const IN_PROGRESS_SPEC: BadgeSpec = BadgeSpec {
    width: 204,
    color: None,
    text: "in progress",
    text_pos: 152.5,
    text_colors: BLACK_TEXT,
};

const PASSING_SPEC: BadgeSpec = BadgeSpec {
    width: 154,
    color: Some("#4c1"),
    text: "passing",
    text_pos: 127.5,
    text_colors: BLACK_TEXT,
};

const SILVER_SPEC: BadgeSpec = BadgeSpec {
    width: 142,
    color: Some("#C0C0C0"),
    text: "silver",
    text_pos: 121.5,
    text_colors: WHITE_TEXT,
};

const GOLD_SPEC: BadgeSpec = BadgeSpec {
    width: 136,
    color: Some("#ffd700"),
    text: "gold",
    text_pos: 118.5,
    text_colors: WHITE_TEXT,
};

/// Width of the left label box shared by all variants.
const LABEL_WIDTH: u32 = 103;

/// Left label text and its horizontal center.
const LABEL_TEXT: &str = "best practices";
const LABEL_POS: f32 = 51.5;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One renderable badge: a named level or an in-progress percentage 0-99.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeInput {
    InProgress(u8),
    Passing,
    Silver,
    Gold,
}

impl BadgeInput {
    /// Parse a badge input from a route segment: a percentage in 0..=99 or
    /// a level name. Digits always mean a percentage, so the numeric level
    /// synonyms accepted by [`Level::parse`] do not apply here.
    pub fn parse(value: &str) -> Option<Self> {
        if value.chars().all(|c| c.is_ascii_digit()) && !value.is_empty() {
            return match value.parse::<u8>() {
                Ok(pct) if pct < 100 => Some(Self::InProgress(pct)),
                _ => None,
            };
        }
        Level::parse(value).map(Self::from_level)
    }

    pub fn from_level(level: Level) -> Self {
        match level {
            Level::Passing => Self::Passing,
            Level::Silver => Self::Silver,
            Level::Gold => Self::Gold,
        }
    }

    /// The badge for a project's display level and passing percentage.
    pub fn for_project(badge_level: &str, passing_percentage: u8) -> Self {
        match Level::parse(badge_level) {
            Some(level) => Self::from_level(level),
            // Pre-passing: show progress, clamped into the renderable range.
            None => Self::InProgress(passing_percentage.min(99)),
        }
    }

    fn spec(self) -> &'static BadgeSpec {
        match self {
            Self::InProgress(_) => &IN_PROGRESS_SPEC,
            Self::Passing => &PASSING_SPEC,
            Self::Silver => &SILVER_SPEC,
            Self::Gold => &GOLD_SPEC,
        }
    }
}

impl fmt::Display for BadgeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress(pct) => write!(f, "{pct}"),
            other => f.write_str(other.spec().text),
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Right-panel color for an in-progress percentage: hue rises with the
/// percentage from red-orange toward green.
fn progress_hex(percentage: u8) -> String {
    hsl_to_hex(f64::from(percentage) * 0.45 + 15.0, 85.0, 43.0)
}

/// Convert HSL (degrees, percent, percent) to a `#rrggbb` hex string.
fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let s = s / 100.0;
    let l = l / 100.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_byte = |v: f64| ((v + m) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", to_byte(r1), to_byte(g1), to_byte(b1))
}

/// Render the badge SVG for an input.
pub fn render(input: BadgeInput) -> String {
    let spec = input.spec();
    let (color, text) = match input {
        BadgeInput::InProgress(pct) => {
            (progress_hex(pct), format!("{} {pct}%", spec.text))
        }
        _ => (
            spec.color.unwrap_or_default().to_string(),
            spec.text.to_string(),
        ),
    };

    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"20\">",
            "<linearGradient id=\"b\" x2=\"0\" y2=\"100%\">",
            "<stop offset=\"0\" stop-color=\"#bbb\" stop-opacity=\".1\"/>",
            "<stop offset=\"1\" stop-opacity=\".1\"/></linearGradient>",
            "<mask id=\"a\"><rect width=\"{width}\" height=\"20\" rx=\"3\" fill=\"#fff\"/></mask>",
            "<g mask=\"url(#a)\">",
            "<path fill=\"#555\" d=\"M0 0h{label_width}v20H0z\"/>",
            "<path fill=\"{color}\" d=\"M{label_width} 0h{panel_width}v20H{label_width}z\"/>",
            "<path fill=\"url(#b)\" d=\"M0 0h{width}v20H0z\"/></g>",
            "<g fill=\"#fff\" text-anchor=\"middle\" ",
            "font-family=\"DejaVu Sans,Verdana,Geneva,sans-serif\" font-size=\"11\">",
            "<text x=\"{label_pos}\" y=\"15\" fill=\"#010101\" fill-opacity=\".3\">{label}</text>",
            "<text x=\"{label_pos}\" y=\"14\">{label}</text>",
            "<text x=\"{text_pos}\" y=\"15\" {shadow}>{text}</text>",
            "<text {text_color}x=\"{text_pos}\" y=\"14\">{text}</text></g></svg>"
        ),
        width = spec.width,
        label_width = LABEL_WIDTH,
        panel_width = spec.width - LABEL_WIDTH,
        color = color,
        label_pos = LABEL_POS,
        label = LABEL_TEXT,
        text_pos = spec.text_pos,
        shadow = spec.text_colors.shadow,
        text_color = spec.text_colors.color,
        text = text,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
