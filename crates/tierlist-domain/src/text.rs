//! Identifier and text helpers shared by id allocation, search and rendering.

use unicode_normalization::UnicodeNormalization;

/// Foreground used on light backgrounds.
pub const DARK_FOREGROUND: &str = "#111827";
/// Foreground used on dark backgrounds, and the fallback for unreadable colors.
pub const LIGHT_FOREGROUND: &str = "#FFFFFF";

/// Luma threshold (scaled by 1000) at and above which a background counts as light.
const LIGHT_LUMA_THRESHOLD: u32 = 140_000;

/// Builds an ASCII slug: lowercase, diacritics stripped, runs of anything
/// outside `[a-z0-9]` collapsed to one hyphen, no leading/trailing hyphens.
///
/// The result may be empty (e.g. for `"!!!"` or a purely non-latin name);
/// callers fall back to a random id in that case.
pub fn slug(name: &str) -> String {
    strip_diacritics(name.to_lowercase().trim())
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Lowercases and strips diacritics so that `"é"` matches `"e"` in searches.
pub fn normalize_text(s: &str) -> String {
    strip_diacritics(&s.to_lowercase())
}

/// Picks a readable foreground for a `#rgb` / `#rrggbb` background.
///
/// Never fails: anything that is not a 3- or 6-digit hex color yields
/// [`LIGHT_FOREGROUND`].
pub fn contrast_text_color(hex: &str) -> &'static str {
    match parse_hex_rgb(hex) {
        Some((r, g, b)) if r * 299 + g * 587 + b * 114 >= LIGHT_LUMA_THRESHOLD => DARK_FOREGROUND,
        _ => LIGHT_FOREGROUND,
    }
}

fn strip_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

fn parse_hex_rgb(hex: &str) -> Option<(u32, u32, u32)> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };

    let channel = |start: usize| u32::from_str_radix(&expanded[start..start + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
