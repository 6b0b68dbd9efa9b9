//! Free-text import parsers.

use crate::item::ItemEntry;

/// Splits a free-text list of names on commas, semicolons, tabs and line
/// breaks. Tokens are trimmed and empty ones dropped.
pub fn split_import(text: &str) -> Vec<String> {
    text.split(['\n', ',', ';', '\t'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses one `name <sep> url` pair per line.
///
/// The first `http://` or `https://` run in a line becomes the image. The rest
/// of the line, with `|`, `;`, `,` and tabs turned into spaces, is the name;
/// it falls back to the URL itself when nothing else is left. Lines without a
/// URL are plain names.
pub fn parse_pairs(text: &str) -> Vec<ItemEntry> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_pair_line)
        .collect()
}

fn parse_pair_line(line: &str) -> ItemEntry {
    let Some(url) = find_url(line) else {
        return ItemEntry::named(line);
    };

    let name = line
        .replacen(url, "", 1)
        .replace(['|', ';', ',', '\t'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        ItemEntry::with_image(url, url)
    } else {
        ItemEntry::with_image(name, url)
    }
}

/// First `https?://` followed by at least one non-whitespace character.
fn find_url(line: &str) -> Option<&str> {
    line.match_indices("http").find_map(|(start, _)| {
        let rest = &line[start + 4..];
        let after_scheme = rest
            .strip_prefix("s://")
            .or_else(|| rest.strip_prefix("://"))?;
        let run = after_scheme
            .find(char::is_whitespace)
            .unwrap_or(after_scheme.len());
        if run == 0 {
            return None;
        }
        let end = line.len() - after_scheme.len() + run;
        Some(&line[start..end])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_import_separators() {
        assert_eq!(
            split_import("A,B;C\tD\nE\r\nF"),
            vec!["A", "B", "C", "D", "E", "F"]
        );
    }

    #[test]
    fn test_split_import_drops_empty_tokens() {
        assert_eq!(split_import(" Drake ,, ;\n\n PNL "), vec!["Drake", "PNL"]);
        assert!(split_import("").is_empty());
    }

    #[test]
    fn test_parse_pairs_mixed_lines() {
        let pairs = parse_pairs("Alpha\thttp://x/a.jpg\nBeta | https://x/b.webp\nGamma");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], ItemEntry::with_image("Alpha", "http://x/a.jpg"));
        assert_eq!(pairs[1], ItemEntry::with_image("Beta", "https://x/b.webp"));
        assert_eq!(pairs[2], ItemEntry::named("Gamma"));
    }

    #[test]
    fn test_parse_pairs_separators_collapse() {
        let pairs = parse_pairs("  Nekfeu ;, https://x/n.jpg\r\n\r\nLa Fouine,https://x/f.png");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].name, "Nekfeu");
        assert_eq!(pairs[1].name, "La Fouine");
        assert_eq!(pairs[1].image.as_deref(), Some("https://x/f.png"));
    }

    #[test]
    fn test_parse_pairs_url_only_line() {
        let pairs = parse_pairs("https://x/only.jpg");
        assert_eq!(pairs[0].name, "https://x/only.jpg");
        assert_eq!(pairs[0].image.as_deref(), Some("https://x/only.jpg"));
    }

    #[test]
    fn test_parse_pairs_ignores_bare_scheme() {
        let pairs = parse_pairs("httpd server\nsee http:// later https://x/y.png");
        assert_eq!(pairs[0], ItemEntry::named("httpd server"));
        assert_eq!(pairs[1].image.as_deref(), Some("https://x/y.png"));
        assert_eq!(pairs[1].name, "see http:// later");
    }
}
