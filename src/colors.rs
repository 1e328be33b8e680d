//! Note Colors
//!
//! Palette of background color tokens stored by the API. Tokens are the
//! utility classes other clients of the same API write (`bg-[#RRGGBB]`),
//! so they must round-trip unchanged.

/// Token assumed when a task arrives without a color
pub const DEFAULT_COLOR: &str = "bg-white";

/// Rendered for the default token and anything not in the palette
pub const DEFAULT_CSS: &str = "#ffffff";

/// (token, label, css color)
pub const PALETTE: &[(&str, &str, &str)] = &[
    ("bg-[#BAE2FF]", "Light blue", "#BAE2FF"),
    ("bg-[#B9FFDD]", "Mint", "#B9FFDD"),
    ("bg-[#FFE8AC]", "Sand", "#FFE8AC"),
    ("bg-[#FFCAB9]", "Peach", "#FFCAB9"),
    ("bg-[#F99494]", "Coral", "#F99494"),
    ("bg-[#9DD6FF]", "Sky", "#9DD6FF"),
    ("bg-[#ECA1FF]", "Lilac", "#ECA1FF"),
    ("bg-[#DAFF8B]", "Lime", "#DAFF8B"),
    ("bg-[#FFA285]", "Salmon", "#FFA285"),
    ("bg-[#CDCDCD]", "Silver", "#CDCDCD"),
    ("bg-[#979797]", "Gray", "#979797"),
    ("bg-[#A99A7C]", "Khaki", "#A99A7C"),
];

fn lookup(token: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    let token = token.trim();
    PALETTE.iter().find(|(t, _, _)| t.eq_ignore_ascii_case(token))
}

/// CSS color for a token. Only palette entries map to a color; anything
/// else renders as the default, so server strings never reach `style`.
pub fn css_color(token: &str) -> &'static str {
    lookup(token).map(|(_, _, css)| *css).unwrap_or(DEFAULT_CSS)
}

/// Whether two tokens name the same palette entry
pub fn same_color(a: &str, b: &str) -> bool {
    match (lookup(a), lookup(b)) {
        (Some(x), Some(y)) => x.0 == y.0,
        _ => a.trim().eq_ignore_ascii_case(b.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_tokens_resolve() {
        assert_eq!(css_color("bg-[#BAE2FF]"), "#BAE2FF");
        assert_eq!(css_color("bg-[#a99a7c]"), "#A99A7C");
        assert_eq!(css_color(DEFAULT_COLOR), DEFAULT_CSS);
    }

    #[test]
    fn test_unknown_tokens_fall_back() {
        assert_eq!(css_color("red; position: fixed; inset: 0"), DEFAULT_CSS);
        assert_eq!(css_color("bg-blue-500"), DEFAULT_CSS);
        assert_eq!(css_color(""), DEFAULT_CSS);
    }

    #[test]
    fn test_same_color_ignores_case() {
        assert!(same_color("bg-[#ECA1FF]", "bg-[#eca1ff]"));
        assert!(!same_color("bg-[#ECA1FF]", "bg-[#DAFF8B]"));
    }

    #[test]
    fn test_palette_tokens_unique() {
        let mut tokens: Vec<String> = PALETTE.iter().map(|(t, _, _)| t.to_ascii_lowercase()).collect();
        tokens.sort();
        tokens.dedup();
        assert_eq!(tokens.len(), 12);
        assert_eq!(tokens.len(), PALETTE.len());
    }
}
