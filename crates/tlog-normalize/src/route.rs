//! Route-name canonicalization for limit lookups.

/// Dash-like glyphs that operators paste in place of a plain hyphen.
const DASH_GLYPHS: &[char] = &[
    '\u{2010}', // hyphen
    '\u{2011}', // non-breaking hyphen
    '\u{2012}', // figure dash
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2015}', // horizontal bar
    '\u{2212}', // minus sign
    '\u{FE58}', // small em dash
    '\u{FE63}', // small hyphen-minus
    '\u{FF0D}', // fullwidth hyphen-minus
];

/// Canonical key for a route name.
///
/// Lower-cases, maps dash glyphs to `-`, collapses whitespace runs and drops
/// whitespace around dashes: `"T1 – Playita"` and `"t1-playita"` share a key.
pub fn normalize_route_key(route: &str) -> String {
    let unified: String = route
        .to_lowercase()
        .chars()
        .map(|ch| if DASH_GLYPHS.contains(&ch) { '-' } else { ch })
        .collect();
    let collapsed = unified.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace(" -", "-").replace("- ", "-")
}
