//! Token normalizer: case variants and leetspeak variants of a single string.

use crate::Candidates;

/// Default cap on the number of leetspeak variants produced per string.
pub const DEFAULT_LEET_VARIANTS: usize = 8;

/// Substitute glyphs for a lowercase character, most common first.
///
/// Returns an empty slice for characters without a substitution.
pub fn leet_glyphs(c: char) -> &'static [char] {
    match c {
        'a' => &['4', '@'],
        'b' => &['8', '6'],
        'e' => &['3'],
        'i' => &['1', '!'],
        'l' => &['1', '|'],
        'o' => &['0'],
        's' => &['5', '$'],
        't' => &['7'],
        _ => &[],
    }
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Case forms of `s`: the original, lowercase, uppercase and capitalized.
///
/// With `enabled == false` only the original is returned. Forms that
/// coincide collapse, so the result holds between one and four entries.
pub fn case_variants(s: &str, enabled: bool) -> Candidates {
    let mut out = Candidates::new();
    out.insert(s.to_string());
    if !enabled {
        return out;
    }
    out.insert(s.to_lowercase());
    out.insert(s.to_uppercase());
    out.insert(capitalize(s));
    out
}

/// Leetspeak forms of `s`, never more than `max_variants` of them.
///
/// Generation order is fixed: the lowercase form, the original form, every
/// single-position substitution (position-major, glyph-minor), the fully
/// mapped form, then the alternating form. Once `max_variants` distinct
/// entries exist generation stops, so a hit cap keeps the earliest ones.
pub fn leet_variants(s: &str, max_variants: usize) -> Candidates {
    let mut out = Candidates::new();
    if max_variants == 0 {
        return out;
    }

    let low: Vec<char> = s.to_lowercase().chars().collect();
    let push = |out: &mut Candidates, value: String| {
        out.insert(value);
        out.len() >= max_variants
    };

    if push(&mut out, low.iter().collect()) || push(&mut out, s.to_string()) {
        return out;
    }

    for (i, &ch) in low.iter().enumerate() {
        for &glyph in leet_glyphs(ch) {
            let mut arr = low.clone();
            arr[i] = glyph;
            if push(&mut out, arr.into_iter().collect()) {
                return out;
            }
        }
    }

    let mapped: String = low
        .iter()
        .map(|&c| leet_glyphs(c).first().copied().unwrap_or(c))
        .collect();
    if push(&mut out, mapped) {
        return out;
    }

    // Every other eligible position, starting with the first one.
    let mut eligible = 0usize;
    let alternating: String = low
        .iter()
        .map(|&c| match leet_glyphs(c).first() {
            Some(&glyph) => {
                eligible += 1;
                if eligible % 2 == 1 { glyph } else { c }
            }
            None => c,
        })
        .collect();
    push(&mut out, alternating);

    out
}
