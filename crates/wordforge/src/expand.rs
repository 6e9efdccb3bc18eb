//! Pattern expander: affix patterns and in-name symbol insertion.

use crate::Candidates;
use crate::affix::{AFFIX_SYMBOLS, COMMON_PREFIXES, COMMON_SUFFIXES};
use crate::normalize::capitalize;

/// Common affix and year patterns for each name.
///
/// For every name, both its lowercase and capitalized forms receive each
/// common suffix and year, directly and behind one of the first
/// [`AFFIX_SYMBOLS`] pool symbols. Prefixes go in front of both forms; the
/// symbol-joined prefix form uses the lowercase name only.
pub fn name_patterns(names: &[String], symbols: &[char], years: &[String]) -> Candidates {
    let mut out = Candidates::new();
    let head = &symbols[..symbols.len().min(AFFIX_SYMBOLS)];

    for name in names {
        let low = name.to_lowercase();
        let cap = capitalize(name);

        for suffix in COMMON_SUFFIXES {
            out.insert(format!("{low}{suffix}"));
            out.insert(format!("{cap}{suffix}"));
            for sym in head {
                out.insert(format!("{low}{sym}{suffix}"));
                out.insert(format!("{cap}{sym}{suffix}"));
            }
        }

        for prefix in COMMON_PREFIXES {
            out.insert(format!("{prefix}{low}"));
            out.insert(format!("{prefix}{cap}"));
            for sym in head {
                out.insert(format!("{prefix}{sym}{low}"));
            }
        }

        for year in years {
            out.insert(format!("{low}{year}"));
            out.insert(format!("{cap}{year}"));
            for sym in head {
                out.insert(format!("{low}{sym}{year}"));
                out.insert(format!("{cap}{sym}{year}"));
            }
        }
    }

    out
}

/// Character offsets at which symbols are inserted into a name of
/// `len` characters: after the first and second character, the middle and
/// before the last, deduplicated and kept strictly inside the name.
pub fn insertion_points(len: usize) -> Vec<usize> {
    let mut points = vec![1, 2, (len / 2).max(1), len.saturating_sub(1).max(1)];
    points.sort_unstable();
    points.dedup();
    points.retain(|&i| i < len);
    points
}

/// Symbol placements around and inside `name`.
///
/// Every pool symbol is prepended and appended. At each insertion point
/// every symbol is inserted bare and wrapped in each separator.
pub fn insert_symbol_positions(name: &str, symbols: &[char], seps: &[String]) -> Candidates {
    let mut out = Candidates::new();

    for sym in symbols {
        out.insert(format!("{sym}{name}"));
        out.insert(format!("{name}{sym}"));
    }

    let chars: Vec<char> = name.chars().collect();
    for i in insertion_points(chars.len()) {
        let head: String = chars[..i].iter().collect();
        let tail: String = chars[i..].iter().collect();
        for sym in symbols {
            out.insert(format!("{head}{sym}{tail}"));
            for sep in seps {
                out.insert(format!("{head}{sep}{sym}{sep}{tail}"));
            }
        }
    }

    out
}
