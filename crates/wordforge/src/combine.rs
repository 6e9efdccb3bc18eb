//! Combination assembler: names crossed with token sets, plus ordered
//! permutations of several names joined by separators.

use itertools::Itertools;

use crate::Candidates;
use crate::expand::insert_symbol_positions;
use crate::tokens::TokenSet;

/// Pool symbols mixed into number, phone and year joins.
pub const JOIN_SYMBOLS: usize = 4;

/// Pool symbols appended directly to a name.
pub const TRAILING_SYMBOLS: usize = 6;

/// Cross every name variant with numbers, phone prefixes, years and
/// symbols.
///
/// `inner_symbols` adds the output of [`insert_symbol_positions`] for each
/// variant.
pub fn combine_all(variants: &[String], tokens: &TokenSet, inner_symbols: bool) -> Candidates {
    let mut out = Candidates::new();
    let join_syms = &tokens.symbols[..tokens.symbols.len().min(JOIN_SYMBOLS)];
    let trailing_syms = &tokens.symbols[..tokens.symbols.len().min(TRAILING_SYMBOLS)];

    for name in variants {
        out.insert(name.clone());

        for n in &tokens.numbers {
            out.insert(format!("{name}{n}"));
            for sep in &tokens.seps {
                out.insert(format!("{name}{sep}{n}"));
                out.insert(format!("{n}{sep}{name}"));
                for sym in join_syms {
                    out.insert(format!("{name}{sep}{sym}{n}"));
                    out.insert(format!("{name}{sep}{n}{sym}"));
                }
            }
        }

        for p in &tokens.phone_prefixes {
            out.insert(format!("{name}{p}"));
            for sep in &tokens.seps {
                out.insert(format!("{name}{sep}{p}"));
                out.insert(format!("{p}{sep}{name}"));
                for sym in join_syms {
                    out.insert(format!("{name}{sep}{sym}{p}"));
                }
            }
        }

        for y in &tokens.years {
            out.insert(format!("{name}{y}"));
            for sep in &tokens.seps {
                out.insert(format!("{name}{sep}{y}"));
                out.insert(format!("{y}{sep}{name}"));
                for sym in join_syms {
                    out.insert(format!("{name}{sep}{y}{sym}"));
                }
            }
        }

        for sym in trailing_syms {
            out.insert(format!("{name}{sym}"));
            for sep in &tokens.seps {
                out.insert(format!("{name}{sep}{sym}"));
            }
        }

        if inner_symbols {
            out.extend(insert_symbol_positions(name, &tokens.symbols, &tokens.seps));
        }
    }

    out
}

/// Number of ordered tuples of arity `2..=max_arity` over `n` items,
/// saturating at `u64::MAX`.
pub fn permutation_count(n: usize, max_arity: usize) -> u64 {
    let mut total = 0u64;
    for r in 2..=max_arity.min(n) {
        let mut count = 1u64;
        for k in 0..r {
            count = count.saturating_mul((n - k) as u64);
        }
        total = total.saturating_add(count);
    }
    total
}

/// Separator-joined ordered permutations of the variants for every arity
/// from 2 up to `max_arity`, generated on demand.
///
/// Order matters and no variant repeats within one tuple, so `n` variants
/// yield `n! / (n - r)!` tuples per arity.
pub fn combo_candidates<'a>(
    variants: &'a [String],
    max_arity: usize,
    seps: &'a [String],
) -> impl Iterator<Item = String> + 'a {
    (2..=max_arity)
        .flat_map(move |r| variants.iter().permutations(r))
        .flat_map(move |tuple| seps.iter().map(move |sep| tuple.iter().join(sep)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn tokens() -> TokenSet {
        TokenSet {
            numbers: strings(&["1"]),
            years: strings(&["2020"]),
            phone_prefixes: strings(&["78"]),
            symbols: vec!['!', '@', '#', '$', '%', '^', '&'],
            seps: strings(&["", "_"]),
        }
    }

    #[test]
    fn test_combo_candidates_order_and_count() {
        let variants = strings(&["a", "b", "c"]);
        let seps = strings(&[""]);
        let pairs: Vec<String> = combo_candidates(&variants, 2, &seps).collect();
        assert_eq!(pairs, vec!["ab", "ac", "ba", "bc", "ca", "cb"]);
        assert_eq!(combo_candidates(&variants, 3, &seps).count(), 12);
    }

    #[test]
    fn test_combo_candidates_arity_beyond_variants() {
        let variants = strings(&["a", "b"]);
        let seps = strings(&[""]);
        assert_eq!(combo_candidates(&variants, 5, &seps).count(), 2);
        assert_eq!(combo_candidates(&[], 3, &seps).count(), 0);
    }

    #[test]
    fn test_permutation_count() {
        assert_eq!(permutation_count(3, 2), 6);
        assert_eq!(permutation_count(3, 3), 12);
        assert_eq!(permutation_count(4, 1), 0);
        assert_eq!(permutation_count(2, 5), 2);
        assert_eq!(permutation_count(1000, 20), u64::MAX);
    }

    #[test]
    fn test_combo_candidates_join_with_every_sep() {
        let variants = strings(&["ab", "cd"]);
        let seps = strings(&["", "-"]);
        let got: Vec<String> = combo_candidates(&variants, 2, &seps).collect();
        assert_eq!(got, vec!["abcd", "ab-cd", "cdab", "cd-ab"]);
        assert_eq!(combo_candidates(&variants, 1, &seps).count(), 0);
    }

    #[test]
    fn test_combine_all_token_joins() {
        let out = combine_all(&strings(&["Bob"]), &tokens(), false);
        for expected in [
            "Bob", "Bob1", "1_Bob", "Bob_!1", "Bob_1$", "Bob78", "78_Bob", "Bob#78", "Bob2020",
            "2020Bob", "Bob_2020@", "Bob^", "Bob_^",
        ] {
            assert!(out.contains(expected), "missing {expected}");
        }
        // only the first four symbols join tokens, the first six trail
        assert!(!out.contains("Bob%1"));
        assert!(!out.contains("Bob&"));
        assert!(!out.contains("B!ob"), "inner symbols disabled");
    }

    #[test]
    fn test_combine_all_inner_symbols() {
        let out = combine_all(&strings(&["Bob"]), &tokens(), true);
        assert!(out.contains("B!ob"));
        assert!(out.contains("&Bob"));
    }
}
