//! Pipeline orchestrator: seeds in, capped candidate list out.
//!
//! Steps, in order:
//! 1. repeat each seed word (`w`, `ww`, ...) and dedupe
//! 2. case and leet variants of every name
//! 3. token sets
//! 4. affix patterns, expanded through the same variants
//! 5. union of token joins, permutations and affix patterns
//! 6. sort, then enforce the composition policy
//! 7. optionally append the reference list
//! 8. dedupe, keeping first occurrences
//! 9. optionally shuffle
//! 10. truncate to the cap
//!
//! The cap is applied last on purpose: the output is the same as if every
//! candidate had been generated first. Permutations are streamed into the
//! candidate set, but a large `combo` with many variants can still produce
//! a very large intermediate set, so keep `max` and `combo` sane.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::Candidates;
use crate::combine::{combine_all, combo_candidates, permutation_count};
use crate::common::COMMON_PASSWORDS;
use crate::expand::name_patterns;
use crate::normalize::{DEFAULT_LEET_VARIANTS, case_variants, leet_variants};
use crate::policy::Policy;
use crate::tokens::{TokenSet, symbol_pool};

/// Default output cap.
pub const DEFAULT_MAX: usize = 200_000;

/// Permutation count above which a warning is logged.
pub const PERMUTATION_WARN_THRESHOLD: u64 = 5_000_000;

/// Everything that shapes one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub words: Vec<String>,
    pub phone: String,
    pub phone_min: usize,
    pub phone_max: usize,
    pub numbers: Vec<i64>,
    /// Inclusive year range, swapped if reversed.
    pub years: Option<(i64, i64)>,
    pub years_list: Vec<i64>,
    pub seps: Vec<String>,
    /// Preferred symbol characters; empty selects the default pool.
    pub symbols: String,
    pub caps: bool,
    pub leet: bool,
    pub repeat: usize,
    pub combo: usize,
    pub max: usize,
    /// Drop enforced candidates longer than this many characters.
    pub max_length: Option<usize>,
    pub include_common: bool,
    pub append_common_verbatim: bool,
    pub shuffle: bool,
    pub enforce_upper: bool,
    pub enforce_symbol: bool,
    pub inner_symbols: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            phone: String::new(),
            phone_min: 2,
            phone_max: 6,
            numbers: Vec::new(),
            years: None,
            years_list: Vec::new(),
            seps: vec![String::new()],
            symbols: String::new(),
            caps: false,
            leet: false,
            repeat: 1,
            combo: 2,
            max: DEFAULT_MAX,
            max_length: None,
            include_common: false,
            append_common_verbatim: false,
            shuffle: true,
            enforce_upper: true,
            enforce_symbol: true,
            inner_symbols: true,
        }
    }
}

/// Seed words plus their self-repetitions up to `repeat` copies, deduped
/// in first-seen order. Empty words are skipped.
pub fn seed_names(words: &[String], repeat: usize) -> Vec<String> {
    let mut names = Candidates::new();
    for word in words.iter().filter(|w| !w.is_empty()) {
        names.insert(word.clone());
        for r in 2..=repeat {
            names.insert(word.repeat(r));
        }
    }
    names.into_iter().collect()
}

fn insert_variants(out: &mut Candidates, s: &str, caps: bool, leet: bool) {
    for form in case_variants(s, caps) {
        if leet {
            let leets = leet_variants(&form, DEFAULT_LEET_VARIANTS);
            out.insert(form);
            out.extend(leets);
        } else {
            out.insert(form);
        }
    }
}

/// Case forms of every name, each followed by its leet forms when enabled.
pub fn name_variants(names: &[String], caps: bool, leet: bool) -> Vec<String> {
    let mut out = Candidates::new();
    for name in names {
        insert_variants(&mut out, name, caps, leet);
    }
    out.into_iter().collect()
}

/// Every raw candidate before enforcement (steps 1 to 5).
pub fn raw_candidates(opts: &GenerateOptions) -> Candidates {
    let names = seed_names(&opts.words, opts.repeat);
    let variants = name_variants(&names, opts.caps, opts.leet);
    let tokens = TokenSet::from_options(opts);
    debug!(
        names = names.len(),
        variants = variants.len(),
        numbers = tokens.numbers.len(),
        years = tokens.years.len(),
        phone_prefixes = tokens.phone_prefixes.len(),
        symbols = tokens.symbols.len(),
        seps = tokens.seps.len(),
        "Prepared names and tokens"
    );

    let mut common_patterns = Candidates::new();
    for pattern in name_patterns(&names, &tokens.symbols, &tokens.years) {
        insert_variants(&mut common_patterns, &pattern, opts.caps, opts.leet);
    }

    let mut candidates = combine_all(&variants, &tokens, opts.inner_symbols);

    if opts.combo > 1 {
        let expected =
            permutation_count(variants.len(), opts.combo).saturating_mul(tokens.seps.len() as u64);
        if expected > PERMUTATION_WARN_THRESHOLD {
            warn!(
                "combo {} over {} variants yields about {} permutations; this can exhaust memory",
                opts.combo,
                variants.len(),
                expected
            );
        }
        candidates.extend(combo_candidates(&variants, opts.combo, &tokens.seps));
    }

    candidates.extend(common_patterns);
    debug!(candidates = candidates.len(), "Generated raw candidates");
    candidates
}

/// Sorted raw candidates run through the composition policy (step 6).
///
/// Deterministic for identical options. With `max_length` set, longer
/// results are dropped.
pub fn enforced_candidates(opts: &GenerateOptions) -> Vec<String> {
    let mut sorted: Vec<String> = raw_candidates(opts).into_iter().collect();
    sorted.sort_unstable();

    let policy = policy_for(opts);
    let enforced: Vec<String> = sorted
        .iter()
        .map(|c| policy.apply(c))
        .filter(|c| opts.max_length.is_none_or(|max| c.chars().count() <= max))
        .collect();
    debug!(enforced = enforced.len(), "Applied composition policy");
    enforced
}

fn policy_for(opts: &GenerateOptions) -> Policy {
    Policy {
        require_upper: opts.enforce_upper,
        require_symbol: opts.enforce_symbol,
        pool: symbol_pool(&opts.symbols),
    }
}

/// Run the whole pipeline. `rng` drives the final shuffle only.
pub fn generate<R: Rng + ?Sized>(opts: &GenerateOptions, rng: &mut R) -> Vec<String> {
    let mut combined = enforced_candidates(opts);

    if opts.include_common {
        if opts.append_common_verbatim {
            combined.extend(COMMON_PASSWORDS.iter().map(|p| p.to_string()));
        } else {
            let policy = policy_for(opts);
            combined.extend(COMMON_PASSWORDS.iter().map(|p| policy.apply(p)));
        }
    }

    let mut ordered: Vec<String> = combined
        .into_iter()
        .collect::<Candidates>()
        .into_iter()
        .collect();

    if opts.shuffle {
        ordered.shuffle(rng);
    }

    ordered.truncate(opts.max);
    debug!(count = ordered.len(), max = opts.max, "Final candidate list");
    ordered
}
