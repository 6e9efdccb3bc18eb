//! Token sets combined with names: numbers, years, phone prefixes,
//! symbols and separators.

use crate::pipeline::GenerateOptions;

/// Symbol pool used when no preferred symbols are configured.
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()-_+=[]{};:,.<>?/\\|~`";

/// Largest distance between the first and last year of a range.
pub const MAX_YEAR_SPAN: i64 = 300;

/// Every token family the expanders and the assembler draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSet {
    pub numbers: Vec<String>,
    pub years: Vec<String>,
    pub phone_prefixes: Vec<String>,
    /// Active symbol pool, never empty.
    pub symbols: Vec<char>,
    /// Separators, never empty.
    pub seps: Vec<String>,
}

impl TokenSet {
    pub fn from_options(opts: &GenerateOptions) -> Self {
        let mut years = match opts.years {
            Some((start, end)) => year_range(start, end),
            None => Vec::new(),
        };
        years.extend(number_tokens(&opts.years_list));

        let seps = if opts.seps.is_empty() {
            vec![String::new()]
        } else {
            opts.seps.clone()
        };

        Self {
            numbers: number_tokens(&opts.numbers),
            years,
            phone_prefixes: extract_phone_prefixes(&opts.phone, opts.phone_min, opts.phone_max),
            symbols: symbol_pool(&opts.symbols),
            seps,
        }
    }
}

/// Characters of `preferred`, or the default pool when it is empty.
pub fn symbol_pool(preferred: &str) -> Vec<char> {
    if preferred.is_empty() {
        DEFAULT_SYMBOLS.chars().collect()
    } else {
        preferred.chars().collect()
    }
}

/// Canonical decimal rendering of each number.
pub fn number_tokens(numbers: &[i64]) -> Vec<String> {
    numbers.iter().map(i64::to_string).collect()
}

/// Inclusive year range, swapped if reversed and clamped to
/// [`MAX_YEAR_SPAN`] past the start.
pub fn year_range(start: i64, end: i64) -> Vec<String> {
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    let end = end.min(start.saturating_add(MAX_YEAR_SPAN));
    (start..=end).map(|y| y.to_string()).collect()
}

/// Increasing-length digit prefixes of a phone number.
///
/// Non-digits are stripped first; lengths run from `min_len` (at least 1)
/// up to `max_len` or the digit count, whichever is smaller.
pub fn extract_phone_prefixes(phone: &str, min_len: usize, max_len: usize) -> Vec<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let max_take = max_len.min(digits.len());
    (min_len.max(1)..=max_take)
        .map(|n| digits[..n].to_string())
        .collect()
}
