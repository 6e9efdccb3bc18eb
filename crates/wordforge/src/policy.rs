//! Policy enforcer: minimal rewrites so a candidate satisfies composition
//! rules.
//!
//! All functions are pure and total. [`enforce`] is idempotent: a
//! compliant string comes back unchanged.

/// Character prepended when a candidate has nothing to uppercase.
pub const FALLBACK_UPPER: char = 'A';

/// Symbol appended when the pool is empty.
pub const FALLBACK_SYMBOL: char = '!';

/// Composition requirements applied to generated candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub require_upper: bool,
    pub require_symbol: bool,
    pub pool: Vec<char>,
}

impl Policy {
    pub fn apply(&self, s: &str) -> String {
        enforce(s, self.require_upper, self.require_symbol, &self.pool)
    }

    /// Whether `s` already satisfies every enabled requirement.
    pub fn is_satisfied(&self, s: &str) -> bool {
        (!self.require_upper || meets_upper(s))
            && (!self.require_symbol || meets_symbol(s, &self.pool))
    }
}

/// True if any character is uppercase.
pub fn meets_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase)
}

/// True if any character is in `pool`, or with an empty pool, if any
/// character is not alphanumeric.
pub fn meets_symbol(s: &str, pool: &[char]) -> bool {
    if pool.is_empty() {
        s.chars().any(|c| !c.is_alphanumeric())
    } else {
        s.chars().any(|c| pool.contains(&c))
    }
}

/// Rewrite `s` minimally to satisfy the enabled requirements.
///
/// Upper first: the first letter that has an uppercase form is uppercased,
/// or [`FALLBACK_UPPER`] is prepended when there is none. Then symbol: the
/// pool's first symbol (or [`FALLBACK_SYMBOL`]) is appended.
pub fn enforce(s: &str, require_upper: bool, require_symbol: bool, pool: &[char]) -> String {
    let mut out = s.to_string();

    if require_upper && !meets_upper(&out) {
        out = uppercase_first_alpha(&out);
    }

    if require_symbol && !meets_symbol(&out, pool) {
        out.push(pool.first().copied().unwrap_or(FALLBACK_SYMBOL));
    }

    out
}

fn uppercase_first_alpha(s: &str) -> String {
    // Caseless letters (e.g. CJK) are skipped: they have no uppercase form.
    let cased = s.char_indices().find_map(|(i, c)| {
        let upper: String = c.to_uppercase().collect();
        upper
            .chars()
            .any(char::is_uppercase)
            .then_some((i, c, upper))
    });
    match cased {
        Some((i, c, upper)) => format!("{}{}{}", &s[..i], upper, &s[i + c.len_utf8()..]),
        None => format!("{FALLBACK_UPPER}{s}"),
    }
}
