//! Affix library: static suffix and prefix tables applied to names.

/// Suffixes people commonly bolt onto a name.
pub const COMMON_SUFFIXES: &[&str] = &[
    "123", "1234", "12345", "111", "1111", "0000", "007", "1", "12", "123456", "2020", "2021",
    "2022", "2023", "2024", "@123", "#1", "!", "!1",
];

/// Prefixes people commonly put in front of a name.
pub const COMMON_PREFIXES: &[&str] = &["123", "007", "111", "1", "!", "@"];

/// How many pool symbols are combined with affixes and years.
pub const AFFIX_SYMBOLS: usize = 5;
