#![no_main]
use libfuzzer_sys::fuzz_target;
use wordforge::normalize::{DEFAULT_LEET_VARIANTS, case_variants, leet_variants};

fuzz_target!(|data: (&str, u8)| {
    let (word, cap) = data;
    let cap = usize::from(cap % 32);

    // Invariant: never more variants than the cap
    assert!(leet_variants(word, cap).len() <= cap);
    assert!(leet_variants(word, DEFAULT_LEET_VARIANTS).len() <= DEFAULT_LEET_VARIANTS);

    // Invariant: case forms are bounded and keep the original first
    let forms = case_variants(word, true);
    assert!(!forms.is_empty() && forms.len() <= 4);
    assert_eq!(forms.first().map(String::as_str), Some(word));
});
