#![no_main]
use libfuzzer_sys::fuzz_target;
use wordforge::expand::{insert_symbol_positions, insertion_points};

fuzz_target!(|data: (&str, char)| {
    let (name, sym) = data;
    let len = name.chars().count();

    // Invariant: insertion points stay strictly inside the name
    assert!(insertion_points(len).iter().all(|&i| i > 0 && i < len));

    // Invariant: every variant is the name plus exactly one symbol
    let out = insert_symbol_positions(name, &[sym], &[String::new()]);
    for variant in &out {
        assert_eq!(variant.chars().count(), len + 1, "{variant:?}");
    }
});
