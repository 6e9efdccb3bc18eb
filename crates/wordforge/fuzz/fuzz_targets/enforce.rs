#![no_main]
use libfuzzer_sys::fuzz_target;
use wordforge::policy::*;
use wordforge::tokens::DEFAULT_SYMBOLS;

fuzz_target!(|data: (&str, &str)| {
    let (candidate, pool) = data;
    let default_pool: Vec<char> = DEFAULT_SYMBOLS.chars().collect();
    let custom_pool: Vec<char> = pool.chars().collect();

    for pool in [default_pool, custom_pool, Vec::new()] {
        let once = enforce(candidate, true, true, &pool);

        // Invariant: output satisfies both requirements
        assert!(meets_upper(&once), "no uppercase after enforce: {once:?}");
        assert!(meets_symbol(&once, &pool), "no symbol after enforce: {once:?}");

        // Invariant: enforcement is idempotent
        assert_eq!(
            enforce(&once, true, true, &pool),
            once,
            "enforce not idempotent for {candidate:?}"
        );

        // Invariant: compliant input is untouched
        if meets_upper(candidate) && meets_symbol(candidate, &pool) {
            assert_eq!(once, candidate, "compliant input rewritten");
        }
    }
});
