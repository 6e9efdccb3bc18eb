//! wordforge - candidate password wordlists from seed words.
//!
//! Combines names with phone-number prefixes, numbers, years, symbols and
//! common leaked-password patterns, then dedupes, enforces composition
//! rules, shuffles and caps the list.
//!
//! ## Usage
//!
//! ```bash
//! # Names with case and leet variants, a year range and a phone number
//! wordforge -w aswin,india --caps --leet --years 2000 2004 --phone 78771252256
//!
//! # Seed words from a file, separators and a preferred symbol pool
//! wordforge -f names.txt --seps "" _ --symbols '@#' -o out.txt
//!
//! # Reproducible shuffle, only the common list
//! wordforge --include-common --seed 7
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use wordforge::config::WordforgeConfig;
use wordforge::error::EXIT_USAGE;
use wordforge::{GenerateOptions, WordforgeError, generate, output, seeds};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<WordforgeError>()
            .map_or(EXIT_USAGE, WordforgeError::exit_code);
        return ExitCode::from(code);
    }
    ExitCode::SUCCESS
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = WordforgeConfig::load(cli.config.as_deref())?;

    let mut opts = GenerateOptions::default();
    config.apply_to(&mut opts);
    cli.apply_to(&mut opts);
    let output_path = cli.output.clone().unwrap_or_else(|| config.output_path());

    if cli.print_config {
        print!("{}", WordforgeConfig::from_options(&opts, &output_path).to_toml());
        return Ok(());
    }

    opts.words = seeds::collect_seeds(cli.words.as_deref(), cli.file.as_deref())?;
    if opts.words.is_empty() && !opts.include_common {
        return Err(WordforgeError::NoInput.into());
    }
    debug!("Generating from {} seed words", opts.words.len());

    let list = match cli.seed {
        Some(seed) => generate(&opts, &mut StdRng::seed_from_u64(seed)),
        None => generate(&opts, &mut rand::rng()),
    };

    output::write_wordlist(&output_path, &list)?;

    println!(
        "Wrote {} passwords to {} (max cap {})",
        list.len(),
        output_path.display(),
        opts.max
    );
    println!(
        "Shuffled: {}, enforced uppercase: {}, enforced symbol: {}",
        opts.shuffle, opts.enforce_upper, opts.enforce_symbol
    );
    Ok(())
}

#[derive(Parser, Debug)]
#[command(
    name = "wordforge",
    author,
    version,
    about = "Name-based candidate password generator (permutations, policy enforcement, shuffle)",
    after_help = "Examples:\n  \
        wordforge -w aswin,india --caps --leet --years 2000 2004\n  \
        wordforge -f names.txt --phone '+1 (787) 712-5225' --phone-max 4\n  \
        wordforge -w bob --numbers 1 99 --seps '' _ --symbols '@#' --max 5000\n  \
        wordforge --include-common --append-common-verbatim\n\n\
        Be mindful of combinatorial explosion: --combo, --caps and --leet multiply quickly."
)]
struct Cli {
    /// Comma-separated seed words (e.g. aswin,india)
    #[arg(short, long)]
    words: Option<String>,

    /// File with one seed word per line, appended to --words
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output file [default: wordlist.txt]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Phone number to derive digit prefixes from (non-digits are ignored)
    #[arg(long, default_value = "")]
    phone: String,

    /// Shortest phone prefix [default: 2]
    #[arg(long)]
    phone_min: Option<usize>,

    /// Longest phone prefix [default: 6]
    #[arg(long)]
    phone_max: Option<usize>,

    /// Specific numbers to include (space separated)
    #[arg(long, num_args = 0.., allow_negative_numbers = true)]
    numbers: Vec<i64>,

    /// Inclusive year range, swapped if reversed and clamped to 300 years
    #[arg(long, num_args = 2, value_names = ["START", "END"], allow_negative_numbers = true)]
    years: Option<Vec<i64>>,

    /// Specific years, appended after the range
    #[arg(long, num_args = 0.., allow_negative_numbers = true)]
    years_list: Vec<i64>,

    /// Separators between tokens (quote empty: "") [default: ""]
    #[arg(long, num_args = 1..)]
    seps: Option<Vec<String>>,

    /// Preferred symbol characters (e.g. "@#"); empty uses the default pool
    #[arg(short, long)]
    symbols: Option<String>,

    /// Produce capitalization variants
    #[arg(long, overrides_with = "no_caps")]
    caps: bool,

    /// Skip capitalization variants, even if the config enables them
    #[arg(long, overrides_with = "caps")]
    no_caps: bool,

    /// Produce leetspeak variants
    #[arg(long, overrides_with = "no_leet")]
    leet: bool,

    /// Skip leetspeak variants, even if the config enables them
    #[arg(long, overrides_with = "leet")]
    no_leet: bool,

    /// Repeat each name up to N times (e.g. 2 -> name+name) [default: 1]
    #[arg(long)]
    repeat: Option<usize>,

    /// Max number of names to concatenate in permutations [default: 2]
    #[arg(long)]
    combo: Option<usize>,

    /// Maximum passwords to output (safety cap) [default: 200000]
    #[arg(long)]
    max: Option<usize>,

    /// Drop generated candidates longer than this many characters
    #[arg(long)]
    max_length: Option<usize>,

    /// Append the built-in common password list
    #[arg(long, overrides_with = "no_include_common")]
    include_common: bool,

    /// Leave out the common password list
    #[arg(long, overrides_with = "include_common")]
    no_include_common: bool,

    /// Append the common list verbatim, without policy enforcement
    #[arg(long, overrides_with = "no_append_common_verbatim")]
    append_common_verbatim: bool,

    /// Enforce the policy on common entries too
    #[arg(long, overrides_with = "append_common_verbatim")]
    no_append_common_verbatim: bool,

    /// Shuffle the final list (default)
    #[arg(long, overrides_with = "no_shuffle")]
    shuffle: bool,

    /// Do NOT shuffle the final list
    #[arg(long, overrides_with = "shuffle")]
    no_shuffle: bool,

    /// Do NOT enforce the uppercase requirement
    #[arg(long, overrides_with = "require_upper")]
    no_enforce_upper: bool,

    /// Do NOT enforce the symbol requirement
    #[arg(long, overrides_with = "require_symbol")]
    no_enforce_symbol: bool,

    /// Require at least one uppercase letter (default)
    #[arg(long, overrides_with = "no_enforce_upper")]
    require_upper: bool,

    /// Require at least one symbol from the pool (default)
    #[arg(long, overrides_with = "no_enforce_symbol")]
    require_symbol: bool,

    /// Insert symbols inside names (default)
    #[arg(long, overrides_with = "no_inner_symbols")]
    inner_symbols: bool,

    /// Skip inserting symbols inside names
    #[arg(long, overrides_with = "inner_symbols")]
    no_inner_symbols: bool,

    /// Seed for the final shuffle, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Config file with flag defaults (TOML)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Explicit flags win over config values.
    fn apply_to(&self, opts: &mut GenerateOptions) {
        opts.phone = self.phone.clone();
        if let Some(v) = self.phone_min {
            opts.phone_min = v;
        }
        if let Some(v) = self.phone_max {
            opts.phone_max = v;
        }
        opts.numbers = self.numbers.clone();
        if let Some([start, end]) = self.years.as_deref() {
            opts.years = Some((*start, *end));
        }
        opts.years_list = self.years_list.clone();
        if let Some(seps) = &self.seps {
            opts.seps = seps.clone();
        }
        if let Some(symbols) = &self.symbols {
            opts.symbols = symbols.clone();
        }
        if let Some(v) = self.repeat {
            opts.repeat = v;
        }
        if let Some(v) = self.combo {
            opts.combo = v;
        }
        if let Some(v) = self.max {
            opts.max = v;
        }
        if self.max_length.is_some() {
            opts.max_length = self.max_length;
        }

        set_switch(&mut opts.caps, self.caps, self.no_caps);
        set_switch(&mut opts.leet, self.leet, self.no_leet);
        set_switch(
            &mut opts.include_common,
            self.include_common,
            self.no_include_common,
        );
        set_switch(
            &mut opts.append_common_verbatim,
            self.append_common_verbatim,
            self.no_append_common_verbatim,
        );
        set_switch(&mut opts.shuffle, self.shuffle, self.no_shuffle);
        set_switch(&mut opts.enforce_upper, self.require_upper, self.no_enforce_upper);
        set_switch(
            &mut opts.enforce_symbol,
            self.require_symbol,
            self.no_enforce_symbol,
        );
        set_switch(
            &mut opts.inner_symbols,
            self.inner_symbols,
            self.no_inner_symbols,
        );
    }
}

/// Apply an `--x`/`--no-x` pair on top of the configured value. The two
/// flags override each other, so at most one of them is set.
fn set_switch(value: &mut bool, on: bool, off: bool) {
    if on {
        *value = true;
    } else if off {
        *value = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "wordforge", "-w", "aswin", "--years", "2021", "2019", "--numbers", "7", "007",
            "--seps", "", "_", "--caps", "--no-shuffle", "--no-enforce-symbol", "--max", "50",
        ]);
        let mut opts = GenerateOptions::default();
        cli.apply_to(&mut opts);

        assert_eq!(opts.years, Some((2021, 2019)));
        assert_eq!(opts.numbers, vec![7, 7]);
        assert_eq!(opts.seps, vec!["".to_string(), "_".to_string()]);
        assert!(opts.caps);
        assert!(!opts.leet);
        assert!(!opts.shuffle);
        assert!(opts.enforce_upper);
        assert!(!opts.enforce_symbol);
        assert_eq!(opts.max, 50);
    }

    #[test]
    fn test_last_policy_flag_wins() {
        let cli = Cli::parse_from(["wordforge", "--require-upper", "--no-enforce-upper"]);
        let mut opts = GenerateOptions::default();
        cli.apply_to(&mut opts);
        assert!(!opts.enforce_upper);

        let cli = Cli::parse_from(["wordforge", "--no-enforce-upper", "--require-upper"]);
        let mut opts = GenerateOptions::default();
        cli.apply_to(&mut opts);
        assert!(opts.enforce_upper);
    }

    #[test]
    fn test_negative_flags_reverse_configured_values() {
        let cli = Cli::parse_from([
            "wordforge", "--no-caps", "--no-leet", "--no-include-common",
            "--no-append-common-verbatim", "--shuffle", "--no-inner-symbols",
        ]);
        let mut opts = GenerateOptions {
            caps: true,
            leet: true,
            include_common: true,
            append_common_verbatim: true,
            shuffle: false,
            ..GenerateOptions::default()
        };
        cli.apply_to(&mut opts);

        assert!(!opts.caps);
        assert!(!opts.leet);
        assert!(!opts.include_common);
        assert!(!opts.append_common_verbatim);
        assert!(opts.shuffle);
        assert!(!opts.inner_symbols);
    }

    #[test]
    fn test_unset_switches_keep_configured_values() {
        let cli = Cli::parse_from(["wordforge"]);
        let mut opts = GenerateOptions {
            caps: true,
            shuffle: false,
            ..GenerateOptions::default()
        };
        cli.apply_to(&mut opts);
        assert!(opts.caps);
        assert!(!opts.shuffle);
    }
}
