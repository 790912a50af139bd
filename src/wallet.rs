use tracing::info;

use crate::constants::*;
use crate::crypto::*;
use crate::error::{Result, ToolkitError};
use crate::types::*;
use crate::utils::*;

/// Parses the wallet count typed at the prompt. Must be a whole number above zero.
pub fn parse_wallet_count(input: &str) -> Result<u32> {
    match input.trim().parse::<u32>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ToolkitError::InvalidCount { input: input.trim().to_string() }),
    }
}

/// Creates `count` wallets, replacing whatever the record files held before.
///
/// Each wallet is appended to the seed, address and private key files as
/// soon as it exists, so an interrupted run keeps every wallet completed so
/// far. The three appends are not atomic as a group.
pub fn generate_wallets(config: &Config, count: u32) -> Result<GenerateReport> {
    if count == 0 {
        return Err(ToolkitError::InvalidCount { input: count.to_string() });
    }
    let paths = config.paths();
    info!(count, words = %config.word_count, "generating wallets");
    ensure_output_dir(&paths.dir)?;
    println!("Output will be stored in folder '{}'", paths.dir.display());
    init_record_file(&paths.seed, SEED_BANNER)?;
    init_record_file(&paths.address, ADDRESS_BANNER)?;
    init_record_file(&paths.private_key, PRIVATE_KEY_BANNER)?;
    for i in 1..=count {
        let wallet = create_wallet(config.word_count)?;
        append_record(&paths.seed, &wallet.mnemonic)?;
        append_record(&paths.address, &wallet.address)?;
        append_record(&paths.private_key, &wallet.private_key)?;
        info!(wallet = i, address = %wallet.address, "wallet created and saved");
    }
    Ok(GenerateReport { count, dir: paths.dir })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_positive_counts() -> Result<()> {
        assert_eq!(parse_wallet_count("3")?, 3);
        assert_eq!(parse_wallet_count("  10\n")?, 10);
        Ok(())
    }

    #[test]
    fn rejects_zero_negative_and_garbage() {
        for input in ["0", "-2", "", "   ", "abc", "1.5", "3 wallets"] {
            assert!(matches!(parse_wallet_count(input), Err(ToolkitError::InvalidCount { .. })), "accepted {input:?}");
        }
    }

    #[test]
    fn zero_count_touches_nothing() {
        let dir = TempDir::new().expect("tempdir");
        let config = Config::new(dir.path().join("hasil"), WordCount::Twelve);
        assert!(matches!(generate_wallets(&config, 0), Err(ToolkitError::InvalidCount { .. })));
        assert!(!config.base_dir.exists());
    }

    #[test]
    fn writes_banner_then_one_line_per_wallet() -> Result<()> {
        let dir = TempDir::new()?;
        let config = Config::new(dir.path().join("hasil"), WordCount::TwentyFour);
        let report = generate_wallets(&config, 2)?;
        assert_eq!(report.count, 2);
        let paths = config.paths();
        let seeds = std::fs::read_to_string(&paths.seed)?;
        assert!(seeds.starts_with(&format!("{}\n\n", SEED_BANNER)));
        let phrases = read_records(&paths.seed)?;
        assert_eq!(phrases.len(), 2);
        assert!(phrases.iter().all(|p| p.split_whitespace().count() == 24));
        Ok(())
    }
}
