use std::io;
use std::path::Path;

use tracing::{error, warn};

use crate::crypto::*;
use crate::error::Result;
use crate::types::*;
use crate::utils::*;

pub fn parse_seed_address(line: &str) -> ParseOutcome<String> {
    if !validate_mnemonic(line) {
        return ParseOutcome::Invalid { preview: preview(line), reason: "not a valid BIP-39 mnemonic".into() };
    }
    to_outcome(line, SuiKeypair::from_mnemonic(line))
}

pub fn parse_private_key_address(line: &str) -> ParseOutcome<String> {
    to_outcome(line, SuiKeypair::from_base64(line))
}

fn to_outcome(line: &str, keypair: Result<SuiKeypair>) -> ParseOutcome<String> {
    match keypair {
        Ok(keypair) => ParseOutcome::Valid(keypair.address()),
        Err(e) => ParseOutcome::Invalid { preview: preview(line), reason: e.to_string() },
    }
}

/// Reads one record file and resolves each record to an address.
///
/// Returns `None` when the file is absent, unreadable or holds no records.
/// Only a missing file passes silently.
fn list_source(path: &Path, kind: &str, parse: fn(&str) -> ParseOutcome<String>) -> Option<SourceListing> {
    let lines = match read_records(path) {
        Ok(lines) => lines,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to read record file");
            println!("\nFailed to read {}: {}", path.display(), e);
            return None;
        }
    };
    if lines.is_empty() {
        return None;
    }
    let mut listing = SourceListing { path: path.to_path_buf(), ..Default::default() };
    for line in &lines {
        match parse(line) {
            ParseOutcome::Valid(address) => listing.addresses.push(address),
            ParseOutcome::Invalid { preview, reason } => {
                warn!(path = %path.display(), line = %preview, %reason, "skipping invalid {} line", kind);
                listing.skipped += 1;
            }
        }
    }
    Some(listing)
}

/// Re-derives the addresses held by the seed phrase and private key files.
/// Nothing is written.
pub fn list_addresses(paths: &StorePaths) -> AddressListing {
    AddressListing {
        seed: list_source(&paths.seed, "seed phrase", parse_seed_address),
        private_key: list_source(&paths.private_key, "private key", parse_private_key_address),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use std::fs;
    use tempfile::TempDir;

    const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn nothing_found_without_files() {
        let dir = TempDir::new().expect("tempdir");
        let listing = list_addresses(&StorePaths::new(dir.path()));
        assert!(listing.is_empty());
    }

    #[test]
    fn banner_only_files_count_as_absent() {
        let dir = TempDir::new().expect("tempdir");
        let paths = StorePaths::new(dir.path());
        fs::write(&paths.seed, format!("{}\n\n", SEED_BANNER)).expect("write");
        fs::write(&paths.private_key, format!("{}\n\n", PRIVATE_KEY_BANNER)).expect("write");
        assert!(list_addresses(&paths).is_empty());
    }

    #[test]
    fn seed_and_key_of_same_wallet_agree() -> Result<()> {
        let dir = TempDir::new()?;
        let paths = StorePaths::new(dir.path());
        let key = SuiKeypair::from_mnemonic(MNEMONIC)?.export_private_key();
        fs::write(&paths.seed, format!("{}\n\n{}\nnope\n", SEED_BANNER, MNEMONIC))?;
        fs::write(&paths.private_key, format!("{}\n\n{}\n{}\n", PRIVATE_KEY_BANNER, *key, STANDARD.encode([1u8; 16])))?;
        let listing = list_addresses(&paths);
        let seed = listing.seed.as_ref().expect("seed listing");
        let keys = listing.private_key.as_ref().expect("key listing");
        assert_eq!(seed.addresses, keys.addresses);
        assert_eq!(seed.skipped, 1);
        assert_eq!(keys.skipped, 1);
        Ok(())
    }

    #[test]
    fn missing_seed_file_does_not_stop_key_file() -> Result<()> {
        let dir = TempDir::new()?;
        let paths = StorePaths::new(dir.path());
        let key = SuiKeypair::from_mnemonic(MNEMONIC)?.export_private_key();
        fs::write(&paths.private_key, format!("{}\n", *key))?;
        let listing = list_addresses(&paths);
        assert!(listing.seed.is_none());
        assert_eq!(listing.private_key.map(|l| l.addresses.len()), Some(1));
        Ok(())
    }

    #[test]
    fn unreadable_seed_file_does_not_stop_key_file() -> Result<()> {
        let dir = TempDir::new()?;
        let paths = StorePaths::new(dir.path());
        fs::create_dir(&paths.seed)?;
        let key = SuiKeypair::from_mnemonic(MNEMONIC)?;
        fs::write(&paths.private_key, format!("{}\n\n{}\n", PRIVATE_KEY_BANNER, *key.export_private_key()))?;
        let listing = list_addresses(&paths);
        assert!(listing.seed.is_none());
        assert_eq!(listing.private_key.map(|l| l.addresses), Some(vec![key.address()]));
        Ok(())
    }

    #[test]
    fn non_utf8_seed_line_is_skipped_not_fatal() -> Result<()> {
        let dir = TempDir::new()?;
        let paths = StorePaths::new(dir.path());
        let mut bytes = format!("{}\n\n{}\n", SEED_BANNER, MNEMONIC).into_bytes();
        bytes.extend_from_slice(b"\xff\xfe garbage\n");
        fs::write(&paths.seed, bytes)?;
        let seed = list_addresses(&paths).seed.expect("seed listing");
        assert_eq!(seed.addresses, vec![SuiKeypair::from_mnemonic(MNEMONIC)?.address()]);
        assert_eq!(seed.skipped, 1);
        Ok(())
    }

    #[test]
    fn wrong_length_key_is_skipped() {
        assert!(matches!(parse_private_key_address(&STANDARD.encode([9u8; 33])), ParseOutcome::Invalid { .. }));
        assert!(matches!(parse_private_key_address("%%%"), ParseOutcome::Invalid { .. }));
        assert!(matches!(parse_private_key_address(&STANDARD.encode([9u8; 32])), ParseOutcome::Valid(_)));
    }
}
