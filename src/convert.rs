use std::io;

use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::constants::*;
use crate::crypto::*;
use crate::error::{Result, ToolkitError};
use crate::types::*;
use crate::utils::*;

/// Validates one seed phrase line and derives its exported private key.
pub fn parse_seed_line(line: &str) -> ParseOutcome<Zeroizing<String>> {
    let phrase = line.trim();
    if !validate_mnemonic(phrase) {
        return ParseOutcome::Invalid { preview: preview(phrase), reason: "not a valid BIP-39 mnemonic".into() };
    }
    match SuiKeypair::from_mnemonic(phrase) {
        Ok(keypair) => ParseOutcome::Valid(keypair.export_private_key()),
        Err(e) => ParseOutcome::Invalid { preview: preview(phrase), reason: e.to_string() },
    }
}

/// Re-derives a private key for every seed phrase in the seed file and
/// writes the successes to the converted key file.
pub fn convert_seed_file(paths: &StorePaths) -> Result<ConvertReport> {
    info!(input = %paths.seed.display(), output = %paths.converted_key.display(), "converting seed phrases");
    let lines = read_records(&paths.seed).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ToolkitError::InputNotFound { path: paths.seed.clone() },
        _ => ToolkitError::Io(e),
    })?;
    if lines.is_empty() {
        info!("seed file holds no records, nothing to convert");
        return Ok(ConvertReport::Empty);
    }
    info!(count = lines.len(), "processing seed phrases");
    let mut keys = Vec::with_capacity(lines.len());
    let mut failed = 0;
    for line in &lines {
        match parse_seed_line(line) {
            ParseOutcome::Valid(key) => keys.push(key),
            ParseOutcome::Invalid { preview, reason } => {
                warn!(line = %preview, %reason, "skipping invalid line");
                failed += 1;
            }
        }
    }
    let records: Vec<&str> = keys.iter().map(|key| key.as_str()).collect();
    write_record_file(&paths.converted_key, CONVERTED_KEY_BANNER, &records)?;
    Ok(ConvertReport::Converted { succeeded: keys.len(), failed, output: paths.converted_key.clone() })
}
