use std::fmt;
use std::path::PathBuf;

use bip39::MnemonicType;
use zeroize::Zeroizing;

use crate::constants::*;
use crate::error::{Result, ToolkitError};

/// One freshly generated wallet. Dropped as soon as it has been written.
pub struct WalletRecord {
    pub mnemonic: Zeroizing<String>,
    pub address: String,
    pub private_key: Zeroizing<String>,
}

pub struct SecureMnemonic {
    phrase: Zeroizing<String>,
}

impl SecureMnemonic {
    pub fn from_phrase(phrase: String) -> Self {
        Self {
            phrase: Zeroizing::new(phrase),
        }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn phrase_zeroizing(&self) -> Zeroizing<String> {
        Zeroizing::new(self.phrase.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordCount {
    Twelve,
    TwentyFour,
}

impl WordCount {
    pub fn from_words(words: u32) -> Result<Self> {
        match words {
            12 => Ok(Self::Twelve),
            24 => Ok(Self::TwentyFour),
            _ => Err(ToolkitError::InvalidWordCount { words }),
        }
    }

    pub fn mnemonic_type(self) -> MnemonicType {
        match self {
            Self::Twelve => MnemonicType::Words12,
            Self::TwentyFour => MnemonicType::Words24,
        }
    }

    pub fn words(self) -> usize {
        match self {
            Self::Twelve => 12,
            Self::TwentyFour => 24,
        }
    }
}

/// Runtime configuration built from the command line.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_dir: PathBuf,
    pub word_count: WordCount,
}

impl Config {
    pub fn new(base_dir: impl Into<PathBuf>, word_count: WordCount) -> Self {
        Self { base_dir: base_dir.into(), word_count }
    }

    pub fn paths(&self) -> StorePaths {
        StorePaths::new(&self.base_dir)
    }
}

/// Locations of the record files inside the base directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorePaths {
    pub dir: PathBuf,
    pub seed: PathBuf,
    pub address: PathBuf,
    pub private_key: PathBuf,
    pub converted_key: PathBuf,
}

impl StorePaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            seed: dir.join(SEED_FILE),
            address: dir.join(ADDRESS_FILE),
            private_key: dir.join(PRIVATE_KEY_FILE),
            converted_key: dir.join(CONVERTED_KEY_FILE),
            dir,
        }
    }
}

/// Result of validating a single record line.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    Valid(T),
    Invalid { preview: String, reason: String },
}

#[derive(Debug)]
pub struct GenerateReport {
    pub count: u32,
    pub dir: PathBuf,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConvertReport {
    /// The seed file held no records, nothing was written.
    Empty,
    Converted { succeeded: usize, failed: usize, output: PathBuf },
}

/// Addresses recovered from one record file.
#[derive(Debug, Default)]
pub struct SourceListing {
    pub path: PathBuf,
    pub addresses: Vec<String>,
    pub skipped: usize,
}

#[derive(Debug, Default)]
pub struct AddressListing {
    pub seed: Option<SourceListing>,
    pub private_key: Option<SourceListing>,
}

impl AddressListing {
    pub fn is_empty(&self) -> bool {
        self.seed.is_none() && self.private_key.is_none()
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words())
    }
}
