use base64::{engine::general_purpose::STANDARD, Engine as _};
use bip39::{Language, Mnemonic, Seed};
use ed25519_dalek::SigningKey;
use zeroize::Zeroizing;

use crate::constants::*;
use crate::derive::derive_ed25519_secret;
use crate::error::{Result, ToolkitError};
use crate::types::*;

pub fn generate_mnemonic(words: WordCount) -> SecureMnemonic {
    let mnemonic = Mnemonic::new(words.mnemonic_type(), Language::English);
    let phrase = mnemonic.phrase().to_string();
    drop(mnemonic);
    SecureMnemonic::from_phrase(phrase)
}

pub fn validate_mnemonic(phrase: &str) -> bool {
    Mnemonic::validate(phrase.trim(), Language::English).is_ok()
}

/// Ed25519 keypair addressed the way Sui addresses it.
///
/// The signing key is zeroized on drop by `ed25519-dalek`.
pub struct SuiKeypair {
    signing_key: SigningKey,
}

impl SuiKeypair {
    /// Derives the keypair at `m/44'/784'/0'/0'/0'` from a BIP-39 phrase
    /// (empty passphrase).
    pub fn from_mnemonic(phrase: &str) -> Result<Self> {
        let mnemonic = Mnemonic::from_phrase(phrase.trim(), Language::English).map_err(|e| ToolkitError::InvalidMnemonic { reason: e.to_string() })?;
        let seed = Seed::new(&mnemonic, "");
        let secret = derive_ed25519_secret(seed.as_bytes(), SUI_DERIVATION_PATH)?;
        Ok(Self::from_secret(&secret))
    }

    pub fn from_secret_key(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_LENGTH {
            return Err(ToolkitError::InvalidPrivateKey { reason: format!("expected {} bytes, got {}", PRIVATE_KEY_LENGTH, bytes.len()) });
        }
        let mut secret = Zeroizing::new([0u8; PRIVATE_KEY_LENGTH]);
        secret.copy_from_slice(bytes);
        Ok(Self::from_secret(&secret))
    }

    /// Rebuilds a keypair from its exported base64 form.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let bytes = Zeroizing::new(STANDARD.decode(encoded.trim()).map_err(|e| ToolkitError::InvalidPrivateKey { reason: e.to_string() })?);
        Self::from_secret_key(&bytes)
    }

    fn from_secret(secret: &[u8; PRIVATE_KEY_LENGTH]) -> Self {
        Self { signing_key: SigningKey::from_bytes(secret) }
    }

    pub fn public_key(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// `0x` followed by the hex of `Blake2b-256(flag || public_key)`.
    pub fn address(&self) -> String {
        let hash = blake2b_simd::Params::new()
            .hash_length(ADDRESS_LENGTH)
            .to_state()
            .update(&[ED25519_FLAG])
            .update(&self.public_key())
            .finalize();
        format!("0x{}", hex::encode(hash.as_bytes()))
    }

    /// Base64 of the raw 32-byte secret key.
    pub fn export_private_key(&self) -> Zeroizing<String> {
        Zeroizing::new(STANDARD.encode(self.signing_key.to_bytes()))
    }
}

pub fn create_wallet(words: WordCount) -> Result<WalletRecord> {
    let mnemonic = generate_mnemonic(words);
    let keypair = SuiKeypair::from_mnemonic(mnemonic.phrase())?;
    Ok(WalletRecord { address: keypair.address(), private_key: keypair.export_private_key(), mnemonic: mnemonic.phrase_zeroizing() })
}
