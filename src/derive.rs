//! SLIP-0010 Ed25519 key derivation.
//!
//! Ed25519 only supports hardened children, so every path component must
//! carry a `'` (or `h`) suffix. The master key is
//! `HMAC-SHA512(key = "ed25519 seed", data = seed)` and each child is
//! `HMAC-SHA512(key = chain_code, data = 0x00 || key || ser32(index | 2^31))`.

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Result, ToolkitError};

type HmacSha512 = Hmac<Sha512>;

const HARDENED_OFFSET: u32 = 0x8000_0000;
const MASTER_HMAC_KEY: &[u8] = b"ed25519 seed";

/// 32-byte key half and 32-byte chain code of one derivation node.
struct ExtendedKey {
    key: Zeroizing<[u8; 32]>,
    chain_code: Zeroizing<[u8; 32]>,
}

impl ExtendedKey {
    fn from_hmac(mut output: [u8; 64]) -> Self {
        let mut key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        key.copy_from_slice(&output[..32]);
        chain_code.copy_from_slice(&output[32..]);
        output.zeroize();
        Self { key, chain_code }
    }

    fn master(seed: &[u8]) -> Result<Self> {
        Ok(Self::from_hmac(hmac_sha512(MASTER_HMAC_KEY, seed)?))
    }

    fn child(&self, index: u32) -> Result<Self> {
        let mut data = Zeroizing::new([0u8; 37]);
        data[1..33].copy_from_slice(&*self.key);
        data[33..].copy_from_slice(&(index | HARDENED_OFFSET).to_be_bytes());
        Ok(Self::from_hmac(hmac_sha512(&*self.chain_code, &*data)?))
    }
}

/// Derives the 32-byte Ed25519 secret at `path` from a BIP-39 seed.
pub fn derive_ed25519_secret(seed: &[u8], path: &str) -> Result<Zeroizing<[u8; 32]>> {
    let indices = parse_derivation_path(path)?;
    let mut node = ExtendedKey::master(seed)?;
    for index in indices {
        node = node.child(index)?;
    }
    Ok(node.key)
}

/// Parses `m/44'/784'/0'/0'/0'` style paths into raw (un-offset) indices.
pub fn parse_derivation_path(path: &str) -> Result<Vec<u32>> {
    let components = path
        .trim()
        .strip_prefix("m/")
        .ok_or_else(|| ToolkitError::Derivation { reason: format!("path must start with 'm/', got '{}'", path.trim()) })?;
    if components.is_empty() {
        return Err(ToolkitError::Derivation { reason: "path has no components".into() });
    }
    components
        .split('/')
        .map(|part| {
            let number = part
                .strip_suffix('\'')
                .or_else(|| part.strip_suffix('h'))
                .ok_or_else(|| ToolkitError::Derivation { reason: format!("Ed25519 derivation is hardened only, got '{part}'") })?;
            let index: u32 = number
                .parse()
                .map_err(|e| ToolkitError::Derivation { reason: format!("invalid index '{number}': {e}") })?;
            if index >= HARDENED_OFFSET {
                return Err(ToolkitError::Derivation { reason: format!("index {index} out of range") });
            }
            Ok(index)
        })
        .collect()
}

fn hmac_sha512(key: &[u8], data: &[u8]) -> Result<[u8; 64]> {
    let mut mac = HmacSha512::new_from_slice(key).map_err(|e| ToolkitError::Derivation { reason: format!("HMAC-SHA512 init failed: {e}") })?;
    mac.update(data);
    let mut output = [0u8; 64];
    output.copy_from_slice(&mac.finalize().into_bytes());
    Ok(output)
}
