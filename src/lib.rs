//! # swt
//!
//! Sui wallet toolkit: bulk offline generation of Sui wallets and conversion
//! between the plain text files it produces.
//!
//! ## Usage
//!
//! The program is an interactive menu. Start it with Cargo or the compiled binary:
//!
//! ```bash
//! # Using cargo
//! cargo run --release
//!
//! # Store the files somewhere other than ./hasil and use 24-word phrases
//! cargo run --release -- --dir ./vault --words 24
//!
//! # Using the compiled binary
//! ./target/release/swt
//! ```
//!
//! **Flags:**
//! - `-d, --dir <path>` (Optional): Directory holding the wallet files (default = `hasil`)
//! - `-w, --words <count>` (Optional): Mnemonic word count for new wallets (12 or 24, default = `12`)
//!
//! Set `RUST_LOG` (for example `RUST_LOG=debug`) to change log verbosity. Logs go to stderr.
//!
//! ### 1. Create wallets
//!
//! Asks for a count, then writes one line per wallet to:
//!
//! ```text
//! hasil/seedpharse.txt   mnemonic phrases
//! hasil/address.txt      Sui addresses
//! hasil/suipriv.txt      base64 private keys
//! ```
//!
//! Every run replaces the previous contents of all three files. Wallets are
//! appended one at a time, so an interrupted run keeps the wallets finished so far.
//!
//! ### 2. Convert seed phrases to private keys
//!
//! Reads `seedpharse.txt` and writes the derived keys to `pk_from_seed.txt`.
//! Invalid lines are skipped and counted.
//!
//! ### 3. Show addresses
//!
//! Prints the address for every valid line of `seedpharse.txt` and `suipriv.txt`.
//! Nothing is written.
//!
//! ## Key derivation
//!
//! ```text
//! mnemonic -> BIP-39 seed (empty passphrase) -> SLIP-0010 m/44'/784'/0'/0'/0' -> Ed25519
//! address = 0x || hex(Blake2b-256(0x00 || public key))
//! ```
//!
//! **Warning:** the output files hold unencrypted secrets. Anyone who reads them controls the wallets.

pub mod commands;
pub mod constants;
pub mod convert;
pub mod crypto;
pub mod derive;
pub mod error;
pub mod ops;
pub mod types;
pub mod utils;
pub mod wallet;

pub use error::{Result, ToolkitError};
