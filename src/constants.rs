pub const OUTPUT_DIR: &str = "hasil";
pub const SEED_FILE: &str = "seedpharse.txt";
pub const ADDRESS_FILE: &str = "address.txt";
pub const PRIVATE_KEY_FILE: &str = "suipriv.txt";
pub const CONVERTED_KEY_FILE: &str = "pk_from_seed.txt";

pub const SEED_BANNER: &str = "===== SUI Seed Phrases =====";
pub const ADDRESS_BANNER: &str = "===== SUI Addresses =====";
pub const PRIVATE_KEY_BANNER: &str = "===== SUI Private Keys (Base64) =====";
pub const CONVERTED_KEY_BANNER: &str = "===== SUI Private Keys (Base64) - Hasil Konversi =====";
pub const BANNER_PREFIX: &str = "==";

pub const SUI_DERIVATION_PATH: &str = "m/44'/784'/0'/0'/0'";
pub const ED25519_FLAG: u8 = 0x00;
pub const PRIVATE_KEY_LENGTH: usize = 32;
pub const ADDRESS_LENGTH: usize = 32;

pub const PREVIEW_LENGTH: usize = 25;
pub const DEFAULT_WORD_COUNT: u32 = 12;
