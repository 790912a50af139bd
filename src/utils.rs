use std::{fs::{self, OpenOptions}, io::{self, Write}, path::Path};

use tracing::debug;

use crate::constants::*;
use crate::types::*;

/// Whether a raw line carries a record rather than banner or padding.
pub fn is_record(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with(BANNER_PREFIX)
}

/// Reads every record line of `path`, trimmed, in file order.
///
/// Bytes that are not valid UTF-8 become U+FFFD, so a damaged line fails
/// record validation on its own instead of failing the whole file.
pub fn read_records(path: &Path) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let contents = String::from_utf8_lossy(&bytes);
    Ok(contents.lines().filter(|line| is_record(line)).map(|line| line.trim().to_string()).collect())
}

/// First characters of a rejected line, safe to print in a warning.
pub fn preview(line: &str) -> String {
    let head: String = line.trim().chars().take(PREVIEW_LENGTH).collect();
    format!("{}...", head)
}

pub fn ensure_output_dir(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        set_secure_permissions(dir)?;
        debug!(dir = %dir.display(), "created output directory");
    }
    Ok(())
}

/// Truncates `path` and writes the banner header.
pub fn init_record_file(path: &Path, banner: &str) -> io::Result<()> {
    fs::write(path, format!("{}\n\n", banner))?;
    set_secure_file_permissions(path)
}

pub fn append_record(path: &Path, record: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{}", record)
}

/// Replaces `path` with a banner followed by `records` joined by newlines.
pub fn write_record_file(path: &Path, banner: &str, records: &[impl AsRef<str>]) -> io::Result<()> {
    let body = records.iter().map(|record| record.as_ref()).collect::<Vec<&str>>().join("\n");
    fs::write(path, format!("{}\n\n{}", banner, body))?;
    set_secure_file_permissions(path)
}

pub fn set_secure_permissions(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    #[cfg(not(unix))]
    {
        tracing::warn!(path = %path.display(), "directory permissions not set on this platform, ensure it is protected");
    }
    Ok(())
}

pub fn set_secure_file_permissions(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    #[cfg(not(unix))]
    {
        tracing::warn!(path = %path.display(), "file permissions not set on this platform, ensure it is protected");
    }
    Ok(())
}

pub fn display_generate_report(report: &GenerateReport) {
    println!("\nDone! {} wallet(s) created.", report.count);
    println!("Data stored in folder: {}", report.dir.display());
    display_security_warning(&report.dir.display().to_string());
}

pub fn display_convert_report(report: &ConvertReport) {
    match report {
        ConvertReport::Empty => println!("Input file is empty or holds no records."),
        ConvertReport::Converted { succeeded, failed, output } => {
            println!("\nDone!");
            println!("  - Converted       : {}", succeeded);
            println!("  - Failed/Skipped  : {}", failed);
            println!("  - Private keys saved to: {}", output.display());
            display_security_warning(&output.display().to_string());
        }
    }
}

pub fn display_listing(listing: &AddressListing, paths: &StorePaths) {
    for source in listing.seed.iter().chain(listing.private_key.iter()) {
        println!("\nAddresses from {}:\n", source.path.display());
        for address in &source.addresses {
            println!("  {}", address);
        }
        if source.skipped > 0 {
            println!("  ({} invalid line(s) skipped)", source.skipped);
        }
    }
    if listing.is_empty() {
        println!("\nNo records found in '{}' or '{}'.", paths.seed.display(), paths.private_key.display());
        println!("  Run option 1 first to create them.");
    }
}

fn display_security_warning(location: &str) {
    println!("\nSECURITY WARNING: keep '{}' private. Anyone holding these files controls the wallets.", location);
}
