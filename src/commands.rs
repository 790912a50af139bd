use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::{debug, error};

use crate::convert::convert_seed_file;
use crate::error::{Result, ToolkitError};
use crate::ops::list_addresses;
use crate::types::*;
use crate::utils::*;
use crate::wallet::{generate_wallets, parse_wallet_count};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Generate a batch of new wallets
    Generate,
    /// Convert the seed phrase file into a private key file
    ConvertSeeds,
    /// Show the addresses held by the default files
    ListAddresses,
    /// Leave the toolkit
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ToolkitError;

    fn from_str(input: &str) -> Result<Self> {
        match input.trim() {
            "1" => Ok(Self::Generate),
            "2" => Ok(Self::ConvertSeeds),
            "3" => Ok(Self::ListAddresses),
            "4" => Ok(Self::Exit),
            other => Err(ToolkitError::InvalidChoice { input: other.to_string() }),
        }
    }
}

pub fn show_menu() {
    println!("======================================");
    println!("        SUI Wallet Toolkit            ");
    println!("======================================");
    println!("Choose an option:");
    println!("1. Create new SUI wallets (bulk)");
    println!("2. Convert 'seedpharse.txt' -> 'pk_from_seed.txt'");
    println!("3. Show addresses from the default files");
    println!("4. Exit");
    println!("--------------------------------------");
}

/// Prints `message` and reads one line. `None` once input is exhausted.
fn prompt<R: BufRead>(input: &mut R, message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Runs one menu action. Errors abort the action only.
pub fn execute_choice<R: BufRead>(choice: MenuChoice, config: &Config, input: &mut R) -> io::Result<()> {
    let outcome = match choice {
        MenuChoice::Generate => match prompt(input, "Enter the number of wallets to create: ")? {
            Some(answer) => parse_wallet_count(&answer).and_then(|count| {
                println!("\nCreating {} wallet(s)...", count);
                generate_wallets(config, count)
            }).map(|report| display_generate_report(&report)),
            None => return Ok(()),
        },
        MenuChoice::ConvertSeeds => {
            let paths = config.paths();
            println!("\nReading from: {}", paths.seed.display());
            println!("Saving to   : {}\n", paths.converted_key.display());
            convert_seed_file(&paths).map(|report| display_convert_report(&report))
        }
        MenuChoice::ListAddresses => {
            let paths = config.paths();
            display_listing(&list_addresses(&paths), &paths);
            Ok(())
        }
        MenuChoice::Exit => Ok(()),
    };
    if let Err(e) = outcome {
        report_error(&e);
    }
    println!();
    Ok(())
}

fn report_error(e: &ToolkitError) {
    match e {
        ToolkitError::Io(io) => error!(error = %io, "operation failed"),
        other => debug!(error = %other, "operation aborted"),
    }
    println!("\nError: {}", e);
}

/// Shows the menu until the user picks exit or input ends.
pub fn run_menu<R: BufRead>(config: &Config, input: &mut R) -> io::Result<()> {
    loop {
        show_menu();
        let Some(answer) = prompt(input, "Enter your choice (1-4): ")? else {
            break;
        };
        match answer.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => break,
            Ok(choice) => execute_choice(choice, config, input)?,
            Err(e) => println!("\n{}\n", e),
        }
    }
    println!("\nThanks for using the toolkit. Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn parses_menu_choices() {
        assert_eq!("1".parse::<MenuChoice>().ok(), Some(MenuChoice::Generate));
        assert_eq!(" 2\n".parse::<MenuChoice>().ok(), Some(MenuChoice::ConvertSeeds));
        assert_eq!("3".parse::<MenuChoice>().ok(), Some(MenuChoice::ListAddresses));
        assert_eq!("4".parse::<MenuChoice>().ok(), Some(MenuChoice::Exit));
        assert!(matches!("5".parse::<MenuChoice>(), Err(ToolkitError::InvalidChoice { .. })));
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn menu_runs_actions_until_exit() -> io::Result<()> {
        let dir = TempDir::new()?;
        let config = Config::new(dir.path().join("hasil"), WordCount::Twelve);
        let mut input = Cursor::new("9\n1\n2\n2\n3\n4\n1\n5\n");
        run_menu(&config, &mut input)?;
        let paths = config.paths();
        assert_eq!(read_records(&paths.seed)?.len(), 2);
        assert_eq!(read_records(&paths.converted_key)?.len(), 2);
        // Exit stops the loop before the trailing commands are read.
        assert!(input.position() < input.get_ref().len() as u64);
        Ok(())
    }

    #[test]
    fn bad_count_leaves_filesystem_untouched() -> io::Result<()> {
        let dir = TempDir::new()?;
        let config = Config::new(dir.path().join("hasil"), WordCount::Twelve);
        run_menu(&config, &mut Cursor::new("1\nabc\n1\n0\n1\n-3\n4\n"))?;
        assert!(!config.base_dir.exists());
        Ok(())
    }

    #[test]
    fn end_of_input_terminates() -> io::Result<()> {
        let dir = TempDir::new()?;
        let config = Config::new(dir.path(), WordCount::Twelve);
        run_menu(&config, &mut Cursor::new(""))?;
        run_menu(&config, &mut Cursor::new("1\n"))?;
        Ok(())
    }
}
