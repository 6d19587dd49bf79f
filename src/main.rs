mod args;

use args::{Cli, Commands};
use clap::Parser;

use std::fs;
use std::time::Instant;

use aes_siv::{SivKey, SivKeySize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid --ad hex: {0:?}")]
    AdInvalidHex(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Siv(#[from] aes_siv::Error),
}

fn main() {
    if let Err(e) = siv_cli() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn siv_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(enc) => {
            // read plaintext from input path
            let plaintext = fs::read(&enc.input)?;

            // read or generate key
            let key = if enc.gen_key {
                let size = match enc.key_size {
                    args::KeySize::Bits256 => SivKeySize::Bits256,
                    args::KeySize::Bits384 => SivKeySize::Bits384,
                    args::KeySize::Bits512 => SivKeySize::Bits512,
                };
                let rand_key = SivKey::random(size)?;
                fs::write(&enc.key, rand_key.as_bytes())?;
                rand_key.as_bytes().to_vec()
            } else {
                fs::read(&enc.key)?
            };

            // parse associated data, keeping command line order
            let associated = enc
                .ad
                .iter()
                .map(|s| parse_hex(s))
                .collect::<Result<Vec<Vec<u8>>, CliError>>()?;
            let associated: Vec<&[u8]> = associated.iter().map(Vec::as_slice).collect();

            let start = Instant::now();
            let ciphertext = aes_siv::encrypt(None, &key, &plaintext, &associated)?;
            let duration = start.elapsed();

            fs::write(&enc.output, &ciphertext)?;
            println!(
                "Encrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
    }
}

/// Whitespace is ignored; an odd number of digits is read as if it had a leading zero.
fn parse_hex(s: &str) -> Result<Vec<u8>, CliError> {
    let mut hex: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    // slicing below assumes one byte per char
    if !hex.is_ascii() {
        return Err(CliError::AdInvalidHex(s.to_string()));
    }

    if hex.len() % 2 == 1 {
        hex.insert(0, '0');
    }

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| CliError::AdInvalidHex(s.to_string()))
}
