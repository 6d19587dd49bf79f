use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt input to output with AES-SIV
    Encrypt(EncryptArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct EncryptArgs {
    /// Input file path.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output file path.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Key file path (32, 48, or 64 raw bytes).
    #[arg(short = 'k', long = "key")]
    pub key: PathBuf,

    /// Generate a random key (written to path specified by key)
    #[arg(long = "gen-key")]
    pub gen_key: bool,

    /// Only valid with --gen-key.
    #[arg(
        long = "key-size",
        value_enum,
        default_value_t = KeySize::Bits512,
        requires = "gen_key"
    )]
    pub key_size: KeySize,

    /// Associated data component, provided as hex string. Repeat for multiple components;
    /// they are authenticated in the order given.
    #[arg(long = "ad", value_name = "HEX")]
    pub ad: Vec<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum KeySize {
    #[value(name = "256")]
    Bits256,
    #[value(name = "384")]
    Bits384,
    #[value(name = "512")]
    Bits512,
}
