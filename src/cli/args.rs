use clap::{Args, ValueEnum};
use smali_xor::NumeralBase;
use std::path::PathBuf;

/// Numeral base for an index or key (CLI enum)
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum BaseCli {
    /// Hexadecimal, `0x` prefix optional
    #[default]
    Hex,
    /// Decimal
    Dec,
}

impl From<BaseCli> for NumeralBase {
    fn from(cli: BaseCli) -> Self {
        match cli {
            BaseCli::Hex => NumeralBase::Hex,
            BaseCli::Dec => NumeralBase::Decimal,
        }
    }
}

/// Key argument shared by every command that masks or unmasks
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// XOR key (e.g. 0x174a)
    #[arg(short = 'k', long)]
    pub key: String,

    /// Base of --key
    #[arg(long, value_enum, default_value_t = BaseCli::Hex)]
    pub key_base: BaseCli,
}

/// Arguments for listing the literals of a file
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Smali (or exported listing) file
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for decoding a range
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Smali (or exported listing) file
    pub file: PathBuf,

    /// First index of the range
    #[arg(short = 's', long)]
    pub start: String,

    /// Base of --start
    #[arg(long, value_enum, default_value_t = BaseCli::Hex)]
    pub start_base: BaseCli,

    /// One past the last index of the range (clamped to the array length)
    #[arg(short = 'e', long)]
    pub end: String,

    /// Base of --end
    #[arg(long, value_enum, default_value_t = BaseCli::Hex)]
    pub end_base: BaseCli,

    #[command(flatten)]
    pub key: KeyArgs,

    /// Also print the range bounds and masked values
    #[arg(long)]
    pub verbose_range: bool,
}

/// Arguments for masking a string without touching any file
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// String to mask
    pub text: String,

    #[command(flatten)]
    pub key: KeyArgs,

    /// Print space-separated hex values instead of literal tokens
    #[arg(long)]
    pub preview: bool,
}

/// Arguments for replacing a range and saving the file
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Smali file to modify
    pub file: PathBuf,

    /// First index to overwrite
    #[arg(short = 's', long)]
    pub start: String,

    /// Base of --start
    #[arg(long, value_enum, default_value_t = BaseCli::Hex)]
    pub start_base: BaseCli,

    /// End of the range currently holding the string; shows its content before editing
    #[arg(short = 'e', long)]
    pub end: Option<String>,

    /// Base of --end
    #[arg(long, value_enum, default_value_t = BaseCli::Hex)]
    pub end_base: BaseCli,

    #[command(flatten)]
    pub key: KeyArgs,

    /// Replacement string
    #[arg(short = 't', long)]
    pub text: String,

    /// Show the result without writing the file or its backup
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the per-token table
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Smali (or exported listing) file
    pub file: PathBuf,

    /// Comma-separated candidate keys (default: from config)
    #[arg(long, value_delimiter = ',')]
    pub keys: Option<Vec<String>>,

    /// Base of --keys
    #[arg(long, value_enum, default_value_t = BaseCli::Hex)]
    pub key_base: BaseCli,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for exporting the token listing
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Smali file to read
    pub file: PathBuf,

    /// Output file, one token per line
    #[arg(short = 'o', long)]
    pub output: PathBuf,
}

/// Arguments for showing the effective configuration
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output as JSON instead of TOML
    #[arg(long)]
    pub json: bool,
}
