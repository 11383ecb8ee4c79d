mod args;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};
use smali_xor::{CodecError, Config, SessionError};

use args::{ConfigArgs, DecodeArgs, EditArgs, EncodeArgs, ExportArgs, ExtractArgs, InspectArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "smali-xor")]
#[command(version)]
#[command(about = "Decode and edit XOR-masked strings in smali array-data", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the literals found in a file
    Extract(ExtractArgs),
    /// Decode a range of literals with an XOR key
    Decode(DecodeArgs),
    /// Mask a string into literal tokens
    Encode(EncodeArgs),
    /// Overwrite a range with a masked string and save (with backup)
    Edit(EditArgs),
    /// Show every literal with its value and candidate-key samples
    Inspect(InspectArgs),
    /// Write the literals to a plain file, one per line
    Export(ExportArgs),
    /// Show the effective configuration
    Config(ConfigArgs),
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.global);

    // Load configuration with user overrides
    let config = Config::load_with_overrides()?;

    match cli.command {
        Commands::Extract(args) => handlers::extract::handle(args, &cli.global, &config),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Commands::Edit(args) => handlers::edit::handle(args, &cli.global, &config),
        Commands::Inspect(args) => handlers::inspect::handle(args, &cli.global, &config),
        Commands::Export(args) => handlers::export::handle(args, &cli.global, &config),
        Commands::Config(args) => handlers::config::handle(args, &cli.global, &config),
    }
}

/// `RUST_LOG` wins; otherwise warnings, or errors only with --quiet.
fn init_logging(global: &GlobalArgs) {
    let default_level = if global.quiet { "error" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Prints an error and, for codec errors, a hint.
pub fn report(error: &(dyn std::error::Error + 'static)) {
    eprintln!("error: {}", error);

    let codec = error.downcast_ref::<CodecError>().or_else(|| {
        match error.downcast_ref::<SessionError>() {
            Some(SessionError::Codec(e)) => Some(e),
            _ => None,
        }
    });
    if let Some(hint) = codec.and_then(CodecError::hint) {
        eprintln!("hint: {}", hint);
    }
}
