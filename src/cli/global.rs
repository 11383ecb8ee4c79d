use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args)]
pub struct GlobalArgs {
    /// Suppress informational notices
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Literal marker character (overrides config, default 's')
    #[arg(short = 'm', long, global = true)]
    pub marker: Option<char>,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, global = true, default_value = "104857600")]
    pub max_size: u64,

    /// Process files exceeding --max-size limit
    #[arg(long, global = true)]
    pub force: bool,
}

impl GlobalArgs {
    /// Size limit to enforce, taking --force into account.
    pub fn effective_max_size(&self) -> u64 {
        if self.force { 0 } else { self.max_size }
    }
}
