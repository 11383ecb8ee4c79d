use crate::cli::{args::BaseCli, global::GlobalArgs};
use smali_xor::{Config, LiteralDialect, Session, parse_numeral};
use num_traits::{Num, Unsigned};
use std::path::Path;

/// Builds the literal dialect from config, applying --marker.
pub fn build_dialect(
    config: &Config,
    global: &GlobalArgs,
) -> Result<LiteralDialect, Box<dyn std::error::Error>> {
    let marker = global.marker.unwrap_or(config.literal.marker);
    Ok(LiteralDialect::new(marker, config.literal.pad_width)?)
}

/// Opens `path` as a session, honoring the size limit.
pub fn open_session(
    path: &Path,
    config: &Config,
    global: &GlobalArgs,
) -> Result<Session, Box<dyn std::error::Error>> {
    let dialect = build_dialect(config, global)?;
    let max_size = global.effective_max_size();

    if global.force && !global.quiet {
        let size = std::fs::metadata(path)?.len();
        if global.max_size > 0 && size > global.max_size {
            eprintln!(
                "Warning: Processing large file ({} bytes, limit: {} bytes)",
                size, global.max_size
            );
        }
    }

    Ok(Session::open(path, dialect, max_size)?)
}

/// Parses an index or key given on the command line.
pub fn numeral<T>(input: &str, base: BaseCli) -> Result<T, Box<dyn std::error::Error>>
where
    T: Num + Unsigned,
{
    Ok(parse_numeral(input, base.into())?)
}
