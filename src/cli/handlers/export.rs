use crate::cli::{args::ExportArgs, config::open_session, global::GlobalArgs};
use smali_xor::Config;

pub fn handle(
    args: ExportArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(&args.file, config, global)?;
    session.export(&args.output)?;

    if !global.quiet {
        eprintln!(
            "Exported {} tokens to {}",
            session.store().len(),
            args.output.display()
        );
    }
    Ok(())
}
