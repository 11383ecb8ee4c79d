use crate::cli::{
    args::EditArgs,
    config::{numeral, open_session},
    global::GlobalArgs,
};
use log::warn;
use smali_xor::{Config, XorKey};

pub fn handle(
    args: EditArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let start: usize = numeral(&args.start, args.start_base)?;
    let end: Option<usize> = args
        .end
        .as_deref()
        .map(|end| numeral::<usize>(end, args.end_base))
        .transpose()?;
    let key: XorKey = numeral(&args.key.key, args.key.key_base)?;

    let mut session = open_session(&args.file, config, global)?;

    // Showing what the range held is informational; the edit does not depend on it.
    if let Some(end) = end {
        match session.current_string(start, end, key) {
            Ok(current) if !global.quiet => eprintln!("Current: {}", current),
            Ok(_) => {}
            Err(e) => warn!("Could not decode current range {}-{}: {}", start, end, e),
        }
    }
    if !global.quiet {
        eprintln!("Preview: {}", session.preview(&args.text, key));
    }

    let requested = args.text.chars().count();
    let written = session.edit_range(start, &args.text, key)?;
    if written < requested {
        warn!(
            "Only {} of {} characters fit before the end of the array",
            written, requested
        );
    }

    if args.dry_run {
        let lines = session.store().to_lines();
        println!(
            "Dry run: would update range {}-{} with {} characters",
            start,
            start + written,
            written
        );
        for (i, line) in lines.iter().enumerate().skip(start).take(written) {
            println!("{:>6}  {}", i, line);
        }
        return Ok(());
    }

    let report = session.save(&config.backup.suffix)?;
    println!(
        "Updated range {}-{} with {} characters in {}",
        start,
        start + written,
        written,
        report.path.display()
    );
    if !global.quiet {
        eprintln!("Backup saved to {}", report.backup_path.display());
    }
    Ok(())
}
