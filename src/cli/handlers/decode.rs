use crate::cli::{
    args::DecodeArgs,
    config::{numeral, open_session},
    global::GlobalArgs,
};
use smali_xor::{Config, XorKey, xor_mask};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let start: usize = numeral(&args.start, args.start_base)?;
    let end: usize = numeral(&args.end, args.end_base)?;
    let key: XorKey = numeral(&args.key.key, args.key.key_base)?;

    let session = open_session(&args.file, config, global)?;
    let decoded = session.decode(start, end, key)?;

    if args.verbose_range {
        let store = session.store();
        let end = end.min(store.len());
        let values = (start..end)
            .filter_map(|i| store.value(i, session.dialect()))
            .map(|v| v.map(|v| format_hex(xor_mask(v, key))))
            .collect::<Result<Vec<_>, _>>()?;

        println!("Range {}-{} with XOR key {:#06x}:", start, end, key);
        println!("Hex values: {}", values.join(" "));
        println!("Decoded: {}", decoded);
    } else {
        println!("{}", decoded);
    }

    if !global.quiet {
        eprintln!("{} characters", decoded.chars().count());
    }
    Ok(())
}

fn format_hex(value: i64) -> String {
    if value < 0 {
        format!("-0x{:04x}", value.unsigned_abs())
    } else {
        format!("0x{:04x}", value)
    }
}
