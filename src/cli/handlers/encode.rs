use crate::cli::{
    args::EncodeArgs,
    config::{build_dialect, numeral},
    global::GlobalArgs,
};
use smali_xor::{Config, XorKey, encode_range, preview};

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let key: XorKey = numeral(&args.key.key, args.key.key_base)?;
    let dialect = build_dialect(config, global)?;

    if args.preview {
        println!("{}", preview(&args.text, key, &dialect));
        return Ok(());
    }

    for token in encode_range(&args.text, key, &dialect) {
        println!("{}", token);
    }
    Ok(())
}
