use crate::cli::{args::ConfigArgs, global::GlobalArgs};
use smali_xor::Config;

pub fn handle(
    args: ConfigArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut effective = config.clone();
    if let Some(marker) = global.marker {
        effective.literal.marker = marker;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&effective)?);
    } else {
        print!("{}", toml::to_string_pretty(&effective)?);
    }
    Ok(())
}
