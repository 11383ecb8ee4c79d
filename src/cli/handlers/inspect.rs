use crate::cli::{
    args::InspectArgs,
    config::{numeral, open_session},
    global::GlobalArgs,
};
use smali_xor::{Config, XorKey, inspect};

pub fn handle(
    args: InspectArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let keys: Vec<XorKey> = match &args.keys {
        Some(keys) => keys
            .iter()
            .map(|k| numeral::<XorKey>(k, args.key_base))
            .collect::<Result<_, _>>()?,
        None => config.inspect.candidate_keys.clone(),
    };

    let session = open_session(&args.file, config, global)?;
    let rows = inspect(session.store().tokens(), &keys, session.dialect());

    if args.json {
        let output = serde_json::json!({
            "keys": keys,
            "rows": rows,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let key_header = keys
        .iter()
        .map(|k| format!("{:#06x}", k))
        .collect::<Vec<_>>()
        .join(" | ");
    let raw_width = rows.iter().map(|r| r.raw.len()).max().unwrap_or(0).max(5);

    println!(
        "{:>6}  {:<raw_width$}  {:>8}  {}",
        "index", "token", "value", key_header
    );
    for row in &rows {
        let samples = if row.value.is_some() {
            row.samples_label()
        } else {
            "Error".to_string()
        };
        println!(
            "{:>6}  {:<raw_width$}  {:>8}  {}",
            row.index,
            row.raw,
            row.value_label(),
            samples
        );
    }
    Ok(())
}
