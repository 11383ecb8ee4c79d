use crate::cli::{args::ExtractArgs, config::open_session, global::GlobalArgs};
use smali_xor::{Config, LiteralToken};

/// Tokens shown from each end of the array.
const PREVIEW_LEN: usize = 10;

pub fn handle(
    args: ExtractArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(&args.file, config, global)?;
    let tokens = session.store().tokens();

    if args.json {
        let output = serde_json::json!({
            "file": args.file,
            "count": tokens.len(),
            "tokens": tokens,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let head = &tokens[..tokens.len().min(PREVIEW_LEN)];
    let tail = &tokens[tokens.len().saturating_sub(PREVIEW_LEN)..];

    println!("Found {} literals in {}", tokens.len(), args.file.display());
    println!("First {}: {}", head.len(), join(head));
    println!("Last {}: {}", tail.len(), join(tail));
    Ok(())
}

fn join(tokens: &[LiteralToken]) -> String {
    tokens
        .iter()
        .map(LiteralToken::raw)
        .collect::<Vec<_>>()
        .join(" ")
}
