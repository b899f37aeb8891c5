//! Talent badge CLI.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use talent_badge::{card, Config, TalentClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "talent-badge")]
#[command(about = "Look up the Talent Protocol reputation badge for a wallet address")]
#[command(version)]
struct Args {
    /// Wallet address to look up
    address: String,

    /// Display name for the card (defaults to a shortened address)
    #[arg(short, long)]
    username: Option<String>,

    /// Talent API base URL (overrides TALENT_API_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Talent API key (overrides TALENT_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Output machine-readable JSON
    #[arg(long)]
    json: bool,

    /// Disable ANSI colors in card output
    #[arg(long)]
    no_color: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, default_value = "info")]
    log_level: String,
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; diagnostics go to stderr so stdout stays clean
    // for card and JSON output.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env();
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(api_key) = args.api_key {
        config.api_key = api_key;
    }

    let username = args
        .username
        .unwrap_or_else(|| shorten(&args.address));

    let client = TalentClient::new(config);
    let record = client.reputation(&args.address).await;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: record,
            })?
        );
    } else {
        println!("{}", card::render(&username, record.as_ref(), !args.no_color));
    }

    Ok(())
}

/// `0x1234…abcd` style short form for card captions.
fn shorten(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() > 10 {
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}…{}", head, tail)
    } else {
        address.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_long_address() {
        assert_eq!(
            shorten("0x1234567890abcdef1234567890abcdef12345678"),
            "0x1234…5678"
        );
    }

    #[test]
    fn test_shorten_keeps_short_input() {
        assert_eq!(shorten("vitalik"), "vitalik");
        assert_eq!(shorten(""), "");
    }
}
