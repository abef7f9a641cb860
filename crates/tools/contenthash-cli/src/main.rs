//! Encode and decode ENS content hashes from the command line.
use clap::{Parser, Subcommand};
use contenthash::{ContentHashCodec, TextDecoding, cid_v0_to_v1_base32, config::ContentHashConfig};
use contenthash_multicodec::registry;
use serde_json::json;
use std::{error::Error, process::ExitCode};
use tracing::debug;
use tracing_subscriber::filter;

/// ENS content hash tool
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Fail on plain text payloads that are not valid UTF-8
    #[arg(long, env = "CONTENTHASH_STRICT_UTF8")]
    strict_utf8: bool,

    /// Print results as JSON
    #[arg(long, short)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a hex content hash
    Decode { content_hash: String },

    /// Encode a value as a hex content hash
    Encode { codec: String, value: String },

    /// Print the codec of a hex content hash
    Codec { content_hash: String },

    /// Convert an IPFS identifier to a base32 CID v1
    CidV1 { identifier: String },

    /// List the codecs in the bundled registry
    Codecs,
}

fn run(args: Args) -> Result<ExitCode, Box<dyn Error>> {
    let text_decoding = if args.strict_utf8 {
        TextDecoding::Strict
    } else {
        TextDecoding::Lossy
    };
    let config = ContentHashConfig::builder()
        .with_text_decoding(text_decoding)
        .build()?;
    let codec = ContentHashCodec::new(config);
    debug!("running {:?}", args.command);

    match args.command {
        Command::Decode { content_hash } => {
            let decoded = codec.decode_with_codec(&content_hash)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&decoded)?);
            } else {
                println!("{}", decoded.value);
            }
        }
        Command::Encode { codec: name, value } => {
            let encoded = codec.encode(&name, &value)?;
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({ "codec": name, "contenthash": encoded }))?
                );
            } else {
                println!("{encoded}");
            }
        }
        Command::Codec { content_hash } => match codec.get_codec(&content_hash) {
            Some(name) => {
                if args.json {
                    println!("{}", json!({ "codec": name }));
                } else {
                    println!("{name}");
                }
            }
            None => {
                eprintln!("Unknown codec for content hash ({content_hash})");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::CidV1 { identifier } => {
            let v1 = cid_v0_to_v1_base32(&identifier)?;
            if args.json {
                println!("{}", json!({ "cid": v1 }));
            } else {
                println!("{v1}");
            }
        }
        Command::Codecs => {
            let entries = registry::global().entries();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in entries {
                    println!("0x{:<8x} {:<16} {}", entry.code, entry.tag, entry.name);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();

    // construct a subscriber that prints formatted traces to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_encode() {
        let args = Args::parse_from(["contenthash", "--json", "encode", "ipfs-ns", "Qm"]);
        assert!(args.json);
        assert!(matches!(
            args.command,
            Command::Encode { codec, value } if codec == "ipfs-ns" && value == "Qm"
        ));
    }

    #[test]
    fn run_codec_unknown() {
        let args = Args::parse_from(["contenthash", "codec", "ff7f00"]);
        let code = run(args).unwrap();
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
    }
}
