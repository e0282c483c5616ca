//! CRNAS command-line assessment.
//!
//! Reads one assessment (JSON or YAML), scores it and prints the resulting
//! user manual as pretty JSON.
//!
//! # Environment Variables
//!
//! - `CRNAS_CONFIG`: engine config YAML, used when `--config` is absent
//! - `RUST_LOG`: log filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! assess answers.yaml
//! assess answers.json --config engine.yaml
//! ```

use anyhow::{bail, Context, Result};

use crnas::{Assessment, EngineConfig};

const USAGE: &str = "usage: assess <input.(json|yaml)> [--config <engine.yaml>]";

struct Args {
    input: String,
    config: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut input = None;
    let mut config = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                config = Some(args.next().context("--config needs a path")?);
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("assess {}", crnas::VERSION);
                std::process::exit(0);
            }
            _ if input.is_none() => input = Some(arg),
            _ => bail!("unexpected argument '{}'\n{}", arg, USAGE),
        }
    }
    let input = input.context(USAGE)?;
    let config = config.or_else(|| std::env::var("CRNAS_CONFIG").ok());
    Ok(Args { input, config })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading engine config from {}", path);
            EngineConfig::from_yaml_file(path)
                .with_context(|| format!("failed to load config '{}'", path))?
        }
        None => EngineConfig::default(),
    };

    let assessment = Assessment::from_file(&args.input)
        .with_context(|| format!("failed to read assessment '{}'", args.input))?;
    let manual = assessment
        .evaluate(&config)
        .with_context(|| format!("failed to evaluate '{}'", args.input))?;

    println!("{}", serde_json::to_string_pretty(&manual)?);
    Ok(())
}
