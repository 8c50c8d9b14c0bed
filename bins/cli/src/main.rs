//! Cryptounits CLI
//!
//! Converts amounts between cryptocurrency denominations from the
//! command line, using the built-in unit tables or a user-supplied
//! table file.
//!
//! Usage:
//!   cryptounits list [CODE]
//!   cryptounits convert <CODE> <AMOUNT> <FROM> <TO>
//!
//! A custom table file can be supplied with `--units <FILE>` or the
//! `CRYPTOUNITS_UNITS` environment variable.

use anyhow::{Context, Result, bail};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cryptounits_core::registry::{self, Registry, UnitsConfig};

const USAGE: &str = "Usage:
  cryptounits [--units <FILE>] list [CODE]
  cryptounits [--units <FILE>] convert <CODE> <AMOUNT> <FROM> <TO>";

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cryptounits=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let units_path = take_units_flag(&mut args)?;
    let registry = load_registry(units_path.as_deref())?;

    match args.first().map(String::as_str) {
        Some("list") if args.len() <= 2 => list(&registry, args.get(1).map(String::as_str)),
        Some("convert") if args.len() == 5 => {
            let system = registry
                .get(&args[1])
                .with_context(|| format!("unsupported currency: {}", args[1]))?;
            let result = system.convert(&args[2], &args[3], &args[4])?;
            println!("{result}");
            Ok(())
        }
        _ => bail!("{USAGE}"),
    }
}

/// Extracts a `--units <FILE>` flag from the argument list, if present.
fn take_units_flag(args: &mut Vec<String>) -> Result<Option<String>> {
    let Some(position) = args.iter().position(|arg| arg == "--units") else {
        return Ok(None);
    };
    if position + 1 >= args.len() {
        bail!("--units requires a file path\n{USAGE}");
    }
    let path = args.remove(position + 1);
    args.remove(position);
    Ok(Some(path))
}

/// Loads unit tables from a file, the `CRYPTOUNITS_UNITS` environment
/// variable, or the built-in defaults.
fn load_registry(path: Option<&str>) -> Result<Registry> {
    let path = path
        .map(String::from)
        .or_else(|| std::env::var("CRYPTOUNITS_UNITS").ok());
    match path {
        Some(path) => {
            let source = config::Config::builder()
                .add_source(config::File::with_name(&path))
                .build()
                .with_context(|| format!("failed to read unit tables from {path}"))?;
            let units: UnitsConfig = source
                .try_deserialize()
                .with_context(|| format!("malformed unit table file {path}"))?;
            let registry = Registry::from_config(units)?;
            debug!(path = %path, currencies = registry.systems().len(), "loaded unit tables");
            Ok(registry)
        }
        None => Ok(registry::builtin().clone()),
    }
}

/// Prints supported currency codes, or one currency's ordered unit table.
fn list(registry: &Registry, code: Option<&str>) -> Result<()> {
    match code {
        Some(code) => {
            let system = registry
                .get(code)
                .with_context(|| format!("unsupported currency: {code}"))?;
            for unit in system.units() {
                println!("{}\t{}", unit.name, unit.scale.factor());
            }
        }
        None => {
            for code in registry.codes() {
                println!("{code}");
            }
        }
    }
    Ok(())
}
