use clap::ValueEnum;
use eyre::{eyre, Result};

/// Environment variable (or `.env` entry) holding the default output format.
pub const FORMAT_ENV: &str = "SHA256_FORMAT";

/// The two-block FIPS 180-2 sample message hashed by `--demo`.
pub const DEMO_MESSAGE: &str = "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `<hex>  <label>` per input
    #[default]
    Hex,
    /// one JSON object per line
    Json,
    /// the 32 raw digest bytes
    Raw,
}

/// Picks the output format: command line first, then the environment, then hex.
pub fn resolve_format(cli: Option<OutputFormat>, env: Option<&str>) -> Result<OutputFormat> {
    if let Some(format) = cli {
        return Ok(format);
    }
    match env.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => OutputFormat::from_str(value, true)
            .map_err(|_| eyre!("invalid {FORMAT_ENV} value: {value:?}")),
        None => Ok(OutputFormat::default()),
    }
}

/// Reads [`FORMAT_ENV`], loading `.env` on first use.
pub fn format_from_env() -> Option<String> {
    dotenvy::var(FORMAT_ENV).ok()
}
