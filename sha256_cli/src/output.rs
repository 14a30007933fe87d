use std::io::Write;

use eyre::Result;
use serde::Serialize;
use sha256_hashing::Digest;

use crate::config::OutputFormat;
use crate::input::Hashed;

#[derive(Debug, Serialize)]
struct Record<'a> {
    input: &'a str,
    digest: &'a Digest,
    blocks: usize,
}

/// Writes one hashed input in the requested format.
pub fn render(out: &mut impl Write, format: OutputFormat, hashed: &Hashed) -> Result<()> {
    match format {
        OutputFormat::Hex => writeln!(out, "{}  {}", hashed.digest, hashed.label)?,
        OutputFormat::Json => {
            let record = Record {
                input: &hashed.label,
                digest: &hashed.digest,
                blocks: hashed.blocks,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
        OutputFormat::Raw => out.write_all(hashed.digest.as_bytes())?,
    }
    Ok(())
}
