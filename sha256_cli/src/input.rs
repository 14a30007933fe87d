use std::io::Read;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use sha256_hashing::{digest, digest_str, digest_utf8, Digest, Message};
use tracing::debug;

/// Something to hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Text(String),
    File(PathBuf),
    Stdin,
}

/// A hashed input, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hashed {
    pub label: String,
    pub digest: Digest,
    pub blocks: usize,
}

impl Input {
    /// Name printed next to the digest, following `sha256sum`.
    pub fn label(&self) -> String {
        match self {
            Input::Text(text) => format!("{text:?}"),
            Input::File(path) => path.display().to_string(),
            Input::Stdin => "-".to_string(),
        }
    }

    /// Hashes the input. With `require_utf8`, byte sources must hold valid text.
    pub fn hash(&self, require_utf8: bool) -> Result<Hashed> {
        let label = self.label();
        let (digest, blocks) = match self {
            Input::Text(text) => {
                let message = Message::from_text(text);
                (digest_str(text)?, message.block_count()?)
            }
            Input::File(path) => hash_bytes(&read_file(path)?, require_utf8, &label)?,
            Input::Stdin => hash_bytes(&read_stdin()?, require_utf8, &label)?,
        };
        debug!(%label, %digest, blocks, "hashed input");
        Ok(Hashed {
            label,
            digest,
            blocks,
        })
    }
}

fn hash_bytes(bytes: &[u8], require_utf8: bool, label: &str) -> Result<(Digest, usize)> {
    let hashed = if require_utf8 {
        digest_utf8(bytes).wrap_err_with(|| format!("cannot hash {label} as text"))?
    } else {
        digest(bytes)?
    };
    Ok((hashed, Message::from_bytes(bytes).block_count()?))
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).wrap_err_with(|| format!("failed to read {}", path.display()))
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .wrap_err("failed to read standard input")?;
    Ok(buf)
}
