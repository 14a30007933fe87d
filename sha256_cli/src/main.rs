//! The sha256 command computes FIPS 180-2 SHA-256 digests of text, files or stdin.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use eyre::{bail, Result};
use sha256_hashing::Digest;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod input;
mod output;

use config::{format_from_env, resolve_format, OutputFormat, DEMO_MESSAGE};
use input::Input;

#[derive(Parser, Debug)]
#[command(name = "sha256", about = "Compute FIPS 180-2 SHA-256 digests", version)]
struct Cli {
    /// Text to hash, encoded as UTF-8. Standard input is hashed when no text or file is given.
    texts: Vec<String>,

    /// File to hash as raw bytes. May be repeated.
    #[arg(long, short)]
    file: Vec<PathBuf>,

    /// Require file and stdin contents to be valid UTF-8 text.
    #[arg(long)]
    utf8: bool,

    /// Output format. Falls back to $SHA256_FORMAT, then hex.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Expected hex digest of the single input; exit non-zero on mismatch.
    #[arg(long, value_name = "HEX")]
    check: Option<Digest>,

    /// Hash the FIPS 180-2 two-block sample message.
    #[arg(long, conflicts_with_all = ["texts", "file"])]
    demo: bool,
}

impl Cli {
    fn inputs(&self) -> Vec<Input> {
        if self.demo {
            return vec![Input::Text(DEMO_MESSAGE.to_string())];
        }
        let mut inputs: Vec<Input> = self.texts.iter().cloned().map(Input::Text).collect();
        inputs.extend(self.file.iter().cloned().map(Input::File));
        if inputs.is_empty() {
            inputs.push(Input::Stdin);
        }
        inputs
    }
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(log_filter()?)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    run(&cli, &mut std::io::stdout().lock())
}

/// Warnings from everything, progress from this binary. Stdout stays reserved
/// for digests, so logs go to stderr.
fn log_filter() -> Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into())
        .add_directive("sha256_cli=info".parse()?))
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let format = resolve_format(cli.format, format_from_env().as_deref())?;
    let inputs = cli.inputs();
    debug!(?format, count = inputs.len(), "hashing inputs");

    if cli.check.is_some() && inputs.len() != 1 {
        bail!("--check needs exactly one input, got {}", inputs.len());
    }

    for input in &inputs {
        let hashed = input.hash(cli.utf8)?;
        output::render(out, format, &hashed)?;

        if let Some(expected) = cli.check {
            if hashed.digest != expected {
                bail!(
                    "digest mismatch for {}: expected {expected}, got {}",
                    hashed.label,
                    hashed.digest
                );
            }
            info!(label = %hashed.label, "digest verified");
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sha256").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_log_filter_levels() {
        let filter = log_filter().unwrap().to_string();
        assert!(filter.contains("sha256_cli=info"), "{filter}");
        assert!(filter.contains("warn"), "{filter}");
    }

    #[test]
    fn no_arguments_reads_stdin() {
        assert_eq!(parse(&[]).inputs(), vec![Input::Stdin]);
    }

    #[test]
    fn texts_then_files() {
        let cli = parse(&["one", "-f", "a.bin", "two", "--file", "b.bin"]);
        assert_eq!(
            cli.inputs(),
            vec![
                Input::Text("one".into()),
                Input::Text("two".into()),
                Input::File("a.bin".into()),
                Input::File("b.bin".into()),
            ]
        );
    }

    #[test]
    fn demo_hashes_the_two_block_message() {
        let cli = parse(&["--demo", "--format", "hex"]);
        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();
        let line = String::from_utf8(out).unwrap();
        assert!(line.starts_with("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1  "));
    }

    #[test]
    fn demo_conflicts_with_inputs() {
        assert!(Cli::try_parse_from(["sha256", "--demo", "abc"]).is_err());
    }

    #[test]
    fn check_accepts_matching_digest() {
        let cli = parse(&["abc", "--format", "hex", "--check", ABC]);
        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{ABC}  \"abc\"\n"));
    }

    #[test]
    fn check_rejects_mismatch() {
        let cli = parse(&["abd", "--format", "hex", "--check", ABC]);
        let err = run(&cli, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("digest mismatch"));
    }

    #[test]
    fn check_needs_a_single_input() {
        let cli = parse(&["abc", "def", "--format", "hex", "--check", ABC]);
        assert!(run(&cli, &mut Vec::new()).is_err());
    }

    #[test]
    fn check_rejects_malformed_hex() {
        assert!(Cli::try_parse_from(["sha256", "abc", "--check", "xyz"]).is_err());
    }
}
