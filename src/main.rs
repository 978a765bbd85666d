mod cli;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};

use crate::cli::{Cli, Config, PROMPT};
use sha256_modified::{Digest, sha256};

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    run(&config, stdin.lock(), stdout.lock())
}

/// Hashes one message and writes the labelled digest to `out`.
///
/// The message comes from the configuration when given on the command
/// line, otherwise from the first line of `input`.
fn run<R: BufRead, W: Write>(config: &Config, mut input: R, mut out: W) -> Result<()> {
    let message = match &config.message {
        Some(message) => message.clone(),
        None => {
            if config.prompt {
                write!(out, "{PROMPT}").context("write prompt")?;
                out.flush().context("flush prompt")?;
            }

            read_message(&mut input)?
        }
    };

    debug!(len = message.len(), "message acquired");

    let digest = sha256(&message);

    writeln!(out, "{} {}", config.label, digest).context("write digest")?;

    if let Some(expected) = &config.expect {
        let expected = Digest::from_hex(expected.trim())
            .with_context(|| format!("parse --expect value {expected:?}"))?;

        if digest != expected {
            bail!("digest mismatch: expected {expected}, got {digest}");
        }

        info!("digest matches expected value");
    }

    Ok(())
}

/// Reads one line, dropping the line terminator.
fn read_message<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();

    let read = input.read_line(&mut line).context("read message from stdin")?;
    if read == 0 {
        bail!("no message on stdin");
    }

    if let Some(stripped) = line.strip_suffix('\n') {
        let keep = stripped.strip_suffix('\r').unwrap_or(stripped).len();
        line.truncate(keep);
    }

    Ok(line)
}
