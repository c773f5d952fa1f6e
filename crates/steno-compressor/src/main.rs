//! steno-compressor — command-line front end for the keylist codec.
//!
//! # Usage
//!
//! ```text
//! steno-compressor [--config <FILE>] <COMMAND>
//!
//! Commands:
//!   report [KEYMAP...]                 Compression ratio per keymap
//!   encode [KEYMAP] -o <OUT>           Write a production-format buffer
//!   decode <BUFFER> --count <N>        Print the decoded actions
//!   init-config [--force]              Write the default config file
//! ```
//!
//! Keymaps are `.json` (Plover) or `.toml` files.  When none is given, the
//! built-in keymap named by `--builtin` (or the config's `default_keymap`)
//! is used.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()                 -- TOML config, defaults if absent
//!  └─ tracing_subscriber init       -- RUST_LOG, else config log_level
//!  └─ dispatch
//!       ├─ report -> application::report
//!       ├─ encode -> application::transfer::encode_keymap
//!       ├─ decode -> application::transfer::decode_buffer
//!       └─ init-config -> storage::config::write_default_config
//! ```

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use steno_compressor::application::{report, transfer};
use steno_compressor::infrastructure::keymap_file::{load_keymap, NamedKeymap};
use steno_compressor::infrastructure::storage::config::{self, OutputFormat, ToolConfig};
use steno_core::keymap::samples;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Compress stenography keymaps into keyboard keylist buffers.
#[derive(Debug, Parser)]
#[command(name = "steno-compressor", version)]
struct Cli {
    /// Path to a TOML config file instead of the platform default.
    #[arg(long, global = true, env = "STENO_COMPRESSOR_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report compressed size and ratio for each keymap.
    Report {
        /// Keymap files; the built-in keymaps are reported when empty.
        keymaps: Vec<PathBuf>,

        /// Print JSON instead of aligned text.
        #[arg(long)]
        json: bool,
    },

    /// Encode a keymap into a production-format buffer file.
    Encode {
        /// Keymap file; falls back to a built-in keymap.
        keymap: Option<PathBuf>,

        /// Name of the built-in keymap to use when no file is given.
        #[arg(long)]
        builtin: Option<String>,

        /// Output buffer file.
        #[arg(short, long)]
        output: PathBuf,

        /// Skip decoding the buffer again before writing it.
        #[arg(long)]
        no_verify: bool,
    },

    /// Decode a production-format buffer file.
    Decode {
        /// Buffer file written by `encode`.
        input: PathBuf,

        /// Number of entries stored in the buffer.
        #[arg(long)]
        count: usize,
    },

    /// Write the default configuration to the config path.
    InitConfig {
        /// Replace an existing config file.
        #[arg(long)]
        force: bool,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .context("failed to load configuration")?;

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cfg.general.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?cfg, "configuration loaded");

    match cli.command {
        Command::Report { keymaps, json } => run_report(&cfg, &keymaps, json),
        Command::Encode {
            keymap,
            builtin,
            output,
            no_verify,
        } => run_encode(&cfg, keymap.as_deref(), builtin.as_deref(), &output, no_verify),
        Command::Decode { input, count } => run_decode(&input, count),
        Command::InitConfig { force } => run_init_config(cli.config.as_deref(), force),
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_report(cfg: &ToolConfig, paths: &[PathBuf], json: bool) -> anyhow::Result<()> {
    let keymaps: Vec<NamedKeymap> = if paths.is_empty() {
        samples::all()
            .into_iter()
            .map(|(name, keymap)| NamedKeymap {
                name: name.to_string(),
                keymap,
            })
            .collect()
    } else {
        paths
            .iter()
            .map(|p| load_keymap(p).with_context(|| format!("failed to load {}", p.display())))
            .collect::<anyhow::Result<_>>()?
    };

    let reports = report::build_reports(keymaps.iter().map(|k| (k.name.as_str(), &k.keymap)))
        .context("failed to compress keymap")?;

    let format = if json { OutputFormat::Json } else { cfg.output.format };
    println!("{}", report::render_reports(&reports, format)?);
    Ok(())
}

fn run_encode(
    cfg: &ToolConfig,
    path: Option<&Path>,
    builtin: Option<&str>,
    output: &Path,
    no_verify: bool,
) -> anyhow::Result<()> {
    let named = match path {
        Some(p) => load_keymap(p).with_context(|| format!("failed to load {}", p.display()))?,
        None => {
            let name = builtin.unwrap_or(&cfg.general.default_keymap);
            let keymap = samples::by_name(name)
                .ok_or_else(|| anyhow!("unknown built-in keymap '{name}'"))?;
            NamedKeymap {
                name: name.to_string(),
                keymap,
            }
        }
    };

    let verify = cfg.output.verify_after_encode && !no_verify;
    let encoded = transfer::encode_keymap(&named.keymap, verify)
        .with_context(|| format!("failed to encode keymap '{}'", named.name))?;

    std::fs::write(output, &encoded.buffer)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(keymap = %named.name, output = %output.display(), "wrote keylist buffer");
    println!(
        "{}: {} entries, {} bytes (decode with --count {})",
        named.name,
        encoded.entries,
        encoded.buffer.len(),
        encoded.entries
    );
    Ok(())
}

fn run_decode(input: &Path, count: usize) -> anyhow::Result<()> {
    let buffer =
        std::fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let actions = transfer::decode_buffer(buffer, count)
        .with_context(|| format!("failed to decode {} entries", count))?;

    for action in actions {
        println!("{action}");
    }
    Ok(())
}

fn run_init_config(path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config::config_file_path().context("no config path available")?,
    };

    if config::write_default_config(&path, force)
        .with_context(|| format!("failed to write {}", path.display()))?
    {
        info!(path = %path.display(), "wrote default configuration");
        println!("wrote {}", path.display());
    } else {
        println!("{} already exists (use --force to replace it)", path.display());
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
