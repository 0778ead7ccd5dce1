//! CLI subcommands — token parsing, geometry inspection, pattern
//! rendering.

mod geometry;
mod parse;
mod pattern;

use clap::Subcommand;
use serde::Serialize;

pub(super) use ledbridge_lib::error::Result;

const PADDING: usize = 2;

/// Compute alignment width for a command's key-value output.
/// Ensures at least PADDING spaces after the longest key in either level,
/// with top-level and indent values aligned to the same column.
pub(super) fn kv_width(top: &[&str], indent: &[&str]) -> usize {
    let top_max = top.iter().map(|k| k.len()).max().unwrap_or(0);
    let indent_max = indent.iter().map(|k| k.len()).max().unwrap_or(0);
    let top_need = if top.is_empty() { 0 } else { top_max + PADDING };
    // Indent keys lose 2 chars of inner width to the "  " prefix
    let indent_need = if indent.is_empty() {
        0
    } else {
        indent_max + PADDING + 2
    };
    top_need.max(indent_need)
}

pub(super) fn kv(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("{key:<width$}{value}", width = w);
}

pub(super) fn kv_indent(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("  {key:<width$}{value}", width = w - 2);
}

/// Render optional string fields as `-` when unset.
pub(super) fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct ParseOutput {
    pub options: ledbridge_lib::options::BridgeOptions,
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
pub(super) struct GeometryOutput {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub format: ledbridge_lib::geometry::PixelFormat,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse configuration tokens and print the resulting topology
    Parse {
        /// Configuration tokens (bare flags or key=value pairs)
        tokens: Vec<String>,
    },
    /// Print the screen geometry derived from configuration tokens
    Geometry {
        /// Configuration tokens (bare flags or key=value pairs)
        tokens: Vec<String>,
    },
    /// Render a moving test pattern through the bridge into numbered PNG
    /// dumps (no hardware required)
    Pattern {
        /// Configuration tokens (bare flags or key=value pairs)
        tokens: Vec<String>,
        /// Number of frames to render
        #[arg(long, default_value_t = 8)]
        frames: u32,
        /// Output directory for outputNNNN.png files
        #[arg(long, default_value = ".")]
        out: std::path::PathBuf,
    },
}

pub fn run(command: Command, json: bool) -> Result<()> {
    match command {
        Command::Parse { tokens } => parse::run(&tokens, json),
        Command::Geometry { tokens } => geometry::run(&tokens, json),
        Command::Pattern {
            tokens,
            frames,
            out,
        } => pattern::run(&tokens, frames, &out),
    }
}

/// Serialize a JSON output struct, mapping the error into the crate type.
pub(super) fn to_json(value: &impl Serialize) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ledbridge_lib::LedbridgeError::Encode(e.to_string()))
}
