//! Pixel-mapper chain parsing and formatting.
//!
//! The external token syntax joins transforms with `+` and arguments with
//! `=` (`U-mapper+Rotate=90`). The stored form uses `;` and `:` instead
//! (`U-mapper;Rotate:90`) — the external delimiters are reserved by the
//! host toolkit for its own plugin arguments.

use crate::error::{LedbridgeError, Result};

/// Mirror axis for the `Mirror` transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorAxis {
    Horizontal,
    Vertical,
}

/// One pixel-addressing transform, applied left-to-right along the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelMapper {
    /// Fold a long chain into a U shape (half the width, twice the height).
    UMapper,
    /// Fold a chain vertically.
    VMapper,
    /// Mirror along an axis.
    Mirror(MirrorAxis),
    /// Rotate by the given number of degrees.
    Rotate(u32),
}

/// Parse a `+`-joined transform chain in the external token syntax.
///
/// An unknown transform name or malformed argument fails the whole chain.
pub fn parse_chain(chain: &str) -> Result<Vec<PixelMapper>> {
    if chain.is_empty() {
        return Err(LedbridgeError::Mapper("empty mapper chain".into()));
    }
    chain.split('+').map(parse_entry).collect()
}

fn parse_entry(entry: &str) -> Result<PixelMapper> {
    match entry {
        "U-mapper" => return Ok(PixelMapper::UMapper),
        "V-mapper" => return Ok(PixelMapper::VMapper),
        "Mirror=H" => return Ok(PixelMapper::Mirror(MirrorAxis::Horizontal)),
        "Mirror=V" => return Ok(PixelMapper::Mirror(MirrorAxis::Vertical)),
        _ => {}
    }
    if let Some(degrees) = entry.strip_prefix("Rotate=") {
        if !degrees.is_empty() && degrees.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(value) = degrees.parse() {
                return Ok(PixelMapper::Rotate(value));
            }
        }
        return Err(LedbridgeError::Mapper(format!(
            "invalid rotation: {degrees}"
        )));
    }
    Err(LedbridgeError::Mapper(format!(
        "unknown transform: {entry}"
    )))
}

/// Render a transform chain in the normalized `;`/`:` form.
pub fn format_chain(chain: &[PixelMapper]) -> String {
    let entries: Vec<String> = chain
        .iter()
        .map(|mapper| match mapper {
            PixelMapper::UMapper => "U-mapper".to_string(),
            PixelMapper::VMapper => "V-mapper".to_string(),
            PixelMapper::Mirror(MirrorAxis::Horizontal) => "Mirror:H".to_string(),
            PixelMapper::Mirror(MirrorAxis::Vertical) => "Mirror:V".to_string(),
            PixelMapper::Rotate(degrees) => format!("Rotate:{degrees}"),
        })
        .collect();
    entries.join(";")
}

/// Validate an external chain and return its normalized stored form.
pub fn normalize_chain(chain: &str) -> Result<String> {
    Ok(format_chain(&parse_chain(chain)?))
}
