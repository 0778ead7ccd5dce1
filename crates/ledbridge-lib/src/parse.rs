//! Configuration token parser — free-form tokens to a topology
//! configuration.
//!
//! Tokens are either bare flags (`daemon`) or `key=value` pairs
//! (`rows=16`). Matching is order-independent except that later
//! occurrences of a key overwrite earlier ones. Tokens matching no known
//! pattern — including a known key with an out-of-range value — are
//! collected as warnings and otherwise ignored; parsing never aborts.

use crate::mapper;
use crate::options::BridgeOptions;

/// Result of parsing a token sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub options: BridgeOptions,
    /// One entry per unrecognized token, in input order.
    pub warnings: Vec<String>,
}

/// Parse configuration tokens into bridge options.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Parsed {
    let mut options = BridgeOptions::default();
    let mut warnings = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        if !apply_token(&mut options, token) {
            warnings.push(format!("invalid platform parameter: {token}"));
        }
    }
    Parsed { options, warnings }
}

/// Parse tokens, emitting each warning through the `log` facade.
pub fn parse_tokens_logged<S: AsRef<str>>(tokens: &[S]) -> BridgeOptions {
    let parsed = parse_tokens(tokens);
    for w in &parsed.warnings {
        log::warn!("{w}");
    }
    parsed.options
}

/// Apply one token; false means the token matched no recognized pattern.
fn apply_token(options: &mut BridgeOptions, token: &str) -> bool {
    match token {
        "enable_fonts" | "enable-fonts" => {
            options.enable_fonts = true;
            return true;
        }
        "show-refresh" => {
            options.matrix.show_refresh_rate = true;
            return true;
        }
        "inverse" => {
            options.matrix.inverse_colors = true;
            return true;
        }
        "no-hardware-pulse" => {
            options.matrix.disable_hardware_pulsing = true;
            return true;
        }
        "daemon" => {
            options.runtime.daemon = true;
            return true;
        }
        _ => {}
    }

    let Some((key, value)) = token.split_once('=') else {
        return false;
    };
    let m = &mut options.matrix;
    let r = &mut options.runtime;
    match key {
        "gpio-mapping" => set_string(&mut m.hardware_mapping, value, is_mapping_name),
        "rows" | "led-rows" => set_u32(&mut m.rows, value),
        "cols" | "led-cols" => set_u32(&mut m.cols, value),
        "chain" => set_u32(&mut m.chain_length, value),
        "parallel" => set_u32_in(&mut m.parallel, value, 1, 3),
        "multiplexing" => set_u32_in(&mut m.multiplexing, value, 0, 99),
        "pixel-mapper" => match mapper::normalize_chain(value) {
            Ok(chain) => {
                m.pixel_mapper_chain = chain;
                true
            }
            Err(_) => false,
        },
        "pwm-bits" => set_u32_in(&mut m.pwm_bits, value, 0, 99),
        "brightness" => set_u32(&mut m.brightness, value),
        "scan-mode" => set_u32_in(&mut m.scan_mode, value, 0, 1),
        "row-addr-type" => set_u32_in(&mut m.row_address_type, value, 0, 4),
        "limit-refresh" => set_u32(&mut m.limit_refresh_rate_hz, value),
        "rgb-sequence" => set_string(&mut m.rgb_sequence, value, is_rgb_permutation),
        "pwm-lsb-nanoseconds" => set_u32(&mut m.pwm_lsb_nanoseconds, value),
        "pwm-dither-bits" => set_u32_in(&mut m.pwm_dither_bits, value, 0, 2),
        "panel_type" => set_string(&mut m.panel_type, value, is_panel_type),
        "slowdown-gpio" => set_u32_in(&mut r.gpio_slowdown, value, 0, 4),
        "no-drop-privs" => match value {
            "-1" => {
                r.drop_privileges = -1;
                true
            }
            "0" => {
                r.drop_privileges = 0;
                true
            }
            "1" => {
                r.drop_privileges = 1;
                true
            }
            _ => false,
        },
        "drop-priv-user" => set_string(&mut r.drop_priv_user, value, is_identifier),
        "drop-priv-group" => set_string(&mut r.drop_priv_group, value, is_identifier),
        _ => false,
    }
}

// ── Value validators ──

fn parse_u32(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn set_u32(field: &mut u32, value: &str) -> bool {
    match parse_u32(value) {
        Some(v) => {
            *field = v;
            true
        }
        None => false,
    }
}

fn set_u32_in(field: &mut u32, value: &str, min: u32, max: u32) -> bool {
    match parse_u32(value) {
        Some(v) if v >= min && v <= max => {
            *field = v;
            true
        }
        _ => false,
    }
}

fn set_string(field: &mut String, value: &str, valid: fn(&str) -> bool) -> bool {
    if valid(value) {
        *field = value.to_string();
        true
    } else {
        false
    }
}

fn is_mapping_name(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase() || b == b'-')
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn is_rgb_permutation(s: &str) -> bool {
    s.len() == 3 && "RGB".bytes().all(|c| s.bytes().filter(|&b| b == c).count() == 1)
}

fn is_panel_type(s: &str) -> bool {
    s == "FM6126A" || s == "FM6127"
}
