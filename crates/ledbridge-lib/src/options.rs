//! Topology configuration — physical wiring, timing and process knobs.
//!
//! All string-valued fields are owned by the configuration itself, so the
//! values handed to the hardware driver stay valid for the configuration's
//! entire lifetime. The structs are populated once by the token parser and
//! never mutated afterwards.

use serde::Serialize;

/// Driver-level options describing the physical matrix and its timing.
///
/// Field names and defaults follow the rpi-rgb-led-matrix option block the
/// hardware driver consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixOptions {
    /// Panel row count. Default: 32.
    pub rows: u32,

    /// Panel column count. Default: 32.
    pub cols: u32,

    /// Number of panels daisy-chained in series. Default: 1.
    pub chain_length: u32,

    /// Number of parallel panel banks (1–3). Default: 1.
    pub parallel: u32,

    /// Multiplexing scheme id; 0 means none. Default: 0.
    pub multiplexing: u32,

    /// GPIO pin-layout preset name (e.g. "regular", "adafruit-hat").
    pub hardware_mapping: String,

    /// Normalized pixel-mapper transform chain (`;`-separated, `name:arg`
    /// entries), stored verbatim for the driver to interpret. Empty = none.
    pub pixel_mapper_chain: String,

    /// Brightness percentage. Default: 100.
    pub brightness: u32,

    /// PWM bit depth. Default: 11.
    pub pwm_bits: u32,

    /// PWM base time unit in nanoseconds. Default: 130.
    pub pwm_lsb_nanoseconds: u32,

    /// PWM dithering depth (0–2). Default: 0.
    pub pwm_dither_bits: u32,

    /// Scan mode: 0 = progressive, 1 = interlaced.
    pub scan_mode: u32,

    /// Row addressing scheme (0–4). Default: 0 (direct).
    pub row_address_type: u32,

    /// Panel driver chip variant ("FM6126A" or "FM6127"). Empty = default.
    pub panel_type: String,

    /// Color channel ordering, a permutation of R, G, B. Default: "RGB".
    pub rgb_sequence: String,

    /// Disable hardware PWM pulsing.
    pub disable_hardware_pulsing: bool,

    /// Invert color output.
    pub inverse_colors: bool,

    /// Refresh rate cap in Hz; 0 = unlimited.
    pub limit_refresh_rate_hz: u32,

    /// Print the measured refresh rate (diagnostic).
    pub show_refresh_rate: bool,
}

impl Default for MatrixOptions {
    fn default() -> Self {
        MatrixOptions {
            rows: 32,
            cols: 32,
            chain_length: 1,
            parallel: 1,
            multiplexing: 0,
            hardware_mapping: "regular".into(),
            pixel_mapper_chain: String::new(),
            brightness: 100,
            pwm_bits: 11,
            pwm_lsb_nanoseconds: 130,
            pwm_dither_bits: 0,
            scan_mode: 0,
            row_address_type: 0,
            panel_type: String::new(),
            rgb_sequence: "RGB".into(),
            disable_hardware_pulsing: false,
            inverse_colors: false,
            limit_refresh_rate_hz: 0,
            show_refresh_rate: false,
        }
    }
}

/// Process-level options consumed only by the external device driver,
/// never by the flusher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuntimeOptions {
    /// GPIO access slowdown factor (0–4). Default: 1.
    pub gpio_slowdown: u32,

    /// Run the driver as a background process.
    pub daemon: bool,

    /// Privilege-drop policy: -1 = driver default, 0 = keep, 1 = drop.
    pub drop_privileges: i32,

    /// User to drop privileges to. Empty = driver default.
    pub drop_priv_user: String,

    /// Group to drop privileges to. Empty = driver default.
    pub drop_priv_group: String,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        RuntimeOptions {
            gpio_slowdown: 1,
            daemon: false,
            drop_privileges: 1,
            drop_priv_user: String::new(),
            drop_priv_group: String::new(),
        }
    }
}

/// Complete bridge configuration produced by the token parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BridgeOptions {
    /// Enable the font subsystem in the surrounding integration.
    pub enable_fonts: bool,

    /// Driver-level matrix options.
    pub matrix: MatrixOptions,

    /// Process-level runtime options.
    pub runtime: RuntimeOptions,
}
