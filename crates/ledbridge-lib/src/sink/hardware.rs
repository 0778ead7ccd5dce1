//! Physical sink — adapter for the rpi-led-matrix driver bindings.
//!
//! Compiled only with the `hardware` feature; the underlying C library
//! exists only on a Raspberry Pi.

use rpi_led_matrix::{LedColor, LedMatrix, LedMatrixOptions, LedRuntimeOptions};

use super::{PixelSink, Result, SinkError};
use crate::options::BridgeOptions;

/// Sink writing through the rpi-rgb-led-matrix driver.
pub struct MatrixSink {
    matrix: LedMatrix,
}

impl MatrixSink {
    /// Construct the driver from the topology configuration.
    ///
    /// Requires root (or a configured privilege drop) for GPIO access; a
    /// refused construction surfaces as `CreateFailed`.
    pub fn open(options: &BridgeOptions) -> Result<Self> {
        let m = &options.matrix;
        let mut driver = LedMatrixOptions::new();
        driver.set_hardware_mapping(&m.hardware_mapping);
        driver.set_rows(m.rows);
        driver.set_cols(m.cols);
        driver.set_chain_length(m.chain_length);
        driver.set_parallel(m.parallel);
        driver.set_multiplexing(m.multiplexing);
        if !m.pixel_mapper_chain.is_empty() {
            driver.set_pixel_mapper_config(&m.pixel_mapper_chain);
        }
        driver
            .set_brightness(m.brightness.min(100) as u8)
            .map_err(|e| SinkError::CreateFailed(format!("brightness: {e}")))?;
        driver
            .set_pwm_bits(m.pwm_bits.min(11) as u8)
            .map_err(|e| SinkError::CreateFailed(format!("pwm-bits: {e}")))?;
        driver.set_pwm_lsb_nanoseconds(m.pwm_lsb_nanoseconds);
        driver.set_pwm_dither_bits(m.pwm_dither_bits);
        driver.set_scan_mode(m.scan_mode);
        driver.set_row_addr_type(m.row_address_type);
        if !m.panel_type.is_empty() {
            driver.set_panel_type(&m.panel_type);
        }
        driver.set_led_rgb_sequence(&m.rgb_sequence);
        driver.set_hardware_pulsing(!m.disable_hardware_pulsing);
        driver.set_inverse_colors(m.inverse_colors);
        driver.set_refresh_rate(m.show_refresh_rate);
        if m.limit_refresh_rate_hz > 0 {
            driver.set_limit_refresh(m.limit_refresh_rate_hz);
        }

        let r = &options.runtime;
        let mut runtime = LedRuntimeOptions::new();
        runtime.set_gpio_slowdown(r.gpio_slowdown);
        runtime.set_daemon(r.daemon);
        // The bindings expose the policy as a bool; -1 (driver default) and
        // 1 both map to dropping privileges.
        runtime.set_drop_privileges(r.drop_privileges != 0);

        let matrix = LedMatrix::new(Some(driver), Some(runtime))
            .map_err(|e| SinkError::CreateFailed(e.to_string()))?;
        Ok(MatrixSink { matrix })
    }
}

impl PixelSink for MatrixSink {
    fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        let mut canvas = self.matrix.canvas();
        canvas.set(
            x as i32,
            y as i32,
            &LedColor {
                red: r,
                green: g,
                blue: b,
            },
        );
        Ok(())
    }
}
