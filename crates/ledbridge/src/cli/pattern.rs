//! `pattern` subcommand — drive the full bridge pipeline into PNG dumps.
//!
//! Renders a moving diagonal color wash, one full-surface dirty region per
//! frame. Useful for checking a topology end to end without hardware.

use std::path::Path;

use ledbridge_lib::bridge::MatrixBridge;
use ledbridge_lib::parse;
use ledbridge_lib::surface::{FrameSurface, argb};

use super::Result;

pub(super) fn run(tokens: &[String], frames: u32, out: &Path) -> Result<()> {
    let options = parse::parse_tokens_logged(tokens);
    let mut bridge = MatrixBridge::with_dump_dir(options, out);
    let geometry = bridge.screen_geometry();
    bridge.resize(geometry.width, geometry.height);

    std::fs::create_dir_all(out)?;

    for frame in 0..frames {
        draw_frame(bridge.surface_mut(), frame);
        bridge.flush(&[geometry.bounds()])?;
    }

    println!(
        "wrote {frames} frames ({}x{}) to {}",
        geometry.width,
        geometry.height,
        out.display()
    );
    Ok(())
}

fn draw_frame(surface: &mut FrameSurface, frame: u32) {
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let r = ((x + frame) * 8 % 256) as u8;
            let g = (y * 8 % 256) as u8;
            let b = ((x + y + frame) * 4 % 256) as u8;
            surface.set_pixel(x, y, argb(r, g, b));
        }
    }
}
