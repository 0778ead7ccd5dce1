//! Bridge composition — configuration, frame surface and sink handle in
//! one object.
//!
//! The three boundaries (topology configuration, frame surface, pixel
//! sink) are composed explicitly here; the surrounding integration talks
//! to the bridge only through `resize`, `flush` and `screen_geometry`.
//! Single-threaded model: `resize` and `flush` are never concurrent.

use std::path::PathBuf;

use crate::dump;
use crate::error::Result;
use crate::flush;
use crate::geometry::{Rect, ScreenGeometry};
use crate::options::BridgeOptions;
use crate::sink::{self, PixelSink};
use crate::surface::FrameSurface;

/// The bridge owns the sink handle and the frame surface for its lifetime.
///
/// Without a sink the bridge is degraded, never broken: `flush` either
/// dumps the surface to numbered PNG files (when a dump directory is
/// configured) or does nothing.
pub struct MatrixBridge {
    options: BridgeOptions,
    surface: FrameSurface,
    sink: Option<Box<dyn PixelSink>>,
    dump_dir: Option<PathBuf>,
    dump_index: u32,
}

impl MatrixBridge {
    /// Build the bridge, constructing the physical sink from the topology.
    ///
    /// Sink construction failure is logged inside [`sink::create_sink`] and
    /// leaves the bridge in no-op mode.
    pub fn new(options: BridgeOptions) -> Self {
        let sink = sink::create_sink(&options);
        Self::assemble(options, sink, None)
    }

    /// Build the bridge around a caller-supplied sink (tests, embedding).
    pub fn with_sink(options: BridgeOptions, sink: Box<dyn PixelSink>) -> Self {
        Self::assemble(options, Some(sink), None)
    }

    /// Build the bridge in diagnostic dump mode: each flush serializes the
    /// whole surface to `outputNNNN.png` under `dir`.
    pub fn with_dump_dir(options: BridgeOptions, dir: impl Into<PathBuf>) -> Self {
        Self::assemble(options, None, Some(dir.into()))
    }

    fn assemble(
        options: BridgeOptions,
        sink: Option<Box<dyn PixelSink>>,
        dump_dir: Option<PathBuf>,
    ) -> Self {
        MatrixBridge {
            options,
            surface: FrameSurface::new(),
            sink,
            dump_dir,
            dump_index: 0,
        }
    }

    pub fn options(&self) -> &BridgeOptions {
        &self.options
    }

    /// True when a physical (or injected) sink is attached.
    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// The pixel extent derived from the held configuration.
    pub fn screen_geometry(&self) -> ScreenGeometry {
        ScreenGeometry::from_options(&self.options.matrix)
    }

    /// Resize the frame surface; no-op when the size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
    }

    pub fn surface(&self) -> &FrameSurface {
        &self.surface
    }

    /// Mutation access for the upstream renderer, between flushes.
    pub fn surface_mut(&mut self) -> &mut FrameSurface {
        &mut self.surface
    }

    /// Propagate the dirty regions to the sink.
    ///
    /// With a sink: one write per in-bounds pixel per region (row-major),
    /// returning the write count; a write failure surfaces as `Err` but
    /// leaves the bridge usable. Without a sink: dump mode writes one PNG
    /// of the whole surface per call (counter starts at `output0000.png`
    /// and advances only on success); otherwise a safe no-op returning 0.
    pub fn flush(&mut self, regions: &[Rect]) -> Result<u64> {
        if let Some(sink) = self.sink.as_deref_mut() {
            return Ok(flush::flush_regions(regions, &self.surface, sink)?);
        }

        if let Some(dir) = &self.dump_dir {
            if regions.iter().all(Rect::is_empty) || self.surface.is_empty() {
                return Ok(0);
            }
            let path = dir.join(dump::frame_file_name(self.dump_index));
            dump::write_surface_png(&self.surface, &path)?;
            self.dump_index += 1;
            return Ok(u64::from(self.surface.width()) * u64::from(self.surface.height()));
        }

        Ok(0)
    }
}
