//! Hardware sink boundary — trait, construction, and the recording test
//! double.
//!
//! The physical driver is opaque to this crate: everything downstream of
//! [`PixelSink::set_pixel`] (PWM timing, GPIO bit-banging, multiplexing)
//! belongs to the bound driver.

use std::fmt;

use crate::options::BridgeOptions;

// ── Error type ──

/// Sink-level errors.
#[derive(Debug)]
pub enum SinkError {
    CreateFailed(String),
    WriteFailed(String),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::CreateFailed(e) => write!(f, "Failed to create matrix: {e}"),
            SinkError::WriteFailed(e) => write!(f, "Pixel write failed: {e}"),
        }
    }
}

impl std::error::Error for SinkError {}

pub type Result<T> = std::result::Result<T, SinkError>;

// ── Trait ──

/// One discrete color write per addressable pixel.
pub trait PixelSink {
    fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()>;
}

#[cfg(feature = "hardware")]
pub mod hardware;

/// Construct the physical sink from the topology configuration.
///
/// Returns `None` when construction fails (unsupported parameters, missing
/// privileges) or when hardware support is not compiled in; the failure is
/// logged and the bridge degrades instead of aborting.
pub fn create_sink(options: &BridgeOptions) -> Option<Box<dyn PixelSink>> {
    #[cfg(feature = "hardware")]
    {
        match hardware::MatrixSink::open(options) {
            Ok(sink) => Some(Box::new(sink)),
            Err(e) => {
                log::warn!("could not create matrix: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hardware"))]
    {
        let _ = options;
        log::warn!("could not create matrix: hardware support not compiled in");
        None
    }
}

// ── Test double ──

pub mod mock {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::{PixelSink, Result, SinkError};

    /// In-memory sink for unit tests. Records every `set_pixel` call in
    /// order; `fail_writes` injects a `WriteFailed` error.
    ///
    /// Clones share the same recording buffer, so a test can keep a handle
    /// after moving the sink into a bridge.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingSink {
        /// Recorded writes in call order: (x, y, r, g, b).
        pub calls: Rc<RefCell<Vec<(u32, u32, u8, u8, u8)>>>,
        /// If set, `set_pixel` returns an error.
        pub fail_writes: Rc<Cell<bool>>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of recorded writes.
        pub fn len(&self) -> usize {
            self.calls.borrow().len()
        }

        pub fn is_empty(&self) -> bool {
            self.calls.borrow().is_empty()
        }

        /// Snapshot of the recorded writes.
        pub fn snapshot(&self) -> Vec<(u32, u32, u8, u8, u8)> {
            self.calls.borrow().clone()
        }
    }

    impl PixelSink for RecordingSink {
        fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
            if self.fail_writes.get() {
                return Err(SinkError::WriteFailed(
                    "mock: write failure injected".into(),
                ));
            }
            self.calls.borrow_mut().push((x, y, r, g, b));
            Ok(())
        }
    }
}
