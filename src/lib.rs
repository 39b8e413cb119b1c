//! Driver for WS2812FX NeoPixel strips behind a Firmata sysex channel.
//!
//! High-level strip commands (brightness, color, animation mode) are encoded
//! into 7-bit-clean sysex payloads and written through a [`SysexTransport`],
//! either a local serial port or a TCP Firmata bridge.
//!
//! ```no_run
//! use ws2812fx_firmata::{FxMode, NeopixelDriver, SerialTransport};
//!
//! fn main() -> Result<(), ws2812fx_firmata::Error> {
//!     let transport = SerialTransport::open("/dev/ttyUSB0", 57600)?;
//!     let mut strip = NeopixelDriver::new(transport, 5, 30)?;
//!
//!     strip.set_config()?;
//!     strip.set_brightness(128)?;
//!     strip.set_color(0x00FF00)?;
//!     strip.set_mode(FxMode::Rainbow)?;
//!     strip.start()?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::protocol::sysex::{MAX_U14, MAX_U28};

pub mod config;
pub mod driver;
pub mod mode;
pub mod protocol;
pub mod transport;

pub use driver::NeopixelDriver;
pub use mode::FxMode;
pub use transport::{SerialTransport, SysexTransport, TcpTransport};

/// Errors reported by the driver and its transports.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying connection failed to carry a frame. The source error is
    /// preserved unchanged; no retry is attempted at this layer.
    #[error("transport send failed: {0}")]
    Transport(#[from] std::io::Error),

    /// The serial port could not be opened or configured.
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// A pixel index, pixel count or shift amount exceeds the 14 bits that
    /// survive the two-byte 7-bit split.
    #[error("pixel value {0} exceeds the 14-bit operand limit ({})", MAX_U14)]
    PixelOutOfRange(u16),

    /// A color exceeds the 28 bits that survive the four-byte 7-bit split.
    #[error("color {0:#010x} exceeds the 28-bit operand limit ({:#010x})", MAX_U28)]
    ColorOutOfRange(u32),

    /// A mode name or number that is not part of the WS2812FX catalog.
    #[error("unknown animation mode: {0}")]
    UnknownMode(String),
}
