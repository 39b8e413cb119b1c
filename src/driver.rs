//! The NeoPixel strip driver.

use log::debug;

use crate::mode::FxMode;
use crate::protocol::sysex::{MAX_U14, MAX_U28};
use crate::protocol::ws2812fx::{
    build_brightness_frame, build_color_frame, build_config_frame, build_mode_cycle_frame,
    build_mode_frame, build_pixel_frame, build_shift_frame, build_start_frame, build_stop_frame,
    build_strip_frame,
};
use crate::transport::SysexTransport;
use crate::Error;

/// Driver for a WS2812FX strip behind a Firmata sysex channel.
///
/// Every operation encodes one command frame and hands it to the transport:
/// no buffering, no retries, no waiting for the firmware. Operations do not
/// require [`set_config`](NeopixelDriver::set_config) to have been sent
/// first; whether the firmware needs a configuration before painting is its
/// own concern.
///
/// Colors are packed RGB (`0x00RRGGBB`); only the low 28 bits fit the wire
/// encoding, so values above [`MAX_U28`] are rejected rather than silently
/// losing their top bits. Pixel indexes and counts are limited to
/// [`MAX_U14`] for the same reason.
pub struct NeopixelDriver<T> {
    transport: T,
    pin: u8,
    pixel_count: u16,
}

impl<T: SysexTransport> NeopixelDriver<T> {
    /// Create a driver for a strip of `pixel_count` pixels on data pin `pin`.
    ///
    /// Nothing is sent until the first operation.
    pub fn new(transport: T, pin: u8, pixel_count: u16) -> Result<Self, Error> {
        if pixel_count > MAX_U14 {
            return Err(Error::PixelOutOfRange(pixel_count));
        }
        Ok(NeopixelDriver {
            transport,
            pin,
            pixel_count,
        })
    }

    /// Data pin configured at construction.
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Pixel count configured at construction.
    pub fn pixel_count(&self) -> u16 {
        self.pixel_count
    }

    /// Send the strip configuration (pin and pixel count).
    ///
    /// Safe to re-send at any time to resynchronize the firmware.
    pub fn set_config(&mut self) -> Result<(), Error> {
        debug!(
            "configuring strip: pin {}, {} pixels",
            self.pin, self.pixel_count
        );
        self.transport
            .send_sysex(&build_config_frame(self.pin, self.pixel_count))
    }

    /// Set the global brightness, 0 (off) to 255.
    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), Error> {
        self.transport
            .send_sysex(&build_brightness_frame(brightness))
    }

    /// Set the animation color for the whole strip.
    pub fn set_color(&mut self, color: u32) -> Result<(), Error> {
        if color > MAX_U28 {
            return Err(Error::ColorOutOfRange(color));
        }
        self.transport.send_sysex(&build_color_frame(color))
    }

    /// Color a single pixel.
    pub fn set_pixel(&mut self, index: u16, color: u32) -> Result<(), Error> {
        if index > MAX_U14 {
            return Err(Error::PixelOutOfRange(index));
        }
        if color > MAX_U28 {
            return Err(Error::ColorOutOfRange(color));
        }
        self.transport.send_sysex(&build_pixel_frame(index, color))
    }

    /// Paint every pixel directly, bypassing the animation color.
    pub fn set_strip(&mut self, color: u32) -> Result<(), Error> {
        if color > MAX_U28 {
            return Err(Error::ColorOutOfRange(color));
        }
        self.transport.send_sysex(&build_strip_frame(color))
    }

    /// Rotate the strip contents by `amount` pixels.
    pub fn shift(&mut self, amount: u16) -> Result<(), Error> {
        if amount > MAX_U14 {
            return Err(Error::PixelOutOfRange(amount));
        }
        self.transport.send_sysex(&build_shift_frame(amount))
    }

    /// Select an animation mode from the catalog.
    pub fn set_mode(&mut self, mode: FxMode) -> Result<(), Error> {
        debug!("selecting mode {} ({})", mode.id(), mode);
        self.transport.send_sysex(&build_mode_frame(mode.id()))
    }

    /// Let the firmware pick the next mode itself.
    pub fn mode_cycle(&mut self) -> Result<(), Error> {
        self.transport.send_sysex(&build_mode_cycle_frame())
    }

    /// Start the animation.
    pub fn start(&mut self) -> Result<(), Error> {
        self.transport.send_sysex(&build_start_frame())
    }

    /// Stop the animation and blank the strip.
    pub fn stop(&mut self) -> Result<(), Error> {
        self.transport.send_sysex(&build_stop_frame())
    }

    /// Give the transport back, consuming the driver.
    pub fn into_transport(self) -> T {
        self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Transport that records payloads, or fails every send on demand.
    struct MockTransport {
        sent: Vec<Vec<u8>>,
        fail: bool,
    }

    impl MockTransport {
        fn new() -> Self {
            MockTransport {
                sent: Vec::new(),
                fail: false,
            }
        }

        fn failing() -> Self {
            MockTransport {
                sent: Vec::new(),
                fail: true,
            }
        }
    }

    impl SysexTransport for MockTransport {
        fn send_sysex(&mut self, payload: &[u8]) -> Result<(), Error> {
            if self.fail {
                return Err(Error::Transport(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    "port unplugged",
                )));
            }
            self.sent.push(payload.to_vec());
            Ok(())
        }
    }

    fn driver() -> NeopixelDriver<MockTransport> {
        NeopixelDriver::new(MockTransport::new(), 5, 7).unwrap()
    }

    #[test]
    fn test_operations_emit_expected_payloads() {
        let mut drv = driver();
        drv.set_config().unwrap();
        drv.set_brightness(200).unwrap();
        drv.set_color(0x00FF00).unwrap();
        drv.set_pixel(300, 0x00FF00).unwrap();
        drv.set_strip(0x0000FF).unwrap();
        drv.shift(1).unwrap();
        drv.set_mode(FxMode::Rainbow).unwrap();
        drv.mode_cycle().unwrap();
        drv.start().unwrap();
        drv.stop().unwrap();

        let sent = drv.into_transport().sent;
        assert_eq!(
            sent,
            vec![
                vec![0x51, 0x09, 5, 7, 0],
                vec![0x51, 0x00, 200],
                vec![0x51, 0x01, 0, 126, 3, 0],
                vec![0x51, 0x02, 44, 2, 0, 126, 3, 0],
                vec![0x51, 0x03, 127, 1, 0, 0],
                vec![0x51, 0x04, 1, 0],
                vec![0x51, 0x05, 11],
                vec![0x51, 0x06],
                vec![0x51, 0x07],
                vec![0x51, 0x08],
            ]
        );
    }

    #[test]
    fn test_one_send_per_operation() {
        let mut drv = driver();
        drv.set_brightness(10).unwrap();
        drv.set_brightness(10).unwrap();
        assert_eq!(drv.into_transport().sent.len(), 2);
    }

    #[test]
    fn test_operations_work_without_prior_config() {
        // The encoder holds no "configured yet" state.
        let mut drv = driver();
        drv.set_mode(FxMode::Blink).unwrap();
        drv.start().unwrap();
        assert_eq!(drv.into_transport().sent.len(), 2);
    }

    #[test]
    fn test_transport_failure_propagates_with_cause() {
        let mut drv = NeopixelDriver::new(MockTransport::failing(), 5, 7).unwrap();

        for result in [
            drv.set_config(),
            drv.set_brightness(1),
            drv.set_color(1),
            drv.set_pixel(0, 1),
            drv.set_strip(1),
            drv.shift(1),
            drv.set_mode(FxMode::Static),
            drv.mode_cycle(),
            drv.start(),
            drv.stop(),
        ] {
            match result {
                Err(Error::Transport(err)) => {
                    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
                }
                other => panic!("expected transport error, got {:?}", other.err()),
            }
        }
    }

    #[test]
    fn test_out_of_range_operands_are_rejected_before_sending() {
        let mut drv = driver();

        assert!(matches!(
            drv.set_pixel(0x4000, 0),
            Err(Error::PixelOutOfRange(0x4000))
        ));
        assert!(matches!(
            drv.set_color(0x1000_0000),
            Err(Error::ColorOutOfRange(0x1000_0000))
        ));
        assert!(matches!(
            drv.set_pixel(0, 0xFFFF_FFFF),
            Err(Error::ColorOutOfRange(_))
        ));
        assert!(matches!(
            drv.set_strip(0x1000_0000),
            Err(Error::ColorOutOfRange(_))
        ));
        assert!(matches!(
            drv.shift(0x8000),
            Err(Error::PixelOutOfRange(_))
        ));

        // Nothing reached the wire.
        assert!(drv.into_transport().sent.is_empty());
    }

    #[test]
    fn test_pixel_count_validated_at_construction() {
        assert!(matches!(
            NeopixelDriver::new(MockTransport::new(), 5, 0x4001),
            Err(Error::PixelOutOfRange(0x4001))
        ));
        assert!(NeopixelDriver::new(MockTransport::new(), 5, MAX_U14).is_ok());
    }
}
