//! WS2812FX command frames for the Firmata sysex channel.
//!
//! Opcode numbering follows the WS2812FX firmware sketch. An older driver
//! generation used an incompatible numbering for the same operations; that
//! table is intentionally not supported here.

use crate::protocol::sysex::{encode_u14, encode_u28};

/// Sysex sub-command identifying the NeoPixel extension.
pub const NEOPIXEL_CMD: u8 = 0x51;

pub const NEOPIXEL_SET_BRIGHTNESS: u8 = 0x00;
pub const NEOPIXEL_SET_COLOR: u8 = 0x01;
pub const NEOPIXEL_SET_PIXEL: u8 = 0x02;
pub const NEOPIXEL_SET_STRIP: u8 = 0x03;
pub const NEOPIXEL_SHIFT: u8 = 0x04;
pub const NEOPIXEL_SET_MODE: u8 = 0x05;
pub const NEOPIXEL_MODE_CYCLE: u8 = 0x06;
pub const NEOPIXEL_START: u8 = 0x07;
pub const NEOPIXEL_STOP: u8 = 0x08;
pub const NEOPIXEL_CONFIG: u8 = 0x09;

/// Build a strip configuration frame (data pin and pixel count).
pub fn build_config_frame(pin: u8, pixel_count: u16) -> Vec<u8> {
    let mut frame = vec![NEOPIXEL_CMD, NEOPIXEL_CONFIG, pin];
    frame.extend_from_slice(&encode_u14(pixel_count));
    frame
}

/// Build a global brightness frame.
pub fn build_brightness_frame(brightness: u8) -> Vec<u8> {
    vec![NEOPIXEL_CMD, NEOPIXEL_SET_BRIGHTNESS, brightness]
}

/// Build a frame setting the animation color for the whole strip.
pub fn build_color_frame(color: u32) -> Vec<u8> {
    let mut frame = vec![NEOPIXEL_CMD, NEOPIXEL_SET_COLOR];
    frame.extend_from_slice(&encode_u28(color));
    frame
}

/// Build a frame coloring a single pixel.
pub fn build_pixel_frame(index: u16, color: u32) -> Vec<u8> {
    let mut frame = vec![NEOPIXEL_CMD, NEOPIXEL_SET_PIXEL];
    frame.extend_from_slice(&encode_u14(index));
    frame.extend_from_slice(&encode_u28(color));
    frame
}

/// Build a frame painting every pixel directly, bypassing the animation color.
pub fn build_strip_frame(color: u32) -> Vec<u8> {
    let mut frame = vec![NEOPIXEL_CMD, NEOPIXEL_SET_STRIP];
    frame.extend_from_slice(&encode_u28(color));
    frame
}

/// Build a frame rotating the strip contents by `amount` pixels.
pub fn build_shift_frame(amount: u16) -> Vec<u8> {
    let mut frame = vec![NEOPIXEL_CMD, NEOPIXEL_SHIFT];
    frame.extend_from_slice(&encode_u14(amount));
    frame
}

/// Build an animation mode selection frame.
pub fn build_mode_frame(mode: u8) -> Vec<u8> {
    vec![NEOPIXEL_CMD, NEOPIXEL_SET_MODE, mode]
}

/// Build a frame advancing the firmware to a random catalog mode.
pub fn build_mode_cycle_frame() -> Vec<u8> {
    vec![NEOPIXEL_CMD, NEOPIXEL_MODE_CYCLE]
}

/// Build a frame starting the animation.
pub fn build_start_frame() -> Vec<u8> {
    vec![NEOPIXEL_CMD, NEOPIXEL_START]
}

/// Build a frame stopping the animation and blanking the strip.
pub fn build_stop_frame() -> Vec<u8> {
    vec![NEOPIXEL_CMD, NEOPIXEL_STOP]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_frame() {
        assert_eq!(build_config_frame(5, 7), vec![0x51, 0x09, 5, 7, 0]);
        assert_eq!(build_config_frame(12, 300), vec![0x51, 0x09, 12, 44, 2]);
    }

    #[test]
    fn test_brightness_frame() {
        assert_eq!(build_brightness_frame(200), vec![0x51, 0x00, 200]);
        assert_eq!(build_brightness_frame(0), vec![0x51, 0x00, 0]);
    }

    #[test]
    fn test_color_frame() {
        // Green, 0x00FF00: groups 0, 126, 3, 0
        assert_eq!(build_color_frame(0x00FF00), vec![0x51, 0x01, 0, 126, 3, 0]);
        assert_eq!(build_color_frame(0), vec![0x51, 0x01, 0, 0, 0, 0]);
    }

    #[test]
    fn test_pixel_frame() {
        assert_eq!(
            build_pixel_frame(300, 0x00FF00),
            vec![0x51, 0x02, 44, 2, 0, 126, 3, 0]
        );
        assert_eq!(
            build_pixel_frame(0, 0x0FFF_FFFF),
            vec![0x51, 0x02, 0, 0, 127, 127, 127, 127]
        );
    }

    #[test]
    fn test_strip_frame() {
        assert_eq!(build_strip_frame(0xFF0000), vec![0x51, 0x03, 0, 0, 124, 7]);
    }

    #[test]
    fn test_shift_frame() {
        assert_eq!(build_shift_frame(1), vec![0x51, 0x04, 1, 0]);
        assert_eq!(build_shift_frame(130), vec![0x51, 0x04, 2, 1]);
    }

    #[test]
    fn test_bare_frames() {
        assert_eq!(build_mode_frame(11), vec![0x51, 0x05, 11]);
        assert_eq!(build_mode_cycle_frame(), vec![0x51, 0x06]);
        assert_eq!(build_start_frame(), vec![0x51, 0x07]);
        assert_eq!(build_stop_frame(), vec![0x51, 0x08]);
    }
}
