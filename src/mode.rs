//! The WS2812FX animation mode catalog.
//!
//! The numeric values are the firmware's mode table and must not be
//! renumbered. Modes 56..=59 are reserved for user-defined animations
//! compiled into the firmware.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A built-in WS2812FX animation pattern.
///
/// The firmware interprets the value; this side only selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FxMode {
    Static = 0,
    Blink = 1,
    Breath = 2,
    ColorWipe = 3,
    ColorWipeInv = 4,
    ColorWipeRev = 5,
    ColorWipeRevInv = 6,
    ColorWipeRandom = 7,
    RandomColor = 8,
    SingleDynamic = 9,
    MultiDynamic = 10,
    Rainbow = 11,
    RainbowCycle = 12,
    Scan = 13,
    DualScan = 14,
    Fade = 15,
    TheaterChase = 16,
    TheaterChaseRainbow = 17,
    RunningLights = 18,
    Twinkle = 19,
    TwinkleRandom = 20,
    TwinkleFade = 21,
    TwinkleFadeRandom = 22,
    Sparkle = 23,
    FlashSparkle = 24,
    HyperSparkle = 25,
    Strobe = 26,
    StrobeRainbow = 27,
    MultiStrobe = 28,
    BlinkRainbow = 29,
    ChaseWhite = 30,
    ChaseColor = 31,
    ChaseRandom = 32,
    ChaseRainbow = 33,
    ChaseFlash = 34,
    ChaseFlashRandom = 35,
    ChaseRainbowWhite = 36,
    ChaseBlackout = 37,
    ChaseBlackoutRainbow = 38,
    ColorSweepRandom = 39,
    RunningColor = 40,
    RunningRedBlue = 41,
    RunningRandom = 42,
    LarsonScanner = 43,
    Comet = 44,
    Fireworks = 45,
    FireworksRandom = 46,
    MerryChristmas = 47,
    FireFlicker = 48,
    FireFlickerSoft = 49,
    FireFlickerIntense = 50,
    CircusCombustus = 51,
    Halloween = 52,
    BicolorChase = 53,
    TricolorChase = 54,
    Icu = 55,
    Custom0 = 56,
    Custom1 = 57,
    Custom2 = 58,
    Custom3 = 59,
}

impl FxMode {
    /// Every catalog mode, indexed by its firmware id.
    pub const ALL: [FxMode; 60] = [
        FxMode::Static,
        FxMode::Blink,
        FxMode::Breath,
        FxMode::ColorWipe,
        FxMode::ColorWipeInv,
        FxMode::ColorWipeRev,
        FxMode::ColorWipeRevInv,
        FxMode::ColorWipeRandom,
        FxMode::RandomColor,
        FxMode::SingleDynamic,
        FxMode::MultiDynamic,
        FxMode::Rainbow,
        FxMode::RainbowCycle,
        FxMode::Scan,
        FxMode::DualScan,
        FxMode::Fade,
        FxMode::TheaterChase,
        FxMode::TheaterChaseRainbow,
        FxMode::RunningLights,
        FxMode::Twinkle,
        FxMode::TwinkleRandom,
        FxMode::TwinkleFade,
        FxMode::TwinkleFadeRandom,
        FxMode::Sparkle,
        FxMode::FlashSparkle,
        FxMode::HyperSparkle,
        FxMode::Strobe,
        FxMode::StrobeRainbow,
        FxMode::MultiStrobe,
        FxMode::BlinkRainbow,
        FxMode::ChaseWhite,
        FxMode::ChaseColor,
        FxMode::ChaseRandom,
        FxMode::ChaseRainbow,
        FxMode::ChaseFlash,
        FxMode::ChaseFlashRandom,
        FxMode::ChaseRainbowWhite,
        FxMode::ChaseBlackout,
        FxMode::ChaseBlackoutRainbow,
        FxMode::ColorSweepRandom,
        FxMode::RunningColor,
        FxMode::RunningRedBlue,
        FxMode::RunningRandom,
        FxMode::LarsonScanner,
        FxMode::Comet,
        FxMode::Fireworks,
        FxMode::FireworksRandom,
        FxMode::MerryChristmas,
        FxMode::FireFlicker,
        FxMode::FireFlickerSoft,
        FxMode::FireFlickerIntense,
        FxMode::CircusCombustus,
        FxMode::Halloween,
        FxMode::BicolorChase,
        FxMode::TricolorChase,
        FxMode::Icu,
        FxMode::Custom0,
        FxMode::Custom1,
        FxMode::Custom2,
        FxMode::Custom3,
    ];

    /// First id of the user-defined mode range.
    pub const CUSTOM_FIRST: u8 = 56;
    /// Last id of the user-defined mode range.
    pub const CUSTOM_LAST: u8 = 59;

    /// The firmware id of this mode.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a mode by its firmware id.
    ///
    /// This is the only way an arbitrary integer enters the catalog.
    pub fn from_id(id: u8) -> Option<FxMode> {
        Self::ALL.get(usize::from(id)).copied()
    }

    /// Whether this mode is in the user-defined range.
    pub fn is_custom(self) -> bool {
        (Self::CUSTOM_FIRST..=Self::CUSTOM_LAST).contains(&self.id())
    }

    /// Kebab-case name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            FxMode::Static => "static",
            FxMode::Blink => "blink",
            FxMode::Breath => "breath",
            FxMode::ColorWipe => "color-wipe",
            FxMode::ColorWipeInv => "color-wipe-inv",
            FxMode::ColorWipeRev => "color-wipe-rev",
            FxMode::ColorWipeRevInv => "color-wipe-rev-inv",
            FxMode::ColorWipeRandom => "color-wipe-random",
            FxMode::RandomColor => "random-color",
            FxMode::SingleDynamic => "single-dynamic",
            FxMode::MultiDynamic => "multi-dynamic",
            FxMode::Rainbow => "rainbow",
            FxMode::RainbowCycle => "rainbow-cycle",
            FxMode::Scan => "scan",
            FxMode::DualScan => "dual-scan",
            FxMode::Fade => "fade",
            FxMode::TheaterChase => "theater-chase",
            FxMode::TheaterChaseRainbow => "theater-chase-rainbow",
            FxMode::RunningLights => "running-lights",
            FxMode::Twinkle => "twinkle",
            FxMode::TwinkleRandom => "twinkle-random",
            FxMode::TwinkleFade => "twinkle-fade",
            FxMode::TwinkleFadeRandom => "twinkle-fade-random",
            FxMode::Sparkle => "sparkle",
            FxMode::FlashSparkle => "flash-sparkle",
            FxMode::HyperSparkle => "hyper-sparkle",
            FxMode::Strobe => "strobe",
            FxMode::StrobeRainbow => "strobe-rainbow",
            FxMode::MultiStrobe => "multi-strobe",
            FxMode::BlinkRainbow => "blink-rainbow",
            FxMode::ChaseWhite => "chase-white",
            FxMode::ChaseColor => "chase-color",
            FxMode::ChaseRandom => "chase-random",
            FxMode::ChaseRainbow => "chase-rainbow",
            FxMode::ChaseFlash => "chase-flash",
            FxMode::ChaseFlashRandom => "chase-flash-random",
            FxMode::ChaseRainbowWhite => "chase-rainbow-white",
            FxMode::ChaseBlackout => "chase-blackout",
            FxMode::ChaseBlackoutRainbow => "chase-blackout-rainbow",
            FxMode::ColorSweepRandom => "color-sweep-random",
            FxMode::RunningColor => "running-color",
            FxMode::RunningRedBlue => "running-red-blue",
            FxMode::RunningRandom => "running-random",
            FxMode::LarsonScanner => "larson-scanner",
            FxMode::Comet => "comet",
            FxMode::Fireworks => "fireworks",
            FxMode::FireworksRandom => "fireworks-random",
            FxMode::MerryChristmas => "merry-christmas",
            FxMode::FireFlicker => "fire-flicker",
            FxMode::FireFlickerSoft => "fire-flicker-soft",
            FxMode::FireFlickerIntense => "fire-flicker-intense",
            FxMode::CircusCombustus => "circus-combustus",
            FxMode::Halloween => "halloween",
            FxMode::BicolorChase => "bicolor-chase",
            FxMode::TricolorChase => "tricolor-chase",
            FxMode::Icu => "icu",
            FxMode::Custom0 => "custom-0",
            FxMode::Custom1 => "custom-1",
            FxMode::Custom2 => "custom-2",
            FxMode::Custom3 => "custom-3",
        }
    }
}

impl fmt::Display for FxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FxMode {
    type Err = Error;

    /// Accepts a catalog name (`rainbow`) or a bare firmware id (`11`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<u8>() {
            return FxMode::from_id(id).ok_or_else(|| Error::UnknownMode(s.to_string()));
        }
        FxMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}
