use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of blade power pins a Proffieboard exposes.
pub const POWER_PIN_COUNT: usize = 6;

/// Number of LED slots in a `SimpleBladePtr` declaration.
pub const STAR_SLOT_COUNT: usize = 4;

/// Hardware family of a single blade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BladeType {
    /// Addressable WS281X strip with three colour channels.
    PixelRgb,

    /// Addressable WS281X strip with an additional white channel.
    PixelRgbw,

    /// In-hilt star with three LED dies.
    TriStar,

    /// In-hilt star with four LED dies.
    QuadStar,

    /// Single white LED.
    SingleLed,

    /// Placeholder for a blade that has not been configured yet.
    #[default]
    Unset,
}

impl BladeType {
    /// Whether this blade is driven through `WS281XBladePtr`.
    pub fn is_pixel(self) -> bool {
        matches!(self, BladeType::PixelRgb | BladeType::PixelRgbw)
    }

    /// Whether this blade is driven through a multi-die `SimpleBladePtr`.
    pub fn is_star(self) -> bool {
        matches!(self, BladeType::TriStar | BladeType::QuadStar)
    }
}

impl fmt::Display for BladeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BladeType::PixelRgb => write!(f, "WS281X (RGB)"),
            BladeType::PixelRgbw => write!(f, "WS281X (RGBW)"),
            BladeType::TriStar => write!(f, "Tri-Star Star"),
            BladeType::QuadStar => write!(f, "Quad-Star Star"),
            BladeType::SingleLed => write!(f, "Single Color"),
            BladeType::Unset => write!(f, "Unset"),
        }
    }
}

/// Die colour of a Cree XP-E2 LED template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub enum LedColor {
    /// `CreeXPE2RedOrangeTemplate`
    RedOrange,
    /// `CreeXPE2AmberTemplate`
    Amber,
    /// `CreeXPE2WhiteTemplate`
    White,
    /// `CreeXPE2RedTemplate`
    Red,
    /// `CreeXPE2GreenTemplate`
    Green,
    /// `CreeXPE2BlueTemplate`
    Blue,
}

impl LedColor {
    /// Colours in matching order. `RedOrange` must come before `Red`.
    pub const MATCH_ORDER: [LedColor; 6] = [
        LedColor::RedOrange,
        LedColor::Amber,
        LedColor::White,
        LedColor::Red,
        LedColor::Green,
        LedColor::Blue,
    ];

    /// Name used inside the template identifier.
    pub fn template_name(self) -> &'static str {
        match self {
            LedColor::RedOrange => "RedOrange",
            LedColor::Amber => "Amber",
            LedColor::White => "White",
            LedColor::Red => "Red",
            LedColor::Green => "Green",
            LedColor::Blue => "Blue",
        }
    }

    /// Finds the colour named anywhere inside `text`.
    pub fn find_in(text: &str) -> Option<LedColor> {
        Self::MATCH_ORDER
            .into_iter()
            .find(|color| text.contains(color.template_name()))
    }
}

/// One populated LED slot of a star blade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StarLed {
    /// Die colour.
    pub color: LedColor,

    /// Series resistance in milliohms, as passed to the template.
    pub resistance: u32,
}

impl StarLed {
    /// Creates a star LED descriptor.
    pub fn new(color: LedColor, resistance: u32) -> Self {
        Self { color, resistance }
    }
}

/// The six blade power-pin flags, indexed 0..6 for `bladePowerPin1..6`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct PowerPins(pub [bool; POWER_PIN_COUNT]);

impl PowerPins {
    /// Builds a flag set from 1-based pin numbers.
    pub fn from_numbers(numbers: &[usize]) -> Self {
        let mut pins = Self::default();
        for &number in numbers {
            pins.set(number, true);
        }
        pins
    }

    /// Sets the flag for 1-based pin `number`; out-of-range numbers are ignored.
    pub fn set(&mut self, number: usize, enabled: bool) {
        if let Some(flag) = number
            .checked_sub(1)
            .and_then(|index| self.0.get_mut(index))
        {
            *flag = enabled;
        }
    }

    /// Whether 1-based pin `number` is asserted.
    pub fn is_set(&self, number: usize) -> bool {
        number
            .checked_sub(1)
            .and_then(|index| self.0.get(index))
            .copied()
            .unwrap_or(false)
    }

    /// Asserted pin numbers in search order.
    pub fn enabled(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, enabled)| **enabled)
            .map(|(index, _)| index + 1)
    }

    /// Firmware identifier for 1-based pin `number`.
    pub fn identifier(number: usize) -> String {
        format!("bladePowerPin{number}")
    }
}

/// Pixel range addressed by one sub-blade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubBladeRange {
    /// First pixel of the range.
    pub start: u32,

    /// Last pixel of the range.
    pub end: u32,
}

/// Hardware description of one physical blade.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct BladeConfig {
    /// Hardware family.
    pub kind: BladeType,

    /// Data pin for pixel blades (e.g. `bladePin`).
    pub data_pin: String,

    /// Pixel count for pixel blades.
    pub num_pixels: u32,

    /// Channel order, upper case (e.g. `GRB`, `GRBW`).
    pub color_order: String,

    /// Drive the white channel together with the colour channels.
    pub rgb_with_white: bool,

    /// Power pins switched on for this blade.
    pub power_pins: PowerPins,

    /// LED slots of a star blade; `None` is an unpopulated slot.
    #[serde(with = "led_slots")]
    #[schemars(with = "[led_slots::SlotRepr; STAR_SLOT_COUNT]")]
    pub leds: [Option<StarLed>; STAR_SLOT_COUNT],

    /// Sub-blade ranges. Empty for an ordinary blade.
    pub sub_blades: Vec<SubBladeRange>,

    /// Use `SubBladeWithStride` rather than `SubBlade`.
    pub sub_blade_with_stride: bool,
}

impl Default for BladeConfig {
    fn default() -> Self {
        Self {
            kind: BladeType::Unset,
            data_pin: "bladePin".to_string(),
            num_pixels: 0,
            color_order: "GRB".to_string(),
            rgb_with_white: false,
            power_pins: PowerPins::default(),
            leds: [None; STAR_SLOT_COUNT],
            sub_blades: Vec::new(),
            sub_blade_with_stride: false,
        }
    }
}

impl BladeConfig {
    /// Creates a pixel strip blade.
    pub fn pixel(kind: BladeType, num_pixels: u32, data_pin: &str, color_order: &str) -> Self {
        Self {
            kind,
            num_pixels,
            data_pin: data_pin.to_string(),
            color_order: color_order.to_uppercase(),
            ..Self::default()
        }
    }

    /// Creates a star blade from its LED slots.
    pub fn star(kind: BladeType, leds: [Option<StarLed>; STAR_SLOT_COUNT]) -> Self {
        Self {
            kind,
            leds,
            ..Self::default()
        }
    }

    /// Whether this blade is split into sub-blades.
    pub fn is_sub_blade(&self) -> bool {
        !self.sub_blades.is_empty()
    }

    /// Number of independently styled slots this blade provides.
    pub fn logical_count(&self) -> usize {
        if self.is_sub_blade() {
            self.sub_blades.len()
        } else {
            1
        }
    }

    /// Number of populated LED slots.
    pub fn populated_leds(&self) -> usize {
        self.leds.iter().filter(|led| led.is_some()).count()
    }
}

/// TOML has no null, so an empty slot is written as a table without a colour.
mod led_slots {
    use schemars::JsonSchema;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{LedColor, STAR_SLOT_COUNT, StarLed};

    #[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema)]
    pub(super) struct SlotRepr {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<LedColor>,
        #[serde(default)]
        resistance: u32,
    }

    pub(super) fn serialize<S: Serializer>(
        slots: &[Option<StarLed>; STAR_SLOT_COUNT],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let repr = slots.map(|slot| SlotRepr {
            color: slot.map(|led| led.color),
            resistance: slot.map(|led| led.resistance).unwrap_or_default(),
        });
        repr.serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[Option<StarLed>; STAR_SLOT_COUNT], D::Error> {
        let repr = <[SlotRepr; STAR_SLOT_COUNT]>::deserialize(deserializer)?;
        Ok(repr.map(|slot| slot.color.map(|color| StarLed::new(color, slot.resistance))))
    }
}
