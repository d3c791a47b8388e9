//! In-memory model of a ProffieOS configuration.
//!
//! A [`ConfigDocument`] is owned by the caller and handed to the codec by
//! reference; nothing here is global.

mod array;
mod blade;
mod hardware;


pub use array::{ArrayValue, BladeArray, PresetConfig};
pub use blade::{
    BladeConfig, BladeType, LedColor, POWER_PIN_COUNT, PowerPins, STAR_SLOT_COUNT, StarLed,
    SubBladeRange,
};
pub use hardware::{BladeIdMode, BladeIdSettings, Board, ButtonRole, Prop};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Largest number of buttons a configuration can wire.
pub const MAX_BUTTONS: u8 = 3;

/// A single `#define NAME VALUE` carried through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Define {
    /// Macro name.
    pub name: String,

    /// Everything after the name, may be empty.
    #[serde(default)]
    pub value: String,
}

impl Define {
    /// Creates a define.
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Complete hardware and preset description of one saber.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigDocument {
    /// Board revision.
    pub board: Board,

    /// Expose the SD card as USB mass storage.
    pub mass_storage: bool,

    /// Enable WebUSB.
    pub web_usb: bool,

    /// `maxLedsPerStrip` override.
    pub max_leds_per_strip: Option<u32>,

    /// General defines in file order.
    pub defines: Vec<Define>,

    /// Selected prop.
    pub prop: Prop,

    /// Number of physical buttons, 1 to 3.
    pub num_buttons: u8,

    /// Blade detect / blade ID wiring.
    pub blade_id: BladeIdSettings,

    /// Blade arrays in file order.
    pub blade_arrays: Vec<BladeArray>,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            board: Board::default(),
            mass_storage: false,
            web_usb: false,
            max_leds_per_strip: None,
            defines: Vec::new(),
            prop: Prop::default(),
            num_buttons: 2,
            blade_id: BladeIdSettings::default(),
            blade_arrays: Vec::new(),
        }
    }
}

impl ConfigDocument {
    /// Looks up a blade array by name.
    pub fn array(&self, name: &str) -> Option<&BladeArray> {
        self.blade_arrays.iter().find(|array| array.name == name)
    }

    /// Looks up a blade array by name for modification.
    pub fn array_mut(&mut self, name: &str) -> Option<&mut BladeArray> {
        self.blade_arrays.iter_mut().find(|array| array.name == name)
    }

    /// Logical blade count of the first array, or zero when there is none.
    pub fn num_blades(&self) -> usize {
        self.blade_arrays
            .first()
            .map(BladeArray::logical_blade_count)
            .unwrap_or(0)
    }

    /// Button roles wired in this configuration.
    pub fn buttons(&self) -> impl Iterator<Item = ButtonRole> {
        let count = usize::from(self.num_buttons.clamp(1, MAX_BUTTONS));
        ButtonRole::ALL.into_iter().take(count)
    }
}
