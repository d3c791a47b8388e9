use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Proffieboard hardware revision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Board {
    /// Proffieboard V1
    V1,
    /// Proffieboard V2
    V2,
    /// Proffieboard V3
    #[default]
    V3,
}

impl Board {
    /// Board config header included at the top of the file.
    pub fn include_file(self) -> &'static str {
        match self {
            Board::V1 => "proffieboard_v1_config.h",
            Board::V2 => "proffieboard_v2_config.h",
            Board::V3 => "proffieboard_v3_config.h",
        }
    }

    /// Version tag searched for in an include path.
    pub fn tag(self) -> &'static str {
        match self {
            Board::V1 => "v1",
            Board::V2 => "v2",
            Board::V3 => "v3",
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Board::V1 => write!(f, "ProffieBoard V1"),
            Board::V2 => write!(f, "ProffieBoard V2"),
            Board::V3 => write!(f, "ProffieBoard V3"),
        }
    }
}

/// Prop file controlling button and gesture behaviour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Prop {
    /// Firmware default, no prop include.
    #[default]
    Default,
    /// `saber_sa22c_buttons.h`
    Sa22c,
    /// `saber_fett263_buttons.h`
    Fett263,
    /// `saber_BC_buttons.h`
    Bc,
    /// `saber_shtok_buttons.h`
    Shtok,
    /// `saber_caiwyn_buttons.h`
    Caiwyn,
}

impl Prop {
    /// Props in the order their tags are checked while decoding.
    pub const MATCH_ORDER: [Prop; 5] = [Prop::Sa22c, Prop::Fett263, Prop::Shtok, Prop::Bc, Prop::Caiwyn];

    /// Include path for this prop, if any.
    pub fn include_path(self) -> Option<&'static str> {
        match self {
            Prop::Default => None,
            Prop::Sa22c => Some("../props/saber_sa22c_buttons.h"),
            Prop::Fett263 => Some("../props/saber_fett263_buttons.h"),
            Prop::Bc => Some("../props/saber_BC_buttons.h"),
            Prop::Shtok => Some("../props/saber_shtok_buttons.h"),
            Prop::Caiwyn => Some("../props/saber_caiwyn_buttons.h"),
        }
    }

    /// Substring identifying this prop inside an include path.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Prop::Default => None,
            Prop::Sa22c => Some("sa22c"),
            Prop::Fett263 => Some("fett263"),
            Prop::Bc => Some("BC"),
            Prop::Shtok => Some("shtok"),
            Prop::Caiwyn => Some("caiwyn"),
        }
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prop::Default => write!(f, "Default"),
            Prop::Sa22c => write!(f, "SA22C"),
            Prop::Fett263 => write!(f, "Fett263"),
            Prop::Bc => write!(f, "BC"),
            Prop::Shtok => write!(f, "Shtok"),
            Prop::Caiwyn => write!(f, "Caiwyn"),
        }
    }
}

/// Logical role of a physical button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    /// Main activation button.
    Power,
    /// First auxiliary button.
    Aux,
    /// Second auxiliary button.
    Aux2,
}

impl ButtonRole {
    /// Roles in wiring order; the first `n` are used for `n` buttons.
    pub const ALL: [ButtonRole; 3] = [ButtonRole::Power, ButtonRole::Aux, ButtonRole::Aux2];

    /// Variable name prefix (`<Name>Button`).
    pub fn name(self) -> &'static str {
        match self {
            ButtonRole::Power => "Power",
            ButtonRole::Aux => "Aux",
            ButtonRole::Aux2 => "Aux2",
        }
    }

    /// Firmware button constant.
    pub fn constant(self) -> &'static str {
        match self {
            ButtonRole::Power => "BUTTON_POWER",
            ButtonRole::Aux => "BUTTON_AUX",
            ButtonRole::Aux2 => "BUTTON_AUX2",
        }
    }

    /// Board pin the button is wired to.
    pub fn pin(self) -> &'static str {
        match self {
            ButtonRole::Power => "powerButtonPin",
            ButtonRole::Aux => "auxPin",
            ButtonRole::Aux2 => "aux2Pin",
        }
    }

    /// Short tag shown in firmware logs.
    pub fn tag(self) -> &'static str {
        match self {
            ButtonRole::Power => "pow",
            ButtonRole::Aux => "aux",
            ButtonRole::Aux2 => "aux2",
        }
    }
}

/// How the blade ID resistor is measured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BladeIdMode {
    /// Plain snapshot of the ID pin.
    #[default]
    Snapshot,
    /// ID pin bridged to a second pin used as pullup.
    Bridged,
    /// External pullup resistor.
    External,
}

/// Blade detect and blade ID wiring.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct BladeIdSettings {
    /// Blade detect is wired.
    pub detect_enabled: bool,

    /// Pin used for blade detect.
    pub detect_pin: String,

    /// Blade ID is wired.
    pub id_enabled: bool,

    /// Pin used for blade ID.
    pub id_pin: String,

    /// Measurement mode.
    pub id_mode: BladeIdMode,

    /// Pullup pin for bridged mode.
    pub pullup_pin: String,

    /// Pullup resistance for external mode.
    pub pullup_resistance: u32,
}

impl Default for BladeIdSettings {
    fn default() -> Self {
        Self {
            detect_enabled: false,
            detect_pin: String::new(),
            id_enabled: false,
            id_pin: String::new(),
            id_mode: BladeIdMode::Snapshot,
            pullup_pin: String::new(),
            pullup_resistance: 33000,
        }
    }
}

impl BladeIdSettings {
    /// `BLADE_ID_CLASS` value for the current mode.
    pub fn id_class(&self) -> String {
        match self.id_mode {
            BladeIdMode::Snapshot => format!("SnapshotBladeID<{}>", self.id_pin),
            BladeIdMode::Bridged => {
                format!("BridgedPullupBladeID<{}, {}>", self.id_pin, self.pullup_pin)
            }
            BladeIdMode::External => {
                format!("ExternalPullupBladeID<{}, {}>", self.id_pin, self.pullup_resistance)
            }
        }
    }
}
