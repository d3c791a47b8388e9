//! Writes a [`ConfigDocument`] as a ProffieOS configuration header.

use std::fmt::{self, Write};

use tracing::{debug, info, instrument};

use crate::{
    Result,
    core::ProffieError,
    model::{
        ArrayValue, BladeArray, BladeConfig, BladeType, ConfigDocument, POWER_PIN_COUNT,
        PowerPins, STAR_SLOT_COUNT,
    },
};

use super::{Section, precheck};

/// Placeholder for an unpopulated LED slot.
const NO_LED: &str = "NoLED";
/// Placeholder for an unused power pin slot.
const NO_PIN: &str = "-1";

/// Output options that do not change the decoded document.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Emit the generated-by comment block.
    pub write_header: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self { write_header: true }
    }
}

/// Encodes `document` with default options.
///
/// # Errors
///
/// Returns [`ProffieError::Precondition`] if the document fails [`precheck::check`].
pub fn encode(document: &ConfigDocument) -> Result<String> {
    encode_with(document, &EncodeOptions::default())
}

/// Encodes `document` after checking it.
///
/// # Errors
///
/// Returns [`ProffieError::Precondition`] if the document fails [`precheck::check`].
#[instrument(skip_all, fields(arrays = document.blade_arrays.len()))]
pub fn encode_with(document: &ConfigDocument, options: &EncodeOptions) -> Result<String> {
    precheck::check(document)?;

    let mut out = String::new();
    write_document(&mut out, document, options)
        .map_err(|e| ProffieError::Serialization(e.to_string()))?;

    info!(bytes = out.len(), "Encoded configuration");
    Ok(out)
}

fn write_document(out: &mut String, document: &ConfigDocument, options: &EncodeOptions) -> fmt::Result {
    if options.write_header {
        writeln!(out, "/*")?;
        writeln!(
            out,
            "This configuration file was generated by proffie-config {}.",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(out, "*/")?;
        writeln!(out)?;
    }

    write_section(out, Section::Top, |out| write_top(out, document))?;
    write_section(out, Section::Prop, |out| write_prop(out, document))?;
    write_section(out, Section::Presets, |out| {
        write_preset_arrays(out, document)?;
        write_blade_table(out, document)
    })?;
    write_section(out, Section::Buttons, |out| write_buttons(out, document))
}

fn write_section(
    out: &mut String,
    section: Section,
    body: impl FnOnce(&mut String) -> fmt::Result,
) -> fmt::Result {
    debug!(section = section.marker(), "Writing section");
    writeln!(out, "#ifdef {}", section.marker())?;
    body(out)?;
    writeln!(out, "#endif")?;
    writeln!(out)
}

fn write_top(out: &mut String, document: &ConfigDocument) -> fmt::Result {
    if document.mass_storage {
        writeln!(out, "//PROFFIECONFIG ENABLE_MASS_STORAGE")?;
    }
    if document.web_usb {
        writeln!(out, "//PROFFIECONFIG ENABLE_WEBUSB")?;
    }
    writeln!(out, "#include \"{}\"", document.board.include_file())?;
    writeln!(out, "#define NUM_BLADES {}", document.num_blades())?;
    writeln!(out, "#define NUM_BUTTONS {}", document.buttons().count())?;

    let blade_id = &document.blade_id;
    if blade_id.detect_enabled {
        writeln!(out, "#define BLADE_DETECT_PIN {}", blade_id.detect_pin)?;
    }
    if blade_id.id_enabled {
        writeln!(out, "#define BLADE_ID_CLASS {}", blade_id.id_class())?;
    }

    for define in &document.defines {
        if define.value.is_empty() {
            writeln!(out, "#define {}", define.name)?;
        } else {
            writeln!(out, "#define {} {}", define.name, define.value)?;
        }
    }

    if let Some(max_leds) = document.max_leds_per_strip {
        writeln!(out, "const unsigned int maxLedsPerStrip = {max_leds};")?;
    }
    Ok(())
}

fn write_prop(out: &mut String, document: &ConfigDocument) -> fmt::Result {
    if let Some(path) = document.prop.include_path() {
        writeln!(out, "#include \"{path}\"")?;
    }
    Ok(())
}

fn write_preset_arrays(out: &mut String, document: &ConfigDocument) -> fmt::Result {
    for array in &document.blade_arrays {
        writeln!(out, "Preset {}[] = {{", array.name)?;
        let last = array.presets.len().saturating_sub(1);
        for (index, preset) in array.presets.iter().enumerate() {
            writeln!(out, "\t{{ \"{}\", \"{}\",", preset.directory, preset.track)?;
            if preset.styles.is_empty() {
                writeln!(out, "\t\t,")?;
            }
            for style in &preset.styles {
                writeln!(out, "\t\t{style},")?;
            }
            write!(out, "\t\t\"{}\"}}", preset.name)?;
            if index != last {
                write!(out, ",")?;
            }
            writeln!(out)?;
        }
        writeln!(out, "}};")?;
    }
    Ok(())
}

fn write_blade_table(out: &mut String, document: &ConfigDocument) -> fmt::Result {
    writeln!(out, "BladeConfig blades[] = {{")?;
    let last = document.blade_arrays.len().saturating_sub(1);
    for (index, array) in document.blade_arrays.iter().enumerate() {
        write_blade_entry(out, array)?;
        if index != last {
            write!(out, ",")?;
        }
        writeln!(out)?;
    }
    writeln!(out, "}};")
}

fn write_blade_entry(out: &mut String, array: &BladeArray) -> fmt::Result {
    match array.value {
        ArrayValue::Id(value) => writeln!(out, "\t{{ {value},")?,
        ArrayValue::NoBlade => writeln!(out, "\t{{ NO_BLADE,")?,
    }

    for blade in &array.blades {
        match blade.kind {
            kind if kind.is_pixel() => write_pixel_blade(out, blade)?,
            kind if kind.is_star() => {
                writeln!(out, "\t\t{}(),", star_declaration(blade))?;
            }
            BladeType::SingleLed => {
                writeln!(out, "\t\t{}(),", single_led_declaration(blade))?;
            }
            _ => debug!(array = %array.name, "Skipping unset blade"),
        }
    }

    writeln!(out, "\t\tCONFIGARRAY({}), \"{}\"", array.name, array.name)?;
    write!(out, "\t}}")
}

fn write_pixel_blade(out: &mut String, blade: &BladeConfig) -> fmt::Result {
    if !blade.is_sub_blade() {
        return writeln!(out, "\t\t{},", ws281x_declaration(blade));
    }

    let wrapper = if blade.sub_blade_with_stride {
        "SubBladeWithStride"
    } else {
        "SubBlade"
    };
    for (index, range) in blade.sub_blades.iter().enumerate() {
        let source = if index == 0 {
            ws281x_declaration(blade)
        } else {
            "NULL".to_string()
        };
        writeln!(out, "\t\t{wrapper}( {}, {}, {source}),", range.start, range.end)?;
    }
    Ok(())
}

/// `WS281XBladePtr<...>()` for a pixel blade.
pub(crate) fn ws281x_declaration(blade: &BladeConfig) -> String {
    let color_order = if blade.kind == BladeType::PixelRgb || blade.rgb_with_white {
        blade.color_order.clone()
    } else {
        blade.color_order.replacen('W', "w", 1)
    };
    let pins: Vec<String> = blade.power_pins.enabled().map(PowerPins::identifier).collect();

    format!(
        "WS281XBladePtr<{}, {}, Color8::{}, PowerPINS<{}>>()",
        blade.num_pixels,
        blade.data_pin,
        color_order,
        pins.join(", ")
    )
}

/// `SimpleBladePtr<...>` for a star blade, without the trailing `()`.
///
/// Each populated LED takes the next unclaimed power pin in order 1..6.
pub(crate) fn star_declaration(blade: &BladeConfig) -> String {
    let mut unclaimed = blade.power_pins;
    let mut leds = Vec::with_capacity(STAR_SLOT_COUNT);
    let mut pins = Vec::with_capacity(STAR_SLOT_COUNT);

    for (slot, led) in blade.leds.iter().enumerate() {
        let led = led.filter(|_| slot + 1 < STAR_SLOT_COUNT || blade.kind == BladeType::QuadStar);
        match led {
            Some(led) => {
                leds.push(format!(
                    "CreeXPE2{}Template<{}>",
                    led.color.template_name(),
                    led.resistance
                ));
                pins.push(claim_pin(&mut unclaimed));
            }
            None => {
                leds.push(NO_LED.to_string());
                pins.push(NO_PIN.to_string());
            }
        }
    }

    format!("SimpleBladePtr<{}, {}>", leds.join(", "), pins.join(", "))
}

/// Fixed single white LED driven by the first asserted power pin.
pub(crate) fn single_led_declaration(blade: &BladeConfig) -> String {
    let mut unclaimed = blade.power_pins;
    format!(
        "SimpleBladePtr<CreeXPE2WhiteTemplate<550>, {NO_LED}, {NO_LED}, {NO_LED}, {}, {NO_PIN}, {NO_PIN}, {NO_PIN}>",
        claim_pin(&mut unclaimed)
    )
}

fn claim_pin(unclaimed: &mut PowerPins) -> String {
    match (1..=POWER_PIN_COUNT).find(|&number| unclaimed.is_set(number)) {
        Some(number) => {
            unclaimed.set(number, false);
            PowerPins::identifier(number)
        }
        None => NO_PIN.to_string(),
    }
}

fn write_buttons(out: &mut String, document: &ConfigDocument) -> fmt::Result {
    for role in document.buttons() {
        writeln!(
            out,
            "Button {}Button({}, {}, \"{}\");",
            role.name(),
            role.constant(),
            role.pin(),
            role.tag()
        )?;
    }
    Ok(())
}
