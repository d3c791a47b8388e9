use tracing::{debug, warn};

use crate::{
    Result,
    core::ProffieError,
    model::{
        ArrayValue, BladeArray, BladeConfig, BladeType, LedColor, POWER_PIN_COUNT, PowerPins,
        STAR_SLOT_COUNT, StarLed, SubBladeRange,
    },
};

use super::{Decoder, Scan, Seek, lexer::TokenKind};

const CONFIG_ARRAY: &str = "CONFIGARRAY";
const WS281X: &str = "WS281XBladePtr";
const SIMPLE: &str = "SimpleBladePtr";
const SUB_BLADE: &str = "SubBlade";
const NULL_BLADE: &str = "NULL";
const NO_BLADE: &str = "NO_BLADE";

/// Declaration text gathered for one table slot, whitespace removed.
enum Gathered {
    Declaration(String),
    /// The `CONFIGARRAY(...)` trailer came first.
    Trailer(String),
    Stopped(Scan),
}

impl Decoder<'_> {
    /// Reads `BladeConfig blades[] = { {...}, ... };`.
    pub(super) fn read_blade_table(&mut self) -> Result<Scan> {
        match self.seek_open() {
            Seek::Open(_) => {}
            Seek::ArrayEnd => return Ok(Scan::More),
            Seek::Stopped(scan) => return Ok(scan),
        }

        loop {
            let open = match self.seek_open() {
                Seek::Open(open) => open,
                Seek::ArrayEnd => return Ok(Scan::More),
                Seek::Stopped(scan) => return Ok(scan),
            };

            let value = match open.text.trim_start_matches('{') {
                "" => match self.lexer.next_significant() {
                    Some(token) if token.kind() == TokenKind::SectionEnd => {
                        return Ok(Scan::SectionEnd);
                    }
                    Some(token) => token.text,
                    None => return Ok(Scan::Eof),
                },
                inline => inline,
            };
            let value = self.array_value(value)?;

            if let Some(scan) = self.read_blade_entry(value)? {
                return Ok(scan);
            }
        }
    }

    fn array_value(&self, text: &str) -> Result<ArrayValue> {
        let text = text.split(',').next().unwrap_or_default().trim();
        if text.contains(NO_BLADE) {
            return Ok(ArrayValue::NoBlade);
        }
        Ok(ArrayValue::Id(self.number(text, "blade array value")?))
    }

    /// Reads the declarations and trailer of one table entry. Returns the
    /// scan state if the section or input ended first.
    fn read_blade_entry(&mut self, value: ArrayValue) -> Result<Option<Scan>> {
        let mut blades: Vec<BladeConfig> = Vec::new();
        let mut remaining = self.num_blades;
        let mut trailer = None;

        while remaining != Some(0) {
            match self.gather_declaration() {
                Gathered::Declaration(text) => {
                    self.read_blade_declaration(&text, &mut blades)?;
                    remaining = remaining.map(|count| count - 1);
                }
                Gathered::Trailer(text) => {
                    trailer = Some(text);
                    break;
                }
                Gathered::Stopped(scan) => return Ok(Some(scan)),
            }
        }

        let trailer = match trailer {
            Some(text) => text,
            None => match self.gather_trailer() {
                Ok(text) => text,
                Err(scan) => return Ok(Some(scan)),
            },
        };
        let name = array_name(&trailer);

        if blades.is_empty() {
            blades.push(BladeConfig::default());
        }
        debug!(array = %name, %value, blades = blades.len(), "Read blade array");

        match self.document.array_mut(&name) {
            Some(array) => {
                array.value = value;
                array.blades = blades;
            }
            None => {
                let mut array = BladeArray::new(&name, value);
                array.blades = blades;
                self.document.blade_arrays.push(array);
            }
        }
        Ok(None)
    }

    fn gather_declaration(&mut self) -> Gathered {
        let mut data = String::new();
        loop {
            let Some(token) = self.lexer.next_significant() else {
                return Gathered::Stopped(Scan::Eof);
            };
            if token.kind() == TokenKind::SectionEnd {
                return Gathered::Stopped(Scan::SectionEnd);
            }
            if data.is_empty() && token.text.starts_with(CONFIG_ARRAY) {
                return match self.finish_trailer(token.text.to_string()) {
                    Ok(text) => Gathered::Trailer(text),
                    Err(scan) => Gathered::Stopped(scan),
                };
            }
            data.push_str(token.text);
            if data.contains("),") {
                return Gathered::Declaration(data);
            }
        }
    }

    fn gather_trailer(&mut self) -> std::result::Result<String, Scan> {
        loop {
            let Some(token) = self.lexer.next_significant() else {
                return Err(Scan::Eof);
            };
            if token.kind() == TokenKind::SectionEnd {
                return Err(Scan::SectionEnd);
            }
            if token.text.starts_with(CONFIG_ARRAY) {
                return self.finish_trailer(token.text.to_string());
            }
        }
    }

    fn finish_trailer(&mut self, mut data: String) -> std::result::Result<String, Scan> {
        while !data.contains(')') {
            let Some(token) = self.lexer.next_significant() else {
                return Err(Scan::Eof);
            };
            if token.kind() == TokenKind::SectionEnd {
                return Err(Scan::SectionEnd);
            }
            data.push_str(token.text);
        }
        Ok(data)
    }

    fn read_blade_declaration(&self, data: &str, blades: &mut Vec<BladeConfig>) -> Result<()> {
        if let Some(at) = data.find(SUB_BLADE) {
            let call = &data[at..];
            let args = call.split_once('(').map_or("", |(_, args)| args);
            let mut args = args.splitn(3, ',');
            let start = self.number(args.next().unwrap_or_default(), "sub-blade start")?;
            let end = self.number(args.next().unwrap_or_default(), "sub-blade end")?;
            let payload = args.next().unwrap_or_default();
            let range = SubBladeRange { start, end };

            if payload.trim_start().starts_with(NULL_BLADE) {
                let Some(previous) = blades.last_mut() else {
                    return Err(ProffieError::parse(
                        self.lexer.line(),
                        "sub-blade refers to a previous blade that does not exist",
                    ));
                };
                previous.sub_blades.push(range);
                return Ok(());
            }

            let mut blade = self.pixel_blade(payload)?;
            blade.sub_blades.push(range);
            blade.sub_blade_with_stride = call.contains("WithStride");
            blades.push(blade);
            return Ok(());
        }

        if data.contains(WS281X) {
            blades.push(self.pixel_blade(data)?);
        } else if data.contains(SIMPLE) {
            blades.push(self.simple_blade(data)?);
        } else {
            warn!(declaration = data, "Unrecognised blade declaration");
        }
        Ok(())
    }

    /// Builds a pixel blade from `WS281XBladePtr<pixels, pin, Color8::ORDER, PowerPINS<...>>`.
    fn pixel_blade(&self, data: &str) -> Result<BladeConfig> {
        let Some(at) = data.find(WS281X) else {
            warn!(declaration = data, "Sub-blade without a pixel strip");
            return Ok(BladeConfig::default());
        };
        let data = &data[at..];

        let mut blade = BladeConfig {
            power_pins: power_pins_in(data),
            ..BladeConfig::default()
        };

        let mut fields = data.split(['<', ',']).skip(1);
        blade.num_pixels = self.number(fields.next().unwrap_or_default(), "pixel count")?;
        if let Some(pin) = fields.next() {
            blade.data_pin = pin.trim().to_string();
        }

        let order = data
            .split_once("Color8::")
            .map(|(_, rest)| rest.split([':', ',', '>']).next().unwrap_or_default())
            .unwrap_or_default();
        if !order.is_empty() {
            blade.rgb_with_white = order.contains('W');
            blade.color_order = order.to_uppercase();
        }
        blade.kind = if blade.color_order.len() >= 4 {
            BladeType::PixelRgbw
        } else {
            BladeType::PixelRgb
        };
        Ok(blade)
    }

    /// Builds a star or single-LED blade from `SimpleBladePtr<led, led, led, led, pin, ...>`.
    fn simple_blade(&self, data: &str) -> Result<BladeConfig> {
        let power_pins = power_pins_in(data);
        let args = data.split_once('<').map_or("", |(_, args)| args);

        let mut leds = [None; STAR_SLOT_COUNT];
        let mut rest = args;
        for slot in &mut leds {
            let (led, after) = split_template_arg(rest);
            rest = after;
            let Some(color) = LedColor::find_in(led) else {
                continue;
            };
            let resistance = led
                .split_once('<')
                .map(|(_, value)| value.split('>').next().unwrap_or_default())
                .unwrap_or_default();
            *slot = Some(StarLed::new(color, self.number(resistance, "LED resistance")?));
        }

        let mut blade = BladeConfig::star(BladeType::Unset, leds);
        blade.kind = match blade.populated_leds() {
            0..=2 => BladeType::SingleLed,
            3 => BladeType::TriStar,
            _ => BladeType::QuadStar,
        };
        blade.power_pins = power_pins;
        Ok(blade)
    }
}

/// Power-pin flags named anywhere in `data`.
fn power_pins_in(data: &str) -> PowerPins {
    let mut pins = PowerPins::default();
    for number in 1..=POWER_PIN_COUNT {
        if data.contains(&PowerPins::identifier(number)) {
            pins.set(number, true);
        }
    }
    pins
}

/// Splits off the first top-level template argument.
fn split_template_arg(text: &str) -> (&str, &str) {
    let mut depth = 0usize;
    for (at, c) in text.char_indices() {
        match c {
            '<' => depth += 1,
            '>' if depth > 0 => depth -= 1,
            ',' if depth == 0 => return (&text[..at], &text[at + 1..]),
            _ => {}
        }
    }
    (text, "")
}

/// Name inside `CONFIGARRAY(name)`.
fn array_name(trailer: &str) -> String {
    trailer
        .split_once('(')
        .map(|(_, rest)| rest.split(')').next().unwrap_or_default())
        .unwrap_or_default()
        .trim()
        .to_string()
}
