use tracing::{debug, warn};

use crate::{
    Result,
    model::{BladeIdMode, Board, Define},
};

use super::{Decoder, Scan, lexer::TokenKind};

const MAX_LEDS_CONSTANT: &str = "maxLedsPerStrip";

impl Decoder<'_> {
    /// Reads `CONFIG_TOP`: board include, feature pragmas, defines and the
    /// strip-length constant.
    pub(super) fn read_top(&mut self) -> Result<Scan> {
        loop {
            let Some(token) = self.lexer.next_significant() else {
                return Ok(Scan::Eof);
            };

            match token.kind() {
                TokenKind::SectionEnd => return Ok(Scan::SectionEnd),
                TokenKind::Pragma => self.read_pragma(),
                _ => match token.text {
                    "#define" => {
                        let line = self.lexer.rest_of_line();
                        self.read_define(line)?;
                    }
                    "const" => {
                        let line = self.lexer.rest_of_line();
                        self.read_constant(line)?;
                    }
                    "#include" => {
                        if let Some(path) = self.lexer.next_token() {
                            self.read_board(path.text);
                        }
                    }
                    _ => {}
                },
            }
        }
    }

    fn read_pragma(&mut self) {
        match self.lexer.next_token().map(|token| token.text) {
            Some("ENABLE_MASS_STORAGE") => self.document.mass_storage = true,
            Some("ENABLE_WEBUSB") => self.document.web_usb = true,
            Some(other) => warn!(pragma = other, "Unknown pragma"),
            None => {}
        }
    }

    /// Version tags are checked v1, v2, v3 and the last one found wins.
    fn read_board(&mut self, path: &str) {
        for board in [Board::V1, Board::V2, Board::V3] {
            if path.contains(board.tag()) {
                self.document.board = board;
            }
        }
    }

    fn read_constant(&mut self, line: &str) -> Result<()> {
        let Some((declaration, value)) = line.split_once('=') else {
            warn!(line, "Constant without a value");
            return Ok(());
        };
        if !declaration.contains(MAX_LEDS_CONSTANT) {
            debug!(line, "Ignoring constant");
            return Ok(());
        }

        let value = value
            .split(|c: char| c.is_whitespace() || c == ';')
            .find(|part| !part.is_empty())
            .unwrap_or_default();
        self.document.max_leds_per_strip = Some(self.number(value, MAX_LEDS_CONSTANT)?);
        Ok(())
    }

    fn read_define(&mut self, line: &str) -> Result<()> {
        let line = line.split("//").next().unwrap_or_default().trim();
        let (name, value) = match line.split_once(char::is_whitespace) {
            Some((name, value)) => (name, value.trim()),
            None => (line, ""),
        };
        if name.is_empty() {
            return Ok(());
        }

        match name {
            "NUM_BLADES" => self.num_blades = Some(self.number(value, "NUM_BLADES")?),
            "NUM_BUTTONS" => self.document.num_buttons = self.number(value, "NUM_BUTTONS")?,
            "BLADE_DETECT_PIN" => {
                self.document.blade_id.detect_enabled = true;
                self.document.blade_id.detect_pin = value.to_string();
            }
            "BLADE_ID_CLASS" => {
                if !self.read_id_class(value)? {
                    self.document.defines.push(Define::new(name, value));
                }
            }
            _ => self.document.defines.push(Define::new(name, value)),
        }
        Ok(())
    }

    /// Returns `false` for an ID class this tool does not model, which is
    /// then kept as a plain define.
    fn read_id_class(&mut self, value: &str) -> Result<bool> {
        let Some((class, args)) = value.split_once('<') else {
            return Ok(false);
        };
        let args = args.rsplit_once('>').map_or(args, |(args, _)| args);
        let mut args = args.split(',').map(str::trim);
        let pin = args.next().unwrap_or_default().to_string();

        let (mode, pullup_pin, resistance) = match class.trim() {
            "SnapshotBladeID" => (BladeIdMode::Snapshot, None, None),
            "BridgedPullupBladeID" => (BladeIdMode::Bridged, args.next(), None),
            "ExternalPullupBladeID" => {
                let resistance = args.next().unwrap_or_default();
                let resistance = self.number(resistance, "pullup resistance")?;
                (BladeIdMode::External, None, Some(resistance))
            }
            _ => return Ok(false),
        };

        let blade_id = &mut self.document.blade_id;
        blade_id.id_enabled = true;
        blade_id.id_pin = pin;
        blade_id.id_mode = mode;
        if let Some(pullup_pin) = pullup_pin {
            blade_id.pullup_pin = pullup_pin.to_string();
        }
        if let Some(resistance) = resistance {
            blade_id.pullup_resistance = resistance;
        }
        Ok(true)
    }
}
