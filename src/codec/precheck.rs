//! Structural checks that must pass before a document can be encoded.

use thiserror::Error;

use crate::model::{BladeIdMode, ConfigDocument};

/// First structural problem found in a document.
///
/// Checks run in declaration order and stop at the first failure, so after a
/// fix the document has to be checked again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Blade detect is enabled without a pin.
    #[error("Blade Detect Pin cannot be empty.")]
    EmptyDetectPin,

    /// Blade ID is enabled without a pin.
    #[error("Blade ID Pin cannot be empty.")]
    EmptyIdPin,

    /// A blade array has no name.
    #[error("Blade Array Name cannot be empty.")]
    EmptyArrayName,

    /// Bridged blade ID is enabled without a pullup pin.
    #[error("Pullup Pin cannot be empty.")]
    EmptyPullupPin,

    /// Blade detect and blade ID share a pin.
    #[error("Blade ID Pin and Blade Detect Pin cannot be the same.")]
    SharedDetectIdPin,

    /// Blade arrays disagree on their logical blade count.
    #[error("All Blade Arrays must be the same length.\n\nPlease add/remove blades to make them equal")]
    MismatchedBladeCounts,
}

/// Validates `document`, returning the first violation.
///
/// # Errors
///
/// Returns the first [`Violation`] in check order.
pub fn check(document: &ConfigDocument) -> Result<(), Violation> {
    let blade_id = &document.blade_id;

    if blade_id.detect_enabled && blade_id.detect_pin.is_empty() {
        return Err(Violation::EmptyDetectPin);
    }
    if blade_id.id_enabled && blade_id.id_pin.is_empty() {
        return Err(Violation::EmptyIdPin);
    }
    if document.blade_arrays.iter().any(|array| array.name.is_empty()) {
        return Err(Violation::EmptyArrayName);
    }
    if blade_id.id_enabled
        && blade_id.id_mode == BladeIdMode::Bridged
        && blade_id.pullup_pin.is_empty()
    {
        return Err(Violation::EmptyPullupPin);
    }
    if blade_id.detect_enabled && blade_id.id_enabled && blade_id.id_pin == blade_id.detect_pin {
        return Err(Violation::SharedDetectIdPin);
    }

    let mut counts = document
        .blade_arrays
        .iter()
        .map(|array| array.logical_blade_count());
    if let Some(first) = counts.next() {
        if counts.any(|count| count != first) {
            return Err(Violation::MismatchedBladeCounts);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArrayValue, BladeArray, BladeConfig, BladeType, SubBladeRange};

    fn array(name: &str, blades: usize) -> BladeArray {
        let mut array = BladeArray::new(name, ArrayValue::Id(0));
        array.blades = vec![BladeConfig::pixel(BladeType::PixelRgb, 144, "bladePin", "GRB"); blades];
        array
    }

    #[test]
    fn accepts_consistent_document() {
        let mut document = ConfigDocument::default();
        document.blade_arrays = vec![array("blade_in", 2), array("no_blade", 2)];

        assert_eq!(check(&document), Ok(()));
    }

    #[test]
    fn empty_name_reported_before_count_mismatch() {
        let mut document = ConfigDocument::default();
        document.blade_arrays = vec![array("blade_in", 1), array("", 3)];

        assert_eq!(check(&document), Err(Violation::EmptyArrayName));
    }

    #[test]
    fn detect_pin_checked_first() {
        let mut document = ConfigDocument::default();
        document.blade_id.detect_enabled = true;
        document.blade_id.id_enabled = true;
        document.blade_arrays = vec![array("", 1)];

        assert_eq!(check(&document), Err(Violation::EmptyDetectPin));
    }

    #[test]
    fn bridged_mode_needs_pullup() {
        let mut document = ConfigDocument::default();
        document.blade_id.id_enabled = true;
        document.blade_id.id_pin = "bladeIdentifyPin".to_string();
        document.blade_id.id_mode = BladeIdMode::Bridged;

        assert_eq!(check(&document), Err(Violation::EmptyPullupPin));

        document.blade_id.id_mode = BladeIdMode::Snapshot;
        assert_eq!(check(&document), Ok(()));
    }

    #[test]
    fn detect_and_id_pins_must_differ() {
        let mut document = ConfigDocument::default();
        document.blade_id.detect_enabled = true;
        document.blade_id.detect_pin = "blade4Pin".to_string();
        document.blade_id.id_enabled = true;
        document.blade_id.id_pin = "blade4Pin".to_string();

        assert_eq!(check(&document), Err(Violation::SharedDetectIdPin));
    }

    #[test]
    fn sub_blades_count_per_range() {
        let mut split = array("split", 1);
        split.blades[0].sub_blades = vec![
            SubBladeRange { start: 0, end: 9 },
            SubBladeRange { start: 10, end: 19 },
        ];
        let mut document = ConfigDocument::default();
        document.blade_arrays = vec![split, array("plain", 2)];

        assert_eq!(check(&document), Ok(()));

        document.blade_arrays.push(array("short", 1));
        assert_eq!(check(&document), Err(Violation::MismatchedBladeCounts));
    }

    #[test]
    fn no_arrays_is_valid() {
        assert_eq!(check(&ConfigDocument::default()), Ok(()));
    }
}
