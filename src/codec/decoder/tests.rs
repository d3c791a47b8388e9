#![allow(clippy::unwrap_used)]

use super::*;
use crate::{
    codec::encode,
    model::{
        ArrayValue, BladeArray, BladeConfig, BladeIdMode, BladeType, Board, Define, LedColor,
        PowerPins, PresetConfig, Prop, StarLed, SubBladeRange,
    },
};

const HAND_WRITTEN: &str = r#"// ProffieOS config for a two-array chassis
#ifdef CONFIG_TOP
#include "proffieboard_v2_config.h"
#define NUM_BLADES 3
#define NUM_BUTTONS 2
#define VOLUME 1500 // louder than stock
#define ENABLE_AUDIO
const unsigned int maxLedsPerStrip = 144;
#endif

#ifdef CONFIG_PROP
#include "../props/saber_fett263_buttons.h"
#endif

#ifdef CONFIG_PRESETS
Preset blade_in[] = {
	{ "Kyber;common", "tracks/mars.wav",
		/* main blade */
		StylePtr<Layers<Blue, ResponsiveLockupL<White>>>(),
		StyleNormalPtr<CYAN, WHITE, 300, 800>(),
		&style_pov,
		"kyber"},
	{ "Noble", "",
		StylePtr<Red>(),
		StylePtr<Red>(),
		StylePtr<Red>(),
		"noble"}
};
Preset no_blade[] = {
	{ "Idle", "",
		&style_charging,
		StylePtr<Black>(),
		StylePtr<Black>(),
		"idle"}
};
BladeConfig blades[] = {
	{ 0,
		WS281XBladePtr<144, bladePin, Color8::GRB, PowerPINS<bladePowerPin2, bladePowerPin3>>(),
		SubBlade( 0, 9, WS281XBladePtr<20, blade2Pin, Color8::GRBw, PowerPINS<bladePowerPin1>>()),
		SubBlade( 10, 19, NULL),
		CONFIGARRAY(blade_in), "blade_in"
	},
	{ NO_BLADE,
		SimpleBladePtr<CreeXPE2RedTemplate<1000>, CreeXPE2GreenTemplate<0>, CreeXPE2BlueTemplate<240>, NoLED, bladePowerPin4, bladePowerPin5, bladePowerPin6, -1>(),
		SubBlade( 0, 9, WS281XBladePtr<20, blade2Pin, Color8::GRB, PowerPINS<bladePowerPin1>>()),
		SubBlade( 10, 19, NULL),
		CONFIGARRAY(no_blade), "no_blade"
	}
};
#endif

#ifdef CONFIG_BUTTONS
Button PowerButton(BUTTON_POWER, powerButtonPin, "pow");
Button AuxButton(BUTTON_AUX, auxPin, "aux");
#endif
"#;

fn pixel(pixels: u32, pins: &[usize]) -> BladeConfig {
    let mut blade = BladeConfig::pixel(BladeType::PixelRgb, pixels, "bladePin", "GRB");
    blade.power_pins = PowerPins::from_numbers(pins);
    blade
}

fn sample_document() -> ConfigDocument {
    let mut split = BladeConfig::pixel(BladeType::PixelRgbw, 30, "blade2Pin", "GRBW");
    split.power_pins = PowerPins::from_numbers(&[4]);
    split.sub_blades = vec![
        SubBladeRange { start: 0, end: 14 },
        SubBladeRange { start: 15, end: 29 },
    ];
    split.sub_blade_with_stride = true;

    let mut star = BladeConfig::star(
        BladeType::QuadStar,
        [
            Some(StarLed::new(LedColor::RedOrange, 1000)),
            Some(StarLed::new(LedColor::Amber, 500)),
            Some(StarLed::new(LedColor::White, 0)),
            Some(StarLed::new(LedColor::Blue, 240)),
        ],
    );
    star.power_pins = PowerPins::from_numbers(&[1, 3, 5, 6]);

    let styles = vec![
        "StylePtr<Blue>()".to_string(),
        "/* split one */\n\t\tStylePtr<Green>()".to_string(),
        "StylePtr<Green>()".to_string(),
    ];

    let mut main = BladeArray::new("blade_in", ArrayValue::Id(20_000));
    main.blades = vec![pixel(144, &[1, 2, 3]), split];
    main.presets = vec![
        PresetConfig::new("Kyber;common", "tracks/mars.wav", styles.clone(), "kyber"),
        PresetConfig::new("Noble", "", styles, "noble"),
    ];

    let mut idle = BladeArray::new("no_blade", ArrayValue::NoBlade);
    idle.blades = vec![star, pixel(1, &[2]), pixel(1, &[3])];
    idle.presets = vec![PresetConfig::new(
        "Idle",
        "",
        vec![
            "&style_charging".to_string(),
            "&style_pov".to_string(),
            "StylePtr<Black>()".to_string(),
        ],
        "idle",
    )];

    let mut document = ConfigDocument {
        board: Board::V1,
        mass_storage: true,
        web_usb: true,
        max_leds_per_strip: Some(300),
        prop: Prop::Shtok,
        num_buttons: 3,
        blade_arrays: vec![main, idle],
        ..ConfigDocument::default()
    };
    document.blade_id.detect_enabled = true;
    document.blade_id.detect_pin = "blade4Pin".to_string();
    document.blade_id.id_enabled = true;
    document.blade_id.id_pin = "bladeIdentifyPin".to_string();
    document.blade_id.id_mode = BladeIdMode::External;
    document.blade_id.pullup_resistance = 22000;
    document
}

#[test]
fn round_trip_keeps_hardware_and_presets() {
    let original = sample_document();

    let decoded = decode(&encode(&original).unwrap()).unwrap();

    assert_eq!(decoded.board, original.board);
    assert_eq!(decoded.prop, original.prop);
    assert_eq!(decoded.num_buttons, original.num_buttons);
    assert!(decoded.mass_storage && decoded.web_usb);
    assert_eq!(decoded.max_leds_per_strip, Some(300));
    assert_eq!(decoded.blade_id, original.blade_id);
    assert_eq!(decoded.blade_arrays.len(), 2);

    for (got, want) in decoded.blade_arrays.iter().zip(&original.blade_arrays) {
        assert_eq!(got.name, want.name);
        assert_eq!(got.value, want.value);
        assert_eq!(got.logical_blade_count(), want.logical_blade_count());
        assert_eq!(got.presets, want.presets);
        assert_eq!(got.blades, want.blades);
    }
}

#[test]
fn stride_sub_blades_are_recognised() {
    let text = "#ifdef CONFIG_TOP\n#define NUM_BLADES 2\n#endif\n\
        #ifdef CONFIG_PRESETS\nBladeConfig blades[] = {\n\t{ 0,\n\
        \t\tSubBladeWithStride( 0, 1, WS281XBladePtr<60, bladePin, Color8::GRB, PowerPINS<bladePowerPin2>>()),\n\
        \t\tSubBladeWithStride( 1, 1, NULL),\n\
        \t\tCONFIGARRAY(main), \"main\"\n\t}\n};\n#endif\n";

    let document = decode(text).unwrap();
    let blade = &document.array("main").unwrap().blades[0];

    assert!(blade.sub_blade_with_stride);
    assert_eq!(blade.num_pixels, 60);
    assert_eq!(
        blade.sub_blades,
        vec![
            SubBladeRange { start: 0, end: 1 },
            SubBladeRange { start: 1, end: 1 },
        ]
    );
}

#[test]
fn plain_sub_blades_are_not_strided() {
    let document = decode(HAND_WRITTEN).unwrap();

    assert!(!document.array("blade_in").unwrap().blades[1].sub_blade_with_stride);
}

#[test]
fn star_keeps_every_led_resistance() {
    let document = decode(HAND_WRITTEN).unwrap();
    let star = &document.array("no_blade").unwrap().blades[0];

    assert_eq!(
        star.leds,
        [
            Some(StarLed::new(LedColor::Red, 1000)),
            Some(StarLed::new(LedColor::Green, 0)),
            Some(StarLed::new(LedColor::Blue, 240)),
            None,
        ]
    );
    assert_eq!(star.power_pins, PowerPins::from_numbers(&[4, 5, 6]));
}

#[test]
fn white_channel_flag_follows_colour_order_case() {
    let text = HAND_WRITTEN.replace("Color8::GRBw", "Color8::GRBW");

    let document = decode(&text).unwrap();
    let blade = &document.array("blade_in").unwrap().blades[1];

    assert!(blade.rgb_with_white);
    assert_eq!(blade.color_order, "GRBW");
}

#[test]
fn second_round_trip_changes_nothing() {
    let once = decode(&encode(&sample_document()).unwrap()).unwrap();
    let twice = decode(&encode(&once).unwrap()).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn reads_hand_written_config() {
    let document = decode(HAND_WRITTEN).unwrap();

    assert_eq!(document.board, Board::V2);
    assert_eq!(document.prop, Prop::Fett263);
    assert_eq!(document.num_buttons, 2);
    assert_eq!(document.max_leds_per_strip, Some(144));
    assert_eq!(
        document.defines,
        vec![Define::new("VOLUME", "1500"), Define::new("ENABLE_AUDIO", "")]
    );

    let blade_in = document.array("blade_in").unwrap();
    assert_eq!(blade_in.value, ArrayValue::Id(0));
    assert_eq!(blade_in.blades.len(), 2);
    assert_eq!(blade_in.logical_blade_count(), 3);
    assert_eq!(blade_in.blades[0].power_pins, PowerPins::from_numbers(&[2, 3]));
    assert_eq!(blade_in.blades[1].kind, BladeType::PixelRgbw);
    assert_eq!(blade_in.blades[1].color_order, "GRBW");
    assert!(!blade_in.blades[1].rgb_with_white);

    let kyber = &blade_in.presets[0];
    assert_eq!(kyber.directory, "Kyber;common");
    assert_eq!(kyber.track, "tracks/mars.wav");
    assert_eq!(
        kyber.styles[0],
        "/* main blade */\n\t\tStylePtr<Layers<Blue, ResponsiveLockupL<White>>>()"
    );
    assert_eq!(kyber.styles[2], "&style_pov");
    assert_eq!(blade_in.presets[1].name, "noble");

    let no_blade = document.array("no_blade").unwrap();
    assert_eq!(no_blade.value, ArrayValue::NoBlade);
    assert_eq!(no_blade.blades[0].kind, BladeType::TriStar);
    assert_eq!(
        no_blade.blades[0].leds[2],
        Some(StarLed::new(LedColor::Blue, 240))
    );
    assert_eq!(no_blade.presets[0].styles[0], "&style_charging");
}

#[test]
fn null_sub_blade_extends_previous_blade() {
    let text = "#ifdef CONFIG_TOP\n#define NUM_BLADES 2\n#endif\n\
        #ifdef CONFIG_PRESETS\nBladeConfig blades[] = {\n\t{ 0,\n\
        \t\tSubBlade( 0, 9, WS281XBladePtr<20, bladePin, Color8::GRB, PowerPINS<bladePowerPin1>>()),\n\
        \t\tSubBlade( 10, 19, NULL),\n\
        \t\tCONFIGARRAY(main), \"main\"\n\t}\n};\n#endif\n";

    let document = decode(text).unwrap();
    let main = document.array("main").unwrap();

    assert_eq!(main.blades.len(), 1);
    assert_eq!(
        main.blades[0].sub_blades,
        vec![
            SubBladeRange { start: 0, end: 9 },
            SubBladeRange { start: 10, end: 19 },
        ]
    );
    assert_eq!(main.logical_blade_count(), 2);
    assert_eq!(document.num_blades(), 2);
}

#[test]
fn null_sub_blade_without_previous_blade_fails() {
    let text = "#ifdef CONFIG_PRESETS\nBladeConfig blades[] = {\n\t{ 0,\n\
        \t\tSubBlade( 10, 19, NULL),\n\t\tCONFIGARRAY(main), \"main\"\n\t}\n};\n#endif\n";

    assert!(matches!(decode(text), Err(ProffieError::Parse { .. })));
}

#[test]
fn malformed_blade_value_fails_and_resets_document() {
    let broken = HAND_WRITTEN.replace("{ 0,", "{ zero,");

    let error = decode(&broken).unwrap_err();
    assert!(matches!(error, ProffieError::Parse { .. }));
    assert!(error.to_string().contains("zero"));

    let mut document = decode(HAND_WRITTEN).unwrap();
    assert!(document.reload(&broken).is_err());
    assert_eq!(document, ConfigDocument::default());
}

#[test]
fn malformed_pixel_count_fails() {
    let broken = HAND_WRITTEN.replace("WS281XBladePtr<144,", "WS281XBladePtr<lots,");

    assert!(matches!(decode(&broken), Err(ProffieError::Parse { .. })));
}

#[test]
fn truncated_input_keeps_what_was_read() {
    let cut = HAND_WRITTEN
        .find("Preset no_blade")
        .map(|at| &HAND_WRITTEN[..at])
        .unwrap();

    let document = decode(cut).unwrap();

    assert_eq!(document.board, Board::V2);
    assert_eq!(document.prop, Prop::Fett263);
    assert_eq!(document.array("blade_in").unwrap().presets.len(), 2);
    assert!(document.array("no_blade").is_none());
}

#[test]
fn empty_input_gives_default_document() {
    assert_eq!(decode("").unwrap(), ConfigDocument::default());
}

#[test]
fn sections_inside_comments_are_ignored() {
    let text = "/*\n#ifdef CONFIG_PROP\n#include \"../props/saber_sa22c_buttons.h\"\n#endif\n*/\n\
        // #ifdef CONFIG_PROP\n\
        #ifdef CONFIG_PROP\n#include \"../props/saber_BC_buttons.h\"\n#endif\n";

    assert_eq!(decode(text).unwrap().prop, Prop::Bc);
}

#[test]
fn last_matching_board_tag_wins() {
    let text = "#ifdef CONFIG_TOP\n#include \"proffieboard_v1_config_v3.h\"\n#endif\n";

    assert_eq!(decode(text).unwrap().board, Board::V3);
}

#[test]
fn later_prop_include_wins() {
    let text = "#ifdef CONFIG_PROP\n#include \"../props/saber_shtok_buttons.h\"\n\
        #include \"../props/saber_caiwyn_buttons.h\"\n#endif\n";

    assert_eq!(decode(text).unwrap().prop, Prop::Caiwyn);
}

#[test]
fn button_declarations_override_define() {
    let text = "#ifdef CONFIG_TOP\n#define NUM_BUTTONS 1\n#endif\n#ifdef CONFIG_BUTTONS\n\
        Button PowerButton(BUTTON_POWER, powerButtonPin, \"pow\");\n\
        Button AuxButton(BUTTON_AUX, auxPin, \"aux\");\n\
        Button Aux2Button(BUTTON_AUX2, aux2Pin, \"aux2\");\n#endif\n";

    assert_eq!(decode(text).unwrap().num_buttons, 3);
}

#[test]
fn blade_id_defines_are_modelled() {
    let text = "#ifdef CONFIG_TOP\n#define BLADE_DETECT_PIN blade4Pin\n\
        #define BLADE_ID_CLASS BridgedPullupBladeID<bladeIdentifyPin, blade2Pin>\n#endif\n";

    let blade_id = decode(text).unwrap().blade_id;

    assert!(blade_id.detect_enabled);
    assert_eq!(blade_id.detect_pin, "blade4Pin");
    assert!(blade_id.id_enabled);
    assert_eq!(blade_id.id_mode, BladeIdMode::Bridged);
    assert_eq!(blade_id.id_pin, "bladeIdentifyPin");
    assert_eq!(blade_id.pullup_pin, "blade2Pin");
}

#[test]
fn unknown_id_class_is_kept_as_define() {
    let text = "#ifdef CONFIG_TOP\n#define BLADE_ID_CLASS CustomBladeID<2>\n#endif\n";

    let document = decode(text).unwrap();

    assert!(!document.blade_id.id_enabled);
    assert_eq!(
        document.defines,
        vec![Define::new("BLADE_ID_CLASS", "CustomBladeID<2>")]
    );
}

#[test]
fn styles_section_substitutes_named_styles() {
    let text = "#ifdef CONFIG_TOP\n#define NUM_BLADES 2\n#endif\n\
        #ifdef CONFIG_PRESETS\nPreset main[] = {\n\
        \t{ \"font\", \"\",\n\t\tStylePtr<style_name>(),\n\
        \t\t/* StylePtr<style_name>() */\n\t\tStylePtr<Red>(),\n\t\t\"named\"}\n};\n#endif\n\
        #ifdef CONFIG_STYLES\nusing style_name = StylePtr<StyleNormalPtr<CYAN, WHITE, 300, 800>()>();\n#endif\n";

    let document = decode(text).unwrap();
    let styles = &document.array("main").unwrap().presets[0].styles;

    assert_eq!(styles[0], "StylePtr<StyleNormalPtr<CYAN, WHITE, 300, 800>()>()");
    assert_eq!(styles[1], "/* StylePtr<style_name>() */\n\t\tStylePtr<Red>()");
}

#[test]
fn blade_table_merges_into_preset_array_by_name() {
    let document = decode(HAND_WRITTEN).unwrap();

    let names: Vec<&str> = document
        .blade_arrays
        .iter()
        .map(|array| array.name.as_str())
        .collect();
    assert_eq!(names, vec!["blade_in", "no_blade"]);
    assert!(document.blade_arrays.iter().all(|array| !array.presets.is_empty()));
}

#[test]
fn array_without_declarations_gets_unset_blade() {
    let text = "#ifdef CONFIG_PRESETS\nBladeConfig blades[] = {\n\t{ 5,\n\
        \t\tCONFIGARRAY(empty), \"empty\"\n\t}\n};\n#endif\n";

    let document = decode(text).unwrap();
    let empty = document.array("empty").unwrap();

    assert_eq!(empty.value, ArrayValue::Id(5));
    assert_eq!(empty.blades, vec![BladeConfig::default()]);
}
