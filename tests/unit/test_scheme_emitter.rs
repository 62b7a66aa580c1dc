//! Unit Tests for the Scheme Emitter

use osscz::ansi::{apply_sequences, reset_sequences, RESET_SEQUENCE};
use osscz::{ColorSet, SchemeEmitter};

fn written(emitter: SchemeEmitter<Vec<u8>>) -> String {
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_reset_is_nineteen_sequences() {
    let sequences = reset_sequences();
    assert_eq!(sequences.len(), 19);
    assert_eq!(sequences[0], "\x1b]104;0\x07");
    assert_eq!(sequences[15], "\x1b]104;15\x07");
    assert_eq!(
        sequences[16..].to_vec(),
        vec!["\x1b]110\x07", "\x1b]111\x07", "\x1b]112\x07"]
    );
}

#[test]
fn test_reset_writes_constant() {
    let mut emitter = SchemeEmitter::new(Vec::new());
    emitter.reset().unwrap();
    assert_eq!(written(emitter), RESET_SEQUENCE);
}

#[test]
fn test_apply_skips_absent_colors() {
    let mut colors = ColorSet::new();
    colors.set_ansi(3, "#c08b30");
    colors.set_background("202746");

    let mut emitter = SchemeEmitter::new(Vec::new());
    emitter.apply(&colors).unwrap();
    assert_eq!(
        written(emitter),
        "\x1b]4;3;#c08b30\x07\x1b]11;#202746\x07"
    );
}

#[test]
fn test_apply_empty_set_writes_nothing() {
    let mut emitter = SchemeEmitter::new(Vec::new());
    emitter.apply(&ColorSet::new()).unwrap();
    assert!(emitter.get_ref().is_empty());
    assert!(apply_sequences(&ColorSet::new()).is_empty());
}

#[test]
fn test_palette_before_named_colors() {
    let mut colors = ColorSet::new();
    colors.set_cursor("#cccccc");
    colors.set_foreground("#eeeeee");
    colors.set_ansi(15, "#ffffff");
    colors.set_ansi(0, "#000000");

    assert_eq!(
        apply_sequences(&colors),
        vec![
            "\x1b]4;0;#000000\x07",
            "\x1b]4;15;#ffffff\x07",
            "\x1b]10;#eeeeee\x07",
            "\x1b]12;#cccccc\x07",
        ]
    );
}

#[test]
fn test_reset_after_apply_is_unchanged() {
    let mut colors = ColorSet::new();
    colors.set_ansi(1, "#ff0000");
    colors.set_foreground("#ffffff");

    let mut emitter = SchemeEmitter::new(Vec::new());
    emitter.apply(&colors).unwrap();
    let applied_len = emitter.get_ref().len();
    emitter.reset().unwrap();

    let out = written(emitter);
    assert_eq!(&out[applied_len..], RESET_SEQUENCE);
}
