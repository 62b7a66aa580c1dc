//! Property-based tests for flat themes and scheme emission

use osscz::ansi::RESET_SEQUENCE;
use osscz::theme::flat::{parse, to_flat_theme};
use osscz::{ColorSet, SchemeEmitter};
use proptest::prelude::*;

fn color() -> impl Strategy<Value = String> {
    "#[0-9a-f]{6}"
}

fn color_set() -> impl Strategy<Value = ColorSet> {
    (
        prop::collection::vec(prop::option::of(color()), 16),
        prop::option::of(color()),
        prop::option::of(color()),
        prop::option::of(color()),
    )
        .prop_map(|(palette, foreground, background, cursor)| {
            let mut colors = ColorSet::new();
            for (index, entry) in palette.into_iter().enumerate() {
                if let Some(entry) = entry {
                    colors.set_ansi(index, entry);
                }
            }
            if let Some(c) = foreground {
                colors.set_foreground(&c);
            }
            if let Some(c) = background {
                colors.set_background(&c);
            }
            if let Some(c) = cursor {
                colors.set_cursor(&c);
            }
            colors
        })
}

proptest! {
    #[test]
    fn test_parse_doesnt_panic(s in "\\PC*") {
        let _ = parse(&s);
    }

    #[test]
    fn test_flat_round_trip(colors in color_set()) {
        prop_assert_eq!(parse(&to_flat_theme(&colors)), colors);
    }

    #[test]
    fn test_palette_indices_in_range(
        lines in prop::collection::vec((0usize..64, color()), 0..40),
    ) {
        let content: String = lines
            .iter()
            .map(|(index, c)| format!("palette = {}={}\n", index, c))
            .collect();
        let colors = parse(&content);
        prop_assert!(colors.palette().all(|(index, _)| index < 16));
    }

    #[test]
    fn test_reset_apply_reset_ends_with_reset(colors in color_set()) {
        let mut emitter = SchemeEmitter::new(Vec::new());
        emitter.reset().unwrap();
        emitter.apply(&colors).unwrap();
        emitter.reset().unwrap();

        let out = String::from_utf8(emitter.into_inner()).unwrap();
        prop_assert!(out.starts_with(RESET_SEQUENCE));
        prop_assert!(out.ends_with(RESET_SEQUENCE));
    }
}
