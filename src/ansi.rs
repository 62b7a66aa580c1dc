//! OSC color sequences
//!
//! Every sequence is framed as `ESC ] <body> BEL`. Applying a [`ColorSet`]
//! uses `4;<index>;<color>`, `10;<color>`, `11;<color>` and `12;<color>`;
//! resetting uses `104;<index>` for all 16 palette slots followed by
//! `110`, `111` and `112`.

use crate::error::Result;
use crate::theme::{ColorSet, PALETTE_SIZE};
use std::io::{self, Write};

/// Bytes of a full reset, usable where allocation is not allowed
pub const RESET_SEQUENCE: &str = concat!(
    "\x1b]104;0\x07",
    "\x1b]104;1\x07",
    "\x1b]104;2\x07",
    "\x1b]104;3\x07",
    "\x1b]104;4\x07",
    "\x1b]104;5\x07",
    "\x1b]104;6\x07",
    "\x1b]104;7\x07",
    "\x1b]104;8\x07",
    "\x1b]104;9\x07",
    "\x1b]104;10\x07",
    "\x1b]104;11\x07",
    "\x1b]104;12\x07",
    "\x1b]104;13\x07",
    "\x1b]104;14\x07",
    "\x1b]104;15\x07",
    "\x1b]110\x07",
    "\x1b]111\x07",
    "\x1b]112\x07",
);

/// Frame an OSC body
pub fn osc(body: &str) -> String {
    format!("\x1b]{}\x07", body)
}

/// Sequences that apply `colors`, in emission order
pub fn apply_sequences(colors: &ColorSet) -> Vec<String> {
    let mut sequences: Vec<String> = colors
        .palette()
        .map(|(index, color)| osc(&format!("4;{};{}", index, color)))
        .collect();
    let named = [
        (10, colors.foreground()),
        (11, colors.background()),
        (12, colors.cursor()),
    ];
    for (code, color) in named {
        if let Some(color) = color {
            sequences.push(osc(&format!("{};{}", code, color)));
        }
    }
    sequences
}

/// Sequences that restore the terminal's default colors
pub fn reset_sequences() -> Vec<String> {
    (0..PALETTE_SIZE)
        .map(|index| osc(&format!("104;{}", index)))
        .chain(["110", "111", "112"].into_iter().map(osc))
        .collect()
}

/// Sequence with the escape bytes spelled out, for logs
fn printable(sequence: &str) -> String {
    sequence.replace('\x1b', "\\x1b").replace('\x07', "\\x07")
}

/// Writes color sequences to a terminal
pub struct SchemeEmitter<W: Write> {
    out: W,
}

impl SchemeEmitter<io::Stdout> {
    /// Emitter writing to the process's standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> SchemeEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Set the palette and named colors present in `colors`
    pub fn apply(&mut self, colors: &ColorSet) -> Result<()> {
        let sequences = apply_sequences(colors);
        info!("Applying {} color sequence(s)", sequences.len());
        for sequence in &sequences {
            debug!("Would use '{}'", printable(sequence));
            self.out.write_all(sequence.as_bytes())?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Restore all default colors, whatever was applied before
    pub fn reset(&mut self) -> Result<()> {
        info!("Going to reset scheme");
        self.out.write_all(RESET_SEQUENCE.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
