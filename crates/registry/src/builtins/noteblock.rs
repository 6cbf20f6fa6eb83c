use blockinfo_primitives::properties::{INSTRUMENT, NOTE};

use crate::provider::{AnnotationContext, AnnotationProvider};

const NOTE_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// Semitones from C0 to the lowest note-block pitch, F#3.
const LOWEST_PITCH: i32 = 3 * 12 + 6;

/// Pitch and instrument of a note block.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoteblockInfo;

impl NoteblockInfo {
	pub const KEY: &'static str = "noteblocktext";

	/// Scientific pitch name of a note-block note (`0` is `F#3`, `24` is `F#5`).
	///
	/// `None` for notes outside the block's `0..=24` range.
	pub fn pitch_name(note: i32) -> Option<String> {
		if !NOTE.accepts(&note.into()) {
			return None;
		}
		let pitch = LOWEST_PITCH + note;
		Some(format!("{}{}", NOTE_NAMES[pitch.rem_euclid(12) as usize], pitch.div_euclid(12)))
	}
}

impl AnnotationProvider for NoteblockInfo {
	fn applies(&self, ctx: &AnnotationContext<'_>) -> bool {
		ctx.has(&NOTE)
	}

	fn lines(&self, ctx: &AnnotationContext<'_>) -> Option<Vec<String>> {
		let note = ctx.property(&NOTE)?.as_int()?;
		let mut lines = vec![format!("Note: {} ({note})", Self::pitch_name(note)?)];
		if let Some(instrument) = ctx.property(&INSTRUMENT).and_then(|v| v.as_str()) {
			lines.push(format!("Instrument: {instrument}"));
		}
		Some(lines)
	}
}
